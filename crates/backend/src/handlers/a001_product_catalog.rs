use axum::Json;
use contracts::domain::a001_product_catalog::CatalogEntry;

/// GET /api/catalog
pub async fn list_all() -> Json<Vec<CatalogEntry>> {
    Json(CatalogEntry::all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product_catalog::ProductType;

    #[tokio::test]
    async fn test_catalog_lists_every_product_type() {
        let Json(entries) = list_all().await;
        assert_eq!(entries.len(), 6);

        let codes: Vec<&str> = entries.iter().map(|e| e.code.as_str()).collect();
        let expected: Vec<&str> = ProductType::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes, expected);

        let espinillera = entries.iter().find(|e| e.code == "espinillera").unwrap();
        assert_eq!(espinillera.sizes, vec!["", "CH", "MD", "LG"]);
        assert_eq!(espinillera.colors, vec!["", "blanco", "azul", "negro"]);
    }
}
