use axum::extract::Query;
use axum::Json;
use contracts::domain::a003_order::{Order, OrderSearchQuery};

use crate::domain::a003_order;

/// GET /pedidos?nombre_solicitante=..&tipo_producto=..&fecha_desde=..&fecha_hasta=..
pub async fn list(
    Query(query): Query<OrderSearchQuery>,
) -> Result<Json<Vec<Order>>, axum::http::StatusCode> {
    a003_order::service::list(&query).await.map(Json).map_err(|e| {
        tracing::error!("Failed to list orders: {}", e);
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, Uri};
    use axum::response::IntoResponse;
    use chrono::NaiveDate;

    fn parse(uri: &str) -> Result<Query<OrderSearchQuery>, axum::extract::rejection::QueryRejection> {
        let uri: Uri = uri.parse().unwrap();
        Query::<OrderSearchQuery>::try_from_uri(&uri)
    }

    #[test]
    fn test_query_string_from_frontend_parses() {
        let q = OrderSearchQuery {
            nombre_solicitante: Some("Ana López & Co+".into()),
            tipo_producto: Some("mica".into()),
            fecha_desde: NaiveDate::from_ymd_opt(2024, 5, 1),
            fecha_hasta: None,
        };
        let Query(parsed) = parse(&format!("/pedidos?{}", q.to_query_string())).unwrap();
        assert_eq!(parsed, q);
    }

    #[test]
    fn test_blank_fields_mean_no_filter() {
        let Query(parsed) =
            parse("/pedidos?nombre_solicitante=&tipo_producto=&fecha_desde=&fecha_hasta=")
                .unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_malformed_date_is_bad_request() {
        let rejection = parse("/pedidos?fecha_desde=mayo").unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
