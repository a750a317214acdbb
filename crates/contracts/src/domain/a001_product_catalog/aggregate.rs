use serde::{Deserialize, Serialize};

// ============================================================================
// Product type
// ============================================================================

/// Equipment types that can be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Careta,
    Uniforme,
    Antebrazera,
    Codera,
    Espinillera,
    Mica,
}

const PROTECTOR_SIZES: &[&str] = &["", "CH", "MD", "LG"];
const PROTECTOR_COLORS: &[&str] = &["", "blanco", "azul", "negro"];
const NO_COLORS: &[&str] = &[];

impl ProductType {
    /// Wire name used in forms, query strings and JSON payloads
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Careta => "careta",
            ProductType::Uniforme => "uniforme",
            ProductType::Antebrazera => "antebrazera",
            ProductType::Codera => "codera",
            ProductType::Espinillera => "espinillera",
            ProductType::Mica => "mica",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Careta => "Careta",
            ProductType::Uniforme => "Uniforme",
            ProductType::Antebrazera => "Antebrazera",
            ProductType::Codera => "Codera",
            ProductType::Espinillera => "Espinillera",
            ProductType::Mica => "Mica",
        }
    }

    /// Size options in display order. A leading `""` is the placeholder option.
    pub fn sizes(&self) -> &'static [&'static str] {
        match self {
            ProductType::Careta => &["Talla Única"],
            ProductType::Uniforme => &["", "00", "0", "1", "2", "3"],
            ProductType::Antebrazera | ProductType::Codera | ProductType::Espinillera => {
                PROTECTOR_SIZES
            }
            ProductType::Mica => &["Unitalla"],
        }
    }

    /// Color options in display order, empty when the product comes in one color
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            ProductType::Antebrazera | ProductType::Espinillera => PROTECTOR_COLORS,
            ProductType::Careta | ProductType::Uniforme | ProductType::Codera | ProductType::Mica => {
                NO_COLORS
            }
        }
    }

    pub fn has_colors(&self) -> bool {
        !self.colors().is_empty()
    }

    /// Whether `size` is a real (non-placeholder) option of this type
    pub fn accepts_size(&self, size: &str) -> bool {
        !size.is_empty() && self.sizes().contains(&size)
    }

    /// Whether `color` is a real (non-placeholder) option of this type
    pub fn accepts_color(&self, color: &str) -> bool {
        !color.is_empty() && self.colors().contains(&color)
    }

    pub fn all() -> Vec<ProductType> {
        vec![
            ProductType::Careta,
            ProductType::Uniforme,
            ProductType::Antebrazera,
            ProductType::Codera,
            ProductType::Espinillera,
            ProductType::Mica,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "careta" => Some(ProductType::Careta),
            "uniforme" => Some(ProductType::Uniforme),
            "antebrazera" => Some(ProductType::Antebrazera),
            "codera" => Some(ProductType::Codera),
            "espinillera" => Some(ProductType::Espinillera),
            "mica" => Some(ProductType::Mica),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Lookup by wire name
// ============================================================================

/// Size options for a product type given by wire name; unknown names yield no options
pub fn size_options(code: &str) -> &'static [&'static str] {
    ProductType::from_code(code).map(|t| t.sizes()).unwrap_or(&[])
}

/// Color options for a product type given by wire name; unknown names yield no options
pub fn color_options(code: &str) -> &'static [&'static str] {
    ProductType::from_code(code).map(|t| t.colors()).unwrap_or(&[])
}

/// Serializable row of the catalog, served by `GET /api/catalog`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: String,
    pub display_name: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl From<ProductType> for CatalogEntry {
    fn from(t: ProductType) -> Self {
        Self {
            code: t.code().to_string(),
            display_name: t.display_name().to_string(),
            sizes: t.sizes().iter().map(|s| s.to_string()).collect(),
            colors: t.colors().iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CatalogEntry {
    pub fn all() -> Vec<CatalogEntry> {
        ProductType::all().into_iter().map(Into::into).collect()
    }
}
