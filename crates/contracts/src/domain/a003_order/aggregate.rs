use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Shown in place of a color for products that come in a single color
pub const COLOR_NOT_APPLICABLE: &str = "N/A";

// ============================================================================
// Order (read model)
// ============================================================================

/// One requested product line as listed by `GET /pedidos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub fecha: NaiveDate,
    pub nombre_solicitante: String,
    pub tipo_producto: String,
    pub talla: String,
    #[serde(default)]
    pub color: Option<String>,
    pub cantidad: u32,
}

impl Order {
    pub fn color_display(&self) -> &str {
        match self.color.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => COLOR_NOT_APPLICABLE,
        }
    }
}

// ============================================================================
// Search query
// ============================================================================

/// Filters of the order search form, carried as a URL query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSearchQuery {
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub nombre_solicitante: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub tipo_producto: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_desde: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_hasta: Option<NaiveDate>,
}

impl OrderSearchQuery {
    pub fn is_empty(&self) -> bool {
        self.nombre_solicitante.is_none()
            && self.tipo_producto.is_none()
            && self.fecha_desde.is_none()
            && self.fecha_hasta.is_none()
    }

    /// Query string without the leading `?`; empty filters are omitted
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).expect("flat struct of strings and dates always serializes")
    }

    /// Parse a query string, with or without the leading `?`
    pub fn from_query_string(query: &str) -> Result<Self, String> {
        serde_qs::from_str(query.trim_start_matches('?')).map_err(|e| e.to_string())
    }

    pub fn matches(&self, order: &Order) -> bool {
        if let Some(name) = &self.nombre_solicitante {
            let needle = name.trim().to_lowercase();
            if !order.nombre_solicitante.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(tipo) = &self.tipo_producto {
            if &order.tipo_producto != tipo {
                return false;
            }
        }
        if let Some(from) = self.fecha_desde {
            if order.fecha < from {
                return false;
            }
        }
        if let Some(to) = self.fecha_hasta {
            if order.fecha > to {
                return false;
            }
        }
        true
    }
}

/// Treats an empty form field as an absent filter
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(nombre: &str, tipo: &str, fecha: &str, color: Option<&str>) -> Order {
        Order {
            id: "1".into(),
            fecha: NaiveDate::parse_from_str(fecha, "%Y-%m-%d").unwrap(),
            nombre_solicitante: nombre.into(),
            tipo_producto: tipo.into(),
            talla: "CH".into(),
            color: color.map(Into::into),
            cantidad: 1,
        }
    }

    #[test]
    fn test_color_display() {
        assert_eq!(order("Ana", "mica", "2024-05-01", None).color_display(), "N/A");
        assert_eq!(order("Ana", "mica", "2024-05-01", Some("")).color_display(), "N/A");
        assert_eq!(
            order("Ana", "espinillera", "2024-05-01", Some("azul")).color_display(),
            "azul"
        );
    }

    #[test]
    fn test_query_string_omits_empty_filters() {
        let q = OrderSearchQuery {
            nombre_solicitante: Some("ana".into()),
            tipo_producto: None,
            fecha_desde: NaiveDate::from_ymd_opt(2024, 5, 1),
            fecha_hasta: None,
        };
        let s = q.to_query_string();
        assert_eq!(s, "nombre_solicitante=ana&fecha_desde=2024-05-01");
        assert_eq!(OrderSearchQuery::from_query_string(&format!("?{}", s)), Ok(q));
        assert_eq!(OrderSearchQuery::default().to_query_string(), "");
    }

    #[test]
    fn test_query_string_escapes_reserved_characters() {
        let q = OrderSearchQuery {
            nombre_solicitante: Some("Ana López & Co+".into()),
            tipo_producto: Some("mica".into()),
            fecha_desde: NaiveDate::from_ymd_opt(2024, 5, 1),
            fecha_hasta: None,
        };
        let s = q.to_query_string();
        assert!(!s.contains(' '), "{}", s);
        assert_eq!(OrderSearchQuery::from_query_string(&s), Ok(q));
    }

    #[test]
    fn test_blank_fields_parse_as_absent() {
        let q = OrderSearchQuery::from_query_string(
            "nombre_solicitante=&tipo_producto=mica&fecha_desde=&fecha_hasta=",
        )
        .unwrap();
        assert_eq!(q.tipo_producto.as_deref(), Some("mica"));
        assert!(q.nombre_solicitante.is_none());
        assert!(q.fecha_desde.is_none());
        assert!(OrderSearchQuery::from_query_string("").unwrap().is_empty());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(OrderSearchQuery::from_query_string("fecha_desde=mayo").is_err());
    }

    #[test]
    fn test_matches() {
        let o = order("Ana López", "espinillera", "2024-05-10", Some("azul"));
        assert!(OrderSearchQuery::default().matches(&o));

        let by_name = OrderSearchQuery {
            nombre_solicitante: Some("lópez".into()),
            ..Default::default()
        };
        assert!(by_name.matches(&o));

        let by_type = OrderSearchQuery {
            tipo_producto: Some("mica".into()),
            ..Default::default()
        };
        assert!(!by_type.matches(&o));

        let by_range = OrderSearchQuery {
            fecha_desde: NaiveDate::from_ymd_opt(2024, 5, 10),
            fecha_hasta: NaiveDate::from_ymd_opt(2024, 5, 10),
            ..Default::default()
        };
        assert!(by_range.matches(&o));

        let after = OrderSearchQuery {
            fecha_desde: NaiveDate::from_ymd_opt(2024, 5, 11),
            ..Default::default()
        };
        assert!(!after.matches(&o));
    }
}
