use crate::shared::date_utils::{format_date, parse_input_date, to_input_value};
use contracts::domain::a001_product_catalog::ProductType;
use contracts::domain::a003_order::{Order, OrderSearchQuery};

/// Raw values of the search form controls
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderSearchForm {
    pub nombre_solicitante: String,
    pub tipo_producto: String,
    pub fecha_desde: String,
    pub fecha_hasta: String,
}

fn non_blank(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}

impl OrderSearchForm {
    pub fn to_query(&self) -> OrderSearchQuery {
        OrderSearchQuery {
            nombre_solicitante: non_blank(&self.nombre_solicitante),
            tipo_producto: non_blank(&self.tipo_producto),
            fecha_desde: parse_input_date(&self.fecha_desde),
            fecha_hasta: parse_input_date(&self.fecha_hasta),
        }
    }

    pub fn from_query(query: &OrderSearchQuery) -> Self {
        Self {
            nombre_solicitante: query.nombre_solicitante.clone().unwrap_or_default(),
            tipo_producto: query.tipo_producto.clone().unwrap_or_default(),
            fecha_desde: to_input_value(query.fecha_desde),
            fecha_hasta: to_input_value(query.fecha_hasta),
        }
    }
}

/// One rendered table row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRow {
    pub id: String,
    pub fecha: String,
    pub nombre_solicitante: String,
    pub tipo_producto: String,
    pub talla: String,
    pub color: String,
    pub cantidad: String,
}

impl From<Order> for OrderRow {
    fn from(o: Order) -> Self {
        let tipo_producto = ProductType::from_code(&o.tipo_producto)
            .map(|t| t.display_name().to_string())
            .unwrap_or_else(|| o.tipo_producto.clone());
        Self {
            color: o.color_display().to_string(),
            id: o.id,
            fecha: format_date(o.fecha),
            nombre_solicitante: o.nombre_solicitante,
            tipo_producto,
            talla: o.talla,
            cantidad: o.cantidad.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_form_to_query_skips_blank_fields() {
        let form = OrderSearchForm {
            nombre_solicitante: "  ".into(),
            tipo_producto: "mica".into(),
            fecha_desde: "2024-05-01".into(),
            fecha_hasta: String::new(),
        };
        let q = form.to_query();
        assert_eq!(q.nombre_solicitante, None);
        assert_eq!(q.tipo_producto.as_deref(), Some("mica"));
        assert_eq!(q.fecha_desde, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(q.to_query_string(), "tipo_producto=mica&fecha_desde=2024-05-01");
        assert_eq!(OrderSearchForm::from_query(&q).fecha_desde, "2024-05-01");
    }

    #[test]
    fn test_row_renders_missing_color_as_na() {
        let order = Order {
            id: "a".into(),
            fecha: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            nombre_solicitante: "Ana".into(),
            tipo_producto: "mica".into(),
            talla: "Unitalla".into(),
            color: None,
            cantidad: 3,
        };
        let row = OrderRow::from(order);
        assert_eq!(row.color, "N/A");
        assert_eq!(row.fecha, "10/05/2024");
        assert_eq!(row.tipo_producto, "Mica");
        assert_eq!(row.cantidad, "3");
    }
}
