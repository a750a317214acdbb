//! Form state of the equipment registration page
//!
//! Rows hold exactly what the controls hold (strings); assembling the payload
//! drops every row that is not complete.

use super::aggregate::{EquipmentRegistrationDto, ProductLine};
use crate::domain::a001_product_catalog::{CascadeState, ProductType};

/// One product row of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductLineDraft {
    pub row_id: u32,
    pub tipo_producto: String,
    pub talla: String,
    pub color: String,
    pub cantidad: String,
}

impl ProductLineDraft {
    pub fn new(row_id: u32) -> Self {
        Self {
            row_id,
            ..Default::default()
        }
    }

    /// Options and visibility of this row's dependent controls
    pub fn cascade(&self) -> CascadeState {
        CascadeState::for_type(&self.tipo_producto)
    }

    /// Apply a product type selection: size and color are repopulated,
    /// so previous choices are discarded.
    pub fn select_type(&mut self, code: &str) {
        self.tipo_producto = code.to_string();
        self.talla = CascadeState::for_type(code).default_size();
        self.color.clear();
    }

    /// The submitted line, or `None` when type, size or quantity is missing
    pub fn to_line(&self) -> Option<ProductLine> {
        let tipo = self.tipo_producto.trim();
        let talla = self.talla.trim();
        let cantidad = self.cantidad.trim();
        if tipo.is_empty() || talla.is_empty() || cantidad.is_empty() {
            return None;
        }
        let cantidad = cantidad.parse::<u32>().ok().filter(|q| *q > 0)?;

        let has_colors = ProductType::from_code(tipo)
            .map(|t| t.has_colors())
            .unwrap_or(false);
        let color = match self.color.trim() {
            c if has_colors && !c.is_empty() => Some(c.to_string()),
            _ => None,
        };

        Some(ProductLine {
            tipo_producto: tipo.to_string(),
            talla: talla.to_string(),
            color,
            cantidad,
        })
    }
}

/// Whole registration form: requester plus any number of product rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub nombre_solicitante: String,
    pub rows: Vec<ProductLineDraft>,
    next_row_id: u32,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty row and return its id
    pub fn add_row(&mut self) -> u32 {
        let row_id = self.next_row_id;
        self.next_row_id += 1;
        self.rows.push(ProductLineDraft::new(row_id));
        row_id
    }

    /// Detach the row with `row_id`; other rows are untouched
    pub fn remove_row(&mut self, row_id: u32) {
        self.rows.retain(|r| r.row_id != row_id);
    }

    pub fn row_mut(&mut self, row_id: u32) -> Option<&mut ProductLineDraft> {
        self.rows.iter_mut().find(|r| r.row_id == row_id)
    }

    pub fn to_dto(&self) -> EquipmentRegistrationDto {
        EquipmentRegistrationDto {
            nombre_solicitante: self.nombre_solicitante.trim().to_string(),
            productos: self.rows.iter().filter_map(|r| r.to_line()).collect(),
        }
    }

    /// Clear the requester and remove every dynamic row
    pub fn reset(&mut self) {
        self.nombre_solicitante.clear();
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(draft: &mut RegistrationDraft, tipo: &str, talla: &str, color: &str, qty: &str) -> u32 {
        let id = draft.add_row();
        let row = draft.row_mut(id).unwrap();
        row.select_type(tipo);
        if !talla.is_empty() {
            row.talla = talla.into();
        }
        row.color = color.into();
        row.cantidad = qty.into();
        id
    }

    #[test]
    fn test_rows_are_independent() {
        let mut draft = RegistrationDraft::new();
        let a = draft.add_row();
        let b = draft.add_row();
        assert_ne!(a, b);

        draft.row_mut(a).unwrap().select_type("espinillera");
        draft.row_mut(b).unwrap().select_type("mica");

        assert!(draft.rows[0].cascade().color_visible);
        assert!(!draft.rows[1].cascade().color_visible);
        assert_eq!(draft.rows[1].talla, "Unitalla");
    }

    #[test]
    fn test_select_type_clears_dependent_fields() {
        let mut row = ProductLineDraft::new(0);
        row.select_type("espinillera");
        row.talla = "LG".into();
        row.color = "negro".into();

        row.select_type("uniforme");
        assert_eq!(row.talla, "");
        assert_eq!(row.color, "");
    }

    #[test]
    fn test_incomplete_rows_are_excluded() {
        let mut draft = RegistrationDraft::new();
        draft.nombre_solicitante = " Ana ".into();
        filled(&mut draft, "espinillera", "MD", "azul", "2");
        filled(&mut draft, "espinillera", "", "azul", "2");
        filled(&mut draft, "", "", "", "1");
        filled(&mut draft, "codera", "CH", "", "");
        filled(&mut draft, "codera", "CH", "", "0");

        let dto = draft.to_dto();
        assert_eq!(dto.nombre_solicitante, "Ana");
        assert_eq!(dto.productos.len(), 1);
        assert_eq!(dto.productos[0].tipo_producto, "espinillera");
        assert_eq!(dto.productos[0].color.as_deref(), Some("azul"));
        assert_eq!(dto.productos[0].cantidad, 2);
    }

    #[test]
    fn test_color_absent_without_catalog_colors() {
        let mut draft = RegistrationDraft::new();
        filled(&mut draft, "mica", "", "", "4");
        let dto = draft.to_dto();
        assert_eq!(dto.productos[0].talla, "Unitalla");
        assert_eq!(dto.productos[0].color, None);
    }

    #[test]
    fn test_removing_a_row_removes_only_its_line() {
        let mut draft = RegistrationDraft::new();
        filled(&mut draft, "careta", "", "", "1");
        let middle = filled(&mut draft, "uniforme", "2", "", "3");
        filled(&mut draft, "mica", "", "", "5");

        draft.remove_row(middle);

        let tipos: Vec<String> = draft
            .to_dto()
            .productos
            .into_iter()
            .map(|p| p.tipo_producto)
            .collect();
        assert_eq!(tipos, vec!["careta", "mica"]);
    }

    #[test]
    fn test_reset_clears_rows_but_keeps_ids_unique() {
        let mut draft = RegistrationDraft::new();
        draft.nombre_solicitante = "Ana".into();
        let first = draft.add_row();
        draft.reset();

        assert!(draft.nombre_solicitante.is_empty());
        assert!(draft.rows.is_empty());
        assert_ne!(draft.add_row(), first);
    }
}
