use super::model;
use crate::shared::api_utils::show_alert;
use contracts::domain::a001_product_catalog::CascadeState;
use contracts::domain::a002_equipment_registration::{
    ProductLineDraft, RegistrationDraft, RegistrationResponse,
};
use leptos::prelude::*;

/// Shown when the request fails before a `{ success, message }` answer arrives
pub const TRANSPORT_ERROR_MESSAGE: &str = "Ocurrió un error al procesar la solicitud.";

/// ViewModel of the equipment registration form
#[derive(Clone, Copy)]
pub struct RegistrationFormViewModel {
    pub draft: RwSignal<RegistrationDraft>,
}

impl RegistrationFormViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(RegistrationDraft::new()),
        }
    }

    pub fn requester(&self) -> Signal<String> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.nombre_solicitante.clone()))
    }

    pub fn set_requester(&self, value: String) {
        self.draft.update(|d| d.nombre_solicitante = value);
    }

    pub fn row_ids(&self) -> Vec<u32> {
        self.draft.with(|d| d.rows.iter().map(|r| r.row_id).collect())
    }

    /// Reactive read of one field of one row; a removed row reads as empty
    pub fn row_field<F>(&self, row_id: u32, field: F) -> Signal<String>
    where
        F: Fn(&ProductLineDraft) -> String + Send + Sync + 'static,
    {
        let draft = self.draft;
        Signal::derive(move || {
            draft.with(|d| {
                d.rows
                    .iter()
                    .find(|r| r.row_id == row_id)
                    .map(&field)
                    .unwrap_or_default()
            })
        })
    }

    /// Options and visibility of a row's size/color/quantity controls
    pub fn row_cascade(&self, row_id: u32) -> Memo<CascadeState> {
        let draft = self.draft;
        Memo::new(move |_| {
            draft.with(|d| {
                d.rows
                    .iter()
                    .find(|r| r.row_id == row_id)
                    .map(|r| r.cascade())
                    .unwrap_or_default()
            })
        })
    }

    pub fn add_row(&self) {
        self.draft.update(|d| {
            d.add_row();
        });
    }

    pub fn remove_row(&self, row_id: u32) {
        self.draft.update(|d| d.remove_row(row_id));
    }

    pub fn update_row(&self, row_id: u32, f: impl FnOnce(&mut ProductLineDraft)) {
        self.draft.update(|d| {
            if let Some(row) = d.row_mut(row_id) {
                f(row);
            }
        });
    }

    /// Assemble the payload and post it; the answer is surfaced with an alert
    pub fn submit_command(&self) {
        let dto = self.draft.with_untracked(|d| d.to_dto());
        log::debug!(
            "submitting registration with {} product(s)",
            dto.productos.len()
        );

        let draft = self.draft;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::submit_registration(&dto).await;
            if let Err(e) = &result {
                log::error!("registration request failed: {}", e);
            }
            let mut message = String::new();
            draft.update(|d| message = apply_submit_result(d, result));
            show_alert(&message);
        });
    }
}

impl Default for RegistrationFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the outcome of a submission to the form and return the alert text.
/// Only an accepted registration clears the form.
pub fn apply_submit_result(
    draft: &mut RegistrationDraft,
    result: Result<RegistrationResponse, String>,
) -> String {
    match result {
        Ok(resp) if resp.success => {
            draft.reset();
            resp.message
        }
        Ok(resp) => resp.message,
        Err(_) => TRANSPORT_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.nombre_solicitante = "Ana".into();
        for tipo in ["espinillera", "mica"] {
            let id = draft.add_row();
            let row = draft.row_mut(id).unwrap();
            row.select_type(tipo);
            row.cantidad = "1".into();
        }
        draft
    }

    #[test]
    fn test_success_clears_form_and_rows() {
        let mut draft = filled_draft();
        let msg = apply_submit_result(&mut draft, Ok(RegistrationResponse::ok("OK")));
        assert_eq!(msg, "OK");
        assert!(draft.nombre_solicitante.is_empty());
        assert!(draft.rows.is_empty());
    }

    #[test]
    fn test_rejection_keeps_form() {
        let mut draft = filled_draft();
        let before = draft.clone();
        let msg = apply_submit_result(
            &mut draft,
            Ok(RegistrationResponse::fail("Debe agregar al menos un producto")),
        );
        assert_eq!(msg, "Debe agregar al menos un producto");
        assert_eq!(draft, before);
    }

    #[test]
    fn test_transport_error_keeps_form() {
        let mut draft = filled_draft();
        let before = draft.clone();
        let msg = apply_submit_result(&mut draft, Err("Failed to send request".into()));
        assert_eq!(msg, TRANSPORT_ERROR_MESSAGE);
        assert_eq!(draft, before);
    }
}
