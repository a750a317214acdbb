//! Equipment registration form
//!
//! MVVM split:
//! - model.rs: API call
//! - view_model.rs: form state and commands
//! - view.rs / product_row.rs: Leptos components

mod model;
mod product_row;
mod view;
mod view_model;

pub use view::EquipmentRegistrationForm;
pub use view_model::{apply_submit_result, RegistrationFormViewModel};
