pub mod aggregate;
pub mod draft;

pub use aggregate::{EquipmentRegistrationDto, ProductLine, RegistrationResponse, MAX_CANTIDAD};
pub use draft::{ProductLineDraft, RegistrationDraft};
