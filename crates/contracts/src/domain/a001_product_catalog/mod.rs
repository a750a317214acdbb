pub mod aggregate;
pub mod cascade;

pub use aggregate::{color_options, size_options, CatalogEntry, ProductType};
pub use cascade::CascadeState;
