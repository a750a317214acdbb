pub mod aggregate;

pub use aggregate::{Order, OrderSearchQuery, COLOR_NOT_APPLICABLE};
