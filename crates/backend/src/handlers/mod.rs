pub mod a001_product_catalog;
pub mod a002_equipment_registration;
pub mod a003_order;
