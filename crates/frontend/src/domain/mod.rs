pub mod a002_equipment_registration;
pub mod a003_order;
