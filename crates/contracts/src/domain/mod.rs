pub mod a001_work_order;
pub mod a002_material;
pub mod a003_production_entry;
pub mod common;
