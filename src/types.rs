pub mod catalog_types;
pub mod config_types;
pub mod filter_types;
pub mod page_types;
pub mod storage_types;
