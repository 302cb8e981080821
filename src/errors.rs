pub mod catalog_error;
pub mod exec_error;
pub mod storage_error;
