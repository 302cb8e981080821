pub mod catalog_consts;
pub mod page_consts;
