pub mod accessor;
pub mod catalog_manager;
pub mod io;
pub mod validate;

pub use accessor::CatalogAccessor;
pub use catalog_manager::CatalogManager;
