use super::page_consts;

pub const DATA_DIR: &str = "data";              // default data directory
pub const CATALOG_FILE: &str = "catalog.json";  // catalog file inside the data directory
pub const CATALOG_VERSION: u32 = 1;             // on-disk catalog format version
pub const HEAP_FILE_EXT: &str = "tbl";          // extension of relation heap files
pub const PAGE_SIZE: u32 = page_consts::PAGE_SIZE as u32;
