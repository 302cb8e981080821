#![allow(dead_code)]

use minirel::{AttrSpec, AttrValue, CatalogManager, Rid};
use std::collections::BTreeSet;
use tempfile::TempDir;

/// Fresh data directory with `Employees(id INTEGER(4), name STRING(10))`.
pub fn employees_db() -> (TempDir, CatalogManager) {
    let dir = TempDir::new().unwrap();
    let mut catalog = CatalogManager::open(dir.path()).unwrap();
    catalog
        .create_relation(
            "Employees",
            &[AttrSpec::integer("id"), AttrSpec::string("name", 10)],
        )
        .unwrap();
    (dir, catalog)
}

pub fn employee(id: &str, name: &str) -> Vec<AttrValue> {
    vec![AttrValue::new("id", id), AttrValue::new("name", name)]
}

/// Expected bytes of an `Employees` record.
pub fn employee_bytes(id: i32, name: &str) -> Vec<u8> {
    let mut bytes = id.to_ne_bytes().to_vec();
    let mut field = [0u8; 10];
    field[..name.len()].copy_from_slice(name.as_bytes());
    bytes.extend_from_slice(&field);
    bytes
}

pub fn records(catalog: &CatalogManager, relation: &str) -> Vec<(Rid, Vec<u8>)> {
    catalog.heap_file(relation).unwrap().scan_all().unwrap()
}

pub fn rids(catalog: &CatalogManager, relation: &str) -> BTreeSet<Rid> {
    records(catalog, relation).into_iter().map(|(rid, _)| rid).collect()
}
