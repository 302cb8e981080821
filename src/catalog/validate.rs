use crate::consts::catalog_consts::{CATALOG_VERSION, PAGE_SIZE};
use crate::consts::page_consts::MAX_RECORD_SIZE;
use crate::errors::catalog_error::CatalogError;
use crate::types::catalog_types::{Catalog, RelationMeta};
use std::collections::HashSet;

/// Relation names double as file names, so keep them to `[A-Za-z0-9_]`.
pub fn validate_relation_name(name: &str) -> Result<(), CatalogError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CatalogError::Invalid(format!(
            "invalid relation name '{name}'"
        )));
    }
    Ok(())
}

/// Checks attribute names, widths and the packing invariant: attributes
/// are laid out back to back from offset 0 and cover the record exactly.
pub fn validate_relation(name: &str, rel: &RelationMeta) -> Result<(), CatalogError> {
    validate_relation_name(name)?;

    let mut names = HashSet::new();
    let mut expected_offset = 0;
    for a in &rel.attrs {
        if a.attr_name.is_empty() {
            return Err(CatalogError::Invalid(format!(
                "empty attribute name in relation {name}"
            )));
        }
        if !names.insert(a.attr_name.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "duplicate attribute '{}' in relation {}",
                a.attr_name, name
            )));
        }
        if a.rel_name != name {
            return Err(CatalogError::Invalid(format!(
                "attribute '{}' claims relation {} but is listed under {}",
                a.attr_name, a.rel_name, name
            )));
        }
        if !a.attr_type.supports_len(a.attr_len) {
            return Err(CatalogError::Invalid(format!(
                "attribute '{}' in relation {}: {} of {} bytes is not supported",
                a.attr_name, name, a.attr_type, a.attr_len
            )));
        }
        if a.attr_offset != expected_offset {
            return Err(CatalogError::Invalid(format!(
                "attribute '{}' in relation {} starts at {}, expected {}",
                a.attr_name, name, a.attr_offset, expected_offset
            )));
        }
        expected_offset = a.end();
    }

    if expected_offset != rel.record_len {
        return Err(CatalogError::Invalid(format!(
            "relation {} has record length {} but attributes cover {}",
            name, rel.record_len, expected_offset
        )));
    }
    if rel.record_len > MAX_RECORD_SIZE {
        return Err(CatalogError::Invalid(format!(
            "relation {} record length {} exceeds page capacity {}",
            name, rel.record_len, MAX_RECORD_SIZE
        )));
    }
    Ok(())
}

pub fn validate_catalog(cat: &Catalog) -> Result<(), CatalogError> {
    if cat.version != CATALOG_VERSION {
        return Err(CatalogError::Invalid(format!(
            "unsupported version {}",
            cat.version
        )));
    }
    if cat.page_size != PAGE_SIZE {
        return Err(CatalogError::Invalid(format!(
            "page_size mismatch: catalog={}, expected={}",
            cat.page_size, PAGE_SIZE
        )));
    }

    let mut oids = HashSet::new();
    let mut files = HashSet::new();

    for (name, rel) in &cat.relations {
        if !oids.insert(rel.oid) {
            return Err(CatalogError::Invalid(format!(
                "duplicate oid in relation {name}"
            )));
        }
        if rel.oid >= cat.next_rel_oid {
            return Err(CatalogError::Invalid(format!(
                "relation {name} has oid {} beyond next oid {}",
                rel.oid, cat.next_rel_oid
            )));
        }
        if !files.insert(rel.file.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "file reused by multiple relations: {}",
                rel.file
            )));
        }
        validate_relation(name, rel)?;
    }
    Ok(())
}
