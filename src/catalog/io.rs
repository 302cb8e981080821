use super::validate::validate_catalog;
use crate::consts::catalog_consts::{CATALOG_FILE, CATALOG_VERSION, PAGE_SIZE};
use crate::errors::catalog_error::CatalogError;
use crate::types::catalog_types::Catalog;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads `catalog.json` from `data_dir`, or writes a fresh empty catalog when
/// the directory has none yet.
pub fn load_or_create_catalog(data_dir: &Path) -> Result<Catalog, CatalogError> {
    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(CATALOG_FILE);
    if path.exists() {
        return read_catalog(&path);
    }

    let cat = Catalog::empty(CATALOG_VERSION, PAGE_SIZE);
    save_catalog_atomic(data_dir, &cat)?;
    debug!(path = %path.display(), "created empty catalog");
    Ok(cat)
}

fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let reader = BufReader::new(File::open(path)?);
    let cat: Catalog = serde_json::from_reader(reader)?;
    validate_catalog(&cat)?;
    Ok(cat)
}

/// Writes the catalog to a temp file in `data_dir` and renames it over the
/// previous one, so a crash leaves either the old or the new catalog.
pub fn save_catalog_atomic(data_dir: &Path, cat: &Catalog) -> Result<(), CatalogError> {
    let json = serde_json::to_vec_pretty(cat)?;

    let mut tmp = NamedTempFile::new_in(data_dir)?;
    tmp.write_all(&json)?;
    tmp.as_file().sync_all()?;
    tmp.persist(data_dir.join(CATALOG_FILE))
        .map_err(|e| CatalogError::Io(e.error))?;

    // make the rename itself durable
    #[cfg(unix)]
    File::open(data_dir)?.sync_all()?;
    Ok(())
}
