use super::io::*;
use super::validate::validate_relation;
use crate::consts::catalog_consts::HEAP_FILE_EXT;
use crate::errors::catalog_error::CatalogError;
use crate::storage::heap_file::HeapFile;
use crate::types::catalog_types::{AttrDesc, AttrSpec, Catalog, RelationMeta};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct CatalogManager {
    data_dir: PathBuf, // path where catalog and heap files are stored
    catalog: Catalog,  // in-memory catalog state
}

impl CatalogManager {
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, CatalogError> {
        // Load catalog if exists, otherwise create new one
        let catalog = load_or_create_catalog(data_dir.as_ref())?;
        debug!(
            dir = %data_dir.as_ref().display(),
            relations = catalog.relations.len(),
            "catalog opened"
        );

        Ok(Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            catalog,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn relation(&self, name: &str) -> Result<&RelationMeta, CatalogError> {
        self.catalog
            .relations
            .get(name)
            .ok_or_else(|| CatalogError::RelationNotFound(name.to_string()))
    }

    /// Relation names in catalog order.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.catalog.relations.keys().map(String::as_str)
    }

    /// Heap file backing `name`.
    pub fn heap_file(&self, name: &str) -> Result<HeapFile, CatalogError> {
        let rel = self.relation(name)?;
        Ok(HeapFile::open(self.data_dir.join(&rel.file))?)
    }

    /// Registers a relation whose attributes are packed left to right in
    /// `attrs` order, and creates its empty heap file.
    pub fn create_relation(
        &mut self,
        name: &str,
        attrs: &[AttrSpec],
    ) -> Result<&RelationMeta, CatalogError> {
        // Prevent duplicate relation creation
        if self.catalog.has_relation(name) {
            return Err(CatalogError::RelationExists(name.into()));
        }

        // Lay out attributes back to back
        let mut offset = 0;
        let mut descs = Vec::with_capacity(attrs.len());
        for spec in attrs {
            descs.push(AttrDesc {
                rel_name: name.to_string(),
                attr_name: spec.name.clone(),
                attr_type: spec.attr_type,
                attr_offset: offset,
                attr_len: spec.len,
            });
            offset += spec.len;
        }

        let oid = self.catalog.next_rel_oid;
        let rel = RelationMeta {
            oid,
            file: format!("{name}.{HEAP_FILE_EXT}"),
            attrs: descs,
            record_len: offset,
        };
        validate_relation(name, &rel)?;

        // Heap file first, so a failure leaves the catalog untouched
        HeapFile::create(self.data_dir.join(&rel.file))?;

        self.catalog.next_rel_oid += 1;
        self.catalog.relations.insert(name.to_string(), rel);

        // Persist catalog changes to disk atomically
        save_catalog_atomic(&self.data_dir, &self.catalog)?;
        info!(relation = name, oid, record_len = offset, "relation created");

        self.relation(name)
    }

    /// Drops the relation from the catalog and deletes its heap file.
    pub fn destroy_relation(&mut self, name: &str) -> Result<(), CatalogError> {
        let Some(rel) = self.catalog.relations.remove(name) else {
            return Err(CatalogError::RelationNotFound(name.to_string()));
        };
        save_catalog_atomic(&self.data_dir, &self.catalog)?;

        let path = self.data_dir.join(&rel.file);
        if path.exists() {
            HeapFile { path }.destroy()?;
        }
        info!(relation = name, "relation destroyed");
        Ok(())
    }
}
