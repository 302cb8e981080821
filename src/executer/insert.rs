use super::Executor;
use crate::catalog::accessor::CatalogAccessor;
use crate::errors::exec_error::{ExecError, ExecResult};
use crate::record::codec::{encode, write_value};
use crate::storage::engine::ScanEngine;
use crate::types::storage_types::{AttrValue, Rid};
use tracing::{debug, info};

impl<C: CatalogAccessor, E: ScanEngine> Executor<'_, C, E> {
    /// Inserts one tuple into `relation`.
    ///
    /// Every schema attribute must be supplied exactly once, matched by exact
    /// name; order of `attrs` does not matter. The record is only handed to
    /// the storage layer once it is fully assembled.
    pub fn insert(&self, relation: &str, attrs: &[AttrValue]) -> ExecResult<Rid> {
        let schema = self.catalog.get_relation_attributes(relation)?;

        // Check if the number of attributes matches
        if attrs.len() != schema.len() {
            return Err(ExecError::BadParameterCount {
                relation: relation.to_string(),
                detail: format!("expected {} values, got {}", schema.len(), attrs.len()),
            });
        }

        let record_len: usize = schema.iter().map(|a| a.attr_len).sum();
        let mut record = vec![0u8; record_len];

        // Fill in the record, one schema attribute at a time
        for desc in &schema {
            let Some(supplied) = attrs.iter().find(|a| a.attr_name == desc.attr_name) else {
                return Err(ExecError::BadParameterCount {
                    relation: relation.to_string(),
                    detail: format!("no value supplied for attribute '{}'", desc.attr_name),
                });
            };
            let value = encode(desc, &supplied.value, &self.config)?;
            write_value(&mut record, desc, &value)?;
        }

        let rid = self
            .engine
            .insert_record(relation, &record)
            .map_err(ExecError::Insert)?;
        debug!(relation, %rid, len = record_len, "record inserted");
        info!(relation, "insert completed");
        Ok(rid)
    }
}
