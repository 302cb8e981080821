use super::Executor;
use crate::catalog::accessor::CatalogAccessor;
use crate::errors::exec_error::{ExecError, ExecResult};
use crate::errors::storage_error::StorageError;
use crate::record::codec::project_field;
use crate::storage::engine::{RelationScan, ScanEngine};
use crate::types::catalog_types::AttrDesc;
use crate::types::filter_types::Operator;
use crate::types::storage_types::AttrRef;
use tracing::{debug, info, warn};

impl<C: CatalogAccessor, E: ScanEngine> Executor<'_, C, E> {
    /// Scans one relation, keeps the tuples satisfying `filter op value`
    /// (all of them when `filter` is `None`), projects them onto
    /// `projection` and appends the results to the existing relation `result`.
    ///
    /// Output records are the projected fields concatenated in projection
    /// order. The scanned relation is the filter attribute's relation, or the
    /// first projected attribute's relation without a filter. Returns the
    /// number of tuples written.
    pub fn select_project(
        &self,
        result: &str,
        projection: &[AttrRef],
        filter: Option<&AttrRef>,
        op: Operator,
        value: &str,
    ) -> ExecResult<usize> {
        // Get attribute info for the projection list and the filter
        let proj_descs = projection
            .iter()
            .map(|p| self.catalog.get_attribute(&p.rel_name, &p.attr_name))
            .collect::<Result<Vec<_>, _>>()?;
        let filter_desc = filter
            .map(|f| self.catalog.get_attribute(&f.rel_name, &f.attr_name))
            .transpose()?;

        let source = match (&filter_desc, proj_descs.first()) {
            (Some(f), _) => f.rel_name.clone(),
            (None, Some(p)) => p.rel_name.clone(),
            (None, None) => {
                info!(result, "empty projection without filter, nothing to scan");
                return Ok(0);
            }
        };

        // single-relation scope: every projected field must come from the scan
        if let Some(stray) = proj_descs.iter().find(|d| d.rel_name != source) {
            return Err(ExecError::AttributeNotFound {
                relation: source,
                attribute: format!("{}.{}", stray.rel_name, stray.attr_name),
            });
        }

        let mut scan = self.open_scan(&source)?;
        let outcome = self.project_matching(
            &mut scan,
            result,
            &proj_descs,
            filter_desc.as_ref(),
            op,
            value,
        );
        scan.end_scan();

        match &outcome {
            Ok(count) => info!(source = %source, result, tuples = count, "selection completed"),
            Err(err) => warn!(source = %source, result, error = %err, "selection aborted"),
        }
        outcome
    }

    fn project_matching(
        &self,
        scan: &mut E::Scan,
        result: &str,
        proj_descs: &[AttrDesc],
        filter_desc: Option<&AttrDesc>,
        op: Operator,
        value: &str,
    ) -> ExecResult<usize> {
        let predicate = filter_desc
            .map(|desc| self.predicate(desc, op, value))
            .transpose()?;
        match &predicate {
            Some(p) => debug!(result, predicate = %p, "starting filtered scan"),
            None => debug!(result, "starting unconditional scan"),
        }
        scan.start_scan(predicate).map_err(ExecError::ScanStart)?;

        // Calculate the output record length
        let reclen: usize = proj_descs.iter().map(|d| d.attr_len).sum();
        let mut output = vec![0u8; reclen];
        let mut produced = 0;

        while let Some(rid) = scan.scan_next().map_err(ExecError::Scan)? {
            let record = scan.get_record().map_err(ExecError::Scan)?;

            // Perform projection by copying only the requested attributes
            let mut out_offset = 0;
            for desc in proj_descs {
                if !project_field(record, desc.attr_offset, desc.attr_len, &mut output, out_offset) {
                    return Err(ExecError::Scan(StorageError::RecordTooShort {
                        rid,
                        len: record.len(),
                        needed: desc.end(),
                    }));
                }
                out_offset += desc.attr_len;
            }

            self.engine
                .insert_record(result, &output)
                .map_err(ExecError::Insert)?;
            produced += 1;
        }
        Ok(produced)
    }
}
