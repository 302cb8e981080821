use super::Executor;
use crate::catalog::accessor::CatalogAccessor;
use crate::errors::exec_error::{ExecError, ExecResult};
use crate::storage::engine::{RelationScan, ScanEngine};
use crate::types::catalog_types::Datatype;
use crate::types::filter_types::Operator;
use tracing::{debug, info, warn};

impl<C: CatalogAccessor, E: ScanEngine> Executor<'_, C, E> {
    /// Deletes every tuple of `relation` satisfying `attr_name op value`.
    ///
    /// With no (or an empty) attribute name every tuple is deleted and the
    /// remaining filter arguments are ignored. `attr_type` is the type the
    /// caller believes the attribute has; it must agree with the catalog.
    /// Returns the number of deleted tuples.
    pub fn delete(
        &self,
        relation: &str,
        attr_name: Option<&str>,
        op: Operator,
        attr_type: Datatype,
        value: &str,
    ) -> ExecResult<usize> {
        let mut scan = self.open_scan(relation)?;
        let result = self.delete_matching(&mut scan, relation, attr_name, op, attr_type, value);
        scan.end_scan();

        match &result {
            Ok(deleted) => info!(relation, deleted, "delete completed"),
            Err(err) => warn!(relation, error = %err, "delete aborted"),
        }
        result
    }

    fn delete_matching(
        &self,
        scan: &mut E::Scan,
        relation: &str,
        attr_name: Option<&str>,
        op: Operator,
        attr_type: Datatype,
        value: &str,
    ) -> ExecResult<usize> {
        let predicate = match attr_name.filter(|name| !name.is_empty()) {
            None => None,
            Some(name) => {
                let desc = self.catalog.get_attribute(relation, name)?;
                if desc.attr_type != attr_type {
                    return Err(ExecError::AttributeTypeMismatch {
                        attribute: format!("{relation}.{name}"),
                        detail: format!("declared {} but catalog says {}", attr_type, desc.attr_type),
                    });
                }
                Some(self.predicate(&desc, op, value)?)
            }
        };

        match &predicate {
            Some(p) => debug!(relation, predicate = %p, "starting filtered scan"),
            None => debug!(relation, "starting unconditional scan"),
        }
        scan.start_scan(predicate).map_err(ExecError::ScanStart)?;

        let mut deleted = 0;
        while let Some(rid) = scan.scan_next().map_err(ExecError::Scan)? {
            scan.delete_record().map_err(ExecError::Delete)?;
            debug!(relation, %rid, "record deleted");
            deleted += 1;
        }
        Ok(deleted)
    }
}
