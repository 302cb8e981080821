//! Insert, delete and select/project executors.
//!
//! Each operator runs as catalog lookups followed by exactly one scan (or one
//! insertion) with per-record byte work. Scans opened here are closed on
//! every exit path. Nothing is rolled back: tuples already deleted or
//! inserted before a failure stay that way.

pub mod delete;
pub mod insert;
pub mod select;

use crate::catalog::accessor::CatalogAccessor;
use crate::errors::exec_error::{ExecError, ExecResult};
use crate::record::codec::encode;
use crate::storage::engine::ScanEngine;
use crate::types::catalog_types::{AttrDesc, Datatype};
use crate::types::config_types::ExecConfig;
use crate::types::filter_types::{Operator, ScanPredicate};
use crate::types::storage_types::{AttrRef, AttrValue, Rid};

/// Bundles the collaborators an operator needs.
pub struct Executor<'a, C, E> {
    pub catalog: &'a C,
    pub engine: &'a E,
    pub config: ExecConfig,
}

impl<'a, C: CatalogAccessor, E: ScanEngine> Executor<'a, C, E> {
    pub fn new(catalog: &'a C, engine: &'a E) -> Self {
        Self {
            catalog,
            engine,
            config: ExecConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExecConfig) -> Self {
        self.config = config;
        self
    }

    /// Converts `value` to `desc`'s type and builds the matching predicate.
    fn predicate(&self, desc: &AttrDesc, op: Operator, value: &str) -> ExecResult<ScanPredicate> {
        Ok(ScanPredicate {
            offset: desc.attr_offset,
            length: desc.attr_len,
            attr_type: desc.attr_type,
            op,
            value: encode(desc, value, &self.config)?,
        })
    }

    fn open_scan(&self, relation: &str) -> ExecResult<E::Scan> {
        self.engine.open_scan(relation).map_err(ExecError::ScanOpen)
    }
}

/// [`Executor::insert`] with the default configuration.
pub fn insert<C: CatalogAccessor, E: ScanEngine>(
    catalog: &C,
    engine: &E,
    relation: &str,
    attrs: &[AttrValue],
) -> ExecResult<Rid> {
    Executor::new(catalog, engine).insert(relation, attrs)
}

/// [`Executor::delete`] with the default configuration.
pub fn delete<C: CatalogAccessor, E: ScanEngine>(
    catalog: &C,
    engine: &E,
    relation: &str,
    attr_name: Option<&str>,
    op: Operator,
    attr_type: Datatype,
    value: &str,
) -> ExecResult<usize> {
    Executor::new(catalog, engine).delete(relation, attr_name, op, attr_type, value)
}

/// [`Executor::select_project`] with the default configuration.
pub fn select_project<C: CatalogAccessor, E: ScanEngine>(
    catalog: &C,
    engine: &E,
    result: &str,
    projection: &[AttrRef],
    filter: Option<&AttrRef>,
    op: Operator,
    value: &str,
) -> ExecResult<usize> {
    Executor::new(catalog, engine).select_project(result, projection, filter, op, value)
}
