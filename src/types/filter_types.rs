use super::catalog_types::Datatype;
use super::storage_types::Value;
use std::cmp::Ordering;
use std::fmt;

/// Enumerates supported comparison operators for scan predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    /// Applies the operator to the ordering of `field` relative to the
    /// comparison value. `None` (unordered floats) only satisfies `Ne`.
    pub fn holds(self, ord: Option<Ordering>) -> bool {
        let Some(ord) = ord else {
            return self == Operator::Ne;
        };
        match self {
            Operator::Eq => ord == Ordering::Equal,
            Operator::Ne => ord != Ordering::Equal,
            Operator::Lt => ord == Ordering::Less,
            Operator::Le => ord != Ordering::Greater,
            Operator::Gt => ord == Ordering::Greater,
            Operator::Ge => ord != Ordering::Less,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        };
        f.write_str(s)
    }
}

/// Single-attribute filter evaluated by a scan against each record.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanPredicate {
    pub offset: usize,
    pub length: usize,
    pub attr_type: Datatype,
    pub op: Operator,
    pub value: Value,
}

impl fmt::Display for ScanPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}] {} {} {}",
            self.offset,
            self.offset + self.length,
            self.attr_type,
            self.op,
            self.value
        )
    }
}
