use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Declared type of an attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Datatype {
    String,
    Integer,
    Float,
}

impl Datatype {
    /// Whether a field of `len` bytes can hold a value of this type.
    pub fn supports_len(self, len: usize) -> bool {
        match self {
            Datatype::Integer => matches!(len, 1 | 2 | 4 | 8),
            Datatype::Float => matches!(len, 4 | 8),
            Datatype::String => len > 0,
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Datatype::String => "STRING",
            Datatype::Integer => "INTEGER",
            Datatype::Float => "FLOAT",
        })
    }
}

/// Catalog entry locating one attribute inside a relation's records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttrDesc {
    pub rel_name: String,
    pub attr_name: String,
    #[serde(rename = "type")]
    pub attr_type: Datatype,
    pub attr_offset: usize,
    pub attr_len: usize,
}

impl AttrDesc {
    /// First byte past the attribute.
    pub fn end(&self) -> usize {
        self.attr_offset + self.attr_len
    }
}

/// Attribute definition used when creating a relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrSpec {
    pub name: String,
    pub attr_type: Datatype,
    pub len: usize,
}

impl AttrSpec {
    pub fn new(name: &str, attr_type: Datatype, len: usize) -> Self {
        Self {
            name: name.to_string(),
            attr_type,
            len,
        }
    }

    /// 4-byte integer attribute.
    pub fn integer(name: &str) -> Self {
        Self::new(name, Datatype::Integer, 4)
    }

    /// 4-byte float attribute.
    pub fn float(name: &str) -> Self {
        Self::new(name, Datatype::Float, 4)
    }

    pub fn string(name: &str, len: usize) -> Self {
        Self::new(name, Datatype::String, len)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationMeta {
    pub oid: u32,
    pub file: String,         // heap file name, relative to the data directory
    pub attrs: Vec<AttrDesc>, // in declaration (and physical) order
    pub record_len: usize,
}

impl RelationMeta {
    pub fn attr(&self, name: &str) -> Option<&AttrDesc> {
        self.attrs.iter().find(|a| a.attr_name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub version: u32,
    pub page_size: u32,
    pub next_rel_oid: u32,
    pub relations: BTreeMap<String, RelationMeta>,
}

impl Catalog {
    pub fn empty(version: u32, page_size: u32) -> Self {
        Self {
            version,
            page_size,
            next_rel_oid: 1,
            relations: BTreeMap::new(),
        }
    }

    pub fn has_relation(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }
}
