use std::fmt;

/// Physical location of a record: page number and slot within the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rid {
    pub page_no: u32,
    pub slot_no: u16,
}

impl Rid {
    pub fn new(page_no: u32, slot_no: u16) -> Self {
        Self { page_no, slot_no }
    }
}

impl fmt::Display for Rid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.page_no, self.slot_no)
    }
}

/// Typed attribute value converted from external text.
///
/// `Text` always holds exactly the attribute's field width (padded or
/// truncated), so it can be compared against stored fields byte for byte.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(Vec<u8>),
}

// Display implementation for logging and printing values
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(bytes) => {
                let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                write!(f, "\"{}\"", String::from_utf8_lossy(&bytes[..end]))
            }
        }
    }
}

/// Attribute value supplied by the caller of an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrValue {
    pub attr_name: String,
    pub value: String,
}

impl AttrValue {
    pub fn new(attr_name: &str, value: &str) -> Self {
        Self {
            attr_name: attr_name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Reference to an attribute by relation and attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrRef {
    pub rel_name: String,
    pub attr_name: String,
}

impl AttrRef {
    pub fn new(rel_name: &str, attr_name: &str) -> Self {
        Self {
            rel_name: rel_name.to_string(),
            attr_name: attr_name.to_string(),
        }
    }
}
