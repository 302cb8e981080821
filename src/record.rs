//! Conversion between external text and the fixed-width binary layout of
//! relation records.
//!
//! Integers and floats are stored in native byte order at the width the
//! catalog declares for the attribute; strings are stored as padded byte runs
//! with no terminator guarantee.

pub mod codec;
pub mod numeric;

pub use codec::{compare_field, encode, project_field, read_field, write_value};
