use super::numeric::{parse_float_prefix, parse_int_prefix};
use crate::errors::exec_error::{ExecError, ExecResult};
use crate::types::catalog_types::{AttrDesc, Datatype};
use crate::types::config_types::ExecConfig;
use crate::types::storage_types::Value;
use std::cmp::Ordering;

fn unsupported(desc: &AttrDesc, detail: String) -> ExecError {
    ExecError::AttributeTypeMismatch {
        attribute: format!("{}.{}", desc.rel_name, desc.attr_name),
        detail,
    }
}

fn check_supported(desc: &AttrDesc) -> ExecResult<()> {
    if desc.attr_type.supports_len(desc.attr_len) {
        Ok(())
    } else {
        Err(unsupported(
            desc,
            format!("{} field of {} bytes is not supported", desc.attr_type, desc.attr_len),
        ))
    }
}

/// Truncates `v` to the two's-complement range of a `len`-byte integer.
fn narrow_int(v: i64, len: usize) -> i64 {
    match len {
        1 => i64::from(v as i8),
        2 => i64::from(v as i16),
        4 => i64::from(v as i32),
        _ => v,
    }
}

/// Converts caller-supplied text into the binary value of `desc`'s type.
///
/// The result is already narrowed to the field width, so it compares equal
/// to what a record holding it would store.
pub fn encode(desc: &AttrDesc, text: &str, config: &ExecConfig) -> ExecResult<Value> {
    check_supported(desc)?;

    match desc.attr_type {
        Datatype::Integer => {
            let (v, complete) = parse_int_prefix(text);
            if config.strict_numeric_input && !complete {
                return Err(ExecError::MalformedNumber {
                    input: text.to_string(),
                    ty: Datatype::Integer,
                });
            }
            Ok(Value::Integer(narrow_int(v, desc.attr_len)))
        }
        Datatype::Float => {
            let (v, complete) = parse_float_prefix(text);
            if config.strict_numeric_input && !complete {
                return Err(ExecError::MalformedNumber {
                    input: text.to_string(),
                    ty: Datatype::Float,
                });
            }
            let v = if desc.attr_len == 4 { f64::from(v as f32) } else { v };
            Ok(Value::Float(v))
        }
        Datatype::String => {
            // strncpy: copy up to the field width, pad the rest
            let mut bytes = vec![config.string_padding.byte(); desc.attr_len];
            let src = text.as_bytes();
            let n = src.len().min(desc.attr_len);
            bytes[..n].copy_from_slice(&src[..n]);
            Ok(Value::Text(bytes))
        }
    }
}

fn put_int(field: &mut [u8], v: i64) -> bool {
    match field.len() {
        1 => field.copy_from_slice(&(v as i8).to_ne_bytes()),
        2 => field.copy_from_slice(&(v as i16).to_ne_bytes()),
        4 => field.copy_from_slice(&(v as i32).to_ne_bytes()),
        8 => field.copy_from_slice(&v.to_ne_bytes()),
        _ => return false,
    }
    true
}

fn put_float(field: &mut [u8], v: f64) -> bool {
    match field.len() {
        4 => field.copy_from_slice(&(v as f32).to_ne_bytes()),
        8 => field.copy_from_slice(&v.to_ne_bytes()),
        _ => return false,
    }
    true
}

/// Writes `value` into `record` at the attribute's offset and width.
pub fn write_value(record: &mut [u8], desc: &AttrDesc, value: &Value) -> ExecResult<()> {
    check_supported(desc)?;
    let record_len = record.len();
    let Some(field) = record.get_mut(desc.attr_offset..desc.end()) else {
        return Err(unsupported(
            desc,
            format!("field ends at {} but record holds {} bytes", desc.end(), record_len),
        ));
    };

    let written = match (desc.attr_type, value) {
        (Datatype::Integer, Value::Integer(v)) => put_int(field, *v),
        (Datatype::Float, Value::Float(v)) => put_float(field, *v),
        (Datatype::String, Value::Text(bytes)) => {
            let n = bytes.len().min(field.len());
            field[..n].copy_from_slice(&bytes[..n]);
            true
        }
        _ => false,
    };
    if !written {
        return Err(unsupported(
            desc,
            format!("cannot store {} into {} field", value, desc.attr_type),
        ));
    }
    Ok(())
}

/// Decodes one field. Returns `None` for widths the type does not support.
pub fn read_field(field: &[u8], ty: Datatype) -> Option<Value> {
    match ty {
        Datatype::Integer => {
            let v = match field.len() {
                1 => i64::from(i8::from_ne_bytes(field.try_into().ok()?)),
                2 => i64::from(i16::from_ne_bytes(field.try_into().ok()?)),
                4 => i64::from(i32::from_ne_bytes(field.try_into().ok()?)),
                8 => i64::from_ne_bytes(field.try_into().ok()?),
                _ => return None,
            };
            Some(Value::Integer(v))
        }
        Datatype::Float => {
            let v = match field.len() {
                4 => f64::from(f32::from_ne_bytes(field.try_into().ok()?)),
                8 => f64::from_ne_bytes(field.try_into().ok()?),
                _ => return None,
            };
            Some(Value::Float(v))
        }
        Datatype::String => Some(Value::Text(field.to_vec())),
    }
}

/// Orders a stored field relative to a comparison value of the same type.
///
/// Numbers compare numerically; strings compare bytewise over the padded
/// field. `None` means the two are unordered (NaN, or a value of another
/// type).
pub fn compare_field(field: &[u8], ty: Datatype, value: &Value) -> Option<Ordering> {
    match (ty, value) {
        (Datatype::String, Value::Text(bytes)) => Some(field.cmp(bytes.as_slice())),
        _ => match (read_field(field, ty)?, value) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            _ => None,
        },
    }
}

/// Copies `len` bytes of `src` at `src_offset` into `dst` at `dst_offset`.
/// Returns `false`, leaving `dst` untouched, if either range is out of bounds.
pub fn project_field(
    src: &[u8],
    src_offset: usize,
    len: usize,
    dst: &mut [u8],
    dst_offset: usize,
) -> bool {
    let (Some(from), Some(to)) = (
        src.get(src_offset..src_offset + len),
        dst.get_mut(dst_offset..dst_offset + len),
    ) else {
        return false;
    };
    to.copy_from_slice(from);
    true
}
