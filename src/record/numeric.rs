//! Lenient number parsing with C `atoi`/`atof` semantics.
//!
//! Both parsers skip leading whitespace, consume the longest valid numeric
//! prefix and fall back to zero when there is none. The second tuple element
//! reports whether the whole input (up to trailing whitespace) was consumed,
//! which strict mode uses to reject malformed text.

// C isspace: space, \t, \n, \v, \f, \r
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_space(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_c_space(bytes[i]) {
        i += 1;
    }
    i
}

fn only_space_from(bytes: &[u8], i: usize) -> bool {
    bytes[i..].iter().all(|&b| is_c_space(b))
}

/// Parses a base-10 signed integer prefix. Out-of-range input saturates.
pub fn parse_int_prefix(text: &str) -> (i64, bool) {
    let bytes = text.as_bytes();
    let mut i = skip_space(bytes, 0);

    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    let digits_start = i;
    let mut value: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let d = i64::from(bytes[i] - b'0');
        // accumulate towards the sign so i64::MIN stays reachable
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
        i += 1;
    }

    if i == digits_start {
        return (0, false);
    }
    (value, only_space_from(bytes, i))
}

fn count_digits(bytes: &[u8], mut i: usize) -> usize {
    let start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i - start
}

/// Parses a decimal floating-point prefix, including exponents and the
/// `inf`/`infinity`/`nan` words.
pub fn parse_float_prefix(text: &str) -> (f64, bool) {
    let bytes = text.as_bytes();
    let start = skip_space(bytes, 0);
    let mut i = start;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    // special words
    let rest = text[i..].to_ascii_lowercase();
    for word in ["infinity", "inf", "nan"] {
        if rest.starts_with(word) {
            let end = i + word.len();
            return match text[start..end].parse::<f64>() {
                Ok(v) => (v, only_space_from(bytes, end)),
                Err(_) => (0.0, false),
            };
        }
    }

    let int_digits = count_digits(bytes, i);
    i += int_digits;
    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        frac_digits = count_digits(bytes, i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return (0.0, false);
    }

    // exponent only counts when at least one digit follows
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digits = count_digits(bytes, j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    match text[start..i].parse::<f64>() {
        Ok(v) => (v, only_space_from(bytes, i)),
        Err(_) => (0.0, false),
    }
}
