use serde::{Deserialize, Serialize};

/// How string fields are filled past the end of the supplied text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Padding {
    #[default]
    Zero,
    Space,
}

impl Padding {
    pub fn byte(self) -> u8 {
        match self {
            Padding::Zero => 0,
            Padding::Space => b' ',
        }
    }
}

/// Runtime knobs for text-to-binary conversion.
///
/// The defaults reproduce the classic `atoi`/`atof`/`strncpy` behaviour:
/// malformed numbers silently become the longest valid prefix (or zero) and
/// strings are zero-padded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExecConfig {
    /// Reject numeric input that is not entirely a valid number.
    pub strict_numeric_input: bool,
    pub string_padding: Padding,
}

impl ExecConfig {
    pub fn strict() -> Self {
        Self {
            strict_numeric_input: true,
            ..Default::default()
        }
    }
}
