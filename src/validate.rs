use std::fmt;

/// Lower bound applied when the textarea declares no `minlength`.
pub const DEFAULT_MIN_LENGTH: usize = 100;
/// Upper bound applied when the textarea declares no `maxlength`.
pub const DEFAULT_MAX_LENGTH: usize = 5000;

/// Why the submitted content was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min, actual } => write!(
                f,
                "Please enter at least {} characters. Current: {}",
                min, actual
            ),
            Self::TooLong { max, actual } => write!(
                f,
                "Content is too long. Maximum {} characters. Current: {}",
                max, actual
            ),
        }
    }
}

/// Checks the trimmed character count of `content` against the bounds.
///
/// Only the measured length is trimmed; callers persist and submit the
/// untrimmed value. Length means Unicode scalar values
/// (`chars().count()`), so a multi-byte character counts once. A UTF-16
/// code-unit count would report astral-plane characters as two; the
/// declared bounds make no practical difference for either.
pub fn validate(content: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let actual = content.trim().chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { min, actual });
    }
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}
