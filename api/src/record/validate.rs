//! Pure validation rules shared by setters, builders and mapping decoders.
//!
//! Every rule returns `Ok` or the [`ValidationError`] describing the first
//! violated bound. None of them transform the value.

use crate::error::ValidationError;

/// Unwraps a required value, failing when it is absent.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Required { field })
}

/// Checks a string's length (in characters) against optional bounds.
pub fn length(
    field: &'static str,
    value: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    match (min, max) {
        (Some(min), _) if actual < min => Err(ValidationError::TooShort { field, min, actual }),
        (_, Some(max)) if actual > max => Err(ValidationError::TooLong { field, max, actual }),
        _ => Ok(()),
    }
}

/// Checks an integer against an inclusive lower bound.
pub fn minimum(field: &'static str, value: i64, minimum: i64) -> Result<(), ValidationError> {
    if value < minimum {
        return Err(ValidationError::BelowMinimum { field, minimum });
    }
    Ok(())
}

/// Checks a string against a closed set of allowed values.
pub fn one_of(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::NotAllowed {
            field,
            value: value.to_string(),
            allowed,
        })
    }
}
