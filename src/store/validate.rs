//! Minimum-length validation for required text fields
//!
//! Validation is sequential in a fixed field order and short-circuits on the
//! first failure; the error carries the upper-cased field tag and the
//! offending value. The numeric field is not validated here at all: a
//! negative number is clamped by the write coordinator, not rejected.

use super::errors::ValidationError;
use super::record::StoreDraft;

/// Largest length still rejected for required text fields. A value passes
/// only when strictly longer, so four characters is the minimum accepted.
pub const SMALL_ALLOWED: usize = 3;

/// True when `value` is long enough for a required text field.
pub fn small_allowed(value: &str) -> bool {
    value.chars().count() > SMALL_ALLOWED
}

/// Validate a create draft. Returns the first failing field, in the fixed
/// order: code_name, country, city, address, link.
pub fn validate(draft: &StoreDraft) -> Result<(), ValidationError> {
    check("CODE_NAME", &draft.code_name)?;
    check("COUNTRY", &draft.country)?;
    check("CITY", &draft.city)?;
    check("ADDRESS", &draft.address)?;
    check("LINK", &draft.link)?;
    Ok(())
}

fn check(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if small_allowed(value) {
        Ok(())
    } else {
        Err(ValidationError {
            field,
            value: value.to_string(),
        })
    }
}
