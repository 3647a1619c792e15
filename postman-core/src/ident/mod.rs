//! Identifier gate checks.
//!
//! Every public resource function validates its identifiers here before a
//! request is built, so a malformed id fails locally with the parameter
//! name instead of surfacing as an opaque upstream 400/404.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

// A plain id is an opaque single identifier: UUID-shaped, numeric, or a
// plain alphanumeric token. Kept permissive on purpose; the API owns the
// precise format.
static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_\-]*$").expect("valid"));

// A uid is `<numericOwnerId>-<uuid>`; the six-group shape distinguishes it
// from a bare UUID (five groups).
static UID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]+-[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("valid")
});

/// Check that `value` is a plain resource id (not a uid, not empty).
pub fn validate_id(value: &str, param: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing {
            param: param.to_string(),
        });
    }
    if UID_RE.is_match(value) || !ID_RE.is_match(value) {
        return Err(ValidationError::InvalidId {
            param: param.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Check that `value` is a composite `<ownerId>-<resourceId>` uid.
pub fn validate_uid(value: &str, param: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing {
            param: param.to_string(),
        });
    }
    if !UID_RE.is_match(value) {
        return Err(ValidationError::InvalidUid {
            param: param.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Split a uid into its `(ownerId, resourceId)` parts.
///
/// Returns `None` when `value` is not uid-shaped.
pub fn split_uid(value: &str) -> Option<(&str, &str)> {
    if !UID_RE.is_match(value) {
        return None;
    }
    value.split_once('-')
}
