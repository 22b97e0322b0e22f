//! Input checks for bucket and credential forms.
//!
//! These are plain string predicates; rendering the result next to a form
//! field is `util::field_errors`' job.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

static BUCKET_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9\-]{1,61}[a-z0-9]$").expect("valid bucket name regex"));

const ACCESS_KEY_MIN: usize = 3;
const ACCESS_KEY_MAX: usize = 20;
const SECRET_KEY_MIN: usize = 8;

/// A rejected form value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "bucket name must be 3-63 lowercase letters, digits or hyphens, starting and ending with a letter or digit"
    )]
    BucketName,

    #[error("access key must be 3-20 letters or digits")]
    AccessKey,

    #[error("secret key must be at least 8 characters")]
    SecretKey,
}

/// Lowercase alphanumeric start and end, 1-61 lowercase/digit/hyphen between.
pub fn validate_bucket_name(name: &str) -> bool {
    BUCKET_NAME.is_match(name)
}

/// 3 to 20 ASCII letters or digits.
pub fn validate_access_key(key: &str) -> bool {
    key.bytes().all(|b| b.is_ascii_alphanumeric()) && (ACCESS_KEY_MIN..=ACCESS_KEY_MAX).contains(&key.len())
}

/// At least 8 characters, any character set.
///
/// Length is counted in UTF-16 code units to agree with what the browser
/// reports for the same input field.
pub fn validate_secret_key(key: &str) -> bool {
    key.encode_utf16().count() >= SECRET_KEY_MIN
}

/// Check a credential pair, reporting the first failing field.
///
/// # Errors
///
/// Returns [`ValidationError::AccessKey`] or [`ValidationError::SecretKey`].
pub fn validate_credentials(access_key: &str, secret_key: &str) -> Result<(), ValidationError> {
    if !validate_access_key(access_key) {
        return Err(ValidationError::AccessKey);
    }
    if !validate_secret_key(secret_key) {
        return Err(ValidationError::SecretKey);
    }
    Ok(())
}

/// Check a bucket name, returning a displayable error on rejection.
///
/// # Errors
///
/// Returns [`ValidationError::BucketName`].
pub fn check_bucket_name(name: &str) -> Result<(), ValidationError> {
    if validate_bucket_name(name) { Ok(()) } else { Err(ValidationError::BucketName) }
}
