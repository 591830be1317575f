//! Test helpers for generating unique test data
//!
//! ULID suffixes keep rows from different tests apart even when they share a
//! database.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("food");
/// let id2 = unique_str("food");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("food-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique email address in the format `{prefix}-{ulid}@example.test`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email1 = unique_email("waiter");
/// let email2 = unique_email("waiter");
/// assert_ne!(email1, email2);
/// assert!(email1.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
