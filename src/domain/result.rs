//! Result type alias for PrivGuard

use super::errors::PrivGuardError;

/// Result type alias for PrivGuard operations
///
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use privguard::domain::result::Result;
/// use privguard::domain::errors::PrivGuardError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PrivGuardError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PrivGuardError>;
