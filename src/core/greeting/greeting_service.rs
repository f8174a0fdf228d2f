//! A service for greeting someone.

use tracing::instrument;

/// Returns a greeting based on someone's name.
///
/// ```
/// # use hello::core::greeting::greeting_service::greet;
/// assert_eq!("Hello World!", greet("World"));
/// ```
#[instrument(ret)]
pub fn greet(name: &str) -> String {
    format!("Hello {name}!")
}
