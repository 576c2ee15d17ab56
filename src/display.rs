//! Display names for test runners that label each parameterized row.

/// `"{method_name}(testData: {case_name})"`, or `None` when either part is
/// empty.
///
/// ```rust
/// use casekit::display::display_name;
/// assert_eq!(
///     display_name("LoginTest", "Invalid login => throws ArgumentException").as_deref(),
///     Some("LoginTest(testData: Invalid login => throws ArgumentException)")
/// );
/// assert_eq!(display_name("", "anything"), None);
/// ```
pub fn display_name(method_name: &str, case_name: &str) -> Option<String> {
    if method_name.is_empty() || case_name.is_empty() {
        return None;
    }
    Some(format!("{method_name}(testData: {case_name})"))
}
