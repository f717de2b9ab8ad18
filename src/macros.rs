//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the scanning rule table:
//!
//! - `MK_RULE!` - Creates a rule-table entry from a trigger pattern and a
//!   handler function
//!
//! These macros reduce boilerplate when the rule table is built.

/// Creates a rule-table entry.
///
/// The trigger pattern is anchored at the start of the unconsumed remainder
/// by the caller's convention (`^...`); the handler performs the actual
/// consumption and lexeme production.
///
/// # Arguments
///
/// * `$pattern` - The trigger regex as a string literal
/// * `$handler` - The handler function applied when the trigger matches
///
/// # Example
///
/// ```ignore
/// let rule = MK_RULE!(r"^\n", newline_handler);
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:expr, $handler:expr) => {
        Rule {
            trigger: Regex::new($pattern).unwrap(),
            handler: $handler,
        }
    };
}
