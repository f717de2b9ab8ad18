//! Error types for the scanner.
//!
//! This module defines the structured description of why a scan stopped
//! early. It includes:
//!
//! - Error variants for each failing rule (unrecognised character,
//!   unterminated string, invalid character literal, unterminated comment)
//! - Source position information on every variant
//! - Display formatting via `thiserror`
//!
//! Note that only the unrecognised-character case also appears as a
//! diagnostic lexeme in the rendered output; the other variants are
//! deliberately absent from it and exist for library callers only.

pub mod errors;
