//! Lexical scanning module.
//!
//! This module contains the scanner that converts source code into an
//! ordered sequence of lexemes for the downstream parser. It handles:
//!
//! - An ordered, first-match-wins rule table driven by trigger patterns
//! - Recognition of reserved words, identifiers, literals, and operators
//! - Line/column position tracking, including across comments
//! - The two failure shapes of the reference scanner: a reported lexical
//!   error for unrecognised characters, and silent invalidation for
//!   unterminated strings, character literals, and comments

pub mod lexemes;
pub mod scanner;
