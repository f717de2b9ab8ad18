use thiserror::Error;

/// Why a scan stopped before consuming all of its input.
///
/// The rendered lexeme sequence only ever shows the unrecognised-character
/// case (as the `>>> Error lexico` line); the remaining variants match the
/// reference behavior of failing silently, and exist so callers of the
/// library can still tell what went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unrecognised character {character:?} at line {line}, column {column}")]
    UnrecognisedCharacter {
        character: char,
        line: u32,
        column: u32,
    },
    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },
    #[error("invalid character literal starting at line {line}, column {column}")]
    InvalidCharacter { line: u32, column: u32 },
    #[error("unterminated comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },
}

impl ScanError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ScanError::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ScanError::UnterminatedString { .. } => "UnterminatedString",
            ScanError::InvalidCharacter { .. } => "InvalidCharacter",
            ScanError::UnterminatedComment { .. } => "UnterminatedComment",
        }
    }

    pub fn get_position(&self) -> (u32, u32) {
        match self {
            ScanError::UnrecognisedCharacter { line, column, .. } => (*line, *column),
            ScanError::UnterminatedString { line, column } => (*line, *column),
            ScanError::InvalidCharacter { line, column } => (*line, *column),
            ScanError::UnterminatedComment { line, column } => (*line, *column),
        }
    }
}
