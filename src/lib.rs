#![allow(clippy::module_inception)]

pub mod errors;
pub mod macros;
pub mod scanner;

extern crate regex;

/// A snapshot of the scanner's position: `line` and `column` are the 1-based
/// human-readable position, `offset` indexes into the source text. Taken at
/// the start of a multi-character token so the finished lexeme can report
/// where it began.
///
/// Carries no reference to the source text or the output sequence, so it is
/// trivially copyable and cannot alias the live cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn test_position_start() {
        let pos = Position::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.offset, 0);
    }
}
