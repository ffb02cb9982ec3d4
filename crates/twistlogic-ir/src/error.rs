//! Syntax errors raised while lexing and parsing formulas.

use thiserror::Error;

use crate::lexer::{ModalKind, TokenKind};

/// A lexical or grammatical error. Every variant carries the character offset
/// at which it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Error at index {position}: {modal} operator '{}' requires an action identifier", .modal.empty_symbol())]
    EmptyAction { position: usize, modal: ModalKind },

    #[error("Error at index {position}: invalid action identifier inside {modal} operator")]
    InvalidAction { position: usize, modal: ModalKind },

    #[error("Error at index {position}: expected '{expected}' after action")]
    UnclosedModal { position: usize, expected: char },

    #[error("Error at index {position}: expected '>' after '{prefix}'")]
    IncompleteArrow {
        position: usize,
        prefix: &'static str,
    },

    #[error("Unknown character at index {position}: '{found}'")]
    UnknownCharacter { position: usize, found: char },

    #[error("Syntax error at index {position}: expected {expected}, got {found}")]
    UnexpectedToken {
        position: usize,
        expected: &'static str,
        found: TokenKind,
    },

    #[error("Syntax error at index {position}: unexpected {found} at end of formula")]
    TrailingInput { position: usize, found: TokenKind },

    #[error("Unexpected end of formula at index {position}: did you forget a closing parenthesis or an atom?")]
    UnexpectedEnd { position: usize },

    #[error("Syntax error at index {position}: formula nested deeper than {limit} levels")]
    NestingTooDeep { position: usize, limit: usize },
}

impl SyntaxError {
    /// Character offset into the formula text.
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::EmptyAction { position, .. }
            | SyntaxError::InvalidAction { position, .. }
            | SyntaxError::UnclosedModal { position, .. }
            | SyntaxError::IncompleteArrow { position, .. }
            | SyntaxError::UnknownCharacter { position, .. }
            | SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::TrailingInput { position, .. }
            | SyntaxError::UnexpectedEnd { position }
            | SyntaxError::NestingTooDeep { position, .. } => *position,
        }
    }

    /// Raised by the lexer rather than the parser.
    pub fn is_lexical(&self) -> bool {
        !matches!(
            self,
            SyntaxError::UnexpectedToken { .. }
                | SyntaxError::TrailingInput { .. }
                | SyntaxError::UnexpectedEnd { .. }
                | SyntaxError::NestingTooDeep { .. }
        )
    }
}
