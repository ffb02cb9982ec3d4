//! Tokenizer for the formula language.
//!
//! Positions are character offsets, so error messages line up with what a user
//! sees on screen even for non-ASCII input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SyntaxError;
use crate::formula::{BOTTOM_ATOM, TOP_ATOM};

/// Which implication connectives the formula language accepts.
///
/// `->` and `<->` are material in every dialect. The residuated dialect adds
/// `=>` and `<=>` for the twist implication and its biconditional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Material,
    Residuated,
}

impl Dialect {
    pub fn allows_residuated(&self) -> bool {
        matches!(self, Dialect::Residuated)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Material => write!(f, "material"),
            Dialect::Residuated => write!(f, "residuated"),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "material" => Ok(Dialect::Material),
            "residuated" => Ok(Dialect::Residuated),
            other => Err(format!(
                "unknown dialect '{other}' (expected 'material' or 'residuated')"
            )),
        }
    }
}

/// The two modal prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Box,
    Diamond,
}

impl ModalKind {
    pub fn opener(&self) -> char {
        match self {
            ModalKind::Box => '[',
            ModalKind::Diamond => '<',
        }
    }

    pub fn closer(&self) -> char {
        match self {
            ModalKind::Box => ']',
            ModalKind::Diamond => '>',
        }
    }

    pub fn empty_symbol(&self) -> &'static str {
        match self {
            ModalKind::Box => "[]",
            ModalKind::Diamond => "<>",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalKind::Box => write!(f, "Box"),
            ModalKind::Diamond => write!(f, "Diamond"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A proposition name, or the canonical `TOP`/`BOT` constants.
    Atom(String),
    Not,
    And,
    Or,
    LParen,
    RParen,
    MatImplies,
    MatIff,
    Implies,
    Iff,
    Box(String),
    Diamond(String),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Atom(name) => write!(f, "atom '{}'", name),
            TokenKind::Not => write!(f, "'~'"),
            TokenKind::And => write!(f, "'&'"),
            TokenKind::Or => write!(f, "'|'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::MatImplies => write!(f, "'->'"),
            TokenKind::MatIff => write!(f, "'<->'"),
            TokenKind::Implies => write!(f, "'=>'"),
            TokenKind::Iff => write!(f, "'<=>'"),
            TokenKind::Box(action) => write!(f, "'[{}]'", action),
            TokenKind::Diamond(action) => write!(f, "'<{}>'", action),
            TokenKind::Eof => write!(f, "end of formula"),
        }
    }
}

/// A token and the character offset where it starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Token { kind, position }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// On-demand tokenizer; the parser pulls one token at a time.
#[derive(Clone, Debug)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    dialect: Dialect,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Self::with_dialect(text, Dialect::default())
    }

    pub fn with_dialect(text: &str, dialect: Dialect) -> Self {
        Lexer {
            chars: text.chars().collect(),
            pos: 0,
            dialect,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self
            .current()
            .filter(|c| c.is_alphanumeric() || *c == '_')
        {
            ident.push(c);
            self.advance();
        }
        ident
    }

    /// Produce the next token. Once the input is exhausted every call returns
    /// `Eof` at the input length.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        while let Some(c) = self.current() {
            if c.is_whitespace() {
                self.advance();
                continue;
            }

            let start = self.pos;
            return match c {
                '[' => {
                    self.advance();
                    self.modal_body(start, ModalKind::Box)
                }
                '<' => self.angle(start),
                '-' => {
                    self.advance();
                    self.arrow(start, "-", TokenKind::MatImplies)
                }
                '=' if self.dialect.allows_residuated() => {
                    self.advance();
                    self.arrow(start, "=", TokenKind::Implies)
                }
                '~' => self.single(start, TokenKind::Not),
                '&' => self.single(start, TokenKind::And),
                '|' => self.single(start, TokenKind::Or),
                '(' => self.single(start, TokenKind::LParen),
                ')' => self.single(start, TokenKind::RParen),
                c if c.is_alphanumeric() => Ok(Token::new(self.atom(), start)),
                other => Err(SyntaxError::UnknownCharacter {
                    position: start,
                    found: other,
                }),
            };
        }
        Ok(Token::new(TokenKind::Eof, self.pos))
    }

    fn single(&mut self, start: usize, kind: TokenKind) -> Result<Token, SyntaxError> {
        self.advance();
        Ok(Token::new(kind, start))
    }

    fn atom(&mut self) -> TokenKind {
        let name = self.identifier();
        if name == "1" || name.eq_ignore_ascii_case(TOP_ATOM) {
            TokenKind::Atom(TOP_ATOM.to_string())
        } else if name == "0" || name.eq_ignore_ascii_case(BOTTOM_ATOM) {
            TokenKind::Atom(BOTTOM_ATOM.to_string())
        } else {
            TokenKind::Atom(name)
        }
    }

    /// Finish an arrow whose first characters have been consumed.
    fn arrow(
        &mut self,
        start: usize,
        prefix: &'static str,
        kind: TokenKind,
    ) -> Result<Token, SyntaxError> {
        if self.current() == Some('>') {
            self.advance();
            Ok(Token::new(kind, start))
        } else {
            Err(SyntaxError::IncompleteArrow {
                position: start,
                prefix,
            })
        }
    }

    /// `<` opens `<->`, `<=>` (residuated) or a Diamond prefix.
    fn angle(&mut self, start: usize) -> Result<Token, SyntaxError> {
        self.advance();
        match self.current() {
            Some('-') => {
                self.advance();
                self.arrow(start, "<-", TokenKind::MatIff)
            }
            Some('=') if self.dialect.allows_residuated() => {
                self.advance();
                self.arrow(start, "<=", TokenKind::Iff)
            }
            _ => self.modal_body(start, ModalKind::Diamond),
        }
    }

    /// Lex `ident]` or `ident>` after the opening bracket.
    fn modal_body(&mut self, start: usize, modal: ModalKind) -> Result<Token, SyntaxError> {
        if self.current() == Some(modal.closer()) {
            return Err(SyntaxError::EmptyAction {
                position: start,
                modal,
            });
        }

        let action = self.identifier();
        if action.is_empty() {
            return Err(SyntaxError::InvalidAction {
                position: start,
                modal,
            });
        }

        if self.current() == Some(modal.closer()) {
            self.advance();
            let kind = match modal {
                ModalKind::Box => TokenKind::Box(action),
                ModalKind::Diamond => TokenKind::Diamond(action),
            };
            Ok(Token::new(kind, start))
        } else {
            Err(SyntaxError::UnclosedModal {
                position: self.pos,
                expected: modal.closer(),
            })
        }
    }
}

/// Lex a whole formula, including the trailing `Eof` token.
pub fn tokenize(text: &str, dialect: Dialect) -> Result<Vec<Token>, SyntaxError> {
    let mut lexer = Lexer::with_dialect(text, dialect);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
