//! Recursive-descent parser.
//!
//! Precedence, loosest first: `<->`/`<=>`, `->`/`=>`, `|`, `&`, then the
//! prefix operators `~`, `[a]`, `<a>`. Every binary connective associates to
//! the left.

use std::str::FromStr;

use tracing::trace;

use crate::error::SyntaxError;
use crate::formula::Formula;
use crate::lexer::{Dialect, Lexer, Token, TokenKind};

type ParseResult<T> = Result<T, SyntaxError>;

/// Deepest chain of prefix operators and parentheses accepted.
pub const MAX_NESTING: usize = 128;

/// Parser over a single formula. Tokens are pulled from the lexer one at a
/// time, so a lexical error is reported only once the parser reaches it.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    depth: usize,
}

impl Parser {
    pub fn new(text: &str, dialect: Dialect) -> ParseResult<Self> {
        let mut lexer = Lexer::with_dialect(text, dialect);
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Parse the whole input as one formula.
    pub fn parse(mut self) -> ParseResult<Formula> {
        let formula = self.iff()?;
        if !self.current.is_eof() {
            return Err(SyntaxError::TrailingInput {
                position: self.current.position,
                found: self.current.kind.clone(),
            });
        }
        trace!(formula = %formula, "parsed formula");
        Ok(formula)
    }

    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<()> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(SyntaxError::UnexpectedToken {
                position: self.current.position,
                expected,
                found: self.current.kind.clone(),
            })
        }
    }

    /// Run `parse` one nesting level deeper, failing once the limit is hit.
    fn nested(
        &mut self,
        position: usize,
        parse: fn(&mut Self) -> ParseResult<Formula>,
    ) -> ParseResult<Formula> {
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep {
                position,
                limit: MAX_NESTING,
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn iff(&mut self) -> ParseResult<Formula> {
        let mut node = self.implies()?;
        loop {
            let build: fn(Formula, Formula) -> Formula = match self.current.kind {
                TokenKind::MatIff => Formula::material_iff,
                TokenKind::Iff => Formula::iff,
                _ => return Ok(node),
            };
            self.advance()?;
            let right = self.implies()?;
            node = build(node, right);
        }
    }

    fn implies(&mut self) -> ParseResult<Formula> {
        let mut node = self.or_expr()?;
        loop {
            let build: fn(Formula, Formula) -> Formula = match self.current.kind {
                TokenKind::MatImplies => Formula::material_implies,
                TokenKind::Implies => Formula::implies,
                _ => return Ok(node),
            };
            self.advance()?;
            let right = self.or_expr()?;
            node = build(node, right);
        }
    }

    fn or_expr(&mut self) -> ParseResult<Formula> {
        let mut node = self.and_expr()?;
        while self.current.kind == TokenKind::Or {
            self.advance()?;
            let right = self.and_expr()?;
            node = Formula::or(node, right);
        }
        Ok(node)
    }

    fn and_expr(&mut self) -> ParseResult<Formula> {
        let mut node = self.unary()?;
        while self.current.kind == TokenKind::And {
            self.advance()?;
            let right = self.unary()?;
            node = Formula::and(node, right);
        }
        Ok(node)
    }

    fn unary(&mut self) -> ParseResult<Formula> {
        let position = self.current.position;
        match self.current.kind.clone() {
            TokenKind::Not => {
                self.advance()?;
                Ok(Formula::negate(self.nested(position, Self::unary)?))
            }
            TokenKind::Box(action) => {
                self.advance()?;
                Ok(Formula::modal_box(action, self.nested(position, Self::unary)?))
            }
            TokenKind::Diamond(action) => {
                self.advance()?;
                Ok(Formula::modal_diamond(
                    action,
                    self.nested(position, Self::unary)?,
                ))
            }
            TokenKind::LParen => {
                self.advance()?;
                let inner = self.nested(position, Self::iff)?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::Atom(name) => {
                self.advance()?;
                Ok(Formula::atom(name))
            }
            TokenKind::Eof => Err(SyntaxError::UnexpectedEnd { position }),
            found => Err(SyntaxError::UnexpectedToken {
                position,
                expected: "an operand",
                found,
            }),
        }
    }
}

/// Parse a formula in the default (material) dialect.
pub fn parse(text: &str) -> ParseResult<Formula> {
    parse_with(text, Dialect::default())
}

/// Parse a formula in the given dialect.
pub fn parse_with(text: &str, dialect: Dialect) -> ParseResult<Formula> {
    Parser::new(text, dialect)?.parse()
}

impl FromStr for Formula {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
