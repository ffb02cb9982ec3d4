//! # TwistLogic IR
//!
//! Syntax of the weighted multi-modal formula language: the [`Formula`] tree,
//! its [`Lexer`] and [`Parser`], and [`SyntaxError`].
//!
//! ## Grammar
//!
//! ```text
//! formula   := iff
//! iff       := implies ( ('<->' | '<=>') implies )*
//! implies   := or_expr ( ('->' | '=>') or_expr )*
//! or_expr   := and_expr ( '|' and_expr )*
//! and_expr  := unary ( '&' unary )*
//! unary     := '~' unary | '[' IDENT ']' unary | '<' IDENT '>' unary
//!            | '(' formula ')' | ATOM
//! ```
//!
//! `1`/`TOP` and `0`/`BOT` (any case) are the constants. `=>` and `<=>` are
//! only recognized in [`Dialect::Residuated`].
//!
//! ## Quick Start
//!
//! ```rust
//! use twistlogic_ir::{parse, parse_with, Dialect, Formula};
//!
//! let f = parse("[a]p & q").unwrap();
//! assert_eq!(
//!     f,
//!     Formula::and(Formula::modal_box("a", Formula::atom("p")), Formula::atom("q"))
//! );
//! assert_eq!(f.to_string(), "([a]p & q)");
//!
//! let g = parse_with("p => q", Dialect::Residuated).unwrap();
//! assert_eq!(g, Formula::implies(Formula::atom("p"), Formula::atom("q")));
//!
//! let err = parse("<>p").unwrap_err();
//! assert_eq!(err.position(), 0);
//! ```

mod display;
mod error;
mod formula;
mod lexer;
mod parser;


pub use error::SyntaxError;
pub use formula::{Formula, BOTTOM_ATOM, TOP_ATOM};
pub use lexer::{tokenize, Dialect, Lexer, ModalKind, Token, TokenKind};
pub use parser::{parse, parse_with, Parser, MAX_NESTING};
