//! TwistLogic CLI Library
//!
//! Programmatic access to the pieces behind the `twistlogic` binary: the
//! workspace document loader, the command renderers and the REPL session.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use twistlogic_cli::{commands, loader::Workspace, OutputFormat};
//! use twistlogic_ir::Dialect;
//!
//! let workspace = Workspace::load(Path::new("workspace.json")).unwrap();
//! let out = commands::eval_command(
//!     &workspace,
//!     "<a>q",
//!     Some("PLTS"),
//!     "w1",
//!     Dialect::Material,
//!     OutputFormat::Text,
//! )
//! .unwrap();
//! println!("{}", out);
//! ```
//!
//! # Module Overview
//!
//! - [`loader`]: JSON/YAML workspace documents resolved into models
//! - [`commands`]: `parse`, `eval`, `validity` and `inspect` renderers
//! - [`repl`]: the interactive session
//! - [`output`]: colors and syntax-error rendering
//! - [`logging`]: `tracing-subscriber` setup

pub use twistlogic_algebra;
pub use twistlogic_infer;
pub use twistlogic_ir;

pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod loader;
pub mod logging;
pub mod output;
pub mod repl;

pub use cli::OutputFormat;
pub use config::{Config, ReplConfig};

/// Library result type
pub type Result<T> = anyhow::Result<T>;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
