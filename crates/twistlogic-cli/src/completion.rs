//! Shell completion generation for the TwistLogic CLI

use clap::CommandFactory;
use clap_complete::{generate, Generator, Shell};
use std::io;

use crate::cli::Cli;

pub fn generate_completion<G: Generator>(gen: G, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    generate(gen, &mut cmd, "twistlogic", out);
}

pub fn generate_for_shell(shell: Shell) {
    generate_completion(shell, &mut io::stdout());
}
