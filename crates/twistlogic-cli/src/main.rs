//! TwistLogic CLI - evaluate paraconsistent modal formulas from the shell
//!
//! Loads a workspace document of lattices, worlds and models and parses,
//! evaluates or validity-checks formulas against it.

use anyhow::{Context, Result};
use clap::Parser;

use twistlogic_cli::cli::{Cli, Commands, ConfigCommand};
use twistlogic_cli::commands;
use twistlogic_cli::completion;
use twistlogic_cli::config::Config;
use twistlogic_cli::loader::Workspace;
use twistlogic_cli::logging;
use twistlogic_cli::output::{enable_colors, print_error, print_info, print_success};
use twistlogic_cli::repl::{Repl, Session};

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; problems are reported once logging is up
    let (mut config, config_problems) = if cli.no_config {
        (Config::default(), Vec::new())
    } else {
        Config::discover()
    };

    // Override config with CLI options
    if let Some(dialect) = cli.dialect {
        config.dialect = dialect;
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if let Some(workspace) = &cli.workspace {
        config.workspace = Some(workspace.clone());
    }
    if cli.no_color {
        config.colored = false;
    }

    enable_colors(config.colored);
    logging::init(cli.verbose, &config.log_level);
    for problem in &config_problems {
        tracing::warn!("{:#}", problem);
    }

    let dialect = config.dialect;
    let format = config.output_format;

    match &cli.command {
        Commands::Parse { formula } => {
            println!("{}", commands::parse_command(formula, dialect, format)?);
        }
        Commands::Eval {
            formula,
            model,
            world,
        } => {
            let workspace = load_workspace(&config)?;
            let out =
                commands::eval_command(&workspace, formula, model.as_deref(), world, dialect, format)?;
            println!("{}", out);
        }
        Commands::Validity { formula, model } => {
            let workspace = load_workspace(&config)?;
            let out =
                commands::validity_command(&workspace, formula, model.as_deref(), dialect, format)?;
            println!("{}", out);
        }
        Commands::Inspect => {
            let workspace = load_workspace(&config)?;
            println!("{}", commands::inspect_command(&workspace, format)?);
        }
        Commands::Repl => {
            let workspace = match &config.workspace {
                Some(path) => Some(Workspace::load(path)?),
                None => {
                    print_info("No workspace given; formulas will only be parsed");
                    None
                }
            };
            let session = Session::new(workspace, dialect, format);
            let mut repl = Repl::new(config, session).context("Failed to start REPL")?;
            repl.run()?;
        }
        Commands::Completion { shell } => {
            completion::generate_for_shell(*shell);
        }
        Commands::Config { command } => {
            handle_config_command(command)?;
        }
    }

    Ok(())
}

fn load_workspace(config: &Config) -> Result<Workspace> {
    let path = config
        .workspace
        .as_ref()
        .context("No workspace document given; use --workspace FILE or set `workspace` in the config file")?;
    Workspace::load(path)
}

fn handle_config_command(command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = Config::load_default();
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{}", toml_str);
        }
        ConfigCommand::Path => {
            let path = Config::config_path();
            println!("{}", path.display());
        }
        ConfigCommand::Init => {
            let path = Config::create_default()?;
            print_success(&format!("Created config file: {}", path.display()));
        }
    }

    Ok(())
}
