//! Interactive REPL mode for the TwistLogic CLI

use anyhow::{bail, Result};
use colored::*;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use twistlogic_ir::Dialect;

use crate::cli::OutputFormat;
use crate::commands::{
    inspect_command, parse_command, parse_formula, render_eval, render_validity,
};
use crate::config::Config;
use crate::loader::Workspace;
use crate::output::{print_error, print_header};

const HELP: &str = "\
Enter a formula to evaluate it. With a world selected it is evaluated there,
with only a model selected its validity is checked, and without a workspace
it is parsed.

Commands:
  .help                 Show this help
  .exit, .quit          Leave the REPL
  .dialect [NAME]       Show or set the dialect (material, residuated)
  .format [NAME]        Show or set the output format (text, json)
  .model [NAME]         Show or select the current model
  .world [NAME]         Show or select the current world; '.world -' clears it
  .parse FORMULA        Show the structure of a formula
  .validity FORMULA     Check validity in the current model
  .inspect              Summarize the loaded workspace";

/// What the REPL should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Exit,
    Nothing,
}

/// REPL state without the line editor.
pub struct Session {
    workspace: Option<Workspace>,
    dialect: Dialect,
    format: OutputFormat,
    model: Option<String>,
    world: Option<String>,
}

impl Session {
    pub fn new(workspace: Option<Workspace>, dialect: Dialect, format: OutputFormat) -> Self {
        let model = workspace
            .as_ref()
            .and_then(|ws| ws.select_model(None).ok())
            .map(|m| m.name().to_string());
        Self {
            workspace,
            dialect,
            format,
            model,
            world: None,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn world(&self) -> Option<&str> {
        self.world.as_deref()
    }

    fn workspace(&self) -> Result<&Workspace> {
        match &self.workspace {
            Some(ws) => Ok(ws),
            None => bail!("No workspace loaded; start with --workspace FILE"),
        }
    }

    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Outcome::Nothing);
        }
        if line.starts_with('.') {
            return self.command(line);
        }
        self.formula(line).map(Outcome::Output)
    }

    fn formula(&self, text: &str) -> Result<String> {
        let Some(ws) = &self.workspace else {
            return parse_command(text, self.dialect, self.format);
        };
        let formula = parse_formula(text, self.dialect)?;
        let model = ws.select_model(self.model.as_deref())?;
        match &self.world {
            Some(world) => render_eval(&formula, model, model.resolve_world(world)?, self.format),
            None => render_validity(
                &twistlogic_infer::check_validity(&formula, model)?,
                self.format,
            ),
        }
    }

    fn command(&mut self, line: &str) -> Result<Outcome> {
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let output = match (name, arg) {
            (".exit" | ".quit", _) => return Ok(Outcome::Exit),
            (".help", _) => HELP.to_string(),
            (".dialect", "") => format!("Dialect: {}", self.dialect),
            (".dialect", value) => {
                self.dialect = value.parse().map_err(anyhow::Error::msg)?;
                format!("Dialect set to {}", self.dialect)
            }
            (".format", "") => match self.format {
                OutputFormat::Text => "Format: text".to_string(),
                OutputFormat::Json => "Format: json".to_string(),
            },
            (".format", "text") => {
                self.format = OutputFormat::Text;
                "Format set to text".to_string()
            }
            (".format", "json") => {
                self.format = OutputFormat::Json;
                "Format set to json".to_string()
            }
            (".format", other) => bail!("Unknown format '{}' (expected text or json)", other),
            (".model", "") => match &self.model {
                Some(model) => format!("Model: {}", model),
                None => "No model selected".to_string(),
            },
            (".model", value) => {
                let model = self.workspace()?.model(value)?;
                self.model = Some(model.name().to_string());
                self.world = None;
                format!("Model set to {}", value)
            }
            (".world", "") => match &self.world {
                Some(world) => format!("World: {}", world),
                None => "No world selected; formulas are checked for validity".to_string(),
            },
            (".world", "-") => {
                self.world = None;
                "World cleared".to_string()
            }
            (".world", value) => {
                let model = self.workspace()?.select_model(self.model.as_deref())?;
                let world = model.resolve_world(value)?;
                let shown = world.to_string();
                self.world = Some(world.long_name().to_string());
                format!("World set to {}", shown)
            }
            (".parse", text) => parse_command(text, self.dialect, self.format)?,
            (".validity", text) => {
                let ws = self.workspace()?;
                let formula = parse_formula(text, self.dialect)?;
                let model = ws.select_model(self.model.as_deref())?;
                render_validity(&twistlogic_infer::check_validity(&formula, model)?, self.format)?
            }
            (".inspect", _) => inspect_command(self.workspace()?, self.format)?,
            (other, _) => bail!("Unknown command '{}'; type .help", other),
        };
        Ok(Outcome::Output(output))
    }
}

pub struct Repl {
    session: Session,
    config: Config,
    history_path: PathBuf,
    editor: DefaultEditor,
}

impl Repl {
    pub fn new(config: Config, session: Session) -> Result<Self> {
        let history_path = config.history_path();

        let mut editor = DefaultEditor::new()?;
        editor.set_max_history_size(config.repl.max_history)?;

        if history_path.exists() {
            let _ = editor.load_history(&history_path);
        }

        Ok(Self {
            session,
            config,
            history_path,
            editor,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        print_header("TwistLogic Interactive REPL");
        println!("Type '.help' for available commands, '.exit' to quit");
        if let Some(model) = self.session.model() {
            println!("Model: {}", model.bold());
        }
        println!();

        loop {
            let readline = self.editor.readline(&self.config.repl.prompt);

            match readline {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line.trim());

                    match self.session.execute(&line) {
                        Ok(Outcome::Output(text)) => println!("{}", text),
                        Ok(Outcome::Nothing) => {}
                        Ok(Outcome::Exit) => break,
                        Err(e) => print_error(&format!("{:#}", e)),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    print_error(&format!("Read error: {}", err));
                    break;
                }
            }
        }

        if self.config.repl.auto_save {
            if let Err(e) = self.editor.save_history(&self.history_path) {
                tracing::warn!("could not save history: {}", e);
            }
        }

        Ok(())
    }
}
