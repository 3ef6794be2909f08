use std::path::PathBuf;

use clap::Parser;

/// Draw on a character canvas from a script or an interactive prompt.
#[derive(Debug, Parser)]
#[command(name = "sketchpad", version, about)]
pub struct Cli {
    /// Read commands from this file instead of stdin.
    pub script: Option<PathBuf>,

    /// Don't echo the canvas after each drawing command.
    #[arg(short, long)]
    pub quiet: bool,

    /// Prompt shown before each command in interactive mode.
    #[arg(long, default_value = "enter command: ")]
    pub prompt: String,
}

/// Settings for one run of the command loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Print the canvas after every successful drawing command.
    pub echo: bool,
    /// `None` when input isn't a person at a terminal.
    pub prompt: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            echo: true,
            prompt: None,
        }
    }
}

impl ShellConfig {
    /// `stdin_is_terminal` only matters when no script was given.
    pub fn resolve(cli: &Cli, stdin_is_terminal: bool) -> Self {
        let interactive = cli.script.is_none() && stdin_is_terminal;
        Self {
            echo: !cli.quiet,
            prompt: interactive.then(|| cli.prompt.clone()),
        }
    }
}
