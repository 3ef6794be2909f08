use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use sketchpad_shell::{repl, util, Cli, Session, ShellConfig};

fn main() -> Result<()> {
    util::init_tracing();
    util::install_panic_hook();

    let cli = Cli::parse();
    let config = ShellConfig::resolve(&cli, io::stdin().is_terminal());
    let mut session = Session::new();

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    tracing::info!(script = ?cli.script, echo = config.echo, "session started");

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            repl::run(&mut session, &config, BufReader::new(file), &mut out, &mut err)
        }
        None => repl::run(&mut session, &config, io::stdin().lock(), &mut out, &mut err),
    }
    .context("failed while running commands")?;

    tracing::info!(
        executed = summary.executed,
        failed = summary.failed,
        "session finished"
    );
    Ok(())
}
