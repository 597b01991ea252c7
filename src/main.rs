use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ccg_counters::core::CalculatorConfig;
use ccg_counters::session::{Session, SessionSnapshot, StaticIdentity};

/// Line-driven +1/+1 counter calculator.
#[derive(Debug, Parser)]
#[command(name = "ccg-counters", author, version, about = "Counter calculator for Vrestin boards")]
struct Cli {
    /// TOML configuration with custom modifiers and session settings.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin.
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Restore a saved session before running commands.
    #[arg(long, value_name = "FILE")]
    restore: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

const HELP: &str = "\
commands:
  cards                 list support cards
  toggle <id>           toggle a support card
  x <value>             set X
  summon                summon the primary creature
  attack                attack with insects
  add <name>            add a creature
  inc <index> [n]       add counters (default 1)
  dec <index> [n]       remove counters (default 1)
  remove <index>        remove a creature
  clear                 remove all creatures
  list                  show creatures
  log                   show the log
  clear-log             clear the log
  save <file>           write a session snapshot
  quit";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let identity = StaticIdentity::authenticated();
    let mut session = match &cli.restore {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading snapshot {}", path.display()))?;
            Session::restore(&identity, SessionSnapshot::from_bytes(&bytes)?)?
        }
        None => {
            let config = match &cli.config {
                Some(path) => CalculatorConfig::from_path(path)?,
                None => CalculatorConfig::default(),
            };
            Session::open(&identity, config)?
        }
    };

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(io::BufReader::new(
            fs::File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in input.lines() {
        let line = line.context("reading command")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if let Err(err) = run_command(&mut session, line, &mut out) {
            writeln!(out, "error: {err:#}")?;
        }
    }

    Ok(())
}

fn run_command(session: &mut Session, line: &str, out: &mut impl Write) -> Result<()> {
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "help" => writeln!(out, "{HELP}")?,
        "cards" => {
            for descriptor in session.registry().iter() {
                let mark = if session.is_active(&descriptor.id) { 'x' } else { ' ' };
                writeln!(out, "[{mark}] {:<22} {}", descriptor.id.as_str(), descriptor.name)?;
            }
        }
        "toggle" => {
            let now = session.toggle(rest);
            writeln!(out, "{rest}: {}", if now { "on" } else { "off" })?;
        }
        "x" => {
            let base = session.set_base_text(rest);
            writeln!(out, "X = {base}")?;
        }
        "summon" => match session.summon() {
            Some(report) => writeln!(out, "{}", report.entry)?,
            None => writeln!(out, "{} is already on the battlefield", session.config().primary.name)?,
        },
        "attack" => {
            let report = session.attack();
            writeln!(out, "{}", report.entry)?;
        }
        "add" => match session.add_creature(rest) {
            Some(index) => writeln!(out, "added #{index}")?,
            None => bail!("creature name must not be empty"),
        },
        "inc" | "dec" => {
            let (index, amount) = parse_index_amount(rest)?;
            let counters = if command == "inc" {
                session.increment(index, amount)?
            } else {
                session.decrement(index, amount)?
            };
            writeln!(out, "#{index}: {counters} counters")?;
        }
        "remove" => {
            let removed = session.remove_creature(parse_index(rest)?)?;
            writeln!(out, "removed {}", removed.name)?;
        }
        "clear" => session.clear_creatures(),
        "list" => {
            for (index, creature) in session.creatures().iter().enumerate() {
                writeln!(out, "#{index} {creature}")?;
            }
        }
        "log" => writeln!(out, "{}", session.log().render())?,
        "clear-log" => session.clear_log(),
        "save" => {
            if rest.is_empty() {
                bail!("save needs a file path");
            }
            fs::write(rest, session.snapshot().to_bytes()?)
                .with_context(|| format!("writing snapshot {rest}"))?;
            writeln!(out, "saved to {rest}")?;
        }
        other => bail!("unknown command '{other}' (try 'help')"),
    }
    Ok(())
}

fn parse_index(text: &str) -> Result<usize> {
    text.parse()
        .with_context(|| format!("'{text}' is not a creature index"))
}

fn parse_index_amount(text: &str) -> Result<(usize, i64)> {
    let mut parts = text.split_whitespace();
    let index = parse_index(parts.next().unwrap_or_default())?;
    let amount = match parts.next() {
        Some(n) => n.parse().with_context(|| format!("'{n}' is not a number"))?,
        None => 1,
    };
    Ok((index, amount))
}
