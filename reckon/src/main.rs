use std::io::{self, BufRead};

use anyhow::{bail, Context};
use clap::Parser;
use log::LevelFilter;
use reckon::{EvalOptions, Evaluator};

/// Evaluate arithmetic expressions.
///
/// Reads one expression per line from stdin when no EXPR is given.
#[derive(Debug, Parser)]
#[command(name = "reckon", version)]
struct Cli {
    /// Drop unrecognized characters instead of failing
    #[arg(short, long)]
    lenient: bool,

    /// Print the parsed tree before the value
    #[arg(short, long)]
    tree: bool,

    /// Raise log level (warn -> info -> debug -> trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    exprs: Vec<String>,
}

impl Cli {
    fn options(&self) -> EvalOptions {
        if self.lenient {
            EvalOptions::lenient()
        } else {
            EvalOptions::default()
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG wins over -v when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(src: &str, cli: &Cli) -> anyhow::Result<String> {
    let expr = reckon::parse_with(src, &cli.options())
        .with_context(|| format!("while parsing {src:?}"))?;
    let value = Evaluator::eval(&expr).with_context(|| format!("while evaluating {expr}"))?;

    let out = if cli.tree {
        format!("{expr} => {value}")
    } else {
        value.to_string()
    };
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if cli.exprs.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(cli.exprs.clone().into_iter().map(Ok))
    };

    let mut failures = 0usize;
    for line in inputs {
        let src = line.context("failed to read stdin")?;
        if src.trim().is_empty() {
            continue;
        }
        match run(&src, &cli) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("error: {e:#}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} expression(s) failed");
    }
    Ok(())
}
