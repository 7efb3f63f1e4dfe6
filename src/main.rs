use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use exprcalc::repl::{self, BANNER, USAGE};

/// exprcalc evaluates arithmetic expressions with `+ - * / **`, parentheses
/// and builtin math functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every non-blank line of a file instead of a single
    /// expression.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Prints debug logging to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate. Starts the interactive shell when omitted.
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        });
        repl::run_script(&script, &mut out)
    } else {
        match args.expressions.as_slice() {
            [] => writeln!(out, "{BANNER}").and_then(|()| repl::start(io::stdin().lock(), &mut out)),
            [expression] => repl::run_once(expression, &mut out),
            _ => writeln!(out, "{USAGE}"),
        }
    };

    if let Err(e) = outcome {
        log::error!("{e}");
    }
}
