//! Command-line front end.
//!
//! Reads one expression (from the arguments, or as a single line from stdin)
//! and prints its truth table followed by the CNF and DNF row indices.
//! On a syntax error the line is echoed with a caret under the offending
//! character, and the process exits with a failure status.
//!
//! ```text
//! $ echo 'a > b' | proptable
//! | A | B | A → B |
//! | T | T |   T   |
//! | T | F |   F   |
//! | F | T |   T   |
//! | F | F |   T   |
//! CNF: 2
//! DNF: 0, 2, 3
//! ```

use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use proptable::render::Glyphs;
use proptable::report::{write_error, Report};
use simplelog::LevelFilter;

#[derive(Parser)]
#[command(name = "proptable")]
#[command(about = "Truth table and canonical CNF/DNF indices of a propositional formula")]
struct Args {
    /// Expression to analyse (read from stdin when omitted)
    expr: Option<String>,

    /// Render connectives with ASCII glyphs
    #[arg(long)]
    ascii: bool,

    /// Print only the CNF and DNF lines
    #[arg(short, long)]
    summary: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Logs go to stderr so that stdout stays comparable line by line.
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let line = match args.expr {
        Some(expr) => expr,
        None => read_line()?,
    };
    let glyphs = if args.ascii { Glyphs::ASCII } else { Glyphs::UNICODE };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let status = match Report::new(&line, &glyphs) {
        Ok(report) => {
            if !args.summary {
                report.write_table(&mut out)?;
            }
            report.write_summary(&mut out)?;
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("rejected {:?}: {}", line, e);
            write_error(&mut out, &line, &e)?;
            ExitCode::FAILURE
        }
    };
    out.flush()?;

    Ok(status)
}

/// Reads a single line from stdin without its line terminator.
fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
