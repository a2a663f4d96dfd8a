use clap::Parser;
use linecalc::{builtins, Session, StreamScanner, StringScanner};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// linecalc evaluates arithmetic statements line by line, e.g. `2*pi > tau`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prompt shown before each line in interactive mode.
    #[arg(short, long, default_value = "? ")]
    prompt: String,

    /// Statements to evaluate instead of reading standard input.
    expression: Option<String>,
}

fn interactive(session: &mut Session, prompt: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = DefaultEditor::new()?;
    let mut stdout = io::stdout();

    loop {
        match editor.readline(prompt) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                session.run(&mut StringScanner::new(line), &mut stdout)?;
                stdout.flush()?;
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(error) => return Err(error.into()),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // LINECALC_LOG takes the usual RUST_LOG syntax and defaults to warn.
    let filter = EnvFilter::try_from_env("LINECALC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut session = match builtins::standard_environment() {
        Ok(environment) => Session::new(environment),
        Err(error) => {
            eprintln!("failed to set up the environment: {error}");
            return ExitCode::FAILURE;
        },
    };

    if let Some(expression) = args.expression {
        let mut scanner = StringScanner::new(expression);
        return match session.run(&mut scanner, &mut io::stdout().lock()) {
            Ok(summary) if summary.failures == 0 => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(error) => {
                eprintln!("failed to write the results: {error}");
                ExitCode::FAILURE
            },
        };
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        if let Err(error) = interactive(&mut session, &args.prompt) {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let mut scanner = StreamScanner::new(stdin.lock());
    if let Err(error) = session.run(&mut scanner, &mut io::stdout().lock()) {
        eprintln!("failed to write the results: {error}");
        return ExitCode::FAILURE;
    }
    match scanner.take_error() {
        Some(error) => {
            eprintln!("failed to read the input: {error}");
            ExitCode::FAILURE
        },
        None => ExitCode::SUCCESS,
    }
}
