use anyhow::{Context, Result};
use clap::error::{Error as ClapError, ErrorKind as ClapErrorKind};
use clap::Parser;
use easyscript::{run, ErrorKind, Interpreter, ScriptError};
use num_enum::IntoPrimitive;
use std::io::{self, BufRead, Write};
use std::{fs, process};

/// Runs EasyScript programs from a file, an inline snippet or a prompt.
#[derive(Parser, Debug)]
#[clap(version)]
struct Cli {
    /// Script to run. Starts an interactive prompt when omitted.
    script: Option<String>,

    /// Run the given source text instead of a script file.
    #[clap(short, long, conflicts_with = "script")]
    eval: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, IntoPrimitive)]
#[repr(i32)]
enum ExitStatus {
    Success = 0,
    Usage = 64,
    DataError = 65,
    Software = 70,
    IoError = 74,
}

impl From<&ScriptError> for ExitStatus {
    fn from(error: &ScriptError) -> Self {
        match error.kind() {
            ErrorKind::Lex | ErrorKind::Parse => ExitStatus::DataError,
            ErrorKind::Name | ErrorKind::Type | ErrorKind::Internal => ExitStatus::Software,
            ErrorKind::Output => ExitStatus::IoError,
        }
    }
}

/// `--help` and `--version` also come back as clap errors but are not
/// failures.
fn argument_error_status(error: &ClapError) -> ExitStatus {
    match error.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => ExitStatus::Success,
        _ => ExitStatus::Usage,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(argument_error_status(&e).into());
        }
    };

    let outcome = match (cli.eval, cli.script) {
        (Some(source), _) => Ok(run_source(&source)),
        (None, Some(path)) => run_file(&path),
        (None, None) => run_prompt(),
    };

    let status = match outcome {
        Ok(status) => status,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitStatus::IoError
        }
    };

    process::exit(status.into());
}

fn run_file(path: &str) -> Result<ExitStatus> {
    let contents = fs::read_to_string(path).with_context(|| format!("Reading {}", path))?;
    Ok(run_source(&contents))
}

fn run_source(source: &str) -> ExitStatus {
    let mut interpreter = Interpreter::new();

    match run(&mut interpreter, source) {
        Ok(_) => ExitStatus::Success,
        Err(e) => report_error(&e),
    }
}

/// Reads one line at a time against a single interpreter, so variables
/// persist between lines. Errors are reported and the prompt continues.
fn run_prompt() -> Result<ExitStatus> {
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush().context("Writing prompt")?;

        let mut input = String::new();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .context("Reading stdin")?;
        if read == 0 {
            return Ok(ExitStatus::Success);
        }

        if let Err(e) = run(&mut interpreter, &input) {
            report_error(&e);
        }
    }
}

fn report_error(error: &ScriptError) -> ExitStatus {
    eprintln!("error: {}", error);
    ExitStatus::from(error)
}
