#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # spacegrade
//!
//! Grades a student's Bootstrap spacing page straight from their GitHub
//! repository.
//!
//! ```text
//! spacegrade grade --name "Ada" --url https://github.com/ada/site/blob/main/index.html
//! spacegrade check ./index.html
//! spacegrade rubric
//! ```

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use spacegrade::{
    config,
    constants::REFERENCE_DOCUMENT,
    default_rubric, evaluate,
    fetch::{FetchError, FileFetcher, HttpFetcher, SourceFetcher},
    report::{self, Evaluation},
    submission::SubmissionError,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// How results are printed.
#[derive(Debug, Clone, Copy)]
struct Output {
    /// Print JSON instead of the terminal report.
    json:       bool,
    /// Skip the code comparison section.
    no_compare: bool,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Fetch and grade a submission from GitHub
    Grade {
        /// Student name
        name:   String,
        /// Repository or file URL
        url:    String,
        /// Output settings
        output: Output,
    },
    /// Grade a local HTML file
    Check {
        /// Name shown in the report
        name:   String,
        /// Path to the file
        file:   String,
        /// Output settings
        output: Output,
    },
    /// Print the rubric
    Rubric,
    /// Print the reference solution
    Reference,
}

/// Global options plus the chosen command.
#[derive(Debug, Clone)]
struct Opts {
    /// Log at debug level
    verbose: bool,
    /// Command to run
    cmd:     Cmd,
}

/// Parse the command line arguments and return an `Opts` struct
fn options() -> Opts {
    /// parses output flags
    fn output_flags() -> impl Parser<Output> {
        let json = long("json")
            .help("Print results as JSON")
            .switch();
        let no_compare = long("no-compare")
            .help("Do not show the code comparison")
            .switch();
        construct!(Output { json, no_compare })
    }

    let name = long("name")
        .short('n')
        .help("Student name")
        .argument::<String>("NAME");
    let url = long("url")
        .short('u')
        .help("GitHub URL of the repository or its index.html")
        .argument::<String>("URL");
    let output = output_flags();
    let grade = construct!(Cmd::Grade { name, url, output })
        .to_options()
        .command("grade")
        .help("Fetch a submission from GitHub and grade it");

    let name = long("name")
        .short('n')
        .help("Name shown in the report")
        .argument::<String>("NAME")
        .fallback("Instructor".to_string());
    let file = positional::<String>("FILE").help("Path to an HTML file");
    let output = output_flags();
    let check = construct!(Cmd::Check { name, output, file })
        .to_options()
        .command("check")
        .help("Grade a local HTML file");

    let rubric = pure(Cmd::Rubric)
        .to_options()
        .command("rubric")
        .help("Print the grading rubric");

    let reference = pure(Cmd::Reference)
        .to_options()
        .command("reference")
        .help("Print the reference solution");

    let verbose = short('v')
        .long("verbose")
        .help("Log every criterion as it is checked")
        .switch();
    let cmd = construct!([grade, check, rubric, reference]);

    construct!(Opts { verbose, cmd })
        .to_options()
        .descr("Autograder for the Bootstrap spacing exercise")
        .run()
}

/// Grades one submission and prints the outcome. Returns false when the
/// request was rejected or the fetch failed.
fn run_grading<F: SourceFetcher>(
    fetcher: &F,
    name: &str,
    location: &str,
    output: Output,
) -> Result<bool> {
    let rubric = default_rubric()?;

    let evaluation: Evaluation = match evaluate(&rubric, fetcher, name, location) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            if let Some(err) = e.downcast_ref::<SubmissionError>() {
                eprintln!("⚠️ {err}");
                return Ok(false);
            }
            if let Some(err) = e.downcast_ref::<FetchError>() {
                eprintln!("{}", report::render_fetch_error(err));
                return Ok(false);
            }
            return Err(e);
        }
    };

    if output.json {
        println!("{}", evaluation.to_json()?);
    } else {
        println!("{}", report::render(&evaluation, !output.no_compare));
    }

    Ok(true)
}

fn main() -> Result<()> {
    dotenv().ok();

    let opts = options();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let level = if opts.verbose { Level::DEBUG } else { Level::INFO };
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let ok = match opts.cmd {
        Cmd::Grade { name, url, output } => {
            let config = config::ensure_initialized()?;
            let fetcher = HttpFetcher::from_config(&config);
            run_grading(&fetcher, &name, &url, output)?
        }
        Cmd::Check { name, file, output } => run_grading(&FileFetcher, &name, &file, output)?,
        Cmd::Rubric => {
            println!("{}", report::render_rubric(&default_rubric()?));
            true
        }
        Cmd::Reference => {
            print!("{REFERENCE_DOCUMENT}");
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
