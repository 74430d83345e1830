use clap::Parser;
use colored::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use tagcheck::api::TagCheckApi;
use tagcheck::commands::report::ReportStyle;
use tagcheck::commands::{CmdMessage, MessageLevel};
use tagcheck::config::TagCheckConfig;
use tagcheck::decoder::dicom::DicomDecoder;
use tagcheck::error::{Result, TagCheckError};
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

/// Logs go to stderr so they never mix with a report written to stdout.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(console::Term::stderr().is_term())
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let api = TagCheckApi::from_config(DicomDecoder::new(), &config)?;

    // Must run before the output file is created.
    if !cli.root.is_dir() {
        return Err(TagCheckError::RootNotFound(cli.root.clone()));
    }

    let result = match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| TagCheckError::Output {
                path: path.clone(),
                source,
            })?;
            let mut out = BufWriter::new(file);
            let result = api.scan(&cli.root)?;
            api.write_report(&result, &mut out, ReportStyle::Plain)
                .map_err(|e| output_error(e, path))?;
            result
        }
        None => {
            let result = api.scan(&cli.root)?;
            let mut out = io::stdout().lock();
            api.write_report(&result, &mut out, stdout_style(cli.no_color))?;
            result
        }
    };

    if !cli.quiet {
        print_messages(&result.messages);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<TagCheckConfig> {
    let mut config = match &cli.config {
        Some(path) => TagCheckConfig::load(path)?,
        None => TagCheckConfig::default(),
    };
    if cli.native_order {
        config.sorted = false;
    }
    if cli.case_sensitive {
        config.case_sensitive = true;
    }
    Ok(config)
}

fn stdout_style(no_color: bool) -> ReportStyle {
    if !no_color && console::Term::stdout().is_term() {
        ReportStyle::Styled
    } else {
        ReportStyle::Plain
    }
}

fn output_error(e: TagCheckError, path: &Path) -> TagCheckError {
    match e {
        TagCheckError::Io(source) => TagCheckError::Output {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
