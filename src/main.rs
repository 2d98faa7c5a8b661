use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use store_report::cli;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage:  {date MM/dd/YYYY} {store #(UT104,UT201 or UT202)}";

#[derive(Parser)]
#[command(name = "store-report")]
#[command(about = "Print the daily deposit breakdown from a weekly Store Analysis export")]
#[command(long_about = "Store Report - weekly Store Analysis export reader

Looks in your Downloads folder for Store_Analysis*.xls exports, picks the one
whose header names STORE and whose week contains DATE, then prints six daily
blocks: tips, sales tax, retail, service, BoA deposit and Amex.

  BoA deposit = total - amex - cash
  Service     = BoA deposit - retail - sales tax - tips

EXAMPLES:
  store-report 03/04/2024 UT104
  store-report 3/4/2024 ut201 --dir ~/exports")]
#[command(version)]
struct Cli {
    /// Any date in the report week (MM/dd/yyyy)
    date: String,

    /// Store number as printed in the export header (e.g. UT104, UT201, UT202)
    store: String,

    /// Directory to search instead of ~/Downloads
    #[arg(long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "store_report=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", USAGE);
                eprintln!("{}", e);
                return ExitCode::from(1);
            }
        },
    };

    init_tracing(cli.verbose);

    let result = cli::report(&cli.date, &cli.store, cli.dir)
        .with_context(|| format!("store report for {} ({}) failed", cli.store, cli.date));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:?}", "ERROR:".red().bold(), err);
            ExitCode::from(1)
        }
    }
}
