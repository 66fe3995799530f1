//! line-bidding: award schedule lines by seniority from pasted bid sheets.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use line_bidding::display::{print_results, write_results_to_file};
use line_bidding::{assign_lines, parse_bid_data, web};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Enable verbose logging (use -vv for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the bid form and JSON/CSV endpoints
    Web {
        /// Address to bind
        #[arg(long, env = "LINE_BID_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Assign lines from a bid sheet and print the awards
    Assign {
        /// Bid sheet to read, or "-" for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Also write the awards as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read bids from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {:?}", input))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("line-bidding v{}", env!("CARGO_PKG_VERSION"));
    debug!("{:?}", args.command);

    match args.command {
        Command::Web { host, port } => {
            web::start_server(&host, port)
                .await
                .with_context(|| format!("Web server on {}:{} failed", host, port))?;
        }
        Command::Assign { input, csv } => {
            let text = read_input(&input)?;
            let bids = parse_bid_data(&text)
                .with_context(|| format!("No bids parsed from {:?}", input))?;
            let results = assign_lines(&bids);

            print_results(&results);

            if let Some(path) = csv {
                write_results_to_file(&results, &path)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("\nAwards saved to {}", path.display());
            }
        }
    }

    Ok(())
}
