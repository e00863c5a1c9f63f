//! Hand-History Statistics Binary
//!
//! Parses a hand-history log and prints one of:
//! - the normalized per-(game, player) table
//! - per-player VPIP / PFR / Agg / BBW/100 profiles
//! - the OLS fit of BBW/100 on those profiles

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use handlog::stats::Summary;
use handlog::table::Table;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
    #[arg(short, long, global = true, help = "Log per-line anomalies")]
    verbose: bool,
    #[arg(short, long, global = true, conflicts_with = "verbose", help = "Only log errors")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Dump the normalized hand table", alias = "tab")]
    Table {
        #[arg(required = true)]
        path: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        #[arg(long, help = "Include the per-hand win share column")]
        shares: bool,
    },
    #[command(about = "Per-player VPIP, PFR, Agg and BBW/100", alias = "st")]
    Stats {
        #[arg(required = true)]
        path: PathBuf,
        #[arg(short, long, default_value_t = handlog::MIN_HANDS)]
        min_hands: usize,
        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    #[command(about = "Regress BBW/100 on VPIP, PFR and Agg", alias = "ols")]
    Regress {
        #[arg(required = true)]
        path: PathBuf,
        #[arg(short, long, default_value_t = handlog::MIN_HANDS)]
        min_hands: usize,
        #[arg(long, help = "Print the fit as JSON")]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    handlog::log(match (args.verbose, args.quiet) {
        (true, _) => log::LevelFilter::Debug,
        (_, true) => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    });
    let stdout = std::io::stdout().lock();
    match args.command {
        Command::Table {
            path,
            format,
            shares,
        } => {
            let (table, _) = Table::from_path(&path)?;
            match format {
                Format::Csv => table.write_csv(stdout, shares),
                Format::Json => table.write_json(stdout, shares),
                Format::Text => {
                    print!("{}", table);
                    Ok(())
                }
            }
        }
        Command::Stats {
            path,
            min_hands,
            format,
        } => {
            let (table, _) = Table::from_path(&path)?;
            let summary = Summary::from_table(&table, min_hands);
            log::info!("{} players with at least {} hands", summary.len(), min_hands);
            match format {
                Format::Csv => summary.write_csv(stdout),
                Format::Json => summary.write_json(stdout),
                Format::Text => {
                    print!("{}", summary);
                    Ok(())
                }
            }
        }
        Command::Regress {
            path,
            min_hands,
            json,
        } => {
            let (table, _) = Table::from_path(&path)?;
            let fit = Summary::from_table(&table, min_hands).fit()?;
            match json {
                true => Ok(serde_json::to_writer_pretty(stdout, &fit)?),
                false => {
                    println!("{}", fit);
                    Ok(())
                }
            }
        }
    }
}
