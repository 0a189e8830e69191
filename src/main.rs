use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use fleet::audit::{AuditEntry, AuditLogger};
use fleet::cli::Menu;
use fleet::config::FleetPaths;
use fleet::storage::FleetStore;

#[derive(Parser)]
#[command(
    name = "fleet",
    version,
    about = "Boat inventory and maintenance budget tracker",
    long_about = "Keeps track of a sailing club's fleet: what each boat cost and how \
                  much has been spent on it. Expenses are only authorized while they \
                  stay within the boat's purchase price."
)]
struct Cli {
    /// CSV file to import at startup (CATEGORY,NAME,YEAR,MAKE_MODEL,LENGTH,PRICE).
    /// When omitted, the saved fleet snapshot is loaded instead.
    csv_file: Option<PathBuf>,

    /// Directory holding FleetData.db and the activity log
    /// [default: the current directory]
    #[arg(short, long, env = "FLEET_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FleetPaths::with_base_dir(dir),
        None => FleetPaths::new()?,
    };

    let mut store = FleetStore::new();

    match cli.csv_file {
        Some(csv_file) => match store.import_delimited(&csv_file) {
            Ok(summary) => {
                let entry = AuditEntry::import(
                    csv_file.display().to_string(),
                    summary.imported,
                    summary.skipped,
                );
                if let Err(e) = AuditLogger::new(paths.audit_log()).log(&entry) {
                    eprintln!("Warning: could not write activity log: {}", e);
                }
            }
            Err(e) => println!("Error reading CSV file: {}", e),
        },
        None => {
            if store.load_snapshot(paths.snapshot_file()).is_err() {
                println!("No serialized data found, starting with an empty fleet.");
            }
        }
    }

    println!("Welcome to the Fleet Management System");
    println!("--------------------------------------");

    let stdin = io::stdin();
    let mut menu = Menu::new(store, paths, stdin.lock(), io::stdout());
    menu.run()?;

    Ok(())
}
