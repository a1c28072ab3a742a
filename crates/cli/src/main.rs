use std::path::PathBuf;

use clap::Parser;

use stockkeep_inventory::InventoryStore;

mod commands;
mod config;

use commands::Command;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "stockkeep", about = "Track item quantities in a JSON inventory file")]
struct Cli {
    /// Inventory file (overrides STOCKKEEP_FILE, default inventory.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    stockkeep_observability::tracing::init_with_default(filter);

    let config = CliConfig::from_env()?.with_file(cli.file);
    tracing::debug!(
        file = %config.data_file.display(),
        threshold = config.low_stock_threshold,
        "configuration resolved"
    );

    let mut store = InventoryStore::new();
    let stdout = std::io::stdout();
    commands::run(&mut store, cli.command, &config, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_quantities_reach_the_store() {
        let cli = Cli::try_parse_from(["stockkeep", "add", "apple", "-3"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Add {
                item: "apple".into(),
                qty: -3
            }
        );
    }

    #[test]
    fn file_flag_and_threshold_parse() {
        let cli =
            Cli::try_parse_from(["stockkeep", "--file", "x.json", "low", "--threshold", "7"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
        assert_eq!(cli.command, Command::Low { threshold: Some(7) });
    }

    #[test]
    fn non_integer_quantity_is_rejected() {
        assert!(Cli::try_parse_from(["stockkeep", "add", "apple", "ten"]).is_err());
    }
}
