//! vinv - virtualization inventory CLI
//!
//! Browses the hierarchical inventory of a virtualization platform
//! (datacenters, folders, compute resources, networks, datastores, virtual
//! machines) the way `ls` browses a filesystem.

use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;
mod error;
mod inventory;
mod output;

use cli::{Cli, Commands};
use error::{Result, VinvError};
use inventory::snapshot::SnapshotInventory;
use output::ResultSink;

/// Open the inventory backend configured via flags or environment
fn open_inventory(path: Option<PathBuf>, datacenter: Option<String>) -> Result<SnapshotInventory> {
    let path = path.ok_or(VinvError::InventoryNotConfigured)?;
    SnapshotInventory::load(&path, datacenter)
}

fn main() {
    let cli = Cli::parse();

    let sink = ResultSink::new(cli.json);

    let result = match cli.command {
        Commands::Ls(args) => open_inventory(cli.inventory, cli.dc)
            .and_then(|inv| commands::ls::run(&inv, &inv, &sink, args)),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_inventory_without_configuration() {
        let result = open_inventory(None, None);
        assert!(matches!(
            result.unwrap_err(),
            VinvError::InventoryNotConfigured
        ));
    }

    #[test]
    fn test_open_inventory_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = open_inventory(Some(temp.path().join("absent.json")), None);
        assert!(matches!(
            result.unwrap_err(),
            VinvError::InventoryReadFailed { .. }
        ));
    }

    #[test]
    fn test_open_inventory_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inventory.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not json").unwrap();

        let result = open_inventory(Some(path), None);
        assert!(matches!(
            result.unwrap_err(),
            VinvError::InventoryParseFailed { .. }
        ));
    }

    #[test]
    fn test_open_inventory_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inventory.json");
        std::fs::write(
            &path,
            r#"[{"name": "dc1", "kind": "Datacenter", "children": []}]"#,
        )
        .unwrap();

        assert!(open_inventory(Some(path), None).is_ok());
    }
}
