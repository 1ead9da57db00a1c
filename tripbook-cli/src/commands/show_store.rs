//! Command to show the resolved reservation store.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_store, GlobalOptions};
use clap::Args;

/// Show the resolved store backend and location.
#[derive(Args)]
pub struct ShowStoreCommand {
    /// Print only the store path
    #[arg(long)]
    pub path_only: bool,
}

impl ShowStoreCommand {
    /// Execute the show-store command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = resolve_store(global, &config)?;

        if self.path_only {
            println!("{}", path.display());
            return Ok(());
        }

        println!("backend: {}", config.store_backend());
        println!("path: {}", path.display());
        if global.verbose {
            println!("exists: {}", path.exists());
            println!("cost policy: {}", config.cost_policy());
            println!("strict departments: {}", config.strict_departments());
        }
        Ok(())
    }
}
