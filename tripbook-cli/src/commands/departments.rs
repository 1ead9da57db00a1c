//! Command to list or check Bolivian department names.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use tripbook::Department;

/// List the known departments, or check a single name.
#[derive(Args)]
pub struct DepartmentsCommand {
    /// Name to check; prints its canonical spelling or fails
    #[arg(long, value_name = "NAME")]
    pub check: Option<String>,
}

impl DepartmentsCommand {
    /// Execute the departments command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        match self.check {
            Some(name) => {
                let department = name.parse::<Department>().map_err(tripbook::Error::from)?;
                println!("{department}");
            }
            None => {
                for department in Department::ALL {
                    println!("{department}");
                }
            }
        }
        Ok(())
    }
}
