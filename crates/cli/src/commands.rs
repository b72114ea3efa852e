use clap::Subcommand;
use snapenv_config::RouteTable;
use snapenv_env::Processor;
use snapenv_snapctl::Snapctl;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Process apps.* and config.* options into override files
    Process {
        /// Services to write override files for
        services: Vec<String>,
    },

    /// Process only the custom (non-config) options of one service
    Options {
        /// Service name
        service: String,
    },
}

impl Commands {
    pub fn execute(self, res_dir: PathBuf) -> eyre::Result<()> {
        let store = Snapctl::new();
        let routes = RouteTable::builtin();
        let processor = Processor::new(&store, &routes, res_dir);

        match self {
            Commands::Process { services } => processor.process_app_config(&services)?,
            Commands::Options { service } => processor.process_custom_options(&service)?,
        }
        Ok(())
    }
}
