use clap::{Parser, Subcommand};

use crate::keys::DEFAULT_CONNECTOR_ID;

#[derive(Parser, Debug)]
#[command(name = "gitsign-setup")]
#[command(about = "Configure local git commit signing via gitsign", long_about = None)]
pub struct Cli {
    /// Log level; only "error" enables printing of failure messages
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Setup git signing configuration
    SetupGitsign {
        /// Email address to configure; prompts interactively when omitted
        #[arg(short, long)]
        email: Option<String>,

        /// Connector identity used by gitsign to select an auth flow
        #[arg(short, long = "connectorID", value_name = "URL", default_value = DEFAULT_CONNECTOR_ID)]
        connector_id: String,
    },

    /// Remove git signing configuration
    ClearGitsign,
}
