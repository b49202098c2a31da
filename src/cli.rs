use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "skvmeste-bot")]
#[command(author, version, about = "Telegram bot collecting house-building leads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling unless --webhook is given)
    Run {
        /// Use webhook mode instead of long polling
        #[arg(long)]
        webhook: bool,
    },

    /// Validate environment configuration and exit
    CheckConfig {
        /// Also require webhook settings
        #[arg(long)]
        webhook: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
