use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "anodra",
    about = "An interactive scaffolding CLI for React projects",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a welcome message
    Welcome,

    /// Create a new project interactively
    Create {
        /// Name of the project directory to create
        name: String,

        /// Skip opening the project in the editor
        #[arg(long)]
        no_editor: bool,

        /// Skip starting the development server after scaffolding
        #[arg(long)]
        no_dev: bool,
    },

    /// Print information about this tool
    Info,
}
