use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::types::Layout;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    List,
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "usuarios")]
#[command(about = "Fetch and list users from the usuarios REST endpoint", version)]
#[command(after_help = "EXAMPLES:
    usuarios list                     List users from the default endpoint
    usuarios list --layout city       Show city instead of age
    usuarios list -o table            Show all fields as a table
    usuarios serve                    Run the demo backend on 127.0.0.1:5000")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (list, table, json)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "list")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress headings and messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs (including the raw response body) and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the users once and print them
    #[command(visible_alias = "ls")]
    #[command(after_help = "EXAMPLES:
    usuarios list
    usuarios list --url http://localhost:8080/api/v1/usuarios
    usuarios list --layout city --json")]
    List(ListArgs),
    /// Run the demo backend
    #[command(after_help = "EXAMPLES:
    usuarios serve
    usuarios serve --host 0.0.0.0 --port 8080")]
    Serve(ServeArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    usuarios completions bash > ~/.bash_completion.d/usuarios
    usuarios completions zsh > ~/.zfunc/_usuarios")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args, Clone, Default)]
pub struct ListArgs {
    /// Endpoint URL (overrides USUARIOS_API_URL and the config file)
    #[arg(long)]
    pub url: Option<String>,

    /// Field shown after id and name
    #[arg(long, value_enum)]
    pub layout: Option<Layout>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "5000")]
    pub port: u16,
}
