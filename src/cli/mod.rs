use std::path::PathBuf;

use clap::Subcommand;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat proxy HTTP server
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Use a canned completion client instead of the hosted API
        #[arg(long)]
        mock_completion: bool,
    },

    /// Interactive chat session against a running server
    Chat {
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server_url: String,

        /// Stage an image before the first message
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Describe a single image via the analysis endpoint
    Analyze {
        image: PathBuf,

        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server_url: String,
    },
}
