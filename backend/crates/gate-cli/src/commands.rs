use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Send a local image to the model endpoint and print its label
    Classify {
        /// Image file (jpg, jpeg, png or jfif by default)
        file: PathBuf,

        /// Model endpoint URL (default: classifier.endpoint_url from config)
        #[arg(long)]
        endpoint: Option<String>,

        /// Request timeout in seconds (default: classifier.timeout_secs)
        #[arg(long)]
        timeout: Option<u64>,

        /// Content type to validate against, instead of guessing from the extension
        #[arg(long)]
        content_type: Option<String>,
    },
}
