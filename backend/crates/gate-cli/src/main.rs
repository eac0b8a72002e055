//! gate - classification gate CLI
//!
//! # Examples
//!
//! ```bash
//! # Classify with the configured endpoint
//! gate classify monarch.jpg --pretty
//!
//! # Another endpoint, shorter timeout
//! gate classify wing.png --endpoint http://127.0.0.1:9000/predict --timeout 5
//! ```

use gate_cli::{ClassifyOptions, classify_file, cli::Cli, commands::Commands, is_success};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config file and GATE_* variables supply the defaults
    let config = match gate_config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}; using default classifier settings", e);
            gate_config::Config::default()
        }
    };
    for ignored in &config.ignored_env_overrides {
        eprintln!("Warning: ignored unparseable override {ignored}");
    }

    let result = match cli.command {
        Commands::Classify {
            file,
            endpoint,
            timeout,
            content_type,
        } => {
            let options = ClassifyOptions {
                endpoint,
                timeout_secs: timeout,
                content_type,
            };
            classify_file(&file, &options, &config.classifier).await
        }
    };

    let code = if is_success(&result) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    match result {
        Ok(prediction) => {
            let body = prediction.to_body();
            let output = if cli.pretty {
                serde_json::to_string_pretty(&body)
            } else {
                serde_json::to_string(&body)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    code
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            code
        }
    }
}
