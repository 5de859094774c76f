//! Configuration handling for the publisher.

use crate::types::UploadMode;
use clap::Parser;
use std::path::PathBuf;

/// Post-build sourcemap publisher for Elastic APM.
///
/// Scans a build output directory for `*.map` files and uploads each one to
/// the Kibana sourcemap API so APM can symbolicate production stack traces.
#[derive(Parser, Debug, Clone)]
#[command(name = "mapship")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Build output directory to scan for sourcemaps
    #[arg(short, long, default_value = "dist")]
    pub dist_dir: PathBuf,

    /// APM service name attached to every upload
    #[arg(long, default_value = "frontend")]
    pub service_name: String,

    /// APM service version attached to every upload
    #[arg(long, default_value = "1")]
    pub service_version: u32,

    /// Public base URL the bundles are served from
    #[arg(long, default_value = "http://localhost:4173")]
    pub app_url: String,

    /// Kibana server base URL
    #[arg(long, env = "MAPSHIP_KIBANA_URL")]
    pub kibana_url: Option<String>,

    /// API key authorized to upload sourcemaps
    #[arg(long, env = "MAPSHIP_APM_API_KEY")]
    pub api_key: Option<String>,

    /// Upload scheduling mode
    #[arg(long, value_enum, default_value = "serial")]
    pub mode: UploadMode,

    /// Skip uploading entirely (for local/dev builds)
    #[arg(long, env = "MAPSHIP_DISABLED")]
    pub disabled: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
            service_name: "frontend".to_string(),
            service_version: 1,
            app_url: "http://localhost:4173".to_string(),
            kibana_url: None,
            api_key: None,
            mode: UploadMode::Serial,
            disabled: false,
            timeout: 30,
            verbose: false,
        }
    }
}

impl Config {
    /// Kibana base URL with a trailing slash removed, empty when unset.
    ///
    /// Missing values are not validated here: an empty destination simply
    /// fails at request time, the same as any other unreachable server.
    pub fn kibana_base(&self) -> String {
        self.kibana_url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string()
    }
}
