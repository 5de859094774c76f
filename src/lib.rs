//! mapship - post-build sourcemap publisher for Elastic APM.
//!
//! This library publishes a frontend build's sourcemaps to the Kibana
//! sourcemap API so APM can symbolicate production stack traces:
//! - Discovering `*.map` files under the build output directory
//! - Deriving the public bundle URL for each map
//! - POSTing one multipart payload per file, serially or in parallel
//!
//! # Example
//!
//! ```no_run
//! use mapship::config::Config;
//! use mapship::publisher::Publisher;
//!
//! #[tokio::main]
//! async fn main() {
//!     let publisher = Publisher::new(Config::default()).unwrap();
//!     let tasks = publisher.run().await.unwrap();
//!     println!("Attempted {} uploads", tasks.len());
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod payload;
pub mod publisher;
pub mod types;

pub use config::Config;
pub use publisher::Publisher;
pub use types::{MapshipError, Result, UploadMode, UploadStatus, UploadTask};
