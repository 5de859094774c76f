//! Upload dispatcher posting discovered sourcemaps to the APM server.

use crate::config::Config;
use crate::discovery;
use crate::payload;
use crate::types::{Result, UploadMode, UploadStatus, UploadTask};
use futures::future;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

/// Publisher driving the whole post-build upload step.
pub struct Publisher {
    client: Client,
    config: Config,
    endpoint: String,
}

impl Publisher {
    /// Create a new publisher with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("mapship/0.1")
            .build()?;

        let endpoint = format!("{}/api/apm/sourcemaps", config.kibana_base());

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// Run the publish step: discover sourcemaps and upload each one.
    ///
    /// Individual HTTP failures are logged and never abort the batch. A
    /// file-read failure does abort: it means the build output changed under
    /// us and the remaining uploads cannot be trusted.
    pub async fn run(&self) -> Result<Vec<UploadTask>> {
        if self.config.disabled {
            info!("Sourcemap upload disabled, skipping");
            return Ok(Vec::new());
        }

        let paths = discovery::find_sourcemaps(&self.config.dist_dir)?;
        if paths.is_empty() {
            debug!(
                "No sourcemaps under {}, nothing to publish",
                self.config.dist_dir.display()
            );
            return Ok(Vec::new());
        }

        let mut tasks: Vec<UploadTask> = paths
            .into_iter()
            .map(|path| {
                let bundle =
                    payload::bundle_filepath(&path, &self.config.dist_dir, &self.config.app_url);
                UploadTask::new(path, bundle)
            })
            .collect();

        let total = tasks.len();
        debug!("Uploading {} sourcemap(s) in {:?} mode", total, self.config.mode);

        match self.config.mode {
            UploadMode::Serial => {
                for (i, task) in tasks.iter_mut().enumerate() {
                    let status = self.upload_one(task, i + 1, total).await?;
                    task.status = status;
                }
            }
            UploadMode::Parallel => {
                // All requests are in flight before any completion is awaited.
                let results = future::join_all(
                    tasks
                        .iter()
                        .enumerate()
                        .map(|(i, task)| self.upload_one(task, i + 1, total)),
                )
                .await;

                for (task, result) in tasks.iter_mut().zip(results) {
                    task.status = result?;
                }
            }
        }

        Ok(tasks)
    }

    /// Upload a single sourcemap. `position` is the task's 1-based place in
    /// discovery order, used for the progress line regardless of mode.
    async fn upload_one(
        &self,
        task: &UploadTask,
        position: usize,
        total: usize,
    ) -> Result<UploadStatus> {
        let body = payload::build_body(
            &task.source_map_path,
            &task.bundle_filepath,
            &self.config.service_name,
            self.config.service_version,
        )?;

        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", payload::CONTENT_TYPE)
            .header("kbn-xsrf", "true")
            .header("Authorization", format!("ApiKey {}", api_key))
            .body(body)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                info!("Uploaded! ({}/{})", position, total);
                Ok(UploadStatus::SentOk)
            }
            Ok(response) => {
                let error_body = response.text().await.unwrap_or_default();
                error!("[ERROR] {}", error_body);
                Ok(UploadStatus::SentFailed)
            }
            Err(e) => {
                error!("[ERROR] {}", e);
                Ok(UploadStatus::SentFailed)
            }
        }
    }
}
