//! Upload command - mirror a local tree into a remote folder
//!
//! Provides the `boxup upload` CLI command which:
//! 1. Resolves the access token from the flag or the environment
//! 2. Creates the Box adapter from the endpoint configuration
//! 3. Runs the MirrorEngine and streams progress to the console

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use boxup_api::client::BoxClient;
use boxup_api::provider::BoxRemoteStorage;
use boxup_core::config::Config;
use boxup_core::domain::newtypes::RemotePath;
use boxup_sync::engine::{MirrorEngine, UploadRequest};

use crate::output::ConsoleReporter;

/// Environment variable consulted when `--access-token` is absent.
const TOKEN_ENV_VAR: &str = "BOX_ACCESS_TOKEN";

#[derive(Debug, Args)]
pub struct UploadCommand {
    /// Local file or directory to upload
    pub source: PathBuf,

    /// Remote folder path to mirror into (e.g. "backup/photos")
    pub destination: String,

    /// Replace remote files whose content differs
    #[arg(long)]
    pub overwrite: bool,

    /// Traverse symbolic links instead of skipping them
    #[arg(long)]
    pub follow_links: bool,
}

impl UploadCommand {
    /// Executes the upload command.
    ///
    /// Wires the Box adapter into the mirror engine and runs it to
    /// completion. Any fatal error propagates out and exits non-zero.
    pub async fn execute(&self, access_token: Option<&str>, config: &Config) -> Result<()> {
        let token = resolve_token(access_token)?;
        info!(
            source = %self.source.display(),
            destination = %self.destination,
            "upload requested"
        );
        let destination = RemotePath::new(&self.destination)
            .with_context(|| format!("Invalid destination path '{}'", self.destination))?;

        let client = BoxClient::from_config(token, &config.api);
        let storage = Arc::new(BoxRemoteStorage::new(client));
        let engine = MirrorEngine::new(storage);

        let request = UploadRequest {
            source: self.source.clone(),
            destination,
            overwrite: self.overwrite,
            follow_links: self.follow_links,
        };

        let mut reporter = ConsoleReporter;
        engine.run(&request, &mut reporter).await?;
        Ok(())
    }
}

/// Resolves the access token from the flag or the environment.
fn resolve_token(flag: Option<&str>) -> Result<String> {
    if let Some(token) = flag {
        return Ok(token.to_string());
    }
    std::env::var(TOKEN_ENV_VAR).with_context(|| {
        format!("No access token provided. Pass --access-token or set {TOKEN_ENV_VAR}.")
    })
}
