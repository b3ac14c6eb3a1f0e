//! Minimal CLI to drive the format resolver against a fixture provider.
//!
//! The fixture is described by a JSON values file: declared capabilities
//! plus the content each native accessor should return. Every command
//! prints the raw `{data, meta}` JSON a library consumer would see.

use std::{fs, path::PathBuf, process, sync::Arc};

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use provider_common::{
    AuthContext, Capabilities, ContentPath, ContentProvider, ProviderMetadata, ProviderRegistry,
    ProviderResult,
};
use serde::{Deserialize, Serialize};
use showplan_resolver::{
    get_expanded_instructions_with_meta, get_instructions_with_meta, get_playlist_with_meta,
    get_presentations_with_meta,
};
use showplan_types::{ContentFile, Instructions, Plan};
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

const FIXTURE_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    FIXTURE_SCHEMA_VERSION
}

fn default_provider_id() -> String {
    "fixture".to_string()
}

/// On-disk shape of the `--values` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct FixtureSpec {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default = "default_provider_id")]
    provider_id: String,
    #[serde(default)]
    capabilities: Capabilities,
    #[serde(default)]
    plan: Option<Plan>,
    #[serde(default)]
    playlist: Option<Vec<ContentFile>>,
    #[serde(default)]
    instructions: Option<Instructions>,
    #[serde(default)]
    expanded_instructions: Option<Instructions>,
}

impl FixtureSpec {
    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.schema_version == FIXTURE_SCHEMA_VERSION,
            "unsupported values schema version {} (expected {})",
            self.schema_version,
            FIXTURE_SCHEMA_VERSION
        );
        Ok(())
    }
}

/// Provider that serves whatever the values file scripted.
struct FixtureProvider {
    spec: FixtureSpec,
}

#[async_trait]
impl ContentProvider for FixtureProvider {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            provider_id: self.spec.provider_id.clone(),
            display_name: "Fixture".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            capabilities: self.spec.capabilities,
        }
    }

    async fn get_presentations(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
    ) -> ProviderResult<Option<Plan>> {
        Ok(self.spec.plan.clone())
    }

    async fn get_playlist(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
        _resolution: Option<&str>,
    ) -> ProviderResult<Option<Vec<ContentFile>>> {
        Ok(self.spec.playlist.clone())
    }

    async fn get_instructions(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
    ) -> ProviderResult<Option<Instructions>> {
        Ok(self.spec.instructions.clone())
    }

    async fn get_expanded_instructions(
        &self,
        _path: &ContentPath,
        _auth: &AuthContext,
    ) -> ProviderResult<Option<Instructions>> {
        Ok(self.spec.expanded_instructions.clone())
    }
}

#[derive(Parser)]
#[command(name = "showplan-tester")]
#[command(about = "Drive the format resolver against a fixture provider", long_about = None)]
struct Cli {
    /// JSON values file describing the fixture provider.
    #[arg(long, value_name = "VALUES_JSON", global = true)]
    values: Option<PathBuf>,
    /// Provider id to resolve against (defaults to the values file's id).
    #[arg(long, global = true)]
    provider: Option<String>,
    /// Content path inside the provider's tree.
    #[arg(long, default_value = "", global = true)]
    path: String,
    /// Bearer token forwarded to the provider accessors.
    #[arg(long, global = true)]
    token: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the fixture provider's metadata and capability flags.
    Capabilities,
    /// Resolve the flat playlist view.
    Playlist,
    /// Resolve the sectioned plan view.
    Presentations,
    /// Resolve the instructions outline view.
    Instructions {
        /// Resolve the expanded shape instead of the plain outline.
        #[arg(long)]
        expanded: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    runtime.block_on(execute(cli))
}

async fn execute(cli: Cli) -> Result<()> {
    let values = cli
        .values
        .as_ref()
        .context("--values <VALUES_JSON> is required")?;
    let raw = fs::read_to_string(values)
        .with_context(|| format!("read values file {}", values.display()))?;
    let spec: FixtureSpec = serde_json::from_str(&raw)
        .with_context(|| format!("parse values file {}", values.display()))?;
    spec.validate()?;

    let mut registry = ProviderRegistry::new();
    let provider_id = cli.provider.clone().unwrap_or_else(|| spec.provider_id.clone());
    registry.register(Arc::new(FixtureProvider { spec }));
    let provider = registry.require(&provider_id)?;

    let path = ContentPath::from(cli.path.as_str());
    let auth = match &cli.token {
        Some(token) => AuthContext::bearer(token),
        None => AuthContext::anonymous(),
    };

    let (output, obtained) = match cli.command {
        Command::Capabilities => {
            let metadata = provider.metadata();
            (serde_json::to_value(&metadata)?, true)
        }
        Command::Playlist => {
            let resolved = get_playlist_with_meta(provider.as_ref(), &path, &auth).await;
            let obtained = resolved.data.is_some();
            (serde_json::to_value(&resolved)?, obtained)
        }
        Command::Presentations => {
            let resolved = get_presentations_with_meta(provider.as_ref(), &path, &auth).await;
            let obtained = resolved.data.is_some();
            (serde_json::to_value(&resolved)?, obtained)
        }
        Command::Instructions { expanded } => {
            let resolved = if expanded {
                get_expanded_instructions_with_meta(provider.as_ref(), &path, &auth).await
            } else {
                get_instructions_with_meta(provider.as_ref(), &path, &auth).await
            };
            let obtained = resolved.data.is_some();
            (serde_json::to_value(&resolved)?, obtained)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    if !obtained {
        // the view is not supported by any resolution path
        process::exit(2);
    }
    Ok(())
}
