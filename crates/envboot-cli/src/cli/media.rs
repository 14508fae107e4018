//! Media commands: `url`, `upload`, `destroy`

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Args;

use envboot_core::{EnvironmentResolver, MediaClient, MediaClientFactory, ResourceType, UploadOptions};

fn parse_resource_type(s: &str) -> Result<ResourceType, String> {
    ResourceType::parse(s).ok_or_else(|| format!("unknown resource type '{}' (image, video, raw, auto)", s))
}

#[derive(Args)]
pub struct UrlArgs {
    /// Public id of the asset
    pub public_id: String,

    #[arg(long, default_value = "image", value_parser = parse_resource_type)]
    pub resource_type: ResourceType,
}

#[derive(Args)]
pub struct UploadArgs {
    /// Remote URL or data URI of the asset
    pub file: String,

    #[arg(long)]
    pub public_id: Option<String>,

    #[arg(long)]
    pub folder: Option<String>,

    #[arg(long, default_value = "auto", value_parser = parse_resource_type)]
    pub resource_type: ResourceType,
}

#[derive(Args)]
pub struct DestroyArgs {
    /// Public id of the asset
    pub public_id: String,

    #[arg(long, default_value = "image", value_parser = parse_resource_type)]
    pub resource_type: ResourceType,
}

fn client(resolver: &Arc<EnvironmentResolver>) -> Result<MediaClient> {
    Ok(MediaClientFactory::new(Arc::clone(resolver)).build_client()?)
}

pub fn run_url(resolver: &Arc<EnvironmentResolver>, args: UrlArgs) -> Result<ExitCode> {
    let url = client(resolver)?.delivery_url(args.resource_type, &args.public_id)?;
    println!("{}", url);
    Ok(ExitCode::SUCCESS)
}

pub async fn run_upload(resolver: &Arc<EnvironmentResolver>, args: UploadArgs) -> Result<ExitCode> {
    let client = client(resolver)?;

    let mut options = UploadOptions::new().with_resource_type(args.resource_type);
    if let Some(public_id) = args.public_id {
        options = options.with_public_id(public_id);
    }
    if let Some(folder) = args.folder {
        options = options.with_folder(folder);
    }

    let result = client.upload(&args.file, &options).await?;
    tracing::info!("uploaded {}", result.public_id);
    println!(
        "{}",
        result
            .secure_url
            .or(result.url)
            .unwrap_or(result.public_id)
    );
    Ok(ExitCode::SUCCESS)
}

pub async fn run_destroy(resolver: &Arc<EnvironmentResolver>, args: DestroyArgs) -> Result<ExitCode> {
    let result = client(resolver)?
        .destroy(&args.public_id, args.resource_type)
        .await?;

    if !result.is_ok() {
        return Err(anyhow!("destroy {}: {}", args.public_id, result.result));
    }
    println!("deleted {}", args.public_id);
    Ok(ExitCode::SUCCESS)
}
