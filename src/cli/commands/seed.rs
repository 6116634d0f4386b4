use anyhow::Context;
use clap::Args;
use rand::Rng;
use serde_json::json;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::{JsonFileStore, RecordStore};
use crate::models::{StoreOverwrite, StoreTime};

#[derive(Args, Debug)]
pub struct SeedArgs {
    #[arg(long, help = "Data directory (defaults to DATA_DIR or ./data)")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, help = "Replace existing data files")]
    pub force: bool,
}

pub async fn handle(args: SeedArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = dir;
    }

    tokio::fs::create_dir_all(&config.storage.data_dir)
        .await
        .with_context(|| format!("failed to create {}", config.storage.data_dir.display()))?;

    let times_path = config.store_times_path();
    let overwrites_path = config.store_overwrites_path();

    if times_path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists; pass --force to replace it",
            times_path.display()
        );
    }

    let store_times = sample_store_times(&mut rand::thread_rng());
    JsonFileStore::<StoreTime>::new(&times_path)
        .save(&store_times)
        .await
        .with_context(|| format!("failed to write {}", times_path.display()))?;

    let wrote_overwrites = write_empty_if_needed(&overwrites_path, args.force).await?;

    let open_days = store_times.iter().filter(|t| t.is_open).count();
    output_success(
        &output_format,
        &format!(
            "Wrote {} store times ({} open) to {}",
            store_times.len(),
            open_days,
            times_path.display()
        ),
        Some(json!({
            "store_times": store_times,
            "store_overwrites_written": wrote_overwrites,
        })),
    )
}

/// One rule per weekday 0-6, each randomly open 09:00-18:00 or closed
pub fn sample_store_times<R: Rng>(rng: &mut R) -> Vec<StoreTime> {
    (0..7)
        .map(|day_of_week| {
            let is_open = rng.gen_bool(0.5);
            StoreTime {
                id: Uuid::new_v4().to_string(),
                day_of_week,
                is_open,
                start_time: is_open.then(|| "09:00".to_string()),
                end_time: is_open.then(|| "18:00".to_string()),
            }
        })
        .collect()
}

async fn write_empty_if_needed(path: &Path, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    JsonFileStore::<StoreOverwrite>::new(path)
        .save(&[])
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
