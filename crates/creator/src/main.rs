//! charforge Creator - builds one character from environment configuration
//! and logs its final attribute scores.

use std::path::{Path, PathBuf};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod creator;

use config::CreatorConfig;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (cargo runs the binary from `crates/creator`).
    let dotenv_failures = load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge_creator=info,charforge_domain=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    for (path, err) in &dotenv_failures {
        tracing::warn!("Failed to load {}: {}", path.display(), err);
    }

    tracing::info!("Starting charforge Creator");

    let config = CreatorConfig::from_env()?;
    tracing::debug!(
        race = %config.race,
        adjustments = config.adjustments.len(),
        "Loaded configuration"
    );

    let (character, outcomes) = creator::create(config);
    let mut rejected = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(score) => tracing::info!("Applied {:?}: now {}", outcome.adjustment, score),
            Err(err) => {
                rejected += 1;
                tracing::warn!("Skipped adjustment {:?}: {}", outcome.adjustment, err);
            }
        }
    }

    for (attribute, score) in character.attributes().iter() {
        tracing::info!("{}: {}", attribute.display_name(), score);
    }
    tracing::info!(
        race = %character.race(),
        total = character.attributes().total(),
        applied = outcomes.len() - rejected,
        rejected,
        "Character complete"
    );

    Ok(())
}

fn load_dotenv_from_repo_root() -> Vec<(PathBuf, dotenvy::Error)> {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    load_dotenv_from(&repo_root)
}

/// Loads `.env.local` then `.env` from `dir`, returning the files that exist
/// but failed to load.
fn load_dotenv_from(dir: &Path) -> Vec<(PathBuf, dotenvy::Error)> {
    // Prefer local overrides.
    let mut failures = Vec::new();
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            if let Err(err) = dotenvy::from_path(&path) {
                failures.push((path, err));
            }
        }
    }
    failures
}
