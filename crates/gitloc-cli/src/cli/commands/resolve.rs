//! `gitloc resolve <locator>` – find the repository and print path information.

use anyhow::{Context, Result};
use gitloc_core::config::GitlocConfig;
use gitloc_core::repository::{FsRepository, FsRepositoryLocator};
use gitloc_core::PathInformation;

pub async fn run_resolve(
    cfg: &GitlocConfig,
    locator: String,
    scheme: String,
    json: bool,
) -> Result<()> {
    let repo_locator = FsRepositoryLocator::from_config(cfg);
    // Discovery walks the filesystem; keep it off the runtime threads.
    let info = tokio::task::spawn_blocking(move || {
        PathInformation::from_locator(&locator, &scheme, &repo_locator)
    })
    .await
    .context("resolver task failed")??;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", format_info(&info));
    }
    Ok(())
}

pub(crate) fn format_info(info: &PathInformation<FsRepository>) -> String {
    let mut out = format!(
        "{:<12} {}\n{:<12} {}\n{:<12} {}\n{:<12} {}\n{:<12} {}\n",
        "URL",
        info.url(),
        "REPOSITORY",
        info.repository_path().display(),
        "FULL PATH",
        info.full_path(),
        "LOCAL PATH",
        info.local_path(),
        "REF",
        info.reference(),
    );
    for (name, value) in info.arguments().iter() {
        out.push_str(&format!("{:<12} {}={}\n", "ARGUMENT", name, value));
    }
    out
}
