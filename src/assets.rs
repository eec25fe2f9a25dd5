//! Static Asset Manifest
//!
//! The page references images by naming convention only: carousel slides are
//! `{slug}-{n}.jpg` with `n` starting at 1, and the budgeting modal uses a
//! single overlay picture.

use std::path::{Path, PathBuf};

use crate::model::Dashboard;

/// Header art of the budgeting modal
pub const MODAL_OVERLAY: &str = "modal-overlay.png";

/// Every file name the dashboard page loads from the asset root
pub fn expected_assets(dashboard: &Dashboard) -> Vec<String> {
    let mut files: Vec<String> = dashboard
        .carousels
        .iter()
        .flat_map(|c| (1..=c.len()).map(move |n| format!("{}-{}.jpg", c.slug, n)))
        .collect();
    files.push(MODAL_OVERLAY.to_string());
    files
}

/// Expected assets that are not regular files under `dir`
pub fn missing_assets(dir: &Path, dashboard: &Dashboard) -> Vec<String> {
    expected_assets(dashboard)
        .into_iter()
        .filter(|name| !dir.join(name).is_file())
        .collect()
}

/// Presence of every expected asset under one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReport {
    pub dir: PathBuf,
    /// Expected file names in page order, each with whether it was found
    pub entries: Vec<(String, bool)>,
}

impl AssetReport {
    pub fn scan(dir: &Path, dashboard: &Dashboard) -> Self {
        let missing = missing_assets(dir, dashboard);
        let entries = expected_assets(dashboard)
            .into_iter()
            .map(|name| {
                let present = !missing.contains(&name);
                (name, present)
            })
            .collect();

        Self {
            dir: dir.to_path_buf(),
            entries,
        }
    }

    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, present)| *present)
    }

    /// One `ok`/`missing` line per expected file
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, present)| {
                let status = if *present { "ok" } else { "missing" };
                format!("  {:<8} {}", status, name)
            })
            .collect()
    }
}
