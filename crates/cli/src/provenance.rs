//! Provenance sidecars for files written by the CLI.
//!
//! Every `--out` artifact gets a `<stem>.provenance.json` next to it recording the
//! code revision, library version, the command parameters and the callsite.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub planar_version: &'static str,
    pub callsite: String,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Sidecar {
    /// Sidecar for `artifact` stamped with the caller's location.
    #[track_caller]
    pub fn for_artifact(artifact: &Path, params: Value) -> Self {
        let loc = Location::caller();
        Self {
            code_rev: current_git_rev(),
            planar_version: planar::VERSION,
            callsite: format!("{}:{}", loc.file(), loc.line()),
            params,
            outputs: vec![artifact.to_string_lossy().into_owned()],
        }
    }
}

/// Write the sidecar for `artifact`; returns the sidecar path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, params: Value) -> Result<PathBuf> {
    let doc = Sidecar::for_artifact(artifact, params);
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating provenance dir {}", parent.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
