//! Stamps the binary with the commit it was built from (`ANOTA_BUILD_SHA`).

use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let workspace = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
        .join("..");

    for path in rebuild_triggers(&workspace.join(".git")) {
        println!("cargo:rerun-if-changed={}", path.display());
    }
    println!("cargo:rerun-if-changed=build.rs");

    let sha = short_sha(&workspace).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=ANOTA_BUILD_SHA={sha}");
}

fn short_sha(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!sha.is_empty()).then_some(sha)
}

/// HEAD moves on checkout; the branch ref (or packed-refs) moves on commit.
fn rebuild_triggers(git_dir: &Path) -> Vec<PathBuf> {
    let head = git_dir.join("HEAD");
    let Ok(contents) = std::fs::read_to_string(&head) else {
        return Vec::new();
    };

    let mut paths = vec![head];
    if let Some(branch_ref) = contents.trim().strip_prefix("ref: ") {
        paths.push(git_dir.join(branch_ref));
        paths.push(git_dir.join("packed-refs"));
    }
    // a missing path would make cargo rerun the script on every build
    paths.retain(|p| p.exists());
    paths
}
