use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rustc-env=FIGPACK_GIT_HASH={}", describe_revision());

    for tracked in [".git/HEAD", ".git/index", ".git/packed-refs"] {
        if Path::new(tracked).exists() {
            println!("cargo:rerun-if-changed={tracked}");
        }
    }
    println!("cargo:rerun-if-env-changed=FIGPACK_GIT_HASH");
}

/// Short commit id with a `-dirty` suffix for uncommitted changes. Packaged
/// sources have no repository, so an explicit override or "unknown" is used.
fn describe_revision() -> String {
    if let Ok(forced) = std::env::var("FIGPACK_GIT_HASH")
        && !forced.trim().is_empty()
    {
        return forced.trim().to_string();
    }

    Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=10"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|revision| !revision.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
