use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=CREATIVEHUB_API_BASE_URL");
    println!("cargo:rerun-if-env-changed=CREATIVEHUB_AUTH_URL");
    println!("cargo:rerun-if-env-changed=CREATIVEHUB_LOG");

    let sha = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CREATIVEHUB_WEB_GIT_SHA={sha}");
}
