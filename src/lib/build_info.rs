/// Short commit hash baked in by `build.rs`.
pub fn git_commit_hash() -> &'static str {
    match option_env!("CREATIVEHUB_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}
