/// Whether this platform exposes a desktop notification mechanism.
///
/// A config override wins; otherwise Unix hosts are probed for a
/// `notify-send` binary on `PATH`, and macOS/Windows are assumed capable.
/// Platforms without a mechanism don't get the notifications card at all.
pub fn notifications_supported(config_override: Option<bool>) -> bool {
    match config_override {
        Some(value) => value,
        None => platform_probe(),
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_probe() -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };

    std::env::split_paths(&path).any(|dir| dir.join("notify-send").is_file())
}

#[cfg(any(not(unix), target_os = "macos"))]
fn platform_probe() -> bool {
    true
}
