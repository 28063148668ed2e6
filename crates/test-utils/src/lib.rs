pub mod builders;

use std::ffi::OsString;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Argv for `sh -c <script>`.
pub fn sh(script: &str) -> Vec<OsString> {
    vec!["sh".into(), "-c".into(), script.into()]
}

/// Whether a process with this pid still exists (zombies included).
///
/// Uses `/proc` where available and falls back to `kill -0`.
pub fn process_exists(pid: u32) -> bool {
    let proc_root = std::path::Path::new("/proc");
    if proc_root.join("self").exists() {
        return proc_root.join(pid.to_string()).exists();
    }

    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Whether `pid` is alive and not a zombie.
///
/// Orphaned grandchildren are reaped by init, not by us, so a killed one may
/// linger briefly as a zombie. Falls back to [`process_exists`] without
/// `/proc`.
pub fn process_running(pid: u32) -> bool {
    let stat = std::path::Path::new("/proc").join(pid.to_string()).join("stat");
    if !std::path::Path::new("/proc/self/stat").exists() {
        return process_exists(pid);
    }
    match std::fs::read_to_string(stat) {
        // Format: `pid (comm) state ...`; comm may contain spaces.
        Ok(contents) => contents
            .rsplit_once(')')
            .and_then(|(_, rest)| rest.trim_start().chars().next())
            .is_some_and(|state| state != 'Z'),
        Err(_) => false,
    }
}

/// Poll until `pid` is no longer running, for at most `limit`.
pub async fn wait_until_gone(pid: u32, limit: std::time::Duration) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if !process_running(pid) {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    !process_running(pid)
}

/// Run a future with a 20-second timeout.
#[allow(dead_code)]
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(20), f)
        .await
        .expect("Test timed out after 20 seconds")
}
