use std::path::Path;
use std::time::{Duration, Instant};

/// Fixed poll cadence. Mount latency is externally bounded in the target
/// deployment, so there is no backoff.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// True when `path` exists and is a mount boundary: it sits on a different
/// filesystem device than its parent, or it is a filesystem root.
pub fn is_mount_point(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        let Ok(meta) = std::fs::metadata(path) else {
            return false;
        };
        let Some(parent) = path.parent() else {
            return true;
        };
        let Ok(parent_meta) = std::fs::metadata(parent) else {
            return false;
        };
        // Same device and same inode means path and its parent resolve to
        // the same directory, i.e. a filesystem root.
        meta.dev() != parent_meta.dev() || meta.ino() == parent_meta.ino()
    }
    #[cfg(not(unix))]
    {
        path.exists()
    }
}

/// Polls until `path` reports itself as a live mount or `timeout` elapses.
///
/// A `false` return is a terminal not-ready signal, not an error; the
/// orchestrator turns it into a whole-run abort.
pub async fn wait_for_mount(path: &Path, timeout: Duration) -> bool {
    let started = Instant::now();
    loop {
        if is_mount_point(path) {
            return true;
        }
        if started.elapsed() >= timeout {
            return false;
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_root_is_a_mount_point() {
        assert!(is_mount_point(Path::new("/")));
    }

    #[test]
    fn scratch_directory_is_not_a_mount_point() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_mount_point(dir.path()));
    }

    #[test]
    fn missing_path_is_not_a_mount_point() {
        assert!(!is_mount_point(Path::new("/definitely/not/here")));
    }

    #[tokio::test]
    async fn wait_succeeds_on_the_first_poll_for_a_live_mount() {
        assert!(wait_for_mount(Path::new("/"), Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn wait_times_out_on_a_path_that_never_mounts() {
        let dir = tempfile::tempdir().unwrap();
        let never = dir.path().join("never-mounted");
        assert!(!wait_for_mount(&never, Duration::from_millis(50)).await);
    }
}
