//! Host boundary: environment variables and filesystem probes.
//!
//! Everything impure lives here so that [`crate::emitter`] stays a pure
//! derivation. Tests substitute a fake [`PathProbe`] instead of touching the
//! real environment or filesystem.

use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the host source tree to share with the sandbox.
pub const SRC_ENV_VAR: &str = "FORGEBOX_SRC";

/// Well-known host directory where the build environment drops artifacts.
pub const BUILD_OUT_DIR: &str = "/tmp/forgebox-benv-out";

/// Filesystem existence probe.
///
/// A probe failure (permission denied on a parent, broken automount) is
/// reported as absence: dropping an optional mount is always a safe
/// degradation, so these errors are never surfaced.
pub trait PathProbe {
    /// Whether `path` currently names a directory.
    fn dir_exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl PathProbe for HostProbe {
    fn dir_exists(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }
}

/// Point-in-time snapshot of the host inputs the emitter derives from.
#[derive(Debug, Clone)]
pub struct HostState {
    /// Raw source-tree path from the environment. `None` when unset; an
    /// empty value is kept as-is and filtered during derivation.
    pub source_tree: Option<PathBuf>,
    /// Host directory holding build artifacts.
    pub build_output_dir: PathBuf,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            source_tree: None,
            build_output_dir: PathBuf::from(BUILD_OUT_DIR),
        }
    }
}

impl HostState {
    /// Capture the current process environment.
    pub fn from_env() -> Self {
        Self {
            source_tree: std::env::var_os(SRC_ENV_VAR).map(PathBuf::from),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_reports_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert!(HostProbe.dir_exists(dir.path()));
        assert!(!HostProbe.dir_exists(&dir.path().join("missing")));
    }

    #[test]
    fn test_probe_rejects_plain_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("artifact.bin");
        fs::write(&file, b"x").unwrap();
        assert!(!HostProbe.dir_exists(&file));
    }

    #[test]
    fn test_default_state() {
        let state = HostState::default();
        assert!(state.source_tree.is_none());
        assert_eq!(state.build_output_dir, PathBuf::from(BUILD_OUT_DIR));
    }
}
