//! Sandbox Configuration Emitter
//!
//! Pure, single-pass derivation of a [`SandboxConfig`] from captured host
//! state. A mount is included iff its host path is non-empty and names a
//! directory at derivation time; otherwise it is omitted entirely, never
//! emitted as disabled. The fixed settings are unconditional.

use crate::host::{HostState, PathProbe};
use crate::spec::{MountSpec, SandboxConfig, GUEST_OUT_DIR, GUEST_SRC_DIR};

/// Derive the sandbox configuration for the given host state.
///
/// Never fails: missing or unusable host paths drop their mount instead of
/// producing an error.
pub fn emit(state: &HostState, probe: &dyn PathProbe) -> SandboxConfig {
    let mut config = SandboxConfig::default();

    match state.source_tree.as_deref() {
        None => {}
        Some(path) if path.as_os_str().is_empty() => {
            tracing::debug!("source tree variable empty, skipping mount");
        }
        Some(path) if !probe.dir_exists(path) => {
            tracing::debug!(path = %path.display(), "source tree absent, skipping mount");
        }
        Some(path) => {
            config.source_mount = Some(MountSpec::new(path, GUEST_SRC_DIR));
        }
    }

    if probe.dir_exists(&state.build_output_dir) {
        config.build_output_mount =
            Some(MountSpec::new(&state.build_output_dir, GUEST_OUT_DIR));
    } else {
        tracing::debug!(
            path = %state.build_output_dir.display(),
            "build output absent, skipping mount"
        );
    }

    config
}
