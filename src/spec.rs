//! Declarative sandbox configuration handed to the provisioning engine.
//!
//! These types describe the build VM: resource allocation, boot behavior and
//! zero to two shared-folder mounts. The engine that actually creates the VM
//! consumes the serialized form; nothing here talks to a hypervisor.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Result;

/// Memory allocated to the build VM, in megabytes.
pub const VM_MEMORY_MB: u64 = 16384;

/// Seconds the provisioning engine waits for the VM to come up.
pub const BOOT_TIMEOUT_SECS: u64 = 600;

/// Guest mount point for the developer's source tree.
pub const GUEST_SRC_DIR: &str = "/home/dev/src";

/// Guest mount point for build artifacts.
pub const GUEST_OUT_DIR: &str = "/home/dev/out";

/// Configuration for a development sandbox VM.
///
/// Constructed fresh on every invocation and consumed immediately by the
/// provisioning engine; nothing is persisted between runs. The fixed fields
/// never vary; the two mounts are present only when their host directories
/// exist at derivation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Disable the engine's default project share into the guest.
    pub disable_default_share: bool,
    /// Memory size in MB
    pub memory_mb: u64,
    /// Whether the VM gets a graphical console.
    pub gui: bool,
    /// Boot timeout in seconds, enforced by the provisioning engine.
    pub boot_timeout_secs: u64,
    /// Insert a fresh SSH key pair instead of the engine's insecure default.
    pub insert_ssh_key: bool,
    /// Source tree shared into the guest, when present on the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_mount: Option<MountSpec>,
    /// Build-output directory shared into the guest, when present on the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_output_mount: Option<MountSpec>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            disable_default_share: true,
            memory_mb: VM_MEMORY_MB,
            gui: false,
            boot_timeout_secs: BOOT_TIMEOUT_SECS,
            insert_ssh_key: true,
            source_mount: None,
            build_output_mount: None,
        }
    }
}

impl SandboxConfig {
    /// Iterate over the mounts that made it into the configuration.
    pub fn mounts(&self) -> impl Iterator<Item = &MountSpec> {
        self.source_mount
            .iter()
            .chain(self.build_output_mount.iter())
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Specification for a host directory shared into the guest VM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountSpec {
    /// Host directory path.
    pub host: PathBuf,
    /// Guest mount point.
    pub guest: String,
    /// Transport hint for the engine's folder-sharing mechanism.
    #[serde(default = "default_transport")]
    pub transport: String,
}

fn default_transport() -> String {
    "sshfs".to_string()
}

impl MountSpec {
    /// Create a mount with the default transport.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(host: P, guest: S) -> Self {
        Self {
            host: host.into(),
            guest: guest.into(),
            transport: default_transport(),
        }
    }
}
