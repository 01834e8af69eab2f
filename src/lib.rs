//! forgebox: Developer Sandbox Bootstrap
//!
//! Derives the declarative configuration of a development build VM from the
//! host environment: fixed resource settings plus optional shared-folder
//! mounts for a source tree and a build-output directory. The result is
//! serialized for an external provisioning engine; forgebox never talks to a
//! hypervisor itself.
//!
//! # Example
//!
//! ```no_run
//! use forgebox::emitter::emit;
//! use forgebox::host::{HostProbe, HostState};
//!
//! fn main() -> forgebox::Result<()> {
//!     let config = emit(&HostState::from_env(), &HostProbe);
//!     println!("{}", config.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod emitter;
pub mod error;
pub mod host;
pub mod spec;

// Re-exports for convenience
pub use error::{Error, Result};
pub use spec::{MountSpec, SandboxConfig};
