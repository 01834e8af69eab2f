//! End-to-end derivation checks against a real filesystem.

use std::path::PathBuf;

use forgebox::emitter::emit;
use forgebox::host::{HostProbe, HostState};
use forgebox::spec::{GUEST_OUT_DIR, GUEST_SRC_DIR};

#[test]
fn nonexistent_paths_yield_zero_mounts() {
    let state = HostState {
        source_tree: Some(PathBuf::from("/nonexistent/path")),
        build_output_dir: PathBuf::from("/nonexistent/forgebox-benv-out"),
    };
    let config = emit(&state, &HostProbe);

    assert_eq!(config.mounts().count(), 0);
    assert!(config.disable_default_share);
    assert_eq!(config.memory_mb, 16384);
    assert!(!config.gui);
    assert_eq!(config.boot_timeout_secs, 600);
    assert!(config.insert_ssh_key);
}

#[test]
fn existing_directories_yield_paired_mounts() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let state = HostState {
        source_tree: Some(src.path().to_path_buf()),
        build_output_dir: out.path().to_path_buf(),
    };
    let config = emit(&state, &HostProbe);

    assert_eq!(config.mounts().count(), 2);

    let source = config.source_mount.as_ref().expect("source mount");
    assert_eq!(source.host, src.path());
    assert_eq!(source.guest, GUEST_SRC_DIR);

    let build = config.build_output_mount.as_ref().expect("build mount");
    assert_eq!(build.host, out.path());
    assert_eq!(build.guest, GUEST_OUT_DIR);
}

#[test]
fn rendered_json_carries_real_mounts() {
    let src = tempfile::tempdir().unwrap();

    let state = HostState {
        source_tree: Some(src.path().to_path_buf()),
        build_output_dir: PathBuf::from("/nonexistent/forgebox-benv-out"),
    };
    let config = emit(&state, &HostProbe);

    let value: serde_json::Value =
        serde_json::from_str(&config.to_json().unwrap()).unwrap();
    assert_eq!(
        value["source_mount"]["host"],
        src.path().to_str().unwrap()
    );
    assert_eq!(value["source_mount"]["guest"], GUEST_SRC_DIR);
    assert!(value.get("build_output_mount").is_none());
}
