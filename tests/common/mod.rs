use assert_cmd::Command;
use std::path::Path;

#[allow(dead_code)]
pub fn jotter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jotter").unwrap();
    cmd.env_remove("JOTTER_DATA_DIR");
    cmd.env_remove("JOTTER_API_BASE");
    cmd.env_remove("JOTTER_BACKEND_URL");
    cmd.env_remove("JOTTER_FEATURE_FLAGS");
    cmd.env_remove("JOTTER_LOG");
    cmd
}

/// Command bound to a data directory through `--data-dir`.
#[allow(dead_code)]
pub fn jotter_in(data_dir: &Path) -> Command {
    let mut cmd = jotter_cmd();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}
