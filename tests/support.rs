use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Stand-in for `ab`: prints a fixed report, or noise when the URL contains
/// `broken`, and appends every argument vector to `$FAKE_AB_LOG`.
const FAKE_AB: &str = r#"#!/bin/sh
for last; do :; done
echo "$*" >> "$FAKE_AB_LOG"
case "$last" in
  *broken*)
    echo "apr_socket_recv: Connection refused (111)"
    ;;
  *)
    echo "This is ApacheBench, Version 2.3"
    echo "Complete requests:      10"
    echo "Failed requests:        1"
    echo "Requests per second:    25.50 [#/sec] (mean)"
    ;;
esac
"#;

/// Write the fake `ab` script into `dir` and make it executable.
///
/// # Errors
///
/// Returns an error if the script cannot be written.
pub fn install_fake_ab(dir: &Path) -> Result<PathBuf, String> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-ab");
    fs::write(&path, FAKE_AB).map_err(|err| format!("write fake ab failed: {}", err))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .map_err(|err| format!("chmod fake ab failed: {}", err))?;
    Ok(path)
}

/// Run the `fuzz-ab` binary with logging reduced to errors.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_fuzz_ab<I, S>(args: I, ab_log: &Path) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = fuzz_ab_bin()?;
    Command::new(bin)
        .args(args)
        .env("FUZZ_AB_LOG", "error")
        .env("FAKE_AB_LOG", ab_log)
        .env_remove("FUZZ_AB_BIN")
        .output()
        .map_err(|err| format!("run fuzz-ab failed: {}", err))
}

fn fuzz_ab_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_fuzz-ab").map_or_else(
        || Err("CARGO_BIN_EXE_fuzz-ab missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
