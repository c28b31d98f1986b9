use std::path::PathBuf;

const CONFIG_FILE: &str = "fuzz-ab.json";
const BASE_DIR: &str = "fuzz-ab";

pub(crate) fn default_config_path() -> PathBuf {
    home_or_relative().join(CONFIG_FILE)
}

pub(crate) fn default_tmp_path() -> PathBuf {
    home_or_relative().join(BASE_DIR).join("tmp")
}

fn home_or_relative() -> PathBuf {
    user_home_dir().unwrap_or_default()
}

fn user_home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        if let Some(value) = std::env::var_os("USERPROFILE") {
            return Some(PathBuf::from(value));
        }
        if let (Some(drive), Some(path)) =
            (std::env::var_os("HOMEDRIVE"), std::env::var_os("HOMEPATH"))
        {
            let mut full = PathBuf::from(drive);
            full.push(path);
            return Some(full);
        }
    }

    std::env::var_os("HOME").map(PathBuf::from)
}
