use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::exec::DEFAULT_TOOL;

use super::defaults::{default_config_path, default_tmp_path};
use super::parsers::parse_duration_arg;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Expand templated requests into ApacheBench runs, execute them concurrently and summarize the results."
)]
pub struct CampaignArgs {
    /// Names of the requests to run (defaults to every request in the file)
    #[arg(value_name = "REQUEST")]
    pub requests: Vec<String>,

    /// Path to the request file (JSON, or TOML by extension)
    #[arg(long, short = 'p', default_value_os_t = default_config_path())]
    pub path: PathBuf,

    /// Enable verbose logging (sets log level to debug unless overridden by FUZZ_AB_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Benchmarking executable to invoke
    #[arg(long = "ab-bin", env = "FUZZ_AB_BIN", default_value = DEFAULT_TOOL)]
    pub ab_bin: String,

    /// Directory for generated payload files (created if missing)
    #[arg(long = "tmp-path", default_value_os_t = default_tmp_path())]
    pub tmp_path: PathBuf,

    /// Keep generated payload files after the run
    #[arg(long = "keep-tmp")]
    pub keep_tmp: bool,

    /// Per-invocation timeout for requests that set none (supports ms/s/m/h)
    #[arg(long, value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Print the generated invocations and exit without running them (payload files are kept)
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}
