use std::sync::Arc;

use clap::Parser;
use clap::error::ErrorKind;

use crate::app::{print_plan, print_report, run_campaign};
use crate::args::CampaignArgs;
use crate::build::{TempDirSink, build_requests};
use crate::config::load_requests;
use crate::error::AppResult;
use crate::exec::ProcessRunner;
use crate::logger::init_logging;

/// Parses the command line, then runs the campaign it describes.
///
/// # Errors
///
/// Returns an error for invalid arguments, an unusable request file or temp
/// directory, or a runtime that cannot be started.
pub fn run() -> AppResult<()> {
    let args = match parse_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

fn parse_args() -> AppResult<Option<CampaignArgs>> {
    match CampaignArgs::try_parse() {
        Ok(args) => Ok(Some(args)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

async fn run_async(args: CampaignArgs) -> AppResult<()> {
    let CampaignArgs {
        requests,
        path,
        ab_bin,
        tmp_path,
        keep_tmp,
        timeout,
        dry_run,
        ..
    } = args;

    let templates = load_requests(&path, &requests, timeout)?;
    // Payload files named in a dry-run plan stay on disk.
    let sink = TempDirSink::create(tmp_path, keep_tmp || dry_run)?;
    let groups = build_requests(&templates, &sink)?;

    if dry_run {
        print_plan(&ab_bin, &groups);
        return Ok(());
    }

    let runner = Arc::new(ProcessRunner::new(ab_bin));
    let report = run_campaign(groups, runner).await?;
    print_report(&report);
    Ok(())
}
