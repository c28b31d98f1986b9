use clap::Parser;

use crate::error::{AppError, AppResult};

use super::CampaignArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<CampaignArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CampaignArgs::try_parse_from(args).map_err(AppError::from)
}
