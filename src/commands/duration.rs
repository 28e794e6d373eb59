use crate::{
    libs::{duration::compute_duration, messages::Message},
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DurationArgs {
    /// Start time, e.g. 09:00:00 or "9:00:00 AM"
    start: String,

    /// End time, e.g. 09:05:30
    end: String,
}

pub fn cmd(args: DurationArgs) -> Result<()> {
    let duration = compute_duration(&args.start, &args.end).map_err(|e| msg_error_anyhow!(Message::OperationFailed(e.to_string())))?;

    msg_print!(Message::DurationBetween(args.start, args.end, duration));
    Ok(())
}
