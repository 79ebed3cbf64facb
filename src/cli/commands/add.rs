use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EntryLog;
use crate::errors::AppResult;
use crate::models::entry::RawEntry;
use crate::ui::messages::success;
use crate::utils::colors::paint_status;

/// Validate one entry and mirror it to the append file.
///
/// Outside a session there is no list to keep, so the entry only ends up in
/// the append file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        activity,
        me_time,
        minutes,
    } = cmd
    {
        let mut log = EntryLog::new(cfg.append_path(), cfg.export_path())?;
        let raw = RawEntry::new(name, activity, me_time, minutes);

        let entry = log.add(&raw)?;

        success(format!(
            "Record added to {}: {} [{}]",
            cfg.append_path().display(),
            entry.display_line(),
            paint_status(entry.status)
        ));
    }

    Ok(())
}
