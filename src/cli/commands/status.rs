use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::status::{HEALTHY_THRESHOLD_MINUTES, Status};
use crate::ui::messages::info;
use crate::utils::colors::paint_status;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Status { minutes } = cmd {
        let status = Status::from_raw(minutes);
        info(format!("Wellness status: {}", paint_status(status)));

        if !status.is_healthy() {
            info(format!(
                "At least {HEALTHY_THRESHOLD_MINUTES} screen-free minutes count as healthy."
            ));
        }
    }

    Ok(())
}
