use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This creates the config directory and a default configuration file,
/// unless one already exists.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let existed = Config::config_file().exists();
    let path = Config::init_all(cli.test)?;

    if existed {
        info(format!("Config file already present: {}", path.display()));
    } else if !cli.test {
        success(format!("Config file: {}", path.display()));
    }

    let cfg = Config::load()?;
    info(format!("Append file : {}", cfg.append_path().display()));
    info(format!("Export file : {}", cfg.export_path().display()));

    success("wellnesslog initialization completed!");
    Ok(())
}
