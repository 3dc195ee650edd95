use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `config` subcommand. Without `--set` the configuration is listed.
pub fn handle(set: Option<&str>, cfg: &Config) -> AppResult<()> {
    match set {
        Some(pair) => {
            let mut updated = cfg.clone();
            let (key, value) = updated.set_pair(pair)?;
            updated.save()?;
            success(format!(
                "Set {} = '{}' in {}",
                key,
                value,
                updated.path().display()
            ));
        }
        None => {
            for line in cfg.list() {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
