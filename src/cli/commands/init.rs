use crate::config::Config;
use crate::errors::AppResult;
use crate::export::generate_templates;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (if missing)
///  - the records and exports directories
///  - one blank template per possible working-day count
pub fn handle(force: bool, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rTimesheet…");

    if !cfg.path().exists() {
        cfg.save()?;
    }
    println!("📄 Config file : {}", cfg.path().display());

    for dir in [cfg.records_dir(), cfg.exports_dir()] {
        fs::create_dir_all(&dir)?;
        println!("📁 Directory   : {}", dir.display());
    }

    let templates_dir = cfg.templates_dir();
    let written = generate_templates(&templates_dir, force)?;
    if written.is_empty() {
        info(format!(
            "Templates already present in {} (use --force to regenerate).",
            templates_dir.display()
        ));
    }
    for path in &written {
        println!("🧾 Template    : {}", path.display());
    }

    success("rTimesheet initialization completed!");
    Ok(())
}
