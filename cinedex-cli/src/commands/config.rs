use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::settings::{self, ResolvedPath, Settings};

use crate::CliError;
use crate::cli_types::ConfigAction;

pub(crate) fn run_config(action: ConfigAction, settings: &Settings) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => run_config_show(settings),
        ConfigAction::Path => {
            log::info!("{}", settings::settings_path().display());
            Ok(())
        }
        ConfigAction::SetDb { path } => {
            settings::save_db_path(Some(&path))
                .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
            log::info!("Database path set to {}", path.display());
            Ok(())
        }
        ConfigAction::ClearDb => {
            settings::save_db_path(None)
                .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
            log::info!("Database path cleared.");
            Ok(())
        }
    }
}

/// Show resolved paths and their sources.
fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "cinedex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let fields: [(&str, &ResolvedPath); 3] = [
        ("db_path", &settings.db_path),
        ("import_path", &settings.import_path),
        ("export_path", &settings.export_path),
    ];
    for (name, resolved) in fields {
        log::info!(
            "  {:<12} {}  {}",
            name,
            resolved.path.display(),
            format!("({})", resolved.source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
    Ok(())
}
