mod bootstrap;

use anyhow::Result;
use laps_core::error::RaceError;
use laps_core::settings::Settings;
use laps_data::report::RaceReport;
use laps_data::session::load_session;
use laps_ui::app::App;
use laps_ui::summary::render_summary;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("lap-times v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("View: {}, Theme: {}", settings.view, settings.theme);

    let race_path =
        bootstrap::resolve_path(settings.race_file.clone(), "Enter the race data file path: ")?;
    let roster_path = bootstrap::resolve_path(
        settings.drivers_file.clone(),
        "Enter the driver details file path: ",
    )?;

    let session = load_session(&race_path, &roster_path)?;

    if settings.is_interactive() {
        tracing::info!("Starting interactive menu for race '{}'", session.race_name);
        App::new(&settings.theme, session)
            .run()
            .map_err(|e| RaceError::Terminal(e.to_string()))?;
        println!("Exiting... Goodbye!");
        return Ok(());
    }

    let report = RaceReport::build(&session);
    if settings.view == "json" {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_summary(&report));
    }

    Ok(())
}
