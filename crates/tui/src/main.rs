mod app;
mod config;
mod error;
mod logging;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;
    tracing::info!(
        appearance = ?config.appearance,
        chart_mode = ?config.chart_mode,
        "starting expense tracker"
    );
    let mut app = app::App::new(config);
    app.run()?;
    tracing::info!("expense tracker closed");
    Ok(())
}
