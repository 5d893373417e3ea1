mod app;
mod config;
mod error;
mod export;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    init_logging(&config)?;

    let planner = match &config.dataset {
        Some(path) => dataset::load_str(&std::fs::read_to_string(path)?)?,
        None => dataset::load_default()?,
    };

    let mut app = app::App::new(config, planner)?;
    app.run()?;
    Ok(())
}

/// Logs go to a file: the terminal itself belongs to the UI.
fn init_logging(config: &config::AppConfig) -> Result<()> {
    let file = std::sync::Arc::new(std::fs::File::create("wanderlist.log")?);
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "wanderlist={level},engine={level},dataset={level}",
            level = config.log
        ))
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}
