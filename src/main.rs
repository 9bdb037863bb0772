use anyhow::Context;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use mazebound::app::App;
use mazebound::constants::LOOP_TIME;
use mazebound::formatter::TickFormatter;

/// The main entry point of the application.
///
/// Sets up tracing, initializes SDL and the game state, then enters the
/// main game loop.
pub fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().event_format(TickFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")?;

    let mut app = App::new().context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");

    loop {
        if !app.run() {
            break;
        }
    }

    Ok(())
}
