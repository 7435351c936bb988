/// MT3 Terminal Demo - Spinning Triangle
///
/// Drives the transform pipeline once per frame and draws the result.
/// Controls:
///   - D/A or Right/Left: Move along X
///   - W/S or Up/Down: Move along Z
///   - Q/ESC: Quit
use mt3_terminal::{AppError, SceneConfig, TerminalApp};

fn main() -> Result<(), AppError> {
    // stderr keeps log lines out of the alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SceneConfig::default();
    tracing::info!(
        width = config.screen_width,
        height = config.screen_height,
        "starting terminal renderer (press Q to quit)"
    );

    let mut app = TerminalApp::new(config)?;
    app.run()?;

    tracing::info!("renderer stopped");
    Ok(())
}
