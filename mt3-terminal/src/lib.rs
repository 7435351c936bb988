/// Terminal front end: frame loop, keyboard input, triangle drawing and readout
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use mt3_core::{MathError, Vector3};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use thiserror::Error;

pub mod config;
pub mod renderer;
pub mod scene;

pub use config::SceneConfig;
pub use renderer::AsciiRenderer;
pub use scene::{Movement, Scene};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("scene setup failed: {0}")]
    Math(#[from] MathError),
}

/// The cross-product readout as three fixed-width columns.
pub fn readout_columns(v: Vector3) -> String {
    format!("{:>8.2}{:>8.2}{:>8.2}", v.x, v.y, v.z)
}

/// Main application struct for the terminal triangle demo
pub struct TerminalApp {
    scene: Scene,
    renderer: AsciiRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: SceneConfig) -> Result<Self, AppError> {
        // reject a camera that cannot be inverted before touching the terminal
        config.camera().view_matrix()?;

        let (width, height) = terminal::size()?;
        // top row is the readout, bottom row the status line
        let rows = height.saturating_sub(2);
        tracing::info!(width, height = rows, "terminal grid");

        Ok(Self {
            scene: Scene::new(config),
            renderer: AsciiRenderer::new(width as usize, rows as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<(), AppError> {
        let target_frame_time = self.scene.config.frame_time();

        while self.running {
            let frame_start = Instant::now();

            let movement = self.poll_input()?;
            self.scene.advance(movement);
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        tracing::info!("quit requested");
        Ok(())
    }

    /// Drain pending key events; returns the movement to apply this frame.
    fn poll_input(&mut self) -> io::Result<Option<Movement>> {
        let mut pressed = Vec::new();

        while event::poll(Duration::from_millis(0))? {
            let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                code => pressed.extend(Movement::from_key(code)),
            }
        }

        Ok(Movement::resolve(pressed))
    }

    fn render(&mut self) -> io::Result<()> {
        let screen = match self.scene.project() {
            Ok(screen) => screen,
            Err(err) => {
                // keep the previous image
                tracing::warn!(error = %err, translate = ?self.scene.object.translate, "frame skipped");
                return Ok(());
            }
        };

        self.renderer.clear();
        self.renderer.fill_triangle(&screen, &self.scene.config.viewport());

        let mut stdout = stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::White),
            Print(readout_columns(self.scene.readout())),
            terminal::Clear(terminal::ClearType::UntilNewLine),
            Print("\r\n"),
            ResetColor
        )?;

        self.renderer.draw(&mut stdout)?;

        queue!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "MT3 Terminal | FPS: {:.1} | Controls: WASD/Arrows=Move Q/Esc=Quit",
                self.fps
            )),
            terminal::Clear(terminal::ClearType::UntilNewLine),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_columns() {
        let v = Vector3::new(1.2, -3.9, 2.5).cross(Vector3::new(2.8, 0.4, -1.3));
        assert_eq!(readout_columns(v), "    4.07    8.56   11.40");
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::from(MathError::Singular { determinant: 0.0 });
        assert_eq!(
            err.to_string(),
            "scene setup failed: matrix is singular (determinant 0)"
        );
    }
}
