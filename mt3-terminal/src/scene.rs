/// Per-frame scene state driven by keyboard input
use crossterm::event::KeyCode;
use mt3_core::{FrameTransforms, Pose, Triangle, Vector3};

use crate::config::SceneConfig;

/// Movement requested by a key, declared in priority order: when several
/// keys arrive in the same frame only the first variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Movement {
    Right,
    Left,
    Forward,
    Back,
}

impl Movement {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Self::Right),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Self::Left),
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Self::Forward),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Self::Back),
            _ => None,
        }
    }

    /// Highest-priority movement among the keys seen this frame.
    pub fn resolve(pressed: impl IntoIterator<Item = Movement>) -> Option<Self> {
        pressed.into_iter().min()
    }

    fn offset(self, step: f32) -> Vector3 {
        match self {
            Self::Right => Vector3::new(step, 0.0, 0.0),
            Self::Left => Vector3::new(-step, 0.0, 0.0),
            Self::Forward => Vector3::new(0.0, 0.0, step),
            Self::Back => Vector3::new(0.0, 0.0, -step),
        }
    }
}

/// The moving triangle and the constants it is drawn with
#[derive(Debug, Clone)]
pub struct Scene {
    pub config: SceneConfig,
    pub object: Pose,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            object: Pose::identity(),
        }
    }

    /// Apply this frame's input, then the constant spin about Y.
    pub fn advance(&mut self, movement: Option<Movement>) {
        if let Some(movement) = movement {
            self.object.translate += movement.offset(self.config.move_step);
        }
        self.object.rotate_by(0.0, self.config.rotation_speed, 0.0);
    }

    /// Screen-space triangle for the current state.
    pub fn project(&self) -> mt3_core::error::Result<Triangle> {
        let frame = FrameTransforms::new(
            &self.object,
            &self.config.camera(),
            &self.config.viewport(),
        )?;
        frame.project_triangle(&self.config.triangle)
    }

    pub fn readout(&self) -> Vector3 {
        let (v1, v2) = self.config.readout;
        v1.cross(v2)
    }
}
