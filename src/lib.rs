//! Ingredient Rush - a falling-ingredient catch game
//!
//! Core modules:
//! - `sim`: Deterministic session logic (spawning, scoring, lives, speed ramp)
//! - `engine`: Contract for the rendering/physics collaborator
//! - `tuning`: Data-driven game balance

pub mod engine;
pub mod sim;
pub mod tuning;

pub use engine::{Engine, EngineEvent, EntityHandle};
pub use sim::{GamePhase, IngredientKind, SessionController, SessionState};
pub use tuning::{MissPolicy, Tuning};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (portrait)
    pub const PLAY_WIDTH: f32 = 720.0;
    pub const PLAY_HEIGHT: f32 = 1280.0;

    /// Horizontal margin kept clear of the play area edges when spawning
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// A bonus entity is offered every time the score crosses this multiple
    pub const BONUS_SCORE_INTERVAL: i64 = 100;
}
