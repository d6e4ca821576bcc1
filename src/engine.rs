//! Contract for the rendering/physics collaborator
//!
//! The session core never touches sprites, gravity, or collision math. It
//! issues commands through [`Engine`] and consumes the events the host feeds
//! back as [`EngineEvent`] values. Any front-end that can satisfy this trait
//! (a real renderer, a terminal host, a test recorder) can run a session.

use glam::Vec2;

use crate::sim::IngredientKind;

/// Opaque identifier for a live falling entity, minted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(pub u32);

/// Events the host delivers to the session controller, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The periodic spawn timer fired
    SpawnTimer,
    /// The player overlapped a falling entity (engine did the geometry)
    Collected(EntityHandle),
    /// A falling entity crossed the bottom boundary uncaught
    Missed(EntityHandle),
    /// An asset failed to load; the game degrades visually but keeps running
    AssetLoadFailed(String),
}

/// Commands the session core issues to its front-end.
pub trait Engine {
    /// Create a falling entity and return its handle
    fn spawn_entity(&mut self, kind: IngredientKind, pos: Vec2, velocity_y: f32) -> EntityHandle;

    /// Remove an entity from the world (idempotent)
    fn destroy_entity(&mut self, handle: EntityHandle);

    /// Update the downward velocity of a live entity
    fn set_fall_velocity(&mut self, handle: EntityHandle, velocity_y: f32);

    /// Arm the periodic spawn timer; the host fires `EngineEvent::SpawnTimer`
    fn register_spawn_timer(&mut self, interval_ms: u32);

    /// Disarm the spawn timer
    fn cancel_spawn_timer(&mut self);

    fn render_score(&mut self, score: i64);
    fn render_lives(&mut self, lives: u8);
    fn render_life_icons(&mut self, count: u8);
    fn render_game_over_banner(&mut self);

    /// Freeze all motion (game over)
    fn halt_physics(&mut self);
}

/// Command issued to a [`RecordingEngine`], kept for later inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Spawn {
        handle: EntityHandle,
        kind: IngredientKind,
        pos: Vec2,
        velocity_y: f32,
    },
    Destroy(EntityHandle),
    SetFallVelocity(EntityHandle, f32),
    RegisterSpawnTimer(u32),
    CancelSpawnTimer,
    RenderScore(i64),
    RenderLives(u8),
    RenderLifeIcons(u8),
    RenderGameOverBanner,
    HaltPhysics,
}

/// Headless engine that mints sequential handles and records every command.
///
/// Used by the test suite and by hosts that drive the core without a real
/// renderer behind it.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub commands: Vec<EngineCommand>,
    next_handle: u32,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles spawned so far, in spawn order
    pub fn spawned(&self) -> Vec<(EntityHandle, IngredientKind)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                EngineCommand::Spawn { handle, kind, .. } => Some((*handle, *kind)),
                _ => None,
            })
            .collect()
    }

    /// Count commands matching a predicate
    pub fn count(&self, pred: impl Fn(&EngineCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Engine for RecordingEngine {
    fn spawn_entity(&mut self, kind: IngredientKind, pos: Vec2, velocity_y: f32) -> EntityHandle {
        self.next_handle += 1;
        let handle = EntityHandle(self.next_handle);
        self.commands.push(EngineCommand::Spawn {
            handle,
            kind,
            pos,
            velocity_y,
        });
        handle
    }

    fn destroy_entity(&mut self, handle: EntityHandle) {
        self.commands.push(EngineCommand::Destroy(handle));
    }

    fn set_fall_velocity(&mut self, handle: EntityHandle, velocity_y: f32) {
        self.commands
            .push(EngineCommand::SetFallVelocity(handle, velocity_y));
    }

    fn register_spawn_timer(&mut self, interval_ms: u32) {
        self.commands
            .push(EngineCommand::RegisterSpawnTimer(interval_ms));
    }

    fn cancel_spawn_timer(&mut self) {
        self.commands.push(EngineCommand::CancelSpawnTimer);
    }

    fn render_score(&mut self, score: i64) {
        self.commands.push(EngineCommand::RenderScore(score));
    }

    fn render_lives(&mut self, lives: u8) {
        self.commands.push(EngineCommand::RenderLives(lives));
    }

    fn render_life_icons(&mut self, count: u8) {
        self.commands.push(EngineCommand::RenderLifeIcons(count));
    }

    fn render_game_over_banner(&mut self) {
        self.commands.push(EngineCommand::RenderGameOverBanner);
    }

    fn halt_physics(&mut self) {
        self.commands.push(EngineCommand::HaltPhysics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_engine_mints_unique_handles() {
        let mut engine = RecordingEngine::new();
        let a = engine.spawn_entity(IngredientKind::Egg, Vec2::new(100.0, 0.0), 150.0);
        let b = engine.spawn_entity(IngredientKind::Fly, Vec2::new(200.0, 0.0), 150.0);
        assert_ne!(a, b);
        assert_eq!(engine.spawned().len(), 2);
    }
}
