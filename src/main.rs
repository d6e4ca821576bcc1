//! Ingredient Rush entry point
//!
//! Runs a headless auto-play session: a toy engine moves entities in straight
//! lines and a simple AI slides the catcher toward the next benign ingredient,
//! feeding overlap/boundary events back into the session controller. Useful
//! for balance runs (`RUST_LOG=debug cargo run -- <seed>`) until a graphical
//! front-end is wired up.

use glam::Vec2;

use ingredient_rush::consts::{PLAY_HEIGHT, PLAY_WIDTH};
use ingredient_rush::sim::{IngredientKind, KindCategory, SessionController};
use ingredient_rush::{Engine, EngineEvent, EntityHandle, Tuning};

/// Frame step for the demo loop (60 Hz)
const FRAME_MS: u64 = 16;
/// Vertical band in which the catcher can grab an entity
const CATCH_Y: f32 = 1100.0;
/// Horizontal reach of the catcher
const CATCH_HALF_WIDTH: f32 = 60.0;
/// Catcher movement speed (units/sec)
const CATCHER_SPEED: f32 = 200.0;
/// Stop the demo after this much simulated time
const DEMO_LIMIT_MS: u64 = 180_000;

struct FallingEntity {
    handle: EntityHandle,
    kind: IngredientKind,
    pos: Vec2,
    velocity_y: f32,
    caught: bool,
}

/// Minimal engine back-end: straight-line falling motion, a text HUD via the
/// logger, and an event queue the main loop drains into the controller.
#[derive(Default)]
struct HeadlessEngine {
    entities: Vec<FallingEntity>,
    events: Vec<EngineEvent>,
    spawn_interval_ms: Option<u32>,
    spawn_accum_ms: u64,
    catcher_x: f32,
    halted: bool,
    next_handle: u32,
}

impl HeadlessEngine {
    fn new() -> Self {
        Self {
            catcher_x: PLAY_WIDTH / 2.0,
            ..Default::default()
        }
    }

    /// Advance the toy world by one frame, queueing events for the controller.
    fn step(&mut self, dt_ms: u64) {
        if self.halted {
            return;
        }
        let dt = dt_ms as f32 / 1000.0;

        // Spawn timer
        if let Some(interval) = self.spawn_interval_ms {
            self.spawn_accum_ms += dt_ms;
            while self.spawn_accum_ms >= interval as u64 {
                self.spawn_accum_ms -= interval as u64;
                self.events.push(EngineEvent::SpawnTimer);
            }
        }

        // Catcher AI: chase the lowest thing worth catching, sidestep the rest
        let target_x = self
            .entities
            .iter()
            .filter(|e| e.kind.category() != KindCategory::Hostile && e.pos.y < CATCH_Y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|e| e.pos.x);
        if let Some(target) = target_x {
            let step = CATCHER_SPEED * dt;
            self.catcher_x += (target - self.catcher_x).clamp(-step, step);
        }

        // Fall, catch, miss
        for entity in &mut self.entities {
            entity.pos.y += entity.velocity_y * dt;
            if !entity.caught
                && entity.pos.y >= CATCH_Y
                && entity.pos.y < PLAY_HEIGHT
                && (entity.pos.x - self.catcher_x).abs() <= CATCH_HALF_WIDTH
            {
                entity.caught = true;
                self.events.push(EngineEvent::Collected(entity.handle));
            } else if !entity.caught && entity.pos.y >= PLAY_HEIGHT {
                entity.caught = true;
                self.events.push(EngineEvent::Missed(entity.handle));
            }
        }
    }
}

impl Engine for HeadlessEngine {
    fn spawn_entity(&mut self, kind: IngredientKind, pos: Vec2, velocity_y: f32) -> EntityHandle {
        self.next_handle += 1;
        let handle = EntityHandle(self.next_handle);
        self.entities.push(FallingEntity {
            handle,
            kind,
            pos,
            velocity_y,
            caught: false,
        });
        handle
    }

    fn destroy_entity(&mut self, handle: EntityHandle) {
        self.entities.retain(|e| e.handle != handle);
    }

    fn set_fall_velocity(&mut self, handle: EntityHandle, velocity_y: f32) {
        if let Some(entity) = self.entities.iter_mut().find(|e| e.handle == handle) {
            entity.velocity_y = velocity_y;
        }
    }

    fn register_spawn_timer(&mut self, interval_ms: u32) {
        self.spawn_interval_ms = Some(interval_ms);
        self.spawn_accum_ms = 0;
    }

    fn cancel_spawn_timer(&mut self) {
        self.spawn_interval_ms = None;
    }

    fn render_score(&mut self, score: i64) {
        log::info!("HUD score: {score}");
    }

    fn render_lives(&mut self, lives: u8) {
        log::info!("HUD lives: {lives}");
    }

    fn render_life_icons(&mut self, count: u8) {
        log::debug!("HUD life icons: {count}");
    }

    fn render_game_over_banner(&mut self) {
        log::info!("HUD: GAME OVER");
    }

    fn halt_physics(&mut self) {
        self.halted = true;
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut engine = HeadlessEngine::new();
    let mut controller = SessionController::new(seed, Tuning::default());
    controller.initialize(&mut engine);

    let mut elapsed_ms = 0u64;
    while elapsed_ms < DEMO_LIMIT_MS && !controller.state().is_game_over() {
        elapsed_ms += FRAME_MS;
        engine.step(FRAME_MS);

        let events: Vec<EngineEvent> = engine.events.drain(..).collect();
        for event in events {
            controller.on_event(&mut engine, event);
        }
        controller.on_tick(&mut engine, elapsed_ms);
    }

    let state = controller.state();
    println!(
        "seed {} finished after {:.1}s: score {} lives {}{}",
        seed,
        elapsed_ms as f32 / 1000.0,
        state.score,
        state.lives,
        if state.is_game_over() { " (game over)" } else { "" }
    );
}
