//! Session controller: the event-driven heart of a run
//!
//! Owns scoring, lives, the speed ramp, and bonus-spawn gating. Reacts to
//! four external stimuli (spawn timer, collected, missed, per-frame tick)
//! and translates them into state deltas plus commands to the engine
//! collaborator. The engine is borrowed per call and never stored, so the
//! controller stays renderer-agnostic and trivially testable.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ingredient::{self, IngredientKind, KindCategory};
use super::state::{GamePhase, SessionState};
use crate::consts::{BONUS_SCORE_INTERVAL, PLAY_WIDTH, SPAWN_MARGIN};
use crate::engine::{Engine, EngineEvent, EntityHandle};
use crate::tuning::{MissPolicy, Tuning};

/// Controller for one game session.
///
/// Single mutator of [`SessionState`]; all handlers are synchronous and run
/// on the host's frame/timer timeline, so no locking is ever needed.
pub struct SessionController {
    state: SessionState,
    tuning: Tuning,
    rng: Pcg32,
    /// Live falling entities, in spawn order
    live: Vec<(EntityHandle, IngredientKind)>,
}

impl SessionController {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: SessionState::new(seed, &tuning),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            live: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Live falling entities, in spawn order
    pub fn live_entities(&self) -> &[(EntityHandle, IngredientKind)] {
        &self.live
    }

    /// Render the initial HUD and arm the spawn timer.
    pub fn initialize<E: Engine>(&mut self, engine: &mut E) {
        log::info!(
            "session start: seed={} lives={}",
            self.state.seed,
            self.state.lives
        );
        self.render_hud(engine);
        engine.register_spawn_timer(self.tuning.spawn_interval_ms);
    }

    /// Tear down the current run and start a fresh one with `seed`.
    ///
    /// The only way out of `GameOver`.
    pub fn restart<E: Engine>(&mut self, engine: &mut E, seed: u64) {
        engine.cancel_spawn_timer();
        for (handle, _) in self.live.drain(..) {
            engine.destroy_entity(handle);
        }
        self.state = SessionState::new(seed, &self.tuning);
        self.rng = Pcg32::seed_from_u64(seed);
        self.initialize(engine);
    }

    /// Dispatch one host event. Events are processed in arrival order.
    pub fn on_event<E: Engine>(&mut self, engine: &mut E, event: EngineEvent) {
        match event {
            EngineEvent::SpawnTimer => self.handle_spawn_timer(engine),
            EngineEvent::Collected(handle) => self.handle_collected(engine, handle),
            EngineEvent::Missed(handle) => self.handle_missed(engine, handle),
            EngineEvent::AssetLoadFailed(key) => {
                // Non-fatal: the game degrades visually and keeps running
                log::warn!("asset failed to load: {key}");
            }
        }
    }

    /// Per-frame update: passive speed ramp, then the terminal check.
    pub fn on_tick<E: Engine>(&mut self, engine: &mut E, elapsed_ms: u64) {
        if self.state.is_game_over() {
            return;
        }

        if elapsed_ms - self.state.last_speed_increase_ms > self.tuning.speed_ramp_interval_ms {
            self.state.speed_multiplier = (self.state.speed_multiplier
                + self.tuning.speed_ramp_increment)
                .min(self.tuning.speed_cap);
            self.state.last_speed_increase_ms = elapsed_ms;

            let velocity = self.tuning.fall_velocity(self.state.speed_multiplier);
            for (handle, _) in &self.live {
                engine.set_fall_velocity(*handle, velocity);
            }
            log::debug!(
                "speed ramp: multiplier={:.2} velocity={:.0}",
                self.state.speed_multiplier,
                velocity
            );
        }

        self.check_game_over(engine);
    }

    fn handle_spawn_timer<E: Engine>(&mut self, engine: &mut E) {
        if self.state.is_game_over() {
            return;
        }
        let kind = ingredient::random_kind(&mut self.rng, self.tuning.benign_threshold);
        self.spawn(engine, kind);
    }

    fn handle_collected<E: Engine>(&mut self, engine: &mut E, handle: EntityHandle) {
        if self.state.is_game_over() {
            return;
        }
        let kind = self.take_live(handle, "collected");
        engine.destroy_entity(handle);

        let effect = kind.effect();
        self.state.score += effect.score_delta;
        match effect.lives_delta {
            d if d < 0 => {
                self.state.lose_life();
            }
            d if d > 0 => {
                self.state.gain_life(self.tuning.max_lives);
            }
            _ => {}
        }
        if effect.speeds_up {
            self.state.speed_multiplier = (self.state.speed_multiplier
                * self.tuning.fly_speed_growth)
                .min(self.tuning.speed_cap);
        }
        // The bonus entity has left the world; allow the next one
        if kind == IngredientKind::Secret {
            self.state.bonus_active = false;
        }
        log::debug!(
            "collected {}: score={} lives={}",
            kind.asset_key(),
            self.state.score,
            self.state.lives
        );

        self.maybe_spawn_bonus(engine);
        self.render_hud(engine);
        self.check_game_over(engine);
    }

    fn handle_missed<E: Engine>(&mut self, engine: &mut E, handle: EntityHandle) {
        if self.state.is_game_over() {
            return;
        }
        let kind = self.take_live(handle, "missed");
        engine.destroy_entity(handle);

        // An uncaught bonus is gone from the world just the same
        if kind == IngredientKind::Secret {
            self.state.bonus_active = false;
        }

        if self.tuning.miss_policy == MissPolicy::BenignCostsLife
            && kind.category() == KindCategory::Benign
            && self.state.lose_life()
        {
            log::debug!("missed {}: lives={}", kind.asset_key(), self.state.lives);
            self.render_hud(engine);
        }
        self.check_game_over(engine);
    }

    /// Spawn one falling entity at a random x with the current fall velocity.
    fn spawn<E: Engine>(&mut self, engine: &mut E, kind: IngredientKind) -> EntityHandle {
        let x = self.rng.random_range(SPAWN_MARGIN..=PLAY_WIDTH - SPAWN_MARGIN);
        let velocity = self.tuning.fall_velocity(self.state.speed_multiplier);
        let handle = engine.spawn_entity(kind, Vec2::new(x, 0.0), velocity);
        self.live.push((handle, kind));
        log::debug!("spawn {} at x={x:.0} v={velocity:.0}", kind.asset_key());
        handle
    }

    /// Offer a bonus life when the score sits on a fresh 100-multiple.
    /// At most one bonus entity may be live at a time.
    fn maybe_spawn_bonus<E: Engine>(&mut self, engine: &mut E) {
        if self.state.score > 0
            && self.state.score % BONUS_SCORE_INTERVAL == 0
            && !self.state.bonus_active
        {
            self.spawn(engine, IngredientKind::Secret);
            self.state.bonus_active = true;
        }
    }

    /// Latch `GameOver` once lives are exhausted. Terminal: the spawn timer
    /// is disarmed and physics halted; only `restart` leaves this phase.
    fn check_game_over<E: Engine>(&mut self, engine: &mut E) {
        if self.state.lives == 0 && self.state.phase == GamePhase::Playing {
            self.state.phase = GamePhase::GameOver;
            engine.cancel_spawn_timer();
            engine.halt_physics();
            engine.render_game_over_banner();
            log::info!("game over: final score {}", self.state.score);
        }
    }

    /// Resolve a handle the engine reported. An unknown handle means the
    /// host delivered an event for an entity this session never spawned,
    /// which is a programming error.
    fn take_live(&mut self, handle: EntityHandle, verb: &str) -> IngredientKind {
        let idx = self
            .live
            .iter()
            .position(|(h, _)| *h == handle)
            .unwrap_or_else(|| panic!("{verb} event for unknown entity {handle:?}"));
        self.live.remove(idx).1
    }

    fn render_hud<E: Engine>(&mut self, engine: &mut E) {
        debug_assert_eq!(self.state.life_icons, self.state.lives);
        engine.render_score(self.state.score);
        engine.render_lives(self.state.lives);
        engine.render_life_icons(self.state.life_icons);
    }

    /// Register an entity of a chosen kind, bypassing the random spawner.
    #[cfg(test)]
    pub(crate) fn inject<E: Engine>(&mut self, engine: &mut E, kind: IngredientKind) -> EntityHandle {
        self.spawn(engine, kind)
    }
}
