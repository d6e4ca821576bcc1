//! Deterministic session logic
//!
//! All gameplay rules live here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No wall-clock reads (time arrives as event payloads)
//! - No rendering or platform dependencies (everything goes through the
//!   `Engine` trait, borrowed per call)

pub mod controller;
pub mod ingredient;
pub mod state;

pub use controller::SessionController;
pub use ingredient::{IngredientKind, KindCategory, KindEffect};
pub use state::{GamePhase, SessionState};
