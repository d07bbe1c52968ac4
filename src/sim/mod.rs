//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the state
//! - Side effects limited to the injected audio and score collaborators
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{
    ActiveEffect, Body, Boss, Enemy, EnemyKind, Facing, GameState, Phase, Player, PowerUp,
    PowerUpKind, Projectile,
};
pub use tick::{Action, HeldKeys, Services, reduce};
