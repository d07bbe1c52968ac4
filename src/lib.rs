//! Zombie Dash - a 2D side-scrolling zombie shooter, simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `audio`: Audio-cue interface (fire-and-forget, never blocks the sim)
//! - `highscores`: Ranked top-10 score history
//! - `persistence`: Score storage behind a swappable trait
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod sim;
pub mod tuning;

pub use audio::{AudioSink, Cue, NullAudio};
pub use highscores::HighScores;
pub use persistence::{JsonFileStore, MemoryStore, ScoreStore};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (world units)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 350.0;
    /// Upward impulse applied on jump (world units / s)
    pub const PLAYER_JUMP_STRENGTH: f32 = 800.0;
    /// Base shoot cooldown in seconds; shrinks 0.015 s per level
    pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;
    pub const PLAYER_SHOOT_COOLDOWN_MIN: f32 = 0.08;

    /// Downward acceleration, world units / s²
    pub const GRAVITY: f32 = 2500.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 55.0;
    pub const ENEMY_HEIGHT: f32 = 50.0;
    /// Initial spawn interval in seconds; shrinks 0.15 s per level
    pub const ENEMY_SPAWN_RATE_INITIAL: f32 = 1.5;
    pub const ENEMY_SPAWN_RATE_MIN: f32 = 0.15;

    /// Player projectile
    pub const PROJECTILE_WIDTH: f32 = 30.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    pub const PROJECTILE_SPEED: f32 = 700.0;

    /// Boss defaults
    pub const BOSS_WIDTH: f32 = 120.0;
    pub const BOSS_HEIGHT: f32 = 120.0;
    pub const BOSS_INITIAL_HEALTH: u32 = 10;
    pub const BOSS_SPEED: f32 = 150.0;
    /// Horizontal standoff the boss tries to keep from the player
    pub const BOSS_MIN_DISTANCE_FROM_PLAYER: f32 = 300.0;
    /// Retreat only once the gap closes below standoff minus this band
    pub const BOSS_DISTANCE_HYSTERESIS: f32 = 20.0;
    pub const BOSS_SHOOT_COOLDOWN_INITIAL: f32 = 2.0;
    pub const BOSS_SHOOT_COOLDOWN_MIN: f32 = 0.5;
    pub const BOSS_PROJECTILE_WIDTH: f32 = 40.0;
    pub const BOSS_PROJECTILE_HEIGHT: f32 = 40.0;
    pub const BOSS_PROJECTILE_SPEED: f32 = 400.0;

    /// Shooter enemy
    pub const SHOOTER_ENEMY_RANGE: f32 = 400.0;
    pub const SHOOTER_ENEMY_COOLDOWN: f32 = 2.5;
    pub const ENEMY_PROJECTILE_WIDTH: f32 = 25.0;
    pub const ENEMY_PROJECTILE_HEIGHT: f32 = 25.0;
    pub const ENEMY_PROJECTILE_SPEED: f32 = 300.0;

    /// Zigzag enemy vertical oscillation
    pub const ZIGZAG_AMPLITUDE: f32 = 20.0;
    pub const ZIGZAG_FREQUENCY: f32 = 5.0;

    /// Power-ups
    pub const POWERUP_WIDTH: f32 = 40.0;
    pub const POWERUP_HEIGHT: f32 = 40.0;
    /// Active effect duration in seconds
    pub const POWERUP_DURATION: f32 = 8.0;
    pub const POWERUP_DROP_CHANCE: f64 = 0.15;
    pub const SPEED_BOOST_MULTIPLIER: f32 = 1.5;

    /// Level phase length in seconds (both normal and boss phases)
    pub const LEVEL_DURATION: f32 = 15.0;

    /// Lives at the start of a fresh game / after a continuation
    pub const INITIAL_LIVES: u32 = 5;
    pub const CONTINUE_LIVES: u32 = 3;

    /// Score bonuses
    pub const BOSS_HIT_SCORE: u64 = 25;
    pub const BOSS_DEFEAT_SCORE: u64 = 1000;
    pub const BOSS_SURVIVED_SCORE: u64 = 500;

    /// Per-step elapsed-time cap in seconds. A stalled frame scheduler can
    /// hand the sim an arbitrarily large dt; integrating it whole tunnels
    /// entities through collision checks.
    pub const MAX_STEP_DT: f32 = 0.1;
}
