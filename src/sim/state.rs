//! Game state and core simulation types
//!
//! One tagged type per entity category instead of a single wide record:
//! each carries only the fields its category uses, joined by a common
//! kinematic `Body`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::highscores::HighScores;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, nothing simulated
    Start,
    /// Active gameplay
    Playing,
    /// Game is paused; the pre-pause snapshot is kept intact
    Paused,
    /// Run ended
    GameOver,
    /// Lives ran out but the one-time continuation offer is on the table
    Continue,
}

/// Horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Unit sign along the x axis
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Enemy variants, in rough difficulty order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Regular,
    Fast,
    Zigzag,
    Flying,
    Tank,
    Shooter,
}

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    SpeedBoost,
    Invincibility,
}

/// Shared kinematic base: position (top-left), extent, velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Collision rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// True once the body has fully left the horizontal play field
    #[inline]
    pub fn outside_horizontal_bounds(&self) -> bool {
        self.pos.x <= -self.size.x || self.pos.x >= GAME_WIDTH
    }
}

/// The player. Exactly one exists; it is repositioned, never destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub facing: Facing,
    pub grounded: bool,
}

impl Player {
    /// Player at the default spawn: centered, standing on the ground
    pub fn at_spawn() -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            body: Body::new(
                Vec2::new(GAME_WIDTH / 2.0 - size.x / 2.0, GAME_HEIGHT - size.y),
                size,
            ),
            facing: Facing::Right,
            grounded: true,
        }
    }
}

/// A zombie
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub body: Body,
    pub kind: EnemyKind,
    pub facing: Facing,
    pub health: u32,
    pub max_health: u32,
    /// Spawn-time y, the centerline for zigzag oscillation
    pub base_y: f32,
    /// Seconds since spawn
    pub age: f32,
    /// Shooter-kind fire cooldown; unused for other kinds
    pub shoot_cooldown: f32,
}

/// A projectile; the firing side is implied by which collection holds it
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
}

/// The boss. At most one exists, only during the boss phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    pub body: Body,
    pub health: u32,
    pub max_health: u32,
}

/// A dropped power-up pickup
#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub id: u32,
    pub body: Body,
    pub kind: PowerUpKind,
    pub grounded: bool,
}

/// The single active timed effect. Picking up a new power-up replaces this
/// wholesale; effects never stack or extend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    pub time_left: f32,
}

/// Complete game state, replaced wholesale each frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Deterministic RNG; every spawn, drop and side draw goes through it
    pub rng: Pcg32,
    pub phase: Phase,
    /// 1-based level number
    pub level: u32,
    pub lives: u32,
    pub score: u64,
    /// Best of this run's score and the persisted top score
    pub best_score: u64,
    /// Ranked history as last read from the score store
    pub high_scores: HighScores,
    /// Seconds left in the current level phase
    pub time_left: f32,
    /// True while the boss has the field; mutually exclusive with spawning
    pub boss_level: bool,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub boss: Option<Boss>,
    pub boss_projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    pub power_ups: Vec<PowerUp>,
    pub active_power_up: Option<ActiveEffect>,
    pub shoot_cooldown: f32,
    pub boss_shoot_cooldown: f32,
    pub next_enemy_id: u32,
    pub next_projectile_id: u32,
    pub next_power_up_id: u32,
    /// Seconds until the next normal-phase spawn
    pub enemy_spawn_timer: f32,
    /// One-time right to continue with fresh lives; granted per fresh game
    pub can_continue: bool,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh pre-game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Start,
            level: 1,
            lives: INITIAL_LIVES,
            score: 0,
            best_score: 0,
            high_scores: HighScores::new(),
            time_left: LEVEL_DURATION,
            boss_level: false,
            player: Player::at_spawn(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            boss: None,
            boss_projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            power_ups: Vec::new(),
            active_power_up: None,
            shoot_cooldown: 0.0,
            boss_shoot_cooldown: 0.0,
            next_enemy_id: 1,
            next_projectile_id: 1,
            next_power_up_id: 1,
            enemy_spawn_timer: ENEMY_SPAWN_RATE_INITIAL,
            can_continue: true,
            tuning: Tuning::default(),
        }
    }

    /// Allocate the next enemy id
    pub fn alloc_enemy_id(&mut self) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        id
    }

    /// Allocate the next projectile id (shared by all projectile collections)
    pub fn alloc_projectile_id(&mut self) -> u32 {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        id
    }

    /// Allocate the next power-up id
    pub fn alloc_power_up_id(&mut self) -> u32 {
        let id = self.next_power_up_id;
        self.next_power_up_id += 1;
        id
    }

    /// True while an invincibility effect is running
    pub fn is_invincible(&self) -> bool {
        matches!(
            self.active_power_up,
            Some(ActiveEffect {
                kind: PowerUpKind::Invincibility,
                ..
            })
        )
    }

    /// True while a speed-boost effect is running
    pub fn is_speed_boosted(&self) -> bool {
        matches!(
            self.active_power_up,
            Some(ActiveEffect {
                kind: PowerUpKind::SpeedBoost,
                ..
            })
        )
    }
}
