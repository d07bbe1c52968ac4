//! Entity factories
//!
//! Pure constructors for enemies, projectiles, the boss and power-ups,
//! parameterized by level and explicit random draws. `spawn_enemy` is the
//! only function here that touches the state's RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{Body, Boss, Enemy, EnemyKind, Facing, GameState, Player, PowerUp, PowerUpKind, Projectile};
use crate::consts::*;
use crate::tuning::Tuning;

/// Projectile leaving the player's leading edge in their facing direction
pub fn player_projectile(id: u32, player: &Player) -> Projectile {
    let size = Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT);
    let x = match player.facing {
        Facing::Right => player.body.pos.x + player.body.size.x,
        Facing::Left => player.body.pos.x - size.x,
    };
    let y = player.body.pos.y + player.body.size.y / 2.0 - size.y / 2.0;
    let mut body = Body::new(Vec2::new(x, y), size);
    body.vel.x = player.facing.sign() * PROJECTILE_SPEED;
    Projectile { id, body }
}

/// Boss projectile fired from the boss center toward the given x direction
pub fn boss_projectile(id: u32, boss: &Boss, dir_sign: f32) -> Projectile {
    let size = Vec2::new(BOSS_PROJECTILE_WIDTH, BOSS_PROJECTILE_HEIGHT);
    let x = boss.body.rect().center_x() - size.x / 2.0;
    let y = boss.body.pos.y + boss.body.size.y / 2.0 - size.y / 2.0;
    let mut body = Body::new(Vec2::new(x, y), size);
    body.vel.x = dir_sign * BOSS_PROJECTILE_SPEED;
    Projectile { id, body }
}

/// Projectile fired by a shooter enemy in its facing direction
pub fn enemy_projectile(id: u32, enemy: &Enemy) -> Projectile {
    let size = Vec2::new(ENEMY_PROJECTILE_WIDTH, ENEMY_PROJECTILE_HEIGHT);
    let x = match enemy.facing {
        Facing::Right => enemy.body.pos.x + enemy.body.size.x,
        Facing::Left => enemy.body.pos.x - size.x,
    };
    let y = enemy.body.pos.y + enemy.body.size.y / 2.0 - size.y / 2.0;
    let mut body = Body::new(Vec2::new(x, y), size);
    body.vel.x = enemy.facing.sign() * ENEMY_PROJECTILE_SPEED;
    Projectile { id, body }
}

/// Boss for the given level: far right of the field, health and speed
/// scaling with level
pub fn make_boss(level: u32) -> Boss {
    let size = Vec2::new(BOSS_WIDTH, BOSS_HEIGHT);
    let health = BOSS_INITIAL_HEALTH + (level - 1) * 2;
    let mut body = Body::new(
        Vec2::new(GAME_WIDTH - size.x, GAME_HEIGHT - size.y),
        size,
    );
    body.vel.x = -boss_speed(level);
    Boss {
        body,
        health,
        max_health: health,
    }
}

/// Boss pacing speed at a given level
pub fn boss_speed(level: u32) -> f32 {
    BOSS_SPEED * (1.0 + (level - 1) as f32 * 0.25)
}

/// Boss fire interval at a given level
pub fn boss_cooldown(level: u32) -> f32 {
    (BOSS_SHOOT_COOLDOWN_INITIAL - (level - 1) as f32 * 0.1).max(BOSS_SHOOT_COOLDOWN_MIN)
}

/// Player fire interval at a given level
pub fn player_cooldown(level: u32) -> f32 {
    (PLAYER_SHOOT_COOLDOWN - level as f32 * 0.015).max(PLAYER_SHOOT_COOLDOWN_MIN)
}

/// Power-up dropped at a dead enemy's location; falls until grounded
pub fn make_power_up(id: u32, kind: PowerUpKind, drop_center_x: f32, drop_y: f32) -> PowerUp {
    let size = Vec2::new(POWERUP_WIDTH, POWERUP_HEIGHT);
    PowerUp {
        id,
        body: Body::new(Vec2::new(drop_center_x - size.x / 2.0, drop_y), size),
        kind,
        grounded: false,
    }
}

/// Ground-level enemy of the given kind entering from one side of the field
pub fn make_enemy(id: u32, kind: EnemyKind, from_right: bool, level: u32, tuning: &Tuning) -> Enemy {
    let size = Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT);
    let speed = tuning.enemy_speed(kind, level);
    let x = if from_right { GAME_WIDTH } else { -size.x };
    let y = GAME_HEIGHT - size.y;
    let mut body = Body::new(Vec2::new(x, y), size);
    body.vel.x = if from_right { -speed } else { speed };
    let health = tuning.stats(kind).health;
    Enemy {
        id,
        body,
        kind,
        facing: if from_right { Facing::Left } else { Facing::Right },
        health,
        max_health: health,
        base_y: y,
        age: 0.0,
        shoot_cooldown: 0.0,
    }
}

/// Draw side, kind and placement, push the new enemy, and reseed the spawn
/// timer to a level-scaled interval with ±20% jitter.
pub fn spawn_enemy(state: &mut GameState) {
    let from_right = state.rng.random::<f64>() > 0.5;
    let kind_draw = state.rng.random::<f64>();
    let kind = state.tuning.pick_kind(state.level, kind_draw);

    let id = state.alloc_enemy_id();
    let mut enemy = make_enemy(id, kind, from_right, state.level, &state.tuning);

    match kind {
        EnemyKind::Flying => {
            // Random mid-screen altitude, never grounded
            let band = GAME_HEIGHT / 2.5 - ENEMY_HEIGHT;
            enemy.body.pos.y = 50.0 + state.rng.random::<f32>() * band;
            enemy.base_y = enemy.body.pos.y;
        }
        EnemyKind::Shooter => {
            enemy.shoot_cooldown =
                SHOOTER_ENEMY_COOLDOWN * (0.8 + state.rng.random::<f32>() * 0.4);
        }
        _ => {}
    }

    log::debug!(
        "spawned {:?} enemy #{} from the {} (level {})",
        kind,
        enemy.id,
        if from_right { "right" } else { "left" },
        state.level
    );
    state.enemies.push(enemy);

    let interval =
        (ENEMY_SPAWN_RATE_INITIAL - state.level as f32 * 0.15).max(ENEMY_SPAWN_RATE_MIN);
    state.enemy_spawn_timer = interval * (0.8 + state.rng.random::<f32>() * 0.4);
}
