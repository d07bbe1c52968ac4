//! The transition function and simulation pipeline
//!
//! `reduce` is the whole game: given a state and one action it returns the
//! next state without mutating its input. The dominant action is `Step`,
//! which runs the frame pipeline in a fixed stage order. Side effects are
//! limited to the two injected collaborators in `Services`.

use super::spawn::{
    boss_cooldown, boss_projectile, boss_speed, enemy_projectile, make_boss, make_power_up,
    player_cooldown, player_projectile, spawn_enemy,
};
use super::state::{
    ActiveEffect, EnemyKind, Facing, GameState, Phase, Player, PowerUpKind,
};
use crate::audio::{AudioSink, Cue};
use crate::consts::*;
use crate::persistence::ScoreStore;
use rand::Rng;

/// Movement keys held down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// One dispatched action
#[derive(Debug, Clone)]
pub enum Action {
    /// Begin a fresh run from the title screen
    Start,
    /// Replace the whole state (new-game reset from the game-over screen)
    Restart(Box<GameState>),
    Pause,
    Resume,
    /// Accept the continuation offer
    ContinueRun,
    /// Advance the simulation by `dt` seconds
    Step { dt: f32, held: HeldKeys },
    Shoot,
    Jump,
    /// Finalize the run: persist the score and enter GameOver
    FinishGame,
}

/// Injected collaborators. Audio is fire-and-forget; the score store is
/// consulted read-back only when a run ends.
pub struct Services<'a> {
    pub audio: &'a dyn AudioSink,
    pub scores: &'a mut dyn ScoreStore,
}

/// Pure transition: `(state, action) -> state`. Total over the action
/// vocabulary; actions that don't apply in the current phase return the
/// state unchanged.
pub fn reduce(state: &GameState, action: &Action, svc: &mut Services) -> GameState {
    let mut next = state.clone();

    match action {
        Action::Start => {
            if next.phase != Phase::Start {
                return next;
            }
            next.phase = Phase::Playing;
            next.next_enemy_id = 1;
            next.next_projectile_id = 1;
            next.next_power_up_id = 1;
            next.enemy_spawn_timer = ENEMY_SPAWN_RATE_INITIAL;
            next.shoot_cooldown = 0.0;
            next.power_ups.clear();
            next.enemy_projectiles.clear();
            next.active_power_up = None;
            log::info!("run started (seed {})", next.seed);
            next
        }

        Action::Restart(replacement) => (**replacement).clone(),

        Action::Pause => {
            if next.phase == Phase::Playing {
                next.phase = Phase::Paused;
            }
            next
        }

        Action::Resume => {
            if next.phase == Phase::Paused {
                next.phase = Phase::Playing;
            }
            next
        }

        Action::ContinueRun => {
            if next.phase != Phase::Continue {
                return next;
            }
            next.phase = Phase::Playing;
            next.lives = CONTINUE_LIVES;
            next.can_continue = false;
            next.time_left = LEVEL_DURATION;
            next.enemy_spawn_timer = ENEMY_SPAWN_RATE_INITIAL;
            next.enemies.clear();
            next.projectiles.clear();
            next.boss_projectiles.clear();
            next.enemy_projectiles.clear();
            next.power_ups.clear();
            next.active_power_up = None;
            next.boss = None;
            next.player = Player::at_spawn();
            log::info!("continuation used at level {}", next.level);
            next
        }

        Action::Shoot => {
            if next.phase != Phase::Playing || next.shoot_cooldown > 0.0 {
                return next;
            }
            svc.audio.play(Cue::Shoot);
            let id = next.alloc_projectile_id();
            let projectile = player_projectile(id, &next.player);
            next.projectiles.push(projectile);
            next.shoot_cooldown = player_cooldown(next.level);
            next
        }

        Action::Jump => {
            if next.phase != Phase::Playing || !next.player.grounded {
                return next;
            }
            next.player.body.vel.y = -PLAYER_JUMP_STRENGTH;
            next.player.grounded = false;
            svc.audio.play(Cue::Jump);
            next
        }

        Action::Step { dt, held } => {
            if next.phase != Phase::Playing {
                return next;
            }
            let dt = if dt.is_finite() {
                dt.clamp(0.0, MAX_STEP_DT)
            } else {
                0.0
            };

            decay_timers(&mut next, dt);
            if advance_phase_clock(&mut next, dt, svc) {
                return next;
            }
            integrate_player(&mut next, dt, *held);
            advance_projectiles(&mut next, dt);
            advance_power_ups(&mut next, dt);
            if next.boss_level {
                run_boss_phase(&mut next, dt, svc);
            } else {
                run_normal_phase(&mut next, dt, svc);
            }
            let player_hit = resolve_collisions(&mut next, svc);
            resolve_damage(&mut next, player_hit, svc);
            next
        }

        Action::FinishGame => {
            finalize_game_over(&mut next, svc);
            next
        }
    }
}

/// Stage 1: count down the active effect, fire cooldowns and (outside the
/// boss phase) the spawn timer, all clamped at zero.
fn decay_timers(next: &mut GameState, dt: f32) {
    if let Some(effect) = next.active_power_up.as_mut() {
        effect.time_left -= dt;
        if effect.time_left <= 0.0 {
            next.active_power_up = None;
        }
    }
    next.shoot_cooldown = (next.shoot_cooldown - dt).max(0.0);
    if !next.boss_level {
        next.enemy_spawn_timer = (next.enemy_spawn_timer - dt).max(0.0);
    }
}

/// Stage 2: the level clock. Returns true when the frame ends here (a phase
/// boundary was crossed and the rest of the pipeline must not run).
fn advance_phase_clock(next: &mut GameState, dt: f32, svc: &mut Services) -> bool {
    next.time_left -= dt;
    if next.time_left > 0.0 {
        return false;
    }

    if next.boss_level && next.boss.is_some() {
        // Outlasted the boss: survival bonus and on to the next level
        next.score += BOSS_SURVIVED_SCORE;
        next.lives += 1;
        next.level += 1;
        next.boss_level = false;
        next.boss = None;
        next.time_left = LEVEL_DURATION;
        svc.audio.play(Cue::LevelUp);
        log::info!("boss outlasted, advancing to level {}", next.level);
        true
    } else if !next.boss_level {
        next.boss_level = true;
        next.enemies.clear();
        next.projectiles.clear();
        next.boss_projectiles.clear();
        next.enemy_projectiles.clear();
        next.power_ups.clear();
        next.time_left = LEVEL_DURATION;
        log::info!("level {} boss phase begins", next.level);
        true
    } else {
        false
    }
}

/// Stage 3: player input and physics
fn integrate_player(next: &mut GameState, dt: f32, held: HeldKeys) {
    let mut dx = 0.0;
    if held.left {
        dx -= 1.0;
    }
    if held.right {
        dx += 1.0;
    }

    let speed = if next.is_speed_boosted() {
        PLAYER_SPEED * SPEED_BOOST_MULTIPLIER
    } else {
        PLAYER_SPEED
    };

    let player = &mut next.player;
    player.body.vel.x = dx * speed;
    player.body.pos.x += player.body.vel.x * dt;
    if dx > 0.0 {
        player.facing = Facing::Right;
    } else if dx < 0.0 {
        player.facing = Facing::Left;
    }

    player.body.vel.y += GRAVITY * dt;
    player.body.pos.y += player.body.vel.y * dt;

    let ground_y = GAME_HEIGHT - player.body.size.y;
    if player.body.pos.y >= ground_y {
        player.body.pos.y = ground_y;
        player.body.vel.y = 0.0;
        player.grounded = true;
    } else {
        player.grounded = false;
    }
    player.body.pos.x = player
        .body
        .pos
        .x
        .clamp(0.0, GAME_WIDTH - player.body.size.x);
}

/// Stage 4: advance every projectile collection, dropping strays
fn advance_projectiles(next: &mut GameState, dt: f32) {
    for projectiles in [
        &mut next.projectiles,
        &mut next.boss_projectiles,
        &mut next.enemy_projectiles,
    ] {
        for p in projectiles.iter_mut() {
            p.body.pos.x += p.body.vel.x * dt;
        }
        projectiles.retain(|p| !p.body.outside_horizontal_bounds());
    }
}

/// Stage 5: power-ups fall until they land, vanish below the field
fn advance_power_ups(next: &mut GameState, dt: f32) {
    for p in next.power_ups.iter_mut() {
        if !p.grounded {
            p.body.vel.y += GRAVITY * dt;
            p.body.pos.y += p.body.vel.y * dt;
            let ground_y = GAME_HEIGHT - p.body.size.y;
            if p.body.pos.y >= ground_y {
                p.body.pos.y = ground_y;
                p.body.vel.y = 0.0;
                p.grounded = true;
            }
        }
    }
    next.power_ups.retain(|p| p.body.pos.y < GAME_HEIGHT);
}

/// Stage 6, boss variant: spawn on first tick, then pace and fire
fn run_boss_phase(next: &mut GameState, dt: f32, svc: &mut Services) {
    let Some(mut boss) = next.boss.take() else {
        next.boss = Some(make_boss(next.level));
        next.boss_shoot_cooldown = BOSS_SHOOT_COOLDOWN_INITIAL;
        log::info!("boss spawned for level {}", next.level);
        return;
    };

    next.boss_shoot_cooldown = (next.boss_shoot_cooldown - dt).max(0.0);

    let gap = next.player.body.rect().center_x() - boss.body.rect().center_x();
    let toward = if gap >= 0.0 { 1.0 } else { -1.0 };
    let speed = boss_speed(next.level);

    // Hold position inside the standoff band; the 20-unit inner band keeps
    // the boss from jittering at the boundary.
    if gap.abs() > BOSS_MIN_DISTANCE_FROM_PLAYER {
        boss.body.vel.x = toward * speed;
    } else if gap.abs() < BOSS_MIN_DISTANCE_FROM_PLAYER - BOSS_DISTANCE_HYSTERESIS {
        boss.body.vel.x = -toward * speed;
    } else {
        boss.body.vel.x = 0.0;
    }

    boss.body.pos.x += boss.body.vel.x * dt;
    boss.body.pos.x = boss.body.pos.x.clamp(0.0, GAME_WIDTH - boss.body.size.x);
    boss.body.pos.y = GAME_HEIGHT - boss.body.size.y;

    if next.boss_shoot_cooldown <= 0.0 {
        svc.audio.play(Cue::BossShoot);
        let id = next.alloc_projectile_id();
        next.boss_projectiles.push(boss_projectile(id, &boss, toward));
        next.boss_shoot_cooldown = boss_cooldown(next.level);
    }

    next.boss = Some(boss);
}

/// Stage 6, normal variant: spawn on the timer, then run enemy AI
fn run_normal_phase(next: &mut GameState, dt: f32, svc: &mut Services) {
    if next.enemy_spawn_timer <= 0.0 {
        spawn_enemy(next);
    }

    let player_x = next.player.body.pos.x;
    let level = next.level;
    let mut enemies = std::mem::take(&mut next.enemies);

    for e in enemies.iter_mut() {
        e.age += dt;

        if e.kind == EnemyKind::Shooter {
            let dist = e.body.pos.x - player_x;
            let facing_player = (dist < 0.0 && e.facing == Facing::Right)
                || (dist > 0.0 && e.facing == Facing::Left);

            if dist.abs() < SHOOTER_ENEMY_RANGE && facing_player {
                // In range: halt and fire on cooldown
                e.body.vel.x = 0.0;
                e.shoot_cooldown = (e.shoot_cooldown - dt).max(0.0);
                if e.shoot_cooldown <= 0.0 {
                    svc.audio.play(Cue::EnemyShoot);
                    let id = next.alloc_projectile_id();
                    next.enemy_projectiles.push(enemy_projectile(id, e));
                    e.shoot_cooldown = SHOOTER_ENEMY_COOLDOWN;
                }
            } else {
                // Out of range: resume patrol
                let speed = next.tuning.enemy_speed(e.kind, level);
                e.body.vel.x = e.facing.sign() * speed;
            }
        }

        e.body.pos.x += e.body.vel.x * dt;

        if e.kind == EnemyKind::Zigzag {
            e.body.pos.y =
                e.base_y + (e.age * ZIGZAG_FREQUENCY).sin() * ZIGZAG_AMPLITUDE;
        }
    }

    enemies.retain(|e| !e.body.outside_horizontal_bounds());
    next.enemies = enemies;
}

/// Stage 7: all pairwise collision checks for the frame. Returns whether a
/// hazard touched the player (at most one life is lost per frame).
fn resolve_collisions(next: &mut GameState, svc: &mut Services) -> bool {
    if next.boss_level {
        resolve_boss_hits(next, svc);
    } else {
        resolve_enemy_hits(next, svc);
    }

    let mut player_hit = false;
    let player_rect = next.player.body.rect();

    if !next.is_invincible() {
        if next.boss_level {
            if let Some(boss) = &next.boss
                && player_rect.overlaps(&boss.body.rect())
            {
                player_hit = true;
            }
        } else if let Some(idx) = next
            .enemies
            .iter()
            .position(|e| player_rect.overlaps(&e.body.rect()))
        {
            // Contact removes the enemy along with the life
            player_hit = true;
            next.enemies.remove(idx);
        }

        // One projectile per collection at most is consumed
        for projectiles in [&mut next.boss_projectiles, &mut next.enemy_projectiles] {
            if let Some(idx) = projectiles
                .iter()
                .position(|p| player_rect.overlaps(&p.body.rect()))
            {
                player_hit = true;
                projectiles.remove(idx);
            }
        }
    }

    // Power-up pickup works regardless of invincibility. Each collected
    // pickup replaces the active effect outright; no stacking.
    let mut collected = Vec::new();
    for p in &next.power_ups {
        if player_rect.overlaps(&p.body.rect()) {
            collected.push(p.id);
            svc.audio.play(Cue::PowerUpCollect);
            next.active_power_up = Some(ActiveEffect {
                kind: p.kind,
                time_left: POWERUP_DURATION,
            });
        }
    }
    if !collected.is_empty() {
        next.power_ups.retain(|p| !collected.contains(&p.id));
    }

    player_hit
}

/// Boss-phase projectile resolution: each player projectile that overlaps
/// the boss is consumed and takes one health.
fn resolve_boss_hits(next: &mut GameState, svc: &mut Services) {
    let shots = std::mem::take(&mut next.projectiles);
    let mut used = Vec::new();
    let mut defeated = false;

    for p in &shots {
        if defeated {
            break;
        }
        let Some(boss) = next.boss.as_mut() else {
            break;
        };
        if p.body.rect().overlaps(&boss.body.rect()) {
            used.push(p.id);
            boss.health = boss.health.saturating_sub(1);
            next.score += BOSS_HIT_SCORE;
            svc.audio.play(Cue::Hit);

            if boss.health == 0 {
                defeated = true;
                next.score += BOSS_DEFEAT_SCORE;
                next.level += 1;
                next.lives += 1;
                next.boss_level = false;
                next.boss = None;
                next.boss_projectiles.clear();
                next.time_left = LEVEL_DURATION;
                svc.audio.play(Cue::BossDefeat);
                svc.audio.play(Cue::LevelUp);
                log::info!("boss defeated, advancing to level {}", next.level);
            }
        }
    }

    if !defeated {
        next.projectiles = shots.into_iter().filter(|p| !used.contains(&p.id)).collect();
    }
}

/// Normal-phase projectile resolution: first overlapping live enemy wins
/// the projectile; kills score and may drop a power-up.
fn resolve_enemy_hits(next: &mut GameState, svc: &mut Services) {
    let shots = std::mem::take(&mut next.projectiles);
    let mut used = Vec::new();
    let mut drop_sites = Vec::new();

    for p in &shots {
        for e in next.enemies.iter_mut() {
            if e.health == 0 {
                continue;
            }
            if p.body.rect().overlaps(&e.body.rect()) {
                e.health -= 1;
                used.push(p.id);
                svc.audio.play(Cue::Hit);
                if e.health == 0 {
                    next.score += next.tuning.stats(e.kind).score;
                    drop_sites.push((e.body.rect().center_x(), e.body.pos.y));
                }
                break;
            }
        }
    }

    for (center_x, y) in drop_sites {
        if next.rng.random::<f64>() < POWERUP_DROP_CHANCE {
            let kind = if next.rng.random::<f64>() < 0.5 {
                PowerUpKind::SpeedBoost
            } else {
                PowerUpKind::Invincibility
            };
            let id = next.alloc_power_up_id();
            next.power_ups.push(make_power_up(id, kind, center_x, y));
        }
    }

    next.enemies.retain(|e| e.health > 0);
    next.projectiles = shots.into_iter().filter(|p| !used.contains(&p.id)).collect();
}

/// Stage 8: apply at most one life of damage, then continue or finish
fn resolve_damage(next: &mut GameState, player_hit: bool, svc: &mut Services) {
    if !player_hit {
        return;
    }
    next.lives = next.lives.saturating_sub(1);
    svc.audio.play(Cue::PlayerHit);

    if next.lives == 0 {
        if next.can_continue {
            next.phase = Phase::Continue;
            next.can_continue = false;
        } else {
            finalize_game_over(next, svc);
        }
    }
}

/// End of run: persist the score, recompute the best, enter GameOver
fn finalize_game_over(next: &mut GameState, svc: &mut Services) {
    svc.audio.play(Cue::GameOver);
    svc.scores.append(next.score);
    let scores = svc.scores.read_all();
    next.best_score = next.score.max(scores.top_score().unwrap_or(0));
    next.high_scores = scores;
    next.phase = Phase::GameOver;
    log::info!(
        "game over at level {} with score {} (best {})",
        next.level,
        next.score,
        next.best_score
    );
}
