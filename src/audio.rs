//! Audio-cue interface
//!
//! The simulation never synthesizes sound; it emits named cues and forgets
//! about them. A presentation layer maps cues to actual playback. Sinks must
//! never block and must tolerate being muted or unavailable.

/// Named sound cues emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Player fired a projectile
    Shoot,
    /// Projectile connected with an enemy or the boss
    Hit,
    /// Player lost a life
    PlayerHit,
    /// Shooter enemy fired
    EnemyShoot,
    /// Boss fired
    BossShoot,
    /// Boss health reached zero
    BossDefeat,
    /// Run ended
    GameOver,
    /// Level advanced
    LevelUp,
    /// Player left the ground
    Jump,
    /// Power-up collected
    PowerUpCollect,
}

/// Sink for simulation sound cues. Fire-and-forget: implementations must
/// return promptly and swallow their own failures.
pub trait AudioSink {
    fn play(&self, cue: Cue);
}

/// Silent sink - the muted / headless case
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&self, _cue: Cue) {}
}

/// Sink that logs each cue at debug level; handy for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&self, cue: Cue) {
        log::debug!("audio cue: {:?}", cue);
    }
}
