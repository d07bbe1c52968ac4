//! Data-driven game balance
//!
//! Enemy stats and the level-tiered spawn table live here rather than in
//! code branches, so balance passes are data edits. `Tuning::default()` is
//! the shipped balance; a JSON override can be loaded at startup.

use serde::{Deserialize, Serialize};

use crate::sim::state::EnemyKind;

/// Per-kind enemy stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindStats {
    /// Multiplier over the level-scaled base speed
    pub speed_multiplier: f32,
    pub health: u32,
    /// Points awarded on kill
    pub score: u64,
}

/// One cumulative-probability slot in a spawn tier.
/// A uniform [0,1) draw below `upto` selects `kind` (first match wins).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnSlot {
    pub upto: f64,
    pub kind: EnemyKind,
}

/// Spawn table for levels at or above `min_level`.
/// Slots are ordered ascending by `upto` and the last slot covers 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnTier {
    pub min_level: u32,
    pub slots: Vec<SpawnSlot>,
}

/// Full balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub regular: KindStats,
    pub fast: KindStats,
    pub tank: KindStats,
    pub zigzag: KindStats,
    pub flying: KindStats,
    pub shooter: KindStats,
    /// Enemy base speed: `base + per_level * level`, before the kind multiplier
    pub enemy_base_speed: f32,
    pub enemy_speed_per_level: f32,
    /// Tiers ordered by descending `min_level`; the first tier whose
    /// `min_level` the current level meets is used.
    pub spawn_tiers: Vec<SpawnTier>,
}

impl Default for Tuning {
    fn default() -> Self {
        use EnemyKind::*;
        Self {
            regular: KindStats {
                speed_multiplier: 1.0,
                health: 1,
                score: 100,
            },
            fast: KindStats {
                speed_multiplier: 1.5,
                health: 1,
                score: 150,
            },
            tank: KindStats {
                speed_multiplier: 0.7,
                health: 3,
                score: 300,
            },
            zigzag: KindStats {
                speed_multiplier: 1.2,
                health: 1,
                score: 200,
            },
            flying: KindStats {
                speed_multiplier: 1.1,
                health: 1,
                score: 250,
            },
            shooter: KindStats {
                speed_multiplier: 0.5,
                health: 2,
                score: 400,
            },
            enemy_base_speed: 100.0,
            enemy_speed_per_level: 40.0,
            spawn_tiers: vec![
                SpawnTier {
                    min_level: 6,
                    slots: vec![
                        SpawnSlot {
                            upto: 0.20,
                            kind: Shooter,
                        },
                        SpawnSlot {
                            upto: 0.35,
                            kind: Tank,
                        },
                        SpawnSlot {
                            upto: 0.55,
                            kind: Flying,
                        },
                        SpawnSlot {
                            upto: 0.80,
                            kind: Zigzag,
                        },
                        SpawnSlot {
                            upto: 1.0,
                            kind: Fast,
                        },
                    ],
                },
                SpawnTier {
                    min_level: 4,
                    slots: vec![
                        SpawnSlot {
                            upto: 0.25,
                            kind: Flying,
                        },
                        SpawnSlot {
                            upto: 0.50,
                            kind: Zigzag,
                        },
                        SpawnSlot {
                            upto: 0.75,
                            kind: Fast,
                        },
                        SpawnSlot {
                            upto: 1.0,
                            kind: Regular,
                        },
                    ],
                },
                SpawnTier {
                    min_level: 3,
                    slots: vec![
                        SpawnSlot {
                            upto: 0.40,
                            kind: Fast,
                        },
                        SpawnSlot {
                            upto: 1.0,
                            kind: Regular,
                        },
                    ],
                },
                SpawnTier {
                    min_level: 0,
                    slots: vec![SpawnSlot {
                        upto: 1.0,
                        kind: Regular,
                    }],
                },
            ],
        }
    }
}

impl Tuning {
    /// Stats for an enemy kind
    pub fn stats(&self, kind: EnemyKind) -> KindStats {
        match kind {
            EnemyKind::Regular => self.regular,
            EnemyKind::Fast => self.fast,
            EnemyKind::Tank => self.tank,
            EnemyKind::Zigzag => self.zigzag,
            EnemyKind::Flying => self.flying,
            EnemyKind::Shooter => self.shooter,
        }
    }

    /// Lateral speed of an enemy kind at a given level
    pub fn enemy_speed(&self, kind: EnemyKind, level: u32) -> f32 {
        let base = self.enemy_base_speed + self.enemy_speed_per_level * level as f32;
        base * self.stats(kind).speed_multiplier
    }

    /// Resolve a uniform [0,1) draw to an enemy kind for the given level.
    /// A table with no usable tier or slot resolves to `Regular`.
    pub fn pick_kind(&self, level: u32, draw: f64) -> EnemyKind {
        self.spawn_tiers
            .iter()
            .find(|t| level >= t.min_level)
            .or_else(|| self.spawn_tiers.last())
            .and_then(|tier| tier.slots.iter().find(|s| draw < s.upto))
            .map(|s| s.kind)
            .unwrap_or(EnemyKind::Regular)
    }

    /// Load a balance override from JSON; falls back to defaults on error
    /// or on a table that cannot spawn anything.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(t) if t.spawn_tiers.is_empty() => {
                log::warn!("tuning JSON has no spawn tiers, using defaults");
                Self::default()
            }
            Ok(t) => t,
            Err(e) => {
                log::warn!("invalid tuning JSON, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EnemyKind::*;

    #[test]
    fn test_low_levels_spawn_regular_only() {
        let t = Tuning::default();
        for draw in [0.0, 0.3, 0.7, 0.999] {
            assert_eq!(t.pick_kind(1, draw), Regular);
            assert_eq!(t.pick_kind(2, draw), Regular);
        }
    }

    #[test]
    fn test_tier_thresholds() {
        let t = Tuning::default();
        assert_eq!(t.pick_kind(3, 0.1), Fast);
        assert_eq!(t.pick_kind(3, 0.5), Regular);
        assert_eq!(t.pick_kind(4, 0.1), Flying);
        assert_eq!(t.pick_kind(4, 0.3), Zigzag);
        assert_eq!(t.pick_kind(4, 0.6), Fast);
        assert_eq!(t.pick_kind(4, 0.9), Regular);
        assert_eq!(t.pick_kind(6, 0.1), Shooter);
        assert_eq!(t.pick_kind(6, 0.25), Tank);
        assert_eq!(t.pick_kind(6, 0.45), Flying);
        assert_eq!(t.pick_kind(6, 0.7), Zigzag);
        assert_eq!(t.pick_kind(6, 0.95), Fast);
    }

    #[test]
    fn test_tiers_cover_unit_interval() {
        let t = Tuning::default();
        for tier in &t.spawn_tiers {
            assert!(
                tier.slots.windows(2).all(|w| w[0].upto < w[1].upto),
                "slots must be ascending"
            );
            assert_eq!(tier.slots.last().unwrap().upto, 1.0);
        }
    }

    #[test]
    fn test_higher_levels_never_regular() {
        // Monotone difficulty: past level 6 the easiest kind is gone
        let t = Tuning::default();
        for i in 0..100 {
            let draw = i as f64 / 100.0;
            assert_ne!(t.pick_kind(6, draw), Regular);
            assert_ne!(t.pick_kind(9, draw), Regular);
        }
    }

    #[test]
    fn test_enemy_speed_scaling() {
        let t = Tuning::default();
        assert_eq!(t.enemy_speed(Regular, 1), 140.0);
        assert_eq!(t.enemy_speed(Fast, 1), 210.0);
        // Faster at higher levels for every kind
        assert!(t.enemy_speed(Tank, 5) > t.enemy_speed(Tank, 1));
    }

    #[test]
    fn test_from_json_bad_input_falls_back() {
        let t = Tuning::from_json("{broken");
        assert_eq!(t, Tuning::default());
    }

    #[test]
    fn test_empty_spawn_table_never_panics() {
        // A valid-JSON override with no tiers must not take down a draw
        let mut json = serde_json::to_value(Tuning::default()).unwrap();
        json["spawn_tiers"] = serde_json::Value::Array(vec![]);
        let t = Tuning::from_json(&json.to_string());
        assert_eq!(t, Tuning::default());

        // Even a hand-built empty table degrades to the baseline kind
        let mut empty = Tuning::default();
        empty.spawn_tiers.clear();
        assert_eq!(empty.pick_kind(1, 0.5), Regular);
        assert_eq!(empty.pick_kind(9, 0.0), Regular);

        // As does a tier with no slots
        let mut hollow = Tuning::default();
        hollow.spawn_tiers = vec![SpawnTier {
            min_level: 0,
            slots: vec![],
        }];
        assert_eq!(hollow.pick_kind(3, 0.99), Regular);
    }
}
