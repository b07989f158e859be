//! Fixed game content: tunables, the enemy roster, spawn tables, level names,
//! and the mutation catalog.

use crate::state::Stats;
use crate::types::ActorKind;

pub const MAP_WIDTH: usize = 60;
pub const MAP_HEIGHT: usize = 40;
pub const MAX_LEVEL: u32 = 13;
pub const STARTING_LEVEL_INDEX: u32 = 1;

pub const CLONE_PROTEIN_COST: i32 = 30;
pub const RNA_EVOLUTION_THRESHOLD: i32 = 20;
pub const MUTATION_CHOICES: usize = 3;
pub const LOG_CAPACITY: usize = 50;

pub const WHITE: (u8, u8, u8) = (255, 255, 255);
pub const RED: (u8, u8, u8) = (220, 50, 50);
pub const GREEN: (u8, u8, u8) = (50, 200, 50);
pub const PALE_GREEN: (u8, u8, u8) = (100, 200, 100);
pub const BLUE: (u8, u8, u8) = (50, 100, 220);
pub const YELLOW: (u8, u8, u8) = (220, 200, 50);
pub const PURPLE: (u8, u8, u8) = (150, 50, 200);
pub const ORANGE: (u8, u8, u8) = (220, 150, 50);
pub const CYAN: (u8, u8, u8) = (50, 200, 200);

pub struct ActorProfile {
    pub name: &'static str,
    pub glyph: char,
    pub color: (u8, u8, u8),
    pub stats: Stats,
}

pub fn player_profile() -> ActorProfile {
    ActorProfile {
        name: "Virus",
        glyph: 'V',
        color: GREEN,
        stats: Stats { hp: 100, max_hp: 100, attack: 12, defense: 5, speed: 10, vision_range: 8 },
    }
}

/// A clone inherits a weakened copy of the player's current statline.
pub fn clone_profile(player: &Stats) -> ActorProfile {
    ActorProfile {
        name: "Clone",
        glyph: 'v',
        color: PALE_GREEN,
        stats: Stats {
            hp: player.max_hp / 2,
            max_hp: player.max_hp / 2,
            attack: player.attack - 2,
            defense: player.defense - 2,
            speed: player.speed,
            vision_range: 4,
        },
    }
}

/// Enemy statlines scale with depth through `bonus = level_index - 1`.
pub fn enemy_profile(kind: ActorKind, level_index: u32) -> ActorProfile {
    let bonus = level_index.saturating_sub(1) as i32;
    match kind {
        ActorKind::Macrophage => ActorProfile {
            name: "Macrophage",
            glyph: 'M',
            color: PURPLE,
            stats: Stats {
                hp: 80 + bonus * 10,
                max_hp: 80 + bonus * 10,
                attack: 8 + bonus,
                defense: 8 + bonus,
                speed: 3,
                vision_range: 5,
            },
        },
        ActorKind::BCell => ActorProfile {
            name: "B-cell",
            glyph: 'B',
            color: BLUE,
            stats: Stats {
                hp: 35 + bonus * 4,
                max_hp: 35 + bonus * 4,
                attack: 15 + bonus,
                defense: 2 + bonus / 2,
                speed: 6,
                vision_range: 8,
            },
        },
        ActorKind::TCell => ActorProfile {
            name: "T-cell",
            glyph: 'T',
            color: RED,
            stats: Stats {
                hp: 50 + bonus * 6,
                max_hp: 50 + bonus * 6,
                attack: 20 + bonus * 2,
                defense: 4 + bonus / 2,
                speed: 8,
                vision_range: 5,
            },
        },
        ActorKind::Dendritic => ActorProfile {
            name: "Dendritic cell",
            glyph: 'D',
            color: YELLOW,
            stats: Stats {
                hp: 30 + bonus * 3,
                max_hp: 30 + bonus * 3,
                attack: 5 + bonus / 2,
                defense: 2 + bonus / 2,
                speed: 5,
                vision_range: 10,
            },
        },
        ActorKind::MastCell => ActorProfile {
            name: "Mast cell",
            glyph: '*',
            color: CYAN,
            stats: Stats {
                hp: 45 + bonus * 5,
                max_hp: 45 + bonus * 5,
                attack: 8 + bonus,
                defense: 5 + bonus / 2,
                speed: 4,
                vision_range: 6,
            },
        },
        // Neutrophils also stand in for any kind without a dedicated profile.
        _ => ActorProfile {
            name: "Neutrophil",
            glyph: 'N',
            color: ORANGE,
            stats: Stats {
                hp: 40 + bonus * 5,
                max_hp: 40 + bonus * 5,
                attack: 12 + bonus,
                defense: 3 + bonus / 2,
                speed: 12,
                vision_range: 6,
            },
        },
    }
}

pub fn enemy_count(level_index: u32) -> usize {
    4 + 2 * level_index as usize
}

/// Cumulative-roll spawn weights per depth band.
pub fn spawn_weights(level_index: u32) -> &'static [(ActorKind, f64)] {
    match level_index {
        0..=3 => &[
            (ActorKind::Neutrophil, 0.5),
            (ActorKind::Macrophage, 0.3),
            (ActorKind::BCell, 0.2),
        ],
        4..=6 => &[
            (ActorKind::BCell, 0.3),
            (ActorKind::TCell, 0.3),
            (ActorKind::Neutrophil, 0.2),
            (ActorKind::Dendritic, 0.2),
        ],
        7..=9 => &[
            (ActorKind::Dendritic, 0.3),
            (ActorKind::Macrophage, 0.3),
            (ActorKind::MastCell, 0.2),
            (ActorKind::TCell, 0.2),
        ],
        10..=12 => &[
            (ActorKind::Macrophage, 0.4),
            (ActorKind::TCell, 0.3),
            (ActorKind::MastCell, 0.3),
        ],
        _ => &[
            (ActorKind::TCell, 0.3),
            (ActorKind::BCell, 0.3),
            (ActorKind::Dendritic, 0.2),
            (ActorKind::Macrophage, 0.2),
        ],
    }
}

const LEVEL_NAMES: [&str; MAX_LEVEL as usize] = [
    "Bloodstream: Entry",
    "Bloodstream: Arteries",
    "Bloodstream: Veins",
    "Lymphatic System: Nodes",
    "Lymphatic System: Ducts",
    "Lymphatic System: Core",
    "Lungs: Bronchi",
    "Lungs: Alveoli",
    "Lungs: Depths",
    "Liver: Periphery",
    "Liver: Center",
    "Liver: Core",
    "Brain: Final Battle",
];

pub fn level_name(level_index: u32) -> &'static str {
    LEVEL_NAMES
        .get(level_index.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// A single stat or resource field a mutation may shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationTarget {
    Hp,
    MaxHp,
    Attack,
    Defense,
    Speed,
    VisionRange,
    Atp,
    MaxAtp,
    Protein,
    MaxProtein,
    Rna,
    MaxRna,
}

pub struct Mutation {
    pub name: &'static str,
    pub description: &'static str,
    pub deltas: &'static [(MutationTarget, i32)],
}

pub static MUTATIONS: [Mutation; 11] = [
    Mutation {
        name: "Hardened Capsid",
        description: "+20 max HP",
        deltas: &[(MutationTarget::MaxHp, 20), (MutationTarget::Hp, 20)],
    },
    Mutation {
        name: "Sharpened Spikes",
        description: "+5 attack",
        deltas: &[(MutationTarget::Attack, 5)],
    },
    Mutation {
        name: "Dense Membrane",
        description: "+3 defense",
        deltas: &[(MutationTarget::Defense, 3)],
    },
    Mutation {
        name: "Rapid Replication",
        description: "+2 speed",
        deltas: &[(MutationTarget::Speed, 2)],
    },
    Mutation {
        name: "Enhanced Receptors",
        description: "+2 vision",
        deltas: &[(MutationTarget::VisionRange, 2)],
    },
    Mutation {
        name: "Energy Reserve",
        description: "+30 max ATP",
        deltas: &[(MutationTarget::MaxAtp, 30)],
    },
    Mutation {
        name: "Protein Synthesis",
        description: "+30 max protein",
        deltas: &[(MutationTarget::MaxProtein, 30)],
    },
    Mutation {
        name: "RNA Optimization",
        description: "+20 max RNA",
        deltas: &[(MutationTarget::MaxRna, 20)],
    },
    Mutation {
        name: "Aggressive Strain",
        description: "+8 attack, -10 max HP",
        deltas: &[(MutationTarget::Attack, 8), (MutationTarget::MaxHp, -10)],
    },
    Mutation {
        name: "Protective Capsule",
        description: "+5 defense, -3 attack",
        deltas: &[(MutationTarget::Defense, 5), (MutationTarget::Attack, -3)],
    },
    Mutation {
        name: "Metabolic Boost",
        description: "bigger ATP, protein, and RNA reserves",
        deltas: &[
            (MutationTarget::MaxAtp, 20),
            (MutationTarget::MaxProtein, 20),
            (MutationTarget::MaxRna, 10),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_spawn_band_sums_to_one() {
        for level in 1..=MAX_LEVEL {
            let total: f64 = spawn_weights(level).iter().map(|&(_, weight)| weight).sum();
            assert!((total - 1.0).abs() < 1e-9, "band for level {level} sums to {total}");
        }
    }

    #[test]
    fn enemy_profiles_scale_with_depth() {
        let shallow = enemy_profile(ActorKind::TCell, 1);
        let deep = enemy_profile(ActorKind::TCell, 13);
        assert_eq!(shallow.stats.hp, 50);
        assert_eq!(deep.stats.hp, 50 + 12 * 6);
        assert_eq!(deep.stats.attack, 20 + 12 * 2);
        assert_eq!(shallow.stats.speed, deep.stats.speed);
    }

    #[test]
    fn every_level_has_a_name() {
        for level in 1..=MAX_LEVEL {
            assert_ne!(level_name(level), "Unknown");
        }
        assert_eq!(level_name(MAX_LEVEL + 1), "Unknown");
    }

    #[test]
    fn clone_profile_halves_hp_and_weakens_combat_stats() {
        let player = player_profile().stats;
        let clone = clone_profile(&player);
        assert_eq!(clone.stats.hp, 50);
        assert_eq!(clone.stats.max_hp, 50);
        assert_eq!(clone.stats.attack, 10);
        assert_eq!(clone.stats.defense, 3);
        assert_eq!(clone.stats.vision_range, 4);
    }

    #[test]
    fn mutation_catalog_has_eleven_entries_with_deltas() {
        assert_eq!(MUTATIONS.len(), 11);
        for mutation in &MUTATIONS {
            assert!(!mutation.deltas.is_empty(), "{} has no effect", mutation.name);
        }
    }
}
