//! Kill rewards and the mutation pipeline.

use super::Game;
use crate::content::{self, Mutation, MutationTarget};
use crate::types::{EntityId, Tone};

const PROTEIN_REWARD_RANGE: (i32, i32) = (8, 18);
const RNA_REWARD_RANGE: (i32, i32) = (2, 6);

impl Game {
    /// Invoked whenever the virus side fells a hostile. Grants protein and
    /// RNA; crossing the RNA threshold pays it down and latches an evolution
    /// that takes effect once the current turn finishes resolving.
    pub(super) fn on_hostile_killed(&mut self, victim_id: EntityId) {
        let victim_name = self.state.actors[victim_id].name;
        self.log.add(format!("{victim_name} destroyed!"), Tone::Good);

        let protein_gain =
            self.rng.range_i32(PROTEIN_REWARD_RANGE.0, PROTEIN_REWARD_RANGE.1);
        let rna_gain = self.rng.range_i32(RNA_REWARD_RANGE.0, RNA_REWARD_RANGE.1);
        self.state.resources.gain_protein(protein_gain);
        self.state.resources.gain_rna(rna_gain);
        self.log.add(format!("+{protein_gain} protein, +{rna_gain} RNA"), Tone::Flavor);

        if self.state.resources.rna >= content::RNA_EVOLUTION_THRESHOLD {
            self.state.resources.spend_rna(content::RNA_EVOLUTION_THRESHOLD);
            self.offered_mutations = self
                .rng
                .sample_indices(content::MUTATIONS.len(), content::MUTATION_CHOICES);
            self.evolution_pending = true;
            self.log.add("EVOLUTION! Choose a mutation (1-3)", Tone::Alert);
        }
    }

    /// Applies each delta in catalog order, re-clamping after every step so
    /// no pool ever escapes its `[0, max]` band.
    pub(super) fn apply_mutation(&mut self, mutation: &Mutation) {
        for &(target, delta) in mutation.deltas {
            let stats = &mut self.state.actors[self.state.player_id].stats;
            let resources = &mut self.state.resources;
            match target {
                MutationTarget::Hp => stats.hp += delta,
                MutationTarget::MaxHp => stats.max_hp += delta,
                MutationTarget::Attack => stats.attack += delta,
                MutationTarget::Defense => stats.defense += delta,
                MutationTarget::Speed => stats.speed += delta,
                MutationTarget::VisionRange => stats.vision_range += delta,
                MutationTarget::Atp => resources.atp += delta,
                MutationTarget::MaxAtp => resources.max_atp += delta,
                MutationTarget::Protein => resources.protein += delta,
                MutationTarget::MaxProtein => resources.max_protein += delta,
                MutationTarget::Rna => resources.rna += delta,
                MutationTarget::MaxRna => resources.max_rna += delta,
            }
            stats.max_hp = stats.max_hp.max(0);
            stats.hp = stats.hp.clamp(0, stats.max_hp);
            resources.clamp_to_maxima();
        }
    }
}
