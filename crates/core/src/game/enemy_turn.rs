//! The enemy sweep: per-faction hostile AI, clone AI, hazard aging, and
//! end-of-turn bookkeeping. Runs synchronously after every consumed player
//! turn.

use std::collections::VecDeque;

use super::Game;
use crate::types::{ActorKind, EntityId, Phase, Pos, Tone};

/// Cardinal step deltas in (dy, dx) order: north, south, west, east.
const CARDINALS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Melee reach: orthogonal and diagonal neighbors, nothing further.
const MELEE_RANGE: f64 = 1.5;

const BCELL_RANGED_RANGE: f64 = 4.0;
const DENDRITIC_SUMMON_RANGE: f64 = 6.0;
const DENDRITIC_SUMMON_CHANCE: f64 = 0.08;
const MASTCELL_ZONE_RANGE: f64 = 5.0;
const MASTCELL_ZONE_CHANCE: f64 = 0.15;
const MASTCELL_ZONE_DAMAGE: i32 = 5;
const MASTCELL_ZONE_DURATION: i32 = 3;

/// Chance an out-of-sight hostile drifts one random cardinal step.
const WANDER_CHANCE: f64 = 0.3;

impl Game {
    /// Fixed resolution order: hostiles in insertion order (reinforcements
    /// summoned mid-sweep act at the tail of the same sweep), then clones,
    /// then hazard aging and the hazard tick on the player's tile, then death
    /// check, turn counter, and passive regen.
    pub(super) fn resolve_enemy_turn(&mut self) {
        let mut queue: VecDeque<EntityId> = self
            .state
            .actors
            .iter()
            .filter(|(_, actor)| actor.alive && actor.kind.is_hostile())
            .map(|(id, _)| id)
            .collect();
        while let Some(id) = queue.pop_front() {
            if !self.state.actors[id].alive {
                continue;
            }
            if let Some(summoned) = self.enemy_act(id) {
                queue.push_back(summoned);
            }
        }

        let clone_ids = self.state.clone_ids.clone();
        for id in clone_ids {
            if self.state.actors[id].alive {
                self.clone_act(id);
            }
        }

        self.state.level.tick_damage_zones();
        let player_pos = self.state.actors[self.state.player_id].pos;
        let zone_damage = self.state.level.damage_at(player_pos);
        if zone_damage > 0 {
            let actual = self.state.actors[self.state.player_id].take_damage(zone_damage);
            self.log.add(format!("Toxic zone: -{actual} HP!"), Tone::Bad);
        }

        if !self.state.actors[self.state.player_id].alive {
            self.phase = Phase::GameOver;
            self.log.add("YOU DIED!", Tone::Bad);
            return;
        }

        self.state.turn_count += 1;
        self.state.resources.gain_atp(2);
        self.phase = if self.evolution_pending {
            self.evolution_pending = false;
            Phase::LevelUp
        } else {
            Phase::PlayerTurn
        };
    }

    /// One hostile's turn. Returns the id of a reinforcement summoned this
    /// turn so the sweep can append it to the acting queue.
    fn enemy_act(&mut self, enemy_id: EntityId) -> Option<EntityId> {
        let enemy = &self.state.actors[enemy_id];
        let enemy_pos = enemy.pos;
        let kind = enemy.kind;
        let vision = enemy.stats.vision_range;
        let ranged_attack = enemy.stats.attack;

        let target_id = self.nearest_virus_target(enemy_pos)?;
        let target_pos = self.state.actors[target_id].pos;
        let distance = enemy_pos.distance_to(target_pos);

        if distance > f64::from(vision) {
            self.wander(enemy_id, enemy_pos);
            return None;
        }

        match kind {
            ActorKind::BCell => {
                if distance > 1.0 && distance <= BCELL_RANGED_RANGE {
                    let actual = self.state.actors[target_id].take_damage(ranged_attack);
                    if target_id == self.state.player_id {
                        self.log.add(format!("B-cell fires: -{actual} HP"), Tone::Bad);
                    }
                    return None;
                }
            }
            ActorKind::Dendritic => {
                if distance <= DENDRITIC_SUMMON_RANGE && self.rng.chance(DENDRITIC_SUMMON_CHANCE)
                {
                    for (dy, dx) in CARDINALS {
                        let pos = enemy_pos.offset(dy, dx);
                        if self.state.level.is_walkable(pos)
                            && self.state.entity_at(pos).is_none()
                        {
                            let summoned = self.spawn_enemy(ActorKind::Neutrophil, pos);
                            self.log
                                .add("Dendritic cell called reinforcements!", Tone::Alert);
                            return Some(summoned);
                        }
                    }
                    return None;
                }
            }
            ActorKind::MastCell => {
                if distance <= MASTCELL_ZONE_RANGE && self.rng.chance(MASTCELL_ZONE_CHANCE) {
                    self.state.level.add_damage_zone(
                        target_pos,
                        MASTCELL_ZONE_DAMAGE,
                        MASTCELL_ZONE_DURATION,
                    );
                    self.log.add("Mast cell created a toxic zone!", Tone::Hazard);
                    return None;
                }
            }
            _ => {}
        }

        if distance > MELEE_RANGE {
            self.step_toward(enemy_id, target_pos);
        } else {
            self.attack(enemy_id, target_id);
        }
        None
    }

    fn clone_act(&mut self, clone_id: EntityId) {
        let clone_pos = self.state.actors[clone_id].pos;

        let nearest_hostile = self
            .state
            .actors
            .iter()
            .filter(|(_, actor)| actor.alive && actor.kind.is_hostile())
            .map(|(id, actor)| (id, clone_pos.distance_to(actor.pos)))
            .min_by(|(_, left), (_, right)| left.total_cmp(right));

        let Some((target_id, distance)) = nearest_hostile else {
            // Nothing to fight: drift back toward the player when straggling.
            let player_pos = self.state.actors[self.state.player_id].pos;
            if clone_pos.distance_to(player_pos) > 3.0 {
                self.step_toward(clone_id, player_pos);
            }
            return;
        };

        if distance <= MELEE_RANGE {
            self.attack(clone_id, target_id);
        } else {
            let target_pos = self.state.actors[target_id].pos;
            self.step_toward(clone_id, target_pos);
        }
    }

    /// Nearest of the player and living clones, the player winning ties.
    fn nearest_virus_target(&self, from: Pos) -> Option<EntityId> {
        let mut best = Some((
            self.state.player_id,
            from.distance_to(self.state.actors[self.state.player_id].pos),
        ));
        for &clone_id in &self.state.clone_ids {
            let Some(clone) = self.state.actors.get(clone_id) else {
                continue;
            };
            if !clone.alive {
                continue;
            }
            let distance = from.distance_to(clone.pos);
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((clone_id, distance));
            }
        }
        best.map(|(id, _)| id)
    }

    fn wander(&mut self, enemy_id: EntityId, enemy_pos: Pos) {
        if !self.rng.chance(WANDER_CHANCE) {
            return;
        }
        let (dy, dx) = CARDINALS[self.rng.pick_index(CARDINALS.len())];
        let next = enemy_pos.offset(dy, dx);
        if self.state.level.is_walkable(next) && self.state.entity_at(next).is_none() {
            self.state.actors[enemy_id].pos = next;
        }
    }

    /// Greedy chase: try the horizontal step first and fall back to the
    /// vertical one only when no horizontal step was taken.
    fn step_toward(&mut self, mover_id: EntityId, target: Pos) {
        let pos = self.state.actors[mover_id].pos;
        let dx = (target.x - pos.x).signum();
        let dy = (target.y - pos.y).signum();

        if dx != 0 {
            let next = Pos { y: pos.y, x: pos.x + dx };
            if self.state.level.is_walkable(next) && self.state.entity_at(next).is_none() {
                self.state.actors[mover_id].pos = next;
                return;
            }
        }
        if dy != 0 {
            let next = Pos { y: pos.y + dy, x: pos.x };
            if self.state.level.is_walkable(next) && self.state.entity_at(next).is_none() {
                self.state.actors[mover_id].pos = next;
            }
        }
    }
}
