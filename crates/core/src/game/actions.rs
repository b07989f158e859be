//! Player action dispatch and resolution.
//!
//! Invalid inputs are rejected as no-ops with a logged reason; they never
//! consume a turn and never raise. A turn-consuming action ends with the
//! enemy sweep running synchronously before control returns to the caller.

use super::Game;
use super::visibility::compute_fov;
use crate::content;
use crate::state::Actor;
use crate::types::{
    Action, ActionOutcome, ActorKind, Direction, EntityId, Phase, TileKind, Tone,
};

/// Neighbor cells probed for a free clone spot, cardinals before diagonals.
const CLONE_PLACEMENT_OFFSETS: [(i32, i32); 8] =
    [(-1, 0), (1, 0), (0, -1), (0, 1), (1, 1), (-1, -1), (-1, 1), (1, -1)];

impl Game {
    /// Entry point for the input collaborator: one abstract action per call.
    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        match self.phase {
            Phase::GameOver | Phase::Victory => match action {
                Action::Restart => {
                    self.restart();
                    ActionOutcome::StateChanged
                }
                Action::ReturnToMenu => ActionOutcome::LeftGame,
                _ => ActionOutcome::Ignored,
            },
            Phase::LevelUp => match action {
                Action::SelectMutation(choice) => self.select_mutation(choice),
                _ => ActionOutcome::Ignored,
            },
            Phase::Paused => match action {
                Action::Resume | Action::Pause => {
                    self.phase = Phase::PlayerTurn;
                    ActionOutcome::StateChanged
                }
                Action::ReturnToMenu => ActionOutcome::LeftGame,
                _ => ActionOutcome::Ignored,
            },
            Phase::PlayerTurn => self.dispatch_player_action(action),
            // The sweep resolves synchronously inside a turn-consuming
            // dispatch, so no input ever lands in this phase.
            Phase::EnemyTurn => ActionOutcome::Ignored,
        }
    }

    fn dispatch_player_action(&mut self, action: Action) -> ActionOutcome {
        let turn_taken = match action {
            Action::Move(direction) => self.move_or_attack(direction),
            Action::Wait => {
                self.state.resources.gain_atp(5);
                self.log.add("Waiting... +5 ATP", Tone::Good);
                true
            }
            Action::CreateClone => self.create_clone(),
            Action::UseExit => return self.use_exit(),
            Action::Pause => {
                self.phase = Phase::Paused;
                return ActionOutcome::StateChanged;
            }
            _ => return ActionOutcome::Ignored,
        };

        if !turn_taken {
            return ActionOutcome::Ignored;
        }
        self.finish_player_turn();
        ActionOutcome::TurnResolved
    }

    /// FOV refresh and the synchronous enemy sweep that closes every
    /// turn-consuming action.
    fn finish_player_turn(&mut self) {
        let player = &self.state.actors[self.state.player_id];
        let (pos, vision) = (player.pos, player.stats.vision_range);
        compute_fov(&mut self.state.level, pos, vision);
        self.phase = Phase::EnemyTurn;
        self.resolve_enemy_turn();
    }

    /// A directional input is an attack against a hostile, a position swap
    /// with a clone, a move onto walkable ground, or a no-op against a wall.
    fn move_or_attack(&mut self, direction: Direction) -> bool {
        let target_pos = self.state.actors[self.state.player_id].pos.step(direction);

        if let Some(target_id) = self.state.entity_at(target_pos)
            && target_id != self.state.player_id
        {
            if self.state.actors[target_id].kind != ActorKind::VirusClone {
                return self.attack(self.state.player_id, target_id);
            }
            let player_pos = self.state.actors[self.state.player_id].pos;
            self.state.actors[target_id].pos = player_pos;
            self.state.actors[self.state.player_id].pos = target_pos;
            self.log.add("Swapped places with clone", Tone::Info);
            return true;
        }

        if !self.state.level.is_walkable(target_pos) {
            return false;
        }

        self.state.actors[self.state.player_id].pos = target_pos;
        self.state.resources.spend_atp(1);

        if self.state.level.tile_at(target_pos) == TileKind::BloodVessel
            && self.rng.chance(0.3)
        {
            let gain = self.rng.range_i32(5, 15);
            self.state.resources.gain_atp(gain);
            self.log.add(format!("+{gain} ATP from the bloodstream"), Tone::Good);
        }

        let zone_damage = self.state.level.damage_at(target_pos);
        if zone_damage > 0 {
            let actual = self.state.actors[self.state.player_id].take_damage(zone_damage);
            self.log.add(format!("Toxic zone: -{actual} HP!"), Tone::Bad);
        }

        true
    }

    fn create_clone(&mut self) -> bool {
        if self.state.resources.protein < content::CLONE_PROTEIN_COST {
            self.log.add("Need 30 protein for a clone", Tone::Bad);
            return false;
        }

        let player_pos = self.state.actors[self.state.player_id].pos;
        for (dy, dx) in CLONE_PLACEMENT_OFFSETS {
            let pos = player_pos.offset(dy, dx);
            if !self.state.level.is_walkable(pos) || self.state.entity_at(pos).is_some() {
                continue;
            }

            let profile =
                content::clone_profile(&self.state.actors[self.state.player_id].stats);
            let clone = Actor {
                id: EntityId::default(),
                kind: ActorKind::VirusClone,
                pos,
                stats: profile.stats,
                alive: true,
                name: profile.name,
                glyph: profile.glyph,
                color: profile.color,
            };
            let id = self.state.actors.insert(clone);
            self.state.actors[id].id = id;
            self.state.clone_ids.push(id);
            self.state.resources.spend_protein(content::CLONE_PROTEIN_COST);
            self.log.add("Clone created!", Tone::Good);
            return true;
        }

        self.log.add("No room for a clone", Tone::Bad);
        false
    }

    /// Leaving requires standing on the exit with every hostile dead. The
    /// transition consumes the turn itself; no enemy sweep runs against the
    /// freshly spawned roster.
    fn use_exit(&mut self) -> ActionOutcome {
        let on_exit = self
            .state
            .level
            .exit_pos
            .is_some_and(|exit| exit == self.state.actors[self.state.player_id].pos);
        if !on_exit {
            self.log.add("Find the exit (green >)", Tone::Alert);
            return ActionOutcome::Ignored;
        }

        let hostiles = self.state.living_hostile_count();
        if hostiles > 0 {
            self.log.add(format!("Enemies remaining: {hostiles}"), Tone::Bad);
            return ActionOutcome::Ignored;
        }

        self.state.level_index += 1;
        if self.state.level_index > content::MAX_LEVEL {
            self.phase = Phase::Victory;
            self.log.add("VICTORY! The organism is yours!", Tone::Good);
        } else {
            self.enter_level();
        }
        ActionOutcome::TurnResolved
    }

    fn select_mutation(&mut self, choice: usize) -> ActionOutcome {
        let Some(&catalog_index) = self.offered_mutations.get(choice) else {
            return ActionOutcome::Ignored;
        };
        let mutation = &content::MUTATIONS[catalog_index];
        self.apply_mutation(mutation);
        self.log.add(format!("Mutation: {}", mutation.name), Tone::Good);
        self.offered_mutations.clear();
        self.phase = Phase::PlayerTurn;
        ActionOutcome::StateChanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{add_clone, add_enemy, open_game};
    use crate::types::Pos;

    #[test]
    fn wait_at_full_atp_stays_capped_and_logs() {
        let mut game = open_game(5);
        assert_eq!(game.state().resources.atp, 100);

        let outcome = game.dispatch(Action::Wait);

        assert_eq!(outcome, ActionOutcome::TurnResolved);
        assert_eq!(game.state().resources.atp, 100, "cap holds: 100 - nothing + 5 + 2");
        assert_eq!(game.phase(), Phase::PlayerTurn);
        assert!(game.log().iter().any(|message| message.text == "Waiting... +5 ATP"));
    }

    #[test]
    fn wait_heals_atp_below_the_cap() {
        let mut game = open_game(5);
        game.state.resources.atp = 40;
        game.dispatch(Action::Wait);
        // +5 from waiting, +2 passive regen at end of the enemy sweep.
        assert_eq!(game.state().resources.atp, 47);
    }

    #[test]
    fn moving_into_open_floor_consumes_a_turn_and_one_atp() {
        let mut game = open_game(5);
        let start = game.state().player().pos;
        game.state.resources.atp = 50;

        let outcome = game.dispatch(Action::Move(Direction::East));

        assert_eq!(outcome, ActionOutcome::TurnResolved);
        assert_eq!(game.state().player().pos, start.step(Direction::East));
        // -1 for the step, +2 passive regen.
        assert_eq!(game.state().resources.atp, 51);
        assert_eq!(game.state().turn_count, 1);
    }

    #[test]
    fn moving_into_a_wall_is_a_free_no_op() {
        let mut game = open_game(5);
        game.state.actors[game.state.player_id].pos = Pos { y: 1, x: 1 };

        let outcome = game.dispatch(Action::Move(Direction::North));

        assert_eq!(outcome, ActionOutcome::Ignored);
        assert_eq!(game.state().player().pos, Pos { y: 1, x: 1 });
        assert_eq!(game.state().turn_count, 0);
        assert_eq!(game.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn moving_onto_a_hostile_resolves_as_an_attack_without_moving() {
        let mut game = open_game(5);
        let start = game.state().player().pos;
        let enemy = add_enemy(&mut game, ActorKind::Neutrophil, start.step(Direction::East));
        let enemy_hp = game.state.actors[enemy].stats.hp;

        let outcome = game.dispatch(Action::Move(Direction::East));

        assert_eq!(outcome, ActionOutcome::TurnResolved);
        assert_eq!(game.state().player().pos, start, "attacking does not move");
        assert!(game.state.actors[enemy].stats.hp < enemy_hp);
    }

    #[test]
    fn moving_onto_a_clone_swaps_positions() {
        let mut game = open_game(5);
        let start = game.state().player().pos;
        let clone_pos = start.step(Direction::South);
        let clone = add_clone(&mut game, clone_pos);

        let outcome = game.dispatch(Action::Move(Direction::South));

        assert_eq!(outcome, ActionOutcome::TurnResolved);
        assert_eq!(game.state().player().pos, clone_pos);
        assert_eq!(game.state.actors[clone].pos, start);
    }

    #[test]
    fn clone_creation_costs_thirty_protein_and_prefers_the_north_cell() {
        let mut game = open_game(5);
        game.state.resources.protein = 50;
        let player_pos = game.state().player().pos;

        let outcome = game.dispatch(Action::CreateClone);

        assert_eq!(outcome, ActionOutcome::TurnResolved);
        assert_eq!(game.state().resources.protein, 20);
        assert_eq!(game.state().clone_ids.len(), 1);

        let clone = &game.state.actors[game.state.clone_ids[0]];
        assert_eq!(clone.pos, player_pos.offset(-1, 0));
        assert_eq!(clone.stats.max_hp, game.state().player().stats.max_hp / 2);
    }

    #[test]
    fn clone_creation_without_protein_fails_without_consuming_a_turn() {
        let mut game = open_game(5);
        game.state.resources.protein = 29;

        let outcome = game.dispatch(Action::CreateClone);

        assert_eq!(outcome, ActionOutcome::Ignored);
        assert_eq!(game.state().turn_count, 0);
        assert!(game.state().clone_ids.is_empty());
        assert!(game.log().iter().any(|message| message.text == "Need 30 protein for a clone"));
    }

    #[test]
    fn clone_creation_with_no_free_neighbor_fails() {
        let mut game = open_game(5);
        game.state.resources.protein = 90;
        let player_pos = game.state().player().pos;
        for (dy, dx) in CLONE_PLACEMENT_OFFSETS {
            add_enemy(&mut game, ActorKind::Neutrophil, player_pos.offset(dy, dx));
        }

        let outcome = game.dispatch(Action::CreateClone);

        assert_eq!(outcome, ActionOutcome::Ignored);
        assert_eq!(game.state().resources.protein, 90);
        assert!(game.log().iter().any(|message| message.text == "No room for a clone"));
    }

    #[test]
    fn exit_use_away_from_the_exit_tile_is_rejected() {
        let mut game = open_game(5);
        game.state.level.exit_pos = Some(Pos { y: 3, x: 3 });

        let outcome = game.dispatch(Action::UseExit);

        assert_eq!(outcome, ActionOutcome::Ignored);
        assert_eq!(game.state().level_index, 1);
        assert!(game.log().iter().any(|message| message.text.contains("Find the exit")));
    }

    #[test]
    fn exit_use_with_hostiles_alive_is_rejected_with_a_count() {
        let mut game = open_game(5);
        let player_pos = game.state().player().pos;
        game.state.level.exit_pos = Some(player_pos);
        add_enemy(&mut game, ActorKind::Neutrophil, Pos { y: 2, x: 2 });

        let outcome = game.dispatch(Action::UseExit);

        assert_eq!(outcome, ActionOutcome::Ignored);
        assert_eq!(game.state().level_index, 1);
        assert_eq!(game.phase(), Phase::PlayerTurn);
        assert!(game.log().iter().any(|message| message.text == "Enemies remaining: 1"));
    }

    #[test]
    fn exit_use_on_a_cleared_level_advances_and_respawns() {
        let mut game = open_game(5);
        let player_pos = game.state().player().pos;
        game.state.level.exit_pos = Some(player_pos);

        let outcome = game.dispatch(Action::UseExit);

        assert_eq!(outcome, ActionOutcome::TurnResolved);
        assert_eq!(game.state().level_index, 2);
        assert_eq!(game.phase(), Phase::PlayerTurn);
        assert!(game.state().living_hostile_count() > 0, "the next level fields enemies");
    }

    #[test]
    fn clearing_the_final_level_is_victory() {
        let mut game = open_game(5);
        game.state.level_index = content::MAX_LEVEL;
        let player_pos = game.state().player().pos;
        game.state.level.exit_pos = Some(player_pos);

        let outcome = game.dispatch(Action::UseExit);

        assert_eq!(outcome, ActionOutcome::TurnResolved);
        assert_eq!(game.phase(), Phase::Victory);
        assert!(game.log().iter().any(|message| message.text.contains("VICTORY")));
    }

    #[test]
    fn pause_and_resume_round_trip_without_consuming_turns() {
        let mut game = open_game(5);
        assert_eq!(game.dispatch(Action::Pause), ActionOutcome::StateChanged);
        assert_eq!(game.phase(), Phase::Paused);
        assert_eq!(game.dispatch(Action::Move(Direction::East)), ActionOutcome::Ignored);
        assert_eq!(game.dispatch(Action::Resume), ActionOutcome::StateChanged);
        assert_eq!(game.phase(), Phase::PlayerTurn);
        assert_eq!(game.state().turn_count, 0);
    }

    #[test]
    fn terminal_phases_only_accept_restart_and_menu() {
        let mut game = open_game(5);
        game.phase = Phase::GameOver;
        assert_eq!(game.dispatch(Action::Wait), ActionOutcome::Ignored);
        assert_eq!(game.dispatch(Action::ReturnToMenu), ActionOutcome::LeftGame);
        assert_eq!(game.dispatch(Action::Restart), ActionOutcome::StateChanged);
        assert_eq!(game.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn vessel_tiles_can_grant_atp_on_entry() {
        let mut game = open_game(5);
        let start = game.state().player().pos;
        // Pace between two vessel tiles until the 0.3 gate pays out.
        game.state.level.set_tile(start.offset(0, 1), TileKind::BloodVessel);
        game.state.level.set_tile(start, TileKind::BloodVessel);
        game.state.resources.atp = 0;

        let mut gained = false;
        for step in 0..60 {
            let direction = if step % 2 == 0 { Direction::East } else { Direction::West };
            game.dispatch(Action::Move(direction));
            if game.log().iter().any(|message| message.text.contains("from the bloodstream")) {
                gained = true;
                break;
            }
        }
        assert!(gained, "sixty vessel steps virtually always pass the 0.3 gate");
    }

    #[test]
    fn stepping_into_a_damage_zone_hurts_immediately() {
        let mut game = open_game(5);
        let target = game.state().player().pos.step(Direction::East);
        game.state.level.add_damage_zone(target, 6, 5);
        let hp_before = game.state().player().stats.hp;

        game.dispatch(Action::Move(Direction::East));

        // 6 raw against defense 5 mitigates to 4; the lingering zone also
        // ticks once during the enemy sweep on the same tile.
        assert_eq!(game.state().player().stats.hp, hp_before - 8);
        assert!(game.log().iter().any(|message| message.text.contains("Toxic zone")));
    }
}
