//! Melee damage exchange between two actors.

use super::Game;
use crate::types::{ActorKind, EntityId, Tone};

impl Game {
    /// Raw damage is the attacker's attack with a uniform wobble in [-2, 2];
    /// the defender's `take_damage` applies mitigation. Attacks by the virus
    /// side drain 2 ATP from the player's pool (clones included) and trigger
    /// kill rewards when the defender falls.
    pub(super) fn attack(&mut self, attacker_id: EntityId, defender_id: EntityId) -> bool {
        let raw = self.state.actors[attacker_id].stats.attack + self.rng.range_i32(-2, 2);
        let attacker_kind = self.state.actors[attacker_id].kind;
        let attacker_name = self.state.actors[attacker_id].name;

        let defender = &mut self.state.actors[defender_id];
        let defender_name = defender.name;
        let actual = defender.take_damage(raw);
        let defender_died = !defender.alive;

        if matches!(attacker_kind, ActorKind::Player | ActorKind::VirusClone) {
            self.log.add(format!("Attacked {defender_name}: -{actual} HP"), Tone::Info);
            self.state.resources.spend_atp(2);
            if defender_died {
                self.on_hostile_killed(defender_id);
            }
        } else if defender_id == self.state.player_id {
            self.log.add(format!("{attacker_name} attacks: -{actual} HP"), Tone::Bad);
        } else {
            self.log.add(format!("{attacker_name} strikes a clone: -{actual}"), Tone::Hazard);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{add_clone, add_enemy, open_game};
    use crate::types::{Action, Direction, Pos, TileKind};

    #[test]
    fn player_attack_damage_stays_inside_the_wobble_band() {
        // attack 12 against defense 3: raw in [10, 14], mitigation 1,
        // so the hit lands for 9 to 13.
        for seed in 0..40 {
            let mut game = open_game(seed);
            let target_pos = game.state().player().pos.step(Direction::East);
            let enemy = add_enemy(&mut game, ActorKind::Neutrophil, target_pos);
            game.state.actors[enemy].stats.defense = 3;
            let hp_before = game.state.actors[enemy].stats.hp;

            game.dispatch(Action::Move(Direction::East));

            let dealt = hp_before - game.state.actors[enemy].stats.hp;
            assert!((9..=13).contains(&dealt), "dealt {dealt} with seed {seed}");
        }
    }

    #[test]
    fn attacking_drains_two_atp_from_the_player_pool() {
        let mut game = open_game(9);
        let target_pos = game.state().player().pos.step(Direction::North);
        add_enemy(&mut game, ActorKind::Macrophage, target_pos);
        game.state.resources.atp = 50;

        game.dispatch(Action::Move(Direction::North));

        // -2 for the attack, then the macrophage answers back (no atp cost),
        // then +2 passive regen.
        assert_eq!(game.state().resources.atp, 50);
    }

    #[test]
    fn clone_attacks_bill_the_player_atp_pool() {
        let mut game = open_game(9);
        let clone_pos = Pos { y: 3, x: 3 };
        add_clone(&mut game, clone_pos);
        let enemy = add_enemy(&mut game, ActorKind::Neutrophil, Pos { y: 3, x: 4 });
        // Blind the enemy and box it in so only the clone swings this turn.
        game.state.actors[enemy].stats.vision_range = 0;
        for wall in [Pos { y: 2, x: 4 }, Pos { y: 4, x: 4 }, Pos { y: 3, x: 5 }] {
            game.state.level.set_tile(wall, TileKind::Wall);
        }
        game.state.resources.atp = 50;

        game.dispatch(Action::Wait);

        // +5 wait, -2 clone attack, +2 passive regen.
        assert_eq!(game.state().resources.atp, 55);
        assert!(game.state.actors[enemy].stats.hp < 40);
    }

    #[test]
    fn hostile_attacks_cost_no_atp_and_log_against_the_player() {
        let mut game = open_game(9);
        let player_pos = game.state().player().pos;
        add_enemy(&mut game, ActorKind::Neutrophil, player_pos.offset(0, 1));
        game.state.resources.atp = 80;
        let hp_before = game.state().player().stats.hp;

        game.dispatch(Action::Wait);

        assert!(game.state().player().stats.hp < hp_before);
        // +5 wait, +2 regen; the hostile's swing costs the player nothing.
        assert_eq!(game.state().resources.atp, 87);
        assert!(game.log().iter().any(|message| message.text.contains("Neutrophil attacks:")));
    }

    #[test]
    fn minimum_one_damage_applies_even_through_massive_defense() {
        let mut game = open_game(9);
        let target_pos = game.state().player().pos.step(Direction::East);
        let enemy = add_enemy(&mut game, ActorKind::Neutrophil, target_pos);
        game.state.actors[enemy].stats.defense = 9999;
        let hp_before = game.state.actors[enemy].stats.hp;

        game.dispatch(Action::Move(Direction::East));

        assert_eq!(game.state.actors[enemy].stats.hp, hp_before - 1);
    }

    #[test]
    fn killing_blow_marks_the_defender_dead_and_rewards_the_player() {
        let mut game = open_game(9);
        let target_pos = game.state().player().pos.step(Direction::East);
        let enemy = add_enemy(&mut game, ActorKind::Neutrophil, target_pos);
        game.state.actors[enemy].stats.hp = 1;
        let protein_before = game.state().resources.protein;

        game.dispatch(Action::Move(Direction::East));

        let victim = &game.state.actors[enemy];
        assert!(!victim.alive);
        assert_eq!(victim.stats.hp, 0);
        assert!(game.state().resources.protein > protein_before);
        assert!(game.log().iter().any(|message| message.text == "Neutrophil destroyed!"));
    }

    #[test]
    fn dead_enemies_stay_in_the_arena_but_stop_blocking() {
        let mut game = open_game(9);
        let target_pos = game.state().player().pos.step(Direction::East);
        let enemy = add_enemy(&mut game, ActorKind::Neutrophil, target_pos);
        game.state.actors[enemy].stats.hp = 1;

        game.dispatch(Action::Move(Direction::East));
        assert!(game.state.actors.contains_key(enemy), "tombstone, not removal");

        game.dispatch(Action::Move(Direction::East));
        assert_eq!(game.state().player().pos, target_pos, "corpses do not block movement");
    }
}
