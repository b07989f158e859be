use std::collections::VecDeque;

use slotmap::SlotMap;

use crate::content::LOG_CAPACITY;
use crate::types::{ActorKind, DamageZone, EntityId, Message, Pos, RoomRect, TileKind, Tone};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub vision_range: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resources {
    pub atp: i32,
    pub max_atp: i32,
    pub protein: i32,
    pub max_protein: i32,
    pub rna: i32,
    pub max_rna: i32,
}

impl Default for Resources {
    fn default() -> Self {
        Self { atp: 100, max_atp: 100, protein: 50, max_protein: 100, rna: 0, max_rna: 50 }
    }
}

impl Resources {
    pub fn gain_atp(&mut self, amount: i32) {
        self.atp = (self.atp + amount).min(self.max_atp);
    }

    pub fn spend_atp(&mut self, amount: i32) {
        self.atp = (self.atp - amount).max(0);
    }

    pub fn gain_protein(&mut self, amount: i32) {
        self.protein = (self.protein + amount).min(self.max_protein);
    }

    pub fn spend_protein(&mut self, amount: i32) {
        self.protein = (self.protein - amount).max(0);
    }

    pub fn gain_rna(&mut self, amount: i32) {
        self.rna = (self.rna + amount).min(self.max_rna);
    }

    pub fn spend_rna(&mut self, amount: i32) {
        self.rna = (self.rna - amount).max(0);
    }

    /// Re-establish `0 <= value <= max` for every pool after maxima shifted.
    pub fn clamp_to_maxima(&mut self) {
        self.max_atp = self.max_atp.max(0);
        self.max_protein = self.max_protein.max(0);
        self.max_rna = self.max_rna.max(0);
        self.atp = self.atp.clamp(0, self.max_atp);
        self.protein = self.protein.clamp(0, self.max_protein);
        self.rna = self.rna.clamp(0, self.max_rna);
    }
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub id: EntityId,
    pub kind: ActorKind,
    pub pos: Pos,
    pub stats: Stats,
    pub alive: bool,
    pub name: &'static str,
    pub glyph: char,
    pub color: (u8, u8, u8),
}

impl Actor {
    /// Applies the standard mitigation formula and returns the damage dealt.
    /// Damage never drops below 1, however high the defense.
    pub fn take_damage(&mut self, raw: i32) -> i32 {
        let actual = (raw - self.stats.defense.div_euclid(2)).max(1);
        self.stats.hp -= actual;
        if self.stats.hp <= 0 {
            self.stats.hp = 0;
            self.alive = false;
        }
        actual
    }

    pub fn heal(&mut self, amount: i32) {
        self.stats.hp = (self.stats.hp + amount).min(self.stats.max_hp);
    }

    pub fn distance_to(&self, other: &Actor) -> f64 {
        self.pos.distance_to(other.pos)
    }

    /// Fraction of max hp remaining, for health-bar rendering.
    pub fn hp_ratio(&self) -> f32 {
        if self.stats.max_hp <= 0 {
            return 0.0;
        }
        self.stats.hp as f32 / self.stats.max_hp as f32
    }
}

/// One dungeon level: terrain, sight grids, rooms, hazards, and the exit.
/// Replaced wholesale on level transition.
#[derive(Clone)]
pub struct Level {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub visible: Vec<bool>,
    pub explored: Vec<bool>,
    pub rooms: Vec<RoomRect>,
    pub damage_zones: Vec<DamageZone>,
    pub exit_pos: Option<Pos>,
}

impl Level {
    pub fn filled(width: usize, height: usize, kind: TileKind) -> Self {
        Self {
            width,
            height,
            tiles: vec![kind; width * height],
            visible: vec![false; width * height],
            explored: vec![false; width * height],
            rooms: Vec::new(),
            damage_zones: Vec::new(),
            exit_pos: None,
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    /// Out-of-bounds reads as solid wall so callers never index past the grid.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, kind: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let index = self.index(pos);
        self.tiles[index] = kind;
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.tile_at(pos) != TileKind::Wall
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.visible[self.index(pos)]
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.explored[self.index(pos)]
    }

    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    /// Marks a tile currently visible and permanently explored.
    pub(crate) fn mark_visible(&mut self, pos: Pos) {
        let index = self.index(pos);
        self.visible[index] = true;
        self.explored[index] = true;
    }

    pub fn add_damage_zone(&mut self, pos: Pos, damage: i32, duration: i32) {
        self.damage_zones.push(DamageZone { pos, damage, turns_left: duration });
    }

    /// Ages every zone by one enemy turn. A zone survives only while its
    /// remaining duration exceeds one, so a duration-1 zone expires before it
    /// ever deals an enemy-turn tick.
    pub fn tick_damage_zones(&mut self) {
        self.damage_zones.retain(|zone| zone.turns_left > 1);
        for zone in &mut self.damage_zones {
            zone.turns_left -= 1;
        }
    }

    /// Overlapping zones stack.
    pub fn damage_at(&self, pos: Pos) -> i32 {
        self.damage_zones.iter().filter(|zone| zone.pos == pos).map(|zone| zone.damage).sum()
    }
}

/// Append-only bounded log of player-facing messages; oldest entries fall off.
#[derive(Default)]
pub struct MessageLog {
    entries: VecDeque<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>, tone: Tone) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(Message { text: text.into(), tone });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `count` messages, oldest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &Message> {
        self.entries.iter().skip(self.entries.len().saturating_sub(count))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }
}

/// The whole mutable world for one run, owned by the turn engine and passed
/// by reference into AI and combat for the duration of a single call.
pub struct GameState {
    pub level: Level,
    pub actors: SlotMap<EntityId, Actor>,
    /// Clones persist across level transitions; generated hostiles do not.
    pub clone_ids: Vec<EntityId>,
    pub player_id: EntityId,
    pub resources: Resources,
    pub level_index: u32,
    pub turn_count: u64,
}

impl GameState {
    pub fn player(&self) -> &Actor {
        &self.actors[self.player_id]
    }

    /// The living actor standing on `pos`, if any. Dead actors never block.
    pub fn entity_at(&self, pos: Pos) -> Option<EntityId> {
        self.actors
            .iter()
            .find(|(_, actor)| actor.alive && actor.pos == pos)
            .map(|(id, _)| id)
    }

    pub fn is_blocked(&self, pos: Pos) -> bool {
        !self.level.is_walkable(pos) || self.entity_at(pos).is_some()
    }

    pub fn living_hostile_count(&self) -> usize {
        self.actors.values().filter(|actor| actor.alive && actor.kind.is_hostile()).count()
    }
}
