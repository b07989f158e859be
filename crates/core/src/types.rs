use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, dy: i32, dx: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        self.offset(dy, dx)
    }

    /// Euclidean distance in tile units.
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    BloodVessel,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActorKind {
    Player,
    Macrophage,
    Neutrophil,
    BCell,
    TCell,
    Dendritic,
    MastCell,
    VirusClone,
}

impl ActorKind {
    /// Hostiles are everything the immune system fields against the virus.
    pub fn is_hostile(self) -> bool {
        !matches!(self, Self::Player | Self::VirusClone)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    PlayerTurn,
    EnemyTurn,
    LevelUp,
    Paused,
    GameOver,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// (dy, dx) in grid coordinates; y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::East => (0, 1),
        }
    }
}

/// One abstract player input, dispatched by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Wait,
    CreateClone,
    UseExit,
    Pause,
    Resume,
    SelectMutation(usize),
    Restart,
    ReturnToMenu,
}

/// What a dispatched action did; callers re-render on anything but `Ignored`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A full player turn and the following enemy sweep were resolved.
    TurnResolved,
    /// Phase or setup changed without consuming a turn.
    StateChanged,
    /// Invalid or inapplicable input; nothing happened.
    Ignored,
    /// The player asked to leave the run; the caller owns what happens next.
    LeftGame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Good,
    Bad,
    Alert,
    Hazard,
    Flavor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

/// A timed area hazard, independent of the static terrain grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageZone {
    pub pos: Pos,
    pub damage: i32,
    pub turns_left: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RoomRect {
    pub fn right(self) -> i32 {
        self.x + self.width - 1
    }

    pub fn bottom(self) -> i32 {
        self.y + self.height - 1
    }

    pub fn center(self) -> Pos {
        Pos { y: self.y + self.height / 2, x: self.x + self.width / 2 }
    }

    pub fn intersects(self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= self.x && pos.x <= self.right() && pos.y >= self.y && pos.y <= self.bottom()
    }
}
