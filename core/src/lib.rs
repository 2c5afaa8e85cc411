#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Pocket Skirmish engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! for systems to react to deterministically. Systems consume event streams,
//! query immutable snapshots, and respond exclusively with new command
//! batches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of pixel columns on the display, spanning the x axis.
pub const DISPLAY_COLUMNS: u8 = 84;

/// Number of pixel rows on the display, spanning the y axis.
pub const DISPLAY_ROWS: u8 = 48;

/// Maximum number of enemies a level may field simultaneously.
pub const ENEMY_CAPACITY: usize = 6;

/// Life the hero starts a fresh campaign with, at half-heart granularity.
pub const FULL_LIFE: u8 = 6;

/// Horizontal pixel stride of a single hero step.
pub const HERO_STRIDE: u8 = 2;

/// Pixel stride of a wandering enemy's step.
pub const WANDER_STRIDE: u8 = 2;

/// Cell sum that marks an enemy footprint overlapping the hero.
pub const CLASH_SUM_ENEMY_WINS: u8 = 9;

/// Cell sum that marks the sword footprint overlapping an enemy.
pub const CLASH_SUM_HERO_WINS: u8 = 17;

/// Presence weight an actor contributes to every occupancy cell it covers.
///
/// The weights are chosen so the interesting pairwise sums are unambiguous:
/// enemy alone is 1, hero alone is 8, hero plus enemy is 9, sword alone is
/// 16, and sword plus enemy is 17. Two overlapping actors of the same kind
/// alias to a sum outside that set; see the occupancy grid documentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StampWeight {
    /// Weight contributed by a live enemy footprint.
    Enemy,
    /// Weight contributed by the hero's footprint.
    Hero,
    /// Weight contributed by the momentary sword swing footprint.
    Sword,
}

impl StampWeight {
    /// Numeric weight added to each covered occupancy cell.
    #[must_use]
    pub const fn get(self) -> u8 {
        match self {
            Self::Enemy => 1,
            Self::Hero => 8,
            Self::Sword => 16,
        }
    }
}

/// Outcome classification of a clash sum found while stamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClashOutcome {
    /// The sword footprint overlapped an enemy; the hero lands a hit.
    HeroWins,
    /// An enemy footprint overlapped the hero; the hero takes a hit.
    EnemyWins,
}

/// Cardinal facing of an actor on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward decreasing y.
    Up,
    /// Toward increasing x.
    Right,
    /// Toward increasing y.
    Down,
    /// Toward decreasing x.
    Left,
}

impl Direction {
    /// Returns the facing opposite to this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }
}

/// Two-frame walk cycle toggle advanced on every movement tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimPhase {
    /// First walk frame.
    First,
    /// Second walk frame.
    Second,
}

impl AnimPhase {
    /// Returns the other walk frame.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// What the hero is currently doing, selecting his sprite family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    /// Stepping around the arena.
    Walking,
    /// Mid sword swing.
    Attacking,
    /// Recoiling from an enemy contact.
    Hurt,
}

/// Position of a single display pixel, also an occupancy grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PixelPoint {
    x: u8,
    y: u8,
}

impl PixelPoint {
    /// Creates a new pixel position.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Column of the pixel.
    #[must_use]
    pub const fn x(&self) -> u8 {
        self.x
    }

    /// Row of the pixel.
    #[must_use]
    pub const fn y(&self) -> u8 {
        self.y
    }
}

/// Pixel dimensions of a sprite, sizing its collision footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteSize {
    width: u8,
    height: u8,
}

impl SpriteSize {
    /// Creates a new sprite size descriptor.
    #[must_use]
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Width in pixel columns.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixel rows.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }
}

/// Rectangular pixel region a sprite occupies, used for stamping.
///
/// The anchor is the sprite's bottom-left pixel; the footprint spans `width`
/// columns rightward and `height` rows upward from it. Iteration is clamped
/// to the display, so a footprint can never address a cell off the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    anchor: PixelPoint,
    size: SpriteSize,
}

impl Footprint {
    /// Creates a footprint from its bottom-left anchor and sprite size.
    #[must_use]
    pub const fn new(anchor: PixelPoint, size: SpriteSize) -> Self {
        Self { anchor, size }
    }

    /// Bottom-left anchor pixel.
    #[must_use]
    pub const fn anchor(&self) -> PixelPoint {
        self.anchor
    }

    /// Sprite dimensions backing the footprint.
    #[must_use]
    pub const fn size(&self) -> SpriteSize {
        self.size
    }

    /// Leftmost covered column.
    #[must_use]
    pub const fn left(&self) -> u8 {
        self.anchor.x()
    }

    /// Rightmost covered column, clamped to the display.
    #[must_use]
    pub fn right(&self) -> u8 {
        let span = self
            .anchor
            .x()
            .saturating_add(self.size.width().saturating_sub(1));
        span.min(DISPLAY_COLUMNS - 1)
    }

    /// Topmost covered row (smallest y).
    #[must_use]
    pub fn top(&self) -> u8 {
        self.anchor
            .y()
            .saturating_sub(self.size.height().saturating_sub(1))
    }

    /// Bottommost covered row (largest y), clamped to the display.
    #[must_use]
    pub fn bottom(&self) -> u8 {
        self.anchor.y().min(DISPLAY_ROWS - 1)
    }

    /// Reports whether the footprint covers the provided cell.
    #[must_use]
    pub fn contains(&self, cell: PixelPoint) -> bool {
        if self.size.width() == 0 || self.size.height() == 0 {
            return false;
        }
        cell.x() >= self.left()
            && cell.x() <= self.right()
            && cell.y() >= self.top()
            && cell.y() <= self.bottom()
    }

    /// Iterates every display cell covered by the footprint.
    pub fn cells(&self) -> impl Iterator<Item = PixelPoint> {
        let empty = self.size.width() == 0 || self.size.height() == 0;
        let left = self.left();
        let right = self.right();
        let top = self.top();
        let bottom = self.bottom();
        (top..=bottom)
            .flat_map(move |y| (left..=right).map(move |x| PixelPoint::new(x, y)))
            .filter(move |_| !empty)
    }
}

/// Identifier of an enemy, equal to its roster slot; lower slots win
/// clash-attribution tie-breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u8);

impl EnemyId {
    /// Creates a new enemy identifier from a roster slot.
    #[must_use]
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Retrieves the numeric roster slot.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

/// Species of enemy, selecting its sprite set and base stat scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Rooted thicket; harmless until walked into, never moves.
    Bramble,
    /// Small fowl, the arena's staple skirmisher.
    Bantam,
    /// Oversized bantam fielded as a boss.
    GrandBantam,
    /// Wiry recluse with a heavy swing.
    Hermit,
    /// Oversized talon fielded as a boss.
    GrandTalon,
    /// Feral raptor, the toughest regular kind.
    Talon,
}

impl EnemyKind {
    /// Base stat scale of the kind.
    ///
    /// Survivor-mode stats derive from this code: regular kinds get
    /// `3 * code + 1` hit points, bosses `5 * code`.
    #[must_use]
    pub const fn stat_code(self) -> u8 {
        match self {
            Self::Bramble => 0,
            Self::Bantam => 1,
            Self::GrandBantam => 2,
            Self::Hermit => 3,
            Self::GrandTalon => 4,
            Self::Talon => 5,
        }
    }

    /// Reports whether the kind is one of the two boss species.
    #[must_use]
    pub const fn is_boss(self) -> bool {
        matches!(self, Self::GrandBantam | Self::GrandTalon)
    }
}

/// Movement policy an enemy follows each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorVariant {
    /// Never initiates movement; participates in collision passively.
    Stationary,
    /// Steps a fixed stride in a randomly drawn direction each tick.
    Wandering,
    /// Steps one pixel per axis toward the hero each tick.
    Homing,
}

impl BehaviorVariant {
    /// Pixels an enemy of this variant is shoved forward during the
    /// knockback it inflicts.
    #[must_use]
    pub const fn knockback_factor(self) -> u8 {
        match self {
            Self::Stationary => 0,
            Self::Wandering => 3,
            Self::Homing => 6,
        }
    }
}

/// How far the sword extends on a swing.
///
/// Swings close to the display edge shorten to a half blade and, hard
/// against the edge, to no blade at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwordReach {
    /// Full-length blade.
    Full,
    /// Shortened blade used near the display edge.
    Half,
}

/// Determines the sword reach available to a hero at the given footprint,
/// or `None` when the blade cannot be drawn at all.
#[must_use]
pub fn sword_reach(direction: Direction, hero: Footprint) -> Option<SwordReach> {
    let anchor = hero.anchor();
    match direction {
        Direction::Up => {
            if anchor.y() < 24 {
                None
            } else if anchor.y() < 30 {
                Some(SwordReach::Half)
            } else {
                Some(SwordReach::Full)
            }
        }
        Direction::Right => {
            if anchor.x() > 60 {
                None
            } else if anchor.x() > 53 {
                Some(SwordReach::Half)
            } else {
                Some(SwordReach::Full)
            }
        }
        Direction::Down => {
            if anchor.y() > 39 {
                None
            } else if anchor.y() > 32 {
                Some(SwordReach::Half)
            } else {
                Some(SwordReach::Full)
            }
        }
        Direction::Left => {
            if anchor.x() < 10 {
                None
            } else if anchor.x() < 16 {
                Some(SwordReach::Half)
            } else {
                Some(SwordReach::Full)
            }
        }
    }
}

/// Column inset of a vertical swing relative to the hero's anchor.
const VERTICAL_SWING_INSET: u8 = 4;

/// Row drop of a horizontal swing relative to the hero's anchor.
const HORIZONTAL_SWING_DROP: u8 = 5;

/// Computes the momentary footprint of a sword blade swung from the
/// provided hero footprint.
#[must_use]
pub fn sword_footprint(direction: Direction, hero: Footprint, blade: SpriteSize) -> Footprint {
    let anchor = hero.anchor();
    let origin = match direction {
        Direction::Up => PixelPoint::new(
            anchor.x().saturating_add(VERTICAL_SWING_INSET),
            anchor.y().saturating_sub(hero.size().height()),
        ),
        Direction::Right => PixelPoint::new(
            anchor.x().saturating_add(hero.size().width()),
            anchor.y().saturating_sub(HORIZONTAL_SWING_DROP),
        ),
        Direction::Down => PixelPoint::new(
            anchor.x().saturating_add(VERTICAL_SWING_INSET),
            anchor.y().saturating_add(blade.height().saturating_sub(1)),
        ),
        Direction::Left => PixelPoint::new(
            anchor.x().saturating_sub(blade.width()),
            anchor.y().saturating_sub(HORIZONTAL_SWING_DROP),
        ),
    };
    Footprint::new(origin, blade)
}

/// Key identifying a sprite in the asset table.
///
/// The world caches the last key drawn for each actor so presenters can
/// erase the prior frame before drawing the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKey {
    /// Hero walk frame.
    HeroWalk {
        /// Facing of the frame.
        direction: Direction,
        /// Which of the two walk frames.
        phase: AnimPhase,
    },
    /// Hero mid-swing frame.
    HeroAttack {
        /// Facing of the frame.
        direction: Direction,
    },
    /// Hero defeat frame shown on game over.
    HeroFallen,
    /// Enemy walk frame.
    Enemy {
        /// Species of the enemy.
        kind: EnemyKind,
        /// Facing of the frame.
        direction: Direction,
        /// Which of the two walk frames.
        phase: AnimPhase,
    },
    /// Frame of the brief defeated flash played when an enemy dies.
    EnemyDefeated {
        /// Flash frame index, counting down.
        stage: u8,
    },
    /// Sword blade frame.
    Sword {
        /// Facing of the swing.
        direction: Direction,
        /// Blade length in effect.
        reach: SwordReach,
    },
}

/// Gameplay mode of the active campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Scripted level sequence.
    Story,
    /// Endless randomized levels with a score counter.
    Survivor,
}

/// Terminal result of running a single level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LevelOutcome {
    /// Every required enemy was defeated.
    Cleared,
    /// The hero's life reached zero.
    GameOver,
}

/// One debounced logical action read from the input source per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Step the hero one stride in a direction.
    Step(Direction),
    /// Swing the sword.
    Attack,
    /// Enter the modal pause.
    Pause,
    /// No action this tick.
    Idle,
}

/// Resolution of the modal pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PauseChoice {
    /// Continue the level.
    Resume,
    /// Abandon the run; life is forced to zero.
    Forfeit,
}

/// Blueprint for one enemy handed to the world at level load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemySpec {
    /// Species to construct.
    pub kind: EnemyKind,
    /// Bottom-left spawn pixel.
    pub spawn: PixelPoint,
    /// Sprite dimensions sizing the footprint.
    pub size: SpriteSize,
    /// Hit points.
    pub life: u8,
    /// Life subtracted from the hero on contact.
    pub damage: u8,
    /// Movement policy.
    pub variant: BehaviorVariant,
}

/// Reasons a roster cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RosterError {
    /// More enemies were requested than a level may field.
    #[error("roster holds {requested} enemies but the level capacity is {ENEMY_CAPACITY}")]
    CapacityExceeded {
        /// Number of entries the caller attempted to enrol.
        requested: usize,
    },
}

/// Ordered collection of enemies assigned to a level, bounded at
/// construction to [`ENEMY_CAPACITY`] entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<EnemySpec>,
}

impl Roster {
    /// Creates a roster, rejecting one that exceeds the level capacity.
    pub fn new(entries: Vec<EnemySpec>) -> Result<Self, RosterError> {
        if entries.len() > ENEMY_CAPACITY {
            return Err(RosterError::CapacityExceeded {
                requested: entries.len(),
            });
        }
        Ok(Self { entries })
    }

    /// Enemy blueprints in spawn order.
    #[must_use]
    pub fn entries(&self) -> &[EnemySpec] {
        &self.entries
    }

    /// Number of enemies enrolled.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the roster holds no enemies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-tick movement plan for one enemy, produced by the behavior system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepPlan {
    /// Step a fixed stride in one direction, clamped to the display.
    Stride {
        /// Direction of travel.
        direction: Direction,
    },
    /// Step one pixel along each axis independently toward the hero.
    Pursue {
        /// Horizontal unit step, if the hero is offset on the x axis.
        horizontal: Option<Direction>,
        /// Vertical unit step, if the hero is offset on the y axis.
        vertical: Option<Direction>,
    },
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Resets the session for a fresh campaign in the provided mode.
    BeginCampaign {
        /// Mode the campaign runs under.
        mode: GameMode,
    },
    /// Loads a level: clears the grid, constructs the hero with the carried
    /// life, and stamps every actor's initial footprint.
    LoadLevel {
        /// Enemies assigned to the level, in roster order.
        roster: Roster,
        /// Sprite dimensions of the hero.
        hero_size: SpriteSize,
    },
    /// Steps the hero one stride in the provided direction.
    StepHero {
        /// Direction of travel.
        direction: Direction,
    },
    /// Swings the sword: the blade footprint is stamped, scanned, and
    /// unstamped within this single command.
    SwingSword {
        /// Reach available at the hero's position, or `None` against the
        /// display edge (the swing still animates but stamps nothing).
        reach: Option<SwordReach>,
        /// Blade sprite dimensions for the effective reach.
        blade: SpriteSize,
    },
    /// Moves one enemy according to its behavior plan.
    StepEnemy {
        /// Enemy to move.
        enemy: EnemyId,
        /// Movement plan produced by the behavior system.
        plan: StepPlan,
    },
    /// Lands one sword hit on the identified enemy.
    StrikeEnemy {
        /// Enemy that was hit.
        enemy: EnemyId,
    },
    /// Applies an enemy's contact to the hero: knockback, then damage.
    TrampleHero {
        /// Enemy that made contact.
        enemy: EnemyId,
    },
    /// Abandons the run from the pause menu; life is forced to zero.
    ForfeitRun,
    /// Inserts the session score into the high-score table.
    CommitScore,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the session was reset for a new campaign.
    CampaignStarted {
        /// Mode the campaign runs under.
        mode: GameMode,
    },
    /// Confirms that a level was loaded and stamped.
    LevelLoaded {
        /// Number of enemies that must be defeated to clear the level.
        enemies: u8,
        /// Life the hero entered the level with.
        hero_life: u8,
    },
    /// Reports that a level load was rejected.
    RosterRejected {
        /// Specific reason the roster was refused.
        reason: RosterError,
    },
    /// Confirms that the hero moved between two positions.
    HeroMoved {
        /// Anchor before the step.
        from: PixelPoint,
        /// Anchor after the step.
        to: PixelPoint,
        /// Sprite to erase at the old position.
        erased: SpriteKey,
        /// Sprite drawn at the new position.
        drawn: SpriteKey,
    },
    /// Reports a sword swing, whether or not a blade was drawn.
    SwordSwung {
        /// Facing of the swing.
        direction: Direction,
        /// Reach in effect, or `None` when the blade could not be drawn.
        reach: Option<SwordReach>,
        /// Momentary blade footprint, when a blade was drawn.
        footprint: Option<Footprint>,
        /// Hero anchor the swing animates from.
        hero_at: PixelPoint,
        /// Walk frame to restore over the hero once the swing ends.
        hero_key: SpriteKey,
    },
    /// Reports that a stamp produced a clash sum at a cell.
    ClashDetected {
        /// Which side won the contact.
        outcome: ClashOutcome,
        /// First cell whose sum matched a clash constant.
        cell: PixelPoint,
    },
    /// Confirms that an enemy moved between two positions.
    EnemyMoved {
        /// Enemy that moved.
        enemy: EnemyId,
        /// Anchor before the step.
        from: PixelPoint,
        /// Anchor after the step.
        to: PixelPoint,
        /// Sprite to erase at the old position.
        erased: SpriteKey,
        /// Sprite drawn at the new position.
        drawn: SpriteKey,
    },
    /// Reports that an enemy absorbed a sword hit and survived.
    EnemyStruck {
        /// Enemy that was hit.
        enemy: EnemyId,
        /// Hit points remaining.
        remaining_life: u8,
    },
    /// Reports that an enemy's hit points reached zero.
    EnemyDefeated {
        /// Enemy that was defeated.
        enemy: EnemyId,
        /// Anchor where the defeated flash plays.
        at: PixelPoint,
        /// Sprite to erase at that anchor.
        erased: SpriteKey,
        /// Kills still required to clear the level.
        remaining_kills: u8,
        /// Session score after the defeat.
        score: u8,
    },
    /// Reports that an enemy trampled the hero.
    HeroMauled {
        /// Enemy that made contact.
        enemy: EnemyId,
        /// Hero anchor before the knockback.
        hero_from: PixelPoint,
        /// Hero anchor after the knockback.
        hero_to: PixelPoint,
        /// Enemy anchor before the knockback.
        enemy_from: PixelPoint,
        /// Enemy anchor after the knockback.
        enemy_to: PixelPoint,
        /// Sprite redrawn for the hero at the new anchor.
        hero_key: SpriteKey,
        /// Sprite redrawn for the enemy at the new anchor.
        enemy_key: SpriteKey,
        /// Hero life remaining after the damage.
        remaining_life: u8,
    },
    /// Reports that the hero's life reached zero.
    HeroDefeated {
        /// Anchor where the defeat frame plays.
        at: PixelPoint,
        /// Sprite to erase at that anchor.
        erased: SpriteKey,
    },
    /// Confirms that the level's kill counter reached zero.
    LevelCleared {
        /// Life carried into the next level of the campaign.
        carried_life: u8,
    },
    /// Confirms that the session score was inserted into the table.
    ScoreCommitted {
        /// Score that was offered to the table.
        score: u8,
        /// Table standings after the insertion, descending.
        standings: [u8; 3],
    },
}

/// Top-3 high-score table, descending, kept for the process lifetime.
///
/// Insertion uses strictly-greater comparisons, so a tie keeps the earlier
/// entry's rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    standings: [u8; 3],
}

impl ScoreBoard {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { standings: [0; 3] }
    }

    /// Current standings, descending.
    #[must_use]
    pub const fn standings(&self) -> [u8; 3] {
        self.standings
    }

    /// Offers a score to the table, shifting lower entries down when it
    /// ranks.
    pub fn record(&mut self, score: u8) {
        if score > self.standings[0] {
            self.standings[2] = self.standings[1];
            self.standings[1] = self.standings[0];
            self.standings[0] = score;
        } else if score > self.standings[1] {
            self.standings[2] = self.standings[1];
            self.standings[1] = score;
        } else if score > self.standings[2] {
            self.standings[2] = score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn enemy_id_round_trips_through_bincode() {
        assert_round_trip(&EnemyId::new(4));
    }

    #[test]
    fn footprint_round_trips_through_bincode() {
        let footprint = Footprint::new(PixelPoint::new(20, 33), SpriteSize::new(14, 16));
        assert_round_trip(&footprint);
    }

    #[test]
    fn roster_error_round_trips_through_bincode() {
        assert_round_trip(&RosterError::CapacityExceeded { requested: 9 });
    }

    #[test]
    fn scoreboard_round_trips_through_bincode() {
        let mut board = ScoreBoard::new();
        board.record(12);
        assert_round_trip(&board);
    }

    #[test]
    fn stamp_weights_produce_unambiguous_clash_sums() {
        assert_eq!(
            StampWeight::Hero.get() + StampWeight::Enemy.get(),
            CLASH_SUM_ENEMY_WINS
        );
        assert_eq!(
            StampWeight::Sword.get() + StampWeight::Enemy.get(),
            CLASH_SUM_HERO_WINS
        );
    }

    #[test]
    fn footprint_spans_upward_from_anchor() {
        let footprint = Footprint::new(PixelPoint::new(10, 33), SpriteSize::new(14, 16));
        assert_eq!(footprint.left(), 10);
        assert_eq!(footprint.right(), 23);
        assert_eq!(footprint.top(), 18);
        assert_eq!(footprint.bottom(), 33);
        assert!(footprint.contains(PixelPoint::new(10, 18)));
        assert!(footprint.contains(PixelPoint::new(23, 33)));
        assert!(!footprint.contains(PixelPoint::new(24, 33)));
        assert!(!footprint.contains(PixelPoint::new(10, 34)));
        assert_eq!(footprint.cells().count(), 14 * 16);
    }

    #[test]
    fn footprint_iteration_is_clamped_to_the_display() {
        let footprint = Footprint::new(PixelPoint::new(80, 2), SpriteSize::new(10, 10));
        assert_eq!(footprint.right(), DISPLAY_COLUMNS - 1);
        assert_eq!(footprint.top(), 0);
        assert!(footprint
            .cells()
            .all(|cell| cell.x() < DISPLAY_COLUMNS && cell.y() < DISPLAY_ROWS));
    }

    #[test]
    fn empty_footprint_covers_nothing() {
        let footprint = Footprint::new(PixelPoint::new(5, 5), SpriteSize::new(0, 7));
        assert_eq!(footprint.cells().count(), 0);
        assert!(!footprint.contains(PixelPoint::new(5, 5)));
    }

    #[test]
    fn sword_reach_degrades_toward_the_display_edge() {
        let at = |x, y| Footprint::new(PixelPoint::new(x, y), SpriteSize::new(14, 16));
        assert_eq!(
            sword_reach(Direction::Up, at(10, 33)),
            Some(SwordReach::Full)
        );
        assert_eq!(
            sword_reach(Direction::Up, at(10, 27)),
            Some(SwordReach::Half)
        );
        assert_eq!(sword_reach(Direction::Up, at(10, 20)), None);
        assert_eq!(
            sword_reach(Direction::Right, at(40, 33)),
            Some(SwordReach::Full)
        );
        assert_eq!(
            sword_reach(Direction::Right, at(57, 33)),
            Some(SwordReach::Half)
        );
        assert_eq!(sword_reach(Direction::Right, at(65, 33)), None);
        assert_eq!(
            sword_reach(Direction::Down, at(10, 30)),
            Some(SwordReach::Full)
        );
        assert_eq!(
            sword_reach(Direction::Down, at(10, 36)),
            Some(SwordReach::Half)
        );
        assert_eq!(sword_reach(Direction::Down, at(10, 42)), None);
        assert_eq!(
            sword_reach(Direction::Left, at(30, 33)),
            Some(SwordReach::Full)
        );
        assert_eq!(
            sword_reach(Direction::Left, at(12, 33)),
            Some(SwordReach::Half)
        );
        assert_eq!(sword_reach(Direction::Left, at(5, 33)), None);
    }

    #[test]
    fn sword_footprint_sits_beside_the_hero() {
        let hero = Footprint::new(PixelPoint::new(30, 33), SpriteSize::new(14, 16));
        let blade = SpriteSize::new(16, 7);
        let right = sword_footprint(Direction::Right, hero, blade);
        assert_eq!(right.anchor(), PixelPoint::new(44, 28));
        let left = sword_footprint(Direction::Left, hero, blade);
        assert_eq!(left.anchor(), PixelPoint::new(14, 28));

        let vertical_blade = SpriteSize::new(7, 16);
        let up = sword_footprint(Direction::Up, hero, vertical_blade);
        assert_eq!(up.anchor(), PixelPoint::new(34, 17));
        assert!(up.bottom() < hero.top());
        let down = sword_footprint(Direction::Down, hero, vertical_blade);
        assert_eq!(down.anchor(), PixelPoint::new(34, 48));
    }

    #[test]
    fn knockback_factor_scales_with_variant() {
        assert_eq!(BehaviorVariant::Stationary.knockback_factor(), 0);
        assert_eq!(BehaviorVariant::Wandering.knockback_factor(), 3);
        assert_eq!(BehaviorVariant::Homing.knockback_factor(), 6);
    }

    #[test]
    fn stat_codes_match_the_kind_roster() {
        assert_eq!(EnemyKind::Bramble.stat_code(), 0);
        assert_eq!(EnemyKind::Bantam.stat_code(), 1);
        assert_eq!(EnemyKind::GrandBantam.stat_code(), 2);
        assert_eq!(EnemyKind::Hermit.stat_code(), 3);
        assert_eq!(EnemyKind::GrandTalon.stat_code(), 4);
        assert_eq!(EnemyKind::Talon.stat_code(), 5);
        assert!(EnemyKind::GrandBantam.is_boss());
        assert!(!EnemyKind::Talon.is_boss());
    }

    #[test]
    fn roster_rejects_more_than_capacity() {
        let spec = EnemySpec {
            kind: EnemyKind::Bantam,
            spawn: PixelPoint::new(40, 30),
            size: SpriteSize::new(13, 13),
            life: 3,
            damage: 1,
            variant: BehaviorVariant::Wandering,
        };
        assert!(Roster::new(vec![spec; ENEMY_CAPACITY]).is_ok());
        assert_eq!(
            Roster::new(vec![spec; ENEMY_CAPACITY + 1]),
            Err(RosterError::CapacityExceeded {
                requested: ENEMY_CAPACITY + 1
            })
        );
    }

    #[test]
    fn scoreboard_inserts_in_descending_order() {
        let mut board = ScoreBoard::new();
        board.record(10);
        board.record(5);
        assert_eq!(board.standings(), [10, 5, 0]);
        board.record(7);
        assert_eq!(board.standings(), [10, 7, 5]);
    }

    #[test]
    fn scoreboard_ties_keep_the_earlier_entry() {
        let mut board = ScoreBoard::new();
        board.record(10);
        board.record(5);
        board.record(10);
        assert_eq!(board.standings(), [10, 10, 5]);
        board.record(5);
        assert_eq!(board.standings(), [10, 10, 5]);
    }

    #[test]
    fn direction_opposites_pair_up() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn anim_phase_toggles_between_frames() {
        assert_eq!(AnimPhase::First.toggled(), AnimPhase::Second);
        assert_eq!(AnimPhase::Second.toggled(), AnimPhase::First);
    }
}
