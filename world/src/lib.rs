#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Pocket Skirmish.
//!
//! The world owns the occupancy grid, the hero, the bounded enemy roster,
//! and the campaign session. All mutation flows through [`apply`]; systems
//! observe the world through the [`query`] module and react to the
//! [`Event`] values each command emits.

use pocket_skirmish_core::{
    sword_footprint, Activity, AnimPhase, BehaviorVariant, ClashOutcome, Command, Direction,
    EnemyId, EnemyKind, EnemySpec, Event, Footprint, GameMode, PixelPoint, Roster, RosterError,
    ScoreBoard, SpriteKey, SpriteSize, StampWeight, StepPlan, SwordReach, CLASH_SUM_ENEMY_WINS,
    CLASH_SUM_HERO_WINS, DISPLAY_COLUMNS, DISPLAY_ROWS, ENEMY_CAPACITY, FULL_LIFE, HERO_STRIDE,
    WANDER_STRIDE,
};

/// Bottom-left pixel the hero occupies when a level is loaded.
const HERO_SPAWN: PixelPoint = PixelPoint::new(1, 33);

/// Pixels the hero recoils when shoved by a moving enemy.
const MAULING_RECOIL: u8 = 6;

/// Represents the authoritative Pocket Skirmish world state.
#[derive(Debug)]
pub struct World {
    occupancy: OccupancyGrid,
    session: Session,
    hero: Option<Hero>,
    enemies: Vec<Enemy>,
}

impl World {
    /// Creates a new world with an empty arena and a fresh session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            occupancy: OccupancyGrid::new(),
            session: Session::new(),
            hero: None,
            enemies: Vec::with_capacity(ENEMY_CAPACITY),
        }
    }

    fn enemy_index(&self, enemy: EnemyId) -> Option<usize> {
        self.enemies.iter().position(|slot| slot.id == enemy)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Campaign-wide state that outlives individual levels.
#[derive(Debug)]
struct Session {
    mode: GameMode,
    carried_life: u8,
    score: u8,
    scoreboard: ScoreBoard,
}

impl Session {
    fn new() -> Self {
        Self {
            mode: GameMode::Story,
            carried_life: FULL_LIFE,
            score: 0,
            scoreboard: ScoreBoard::new(),
        }
    }
}

#[derive(Clone, Debug)]
struct Hero {
    anchor: PixelPoint,
    size: SpriteSize,
    life: u8,
    direction: Direction,
    phase: AnimPhase,
    activity: Activity,
    kills_remaining: u8,
    last_key: SpriteKey,
}

impl Hero {
    fn new(size: SpriteSize, life: u8, kills_remaining: u8) -> Self {
        Self {
            anchor: HERO_SPAWN,
            size,
            life,
            direction: Direction::Right,
            phase: AnimPhase::First,
            activity: Activity::Walking,
            kills_remaining,
            last_key: SpriteKey::HeroWalk {
                direction: Direction::Right,
                phase: AnimPhase::First,
            },
        }
    }

    fn footprint(&self) -> Footprint {
        Footprint::new(self.anchor, self.size)
    }
}

#[derive(Clone, Debug)]
struct Enemy {
    id: EnemyId,
    kind: EnemyKind,
    anchor: PixelPoint,
    size: SpriteSize,
    life: u8,
    damage: u8,
    variant: BehaviorVariant,
    direction: Direction,
    phase: AnimPhase,
    defeated: bool,
    last_key: SpriteKey,
}

impl Enemy {
    fn from_spec(id: EnemyId, spec: EnemySpec) -> Self {
        Self {
            id,
            kind: spec.kind,
            anchor: spec.spawn,
            size: spec.size,
            life: spec.life,
            damage: spec.damage,
            variant: spec.variant,
            direction: Direction::Down,
            phase: AnimPhase::First,
            defeated: false,
            last_key: SpriteKey::Enemy {
                kind: spec.kind,
                direction: Direction::Down,
                phase: AnimPhase::First,
            },
        }
    }

    fn footprint(&self) -> Footprint {
        Footprint::new(self.anchor, self.size)
    }
}

/// Clash sum found while stamping a footprint.
#[derive(Clone, Copy, Debug)]
struct Clash {
    outcome: ClashOutcome,
    cell: PixelPoint,
}

/// Dense 48x84 grid of summed actor presence weights.
///
/// The weights are additive, so two overlapping actors of the same kind
/// alias to a sum outside the clash set; a hero standing on two stacked
/// enemies reads 10, not 9. Such sums never trigger a clash, they only
/// mask one, so the exact trigger semantics are preserved.
#[derive(Clone, Debug)]
struct OccupancyGrid {
    cells: Vec<u8>,
}

impl OccupancyGrid {
    fn new() -> Self {
        Self {
            cells: vec![0; usize::from(DISPLAY_COLUMNS) * usize::from(DISPLAY_ROWS)],
        }
    }

    fn clear(&mut self) {
        self.cells.fill(0);
    }

    fn index(cell: PixelPoint) -> usize {
        usize::from(cell.y()) * usize::from(DISPLAY_COLUMNS) + usize::from(cell.x())
    }

    /// Adds the weight under the footprint and reports the first cell whose
    /// sum matches a clash constant.
    fn stamp(&mut self, footprint: Footprint, weight: StampWeight) -> Option<Clash> {
        let mut clash = None;
        for cell in footprint.cells() {
            let Some(slot) = self.cells.get_mut(Self::index(cell)) else {
                continue;
            };
            *slot = slot.saturating_add(weight.get());
            if clash.is_none() {
                clash = match *slot {
                    CLASH_SUM_ENEMY_WINS => Some(Clash {
                        outcome: ClashOutcome::EnemyWins,
                        cell,
                    }),
                    CLASH_SUM_HERO_WINS => Some(Clash {
                        outcome: ClashOutcome::HeroWins,
                        cell,
                    }),
                    _ => None,
                };
            }
        }
        clash
    }

    /// Subtracts the weight previously stamped under the footprint.
    fn unstamp(&mut self, footprint: Footprint, weight: StampWeight) {
        for cell in footprint.cells() {
            if let Some(slot) = self.cells.get_mut(Self::index(cell)) {
                *slot = slot.saturating_sub(weight.get());
            }
        }
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::BeginCampaign { mode } => {
            world.session.mode = mode;
            world.session.carried_life = FULL_LIFE;
            world.session.score = 0;
            world.hero = None;
            world.enemies.clear();
            world.occupancy.clear();
            out_events.push(Event::CampaignStarted { mode });
        }
        Command::LoadLevel { roster, hero_size } => load_level(world, roster, hero_size, out_events),
        Command::StepHero { direction } => step_hero(world, direction, out_events),
        Command::SwingSword { reach, blade } => swing_sword(world, reach, blade, out_events),
        Command::StepEnemy { enemy, plan } => step_enemy(world, enemy, plan, out_events),
        Command::StrikeEnemy { enemy } => strike_enemy(world, enemy, out_events),
        Command::TrampleHero { enemy } => trample_hero(world, enemy, out_events),
        Command::ForfeitRun => forfeit_run(world, out_events),
        Command::CommitScore => {
            world.session.scoreboard.record(world.session.score);
            out_events.push(Event::ScoreCommitted {
                score: world.session.score,
                standings: world.session.scoreboard.standings(),
            });
        }
    }
}

fn load_level(
    world: &mut World,
    roster: Roster,
    hero_size: SpriteSize,
    out_events: &mut Vec<Event>,
) {
    // Roster::new enforces the capacity, but a roster arriving through
    // deserialization has not passed that gate.
    if roster.len() > ENEMY_CAPACITY {
        out_events.push(Event::RosterRejected {
            reason: RosterError::CapacityExceeded {
                requested: roster.len(),
            },
        });
        return;
    }

    world.occupancy.clear();
    let hero = Hero::new(
        hero_size,
        world.session.carried_life,
        roster.len() as u8,
    );
    let _ = world.occupancy.stamp(hero.footprint(), StampWeight::Hero);
    let hero_life = hero.life;
    world.hero = Some(hero);

    world.enemies = roster
        .entries()
        .iter()
        .enumerate()
        .map(|(slot, spec)| Enemy::from_spec(EnemyId::new(slot as u8), *spec))
        .collect();

    let mut clashes = Vec::new();
    for enemy in &world.enemies {
        if let Some(clash) = world.occupancy.stamp(enemy.footprint(), StampWeight::Enemy) {
            clashes.push(clash);
        }
    }

    log::debug!("level loaded with {} enemies", roster.len());
    out_events.push(Event::LevelLoaded {
        enemies: roster.len() as u8,
        hero_life,
    });
    for clash in clashes {
        push_clash(Some(clash), out_events);
    }
}

fn step_hero(world: &mut World, direction: Direction, out_events: &mut Vec<Event>) {
    let Some(hero) = world.hero.as_mut() else {
        return;
    };

    world.occupancy.unstamp(hero.footprint(), StampWeight::Hero);
    let from = hero.anchor;
    let erased = hero.last_key;
    hero.anchor = strided(hero.anchor, hero.size, direction, HERO_STRIDE);
    hero.direction = direction;
    hero.activity = Activity::Walking;
    hero.last_key = SpriteKey::HeroWalk {
        direction,
        phase: hero.phase,
    };
    hero.phase = hero.phase.toggled();
    let drawn = hero.last_key;
    let to = hero.anchor;
    let clash = world.occupancy.stamp(hero.footprint(), StampWeight::Hero);

    out_events.push(Event::HeroMoved {
        from,
        to,
        erased,
        drawn,
    });
    push_clash(clash, out_events);
}

fn swing_sword(
    world: &mut World,
    reach: Option<SwordReach>,
    blade: SpriteSize,
    out_events: &mut Vec<Event>,
) {
    let Some(hero) = world.hero.as_mut() else {
        return;
    };

    hero.activity = Activity::Attacking;
    let direction = hero.direction;
    let footprint = if reach.is_some() {
        Some(sword_footprint(direction, hero.footprint(), blade))
    } else {
        None
    };

    out_events.push(Event::SwordSwung {
        direction,
        reach,
        footprint,
        hero_at: hero.anchor,
        hero_key: hero.last_key,
    });

    // The blade never persists: stamp, scan, unstamp within this command.
    if let Some(footprint) = footprint {
        let clash = world.occupancy.stamp(footprint, StampWeight::Sword);
        world.occupancy.unstamp(footprint, StampWeight::Sword);
        push_clash(clash, out_events);
    }
}

fn step_enemy(world: &mut World, enemy: EnemyId, plan: StepPlan, out_events: &mut Vec<Event>) {
    let Some(index) = world.enemy_index(enemy) else {
        return;
    };
    if world.enemies[index].defeated {
        return;
    }

    world
        .occupancy
        .unstamp(world.enemies[index].footprint(), StampWeight::Enemy);

    let slot = &mut world.enemies[index];
    let from = slot.anchor;
    let erased = slot.last_key;
    match plan {
        StepPlan::Stride { direction } => {
            slot.anchor = strided(slot.anchor, slot.size, direction, WANDER_STRIDE);
            slot.direction = direction;
        }
        StepPlan::Pursue {
            horizontal,
            vertical,
        } => {
            if let Some(step) = horizontal {
                slot.anchor = nudged(slot.anchor, step);
                slot.direction = step;
            }
            // Vertical pursuit stops once the footprint reaches the top
            // bound, keeping oversized enemies fully on screen.
            if let Some(step) = vertical {
                if slot.anchor.y() >= slot.size.height() {
                    slot.anchor = nudged(slot.anchor, step);
                }
            }
        }
    }
    slot.last_key = SpriteKey::Enemy {
        kind: slot.kind,
        direction: slot.direction,
        phase: slot.phase,
    };
    slot.phase = slot.phase.toggled();
    let to = slot.anchor;
    let drawn = slot.last_key;

    let clash = world
        .occupancy
        .stamp(world.enemies[index].footprint(), StampWeight::Enemy);

    out_events.push(Event::EnemyMoved {
        enemy,
        from,
        to,
        erased,
        drawn,
    });
    push_clash(clash, out_events);
}

fn strike_enemy(world: &mut World, enemy: EnemyId, out_events: &mut Vec<Event>) {
    let Some(index) = world.enemy_index(enemy) else {
        return;
    };
    if world.enemies[index].defeated {
        return;
    }
    let Some(hero) = world.hero.as_mut() else {
        return;
    };

    let slot = &mut world.enemies[index];
    slot.life = slot.life.saturating_sub(1);
    if slot.life > 0 {
        out_events.push(Event::EnemyStruck {
            enemy,
            remaining_life: slot.life,
        });
        return;
    }

    // Defeated enemies stay in the roster but leave the grid and never
    // move again.
    slot.defeated = true;
    slot.variant = BehaviorVariant::Stationary;
    let at = slot.anchor;
    let erased = slot.last_key;
    let footprint = slot.footprint();
    world.occupancy.unstamp(footprint, StampWeight::Enemy);

    hero.kills_remaining = hero.kills_remaining.saturating_sub(1);
    world.session.score = world.session.score.saturating_add(1);
    out_events.push(Event::EnemyDefeated {
        enemy,
        at,
        erased,
        remaining_kills: hero.kills_remaining,
        score: world.session.score,
    });

    if hero.kills_remaining == 0 {
        world.session.carried_life = hero.life;
        out_events.push(Event::LevelCleared {
            carried_life: hero.life,
        });
    }
}

fn trample_hero(world: &mut World, enemy: EnemyId, out_events: &mut Vec<Event>) {
    let Some(index) = world.enemy_index(enemy) else {
        return;
    };
    if world.enemies[index].defeated {
        return;
    }
    let Some(hero) = world.hero.as_mut() else {
        return;
    };

    world.occupancy.unstamp(hero.footprint(), StampWeight::Hero);
    world
        .occupancy
        .unstamp(world.enemies[index].footprint(), StampWeight::Enemy);

    let hero_from = hero.anchor;
    let enemy_from = world.enemies[index].anchor;
    let variant = world.enemies[index].variant;

    if variant == BehaviorVariant::Stationary {
        // A rooted enemy only bumps the hero back over the step that
        // caused the contact.
        hero.anchor = displaced(hero.anchor, hero.direction.opposite(), HERO_STRIDE);
    } else {
        let forward = variant.knockback_factor();
        let slot = &mut world.enemies[index];
        match hero.direction {
            Direction::Up => {
                hero.anchor = if hero.anchor.y() < DISPLAY_ROWS - MAULING_RECOIL - 1 {
                    PixelPoint::new(hero.anchor.x(), hero.anchor.y() + MAULING_RECOIL)
                } else {
                    PixelPoint::new(hero.anchor.x(), DISPLAY_ROWS - 1)
                };
                slot.anchor = if slot.anchor.y() >= slot.size.height().saturating_add(forward) + 1 {
                    PixelPoint::new(slot.anchor.x(), slot.anchor.y() - forward)
                } else {
                    PixelPoint::new(slot.anchor.x(), slot.size.height() + 1)
                };
            }
            Direction::Right => {
                hero.anchor = if hero.anchor.x() >= MAULING_RECOIL + 1 {
                    PixelPoint::new(hero.anchor.x() - MAULING_RECOIL, hero.anchor.y())
                } else {
                    PixelPoint::new(0, hero.anchor.y())
                };
                let limit = DISPLAY_COLUMNS
                    .saturating_sub(slot.size.width())
                    .saturating_sub(forward)
                    .saturating_sub(1);
                slot.anchor = if slot.anchor.x() < limit {
                    PixelPoint::new(slot.anchor.x() + forward, slot.anchor.y())
                } else {
                    PixelPoint::new(DISPLAY_COLUMNS - 1, slot.anchor.y())
                };
            }
            Direction::Down => {
                hero.anchor = if hero.anchor.y() >= hero.size.height().saturating_add(MAULING_RECOIL) + 1 {
                    PixelPoint::new(hero.anchor.x(), hero.anchor.y() - MAULING_RECOIL)
                } else {
                    PixelPoint::new(hero.anchor.x(), hero.size.height() + 1)
                };
                slot.anchor = if slot.anchor.y() < DISPLAY_ROWS.saturating_sub(forward).saturating_sub(1) {
                    PixelPoint::new(slot.anchor.x(), slot.anchor.y() + forward)
                } else {
                    PixelPoint::new(slot.anchor.x(), DISPLAY_ROWS - 1)
                };
            }
            Direction::Left => {
                let limit = DISPLAY_COLUMNS
                    .saturating_sub(hero.size.width())
                    .saturating_sub(MAULING_RECOIL)
                    .saturating_sub(1);
                hero.anchor = if hero.anchor.x() < limit {
                    PixelPoint::new(hero.anchor.x() + MAULING_RECOIL, hero.anchor.y())
                } else {
                    PixelPoint::new(DISPLAY_COLUMNS - 1, hero.anchor.y())
                };
                slot.anchor = if slot.anchor.x() >= forward + 1 {
                    PixelPoint::new(slot.anchor.x() - forward, slot.anchor.y())
                } else {
                    PixelPoint::new(0, slot.anchor.y())
                };
            }
        }
    }

    hero.activity = Activity::Hurt;
    let damage = world.enemies[index].damage;
    hero.life = hero.life.saturating_sub(damage);

    // Restamp both actors. These stamps do not re-enter clash resolution;
    // any overlap that survives the knockback is re-detected by the next
    // tick's movement.
    let _ = world.occupancy.stamp(hero.footprint(), StampWeight::Hero);
    let _ = world
        .occupancy
        .stamp(world.enemies[index].footprint(), StampWeight::Enemy);

    out_events.push(Event::HeroMauled {
        enemy,
        hero_from,
        hero_to: hero.anchor,
        enemy_from,
        enemy_to: world.enemies[index].anchor,
        hero_key: hero.last_key,
        enemy_key: world.enemies[index].last_key,
        remaining_life: hero.life,
    });

    if hero.life == 0 {
        let at = hero.anchor;
        let erased = hero.last_key;
        out_events.push(Event::HeroDefeated { at, erased });
        world.occupancy.clear();
        log::debug!("hero defeated by enemy {}", enemy.get());
    }
}

fn forfeit_run(world: &mut World, out_events: &mut Vec<Event>) {
    let Some(hero) = world.hero.as_mut() else {
        return;
    };
    hero.life = 0;
    out_events.push(Event::HeroDefeated {
        at: hero.anchor,
        erased: hero.last_key,
    });
    world.occupancy.clear();
}

/// Steps an anchor a fixed stride in a direction, clamping to the display
/// so the sprite never leaves the screen.
fn strided(anchor: PixelPoint, size: SpriteSize, direction: Direction, stride: u8) -> PixelPoint {
    match direction {
        Direction::Up => {
            if anchor.y() > size.height().saturating_add(stride) {
                PixelPoint::new(anchor.x(), anchor.y() - stride)
            } else {
                PixelPoint::new(anchor.x(), size.height())
            }
        }
        Direction::Right => {
            let limit = DISPLAY_COLUMNS
                .saturating_sub(size.width())
                .saturating_sub(stride);
            if anchor.x() < limit {
                PixelPoint::new(anchor.x() + stride, anchor.y())
            } else {
                PixelPoint::new(
                    DISPLAY_COLUMNS.saturating_sub(size.width()).saturating_sub(1),
                    anchor.y(),
                )
            }
        }
        Direction::Down => {
            if anchor.y() < DISPLAY_ROWS - stride {
                PixelPoint::new(anchor.x(), anchor.y() + stride)
            } else {
                PixelPoint::new(anchor.x(), DISPLAY_ROWS - 1)
            }
        }
        Direction::Left => {
            if anchor.x() >= stride {
                PixelPoint::new(anchor.x() - stride, anchor.y())
            } else {
                PixelPoint::new(0, anchor.y())
            }
        }
    }
}

/// Moves an anchor a single pixel, clamped to the display.
fn nudged(anchor: PixelPoint, direction: Direction) -> PixelPoint {
    displaced(anchor, direction, 1)
}

/// Moves an anchor a number of pixels, clamped to the display bounds.
fn displaced(anchor: PixelPoint, direction: Direction, pixels: u8) -> PixelPoint {
    match direction {
        Direction::Up => PixelPoint::new(anchor.x(), anchor.y().saturating_sub(pixels)),
        Direction::Right => PixelPoint::new(
            anchor.x().saturating_add(pixels).min(DISPLAY_COLUMNS - 1),
            anchor.y(),
        ),
        Direction::Down => PixelPoint::new(
            anchor.x(),
            anchor.y().saturating_add(pixels).min(DISPLAY_ROWS - 1),
        ),
        Direction::Left => PixelPoint::new(anchor.x().saturating_sub(pixels), anchor.y()),
    }
}

fn push_clash(clash: Option<Clash>, out_events: &mut Vec<Event>) {
    if let Some(clash) = clash {
        out_events.push(Event::ClashDetected {
            outcome: clash.outcome,
            cell: clash.cell,
        });
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use pocket_skirmish_core::{
        Activity, AnimPhase, BehaviorVariant, Direction, EnemyId, EnemyKind, Footprint, GameMode,
        PixelPoint, SpriteKey, SpriteSize, DISPLAY_COLUMNS, DISPLAY_ROWS,
    };

    /// Immutable representation of the hero's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HeroSnapshot {
        /// Bottom-left anchor pixel.
        pub anchor: PixelPoint,
        /// Sprite dimensions sizing the footprint.
        pub size: SpriteSize,
        /// Life remaining, at half-heart granularity.
        pub life: u8,
        /// Current facing.
        pub direction: Direction,
        /// Current walk frame.
        pub phase: AnimPhase,
        /// Current activity.
        pub activity: Activity,
        /// Kills still required to clear the level.
        pub kills_remaining: u8,
        /// Sprite most recently drawn for the hero.
        pub last_key: SpriteKey,
    }

    impl HeroSnapshot {
        /// Footprint the hero currently occupies.
        #[must_use]
        pub fn footprint(&self) -> Footprint {
            Footprint::new(self.anchor, self.size)
        }
    }

    /// Immutable representation of a single enemy's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EnemySnapshot {
        /// Identifier equal to the enemy's roster slot.
        pub id: EnemyId,
        /// Species of the enemy.
        pub kind: EnemyKind,
        /// Bottom-left anchor pixel.
        pub anchor: PixelPoint,
        /// Sprite dimensions sizing the footprint.
        pub size: SpriteSize,
        /// Hit points remaining.
        pub life: u8,
        /// Life subtracted from the hero on contact.
        pub damage: u8,
        /// Movement policy.
        pub variant: BehaviorVariant,
        /// Current facing.
        pub direction: Direction,
        /// Current walk frame.
        pub phase: AnimPhase,
        /// Whether the enemy has been defeated and unstamped.
        pub defeated: bool,
        /// Sprite most recently drawn for the enemy.
        pub last_key: SpriteKey,
    }

    impl EnemySnapshot {
        /// Footprint the enemy currently occupies.
        #[must_use]
        pub fn footprint(&self) -> Footprint {
            Footprint::new(self.anchor, self.size)
        }
    }

    /// Read-only snapshot describing the level's enemies in roster order.
    #[derive(Clone, Debug, Default)]
    pub struct EnemyView {
        snapshots: Vec<EnemySnapshot>,
    }

    impl EnemyView {
        /// Iterator over the captured snapshots in roster order.
        pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
            self.snapshots.iter()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<EnemySnapshot> {
            self.snapshots
        }

        /// Looks up a single enemy by identifier.
        #[must_use]
        pub fn get(&self, enemy: EnemyId) -> Option<&EnemySnapshot> {
            self.snapshots.iter().find(|snapshot| snapshot.id == enemy)
        }
    }

    /// Read-only view into the dense weighted occupancy grid.
    #[derive(Clone, Copy, Debug)]
    pub struct OccupancyView<'a> {
        cells: &'a [u8],
    }

    impl OccupancyView<'_> {
        /// Summed presence weight at the provided cell.
        #[must_use]
        pub fn weight(&self, cell: PixelPoint) -> u8 {
            self.cells
                .get(super::OccupancyGrid::index(cell))
                .copied()
                .unwrap_or(0)
        }

        /// Total weight stamped across the whole grid.
        #[must_use]
        pub fn total_weight(&self) -> u32 {
            self.cells.iter().map(|&value| u32::from(value)).sum()
        }

        /// Provides the dimensions of the underlying grid as (columns, rows).
        #[must_use]
        pub const fn dimensions(&self) -> (u8, u8) {
            (DISPLAY_COLUMNS, DISPLAY_ROWS)
        }
    }

    /// Captures a read-only snapshot of the hero, if a level is active.
    #[must_use]
    pub fn hero(world: &World) -> Option<HeroSnapshot> {
        world.hero.as_ref().map(|hero| HeroSnapshot {
            anchor: hero.anchor,
            size: hero.size,
            life: hero.life,
            direction: hero.direction,
            phase: hero.phase,
            activity: hero.activity,
            kills_remaining: hero.kills_remaining,
            last_key: hero.last_key,
        })
    }

    /// Captures a read-only view of the level's enemies in roster order.
    #[must_use]
    pub fn enemies(world: &World) -> EnemyView {
        EnemyView {
            snapshots: world
                .enemies
                .iter()
                .map(|enemy| EnemySnapshot {
                    id: enemy.id,
                    kind: enemy.kind,
                    anchor: enemy.anchor,
                    size: enemy.size,
                    life: enemy.life,
                    damage: enemy.damage,
                    variant: enemy.variant,
                    direction: enemy.direction,
                    phase: enemy.phase,
                    defeated: enemy.defeated,
                    last_key: enemy.last_key,
                })
                .collect(),
        }
    }

    /// Exposes a read-only view of the weighted occupancy grid.
    #[must_use]
    pub fn occupancy(world: &World) -> OccupancyView<'_> {
        OccupancyView {
            cells: world.occupancy.cells(),
        }
    }

    /// Mode of the active campaign.
    #[must_use]
    pub fn mode(world: &World) -> GameMode {
        world.session.mode
    }

    /// Score accumulated by the session so far.
    #[must_use]
    pub fn score(world: &World) -> u8 {
        world.session.score
    }

    /// Life the next loaded level will hand the hero.
    #[must_use]
    pub fn carried_life(world: &World) -> u8 {
        world.session.carried_life
    }

    /// Current top-3 high-score standings, descending.
    #[must_use]
    pub fn high_scores(world: &World) -> [u8; 3] {
        world.session.scoreboard.standings()
    }

    /// Kills still required to clear the level, if a level is active.
    #[must_use]
    pub fn remaining_kills(world: &World) -> Option<u8> {
        world.hero.as_ref().map(|hero| hero.kills_remaining)
    }
}
