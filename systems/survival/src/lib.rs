#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Survivor mode: deterministic random roster generation and the endless
//! campaign loop that feeds the level runner until the run is lost.

use anyhow::Result as AnyResult;
use pocket_skirmish_core::{
    BehaviorVariant, Command, EnemyKind, EnemySpec, GameMode, LevelOutcome, PixelPoint, Roster,
};
use pocket_skirmish_system_level_runner::ports::{
    ActionSource, Presentation, SpriteMetrics, TickPacer,
};
use pocket_skirmish_system_level_runner::LevelRunner;
use pocket_skirmish_world::{self as world, query, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Domain label mixed into every per-level seed derivation.
const RNG_STREAM_ROSTER: &str = "survivor/roster";

/// Regular enemy kinds a multi-enemy level draws from, in draw order.
const REGULAR_KINDS: [EnemyKind; 4] = [
    EnemyKind::Bramble,
    EnemyKind::Bantam,
    EnemyKind::Hermit,
    EnemyKind::Talon,
];

/// Boss kinds a single-enemy level draws from.
const BOSS_KINDS: [EnemyKind; 2] = [EnemyKind::GrandBantam, EnemyKind::GrandTalon];

/// Variants a moving enemy may be assigned.
const MOVING_VARIANTS: [BehaviorVariant; 2] = [BehaviorVariant::Wandering, BehaviorVariant::Homing];

/// Horizontal pixel pitch between survivor spawn slots.
const SLOT_PITCH: u8 = 16;

/// Leftmost survivor spawn column.
const SLOT_ORIGIN_X: u8 = 20;

/// Baseline survivor spawn row before the per-slot stagger.
const SLOT_BASE_Y: u8 = 47;

/// Configuration parameters required to construct the survivor campaign.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    global_seed: u64,
}

impl Config {
    /// Creates a new configuration from the run's global seed.
    #[must_use]
    pub const fn new(global_seed: u64) -> Self {
        Self { global_seed }
    }
}

/// Endless roster generator and campaign driver for survivor mode.
#[derive(Debug)]
pub struct Survival {
    config: Config,
}

impl Survival {
    /// Creates a survivor campaign using the supplied configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generates the deterministic roster for one level of the run.
    ///
    /// Enemy count is uniform in `[1, 4]`. A count of one promotes the
    /// level to a boss duel; otherwise each slot draws a regular kind,
    /// with Bramble forced Stationary and everything else assigned a
    /// random moving variant. Slots are spaced horizontally and staggered
    /// vertically by variant and kind so spawns never coincide.
    #[must_use]
    pub fn generate_roster<M>(&self, level_index: u32, metrics: &M) -> Roster
    where
        M: SpriteMetrics,
    {
        let seed = derive_level_seed(self.config.global_seed, level_index);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let count = rng.gen_range(1..=4u8);
        let mut entries = Vec::with_capacity(usize::from(count));

        if count == 1 {
            let kind = BOSS_KINDS[rng.gen_range(0..BOSS_KINDS.len())];
            let variant = MOVING_VARIANTS[rng.gen_range(0..MOVING_VARIANTS.len())];
            entries.push(EnemySpec {
                kind,
                spawn: PixelPoint::new(30, 40),
                size: metrics.enemy_size(kind),
                life: 5 * kind.stat_code(),
                damage: 1,
                variant,
            });
        } else {
            for slot in 0..count {
                let kind_index = rng.gen_range(0..REGULAR_KINDS.len());
                let kind = REGULAR_KINDS[kind_index];
                let variant = if kind == EnemyKind::Bramble {
                    BehaviorVariant::Stationary
                } else {
                    MOVING_VARIANTS[rng.gen_range(0..MOVING_VARIANTS.len())]
                };
                entries.push(EnemySpec {
                    kind,
                    spawn: slot_spawn(slot, kind_index as u8, variant),
                    size: metrics.enemy_size(kind),
                    life: 3 * kind.stat_code() + 1,
                    damage: 1,
                    variant,
                });
            }
        }

        Roster::new(entries).expect("survivor rosters stay within the level capacity")
    }

    /// Runs the survivor campaign until the first lost level, commits the
    /// accumulated score to the high-score table, and returns it.
    pub fn run<A, M, P, T>(
        &mut self,
        world: &mut World,
        runner: &mut LevelRunner,
        actions: &mut A,
        metrics: &M,
        presentation: &mut P,
        pacer: &mut T,
    ) -> AnyResult<u8>
    where
        A: ActionSource,
        M: SpriteMetrics,
        P: Presentation,
        T: TickPacer,
    {
        let mut events = Vec::new();
        world::apply(
            world,
            Command::BeginCampaign {
                mode: GameMode::Survivor,
            },
            &mut events,
        );
        presentation.project(&events)?;

        let mut level_index = 0u32;
        loop {
            let roster = self.generate_roster(level_index, metrics);
            match runner.run_level(world, roster, actions, metrics, presentation, pacer)? {
                LevelOutcome::Cleared => level_index = level_index.wrapping_add(1),
                LevelOutcome::GameOver => break,
            }
        }

        events.clear();
        world::apply(world, Command::CommitScore, &mut events);
        presentation.project(&events)?;

        let score = query::score(world);
        log::info!("survivor run ended after level {level_index} with score {score}");
        Ok(score)
    }
}

/// Spawn point of a regular slot: spaced along x, staggered down-to-up by
/// variant and kind so simultaneous spawns never stack perfectly.
fn slot_spawn(slot: u8, kind_index: u8, variant: BehaviorVariant) -> PixelPoint {
    let rank = variant_rank(variant);
    let stagger = 2 * (rank + 1) * slot + kind_index;
    PixelPoint::new(
        SLOT_ORIGIN_X + SLOT_PITCH * slot,
        SLOT_BASE_Y.saturating_sub(stagger),
    )
}

const fn variant_rank(variant: BehaviorVariant) -> u8 {
    match variant {
        BehaviorVariant::Stationary => 0,
        BehaviorVariant::Wandering => 1,
        BehaviorVariant::Homing => 2,
    }
}

fn derive_level_seed(global_seed: u64, level_index: u32) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(global_seed.to_le_bytes());
    hasher.update(level_index.to_le_bytes());
    hasher.update(RNG_STREAM_ROSTER.as_bytes());
    finalize_seed(hasher)
}

fn finalize_seed(hasher: Sha256) -> u64 {
    let digest = hasher.finalize();
    let bytes: [u8; 8] = digest[0..8].try_into().expect("sha256 digest slice length");
    u64::from_le_bytes(bytes)
}
