#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! The scripted story campaign: a fixed sequence of nine rosters played in
//! order until the first lost level.
//!
//! The cutscenes that interleave these levels are presentation and live
//! outside the engine; this system only prepares the rosters and drives
//! the level runner through them.

use anyhow::Result as AnyResult;
use pocket_skirmish_core::{
    BehaviorVariant, Command, EnemyKind, EnemySpec, GameMode, LevelOutcome, PixelPoint, Roster,
};
use pocket_skirmish_system_level_runner::ports::{
    ActionSource, Presentation, SpriteMetrics, TickPacer,
};
use pocket_skirmish_system_level_runner::LevelRunner;
use pocket_skirmish_world::{self as world, World};

/// Pure system that prepares and sequences the story campaign.
#[derive(Debug, Default)]
pub struct Story;

impl Story {
    /// Builds the campaign's nine rosters in play order.
    #[must_use]
    pub fn campaign_rosters<M>(&self, metrics: &M) -> Vec<Roster>
    where
        M: SpriteMetrics,
    {
        let spec = |kind, x, y, life, damage, variant| EnemySpec {
            kind,
            spawn: PixelPoint::new(x, y),
            size: metrics.enemy_size(kind),
            life,
            damage,
            variant,
        };
        let bramble = |x, y| {
            spec(
                EnemyKind::Bramble,
                x,
                y,
                1,
                0,
                BehaviorVariant::Stationary,
            )
        };
        let bantam = |x, y, variant| spec(EnemyKind::Bantam, x, y, 3, 1, variant);

        let levels = vec![
            // A warm-up row of brambles around the clearing.
            vec![
                bramble(32, 15),
                bramble(32, 31),
                bramble(32, 47),
                bramble(48, 31),
            ],
            vec![bramble(16, 47), bramble(32, 15)],
            vec![
                bantam(48, 31, BehaviorVariant::Homing),
                bantam(32, 16, BehaviorVariant::Homing),
                bantam(64, 47, BehaviorVariant::Wandering),
            ],
            vec![
                bantam(48, 16, BehaviorVariant::Wandering),
                bantam(32, 47, BehaviorVariant::Homing),
                bantam(64, 47, BehaviorVariant::Wandering),
                bantam(64, 31, BehaviorVariant::Homing),
            ],
            vec![
                bantam(16, 47, BehaviorVariant::Wandering),
                bantam(32, 16, BehaviorVariant::Homing),
                bantam(32, 47, BehaviorVariant::Wandering),
                bantam(64, 47, BehaviorVariant::Wandering),
                bantam(48, 16, BehaviorVariant::Wandering),
            ],
            // The flock rallies around its grand matriarch.
            vec![
                bantam(32, 16, BehaviorVariant::Homing),
                bantam(32, 47, BehaviorVariant::Homing),
                spec(
                    EnemyKind::GrandBantam,
                    48,
                    40,
                    6,
                    3,
                    BehaviorVariant::Wandering,
                ),
            ],
            vec![
                spec(EnemyKind::Hermit, 48, 31, 9, 4, BehaviorVariant::Homing),
                bramble(32, 15),
                bramble(16, 47),
                bramble(64, 15),
            ],
            vec![spec(
                EnemyKind::GrandTalon,
                48,
                47,
                12,
                5,
                BehaviorVariant::Homing,
            )],
            // The finale is a harmless sparring match.
            vec![spec(EnemyKind::Talon, 50, 46, 20, 0, BehaviorVariant::Homing)],
        ];

        levels
            .into_iter()
            .map(|entries| Roster::new(entries).expect("story rosters stay within capacity"))
            .collect()
    }

    /// Plays the campaign from the first level, stopping at the first
    /// game over.
    pub fn run<A, M, P, T>(
        &self,
        world: &mut World,
        runner: &mut LevelRunner,
        actions: &mut A,
        metrics: &M,
        presentation: &mut P,
        pacer: &mut T,
    ) -> AnyResult<LevelOutcome>
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
                mode: GameMode::Story,
            },
            &mut events,
        );
        presentation.project(&events)?;

        for roster in self.campaign_rosters(metrics) {
            let outcome =
                runner.run_level(world, roster, actions, metrics, presentation, pacer)?;
            if outcome == LevelOutcome::GameOver {
                return Ok(LevelOutcome::GameOver);
            }
        }
        Ok(LevelOutcome::Cleared)
    }
}
