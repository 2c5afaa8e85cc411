#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Level state machine: loads a roster, runs the per-tick loop, and reports
//! the terminal outcome.
//!
//! The runner owns the event-to-command pump: every applied command's events
//! are projected to the presenter and handed to the combat resolver, whose
//! follow-up commands are applied in turn until the batch is quiescent.

pub mod ports;

use anyhow::Result as AnyResult;
use pocket_skirmish_core::{
    sword_reach, Command, GameMode, InputAction, LevelOutcome, PauseChoice, Roster, SwordReach,
};
use pocket_skirmish_system_behavior::Behavior;
use pocket_skirmish_system_combat::CombatResolver;
use pocket_skirmish_world::{self as world, query, World};

use crate::ports::{ActionSource, Presentation, SpriteMetrics, TickPacer};

/// States of the level controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelPhase {
    /// Grid cleared, actors constructed and stamped.
    Loading,
    /// Per-tick loop in progress.
    Running,
    /// Kill counter reached zero; the walk-off plays.
    Cleared,
    /// Hero life reached zero; the death sequence plays.
    GameOver,
}

/// Drives one level at a time through its phase machine.
#[derive(Debug)]
pub struct LevelRunner {
    behavior: Behavior,
    combat: CombatResolver,
}

impl LevelRunner {
    /// Creates a runner around the provided behavior system.
    #[must_use]
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            combat: CombatResolver::new(),
        }
    }

    /// Runs a level to completion and reports whether it was cleared.
    pub fn run_level<A, M, P, T>(
        &mut self,
        world: &mut World,
        roster: Roster,
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
        let mut pending_roster = Some(roster);
        let mut phase = LevelPhase::Loading;

        loop {
            phase = match phase {
                LevelPhase::Loading => {
                    if let Some(roster) = pending_roster.take() {
                        self.dispatch(
                            world,
                            Command::LoadLevel {
                                roster,
                                hero_size: metrics.hero_size(),
                            },
                            presentation,
                        )?;
                    }
                    if let Some(hero) = query::hero(world) {
                        presentation.draw_scene(&hero, &query::enemies(world))?;
                        presentation.refresh_lifebar(hero.life)?;
                    }
                    LevelPhase::Running
                }
                LevelPhase::Running => {
                    self.run_tick(world, actions, metrics, presentation, pacer)?
                }
                LevelPhase::Cleared => {
                    if let Some(hero) = query::hero(world) {
                        presentation.play_level_cleared(&hero)?;
                    }
                    log::debug!("level cleared");
                    return Ok(LevelOutcome::Cleared);
                }
                LevelPhase::GameOver => {
                    if let Some(hero) = query::hero(world) {
                        presentation.play_game_over(&hero)?;
                    }
                    log::debug!("level lost");
                    return Ok(LevelOutcome::GameOver);
                }
            };
        }
    }

    /// Runs one tick of the RUNNING phase and picks the next phase.
    fn run_tick<A, M, P, T>(
        &mut self,
        world: &mut World,
        actions: &mut A,
        metrics: &M,
        presentation: &mut P,
        pacer: &mut T,
    ) -> AnyResult<LevelPhase>
    where
        A: ActionSource,
        M: SpriteMetrics,
        P: Presentation,
        T: TickPacer,
    {
        // At most one logical action is acted on per tick.
        match actions.poll_action() {
            InputAction::Step(direction) => {
                self.dispatch(world, Command::StepHero { direction }, presentation)?;
            }
            InputAction::Attack => {
                if let Some(hero) = query::hero(world) {
                    let reach = sword_reach(hero.direction, hero.footprint());
                    let blade = metrics
                        .sword_size(hero.direction, reach.unwrap_or(SwordReach::Full));
                    self.dispatch(world, Command::SwingSword { reach, blade }, presentation)?;
                }
            }
            InputAction::Pause => {
                if actions.resolve_pause() == PauseChoice::Forfeit {
                    self.dispatch(world, Command::ForfeitRun, presentation)?;
                }
            }
            InputAction::Idle => {}
        }

        pacer.await_tick();

        // Every enemy moves with the same unstamp/stamp discipline; each
        // move's clashes resolve before the next enemy steps.
        let plans = {
            let Some(hero) = query::hero(world) else {
                return Ok(LevelPhase::GameOver);
            };
            let enemies = query::enemies(world);
            let mut plans = Vec::new();
            self.behavior.handle(&hero, &enemies, &mut plans);
            plans
        };
        for plan in plans {
            self.dispatch(world, plan, presentation)?;
        }

        let Some(hero) = query::hero(world) else {
            return Ok(LevelPhase::GameOver);
        };
        presentation.refresh_lifebar(hero.life)?;
        if query::mode(world) == GameMode::Survivor {
            presentation.refresh_score(query::score(world))?;
        }

        if hero.life == 0 {
            return Ok(LevelPhase::GameOver);
        }
        if hero.kills_remaining == 0 {
            return Ok(LevelPhase::Cleared);
        }
        Ok(LevelPhase::Running)
    }

    /// Applies a command, projects its events, and pumps the combat
    /// resolver until no follow-up commands remain.
    fn dispatch<P>(
        &mut self,
        world: &mut World,
        command: Command,
        presentation: &mut P,
    ) -> AnyResult<()>
    where
        P: Presentation,
    {
        let mut events = Vec::new();
        world::apply(world, command, &mut events);

        loop {
            presentation.project(&events)?;

            let enemies = query::enemies(world);
            let mut follow_ups = Vec::new();
            self.combat.handle(&events, &enemies, &mut follow_ups);
            if follow_ups.is_empty() {
                return Ok(());
            }

            events.clear();
            for follow_up in follow_ups {
                world::apply(world, follow_up, &mut events);
            }
        }
    }
}
