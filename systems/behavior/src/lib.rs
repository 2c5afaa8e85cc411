#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic enemy-behavior system that proposes per-tick step plans.

use pocket_skirmish_core::{BehaviorVariant, Command, Direction, StepPlan};
use pocket_skirmish_world::query::{EnemySnapshot, EnemyView, HeroSnapshot};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the behavior system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided wander seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that reacts to world views and emits enemy step commands.
#[derive(Debug)]
pub struct Behavior {
    rng: ChaCha8Rng,
}

impl Behavior {
    /// Creates a new behavior system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes immutable views and emits one step command per live enemy
    /// that wants to move, in roster order.
    pub fn handle(&mut self, hero: &HeroSnapshot, enemies: &EnemyView, out: &mut Vec<Command>) {
        for enemy in enemies.iter() {
            if enemy.defeated {
                continue;
            }
            match enemy.variant {
                BehaviorVariant::Stationary => {}
                BehaviorVariant::Wandering => {
                    let direction = self.draw_wander_direction();
                    out.push(Command::StepEnemy {
                        enemy: enemy.id,
                        plan: StepPlan::Stride { direction },
                    });
                }
                BehaviorVariant::Homing => {
                    out.push(Command::StepEnemy {
                        enemy: enemy.id,
                        plan: pursue_plan(hero, enemy),
                    });
                }
            }
        }
    }

    /// Draws the next wander direction.
    ///
    /// The draw spans five branches over four directions: the spare branch
    /// resolves to `Up`, so upward steps are roughly twice as likely as any
    /// other direction. The skew is deliberate; the distribution test pins
    /// it in place.
    fn draw_wander_direction(&mut self) -> Direction {
        match self.rng.gen_range(0..5u8) {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            3 => Direction::Left,
            _ => Direction::Up,
        }
    }
}

/// Computes the per-axis unit pursuit toward the hero.
///
/// Each axis contributes an independent single-pixel step; there is no
/// diagonal normalization.
fn pursue_plan(hero: &HeroSnapshot, enemy: &EnemySnapshot) -> StepPlan {
    let horizontal = match hero.anchor.x().cmp(&enemy.anchor.x()) {
        std::cmp::Ordering::Less => Some(Direction::Left),
        std::cmp::Ordering::Greater => Some(Direction::Right),
        std::cmp::Ordering::Equal => None,
    };
    let vertical = match hero.anchor.y().cmp(&enemy.anchor.y()) {
        std::cmp::Ordering::Less => Some(Direction::Up),
        std::cmp::Ordering::Greater => Some(Direction::Down),
        std::cmp::Ordering::Equal => None,
    };
    StepPlan::Pursue {
        horizontal,
        vertical,
    }
}
