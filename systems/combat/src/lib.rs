#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that turns grid clashes into strike and trample commands.

use pocket_skirmish_core::{ClashOutcome, Command, EnemyId, Event, PixelPoint};
use pocket_skirmish_world::query::EnemyView;

/// Combat resolver that attributes clash events to an enemy and queues the
/// matching combat command.
#[derive(Debug, Default)]
pub struct CombatResolver {
    scratch: Vec<Command>,
}

impl CombatResolver {
    /// Creates a new combat resolver with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes events and the current enemy view to emit combat commands.
    ///
    /// Attribution walks the roster in slot order and picks the first live
    /// enemy whose footprint contains the triggering cell; when the search
    /// exhausts the roster the clash resolves to nothing at all.
    pub fn handle(&mut self, events: &[Event], enemies: &EnemyView, out: &mut Vec<Command>) {
        self.scratch.clear();

        for event in events {
            let Event::ClashDetected { outcome, cell } = event else {
                continue;
            };
            let Some(enemy) = attribute_clash(enemies, *cell) else {
                continue;
            };
            self.scratch.push(match outcome {
                ClashOutcome::HeroWins => Command::StrikeEnemy { enemy },
                ClashOutcome::EnemyWins => Command::TrampleHero { enemy },
            });
        }

        if self.scratch.is_empty() {
            return;
        }

        out.reserve(self.scratch.len());
        out.append(&mut self.scratch);
    }
}

/// Returns the lowest roster slot whose live footprint contains the cell.
fn attribute_clash(enemies: &EnemyView, cell: PixelPoint) -> Option<EnemyId> {
    enemies
        .iter()
        .find(|enemy| !enemy.defeated && enemy.footprint().contains(cell))
        .map(|enemy| enemy.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_skirmish_core::{
        BehaviorVariant, EnemyId, EnemyKind, EnemySpec, PixelPoint, Roster, SpriteSize,
    };
    use pocket_skirmish_world::{apply, query, World};

    fn world_with(specs: Vec<EnemySpec>) -> World {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::LoadLevel {
                roster: Roster::new(specs).expect("roster within capacity"),
                hero_size: SpriteSize::new(14, 16),
            },
            &mut events,
        );
        world
    }

    fn bantam_at(x: u8, y: u8) -> EnemySpec {
        EnemySpec {
            kind: EnemyKind::Bantam,
            spawn: PixelPoint::new(x, y),
            size: SpriteSize::new(13, 13),
            life: 3,
            damage: 1,
            variant: BehaviorVariant::Wandering,
        }
    }

    fn clash(outcome: ClashOutcome, x: u8, y: u8) -> Event {
        Event::ClashDetected {
            outcome,
            cell: PixelPoint::new(x, y),
        }
    }

    #[test]
    fn hero_wins_becomes_a_strike() {
        let world = world_with(vec![bantam_at(40, 30)]);
        let mut resolver = CombatResolver::new();
        let mut out = Vec::new();

        resolver.handle(
            &[clash(ClashOutcome::HeroWins, 45, 25)],
            &query::enemies(&world),
            &mut out,
        );

        assert_eq!(
            out,
            vec![Command::StrikeEnemy {
                enemy: EnemyId::new(0),
            }],
        );
    }

    #[test]
    fn enemy_wins_becomes_a_trample() {
        let world = world_with(vec![bantam_at(40, 30)]);
        let mut resolver = CombatResolver::new();
        let mut out = Vec::new();

        resolver.handle(
            &[clash(ClashOutcome::EnemyWins, 40, 30)],
            &query::enemies(&world),
            &mut out,
        );

        assert_eq!(
            out,
            vec![Command::TrampleHero {
                enemy: EnemyId::new(0),
            }],
        );
    }

    #[test]
    fn lowest_roster_slot_wins_the_tie_break() {
        // Both footprints cover the triggering cell.
        let world = world_with(vec![bantam_at(40, 30), bantam_at(44, 32)]);
        let mut resolver = CombatResolver::new();
        let mut out = Vec::new();

        resolver.handle(
            &[clash(ClashOutcome::HeroWins, 45, 28)],
            &query::enemies(&world),
            &mut out,
        );

        assert_eq!(
            out,
            vec![Command::StrikeEnemy {
                enemy: EnemyId::new(0),
            }],
        );
    }

    #[test]
    fn defeated_enemies_are_passed_over() {
        let mut world = world_with(vec![bantam_at(40, 30), bantam_at(44, 32)]);
        let mut events = Vec::new();
        for _ in 0..3 {
            apply(
                &mut world,
                Command::StrikeEnemy {
                    enemy: EnemyId::new(0),
                },
                &mut events,
            );
        }

        let mut resolver = CombatResolver::new();
        let mut out = Vec::new();
        resolver.handle(
            &[clash(ClashOutcome::HeroWins, 45, 28)],
            &query::enemies(&world),
            &mut out,
        );

        assert_eq!(
            out,
            vec![Command::StrikeEnemy {
                enemy: EnemyId::new(1),
            }],
        );
    }

    #[test]
    fn exhausted_attribution_is_a_no_op() {
        let world = world_with(vec![bantam_at(40, 30)]);
        let mut resolver = CombatResolver::new();
        let mut out = Vec::new();

        resolver.handle(
            &[clash(ClashOutcome::HeroWins, 2, 2)],
            &query::enemies(&world),
            &mut out,
        );

        assert!(out.is_empty());
    }

    #[test]
    fn unrelated_events_emit_nothing() {
        let world = world_with(vec![bantam_at(40, 30)]);
        let mut resolver = CombatResolver::new();
        let mut out = Vec::new();

        resolver.handle(
            &[Event::LevelLoaded {
                enemies: 1,
                hero_life: 6,
            }],
            &query::enemies(&world),
            &mut out,
        );

        assert!(out.is_empty());
    }
}
