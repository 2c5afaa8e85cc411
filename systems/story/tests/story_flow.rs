use anyhow::Result as AnyResult;
use pocket_skirmish_core::{
    Direction, EnemyKind, Event, GameMode, InputAction, LevelOutcome, PauseChoice, SpriteSize,
    SwordReach,
};
use pocket_skirmish_system_behavior::{Behavior, Config as BehaviorConfig};
use pocket_skirmish_system_level_runner::ports::{
    ActionSource, Presentation, SpriteMetrics, TickPacer,
};
use pocket_skirmish_system_level_runner::LevelRunner;
use pocket_skirmish_system_story::Story;
use pocket_skirmish_world::query::{EnemyView, HeroSnapshot};
use pocket_skirmish_world::{query, World};

struct Quitter;

impl ActionSource for Quitter {
    fn poll_action(&mut self) -> InputAction {
        InputAction::Pause
    }

    fn resolve_pause(&mut self) -> PauseChoice {
        PauseChoice::Forfeit
    }
}

struct InstantPacer;

impl TickPacer for InstantPacer {
    fn await_tick(&mut self) {}
}

struct TableMetrics;

impl SpriteMetrics for TableMetrics {
    fn hero_size(&self) -> SpriteSize {
        SpriteSize::new(14, 16)
    }

    fn enemy_size(&self, kind: EnemyKind) -> SpriteSize {
        match kind {
            EnemyKind::Bramble => SpriteSize::new(9, 8),
            EnemyKind::Bantam | EnemyKind::Talon => SpriteSize::new(13, 13),
            EnemyKind::Hermit => SpriteSize::new(13, 16),
            EnemyKind::GrandBantam | EnemyKind::GrandTalon => SpriteSize::new(16, 20),
        }
    }

    fn sword_size(&self, _direction: Direction, reach: SwordReach) -> SpriteSize {
        match reach {
            SwordReach::Full => SpriteSize::new(16, 7),
            SwordReach::Half => SpriteSize::new(10, 7),
        }
    }
}

#[derive(Default)]
struct RecordingPresenter {
    projected: Vec<Event>,
    game_over_sequences: u32,
}

impl Presentation for RecordingPresenter {
    fn draw_scene(&mut self, _hero: &HeroSnapshot, _enemies: &EnemyView) -> AnyResult<()> {
        Ok(())
    }

    fn project(&mut self, events: &[Event]) -> AnyResult<()> {
        self.projected.extend_from_slice(events);
        Ok(())
    }

    fn refresh_lifebar(&mut self, _life: u8) -> AnyResult<()> {
        Ok(())
    }

    fn refresh_score(&mut self, _score: u8) -> AnyResult<()> {
        Ok(())
    }

    fn play_level_cleared(&mut self, _hero: &HeroSnapshot) -> AnyResult<()> {
        Ok(())
    }

    fn play_game_over(&mut self, _hero: &HeroSnapshot) -> AnyResult<()> {
        self.game_over_sequences += 1;
        Ok(())
    }
}

#[test]
fn a_forfeit_ends_the_story_campaign_early() {
    let mut world = World::new();
    let mut runner = LevelRunner::new(Behavior::new(BehaviorConfig::new(3)));
    let mut actions = Quitter;
    let mut presenter = RecordingPresenter::default();
    let mut pacer = InstantPacer;

    let outcome = Story
        .run(
            &mut world,
            &mut runner,
            &mut actions,
            &TableMetrics,
            &mut presenter,
            &mut pacer,
        )
        .expect("ports never fail");

    assert_eq!(outcome, LevelOutcome::GameOver);
    assert_eq!(presenter.game_over_sequences, 1);
    assert_eq!(query::mode(&world), GameMode::Story);
    assert!(presenter.projected.iter().any(|event| matches!(
        event,
        Event::CampaignStarted {
            mode: GameMode::Story,
        }
    )));
}
