use std::collections::VecDeque;

use anyhow::Result as AnyResult;
use pocket_skirmish_core::{
    BehaviorVariant, Command, Direction, EnemyKind, EnemySpec, Event, GameMode, InputAction,
    LevelOutcome, PauseChoice, PixelPoint, Roster, SpriteSize, SwordReach,
};
use pocket_skirmish_system_behavior::{Behavior, Config};
use pocket_skirmish_system_level_runner::ports::{
    ActionSource, Presentation, SpriteMetrics, TickPacer,
};
use pocket_skirmish_system_level_runner::LevelRunner;
use pocket_skirmish_world::query::{EnemyView, HeroSnapshot};
use pocket_skirmish_world::{apply, World};

struct ScriptedActions {
    queue: VecDeque<InputAction>,
    pause_choice: PauseChoice,
}

impl ScriptedActions {
    fn new(actions: Vec<InputAction>, pause_choice: PauseChoice) -> Self {
        Self {
            queue: actions.into(),
            pause_choice,
        }
    }
}

impl ActionSource for ScriptedActions {
    fn poll_action(&mut self) -> InputAction {
        self.queue.pop_front().unwrap_or(InputAction::Idle)
    }

    fn resolve_pause(&mut self) -> PauseChoice {
        self.pause_choice
    }
}

#[derive(Default)]
struct InstantPacer {
    ticks: u32,
}

impl TickPacer for InstantPacer {
    fn await_tick(&mut self) {
        self.ticks += 1;
    }
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

    fn sword_size(&self, direction: Direction, reach: SwordReach) -> SpriteSize {
        match (direction, reach) {
            (Direction::Up | Direction::Down, SwordReach::Full) => SpriteSize::new(7, 16),
            (Direction::Up | Direction::Down, SwordReach::Half) => SpriteSize::new(7, 10),
            (Direction::Right | Direction::Left, SwordReach::Full) => SpriteSize::new(16, 7),
            (Direction::Right | Direction::Left, SwordReach::Half) => SpriteSize::new(10, 7),
        }
    }
}

#[derive(Default)]
struct RecordingPresenter {
    projected: Vec<Event>,
    lifebars: Vec<u8>,
    scores: Vec<u8>,
    scenes: u32,
    cleared_sequences: u32,
    game_over_sequences: u32,
}

impl Presentation for RecordingPresenter {
    fn draw_scene(&mut self, _hero: &HeroSnapshot, _enemies: &EnemyView) -> AnyResult<()> {
        self.scenes += 1;
        Ok(())
    }

    fn project(&mut self, events: &[Event]) -> AnyResult<()> {
        self.projected.extend_from_slice(events);
        Ok(())
    }

    fn refresh_lifebar(&mut self, life: u8) -> AnyResult<()> {
        self.lifebars.push(life);
        Ok(())
    }

    fn refresh_score(&mut self, score: u8) -> AnyResult<()> {
        self.scores.push(score);
        Ok(())
    }

    fn play_level_cleared(&mut self, _hero: &HeroSnapshot) -> AnyResult<()> {
        self.cleared_sequences += 1;
        Ok(())
    }

    fn play_game_over(&mut self, _hero: &HeroSnapshot) -> AnyResult<()> {
        self.game_over_sequences += 1;
        Ok(())
    }
}

fn bramble(x: u8, y: u8) -> EnemySpec {
    EnemySpec {
        kind: EnemyKind::Bramble,
        spawn: PixelPoint::new(x, y),
        size: SpriteSize::new(9, 8),
        life: 1,
        damage: 0,
        variant: BehaviorVariant::Stationary,
    }
}

fn run(
    world: &mut World,
    roster: Roster,
    actions: Vec<InputAction>,
    pause_choice: PauseChoice,
) -> (LevelOutcome, RecordingPresenter, u32) {
    let mut runner = LevelRunner::new(Behavior::new(Config::new(17)));
    let mut scripted = ScriptedActions::new(actions, pause_choice);
    let mut presenter = RecordingPresenter::default();
    let mut pacer = InstantPacer::default();
    let outcome = runner
        .run_level(
            world,
            roster,
            &mut scripted,
            &TableMetrics,
            &mut presenter,
            &mut pacer,
        )
        .expect("ports never fail");
    (outcome, presenter, pacer.ticks)
}

#[test]
fn three_kills_clear_a_three_enemy_roster() {
    let mut world = World::new();
    let roster = Roster::new(vec![
        bramble(16, 26),
        bramble(28, 26),
        bramble(40, 26),
    ])
    .expect("roster within capacity");

    let mut actions = vec![InputAction::Attack, InputAction::Attack];
    actions.extend([InputAction::Step(Direction::Right); 5]);
    actions.push(InputAction::Attack);

    let (outcome, presenter, ticks) = run(&mut world, roster, actions, PauseChoice::Resume);

    assert_eq!(outcome, LevelOutcome::Cleared);
    assert_eq!(presenter.cleared_sequences, 1);
    assert_eq!(presenter.game_over_sequences, 0);
    assert_eq!(presenter.scenes, 1);
    assert_eq!(ticks, 8);

    let defeats = presenter
        .projected
        .iter()
        .filter(|event| matches!(event, Event::EnemyDefeated { .. }))
        .count();
    assert_eq!(defeats, 3);
}

#[test]
fn repeated_maulings_end_in_game_over() {
    let mut world = World::new();
    let roster = Roster::new(vec![EnemySpec {
        kind: EnemyKind::Talon,
        spawn: PixelPoint::new(30, 33),
        size: SpriteSize::new(13, 13),
        life: 20,
        damage: 2,
        variant: BehaviorVariant::Homing,
    }])
    .expect("roster within capacity");

    let (outcome, presenter, _ticks) = run(&mut world, roster, Vec::new(), PauseChoice::Resume);

    assert_eq!(outcome, LevelOutcome::GameOver);
    assert_eq!(presenter.game_over_sequences, 1);
    assert_eq!(presenter.cleared_sequences, 0);

    // Three maulings at two damage each walk the lifebar 6, 4, 2, 0.
    assert!(presenter.lifebars.iter().all(|&life| life <= 6));
    assert!(presenter.lifebars.contains(&4));
    assert!(presenter.lifebars.contains(&2));
    assert_eq!(presenter.lifebars.last(), Some(&0));

    let maulings = presenter
        .projected
        .iter()
        .filter(|event| matches!(event, Event::HeroMauled { .. }))
        .count();
    assert_eq!(maulings, 3);
}

#[test]
fn forfeiting_from_pause_forces_game_over() {
    let mut world = World::new();
    let roster =
        Roster::new(vec![bramble(60, 20)]).expect("roster within capacity");

    let (outcome, presenter, ticks) = run(
        &mut world,
        roster,
        vec![InputAction::Pause],
        PauseChoice::Forfeit,
    );

    assert_eq!(outcome, LevelOutcome::GameOver);
    assert_eq!(ticks, 1);
    assert!(presenter
        .projected
        .iter()
        .any(|event| matches!(event, Event::HeroDefeated { .. })));
}

#[test]
fn resuming_from_pause_keeps_the_level_alive() {
    let mut world = World::new();
    // An empty roster clears as soon as the first tick completes.
    let roster = Roster::new(Vec::new()).expect("roster within capacity");

    let (outcome, presenter, _ticks) = run(
        &mut world,
        roster,
        vec![InputAction::Pause],
        PauseChoice::Resume,
    );

    assert_eq!(outcome, LevelOutcome::Cleared);
    assert_eq!(presenter.game_over_sequences, 0);
}

#[test]
fn survivor_mode_refreshes_the_score_overlay() {
    let mut world = World::new();
    let mut events = Vec::new();
    apply(
        &mut world,
        Command::BeginCampaign {
            mode: GameMode::Survivor,
        },
        &mut events,
    );

    let roster =
        Roster::new(vec![bramble(16, 26)]).expect("roster within capacity");
    let (outcome, presenter, _ticks) = run(
        &mut world,
        roster,
        vec![InputAction::Attack],
        PauseChoice::Resume,
    );

    assert_eq!(outcome, LevelOutcome::Cleared);
    assert_eq!(presenter.scores.last(), Some(&1));
}

#[test]
fn story_mode_keeps_the_score_overlay_dark() {
    let mut world = World::new();
    let mut events = Vec::new();
    apply(
        &mut world,
        Command::BeginCampaign {
            mode: GameMode::Story,
        },
        &mut events,
    );

    let roster =
        Roster::new(vec![bramble(16, 26)]).expect("roster within capacity");
    let (_outcome, presenter, _ticks) = run(
        &mut world,
        roster,
        vec![InputAction::Attack],
        PauseChoice::Resume,
    );

    assert!(presenter.scores.is_empty());
}
