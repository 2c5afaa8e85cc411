//! Contracts for the collaborators the level runner calls into.
//!
//! The display, the input hardware, the asset table, and the tick source
//! are presentation concerns; the engine only ever speaks to them through
//! these traits, so levels run under test with stub implementations.

use anyhow::Result as AnyResult;
use pocket_skirmish_core::{
    Direction, EnemyKind, Event, InputAction, PauseChoice, SpriteSize, SwordReach,
};
use pocket_skirmish_world::query::{EnemyView, HeroSnapshot};

/// Debounced source of one logical input action per tick.
pub trait ActionSource {
    /// Reads the single action to act on this tick.
    fn poll_action(&mut self) -> InputAction;

    /// Runs the modal pause until the player resumes or forfeits.
    ///
    /// Menu traversal is presentation; the engine only cares about the
    /// final choice.
    fn resolve_pause(&mut self) -> PauseChoice;
}

/// Fixed-timestep pacing authority for the running loop.
///
/// Production adapters block until the next frame boundary; tests return
/// immediately.
pub trait TickPacer {
    /// Blocks until the next tick should run.
    fn await_tick(&mut self);
}

/// Read-only sprite dimensions used to size collision footprints.
pub trait SpriteMetrics {
    /// Dimensions of the hero sprite.
    fn hero_size(&self) -> SpriteSize;

    /// Dimensions of an enemy sprite of the provided kind.
    fn enemy_size(&self, kind: EnemyKind) -> SpriteSize;

    /// Dimensions of the sword blade for a facing and reach.
    fn sword_size(&self, direction: Direction, reach: SwordReach) -> SpriteSize;
}

/// Outward presentation surface the runner narrates the level through.
pub trait Presentation {
    /// Draws the freshly loaded scene: every actor at its spawn anchor.
    fn draw_scene(&mut self, hero: &HeroSnapshot, enemies: &EnemyView) -> AnyResult<()>;

    /// Projects a batch of world events onto the display.
    fn project(&mut self, events: &[Event]) -> AnyResult<()>;

    /// Redraws the heart lifebar overlay.
    fn refresh_lifebar(&mut self, life: u8) -> AnyResult<()>;

    /// Redraws the survivor score overlay.
    fn refresh_score(&mut self, score: u8) -> AnyResult<()>;

    /// Plays the walk-off sequence after a cleared level.
    fn play_level_cleared(&mut self, hero: &HeroSnapshot) -> AnyResult<()>;

    /// Plays the death sequence after a lost level.
    fn play_game_over(&mut self, hero: &HeroSnapshot) -> AnyResult<()>;
}
