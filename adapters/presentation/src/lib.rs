#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Pocket Skirmish adapters, plus the
//! event-driven [`BitmapPresenter`] that narrates a running level onto a
//! coordinate-addressed display surface.
//!
//! Concrete backends implement [`DisplaySurface`] and [`SpriteAtlas`];
//! everything above them is backend-agnostic. Frame pacing for the short
//! scripted sequences lives inside `present`, which blocks for as long as
//! the backend wants a frame to stay visible.

use anyhow::Result as AnyResult;
use pocket_skirmish_core::{
    Direction, Event, PixelPoint, SpriteKey, SpriteSize, DISPLAY_COLUMNS, FULL_LIFE, HERO_STRIDE,
};
use pocket_skirmish_system_level_runner::ports::Presentation;
use pocket_skirmish_world::query::{EnemyView, HeroSnapshot};

/// Opaque handle to a sprite known to the display backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteHandle {
    id: u16,
    size: SpriteSize,
}

impl SpriteHandle {
    /// Creates a handle from a backend identifier and pixel dimensions.
    #[must_use]
    pub const fn new(id: u16, size: SpriteSize) -> Self {
        Self { id, size }
    }

    /// Backend identifier of the sprite.
    #[must_use]
    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Pixel dimensions of the sprite.
    #[must_use]
    pub const fn size(&self) -> SpriteSize {
        self.size
    }
}

/// Keys of the overlay glyphs that are not actor sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKey {
    /// Fully filled lifebar heart.
    HeartFull,
    /// Half filled lifebar heart.
    HeartHalf,
    /// Empty lifebar heart.
    HeartEmpty,
    /// One of the ten score digits.
    Digit(u8),
}

/// Coordinate-addressed, double-buffered bitmap display.
///
/// `draw` and `erase` are idempotent per (origin, sprite) pair; nothing is
/// visible until `present` flips the buffer.
pub trait DisplaySurface {
    /// Blits a sprite with its bottom-left pixel at the origin.
    fn draw(&mut self, origin: PixelPoint, sprite: SpriteHandle) -> AnyResult<()>;

    /// Clears the region a sprite occupies at the origin.
    fn erase(&mut self, origin: PixelPoint, sprite: SpriteHandle) -> AnyResult<()>;

    /// Flips the back buffer onto the screen, holding it for one frame.
    fn present(&mut self) -> AnyResult<()>;
}

/// Read-only mapping from sprite keys to backend handles.
pub trait SpriteAtlas {
    /// Resolves an actor sprite key.
    fn actor(&self, key: SpriteKey) -> SpriteHandle;

    /// Resolves an overlay glyph.
    fn overlay(&self, key: OverlayKey) -> SpriteHandle;
}

/// Fill state of one lifebar heart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeartGlyph {
    /// Two half-hearts of life.
    Full,
    /// One half-heart of life.
    Half,
    /// No life left in this heart.
    Empty,
}

impl HeartGlyph {
    const fn overlay(self) -> OverlayKey {
        match self {
            Self::Full => OverlayKey::HeartFull,
            Self::Half => OverlayKey::HeartHalf,
            Self::Empty => OverlayKey::HeartEmpty,
        }
    }
}

/// Anchors of the three lifebar hearts.
const LIFEBAR_ANCHORS: [PixelPoint; 3] = [
    PixelPoint::new(0, 7),
    PixelPoint::new(8, 7),
    PixelPoint::new(16, 7),
];

/// Anchor of the score's tens digit.
const SCORE_TENS_ANCHOR: PixelPoint = PixelPoint::new(74, 7);

/// Anchor of the score's units digit.
const SCORE_UNITS_ANCHOR: PixelPoint = PixelPoint::new(78, 7);

/// Maps a life value to the three heart glyphs at half-heart granularity.
#[must_use]
pub fn lifebar_hearts(life: u8) -> [HeartGlyph; 3] {
    match life.min(FULL_LIFE) {
        6 => [HeartGlyph::Full, HeartGlyph::Full, HeartGlyph::Full],
        5 => [HeartGlyph::Full, HeartGlyph::Full, HeartGlyph::Half],
        4 => [HeartGlyph::Full, HeartGlyph::Full, HeartGlyph::Empty],
        3 => [HeartGlyph::Full, HeartGlyph::Half, HeartGlyph::Empty],
        2 => [HeartGlyph::Full, HeartGlyph::Empty, HeartGlyph::Empty],
        1 => [HeartGlyph::Half, HeartGlyph::Empty, HeartGlyph::Empty],
        _ => [HeartGlyph::Empty, HeartGlyph::Empty, HeartGlyph::Empty],
    }
}

/// Presenter that projects world events onto a display backend using the
/// cached erase-before-redraw sprite keys the world maintains.
#[derive(Debug)]
pub struct BitmapPresenter<D, A> {
    display: D,
    atlas: A,
}

impl<D, A> BitmapPresenter<D, A>
where
    D: DisplaySurface,
    A: SpriteAtlas,
{
    /// Creates a presenter over the provided backend pair.
    #[must_use]
    pub fn new(display: D, atlas: A) -> Self {
        Self { display, atlas }
    }

    /// Consumes the presenter, returning the display backend.
    pub fn into_display(self) -> D {
        self.display
    }

    fn project_one(&mut self, event: &Event) -> AnyResult<()> {
        match event {
            Event::HeroMoved {
                from,
                to,
                erased,
                drawn,
            } => {
                self.display.erase(*from, self.atlas.actor(*erased))?;
                self.display.draw(*to, self.atlas.actor(*drawn))?;
            }
            Event::EnemyMoved {
                from,
                to,
                erased,
                drawn,
                ..
            } => {
                self.display.erase(*from, self.atlas.actor(*erased))?;
                self.display.draw(*to, self.atlas.actor(*drawn))?;
            }
            Event::SwordSwung {
                direction,
                reach,
                footprint,
                hero_at,
                hero_key,
            } => {
                // Blade first, hero over it, so the hero's pixels win the
                // overlap.
                if let (Some(reach), Some(footprint)) = (reach, footprint) {
                    let blade = self.atlas.actor(SpriteKey::Sword {
                        direction: *direction,
                        reach: *reach,
                    });
                    self.display.draw(footprint.anchor(), blade)?;
                    self.display.draw(
                        *hero_at,
                        self.atlas.actor(SpriteKey::HeroAttack {
                            direction: *direction,
                        }),
                    )?;
                    self.display.present()?;
                    self.display.erase(footprint.anchor(), blade)?;
                } else {
                    self.display.draw(
                        *hero_at,
                        self.atlas.actor(SpriteKey::HeroAttack {
                            direction: *direction,
                        }),
                    )?;
                    self.display.present()?;
                }
                self.display.draw(*hero_at, self.atlas.actor(*hero_key))?;
            }
            Event::EnemyDefeated { at, erased, .. } => {
                self.display.erase(*at, self.atlas.actor(*erased))?;
                for stage in [1u8, 0u8] {
                    let flash = self.atlas.actor(SpriteKey::EnemyDefeated { stage });
                    self.display.draw(*at, flash)?;
                    self.display.present()?;
                    self.display.erase(*at, flash)?;
                }
            }
            Event::HeroMauled {
                hero_from,
                hero_to,
                enemy_from,
                enemy_to,
                hero_key,
                enemy_key,
                ..
            } => {
                self.display.erase(*hero_from, self.atlas.actor(*hero_key))?;
                self.display
                    .erase(*enemy_from, self.atlas.actor(*enemy_key))?;
                self.display.draw(*hero_to, self.atlas.actor(*hero_key))?;
                self.display.draw(*enemy_to, self.atlas.actor(*enemy_key))?;
            }
            Event::HeroDefeated { at, erased } => {
                self.display.erase(*at, self.atlas.actor(*erased))?;
                self.display
                    .draw(*at, self.atlas.actor(SpriteKey::HeroFallen))?;
            }
            Event::CampaignStarted { .. }
            | Event::LevelLoaded { .. }
            | Event::RosterRejected { .. }
            | Event::ClashDetected { .. }
            | Event::EnemyStruck { .. }
            | Event::LevelCleared { .. }
            | Event::ScoreCommitted { .. } => {}
        }
        Ok(())
    }
}

impl<D, A> Presentation for BitmapPresenter<D, A>
where
    D: DisplaySurface,
    A: SpriteAtlas,
{
    fn draw_scene(&mut self, hero: &HeroSnapshot, enemies: &EnemyView) -> AnyResult<()> {
        self.display
            .draw(hero.anchor, self.atlas.actor(hero.last_key))?;
        for enemy in enemies.iter() {
            if enemy.defeated {
                continue;
            }
            self.display
                .draw(enemy.anchor, self.atlas.actor(enemy.last_key))?;
        }
        self.display.present()
    }

    fn project(&mut self, events: &[Event]) -> AnyResult<()> {
        if events.is_empty() {
            return Ok(());
        }
        for event in events {
            self.project_one(event)?;
        }
        self.display.present()
    }

    fn refresh_lifebar(&mut self, life: u8) -> AnyResult<()> {
        for (anchor, glyph) in LIFEBAR_ANCHORS.iter().zip(lifebar_hearts(life)) {
            self.display
                .draw(*anchor, self.atlas.overlay(glyph.overlay()))?;
        }
        self.display.present()
    }

    fn refresh_score(&mut self, score: u8) -> AnyResult<()> {
        self.display.draw(
            SCORE_TENS_ANCHOR,
            self.atlas.overlay(OverlayKey::Digit(score / 10 % 10)),
        )?;
        self.display.draw(
            SCORE_UNITS_ANCHOR,
            self.atlas.overlay(OverlayKey::Digit(score % 10)),
        )?;
        self.display.present()
    }

    fn play_level_cleared(&mut self, hero: &HeroSnapshot) -> AnyResult<()> {
        // The hero walks off the right edge of the screen.
        self.display
            .erase(hero.anchor, self.atlas.actor(hero.last_key))?;
        let mut x = hero.anchor.x();
        let mut phase = hero.phase;
        while x < DISPLAY_COLUMNS - 1 {
            x = x.saturating_add(HERO_STRIDE).min(DISPLAY_COLUMNS - 1);
            let at = PixelPoint::new(x, hero.anchor.y());
            let frame = self.atlas.actor(SpriteKey::HeroWalk {
                direction: Direction::Right,
                phase,
            });
            phase = phase.toggled();
            self.display.draw(at, frame)?;
            self.display.present()?;
            self.display.erase(at, frame)?;
        }
        self.display.present()
    }

    fn play_game_over(&mut self, hero: &HeroSnapshot) -> AnyResult<()> {
        self.display
            .erase(hero.anchor, self.atlas.actor(hero.last_key))?;
        self.display
            .draw(hero.anchor, self.atlas.actor(SpriteKey::HeroFallen))?;
        self.display.present()
    }
}
