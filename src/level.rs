//! Level loading: the descriptor file plus the RLE map.
//!
//! A level on disk is a pair of files under `map/`: `level<N>.rle` (the
//! encoded grid) and `level<N>.json` (the descriptor placing the actors, the
//! bonus item, and the standing-start marker). The descriptor is pure input
//! coordinates; everything behavioral about the actors lives in the game
//! loop, not here.

use crate::error::{MapError, Result};
use crate::grid::{load_level_map, Grid};
use nalgebra::Point2;
use serde::Deserialize;
use std::path::Path;

/// An RGB color triple.
pub type Rgb = (u8, u8, u8);

/// Which character an [`Actor`] plays.
///
/// Behavior differences (player input versus ghost AI) are dispatched on
/// this role by the surrounding game loop; there is no type hierarchy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActorRole {
    /// The player character.
    Player,
    /// The red ghost.
    Blinky,
    /// The pink ghost.
    Pinky,
    /// The cyan ghost.
    Inky,
    /// The orange ghost.
    Clyde,
}

impl ActorRole {
    /// The glyph the actor is drawn with.
    pub fn glyph(self) -> char {
        match self {
            ActorRole::Player => 'ᗧ',
            _ => 'ᗣ',
        }
    }

    /// The actor's render color. An explicit role-to-color mapping, not a
    /// registration order.
    pub fn color(self) -> Rgb {
        match self {
            ActorRole::Player => (255, 255, 0),
            ActorRole::Blinky => (255, 0, 0),
            ActorRole::Pinky => (255, 184, 255),
            ActorRole::Inky => (0, 255, 255),
            ActorRole::Clyde => (255, 184, 82),
        }
    }
}

/// One positioned game character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    /// The actor's role; glyph and color derive from it.
    pub role: ActorRole,
    /// Start position (`x` = column, `y` = row).
    pub pos: Point2<i32>,
}

/// The level's single bonus item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bonus {
    /// Position on the grid.
    pub pos: Point2<i32>,
    /// Glyph the bonus is drawn with.
    pub glyph: char,
    /// Points awarded; always a positive multiple of 100.
    pub points: u32,
}

#[derive(Debug, Deserialize)]
struct Coord {
    x: i32,
    y: i32,
}

impl From<&Coord> for Point2<i32> {
    fn from(c: &Coord) -> Self {
        Point2::new(c.x, c.y)
    }
}

#[derive(Debug, Deserialize)]
struct BonusEntry {
    x: i32,
    y: i32,
    symbol: String,
    points: u32,
}

#[derive(Debug, Deserialize)]
struct LevelDescriptor {
    pacman: Coord,
    blinky: Coord,
    pinky: Coord,
    inky: Coord,
    clyde: Coord,
    cherry: Vec<BonusEntry>,
    standing_start_announcement: Coord,
}

/// A fully-loaded level: the playable grid plus the positioned objects.
///
/// The only way to obtain one is [`Level::load`]; the constructor is
/// private so a `Level` always comes from a validated pair of map files.
#[derive(Debug)]
pub struct Level {
    number: u32,
    map: Grid,
    actors: Vec<Actor>,
    bonus: Bonus,
    start_marker: Point2<i32>,
}

impl Level {
    /// Loads level `number` from `<root>/map/level<N>.json` and
    /// `<root>/map/level<N>.rle`.
    ///
    /// Any unreadable file, malformed descriptor, or invalid map is a typed
    /// error; a failure means the level assets must be fixed, not retried.
    pub fn load(number: u32, root: impl AsRef<Path>) -> Result<Level> {
        let dir = root.as_ref().join("map");
        let descriptor_path = dir.join(format!("level{number}.json"));
        let text = std::fs::read_to_string(&descriptor_path).map_err(|e| {
            MapError::InvalidInput(format!(
                "cannot read level descriptor {}: {e}",
                descriptor_path.display()
            ))
        })?;
        let descriptor: LevelDescriptor = serde_json::from_str(&text)
            .map_err(|e| MapError::InvalidInput(format!("malformed level descriptor: {e}")))?;

        let entry = descriptor.cherry.first().ok_or_else(|| {
            MapError::InvalidInput("level descriptor has no bonus entry".into())
        })?;
        if entry.points == 0 || entry.points % 100 != 0 {
            return Err(MapError::InvalidInput(format!(
                "bonus points must be a positive multiple of 100, got {}",
                entry.points
            )));
        }
        let mut glyphs = entry.symbol.chars();
        let glyph = match (glyphs.next(), glyphs.next()) {
            (Some(glyph), None) => glyph,
            _ => {
                return Err(MapError::InvalidInput(format!(
                    "bonus symbol must be a single character, got {:?}",
                    entry.symbol
                )))
            }
        };

        let map = load_level_map(dir.join(format!("level{number}.rle")))?;

        let actors = vec![
            Actor {
                role: ActorRole::Player,
                pos: (&descriptor.pacman).into(),
            },
            Actor {
                role: ActorRole::Blinky,
                pos: (&descriptor.blinky).into(),
            },
            Actor {
                role: ActorRole::Pinky,
                pos: (&descriptor.pinky).into(),
            },
            Actor {
                role: ActorRole::Inky,
                pos: (&descriptor.inky).into(),
            },
            Actor {
                role: ActorRole::Clyde,
                pos: (&descriptor.clyde).into(),
            },
        ];

        Ok(Level {
            number,
            map,
            actors,
            bonus: Bonus {
                pos: Point2::new(entry.x, entry.y),
                glyph,
                points: entry.points,
            },
            start_marker: (&descriptor.standing_start_announcement).into(),
        })
    }

    /// The level number this was loaded as.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The playable grid.
    pub fn map(&self) -> &Grid {
        &self.map
    }

    /// Mutable access to the grid, for pellet consumption during play.
    pub fn map_mut(&mut self) -> &mut Grid {
        &mut self.map
    }

    /// The positioned actors: the player first, then the four ghosts.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// The level's bonus item.
    pub fn bonus(&self) -> &Bonus {
        &self.bonus
    }

    /// Where the "READY!" standing-start announcement is anchored.
    pub fn start_marker(&self) -> Point2<i32> {
        self.start_marker
    }
}
