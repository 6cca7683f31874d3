//! Level structure and navigation queries
//!
//! Represents a playable level: a rectangular grid of fields plus the
//! player and ghost spawn registries extracted at parse time. The level
//! owns its validation (structural checks and reachability analysis) and
//! the navigation queries used by the game loop.

use crate::error::{LevelError, Result};
use crate::field::Field;
use crate::tiles::Tile;
use pacman_core::Coordinate;
use rand::seq::SliceRandom;
use std::fmt;

/// Placeholder name for levels not loaded from a file
pub const UNNAMED_LEVEL: &str = "unnamed level";

/// A playable level
///
/// The grid is built once during parsing and never reconstructed; the
/// spawn registries hold the marker positions in row-major scan order.
#[derive(Debug, Clone)]
pub struct Level {
    /// Display name
    name: String,

    /// Grid width in cells
    width: usize,

    /// Grid height in cells
    height: usize,

    /// Field grid in row-major order (index = y * width + x)
    fields: Vec<Field>,

    /// Player spawn points in row-major scan order
    player_spawns: Vec<Coordinate>,

    /// Ghost spawn points in row-major scan order
    ghost_spawns: Vec<Coordinate>,

    /// Round-robin cursor advanced only by `next_ghost_spawn`
    ghost_spawn_cursor: usize,
}

impl Level {
    /// Create a level from a parsed grid
    ///
    /// `fields` must hold `width * height` entries in row-major order. The
    /// level starts out with the placeholder name.
    pub fn new(
        width: usize,
        height: usize,
        fields: Vec<Field>,
        player_spawns: Vec<Coordinate>,
        ghost_spawns: Vec<Coordinate>,
    ) -> Self {
        debug_assert_eq!(fields.len(), width * height);

        Self {
            name: UNNAMED_LEVEL.to_string(),
            width,
            height,
            fields,
            player_spawns,
            ghost_spawns,
            ghost_spawn_cursor: 0,
        }
    }

    /// Display name of this level
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the display name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Registered player spawn points
    pub fn player_spawns(&self) -> &[Coordinate] {
        &self.player_spawns
    }

    /// Registered ghost spawn points
    pub fn ghost_spawns(&self) -> &[Coordinate] {
        &self.ghost_spawns
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Field at the given position, or `None` if out of bounds
    pub fn get_field(&self, x: i32, y: i32) -> Option<&Field> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(&self.fields[y as usize * self.width + x as usize])
    }

    /// Overwrite a single cell with the tile encoded by `c`
    ///
    /// Editor-style escape hatch: the spawn registries are not refreshed,
    /// so a level changed this way must be validated again before play.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn set_field(&mut self, x: i32, y: i32, c: char) -> Result<()> {
        let tile = Tile::from_glyph(c).ok_or(LevelError::InvalidCharacter(c))?;
        self.fields[y as usize * self.width + x as usize] =
            Field::new(Coordinate::new(x, y), tile);
        Ok(())
    }

    /// Solid test with the exterior treated as impassable
    ///
    /// Out-of-bounds positions count as solid.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        match self.get_field(x, y) {
            Some(field) => field.is_solid(),
            None => true,
        }
    }

    /// Wall test with the exterior treated as open
    ///
    /// Out-of-bounds positions count as not-a-wall, so sight lines can
    /// probe past the border without reporting a collision. Deliberately
    /// asymmetric to `is_solid`.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        match self.get_field(x, y) {
            Some(field) => field.is_wall(),
            None => false,
        }
    }

    /// Check for an unobstructed axis-aligned line between two points
    ///
    /// The points must share an axis value; every cell from one to the
    /// other along that axis, endpoints included, must be non-wall. Points
    /// sharing neither axis never have line contact.
    pub fn exists_straight_line(&self, p1: Coordinate, p2: Coordinate) -> bool {
        if p1.x == p2.x {
            for y in p1.y.min(p2.y)..=p1.y.max(p2.y) {
                if self.is_wall(p1.x, y) {
                    return false;
                }
            }
            true
        } else if p1.y == p2.y {
            for x in p1.x.min(p2.x)..=p1.x.max(p2.x) {
                if self.is_wall(x, p1.y) {
                    return false;
                }
            }
            true
        } else {
            false
        }
    }

    /// Uniformly random player spawn point
    ///
    /// `None` only if no player spawn is registered; a level that passed
    /// `validate` always has at least one.
    pub fn random_player_spawn(&self) -> Option<Coordinate> {
        self.player_spawns.choose(&mut rand::thread_rng()).copied()
    }

    /// Uniformly random ghost spawn point
    pub fn random_ghost_spawn(&self) -> Option<Coordinate> {
        self.ghost_spawns.choose(&mut rand::thread_rng()).copied()
    }

    /// Next ghost spawn point in round-robin order
    ///
    /// Cycles through the registry in registration order, independent of
    /// the random accessors.
    pub fn next_ghost_spawn(&mut self) -> Option<Coordinate> {
        if self.ghost_spawns.is_empty() {
            return None;
        }

        let spawn = self.ghost_spawns[self.ghost_spawn_cursor % self.ghost_spawns.len()];
        self.ghost_spawn_cursor = self.ghost_spawn_cursor.wrapping_add(1);
        Some(spawn)
    }

    /// Uniformly random cell whose tile is open space or a dot
    ///
    /// Cannot return `None` on a level that passed `validate`, which
    /// guarantees at least one dot.
    pub fn random_free_cell(&self) -> Option<Coordinate> {
        let free: Vec<Coordinate> = self
            .fields
            .iter()
            .filter(|field| field.is_free())
            .map(|field| field.coordinate())
            .collect();

        free.choose(&mut rand::thread_rng()).copied()
    }

    /// Orthogonally adjacent non-wall cells in west, north, east, south order
    ///
    /// Neighbors are clamped to the grid: edge cells omit directions that
    /// would leave the bounds instead of wrapping around. This bounded
    /// adjacency is distinct from the toroidal adjacency `validate` uses.
    pub fn neighbors(&self, p: Coordinate) -> Vec<Coordinate> {
        let candidates = [
            Coordinate::new(p.x - 1, p.y),
            Coordinate::new(p.x, p.y - 1),
            Coordinate::new(p.x + 1, p.y),
            Coordinate::new(p.x, p.y + 1),
        ];

        candidates
            .into_iter()
            .filter(|c| self.in_bounds(c.x, c.y) && !self.is_wall(c.x, c.y))
            .collect()
    }

    fn has_dot(&self) -> bool {
        self.fields.iter().any(|field| field.is_dot())
    }

    /// Check that the level is playable
    ///
    /// Fails if no player spawn is registered, if no ghost spawn is
    /// registered, if no dot was placed, or if any dot cannot be reached
    /// from the first player spawn under the wraparound movement rule.
    pub fn validate(&self) -> Result<()> {
        if self.player_spawns.is_empty() {
            return Err(LevelError::NoPlayerSpawn);
        }
        if self.ghost_spawns.is_empty() {
            return Err(LevelError::NoGhostSpawn);
        }
        if !self.has_dot() {
            return Err(LevelError::NoDots);
        }

        self.check_reachability()
    }

    /// Toroidal flood fill from the first player spawn
    ///
    /// Movement wraps across the level border, so adjacency is taken
    /// modulo the grid dimensions. Solid cells start settled and are never
    /// explored; any dot left unsettled is unreachable, and the first one
    /// in row-major scan order is reported.
    fn check_reachability(&self) -> Result<()> {
        let w = self.width as i32;
        let h = self.height as i32;

        let mut settled: Vec<bool> = self.fields.iter().map(Field::is_solid).collect();

        let mut worklist = vec![self.player_spawns[0]];
        while let Some(p) = worklist.pop() {
            settled[(p.y * w + p.x) as usize] = true;

            let adjacent = [
                Coordinate::new(p.x - 1, p.y),
                Coordinate::new(p.x + 1, p.y),
                Coordinate::new(p.x, p.y - 1),
                Coordinate::new(p.x, p.y + 1),
            ];
            for next in adjacent {
                let next = next.wrapped(w, h);
                if !settled[(next.y * w + next.x) as usize] {
                    worklist.push(next);
                }
            }
        }

        for y in 0..h {
            for x in 0..w {
                let i = (y * w + x) as usize;
                if !settled[i] && self.fields[i].is_dot() {
                    return Err(LevelError::UnreachableDot {
                        level: self.name.clone(),
                        x,
                        y,
                    });
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Level {
    /// Re-serialize the grid using the canonical tile characters
    ///
    /// Rows are joined by `\n` with no trailing terminator; parsing the
    /// result reconstructs an equivalent grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width {
                write!(f, "{}", self.fields[y * self.width + x].tile().glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{LevelParser, ParseOptions};

    fn parse(text: &str) -> Level {
        LevelParser::parse_text_with(
            text,
            ParseOptions {
                allow_missing_player_spawn: true,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_validate_accepts_playable_level() {
        let level = parse("######\n#P..G#\n######");
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_player_spawn() {
        let level = parse("#.G#");
        assert!(matches!(level.validate(), Err(LevelError::NoPlayerSpawn)));
    }

    #[test]
    fn test_validate_requires_ghost_spawn() {
        let level = parse("#P.#");
        assert!(matches!(level.validate(), Err(LevelError::NoGhostSpawn)));
    }

    #[test]
    fn test_validate_requires_dots() {
        let level = parse("#P G#");
        assert!(matches!(level.validate(), Err(LevelError::NoDots)));
    }

    #[test]
    fn test_validate_reports_walled_off_dot() {
        // The dot at (2, 0) is enclosed even across the wraparound edges.
        let mut level = parse("##.#\nPG##");
        level.set_name("boxed");

        match level.validate() {
            Err(LevelError::UnreachableDot { level: name, x, y }) => {
                assert_eq!(name, "boxed");
                assert_eq!((x, y), (2, 0));
            }
            other => panic!("expected UnreachableDot, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_accepts_dot_reachable_only_through_wrap() {
        // The only route to the dot at (0, 0) leaves the east edge and
        // re-enters on the west.
        let level = parse(".#PG\n####");
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_is_solid_outside_bounds() {
        let level = parse("P.G");
        assert!(level.is_solid(-1, 0));
        assert!(level.is_solid(0, -1));
        assert!(level.is_solid(3, 0));
        assert!(level.is_solid(0, 1));
        assert!(!level.is_solid(1, 0));
    }

    #[test]
    fn test_is_wall_outside_bounds() {
        let level = parse("#P.G");
        assert!(!level.is_wall(-1, 0));
        assert!(!level.is_wall(4, 0));
        assert!(!level.is_wall(0, -1));
        assert!(level.is_wall(0, 0));
        assert!(!level.is_wall(1, 0));
    }

    #[test]
    fn test_background_is_solid_but_not_wall() {
        let level = parse("BP.G");
        assert!(level.is_solid(0, 0));
        assert!(!level.is_wall(0, 0));
    }

    #[test]
    fn test_straight_line_on_shared_row() {
        let level = parse("P.#.G\n.    ");

        assert!(level.exists_straight_line(Coordinate::new(0, 0), Coordinate::new(1, 0)));
        // Wall at (2, 0) blocks the long way across the row.
        assert!(!level.exists_straight_line(Coordinate::new(0, 0), Coordinate::new(4, 0)));
        assert!(level.exists_straight_line(Coordinate::new(3, 0), Coordinate::new(4, 0)));
    }

    #[test]
    fn test_straight_line_on_shared_column() {
        let level = parse("P.#.G\n.    ");
        assert!(level.exists_straight_line(Coordinate::new(0, 0), Coordinate::new(0, 1)));
        assert!(!level.exists_straight_line(Coordinate::new(2, 0), Coordinate::new(2, 1)));
    }

    #[test]
    fn test_straight_line_requires_shared_axis() {
        let level = parse("P.#.G\n.    ");
        assert!(!level.exists_straight_line(Coordinate::new(0, 0), Coordinate::new(1, 1)));
    }

    #[test]
    fn test_neighbors_order_west_north_east_south() {
        let level = parse("#.#\n.P.\n#.#");

        let neighbors = level.neighbors(Coordinate::new(1, 1));
        assert_eq!(
            neighbors,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(2, 1),
                Coordinate::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_neighbors_skip_walls() {
        let level = parse("###\n#P#\n###");
        assert!(level.neighbors(Coordinate::new(1, 1)).is_empty());
    }

    #[test]
    fn test_neighbors_clamp_at_edges() {
        let level = parse(".P.");

        // North and south leave the grid and are omitted, never wrapped.
        let neighbors = level.neighbors(Coordinate::new(1, 0));
        assert_eq!(
            neighbors,
            vec![Coordinate::new(0, 0), Coordinate::new(2, 0)]
        );

        let corner = level.neighbors(Coordinate::new(0, 0));
        assert_eq!(corner, vec![Coordinate::new(1, 0)]);
    }

    #[test]
    fn test_next_ghost_spawn_round_robin() {
        let mut level = parse("PG.G\n..G.");
        let expected = [
            Coordinate::new(1, 0),
            Coordinate::new(3, 0),
            Coordinate::new(2, 1),
        ];
        assert_eq!(level.ghost_spawns(), expected.as_slice());

        // Two full cycles in registration order.
        for _ in 0..2 {
            for spawn in expected {
                assert_eq!(level.next_ghost_spawn(), Some(spawn));
            }
        }
    }

    #[test]
    fn test_next_ghost_spawn_without_ghosts() {
        let mut level = parse("P..");
        assert_eq!(level.next_ghost_spawn(), None);
    }

    #[test]
    fn test_random_spawns_come_from_registries() {
        let level = parse("P.G\nGP.");

        for _ in 0..20 {
            let player = level.random_player_spawn().unwrap();
            assert!(level.player_spawns().contains(&player));

            let ghost = level.random_ghost_spawn().unwrap();
            assert!(level.ghost_spawns().contains(&ghost));
        }
    }

    #[test]
    fn test_random_free_cell_is_space_or_dot() {
        let level = parse("#P.G#\n## ##");

        for _ in 0..20 {
            let cell = level.random_free_cell().unwrap();
            let field = level.get_field(cell.x, cell.y).unwrap();
            assert!(field.is_free());
        }
    }

    #[test]
    fn test_get_field_positions() {
        let level = parse("P.\n.G");

        let field = level.get_field(1, 1).unwrap();
        assert_eq!(field.coordinate(), Coordinate::new(1, 1));
        assert_eq!(field.tile(), Tile::GhostSpawn);

        assert!(level.get_field(2, 0).is_none());
        assert!(level.get_field(0, -1).is_none());
    }

    #[test]
    fn test_set_field_overwrites_cell() {
        let mut level = parse("P.G");

        level.set_field(1, 0, '#').unwrap();
        assert!(level.get_field(1, 0).unwrap().is_wall());

        assert!(matches!(
            level.set_field(1, 0, '?'),
            Err(LevelError::InvalidCharacter('?'))
        ));
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let text = "######\n#P..G#\n#.B..#\n######";
        let level = parse(text);
        assert_eq!(level.to_string(), text);

        let reparsed = parse(&level.to_string());
        for y in 0..level.height() as i32 {
            for x in 0..level.width() as i32 {
                assert_eq!(
                    reparsed.get_field(x, y).unwrap().tile(),
                    level.get_field(x, y).unwrap().tile()
                );
            }
        }
    }

    #[test]
    fn test_name_defaults_to_placeholder() {
        let mut level = parse("P.G");
        assert_eq!(level.name(), UNNAMED_LEVEL);

        level.set_name("maze one");
        assert_eq!(level.name(), "maze one");
    }
}
