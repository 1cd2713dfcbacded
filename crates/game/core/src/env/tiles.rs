use bitflags::bitflags;

use crate::geometry::Vec2;

/// Read-only view of a rotating-pipe tile grid.
///
/// The host owns the grid and performs rotations; snakes only query which
/// sides of a tile are open and emit rotation requests as output.
pub trait TileGridOracle: Send + Sync {
    fn dimensions(&self) -> GridDimensions;

    /// Edge length of one square tile in world units.
    fn tile_size(&self) -> f32;

    /// Open sides of `tile`, or `None` outside the grid.
    fn openings(&self, tile: TileCoord) -> Option<Openings>;

    /// World position of the grid's top-left corner.
    fn origin(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn contains(&self, tile: TileCoord) -> bool {
        self.dimensions().contains(tile)
    }

    fn tile_center(&self, tile: TileCoord) -> Vec2 {
        let size = self.tile_size();
        let origin = self.origin();
        Vec2::new(
            origin.x + (tile.col as f32 + 0.5) * size,
            origin.y + (tile.row as f32 + 0.5) * size,
        )
    }

    fn tile_at(&self, point: Vec2) -> TileCoord {
        let size = self.tile_size().max(f32::EPSILON);
        let local = point - self.origin();
        TileCoord::new((local.x / size).floor() as i32, (local.y / size).floor() as i32)
    }

    /// True when a pipe connects `from` to its neighbour in `direction`: both
    /// tiles must be open toward each other.
    fn connects(&self, from: TileCoord, direction: CardinalDirection) -> bool {
        let to = from.step(direction);
        let (Some(out), Some(back)) = (self.openings(from), self.openings(to)) else {
            return false;
        };
        out.contains(direction.opening()) && back.contains(direction.opposite().opening())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub cols: u32,
    pub rows: u32,
}

impl GridDimensions {
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    pub fn contains(&self, tile: TileCoord) -> bool {
        tile.col >= 0 && tile.row >= 0 && tile.col < self.cols as i32 && tile.row < self.rows as i32
    }

    pub fn tile_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Tile for a row-major index; callers keep `index < tile_count()`.
    pub fn tile_from_index(&self, index: usize) -> TileCoord {
        let cols = self.cols.max(1) as usize;
        TileCoord::new((index % cols) as i32, (index / cols) as i32)
    }
}

/// Column/row address of a grid tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn step(self, direction: CardinalDirection) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.col + dx, self.row + dy)
    }
}

bitflags! {
    /// Sides of a pipe tile that are open.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Openings: u8 {
        const NORTH = 1 << 0;
        const EAST  = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST  = 1 << 3;
    }
}

impl Openings {
    /// Openings after turning the tile a quarter turn clockwise.
    pub fn rotated_clockwise(self) -> Self {
        let bits = self.bits() & 0b1111;
        Self::from_bits_truncate(((bits << 1) | (bits >> 3)) & 0b1111)
    }

    pub fn directions(self) -> impl Iterator<Item = CardinalDirection> {
        CardinalDirection::ALL
            .into_iter()
            .filter(move |direction| self.contains(direction.opening()))
    }
}

/// Compass direction on the grid (north is -y in screen space).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::South => (0, 1),
            CardinalDirection::West => (-1, 0),
        }
    }

    pub fn unit(self) -> Vec2 {
        let (dx, dy) = self.delta();
        Vec2::new(dx as f32, dy as f32)
    }

    pub fn clockwise(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::East,
            CardinalDirection::East => CardinalDirection::South,
            CardinalDirection::South => CardinalDirection::West,
            CardinalDirection::West => CardinalDirection::North,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::South,
            CardinalDirection::East => CardinalDirection::West,
            CardinalDirection::South => CardinalDirection::North,
            CardinalDirection::West => CardinalDirection::East,
        }
    }

    pub fn opening(self) -> Openings {
        match self {
            CardinalDirection::North => Openings::NORTH,
            CardinalDirection::East => Openings::EAST,
            CardinalDirection::South => Openings::SOUTH,
            CardinalDirection::West => Openings::WEST,
        }
    }
}
