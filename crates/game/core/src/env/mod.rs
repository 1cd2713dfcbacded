//! Narrow, read-only capabilities injected into snake handlers.
//!
//! Each archetype asks only for the oracle it needs: plumbers query the tile
//! grid, photophobic snakes query lighting, and wandering or bouncing snakes
//! draw from the RNG. The [`Env`] aggregate bundles whatever the host has
//! available; a missing oracle surfaces as an [`OracleError`] and the
//! requesting handler skips its tick.
mod error;
mod lighting;
mod rng;
mod tiles;

pub use error::OracleError;
pub use lighting::{LightingOracle, UniformLighting};
pub use rng::{PcgRng, RngOracle, compute_seed, roll};
pub use tiles::{CardinalDirection, GridDimensions, Openings, TileCoord, TileGridOracle};

/// Aggregates the optional oracles a tick may consult.
pub struct Env<'a, G, L, R>
where
    G: TileGridOracle + ?Sized,
    L: LightingOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    tiles: Option<&'a G>,
    lighting: Option<&'a L>,
    rng: Option<&'a R>,
}

// Manual impls: the oracles are borrowed, so copying never needs `G: Copy`.
impl<G, L, R> Clone for Env<'_, G, L, R>
where
    G: TileGridOracle + ?Sized,
    L: LightingOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<G, L, R> Copy for Env<'_, G, L, R>
where
    G: TileGridOracle + ?Sized,
    L: LightingOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<G, L, R> std::fmt::Debug for Env<'_, G, L, R>
where
    G: TileGridOracle + ?Sized,
    L: LightingOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("tiles", &self.tiles.is_some())
            .field("lighting", &self.lighting.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}

pub type SnakeEnv<'a> = Env<'a, dyn TileGridOracle + 'a, dyn LightingOracle + 'a, dyn RngOracle + 'a>;

impl<'a, G, L, R> Env<'a, G, L, R>
where
    G: TileGridOracle + ?Sized,
    L: LightingOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(tiles: Option<&'a G>, lighting: Option<&'a L>, rng: Option<&'a R>) -> Self {
        Self {
            tiles,
            lighting,
            rng,
        }
    }

    pub fn empty() -> Self {
        Self {
            tiles: None,
            lighting: None,
            rng: None,
        }
    }

    /// Returns the tile grid, or an error if the level has none.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TilesNotAvailable` if no grid oracle was provided.
    pub fn tiles(&self) -> Result<&'a G, OracleError> {
        self.tiles.ok_or(OracleError::TilesNotAvailable)
    }

    /// Returns the lighting oracle.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::LightingNotAvailable` if no lighting oracle was provided.
    pub fn lighting(&self) -> Result<&'a L, OracleError> {
        self.lighting.ok_or(OracleError::LightingNotAvailable)
    }

    /// Returns the RNG oracle.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, G, L, R> Env<'a, G, L, R>
where
    G: TileGridOracle + 'a,
    L: LightingOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts concrete oracles into the trait-object based [`SnakeEnv`].
    pub fn as_snake_env(&self) -> SnakeEnv<'a> {
        let tiles: Option<&'a dyn TileGridOracle> = self.tiles.map(|tiles| tiles as _);
        let lighting: Option<&'a dyn LightingOracle> = self.lighting.map(|lighting| lighting as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(tiles, lighting, rng)
    }
}

impl<'a> SnakeEnv<'a> {
    /// Environment with only a random source, enough for every archetype
    /// except plumbers and photophobic snakes.
    pub fn with_rng(rng: &'a dyn RngOracle) -> Self {
        Env::new(None, None, Some(rng))
    }

    pub fn with_tiles(mut self, tiles: &'a dyn TileGridOracle) -> Self {
        self.tiles = Some(tiles);
        self
    }

    pub fn with_lighting(mut self, lighting: &'a dyn LightingOracle) -> Self {
        self.lighting = Some(lighting);
        self
    }
}
