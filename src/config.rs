use std::path::Path;

use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::synthesis::{BlockShape, BlockSpec, DEFAULT_DENSITY, random_block_specs};

/// Number of blocks generated when nothing else is asked for.
pub const DEFAULT_NUM_BLOCKS: usize = 5;

/// One block of a [`Blueprint`], as written in TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockConfig {
    pub shape: String,
    pub size: usize,
    #[serde(default)]
    pub density: Option<f64>,
}

impl TryFrom<&BlockConfig> for BlockSpec {
    type Error = crate::Error;

    fn try_from(config: &BlockConfig) -> Result<Self> {
        let shape: BlockShape = config.shape.parse()?;
        Ok(match shape {
            BlockShape::Complete => BlockSpec::complete(config.size),
            BlockShape::Cycle => BlockSpec::cycle(config.size),
            BlockShape::Dense => {
                BlockSpec::dense(config.size, config.density.unwrap_or(DEFAULT_DENSITY))
            }
        })
    }
}

/// Describes a generated graph: which blocks to build and how to seed randomness.
///
/// ```toml
/// seed = 42
///
/// [[blocks]]
/// shape = "complete"
/// size = 4
///
/// [[blocks]]
/// shape = "dense"
/// size = 7
/// density = 0.5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Blueprint {
    #[serde(default)]
    pub seed: Option<u64>,
    /// Block count; when it differs from the number of listed blocks, random
    /// blocks are generated instead.
    #[serde(default)]
    pub num_blocks: Option<usize>,
    #[serde(default)]
    pub blocks: Vec<BlockConfig>,
}

impl Default for Blueprint {
    fn default() -> Self {
        Self::sample()
    }
}

impl Blueprint {
    /// K4, C6, a dense block on 7 vertices, K5 and C8.
    pub fn sample() -> Self {
        let block = |shape: &str, size| BlockConfig { shape: shape.to_string(), size, density: None };
        Self {
            seed: None,
            num_blocks: None,
            blocks: vec![
                block("complete", 4),
                block("cycle", 6),
                block("dense", 7),
                block("complete", 5),
                block("cycle", 8),
            ],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolves the block requests.
    ///
    /// Listed blocks are used when `num_blocks` is unset or matches their count,
    /// otherwise `num_blocks` random blocks are drawn from `rng`. An empty list
    /// with no count falls back to [`DEFAULT_NUM_BLOCKS`] random blocks.
    pub fn specs<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<BlockSpec>> {
        match self.num_blocks {
            Some(count) if count != self.blocks.len() => Ok(random_block_specs(count, rng)),
            None if self.blocks.is_empty() => Ok(random_block_specs(DEFAULT_NUM_BLOCKS, rng)),
            _ => self.blocks.iter().map(BlockSpec::try_from).collect(),
        }
    }
}

/// Loads a blueprint from `path`, or returns [`Blueprint::sample`] when no path is given.
pub fn load_blueprint(path: Option<&Path>) -> Result<Blueprint> {
    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading blueprint");
            let content = std::fs::read_to_string(p)?;
            Blueprint::from_toml_str(&content)
        }
        None => Ok(Blueprint::sample()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_blueprint() {
        let blueprint = Blueprint::from_toml_str(
            r#"
            seed = 7

            [[blocks]]
            shape = "cycle"
            size = 5

            [[blocks]]
            shape = "dense"
            size = 6
            density = 0.4
            "#,
        )
        .unwrap();

        assert_eq!(blueprint.seed, Some(7));
        let specs = blueprint.specs(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(specs, vec![BlockSpec::cycle(5), BlockSpec::dense(6, 0.4)]);
    }

    #[test]
    fn test_unknown_shape() {
        let blueprint = Blueprint::from_toml_str("[[blocks]]\nshape = \"star\"\nsize = 4\n").unwrap();
        let err = blueprint.specs(&mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, Error::UnknownShape(s) if s == "star"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(Blueprint::from_toml_str("blocks = 3"), Err(Error::Config(_))));
    }

    #[test]
    fn test_count_mismatch_draws_random_blocks() {
        let mut blueprint = Blueprint::sample();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(blueprint.specs(&mut rng).unwrap().len(), 5);
        assert_eq!(blueprint.specs(&mut rng).unwrap()[0], BlockSpec::complete(4));

        blueprint.num_blocks = Some(9);
        assert_eq!(blueprint.specs(&mut rng).unwrap().len(), 9);

        let empty = Blueprint::from_toml_str("").unwrap();
        assert_eq!(empty.specs(&mut rng).unwrap().len(), DEFAULT_NUM_BLOCKS);
    }

    #[test]
    fn test_default_blueprint_without_path() {
        assert_eq!(load_blueprint(None).unwrap(), Blueprint::sample());
    }
}
