use anyhow::{Context, Result};
use nonzero::nonzero;
use raylet_engine::core::types::Number;
use std::num::NonZeroUsize;

/// Environment variable that overrides [`RenderOpts::width`]
pub const WIDTH_VAR: &str = "RAYLET_WIDTH";
/// Environment variable that overrides [`RenderOpts::height`]
pub const HEIGHT_VAR: &str = "RAYLET_HEIGHT";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOpts {
    /// The target dimensions of the render
    pub width: NonZeroUsize,
    pub height: NonZeroUsize,
}

impl RenderOpts {
    /// Starts from [`RenderOpts::default`], and applies any overrides set in the environment
    pub fn from_env() -> Result<Self> {
        let mut opts = Self::default();
        if let Some(width) = read_dim(WIDTH_VAR)? {
            opts.width = width;
        }
        if let Some(height) = read_dim(HEIGHT_VAR)? {
            opts.height = height;
        }
        Ok(opts)
    }

    /// Returns the dimensions of the render as `[width, height]`
    pub fn dims(&self) -> [usize; 2] { [self.width.get(), self.height.get()] }

    pub fn aspect_ratio(&self) -> Number { self.width.get() as Number / self.height.get() as Number }
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            width: nonzero!(256_usize),
            height: nonzero!(256_usize),
        }
    }
}

fn read_dim(var: &str) -> Result<Option<NonZeroUsize>> {
    match std::env::var(var) {
        Ok(val) => parse_dim(var, &val).map(Some),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("couldn't read `{var}`")),
    }
}

/// Parses the value of `var`, ignoring surrounding whitespace
fn parse_dim(var: &str, val: &str) -> Result<NonZeroUsize> {
    val.trim()
        .parse::<NonZeroUsize>()
        .with_context(|| format!("`{var}` should be a positive integer, got {val:?}"))
}
