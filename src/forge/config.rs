//! Configuration types for lattice construction.
//!
//! - [`LatticeConfig`] — Full pipeline configuration used by [`forge`](super::forge)
//! - [`AssembleOptions`] — Tiling and boundary policy for the assembler
//! - [`ChainConfig`] — Strand population settings
//! - [`ChainLength`] — Fixed bead count or bead count derived from spacing

use super::error::Error;

/// Main configuration for building a network from a cell.
///
/// # Examples
///
/// ```
/// use lattice_forge::{ChainConfig, ChainLength, LatticeConfig};
///
/// let config = LatticeConfig {
///     size: [3, 3, 3],
///     dangling: true,
///     prune: true,
///     chain: ChainConfig {
///         length: ChainLength::Fixed(4),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert!(config.symmetric);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeConfig {
    /// Number of replicas along x, y and z.
    pub size: [usize; 3],

    /// Uniform factor applied to cell dims and point coordinates.
    pub scale: f64,

    /// Materialize connections leaving the lattice as dangling strands.
    pub dangling: bool,

    /// Mirror dangling strands onto the opposite face of each axis.
    ///
    /// Only meaningful together with [`dangling`](Self::dangling).
    pub symmetric: bool,

    /// Peel dead-end branches after population.
    ///
    /// `dangling = true, prune = true` is not the same as `dangling = false`:
    /// pruning also removes crosslinks left with a single strand.
    pub prune: bool,

    /// Strand population settings.
    pub chain: ChainConfig,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            size: [1, 1, 1],
            scale: 1.0,
            dangling: false,
            symmetric: true,
            prune: false,
            chain: ChainConfig::default(),
        }
    }
}

impl LatticeConfig {
    pub fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            size: self.size,
            scale: self.scale,
            dangling: self.dangling,
            symmetric: self.symmetric,
        }
    }
}

/// Tiling and boundary policy for [`assemble`](super::assemble).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssembleOptions {
    pub size: [usize; 3],
    pub scale: f64,
    pub dangling: bool,
    pub symmetric: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        LatticeConfig::default().assemble_options()
    }
}

impl AssembleOptions {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.size.contains(&0) {
            return Err(Error::configuration(format!(
                "lattice size must be positive in every axis, got {:?}",
                self.size
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(Error::configuration(format!(
                "scale must be a positive finite number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

/// How many interior beads each strand receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainLength {
    /// Exactly this many interior beads per strand.
    Fixed(usize),
    /// One bond per `spacing` of strand length, rounded down, with at least
    /// one bond per strand.
    Spacing(f64),
}

impl Default for ChainLength {
    fn default() -> Self {
        Self::Fixed(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainConfig {
    pub length: ChainLength,
    /// Fraction of the virtual partner distance a dangling strand reaches.
    /// `1.0` puts the free end where the missing partner would sit.
    pub dangling_extent: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            length: ChainLength::default(),
            dangling_extent: 1.0,
        }
    }
}

impl ChainConfig {
    pub fn fixed(interior: usize) -> Self {
        Self {
            length: ChainLength::Fixed(interior),
            ..Default::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        match self.length {
            ChainLength::Fixed(interior) if interior.checked_add(1).is_none() => {
                return Err(Error::configuration(format!(
                    "chain length {interior} is too large to split into bonds"
                )));
            }
            ChainLength::Spacing(spacing) if !(spacing.is_finite() && spacing > 0.0) => {
                return Err(Error::configuration(format!(
                    "bond spacing must be a positive finite number, got {spacing}"
                )));
            }
            _ => {}
        }
        if !(self.dangling_extent.is_finite() && self.dangling_extent > 0.0) {
            return Err(Error::configuration(format!(
                "dangling extent must be a positive finite number, got {}",
                self.dangling_extent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = LatticeConfig::default();
        assert_eq!(config.size, [1, 1, 1]);
        assert_eq!(config.scale, 1.0);
        assert!(!config.dangling);
        assert!(config.symmetric);
        assert!(!config.prune);
        assert_eq!(config.chain.length, ChainLength::Fixed(0));
        assert_eq!(config.chain.dangling_extent, 1.0);
    }

    #[test]
    fn assemble_options_mirror_config() {
        let config = LatticeConfig {
            size: [2, 3, 4],
            scale: 2.5,
            dangling: true,
            symmetric: false,
            ..Default::default()
        };
        let opts = config.assemble_options();
        assert_eq!(opts.size, [2, 3, 4]);
        assert_eq!(opts.scale, 2.5);
        assert!(opts.dangling);
        assert!(!opts.symmetric);
    }

    #[test]
    fn zero_size_is_rejected() {
        let opts = AssembleOptions {
            size: [2, 0, 1],
            ..Default::default()
        };
        assert!(opts.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let opts = AssembleOptions {
                scale,
                ..Default::default()
            };
            assert!(opts.validate().is_err(), "scale {scale} accepted");
        }
    }

    #[test]
    fn chain_validation() {
        assert!(ChainConfig::fixed(3).validate().is_ok());
        let bad_spacing = ChainConfig {
            length: ChainLength::Spacing(0.0),
            ..Default::default()
        };
        assert!(bad_spacing.validate().is_err());
        let bad_extent = ChainConfig {
            dangling_extent: -0.5,
            ..Default::default()
        };
        assert!(bad_extent.validate().is_err());
    }

    #[test]
    fn unsplittable_chain_length_is_rejected() {
        let err = ChainConfig::fixed(usize::MAX).validate().unwrap_err();
        assert!(err.is_configuration());
        assert!(ChainConfig::fixed(usize::MAX - 1).validate().is_ok());
    }
}
