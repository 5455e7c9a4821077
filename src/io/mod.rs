//! Reading and writing cells and networks.
//!
//! - Cell templates are TOML snapshots of a [`Cell`](crate::Cell); see
//!   [`read_cell_template`] and [`write_cell_template`]. Built-in cells are
//!   available through [`Preset`].
//! - Finished networks are exported as LAMMPS data files with
//!   [`write_lammps_data`].

use std::fmt;
use std::io::Write;

pub mod error;

mod lammps;
mod template;

pub use error::Error;
pub use template::{Preset, parse_cell_template, read_cell_template, write_cell_template};

use crate::model::system::Network;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    CellTemplate,
    LammpsData,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::CellTemplate => write!(f, "cell template"),
            Format::LammpsData => write!(f, "LAMMPS data"),
        }
    }
}

/// How the simulation box of a LAMMPS data file is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxMode {
    /// Bounding box of all atoms, padded by [`LammpsConfig::margin`].
    #[default]
    Shrink,
    /// The tiled lattice, `[0, extent]` along each axis.
    Lattice,
}

#[derive(Debug, Clone)]
pub struct LammpsConfig {
    /// Padding added around the atoms in [`BoxMode::Shrink`]. Must be finite
    /// and non-negative.
    pub margin: f64,
    pub box_mode: BoxMode,
}

impl Default for LammpsConfig {
    fn default() -> Self {
        Self {
            margin: 1.0,
            box_mode: BoxMode::default(),
        }
    }
}

/// Writes `network` as a LAMMPS data file (`atom_style full`).
///
/// Atoms are renumbered `1..=N` in list order, so pruned networks with gaps
/// in their ids are written densely. Crosslinks and free ends are atom type 1,
/// chain beads type 2; strand bonds are bond type 1, tail bonds type 2.
///
/// # Errors
///
/// Returns [`Error::EmptyNetwork`] when there are no atoms,
/// [`Error::InvalidSettings`] for a negative or non-finite margin or a box
/// with no width, and [`Error::Conversion`] when a bond names an unknown atom.
pub fn write_lammps_data<W: Write>(
    writer: W,
    network: &Network,
    config: &LammpsConfig,
) -> Result<(), Error> {
    lammps::write(writer, network, config)
}
