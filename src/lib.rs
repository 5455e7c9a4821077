//! A pure Rust library for generating periodic polymer-network topologies.
//! It tiles a small cell of crosslink points into an `nx × ny × nz` lattice,
//! stitches the strands that cross cell boundaries, fills each strand with
//! chain beads, and optionally peels away dead-end branches, producing
//! particle and bond lists ready for molecular-dynamics input.
//!
//! # Features
//!
//! - **Lattice assembly** — Arithmetic global indexing of every (replica, point)
//!   pair and resolution of crossing vectors between neighboring replicas
//! - **Open boundaries** — Optional dangling strands at the lattice faces,
//!   mirrored onto the opposite face when requested
//! - **Chain population** — Fixed bead counts or counts derived from a bond
//!   spacing, with free ends on dangling strands
//! - **Pruning** — Leaf-peeling fixpoint that leaves only junctions of degree
//!   two or more
//! - **I/O** — TOML cell templates, built-in presets, and LAMMPS data export
//!
//! # Quick Start
//!
//! ```
//! use lattice_forge::{Cell, ChainConfig, LatticeConfig, forge, ForgeError};
//!
//! // One crosslink per cell, joined to its neighbor along +x.
//! let mut cell = Cell::new([1.0, 1.0, 1.0]);
//! let junction = cell.add_point([0.5, 0.5, 0.5]);
//! cell.add_connection(junction, junction, [1, 0, 0]);
//!
//! let config = LatticeConfig {
//!     size: [4, 1, 1],
//!     chain: ChainConfig::fixed(2),
//!     ..Default::default()
//! };
//! let network = forge(&cell, &config)?;
//!
//! // Four crosslinks, three strands of two beads each.
//! assert_eq!(network.atom_count(), 4 + 3 * 2);
//! assert_eq!(network.bond_count(), 3 * 3);
//! # Ok::<(), ForgeError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`forge`] — Full pipeline; the stages [`assemble`], [`populate`] and
//!   [`prune`] are also exposed individually
//! - [`io`] — Cell templates, presets, and LAMMPS export
//!
//! # Data Types
//!
//! - [`Cell`], [`Point`], [`Connection`] — The authored repeating unit
//! - [`Assembly`], [`GlobalPoint`], [`ResolvedConnection`] — Assembler output
//! - [`Network`], [`Atom`], [`Bond`] — Final particle graph
//! - [`AtomKind`], [`BondKind`] — Role tags
//!
//! # Configuration
//!
//! - [`LatticeConfig`] — Tiling, boundary policy, pruning, chains
//! - [`AssembleOptions`] — Assembler-only subset
//! - [`ChainConfig`], [`ChainLength`] — Bead placement

mod forge;
mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::cell::{Cell, Connection, Point};
pub use model::lattice::{Assembly, GlobalPoint, Replica, ResolvedConnection};
pub use model::system::{Bond, Network};
pub use model::types::{AtomKind, BondKind, ParseAtomKindError, ParseBondKindError};

pub use forge::{
    AssembleOptions, ChainConfig, ChainLength, LatticeConfig, assemble, forge, populate, prune,
};

pub use forge::Error as ForgeError;
