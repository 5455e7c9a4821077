//! Chain population: turning resolved connections into bead-spring strands.

use tracing::debug;

use super::config::{ChainConfig, ChainLength};
use super::error::Error;
use crate::model::atom::Atom;
use crate::model::lattice::{Assembly, GlobalPoint};
use crate::model::system::Bond;
use crate::model::types::{AtomKind, BondKind};

/// Absorbs rounding when a strand length is an exact multiple of the spacing.
const FLOAT_SAFETY: f64 = 1e-6;

/// Builds the particle graph for an assembled lattice.
///
/// Crosslink atoms come first, one per global point with atom id equal to the
/// global index. Interior beads and free ends follow in connection order with
/// consecutive ids.
///
/// A bonded connection split into `n` segments adds `n - 1` chain atoms and
/// `n` strand bonds. A dangling connection adds `n - 1` chain atoms, one free
/// end at `origin + vector * dangling_extent`, and `n` tail bonds.
pub fn populate(
    assembly: &Assembly,
    chain: &ChainConfig,
) -> Result<(Vec<Atom>, Vec<Bond>), Error> {
    chain.validate()?;

    if let Some((n, point)) = assembly
        .points
        .iter()
        .enumerate()
        .find(|(n, point)| point.index != *n)
    {
        return Err(Error::geometry(format!(
            "global point at position {n} carries index {}",
            point.index
        )));
    }

    let mut atoms: Vec<Atom> = assembly
        .points
        .iter()
        .map(|p| Atom::crosslink(p.index, p.position))
        .collect();
    let mut bonds = Vec::new();

    for conn in &assembly.connections {
        let origin = lookup(assembly, conn.origin)?;
        match conn.partner {
            Some(partner) => {
                lookup(assembly, partner)?;
                let segments = segment_count(chain, conn.vector);
                let last = grow_strand(
                    &mut atoms,
                    &mut bonds,
                    origin,
                    conn.vector,
                    segments - 1,
                    BondKind::Strand,
                );
                bonds.push(Bond::new(last, partner, BondKind::Strand));
            }
            None => {
                let reach = conn.vector.map(|x| x * chain.dangling_extent);
                let segments = segment_count(chain, reach);
                let last = grow_strand(
                    &mut atoms,
                    &mut bonds,
                    origin,
                    reach,
                    segments - 1,
                    BondKind::Tail,
                );
                let end = atoms.len();
                atoms.push(Atom::new(
                    end,
                    AtomKind::FreeEnd,
                    offset(origin.position, reach, 1.0),
                ));
                bonds.push(Bond::new(last, end, BondKind::Tail));
            }
        }
    }

    debug!(atoms = atoms.len(), bonds = bonds.len(), "populated strands");

    Ok((atoms, bonds))
}

fn lookup(assembly: &Assembly, index: usize) -> Result<&GlobalPoint, Error> {
    assembly.point(index).ok_or_else(|| {
        Error::geometry(format!(
            "resolved connection references global point {index}, which was never placed"
        ))
    })
}

/// Number of bonds a strand spanning `vector` is split into.
fn segment_count(chain: &ChainConfig, vector: [f64; 3]) -> usize {
    match chain.length {
        ChainLength::Fixed(interior) => interior.saturating_add(1),
        ChainLength::Spacing(spacing) => {
            let length = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
            ((length / spacing + FLOAT_SAFETY).floor() as usize).max(1)
        }
    }
}

/// Places `interior` evenly spaced chain atoms from `origin` along `vector`
/// (which spans `interior + 1` steps), bonding each to its predecessor.
/// Returns the id of the last atom of the strand so far.
fn grow_strand(
    atoms: &mut Vec<Atom>,
    bonds: &mut Vec<Bond>,
    origin: &GlobalPoint,
    vector: [f64; 3],
    interior: usize,
    kind: BondKind,
) -> usize {
    let steps = (interior + 1) as f64;
    let mut previous = origin.index;

    for m in 1..=interior {
        let id = atoms.len();
        atoms.push(Atom::chain(
            id,
            offset(origin.position, vector, m as f64 / steps),
        ));
        bonds.push(Bond::new(previous, id, kind));
        previous = id;
    }

    previous
}

#[inline]
fn offset(position: [f64; 3], vector: [f64; 3], fraction: f64) -> [f64; 3] {
    [0, 1, 2].map(|a| position[a] + vector[a] * fraction)
}
