use std::collections::HashMap;

use super::atom::Atom;
use super::types::{AtomKind, BondKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub kind: BondKind,
}

impl Bond {
    pub fn new(i: usize, j: usize, kind: BondKind) -> Self {
        Self { i, j, kind }
    }

    #[inline]
    pub fn touches(&self, id: usize) -> bool {
        self.i == id || self.j == id
    }
}

/// Final particle graph of a tiled lattice.
///
/// Atom ids are unique but not necessarily contiguous once the network has
/// been pruned; bonds refer to atoms by id.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    /// Scaled lattice box, `size * dims * scale` per axis.
    pub extent: [f64; 3],
}

impl Network {
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>, extent: [f64; 3]) -> Self {
        Self {
            atoms,
            bonds,
            extent,
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn count_kind(&self, kind: AtomKind) -> usize {
        self.atoms.iter().filter(|a| a.kind == kind).count()
    }

    pub fn count_bond_kind(&self, kind: BondKind) -> usize {
        self.bonds.iter().filter(|b| b.kind == kind).count()
    }

    /// Number of bonds touching each atom, keyed by atom id.
    pub fn degrees(&self) -> HashMap<usize, usize> {
        let mut degrees: HashMap<usize, usize> = self.atoms.iter().map(|a| (a.id, 0)).collect();
        for bond in &self.bonds {
            *degrees.entry(bond.i).or_insert(0) += 1;
            *degrees.entry(bond.j).or_insert(0) += 1;
        }
        degrees
    }
}
