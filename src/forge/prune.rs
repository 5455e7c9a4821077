//! Dead-end removal by iterative leaf peeling.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::model::atom::Atom;
use crate::model::system::Bond;

/// Removes every atom of degree one or zero, together with its bonds, until
/// each remaining atom has at least two bonds or nothing is left.
///
/// Survivors keep their ids and relative order. Bonds that name an atom not
/// present in `atoms` are discarded. The result does not depend on peeling
/// order, and pruning a pruned graph changes nothing.
pub fn prune(atoms: &[Atom], bonds: &[Bond]) -> (Vec<Atom>, Vec<Bond>) {
    let slot: HashMap<usize, usize> = atoms.iter().enumerate().map(|(n, a)| (a.id, n)).collect();

    let mut ends: Vec<Option<(usize, usize)>> = Vec::with_capacity(bonds.len());
    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); atoms.len()];
    let mut degree = vec![0usize; atoms.len()];

    for (b, bond) in bonds.iter().enumerate() {
        let pair = match (slot.get(&bond.i), slot.get(&bond.j)) {
            (Some(&i), Some(&j)) => Some((i, j)),
            _ => None,
        };
        if let Some((i, j)) = pair {
            incident[i].push(b);
            incident[j].push(b);
            degree[i] += 1;
            degree[j] += 1;
        }
        ends.push(pair);
    }

    let mut bond_alive: Vec<bool> = ends.iter().map(Option::is_some).collect();
    let mut removed = vec![false; atoms.len()];
    let mut queued: Vec<bool> = degree.iter().map(|&d| d <= 1).collect();
    let mut queue: VecDeque<usize> = (0..atoms.len()).filter(|&a| queued[a]).collect();

    while let Some(atom) = queue.pop_front() {
        removed[atom] = true;

        for &b in &incident[atom] {
            if !bond_alive[b] {
                continue;
            }
            bond_alive[b] = false;

            let Some((i, j)) = ends[b] else { continue };
            let other = if i == atom { j } else { i };
            if other == atom {
                continue;
            }
            degree[other] -= 1;
            if degree[other] <= 1 && !queued[other] {
                queued[other] = true;
                queue.push_back(other);
            }
        }
    }

    let kept_atoms: Vec<Atom> = atoms
        .iter()
        .zip(&removed)
        .filter(|(_, gone)| !**gone)
        .map(|(a, _)| a.clone())
        .collect();
    let kept_bonds: Vec<Bond> = bonds
        .iter()
        .zip(&bond_alive)
        .filter(|(_, alive)| **alive)
        .map(|(b, _)| b.clone())
        .collect();

    debug!(
        atoms_removed = atoms.len() - kept_atoms.len(),
        bonds_removed = bonds.len() - kept_bonds.len(),
        "pruned dead ends"
    );

    (kept_atoms, kept_bonds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::BondKind;

    fn atoms(n: usize) -> Vec<Atom> {
        (0..n)
            .map(|id| Atom::crosslink(id, [id as f64, 0.0, 0.0]))
            .collect()
    }

    fn bonds(pairs: &[(usize, usize)]) -> Vec<Bond> {
        pairs
            .iter()
            .map(|&(i, j)| Bond::new(i, j, BondKind::Strand))
            .collect()
    }

    fn degrees(atoms: &[Atom], bonds: &[Bond]) -> Vec<usize> {
        atoms
            .iter()
            .map(|a| bonds.iter().filter(|b| b.touches(a.id)).count())
            .collect()
    }

    #[test]
    fn path_is_fully_consumed() {
        let (a, b) = prune(&atoms(3), &bonds(&[(0, 1), (1, 2)]));
        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn cycle_survives_untouched() {
        let input_bonds = bonds(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let (a, b) = prune(&atoms(4), &input_bonds);
        assert_eq!(a, atoms(4));
        assert_eq!(b, input_bonds);
    }

    #[test]
    fn tail_hanging_off_cycle_is_removed() {
        // triangle 0-1-2 with branch 2-3-4 and a fork 3-5
        let (a, b) = prune(
            &atoms(6),
            &bonds(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (3, 5)]),
        );
        let ids: Vec<usize> = a.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(b, bonds(&[(0, 1), (1, 2), (2, 0)]));
    }

    #[test]
    fn isolated_atoms_are_removed() {
        let (a, b) = prune(&atoms(4), &bonds(&[(0, 1), (1, 2), (2, 0)]));
        assert_eq!(a.len(), 3);
        assert!(a.iter().all(|a| a.id != 3));
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn bridge_between_cycles_survives() {
        let input = bonds(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]);
        let (a, b) = prune(&atoms(6), &input);
        assert_eq!(a.len(), 6);
        assert_eq!(b, input);
    }

    #[test]
    fn bonds_to_unknown_atoms_are_dropped() {
        let (a, b) = prune(&atoms(3), &bonds(&[(0, 1), (1, 2), (2, 0), (2, 9)]));
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn survivors_have_degree_two_or_more() {
        let input_atoms = atoms(8);
        let input_bonds = bonds(&[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (1, 4),
            (4, 5),
            (5, 6),
            (6, 4),
            (6, 7),
        ]);
        let (a, b) = prune(&input_atoms, &input_bonds);
        assert!(!a.is_empty());
        assert!(degrees(&a, &b).iter().all(|&d| d >= 2));
    }

    #[test]
    fn pruning_is_idempotent() {
        let input_bonds = bonds(&[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (5, 6)]);
        let once = prune(&atoms(7), &input_bonds);
        let twice = prune(&once.0, &once.1);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_graph_stays_empty() {
        let (a, b) = prune(&[], &[]);
        assert!(a.is_empty() && b.is_empty());
    }
}
