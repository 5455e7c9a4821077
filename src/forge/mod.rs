mod assemble;
mod config;
mod error;
mod populate;
mod prune;

pub use assemble::assemble;
pub use config::{AssembleOptions, ChainConfig, ChainLength, LatticeConfig};
pub use error::Error;
pub use populate::populate;
pub use prune::prune;

use tracing::info;

use crate::model::cell::Cell;
use crate::model::system::Network;

pub fn forge(cell: &Cell, config: &LatticeConfig) -> Result<Network, Error> {
    let assembly = assemble(cell, &config.assemble_options())?;

    let (mut atoms, mut bonds) = populate(&assembly, &config.chain)?;

    if config.prune {
        (atoms, bonds) = prune(&atoms, &bonds);
    }

    let network = Network::new(atoms, bonds, assembly.extent);

    info!(
        size = ?config.size,
        atoms = network.atom_count(),
        bonds = network.bond_count(),
        "built network"
    );

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cell::{Connection, Point};
    use crate::model::types::AtomKind;

    fn pair_cell() -> Cell {
        Cell::from_parts(
            [1.0, 1.0, 1.0],
            vec![
                Point::new(0, [0.25, 0.5, 0.5]),
                Point::new(1, [0.75, 0.5, 0.5]),
            ],
            vec![Connection::new(1, 0, [1, 0, 0])],
        )
    }

    fn cubic_cell() -> Cell {
        Cell::from_parts(
            [1.0, 1.0, 1.0],
            vec![Point::new(0, [0.5, 0.5, 0.5])],
            vec![
                Connection::new(0, 0, [1, 0, 0]),
                Connection::new(0, 0, [0, 1, 0]),
                Connection::new(0, 0, [0, 0, 1]),
            ],
        )
    }

    #[test]
    fn two_replica_pair_without_dangling() {
        let config = LatticeConfig {
            size: [2, 1, 1],
            ..Default::default()
        };
        let network = forge(&pair_cell(), &config).unwrap();
        assert_eq!(network.atom_count(), 4);
        assert_eq!(network.bond_count(), 1);
        assert_eq!(network.extent, [2.0, 1.0, 1.0]);
    }

    #[test]
    fn two_replica_pair_with_one_sided_dangling() {
        let config = LatticeConfig {
            size: [2, 1, 1],
            dangling: true,
            symmetric: false,
            ..Default::default()
        };
        let network = forge(&pair_cell(), &config).unwrap();
        assert_eq!(network.atom_count(), 5);
        assert_eq!(network.bond_count(), 2);
        assert_eq!(network.count_kind(AtomKind::FreeEnd), 1);
    }

    #[test]
    fn pruning_a_dangling_lattice_leaves_no_free_ends() {
        let config = LatticeConfig {
            size: [3, 3, 3],
            dangling: true,
            prune: true,
            chain: ChainConfig::fixed(2),
            ..Default::default()
        };
        let network = forge(&cubic_cell(), &config).unwrap();
        assert_eq!(network.count_kind(AtomKind::FreeEnd), 0);
        assert_eq!(network.count_kind(AtomKind::Crosslink), 27);
        assert!(network.degrees().values().all(|&d| d >= 2));
    }

    #[test]
    fn pruned_dangling_differs_from_no_dangling() {
        // A single pair in one replica: the strand only exists as two
        // dangling halves, so pruning wipes the whole structure.
        let base = LatticeConfig {
            size: [1, 1, 1],
            ..Default::default()
        };
        let plain = forge(&pair_cell(), &base).unwrap();
        assert_eq!(plain.atom_count(), 2);
        assert_eq!(plain.bond_count(), 0);

        let pruned = forge(
            &pair_cell(),
            &LatticeConfig {
                dangling: true,
                prune: true,
                ..base
            },
        )
        .unwrap();
        assert!(pruned.is_empty());
        assert_eq!(pruned.bond_count(), 0);
    }

    #[test]
    fn configuration_errors_surface_before_output() {
        let config = LatticeConfig {
            size: [1, 0, 1],
            ..Default::default()
        };
        assert!(forge(&cubic_cell(), &config).unwrap_err().is_configuration());
    }
}
