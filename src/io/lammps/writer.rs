use crate::io::error::Error;
use crate::io::{BoxMode, Format, LammpsConfig};
use crate::model::system::Network;
use crate::model::types::{AtomKind, BondKind};
use std::collections::HashMap;
use std::io::Write;

const TITLE: &str = "LAMMPS data file via lattice-forge";
const ATOM_TYPES: usize = 2;
const BOND_TYPES: usize = 2;
const BEAD_MASS: f64 = 1.0;

pub fn write<W: Write>(mut writer: W, network: &Network, config: &LammpsConfig) -> Result<(), Error> {
    if network.is_empty() {
        return Err(Error::EmptyNetwork(Format::LammpsData));
    }

    let mut id_to_serial: HashMap<usize, usize> = HashMap::with_capacity(network.atom_count());
    for (serial, atom) in network.atoms.iter().enumerate() {
        if id_to_serial.insert(atom.id, serial + 1).is_some() {
            return Err(Error::Conversion(format!("duplicate atom id {}", atom.id)));
        }
    }

    let bounds = box_bounds(network, config)?;

    writeln!(writer, "{}", TITLE)?;
    writeln!(writer)?;
    writeln!(writer, "{} atoms", network.atom_count())?;
    writeln!(writer, "{} atom types", ATOM_TYPES)?;
    writeln!(writer, "{} bonds", network.bond_count())?;
    writeln!(writer, "{} bond types", BOND_TYPES)?;
    writeln!(writer)?;

    for (axis, [lo, hi]) in ["x", "y", "z"].iter().zip(bounds) {
        writeln!(writer, "{:.6} {:.6} {}lo {}hi", lo, hi, axis, axis)?;
    }
    writeln!(writer)?;

    writeln!(writer, "Masses")?;
    writeln!(writer)?;
    for t in 1..=ATOM_TYPES {
        writeln!(writer, "{} {:.1}", t, BEAD_MASS)?;
    }
    writeln!(writer)?;

    writeln!(writer, "Atoms # full")?;
    writeln!(writer)?;
    for (serial, atom) in network.atoms.iter().enumerate() {
        writeln!(
            writer,
            "{} 1 {} 0.0 {:.6} {:.6} {:.6} 0 0 0",
            serial + 1,
            atom_type(atom.kind),
            atom.position[0],
            atom.position[1],
            atom.position[2],
        )?;
    }

    if !network.bonds.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Bonds")?;
        writeln!(writer)?;
        for (serial, bond) in network.bonds.iter().enumerate() {
            let a = serial_of(&id_to_serial, bond.i)?;
            let b = serial_of(&id_to_serial, bond.j)?;
            writeln!(writer, "{} {} {} {}", serial + 1, bond_type(bond.kind), a, b)?;
        }
    }

    Ok(())
}

fn serial_of(map: &HashMap<usize, usize>, id: usize) -> Result<usize, Error> {
    map.get(&id)
        .copied()
        .ok_or_else(|| Error::Conversion(format!("bond references unknown atom id {id}")))
}

fn atom_type(kind: AtomKind) -> usize {
    match kind {
        AtomKind::Crosslink | AtomKind::FreeEnd => 1,
        AtomKind::Chain => 2,
    }
}

fn bond_type(kind: BondKind) -> usize {
    match kind {
        BondKind::Strand => 1,
        BondKind::Tail => 2,
    }
}

fn box_bounds(network: &Network, config: &LammpsConfig) -> Result<[[f64; 2]; 3], Error> {
    if !(config.margin.is_finite() && config.margin >= 0.0) {
        return Err(invalid_settings(format!(
            "box margin must be a non-negative finite number, got {}",
            config.margin
        )));
    }

    let bounds = match config.box_mode {
        BoxMode::Lattice => network.extent.map(|e| [0.0, e]),
        BoxMode::Shrink => {
            let mut bounds = [[f64::INFINITY, f64::NEG_INFINITY]; 3];
            for atom in &network.atoms {
                for (axis, bound) in bounds.iter_mut().enumerate() {
                    bound[0] = bound[0].min(atom.position[axis]);
                    bound[1] = bound[1].max(atom.position[axis]);
                }
            }
            bounds.map(|[lo, hi]| [lo - config.margin, hi + config.margin])
        }
    };

    for (axis, [lo, hi]) in ["x", "y", "z"].iter().zip(bounds) {
        if hi <= lo {
            return Err(invalid_settings(format!(
                "simulation box has no width along {axis} ({lo} to {hi}); use a positive margin"
            )));
        }
    }

    Ok(bounds)
}

fn invalid_settings(details: String) -> Error {
    Error::InvalidSettings {
        format: Format::LammpsData,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::system::Bond;

    fn sample_network() -> Network {
        Network::new(
            vec![
                Atom::crosslink(0, [0.0, 0.0, 0.0]),
                Atom::crosslink(3, [1.0, 0.0, 0.0]),
                Atom::chain(7, [0.5, 0.5, 0.0]),
                Atom::new(9, AtomKind::FreeEnd, [2.0, 0.0, 1.0]),
            ],
            vec![
                Bond::new(0, 7, BondKind::Strand),
                Bond::new(7, 3, BondKind::Strand),
                Bond::new(3, 9, BondKind::Tail),
            ],
            [2.0, 1.0, 1.0],
        )
    }

    fn render(network: &Network, config: &LammpsConfig) -> String {
        let mut buf = Vec::new();
        write(&mut buf, network, config).expect("write lammps");
        String::from_utf8(buf).expect("utf8")
    }

    fn section<'a>(out: &'a str, header: &str) -> Vec<&'a str> {
        out.lines()
            .skip_while(|l| !l.starts_with(header))
            .skip(2)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn writes_header_counts() {
        let out = render(&sample_network(), &LammpsConfig::default());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], TITLE);
        assert!(lines.contains(&"4 atoms"));
        assert!(lines.contains(&"2 atom types"));
        assert!(lines.contains(&"3 bonds"));
        assert!(lines.contains(&"2 bond types"));
    }

    #[test]
    fn renumbers_atoms_contiguously() {
        let out = render(&sample_network(), &LammpsConfig::default());
        let atoms = section(&out, "Atoms");
        assert_eq!(atoms.len(), 4);
        for (n, line) in atoms.iter().enumerate() {
            let fields: Vec<_> = line.split_whitespace().collect();
            assert_eq!(fields[0].parse::<usize>().unwrap(), n + 1);
        }
        let types: Vec<_> = atoms
            .iter()
            .map(|l| l.split_whitespace().nth(2).unwrap())
            .collect();
        assert_eq!(types, vec!["1", "1", "2", "1"]);

        let bonds = section(&out, "Bonds");
        assert_eq!(bonds, vec!["1 1 1 3", "2 1 3 2", "3 2 2 4"]);
    }

    #[test]
    fn shrink_box_pads_atom_bounds() {
        let config = LammpsConfig {
            margin: 1.0,
            box_mode: BoxMode::Shrink,
        };
        let out = render(&sample_network(), &config);
        assert!(out.contains("-1.000000 3.000000 xlo xhi"));
        assert!(out.contains("-1.000000 1.500000 ylo yhi"));
        assert!(out.contains("-1.000000 2.000000 zlo zhi"));
    }

    #[test]
    fn lattice_box_uses_extent() {
        let config = LammpsConfig {
            box_mode: BoxMode::Lattice,
            ..Default::default()
        };
        let out = render(&sample_network(), &config);
        assert!(out.contains("0.000000 2.000000 xlo xhi"));
        assert!(out.contains("0.000000 1.000000 zlo zhi"));
    }

    #[test]
    fn rejects_negative_or_non_finite_margin() {
        for margin in [-5.0, f64::NAN, f64::INFINITY] {
            let config = LammpsConfig {
                margin,
                box_mode: BoxMode::Shrink,
            };
            let mut buf = Vec::new();
            let err = write(&mut buf, &sample_network(), &config).expect_err("should fail");
            assert!(
                matches!(err, Error::InvalidSettings { format: Format::LammpsData, .. }),
                "margin {margin} gave {err:?}"
            );
            assert!(buf.is_empty(), "nothing is written before the box is validated");
        }
    }

    #[test]
    fn rejects_zero_width_box() {
        let network = Network::new(vec![Atom::crosslink(0, [0.5; 3])], vec![], [1.0; 3]);
        let config = LammpsConfig {
            margin: 0.0,
            box_mode: BoxMode::Shrink,
        };
        let err = write(Vec::new(), &network, &config).expect_err("should fail");
        assert!(matches!(err, Error::InvalidSettings { .. }));

        let lattice = LammpsConfig {
            margin: 0.0,
            box_mode: BoxMode::Lattice,
        };
        assert!(write(Vec::new(), &network, &lattice).is_ok());
    }

    #[test]
    fn bondless_network_omits_bond_section() {
        let network = Network::new(vec![Atom::crosslink(0, [0.0; 3])], vec![], [1.0; 3]);
        let out = render(&network, &LammpsConfig::default());
        assert!(out.contains("0 bonds"));
        assert!(!out.contains("Bonds"));
    }

    #[test]
    fn errors_on_empty_network() {
        let err = write(Vec::new(), &Network::default(), &LammpsConfig::default())
            .expect_err("should fail");
        assert!(matches!(err, Error::EmptyNetwork(Format::LammpsData)));
    }

    #[test]
    fn errors_on_dangling_bond_reference() {
        let mut network = sample_network();
        network.bonds.push(Bond::new(0, 42, BondKind::Strand));
        let err = write(Vec::new(), &network, &LammpsConfig::default()).expect_err("should fail");
        assert!(matches!(err, Error::Conversion(_)));
    }
}
