mod lammps;
mod lattice;

pub use lammps::build_lammps_config;
pub use lattice::build_lattice_config;
