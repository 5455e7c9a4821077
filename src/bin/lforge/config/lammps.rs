use lattice_forge::io::LammpsConfig;

use crate::cli::LammpsOptions;

pub fn build_lammps_config(opts: &LammpsOptions) -> LammpsConfig {
    LammpsConfig {
        margin: opts.margin,
        box_mode: opts.box_mode.into(),
    }
}
