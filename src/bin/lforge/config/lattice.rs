use anyhow::{Result, anyhow};

use lattice_forge::{ChainConfig, ChainLength, LatticeConfig};

use crate::cli::{ChainOptions, LatticeOptions};

pub fn build_lattice_config(
    lattice: &LatticeOptions,
    chain: &ChainOptions,
) -> Result<LatticeConfig> {
    let size: [usize; 3] = lattice
        .size
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("--size takes exactly three values, got {}", lattice.size.len()))?;

    Ok(LatticeConfig {
        size,
        scale: lattice.scale,
        dangling: lattice.dangling,
        symmetric: !lattice.asymmetric,
        prune: lattice.prune,
        chain: build_chain_config(chain),
    })
}

fn build_chain_config(opts: &ChainOptions) -> ChainConfig {
    let length = match (opts.bond_spacing, opts.chain_length) {
        (Some(spacing), _) => ChainLength::Spacing(spacing),
        (None, Some(n)) => ChainLength::Fixed(n),
        (None, None) => ChainLength::default(),
    };

    ChainConfig {
        length,
        dangling_extent: opts.dangling_extent,
    }
}
