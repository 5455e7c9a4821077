use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "lforge",
    about = "Periodic polymer network generation",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Tile a cell into a lattice and populate it with chains
    #[command(visible_alias = "b")]
    Build(BuildArgs),

    /// Inspect, resize, or convert a cell template
    #[command(visible_alias = "c")]
    Cell(CellArgs),
}

impl Command {
    pub fn io(&self) -> &IoOptions {
        match self {
            Command::Build(args) => &args.io,
            Command::Cell(args) => &args.io,
        }
    }
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Cell template (TOML); stdin if neither --cell nor --preset is given
    #[arg(short = 'i', long = "cell", value_name = "FILE", conflicts_with = "preset")]
    pub cell: Option<PathBuf>,

    /// Built-in cell instead of a template file
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<PresetName>,

    /// Output file(s), repeatable for multi-format output
    #[arg(short, long, value_name = "FILE", action = ArgAction::Append)]
    pub output: Vec<PathBuf>,

    /// Suppress progress output and logging (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Tiling and boundary options.
#[derive(Args)]
#[command(next_help_heading = "Lattice")]
pub struct LatticeOptions {
    /// Replicas along x, y and z
    #[arg(
        long,
        value_name = "NX,NY,NZ",
        value_delimiter = ',',
        num_args = 3,
        default_values_t = [1usize, 1, 1]
    )]
    pub size: Vec<usize>,

    /// Uniform scale applied to the cell
    #[arg(long, value_name = "FACTOR", default_value = "1.0")]
    pub scale: f64,

    /// Keep strands that leave the lattice as dangling chains
    #[arg(long)]
    pub dangling: bool,

    /// Do not mirror dangling strands onto the opposite face
    #[arg(long, requires = "dangling")]
    pub asymmetric: bool,

    /// Remove dead-end branches after population
    #[arg(long)]
    pub prune: bool,
}

/// Chain population options.
#[derive(Args)]
#[command(next_help_heading = "Chains")]
pub struct ChainOptions {
    /// Beads per strand
    #[arg(long = "chain-length", value_name = "N", conflicts_with = "bond_spacing")]
    pub chain_length: Option<usize>,

    /// Target bond length; bead counts follow from strand lengths
    #[arg(long = "bond-spacing", value_name = "LEN")]
    pub bond_spacing: Option<f64>,

    /// Fraction of the full strand vector spanned by a dangling chain
    #[arg(long = "dangling-extent", value_name = "FRAC", default_value = "1.0")]
    pub dangling_extent: f64,
}

/// LAMMPS output options.
#[derive(Args)]
#[command(next_help_heading = "LAMMPS Output")]
pub struct LammpsOptions {
    /// Padding around the atom bounding box
    #[arg(long = "lmp-margin", value_name = "LEN", default_value = "1.0")]
    pub margin: f64,

    /// How the simulation box is chosen
    #[arg(long = "lmp-box", value_name = "MODE", default_value = "shrink")]
    pub box_mode: BoxKind,
}

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Output format for first/only output
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    #[command(flatten)]
    pub lattice: LatticeOptions,

    #[command(flatten)]
    pub chain: ChainOptions,

    #[command(flatten)]
    pub lammps: LammpsOptions,
}

#[derive(Args)]
pub struct CellArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// New cell dimensions
    #[arg(long, value_name = "X,Y,Z", value_delimiter = ',', num_args = 3)]
    pub dims: Option<Vec<f64>>,

    /// Scale point coordinates along with --dims
    #[arg(long, requires = "dims")]
    pub rescale: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PresetName {
    /// Simple cubic, one crosslink per cell
    #[value(alias = "sc")]
    Cubic,
    /// Diamond, eight tetrafunctional crosslinks per cell
    #[value(alias = "dia")]
    Diamond,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// LAMMPS data file (atoms + bonds)
    #[value(name = "lammps-data", alias = "data")]
    LammpsData,
    /// Cell template (TOML)
    #[value(name = "cell", alias = "toml")]
    Cell,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum BoxKind {
    /// Atom bounding box plus margin
    #[default]
    Shrink,
    /// The tiled lattice extent
    Lattice,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_option_groups_share_heading_style() {
        let cmd = Cli::command();
        let build = cmd.find_subcommand("build").expect("build subcommand");
        let headings: BTreeSet<&str> = build
            .get_arguments()
            .filter_map(|arg| arg.get_help_heading())
            .collect();
        assert_eq!(headings, BTreeSet::from(["Chains", "LAMMPS Output", "Lattice"]));
    }
}
