use lattice_forge::io::{BoxMode, Format, Preset};

use crate::cli;

impl From<cli::PresetName> for Preset {
    fn from(name: cli::PresetName) -> Self {
        match name {
            cli::PresetName::Cubic => Preset::Cubic,
            cli::PresetName::Diamond => Preset::Diamond,
        }
    }
}

impl From<cli::OutputFormat> for Format {
    fn from(format: cli::OutputFormat) -> Self {
        match format {
            cli::OutputFormat::LammpsData => Format::LammpsData,
            cli::OutputFormat::Cell => Format::CellTemplate,
        }
    }
}

impl From<cli::BoxKind> for BoxMode {
    fn from(kind: cli::BoxKind) -> Self {
        match kind {
            cli::BoxKind::Shrink => BoxMode::Shrink,
            cli::BoxKind::Lattice => BoxMode::Lattice,
        }
    }
}
