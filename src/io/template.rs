//! Cell templates: TOML snapshots of a [`Cell`] and the built-in presets.
//!
//! A template holds exactly the cell's dims, points and connections. Loading
//! one yields a fresh, independent `Cell`; editing it never touches the
//! source.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::io::error::Error;
use crate::model::cell::Cell;

const CUBIC_TOML: &str = include_str!("../../resources/cells/cubic.toml");
const DIAMOND_TOML: &str = include_str!("../../resources/cells/diamond.toml");

static CUBIC: OnceLock<Cell> = OnceLock::new();
static DIAMOND: OnceLock<Cell> = OnceLock::new();

/// Cells shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// One crosslink per cell, strands along each axis.
    Cubic,
    /// Conventional diamond cell, eight crosslinks of functionality four.
    Diamond,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Cubic, Preset::Diamond];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Cubic => "cubic",
            Preset::Diamond => "diamond",
        }
    }

    /// Returns an owned copy of the preset cell.
    pub fn cell(&self) -> Cell {
        let (slot, source) = match self {
            Preset::Cubic => (&CUBIC, CUBIC_TOML),
            Preset::Diamond => (&DIAMOND, DIAMOND_TOML),
        };
        slot.get_or_init(|| {
            parse_cell_template(source)
                .expect("Failed to parse embedded preset cell. This is a library bug.")
        })
        .clone()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cubic" | "sc" => Ok(Preset::Cubic),
            "diamond" | "dia" => Ok(Preset::Diamond),
            _ => Err(Error::UnknownPreset(s.to_string())),
        }
    }
}

pub fn parse_cell_template(text: &str) -> Result<Cell, Error> {
    let snapshot: Cell = toml::from_str(text)?;
    Ok(Cell::from_parts(
        snapshot.dims,
        snapshot.points,
        snapshot.connections,
    ))
}

pub fn read_cell_template<R: Read>(mut reader: R) -> Result<Cell, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_cell_template(&text)
}

pub fn write_cell_template<W: Write>(mut writer: W, cell: &Cell) -> Result<(), Error> {
    let text = toml::to_string(cell)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}
