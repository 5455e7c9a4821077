mod build;
mod cell;

use build::run_build;
use cell::run_cell;

use anyhow::{Context, Result, bail};

use lattice_forge::Cell;
use lattice_forge::io::{Preset, read_cell_template};

use crate::cli::{Command, IoOptions};
use crate::display::Context as DisplayContext;
use crate::io::{open_input, stdin_is_tty};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Build(args) => run_build(args, ctx),
        Command::Cell(args) => run_cell(args, ctx),
    }
}

/// Loads the cell named by `--preset`, `--cell`, or stdin, in that order.
fn load_cell(io: &IoOptions) -> Result<(Cell, String)> {
    if let Some(preset) = io.preset {
        let preset: Preset = preset.into();
        return Ok((preset.cell(), format!("preset '{}'", preset)));
    }

    if io.cell.is_none() && stdin_is_tty() {
        bail!(
            "No cell specified and stdin is a terminal.\n\nUsage: lforge <COMMAND> --cell <FILE>, --preset <NAME>, or pipe a template via stdin."
        );
    }

    let source = io
        .cell
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string());

    let input = open_input(io.cell.as_deref())?;
    let cell = read_cell_template(input).context("Failed to read cell template")?;
    Ok((cell, source))
}
