use std::io::Write;

use anyhow::{Context, Result, bail};

use lattice_forge::io::{Format, LammpsConfig, write_cell_template, write_lammps_data};
use lattice_forge::{Cell, ChainLength, LatticeConfig, Network, forge};

use super::load_cell;
use crate::cli::BuildArgs;
use crate::config::{build_lammps_config, build_lattice_config};
use crate::display::{
    Context as DisplayContext, Progress, print_cell_summary, print_composition,
    print_network_summary,
};
use crate::io::{OutputSpec, create_output, infer_output_format, stdout_is_tty};

const TOTAL_STEPS: u8 = 3;

pub fn run_build(args: BuildArgs, ctx: DisplayContext) -> Result<()> {
    let output_specs = resolve_outputs(&args)?;
    let lattice_config = build_lattice_config(&args.lattice, &args.chain)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading cell");
    let (cell, source) = load_cell(&args.io)?;
    let read_substeps = [
        format!("Load {}", source),
        format!(
            "{} points, {} connections ({} crossing)",
            cell.point_count(),
            cell.connection_count(),
            cell.crossing_count()
        ),
    ];
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading cell", &read_substeps_ref);

    if ctx.interactive {
        print_cell_summary(&cell, &source);
    }

    progress.step("Forging network");
    let network = forge(&cell, &lattice_config).context("Network construction failed")?;

    let forge_substeps = build_forge_substeps(&cell, &lattice_config);
    let forge_substeps_ref: Vec<&str> = forge_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Forging network", &forge_substeps_ref);

    if ctx.interactive {
        print_network_summary(&network, lattice_config.size);
        print_composition(&network);
    }

    progress.step("Writing output");
    let lammps_config = build_lammps_config(&args.lammps);
    write_outputs(&cell, &network, &output_specs, &lammps_config)?;

    let write_substeps = build_write_substeps(&output_specs);
    let write_substeps_ref: Vec<&str> = write_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Writing output", &write_substeps_ref);

    progress.finish();

    Ok(())
}

fn build_forge_substeps(cell: &Cell, config: &LatticeConfig) -> Vec<String> {
    let [nx, ny, nz] = config.size;
    let mut steps = vec![format!(
        "Tile {}×{}×{} replicas ({} points each)",
        nx,
        ny,
        nz,
        cell.point_count()
    )];

    if config.dangling {
        let mirror = if config.symmetric {
            "mirrored"
        } else {
            "one-sided"
        };
        steps.push(format!("Keep dangling strands ({})", mirror));
    }

    let chain_step = match config.chain.length {
        ChainLength::Fixed(0) => "Bond crosslinks directly".to_string(),
        ChainLength::Fixed(n) => format!("Populate strands ({} beads each)", n),
        ChainLength::Spacing(s) => format!("Populate strands (spacing {:.3})", s),
    };
    steps.push(chain_step);

    if config.prune {
        steps.push("Prune dead-end branches".to_string());
    }

    steps
}

fn build_write_substeps(specs: &[OutputSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|spec| {
            let path_str = spec
                .path
                .as_ref()
                .map(|p| {
                    p.file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into_owned()
                })
                .unwrap_or_else(|| "stdout".to_string());

            match spec.format {
                Format::LammpsData => format!("Write LAMMPS data → {}", path_str),
                Format::CellTemplate => format!("Write cell template → {}", path_str),
            }
        })
        .collect()
}

fn resolve_outputs(args: &BuildArgs) -> Result<Vec<OutputSpec>> {
    if args.io.output.is_empty() {
        if stdout_is_tty() {
            bail!(
                "No output file specified and stdout is a terminal.\n\nUsage: lforge build --preset <NAME> -o <OUTPUT> or pipe output."
            );
        }
        let format = args
            .output_format
            .map(|f| f.into())
            .unwrap_or(Format::LammpsData);
        return Ok(vec![OutputSpec { path: None, format }]);
    }

    let mut specs = Vec::with_capacity(args.io.output.len());

    let first = &args.io.output[0];
    let first_format = if let Some(fmt) = args.output_format {
        fmt.into()
    } else if let Some(fmt) = infer_output_format(first) {
        fmt
    } else {
        bail!(
            "Cannot infer format from '{}'. Use --outfmt to specify.",
            first.display()
        );
    };
    specs.push(OutputSpec {
        path: Some(first.clone()),
        format: first_format,
    });

    for path in &args.io.output[1..] {
        let format = infer_output_format(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot infer format from '{}'. Use explicit extension.",
                path.display()
            )
        })?;
        specs.push(OutputSpec {
            path: Some(path.clone()),
            format,
        });
    }

    Ok(specs)
}

fn write_outputs(
    cell: &Cell,
    network: &Network,
    specs: &[OutputSpec],
    lammps_config: &LammpsConfig,
) -> Result<()> {
    for spec in specs {
        let mut writer = create_output(spec.path.as_deref())?;

        match spec.format {
            Format::LammpsData => {
                write_lammps_data(&mut writer, network, lammps_config)
                    .context("Failed to write LAMMPS data file")?;
            }
            Format::CellTemplate => {
                write_cell_template(&mut writer, cell)
                    .context("Failed to write cell template")?;
            }
        }

        writer.flush().context("Failed to flush output")?;
    }

    Ok(())
}
