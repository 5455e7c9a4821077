use std::io::Write;

use anyhow::{Context, Result, bail};

use lattice_forge::io::{Format, write_cell_template};

use super::load_cell;
use crate::cli::CellArgs;
use crate::display::{Context as DisplayContext, Progress, print_cell_summary};
use crate::io::{OutputSpec, create_output, infer_output_format, stdout_is_tty};

pub fn run_cell(args: CellArgs, ctx: DisplayContext) -> Result<()> {
    let output_specs = resolve_outputs(&args)?;
    let total_steps = if output_specs.is_empty() { 1 } else { 2 };

    let mut progress = Progress::new(ctx.interactive, total_steps);

    progress.step("Reading cell");
    let (mut cell, source) = load_cell(&args.io)?;

    let mut read_substeps = vec![format!("Load {}", source)];
    if let Some(dims) = &args.dims {
        let dims: [f64; 3] = dims
            .as_slice()
            .try_into()
            .context("--dims takes exactly three values")?;
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            bail!("Cell dimensions must be positive, got {:?}", dims);
        }
        cell.set_dims(dims, args.rescale);

        let how = if args.rescale { "rescaled" } else { "kept" };
        read_substeps.push(format!(
            "Resize to {} × {} × {} (coordinates {})",
            dims[0], dims[1], dims[2], how
        ));
    }
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading cell", &read_substeps_ref);

    if ctx.interactive {
        print_cell_summary(&cell, &source);
    }

    if !output_specs.is_empty() {
        progress.step("Writing output");
        for spec in &output_specs {
            let mut writer = create_output(spec.path.as_deref())?;
            write_cell_template(&mut writer, &cell).context("Failed to write cell template")?;
            writer.flush().context("Failed to flush output")?;
        }

        let write_substeps: Vec<String> = output_specs
            .iter()
            .map(|spec| match &spec.path {
                Some(p) => format!("Write cell template → {}", p.display()),
                None => "Write cell template → stdout".to_string(),
            })
            .collect();
        let write_substeps_ref: Vec<&str> = write_substeps.iter().map(|s| s.as_str()).collect();
        progress.complete_step("Writing output", &write_substeps_ref);
    }

    progress.finish();

    Ok(())
}

/// Cell templates are the only output of this command. Without `-o`, the
/// template goes to stdout only when it is redirected.
fn resolve_outputs(args: &CellArgs) -> Result<Vec<OutputSpec>> {
    if args.io.output.is_empty() {
        if stdout_is_tty() {
            return Ok(Vec::new());
        }
        return Ok(vec![OutputSpec {
            path: None,
            format: Format::CellTemplate,
        }]);
    }

    args.io
        .output
        .iter()
        .map(|path| match infer_output_format(path) {
            Some(Format::CellTemplate) | None => Ok(OutputSpec {
                path: Some(path.clone()),
                format: Format::CellTemplate,
            }),
            Some(other) => bail!(
                "'{}' looks like {} output; 'lforge cell' only writes cell templates (use 'lforge build')",
                path.display(),
                other
            ),
        })
        .collect()
}
