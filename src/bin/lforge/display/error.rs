use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_io_hints(err);
        collector.collect_forge_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use lattice_forge::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            IoError::TemplateParse(_) => {
                self.add("Cell template has invalid TOML or an unexpected layout");
                self.add("A template needs `dims = [x, y, z]` plus [[points]] and [[connections]] tables");
                self.add("Each point needs `id` and `coords`; each connection needs `origin` and `partner`");
            }

            IoError::TemplateSerialize(_) => {
                self.add("The cell could not be encoded as TOML");
                self.add("Check for non-finite coordinates or dimensions");
            }

            IoError::UnknownPreset(name) => {
                self.add(format!("No built-in cell named '{}'", name));
                self.add("Available presets: cubic (sc), diamond (dia)");
            }

            IoError::EmptyNetwork(_) => {
                self.add("The generated network has no atoms");
                self.add("Pruning removes every atom of a tree-like network");
                self.add("Try without --prune, or enlarge the lattice with --size");
            }

            IoError::InvalidSettings { details, .. } => {
                self.add(format!("Export settings rejected: {}", details));
                self.add("--lmp-margin must be zero or positive");
                self.add("A single crosslink needs a positive --lmp-margin or --lmp-box lattice");
            }

            IoError::Conversion(msg) => {
                self.add("Network is internally inconsistent and cannot be exported");
                self.add(format!("Details: {}", msg));
                self.add("This may indicate a bug, please report if reproducible");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Ensure you have read/write access as needed");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
                self.add("Cell templates must be plain TOML files");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe, the output consumer terminated");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_forge_hints(&mut self, err: &Error) {
        use lattice_forge::ForgeError;

        let Some(forge_err) = err.downcast_ref::<ForgeError>() else {
            return;
        };

        self.mark_typed();

        match forge_err {
            ForgeError::Configuration(msg) => {
                self.add("The cell or the lattice settings are invalid");
                self.collect_configuration_hints(msg);
            }

            ForgeError::Geometry(_) => {
                self.add("A connection jumps over more than one neighboring cell");
                self.add("Crossing components must be -1, 0 or 1 for every axis");
                self.add("Split long strands into several connections through intermediate points");
            }
        }
    }

    fn collect_configuration_hints(&mut self, msg: &str) {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("lattice size") {
            self.add("Every --size component must be at least 1");
        } else if msg_lower.contains("scale") {
            self.add("--scale must be a positive number");
        } else if msg_lower.contains("spacing") {
            self.add("--bond-spacing must be a positive number");
        } else if msg_lower.contains("extent") {
            self.add("--dangling-extent must be a positive number");
        } else if msg_lower.contains("dims") {
            self.add("Cell `dims` must be positive in every axis");
        } else if msg_lower.contains("dense") {
            self.add("Point ids must run 0, 1, 2, ... in the order points are listed");
        } else if msg_lower.contains("references point") {
            self.add("A connection names a point id that the cell does not define");
            self.add("Check `origin` and `partner` against the [[points]] ids");
        } else if msg_lower.contains("itself") {
            self.add("A point connected to itself needs a non-zero `crossings` vector");
        } else {
            self.add("Inspect the cell template with 'lforge cell'");
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") || msg.contains("tty") {
            self.add("Input appears to be from a terminal");
            self.add("Provide a cell via --cell/--preset or pipe a template to stdin");
            return;
        }

        if msg.contains("infer format") {
            self.add("Recognized extensions: .data/.lmp (LAMMPS data), .toml (cell template)");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Ensure you have the required access rights");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use lattice_forge::ForgeError;
    use lattice_forge::io::Error as IoError;

    #[test]
    fn geometry_error_yields_crossing_hints() {
        let err: Error = Err::<(), _>(ForgeError::geometry("too far"))
            .context("Network construction failed")
            .unwrap_err();
        let hints = HintCollector::collect(&err).expect("hints");
        assert!(hints.iter().any(|h| h.contains("-1, 0 or 1")));
    }

    #[test]
    fn configuration_hint_follows_message() {
        let err = Error::new(ForgeError::configuration(
            "scale must be a positive finite number, got 0",
        ));
        let hints = HintCollector::collect(&err).expect("hints");
        assert!(hints.iter().any(|h| h.contains("--scale")));
    }

    #[test]
    fn unknown_preset_lists_choices() {
        let err = Error::new(IoError::UnknownPreset("fcc".into()));
        let hints = HintCollector::collect(&err).expect("hints");
        assert!(hints.iter().any(|h| h.contains("diamond")));
    }

    #[test]
    fn invalid_margin_points_at_flag() {
        let err = Error::new(IoError::InvalidSettings {
            format: lattice_forge::io::Format::LammpsData,
            details: "box margin must be a non-negative finite number, got -5".into(),
        });
        let hints = HintCollector::collect(&err).expect("hints");
        assert!(hints.iter().any(|h| h.contains("--lmp-margin")));
    }

    #[test]
    fn untyped_error_falls_back_to_message() {
        let err = anyhow::anyhow!("Cannot infer format from 'net.xyz'. Use --outfmt to specify.");
        let hints = HintCollector::collect(&err).expect("hints");
        assert!(hints[0].contains(".toml"));
    }

    #[test]
    fn plain_error_without_keywords_has_no_hints() {
        let err = anyhow::anyhow!("something odd");
        assert!(HintCollector::collect(&err).is_none());
    }
}
