use std::io::{self, Write};

use lattice_forge::{AtomKind, BondKind, Cell, Network};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_cell_summary(cell: &Cell, source: &str) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let [x, y, z] = cell.dims;
    let rows = vec![
        ("Source", source.to_string()),
        ("Dimensions", format!("{:.3} × {:.3} × {:.3}", x, y, z)),
        ("Points", format!("{}", cell.point_count())),
        ("Connections", format!("{}", cell.connection_count())),
        ("Crossing", format!("{}", cell.crossing_count())),
        ("Functionality", mean_functionality(cell)),
    ];

    print_kv_table(&mut out, "Cell Summary", &rows);
}

pub fn print_network_summary(network: &Network, size: [usize; 3]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let [nx, ny, nz] = size;
    let [ex, ey, ez] = network.extent;
    let rows = vec![
        ("Replicas", format!("{} × {} × {}", nx, ny, nz)),
        ("Extent", format!("{:.2} × {:.2} × {:.2}", ex, ey, ez)),
        ("Total Atoms", format!("{}", network.atom_count())),
        ("Total Bonds", format!("{}", network.bond_count())),
        ("Strand Bonds", format!("{}", network.count_bond_kind(BondKind::Strand))),
        ("Tail Bonds", format!("{}", network.count_bond_kind(BondKind::Tail))),
    ];

    print_kv_table(&mut out, "Network Summary", &rows);
}

pub fn print_composition(network: &Network) {
    let total = network.atom_count();
    if total == 0 {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut counts: Vec<(String, usize)> = [AtomKind::Crosslink, AtomKind::Chain, AtomKind::FreeEnd]
        .into_iter()
        .map(|kind| (kind.label().to_string(), network.count_kind(kind)))
        .filter(|(_, count)| *count > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    print_distribution_table(&mut out, "Atom Composition", &counts, total);
}

fn mean_functionality(cell: &Cell) -> String {
    if cell.point_count() == 0 {
        return "-".to_string();
    }
    // Every connection contributes one strand end to each of its points.
    let ends = 2 * cell.connection_count();
    format!("{:.2}", ends as f64 / cell.point_count() as f64)
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let name_line = "─".repeat(name_w + 2);
    let count_line = "─".repeat(count_w + 2);
    let dist_line = "─".repeat(dist_w + 2);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{INDENT}┌{name_line}┬{count_line}┬{dist_line}┐");
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Kind", "Count", "Distribution",
    );
    let _ = writeln!(out, "{INDENT}├{name_line}┼{count_line}┼{dist_line}┤");

    for (name, count) in data {
        let pct = (*count as f64 / total as f64) * 100.0;
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name, name_w),
            count,
            dist_cell,
        );
    }

    let _ = writeln!(out, "{INDENT}└{name_line}┴{count_line}┴{dist_line}┘");
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{INDENT}┌{k_line}┬{v_line}┐");
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Metric", "Value",
    );
    let _ = writeln!(out, "{INDENT}├{k_line}┼{v_line}┤");

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(out, "{INDENT}└{k_line}┴{v_line}┘");
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_forge::io::Preset;

    #[test]
    fn diamond_is_tetrafunctional() {
        assert_eq!(mean_functionality(&Preset::Diamond.cell()), "4.00");
        assert_eq!(mean_functionality(&Preset::Cubic.cell()), "6.00");
    }

    #[test]
    fn empty_cell_has_no_functionality() {
        assert_eq!(mean_functionality(&Cell::default()), "-");
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(make_bar(50.0, 4), "██░░");
        assert_eq!(make_bar(0.0, 3), "░░░");
    }

    #[test]
    fn kv_table_rows_have_equal_width() {
        let mut buf = Vec::new();
        print_kv_table(
            &mut buf,
            "Test",
            &[("Points", "8".to_string()), ("Dimensions", "1 × 1 × 1".to_string())],
        );
        let text = String::from_utf8(buf).unwrap();
        let widths: Vec<usize> = text.lines().skip(1).map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }
}
