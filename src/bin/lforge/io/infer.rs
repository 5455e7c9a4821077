use std::path::Path;

use lattice_forge::io::Format;

pub fn output(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "data" | "lmp" | "lammps" => Some(Format::LammpsData),
        "toml" | "cell" => Some(Format::CellTemplate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_known_extensions() {
        assert_eq!(output(Path::new("net.data")), Some(Format::LammpsData));
        assert_eq!(output(Path::new("out/NET.LMP")), Some(Format::LammpsData));
        assert_eq!(output(Path::new("diamond.toml")), Some(Format::CellTemplate));
    }

    #[test]
    fn unknown_or_missing_extension_is_none() {
        assert_eq!(output(Path::new("net.xyz")), None);
        assert_eq!(output(Path::new("network")), None);
    }
}
