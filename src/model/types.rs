use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid atom kind: '{0}'")]
pub struct ParseAtomKindError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bond kind: '{0}'")]
pub struct ParseBondKindError(String);

/// Role of a particle in the populated network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtomKind {
    /// Junction mapped 1:1 from a cell point.
    Crosslink,
    /// Interior bead inserted along a strand.
    Chain,
    /// Terminal bead of a dangling strand.
    FreeEnd,
}

impl AtomKind {
    pub fn label(&self) -> &'static str {
        match self {
            AtomKind::Crosslink => "crosslink",
            AtomKind::Chain => "chain",
            AtomKind::FreeEnd => "free-end",
        }
    }

    #[inline]
    pub fn is_crosslink(&self) -> bool {
        matches!(self, AtomKind::Crosslink)
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AtomKind {
    type Err = ParseAtomKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crosslink" | "x" => Ok(AtomKind::Crosslink),
            "chain" | "c" => Ok(AtomKind::Chain),
            "free-end" | "freeend" | "end" | "e" => Ok(AtomKind::FreeEnd),
            _ => Err(ParseAtomKindError(s.to_string())),
        }
    }
}

/// Role of a bond in the populated network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BondKind {
    /// Segment of a strand joining two crosslinks.
    Strand,
    /// Segment of a dangling strand ending in a free end.
    Tail,
}

impl BondKind {
    pub fn label(&self) -> &'static str {
        match self {
            BondKind::Strand => "strand",
            BondKind::Tail => "tail",
        }
    }
}

impl fmt::Display for BondKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BondKind {
    type Err = ParseBondKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strand" | "s" => Ok(BondKind::Strand),
            "tail" | "t" => Ok(BondKind::Tail),
            _ => Err(ParseBondKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn atom_kind_from_str_variants() {
        assert_eq!(AtomKind::from_str("crosslink").unwrap(), AtomKind::Crosslink);
        assert_eq!(AtomKind::from_str("Chain").unwrap(), AtomKind::Chain);
        assert_eq!(AtomKind::from_str("END").unwrap(), AtomKind::FreeEnd);
        assert_eq!(AtomKind::from_str("free-end").unwrap(), AtomKind::FreeEnd);
    }

    #[test]
    fn atom_kind_from_str_invalid() {
        let err = AtomKind::from_str("solvent").unwrap_err();
        assert_eq!(err.to_string(), "invalid atom kind: 'solvent'");
    }

    #[test]
    fn kinds_display_labels() {
        assert_eq!(AtomKind::FreeEnd.to_string(), "free-end");
        assert_eq!(BondKind::Strand.to_string(), "strand");
        assert_eq!(BondKind::Tail.to_string(), "tail");
        assert!(AtomKind::Crosslink.is_crosslink());
        assert!(!AtomKind::Chain.is_crosslink());
    }

    #[test]
    fn bond_kind_from_str() {
        assert_eq!(BondKind::from_str("t").unwrap(), BondKind::Tail);
        assert!(BondKind::from_str("angle").is_err());
    }
}
