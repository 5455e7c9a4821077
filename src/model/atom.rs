use super::types::AtomKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub id: usize,
    pub kind: AtomKind,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(id: usize, kind: AtomKind, position: [f64; 3]) -> Self {
        Self { id, kind, position }
    }

    pub fn crosslink(id: usize, position: [f64; 3]) -> Self {
        Self::new(id, AtomKind::Crosslink, position)
    }

    pub fn chain(id: usize, position: [f64; 3]) -> Self {
        Self::new(id, AtomKind::Chain, position)
    }
}
