/// Integer coordinate `[i, j, k]` of one tiled copy of a cell.
pub type Replica = [usize; 3];

/// A cell point placed in a specific replica.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalPoint {
    /// `local_id + n_points * (i + nx*j + nx*ny*k)`.
    pub index: usize,
    /// Id of the originating point in the cell.
    pub local_id: usize,
    pub replica: Replica,
    /// World coordinates after scaling and translation.
    pub position: [f64; 3],
}

/// A cell connection resolved to global indices.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConnection {
    /// Global index of the anchoring point.
    pub origin: usize,
    /// Global index of the partner, or `None` if the partner lies outside
    /// the lattice and the strand dangles.
    pub partner: Option<usize>,
    /// World displacement from the origin to where the partner is, or would
    /// be if the lattice continued.
    pub vector: [f64; 3],
}

impl ResolvedConnection {
    pub fn bonded(origin: usize, partner: usize, vector: [f64; 3]) -> Self {
        Self {
            origin,
            partner: Some(partner),
            vector,
        }
    }

    pub fn dangling(origin: usize, vector: [f64; 3]) -> Self {
        Self {
            origin,
            partner: None,
            vector,
        }
    }

    #[inline]
    pub fn is_dangling(&self) -> bool {
        self.partner.is_none()
    }
}

/// Output of lattice assembly: every placed point and every resolved
/// connection, both in deterministic order.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub size: [usize; 3],
    pub points: Vec<GlobalPoint>,
    pub connections: Vec<ResolvedConnection>,
    /// Scaled lattice box.
    pub extent: [f64; 3],
}

impl Assembly {
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn dangling_count(&self) -> usize {
        self.connections.iter().filter(|c| c.is_dangling()).count()
    }

    pub fn point(&self, index: usize) -> Option<&GlobalPoint> {
        self.points.get(index).filter(|p| p.index == index)
    }
}
