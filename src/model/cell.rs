use serde::{Deserialize, Serialize};
use tracing::warn;

/// A crosslink site of a [`Cell`], in the cell's local frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    pub id: usize,
    pub coords: [f64; 3],
}

impl Point {
    pub fn new(id: usize, coords: [f64; 3]) -> Self {
        Self { id, coords }
    }
}

/// A strand between two points of the same cell.
///
/// `crossings[i]` counts how many times the strand, drawn from `origin` to
/// `partner`, leaves the cell through the boundary of axis `i`; the sign gives
/// the direction. An all-zero vector keeps the strand inside one replica.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Connection {
    pub origin: usize,
    pub partner: usize,
    #[serde(default)]
    pub crossings: [i32; 3],
}

impl Connection {
    pub fn new(origin: usize, partner: usize, crossings: [i32; 3]) -> Self {
        Self {
            origin,
            partner,
            crossings,
        }
    }

    pub fn internal(origin: usize, partner: usize) -> Self {
        Self::new(origin, partner, [0, 0, 0])
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.crossings == [0, 0, 0]
    }
}

/// The repeating unit of a network: a box, its crosslink points, and the
/// strands between them.
///
/// A cell is authored once and only read afterwards; the assembler never
/// mutates it. Point ids are expected to be dense and zero-based, which is
/// what [`Cell::add_point`] produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cell {
    pub dims: [f64; 3],
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new([1.0, 1.0, 1.0])
    }
}

impl Cell {
    pub fn new(dims: [f64; 3]) -> Self {
        Self {
            dims,
            points: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn from_parts(dims: [f64; 3], points: Vec<Point>, connections: Vec<Connection>) -> Self {
        let cell = Self {
            dims,
            points,
            connections,
        };
        for point in &cell.points {
            cell.warn_if_outside(point);
        }
        cell
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    #[inline]
    pub fn crossing_count(&self) -> usize {
        self.connections.iter().filter(|c| !c.is_internal()).count()
    }

    pub fn point(&self, id: usize) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, coords: [f64; 3]) -> bool {
        coords.iter().zip(self.dims).all(|(&x, d)| x <= d)
    }

    /// Appends a point and returns its id, which is the next dense index.
    ///
    /// Points outside the current dims are accepted with a warning.
    pub fn add_point(&mut self, coords: [f64; 3]) -> usize {
        let id = self.points.len();
        let point = Point::new(id, coords);
        self.warn_if_outside(&point);
        self.points.push(point);
        id
    }

    /// Appends a connection.
    ///
    /// Endpoints that do not exist yet are tolerated with a warning, so
    /// strands can be declared before their points; assembly rejects them if
    /// they are still missing by then.
    pub fn add_connection(&mut self, origin: usize, partner: usize, crossings: [i32; 3]) {
        if self.point(origin).is_none() || self.point(partner).is_none() {
            warn!(origin, partner, "connection references a point that does not exist yet");
        }
        self.connections
            .push(Connection::new(origin, partner, crossings));
    }

    /// Changes the cell dims, optionally moving every point so it keeps its
    /// fractional position.
    pub fn set_dims(&mut self, dims: [f64; 3], rescale: bool) {
        if rescale {
            let factors = [
                dims[0] / self.dims[0],
                dims[1] / self.dims[1],
                dims[2] / self.dims[2],
            ];
            for point in &mut self.points {
                for (x, f) in point.coords.iter_mut().zip(factors) {
                    *x *= f;
                }
            }
        }
        self.dims = dims;
    }

    fn warn_if_outside(&self, point: &Point) {
        if !self.contains(point.coords) {
            warn!(
                point = point.id,
                coords = ?point.coords,
                dims = ?self.dims,
                "point falls outside the cell dimensions"
            );
        }
    }
}
