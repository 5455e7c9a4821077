//! Lattice assembly: tiling a cell and resolving its connections.
//!
//! Global indices are a pure function of replica and local point id,
//! `local_id + n_points * (i + nx*j + nx*ny*k)`, so points live in one flat
//! array and any (replica, point) pair is found in O(1).

use tracing::debug;

use super::config::AssembleOptions;
use super::error::Error;
use crate::model::cell::{Cell, Connection};
use crate::model::lattice::{Assembly, GlobalPoint, Replica, ResolvedConnection};

/// Tiles `cell` over `options.size` replicas and resolves every connection.
///
/// Points are emitted in increasing global index. Connections are emitted
/// replica by replica in the same order; within a replica, the cell's
/// connections come first in authored order, followed by any mirrored
/// dangling ends.
///
/// # Errors
///
/// * [`Error::Configuration`] for invalid options or an inconsistent cell.
/// * [`Error::Geometry`] when a crossing vector leaves the lattice by more
///   than one replica.
pub fn assemble(cell: &Cell, options: &AssembleOptions) -> Result<Assembly, Error> {
    options.validate()?;
    validate_cell(cell)?;

    let tiling = Tiling::new(cell, options);
    let points = tiling.place_points();
    let connections = tiling.resolve_connections()?;

    let assembly = Assembly {
        size: options.size,
        points,
        connections,
        extent: tiling.extent(),
    };

    debug!(
        points = assembly.point_count(),
        connections = assembly.connection_count(),
        dangling = assembly.dangling_count(),
        "assembled lattice"
    );

    Ok(assembly)
}

fn validate_cell(cell: &Cell) -> Result<(), Error> {
    if !cell.dims.iter().all(|d| d.is_finite() && *d > 0.0) {
        return Err(Error::configuration(format!(
            "cell dims must be positive finite numbers, got {:?}",
            cell.dims
        )));
    }

    if let Some((index, point)) = cell
        .points
        .iter()
        .enumerate()
        .find(|(index, point)| point.id != *index)
    {
        return Err(Error::configuration(format!(
            "point ids must be dense and zero-based: position {index} holds id {}",
            point.id
        )));
    }

    let count = cell.point_count();
    for (n, conn) in cell.connections.iter().enumerate() {
        for id in [conn.origin, conn.partner] {
            if id >= count {
                return Err(Error::unknown_point(n, id));
            }
        }
        if conn.origin == conn.partner && conn.is_internal() {
            return Err(Error::configuration(format!(
                "connection #{n} joins point {} to itself inside one replica",
                conn.origin
            )));
        }
    }

    Ok(())
}

struct Tiling<'a> {
    cell: &'a Cell,
    size: [usize; 3],
    scale: f64,
    dims: [f64; 3],
    dangling: bool,
    symmetric: bool,
}

impl<'a> Tiling<'a> {
    fn new(cell: &'a Cell, options: &AssembleOptions) -> Self {
        Self {
            cell,
            size: options.size,
            scale: options.scale,
            dims: cell.dims.map(|d| d * options.scale),
            dangling: options.dangling,
            symmetric: options.symmetric,
        }
    }

    fn extent(&self) -> [f64; 3] {
        [0, 1, 2].map(|a| self.size[a] as f64 * self.dims[a])
    }

    /// Replicas in global index order: x fastest, z slowest.
    fn replicas(&self) -> impl Iterator<Item = Replica> + '_ {
        let [nx, ny, nz] = self.size;
        (0..nz).flat_map(move |k| (0..ny).flat_map(move |j| (0..nx).map(move |i| [i, j, k])))
    }

    fn global_index(&self, replica: Replica, local_id: usize) -> usize {
        let [nx, ny, _] = self.size;
        let [i, j, k] = replica;
        local_id + self.cell.point_count() * (i + nx * j + nx * ny * k)
    }

    fn place_points(&self) -> Vec<GlobalPoint> {
        let total = self.cell.point_count() * self.size.iter().product::<usize>();
        let mut points = Vec::with_capacity(total);

        for replica in self.replicas() {
            for point in &self.cell.points {
                let position =
                    [0, 1, 2].map(|a| point.coords[a] * self.scale + replica[a] as f64 * self.dims[a]);
                points.push(GlobalPoint {
                    index: self.global_index(replica, point.id),
                    local_id: point.id,
                    replica,
                    position,
                });
            }
        }

        points
    }

    fn resolve_connections(&self) -> Result<Vec<ResolvedConnection>, Error> {
        let mut resolved = Vec::new();
        let mut mirrored = Vec::new();

        for replica in self.replicas() {
            for conn in &self.cell.connections {
                let origin = self.global_index(replica, conn.origin);
                let vector = self.displacement(conn);

                match self.target(replica, conn.crossings, 1)? {
                    Some(target) => resolved.push(ResolvedConnection::bonded(
                        origin,
                        self.global_index(target, conn.partner),
                        vector,
                    )),
                    None if self.dangling => {
                        resolved.push(ResolvedConnection::dangling(origin, vector));
                    }
                    None => {}
                }

                // The reverse strand, partner -> origin, seen from this replica.
                if self.dangling
                    && self.symmetric
                    && self.target(replica, conn.crossings, -1)?.is_none()
                {
                    mirrored.push(ResolvedConnection::dangling(
                        self.global_index(replica, conn.partner),
                        vector.map(|x| -x),
                    ));
                }
            }
            resolved.append(&mut mirrored);
        }

        Ok(resolved)
    }

    /// World vector from a connection's origin to its partner.
    fn displacement(&self, conn: &Connection) -> [f64; 3] {
        let origin = self.cell.points[conn.origin].coords;
        let partner = self.cell.points[conn.partner].coords;
        [0, 1, 2].map(|a| {
            (partner[a] - origin[a]) * self.scale + f64::from(conn.crossings[a]) * self.dims[a]
        })
    }

    /// Replica reached from `replica` by `sign * crossings`, or `None` if it
    /// lies outside the lattice.
    fn target(
        &self,
        replica: Replica,
        crossings: [i32; 3],
        sign: i64,
    ) -> Result<Option<Replica>, Error> {
        let mut target = [0usize; 3];
        let mut inside = true;

        for axis in 0..3 {
            let n = self.size[axis] as i64;
            let t = replica[axis] as i64 + sign * i64::from(crossings[axis]);
            if t < -1 || t > n {
                return Err(Error::geometry(format!(
                    "crossing vector {crossings:?} from replica {replica:?} leaves the lattice \
                     by more than one replica along axis {axis}"
                )));
            }
            if (0..n).contains(&t) {
                target[axis] = t as usize;
            } else {
                inside = false;
            }
        }

        Ok(inside.then_some(target))
    }
}
