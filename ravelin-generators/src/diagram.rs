//! Geometric-diagram family: adjacency of neighbouring Voronoi cells.

use std::collections::BTreeSet;

use delaunator::{Point, triangulate};
use rand::{Rng, rngs::SmallRng};
use ravelin_core::{GeneratorError, Position, RawTopology, TopologyGenerator};
use tracing::debug;

/// Diagram-based family: random points in the unit square, one edge per
/// pair of points whose Voronoi cells share a ridge, which is exactly the
/// Delaunay edge set of the points.
///
/// Degenerate inputs (fewer than three points, collinear point sets) admit
/// no triangulation and yield an edge-free topology; the pipeline's
/// connectivity repair then joins the nodes.
#[derive(Clone, Copy, Debug)]
pub struct DiagramBased {
    points: usize,
}

impl DiagramBased {
    /// Creates the family.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameter`] when no points are
    /// requested.
    pub fn new(points: usize) -> Result<Self, GeneratorError> {
        if points == 0 {
            return Err(GeneratorError::InvalidParameter {
                reason: "a diagram needs at least one point".into(),
            });
        }
        Ok(Self { points })
    }
}

impl TopologyGenerator for DiagramBased {
    fn family(&self) -> &str {
        "diagram-based"
    }

    fn generate(&self, rng: &mut SmallRng) -> Result<RawTopology, GeneratorError> {
        let positions: Vec<Position> = (0..self.points)
            .map(|_| Position::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
            .collect();
        let sites: Vec<Point> = positions
            .iter()
            .map(|position| Point {
                x: position.x(),
                y: position.y(),
            })
            .collect();

        let triangulation = triangulate(&sites);
        let mut edges = BTreeSet::new();
        for triangle in triangulation.triangles.chunks_exact(3) {
            for (a, b) in [
                (triangle[0], triangle[1]),
                (triangle[1], triangle[2]),
                (triangle[2], triangle[0]),
            ] {
                edges.insert((a.min(b), a.max(b)));
            }
        }
        if edges.is_empty() {
            debug!(
                points = self.points,
                "degenerate point set admits no triangulation"
            );
        }
        Ok(RawTopology::with_positions(
            self.points,
            edges.into_iter().collect(),
            positions,
        ))
    }
}
