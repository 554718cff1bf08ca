//! Random distinct positions on an integer grid.

use std::collections::BTreeSet;

use rand::{Rng, rngs::SmallRng};
use ravelin_core::{GeneratorError, Position};

/// Validates that a `width × height` grid can host `count` distinct nodes.
///
/// Coordinates are drawn from `[1, width - 1] × [1, height - 1]`, leaving a
/// one-cell margin on every side.
pub(crate) fn validate_grid(width: u32, height: u32, count: usize) -> Result<(), GeneratorError> {
    if width < 2 || height < 2 {
        return Err(GeneratorError::InvalidParameter {
            reason: format!("grid {width}x{height} leaves no interior cells"),
        });
    }
    let capacity = (width as usize - 1) * (height as usize - 1);
    if capacity < count {
        return Err(GeneratorError::InvalidParameter {
            reason: format!(
                "grid {width}x{height} holds {capacity} distinct positions but {count} nodes were requested"
            ),
        });
    }
    Ok(())
}

/// Samples `count` distinct integer positions by rejection.
///
/// Call [`validate_grid`] first; with enough capacity the rejection loop
/// terminates with probability one.
pub(crate) fn random_grid_positions(
    width: u32,
    height: u32,
    count: usize,
    rng: &mut SmallRng,
) -> Vec<Position> {
    let mut taken = BTreeSet::new();
    let mut positions = Vec::with_capacity(count);
    while positions.len() < count {
        let x = rng.gen_range(1..width);
        let y = rng.gen_range(1..height);
        if taken.insert((x, y)) {
            positions.push(Position::new(f64::from(x), f64::from(y)));
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn positions_are_distinct_and_inside_the_margin() {
        let mut rng = SmallRng::seed_from_u64(21);
        validate_grid(8, 6, 20).expect("capacity 35 holds 20 nodes");
        let positions = random_grid_positions(8, 6, 20, &mut rng);
        assert_eq!(positions.len(), 20);
        let distinct: BTreeSet<(u64, u64)> = positions
            .iter()
            .map(|p| (p.x() as u64, p.y() as u64))
            .collect();
        assert_eq!(distinct.len(), 20);
        for position in &positions {
            assert!((1.0..8.0).contains(&position.x()));
            assert!((1.0..6.0).contains(&position.y()));
        }
    }

    #[test]
    fn overfull_grids_are_rejected() {
        let err = validate_grid(3, 3, 5).expect_err("a 2x2 interior cannot hold 5 nodes");
        assert!(matches!(err, GeneratorError::InvalidParameter { .. }));
    }
}
