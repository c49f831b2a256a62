//! Synthetic point sets for demos and benchmarks

use anyhow::{anyhow, Result};
use rand::Rng;
use crate::geometry::Point;

/// Draw `samples` points uniformly from `[0, width) x [0, height)`
pub fn uniform<R: Rng + ?Sized>(
    samples: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Result<Vec<Point>> {
    for (name, extent) in [("width", width), ("height", height)] {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(anyhow!("{} must be positive and finite (got {})", name, extent));
        }
    }

    log::debug!("Generating {} points in {} x {}", samples, width, height);

    let points = (0..samples)
        .map(|_| Point::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)))
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn points_stay_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = uniform(500, 64.0, 100.0, &mut rng).unwrap();

        assert_eq!(points.len(), 500);
        for p in &points {
            assert!((0.0..64.0).contains(&p.x()));
            assert!((0.0..100.0).contains(&p.y()));
        }
    }

    #[test]
    fn zero_samples_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(uniform(0, 1.0, 1.0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn rejects_degenerate_extent() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(uniform(10, 0.0, 1.0, &mut rng).is_err());
        assert!(uniform(10, 1.0, f64::INFINITY, &mut rng).is_err());
    }
}
