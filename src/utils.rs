use crate::vector::Vector;
use rand::Rng;

pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            (0..dim)
                .map(|_| rng.gen_range(-1.0..1.0))
                .collect()
        })
        .collect()
}

/// Componentwise comparison within `epsilon`. Vectors of different
/// dimensions are never equal.
pub fn approx_eq(v1: &Vector, v2: &Vector, epsilon: f64) -> bool {
    v1.dimensions() == v2.dimensions()
        && v1.iter().zip(v2.iter()).all(|(a, b)| (a - b).abs() <= epsilon)
}
