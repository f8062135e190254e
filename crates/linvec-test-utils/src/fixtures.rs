//! Seeded random operands.
//!
//! Every generator takes an explicit seed and uses ChaCha8, so a fixture
//! built twice with the same seed is identical on every platform.

use linvec_matrix::Matrix;
use linvec_vector::Vector;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed for fixtures that do not care which values they get.
pub const SEED: u64 = 0x5eed_1a;

/// A `len`-element vector with entries in `[-1, 1)`.
pub fn random_vector(len: usize, seed: u64) -> Vector<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// A `rows x cols` matrix with entries in `[-1, 1)`.
pub fn random_matrix(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..rows * cols)
        .map(|_| rng.random_range(-1.0..1.0))
        .collect();
    Matrix::from_vec(rows, cols, data).expect("fixture shape fits")
}

/// A `rows x cols` matrix of small integers in `[-9, 9]`.
pub fn random_int_matrix(rows: usize, cols: usize, seed: u64) -> Matrix<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..rows * cols).map(|_| rng.random_range(-9..=9)).collect();
    Matrix::from_vec(rows, cols, data).expect("fixture shape fits")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_values() {
        assert_eq!(random_matrix(3, 4, 7), random_matrix(3, 4, 7));
        assert_eq!(random_vector(5, 7), random_vector(5, 7));
    }

    #[test]
    fn values_in_range() {
        let v = random_vector(256, SEED);
        assert!(v.iter().all(|&x| (-1.0..1.0).contains(&x)));
        let m = random_int_matrix(8, 8, SEED);
        assert!(m.as_slice().iter().all(|&x| (-9..=9).contains(&x)));
    }
}
