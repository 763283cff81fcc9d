//! Dense matrix product workload.
//!
//! The product goes through `ndarray`'s `dot`, which dispatches to the
//! `matrixmultiply` GEMM kernels (blocked, SIMD-packed) for `f64` matrices.

use ndarray::Array2;
use synthbench_core::{Bencher, SuiteContext};

/// Deterministic operands: `A[i][j] = i + j`, `B[i][j] = i - j`
pub fn operands(dim: usize) -> (Array2<f64>, Array2<f64>) {
    let a = Array2::from_shape_fn((dim, dim), |(i, j)| (i + j) as f64);
    let b = Array2::from_shape_fn((dim, dim), |(i, j)| i as f64 - j as f64);
    (a, b)
}

/// Standard matrix product `a · b`
pub fn matrix_multiply(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    a.dot(b)
}

pub(crate) fn run(b: &mut Bencher, ctx: &SuiteContext) {
    let dim = ctx.config().matrix_dim;
    b.iter(|| {
        let (lhs, rhs) = operands(dim);
        matrix_multiply(&lhs, &rhs)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Closed form of `sum_k (i + k)(k - j)` for `k` in `0..n`
    fn expected(n: usize, i: usize, j: usize) -> f64 {
        let (n, i, j) = (n as f64, i as f64, j as f64);
        let s1 = n * (n - 1.0) / 2.0;
        let s2 = (n - 1.0) * n * (2.0 * n - 1.0) / 6.0;
        i * s1 - n * i * j + s2 - j * s1
    }

    #[test]
    fn test_operands() {
        let (a, b) = operands(4);
        assert_eq!(a[[1, 2]], 3.0);
        assert_eq!(b[[1, 2]], -1.0);
        assert_eq!(b[[3, 0]], 3.0);
    }

    #[test]
    fn test_small_product_matches_naive() {
        let n = 7;
        let (a, b) = operands(n);
        let c = matrix_multiply(&a, &b);

        for i in 0..n {
            for j in 0..n {
                let naive: f64 = (0..n).map(|k| a[[i, k]] * b[[k, j]]).sum();
                assert_eq!(c[[i, j]], naive);
                assert_eq!(c[[i, j]], expected(n, i, j));
            }
        }
    }

    #[test]
    fn test_full_size_product() {
        let n = 500;
        let (a, b) = operands(n);
        let c = matrix_multiply(&a, &b);

        assert_eq!(c.dim(), (500, 500));
        for &(i, j) in &[(0, 0), (0, 499), (499, 0), (250, 125), (499, 499)] {
            assert_eq!(c[[i, j]], expected(n, i, j), "entry ({}, {})", i, j);
        }
    }
}
