use myproc_image::ImageError;

/// Largest accepted gaussian sigma, giving a kernel of 6001 taps.
pub const MAX_GAUSSIAN_SIGMA: f64 = 1000.0;

/// Compute the gaussian kernel size for a given sigma.
///
/// The size covers three sigmas on each side of the center: `1 + 2 * ceil(3 * sigma)`,
/// which is always odd and at least 3.
///
/// # Arguments
///
/// * `sigma` - The sigma of the gaussian kernel. Must be finite and in `(0, MAX_GAUSSIAN_SIGMA]`.
///
/// # Returns
///
/// The number of taps of the kernel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidSigma`] when `sigma` is outside the accepted range.
///
/// # Example
///
/// ```
/// use myproc_imgproc::filter::kernels::gaussian_kernel_size;
///
/// assert_eq!(gaussian_kernel_size(1.5).unwrap(), 11);
/// assert_eq!(gaussian_kernel_size(2.0).unwrap(), 13);
/// assert!(gaussian_kernel_size(0.0).is_err());
/// assert!(gaussian_kernel_size(1e300).is_err());
/// ```
pub fn gaussian_kernel_size(sigma: f64) -> Result<usize, ImageError> {
    if !(sigma > 0.0 && sigma <= MAX_GAUSSIAN_SIGMA) {
        return Err(ImageError::InvalidSigma(sigma));
    }

    let radius = (3.0 * sigma).ceil() as usize;

    Ok(2 * radius + 1)
}

/// Sample a gaussian of the given sigma on `kernel_size` taps centered on the middle tap.
///
/// Weights are accumulated in double precision and normalized to sum one before the
/// conversion to `f32`.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f64) -> Vec<f32> {
    let center = kernel_size as f64 / 2.0 - 0.5;
    let two_sigma_sq = 2.0 * sigma * sigma;

    let weights: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let d = i as f64 - center;
            (-d * d / two_sigma_sq).exp()
        })
        .collect();

    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| (w / total) as f32).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use myproc_image::ImageError;

    use super::*;

    #[test]
    fn test_gaussian_kernel_size() -> Result<(), ImageError> {
        assert_eq!(gaussian_kernel_size(1.5)?, 11);
        assert_eq!(gaussian_kernel_size(2.0)?, 13);
        assert_eq!(gaussian_kernel_size(0.1)?, 3);
        assert_eq!(gaussian_kernel_size(1e-9)?, 3);
        assert_eq!(gaussian_kernel_size(MAX_GAUSSIAN_SIGMA)?, 6001);

        let mut sigma = 0.05;
        while sigma < 20.0 {
            let kernel_size = gaussian_kernel_size(sigma)?;
            assert_eq!(kernel_size % 2, 1, "even kernel for sigma {sigma}");
            assert!(kernel_size >= 3, "kernel too small for sigma {sigma}");
            sigma += 0.37;
        }

        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_size_invalid() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY, 1000.5, 1e300, f64::MAX] {
            assert!(matches!(
                gaussian_kernel_size(sigma),
                Err(ImageError::InvalidSigma(_))
            ));
        }
    }

    #[test]
    fn test_gaussian_kernel_1d() {
        let kernel = gaussian_kernel_1d(5, 0.5);
        assert_eq!(kernel.len(), 5);

        let expected = [
            0.00026386508,
            0.10645077,
            0.78657067,
            0.10645077,
            0.00026386508,
        ];

        for (&k, &e) in kernel.iter().zip(expected.iter()) {
            assert_relative_eq!(k, e, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_gaussian_kernel_1d_normalized() {
        let kernel = gaussian_kernel_1d(11, 1.5);

        assert_eq!(kernel.len(), 11);
        assert_relative_eq!(kernel.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        for i in 0..5 {
            assert_relative_eq!(kernel[i], kernel[10 - i]);
            assert!(kernel[i] < kernel[i + 1]);
        }
    }
}
