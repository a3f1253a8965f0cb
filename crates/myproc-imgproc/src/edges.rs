use image::GrayImage;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

/// Lower hysteresis threshold of the canny detector.
pub const CANNY_LOW_THRESHOLD: f32 = 100.0;

/// Upper hysteresis threshold of the canny detector.
pub const CANNY_HIGH_THRESHOLD: f32 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Candidate {
    Suppressed,
    Weak,
    Strong,
}

/// Detect edges with the canny algorithm.
///
/// The image is not smoothed first. Gradients come from a 3x3 sobel kernel with
/// replicated borders and their magnitude is the L2 norm. After non-maximum
/// suppression along the quantized gradient direction, pixels above
/// [`CANNY_HIGH_THRESHOLD`] seed the edges and pixels above [`CANNY_LOW_THRESHOLD`]
/// 8-connected to them are kept.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
///
/// # Returns
///
/// A grayscale image of the same size where edge pixels are 255 and the rest 0.
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use myproc_imgproc::edges::canny_edges;
///
/// // a 60 level step has a sobel magnitude of 240
/// let image = GrayImage::from_fn(8, 4, |x, _| if x < 4 { Luma([100]) } else { Luma([160]) });
/// let edges = canny_edges(&image);
///
/// assert_eq!(edges.get_pixel(3, 0).0, [255]);
/// assert_eq!(edges.get_pixel(4, 0).0, [0]);
/// ```
pub fn canny_edges(src: &GrayImage) -> GrayImage {
    let (width, height) = (src.width() as usize, src.height() as usize);

    let gx = horizontal_sobel(src);
    let gy = vertical_sobel(src);

    let candidates = non_maximum_suppression(
        gx.as_raw(),
        gy.as_raw(),
        width,
        height,
        CANNY_LOW_THRESHOLD,
        CANNY_HIGH_THRESHOLD,
    );

    hysteresis(&candidates, width, height)
}

fn non_maximum_suppression(
    gx: &[i16],
    gy: &[i16],
    width: usize,
    height: usize,
    low: f32,
    high: f32,
) -> Vec<Candidate> {
    let magnitude: Vec<f32> = gx
        .iter()
        .zip(gy)
        .map(|(&x, &y)| f32::from(x).hypot(f32::from(y)))
        .collect();

    // neighbors outside the image have no gradient
    let at = |x: usize, dx: isize, y: usize, dy: isize| -> f32 {
        let (nx, ny) = (x as isize + dx, y as isize + dy);
        if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
            0.0
        } else {
            magnitude[ny as usize * width + nx as usize]
        }
    };

    let tan_22_5 = std::f32::consts::FRAC_PI_8.tan();
    let mut candidates = vec![Candidate::Suppressed; width * height];

    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let m = magnitude[i];
            if m <= low {
                continue;
            }

            let (ax, ay) = (f32::from(gx[i]).abs(), f32::from(gy[i]).abs());
            let tan_22_5_x = ax * tan_22_5;

            let is_max = if ay < tan_22_5_x {
                // horizontal gradient
                m > at(x, -1, y, 0) && m >= at(x, 1, y, 0)
            } else if ay > tan_22_5_x + 2.0 * ax {
                // vertical gradient
                m > at(x, 0, y, -1) && m >= at(x, 0, y, 1)
            } else {
                let s: isize = if (gx[i] < 0) != (gy[i] < 0) { -1 } else { 1 };
                m > at(x, -s, y, -1) && m > at(x, s, y, 1)
            };

            if is_max {
                candidates[i] = if m > high {
                    Candidate::Strong
                } else {
                    Candidate::Weak
                };
            }
        }
    }

    candidates
}

fn hysteresis(candidates: &[Candidate], width: usize, height: usize) -> GrayImage {
    let mut dst = GrayImage::new(width as u32, height as u32);
    let data: &mut [u8] = &mut dst;

    let mut stack: Vec<usize> = Vec::new();
    for (i, candidate) in candidates.iter().enumerate() {
        if *candidate == Candidate::Strong {
            data[i] = 255;
            stack.push(i);
        }
    }

    while let Some(i) = stack.pop() {
        let (x, y) = (i % width, i / width);
        for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                let j = ny * width + nx;
                if candidates[j] == Candidate::Weak && data[j] == 0 {
                    data[j] = 255;
                    stack.push(j);
                }
            }
        }
    }

    dst
}
