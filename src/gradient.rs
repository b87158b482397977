//! Piecewise-linear gradients through a list of control colors.

use rgb::RGB;
use tracing::debug;
use crate::RGBColor;
use crate::error::{BreweryError, Result};

/// Number of colors interpolated between two consecutive control
/// points before resampling (255 levels × 3 channels).
pub const OVERSAMPLING: usize = 765;

/// Generator of `n` colors linearly interpolated along a polyline of
/// control colors in RGB space.
///
/// Each segment is first sampled densely ([`OVERSAMPLING`] colors per
/// segment, both ends included), then the concatenation of all
/// samples is picked at `n` evenly spaced indices.  The first and
/// last colors of the result are the first and last control points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearGradient {
    oversampling: usize,
}

impl Default for LinearGradient {
    fn default() -> Self { Self { oversampling: OVERSAMPLING } }
}

impl LinearGradient {
    pub fn new() -> Self { Self::default() }

    /// Set the number of samples per segment.
    pub fn oversampling(mut self, samples: usize) -> Self {
        self.oversampling = samples;
        self
    }

    /// Number of samples per segment.
    pub fn samples(&self) -> usize { self.oversampling }

    /// Return `n` colors interpolated along `points`.
    ///
    /// Requires at least 2 control points, `n ≥ 2` and an
    /// oversampling of at least 2.  Channels may be fractional.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::{RGB, RGB8};
    /// use carto_brewery::LinearGradient;
    /// let black = RGB8::new(0, 0, 0);
    /// let red = RGB8::new(255, 0, 0);
    /// let g = LinearGradient::new().generate(&[black, red], 5).unwrap();
    /// assert_eq!(g.len(), 5);
    /// assert_eq!(g[0], RGB::new(0., 0., 0.));
    /// assert_eq!(g[4], RGB::new(255., 0., 0.));
    /// ```
    pub fn generate<C: RGBColor>(&self, points: &[C], n: usize)
                                 -> Result<Vec<RGB<f64>>> {
        if points.len() < 2 {
            return Err(BreweryError::Gradient {
                message: format!("at least 2 control points are needed, \
                                  got {}", points.len()) })
        }
        if n < 2 {
            return Err(BreweryError::Gradient {
                message: format!("at least 2 colors must be requested, \
                                  got {n}") })
        }
        if self.oversampling < 2 {
            return Err(BreweryError::Gradient {
                message: format!("oversampling must be at least 2, got {}",
                                 self.oversampling) })
        }
        let points: Vec<RGB<f64>> = points.iter().map(C::to_rgb).collect();
        let all = self.oversample(&points);
        debug!(control_points = points.len(), samples = all.len(), n,
               "Resampling linear gradient");
        let last = (all.len() - 1) as f64;
        let flast = (n - 1) as f64;
        Ok((0 .. n).map(|k| all[(k as f64 / flast * last) as usize])
           .collect())
    }

    /// Dense list of colors on every segment, in control point order.
    fn oversample(&self, points: &[RGB<f64>]) -> Vec<RGB<f64>> {
        let flast = (self.oversampling - 1) as f64;
        let mut all = Vec::with_capacity((points.len() - 1) * self.oversampling);
        for c in points.windows(2) {
            let (c0, c1) = (c[0], c[1]);
            all.extend((0 .. self.oversampling).map(|i| {
                let t = i as f64 / flast;
                RGB { r: scale(c0.r, c1.r, t), g: scale(c0.g, c1.g, t),
                      b: scale(c0.b, c1.b, t) }
            }));
        }
        all
    }
}

#[inline]
fn scale(start: f64, finish: f64, t: f64) -> f64 {
    start + t * (finish - start)
}

/// Shorthand for [`LinearGradient::generate`] with the default
/// oversampling.
pub fn linear_gradient<C: RGBColor>(points: &[C], n: usize)
                                    -> Result<Vec<RGB<f64>>> {
    LinearGradient::default().generate(points, n)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
    const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
    const YELLOW: RGB8 = RGB8 { r: 255, g: 255, b: 0 };

    #[test]
    fn endpoints_are_control_points() {
        for n in [2, 3, 7, 100, 253] {
            let g = linear_gradient(&[BLACK, RED, YELLOW], n).unwrap();
            assert_eq!(g.len(), n);
            assert_eq!(g[0], BLACK.to_rgb());
            assert_eq!(g[n - 1], YELLOW.to_rgb());
        }
    }

    #[test]
    fn middle_control_point_is_hit() {
        // Index 764 is the last sample of the first segment.
        let g = linear_gradient(&[BLACK, RED, YELLOW], 3).unwrap();
        assert_eq!(g[1], RGB::new(255., 0., 0.));
    }

    #[test]
    fn monotone_channels() {
        let g = linear_gradient(&[BLACK, RED], 50).unwrap();
        assert!(g.windows(2).all(|c| c[0].r <= c[1].r));
        assert!(g.iter().all(|c| c.g == 0. && c.b == 0.));
    }

    #[test]
    fn custom_oversampling() {
        let g = LinearGradient::new().oversampling(3)
            .generate(&[BLACK, RED], 3).unwrap();
        assert_eq!(g, vec![RGB::new(0., 0., 0.), RGB::new(127.5, 0., 0.),
                           RGB::new(255., 0., 0.)]);
    }

    #[test]
    fn invalid_arguments() {
        let grad = LinearGradient::new();
        assert!(matches!(grad.generate(&[BLACK], 5),
                         Err(BreweryError::Gradient { .. })));
        assert!(matches!(grad.generate(&[BLACK, RED], 1),
                         Err(BreweryError::Gradient { .. })));
        assert!(matches!(grad.oversampling(1).generate(&[BLACK, RED], 5),
                         Err(BreweryError::Gradient { .. })));
    }
}
