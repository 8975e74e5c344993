//! Catmull-Rom spline interpolator.

use crate::values::{RatioInput, Scalable};

use super::{InterpolationMode, Interpolator};

/// Interpolates smoothly through the control points with a Catmull-Rom
/// spline.
///
/// Each segment is evaluated from four outputs: the segment's own two
/// endpoints plus one neighbor on each side. At the ends of the sequence,
/// where a true neighbor does not exist, the nearest available point stands
/// in for it. With `r` as the query's fractional position inside the segment:
///
/// ```text
/// 0.5 * (2*v1 + (v2 - c1)*r + (2*c1 - 5*v1 + 4*v2 - c2)*r² + (3*v1 - c1 - 3*v2 + c2)*r³)
/// ```
///
/// where `c1`/`c2` are the outer neighbors and `v1`/`v2` the segment
/// endpoints. The spline passes through every control point exactly, but may
/// overshoot between them; that is what makes it smooth.
///
/// # Examples
///
/// ```
/// use contour::{CatmullRom, Curve};
///
/// let mut curve = Curve::<f64, f64, 4>::new();
/// curve.initialize(&CatmullRom, &[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 2.0, 1.0]);
///
/// // The spline passes through its own control points.
/// assert_eq!(curve.value(1.0), 2.0);
/// assert_eq!(curve.value(2.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CatmullRom;

impl<I: RatioInput, O: Scalable> Interpolator<I, O> for CatmullRom {
    fn mode(&self) -> InterpolationMode {
        InterpolationMode::CatmullRom
    }

    fn interpolate(&self, input: I, inputs: &[I], outputs: &[O], segment: usize) -> O {
        let last = outputs.len() - 1;

        // Neighbors, reusing the nearest endpoint where the sequence ends.
        let c1 = outputs[segment.saturating_sub(1)];
        let v1 = outputs[segment];
        let v2 = outputs[(segment + 1).min(last)];
        let c2 = outputs[(segment + 2).min(last)];

        let r = input.ratio(inputs[segment], inputs[segment + 1]);
        let r2 = r * r;
        let r3 = r2 * r;

        (v1 * 2.0
            + (v2 - c1) * r
            + (c1 * 2.0 - v1 * 5.0 + v2 * 4.0 - c2) * r2
            + (v1 * 3.0 - c1 - v2 * 3.0 + c2) * r3)
            * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUTS: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
    const OUTPUTS: [f64; 4] = [1.0, 2.0, 2.0, 1.0];

    #[test]
    fn test_passes_through_control_points() {
        let spline = CatmullRom;
        // At ratio 0 every term but 2*v1 vanishes.
        assert_eq!(spline.interpolate(0.0, &INPUTS, &OUTPUTS, 0), 1.0);
        assert_eq!(spline.interpolate(1.0, &INPUTS, &OUTPUTS, 1), 2.0);
        assert_eq!(spline.interpolate(2.0, &INPUTS, &OUTPUTS, 2), 2.0);
    }

    #[test]
    fn test_symmetric_curve_gives_symmetric_values() {
        let spline = CatmullRom;
        // The control points are symmetric around x = 1.5, so the spline is
        // too.
        let left = spline.interpolate(0.5, &INPUTS, &OUTPUTS, 0);
        let right = spline.interpolate(2.5, &INPUTS, &OUTPUTS, 2);
        assert_eq!(left, right);
        assert_eq!(left, 1.5);
    }

    #[test]
    fn test_midpoint_of_flat_segment() {
        let spline = CatmullRom;
        // Between the two equal middle outputs the spline bulges upward,
        // pulled by the lower outer neighbors.
        assert_eq!(spline.interpolate(1.5, &INPUTS, &OUTPUTS, 1), 2.125);
    }

    #[test]
    fn test_end_segments_reuse_boundary_neighbors() {
        let spline = CatmullRom;
        // Two points only: both outer neighbors collapse onto the endpoints.
        // The curve 0.5*(4r + 12r^2 - 8r^3) still hits both endpoints and the
        // midpoint, easing in and out around them.
        let inputs = [0.0, 1.0];
        let outputs = [0.0, 4.0];
        assert_eq!(spline.interpolate(0.0, &inputs, &outputs, 0), 0.0);
        assert_eq!(spline.interpolate(0.5, &inputs, &outputs, 0), 2.0);
        assert_eq!(spline.interpolate(0.25, &inputs, &outputs, 0), 0.8125);
    }

    #[test]
    fn test_mode() {
        assert_eq!(
            Interpolator::<f64, f64>::mode(&CatmullRom),
            InterpolationMode::CatmullRom
        );
    }
}
