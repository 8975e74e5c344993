//! Sampled curve container.
//!
//! A [`Curve`] stores a bounded, ordered set of (input, output) control
//! points and answers value queries by finding the segment enclosing the
//! query and delegating to its interpolation strategy. All boundary policies
//! live here: queries outside the defined range clamp to the nearest
//! endpoint's output, regardless of mode, and an empty curve yields the
//! output type's default value.

use heapless::Vec;

use crate::interpolators::{InterpolationMode, Interpolator};
use crate::values::CurveInput;

/// A piecewise-defined response curve over up to `N` control points.
///
/// The curve owns its control points (copied in at initialization) and holds
/// a non-owning reference to one interpolation strategy. It starts empty and
/// becomes usable after [`initialize`](Curve::initialize); afterwards the
/// point set is immutable except by re-initialization, which fully replaces
/// both points and strategy.
///
/// Control inputs must be sorted ascending by the caller; the curve neither
/// sorts nor validates them. Unsorted inputs do not cause errors, only
/// deterministic fallback values.
///
/// # Examples
///
/// ```
/// use contour::{Curve, Linear};
///
/// let mut curve = Curve::<f64, f64, 8>::new();
/// curve.initialize(&Linear, &[0.0, 0.5, 1.5, 2.0, 5.0], &[4.0, 3.0, 4.0, 5.0, 5.0]);
///
/// assert_eq!(curve.value(0.125), 3.75);
/// assert_eq!(curve.value(-1.0), 4.0); // clamped to the left boundary
/// assert_eq!(curve.value(20.0), 5.0); // clamped to the right boundary
/// ```
pub struct Curve<'a, I, O, const N: usize> {
    interpolator: Option<&'a dyn Interpolator<I, O>>,
    inputs: Vec<I, N>,
    outputs: Vec<O, N>,
}

impl<I, O, const N: usize> Default for Curve<'_, I, O, N> {
    fn default() -> Self {
        Self {
            interpolator: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

impl<'a, I: CurveInput, O: Copy, const N: usize> Curve<'a, I, O, N> {
    /// Creates an empty curve with no strategy bound.
    pub const fn new() -> Self {
        Self {
            interpolator: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Replaces the curve's contents with the given strategy and points.
    ///
    /// Copies the first `min(inputs.len(), outputs.len(), N)` pairs in order;
    /// anything beyond the capacity `N` is silently truncated. Truncation is
    /// a documented policy, not an error, and the effective stored length is
    /// returned so callers can observe it.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::{Clamp, Curve};
    ///
    /// let mut curve = Curve::<f64, f64, 2>::new();
    /// let stored = curve.initialize(&Clamp, &[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]);
    /// assert_eq!(stored, 2); // third point truncated
    /// ```
    pub fn initialize(
        &mut self,
        interpolator: &'a dyn Interpolator<I, O>,
        inputs: &[I],
        outputs: &[O],
    ) -> usize {
        let stored = inputs.len().min(outputs.len()).min(N);
        self.inputs.clear();
        self.outputs.clear();
        self.inputs.extend(inputs[..stored].iter().copied());
        self.outputs.extend(outputs[..stored].iter().copied());
        self.interpolator = Some(interpolator);
        stored
    }

    /// Computes the curve's output for `input`.
    ///
    /// Queries at or outside the curve's bounds return the nearest boundary
    /// output, whatever the interpolation mode. Queries on an empty curve
    /// return `O::default()`. Interior queries resolve the enclosing segment
    /// with a linear scan (curve sizes are small and bounded) and delegate to
    /// the bound strategy exactly once.
    pub fn value(&self, input: I) -> O
    where
        O: Default,
    {
        if self.inputs.is_empty() {
            return O::default();
        }
        let last = self.inputs.len() - 1;
        if input <= self.inputs[0] {
            return self.outputs[0];
        }
        if input >= self.inputs[last] {
            return self.outputs[last];
        }
        if let Some(interpolator) = self.interpolator {
            for (i, pair) in self.inputs.windows(2).enumerate() {
                if pair[0] <= input && input < pair[1] {
                    return interpolator.interpolate(input, &self.inputs, &self.outputs, i);
                }
            }
        }
        // Unsorted inputs can defeat the scan; fall back to the last point.
        self.outputs[last]
    }

    /// Returns the smallest control input, or `I::default()` when empty.
    pub fn left_bound(&self) -> I
    where
        I: Default,
    {
        self.inputs.first().copied().unwrap_or_default()
    }

    /// Returns the largest control input, or `I::default()` when empty.
    pub fn right_bound(&self) -> I
    where
        I: Default,
    {
        self.inputs.last().copied().unwrap_or_default()
    }

    /// Returns the number of stored control points.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns `true` if the curve holds no control points.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Returns the fixed capacity `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the bound strategy's mode, or `None` before initialization.
    pub fn mode(&self) -> Option<InterpolationMode> {
        self.interpolator.map(|interpolator| interpolator.mode())
    }
}
