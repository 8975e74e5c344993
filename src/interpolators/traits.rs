//! Core trait definitions for interpolators.

/// Identifies an interpolation strategy.
///
/// Every interpolator reports its mode, which is useful for inspecting a
/// curve after construction or for serializing a choice of strategy by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Step function holding each control point's output until the next one
    Clamp,
    /// Step function jumping immediately to the upcoming control point's output
    ClampUp,
    /// Straight-line blend between neighboring control points
    #[default]
    Linear,
    /// Smooth cubic spline through the control points
    CatmullRom,
}

impl InterpolationMode {
    /// Alias for the smooth spline mode.
    pub const SMOOTH: InterpolationMode = InterpolationMode::CatmullRom;
}

/// Common interface for all interpolation strategies.
///
/// An interpolator turns a resolved curve segment and a query input into an
/// output value. Strategies are stateless; a shared reference to the unit
/// value (`&Clamp`, `&Linear`, …) serves as the process-wide instance and may
/// be bound to any number of curves at once.
///
/// # Contract
///
/// `interpolate` is called by the curve container with an already-resolved
/// segment: `inputs[segment] <= input < inputs[segment + 1]`, both slices
/// sorted ascending, of equal length at least 2, and `segment + 1` in range.
/// Out-of-range and empty-curve queries never reach the interpolator; the
/// container clamps them to the boundary outputs first.
pub trait Interpolator<I, O> {
    /// Returns the mode tag identifying this strategy.
    fn mode(&self) -> InterpolationMode;

    /// Computes the output for `input` within the given segment.
    fn interpolate(&self, input: I, inputs: &[I], outputs: &[O], segment: usize) -> O;
}
