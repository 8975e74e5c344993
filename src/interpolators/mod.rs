//! Interpolation strategies for sampled curves.
//!
//! Each strategy is a stateless zero-sized struct implementing
//! [`Interpolator`]. The step modes ([`Clamp`], [`ClampUp`]) only require
//! orderable inputs and copyable outputs; the continuous modes ([`Linear`],
//! [`CatmullRom`]) additionally require the blending contracts from
//! [`crate::values`].

mod catmull_rom;
mod clamp;
mod linear;
mod traits;

pub use catmull_rom::CatmullRom;
pub use clamp::{Clamp, ClampUp};
pub use linear::Linear;
pub use traits::{InterpolationMode, Interpolator};
