// =============================================================================
// Transforms Module
// =============================================================================
//
// Pure, side-effect-free sample transforms.  Every function borrows its input
// slice and returns a freshly allocated series of the same length, so callers
// never observe partial results.
//
// Both transforms treat the sample before index 0 as 0.0.

pub mod first_difference;
pub mod running_sum;

pub use first_difference::{calculate_first_difference, current_first_difference};
pub use running_sum::{calculate_running_sum, current_running_sum};
