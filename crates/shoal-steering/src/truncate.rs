//! Force-budget truncation: add exactly as much of one vector to another as
//! a length limit allows.

use shoal_core::Vec2;

use crate::{SteeringError, SteeringResult};

/// Rounding slack when comparing an accumulated length against the limit.
/// Can't compare against zero directly — `f32` length computations wobble.
const TOLERANCE: f32 = 1e-4;

/// Return `w * addend` with the largest `w > 0` such that
/// `|accumulated + w * addend| = limit`.
///
/// This is what lets the combiner hand a lower-priority behavior only the
/// *remaining* force budget instead of rejecting it outright.
///
/// # Contract
///
/// `|accumulated|` must not exceed `limit` (within a small tolerance); an
/// already-overshot accumulator is a caller bug and fails with
/// [`SteeringError::InvalidTruncationState`].  The sign of `limit` is
/// ignored.
///
/// # Edge cases
///
/// - `|accumulated|` within tolerance of `limit`: no room left, returns zero.
/// - Zero-length `addend`: nothing to scale, returns zero.
///
/// # The quadratic
///
/// Squaring the target length gives `a·w² + b·w + c = 0` with
/// `a = |addend|²`, `b = 2·(accumulated·addend)`, `c = |accumulated|² − limit²`.
/// Inside the budget `c < 0` and `a > 0`, so the discriminant is strictly
/// positive and the `(−b + √disc) / 2a` root is the positive one; the
/// negative-root fallback only matters at the tolerance boundary.
pub fn truncate_addend(accumulated: Vec2, addend: Vec2, limit: f32) -> SteeringResult<Vec2> {
    let limit = limit.abs();
    let acc_len = accumulated.length();
    let delta = acc_len - limit;
    if delta > TOLERANCE {
        return Err(SteeringError::InvalidTruncationState {
            length: acc_len,
            limit,
        });
    }
    if delta >= 0.0 || delta.abs() <= TOLERANCE {
        return Ok(Vec2::ZERO);
    }

    let a = addend.length_sq();
    if a == 0.0 {
        return Ok(Vec2::ZERO);
    }
    let b = 2.0 * accumulated.dot(addend);
    let c = accumulated.length_sq() - limit * limit;

    let disc = b * b - 4.0 * a * c;
    let root = disc.max(0.0).sqrt();
    let w_pos = 0.5 * (-b + root) / a;
    if w_pos > 0.0 {
        return Ok(addend * w_pos);
    }
    let w_neg = 0.5 * (-b - root) / a;
    Ok(addend * w_neg)
}
