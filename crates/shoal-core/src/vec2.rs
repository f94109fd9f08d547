//! 2D vector algebra in screen coordinates (y grows downward).
//!
//! `Vec2` is an immutable-by-convention value type: every operation returns a
//! new vector.  The only fallible operations are `normalize` and
//! `scale_to_length`, which reject vectors shorter than [`EPSILON`] — a
//! direction cannot be recovered from a near-zero vector, so callers either
//! check `length()` first or handle the error.

use crate::{CoreError, CoreResult};

/// Below this length a vector is considered directionless.
pub const EPSILON: f32 = 1e-5;

/// A 2D vector / point in screen space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// `true` if this vector is too short to carry a direction.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.length() < EPSILON
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`CoreError::DegenerateVector`] when shorter than
    /// [`EPSILON`].
    pub fn normalize(self) -> CoreResult<Vec2> {
        let len = self.length();
        if len < EPSILON {
            return Err(CoreError::DegenerateVector { length: len });
        }
        Ok(Vec2::new(self.x / len, self.y / len))
    }

    /// Rescale to exactly length `target` (sign of `target` is ignored).
    ///
    /// Fails on near-zero vectors, same as [`normalize`][Self::normalize].
    pub fn scale_to_length(self, target: f32) -> CoreResult<Vec2> {
        Ok(self.normalize()? * target.abs())
    }

    /// Shorten to `max_len` if longer; unchanged otherwise.
    ///
    /// Total: a near-zero vector is already within any non-negative bound.
    pub fn clamp_length(self, max_len: f32) -> Vec2 {
        let len = self.length();
        if len > max_len && len >= EPSILON {
            self * (max_len / len)
        } else {
            self
        }
    }

    /// Rotate by `degrees`.
    ///
    /// Uses the standard rotation matrix, which in the y-down screen frame
    /// turns positive angles clockwise on screen — the usual sprite-engine
    /// convention.  Tests pin it down.
    pub fn rotate_deg(self, degrees: f32) -> Vec2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Scalar interpolation helpers ──────────────────────────────────────────────

/// Linear interpolation: `a` at `f = 0`, `b` at `f = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, f: f32) -> f32 {
    a + (b - a) * f
}

/// Smoothstep easing `3f² − 2f³` with the input clamped to `[0, 1]`.
///
/// Zero first derivative at both endpoints, so speed transitions start and
/// finish without a visible jerk.
#[inline]
pub fn smoothstep(frac: f32) -> f32 {
    let f = frac.clamp(0.0, 1.0);
    3.0 * f * f - 2.0 * f * f * f
}
