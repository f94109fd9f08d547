//! Tank edges: wrap-around or turn-back.

use shoal_core::{SimRng, Vec2};

/// The simulation area, plus the slack band the turn policy allows beyond it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TankBounds {
    pub width: f32,
    pub height: f32,
    /// How far past an edge a fish may drift before the turn policy flips
    /// its velocity.
    pub margin: f32,
}

impl TankBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margin: 100.0,
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// A uniform random point inside the area (initial placement).
    pub fn random_point(&self, rng: &mut SimRng) -> Vec2 {
        Vec2::new(
            rng.gen_range(0.0..=self.width),
            rng.gen_range(0.0..=self.height),
        )
    }
}

/// What happens when a fish reaches the edge of the tank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryPolicy {
    /// Teleport to the opposite edge once fully past a boundary, offset by
    /// half the fish's footprint so it glides in rather than popping in.
    /// Velocity is untouched.
    #[default]
    Wrap,
    /// Negate the offending velocity component once past the margin.  Each
    /// axis is handled independently.
    Turn,
}

impl BoundaryPolicy {
    /// Resolve `pos`/`vel` against the tank edges in place.
    pub fn resolve(self, bounds: &TankBounds, pos: &mut Vec2, vel: &mut Vec2, half_extent: Vec2) {
        match self {
            BoundaryPolicy::Wrap => {
                let (hw, hh) = (half_extent.x, half_extent.y);
                if pos.x < -hw {
                    pos.x = bounds.width + hw;
                } else if pos.x > bounds.width + hw {
                    pos.x = -hw;
                }
                if pos.y < -hh {
                    pos.y = bounds.height + hh;
                } else if pos.y > bounds.height + hh {
                    pos.y = -hh;
                }
            }
            BoundaryPolicy::Turn => {
                let m = bounds.margin;
                if !(-m..=bounds.width + m).contains(&pos.x) {
                    vel.x = -vel.x;
                }
                if !(-m..=bounds.height + m).contains(&pos.y) {
                    vel.y = -vel.y;
                }
            }
        }
    }
}
