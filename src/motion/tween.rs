//! Eased interpolation primitives.
//!
//! Everything here is polled: the host's frame callback advances a tween by
//! the frame delta and reads the sampled value. Nothing blocks, nothing runs
//! on another thread; suspension between frames *is* the yield point.

use glam::Vec3;

use crate::rig::{JointAngles, JointKey};

/// Symmetric quadratic ease-in-out over [0, 1].
///
/// `ease(0.5) == 0.5` exactly, so the midpoint of a tween is the arithmetic
/// midpoint of its endpoints.
#[inline]
#[must_use]
pub fn ease_in_out_quad(p: f32) -> f32 {
    if p < 0.5 {
        2.0 * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
    }
}

/// Types a [`Tween`] can blend field-wise.
pub trait Interpolatable: Copy {
    #[must_use]
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    #[inline]
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Interpolatable for Vec3 {
    #[inline]
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        *a + (*b - *a) * t
    }
}

impl Interpolatable for JointAngles {
    /// Every joint blends independently.
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        let mut out = *a;
        for key in JointKey::ALL {
            out.set(key, f32::interpolate_linear(&a.get(key), &b.get(key), t));
        }
        out
    }
}

/// An eased interpolation from a start value to a target over a fixed
/// duration (seconds).
///
/// A non-positive duration completes immediately with the target value,
/// never a division by zero. At completion the sampled value is the target
/// *exactly*, with no residual floating drift.
#[derive(Debug, Clone)]
pub struct Tween<T: Interpolatable> {
    start: T,
    target: T,
    duration: f32,
    elapsed: f32,
}

impl<T: Interpolatable> Tween<T> {
    #[must_use]
    pub fn new(start: T, target: T, duration: f32) -> Self {
        Self {
            start,
            target,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Advances by the frame delta and returns the new sample.
    pub fn advance(&mut self, dt: f32) -> T {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.sample()
    }

    /// Linear progress in [0, 1]. Non-decreasing across resumptions.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// The eased sample at the current progress.
    #[must_use]
    pub fn sample(&self) -> T {
        let p = self.progress();
        if p >= 1.0 {
            return self.target;
        }
        T::interpolate_linear(&self.start, &self.target, ease_in_out_quad(p))
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }
}

/// A jump arc: parabolic vertical profile composed with independent,
/// eased horizontal translation.
///
/// `y_offset = 4 * h * p * (1 - p)`: peak height `h` at mid-duration,
/// back to the starting height at completion.
#[derive(Debug, Clone)]
pub struct JumpTween {
    start: Vec3,
    horizontal_target: Vec3,
    height: f32,
    duration: f32,
    elapsed: f32,
}

impl JumpTween {
    #[must_use]
    pub fn new(start: Vec3, height: f32, duration: f32) -> Self {
        Self {
            start,
            horizontal_target: start,
            height,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Adds a horizontal displacement to the arc; `y` of the target is
    /// ignored (the parabola owns the vertical axis).
    #[must_use]
    pub fn with_horizontal_target(mut self, target: Vec3) -> Self {
        self.horizontal_target = target;
        self
    }

    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.sample()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    pub fn sample(&self) -> Vec3 {
        let p = self.progress();
        if p >= 1.0 {
            return Vec3::new(
                self.horizontal_target.x,
                self.start.y,
                self.horizontal_target.z,
            );
        }

        let eased = ease_in_out_quad(p);
        let x = f32::interpolate_linear(&self.start.x, &self.horizontal_target.x, eased);
        let z = f32::interpolate_linear(&self.start.z, &self.horizontal_target.z, eased);
        let y = self.start.y + 4.0 * self.height * p * (1.0 - p);
        Vec3::new(x, y, z)
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let e = ease_in_out_quad(i as f32 / 100.0);
            assert!(e >= last, "ease must be non-decreasing");
            last = e;
        }
    }
}
