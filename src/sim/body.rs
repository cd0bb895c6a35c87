//! Physics body seam
//!
//! The host physics engine owns the ball's rigid body. The gameplay core only
//! reads and writes its position/velocity and applies impulses through this
//! trait.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The subset of a rigid body the gameplay core needs
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, pos: Vec2);
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, vel: Vec2);
    /// Instantaneous change of momentum
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// A point-mass body with no integration of its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
}

impl KinematicBody {
    pub fn new(pos: Vec2, mass: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            mass,
        }
    }

    /// Advance position by the current velocity
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new(Vec2::ZERO, crate::consts::BALL_MASS)
    }
}

impl PhysicsBody for KinematicBody {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        if self.mass > 0.0 {
            self.vel += impulse / self.mass;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_scales_with_mass() {
        let mut body = KinematicBody::new(Vec2::ZERO, 2.0);
        body.apply_impulse(Vec2::new(4.0, 0.0));
        assert_eq!(body.velocity(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_integrate() {
        let mut body = KinematicBody::default();
        body.set_velocity(Vec2::new(1.0, -2.0));
        body.integrate(0.5);
        assert_eq!(body.position(), Vec2::new(0.5, -1.0));
    }
}
