//! Per-frame particle physics.
//!
//! Three forces, fixed constants, one integration per display refresh:
//! a spring pulling each particle back to its origin, a repulsion pushing
//! particles away from the cursor inside a fixed radius, and friction as the
//! sole damping mechanism. The timestep is one frame; velocities are never
//! scaled by wall-clock delta time.

use glam::Vec2;

use crate::input::PointerState;
use crate::particle::Particle;

/// Spring strength pulling a particle toward its origin.
pub const ATTRACTION: f32 = 0.06;

/// Cursor repulsion strength.
pub const MOUSE_REPEL: f32 = 4.0;

/// Cursor interaction radius in canvas pixels. Repulsion falls off linearly
/// from full strength at the cursor to zero at this distance.
pub const MOUSE_RADIUS: f32 = 120.0;

/// Velocity retained each frame, on all three axes. There is no terminal
/// velocity clamp; friction alone bounds the speed.
pub const FRICTION: f32 = 0.92;

/// Depth forces run at half strength so the z-jitter stays subtle.
const Z_DAMP: f32 = 0.5;

/// Keeps the repulsion direction finite when a particle sits exactly under
/// the cursor.
const REPEL_EPSILON: f32 = 0.1;

/// Advance every particle by one frame.
pub fn step(particles: &mut [Particle], pointer: &PointerState) {
    let cursor = pointer.is_over().then(|| pointer.position());

    for p in particles.iter_mut() {
        let pull = (p.origin - p.position) * ATTRACTION;
        p.velocity.x += pull.x;
        p.velocity.y += pull.y;
        p.velocity.z += pull.z * Z_DAMP;

        if let Some(cursor) = cursor {
            repel(p, cursor);
        }

        p.velocity *= FRICTION;
        p.position += p.velocity;
    }
}

/// Push `p` away from the cursor if it sits inside the interaction radius.
/// The force is 1 at the cursor and 0 at the radius boundary.
fn repel(p: &mut Particle, cursor: Vec2) {
    let d = Vec2::new(p.position.x, p.position.y) - cursor;
    let dist_sq = d.length_squared();
    if dist_sq >= MOUSE_RADIUS * MOUSE_RADIUS {
        return;
    }

    let dist = dist_sq.sqrt();
    let force = (MOUSE_RADIUS - dist) / MOUSE_RADIUS;
    let push = d / (dist + REPEL_EPSILON) * force * MOUSE_REPEL;

    p.velocity.x += push.x;
    p.velocity.y += push.y;
    p.velocity.z += force * MOUSE_REPEL * Z_DAMP;
}
