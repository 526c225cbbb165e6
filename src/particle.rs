//! Particle data model.
//!
//! A [`Particle`] is one simulated point sampled from a logo bitmap. The
//! simulation mutates `position` and `velocity` in place every frame;
//! `origin`, `color` and `size` are fixed at creation. [`ParticleInstance`]
//! is the GPU-side mirror uploaded to the instance buffer each frame.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

/// One simulated point of the logo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current location. `z` carries a small synthetic depth offset for a
    /// mild parallax look.
    pub position: Vec3,
    /// Current drift speed, mutated every physics step.
    pub velocity: Vec3,
    /// Resting anchor position. Never changes after creation; `origin.z` is
    /// always 0 so the field settles into a flat plane.
    pub origin: Vec3,
    /// RGBA sampled from the source pixel, channels normalized to [0, 1].
    pub color: Vec4,
    /// Radius hint in pixels, randomized once at creation.
    pub size: f32,
}

impl Particle {
    /// Create a particle resting at `anchor` (canvas pixel coordinates),
    /// displaced only by the initial depth jitter.
    pub fn at_rest(anchor: Vec2, depth: f32, color: Vec4, size: f32) -> Self {
        Self {
            position: Vec3::new(anchor.x, anchor.y, depth),
            velocity: Vec3::ZERO,
            origin: Vec3::new(anchor.x, anchor.y, 0.0),
            color,
            size,
        }
    }

    /// GPU representation for the instance buffer.
    pub fn instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            size: self.size,
            color: self.color.to_array(),
        }
    }
}

/// Per-instance vertex data, matching the layout the render pipeline
/// declares: position at offset 0, size at 12, color at 16.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

impl ParticleInstance {
    /// Buffer stride in bytes.
    pub const STRIDE: u64 = std::mem::size_of::<ParticleInstance>() as u64;
}
