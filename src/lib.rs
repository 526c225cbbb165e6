//! # Lume
//!
//! Interactive particle rendering of a logo bitmap.
//!
//! Lume samples the opaque pixels of a bitmap into colored point particles,
//! drifts them into a resting formation with simple spring physics, and
//! scatters them away from the mouse cursor. Everything renders as one
//! instanced point-sprite draw per frame.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lume::LogoWidget;
//!
//! fn main() -> Result<(), lume::WidgetError> {
//!     env_logger::init();
//!     LogoWidget::new("assets/logo.png").run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! Each sufficiently opaque pixel of the (scaled, centered) bitmap becomes
//! one [`Particle`] anchored at that pixel's canvas coordinate, with the
//! pixel's color, a randomized radius hint, and a small randomized depth
//! offset for parallax. The particle count is fixed once the field is built.
//!
//! ### Physics
//!
//! Every frame, each particle is pulled toward its origin by a spring,
//! pushed away from the cursor inside a fixed radius with linear falloff,
//! and damped by friction. See [`physics`] for the constants.
//!
//! ### Rendering
//!
//! The whole field draws in a single instanced call: a quad per particle,
//! masked to a disc with a soft quadratic alpha falloff, under an
//! orthographic pixel-space projection.
//!
//! ## Failure Model
//!
//! Initialization is the only thing that can fail: a missing GPU adapter, a
//! broken shader, or an unreadable bitmap aborts [`LogoWidget::run`] with a
//! [`WidgetError`]. An empty or fully transparent bitmap is not an error;
//! the widget just animates nothing.

pub mod camera;
pub mod error;
pub mod field;
pub mod gpu;
pub mod input;
pub mod particle;
pub mod physics;
pub mod shader;
pub mod time;
mod widget;

pub use error::{BitmapError, GpuError, WidgetError};
pub use field::{build_field, build_field_with_rng, FieldLayout};
pub use glam::{Vec2, Vec3, Vec4};
pub use input::PointerState;
pub use particle::{Particle, ParticleInstance};
pub use widget::{LogoWidget, SURFACE_HEIGHT, SURFACE_WIDTH};
