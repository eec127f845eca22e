//! Scene state for vecviz
//!
//! This crate owns everything a command handler reads or mutates:
//!
//! - [`EntityRegistry`]: name-addressed storage with `$` / `$-N` shortcuts
//! - [`VectorEntity`] and [`MatrixEntity`]: the two entity kinds
//! - [`RenderAdapter`]: the seam to whatever draws the entities
//! - [`CameraState`] and [`SceneSettings`]: ambient scene state
//! - [`SceneContext`]: the explicit context passed into every handler
//!
//! # Example
//!
//! ```rust,ignore
//! use vecviz_scene::prelude::*;
//!
//! let mut scene = SceneContext::headless();
//! scene.create_vector(VectorEntity::new("up", Vec3::zeros(), Vec3::y()))?;
//! assert_eq!(scene.vectors.get("$").map(|v| v.name()), Some("up"));
//! ```

mod adapter;
mod camera;
mod context;
mod entity;
mod error;
mod matrix;
mod registry;
mod render_mode;
mod settings;
mod vector;

pub use adapter::{LiveRepresentation, RecordingAdapter, RenderAdapter, RenderHandle, RenderPayload};
pub use camera::{CameraState, AUTO_ROTATE_SPEED, DEFAULT_FOV_DEGREES};
pub use context::SceneContext;
pub use entity::{Entity, EntityKind};
pub use error::{SceneError, SceneResult};
pub use matrix::{MatrixEntity, MatrixOptions, BASIS_COLORS};
pub use registry::EntityRegistry;
pub use render_mode::RenderMode;
pub use settings::SceneSettings;
pub use vector::{random_color, VectorEntity, VectorOptions};

pub use vecviz_math::{Mat4, Vec3};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::adapter::{RecordingAdapter, RenderAdapter, RenderHandle};
    pub use crate::context::SceneContext;
    pub use crate::entity::{Entity, EntityKind};
    pub use crate::error::{SceneError, SceneResult};
    pub use crate::matrix::{MatrixEntity, MatrixOptions};
    pub use crate::registry::EntityRegistry;
    pub use crate::render_mode::RenderMode;
    pub use crate::vector::{VectorEntity, VectorOptions};
    pub use vecviz_math::{Mat4, Vec3};
}
