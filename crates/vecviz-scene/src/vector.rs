//! Vector entities

use vecviz_math::{lerp, Vec3};

use crate::adapter::{RenderAdapter, RenderHandle, RenderPayload};
use crate::entity::{Entity, EntityKind};
use crate::render_mode::RenderMode;

/// Random 24-bit RGB color
pub fn random_color() -> u32 {
    lerp(0.0, f64::from(0x00ff_ffff_u32), rand::random_range(0.0..1.0)) as u32
}

/// Optional display fields for a new vector
///
/// Anything left as `None` takes the vector default: random color,
/// [`RenderMode::Vector`], no text, visible, unit scale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorOptions {
    pub color: Option<u32>,
    pub render_mode: Option<RenderMode>,
    pub render_text: Option<bool>,
    pub text_to_render: Option<String>,
    pub visible: Option<bool>,
    pub scale: Option<Vec3>,
    pub basis_a: Option<String>,
    pub basis_b: Option<String>,
}

impl VectorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = Some(mode);
        self
    }

    /// Turn on the label, optionally with custom text
    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.render_text = Some(true);
        self.text_to_render = text;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// A named directed segment from `start` to `end`
#[derive(Debug, Clone, PartialEq)]
pub struct VectorEntity {
    name: String,
    pub start: Vec3,
    pub end: Vec3,
    /// 0xRRGGBB
    pub color: u32,
    pub render_mode: RenderMode,
    pub visible: bool,
    pub render_text: bool,
    /// Label text; defaults to the name
    pub text_to_render: String,
    pub scale: Vec3,
    /// Vectors the angle arc is drawn between (lookup only, not owned)
    pub basis_a: Option<String>,
    pub basis_b: Option<String>,
    handle: Option<RenderHandle>,
}

impl VectorEntity {
    /// Create a vector with default display options
    pub fn new(name: impl Into<String>, start: Vec3, end: Vec3) -> Self {
        Self::with_options(name, start, end, VectorOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        start: Vec3,
        end: Vec3,
        opts: VectorOptions,
    ) -> Self {
        let name = name.into();
        let text_to_render = opts
            .text_to_render
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| name.clone());
        Self {
            name,
            start,
            end,
            color: opts.color.unwrap_or_else(random_color),
            render_mode: opts.render_mode.unwrap_or_default(),
            visible: opts.visible.unwrap_or(true),
            render_text: opts.render_text.unwrap_or(false),
            text_to_render,
            scale: opts.scale.unwrap_or_else(|| Vec3::new(1.0, 1.0, 1.0)),
            basis_a: opts.basis_a,
            basis_b: opts.basis_b,
            handle: None,
        }
    }

    /// Origin-anchored vector of the given length along `direction`
    ///
    /// A zero direction yields a zero-length vector.
    pub fn from_direction(
        name: impl Into<String>,
        direction: &Vec3,
        magnitude: f64,
        opts: VectorOptions,
    ) -> Self {
        let end = direction
            .try_normalize(f64::EPSILON)
            .map(|d| d * magnitude)
            .unwrap_or_else(Vec3::zeros);
        Self::with_options(name, Vec3::zeros(), end, opts)
    }

    /// Options that reproduce this vector's display state
    pub fn options(&self) -> VectorOptions {
        VectorOptions {
            color: Some(self.color),
            render_mode: Some(self.render_mode),
            render_text: Some(self.render_text),
            text_to_render: Some(self.text_to_render.clone()),
            visible: Some(self.visible),
            scale: Some(self.scale),
            basis_a: self.basis_a.clone(),
            basis_b: self.basis_b.clone(),
        }
    }

    /// Options carried into derived vectors: render mode and scale only
    pub fn derived_options(&self) -> VectorOptions {
        VectorOptions {
            render_mode: Some(self.render_mode),
            scale: Some(self.scale),
            ..Default::default()
        }
    }

    /// `end - start`
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    pub fn magnitude(&self) -> f64 {
        self.direction().norm()
    }

    /// Unit direction, or zero for a degenerate vector
    pub fn normal(&self) -> Vec3 {
        self.direction()
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vec3::zeros)
    }

    /// Whether a render mode places a model at the start point
    pub fn is_model(&self) -> bool {
        self.render_mode.is_model()
    }

    /// Point used as "where the vector is" for measurements
    pub fn anchor(&self) -> Vec3 {
        if self.is_model() {
            self.start
        } else {
            self.end
        }
    }

    pub fn handle(&self) -> Option<RenderHandle> {
        self.handle
    }
}

impl Entity for VectorEntity {
    const KIND: EntityKind = EntityKind::Vector;

    fn name(&self) -> &str {
        &self.name
    }

    fn materialize(&mut self, adapter: &mut dyn RenderAdapter) {
        self.dematerialize(adapter);
        let handle = adapter.materialize(RenderPayload::Vector(self));
        self.handle = Some(handle);
    }

    fn dematerialize(&mut self, adapter: &mut dyn RenderAdapter) {
        if let Some(handle) = self.handle.take() {
            adapter.dematerialize(handle);
        }
    }

    fn set_visible(&mut self, adapter: &mut dyn RenderAdapter, visible: bool) {
        self.visible = visible;
        if let Some(handle) = self.handle {
            adapter.set_visible(handle, visible);
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let v = VectorEntity::new("up", Vec3::zeros(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(v.name(), "up");
        assert_eq!(v.text_to_render, "up");
        assert_eq!(v.render_mode, RenderMode::Vector);
        assert!(v.visible);
        assert!(!v.render_text);
        assert!(v.color <= 0x00ff_ffff);
        assert_relative_eq!(v.magnitude(), 2.0);
        assert_relative_eq!(v.normal(), Vec3::y());
    }

    #[test]
    fn test_empty_text_falls_back_to_name() {
        let opts = VectorOptions::new().with_text(Some(String::new()));
        let v = VectorEntity::with_options("a", Vec3::zeros(), Vec3::x(), opts);
        assert_eq!(v.text_to_render, "a");
        assert!(v.render_text);
    }

    #[test]
    fn test_from_direction() {
        let v = VectorEntity::from_direction("d", &Vec3::new(3.0, 0.0, 4.0), 10.0, VectorOptions::new());
        assert_relative_eq!(v.end, Vec3::new(6.0, 0.0, 8.0));
        assert_eq!(v.start, Vec3::zeros());
    }

    #[test]
    fn test_anchor_depends_on_render_mode() {
        let mut v = VectorEntity::new("a", Vec3::x(), Vec3::y());
        assert_eq!(v.anchor(), Vec3::y());
        v.render_mode = RenderMode::Box;
        assert_eq!(v.anchor(), Vec3::x());
    }
}
