//! Matrix entities

use vecviz_math::{basis_columns, position, Mat4};

use crate::adapter::{RenderAdapter, RenderHandle, RenderPayload};
use crate::entity::{Entity, EntityKind};
use crate::vector::{VectorEntity, VectorOptions};

/// Colors of the left, up and forward basis arrows
pub const BASIS_COLORS: [u32; 3] = [0xff0000, 0x00ff00, 0x0000ff];

const BASIS_SUFFIXES: [&str; 3] = ["x", "y", "z"];

/// Optional display fields for a new matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixOptions {
    pub visible: Option<bool>,
    pub render_text: Option<bool>,
    pub text_to_render: Option<String>,
}

/// A named 4×4 transform, drawn as three basis arrows at its position
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixEntity {
    name: String,
    pub matrix: Mat4,
    pub visible: bool,
    pub render_text: bool,
    pub text_to_render: String,
    handle: Option<RenderHandle>,
    /// Basis arrows; owned by the matrix, rebuilt on every materialize
    basis: Vec<VectorEntity>,
}

impl MatrixEntity {
    pub fn new(name: impl Into<String>, matrix: Mat4) -> Self {
        Self::with_options(name, matrix, MatrixOptions::default())
    }

    pub fn with_options(name: impl Into<String>, matrix: Mat4, opts: MatrixOptions) -> Self {
        let name = name.into();
        let text_to_render = opts
            .text_to_render
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| name.clone());
        Self {
            name,
            matrix,
            visible: opts.visible.unwrap_or(true),
            render_text: opts.render_text.unwrap_or(false),
            text_to_render,
            handle: None,
            basis: Vec::new(),
        }
    }

    /// Options that reproduce this matrix's display state
    pub fn options(&self) -> MatrixOptions {
        MatrixOptions {
            visible: Some(self.visible),
            render_text: Some(self.render_text),
            text_to_render: Some(self.text_to_render.clone()),
        }
    }

    pub fn handle(&self) -> Option<RenderHandle> {
        self.handle
    }

    /// Currently materialized basis arrows (empty when not materialized)
    pub fn basis_arrows(&self) -> &[VectorEntity] {
        &self.basis
    }

    fn build_basis(&self) -> Vec<VectorEntity> {
        let origin = position(&self.matrix);
        basis_columns(&self.matrix)
            .iter()
            .zip(BASIS_COLORS)
            .zip(BASIS_SUFFIXES)
            .map(|((column, color), suffix)| {
                let opts = VectorOptions {
                    color: Some(color),
                    visible: Some(self.visible),
                    ..Default::default()
                };
                VectorEntity::with_options(
                    format!("{}.{}", self.name, suffix),
                    origin,
                    origin + column,
                    opts,
                )
            })
            .collect()
    }
}

impl Entity for MatrixEntity {
    const KIND: EntityKind = EntityKind::Matrix;

    fn name(&self) -> &str {
        &self.name
    }

    fn materialize(&mut self, adapter: &mut dyn RenderAdapter) {
        self.dematerialize(adapter);
        let handle = adapter.materialize(RenderPayload::Matrix(self));
        self.handle = Some(handle);

        let mut basis = self.build_basis();
        for arrow in &mut basis {
            arrow.materialize(adapter);
        }
        self.basis = basis;
    }

    fn dematerialize(&mut self, adapter: &mut dyn RenderAdapter) {
        for mut arrow in self.basis.drain(..) {
            arrow.dematerialize(adapter);
        }
        if let Some(handle) = self.handle.take() {
            adapter.dematerialize(handle);
        }
    }

    fn set_visible(&mut self, adapter: &mut dyn RenderAdapter, visible: bool) {
        self.visible = visible;
        if let Some(handle) = self.handle {
            adapter.set_visible(handle, visible);
        }
        for arrow in &mut self.basis {
            arrow.set_visible(adapter, visible);
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::RecordingAdapter;
    use vecviz_math::{translation_matrix, Vec3};

    #[test]
    fn test_basis_arrows_follow_matrix() {
        let mut adapter = RecordingAdapter::new();
        let mut m = MatrixEntity::new("T", translation_matrix(&Vec3::new(1.0, 2.0, 3.0)));

        m.materialize(&mut adapter);
        assert_eq!(adapter.live_count(), 4);
        let arrows = m.basis_arrows();
        assert_eq!(arrows.len(), 3);
        assert_eq!(arrows[0].start, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(arrows[0].end, Vec3::new(2.0, 2.0, 3.0));
        assert_eq!(arrows[2].color, 0x0000ff);

        m.set_visible(&mut adapter, false);
        assert!(m.basis_arrows().iter().all(|a| !a.visible));
        let h = m.basis_arrows()[1].handle().unwrap();
        assert_eq!(adapter.get(h).map(|r| r.visible), Some(false));

        // redraw replaces the arrows rather than stacking them
        m.materialize(&mut adapter);
        assert_eq!(adapter.live_count(), 4);

        m.dematerialize(&mut adapter);
        assert_eq!(adapter.live_count(), 0);
        assert!(m.basis_arrows().is_empty());
    }
}
