//! Common interface of registry-managed entities

use std::fmt;

use crate::adapter::RenderAdapter;

/// Which registry an entity lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Vector,
    Matrix,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Vector => write!(f, "vector"),
            EntityKind::Matrix => write!(f, "matrix"),
        }
    }
}

/// Trait for everything an [`EntityRegistry`](crate::EntityRegistry) can hold
///
/// The registry drives the render lifecycle: it calls [`Entity::materialize`]
/// when the entity is inserted and [`Entity::dematerialize`] when it is
/// removed. Implementations own whatever render handles they acquire.
pub trait Entity {
    /// Registry kind, used in error messages
    const KIND: EntityKind;

    /// Get the entity name
    fn name(&self) -> &str;

    /// Acquire render-side resources
    fn materialize(&mut self, adapter: &mut dyn RenderAdapter);

    /// Release render-side resources (no-op if none are held)
    fn dematerialize(&mut self, adapter: &mut dyn RenderAdapter);

    /// Show or hide the entity, including anything it owns
    fn set_visible(&mut self, adapter: &mut dyn RenderAdapter, visible: bool);

    /// Whether the entity is currently shown
    fn is_visible(&self) -> bool;
}
