//! Named entity registry
//!
//! Stores entities by name and keeps a creation-ordered name list for
//! shortcut addressing. `$` names the most recently created entity and
//! `$-N` the one created N positions before it.

use std::collections::hash_map::Entry;

use ahash::AHashMap;

use crate::adapter::RenderAdapter;
use crate::entity::Entity;
use crate::error::{SceneError, SceneResult};

/// Registry of named entities of one kind
///
/// The name map and the ordered name list are always updated together.
#[derive(Debug)]
pub struct EntityRegistry<T: Entity> {
    /// Entities stored by name
    entities: AHashMap<String, T>,
    /// Names in creation order (shortcut resolution)
    order: Vec<String>,
}

impl<T: Entity> Default for EntityRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityRegistry<T> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entities: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Get the number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Insert a new entity and materialize it
    ///
    /// Fails with [`SceneError::DuplicateName`] if the name is taken; the
    /// registry is left untouched in that case.
    pub fn create(&mut self, adapter: &mut dyn RenderAdapter, mut entity: T) -> SceneResult<&mut T> {
        let name = entity.name().to_string();
        match self.entities.entry(name) {
            Entry::Occupied(slot) => Err(SceneError::duplicate(T::KIND, slot.key().clone())),
            Entry::Vacant(slot) => {
                log::debug!("create {} '{}'", T::KIND, slot.key());
                entity.materialize(adapter);
                self.order.push(slot.key().clone());
                Ok(slot.insert(entity))
            }
        }
    }

    /// Resolve a name or shortcut to the live entity name
    pub fn resolve(&self, name_or_shortcut: &str) -> Option<&str> {
        if name_or_shortcut.starts_with('$') {
            let index = self.shortcut_index(name_or_shortcut)?;
            return self.order.get(index).map(|s| s.as_str());
        }
        self.entities
            .get_key_value(name_or_shortcut)
            .map(|(name, _)| name.as_str())
    }

    /// Position in the ordered list a shortcut refers to
    ///
    /// `$` is the last entry, `$-N` the entry N before it. Anything else
    /// starting with `$`, or an offset past the first entry, is a miss.
    fn shortcut_index(&self, shortcut: &str) -> Option<usize> {
        let last = self.order.len().checked_sub(1)?;
        let rest = shortcut.strip_prefix('$')?;
        if rest.is_empty() {
            return Some(last);
        }
        let offset: usize = rest.strip_prefix('-')?.trim().parse().ok()?;
        last.checked_sub(offset)
    }

    /// Get an entity by name or shortcut
    pub fn get(&self, name_or_shortcut: &str) -> Option<&T> {
        let name = self.resolve(name_or_shortcut)?;
        self.entities.get(name)
    }

    /// Get mutable access to an entity by name or shortcut
    pub fn get_mut(&mut self, name_or_shortcut: &str) -> Option<&mut T> {
        let name = self.resolve(name_or_shortcut)?.to_string();
        self.entities.get_mut(&name)
    }

    /// Get an entity or fail with [`SceneError::NotFound`]
    pub fn require(&self, name_or_shortcut: &str) -> SceneResult<&T> {
        self.get(name_or_shortcut)
            .ok_or_else(|| SceneError::not_found(T::KIND, name_or_shortcut))
    }

    /// Check if a name or shortcut resolves to a live entity
    pub fn contains(&self, name_or_shortcut: &str) -> bool {
        self.resolve(name_or_shortcut).is_some()
    }

    /// Remove an entity and release its render resources
    ///
    /// Returns the removed entity, or `None` if nothing matched.
    pub fn destroy(&mut self, adapter: &mut dyn RenderAdapter, name_or_shortcut: &str) -> Option<T> {
        let name = self.resolve(name_or_shortcut)?.to_string();
        let mut entity = self.entities.remove(&name)?;
        if let Some(index) = self.order.iter().position(|n| *n == name) {
            self.order.remove(index);
        }
        entity.dematerialize(adapter);
        log::debug!("destroy {} '{}'", T::KIND, name);
        Some(entity)
    }

    /// Destroy `old` and create `entity` in its place
    ///
    /// The new entity takes over the old one's position in the ordered
    /// list, so shortcuts keep pointing at the same slot. Fails before any
    /// mutation if `old` does not exist or if the new name belongs to a
    /// different live entity.
    pub fn replace(
        &mut self,
        adapter: &mut dyn RenderAdapter,
        old: &str,
        mut entity: T,
    ) -> SceneResult<&mut T> {
        let old_name = self
            .resolve(old)
            .ok_or_else(|| SceneError::not_found(T::KIND, old))?
            .to_string();
        let new_name = entity.name().to_string();
        if new_name != old_name && self.entities.contains_key(&new_name) {
            return Err(SceneError::duplicate(T::KIND, new_name));
        }

        if let Some(mut previous) = self.entities.remove(&old_name) {
            previous.dematerialize(adapter);
        }
        match self.order.iter().position(|n| *n == old_name) {
            Some(index) => self.order[index] = new_name.clone(),
            None => self.order.push(new_name.clone()),
        }
        log::debug!("replace {} '{}' -> '{}'", T::KIND, old_name, new_name);

        entity.materialize(adapter);
        match self.entities.entry(new_name) {
            Entry::Vacant(slot) => Ok(slot.insert(entity)),
            Entry::Occupied(mut slot) => {
                slot.insert(entity);
                Ok(slot.into_mut())
            }
        }
    }

    /// Remove every entity
    pub fn clear(&mut self, adapter: &mut dyn RenderAdapter) {
        for name in self.order.drain(..) {
            if let Some(mut entity) = self.entities.remove(&name) {
                entity.dematerialize(adapter);
            }
        }
        self.entities.clear();
    }

    /// Get all names in creation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Get all `(name, entity)` pairs in creation order
    pub fn list(&self) -> impl Iterator<Item = (&str, &T)> {
        self.order
            .iter()
            .filter_map(|name| self.entities.get(name).map(|e| (name.as_str(), e)))
    }

    /// Get all entities in creation order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.list().map(|(_, e)| e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::RecordingAdapter;
    use crate::vector::VectorEntity;
    use vecviz_math::Vec3;

    fn vector(name: &str) -> VectorEntity {
        VectorEntity::new(name, Vec3::zeros(), Vec3::x())
    }

    fn registry_abc(adapter: &mut RecordingAdapter) -> EntityRegistry<VectorEntity> {
        let mut registry = EntityRegistry::new();
        for name in ["A", "B", "C"] {
            registry.create(adapter, vector(name)).unwrap();
        }
        registry
    }

    fn name_of<'a>(registry: &'a EntityRegistry<VectorEntity>, key: &str) -> Option<&'a str> {
        registry.get(key).map(|v| v.name())
    }

    #[test]
    fn test_duplicate_create_fails() {
        let mut adapter = RecordingAdapter::new();
        let mut registry = registry_abc(&mut adapter);

        let err = registry.create(&mut adapter, vector("B")).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateName { ref name, .. } if name == "B"));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names().count(), 3);
        assert_eq!(adapter.live_count(), 3);
    }

    #[test]
    fn test_shortcuts() {
        let mut adapter = RecordingAdapter::new();
        let registry = registry_abc(&mut adapter);

        assert_eq!(name_of(&registry, "$"), Some("C"));
        assert_eq!(name_of(&registry, "$-1"), Some("B"));
        assert_eq!(name_of(&registry, "$-2"), Some("A"));
        assert_eq!(name_of(&registry, "$-3"), None);
        assert_eq!(name_of(&registry, "$1"), None);
        assert_eq!(name_of(&registry, "$-x"), None);
        assert_eq!(name_of(&registry, "B"), Some("B"));
        assert_eq!(name_of(&registry, "D"), None);
    }

    #[test]
    fn test_shortcuts_on_empty_registry() {
        let registry: EntityRegistry<VectorEntity> = EntityRegistry::new();
        assert!(registry.get("$").is_none());
        assert!(registry.get("$-0").is_none());
    }

    #[test]
    fn test_shortcuts_are_positional() {
        let mut adapter = RecordingAdapter::new();
        let mut registry = registry_abc(&mut adapter);

        assert!(registry.destroy(&mut adapter, "B").is_some());
        registry.create(&mut adapter, vector("D")).unwrap();

        assert_eq!(name_of(&registry, "$"), Some("D"));
        assert_eq!(name_of(&registry, "$-1"), Some("C"));
        assert_eq!(name_of(&registry, "$-2"), Some("A"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut adapter = RecordingAdapter::new();
        let mut registry = registry_abc(&mut adapter);

        assert!(registry.destroy(&mut adapter, "$").is_some());
        assert!(registry.destroy(&mut adapter, "C").is_none());
        assert!(registry.destroy(&mut adapter, "nope").is_none());
        assert_eq!(registry.len(), 2);
        assert_eq!(adapter.live_count(), 2);
        assert_eq!(adapter.dematerialized(), 1);
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut adapter = RecordingAdapter::new();
        let mut registry = registry_abc(&mut adapter);

        registry.replace(&mut adapter, "A", vector("first")).unwrap();
        assert!(registry.get("A").is_none());
        assert_eq!(name_of(&registry, "$-2"), Some("first"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["first", "B", "C"]);
        assert_eq!(adapter.live_count(), 3);
    }

    #[test]
    fn test_replace_rejects_taken_name() {
        let mut adapter = RecordingAdapter::new();
        let mut registry = registry_abc(&mut adapter);

        let err = registry.replace(&mut adapter, "A", vector("C")).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateName { .. }));
        assert!(registry.contains("A"));
        assert_eq!(registry.len(), 3);

        let err = registry.replace(&mut adapter, "Z", vector("Y")).unwrap_err();
        assert!(matches!(err, SceneError::NotFound { .. }));
    }

    #[test]
    fn test_clear() {
        let mut adapter = RecordingAdapter::new();
        let mut registry = registry_abc(&mut adapter);
        registry.clear(&mut adapter);
        assert!(registry.is_empty());
        assert_eq!(registry.names().count(), 0);
        assert_eq!(adapter.live_count(), 0);
    }
}
