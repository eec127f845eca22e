//! Scene context
//!
//! The single piece of mutable state command handlers work against. It is
//! created once per session and reset in place by `clearScene`.

use std::fmt;

use crate::adapter::{RecordingAdapter, RenderAdapter};
use crate::camera::CameraState;
use crate::entity::Entity;
use crate::error::SceneResult;
use crate::matrix::MatrixEntity;
use crate::registry::EntityRegistry;
use crate::settings::SceneSettings;
use crate::vector::VectorEntity;

/// Shared scene state: both registries, the render adapter, camera and
/// settings, plus the naming counters and the menu refresh flag
pub struct SceneContext {
    pub vectors: EntityRegistry<VectorEntity>,
    pub matrices: EntityRegistry<MatrixEntity>,
    pub camera: CameraState,
    pub settings: SceneSettings,
    adapter: Box<dyn RenderAdapter>,
    /// Suffix of the next `Result<N>` name
    operation_count: u64,
    /// Suffix of the next `Random Vector<N>` name
    random_vector_count: u64,
    needs_full_menu_refresh: bool,
}

impl fmt::Debug for SceneContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneContext")
            .field("vectors", &self.vectors.names().collect::<Vec<_>>())
            .field("matrices", &self.matrices.names().collect::<Vec<_>>())
            .field("camera", &self.camera)
            .field("operation_count", &self.operation_count)
            .field("needs_full_menu_refresh", &self.needs_full_menu_refresh)
            .finish_non_exhaustive()
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::headless()
    }
}

impl SceneContext {
    /// Create a context that renders through `adapter`
    pub fn new(adapter: Box<dyn RenderAdapter>) -> Self {
        Self {
            vectors: EntityRegistry::new(),
            matrices: EntityRegistry::new(),
            camera: CameraState::default(),
            settings: SceneSettings::default(),
            adapter,
            operation_count: 0,
            random_vector_count: 0,
            needs_full_menu_refresh: false,
        }
    }

    /// Create a context backed by a [`RecordingAdapter`]
    pub fn headless() -> Self {
        Self::new(Box::new(RecordingAdapter::new()))
    }

    /// Use the given settings instead of the defaults
    pub fn with_settings(mut self, settings: SceneSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Get mutable access to the render adapter
    pub fn adapter_mut(&mut self) -> &mut dyn RenderAdapter {
        self.adapter.as_mut()
    }

    /// Name for the next operation result (`Result0`, `Result1`, ...)
    pub fn next_result_name(&mut self) -> String {
        let name = format!("Result{}", self.operation_count);
        self.operation_count += 1;
        name
    }

    /// Name for the next random vector (`Random Vector0`, ...)
    pub fn next_random_vector_name(&mut self) -> String {
        let name = format!("Random Vector{}", self.random_vector_count);
        self.random_vector_count += 1;
        name
    }

    /// Signal that the set of entities changed shape
    pub fn request_menu_refresh(&mut self) {
        self.needs_full_menu_refresh = true;
    }

    pub fn needs_menu_refresh(&self) -> bool {
        self.needs_full_menu_refresh
    }

    /// Poll and clear the refresh flag; requests since the last poll
    /// collapse into one
    pub fn take_menu_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_full_menu_refresh)
    }

    pub fn create_vector(&mut self, vector: VectorEntity) -> SceneResult<&mut VectorEntity> {
        self.vectors.create(self.adapter.as_mut(), vector)
    }

    /// Destroy-then-recreate `old` as `vector`, keeping its shortcut slot
    pub fn replace_vector(&mut self, old: &str, vector: VectorEntity) -> SceneResult<&mut VectorEntity> {
        self.vectors.replace(self.adapter.as_mut(), old, vector)
    }

    pub fn destroy_vector(&mut self, name_or_shortcut: &str) -> Option<VectorEntity> {
        self.vectors.destroy(self.adapter.as_mut(), name_or_shortcut)
    }

    /// Show or hide a vector; returns false if it does not exist
    pub fn show_vector(&mut self, name_or_shortcut: &str, visible: bool) -> bool {
        match self.vectors.get_mut(name_or_shortcut) {
            Some(vector) => {
                vector.set_visible(self.adapter.as_mut(), visible);
                true
            }
            None => false,
        }
    }

    pub fn create_matrix(&mut self, matrix: MatrixEntity) -> SceneResult<&mut MatrixEntity> {
        self.matrices.create(self.adapter.as_mut(), matrix)
    }

    /// Destroy-then-recreate `old` as `matrix`, keeping its shortcut slot
    pub fn replace_matrix(&mut self, old: &str, matrix: MatrixEntity) -> SceneResult<&mut MatrixEntity> {
        self.matrices.replace(self.adapter.as_mut(), old, matrix)
    }

    pub fn destroy_matrix(&mut self, name_or_shortcut: &str) -> Option<MatrixEntity> {
        self.matrices.destroy(self.adapter.as_mut(), name_or_shortcut)
    }

    /// Show or hide a matrix and its basis arrows; returns false if it does
    /// not exist
    pub fn show_matrix(&mut self, name_or_shortcut: &str, visible: bool) -> bool {
        match self.matrices.get_mut(name_or_shortcut) {
            Some(matrix) => {
                matrix.set_visible(self.adapter.as_mut(), visible);
                true
            }
            None => false,
        }
    }

    /// Destroy every entity and reset the naming counters
    pub fn clear(&mut self) {
        self.vectors.clear(self.adapter.as_mut());
        self.matrices.clear(self.adapter.as_mut());
        self.operation_count = 0;
        self.random_vector_count = 0;
        self.request_menu_refresh();
    }
}
