//! Command implementations
//!
//! This module contains all built-in command implementations organized by category.

pub mod camera;
pub mod matrix_ops;
pub mod matrix_props;
pub mod meta;
pub mod scalar_ops;
pub mod scene;
pub mod settings;
pub mod vector_ops;
pub mod vector_props;

use vecviz_math::{degrees_to_radians, Mat4, Vec3};
use vecviz_scene::{Entity, EntityKind, MatrixEntity, SceneContext, SceneError, VectorEntity, VectorOptions};

use crate::args::{CommandArgs, Value};
use crate::command::{CommandContext, CommandTable};
use crate::error::{CmdError, CmdResult};

/// Register all built-in commands with the table
pub fn register_all(table: &mut CommandTable) -> CmdResult<()> {
    // History, help, listing
    meta::register(table)?;

    // Vector math producing new vectors
    vector_ops::register(table)?;
    vector_props::register(table)?;

    // Vector math producing numbers
    scalar_ops::register(table)?;

    matrix_ops::register(table)?;
    matrix_props::register(table)?;

    // Entity creation, listing, lifecycle
    scene::register(table)?;

    camera::register(table)?;
    settings::register(table)?;
    Ok(())
}

/// Copy of the vector named by argument `key`
pub(crate) fn require_vector(
    ctx: &CommandContext<'_>,
    args: &CommandArgs,
    key: &str,
) -> CmdResult<VectorEntity> {
    let name = args.require_str(key)?;
    Ok(ctx.scene().vectors.require(name)?.clone())
}

/// Copy of the matrix named by argument `key`
pub(crate) fn require_matrix(
    ctx: &CommandContext<'_>,
    args: &CommandArgs,
    key: &str,
) -> CmdResult<MatrixEntity> {
    let name = args.require_str(key)?;
    Ok(ctx.scene().matrices.require(name)?.clone())
}

/// Create a vector under the next `Result<N>` name and return the name
pub(crate) fn create_result_vector(
    ctx: &mut CommandContext<'_>,
    start: Vec3,
    end: Vec3,
    opts: VectorOptions,
) -> CmdResult<Value> {
    let scene = ctx.scene_mut();
    let name = scene.next_result_name();
    scene.create_vector(VectorEntity::with_options(name.clone(), start, end, opts))?;
    scene.request_menu_refresh();
    Ok(Value::String(name))
}

/// Create several vectors, or none of them
///
/// Every name is checked against the scene and the batch before the first
/// one is created. Returns the names in order.
pub(crate) fn create_vectors(scene: &mut SceneContext, vectors: Vec<VectorEntity>) -> CmdResult<Value> {
    for (i, vector) in vectors.iter().enumerate() {
        let name = vector.name();
        if scene.vectors.contains(name) || vectors[..i].iter().any(|v| v.name() == name) {
            return Err(SceneError::duplicate(EntityKind::Vector, name).into());
        }
    }
    let mut names = Vec::with_capacity(vectors.len());
    for vector in vectors {
        names.push(Value::String(scene.create_vector(vector)?.name().to_string()));
    }
    if !names.is_empty() {
        scene.request_menu_refresh();
    }
    Ok(Value::List(names))
}

/// Create one vector per `(start, end, options)` under consecutive
/// `Result<N>` names, or none of them
pub(crate) fn create_result_vectors(
    ctx: &mut CommandContext<'_>,
    parts: Vec<(Vec3, Vec3, VectorOptions)>,
) -> CmdResult<Value> {
    let scene = ctx.scene_mut();
    let vectors = parts
        .into_iter()
        .map(|(start, end, opts)| VectorEntity::with_options(scene.next_result_name(), start, end, opts))
        .collect();
    create_vectors(scene, vectors)
}

/// Create a matrix under the next `Result<N>` name and return the name
pub(crate) fn create_result_matrix(ctx: &mut CommandContext<'_>, matrix: Mat4) -> CmdResult<Value> {
    let scene = ctx.scene_mut();
    let name = scene.next_result_name();
    scene.create_matrix(MatrixEntity::new(name.clone(), matrix))?;
    scene.request_menu_refresh();
    Ok(Value::String(name))
}

/// Optional `color` argument as a `0xRRGGBB` value
pub(crate) fn color_argument(args: &CommandArgs) -> CmdResult<Option<u32>> {
    args.optional_i64("color")?
        .map(|c| {
            u32::try_from(c)
                .ok()
                .filter(|rgb| *rgb <= 0xFF_FFFF)
                .ok_or_else(|| CmdError::invalid_arg("color", format!("{c} is not a 0xRRGGBB color")))
        })
        .transpose()
}

/// `angle` in radians, converting when `degrees_key` is set
pub(crate) fn angle_argument(args: &CommandArgs, degrees_key: &str) -> CmdResult<f64> {
    let angle = args.require_f64("angle")?;
    if args.optional_bool(degrees_key)?.unwrap_or(false) {
        Ok(degrees_to_radians(angle))
    } else {
        Ok(angle)
    }
}
