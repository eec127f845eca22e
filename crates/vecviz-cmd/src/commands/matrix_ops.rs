//! Matrix operations: products, rotations, inverses and basis extraction
//!
//! Each operation leaves its input alone and creates a new entity named
//! `Result<N>`.

use vecviz_math::{
    basis_columns, position, rotation_x, rotation_y, rotation_z, scale_matrix,
    translation_matrix, Mat4,
};
use vecviz_scene::{RenderMode, VectorOptions, BASIS_COLORS};

use crate::args::{ArgDef, ArgType, CommandArgs, Value};
use crate::command::{Command, CommandContext, CommandTable};
use crate::commands::{angle_argument, create_result_matrix, create_result_vector, create_result_vectors, require_matrix};
use crate::error::{CmdError, CmdResult};

/// Register matrix operation commands
pub fn register(table: &mut CommandTable) -> CmdResult<()> {
    table.register(MultiplyMatricesCommand)?;
    for axis in [Axis::Left, Axis::Up, Axis::Forward] {
        table.register(RotateMatrixCommand(axis))?;
    }
    table.register(TranslateMatrixCommand)?;
    table.register(ScaleMatrixCommand)?;
    table.register(InvertMatrixCommand)?;
    table.register(TransposeMatrixCommand)?;
    table.register(ExtractPositionVectorFromMatrixCommand)?;
    table.register(ExtractVectorsFromMatrixCommand)?;
    Ok(())
}

static ONE_MATRIX: &[ArgDef] = &[ArgDef::required("matrix", ArgType::String)];

// ============================================================================
// multiplyMatrices command
// ============================================================================

struct MultiplyMatricesCommand;

impl Command for MultiplyMatricesCommand {
    fn name(&self) -> &str {
        "multiplyMatrices"
    }

    fn description(&self) -> &str {
        "Creates a new matrix which represents the product of the two input matrices."
    }

    fn example_usage(&self) -> &str {
        "multiplyMatrices(\"matrixNameA\", \"matrixNameB\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("matrixA", ArgType::String),
            ArgDef::required("matrixB", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let a = require_matrix(ctx, args, "matrixA")?;
        let b = require_matrix(ctx, args, "matrixB")?;
        create_result_matrix(ctx, a.matrix * b.matrix)
    }
}

// ============================================================================
// rotateMatrixAbout{Left,Up,Forward}Axis commands
// ============================================================================

/// Local axis a rotation turns about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// X
    Left,
    /// Y
    Up,
    /// Z
    Forward,
}

impl Axis {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Axis::Left => "Left",
            Axis::Up => "Up",
            Axis::Forward => "Forward",
        }
    }

    pub(crate) fn rotation(self, angle_in_radians: f64) -> Mat4 {
        match self {
            Axis::Left => rotation_x(angle_in_radians),
            Axis::Up => rotation_y(angle_in_radians),
            Axis::Forward => rotation_z(angle_in_radians),
        }
    }
}

struct RotateMatrixCommand(Axis);

impl Command for RotateMatrixCommand {
    fn name(&self) -> &str {
        match self.0 {
            Axis::Left => "rotateMatrixAboutLeftAxis",
            Axis::Up => "rotateMatrixAboutUpAxis",
            Axis::Forward => "rotateMatrixAboutForwardAxis",
        }
    }

    fn description(&self) -> &str {
        match self.0 {
            Axis::Left => "Creates a new matrix which represents the rotation of the input matrix about the Left axis by some angle.",
            Axis::Up => "Creates a new matrix which represents the rotation of the input matrix about the Up axis by some angle.",
            Axis::Forward => "Creates a new matrix which represents the rotation of the input matrix about the Forward axis by some angle.",
        }
    }

    fn example_usage(&self) -> &str {
        match self.0 {
            Axis::Left => "rotateMatrixAboutLeftAxis(\"matrix\", angleIsInDegrees, angle)",
            Axis::Up => "rotateMatrixAboutUpAxis(\"matrix\", angleIsInDegrees, angle)",
            Axis::Forward => "rotateMatrixAboutForwardAxis(\"matrix\", angleIsInDegrees, angle)",
        }
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("matrix", ArgType::String),
            ArgDef::required("angleIsInDegrees", ArgType::Bool),
            ArgDef::required("angle", ArgType::Float),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let input = require_matrix(ctx, args, "matrix")?;
        let angle = angle_argument(args, "angleIsInDegrees")?;
        log::debug!("rotating '{}' about {} by {} rad", args.require_str("matrix")?, self.0.label(), angle);
        create_result_matrix(ctx, input.matrix * self.0.rotation(angle))
    }
}

// ============================================================================
// translateMatrix / scaleMatrix commands
// ============================================================================

struct TranslateMatrixCommand;

impl Command for TranslateMatrixCommand {
    fn name(&self) -> &str {
        "translateMatrix"
    }

    fn description(&self) -> &str {
        "Creates a new matrix which represents the translation of the input matrix by some input 3d vector."
    }

    fn example_usage(&self) -> &str {
        "translateMatrix(\"matrix\", [x,y,z])"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("matrix", ArgType::String),
            ArgDef::required("displacementVector", ArgType::Vec3),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let input = require_matrix(ctx, args, "matrix")?;
        let displacement = args.require_vec3("displacementVector")?;
        create_result_matrix(ctx, input.matrix * translation_matrix(&displacement))
    }
}

struct ScaleMatrixCommand;

impl Command for ScaleMatrixCommand {
    fn name(&self) -> &str {
        "scaleMatrix"
    }

    fn description(&self) -> &str {
        "Creates a new matrix which represents the scaling of the input matrix by some input 3d vector."
    }

    fn example_usage(&self) -> &str {
        "scaleMatrix(\"matrix\", [x,y,z])"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("matrix", ArgType::String),
            ArgDef::required("scaleVector", ArgType::Vec3),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let input = require_matrix(ctx, args, "matrix")?;
        let scale = args.require_vec3("scaleVector")?;
        create_result_matrix(ctx, input.matrix * scale_matrix(&scale))
    }
}

// ============================================================================
// invertMatrix / transposeMatrix commands
// ============================================================================

struct InvertMatrixCommand;

impl Command for InvertMatrixCommand {
    fn name(&self) -> &str {
        "invertMatrix"
    }

    fn description(&self) -> &str {
        "Creates a new matrix which represents the inverse of the input matrix."
    }

    fn example_usage(&self) -> &str {
        "invertMatrix(\"matrix\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_MATRIX
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let input = require_matrix(ctx, args, "matrix")?;
        let inverse = input
            .matrix
            .try_inverse()
            .ok_or_else(|| CmdError::invalid_arg("matrix", "matrix is singular and has no inverse"))?;
        create_result_matrix(ctx, inverse)
    }
}

struct TransposeMatrixCommand;

impl Command for TransposeMatrixCommand {
    fn name(&self) -> &str {
        "transposeMatrix"
    }

    fn description(&self) -> &str {
        "Creates a new matrix which represents the transpose of the input matrix."
    }

    fn example_usage(&self) -> &str {
        "transposeMatrix(\"matrix\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_MATRIX
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let input = require_matrix(ctx, args, "matrix")?;
        create_result_matrix(ctx, input.matrix.transpose())
    }
}

// ============================================================================
// extractPositionVectorFromMatrix / extractVectorsFromMatrix commands
// ============================================================================

struct ExtractPositionVectorFromMatrixCommand;

impl Command for ExtractPositionVectorFromMatrixCommand {
    fn name(&self) -> &str {
        "extractPositionVectorFromMatrix"
    }

    fn description(&self) -> &str {
        "Creates a vector at the position encoded within the input matrix."
    }

    fn example_usage(&self) -> &str {
        "extractPositionVectorFromMatrix(\"matrix\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_MATRIX
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let input = require_matrix(ctx, args, "matrix")?;
        let start = position(&input.matrix);
        let [_, _, forward] = basis_columns(&input.matrix);
        let look = forward.try_normalize(0.0).unwrap_or(forward);
        create_result_vector(
            ctx,
            start,
            start + look,
            VectorOptions::new().with_render_mode(RenderMode::Waypoint),
        )
    }
}

struct ExtractVectorsFromMatrixCommand;

impl Command for ExtractVectorsFromMatrixCommand {
    fn name(&self) -> &str {
        "extractVectorsFromMatrix"
    }

    fn description(&self) -> &str {
        "Creates 3 vectors representing the input matrix's up, left, and forward vectors.  The resulting vectors will be positioned based on the position encoded within the input matrix."
    }

    fn example_usage(&self) -> &str {
        "extractVectorsFromMatrix(\"matrix\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_MATRIX
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let input = require_matrix(ctx, args, "matrix")?;
        let start = position(&input.matrix);
        let parts = basis_columns(&input.matrix)
            .iter()
            .zip(BASIS_COLORS)
            .map(|(column, color)| (start, start + column, VectorOptions::new().with_color(color)))
            .collect();
        create_result_vectors(ctx, parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;
    use vecviz_math::Vec3;

    use crate::executor::CommandEngine;

    fn engine_with_translation() -> CommandEngine {
        let engine = CommandEngine::new().unwrap();
        engine
            .execute(
                "createTranslationMatrix",
                CommandArgs::new()
                    .with("name", "T")
                    .with("translationVector", Vec3::new(1.0, 2.0, 3.0)),
            )
            .unwrap();
        engine
    }

    fn matrix(engine: &CommandEngine, name: &str) -> Mat4 {
        engine.scene().matrices.get(name).unwrap().matrix
    }

    #[test]
    fn test_multiply_and_transpose() {
        let engine = engine_with_translation();
        let product = engine
            .execute(
                "multiplyMatrices",
                CommandArgs::new().with("matrixA", "T").with("matrixB", "T"),
            )
            .unwrap();
        assert_eq!(product.as_str(), Some("Result0"));
        assert_eq!(position(&matrix(&engine, "Result0")), Vec3::new(2.0, 4.0, 6.0));

        engine
            .execute("transposeMatrix", CommandArgs::new().with("matrix", "T"))
            .unwrap();
        let transposed = matrix(&engine, "Result1");
        assert_eq!(transposed[(3, 0)], 1.0);
        assert_eq!(transposed[(0, 3)], 0.0);
    }

    #[test]
    fn test_invert() {
        let engine = engine_with_translation();
        engine
            .execute("invertMatrix", CommandArgs::new().with("matrix", "T"))
            .unwrap();
        assert_eq!(position(&matrix(&engine, "Result0")), Vec3::new(-1.0, -2.0, -3.0));

        engine
            .execute(
                "createScaleMatrix",
                CommandArgs::new().with("name", "flat").with("scaleVector", Vec3::new(1.0, 0.0, 1.0)),
            )
            .unwrap();
        let history = engine.history().len();
        assert!(matches!(
            engine.execute("invertMatrix", CommandArgs::new().with("matrix", "flat")),
            Err(CmdError::InvalidArgument { .. })
        ));
        assert_eq!(engine.history().len(), history);
    }

    #[test]
    fn test_rotate_about_up_in_degrees() {
        let engine = engine_with_translation();
        engine
            .execute(
                "rotateMatrixAboutUpAxis",
                CommandArgs::new()
                    .with("matrix", "T")
                    .with("angleIsInDegrees", true)
                    .with("angle", 90.0),
            )
            .unwrap();
        let rotated = matrix(&engine, "Result0");
        let expected = translation_matrix(&Vec3::new(1.0, 2.0, 3.0)) * rotation_y(FRAC_PI_2);
        assert_relative_eq!(rotated, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_extract_vectors() {
        let engine = engine_with_translation();
        let names = engine
            .execute("extractVectorsFromMatrix", CommandArgs::new().with("matrix", "T"))
            .unwrap();
        assert_eq!(names.as_list().map(<[Value]>::len), Some(3));

        let scene = engine.scene();
        let up = scene.vectors.get("Result1").unwrap();
        assert_eq!(up.start, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(up.end, Vec3::new(1.0, 3.0, 3.0));
        assert_eq!(up.color, 0x00ff00);
    }

    #[test]
    fn test_extract_vectors_name_clash_creates_nothing() {
        let engine = CommandEngine::new().unwrap();
        engine
            .execute(
                "createVector2",
                CommandArgs::new()
                    .with("name", "Result1")
                    .with("endPosition", Vec3::new(1.0, 0.0, 0.0)),
            )
            .unwrap();
        engine
            .execute("createIdentityMatrix", CommandArgs::new().with("name", "M"))
            .unwrap();

        let result = engine
            .execute("extractVectorsFromMatrix", CommandArgs::new().with("matrix", "M"))
            .unwrap();
        assert_eq!(
            result.as_str(),
            Some("A vector named \"Result1\" already exists.  Please choose a new name.")
        );
        let names: Vec<String> = engine.scene().vectors.names().map(String::from).collect();
        assert_eq!(names, ["Result1"]);
    }

    #[test]
    fn test_extract_position_is_waypoint() {
        let engine = engine_with_translation();
        engine
            .execute("extractPositionVectorFromMatrix", CommandArgs::new().with("matrix", "T"))
            .unwrap();
        let scene = engine.scene();
        let waypoint = scene.vectors.get("Result0").unwrap();
        assert_eq!(waypoint.render_mode, RenderMode::Waypoint);
        assert_eq!(waypoint.end, Vec3::new(1.0, 2.0, 4.0));
    }
}
