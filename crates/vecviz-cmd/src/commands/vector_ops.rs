//! Vector operations: arithmetic on existing vectors producing new ones
//!
//! Every operation except `normalizeVector` creates a new vector named
//! `Result<N>` and returns that name.

use vecviz_math::{
    angle_between, basis_columns, basis_scale, create_axis_from_vector, lerp_vectors,
    radians_to_degrees, transform_point, Vec3,
};
use vecviz_scene::{Entity, RenderMode, VectorEntity, VectorOptions};

use crate::args::{ArgDef, ArgType, CommandArgs, Value};
use crate::command::{Command, CommandContext, CommandTable};
use crate::commands::{create_result_vector, create_result_vectors, require_matrix, require_vector};
use crate::error::{CmdError, CmdResult};

/// Register vector operation commands
pub fn register(table: &mut CommandTable) -> CmdResult<()> {
    table.register(NormalizeVectorCommand)?;
    table.register(AddVectorsCommand)?;
    table.register(SubtractVectorsCommand)?;
    table.register(ScaleVectorCommand)?;
    table.register(CrossProductCommand)?;
    table.register(ProjectVectorCommand)?;
    table.register(ReflectVectorCommand)?;
    table.register(NegateVectorCommand)?;
    table.register(TranslateVectorCommand)?;
    table.register(TranslateVectorToPointCommand)?;
    table.register(MoveVectorCommand)?;
    table.register(LerpVectorCommand)?;
    table.register(CreateAxisFromVectorCommand)?;
    table.register(MultiplyVectorByMatrixCommand)?;
    table.register(DistanceBetweenVectorsCommand)?;
    table.register(AngleBetweenVectorsCommand)?;
    Ok(())
}

static ONE_VECTOR: &[ArgDef] = &[ArgDef::required("vector", ArgType::String)];

static TWO_VECTORS: &[ArgDef] = &[
    ArgDef::required("vectorA", ArgType::String),
    ArgDef::required("vectorB", ArgType::String),
];

// ============================================================================
// normalizeVector command
// ============================================================================

struct NormalizeVectorCommand;

impl Command for NormalizeVectorCommand {
    fn name(&self) -> &str {
        "normalizeVector"
    }

    fn description(&self) -> &str {
        "Forces the input vector's length to be 1 unit in length."
    }

    fn example_usage(&self) -> &str {
        "normalizeVector(\"vectorName\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_VECTOR
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = require_vector(ctx, args, "vector")?;
        let name = vector.name().to_string();
        let normalized = VectorEntity::with_options(
            name.clone(),
            vector.start,
            vector.start + vector.normal(),
            vector.options(),
        );
        ctx.scene_mut().replace_vector(&name, normalized)?;
        Ok(Value::String(name))
    }
}

// ============================================================================
// addVectors / subtractVectors commands
// ============================================================================

struct AddVectorsCommand;

impl Command for AddVectorsCommand {
    fn name(&self) -> &str {
        "addVectors"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the addition of the two input vectors."
    }

    fn example_usage(&self) -> &str {
        "addVectors(\"vectorNameA\", \"vectorNameB\")"
    }

    fn args(&self) -> &[ArgDef] {
        TWO_VECTORS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let a = require_vector(ctx, args, "vectorA")?;
        let b = require_vector(ctx, args, "vectorB")?;
        create_result_vector(ctx, a.start + b.start, a.end + b.end, a.derived_options())
    }
}

struct SubtractVectorsCommand;

impl Command for SubtractVectorsCommand {
    fn name(&self) -> &str {
        "subtractVectors"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the subtraction of the second input vector from the first."
    }

    fn example_usage(&self) -> &str {
        "subtractVectors(\"vectorNameA\", \"vectorNameB\")"
    }

    fn args(&self) -> &[ArgDef] {
        TWO_VECTORS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let a = require_vector(ctx, args, "vectorA")?;
        let b = require_vector(ctx, args, "vectorB")?;
        create_result_vector(ctx, a.start - b.start, a.end - b.end, a.derived_options())
    }
}

// ============================================================================
// scaleVector command
// ============================================================================

struct ScaleVectorCommand;

impl Command for ScaleVectorCommand {
    fn name(&self) -> &str {
        "scaleVector"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the input vector scaled by the scaleFactor."
    }

    fn example_usage(&self) -> &str {
        "scaleVector(\"vectorName\", scaleFactor)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::required("scalar", ArgType::Float),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = require_vector(ctx, args, "vector")?;
        let scalar = args.require_f64("scalar")?;
        let end = vector.start + vector.normal() * (vector.magnitude() * scalar);
        create_result_vector(ctx, vector.start, end, vector.derived_options())
    }
}

// ============================================================================
// crossProduct command
// ============================================================================

struct CrossProductCommand;

impl Command for CrossProductCommand {
    fn name(&self) -> &str {
        "crossProduct"
    }

    fn description(&self) -> &str {
        "Creates a new vector, starting at the origin, which represents the cross product of the two input vectors."
    }

    fn example_usage(&self) -> &str {
        "crossProduct(\"vectorNameA\", \"vectorNameB\")"
    }

    fn args(&self) -> &[ArgDef] {
        TWO_VECTORS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let a = require_vector(ctx, args, "vectorA")?;
        let b = require_vector(ctx, args, "vectorB")?;
        let cross = a.direction().cross(&b.direction());
        create_result_vector(ctx, Vec3::zeros(), cross, a.derived_options())
    }
}

// ============================================================================
// projectVector command
// ============================================================================

struct ProjectVectorCommand;

impl Command for ProjectVectorCommand {
    fn name(&self) -> &str {
        "projectVector"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the projection of the first input vector onto the second input vector."
    }

    fn example_usage(&self) -> &str {
        "projectVector(\"vectorNameA\", \"vectorNameB\")"
    }

    fn args(&self) -> &[ArgDef] {
        TWO_VECTORS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let a = require_vector(ctx, args, "vectorA")?;
        let b = require_vector(ctx, args, "vectorB")?;
        let onto = b.direction();
        let length_squared = onto.norm_squared();
        // Projecting onto a zero vector gives a zero vector
        let projection = if length_squared == 0.0 {
            Vec3::zeros()
        } else {
            onto * (a.direction().dot(&onto) / length_squared)
        };
        create_result_vector(ctx, Vec3::zeros(), projection, a.derived_options())
    }
}

// ============================================================================
// reflectVector command
// ============================================================================

struct ReflectVectorCommand;

impl Command for ReflectVectorCommand {
    fn name(&self) -> &str {
        "reflectVector"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the first input vector being reflected along the second input vector."
    }

    fn example_usage(&self) -> &str {
        "reflectVector(\"vectorName\", \"normalVectorName\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::required("normal", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = require_vector(ctx, args, "vector")?;
        let normal = require_vector(ctx, args, "normal")?.normal();
        let direction = vector.direction();
        let reflected = direction - normal * (2.0 * direction.dot(&normal));
        create_result_vector(ctx, vector.start, reflected, vector.derived_options())
    }
}

// ============================================================================
// negateVector command
// ============================================================================

struct NegateVectorCommand;

impl Command for NegateVectorCommand {
    fn name(&self) -> &str {
        "negateVector"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the negation of the input vector."
    }

    fn example_usage(&self) -> &str {
        "negateVector(\"vectorName\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_VECTOR
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = require_vector(ctx, args, "vector")?;
        create_result_vector(ctx, vector.start, -vector.direction(), vector.derived_options())
    }
}

// ============================================================================
// translateVector / translateVectorToPoint / moveVector commands
// ============================================================================

struct TranslateVectorCommand;

impl Command for TranslateVectorCommand {
    fn name(&self) -> &str {
        "translateVector"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the translation of the input vector to the input (x,y,z) position."
    }

    fn example_usage(&self) -> &str {
        "translateVector(\"vectorName\", x, y, z)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::required("startX", ArgType::Float),
            ArgDef::required("startY", ArgType::Float),
            ArgDef::required("startZ", ArgType::Float),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = require_vector(ctx, args, "vector")?;
        let start = Vec3::new(
            args.require_f64("startX")?,
            args.require_f64("startY")?,
            args.require_f64("startZ")?,
        );
        create_result_vector(ctx, start, start + vector.direction(), vector.derived_options())
    }
}

struct TranslateVectorToPointCommand;

impl Command for TranslateVectorToPointCommand {
    fn name(&self) -> &str {
        "translateVectorToPoint"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the first input vector moved to start where the second input vector starts."
    }

    fn example_usage(&self) -> &str {
        "translateVectorToPoint(\"fromVectorName\", \"toVectorName\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("from", ArgType::String),
            ArgDef::required("to", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let from = require_vector(ctx, args, "from")?;
        let to = require_vector(ctx, args, "to")?;
        create_result_vector(ctx, to.start, to.start + from.direction(), from.derived_options())
    }
}

struct MoveVectorCommand;

impl Command for MoveVectorCommand {
    fn name(&self) -> &str {
        "moveVector"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the translation along the input vector by the number of input units."
    }

    fn example_usage(&self) -> &str {
        "moveVector(\"vectorName\", amountToMoveInUnits)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::required("units", ArgType::Float),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = require_vector(ctx, args, "vector")?;
        let units = args.require_f64("units")?;
        let start = lerp_vectors(&vector.start, &vector.end, units);
        let end = lerp_vectors(&vector.start, &vector.end, units + 1.0);
        create_result_vector(ctx, start, end, vector.derived_options())
    }
}

// ============================================================================
// lerpVector command
// ============================================================================

struct LerpVectorCommand;

impl Command for LerpVectorCommand {
    fn name(&self) -> &str {
        "lerpVector"
    }

    fn description(&self) -> &str {
        "Creates a new vector which represents the linear interpolation between the two input vectors.  Generally the input t value will range between 0 and 1."
    }

    fn example_usage(&self) -> &str {
        "lerpVector(\"vectorNameA\", \"vectorNameB\", t)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vectorA", ArgType::String),
            ArgDef::required("vectorB", ArgType::String),
            ArgDef::required("t", ArgType::Float),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let a = require_vector(ctx, args, "vectorA")?;
        let b = require_vector(ctx, args, "vectorB")?;
        let t = args.require_f64("t")?;
        create_result_vector(
            ctx,
            lerp_vectors(&a.start, &b.start, t),
            lerp_vectors(&a.end, &b.end, t),
            a.derived_options(),
        )
    }
}

// ============================================================================
// createAxisFromVector command
// ============================================================================

struct CreateAxisFromVectorCommand;

impl Command for CreateAxisFromVectorCommand {
    fn name(&self) -> &str {
        "createAxisFromVector"
    }

    fn description(&self) -> &str {
        "Creates two new vectors relative to the input forward vector that complete an orthonormal axis."
    }

    fn example_usage(&self) -> &str {
        "createAxisFromVector(\"vectorName\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_VECTOR
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = require_vector(ctx, args, "vector")?;
        let axis = create_axis_from_vector(&vector.end, None)
            .ok_or_else(|| CmdError::invalid_arg("vector", "a zero-length vector has no axis"))?;
        let [left, up, _] = basis_columns(&axis);
        let opts = VectorOptions::new().with_render_mode(vector.render_mode);

        create_result_vectors(
            ctx,
            vec![(vector.start, left, opts.clone()), (vector.start, up, opts)],
        )
    }
}

// ============================================================================
// multiplyVectorByMatrix command
// ============================================================================

struct MultiplyVectorByMatrixCommand;

impl Command for MultiplyVectorByMatrixCommand {
    fn name(&self) -> &str {
        "multiplyVectorByMatrix"
    }

    fn description(&self) -> &str {
        "Creates a new vector that is the result of multiplying an input vector by an input matrix."
    }

    fn example_usage(&self) -> &str {
        "multiplyVectorByMatrix(\"vectorName\", \"matrixName\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::required("matrix", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = require_vector(ctx, args, "vector")?;
        let matrix = require_matrix(ctx, args, "matrix")?.matrix;
        let opts = VectorOptions::new()
            .with_render_mode(vector.render_mode)
            .with_scale(basis_scale(&matrix));
        create_result_vector(
            ctx,
            transform_point(&matrix, &vector.start),
            transform_point(&matrix, &vector.end),
            opts,
        )
    }
}

// ============================================================================
// distanceBetweenVectors command
// ============================================================================

struct DistanceBetweenVectorsCommand;

impl Command for DistanceBetweenVectorsCommand {
    fn name(&self) -> &str {
        "distanceBetweenVectors"
    }

    fn description(&self) -> &str {
        "Creates a vector that represents and displays the distance between the two input vectors."
    }

    fn example_usage(&self) -> &str {
        "distanceBetweenVectors(\"vectorNameA\", \"vectorNameB\")"
    }

    fn args(&self) -> &[ArgDef] {
        TWO_VECTORS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let a = require_vector(ctx, args, "vectorA")?.anchor();
        let b = require_vector(ctx, args, "vectorB")?.anchor();
        let distance = (a - b).norm();
        let opts = VectorOptions::new()
            .with_render_mode(RenderMode::DashedLine)
            .with_text(Some(format!("distance = {:.2}", distance)));
        create_result_vector(ctx, a, b, opts)
    }
}

// ============================================================================
// angleBetweenVectors command
// ============================================================================

struct AngleBetweenVectorsCommand;

impl Command for AngleBetweenVectorsCommand {
    fn name(&self) -> &str {
        "angleBetweenVectors"
    }

    fn description(&self) -> &str {
        "Creates an object in the scene that represents the angle between the two input vectors."
    }

    fn example_usage(&self) -> &str {
        "angleBetweenVectors(\"vectorNameA\", \"vectorNameB\", angleInDegrees)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vectorA", ArgType::String),
            ArgDef::required("vectorB", ArgType::String),
            ArgDef::optional("angleInDegrees", ArgType::Bool),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let a = require_vector(ctx, args, "vectorA")?;
        let b = require_vector(ctx, args, "vectorB")?;
        let in_degrees = args.optional_bool("angleInDegrees")?.unwrap_or(false);

        let radians = angle_between(&a.direction(), &b.direction()).unwrap_or(0.0);
        let text = if in_degrees {
            format!("angle = {:.2} deg", radians_to_degrees(radians))
        } else {
            format!("angle = {:.2} rad", radians)
        };

        let opts = VectorOptions {
            basis_a: Some(a.name().to_string()),
            basis_b: Some(b.name().to_string()),
            ..VectorOptions::new()
                .with_render_mode(RenderMode::Angle)
                .with_text(Some(text))
        };
        create_result_vector(
            ctx,
            a.start + a.normal() * 0.3,
            b.start + b.normal() * 0.3,
            opts,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::executor::CommandEngine;

    fn engine_with(vectors: &[(&str, [f64; 3], [f64; 3])]) -> CommandEngine {
        let engine = CommandEngine::new().unwrap();
        for (name, start, end) in vectors {
            engine
                .execute(
                    "createVector",
                    CommandArgs::new()
                        .with("name", *name)
                        .with("startPosition", Vec3::from(*start))
                        .with("endPosition", Vec3::from(*end)),
                )
                .unwrap();
        }
        engine
    }

    fn two(a: &str, b: &str) -> CommandArgs {
        CommandArgs::new().with("vectorA", a).with("vectorB", b)
    }

    #[test]
    fn test_cross_product_of_up_and_left() {
        let engine = engine_with(&[("up", [0.0; 3], [0.0, 1.0, 0.0]), ("left", [0.0; 3], [1.0, 0.0, 0.0])]);
        let result = engine.execute("crossProduct", two("up", "left")).unwrap();
        assert_eq!(result.as_str(), Some("Result0"));

        let scene = engine.scene();
        let r = scene.vectors.get("Result0").unwrap();
        assert_relative_eq!(r.end, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(r.start, Vec3::zeros());
    }

    #[test]
    fn test_add_and_subtract() {
        let engine = engine_with(&[("a", [1.0, 0.0, 0.0], [2.0, 2.0, 0.0]), ("b", [0.0; 3], [0.0, 0.0, 3.0])]);
        engine.execute("addVectors", two("a", "b")).unwrap();
        engine.execute("subtractVectors", two("a", "b")).unwrap();

        let scene = engine.scene();
        let sum = scene.vectors.get("Result0").unwrap();
        assert_relative_eq!(sum.start, Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(sum.end, Vec3::new(2.0, 2.0, 3.0));
        let diff = scene.vectors.get("Result1").unwrap();
        assert_relative_eq!(diff.end, Vec3::new(2.0, 2.0, -3.0));
    }

    #[test]
    fn test_scale_keeps_start() {
        let engine = engine_with(&[("a", [1.0, 1.0, 1.0], [1.0, 3.0, 1.0])]);
        engine
            .execute("scaleVector", CommandArgs::new().with("vector", "a").with("scalar", 3))
            .unwrap();
        let scene = engine.scene();
        let r = scene.vectors.get("$").unwrap();
        assert_relative_eq!(r.start, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(r.end, Vec3::new(1.0, 7.0, 1.0));
    }

    #[test]
    fn test_normalize_in_place() {
        let engine = engine_with(&[("a", [1.0, 0.0, 0.0], [1.0, 0.0, 5.0]), ("b", [0.0; 3], [1.0, 0.0, 0.0])]);
        engine
            .execute("normalizeVector", CommandArgs::new().with("vector", "a"))
            .unwrap();
        let scene = engine.scene();
        assert_eq!(scene.vectors.len(), 2);
        let a = scene.vectors.get("$-1").unwrap();
        assert_eq!(a.name(), "a");
        assert_relative_eq!(a.end, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_project() {
        let engine = engine_with(&[
            ("a", [0.0; 3], [2.0, 3.0, 0.0]),
            ("x", [0.0; 3], [4.0, 0.0, 0.0]),
            ("z", [0.0; 3], [0.0; 3]),
        ]);
        engine.execute("projectVector", two("a", "x")).unwrap();
        engine.execute("projectVector", two("a", "z")).unwrap();
        let scene = engine.scene();
        assert_relative_eq!(scene.vectors.get("Result0").unwrap().end, Vec3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(scene.vectors.get("Result1").unwrap().end, Vec3::zeros());
    }

    #[test]
    fn test_move_along_vector() {
        let engine = engine_with(&[("a", [0.0; 3], [0.0, 2.0, 0.0])]);
        engine
            .execute("moveVector", CommandArgs::new().with("vector", "a").with("units", 0.5))
            .unwrap();
        let scene = engine.scene();
        let r = scene.vectors.get("$").unwrap();
        assert_relative_eq!(r.start, Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(r.end, Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_distance_label() {
        let engine = engine_with(&[("a", [0.0; 3], [3.0, 0.0, 0.0]), ("b", [0.0; 3], [0.0, 4.0, 0.0])]);
        engine.execute("distanceBetweenVectors", two("a", "b")).unwrap();
        let scene = engine.scene();
        let r = scene.vectors.get("$").unwrap();
        assert_eq!(r.text_to_render, "distance = 5.00");
        assert!(r.render_text);
    }

    #[test]
    fn test_angle_label_units() {
        let engine = engine_with(&[("a", [0.0; 3], [1.0, 0.0, 0.0]), ("b", [0.0; 3], [0.0, 1.0, 0.0])]);
        engine
            .execute("angleBetweenVectors", two("a", "b").with("angleInDegrees", true))
            .unwrap();
        engine.execute("angleBetweenVectors", two("a", "b")).unwrap();

        let scene = engine.scene();
        let degrees = scene.vectors.get("Result0").unwrap();
        assert_eq!(degrees.text_to_render, "angle = 90.00 deg");
        assert_eq!(degrees.basis_a.as_deref(), Some("a"));
        assert_relative_eq!(degrees.start, Vec3::new(0.3, 0.0, 0.0));
        assert_eq!(scene.vectors.get("Result1").unwrap().text_to_render, "angle = 1.57 rad");
    }

    #[test]
    fn test_axis_from_vector_is_all_or_nothing() {
        let engine = engine_with(&[("f", [0.0; 3], [0.0, 0.0, 1.0])]);
        let names = engine
            .execute("createAxisFromVector", CommandArgs::new().with("vector", "f"))
            .unwrap();
        assert_eq!(names, Value::List(vec!["Result0".into(), "Result1".into()]));

        let engine = engine_with(&[("f", [0.0; 3], [0.0, 0.0, 1.0]), ("Result1", [0.0; 3], [1.0, 0.0, 0.0])]);
        let clash = engine
            .execute("createAxisFromVector", CommandArgs::new().with("vector", "f"))
            .unwrap();
        assert!(clash.as_str().is_some_and(|s| s.contains("Result1")));
        assert_eq!(engine.scene().vectors.len(), 2);
        assert!(engine.scene().vectors.get("Result0").is_none());
    }

    #[test]
    fn test_missing_input_is_reported_not_raised() {
        let engine = engine_with(&[("a", [0.0; 3], [1.0, 0.0, 0.0])]);
        let result = engine.execute("addVectors", two("a", "ghost")).unwrap();
        assert_eq!(
            result.as_str(),
            Some("A vector named \"ghost\" could not be found.")
        );
        assert_eq!(engine.scene().vectors.len(), 1);
    }
}
