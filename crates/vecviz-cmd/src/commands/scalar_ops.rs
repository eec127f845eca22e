//! Scalar operations: commands that return a number instead of creating
//! an entity
//!
//! All of them echo their result when invoked from a menu.

use vecviz_math::{angle_between, degrees_to_radians, radians_to_degrees};

use crate::args::{ArgDef, ArgType, CommandArgs, Value};
use crate::command::{Command, CommandContext, CommandProperties, CommandTable};
use crate::commands::require_vector;
use crate::error::CmdResult;

/// Register scalar operation commands
pub fn register(table: &mut CommandTable) -> CmdResult<()> {
    table.register(ComputeDistanceBetweenVectorsCommand)?;
    table.register(DotProductCommand)?;
    table.register(ComputeAngleBetweenVectorsCommand)?;
    table.register(ConvertRadiansToDegreesCommand)?;
    table.register(ConvertDegreesToRadiansCommand)?;
    Ok(())
}

static TWO_VECTORS: &[ArgDef] = &[
    ArgDef::required("vectorA", ArgType::String),
    ArgDef::required("vectorB", ArgType::String),
];

static ONE_ANGLE: &[ArgDef] = &[ArgDef::required("angle", ArgType::Float)];

// ============================================================================
// computeDistanceBetweenVectors / dotProduct commands
// ============================================================================

struct ComputeDistanceBetweenVectorsCommand;

impl Command for ComputeDistanceBetweenVectorsCommand {
    fn name(&self) -> &str {
        "computeDistanceBetweenVectors"
    }

    fn description(&self) -> &str {
        "Returns the distance between two input vectors."
    }

    fn example_usage(&self) -> &str {
        "computeDistanceBetweenVectors(\"vectorA\", \"vectorB\")"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::CONSOLE
    }

    fn args(&self) -> &[ArgDef] {
        TWO_VECTORS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let a = require_vector(ctx, args, "vectorA")?.anchor();
        let b = require_vector(ctx, args, "vectorB")?.anchor();
        Ok(Value::Float((a - b).norm()))
    }
}

struct DotProductCommand;

impl Command for DotProductCommand {
    fn name(&self) -> &str {
        "dotProduct"
    }

    fn description(&self) -> &str {
        "Returns the dot product of the two input vectors."
    }

    fn example_usage(&self) -> &str {
        "dotProduct(\"vectorA\", \"vectorB\")"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::CONSOLE
    }

    fn args(&self) -> &[ArgDef] {
        TWO_VECTORS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        // End points, not directions
        let a = require_vector(ctx, args, "vectorA")?.end;
        let b = require_vector(ctx, args, "vectorB")?.end;
        Ok(Value::Float(a.dot(&b)))
    }
}

// ============================================================================
// computeAngleBetweenVectors command
// ============================================================================

struct ComputeAngleBetweenVectorsCommand;

impl Command for ComputeAngleBetweenVectorsCommand {
    fn name(&self) -> &str {
        "computeAngleBetweenVectors"
    }

    fn description(&self) -> &str {
        "Returns the angle between two input vectors.  If input parameter, angleInDegrees, is true, the result will be in degrees.  Otherwise the result will be in radians."
    }

    fn example_usage(&self) -> &str {
        "computeAngleBetweenVectors(\"vectorA\", \"vectorB\", angleInDegrees)"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::CONSOLE
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
        let Some(radians) = angle_between(&a.direction(), &b.direction()) else {
            // No angle against a zero-length vector
            return Ok(Value::Float(f64::NAN));
        };
        if args.optional_bool("angleInDegrees")?.unwrap_or(false) {
            Ok(Value::Float(radians_to_degrees(radians)))
        } else {
            Ok(Value::Float(radians))
        }
    }
}

// ============================================================================
// angle unit conversion commands
// ============================================================================

struct ConvertRadiansToDegreesCommand;

impl Command for ConvertRadiansToDegreesCommand {
    fn name(&self) -> &str {
        "convertRadiansToDegrees"
    }

    fn description(&self) -> &str {
        "Converts an angle in radians to an angle in degrees."
    }

    fn example_usage(&self) -> &str {
        "convertRadiansToDegrees(angle)"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::CONSOLE
    }

    fn args(&self) -> &[ArgDef] {
        ONE_ANGLE
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        Ok(Value::Float(radians_to_degrees(args.require_f64("angle")?)))
    }
}

struct ConvertDegreesToRadiansCommand;

impl Command for ConvertDegreesToRadiansCommand {
    fn name(&self) -> &str {
        "convertDegreesToRadians"
    }

    fn description(&self) -> &str {
        "Converts an angle in degrees to an angle in radians."
    }

    fn example_usage(&self) -> &str {
        "convertDegreesToRadians(angle)"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::CONSOLE
    }

    fn args(&self) -> &[ArgDef] {
        ONE_ANGLE
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        Ok(Value::Float(degrees_to_radians(args.require_f64("angle")?)))
    }
}
