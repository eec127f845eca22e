//! Camera commands

use crate::args::{ArgDef, ArgType, CommandArgs, Value};
use crate::command::{Command, CommandContext, CommandTable};
use crate::commands::require_vector;
use crate::error::CmdResult;

/// Register camera commands
pub fn register(table: &mut CommandTable) -> CmdResult<()> {
    table.register(CameraSetFovCommand)?;
    table.register(CameraLookAtVectorCommand)?;
    table.register(CameraAutoRotateCommand)?;
    Ok(())
}

struct CameraSetFovCommand;

impl Command for CameraSetFovCommand {
    fn name(&self) -> &str {
        "cameraSetFOV"
    }

    fn description(&self) -> &str {
        "Sets the camera's vertical field of view to the input angle in degrees."
    }

    fn example_usage(&self) -> &str {
        "cameraSetFOV(verticalFOVAngleInDegrees)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[ArgDef::required("angleInDegrees", ArgType::Float)];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let degrees = args.require_f64("angleInDegrees")?;
        ctx.scene_mut().camera.set_fov(degrees);
        Ok(Value::Float(degrees))
    }
}

struct CameraLookAtVectorCommand;

impl Command for CameraLookAtVectorCommand {
    fn name(&self) -> &str {
        "cameraLookAtVector"
    }

    fn description(&self) -> &str {
        "Forces the camera to look at a specific vector in the scene."
    }

    fn example_usage(&self) -> &str {
        "cameraLookAtVector(\"vectorName\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[ArgDef::required("vector", ArgType::String)];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let target = require_vector(ctx, args, "vector")?.start;
        ctx.scene_mut().camera.look_at(target);
        Ok(Value::from(target))
    }
}

struct CameraAutoRotateCommand;

impl Command for CameraAutoRotateCommand {
    fn name(&self) -> &str {
        "cameraAutoRotate"
    }

    fn description(&self) -> &str {
        "Controls whether or not the camera rotates automatically. autoRotateEnabled should be either \"true\" or \"false\"."
    }

    fn example_usage(&self) -> &str {
        "cameraAutoRotate(autoRotateEnabled)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[ArgDef::required("autoRotateEnabled", ArgType::Bool)];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let enabled = args.require_bool("autoRotateEnabled")?;
        ctx.scene_mut().camera.set_auto_rotate(enabled);
        Ok(Value::Bool(enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecviz_math::Vec3;
    use vecviz_scene::AUTO_ROTATE_SPEED;

    use crate::executor::CommandEngine;

    #[test]
    fn test_camera_state_follows_commands() {
        let mut engine = CommandEngine::new().unwrap();
        engine
            .evaluate(
                "createVector(\"v\", [1, 2, 3], [4, 5, 6])\n\
                 cameraLookAtVector(\"v\")\n\
                 cameraSetFOV(45)\n\
                 cameraAutoRotate(true)",
            )
            .unwrap();

        let scene = engine.scene();
        assert_eq!(scene.camera.target, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.camera.fov_degrees, 45.0);
        assert!(scene.camera.auto_rotate);
        assert_eq!(scene.camera.auto_rotate_speed, AUTO_ROTATE_SPEED);
    }

    #[test]
    fn test_look_at_missing_vector_leaves_camera() {
        let engine = CommandEngine::new().unwrap();
        let result = engine
            .execute("cameraLookAtVector", CommandArgs::new().with("vector", "nowhere"))
            .unwrap();
        assert!(result.as_str().is_some_and(|s| s.contains("nowhere")));
        assert_eq!(engine.scene().camera.target, Vec3::zeros());
    }
}
