//! Scene commands: creating, listing, inspecting and destroying entities,
//! plus clearing and resetting the whole scene

use std::f64::consts::TAU;

use vecviz_math::{create_axis_from_vector, lerp, scale_matrix, to_rows, translation_matrix, Mat4, Vec3};
use vecviz_scene::{
    random_color, Entity, EntityKind, MatrixEntity, RenderMode, SceneContext, SceneError,
    VectorEntity, VectorOptions,
};

use crate::args::{ArgDef, ArgType, CommandArgs, Value};
use crate::command::{Command, CommandContext, CommandTable};
use crate::commands::matrix_ops::Axis;
use crate::commands::{angle_argument, color_argument, create_vectors, require_vector};
use crate::error::{CmdError, CmdResult};

/// Register scene commands
pub fn register(table: &mut CommandTable) -> CmdResult<()> {
    table.register(ListVectorsCommand)?;
    table.register(DumpVectorCommand)?;
    table.register(ComputeVectorMagnitudeCommand)?;
    table.register(DumpMatrixCommand)?;
    table.register(ListMatricesCommand)?;
    table.register(CreateVectorCommand)?;
    table.register(CreateVector2Command)?;
    table.register(CreateVector3Command)?;
    table.register(DuplicateVectorCommand)?;
    table.register(CreateRandomVectorCommand)?;
    table.register(DestroyVectorCommand)?;
    table.register(ShowVectorCommand)?;
    table.register(ShowMatrixCommand)?;
    table.register(CreateMatrixCommand)?;
    table.register(CreateIdentityMatrixCommand)?;
    for axis in [Axis::Left, Axis::Up, Axis::Forward] {
        table.register(CreateRotationMatrixCommand(axis))?;
    }
    table.register(CreateScaleMatrixCommand)?;
    table.register(CreateTranslationMatrixCommand)?;
    table.register(DestroyMatrixCommand)?;
    table.register(ClearSceneCommand)?;
    table.register(ResetSceneCommand)?;
    table.register(CreateMatrixFromForwardVectorCommand)?;
    Ok(())
}

const NEWLINE: &str = "\r\n";

static ONE_VECTOR: &[ArgDef] = &[ArgDef::required("vector", ArgType::String)];
static ONE_MATRIX: &[ArgDef] = &[ArgDef::required("matrix", ArgType::String)];

/// Add a vector and flag the menus for a rebuild
fn add_vector(scene: &mut SceneContext, vector: VectorEntity) -> CmdResult<Value> {
    let name = scene.create_vector(vector)?.name().to_string();
    scene.request_menu_refresh();
    Ok(Value::String(name))
}

/// Add a matrix and flag the menus for a rebuild
fn add_matrix(scene: &mut SceneContext, name: &str, matrix: Mat4) -> CmdResult<Value> {
    scene.create_matrix(MatrixEntity::new(name, matrix))?;
    scene.request_menu_refresh();
    Ok(Value::String(name.to_string()))
}

/// Add a matrix, replacing any matrix already using the name
fn put_matrix(scene: &mut SceneContext, name: &str, matrix: Mat4) -> CmdResult<Value> {
    let entity = MatrixEntity::new(name, matrix);
    if scene.matrices.contains(name) {
        scene.replace_matrix(name, entity)?;
    } else {
        scene.create_matrix(entity)?;
    }
    scene.request_menu_refresh();
    Ok(Value::String(name.to_string()))
}

fn format_point(p: &Vec3) -> String {
    format!("[{}, {}, {}]", p.x, p.y, p.z)
}

// ============================================================================
// listVectors / listMatrices commands
// ============================================================================

struct ListVectorsCommand;

impl Command for ListVectorsCommand {
    fn name(&self) -> &str {
        "listVectors"
    }

    fn description(&self) -> &str {
        "Returns the list of vectors within the scene."
    }

    fn example_usage(&self) -> &str {
        "listVectors()"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &CommandArgs) -> CmdResult<Value> {
        let names: Vec<&str> = ctx.scene().vectors.names().collect();
        Ok(Value::String(names.join(NEWLINE)))
    }
}

struct ListMatricesCommand;

impl Command for ListMatricesCommand {
    fn name(&self) -> &str {
        "listMatrices"
    }

    fn description(&self) -> &str {
        "Returns the list of matrices within the scene."
    }

    fn example_usage(&self) -> &str {
        "listMatrices()"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &CommandArgs) -> CmdResult<Value> {
        let names: Vec<&str> = ctx.scene().matrices.names().collect();
        Ok(Value::String(names.join(NEWLINE)))
    }
}

// ============================================================================
// dumpVector / computeVectorMagnitude / dumpMatrix commands
// ============================================================================

struct DumpVectorCommand;

impl Command for DumpVectorCommand {
    fn name(&self) -> &str {
        "dumpVector"
    }

    fn description(&self) -> &str {
        "Displays the properties of an input vector."
    }

    fn example_usage(&self) -> &str {
        "dumpVector(\"vector\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_VECTOR
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let v = require_vector(ctx, args, "vector")?;
        let lines = [
            format!("name: {}", v.name()),
            format!("render mode: {}", v.render_mode.as_str()),
            format!("start point = {}", format_point(&v.start)),
            format!("end point = {}", format_point(&v.end)),
            format!("magnitude = {:.2}", v.magnitude()),
            format!("normalized = {}", format_point(&v.normal())),
        ];
        Ok(Value::String(lines.join(NEWLINE)))
    }
}

struct ComputeVectorMagnitudeCommand;

impl Command for ComputeVectorMagnitudeCommand {
    fn name(&self) -> &str {
        "computeVectorMagnitude"
    }

    fn description(&self) -> &str {
        "Returns the magnitude or length of a vector."
    }

    fn example_usage(&self) -> &str {
        "computeVectorMagnitude(\"vector\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_VECTOR
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        Ok(Value::Float(require_vector(ctx, args, "vector")?.magnitude()))
    }
}

struct DumpMatrixCommand;

impl Command for DumpMatrixCommand {
    fn name(&self) -> &str {
        "dumpMatrix"
    }

    fn description(&self) -> &str {
        "Displays the properties of an input matrix."
    }

    fn example_usage(&self) -> &str {
        "dumpMatrix(\"matrix\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_MATRIX
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let name = args.require_str("matrix")?;
        let matrix = ctx.scene().matrices.require(name)?;
        let mut lines = vec![format!("name: {}", matrix.name())];
        lines.extend(to_rows(&matrix.matrix).iter().map(|row| {
            format!("[{:.4}, {:.4}, {:.4}, {:.4}]", row[0], row[1], row[2], row[3])
        }));
        Ok(Value::String(lines.join(NEWLINE)))
    }
}

// ============================================================================
// createVector / createVector2 / createVector3 commands
// ============================================================================

struct CreateVectorCommand;

impl Command for CreateVectorCommand {
    fn name(&self) -> &str {
        "createVector"
    }

    fn description(&self) -> &str {
        "Creates a new vector within the scene.  startPosition and endPosition should be arrays of length 3.  For example [0,1,0]."
    }

    fn example_usage(&self) -> &str {
        "createVector(vectorName, [startPosition], [endPosition])"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("startPosition", ArgType::Vec3),
            ArgDef::required("endPosition", ArgType::Vec3),
            ArgDef::optional("color", ArgType::Int),
            ArgDef::optional("renderMode", ArgType::String),
            ArgDef::optional("renderText", ArgType::Bool),
            ArgDef::optional("textToRender", ArgType::String),
            ArgDef::optional("visible", ArgType::Bool),
            ArgDef::optional("scaleVector", ArgType::Vec3),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let render_mode = args
            .optional_str("renderMode")?
            .map(str::parse::<RenderMode>)
            .transpose()?;
        let opts = VectorOptions {
            color: color_argument(args)?,
            render_mode,
            render_text: args.optional_bool("renderText")?,
            text_to_render: args.optional_str("textToRender")?.map(String::from),
            visible: args.optional_bool("visible")?,
            scale: args.optional_vec3("scaleVector")?,
            ..Default::default()
        };
        let vector = VectorEntity::with_options(
            args.require_str("name")?,
            args.require_vec3("startPosition")?,
            args.require_vec3("endPosition")?,
            opts,
        );
        add_vector(ctx.scene_mut(), vector)
    }
}

struct CreateVector2Command;

impl Command for CreateVector2Command {
    fn name(&self) -> &str {
        "createVector2"
    }

    fn description(&self) -> &str {
        "Creates a new vector within the scene that starts from the origin [0,0,0].  The input endPosition should be and array of length 3.  For example [0,1,0]."
    }

    fn example_usage(&self) -> &str {
        "createVector2(vectorName, [endPosition])"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("endPosition", ArgType::Vec3),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = VectorEntity::new(
            args.require_str("name")?,
            Vec3::zeros(),
            args.require_vec3("endPosition")?,
        );
        add_vector(ctx.scene_mut(), vector)
    }
}

struct CreateVector3Command;

impl Command for CreateVector3Command {
    fn name(&self) -> &str {
        "createVector3"
    }

    fn description(&self) -> &str {
        "Creates a new vector within the scene that starts from the origin [0,0,0].  The input vector should be and array of length 3 and will be normalized.  For example [0,1,0].  The input magnitude of the vector represents the desired length of the vector."
    }

    fn example_usage(&self) -> &str {
        "createVector3(vectorName, [directionVector], magnitude)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("directionVector", ArgType::Vec3),
            ArgDef::required("magnitude", ArgType::Float),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = VectorEntity::from_direction(
            args.require_str("name")?,
            &args.require_vec3("directionVector")?,
            args.require_f64("magnitude")?,
            VectorOptions::default(),
        );
        add_vector(ctx.scene_mut(), vector)
    }
}

// ============================================================================
// duplicateVector command
// ============================================================================

struct DuplicateVectorCommand;

impl Command for DuplicateVectorCommand {
    fn name(&self) -> &str {
        "duplicateVector"
    }

    fn description(&self) -> &str {
        "Given the name of an existing vector in the scene, duplicate creates a new instance of that vector."
    }

    fn example_usage(&self) -> &str {
        "duplicateVector(\"newVectorName\", \"vectorName\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("vector", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let source = require_vector(ctx, args, "vector")?;
        let mut create = CommandArgs::new()
            .with("name", args.require_str("name")?)
            .with("startPosition", source.start)
            .with("endPosition", source.end)
            .with("color", i64::from(source.color))
            .with("renderMode", source.render_mode.as_str())
            .with("renderText", source.render_text)
            .with("visible", source.visible)
            .with("scaleVector", source.scale);
        // A label showing the source's name follows the copy's name instead
        if source.text_to_render != source.name() {
            create.insert("textToRender", source.text_to_render.as_str());
        }
        ctx.execute("createVector", create)
    }
}

// ============================================================================
// createRandomVector command
// ============================================================================

struct CreateRandomVectorCommand;

fn unit_random() -> f64 {
    rand::random_range(0.0..1.0)
}

impl CreateRandomVectorCommand {
    /// Random end point on or inside a sphere of radius `max_length`
    fn random_end(max_length: f64, normalize: bool) -> Vec3 {
        let radius = max_length * 0.5;
        let theta = lerp(0.0, TAU, unit_random());
        let phi = lerp(0.0, TAU, unit_random());
        let distance = lerp(0.0, radius, unit_random()).sqrt();

        let point = Vec3::new(
            distance * phi.sin() * theta.cos(),
            distance * phi.sin() * theta.sin(),
            distance * phi.cos(),
        );
        let unit = point.try_normalize(f64::EPSILON).unwrap_or_else(Vec3::zeros);
        if normalize {
            unit
        } else {
            unit * (unit_random() * max_length)
        }
    }
}

impl Command for CreateRandomVectorCommand {
    fn name(&self) -> &str {
        "createRandomVector"
    }

    fn description(&self) -> &str {
        "Creates a random vector.\r\nInput Argument Information:\r\n\"count\" represents how many vectors will be created.\r\n\"maxLength\" is the maximum length of the vectors.\r\n\"normalize\" represents whether or not the vectors should be normalize (i.e. unit length of 1).\r\n\"renderMode\" represents how the vector should be rendered.\r\nThe options are \"vector\", \"waypoint\", \"line\", \"dashedLine\", \"man\", \"dog\", and \"box\"."
    }

    fn example_usage(&self) -> &str {
        "createRandomVector(count, maxLength, normalize, renderMode)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("count", ArgType::Int),
            ArgDef::required("maxLength", ArgType::Float),
            ArgDef::required("normalize", ArgType::Bool),
            ArgDef::optional("renderMode", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let count = args.require_i64("count")?;
        let max_length = args.require_f64("maxLength")?;
        let normalize = args.require_bool("normalize")?;
        let render_mode = args
            .optional_str("renderMode")?
            .map(str::parse::<RenderMode>)
            .transpose()?
            .unwrap_or_default();

        let scene = ctx.scene_mut();
        let vectors = (0..count.max(0))
            .map(|_| {
                let opts = VectorOptions::new()
                    .with_color(random_color())
                    .with_render_mode(render_mode);
                let end = Self::random_end(max_length, normalize);
                VectorEntity::with_options(scene.next_random_vector_name(), Vec3::zeros(), end, opts)
            })
            .collect();
        create_vectors(scene, vectors)
    }
}

// ============================================================================
// destroyVector / showVector / showMatrix / destroyMatrix commands
// ============================================================================

struct DestroyVectorCommand;

impl Command for DestroyVectorCommand {
    fn name(&self) -> &str {
        "destroyVector"
    }

    fn description(&self) -> &str {
        "Destroys the input vector and removes it from the scene."
    }

    fn example_usage(&self) -> &str {
        "destroyVector(\"vectorName\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_VECTOR
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let name = args.require_str("vector")?;
        let scene = ctx.scene_mut();
        let destroyed = scene
            .destroy_vector(name)
            .ok_or_else(|| SceneError::not_found(EntityKind::Vector, name))?;
        scene.request_menu_refresh();
        Ok(Value::String(destroyed.name().to_string()))
    }
}

struct DestroyMatrixCommand;

impl Command for DestroyMatrixCommand {
    fn name(&self) -> &str {
        "destroyMatrix"
    }

    fn description(&self) -> &str {
        "Destroys the input matrix and removes it from the scene."
    }

    fn example_usage(&self) -> &str {
        "destroyMatrix(\"matrixName\")"
    }

    fn args(&self) -> &[ArgDef] {
        ONE_MATRIX
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let name = args.require_str("matrix")?;
        let scene = ctx.scene_mut();
        let destroyed = scene
            .destroy_matrix(name)
            .ok_or_else(|| SceneError::not_found(EntityKind::Matrix, name))?;
        scene.request_menu_refresh();
        Ok(Value::String(destroyed.name().to_string()))
    }
}

struct ShowVectorCommand;

impl Command for ShowVectorCommand {
    fn name(&self) -> &str {
        "showVector"
    }

    fn description(&self) -> &str {
        "Controls whether or not a vector is visible in the scene."
    }

    fn example_usage(&self) -> &str {
        "showVector(\"vectorName\", visible)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::required("visible", ArgType::Bool),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let name = args.require_str("vector")?;
        let visible = args.require_bool("visible")?;
        let scene = ctx.scene_mut();
        if !scene.show_vector(name, visible) {
            return Err(SceneError::not_found(EntityKind::Vector, name).into());
        }
        scene.request_menu_refresh();
        Ok(Value::Bool(visible))
    }
}

struct ShowMatrixCommand;

impl Command for ShowMatrixCommand {
    fn name(&self) -> &str {
        "showMatrix"
    }

    fn description(&self) -> &str {
        "Controls whether or not a matrix is visible in the scene."
    }

    fn example_usage(&self) -> &str {
        "showMatrix(\"matrixName\", visible)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("matrix", ArgType::String),
            ArgDef::required("visible", ArgType::Bool),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let name = args.require_str("matrix")?;
        let visible = args.require_bool("visible")?;
        let scene = ctx.scene_mut();
        if !scene.show_matrix(name, visible) {
            return Err(SceneError::not_found(EntityKind::Matrix, name).into());
        }
        scene.request_menu_refresh();
        Ok(Value::Bool(visible))
    }
}

// ============================================================================
// Matrix creation commands
// ============================================================================

struct CreateMatrixCommand;

impl Command for CreateMatrixCommand {
    fn name(&self) -> &str {
        "createMatrix"
    }

    fn description(&self) -> &str {
        "Creates a new 4x4 matrix within the scene.  The input matrix should be an array of 4 vectors."
    }

    fn example_usage(&self) -> &str {
        "createMatrix(matrixName, [matrix])"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("matrix", ArgType::Matrix),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let name = args.require_str("name")?;
        let matrix = args.require_mat4("matrix")?;
        add_matrix(ctx.scene_mut(), name, matrix)
    }
}

struct CreateIdentityMatrixCommand;

impl Command for CreateIdentityMatrixCommand {
    fn name(&self) -> &str {
        "createIdentityMatrix"
    }

    fn description(&self) -> &str {
        "Creates a new 4x4 identity matrix within the scene."
    }

    fn example_usage(&self) -> &str {
        "createIdentityMatrix(matrixName)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[ArgDef::required("name", ArgType::String)];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        add_matrix(ctx.scene_mut(), args.require_str("name")?, Mat4::identity())
    }
}

struct CreateRotationMatrixCommand(Axis);

impl Command for CreateRotationMatrixCommand {
    fn name(&self) -> &str {
        match self.0 {
            Axis::Left => "createLeftRotationMatrix",
            Axis::Up => "createUpRotationMatrix",
            Axis::Forward => "createForwardRotationMatrix",
        }
    }

    fn description(&self) -> &str {
        match self.0 {
            Axis::Left => "Creates a new matrix within the scene representing a rotation about the Left Axis.  The input angle is in degrees when angleIsInDegrees is true, otherwise in radians.",
            Axis::Up => "Creates a new matrix within the scene representing a rotation about the Up Axis.  The input angle is in degrees when angleIsInDegrees is true, otherwise in radians.",
            Axis::Forward => "Creates a new matrix within the scene representing a rotation about the Forward Axis.  The input angle is in degrees when angleIsInDegrees is true, otherwise in radians.",
        }
    }

    fn example_usage(&self) -> &str {
        match self.0 {
            Axis::Left => "createLeftRotationMatrix(matrixName, angleIsInDegrees, angle)",
            Axis::Up => "createUpRotationMatrix(matrixName, angleIsInDegrees, angle)",
            Axis::Forward => "createForwardRotationMatrix(matrixName, angleIsInDegrees, angle)",
        }
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("angleIsInDegrees", ArgType::Bool),
            ArgDef::required("angle", ArgType::Float),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let angle = angle_argument(args, "angleIsInDegrees")?;
        put_matrix(ctx.scene_mut(), args.require_str("name")?, self.0.rotation(angle))
    }
}

struct CreateScaleMatrixCommand;

impl Command for CreateScaleMatrixCommand {
    fn name(&self) -> &str {
        "createScaleMatrix"
    }

    fn description(&self) -> &str {
        "Creates a new matrix within the scene representing a scaled identity matrix."
    }

    fn example_usage(&self) -> &str {
        "createScaleMatrix(matrixName, [scaleX, scaleY, scaleZ])"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("scaleVector", ArgType::Vec3),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let scale = args.require_vec3("scaleVector")?;
        add_matrix(ctx.scene_mut(), args.require_str("name")?, scale_matrix(&scale))
    }
}

struct CreateTranslationMatrixCommand;

impl Command for CreateTranslationMatrixCommand {
    fn name(&self) -> &str {
        "createTranslationMatrix"
    }

    fn description(&self) -> &str {
        "Creates a new matrix within the scene representing a translation from the origin."
    }

    fn example_usage(&self) -> &str {
        "createTranslationMatrix(matrixName, [x, y, z])"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("translationVector", ArgType::Vec3),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let t = args.require_vec3("translationVector")?;
        add_matrix(ctx.scene_mut(), args.require_str("name")?, translation_matrix(&t))
    }
}

struct CreateMatrixFromForwardVectorCommand;

impl Command for CreateMatrixFromForwardVectorCommand {
    fn name(&self) -> &str {
        "createMatrixFromForwardVector"
    }

    fn description(&self) -> &str {
        "Creates a new matrix within the scene whose up and left vectors are orthogonal to the input forward vector."
    }

    fn example_usage(&self) -> &str {
        "createMatrixFromForwardVector(matrixName, vectorName)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("vector", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let forward = require_vector(ctx, args, "vector")?;
        let matrix = create_axis_from_vector(&forward.end, Some(&forward.start))
            .ok_or_else(|| CmdError::invalid_arg("vector", "forward vector has no direction"))?;
        put_matrix(ctx.scene_mut(), args.require_str("name")?, matrix)
    }
}

// ============================================================================
// clearScene / resetScene commands
// ============================================================================

struct ClearSceneCommand;

impl Command for ClearSceneCommand {
    fn name(&self) -> &str {
        "clearScene"
    }

    fn description(&self) -> &str {
        "Destroys all vectors in the scene.  Does not reset command history."
    }

    fn example_usage(&self) -> &str {
        "clearScene()"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &CommandArgs) -> CmdResult<Value> {
        ctx.scene_mut().clear();
        Ok(Value::None)
    }
}

struct ResetSceneCommand;

impl ResetSceneCommand {
    fn default_layout() -> [VectorEntity; 4] {
        let axis = |name: &str, end: Vec3, color: u32| {
            VectorEntity::with_options(
                name,
                Vec3::zeros(),
                end,
                VectorOptions::new().with_color(color).with_text(None),
            )
        };
        [
            axis("left", Vec3::x(), 0xff0000),
            axis("up", Vec3::y(), 0x00ff00),
            axis("forward", Vec3::z(), 0x0000aa),
            VectorEntity::with_options(
                "origin",
                Vec3::zeros(),
                Vec3::zeros(),
                VectorOptions::new()
                    .with_color(0x333333)
                    .with_render_mode(RenderMode::Waypoint)
                    .with_text(None),
            ),
        ]
    }
}

impl Command for ResetSceneCommand {
    fn name(&self) -> &str {
        "resetScene"
    }

    fn description(&self) -> &str {
        "Restores the scene to its default layout.  The input argument \"resetCommandHistory\" is a boolean that determines whether or not the command history should be cleared."
    }

    fn example_usage(&self) -> &str {
        "resetScene(resetCommandHistory)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[ArgDef::optional("resetCommandHistory", ArgType::Bool)];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        if args.optional_bool("resetCommandHistory")?.unwrap_or(false) {
            ctx.history_mut().clear();
        }
        let scene = ctx.scene_mut();
        scene.clear();
        for vector in Self::default_layout() {
            scene.create_vector(vector)?;
        }
        Ok(Value::None)
    }
}
