use approx::assert_relative_eq;
use vecviz_cmd::prelude::*;
use vecviz_scene::{Entity, Mat4, SceneContext, Vec3};

fn history_names(engine: &CommandEngine) -> Vec<String> {
    engine.history().iter().map(|e| e.cmd_name.clone()).collect()
}

fn vector_names(engine: &CommandEngine) -> Vec<String> {
    engine.scene().vectors.names().map(String::from).collect()
}

#[test]
fn cross_product_of_basis_vectors() {
    let mut engine = CommandEngine::new().unwrap();
    engine
        .evaluate(
            "createVector(\"up\", [0, 0, 0], [0, 1, 0])\n\
             createVector(\"left\", [0, 0, 0], [1, 0, 0])",
        )
        .unwrap();
    let result = engine.evaluate("crossProduct(\"up\", \"left\")").unwrap();
    assert_eq!(result.as_str(), Some("Result0"));

    let scene = engine.scene();
    let cross = scene.vectors.get("Result0").unwrap();
    assert_eq!(cross.start, Vec3::zeros());
    assert_relative_eq!(cross.end, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn identity_inverse_is_exact() {
    let engine = CommandEngine::new().unwrap();
    engine
        .execute("createIdentityMatrix", CommandArgs::new().with("name", "I"))
        .unwrap();
    let result = engine
        .execute("invertMatrix", CommandArgs::new().with("matrix", "I"))
        .unwrap();
    assert_eq!(result.as_str(), Some("Result0"));
    assert_eq!(engine.scene().matrices.get("Result0").unwrap().matrix, Mat4::identity());
}

#[test]
fn rename_keeps_creation_slot() {
    let mut engine = CommandEngine::new().unwrap();
    engine
        .evaluate(
            "createVector2(\"up\", [0, 1, 0])\n\
             createVector2(\"left\", [1, 0, 0])\n\
             createVector2(\"forward\", [0, 0, 1])\n\
             renameVector(\"up\", \"vertical\")",
        )
        .unwrap();

    assert_eq!(vector_names(&engine), ["vertical", "left", "forward"]);
    let scene = engine.scene();
    assert!(scene.vectors.get("up").is_none());
    assert_eq!(scene.vectors.get("$-2").map(|v| v.name()), Some("vertical"));
}

#[test]
fn duplicate_name_is_reported_not_raised() {
    let engine = CommandEngine::new().unwrap();
    let args = CommandArgs::new()
        .with("name", "a")
        .with("endPosition", Vec3::new(1.0, 0.0, 0.0));
    engine.execute("createVector2", args.clone()).unwrap();
    let second = engine.execute("createVector2", args).unwrap();

    assert!(second.as_str().is_some_and(|s| s.contains('a')));
    assert_eq!(engine.scene().vectors.len(), 1);
    assert_eq!(history_names(&engine), ["createVector2", "createVector2"]);
}

#[test]
fn shortcuts_address_creation_order() {
    let mut engine = CommandEngine::new().unwrap();
    engine
        .evaluate(
            "createVector2(\"a\", [1, 0, 0])\n\
             createVector2(\"b\", [0, 2, 0])\n\
             createVector2(\"c\", [0, 0, 3])",
        )
        .unwrap();

    let newest = engine.evaluate("computeVectorMagnitude(\"$\")").unwrap();
    assert_eq!(newest.as_float(), Some(3.0));
    let oldest = engine.evaluate("computeVectorMagnitude(\"$-2\")").unwrap();
    assert_eq!(oldest.as_float(), Some(1.0));

    let past_first = engine.evaluate("computeVectorMagnitude(\"$-3\")").unwrap();
    assert!(past_first.as_str().is_some_and(|s| s.contains("$-3")));
}

#[test]
fn positional_arguments_follow_schema_order() {
    let mut engine = CommandEngine::new().unwrap();
    engine
        .evaluate("createVector(\"v\", [1, 1, 1], [2, 3, 4], 0x123456)")
        .unwrap();

    let scene = engine.scene();
    let v = scene.vectors.get("v").unwrap();
    assert_eq!(v.start, Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(v.end, Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(v.color, 0x123456);
}

#[test]
fn unknown_command_records_nothing() {
    let engine = CommandEngine::new().unwrap();
    let result = engine.execute("nonexistentCmd", CommandArgs::new()).unwrap();
    assert_eq!(result.as_str(), Some("nonexistentCmd is an invalid command."));
    assert!(engine.history().is_empty());
}

#[test]
fn missing_argument_records_nothing() {
    let engine = CommandEngine::new().unwrap();
    let err = engine
        .execute("createVector2", CommandArgs::new().with("name", "a"))
        .unwrap_err();
    assert!(matches!(err, CmdError::MissingArgument(ref name) if name == "endPosition"));
    assert!(engine.history().is_empty());
    assert!(engine.scene().vectors.is_empty());
}

#[test]
fn composite_commands_record_inner_calls_first() {
    let mut engine = CommandEngine::new().unwrap();
    engine
        .evaluate(
            "createVector2(\"a\", [1, 0, 0])\n\
             duplicateVector(\"copy\", \"a\")\n\
             renameVector(\"copy\", \"b\")",
        )
        .unwrap();

    assert_eq!(
        history_names(&engine),
        ["createVector2", "createVector", "duplicateVector", "updateVector", "renameVector"]
    );
    assert_eq!(vector_names(&engine), ["a", "b"]);
}

#[test]
fn history_replays_into_a_fresh_engine() {
    let mut original = CommandEngine::new().unwrap();
    original
        .evaluate(
            "createVector(\"up\", [0, 0, 0], [0, 1, 0])\n\
             createVector2(\"left\", [1, 0, 0])\n\
             crossProduct(\"up\", \"left\")\n\
             scaleVector(\"Result0\", 2.5)\n\
             createUpRotationMatrix(\"R\", true, 90)",
        )
        .unwrap();
    let json = original.history_json().unwrap();

    let replay = CommandEngine::new().unwrap();
    replay.execute_json_cmd_list(&json).unwrap();

    assert_eq!(&*replay.history(), &*original.history());
    assert_eq!(vector_names(&replay), vector_names(&original));

    let (a, b) = (original.scene(), replay.scene());
    for (left, right) in a.vectors.iter().zip(b.vectors.iter()) {
        assert_eq!(left.start, right.start);
        assert_eq!(left.end, right.end);
        assert_eq!(left.render_mode, right.render_mode);
    }
    assert_eq!(
        a.matrices.get("R").map(|m| m.matrix),
        b.matrices.get("R").map(|m| m.matrix)
    );
}

#[test]
fn composite_history_replay_records_recovered_inner_calls() {
    let mut original = CommandEngine::new().unwrap();
    original
        .evaluate(
            "createVector2(\"a\", [1, 0, 0])\n\
             duplicateVector(\"copy\", \"a\")\n\
             renameVector(\"copy\", \"b\")",
        )
        .unwrap();
    assert_eq!(original.history().len(), 5);
    let json = original.history_json().unwrap();

    let replay = CommandEngine::new().unwrap();
    let results = replay.execute_json_cmd_list(&json).unwrap();
    assert_eq!(vector_names(&replay), ["a", "b"]);

    // The composites run their inner calls again against a scene that
    // already holds the recorded inner effects; the resulting lookup
    // failures are recovered and recorded too.
    assert_eq!(
        history_names(&replay),
        [
            "createVector2",
            "createVector",
            "createVector",
            "duplicateVector",
            "updateVector",
            "updateVector",
            "renameVector",
        ]
    );
    assert!(results[2].as_str().is_some_and(|s| s.contains("already exists")));
    assert!(results[4].as_str().is_some_and(|s| s.contains("could not be found")));
}

#[test]
fn map_literal_line_then_command() {
    let mut engine = CommandEngine::new().unwrap();
    engine.evaluate("let m = #{a: 1}\nlistVectors()").unwrap();
    let a = engine.evaluate("m.a").unwrap();
    assert_eq!(a, Value::Int(1));
}

#[test]
fn malformed_json_list_runs_nothing() {
    let engine = CommandEngine::new().unwrap();
    let err = engine
        .execute_json_cmd_list(r#"[{"cmdName": "clearScene", "cmdArgs": {}}, {"cmdName": ]"#)
        .unwrap_err();
    assert!(matches!(err, CmdError::Parse(_)));
    assert!(engine.history().is_empty());
}

#[test]
fn expression_variables_hold_command_results() {
    let mut engine = CommandEngine::new().unwrap();
    let dot = engine
        .evaluate(
            "let a = createVector2(\"a\", [3, 4, 0])\n\
             let doubled = scaleVector(a, 2)\n\
             dotProduct(a, doubled)",
        )
        .unwrap();
    assert_relative_eq!(dot.as_float().unwrap(), 50.0);

    // variables outlive a single evaluation
    let length = engine.evaluate("computeVectorMagnitude(doubled)").unwrap();
    assert_relative_eq!(length.as_float().unwrap(), 10.0);
}

#[test]
fn run_json_command_list_from_expression() {
    let mut engine = CommandEngine::new().unwrap();
    engine
        .evaluate(
            r#"runJsonCommandList(`[{"cmdName": "createVector2", "cmdArgs": {"name": "z", "endPosition": [0, 0, 1]}}]`)"#,
        )
        .unwrap();
    assert_eq!(history_names(&engine), ["createVector2", "runJsonCommandList"]);
    assert_eq!(vector_names(&engine), ["z"]);
}

#[test]
fn reset_scene_with_custom_scene() {
    let engine = CommandEngine::with_scene(SceneContext::headless()).unwrap();
    engine
        .execute("resetScene", CommandArgs::new().with("resetCommandHistory", true))
        .unwrap();
    assert_eq!(vector_names(&engine), ["left", "up", "forward", "origin"]);
    assert_eq!(history_names(&engine), ["resetScene"]);
    assert!(engine.take_menu_refresh());
    assert!(!engine.take_menu_refresh());
}
