//! Command argument types and utilities
//!
//! Arguments travel as a name-keyed map of loosely typed [`Value`]s, the
//! same shape the JSON history uses. Each command declares an ordered
//! [`ArgDef`] schema; the order is the positional signature used by the
//! expression bridge and by canonical call formatting.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use vecviz_math::{from_rows, to_rows, Mat4, Vec3};

use crate::error::{CmdError, CmdResult};

/// A command argument or result value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / undefined (`null` in JSON)
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Points, colors-as-arrays, matrix rows
    List(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item.to_literal())?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Value {
    /// Check if this value is None
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integral numbers only
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// `[x, y, z]`
    pub fn as_vec3(&self) -> Option<Vec3> {
        match self.as_list()? {
            [x, y, z] => Some(Vec3::new(x.as_float()?, y.as_float()?, z.as_float()?)),
            _ => None,
        }
    }

    /// Four rows of four numbers, or a flat row-major list of sixteen
    pub fn as_mat4(&self) -> Option<Mat4> {
        let items = self.as_list()?;
        let mut rows = [[0.0; 4]; 4];
        match items.len() {
            4 => {
                for (row, item) in rows.iter_mut().zip(items) {
                    let cells = item.as_list()?;
                    if cells.len() != 4 {
                        return None;
                    }
                    for (cell, value) in row.iter_mut().zip(cells) {
                        *cell = value.as_float()?;
                    }
                }
            }
            16 => {
                for (i, value) in items.iter().enumerate() {
                    rows[i / 4][i % 4] = value.as_float()?;
                }
            }
            _ => return None,
        }
        Some(from_rows(&rows))
    }

    /// Source-text form: strings quoted, absent as `()`
    pub fn to_literal(&self) -> String {
        match self {
            Value::None => "()".to_string(),
            Value::String(s) => quote(s),
            Value::Float(n) if n.is_finite() && n.fract() == 0.0 => format!("{:.1}", n),
            other => other.to_string(),
        }
    }
}

/// Quote a string for inclusion in expression source
fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::List(v.iter().map(|c| Value::Float(*c)).collect())
    }
}

impl From<Mat4> for Value {
    fn from(m: Mat4) -> Self {
        Value::List(
            to_rows(&m)
                .iter()
                .map(|row| Value::List(row.iter().map(|c| Value::Float(*c)).collect()))
                .collect(),
        )
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

/// Expected kind of an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    String,
    /// Integer or float
    Float,
    Int,
    Bool,
    /// `[x, y, z]`
    Vec3,
    /// 4x4, as rows or a flat list of sixteen
    Matrix,
    Any,
}

impl ArgType {
    /// Whether a present value has this kind
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ArgType::String => value.as_str().is_some(),
            ArgType::Float => value.as_float().is_some(),
            ArgType::Int => value.as_int().is_some(),
            ArgType::Bool => value.as_bool().is_some(),
            ArgType::Vec3 => value.as_vec3().is_some(),
            ArgType::Matrix => value.as_mat4().is_some(),
            ArgType::Any => true,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            ArgType::String => "a string",
            ArgType::Float => "a number",
            ArgType::Int => "an integer",
            ArgType::Bool => "a boolean",
            ArgType::Vec3 => "a list of three numbers",
            ArgType::Matrix => "four rows of four numbers",
            ArgType::Any => "a value",
        }
    }
}

/// One entry of a command's argument schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgDef {
    pub name: &'static str,
    pub arg_type: ArgType,
    pub required: bool,
}

impl ArgDef {
    pub const fn required(name: &'static str, arg_type: ArgType) -> Self {
        Self {
            name,
            arg_type,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, arg_type: ArgType) -> Self {
        Self {
            name,
            arg_type,
            required: false,
        }
    }
}

/// Name-keyed command arguments
///
/// Serializes as a plain JSON object, which is the `cmdArgs` shape of a
/// history entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandArgs(BTreeMap<String, Value>);

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a present value; `None` values count as absent
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_none())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check against a schema and drop absent values
    ///
    /// Unknown keys are kept; commands only read what they declare.
    pub fn validate(&self, defs: &[ArgDef]) -> CmdResult<CommandArgs> {
        for def in defs {
            match self.get(def.name) {
                None if def.required => {
                    return Err(CmdError::MissingArgument(def.name.to_string()));
                }
                Some(value) if !def.arg_type.accepts(value) => {
                    return Err(CmdError::invalid_arg(
                        def.name,
                        format!("expected {}, got {}", def.arg_type.describe(), value.to_literal()),
                    ));
                }
                _ => {}
            }
        }
        for (name, _) in self.iter() {
            if !defs.iter().any(|d| d.name == name) {
                log::debug!("ignoring undeclared argument '{}'", name);
            }
        }
        Ok(CommandArgs(
            self.0
                .iter()
                .filter(|(_, v)| !v.is_none())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        ))
    }

    fn typed<'a, T>(
        &'a self,
        name: &str,
        expected: ArgType,
        convert: impl FnOnce(&'a Value) -> Option<T>,
    ) -> CmdResult<Option<T>> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => convert(value)
                .map(Some)
                .ok_or_else(|| CmdError::invalid_arg(name, format!("expected {}", expected.describe()))),
        }
    }

    pub fn optional_str(&self, name: &str) -> CmdResult<Option<&str>> {
        self.typed(name, ArgType::String, Value::as_str)
    }

    pub fn optional_f64(&self, name: &str) -> CmdResult<Option<f64>> {
        self.typed(name, ArgType::Float, Value::as_float)
    }

    pub fn optional_i64(&self, name: &str) -> CmdResult<Option<i64>> {
        self.typed(name, ArgType::Int, Value::as_int)
    }

    pub fn optional_bool(&self, name: &str) -> CmdResult<Option<bool>> {
        self.typed(name, ArgType::Bool, Value::as_bool)
    }

    pub fn optional_vec3(&self, name: &str) -> CmdResult<Option<Vec3>> {
        self.typed(name, ArgType::Vec3, Value::as_vec3)
    }

    pub fn optional_mat4(&self, name: &str) -> CmdResult<Option<Mat4>> {
        self.typed(name, ArgType::Matrix, Value::as_mat4)
    }

    pub fn require_str(&self, name: &str) -> CmdResult<&str> {
        self.optional_str(name)?.ok_or_else(|| missing(name))
    }

    pub fn require_f64(&self, name: &str) -> CmdResult<f64> {
        self.optional_f64(name)?.ok_or_else(|| missing(name))
    }

    pub fn require_i64(&self, name: &str) -> CmdResult<i64> {
        self.optional_i64(name)?.ok_or_else(|| missing(name))
    }

    pub fn require_bool(&self, name: &str) -> CmdResult<bool> {
        self.optional_bool(name)?.ok_or_else(|| missing(name))
    }

    pub fn require_vec3(&self, name: &str) -> CmdResult<Vec3> {
        self.optional_vec3(name)?.ok_or_else(|| missing(name))
    }

    pub fn require_mat4(&self, name: &str) -> CmdResult<Mat4> {
        self.optional_mat4(name)?.ok_or_else(|| missing(name))
    }
}

fn missing(name: &str) -> CmdError {
    CmdError::MissingArgument(name.to_string())
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for CommandArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CommandArgs(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_json_shapes() {
        let v: Value = serde_json::from_str(r#"[1, 2.5, "x", true, null]"#).unwrap();
        assert_eq!(
            v,
            Value::List(vec![
                Value::Int(1),
                Value::Float(2.5),
                Value::String("x".into()),
                Value::Bool(true),
                Value::None,
            ])
        );
    }

    #[test]
    fn test_value_as_vec3() {
        let v = Value::List(vec![Value::Int(1), Value::Float(2.0), Value::Int(-3)]);
        assert_eq!(v.as_vec3(), Some(Vec3::new(1.0, 2.0, -3.0)));
        assert_eq!(Value::List(vec![Value::Int(1)]).as_vec3(), None);
        assert_eq!(Value::from("x").as_vec3(), None);
    }

    #[test]
    fn test_value_as_mat4_rows_and_flat() {
        let rows = Value::from(Mat4::identity());
        assert_eq!(rows.as_mat4(), Some(Mat4::identity()));

        let flat = Value::List(
            (0..16)
                .map(|i| Value::Int(if i % 5 == 0 { 1 } else { 0 }))
                .collect(),
        );
        assert_eq!(flat.as_mat4(), Some(Mat4::identity()));
    }

    #[test]
    fn test_literal_form() {
        assert_eq!(Value::from("a \"b\"").to_literal(), r#""a \"b\"""#);
        assert_eq!(Value::Float(2.0).to_literal(), "2.0");
        assert_eq!(Value::Float(0.25).to_literal(), "0.25");
        assert_eq!(Value::None.to_literal(), "()");
        assert_eq!(
            Value::from(Vec3::new(1.0, 0.0, 0.5)).to_literal(),
            "[1.0, 0.0, 0.5]"
        );
    }

    #[test]
    fn test_validate_missing_and_wrong_kind() {
        let defs = [
            ArgDef::required("vector", ArgType::String),
            ArgDef::optional("scalar", ArgType::Float),
        ];

        let args = CommandArgs::new().with("scalar", 2.0);
        assert!(matches!(
            args.validate(&defs),
            Err(CmdError::MissingArgument(name)) if name == "vector"
        ));

        let args = CommandArgs::new().with("vector", 3);
        assert!(matches!(
            args.validate(&defs),
            Err(CmdError::InvalidArgument { name, .. }) if name == "vector"
        ));
    }

    #[test]
    fn test_validate_drops_null_optionals() {
        let defs = [
            ArgDef::required("vector", ArgType::String),
            ArgDef::optional("scalar", ArgType::Float),
        ];
        let args = CommandArgs::new()
            .with("vector", "up")
            .with("scalar", Value::None);
        let checked = args.validate(&defs).unwrap();
        assert_eq!(checked.len(), 1);
        assert!(!checked.contains("scalar"));
    }

    #[test]
    fn test_typed_getters() {
        let args = CommandArgs::new()
            .with("name", "left")
            .with("angle", 90)
            .with("flag", true);
        assert_eq!(args.require_str("name").unwrap(), "left");
        assert_eq!(args.require_f64("angle").unwrap(), 90.0);
        assert!(args.require_bool("flag").unwrap());
        assert_eq!(args.optional_f64("missing").unwrap(), None);
        assert!(matches!(
            args.require_str("angle"),
            Err(CmdError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_args_json_object() {
        let args = CommandArgs::new().with("vectorA", "up").with("vectorB", "left");
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"vectorA":"up","vectorB":"left"}"#
        );
    }
}
