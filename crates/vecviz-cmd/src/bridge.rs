//! Expression bridge
//!
//! Binds command names as callable functions in an embedded rhai engine,
//! so terminal input like `crossProduct("up", "left")` or
//! `let r = addVectors("$", "$-1"); dumpVector(r)` reaches the engine.
//! Variables persist between evaluations.

use std::cell::RefCell;
use std::rc::Rc;

use rhai::{Array, Dynamic, Engine, EvalAltResult, Scope};

use crate::args::Value;
use crate::error::{CmdError, CmdResult, ParseError};
use crate::script::prepare_source;

type BoundFn = dyn Fn(Vec<Value>) -> CmdResult<Value>;

/// Evaluates expression text against bound functions
pub struct ExpressionBridge {
    engine: Engine,
    scope: Scope<'static>,
    /// Error raised by a bound function during the current evaluation
    pending_error: Rc<RefCell<Option<CmdError>>>,
    symbols: Vec<String>,
}

impl Default for ExpressionBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBridge {
    pub fn new() -> Self {
        let mut engine = Engine::new();
        engine.on_print(|text| log::info!("{}", text));
        engine.on_debug(|text, source, pos| {
            log::debug!("{} @ {:?} {:?}", text, source, pos);
        });
        Self {
            engine,
            scope: Scope::new(),
            pending_error: Rc::new(RefCell::new(None)),
            symbols: Vec::new(),
        }
    }

    /// Bind `symbol` to `f`, replacing any earlier binding
    ///
    /// The function receives its positional arguments, at most
    /// [`MAX_ARGS`](crate::command::MAX_ARGS) of them.
    pub fn bind(&mut self, symbol: &str, f: impl Fn(Vec<Value>) -> CmdResult<Value> + 'static) {
        let f: Rc<BoundFn> = Rc::new(f);
        let pending = &self.pending_error;
        let engine = &mut self.engine;

        macro_rules! register_arities {
            ($( ( $($arg:ident),* ) )*) => {$(
                {
                    let f = Rc::clone(&f);
                    let pending = Rc::clone(pending);
                    engine.register_fn(
                        symbol,
                        move |$($arg: Dynamic),*| -> Result<Dynamic, Box<EvalAltResult>> {
                            invoke(&*f, &pending, vec![$($arg),*])
                        },
                    );
                }
            )*};
        }

        register_arities! {
            ()
            (a0)
            (a0, a1)
            (a0, a1, a2)
            (a0, a1, a2, a3)
            (a0, a1, a2, a3, a4)
            (a0, a1, a2, a3, a4, a5)
            (a0, a1, a2, a3, a4, a5, a6)
            (a0, a1, a2, a3, a4, a5, a6, a7)
            (a0, a1, a2, a3, a4, a5, a6, a7, a8)
            (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9)
            (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10)
            (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11)
            (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12)
            (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13)
            (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14)
            (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15)
        }

        if !self.symbols.iter().any(|s| s == symbol) {
            self.symbols.push(symbol.to_string());
        }
        log::debug!("bound '{}'", symbol);
    }

    pub fn is_bound(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Bound symbols in binding order
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Evaluate expression text; returns the value of the last statement
    pub fn evaluate(&mut self, text: &str) -> CmdResult<Value> {
        let source = prepare_source(text);
        let ast = self
            .engine
            .compile_with_scope(&self.scope, &source)
            .map_err(ParseError::from)?;

        self.pending_error.borrow_mut().take();
        let outcome = self
            .engine
            .eval_ast_with_scope::<Dynamic>(&mut self.scope, &ast);
        let pending = self.pending_error.borrow_mut().take();

        match outcome {
            Ok(result) => to_value(result).map_err(|e| CmdError::evaluation(e.to_string())),
            Err(err) => Err(pending.unwrap_or_else(|| CmdError::evaluation(err.to_string()))),
        }
    }

    /// Forget all script variables
    pub fn clear_variables(&mut self) {
        self.scope.clear();
    }
}

fn invoke(
    f: &BoundFn,
    pending: &RefCell<Option<CmdError>>,
    args: Vec<Dynamic>,
) -> Result<Dynamic, Box<EvalAltResult>> {
    let values = args
        .into_iter()
        .map(to_value)
        .collect::<Result<Vec<_>, _>>()?;
    match f(values) {
        Ok(value) => Ok(from_value(value)),
        Err(e) => {
            let message = e.to_string();
            *pending.borrow_mut() = Some(e);
            Err(message.into())
        }
    }
}

fn to_value(d: Dynamic) -> Result<Value, Box<EvalAltResult>> {
    if d.is_unit() {
        return Ok(Value::None);
    }
    if let Ok(b) = d.as_bool() {
        return Ok(Value::Bool(b));
    }
    if let Ok(i) = d.as_int() {
        return Ok(Value::Int(i));
    }
    if let Ok(f) = d.as_float() {
        return Ok(Value::Float(f));
    }
    if let Ok(c) = d.as_char() {
        return Ok(Value::String(c.to_string()));
    }
    if d.is_string() {
        let s = d.into_string()?;
        return Ok(Value::String(s));
    }
    if d.is_array() {
        let items = d.into_array()?;
        return items
            .into_iter()
            .map(to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List);
    }
    Err(format!("values of type '{}' cannot be passed to commands", d.type_name()).into())
}

fn from_value(v: Value) -> Dynamic {
    match v {
        Value::None => Dynamic::UNIT,
        Value::Bool(b) => Dynamic::from(b),
        Value::Int(i) => Dynamic::from(i),
        Value::Float(f) => Dynamic::from(f),
        Value::String(s) => Dynamic::from(s),
        Value::List(items) => Dynamic::from_array(items.into_iter().map(from_value).collect::<Array>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge_with_sum() -> ExpressionBridge {
        let mut bridge = ExpressionBridge::new();
        bridge.bind("sum", |args| {
            let mut total = 0.0;
            for arg in &args {
                total += arg
                    .as_float()
                    .ok_or_else(|| CmdError::invalid_arg("value", "expected a number"))?;
            }
            Ok(Value::Float(total))
        });
        bridge
    }

    #[test]
    fn test_bound_function_any_arity() {
        let mut bridge = bridge_with_sum();
        assert_eq!(bridge.evaluate("sum()").unwrap(), Value::Float(0.0));
        assert_eq!(bridge.evaluate("sum(1, 2.5)").unwrap(), Value::Float(3.5));
        assert!(bridge.is_bound("sum"));
    }

    #[test]
    fn test_variables_persist() {
        let mut bridge = bridge_with_sum();
        bridge.evaluate("let x = sum(1, 2)").unwrap();
        assert_eq!(bridge.evaluate("x").unwrap(), Value::Float(3.0));
        bridge.clear_variables();
        assert!(bridge.evaluate("x").is_err());
    }

    #[test]
    fn test_values_cross_the_bridge() {
        let mut bridge = ExpressionBridge::new();
        bridge.bind("echo", |mut args| Ok(args.pop().unwrap_or_default()));
        assert_eq!(
            bridge.evaluate("echo([1, \"a\", true])").unwrap(),
            Value::List(vec![Value::Int(1), Value::from("a"), Value::Bool(true)])
        );
        assert_eq!(bridge.evaluate("echo()").unwrap(), Value::None);
    }

    #[test]
    fn test_handler_error_surfaces_unchanged() {
        let mut bridge = bridge_with_sum();
        assert!(matches!(
            bridge.evaluate("sum(\"x\")"),
            Err(CmdError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_unknown_symbol_is_evaluation_error() {
        let mut bridge = ExpressionBridge::new();
        assert!(matches!(
            bridge.evaluate("nothingHere(1)"),
            Err(CmdError::Evaluation(_))
        ));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let mut bridge = ExpressionBridge::new();
        assert!(matches!(
            bridge.evaluate("let = 5"),
            Err(CmdError::Parse(ParseError::Script { line: 1, .. }))
        ));
    }

    #[test]
    fn test_rebinding_last_wins() {
        let mut bridge = ExpressionBridge::new();
        bridge.bind("f", |_| Ok(Value::Int(1)));
        bridge.bind("f", |_| Ok(Value::Int(2)));
        assert_eq!(bridge.evaluate("f()").unwrap(), Value::Int(2));
        assert_eq!(bridge.symbols().len(), 1);
    }
}
