//! Console sink
//!
//! Where a command invoked from a menu or other non-terminal surface echoes
//! its call and result, when the command asks for it.

use std::cell::RefCell;
use std::rc::Rc;

/// Terminal-like output target
pub trait ConsoleSink {
    /// Echo the canonical call expression
    fn print_input(&mut self, input: &str);

    /// Print a result
    fn print_output(&mut self, output: &str);

    /// Show a fresh prompt
    fn prompt(&mut self);
}

/// A line written to a [`BufferConsole`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Input(String),
    Output(String),
    Prompt,
}

/// In-memory console
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferConsole {
    lines: Rc<RefCell<Vec<ConsoleLine>>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl ConsoleSink for BufferConsole {
    fn print_input(&mut self, input: &str) {
        self.lines.borrow_mut().push(ConsoleLine::Input(input.to_string()));
    }

    fn print_output(&mut self, output: &str) {
        self.lines.borrow_mut().push(ConsoleLine::Output(output.to_string()));
    }

    fn prompt(&mut self) {
        self.lines.borrow_mut().push(ConsoleLine::Prompt);
    }
}
