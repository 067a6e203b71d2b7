//! Output Emitter
//!
//! Abstraction over where rendered text goes. Layout writes through an
//! [`Emitter`]; single-line attempts use a scratch [`StringEmitter`] that is
//! dropped when the attempt overflows.

/// Trait for emitting rendered output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation as the given number of spaces.
    fn emit_indent(&mut self, spaces: usize);

    /// Emit a single space.
    fn emit_space(&mut self);

    /// Columns already used on the current line.
    fn column(&self) -> usize;
}

/// String-based emitter for in-memory rendering.
///
/// Tracks the width of the current line in characters so callers can stop
/// as soon as a budget is exceeded.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
    column: usize,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            column: 0,
        }
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
        match text.rfind('\n') {
            Some(pos) => self.column = text[pos + 1..].chars().count(),
            None => self.column += text.chars().count(),
        }
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
        self.column = 0;
    }

    fn emit_indent(&mut self, spaces: usize) {
        self.buffer.extend(std::iter::repeat_n(' ', spaces));
        self.column += spaces;
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
        self.column += 1;
    }

    fn column(&self) -> usize {
        self.column
    }
}
