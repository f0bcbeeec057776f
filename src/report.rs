//! Error reports and their text rendering.

use crate::value::Value;

// Frames the renderer must never describe: itself, and the error-handler
// trampoline that wraps every raised error.
const TRACE_RENDERER_FN: &str = "render_backtrace";
const ERROR_HANDLER_FN: &str = "handle_error";

/// How a frame's function was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallKind {
    Instance,
    Static,
}

impl CallKind {
    pub fn symbol(self) -> &'static str {
        match self {
            CallKind::Instance => "->",
            CallKind::Static => "::",
        }
    }
}

/// Enclosing type of a frame's function.
#[derive(Clone, Debug)]
pub struct Scope {
    type_name: String,
    kind: CallKind,
}

/// One entry of a captured call chain.
#[derive(Clone, Debug)]
pub struct Frame {
    file: Option<String>,
    line: Option<u32>,
    scope: Option<Scope>,
    function: String,
    args: Vec<Value>,
}

impl Frame {
    pub fn new(function: impl Into<String>) -> Frame {
        Frame {
            file: None,
            line: None,
            scope: None,
            function: function.into(),
            args: Vec::new(),
        }
    }

    pub fn at(mut self, file: impl Into<String>, line: u32) -> Frame {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    pub fn scope(mut self, type_name: impl Into<String>, kind: CallKind) -> Frame {
        self.scope = Some(Scope {
            type_name: type_name.into(),
            kind,
        });
        self
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Frame {
        self.args.push(value.into());
        self
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

/// Snapshot of a raised error: what, where, and the call chain that led
/// there. Frames are kept innermost first.
#[derive(Clone, Debug)]
pub struct ErrorReport {
    message: String,
    file: String,
    line: u32,
    frames: Vec<Frame>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>, file: impl Into<String>, line: u32) -> ErrorReport {
        ErrorReport {
            message: message.into(),
            file: file.into(),
            line,
            frames: Vec::new(),
        }
    }

    pub fn frame(mut self, frame: Frame) -> ErrorReport {
        self.frames.push(frame);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Four-part text block: message, location, then the rendered call chain.
    pub fn render(&self) -> String {
        format!(
            "Message: {}\nFile: {}\nLine: {}\nStacktrace:\n{}",
            self.message,
            self.file,
            self.line,
            render_backtrace(&self.frames)
        )
    }
}

/// One line per retained frame, in original order.
pub fn render_backtrace(frames: &[Frame]) -> String {
    let mut text = String::new();
    for frame in frames {
        if frame.function == TRACE_RENDERER_FN || frame.function == ERROR_HANDLER_FN {
            continue;
        }
        if let (Some(file), Some(line)) = (&frame.file, frame.line) {
            text.push_str(&format!("In {} at line {}: ", file, line));
        }
        if let Some(scope) = &frame.scope {
            text.push_str(&format!(
                "{}{}{}(",
                scope.type_name,
                scope.kind.symbol(),
                frame.function
            ));
        }
        for (i, arg) in frame.args.iter().enumerate() {
            if i > 0 {
                text.push_str(", ");
            }
            text.push_str(&arg.to_string());
        }
        text.push_str(")\n");
    }
    text
}
