//! Rendered argument list for a single tool invocation.
//!
//! A [`CommandLine`] keeps both views of the same arguments: the raw argv
//! tokens handed to the OS, and a display form that quotes paths exactly as
//! the tool's documented syntax does.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// The operation flag, e.g. `-ExportLevel`.
    Flag(&'static str),
    /// A filesystem path; `quoted` controls the display form only.
    Path { value: OsString, quoted: bool },
    /// A literal value (hex number, enum token).
    Value(String),
}

/// Builder and container for Lunar Magic arguments.
///
/// Tokens are kept in insertion order. Each path is a single argv entry no
/// matter what characters it contains.
///
/// # Example
///
/// ```
/// use lmwrap_core::CommandLine;
///
/// let cmd = CommandLine::new("-ExportLevel")
///     .path("my hack.smc")
///     .path("level 105.mwl")
///     .value("105");
///
/// assert_eq!(cmd.to_string(), r#"-ExportLevel "my hack.smc" "level 105.mwl" 105"#);
/// assert_eq!(cmd.args().count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<Token>,
}

impl CommandLine {
    /// Start a command line with the operation flag.
    pub fn new(flag: &'static str) -> Self {
        Self {
            tokens: vec![Token::Flag(flag)],
        }
    }

    /// Append a path, shown quoted.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.tokens.push(Token::Path {
            value: path.as_ref().as_os_str().to_os_string(),
            quoted: true,
        });
        self
    }

    /// Append a path, shown unquoted.
    ///
    /// A few operations take their output path without quotes in the
    /// documented syntax. The argv entry is the same either way.
    #[must_use]
    pub fn bare_path(mut self, path: impl AsRef<Path>) -> Self {
        self.tokens.push(Token::Path {
            value: path.as_ref().as_os_str().to_os_string(),
            quoted: false,
        });
        self
    }

    /// Append a literal value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.tokens.push(Token::Value(value.into()));
        self
    }

    /// Append a literal value only when present.
    #[must_use]
    pub fn value_opt(self, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.value(value),
            None => self,
        }
    }

    /// The operation flag this command line starts with.
    pub fn flag(&self) -> &'static str {
        match self.tokens.first() {
            Some(Token::Flag(flag)) => flag,
            _ => "",
        }
    }

    /// Raw argv tokens in order, ready for `std::process::Command::args`.
    pub fn args(&self) -> impl Iterator<Item = &OsStr> {
        self.tokens.iter().map(|token| match token {
            Token::Flag(flag) => OsStr::new(flag),
            Token::Path { value, .. } => value.as_os_str(),
            Token::Value(value) => OsStr::new(value.as_str()),
        })
    }

    /// Number of argv tokens, flag included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: a command line holds at least its flag.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match token {
                Token::Flag(flag) => f.write_str(flag)?,
                Token::Path {
                    value,
                    quoted: true,
                } => write!(f, "\"{}\"", value.to_string_lossy())?,
                Token::Path {
                    value,
                    quoted: false,
                } => f.write_str(&value.to_string_lossy())?,
                Token::Value(value) => f.write_str(value)?,
            }
        }
        Ok(())
    }
}
