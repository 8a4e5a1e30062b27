//! Per-config diagnostics collected while building a palette.
//!
//! Errors are scoped to the smallest unit that can fail — a single color
//! config — and never abort the whole build. The caller always receives the
//! best-effort palette plus this report.

use std::fmt;

/// Diagnostics gathered during one palette build.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Per-config failures; each excluded exactly one config from the palette
    pub errors: Vec<GenerationError>,
    /// Non-fatal conditions; the affected entries are kept
    pub warnings: Vec<GenerationWarning>,
}

impl GenerationReport {
    /// Creates a new empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if every config made it into the palette (warnings are
    /// allowed).
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: GenerationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: GenerationWarning) {
        self.warnings.push(warning);
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!(
                "{} color(s) excluded from the palette:\n",
                self.errors.len()
            ));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("{} warning(s):\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

impl Default for GenerationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// A failure that excluded one color config from the palette.
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// Type of generation error
    pub kind: GenerationErrorKind,
    /// Group the config belonged to, when known
    pub group: Option<String>,
    /// Color name of the config, when known
    pub color_name: Option<String>,
    /// Human-readable error message
    pub message: String,
}

impl GenerationError {
    /// Creates a new generation error.
    pub fn new(kind: GenerationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            group: None,
            color_name: None,
            message: message.into(),
        }
    }

    /// Sets the group context.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets the color-name context.
    #[must_use]
    pub fn with_color_name(mut self, name: impl Into<String>) -> Self {
        self.color_name = Some(name.into());
        self
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.group, &self.color_name) {
            (Some(group), Some(name)) => {
                write!(f, "[{}/{}] {}: {}", group, name, self.kind, self.message)
            }
            (None, Some(name)) => write!(f, "[{}] {}: {}", name, self.kind, self.message),
            _ => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// Types of per-config generation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    /// A color component was NaN or outside its range
    InvalidComponent,
    /// A curve or width name in a definition file was not recognized
    UnknownEnumValue,
    /// The config had an empty color name at generation time
    EmptyName,
}

impl fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidComponent => write!(f, "Invalid Component"),
            Self::UnknownEnumValue => write!(f, "Unknown Enum Value"),
            Self::EmptyName => write!(f, "Empty Name"),
        }
    }
}

/// A non-fatal condition noticed during the build.
#[derive(Debug, Clone)]
pub struct GenerationWarning {
    /// Type of warning
    pub kind: GenerationWarningKind,
    /// Warning message
    pub message: String,
}

impl GenerationWarning {
    /// Creates a new generation warning.
    pub fn new(kind: GenerationWarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Types of non-fatal warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationWarningKind {
    /// Two configs in the same group share a color name; both are kept
    DuplicateName,
}
