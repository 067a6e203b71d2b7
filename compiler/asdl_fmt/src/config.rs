//! Formatting configuration.

/// Default column budget for a single-line rendering.
pub const MAX_LINE_WIDTH: usize = 80;

/// Spaces added per nesting level in multi-line form.
pub const INDENT_WIDTH: usize = 2;

/// How simple-sum values are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EnumStyle {
    /// Constructor name, e.g. `Plus`.
    #[default]
    Name,
    /// Raw integer tag, e.g. `1`.
    Tag,
}

/// What to do with a field that was never assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnsetPolicy {
    /// Write `field:?` in place of the value.
    #[default]
    Placeholder,
    /// Fail with [`FormatError::UnsetField`](crate::FormatError::UnsetField).
    Reject,
}

/// Configuration for the tree renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Maximum line width for single-line rendering.
    /// Defaults to 80 columns.
    pub max_width: usize,

    /// Indentation per level in multi-line form.
    /// Defaults to 2 spaces.
    pub indent_size: usize,

    pub enum_style: EnumStyle,

    pub unset: UnsetPolicy,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_LINE_WIDTH,
            indent_size: INDENT_WIDTH,
            enum_style: EnumStyle::Name,
            unset: UnsetPolicy::Placeholder,
        }
    }
}

impl FormatConfig {
    /// Create a new config with the specified max width.
    pub fn with_max_width(max_width: usize) -> Self {
        Self {
            max_width,
            ..Default::default()
        }
    }

    /// Create a new config with the specified indent size.
    pub fn with_indent_size(indent_size: usize) -> Self {
        Self {
            indent_size,
            ..Default::default()
        }
    }

    /// Same config, writing simple-sum values by tag.
    #[must_use]
    pub fn raw_tags(self) -> Self {
        Self {
            enum_style: EnumStyle::Tag,
            ..self
        }
    }

    /// Same config, failing on unset fields.
    #[must_use]
    pub fn reject_unset(self) -> Self {
        Self {
            unset: UnsetPolicy::Reject,
            ..self
        }
    }

    /// Leaf text for a simple-sum value.
    pub(crate) fn enum_leaf(&self, tag: u32, name: &str) -> String {
        match self.enum_style {
            EnumStyle::Name => name.to_string(),
            EnumStyle::Tag => tag.to_string(),
        }
    }
}
