//! Output column naming for generators that derive one column per stat.

use std::fmt;
use std::sync::Arc;

/// Placeholder replaced by the source column in [`ColumnNaming::Template`].
pub const STAT_PLACEHOLDER: &str = "{stat}";

/// Maps a source stat column to its derived column name.
#[derive(Clone, Default)]
pub enum ColumnNaming {
    /// The generator's own default, e.g. `{stat}_prev_5g_avg`.
    #[default]
    Default,
    /// A template such as `"{stat}_per_min"`.
    Template(String),
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl ColumnNaming {
    pub fn template(template: impl Into<String>) -> Self {
        Self::Template(template.into())
    }

    pub fn custom<F>(rename: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(rename))
    }

    /// `Template` when a template is configured, `Default` otherwise.
    pub fn from_template(template: Option<&str>) -> Self {
        template.map_or(Self::Default, Self::template)
    }

    /// Name for `stat`; `default` is used for [`ColumnNaming::Default`].
    pub fn apply(&self, stat: &str, default: impl FnOnce(&str) -> String) -> String {
        match self {
            Self::Default => default(stat),
            Self::Template(template) => template.replace(STAT_PLACEHOLDER, stat),
            Self::Custom(rename) => rename(stat),
        }
    }
}

impl fmt::Debug for ColumnNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
