use std::fmt::{self, Display, Formatter};

/// Non-fatal problem found while composing the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// An environment value could not be parsed and was ignored.
    IgnoredEnvValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
    /// The named `.env` file could not be read.
    EnvFileUnreadable { path: String, reason: String },
}

impl Display for ConfigWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::IgnoredEnvValue { key, value, reason } => {
                write!(f, "ignoring {key}={value:?}: {reason}")
            }
            ConfigWarning::EnvFileUnreadable { path, reason } => {
                write!(f, "could not load env file {path}: {reason}")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings {
    items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, warning: ConfigWarning) {
        self.items.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ConfigWarnings {
    type Item = &'a ConfigWarning;
    type IntoIter = std::slice::Iter<'a, ConfigWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
