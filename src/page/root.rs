//! # Declarative page configuration.
//!
//! The page's root element names its controller in one attribute and lists its
//! modules, space separated, in another. [`PageSpec::read`] turns those into the
//! arguments of `Registry::init` and `Registry::run`.
//!
//! ```text
//! <body id="home" data-modules="nav gallery">
//!        │                      │
//!        ▼                      ▼
//!   controller = "home"    modules = ["nav", "gallery"]
//! ```
//!
//! Missing attributes read as an empty controller and an empty module list.

use std::collections::HashMap;

use crate::config::Config;

/// Read-only view of the element carrying the page's bootstrap attributes.
pub trait RootElement {
    /// Returns the attribute value, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// In-memory attribute map; the simplest [`RootElement`].
///
/// # Example
/// ```
/// use pageboot::{Attributes, Config, PageSpec};
///
/// let root = Attributes::new()
///     .with("id", "home")
///     .with("data-modules", "nav  gallery");
/// let spec = PageSpec::read(&root, &Config::default());
///
/// assert_eq!(spec.controller, "home");
/// assert_eq!(spec.modules, vec!["nav", "gallery"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    values: HashMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with `name` set to `value`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl RootElement for Attributes {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}

/// Controller and module list declared by a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSpec {
    /// Controller identifier (empty when not declared).
    pub controller: String,
    /// Declared module identifiers, in page order.
    pub modules: Vec<String>,
}

impl PageSpec {
    /// Reads the controller and module attributes named in `cfg`.
    ///
    /// Repeated spaces produce no empty identifiers.
    pub fn read(root: &dyn RootElement, cfg: &Config) -> Self {
        let controller = root
            .attribute(&cfg.controller_attribute)
            .unwrap_or_default()
            .to_string();
        let modules = root
            .attribute(&cfg.modules_attribute)
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self {
            controller,
            modules,
        }
    }
}
