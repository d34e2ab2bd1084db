//! Model description for the scaffolded view.
//!
//! The view lists instances of an externally described data shape. Only the
//! ordered property names matter here; where they come from (reflection,
//! schema files, hand-written lists) is the caller's business, supplied as
//! a plain provider function. The sequence is computed on first access and
//! cached for the remainder of the run.

use std::cell::OnceCell;
use std::fmt;

type PropertyProvider = Box<dyn Fn() -> Vec<String>>;

/// Ordered property names of the model type, computed lazily.
pub struct ModelDescription {
    provider: PropertyProvider,
    cache: OnceCell<Vec<String>>,
}

impl ModelDescription {
    /// Create a description backed by a provider function.
    ///
    /// The provider runs at most once, on first access.
    pub fn new(provider: impl Fn() -> Vec<String> + 'static) -> Self {
        ModelDescription {
            provider: Box::new(provider),
            cache: OnceCell::new(),
        }
    }

    /// Create a description from a precomputed name list.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self::new(move || names.clone())
    }

    /// A description with no properties at all.
    pub fn empty() -> Self {
        Self::from_names(Vec::<String>::new())
    }

    /// The property names, in declaration order. Cached after the first
    /// call; the provider is never consulted again.
    pub fn properties(&self) -> &[String] {
        self.cache.get_or_init(|| (self.provider)())
    }

    /// Check whether the model has at least one property.
    pub fn has_properties(&self) -> bool {
        !self.properties().is_empty()
    }
}

impl fmt::Debug for ModelDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelDescription")
            .field("cached", &self.cache.get())
            .finish_non_exhaustive()
    }
}
