//! # Remote Resource Tools

/// A resource with a constant list of mirror URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstUrlResource {
    /// The mirror URLs for this resource; tried in order.
    pub urls: &'static [&'static str],
}

impl ConstUrlResource {
    /// Create a new [`ConstUrlResource`].
    pub const fn new(urls: &'static [&'static str]) -> Self {
        Self { urls }
    }
}

/// A keyed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstKeyedResource {
    /// The key associated with this resource.
    ///
    /// This is used in place of a URI for internal caching
    /// and fetch unification; so it must be unique per artifact,
    /// not just per file name.
    pub key: &'static [&'static str],

    /// The resource associated with this key.
    pub resource: ConstUrlResource,
}

impl ConstKeyedResource {
    /// The key, joined with `/`.
    pub fn key_string(&self) -> String {
        self.key.join("/")
    }
}
