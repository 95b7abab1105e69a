use derive_more::Display;

/// Errors raised when a query violates the shape of the current scope
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum NavigationError {
    /// No element in scope has the requested member name
    #[display(fmt = "unknown member `{}`", name)]
    UnknownMember { name: String },

    /// A single-cardinality query matched zero or several elements
    #[display(fmt = "expected exactly one element named `{}`, found {}", name, found)]
    Multiplicity { name: String, found: usize },

    /// Descent was requested on a leaf element
    #[display(fmt = "element `{}` is not composite", name)]
    NotComposite { name: String },

    /// A value could not be read as the requested type
    #[display(
        fmt = "element `{}` holds {}, which cannot be read as {}",
        name,
        found,
        expected
    )]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl std::error::Error for NavigationError {}

impl NavigationError {
    pub(crate) fn unknown_member(name: &str) -> Self {
        Self::UnknownMember {
            name: name.to_string(),
        }
    }

    pub(crate) fn multiplicity(name: &str, found: usize) -> Self {
        Self::Multiplicity {
            name: name.to_string(),
            found,
        }
    }

    pub(crate) fn not_composite(name: &str) -> Self {
        Self::NotComposite {
            name: name.to_string(),
        }
    }

    pub(crate) fn type_mismatch(name: &str, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            name: name.to_string(),
            expected,
            found,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, NavigationError>;
