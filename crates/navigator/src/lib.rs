//! Composite Navigator
//!
//! Read-only, name-based navigation over trees built with the composite
//! pattern: elements that have a name, optionally a scalar value, and
//! optionally an ordered list of children.
//!
//! # Core Concepts
//!
//! - **Accessor**: how the navigator reads name, value and children from an
//!   element ([`Element`] for self-describing nodes, [`FnAccessor`] for three
//!   closures over a foreign type)
//! - **Navigator**: an immutable view over one sibling scope, offering
//!   single, optional and repeated lookups, descent, and fixed-width splitting
//! - **Member**: the tagged result of resolving a field by name
//!
//! # Example
//!
//! ```
//! use composite_navigator::{Element, NavigationError, Navigator, Value};
//!
//! enum Node {
//!     Leaf(&'static str, i32),
//!     Group(&'static str, Vec<Node>),
//! }
//!
//! impl Element for Node {
//!     fn name(&self) -> &str {
//!         match self {
//!             Node::Leaf(name, _) | Node::Group(name, _) => *name,
//!         }
//!     }
//!
//!     fn value(&self) -> Option<Value> {
//!         match self {
//!             Node::Leaf(_, value) => Some(Value::Int(*value)),
//!             Node::Group(..) => None,
//!         }
//!     }
//!
//!     fn children(&self) -> Option<&[Node]> {
//!         match self {
//!             Node::Leaf(..) => None,
//!             Node::Group(_, children) => Some(children.as_slice()),
//!         }
//!     }
//! }
//!
//! let line = Node::Group(
//!     "LINE",
//!     vec![
//!         Node::Leaf("YCOO", 1),
//!         Node::Leaf("XCOO", 2),
//!         Node::Leaf("YCOO", 3),
//!         Node::Leaf("XCOO", 4),
//!     ],
//! );
//!
//! let points = Navigator::from_root(&line)
//!     .descend_single("LINE", |coords| {
//!         coords
//!             .split(2)
//!             .map(|pair| -> Result<(i32, i32), NavigationError> {
//!                 Ok((pair.get_value("YCOO")?, pair.get_value("XCOO")?))
//!             })
//!             .collect::<Result<Vec<_>, _>>()
//!     })
//!     .unwrap();
//!
//! assert_eq!(points, vec![(1, 2), (3, 4)]);
//! ```

mod accessor;
mod engine;
mod error;
mod iter;
mod member;
mod navigator;
mod value;

pub use accessor::{Accessor, Element, FnAccessor, SelfAccess};
pub use error::{NavigationError, Result};
pub use iter::{Descend, DescendWith, Split};
pub use member::Member;
pub use navigator::Navigator;
pub use value::{FromValue, Value};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Element, FromValue, Member, NavigationError, Navigator, Value};
}
