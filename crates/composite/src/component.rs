//! Composite-pattern node types

use std::fmt;

use composite_navigator::{Element, Value};
use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The type/kind of a component in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A composite - holds an ordered list of children
    #[display(fmt = "Composite")]
    Container,
    /// A leaf - holds a scalar value instead of children
    #[display(fmt = "Leaf")]
    Leaf,
}

impl NodeKind {
    /// Returns true if this is a container node
    pub const fn is_container(self) -> bool {
        matches!(self, NodeKind::Container)
    }

    /// Returns true if this is a leaf node
    pub const fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Leaf)
    }
}

/// A single component: either a named leaf or a named group of components
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Component {
    /// A leaf carrying an optional scalar
    Leaf { name: String, value: Option<Value> },
    /// A composite carrying child components
    Composite {
        name: String,
        children: Vec<Component>,
    },
}

impl Component {
    /// Create a new leaf
    pub fn leaf(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Component::Leaf {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a new leaf that stores no value
    pub fn empty_leaf(name: impl Into<String>) -> Self {
        Component::Leaf {
            name: name.into(),
            value: None,
        }
    }

    /// Create a new composite with no children
    pub fn composite(name: impl Into<String>) -> Self {
        Component::Composite {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child and return self (builder style)
    ///
    /// Appending to a leaf has no effect.
    pub fn with_child(mut self, child: Component) -> Self {
        self.add_child(child);
        self
    }

    /// Append a child; returns false if this component is a leaf
    pub fn add_child(&mut self, child: Component) -> bool {
        match self {
            Component::Composite { children, .. } => {
                children.push(child);
                true
            }
            Component::Leaf { .. } => false,
        }
    }

    /// The component's name
    pub fn name(&self) -> &str {
        match self {
            Component::Leaf { name, .. } | Component::Composite { name, .. } => name.as_str(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Component::Leaf { .. } => NodeKind::Leaf,
            Component::Composite { .. } => NodeKind::Container,
        }
    }

    /// The scalar value (always `None` for composites)
    pub fn value(&self) -> Option<&Value> {
        match self {
            Component::Leaf { value, .. } => value.as_ref(),
            Component::Composite { .. } => None,
        }
    }

    /// The child components (always `None` for leaves)
    pub fn children(&self) -> Option<&[Component]> {
        match self {
            Component::Leaf { .. } => None,
            Component::Composite { children, .. } => Some(children.as_slice()),
        }
    }

    /// Whether this component can hold children
    pub fn has_children(&self) -> bool {
        self.kind().is_container()
    }

    /// Leaf: length of the name. Composite: sum over all children.
    pub fn operate(&self) -> usize {
        match self {
            Component::Leaf { name, .. } => name.len(),
            Component::Composite { children, .. } => children.iter().map(Component::operate).sum(),
        }
    }
}

impl Element for Component {
    fn name(&self) -> &str {
        Component::name(self)
    }

    fn value(&self) -> Option<Value> {
        Component::value(self).cloned()
    }

    fn children(&self) -> Option<&[Self]> {
        Component::children(self)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Leaf {
                name,
                value: Some(value),
            } => write!(f, "{} = {}", name, value),
            Component::Leaf { name, value: None } => write!(f, "{}", name),
            Component::Composite { name, children } => {
                write!(f, "{} ({} children)", name, children.len())
            }
        }
    }
}
