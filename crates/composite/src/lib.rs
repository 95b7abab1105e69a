//! Sample Composite Model
//!
//! A small composite-pattern tree (named leaves holding scalars, named
//! composites holding children) that implements
//! [`composite_navigator::Element`], plus a sample record used by the demo
//! binary and the navigator's integration tests.

mod component;
pub mod sample;

pub use component::{Component, NodeKind};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{sample, Component, NodeKind};
    pub use composite_navigator::prelude::*;
}
