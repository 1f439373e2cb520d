//! Host layout primitives
//!
//! Views, layout guides, raw anchors and constraints backed by a Cassowary
//! solver. The declarative anchor DSL in [`crate::anchor`] and
//! [`crate::bundle`] is layered on top of these.

pub mod constraint;
pub mod engine;
pub mod raw_anchor;
pub mod types;
pub mod view;

pub use constraint::Constraint;
pub use engine::{Conflict, Engine, MAX_CONFLICTS};
pub use raw_anchor::{AsRawAnchor, RawAnchor};
pub use types::*;
pub use view::{AnchorSource, LayoutGuide, LayoutItem, View};
