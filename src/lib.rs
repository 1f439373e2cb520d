//! Anchor Layout - declarative layout constraints over a Cassowary solver
//!
//! Every [`View`] and [`LayoutGuide`] exposes an [`AutoLayoutAnchor`] bundle
//! through [`AnchorLayout`]. Bundles turn common layout intents into a few
//! chained calls:
//!
//! ```rust
//! use anchor_layout::{AnchorLayout, EdgeInsets, Engine, Rect};
//!
//! let engine = Engine::new();
//! let root = engine.create_view("root");
//! let content = engine.create_view("content");
//! let badge = engine.create_view("badge");
//! root.add_subview(&content);
//! root.add_subview(&badge);
//! root.set_frame(Rect::new(0.0, 0.0, 320.0, 480.0)).unwrap();
//!
//! content
//!     .anchor()
//!     .pin_to_all(&root)
//!     .padding(EdgeInsets::new(10.0, 20.0, 10.0, 20.0));
//! badge.anchor().center_to(&root).size(50.0, 50.0);
//!
//! assert!(content.frame().approx_eq(&Rect::new(20.0, 10.0, 280.0, 460.0), 0.001));
//! assert!(badge.frame().approx_eq(&Rect::new(135.0, 215.0, 50.0, 50.0), 0.001));
//! ```
//!
//! Anchors are typed by axis ([`HorizontalAxis`], [`VerticalAxis`],
//! [`DimensionAxis`]), so relating a horizontal anchor to a vertical one does
//! not compile.

pub mod accessor;
pub mod adapters;
pub mod anchor;
pub mod axis;
pub mod bundle;
pub mod config;
pub mod error;
pub mod host;

pub use accessor::AnchorLayout;
pub use anchor::Anchor;
pub use axis::{Axis, DimensionAxis, EdgeAxis, HorizontalAxis, VerticalAxis};
pub use bundle::{AutoLayoutAnchor, Edges};
pub use config::{ConfigError, EngineConfig};
pub use error::LayoutError;
pub use host::{
    AsRawAnchor, Attribute, Conflict, Constraint, EdgeInsets, Engine, LayoutDirection,
    LayoutGuide, LayoutItem, Priority, RawAnchor, Rect, Relation, View,
};
