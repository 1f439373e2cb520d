//! Axis tags
//!
//! Anchors carry one of these uninhabited types as a parameter so that a
//! horizontal anchor can only ever be related to another horizontal anchor.
//! Mixing axes is a type error:
//!
//! ```compile_fail
//! use anchor_layout::{AnchorLayout, Engine, LayoutItem};
//!
//! let engine = Engine::new();
//! let a = engine.create_view("a");
//! let b = engine.create_view("b");
//! a.anchor().leading.equal_to(&b.top_anchor());
//! ```
//!
//! ```compile_fail
//! use anchor_layout::{AnchorLayout, Engine, LayoutItem};
//!
//! let engine = Engine::new();
//! let a = engine.create_view("a");
//! let b = engine.create_view("b");
//! a.anchor().width.equal_to(&b.leading_anchor());
//! ```
//!
//! Dimension anchors cannot be padded, and edge anchors cannot be grown:
//!
//! ```compile_fail
//! use anchor_layout::{AnchorLayout, Engine};
//!
//! let engine = Engine::new();
//! let a = engine.create_view("a");
//! a.anchor().width.padding(4.0);
//! ```
//!
//! ```compile_fail
//! use anchor_layout::{AnchorLayout, Engine};
//!
//! let engine = Engine::new();
//! let a = engine.create_view("a");
//! a.anchor().top.add(4.0);
//! ```

mod sealed {
    pub trait Sealed {}
}

/// Marker implemented by the three axis tags only
pub trait Axis: sealed::Sealed + 'static {
    /// Human-readable axis name
    const NAME: &'static str;
}

/// Axes whose anchors are edges or centers, which accept padding
pub trait EdgeAxis: Axis {}

/// Leading, trailing and center-x anchors
#[derive(Debug)]
pub enum HorizontalAxis {}

/// Top, bottom, center-y and baseline anchors
#[derive(Debug)]
pub enum VerticalAxis {}

/// Width and height anchors
#[derive(Debug)]
pub enum DimensionAxis {}

impl sealed::Sealed for HorizontalAxis {}
impl sealed::Sealed for VerticalAxis {}
impl sealed::Sealed for DimensionAxis {}

impl Axis for HorizontalAxis {
    const NAME: &'static str = "horizontal";
}

impl Axis for VerticalAxis {
    const NAME: &'static str = "vertical";
}

impl Axis for DimensionAxis {
    const NAME: &'static str = "dimension";
}

impl EdgeAxis for HorizontalAxis {}
impl EdgeAxis for VerticalAxis {}
