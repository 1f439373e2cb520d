//! Core value types shared by the host layer and the anchor DSL

use std::fmt;

use kasuari::Strength;
use serde::Deserialize;

/// A solved rectangle in the coordinate system of the engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Check every component against `other` within `tolerance`
    pub fn approx_eq(&self, other: &Rect, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

/// Insets along the four edges, expressed in the reading direction
///
/// Positive values always move an edge inward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl EdgeInsets {
    pub fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Same inset on all four edges
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// Geometric attribute of a layout item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Leading,
    Trailing,
    CenterX,
    Top,
    Bottom,
    CenterY,
    FirstBaseline,
    LastBaseline,
    Width,
    Height,
}

impl Attribute {
    /// All attributes in canonical order
    pub const ALL: [Attribute; 10] = [
        Attribute::Leading,
        Attribute::Trailing,
        Attribute::CenterX,
        Attribute::Top,
        Attribute::Bottom,
        Attribute::CenterY,
        Attribute::FirstBaseline,
        Attribute::LastBaseline,
        Attribute::Width,
        Attribute::Height,
    ];

    /// Edges whose padding is applied with an inverted sign so that a
    /// positive value always insets.
    pub fn is_inset_inverted(self) -> bool {
        matches!(self, Attribute::Trailing | Attribute::Bottom)
    }

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Leading => "leading",
            Attribute::Trailing => "trailing",
            Attribute::CenterX => "center_x",
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::CenterY => "center_y",
            Attribute::FirstBaseline => "first_baseline",
            Attribute::LastBaseline => "last_baseline",
            Attribute::Width => "width",
            Attribute::Height => "height",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relation between the two sides of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::Equal => "==",
            Relation::GreaterOrEqual => ">=",
            Relation::LessOrEqual => "<=",
        })
    }
}

/// Constraint priority in `1..=1000`
///
/// Only [`Priority::REQUIRED`] constraints can make the system unsatisfiable;
/// lower priorities are honoured as closely as the solver can manage, higher
/// values winning over lower ones.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(from = "f32")]
pub struct Priority(f32);

impl Priority {
    pub const REQUIRED: Priority = Priority(1000.0);
    pub const DEFAULT_HIGH: Priority = Priority(750.0);
    pub const DEFAULT_LOW: Priority = Priority(250.0);
    pub const FITTING_SIZE: Priority = Priority(50.0);

    /// Create a priority, clamping into `1..=1000`
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::REQUIRED;
        }
        Self(value.clamp(1.0, 1000.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_required(self) -> bool {
        self.0 >= 1000.0
    }

    /// Map onto a solver strength, preserving order below `STRONG`
    pub(crate) fn strength(self) -> Strength {
        if self.is_required() {
            Strength::REQUIRED
        } else {
            Strength::MEDIUM.mul_f64(f64::from(self.0))
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reading direction, deciding which physical edge is "leading"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Stable identity of a view or layout guide within one engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Distance of the text baselines from the item's top and bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BaselineOffsets {
    /// First baseline, measured down from the top edge
    pub first_from_top: f64,
    /// Last baseline, measured up from the bottom edge
    pub last_from_bottom: f64,
}
