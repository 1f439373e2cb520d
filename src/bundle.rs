//! The per-element anchor bundle
//!
//! [`AutoLayoutAnchor`] holds one [`Anchor`] per attribute of a single item and
//! offers composite operations over them. Relationship operations
//! (`pin_to`, `center_to`, `size_to`, `size`) create and activate constraints
//! at required priority; magnitude operations (`padding`, `padding_center`,
//! `add`, `subtract`) then tune the constraints this same bundle created.
//!
//! ```
//! use anchor_layout::{AnchorLayout, EdgeInsets, Engine, Rect};
//!
//! let engine = Engine::new();
//! let root = engine.create_view("root");
//! let card = engine.create_view("card");
//! root.add_subview(&card);
//! root.set_frame(Rect::new(0.0, 0.0, 300.0, 200.0)).unwrap();
//!
//! card.anchor()
//!     .pin_to_all(&root)
//!     .padding(EdgeInsets::new(10.0, 20.0, 10.0, 20.0));
//!
//! assert!(card.frame().approx_eq(&Rect::new(20.0, 10.0, 260.0, 180.0), 0.001));
//! ```

use bitflags::bitflags;
use tracing::debug;

use crate::anchor::Anchor;
use crate::axis::{DimensionAxis, HorizontalAxis, VerticalAxis};
use crate::host::{AnchorSource, Attribute, Constraint, EdgeInsets, LayoutItem};

bitflags! {
    /// Subset of the four edges used by [`AutoLayoutAnchor::pin_to`]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP      = 0b0001;
        const BOTTOM   = 0b0010;
        const LEADING  = 0b0100;
        const TRAILING = 0b1000;
        const HORIZONTAL = Self::LEADING.bits() | Self::TRAILING.bits();
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::ALL
    }
}

/// All anchors of one layout item
///
/// Obtain one through [`AnchorLayout`](crate::AnchorLayout). Each bundle starts
/// with no constraints, and only sees the constraints it created itself: keep
/// using the same bundle to adjust what it created.
pub struct AutoLayoutAnchor {
    source: AnchorSource,
    pub leading: Anchor<HorizontalAxis>,
    pub trailing: Anchor<HorizontalAxis>,
    pub center_x: Anchor<HorizontalAxis>,
    pub top: Anchor<VerticalAxis>,
    pub bottom: Anchor<VerticalAxis>,
    pub center_y: Anchor<VerticalAxis>,
    pub first_baseline: Anchor<VerticalAxis>,
    pub last_baseline: Anchor<VerticalAxis>,
    pub width: Anchor<DimensionAxis>,
    pub height: Anchor<DimensionAxis>,
}

impl AutoLayoutAnchor {
    pub fn new<T: LayoutItem + ?Sized>(item: &T) -> Self {
        let source = item.anchor_source();
        Self {
            leading: Anchor::new(source.anchor(Attribute::Leading)),
            trailing: Anchor::new(source.anchor(Attribute::Trailing)),
            center_x: Anchor::new(source.anchor(Attribute::CenterX)),
            top: Anchor::new(source.anchor(Attribute::Top)),
            bottom: Anchor::new(source.anchor(Attribute::Bottom)),
            center_y: Anchor::new(source.anchor(Attribute::CenterY)),
            first_baseline: Anchor::new(source.anchor(Attribute::FirstBaseline)),
            last_baseline: Anchor::new(source.anchor(Attribute::LastBaseline)),
            width: Anchor::new(source.anchor(Attribute::Width)),
            height: Anchor::new(source.anchor(Attribute::Height)),
            source,
        }
    }

    /// Name of the item this bundle constrains
    pub fn item_name(&self) -> &str {
        self.source.name()
    }

    /// Pin the selected edges to the same edges of `target`
    ///
    /// Constraints are activated in the order top, bottom, leading, trailing.
    pub fn pin_to<T: LayoutItem + ?Sized>(&self, target: &T, edges: Edges) -> &Self {
        if edges.contains(Edges::TOP) {
            self.top.equal_to(&target.top_anchor());
        }
        if edges.contains(Edges::BOTTOM) {
            self.bottom.equal_to(&target.bottom_anchor());
        }
        if edges.contains(Edges::LEADING) {
            self.leading.equal_to(&target.leading_anchor());
        }
        if edges.contains(Edges::TRAILING) {
            self.trailing.equal_to(&target.trailing_anchor());
        }
        self
    }

    /// Pin all four edges to `target`
    pub fn pin_to_all<T: LayoutItem + ?Sized>(&self, target: &T) -> &Self {
        self.pin_to(target, Edges::ALL)
    }

    /// Pin the selected edges to the item's current superview
    ///
    /// Does nothing when the item is a guide or has no superview.
    pub fn pin_to_superview(&self, edges: Edges) -> &Self {
        match self.source.superview() {
            Some(superview) => self.pin_to(&superview, edges),
            None => {
                debug!(item = %self.item_name(), "no superview to pin to");
                self
            }
        }
    }

    /// Align both centers with `target`
    pub fn center_to<T: LayoutItem + ?Sized>(&self, target: &T) -> &Self {
        self.center_x.equal_to(&target.center_x_anchor());
        self.center_y.equal_to(&target.center_y_anchor());
        self
    }

    /// Match width and height of `target`
    pub fn size_to<T: LayoutItem + ?Sized>(&self, target: &T) -> &Self {
        self.width.equal_to(&target.width_anchor());
        self.height.equal_to(&target.height_anchor());
        self
    }

    /// Fix width and height to constants
    pub fn size(&self, width: f64, height: f64) -> &Self {
        self.width.equal_to_constant(width);
        self.height.equal_to_constant(height);
        self
    }

    /// Overwrite the four edge constants; follows `pin_to`
    ///
    /// Edges this bundle has not pinned are left alone.
    pub fn padding(&self, insets: EdgeInsets) -> &Self {
        self.top.padding(insets.top);
        self.bottom.padding(insets.bottom);
        self.leading.padding(insets.leading);
        self.trailing.padding(insets.trailing);
        self
    }

    /// Same padding on all four edges
    pub fn padding_edges(&self, value: f64) -> &Self {
        self.padding(EdgeInsets::uniform(value))
    }

    /// Overwrite the center offsets; follows `center_to`
    pub fn padding_center(&self, center_x: f64, center_y: f64) -> &Self {
        self.center_x.padding(center_x);
        self.center_y.padding(center_y);
        self
    }

    /// Grow the width and height constants; follows `size_to`, calls stack
    pub fn add(&self, width: f64, height: f64) -> &Self {
        self.width.add(width);
        self.height.add(height);
        self
    }

    /// Shrink the width and height constants; follows `size_to`, calls stack
    pub fn subtract(&self, width: f64, height: f64) -> &Self {
        self.width.subtract(width);
        self.height.subtract(height);
        self
    }

    /// Constraints created through this bundle, in attribute order
    pub fn constraints(&self) -> Vec<Constraint> {
        [
            self.leading.constraint(),
            self.trailing.constraint(),
            self.center_x.constraint(),
            self.top.constraint(),
            self.bottom.constraint(),
            self.center_y.constraint(),
            self.first_baseline.constraint(),
            self.last_baseline.constraint(),
            self.width.constraint(),
            self.height.constraint(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Deactivate every constraint this bundle created
    pub fn deactivate(&self) -> &Self {
        Constraint::deactivate_all(&self.constraints());
        self
    }
}

impl std::fmt::Debug for AutoLayoutAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoLayoutAnchor")
            .field("item", &self.item_name())
            .field("constraints", &self.constraints())
            .finish()
    }
}
