//! Entry points from a layout item to its anchor bundle

use crate::bundle::AutoLayoutAnchor;
use crate::host::LayoutItem;

/// Access to the [`AutoLayoutAnchor`] of any view or layout guide
///
/// [`anchor`](AnchorLayout::anchor) builds a new bundle on every call; a
/// bundle never sees constraints made through another one. Use
/// [`with_anchor`](AnchorLayout::with_anchor) when the same constraints are
/// created and then adjusted or stored across several statements.
///
/// ```
/// use anchor_layout::{AnchorLayout, Engine, Rect};
///
/// let engine = Engine::new();
/// let root = engine.create_view("root");
/// let badge = engine.create_view("badge");
/// root.set_frame(Rect::new(0.0, 0.0, 200.0, 200.0)).unwrap();
///
/// let mut width = None;
/// badge.with_anchor(|a| {
///     a.center_to(&root).size(50.0, 50.0);
///     a.width.store(&mut width);
/// });
///
/// assert!(badge.frame().approx_eq(&Rect::new(75.0, 75.0, 50.0, 50.0), 0.001));
/// assert!(width.unwrap().is_active());
/// ```
pub trait AnchorLayout: LayoutItem {
    /// A fresh bundle with no constraints
    fn anchor(&self) -> AutoLayoutAnchor {
        AutoLayoutAnchor::new(self)
    }

    /// Run `f` with one bundle, returning what `f` returns
    fn with_anchor<R>(&self, f: impl FnOnce(&AutoLayoutAnchor) -> R) -> R {
        let anchor = self.anchor();
        f(&anchor)
    }
}

impl<T: LayoutItem + ?Sized> AnchorLayout for T {}
