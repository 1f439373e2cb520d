//! Views, layout guides and the attribute surface they share

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use kasuari::Expression;
use tracing::debug;

use crate::axis::{DimensionAxis, HorizontalAxis, VerticalAxis};
use crate::error::LayoutError;

use super::constraint::{AnchorTerm, Constraint};
use super::engine::{Engine, EngineState, FrameVars};
use super::raw_anchor::RawAnchor;
use super::types::{Attribute, BaselineOffsets, ItemId, LayoutDirection, Priority, Rect, Relation};

/// Everything an anchor needs to know about the item it belongs to
#[derive(Clone)]
pub struct AnchorSource {
    id: ItemId,
    name: Rc<str>,
    frame: FrameVars,
    baselines: BaselineOffsets,
    direction: LayoutDirection,
    engine: Weak<RefCell<EngineState>>,
    /// Set when the item is a view, to resolve its superview later
    view: Option<Weak<ViewInner>>,
}

impl AnchorSource {
    pub fn item(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view's current superview; always `None` for guides
    pub fn superview(&self) -> Option<View> {
        let view = self.view.as_ref()?.upgrade()?;
        let superview = view.superview.borrow().upgrade()?;
        Some(View { inner: superview })
    }

    pub(crate) fn anchor<A: crate::axis::Axis>(&self, attribute: Attribute) -> RawAnchor<A> {
        RawAnchor::new(self.term(attribute), self.engine.clone())
    }

    /// Linear expression of `attribute` over the frame variables
    ///
    /// Horizontal attributes are measured along the reading direction, so a
    /// positive constant always moves toward trailing.
    fn term(&self, attribute: Attribute) -> AnchorTerm {
        let FrameVars {
            x,
            y,
            width,
            height,
        } = self.frame;
        let rtl = self.direction == LayoutDirection::RightToLeft;
        let expr: Expression = match attribute {
            Attribute::Leading if rtl => x * -1.0 + width * -1.0,
            Attribute::Leading => x.into(),
            Attribute::Trailing if rtl => Expression::from(x * -1.0),
            Attribute::Trailing => x + width,
            Attribute::CenterX if rtl => x * -1.0 + width * -0.5,
            Attribute::CenterX => x + width * 0.5,
            Attribute::Top => y.into(),
            Attribute::Bottom => y + height,
            Attribute::CenterY => y + height * 0.5,
            Attribute::FirstBaseline => Expression::from(y) + self.baselines.first_from_top,
            Attribute::LastBaseline => (y + height) + -self.baselines.last_from_bottom,
            Attribute::Width => width.into(),
            Attribute::Height => height.into(),
        };
        AnchorTerm {
            item_id: self.id,
            item_name: self.name.clone(),
            attribute,
            expr,
        }
    }
}

/// An element that exposes the full set of layout anchors
///
/// Implemented by [`View`] and [`LayoutGuide`]; either can be the subject or
/// the target of a constraint.
pub trait LayoutItem {
    fn anchor_source(&self) -> AnchorSource;

    fn leading_anchor(&self) -> RawAnchor<HorizontalAxis> {
        self.anchor_source().anchor(Attribute::Leading)
    }

    fn trailing_anchor(&self) -> RawAnchor<HorizontalAxis> {
        self.anchor_source().anchor(Attribute::Trailing)
    }

    fn center_x_anchor(&self) -> RawAnchor<HorizontalAxis> {
        self.anchor_source().anchor(Attribute::CenterX)
    }

    fn top_anchor(&self) -> RawAnchor<VerticalAxis> {
        self.anchor_source().anchor(Attribute::Top)
    }

    fn bottom_anchor(&self) -> RawAnchor<VerticalAxis> {
        self.anchor_source().anchor(Attribute::Bottom)
    }

    fn center_y_anchor(&self) -> RawAnchor<VerticalAxis> {
        self.anchor_source().anchor(Attribute::CenterY)
    }

    fn first_baseline_anchor(&self) -> RawAnchor<VerticalAxis> {
        self.anchor_source().anchor(Attribute::FirstBaseline)
    }

    fn last_baseline_anchor(&self) -> RawAnchor<VerticalAxis> {
        self.anchor_source().anchor(Attribute::LastBaseline)
    }

    fn width_anchor(&self) -> RawAnchor<DimensionAxis> {
        self.anchor_source().anchor(Attribute::Width)
    }

    fn height_anchor(&self) -> RawAnchor<DimensionAxis> {
        self.anchor_source().anchor(Attribute::Height)
    }
}

pub(crate) struct ViewInner {
    id: ItemId,
    name: Rc<str>,
    frame: FrameVars,
    engine: Weak<RefCell<EngineState>>,
    superview: RefCell<Weak<ViewInner>>,
    subviews: RefCell<Vec<View>>,
    guides: RefCell<Vec<LayoutGuide>>,
    safe_area: RefCell<Option<LayoutGuide>>,
    baselines: Cell<BaselineOffsets>,
    frame_constraints: RefCell<Vec<Constraint>>,
    intrinsic_constraints: RefCell<Vec<Constraint>>,
}

/// A rectangular element in a view hierarchy
///
/// `View` is a cheap handle; clones refer to the same element. A view owns its
/// subviews and guides, and refers to its superview weakly.
#[derive(Clone)]
pub struct View {
    inner: Rc<ViewInner>,
}

impl View {
    pub(crate) fn new(engine: &Rc<RefCell<EngineState>>, name: String) -> Self {
        let (id, frame) = engine.borrow_mut().allocate_item();
        Self {
            inner: Rc::new(ViewInner {
                id,
                name: name.into(),
                frame,
                engine: Rc::downgrade(engine),
                superview: RefCell::new(Weak::new()),
                subviews: RefCell::new(Vec::new()),
                guides: RefCell::new(Vec::new()),
                safe_area: RefCell::new(None),
                baselines: Cell::new(BaselineOffsets::default()),
                frame_constraints: RefCell::new(Vec::new()),
                intrinsic_constraints: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> ItemId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The engine this view belongs to, if it still exists
    pub fn engine(&self) -> Option<Engine> {
        self.inner.engine.upgrade().map(Engine::from_state)
    }

    pub fn superview(&self) -> Option<View> {
        self.inner
            .superview
            .borrow()
            .upgrade()
            .map(|inner| View { inner })
    }

    pub fn subviews(&self) -> Vec<View> {
        self.inner.subviews.borrow().clone()
    }

    /// Append `child` to this view's subviews, moving it from any prior parent
    pub fn add_subview(&self, child: &View) {
        if child.superview().as_ref() == Some(self) {
            return;
        }
        child.detach();
        *child.inner.superview.borrow_mut() = Rc::downgrade(&self.inner);
        self.inner.subviews.borrow_mut().push(child.clone());
    }

    /// Detach from the superview and deactivate constraints crossing the subtree
    ///
    /// Constraints between this view, its descendants and their guides
    /// survive; any constraint linking one of them to an outside item is
    /// deactivated.
    pub fn remove_from_superview(&self) {
        if self.superview().is_none() {
            return;
        }
        self.detach();
        let Some(engine) = self.engine() else {
            return;
        };
        let subtree = self.subtree_items();
        let external: Vec<_> = engine
            .active_constraints()
            .into_iter()
            .filter(|c| match c.second_item() {
                Some(other) => subtree.contains(&c.first_item()) != subtree.contains(&other),
                None => false,
            })
            .collect();
        debug!(view = %self.name(), count = external.len(), "removed from superview");
        Constraint::deactivate_all(&external);
    }

    /// Ids of this view, its descendants and every guide they own
    fn subtree_items(&self) -> HashSet<ItemId> {
        let mut items = HashSet::new();
        let mut pending = vec![self.clone()];
        while let Some(view) = pending.pop() {
            items.insert(view.id());
            items.extend(view.inner.guides.borrow().iter().map(|g| g.id()));
            pending.extend(view.subviews());
        }
        items
    }

    fn detach(&self) {
        let Some(parent) = self.superview() else {
            return;
        };
        parent
            .inner
            .subviews
            .borrow_mut()
            .retain(|v| !Rc::ptr_eq(&v.inner, &self.inner));
        *self.inner.superview.borrow_mut() = Weak::new();
    }

    /// Whether `self` is `other` or one of its descendants
    pub fn is_descendant_of(&self, other: &View) -> bool {
        let mut current = Some(self.clone());
        while let Some(view) = current {
            if &view == other {
                return true;
            }
            current = view.superview();
        }
        false
    }

    pub fn baseline_offsets(&self) -> BaselineOffsets {
        self.inner.baselines.get()
    }

    /// Set baseline positions; affects anchors obtained afterwards
    pub fn set_baseline_offsets(&self, offsets: BaselineOffsets) {
        self.inner.baselines.set(offsets);
    }

    /// Fix the view's frame with required constraints, replacing a prior call
    pub fn set_frame(&self, rect: Rect) -> Result<(), LayoutError> {
        Constraint::deactivate_all(self.inner.frame_constraints.borrow().iter());
        // Leading is measured along the reading direction, so pin the
        // physical left edge through whichever anchor lies on it.
        let left = match self.direction() {
            LayoutDirection::LeftToRight => self.constant_constraint(Attribute::Leading, rect.x),
            LayoutDirection::RightToLeft => self.constant_constraint(Attribute::Trailing, -rect.x),
        };
        let constraints = vec![
            left,
            self.constant_constraint(Attribute::Top, rect.y),
            self.width_anchor().constraint_equal_to_constant(rect.width),
            self.height_anchor().constraint_equal_to_constant(rect.height),
        ];
        let result = Constraint::activate_all(&constraints);
        *self.inner.frame_constraints.borrow_mut() = constraints;
        result
    }

    /// Preferred content size, honoured at the configured intrinsic priority
    pub fn set_intrinsic_size(&self, width: f64, height: f64) -> Result<(), LayoutError> {
        Constraint::deactivate_all(self.inner.intrinsic_constraints.borrow().iter());
        let priority = self
            .engine()
            .map(|e| e.config().intrinsic_priority)
            .unwrap_or_default();
        let constraints = vec![
            self.width_anchor().constraint_equal_to_constant(width),
            self.height_anchor().constraint_equal_to_constant(height),
        ];
        let mut result = Ok(());
        for c in &constraints {
            if let Err(e) = c.set_priority(priority).and_then(|_| c.activate()) {
                result = Err(e);
            }
        }
        *self.inner.intrinsic_constraints.borrow_mut() = constraints;
        result
    }

    /// Create a guide owned by this view; it is unconstrained until anchored
    pub fn add_layout_guide(&self, name: impl Into<String>) -> Option<LayoutGuide> {
        let engine = self.inner.engine.upgrade()?;
        let guide = LayoutGuide::new(&engine, name.into(), &self.inner);
        self.inner.guides.borrow_mut().push(guide.clone());
        Some(guide)
    }

    pub fn layout_guides(&self) -> Vec<LayoutGuide> {
        self.inner.guides.borrow().clone()
    }

    /// The guide inset from this view by the configured safe-area insets
    ///
    /// Created on first access; later calls return the same guide. Returns
    /// `None` once the engine is gone.
    pub fn safe_area_layout_guide(&self) -> Option<LayoutGuide> {
        if let Some(guide) = self.inner.safe_area.borrow().as_ref() {
            return Some(guide.clone());
        }
        let engine = self.engine()?;
        let insets = engine.config().safe_area_insets;
        let guide = self.add_layout_guide(format!("{}.safe_area", self.name()))?;
        let constraints = [
            guide
                .top_anchor()
                .constraint_equal_to(&self.top_anchor(), insets.top),
            guide
                .leading_anchor()
                .constraint_equal_to(&self.leading_anchor(), insets.leading),
            guide
                .bottom_anchor()
                .constraint_equal_to(&self.bottom_anchor(), -insets.bottom),
            guide
                .trailing_anchor()
                .constraint_equal_to(&self.trailing_anchor(), -insets.trailing),
        ];
        if let Err(e) = Constraint::activate_all(&constraints) {
            debug!(view = %self.name(), error = %e, "safe area guide left partially constrained");
        }
        *self.inner.safe_area.borrow_mut() = Some(guide.clone());
        Some(guide)
    }

    /// Solved frame; all zero once the engine is gone
    pub fn frame(&self) -> Rect {
        match self.inner.engine.upgrade() {
            Some(engine) => engine.borrow().frame(&self.inner.frame),
            None => Rect::default(),
        }
    }

    fn direction(&self) -> LayoutDirection {
        self.engine()
            .map(|e| e.config().layout_direction)
            .unwrap_or_default()
    }

    fn constant_constraint(&self, attribute: Attribute, constant: f64) -> Constraint {
        let term = self.anchor_source().term(attribute);
        Constraint::new(
            self.inner.engine.clone(),
            term,
            Relation::Equal,
            None,
            constant,
            Priority::REQUIRED,
        )
    }
}

impl LayoutItem for View {
    fn anchor_source(&self) -> AnchorSource {
        AnchorSource {
            id: self.inner.id,
            name: self.inner.name.clone(),
            frame: self.inner.frame,
            baselines: self.inner.baselines.get(),
            direction: self.direction(),
            engine: self.inner.engine.clone(),
            view: Some(Rc::downgrade(&self.inner)),
        }
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}

struct GuideInner {
    id: ItemId,
    name: Rc<str>,
    frame: FrameVars,
    engine: Weak<RefCell<EngineState>>,
    owner: Weak<ViewInner>,
}

/// A non-drawing rectangle owned by a view, usable as a constraint target
#[derive(Clone)]
pub struct LayoutGuide {
    inner: Rc<GuideInner>,
}

impl LayoutGuide {
    fn new(engine: &Rc<RefCell<EngineState>>, name: String, owner: &Rc<ViewInner>) -> Self {
        let (id, frame) = engine.borrow_mut().allocate_item();
        Self {
            inner: Rc::new(GuideInner {
                id,
                name: name.into(),
                frame,
                engine: Rc::downgrade(engine),
                owner: Rc::downgrade(owner),
            }),
        }
    }

    pub fn id(&self) -> ItemId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn owning_view(&self) -> Option<View> {
        self.inner.owner.upgrade().map(|inner| View { inner })
    }

    /// Solved frame; all zero once the engine is gone
    pub fn layout_frame(&self) -> Rect {
        match self.inner.engine.upgrade() {
            Some(engine) => engine.borrow().frame(&self.inner.frame),
            None => Rect::default(),
        }
    }
}

impl LayoutItem for LayoutGuide {
    fn anchor_source(&self) -> AnchorSource {
        let direction = self
            .inner
            .engine
            .upgrade()
            .map(|e| e.borrow().config.layout_direction)
            .unwrap_or_default();
        AnchorSource {
            id: self.inner.id,
            name: self.inner.name.clone(),
            frame: self.inner.frame,
            baselines: BaselineOffsets::default(),
            direction,
            engine: self.inner.engine.clone(),
            view: None,
        }
    }
}

impl PartialEq for LayoutGuide {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LayoutGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutGuide")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}
