//! Typed anchors
//!
//! An [`Anchor`] wraps one [`RawAnchor`] and remembers the constraint it most
//! recently created. Relation methods (`equal_to` and friends) replace that
//! constraint; adjustment methods change it in place:
//!
//! - `padding` overwrites the constant (last write wins), with trailing and
//!   bottom negated so that positive padding always insets;
//! - `add` / `subtract` shift the constant by a delta (they stack).
//!
//! Adjusting an anchor that has not created a constraint yet does nothing;
//! the caller must relate the anchor before adjusting it.

use std::cell::RefCell;
use std::fmt;

use tracing::debug;

use crate::axis::{Axis, DimensionAxis, EdgeAxis};
use crate::error::LayoutError;
use crate::host::{AsRawAnchor, Attribute, Constraint, Priority, RawAnchor};

/// A chainable builder for the constraints of one attribute
pub struct Anchor<A: Axis> {
    raw: RawAnchor<A>,
    constraint: RefCell<Option<Constraint>>,
}

impl<A: Axis> Anchor<A> {
    pub(crate) fn new(raw: RawAnchor<A>) -> Self {
        Self {
            raw,
            constraint: RefCell::new(None),
        }
    }

    pub fn attribute(&self) -> Attribute {
        self.raw.attribute()
    }

    pub fn raw(&self) -> &RawAnchor<A> {
        &self.raw
    }

    /// The constraint created by the latest relation call, if any
    pub fn constraint(&self) -> Option<Constraint> {
        self.constraint.borrow().clone()
    }

    /// Relate `self == target`, activating immediately at required priority
    pub fn equal_to(&self, target: &impl AsRawAnchor<A>) -> &Self {
        self.equal_to_with(target, 0.0, Priority::REQUIRED)
    }

    /// Relate `self == target + offset` at `priority`
    pub fn equal_to_with(
        &self,
        target: &impl AsRawAnchor<A>,
        offset: f64,
        priority: Priority,
    ) -> &Self {
        let constraint = self.raw.constraint_equal_to(target.as_raw_anchor(), offset);
        self.replace(constraint, priority)
    }

    /// Relate `self >= target + offset`
    pub fn greater_than_or_equal_to(&self, target: &impl AsRawAnchor<A>, offset: f64) -> &Self {
        let constraint = self
            .raw
            .constraint_greater_than_or_equal_to(target.as_raw_anchor(), offset);
        self.replace(constraint, Priority::REQUIRED)
    }

    /// Relate `self <= target + offset`
    pub fn less_than_or_equal_to(&self, target: &impl AsRawAnchor<A>, offset: f64) -> &Self {
        let constraint = self
            .raw
            .constraint_less_than_or_equal_to(target.as_raw_anchor(), offset);
        self.replace(constraint, Priority::REQUIRED)
    }

    /// Change the priority of the current constraint, keeping its constant
    pub fn priority(&self, priority: Priority) -> &Self {
        self.adjust("priority", |c| c.set_priority(priority))
    }

    /// Hand the current constraint to the caller
    ///
    /// The slot receives a handle sharing state with this anchor; from then on
    /// the caller decides whether the constraint stays active. The slot is left
    /// untouched when there is no constraint yet.
    pub fn store(&self, slot: &mut Option<Constraint>) -> &Self {
        match self.constraint() {
            Some(constraint) => *slot = Some(constraint),
            None => self.log_missing("store"),
        }
        self
    }

    /// Deactivate the previous constraint and activate `constraint` in its place
    fn replace(&self, constraint: Constraint, priority: Priority) -> &Self {
        if let Some(previous) = self.constraint.borrow_mut().take() {
            previous.deactivate();
        }
        let result = constraint
            .set_priority(priority)
            .and_then(|_| constraint.activate());
        if let Err(e) = result {
            // Already reported by the engine
            debug!(constraint = %constraint, error = %e, "constraint left inactive");
        }
        *self.constraint.borrow_mut() = Some(constraint);
        self
    }

    fn adjust(
        &self,
        operation: &'static str,
        apply: impl FnOnce(&Constraint) -> Result<(), LayoutError>,
    ) -> &Self {
        let current = self.constraint();
        match current {
            Some(constraint) => {
                if let Err(e) = apply(&constraint) {
                    debug!(constraint = %constraint, operation, error = %e, "adjustment refused; previous value kept");
                }
            }
            None => self.log_missing(operation),
        }
        self
    }

    fn log_missing(&self, operation: &'static str) {
        debug!(
            item = %self.raw.item_name(),
            attribute = %self.attribute(),
            operation,
            "no constraint to adjust; relate the anchor first"
        );
    }
}

impl<A: EdgeAxis> Anchor<A> {
    /// Overwrite the constant with an inset
    ///
    /// Trailing and bottom anchors store `-value`, so a positive value always
    /// moves the edge inward. Repeated calls do not accumulate.
    pub fn padding(&self, value: f64) -> &Self {
        let constant = if self.attribute().is_inset_inverted() {
            -value
        } else {
            value
        };
        self.adjust("padding", |c| c.set_constant(constant))
    }
}

impl Anchor<DimensionAxis> {
    /// Relate `self == value`
    pub fn equal_to_constant(&self, value: f64) -> &Self {
        let constraint = self.raw.constraint_equal_to_constant(value);
        self.replace(constraint, Priority::REQUIRED)
    }

    /// Grow the current constant by `value`; calls stack
    pub fn add(&self, value: f64) -> &Self {
        self.adjust("add", |c| c.set_constant(c.constant() + value))
    }

    /// Shrink the current constant by `value`; calls stack
    pub fn subtract(&self, value: f64) -> &Self {
        self.adjust("subtract", |c| c.set_constant(c.constant() - value))
    }
}

impl<A: Axis> AsRawAnchor<A> for Anchor<A> {
    fn as_raw_anchor(&self) -> &RawAnchor<A> {
        &self.raw
    }
}

impl<A: Axis> fmt::Debug for Anchor<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Anchor")
            .field("raw", &self.raw)
            .field("constraint", &*self.constraint.borrow())
            .finish()
    }
}
