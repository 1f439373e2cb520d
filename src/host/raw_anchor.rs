//! Axis-typed raw anchors

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Weak;

use crate::axis::{Axis, DimensionAxis};

use super::constraint::{AnchorTerm, Constraint};
use super::engine::EngineState;
use super::types::{Attribute, ItemId, Priority, Relation};

/// One geometric attribute of one item, able to create constraints
///
/// The anchor refers to its item by identity only; holding an anchor never
/// keeps a view or guide alive. Constraints are created inactive at
/// [`Priority::REQUIRED`].
pub struct RawAnchor<A: Axis> {
    term: AnchorTerm,
    engine: Weak<RefCell<EngineState>>,
    _axis: PhantomData<A>,
}

impl<A: Axis> RawAnchor<A> {
    pub(crate) fn new(term: AnchorTerm, engine: Weak<RefCell<EngineState>>) -> Self {
        Self {
            term,
            engine,
            _axis: PhantomData,
        }
    }

    pub fn attribute(&self) -> Attribute {
        self.term.attribute
    }

    pub fn item(&self) -> ItemId {
        self.term.item_id
    }

    pub fn item_name(&self) -> &str {
        &self.term.item_name
    }

    /// `self == other + constant`
    pub fn constraint_equal_to(&self, other: &RawAnchor<A>, constant: f64) -> Constraint {
        self.relate(Relation::Equal, other, constant)
    }

    /// `self >= other + constant`
    pub fn constraint_greater_than_or_equal_to(
        &self,
        other: &RawAnchor<A>,
        constant: f64,
    ) -> Constraint {
        self.relate(Relation::GreaterOrEqual, other, constant)
    }

    /// `self <= other + constant`
    pub fn constraint_less_than_or_equal_to(
        &self,
        other: &RawAnchor<A>,
        constant: f64,
    ) -> Constraint {
        self.relate(Relation::LessOrEqual, other, constant)
    }

    fn relate(&self, relation: Relation, other: &RawAnchor<A>, constant: f64) -> Constraint {
        Constraint::new(
            self.engine.clone(),
            self.term.clone(),
            relation,
            Some(other.term.clone()),
            constant,
            Priority::REQUIRED,
        )
    }

    fn relate_constant(&self, relation: Relation, constant: f64) -> Constraint {
        Constraint::new(
            self.engine.clone(),
            self.term.clone(),
            relation,
            None,
            constant,
            Priority::REQUIRED,
        )
    }
}

impl RawAnchor<DimensionAxis> {
    /// `self == constant`
    pub fn constraint_equal_to_constant(&self, constant: f64) -> Constraint {
        self.relate_constant(Relation::Equal, constant)
    }

    /// `self >= constant`
    pub fn constraint_greater_than_or_equal_to_constant(&self, constant: f64) -> Constraint {
        self.relate_constant(Relation::GreaterOrEqual, constant)
    }

    /// `self <= constant`
    pub fn constraint_less_than_or_equal_to_constant(&self, constant: f64) -> Constraint {
        self.relate_constant(Relation::LessOrEqual, constant)
    }
}

impl<A: Axis> Clone for RawAnchor<A> {
    fn clone(&self) -> Self {
        Self::new(self.term.clone(), self.engine.clone())
    }
}

impl<A: Axis> fmt::Debug for RawAnchor<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawAnchor<{}>({:?})", A::NAME, self.term)
    }
}

/// Anything that can stand in for a raw anchor of axis `A`
pub trait AsRawAnchor<A: Axis> {
    fn as_raw_anchor(&self) -> &RawAnchor<A>;
}

impl<A: Axis> AsRawAnchor<A> for RawAnchor<A> {
    fn as_raw_anchor(&self) -> &RawAnchor<A> {
        self
    }
}
