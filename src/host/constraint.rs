//! Activatable constraints
//!
//! A [`Constraint`] is a shared handle: clones refer to the same relation, so
//! a handle stored by a caller observes (and controls) the same activation
//! state as the anchor that created it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use kasuari::{Expression, WeightedRelation::*};
use tracing::debug;

use crate::error::LayoutError;

use super::engine::EngineState;
use super::types::{Attribute, ItemId, Priority, Relation};

/// One side of a constraint: an attribute of a named item
#[derive(Clone)]
pub(crate) struct AnchorTerm {
    pub(crate) item_id: ItemId,
    pub(crate) item_name: Rc<str>,
    pub(crate) attribute: Attribute,
    pub(crate) expr: Expression,
}

impl fmt::Debug for AnchorTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.item_name, self.attribute)
    }
}

struct ConstraintInner {
    engine: Weak<RefCell<EngineState>>,
    first: AnchorTerm,
    second: Option<AnchorTerm>,
    relation: Relation,
    constant: Cell<f64>,
    priority: Cell<Priority>,
    identifier: RefCell<Option<String>>,
    /// Solver-side constraint while active
    installed: RefCell<Option<kasuari::Constraint>>,
}

/// A linear relation `first <relation> second + constant` at a priority
#[derive(Clone)]
pub struct Constraint {
    inner: Rc<ConstraintInner>,
}

impl Constraint {
    pub(crate) fn new(
        engine: Weak<RefCell<EngineState>>,
        first: AnchorTerm,
        relation: Relation,
        second: Option<AnchorTerm>,
        constant: f64,
        priority: Priority,
    ) -> Self {
        Self {
            inner: Rc::new(ConstraintInner {
                engine,
                first,
                second,
                relation,
                constant: Cell::new(constant),
                priority: Cell::new(priority),
                identifier: RefCell::new(None),
                installed: RefCell::new(None),
            }),
        }
    }

    pub fn first_attribute(&self) -> Attribute {
        self.inner.first.attribute
    }

    pub fn first_item(&self) -> ItemId {
        self.inner.first.item_id
    }

    pub fn first_item_name(&self) -> &str {
        &self.inner.first.item_name
    }

    /// Attribute on the right-hand side; `None` for constant constraints
    pub fn second_attribute(&self) -> Option<Attribute> {
        self.inner.second.as_ref().map(|t| t.attribute)
    }

    pub fn second_item(&self) -> Option<ItemId> {
        self.inner.second.as_ref().map(|t| t.item_id)
    }

    pub fn second_item_name(&self) -> Option<&str> {
        self.inner.second.as_ref().map(|t| &*t.item_name)
    }

    pub fn relation(&self) -> Relation {
        self.inner.relation
    }

    pub fn constant(&self) -> f64 {
        self.inner.constant.get()
    }

    pub fn priority(&self) -> Priority {
        self.inner.priority.get()
    }

    pub fn identifier(&self) -> Option<String> {
        self.inner.identifier.borrow().clone()
    }

    /// Attach a debugging identifier, shown in conflict reports
    pub fn set_identifier(&self, identifier: impl Into<String>) {
        *self.inner.identifier.borrow_mut() = Some(identifier.into());
    }

    pub fn is_active(&self) -> bool {
        self.inner.installed.borrow().is_some()
    }

    /// Whether either side of the constraint refers to `item`
    pub fn involves(&self, item: ItemId) -> bool {
        self.first_item() == item || self.second_item() == Some(item)
    }

    /// Install the constraint in its engine's solver
    ///
    /// Activating an active constraint does nothing. A required constraint
    /// that conflicts with the active set is left inactive, reported here
    /// and recorded in [`Engine::conflicts`](crate::Engine::conflicts).
    pub fn activate(&self) -> Result<(), LayoutError> {
        if self.is_active() {
            return Ok(());
        }
        let engine = self
            .inner
            .engine
            .upgrade()
            .ok_or_else(|| LayoutError::EngineDropped {
                constraint: self.to_string(),
            })?;
        let installed = self.build();
        engine.borrow_mut().install(self, installed.clone())?;
        *self.inner.installed.borrow_mut() = Some(installed);
        debug!(constraint = %self, "activated");
        Ok(())
    }

    /// Remove the constraint from its engine's solver
    pub fn deactivate(&self) {
        let Some(installed) = self.inner.installed.borrow_mut().take() else {
            return;
        };
        if let Some(engine) = self.inner.engine.upgrade() {
            engine.borrow_mut().uninstall(self, &installed);
        }
        debug!(constraint = %self, "deactivated");
    }

    pub fn set_active(&self, active: bool) -> Result<(), LayoutError> {
        if active {
            self.activate()
        } else {
            self.deactivate();
            Ok(())
        }
    }

    /// Change the constant, reinstalling the constraint if it is active
    ///
    /// If the solver refuses the new value, the previous constant is
    /// restored, the constraint stays active and the refusal is returned.
    pub fn set_constant(&self, constant: f64) -> Result<(), LayoutError> {
        let previous = self.inner.constant.replace(constant);
        self.reinstall(|| self.inner.constant.set(previous))
    }

    /// Change the priority, reinstalling the constraint if it is active
    ///
    /// A refused priority is rolled back like a refused constant.
    pub fn set_priority(&self, priority: Priority) -> Result<(), LayoutError> {
        let previous = self.inner.priority.replace(priority);
        self.reinstall(|| self.inner.priority.set(previous))
    }

    /// Activate every constraint, returning the first failure
    ///
    /// Every constraint is attempted even when an earlier one fails.
    pub fn activate_all<'a>(
        constraints: impl IntoIterator<Item = &'a Constraint>,
    ) -> Result<(), LayoutError> {
        let mut first_error = None;
        for constraint in constraints {
            if let Err(e) = constraint.activate() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    pub fn deactivate_all<'a>(constraints: impl IntoIterator<Item = &'a Constraint>) {
        for constraint in constraints {
            constraint.deactivate();
        }
    }

    /// Whether two handles refer to the same constraint
    pub fn same(&self, other: &Constraint) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn reinstall(&self, rollback: impl FnOnce()) -> Result<(), LayoutError> {
        if !self.is_active() {
            return Ok(());
        }
        self.deactivate();
        let Err(e) = self.activate() else {
            return Ok(());
        };
        rollback();
        if let Err(restore) = self.activate() {
            debug!(constraint = %self, error = %restore, "previous value could not be restored");
        }
        Err(e)
    }

    /// Translate into a solver constraint using the current constant and priority
    fn build(&self) -> kasuari::Constraint {
        let strength = self.priority().strength();
        let constant = self.constant();
        let lhs = self.inner.first.expr.clone();
        match (&self.inner.second, self.inner.relation) {
            (Some(rhs), Relation::Equal) => lhs | EQ(strength) | rhs.expr.clone() + constant,
            (Some(rhs), Relation::GreaterOrEqual) => {
                lhs | GE(strength) | rhs.expr.clone() + constant
            }
            (Some(rhs), Relation::LessOrEqual) => lhs | LE(strength) | rhs.expr.clone() + constant,
            (None, Relation::Equal) => lhs | EQ(strength) | constant,
            (None, Relation::GreaterOrEqual) => lhs | GE(strength) | constant,
            (None, Relation::LessOrEqual) => lhs | LE(strength) | constant,
        }
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.inner.identifier.borrow().as_deref() {
            write!(f, "[{}] ", id)?;
        }
        let first = &self.inner.first;
        write!(f, "{}.{} {} ", first.item_name, first.attribute, self.relation())?;
        let constant = self.constant();
        match &self.inner.second {
            Some(second) => {
                write!(f, "{}.{}", second.item_name, second.attribute)?;
                if constant > 0.0 {
                    write!(f, " + {}", constant)?;
                } else if constant < 0.0 {
                    write!(f, " - {}", -constant)?;
                }
            }
            None => write!(f, "{}", constant)?,
        }
        write!(f, " @{}", self.priority())
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("description", &self.to_string())
            .field("active", &self.is_active())
            .finish()
    }
}
