//! Constraint engine built on the kasuari Cassowary solver
//!
//! The engine owns the solver, tracks every active [`Constraint`] and reads
//! solved variable values on demand. Views and constraints hold weak references to it,
//! so the caller must keep the [`Engine`] alive for as long as layout is used.

use std::cell::RefCell;
use std::rc::Rc;

use kasuari::{Solver as KasuariSolver, Variable as KasuariVariable};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::LayoutError;

use super::constraint::Constraint;
use super::types::{ItemId, Rect};
use super::view::View;

/// Refusals kept for [`Engine::conflicts`]; older ones are dropped first
pub const MAX_CONFLICTS: usize = 64;

/// A constraint the solver refused to install
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    /// Rendered form of the refused constraint
    pub constraint: String,
    /// Why it was refused
    pub reason: String,
}

/// Solver variables describing one item's frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FrameVars {
    pub(crate) x: KasuariVariable,
    pub(crate) y: KasuariVariable,
    pub(crate) width: KasuariVariable,
    pub(crate) height: KasuariVariable,
}

impl FrameVars {
    fn new() -> Self {
        Self {
            x: KasuariVariable::new(),
            y: KasuariVariable::new(),
            width: KasuariVariable::new(),
            height: KasuariVariable::new(),
        }
    }
}

pub(crate) struct EngineState {
    solver: KasuariSolver,
    active: Vec<Constraint>,
    conflicts: Vec<Conflict>,
    pub(crate) config: EngineConfig,
    next_id: u64,
}

impl EngineState {
    fn new(config: EngineConfig) -> Self {
        Self {
            solver: KasuariSolver::new(),
            active: Vec::new(),
            conflicts: Vec::new(),
            config,
            next_id: 0,
        }
    }

    /// Allocate identity and variables for a new view or guide
    pub(crate) fn allocate_item(&mut self) -> (ItemId, FrameVars) {
        self.next_id += 1;
        (ItemId(self.next_id), FrameVars::new())
    }

    pub(crate) fn install(
        &mut self,
        constraint: &Constraint,
        installed: kasuari::Constraint,
    ) -> Result<(), LayoutError> {
        match self.solver.add_constraint(installed) {
            Ok(()) => {
                self.active.push(constraint.clone());
                Ok(())
            }
            Err(e) => {
                let description = constraint.to_string();
                let error = LayoutError::from_add(e, &description);
                warn!(
                    constraint = %description,
                    error = %error,
                    "unable to simultaneously satisfy constraints; leaving constraint inactive"
                );
                if self.conflicts.len() == MAX_CONFLICTS {
                    self.conflicts.remove(0);
                }
                self.conflicts.push(Conflict {
                    constraint: description,
                    reason: error.to_string(),
                });
                Err(error)
            }
        }
    }

    pub(crate) fn uninstall(&mut self, constraint: &Constraint, installed: &kasuari::Constraint) {
        if let Err(e) = self.solver.remove_constraint(installed) {
            debug!(constraint = %constraint, error = ?e, "solver did not hold constraint");
        }
        self.active.retain(|c| !c.same(constraint));
    }

    /// Current solution for an item's frame
    ///
    /// Read from the solver directly. `fetch_changes` never reports a variable
    /// the solver dropped along with its last constraint.
    pub(crate) fn frame(&self, vars: &FrameVars) -> Rect {
        Rect::new(
            self.solver.get_value(vars.x),
            self.solver.get_value(vars.y),
            self.solver.get_value(vars.width),
            self.solver.get_value(vars.height),
        )
    }
}

/// Handle to a layout engine
///
/// Cloning is cheap and yields another handle to the same engine. The engine
/// is single-threaded; all views and constraints created from it must be used
/// on the thread that created it.
#[derive(Clone)]
pub struct Engine {
    state: Rc<RefCell<EngineState>>,
}

impl Engine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(EngineState::new(config))),
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.state.borrow().config.clone()
    }

    /// Create a detached view
    pub fn create_view(&self, name: impl Into<String>) -> View {
        View::new(&self.state, name.into())
    }

    /// Every constraint currently installed, in activation order
    pub fn active_constraints(&self) -> Vec<Constraint> {
        self.state.borrow().active.clone()
    }

    /// Active constraints with `item` on either side
    pub fn constraints_involving(&self, item: ItemId) -> Vec<Constraint> {
        self.state
            .borrow()
            .active
            .iter()
            .filter(|c| c.involves(item))
            .cloned()
            .collect()
    }

    /// Constraints refused by the solver since the last [`Engine::take_conflicts`]
    ///
    /// Only the most recent [`MAX_CONFLICTS`] refusals are retained.
    pub fn conflicts(&self) -> Vec<Conflict> {
        self.state.borrow().conflicts.clone()
    }

    pub fn take_conflicts(&self) -> Vec<Conflict> {
        std::mem::take(&mut self.state.borrow_mut().conflicts)
    }

    pub(crate) fn from_state(state: Rc<RefCell<EngineState>>) -> Self {
        Self { state }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
