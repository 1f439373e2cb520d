//! A container that lines its arranged subviews up along one axis

use std::cell::RefCell;

use crate::accessor::AnchorLayout;
use crate::bundle::Edges;
use crate::host::{AnchorSource, Constraint, Engine, LayoutItem, Priority, View};

/// Direction in which arranged subviews follow each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAxis {
    Vertical,
    Horizontal,
}

/// Arranged subviews fill the cross axis and are chained along the main axis
/// with fixed spacing; the first and last touch the stack's edges.
pub struct StackView {
    view: View,
    axis: StackAxis,
    spacing: f64,
    arranged: RefCell<Vec<View>>,
    constraints: RefCell<Vec<Constraint>>,
}

impl StackView {
    pub fn new(engine: &Engine, name: impl Into<String>, axis: StackAxis, spacing: f64) -> Self {
        Self {
            view: engine.create_view(name),
            axis,
            spacing,
            arranged: RefCell::new(Vec::new()),
            constraints: RefCell::new(Vec::new()),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn axis(&self) -> StackAxis {
        self.axis
    }

    pub fn arranged_subviews(&self) -> Vec<View> {
        self.arranged.borrow().clone()
    }

    /// Append `child` as a subview and to the end of the arrangement
    pub fn add_arranged_subview(&self, child: &View) {
        self.view.add_subview(child);
        self.arranged.borrow_mut().push(child.clone());
        self.rearrange();
    }

    /// Remove `child` from the arrangement and from the stack
    pub fn remove_arranged_subview(&self, child: &View) {
        self.arranged.borrow_mut().retain(|v| v != child);
        child.remove_from_superview();
        self.rearrange();
    }

    fn rearrange(&self) {
        Constraint::deactivate_all(self.constraints.borrow().iter());
        let arranged = self.arranged.borrow();
        let mut constraints = Vec::new();
        let mut previous: Option<&View> = None;
        for child in arranged.iter() {
            child.with_anchor(|a| {
                match self.axis {
                    StackAxis::Vertical => {
                        a.pin_to(&self.view, Edges::HORIZONTAL);
                        match previous {
                            Some(prev) => {
                                a.top.equal_to_with(
                                    &prev.bottom_anchor(),
                                    self.spacing,
                                    Priority::REQUIRED,
                                );
                            }
                            None => {
                                a.top.equal_to(&self.view.top_anchor());
                            }
                        }
                    }
                    StackAxis::Horizontal => {
                        a.pin_to(&self.view, Edges::VERTICAL);
                        match previous {
                            Some(prev) => {
                                a.leading.equal_to_with(
                                    &prev.trailing_anchor(),
                                    self.spacing,
                                    Priority::REQUIRED,
                                );
                            }
                            None => {
                                a.leading.equal_to(&self.view.leading_anchor());
                            }
                        }
                    }
                }
                constraints.extend(a.constraints());
            });
            previous = Some(child);
        }
        if let Some(last) = previous {
            let mut tail = None;
            last.with_anchor(|a| match self.axis {
                StackAxis::Vertical => {
                    a.bottom.equal_to(&self.view.bottom_anchor()).store(&mut tail);
                }
                StackAxis::Horizontal => {
                    a.trailing
                        .equal_to(&self.view.trailing_anchor())
                        .store(&mut tail);
                }
            });
            constraints.extend(tail);
        }
        *self.constraints.borrow_mut() = constraints;
    }
}

impl LayoutItem for StackView {
    fn anchor_source(&self) -> AnchorSource {
        self.view.anchor_source()
    }
}
