//! Event callbacks on interactive views

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::host::{AnchorSource, Engine, LayoutItem, View};

/// Interaction events a control can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    TouchDown,
    TouchUpInside,
    ValueChanged,
    EditingChanged,
    PrimaryActionTriggered,
}

type Handler = Rc<dyn Fn()>;

/// A view that runs registered callbacks when it receives events
#[derive(Clone)]
pub struct Control {
    view: View,
    handlers: Rc<RefCell<Vec<(ControlEvent, Handler)>>>,
}

impl Control {
    pub fn new(engine: &Engine, name: impl Into<String>) -> Self {
        Self {
            view: engine.create_view(name),
            handlers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Run `callback` every time `event` is sent
    pub fn on_receive(&self, event: ControlEvent, callback: impl Fn() + 'static) -> &Self {
        self.handlers.borrow_mut().push((event, Rc::new(callback)));
        self
    }

    /// Deliver `event`, running its callbacks in registration order
    ///
    /// Returns how many callbacks ran. Callbacks registered while delivering
    /// run from the next delivery on.
    pub fn send(&self, event: ControlEvent) -> usize {
        let matching: Vec<Handler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(e, _)| *e == event)
            .map(|(_, h)| h.clone())
            .collect();
        debug!(control = %self.view.name(), ?event, handlers = matching.len(), "sending event");
        for handler in &matching {
            handler();
        }
        matching.len()
    }
}

impl LayoutItem for Control {
    fn anchor_source(&self) -> AnchorSource {
        self.view.anchor_source()
    }
}
