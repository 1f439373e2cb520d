//! Small conveniences built on the host layer and the anchor DSL

pub mod cell;
pub mod control;
pub mod label;
pub mod stack;

pub use cell::TableCell;
pub use control::{Control, ControlEvent};
pub use label::Label;
pub use stack::{StackAxis, StackView};
