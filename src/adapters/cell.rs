//! Table cell base with a pre-pinned content stack

use crate::accessor::AnchorLayout;
use crate::host::{AnchorSource, Engine, LayoutItem, View};

use super::stack::{StackAxis, StackView};

/// A cell whose content stack fills its content view
///
/// Rows are added with [`TableCell::add_row`]; they stack vertically inside the
/// cell's content area.
pub struct TableCell {
    reuse_identifier: String,
    view: View,
    content_view: View,
    content_stack: StackView,
}

impl TableCell {
    pub fn new(engine: &Engine, reuse_identifier: impl Into<String>) -> Self {
        let reuse_identifier = reuse_identifier.into();
        let view = engine.create_view(reuse_identifier.clone());
        let content_view = engine.create_view(format!("{}.content", reuse_identifier));
        let content_stack = StackView::new(
            engine,
            format!("{}.stack", reuse_identifier),
            StackAxis::Vertical,
            0.0,
        );

        view.add_subview(&content_view);
        content_view.anchor().pin_to_all(&view);
        content_view.add_subview(content_stack.view());
        content_stack.view().anchor().pin_to_all(&content_view);

        Self {
            reuse_identifier,
            view,
            content_view,
            content_stack,
        }
    }

    /// Restoring a cell from an archived form is not supported
    ///
    /// # Panics
    ///
    /// Always.
    pub fn from_archive(_archive: &[u8]) -> Self {
        panic!("TableCell cannot be restored from an archive; construct it with TableCell::new")
    }

    pub fn reuse_identifier(&self) -> &str {
        &self.reuse_identifier
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn content_view(&self) -> &View {
        &self.content_view
    }

    pub fn content_stack(&self) -> &StackView {
        &self.content_stack
    }

    /// Append a row to the content stack
    pub fn add_row(&self, row: &View) {
        self.content_stack.add_arranged_subview(row);
    }
}

impl LayoutItem for TableCell {
    fn anchor_source(&self) -> AnchorSource {
        self.view.anchor_source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Rect;

    #[test]
    fn test_content_fills_cell() {
        let engine = Engine::new();
        let cell = TableCell::new(&engine, "cell");
        cell.view().set_frame(Rect::new(0.0, 100.0, 320.0, 44.0)).unwrap();

        let expected = Rect::new(0.0, 100.0, 320.0, 44.0);
        assert!(cell.content_view().frame().approx_eq(&expected, 0.001));
        assert!(cell.content_stack().view().frame().approx_eq(&expected, 0.001));
        assert_eq!(cell.reuse_identifier(), "cell");
    }

    #[test]
    fn test_rows_stack_inside_cell() {
        let engine = Engine::new();
        let cell = TableCell::new(&engine, "cell");
        cell.view().set_frame(Rect::new(0.0, 0.0, 320.0, 60.0)).unwrap();
        let title = engine.create_view("title");
        let subtitle = engine.create_view("subtitle");
        title.set_intrinsic_size(100.0, 36.0).unwrap();
        subtitle.set_intrinsic_size(100.0, 24.0).unwrap();

        cell.add_row(&title);
        cell.add_row(&subtitle);

        assert!(title.frame().approx_eq(&Rect::new(0.0, 0.0, 320.0, 36.0), 0.001));
        assert!(subtitle
            .frame()
            .approx_eq(&Rect::new(0.0, 36.0, 320.0, 24.0), 0.001));
    }

    #[test]
    #[should_panic(expected = "cannot be restored from an archive")]
    fn test_from_archive_is_unsupported() {
        let _ = TableCell::from_archive(&[]);
    }
}
