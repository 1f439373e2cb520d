//! Integration tests composing the adapters with the anchor DSL.

use std::cell::Cell;
use std::rc::Rc;

use anchor_layout::adapters::{Control, ControlEvent, Label, TableCell};
use anchor_layout::{AnchorLayout, EdgeInsets, Edges, Engine, LayoutItem, Rect};

#[test]
fn test_cell_with_label_and_button() {
    let engine = Engine::new();
    let cell = TableCell::new(&engine, "settings_row");
    cell.view()
        .set_frame(Rect::new(0.0, 0.0, 320.0, 44.0))
        .unwrap();

    let row = engine.create_view("row");
    row.set_intrinsic_size(320.0, 44.0).unwrap();
    cell.add_row(&row);

    let title = Label::new(&engine, "title", "Wi-Fi", 17.0);
    let toggle = Control::new(&engine, "toggle");
    row.add_subview(title.view());
    row.add_subview(toggle.view());

    title.with_anchor(|a| {
        a.pin_to(&row, Edges::LEADING).padding(EdgeInsets::new(0.0, 16.0, 0.0, 0.0));
        a.center_y.equal_to(&row.center_y_anchor());
    });
    toggle.with_anchor(|a| {
        a.pin_to(&row, Edges::TRAILING).padding(EdgeInsets::new(0.0, 0.0, 0.0, 16.0));
        a.center_y.equal_to(&row.center_y_anchor());
        a.size(51.0, 31.0);
    });

    let switched = Rc::new(Cell::new(false));
    let flag = switched.clone();
    toggle.on_receive(ControlEvent::ValueChanged, move || flag.set(!flag.get()));
    toggle.send(ControlEvent::ValueChanged);

    assert!(switched.get());
    assert!((title.view().frame().x - 16.0).abs() < 0.001);
    assert!((title.view().frame().mid_y() - 22.0).abs() < 0.001);
    assert!(engine.conflicts().is_empty());
    assert!((toggle.view().frame().max_x() - 304.0).abs() < 0.001);
    assert!((toggle.view().frame().mid_y() - 22.0).abs() < 0.001);
}

#[test]
#[should_panic(expected = "cannot be restored from an archive")]
fn test_cell_archive_path_panics() {
    TableCell::from_archive(b"archived cell");
}
