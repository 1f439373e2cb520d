//! Integration tests verifying that bundle operations produce the expected
//! constraints and that the solved frames satisfy them.

use anchor_layout::{
    AnchorLayout, EdgeInsets, Edges, Engine, EngineConfig, LayoutDirection, LayoutItem, Priority,
    Rect, Relation,
};

const TOLERANCE: f64 = 0.001;

fn describe(constraints: &[anchor_layout::Constraint]) -> String {
    constraints
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_pin_with_padding_end_to_end() {
    let engine = Engine::new();
    let b = engine.create_view("b");
    let a = engine.create_view("a");
    b.add_subview(&a);

    a.anchor()
        .pin_to_all(&b)
        .padding(EdgeInsets::new(10.0, 20.0, 10.0, 20.0));

    let constraints = engine.constraints_involving(a.id());
    assert!(constraints
        .iter()
        .all(|c| c.priority() == Priority::REQUIRED && c.relation() == Relation::Equal));
    insta::assert_snapshot!(describe(&constraints), @r###"
    a.top == b.top + 10 @1000
    a.bottom == b.bottom - 10 @1000
    a.leading == b.leading + 20 @1000
    a.trailing == b.trailing - 20 @1000
    "###);

    b.set_frame(Rect::new(0.0, 0.0, 400.0, 300.0)).unwrap();
    assert!(a
        .frame()
        .approx_eq(&Rect::new(20.0, 10.0, 360.0, 280.0), TOLERANCE));
}

#[test]
fn test_size_add_subtract_end_to_end() {
    let engine = Engine::new();
    let b = engine.create_view("b");
    let a = engine.create_view("a");

    a.anchor()
        .size_to(&b)
        .add(4.0, 0.0)
        .subtract(0.0, 2.0);

    let constraints = engine.constraints_involving(a.id());
    insta::assert_snapshot!(describe(&constraints), @r###"
    a.width == b.width + 4 @1000
    a.height == b.height - 2 @1000
    "###);

    b.set_frame(Rect::new(0.0, 0.0, 100.0, 50.0)).unwrap();
    let frame = a.frame();
    assert!((frame.width - 104.0).abs() < TOLERANCE);
    assert!((frame.height - 48.0).abs() < TOLERANCE);
}

#[test]
fn test_center_and_size_to_constant() {
    let engine = Engine::new();
    let root = engine.create_view("root");
    let spinner = engine.create_view("spinner");
    root.add_subview(&spinner);
    root.set_frame(Rect::new(0.0, 0.0, 300.0, 600.0)).unwrap();

    spinner.anchor().center_to(&root).size(50.0, 50.0);

    assert!(spinner
        .frame()
        .approx_eq(&Rect::new(125.0, 275.0, 50.0, 50.0), TOLERANCE));
}

#[test]
fn test_pin_to_safe_area_guide() {
    let config = EngineConfig::new().with_safe_area_insets(EdgeInsets::new(44.0, 0.0, 34.0, 0.0));
    let engine = Engine::with_config(config);
    let window = engine.create_view("window");
    let content = engine.create_view("content");
    window.add_subview(&content);
    window.set_frame(Rect::new(0.0, 0.0, 390.0, 844.0)).unwrap();
    let safe_area = window.safe_area_layout_guide().unwrap();

    content
        .anchor()
        .pin_to_all(&safe_area)
        .padding(EdgeInsets::new(0.0, 16.0, 0.0, 16.0));

    assert!(content
        .frame()
        .approx_eq(&Rect::new(16.0, 44.0, 358.0, 766.0), TOLERANCE));
}

#[test]
fn test_right_to_left_leading_padding_insets_from_right() {
    let config = EngineConfig::new().with_layout_direction(LayoutDirection::RightToLeft);
    let engine = Engine::with_config(config);
    let root = engine.create_view("root");
    let title = engine.create_view("title");
    root.add_subview(&title);
    root.set_frame(Rect::new(0.0, 0.0, 200.0, 100.0)).unwrap();

    title.with_anchor(|a| {
        a.pin_to(&root, Edges::VERTICAL | Edges::LEADING)
            .padding(EdgeInsets::new(0.0, 10.0, 0.0, 0.0));
        a.width.equal_to_constant(50.0);
    });

    // Leading is the right edge: inset 10 from root's right edge
    assert!(title
        .frame()
        .approx_eq(&Rect::new(140.0, 0.0, 50.0, 100.0), TOLERANCE));
}

#[test]
fn test_sibling_chain_with_offsets() {
    let engine = Engine::new();
    let root = engine.create_view("root");
    let icon = engine.create_view("icon");
    let text = engine.create_view("text");
    root.add_subview(&icon);
    root.add_subview(&text);
    root.set_frame(Rect::new(0.0, 0.0, 300.0, 40.0)).unwrap();

    icon.with_anchor(|a| {
        a.pin_to(&root, Edges::VERTICAL | Edges::LEADING).padding_edges(4.0);
        a.width.equal_to(&a.height);
    });
    text.with_anchor(|a| {
        a.pin_to(&root, Edges::VERTICAL | Edges::TRAILING);
        a.leading
            .equal_to_with(&icon.trailing_anchor(), 8.0, Priority::REQUIRED);
    });

    assert!(icon
        .frame()
        .approx_eq(&Rect::new(4.0, 4.0, 32.0, 32.0), TOLERANCE));
    assert!(text
        .frame()
        .approx_eq(&Rect::new(44.0, 0.0, 256.0, 40.0), TOLERANCE));
}

#[test]
fn test_less_than_or_equal_caps_width() {
    let engine = Engine::new();
    let root = engine.create_view("root");
    let bubble = engine.create_view("bubble");
    root.add_subview(&bubble);
    root.set_frame(Rect::new(0.0, 0.0, 300.0, 100.0)).unwrap();
    bubble.set_intrinsic_size(500.0, 40.0).unwrap();

    bubble.with_anchor(|a| {
        a.pin_to(&root, Edges::TOP | Edges::LEADING);
        a.width.less_than_or_equal_to(&root.width_anchor(), -20.0);
    });

    assert!((bubble.frame().width - 280.0).abs() < TOLERANCE);
    assert!((bubble.frame().height - 40.0).abs() < TOLERANCE);
}

#[test]
fn test_bundle_deactivate_releases_layout() {
    let engine = Engine::new();
    let root = engine.create_view("root");
    let panel = engine.create_view("panel");
    root.set_frame(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();

    let bundle = panel.anchor();
    bundle.pin_to_all(&root);
    bundle.deactivate();
    panel.anchor().size(10.0, 10.0);

    assert!(engine.conflicts().is_empty());
    assert!((panel.frame().width - 10.0).abs() < TOLERANCE);
}
