//! Integration tests for the chaining semantics of anchors and bundles:
//! freshness of the accessor, replacement of relations, overwrite versus
//! stacking of constants, and handing constraints out to callers.

use anchor_layout::{
    AnchorLayout, Attribute, Constraint, EdgeInsets, Edges, Engine, LayoutItem, Priority, Rect,
    View,
};
use pretty_assertions::assert_eq;

fn setup() -> (Engine, View, View) {
    let engine = Engine::new();
    let superview = engine.create_view("b");
    let view = engine.create_view("a");
    superview.add_subview(&view);
    superview
        .set_frame(Rect::new(0.0, 0.0, 200.0, 100.0))
        .unwrap();
    (engine, view, superview)
}

fn active_for(engine: &Engine, view: &View, attribute: Attribute) -> Vec<Constraint> {
    engine
        .constraints_involving(view.id())
        .into_iter()
        .filter(|c| c.first_item() == view.id() && c.first_attribute() == attribute)
        .collect()
}

#[test]
fn test_fresh_bundles_do_not_share_state() {
    let (_engine, a, b) = setup();

    let first = a.anchor();
    let second = a.anchor();
    first.size_to(&b).add(10.0, 0.0);

    assert_eq!(first.constraints().len(), 2);
    assert!(second.constraints().is_empty());
    assert!(second.width.constraint().is_none());
}

#[test]
fn test_equal_to_twice_keeps_single_constraint() {
    let (engine, a, b) = setup();
    let bundle = a.anchor();

    bundle.leading.equal_to(&b.leading_anchor());
    bundle
        .leading
        .equal_to_with(&b.leading_anchor(), 12.0, Priority::REQUIRED);

    let active = active_for(&engine, &a, Attribute::Leading);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].constant(), 12.0);
    assert!((a.frame().x - 12.0).abs() < 0.001);
}

#[test]
fn test_repinning_does_not_duplicate() {
    let (engine, a, b) = setup();
    let bundle = a.anchor();

    bundle.pin_to_all(&b).pin_to_all(&b);

    assert_eq!(engine.constraints_involving(a.id()).len(), 4);
    assert!(engine.conflicts().is_empty());
}

#[test]
fn test_size_add_stacks() {
    let (_engine, a, b) = setup();
    let bundle = a.anchor();

    bundle.size_to(&b).add(10.0, 0.0).add(5.0, 0.0);

    assert_eq!(bundle.width.constraint().unwrap().constant(), 15.0);
    assert!((a.frame().width - 215.0).abs() < 0.001);
}

#[test]
fn test_pin_padding_overwrites() {
    let (_engine, a, b) = setup();
    let bundle = a.anchor();

    bundle
        .pin_to_all(&b)
        .padding(EdgeInsets::new(0.0, 8.0, 0.0, 0.0))
        .padding(EdgeInsets::new(0.0, 3.0, 0.0, 0.0));

    assert_eq!(bundle.leading.constraint().unwrap().constant(), 3.0);
    assert!((a.frame().x - 3.0).abs() < 0.001);
}

#[test]
fn test_padding_sign_convention() {
    let (_engine, a, b) = setup();
    let bundle = a.anchor();

    bundle
        .pin_to_all(&b)
        .padding(EdgeInsets::new(0.0, 8.0, 0.0, 8.0));

    assert_eq!(bundle.trailing.constraint().unwrap().constant(), -8.0);
    assert_eq!(bundle.leading.constraint().unwrap().constant(), 8.0);
    assert!(a
        .frame()
        .approx_eq(&Rect::new(8.0, 0.0, 184.0, 100.0), 0.001));
}

#[test]
fn test_pin_edge_subset() {
    let (engine, a, b) = setup();

    a.anchor().pin_to(&b, Edges::TOP | Edges::LEADING);

    let attributes: Vec<_> = engine
        .constraints_involving(a.id())
        .iter()
        .map(|c| c.first_attribute())
        .collect();
    assert_eq!(attributes, vec![Attribute::Top, Attribute::Leading]);
}

#[test]
fn test_scoped_block_coherence() {
    let (engine, a, b) = setup();

    a.with_anchor(|anchor| {
        anchor.pin_to_all(&b);
        anchor.padding_edges(10.0);
    });
    let outside = a.anchor();
    outside.padding_edges(30.0);

    let mut constants: Vec<_> = engine
        .constraints_involving(a.id())
        .iter()
        .map(|c| (c.first_attribute(), c.constant()))
        .collect();
    constants.sort_by_key(|(attribute, _)| *attribute);
    assert_eq!(
        constants,
        vec![
            (Attribute::Leading, 10.0),
            (Attribute::Trailing, -10.0),
            (Attribute::Top, 10.0),
            (Attribute::Bottom, -10.0),
        ]
    );
    assert!(outside.constraints().is_empty());
}

#[test]
fn test_center_padding_offsets_center() {
    let (_engine, a, b) = setup();

    a.with_anchor(|anchor| {
        anchor.center_to(&b).size(20.0, 20.0).padding_center(5.0, -5.0);
    });

    assert!(a
        .frame()
        .approx_eq(&Rect::new(95.0, 35.0, 20.0, 20.0), 0.001));
}

#[test]
fn test_store_hands_out_toggleable_constraint() {
    let (engine, a, b) = setup();
    let mut expanded: Option<Constraint> = None;
    let mut collapsed: Option<Constraint> = None;

    a.with_anchor(|anchor| {
        anchor.pin_to(&b, Edges::TOP | Edges::HORIZONTAL);
        anchor.height.equal_to_constant(80.0).store(&mut expanded);
    });
    a.with_anchor(|anchor| {
        anchor.height.equal_to_constant(20.0).store(&mut collapsed);
    });
    let expanded = expanded.unwrap();
    let collapsed = collapsed.unwrap();

    // Both are required and disagree; the later one is refused
    assert!(expanded.is_active());
    assert!(!collapsed.is_active());
    assert_eq!(engine.take_conflicts().len(), 1);

    expanded.deactivate();
    collapsed.activate().unwrap();
    assert!((a.frame().height - 20.0).abs() < 0.001);

    collapsed.deactivate();
    expanded.activate().unwrap();
    assert!((a.frame().height - 80.0).abs() < 0.001);
}

#[test]
fn test_priority_lets_weaker_relation_yield() {
    let (_engine, a, b) = setup();

    a.with_anchor(|anchor| {
        anchor.pin_to(&b, Edges::TOP | Edges::LEADING);
        anchor.size(50.0, 50.0);
        anchor.width.priority(Priority::DEFAULT_HIGH);
    });
    a.anchor().width.equal_to_constant(70.0);

    assert!((a.frame().width - 70.0).abs() < 0.001);
}

#[test]
fn test_adjusting_before_relating_does_nothing() {
    let (engine, a, _b) = setup();

    a.with_anchor(|anchor| {
        anchor.padding_edges(10.0).padding_center(1.0, 1.0);
        anchor.add(5.0, 5.0).subtract(1.0, 1.0);
        anchor.top.priority(Priority::DEFAULT_LOW);
        assert!(anchor.constraints().is_empty());
    });

    assert!(engine.constraints_involving(a.id()).is_empty());
    assert!(engine.conflicts().is_empty());
}

#[test]
fn test_refused_padding_keeps_constraint_active() {
    let engine = Engine::new();
    let b = engine.create_view("b");
    let a = engine.create_view("a");
    b.add_subview(&a);
    b.set_frame(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    let bundle = a.anchor();
    bundle.size(100.0, 100.0).pin_to(&b, Edges::HORIZONTAL);

    // A required width of 100 leaves no room for a leading inset
    bundle.leading.padding(10.0);

    let leading = bundle.leading.constraint().unwrap();
    assert!(leading.is_active());
    assert_eq!(leading.constant(), 0.0);
    assert_eq!(engine.take_conflicts().len(), 1);
    assert!((a.frame().x - 0.0).abs() < 0.001);

    bundle.leading.padding(0.0);
    assert!(leading.is_active());

    bundle.trailing.priority(Priority::DEFAULT_HIGH);
    bundle.leading.padding(10.0);
    assert!(leading.is_active());
    assert_eq!(leading.constant(), 10.0);
    assert!(engine.conflicts().is_empty());
    assert!(a
        .frame()
        .approx_eq(&Rect::new(10.0, 0.0, 100.0, 100.0), 0.001));
}

#[test]
fn test_stored_constraint_deactivation_releases_frame() {
    let (_engine, a, _b) = setup();
    let mut width: Option<Constraint> = None;

    a.anchor().width.equal_to_constant(50.0).store(&mut width);
    assert!((a.frame().width - 50.0).abs() < 0.001);

    width.unwrap().deactivate();

    assert_eq!(a.frame().width, 0.0);
}
