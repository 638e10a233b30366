use dragdom::{
    Dom, DragScroll, DragScrollConfig, Layout, MouseButton, Node, Overflow, PointerEvent, Rect,
    TextWrap, DRAG_SCROLL_ATTR,
};

fn setup() -> (Dom, Layout) {
    let mut dom = Dom::new(Node::box_().id("root"));
    dom.insert(Node::row().id("host").scroll(100, 100));
    dom.append_child("root", "host").unwrap();

    let mut layout = Layout::new();
    layout.insert("root", Rect::new(0, 0, 400, 300));
    layout.insert("host", Rect::new(0, 0, 200, 200));
    (dom, layout)
}

fn down(x: u16, y: u16) -> PointerEvent {
    PointerEvent::Down {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn mv(x: u16, y: u16) -> PointerEvent {
    PointerEvent::Move { x, y }
}

fn up(x: u16, y: u16) -> PointerEvent {
    PointerEvent::Up {
        x,
        y,
        button: MouseButton::Left,
    }
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_bind_sets_overflow_and_attr() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");

    drag.bind(&mut dom, &layout).unwrap();

    let host = dom.get("host").unwrap();
    assert_eq!(host.overflow_x, Overflow::Auto);
    assert_eq!(host.overflow_y, Overflow::Auto);
    assert_eq!(host.text_wrap, TextWrap::NoWrap);
    assert_eq!(dom.attr("host", DRAG_SCROLL_ATTR), Some("true"));
    assert_eq!(drag.rect(), Rect::new(0, 0, 200, 200));
    assert!(drag.is_bound());
}

#[test]
fn test_unbind_clears_attr() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");

    drag.bind(&mut dom, &layout).unwrap();
    drag.unbind(&mut dom);

    assert_eq!(dom.attr("host", DRAG_SCROLL_ATTR), Some("false"));
    assert!(!drag.is_bound());
}

#[test]
fn test_bind_unknown_host_fails() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("ghost");

    assert!(drag.bind(&mut dom, &layout).is_err());
}

// ============================================================================
// Drag Sessions
// ============================================================================

#[test]
fn test_deltas_compose_telescoping() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    drag.process_events(&mut dom, &layout, &[down(50, 50), mv(40, 45), mv(20, 30)]);

    // Intermediate moves telescope: offset = initial + (down - final)
    assert_eq!(dom.scroll_left("host"), 100 + (50 - 20));
    assert_eq!(dom.scroll_top("host"), 100 + (50 - 30));
}

#[test]
fn test_drag_right_scrolls_content_left() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    drag.process_events(&mut dom, &layout, &[down(50, 50), mv(60, 50)]);

    assert_eq!(dom.scroll_left("host"), 90);
    assert_eq!(dom.scroll_top("host"), 100);
}

#[test]
fn test_move_before_down_is_noop() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    let consumed = drag.process_events(&mut dom, &layout, &[mv(40, 40), mv(10, 10)]);

    assert!(consumed.is_empty());
    assert_eq!(dom.scroll_left("host"), 100);
    assert_eq!(dom.scroll_top("host"), 100);
}

#[test]
fn test_move_after_up_is_noop() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    drag.process_events(&mut dom, &layout, &[down(50, 50), mv(40, 50), up(40, 50)]);
    let before = (dom.scroll_left("host"), dom.scroll_top("host"));
    drag.process_events(&mut dom, &layout, &[mv(10, 10)]);

    assert!(!drag.is_pressed());
    assert_eq!((dom.scroll_left("host"), dom.scroll_top("host")), before);
}

#[test]
fn test_up_is_global_not_host_scoped() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    // Release far outside the host still ends the session
    drag.process_events(&mut dom, &layout, &[down(50, 50), up(390, 290)]);

    assert!(!drag.is_pressed());
}

#[test]
fn test_up_without_press_is_safe() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    let consumed = drag.process_events(&mut dom, &layout, &[up(10, 10)]);

    assert!(consumed.is_empty());
    assert!(!drag.is_pressed());
}

#[test]
fn test_down_outside_host_does_not_start_session() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    drag.process_events(&mut dom, &layout, &[down(300, 250), mv(200, 200)]);

    assert!(!drag.is_pressed());
    assert_eq!(dom.scroll_left("host"), 100);
}

#[test]
fn test_drag_keeps_tracking_outside_host() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    // Pointer leaves the host mid-drag; moves still land
    drag.process_events(&mut dom, &layout, &[down(50, 50), mv(40, 250)]);

    assert!(drag.is_pressed());
    assert_eq!(dom.scroll_left("host"), 110);
}

#[test]
fn test_offsets_saturate_at_zero() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    // A large rightward pull would go past the left edge
    drag.process_events(&mut dom, &layout, &[down(10, 10), mv(180, 150)]);

    assert_eq!(dom.scroll_left("host"), 0);
    assert_eq!(dom.scroll_top("host"), 0);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_disable_mid_press_stops_offsets() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    drag.process_events(&mut dom, &layout, &[down(50, 50), mv(40, 40)]);
    assert_eq!(dom.scroll_left("host"), 110);

    drag.set_config(
        &mut dom,
        &layout,
        DragScrollConfig {
            disabled: true,
            ..Default::default()
        },
    )
    .unwrap();
    drag.process_events(&mut dom, &layout, &[mv(10, 10)]);

    // Offsets freeze but the press itself is not reset
    assert!(drag.is_pressed());
    assert_eq!(dom.scroll_left("host"), 110);
    assert_eq!(dom.scroll_top("host"), 110);
}

#[test]
fn test_x_disabled_isolates_axis() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host").with_config(DragScrollConfig {
        x_disabled: true,
        ..Default::default()
    });
    drag.bind(&mut dom, &layout).unwrap();

    drag.process_events(&mut dom, &layout, &[down(50, 50), mv(20, 30), mv(10, 10)]);

    assert_eq!(dom.scroll_left("host"), 100);
    assert_eq!(dom.scroll_top("host"), 100 + (50 - 10));
}

#[test]
fn test_y_disabled_isolates_axis() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host").with_config(DragScrollConfig {
        y_disabled: true,
        ..Default::default()
    });
    drag.bind(&mut dom, &layout).unwrap();

    drag.process_events(&mut dom, &layout, &[down(50, 50), mv(20, 30), mv(10, 10)]);

    assert_eq!(dom.scroll_left("host"), 100 + (50 - 10));
    assert_eq!(dom.scroll_top("host"), 100);
}

#[test]
fn test_axis_overflow_follows_effective_disabled() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    drag.set_config(
        &mut dom,
        &layout,
        DragScrollConfig {
            x_disabled: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(dom.get("host").unwrap().overflow_x, Overflow::Hidden);
    assert_eq!(dom.get("host").unwrap().overflow_y, Overflow::Auto);

    drag.set_config(
        &mut dom,
        &layout,
        DragScrollConfig {
            disabled: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(dom.get("host").unwrap().overflow_x, Overflow::Hidden);
    assert_eq!(dom.get("host").unwrap().overflow_y, Overflow::Hidden);

    drag.set_config(&mut dom, &layout, DragScrollConfig::default())
        .unwrap();
    assert_eq!(dom.get("host").unwrap().overflow_x, Overflow::Auto);
    assert_eq!(dom.get("host").unwrap().overflow_y, Overflow::Auto);
}

// ============================================================================
// Detach
// ============================================================================

#[test]
fn test_unbind_mid_drag_stops_tracking() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    drag.process_events(&mut dom, &layout, &[down(50, 50), mv(40, 40)]);
    assert!(drag.is_pressed());

    drag.unbind(&mut dom);
    let consumed = drag.process_events(&mut dom, &layout, &[mv(10, 10), down(50, 50)]);

    // Delivered events no longer reach the controller
    assert!(consumed.is_empty());
    assert_eq!(dom.scroll_left("host"), 110);
    assert_eq!(dom.scroll_top("host"), 110);
}

// ============================================================================
// Multiple Instances
// ============================================================================

#[test]
fn test_instances_do_not_interfere() {
    let (mut dom, mut layout) = setup();
    dom.insert(Node::row().id("other").scroll(100, 100));
    dom.append_child("root", "other").unwrap();
    layout.insert("other", Rect::new(200, 0, 200, 200));

    let mut drag_a = DragScroll::new("host");
    let mut drag_b = DragScroll::new("other");
    drag_a.bind(&mut dom, &layout).unwrap();
    drag_b.bind(&mut dom, &layout).unwrap();

    // Both controllers see every event; only the pressed one reacts
    let events = [down(50, 50), mv(40, 40)];
    drag_a.process_events(&mut dom, &layout, &events);
    drag_b.process_events(&mut dom, &layout, &events);

    assert_eq!(dom.scroll_left("host"), 110);
    assert_eq!(dom.scroll_left("other"), 100);

    let events = [up(40, 40), down(250, 50), mv(240, 50)];
    drag_a.process_events(&mut dom, &layout, &events);
    drag_b.process_events(&mut dom, &layout, &events);

    assert_eq!(dom.scroll_left("host"), 110);
    assert_eq!(dom.scroll_left("other"), 110);
}

// ============================================================================
// Consumed Events
// ============================================================================

#[test]
fn test_consumed_events_reported() {
    let (mut dom, layout) = setup();
    let mut drag = DragScroll::new("host");
    drag.bind(&mut dom, &layout).unwrap();

    let consumed = drag.process_events(
        &mut dom,
        &layout,
        &[down(50, 50), mv(40, 40), up(40, 40), mv(30, 30)],
    );

    assert_eq!(consumed, vec![down(50, 50), mv(40, 40), up(40, 40)]);
}
