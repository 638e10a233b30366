use crate::dom::Dom;
use crate::layout::Layout;

/// Whether the point lands inside `host` or any of its descendants.
/// Descendants count even when they stick out of the host's own rect
/// (overflow visible), matching event bubbling from a child to the host.
pub fn hit_test_within(layout: &Layout, dom: &Dom, host: &str, x: u16, y: u16) -> bool {
    if layout.get(host).is_some_and(|rect| rect.contains(x, y)) {
        return true;
    }
    dom.children(host)
        .iter()
        .any(|child| hit_test_within(layout, dom, child, x, y))
}
