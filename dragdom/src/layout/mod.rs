mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use crate::dom::Dom;
use crate::text;
use crate::types::{Dimension, Direction};

/// Measured geometry from a layout pass: per-node screen rects plus the
/// content (scrollable extent) and viewport (visible box) sizes scrolling
/// works against. Also buildable by hand when the geometry is computed
/// elsewhere.
#[derive(Debug, Default)]
pub struct Layout {
    rects: HashMap<String, Rect>,
    content: HashMap<String, (u16, u16)>,
    viewport: HashMap<String, (u16, u16)>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    /// Scrollable content extent. Falls back to the node's own rect when
    /// none was recorded, so hand-built layouts describe non-overflowing
    /// boxes by default.
    pub fn content_size(&self, id: &str) -> Option<(u16, u16)> {
        self.content
            .get(id)
            .copied()
            .or_else(|| self.get(id).map(|rect| (rect.width, rect.height)))
    }

    pub fn set_content_size(&mut self, id: impl Into<String>, size: (u16, u16)) {
        self.content.insert(id.into(), size);
    }

    /// Visible box size, the client area scrolling is clamped against.
    /// Falls back to the node's own rect when none was recorded.
    pub fn viewport_size(&self, id: &str) -> Option<(u16, u16)> {
        self.viewport
            .get(id)
            .copied()
            .or_else(|| self.get(id).map(|rect| (rect.width, rect.height)))
    }

    pub fn set_viewport_size(&mut self, id: impl Into<String>, size: (u16, u16)) {
        self.viewport.insert(id.into(), size);
    }
}

/// Measure the tree top-down. The root fills `available`; children stack
/// along their parent's direction, shifted by its scroll offsets. Frames
/// scrolled past the screen origin are clipped at zero.
pub fn layout(dom: &Dom, available: Rect) -> Layout {
    let mut result = Layout::new();
    layout_node(dom, dom.root(), available, &mut result);
    result
}

fn layout_node(dom: &Dom, id: &str, frame: Rect, result: &mut Layout) {
    let Some(node) = dom.get(id) else {
        return;
    };
    result.insert(id, frame);
    result.set_viewport_size(id, (frame.width, frame.height));

    if let Some(content) = &node.text {
        let size = text::measure(content, node.text_wrap, frame.width);
        result.set_content_size(id, size);
        return;
    }

    let (scroll_x, scroll_y) = node.scroll;
    let is_row = node.direction == Direction::Row;
    let mut cursor = 0u16;
    let mut cross_extent = 0u16;

    for child_id in dom.children(id) {
        let Some(child) = dom.get(child_id) else {
            continue;
        };
        let width = resolve(child.width, frame.width, || {
            measure_content(dom, child_id, frame.width, frame.height).0
        });
        let height = resolve(child.height, frame.height, || {
            measure_content(dom, child_id, frame.width, frame.height).1
        });

        let (content_x, content_y) = if is_row { (cursor, 0) } else { (0, cursor) };
        let screen_x = (frame.x as i32 + content_x as i32 - scroll_x as i32).max(0) as u16;
        let screen_y = (frame.y as i32 + content_y as i32 - scroll_y as i32).max(0) as u16;
        layout_node(dom, child_id, Rect::new(screen_x, screen_y, width, height), result);

        let (main, cross) = if is_row { (width, height) } else { (height, width) };
        cursor = cursor.saturating_add(main);
        cross_extent = cross_extent.max(cross);
    }

    let content = if is_row {
        (cursor, cross_extent)
    } else {
        (cross_extent, cursor)
    };
    result.set_content_size(id, content);
}

/// Content extent of a node, for `Auto` sizing.
fn measure_content(dom: &Dom, id: &str, avail_w: u16, avail_h: u16) -> (u16, u16) {
    let Some(node) = dom.get(id) else {
        return (0, 0);
    };
    if let Some(content) = &node.text {
        return text::measure(content, node.text_wrap, avail_w);
    }

    let is_row = node.direction == Direction::Row;
    let mut main = 0u16;
    let mut cross = 0u16;
    for child_id in dom.children(id) {
        let Some(child) = dom.get(child_id) else {
            continue;
        };
        let width = resolve(child.width, avail_w, || {
            measure_content(dom, child_id, avail_w, avail_h).0
        });
        let height = resolve(child.height, avail_h, || {
            measure_content(dom, child_id, avail_w, avail_h).1
        });
        let (m, c) = if is_row { (width, height) } else { (height, width) };
        main = main.saturating_add(m);
        cross = cross.max(c);
    }
    if is_row {
        (main, cross)
    } else {
        (cross, main)
    }
}

fn resolve(dim: Dimension, parent: u16, content: impl FnOnce() -> u16) -> u16 {
    match dim {
        Dimension::Auto => content(),
        Dimension::Cells(n) => n,
        Dimension::Percent(p) => scale(parent, p),
        Dimension::PercentPlus(p, extra) => scale(parent, p).saturating_add(extra),
    }
}

fn scale(parent: u16, percent: f32) -> u16 {
    (parent as f32 * percent / 100.0) as u16
}

/// Clamp every node's scroll offsets to the scrollable range measured by
/// the last pass. Call after layout.
pub fn clamp_scroll(dom: &mut Dom, layout: &Layout) {
    let ids: Vec<String> = dom.ids().map(str::to_string).collect();
    for id in ids {
        let Some((content_w, content_h)) = layout.content_size(&id) else {
            continue;
        };
        let Some((viewport_w, viewport_h)) = layout.viewport_size(&id) else {
            continue;
        };
        let max_x = content_w.saturating_sub(viewport_w);
        let max_y = content_h.saturating_sub(viewport_h);
        if let Some(node) = dom.get_mut(&id) {
            node.scroll.0 = node.scroll.0.min(max_x);
            node.scroll.1 = node.scroll.1.min(max_y);
        }
    }
}
