use crate::dom::{Dom, DomError, Node};
use crate::event::PointerEvent;
use crate::hit::hit_test_within;
use crate::layout::{Layout, Rect};
use crate::types::{Dimension, Overflow, TextWrap};

/// Extra size added to the host beyond 100% of its wrapper while the
/// scrollbar is hidden. Pushes the scrollbar gutter outside the wrapper's
/// clipped box; assumes a gutter at most this many cells wide.
pub const SCROLLBAR_OVERSIZE: u16 = 20;

/// Attribute set on the host while drag-scrolling is bound, for external
/// styling and tooling hooks.
pub const DRAG_SCROLL_ATTR: &str = "drag-scroll";

/// The four externally settable inputs. Route every change through
/// [`DragScroll::set_config`] so axis and visibility state stay consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragScrollConfig {
    /// Hide the native scrollbar by wrapping the host in a clipping box.
    pub scrollbar_hidden: bool,
    /// Master switch: disables dragging on both axes.
    pub disabled: bool,
    /// Disables horizontal dragging and scrolling.
    pub x_disabled: bool,
    /// Disables vertical dragging and scrolling.
    pub y_disabled: bool,
}

/// The clipping box inserted around the host while the scrollbar is hidden,
/// plus the host's rendered size at wrap time.
#[derive(Debug, Clone)]
struct Wrapper {
    id: String,
    width: u16,
    height: u16,
}

/// Turns a scrollable node into a mouse-draggable scroll area.
///
/// One controller per host. All bound controllers receive all global
/// move/up events and filter by their own pressed state, so instances on
/// the same tree never interfere. A drag keeps tracking after the pointer
/// leaves the host; only an up event (anywhere) or `unbind` ends it.
#[derive(Debug)]
pub struct DragScroll {
    host: String,
    config: DragScrollConfig,
    bound: bool,
    pressed: bool,
    down_x: u16,
    down_y: u16,
    rect: Rect,
    wrapper: Option<Wrapper>,
}

impl DragScroll {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            config: DragScrollConfig::default(),
            bound: false,
            pressed: false,
            down_x: 0,
            down_y: 0,
            rect: Rect::default(),
            wrapper: None,
        }
    }

    /// Set the initial configuration before binding.
    pub fn with_config(mut self, config: DragScrollConfig) -> Self {
        self.config = config;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn config(&self) -> DragScrollConfig {
        self.config
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Is the user currently pressing the host
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// The host's bounding rect captured at bind time.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn wrapper_id(&self) -> Option<&str> {
        self.wrapper.as_ref().map(|wrapper| wrapper.id.as_str())
    }

    /// Attach to the host: make it scrollable on both axes, keep content on
    /// one line, mark it with the [`DRAG_SCROLL_ATTR`] attribute, subscribe
    /// to the global move/up stream and apply the current configuration.
    pub fn bind(&mut self, dom: &mut Dom, layout: &Layout) -> Result<(), DomError> {
        let node = dom
            .get_mut(&self.host)
            .ok_or_else(|| DomError::UnknownNode(self.host.clone()))?;
        node.overflow_x = Overflow::Auto;
        node.overflow_y = Overflow::Auto;
        node.text_wrap = TextWrap::NoWrap;
        self.rect = layout.get(&self.host).unwrap_or_default();
        dom.set_attr(&self.host, DRAG_SCROLL_ATTR, "true");
        self.bound = true;
        log::debug!("[drag] bound to {}", self.host);
        self.apply_config(dom, layout)
    }

    /// Detach from the host and release the global subscription. Safe on
    /// every destruction path, including mid-drag; after this no delivered
    /// event changes any state.
    pub fn unbind(&mut self, dom: &mut Dom) {
        dom.set_attr(&self.host, DRAG_SCROLL_ATTR, "false");
        self.bound = false;
        log::debug!("[drag] unbound from {}", self.host);
    }

    /// Replace the configuration and reapply it. Invoked by the embedder
    /// whenever any of the four inputs changes; a bind applies the stored
    /// configuration once on its own.
    pub fn set_config(
        &mut self,
        dom: &mut Dom,
        layout: &Layout,
        config: DragScrollConfig,
    ) -> Result<(), DomError> {
        self.config = config;
        if self.bound {
            self.apply_config(dom, layout)
        } else {
            Ok(())
        }
    }

    fn apply_config(&mut self, dom: &mut Dom, layout: &Layout) -> Result<(), DomError> {
        if self.config.scrollbar_hidden {
            self.hide_scrollbar(dom, layout)?;
        } else {
            self.show_scrollbar(dom)?;
        }
        let config = self.config;
        let node = dom
            .get_mut(&self.host)
            .ok_or_else(|| DomError::UnknownNode(self.host.clone()))?;
        node.overflow_x = if config.disabled || config.x_disabled {
            Overflow::Hidden
        } else {
            Overflow::Auto
        };
        node.overflow_y = if config.disabled || config.y_disabled {
            Overflow::Hidden
        } else {
            Overflow::Auto
        };
        Ok(())
    }

    /// Route a batch of pointer events. Down events start a drag session
    /// only when they hit the host subtree; move and up events are global.
    /// Returns the events that were consumed. Does nothing when not bound.
    pub fn process_events(
        &mut self,
        dom: &mut Dom,
        layout: &Layout,
        events: &[PointerEvent],
    ) -> Vec<PointerEvent> {
        let mut consumed = Vec::new();
        if !self.bound {
            return consumed;
        }
        for event in events {
            match *event {
                PointerEvent::Down { x, y, .. } => {
                    if hit_test_within(layout, dom, &self.host, x, y) {
                        self.on_pointer_down(x, y);
                        consumed.push(*event);
                    }
                }
                PointerEvent::Move { x, y } => {
                    if self.on_pointer_move(dom, x, y) {
                        consumed.push(*event);
                    }
                }
                PointerEvent::Up { x, y, .. } => {
                    let was_pressed = self.pressed;
                    self.on_pointer_up(x, y);
                    if was_pressed {
                        consumed.push(*event);
                    }
                }
            }
        }
        consumed
    }

    /// Start a drag session at the given pointer position.
    pub fn on_pointer_down(&mut self, x: u16, y: u16) {
        self.pressed = true;
        self.down_x = x;
        self.down_y = y;
        log::trace!("[drag] session start on {} at ({x}, {y})", self.host);
    }

    /// Track pointer motion: each enabled axis scrolls by the delta since
    /// the last seen position, so the offset follows the pointer 1:1 no
    /// matter how far the box has drifted. Returns whether an offset
    /// changed.
    pub fn on_pointer_move(&mut self, dom: &mut Dom, x: u16, y: u16) -> bool {
        if !self.pressed || self.config.disabled {
            return false;
        }
        let mut moved = false;

        // Drag X
        if !self.config.x_disabled {
            let left = dom.scroll_left(&self.host);
            let next = (left as i32 - x as i32 + self.down_x as i32).max(0) as u16;
            if next != left {
                dom.set_scroll_left(&self.host, next);
                moved = true;
            }
            self.down_x = x;
        }

        // Drag Y
        if !self.config.y_disabled {
            let top = dom.scroll_top(&self.host);
            let next = (top as i32 - y as i32 + self.down_y as i32).max(0) as u16;
            if next != top {
                dom.set_scroll_top(&self.host, next);
                moved = true;
            }
            self.down_y = y;
        }

        moved
    }

    /// End the drag session. Safe to call when none is active.
    pub fn on_pointer_up(&mut self, _x: u16, _y: u16) {
        if self.pressed {
            log::trace!("[drag] session end on {}", self.host);
        }
        self.pressed = false;
    }

    /// Hide the native scrollbar: snapshot the host's rendered size, wrap
    /// it in a clipping box of exactly that size and oversize the host by
    /// [`SCROLLBAR_OVERSIZE`] so the gutter falls outside the clip.
    /// No-op when the host is already wrapped.
    pub fn hide_scrollbar(&mut self, dom: &mut Dom, layout: &Layout) -> Result<(), DomError> {
        if self.wrapper.is_some() {
            return Ok(());
        }
        let parent = dom
            .parent(&self.host)
            .ok_or_else(|| DomError::IsRoot(self.host.clone()))?
            .to_string();
        let rect = layout.get(&self.host).unwrap_or(self.rect);

        let wrapper_id = dom.insert(
            Node::box_()
                .width(Dimension::Cells(rect.width))
                .height(Dimension::Cells(rect.height))
                .overflow(Overflow::Hidden),
        );
        dom.replace_child(&parent, &self.host, &wrapper_id)?;
        dom.append_child(&wrapper_id, &self.host)?;
        if let Some(node) = dom.get_mut(&self.host) {
            node.width = Dimension::PercentPlus(100.0, SCROLLBAR_OVERSIZE);
            node.height = Dimension::PercentPlus(100.0, SCROLLBAR_OVERSIZE);
        }
        log::debug!(
            "[drag] wrapped {} in {wrapper_id} ({}x{})",
            self.host,
            rect.width,
            rect.height
        );
        self.wrapper = Some(Wrapper {
            id: wrapper_id,
            width: rect.width,
            height: rect.height,
        });
        Ok(())
    }

    /// Undo [`hide_scrollbar`](Self::hide_scrollbar): restore the host's
    /// pre-hide size, put it back under its original parent and drop the
    /// wrapper. No-op when no wrapper exists.
    pub fn show_scrollbar(&mut self, dom: &mut Dom) -> Result<(), DomError> {
        let Some(wrapper) = self.wrapper.take() else {
            return Ok(());
        };
        if let Some(node) = dom.get_mut(&self.host) {
            node.width = Dimension::Cells(wrapper.width);
            node.height = Dimension::Cells(wrapper.height);
        }
        if let Some(parent) = dom.parent(&wrapper.id).map(str::to_string) {
            dom.remove_child(&parent, &wrapper.id)?;
            dom.append_child(&parent, &self.host)?;
        }
        if dom.contains(&wrapper.id) {
            dom.remove(&wrapper.id)?;
        }
        log::debug!("[drag] unwrapped {}", self.host);
        Ok(())
    }

    /// Post-render check: keep the oversize margin only while the matching
    /// scrollbar would be visible. Horizontal overflow drives the height
    /// (a horizontal bar eats height) and vertical overflow drives the
    /// width. Skipped entirely while no wrapper is present, to avoid
    /// needless geometry reads.
    pub fn reconcile(&self, dom: &mut Dom, layout: &Layout) {
        if self.wrapper.is_none() {
            return;
        }
        let Some((content_w, content_h)) = layout.content_size(&self.host) else {
            return;
        };
        let Some((viewport_w, viewport_h)) = layout.viewport_size(&self.host) else {
            return;
        };
        let Some(node) = dom.get_mut(&self.host) else {
            return;
        };
        node.height = if content_w <= viewport_w {
            Dimension::Percent(100.0)
        } else {
            Dimension::PercentPlus(100.0, SCROLLBAR_OVERSIZE)
        };
        node.width = if content_h <= viewport_h {
            Dimension::Percent(100.0)
        } else {
            Dimension::PercentPlus(100.0, SCROLLBAR_OVERSIZE)
        };
    }
}
