pub mod dom;
pub mod drag;
pub mod event;
pub mod hit;
pub mod layout;
pub mod text;
pub mod types;

pub use dom::{Dom, DomError, Node};
pub use drag::{DragScroll, DragScrollConfig, DRAG_SCROLL_ATTR, SCROLLBAR_OVERSIZE};
pub use event::{pointer_event, MouseButton, PointerEvent};
pub use hit::hit_test_within;
pub use layout::{clamp_scroll, layout, Layout, Rect};
pub use types::{Dimension, Direction, Overflow, TextWrap};
