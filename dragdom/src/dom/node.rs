use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Dimension, Direction, Overflow, TextWrap};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A single node in the tree. Parent/child relationships live in the
/// [`Dom`](super::Dom) arena, not on the node itself.
#[derive(Debug, Clone)]
pub struct Node {
    // Identity
    pub id: String,

    // Content
    /// Inline text content. Nodes with text ignore their children during
    /// measurement.
    pub text: Option<String>,

    // Box
    pub width: Dimension,
    pub height: Dimension,

    // Overflow (separate X/Y for independent control)
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub scroll: (u16, u16),

    // Children flow
    pub direction: Direction,

    // Text
    pub text_wrap: TextWrap,

    // Attributes observable by external styling/tooling
    pub attrs: HashMap<String, String>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: generate_id("node"),
            text: None,
            width: Dimension::Auto,
            height: Dimension::Auto,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            scroll: (0, 0),
            direction: Direction::Column,
            text_wrap: TextWrap::NoWrap,
            attrs: HashMap::new(),
        }
    }
}

impl Node {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            text: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Box
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    // Overflow
    /// Set both horizontal and vertical overflow behavior.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self.overflow_y = overflow;
        self
    }

    /// Set horizontal overflow behavior.
    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self
    }

    /// Set vertical overflow behavior.
    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = overflow;
        self
    }

    pub fn scroll(mut self, x: u16, y: u16) -> Self {
        self.scroll = (x, y);
        self
    }

    // Children flow
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    // Text
    pub fn text_wrap(mut self, text_wrap: TextWrap) -> Self {
        self.text_wrap = text_wrap;
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}
