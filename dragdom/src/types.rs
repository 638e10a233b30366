/// Overflow behavior per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
}

/// Box dimension, resolved against the parent box during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Sized to content.
    #[default]
    Auto,
    /// Fixed number of cells.
    Cells(u16),
    /// Percentage (0–100) of the parent box.
    Percent(f32),
    /// Percentage of the parent box plus a fixed number of cells,
    /// the `calc(100% + n)` analog.
    PercentPlus(f32, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    #[default]
    NoWrap,
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}
