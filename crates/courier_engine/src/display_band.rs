use serde::Serialize;

/// A label with a background/foreground color pairing, ready to be rendered
/// as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DisplayBand {
    pub label: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

impl DisplayBand {
    pub const NEUTRAL: DisplayBand = DisplayBand::new("Unknown", "#F5F5F5", "#757575");

    pub const fn new(
        label: &'static str,
        background: &'static str,
        foreground: &'static str,
    ) -> Self {
        DisplayBand {
            label,
            background,
            foreground,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == DisplayBand::NEUTRAL
    }
}
