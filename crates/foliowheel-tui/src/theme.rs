use ratatui::style::Color;

/// Fixed chrome colors. Panel accents come from the configuration and
/// are cross-faded at render time; these only cover the surrounding UI.
pub struct Chrome;

impl Chrome {
    /// Primary text
    pub const FG: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
    /// Secondary text
    pub const DIM: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
    /// Tertiary text (hints)
    pub const FAINT: Color = Color::Rgb(0x6b, 0x72, 0x80);
    /// Status bar background
    pub const STATUS_BG: Color = Color::Rgb(0x1f, 0x29, 0x37);
    /// Inactive borders
    pub const BORDER: Color = Color::Rgb(0x37, 0x41, 0x51);
}
