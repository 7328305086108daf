use engine::{Appearance, aggregate::PALETTE_SIZE};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub error: Color,
    pub border: Color,
    pub empty_ring: Color,
}

impl Theme {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0xF5, 0xF5, 0xF5),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x00, 0x00, 0x00),
            text_muted: Color::Rgb(0x4D, 0x4D, 0x4D),
            primary: Color::Rgb(0x62, 0x00, 0xEE),
            secondary: Color::Rgb(0x03, 0xDA, 0xC6),
            tertiary: Color::Rgb(0x37, 0x00, 0xB3),
            error: Color::Rgb(0xB3, 0x26, 0x1E),
            border: Color::Rgb(0xBD, 0xBD, 0xBD),
            empty_ring: Color::Rgb(0xD3, 0xD3, 0xD3),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x12, 0x12, 0x12),
            surface: Color::Rgb(0x1E, 0x1E, 0x1E),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            text_muted: Color::Rgb(0xB3, 0xB3, 0xB3),
            primary: Color::Rgb(0xBB, 0x86, 0xFC),
            secondary: Color::Rgb(0x03, 0xDA, 0xC6),
            tertiary: Color::Rgb(0x37, 0x00, 0xB3),
            error: Color::Rgb(0xF2, 0xB8, 0xB5),
            border: Color::Rgb(0x42, 0x42, 0x42),
            empty_ring: Color::Rgb(0xD3, 0xD3, 0xD3),
        }
    }

    /// Pie palette: primary, secondary, tertiary, error, gray.
    pub fn chart_palette(&self) -> [Color; PALETTE_SIZE] {
        [
            self.primary,
            self.secondary,
            self.tertiary,
            self.error,
            Color::Gray,
        ]
    }

    pub fn chart_color(&self, palette_index: usize) -> Color {
        self.chart_palette()[palette_index % PALETTE_SIZE]
    }
}
