// File: crates/inkline-core/src/theme.rs
// Summary: Named color presets for minimalist (ink-on-paper) rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub ink: skia::Color,         // spines, slope segments, endpoint labels
    pub muted: skia::Color,       // tick marks and tick labels
    pub accent: skia::Color,      // final-point highlight and its value
    pub line_stroke: skia::Color, // trend line
    pub title: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            ink: skia::Color::from_argb(255, 20, 20, 20),
            muted: skia::Color::from_argb(255, 110, 110, 115),
            accent: skia::Color::from_argb(255, 200, 40, 40),
            line_stroke: skia::Color::from_argb(255, 40, 90, 200),
            title: skia::Color::from_argb(255, 20, 20, 20),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            ink: skia::Color::from_argb(255, 230, 230, 235),
            muted: skia::Color::from_argb(255, 140, 140, 150),
            accent: skia::Color::from_argb(255, 235, 90, 90),
            line_stroke: skia::Color::from_argb(255, 96, 156, 255),
            title: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            ink: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            muted: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            accent: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
