use raylib::prelude::*;

use crate::view::wrap_words;

/// A font the surface draws with: either loaded from a file or raylib's
/// built-in one when loading failed.
pub enum SliderFont {
    Loaded(Font),
    Default(WeakFont),
}

impl AsRef<ffi::Font> for SliderFont {
    fn as_ref(&self) -> &ffi::Font {
        match self {
            SliderFont::Loaded(font) => font.as_ref(),
            SliderFont::Default(font) => font.as_ref(),
        }
    }
}

impl SliderFont {
    /// Size of `text` drawn at `size` with `spacing` between glyphs.
    pub fn measure(&self, text: &str, size: f32, spacing: f32) -> Vector2 {
        match self {
            SliderFont::Loaded(font) => font.measure_text(text, size, spacing),
            SliderFont::Default(font) => font.measure_text(text, size, spacing),
        }
    }
}

pub(crate) fn fade(color: Color, alpha: f32) -> Color {
    let a = (color.a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, a)
}

/// A wrapped block of text. Lines are left-aligned inside a block centred on
/// the owning node.
pub struct TextBlock {
    text: String,
    lines: Vec<String>,
    size: f32,
    spacing: f32,
    color: Color,
    width: f32,
}

impl TextBlock {
    pub fn new(text: &str, spacing: f32, color: Color) -> Self {
        Self {
            text: text.to_string(),
            lines: Vec::new(),
            size: 0.0,
            spacing,
            color,
            width: 0.0,
        }
    }

    /// Re-wraps the text at a new size.
    pub fn layout(&mut self, font: &SliderFont, size: f32, max_width: f32) {
        let spacing = self.spacing;
        self.layout_with(size, max_width, |s| font.measure(s, size, spacing).x);
    }

    fn layout_with(&mut self, size: f32, max_width: f32, measure: impl Fn(&str) -> f32) {
        self.lines = wrap_words(&self.text, max_width, &measure);
        self.width = self.lines.iter().map(|line| measure(line.as_str())).fold(0.0, f32::max);
        self.size = size;
    }

    fn line_height(&self) -> f32 {
        self.size * 1.1
    }

    pub fn bounds(&self, centre: Vector2) -> Rectangle {
        let height = self.line_height() * self.lines.len() as f32;
        Rectangle::new(centre.x - self.width / 2.0, centre.y - height / 2.0, self.width, height)
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, font: &SliderFont, centre: Vector2, alpha: f32) {
        let bounds = self.bounds(centre);
        let color = fade(self.color, alpha);
        for (i, line) in self.lines.iter().enumerate() {
            let position = Vector2::new(bounds.x, bounds.y + self.line_height() * i as f32);
            d.draw_text_ex(font, line, position, self.size, self.spacing, color);
        }
    }
}

/// Everything drawn for one slide. Any part may be missing: a failed image
/// leaves the slot blank.
pub struct Slide {
    pub image: Option<Texture2D>,
    pub title: Option<TextBlock>,
    pub subtitle: Option<TextBlock>,
}

impl Slide {
    /// Draws the image at native size, centred on `centre`.
    pub fn draw_image(&self, d: &mut impl RaylibDraw, centre: Vector2, alpha: f32) {
        let Some(image) = &self.image else {
            return;
        };
        let width = image.width() as f32;
        let height = image.height() as f32;
        let origin = Vector2::new(width / 2.0, height / 2.0);
        d.draw_texture_pro(
            image,
            Rectangle::new(0.0, 0.0, width, height),
            Rectangle::new(centre.x, centre.y, width, height),
            origin,
            0.0,
            fade(Color::WHITE, alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_scales_existing_alpha() {
        assert_eq!(fade(Color::new(10, 20, 30, 255), 0.5).a, 128);
        assert_eq!(fade(Color::new(10, 20, 30, 100), 1.0).a, 100);
        assert_eq!(fade(Color::WHITE, 2.0).a, 255);
        assert_eq!(fade(Color::WHITE, -1.0).a, 0);
    }

    #[test]
    fn layout_centres_the_widest_line() {
        let mut block = TextBlock::new("kinetic rgb slider", 3.0, Color::WHITE);
        // ten pixels per character
        block.layout_with(20.0, 120.0, |s| s.chars().count() as f32 * 10.0);
        assert_eq!(block.lines, ["kinetic rgb", "slider"]);
        let bounds = block.bounds(Vector2::new(500.0, 300.0));
        assert_eq!(bounds.width, 110.0);
        assert_eq!(bounds.x, 445.0);
        assert_eq!(bounds.height, 44.0);
        assert_eq!(bounds.y, 278.0);
    }
}
