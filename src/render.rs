use log::{info, warn};
use raylib::prelude::*;

use crate::config::{FontSpec, SliderConfig};
use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::engine::Surface;
use crate::error::{Result, SliderError};
use crate::scene::{Layer, LayerKind, Scene};
use crate::shaders::{blit, DisplacementFilter, RgbSplitFilter};
use crate::slide::{Slide, SliderFont, TextBlock};
use crate::texture_loader::{load_slide_textures, load_texture_with_exif_rotation};
use crate::view::{StageView, TextMetrics};

pub struct KineticSurface {
    slides: Vec<Slide>,
    title_font: SliderFont,
    subtitle_font: SliderFont,
    background_map: Option<Texture2D>,
    cursor_map: Option<Texture2D>,
    displacement: DisplacementFilter,
    rgb_split: RgbSplitFilter,
    // ping-pong pair for per-layer filtering
    scratch: [RenderTexture2D; 2],
    main: RenderTexture2D,
    stage: RenderTexture2D,
}

fn load_font(rl: &mut RaylibHandle, thread: &RaylibThread, spec: Option<&FontSpec>, size: f32) -> SliderFont {
    let Some(spec) = spec else {
        return SliderFont::Default(rl.get_font_default());
    };
    let path = spec.path.to_string_lossy();
    match rl.load_font_ex(thread, &path, size.round().max(1.0) as i32, None) {
        Ok(font) => SliderFont::Loaded(font),
        Err(e) => {
            warn!("failed to load font {}: {}, using the default font", path, e);
            SliderFont::Default(rl.get_font_default())
        }
    }
}

fn load_map(rl: &mut RaylibHandle, thread: &RaylibThread, path: Option<&std::path::Path>) -> Option<Texture2D> {
    let path = path?;
    match load_texture_with_exif_rotation(rl, thread, path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("{}, displacement disabled", e);
            None
        }
    }
}

fn draw_layer(d: &mut impl RaylibDraw, slides: &[Slide], [title_font, subtitle_font]: [&SliderFont; 2], layer: &Layer) {
    for (slide, node) in slides.iter().zip(&layer.nodes) {
        if node.alpha <= 0.0 {
            continue;
        }
        match layer.kind {
            LayerKind::Images => slide.draw_image(d, node.position, node.alpha),
            LayerKind::Titles => {
                if let Some(title) = &slide.title {
                    title.draw(d, title_font, node.position, node.alpha);
                }
            }
            LayerKind::Subtitles => {
                if let Some(subtitle) = &slide.subtitle {
                    subtitle.draw(d, subtitle_font, node.position, node.alpha);
                }
            }
        }
    }
}

fn render_target(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<RenderTexture2D> {
    rl.load_render_texture(thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| SliderError::RenderTarget(e.to_string()))
}

impl KineticSurface {
    /// Draws one layer into the scratch pair and runs its filters. Returns
    /// the index of the target holding the result.
    fn filter_layer(&mut self, d: &mut RaylibDrawHandle, thread: &RaylibThread, scene: &Scene, layer: &Layer) -> usize {
        {
            let [first, _] = &mut self.scratch;
            let mut t = d.begin_texture_mode(thread, first);
            t.clear_background(Color::BLANK);
            draw_layer(&mut t, &self.slides, [&self.title_font, &self.subtitle_font], layer);
        }

        let mut current = 0;
        let [a, b] = &mut self.scratch;
        if layer.filters.cursor_displacement {
            if let Some(map) = &self.cursor_map {
                let (source, target) = if current == 0 { (&*a, &mut *b) } else { (&*b, &mut *a) };
                self.displacement.apply(d, thread, source, target, map, &scene.cursor, false);
                current = 1 - current;
            }
        }
        if layer.filters.rgb_split {
            let split = if layer.kind == LayerKind::Images { &scene.image_split } else { &scene.text_split };
            if !split.is_zero() {
                let (source, target) = if current == 0 { (&*a, &mut *b) } else { (&*b, &mut *a) };
                self.rgb_split.apply(d, thread, source, target, split);
                current = 1 - current;
            }
        }
        current
    }
}

impl Surface for KineticSurface {
    fn load(rl: &mut RaylibHandle, thread: &RaylibThread, config: &SliderConfig, metrics: &TextMetrics) -> Result<Self> {
        // fonts first, then images
        let title_font = load_font(rl, thread, config.title_font(), config.text_title_size);
        let subtitle_font = load_font(rl, thread, config.subtitle_font(), config.text_sub_title_size);

        let textures = load_slide_textures(rl, thread, &config.slide_images);
        let loaded = textures.iter().filter(|t| t.is_some()).count();

        let title_color = config.title_color();
        let subtitle_color = config.subtitle_color();
        let slides = textures
            .into_iter()
            .enumerate()
            .map(|(i, image)| Slide {
                image,
                title: config
                    .shows_titles()
                    .then(|| config.title(i))
                    .flatten()
                    .map(|text| TextBlock::new(text, config.text_title_letterspacing, title_color)),
                subtitle: config
                    .shows_subtitles()
                    .then(|| config.subtitle(i))
                    .flatten()
                    .map(|text| TextBlock::new(text, config.text_sub_title_letterspacing, subtitle_color)),
            })
            .collect();

        let background_map = load_map(rl, thread, config.background_displacement_sprite.as_deref());
        let cursor_map = load_map(rl, thread, config.cursor_displacement_sprite.as_deref());

        info!(
            "loaded {}/{} images, background map {}, cursor map {}",
            loaded,
            config.slide_count(),
            if background_map.is_some() { "on" } else { "off" },
            if cursor_map.is_some() { "on" } else { "off" }
        );

        let mut surface = Self {
            slides,
            title_font,
            subtitle_font,
            background_map,
            cursor_map,
            displacement: DisplacementFilter::load(rl, thread),
            rgb_split: RgbSplitFilter::load(rl, thread),
            scratch: [render_target(rl, thread)?, render_target(rl, thread)?],
            main: render_target(rl, thread)?,
            stage: render_target(rl, thread)?,
        };
        surface.relayout(metrics);
        Ok(surface)
    }

    fn relayout(&mut self, metrics: &TextMetrics) {
        for slide in self.slides.iter_mut() {
            if let Some(title) = slide.title.as_mut() {
                title.layout(&self.title_font, metrics.title_size, metrics.title_wrap);
            }
            if let Some(subtitle) = slide.subtitle.as_mut() {
                subtitle.layout(&self.subtitle_font, metrics.subtitle_size, metrics.subtitle_wrap);
            }
        }
    }

    fn title_bounds(&self, scene: &Scene, index: usize) -> Option<Rectangle> {
        let node = scene.node(LayerKind::Titles, index)?;
        let title = self.slides.get(index)?.title.as_ref()?;
        Some(title.bounds(node.position))
    }

    fn render(&mut self, d: &mut RaylibDrawHandle, thread: &RaylibThread, scene: &Scene, view: &StageView) {
        d.begin_texture_mode(thread, &mut self.main).clear_background(Color::BLANK);

        for layer in scene.layers() {
            let result = self.filter_layer(d, thread, scene, layer);
            let mut t = d.begin_texture_mode(thread, &mut self.main);
            blit(&mut t, &self.scratch[result], Color::WHITE);
        }

        match &self.background_map {
            Some(map) => {
                self.displacement
                    .apply(d, thread, &self.main, &mut self.stage, map, &scene.background, true);
            }
            None => {
                let mut t = d.begin_texture_mode(thread, &mut self.stage);
                t.clear_background(Color::BLANK);
                blit(&mut t, &self.main, Color::WHITE);
            }
        }

        d.clear_background(Color::BLACK);
        let width = self.stage.width() as f32;
        let height = self.stage.height() as f32;
        d.draw_texture_pro(
            &self.stage,
            Rectangle::new(0.0, 0.0, width, -height),
            view.dest(),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
