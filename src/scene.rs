// stage > main container > images, titles, subtitles

use raylib::prelude::*;

use crate::config::SliderConfig;
use crate::tween::Animated;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Images,
    Titles,
    Subtitles,
}

/// Filters attached to a layer, applied in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterChain {
    pub cursor_displacement: bool,
    pub rgb_split: bool,
}

/// One display object, anchored at its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub alpha: f32,
    pub position: Vector2,
    /// Resting position the tilt offsets are measured from.
    pub home: Vector2,
}

impl Node {
    fn hidden_at(home: Vector2) -> Self {
        Self { alpha: 0.0, position: home, home }
    }
}

#[derive(Debug, Clone)]
pub struct Layer {
    pub kind: LayerKind,
    pub nodes: Vec<Node>,
    pub filters: FilterChain,
}

/// Per-channel pixel offsets of an RGB split filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbSplit {
    pub red: Vector2,
    pub green: Vector2,
    pub blue: Vector2,
}

impl RgbSplit {
    pub const ZERO: RgbSplit = RgbSplit {
        red: Vector2 { x: 0.0, y: 0.0 },
        green: Vector2 { x: 0.0, y: 0.0 },
        blue: Vector2 { x: 0.0, y: 0.0 },
    };

    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Horizontal split: red and blue shifted along x, green untouched.
    pub fn set_horizontal(&mut self, red: f32, blue: f32) {
        self.red = Vector2::new(red, 0.0);
        self.green = Vector2::new(0.0, 0.0);
        self.blue = Vector2::new(blue, 0.0);
    }
}

/// A displacement map placed in the stage plus the strength of the filter
/// reading it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementSprite {
    /// Centre of the map in stage coordinates.
    pub position: Vector2,
    pub sprite_scale: f32,
    pub rotation: f32,
    pub filter_scale: Vector2,
}

impl DisplacementSprite {
    fn centred(stage: Vector2) -> Self {
        Self {
            position: Vector2::new(stage.x / 2.0, stage.y / 2.0),
            sprite_scale: 1.0,
            rotation: 0.0,
            filter_scale: Vector2::new(0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub stage: Vector2,
    pub background: DisplacementSprite,
    pub cursor: DisplacementSprite,
    pub images: Layer,
    pub titles: Option<Layer>,
    pub subtitles: Option<Layer>,
    pub text_split: RgbSplit,
    pub image_split: RgbSplit,
}

/// Properties a transition timeline may drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneProperty {
    BackgroundScaleX,
    BackgroundScaleY,
    Alpha(LayerKind, usize),
}

impl Scene {
    pub fn build(config: &SliderConfig, stage: Vector2, subtitle_offset: f32) -> Self {
        let centre = Vector2::new(stage.x / 2.0, stage.y / 2.0);
        let count = config.slide_count();

        let images = Layer {
            kind: LayerKind::Images,
            nodes: vec![Node::hidden_at(centre); count],
            filters: FilterChain {
                cursor_displacement: config.cursor_img_effect,
                rgb_split: config.images_rgb_effect,
            },
        };

        let text_filters = FilterChain {
            cursor_displacement: config.cursor_text_effect,
            rgb_split: config.texts_rgb_effect,
        };

        let titles = config.shows_titles().then(|| Layer {
            kind: LayerKind::Titles,
            nodes: vec![Node::hidden_at(centre); count],
            filters: text_filters,
        });

        let subtitle_home = Vector2::new(centre.x, centre.y + subtitle_offset);
        let subtitles = config.shows_subtitles().then(|| Layer {
            kind: LayerKind::Subtitles,
            nodes: vec![Node::hidden_at(subtitle_home); count],
            filters: text_filters,
        });

        let mut cursor = DisplacementSprite::centred(stage);
        cursor.filter_scale = Vector2::new(0.0, 0.0);

        Self {
            stage,
            background: DisplacementSprite::centred(stage),
            cursor,
            images,
            titles,
            subtitles,
            text_split: RgbSplit::ZERO,
            image_split: RgbSplit::ZERO,
        }
    }

    pub fn centre(&self) -> Vector2 {
        Vector2::new(self.stage.x / 2.0, self.stage.y / 2.0)
    }

    pub fn slide_count(&self) -> usize {
        self.images.nodes.len()
    }

    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        std::iter::once(&self.images)
            .chain(self.titles.as_ref())
            .chain(self.subtitles.as_ref())
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        match kind {
            LayerKind::Images => Some(&self.images),
            LayerKind::Titles => self.titles.as_ref(),
            LayerKind::Subtitles => self.subtitles.as_ref(),
        }
    }

    pub fn layer_mut(&mut self, kind: LayerKind) -> Option<&mut Layer> {
        match kind {
            LayerKind::Images => Some(&mut self.images),
            LayerKind::Titles => self.titles.as_mut(),
            LayerKind::Subtitles => self.subtitles.as_mut(),
        }
    }

    pub fn node(&self, kind: LayerKind, index: usize) -> Option<&Node> {
        self.layer(kind)?.nodes.get(index)
    }

    pub fn node_mut(&mut self, kind: LayerKind, index: usize) -> Option<&mut Node> {
        self.layer_mut(kind)?.nodes.get_mut(index)
    }

    /// Kinds of the layers present, in draw order.
    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers().map(|layer| layer.kind).collect()
    }

    /// Moves subtitle resting positions when the responsive offset changes.
    pub fn set_subtitle_offset(&mut self, offset: f32) {
        let centre = self.centre();
        if let Some(layer) = self.subtitles.as_mut() {
            for node in layer.nodes.iter_mut() {
                let home = Vector2::new(centre.x, centre.y + offset);
                node.position.x += home.x - node.home.x;
                node.position.y += home.y - node.home.y;
                node.home = home;
            }
        }
    }

    pub fn reset_rgb(&mut self) {
        self.text_split.reset();
        self.image_split.reset();
    }
}

impl Animated<SceneProperty> for Scene {
    fn get(&self, key: SceneProperty) -> f32 {
        match key {
            SceneProperty::BackgroundScaleX => self.background.filter_scale.x,
            SceneProperty::BackgroundScaleY => self.background.filter_scale.y,
            SceneProperty::Alpha(kind, index) => self.node(kind, index).map_or(0.0, |node| node.alpha),
        }
    }

    fn set(&mut self, key: SceneProperty, value: f32) {
        match key {
            SceneProperty::BackgroundScaleX => self.background.filter_scale.x = value,
            SceneProperty::BackgroundScaleY => self.background.filter_scale.y = value,
            SceneProperty::Alpha(kind, index) => {
                if let Some(node) = self.node_mut(kind, index) {
                    node.alpha = value;
                }
            }
        }
    }
}
