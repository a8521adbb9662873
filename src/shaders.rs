// Render targets are stored bottom-up: texture y runs opposite to stage y.

use raylib::prelude::*;

use crate::scene::{DisplacementSprite, RgbSplit};

const DISPLACEMENT_FS: &str = r#"
#version 330

in vec2 fragTexCoord;
in vec4 fragColor;

uniform sampler2D texture0;
uniform vec4 colDiffuse;

uniform sampler2D displacementMap;
uniform vec2 resolution;
uniform vec2 mapCenter;
uniform vec2 mapSize;
uniform float mapRotation;
uniform vec2 scale;
uniform float repeatMap;

out vec4 finalColor;

void main()
{
    vec2 pixel = vec2(fragTexCoord.x, 1.0 - fragTexCoord.y) * resolution;

    vec2 local = pixel - mapCenter;
    float c = cos(-mapRotation);
    float s = sin(-mapRotation);
    local = vec2(c*local.x - s*local.y, s*local.x + c*local.y);

    vec2 mapUv = local/mapSize + 0.5;
    mapUv = (repeatMap > 0.5) ? fract(mapUv) : clamp(mapUv, 0.0, 1.0);

    vec2 offset = (texture(displacementMap, mapUv).rg - 0.5)*scale/resolution;
    vec4 texel = texture(texture0, fragTexCoord + vec2(offset.x, -offset.y));

    finalColor = texel*colDiffuse*fragColor;
}
"#;

const RGB_SPLIT_FS: &str = r#"
#version 330

in vec2 fragTexCoord;
in vec4 fragColor;

uniform sampler2D texture0;
uniform vec4 colDiffuse;

uniform vec2 resolution;
uniform vec2 red;
uniform vec2 green;
uniform vec2 blue;

out vec4 finalColor;

vec2 shifted(vec2 offset)
{
    return fragTexCoord + vec2(offset.x, -offset.y)/resolution;
}

void main()
{
    vec4 texel = texture(texture0, fragTexCoord);
    texel.r = texture(texture0, shifted(red)).r;
    texel.g = texture(texture0, shifted(green)).g;
    texel.b = texture(texture0, shifted(blue)).b;

    finalColor = texel*colDiffuse*fragColor;
}
"#;

/// Draws `source` over the whole of the current target, upright.
pub fn blit(d: &mut impl RaylibDraw, source: &RenderTexture2D, tint: Color) {
    let width = source.width() as f32;
    let height = source.height() as f32;
    d.draw_texture_pro(
        source,
        Rectangle::new(0.0, 0.0, width, -height),
        Rectangle::new(0.0, 0.0, width, height),
        Vector2::new(0.0, 0.0),
        0.0,
        tint,
    );
}

/// Binds `map` to the sampler at `loc`. Only valid while `shader` is the
/// active shader mode; the binding lasts until that mode ends.
fn bind_map_sampler(shader: ffi::Shader, loc: i32, map: ffi::Texture2D) {
    // SAFETY: plain handles copied out of live raylib objects, no pointers kept.
    unsafe { ffi::SetShaderValueTexture(shader, loc, map) };
}

fn resolution(target: &RenderTexture2D) -> Vector2 {
    Vector2::new(target.width() as f32, target.height() as f32)
}

pub struct DisplacementFilter {
    shader: Shader,
    map_loc: i32,
    resolution_loc: i32,
    center_loc: i32,
    size_loc: i32,
    rotation_loc: i32,
    scale_loc: i32,
    repeat_loc: i32,
}

impl DisplacementFilter {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread) -> Self {
        let shader = rl.load_shader_from_memory(thread, None, Some(DISPLACEMENT_FS));
        Self {
            map_loc: shader.get_shader_location("displacementMap"),
            resolution_loc: shader.get_shader_location("resolution"),
            center_loc: shader.get_shader_location("mapCenter"),
            size_loc: shader.get_shader_location("mapSize"),
            rotation_loc: shader.get_shader_location("mapRotation"),
            scale_loc: shader.get_shader_location("scale"),
            repeat_loc: shader.get_shader_location("repeatMap"),
            shader,
        }
    }

    /// Redraws `source` into `target`, displaced by `map` placed on the
    /// stage as `sprite`. A repeating map tiles beyond its bounds, otherwise
    /// its edge pixels stretch.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &mut self,
        d: &mut RaylibDrawHandle,
        thread: &RaylibThread,
        source: &RenderTexture2D,
        target: &mut RenderTexture2D,
        map: &Texture2D,
        sprite: &DisplacementSprite,
        repeat: bool,
    ) {
        let map_size = Vector2::new(
            (map.width() as f32 * sprite.sprite_scale).max(1.0),
            (map.height() as f32 * sprite.sprite_scale).max(1.0),
        );
        self.shader.set_shader_value(self.resolution_loc, resolution(target));
        self.shader.set_shader_value(self.center_loc, sprite.position);
        self.shader.set_shader_value(self.size_loc, map_size);
        self.shader.set_shader_value(self.rotation_loc, sprite.rotation);
        self.shader.set_shader_value(self.scale_loc, sprite.filter_scale);
        self.shader.set_shader_value(self.repeat_loc, if repeat { 1.0f32 } else { 0.0f32 });

        let raw_shader: ffi::Shader = *self.shader;
        let raw_map: ffi::Texture2D = **map;
        let map_loc = self.map_loc;

        let mut t = d.begin_texture_mode(thread, target);
        t.clear_background(Color::BLANK);
        let mut s = t.begin_shader_mode(&mut self.shader);
        bind_map_sampler(raw_shader, map_loc, raw_map);
        blit(&mut s, source, Color::WHITE);
    }
}

pub struct RgbSplitFilter {
    shader: Shader,
    resolution_loc: i32,
    red_loc: i32,
    green_loc: i32,
    blue_loc: i32,
}

impl RgbSplitFilter {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread) -> Self {
        let shader = rl.load_shader_from_memory(thread, None, Some(RGB_SPLIT_FS));
        Self {
            resolution_loc: shader.get_shader_location("resolution"),
            red_loc: shader.get_shader_location("red"),
            green_loc: shader.get_shader_location("green"),
            blue_loc: shader.get_shader_location("blue"),
            shader,
        }
    }

    pub fn apply(
        &mut self,
        d: &mut RaylibDrawHandle,
        thread: &RaylibThread,
        source: &RenderTexture2D,
        target: &mut RenderTexture2D,
        split: &RgbSplit,
    ) {
        self.shader.set_shader_value(self.resolution_loc, resolution(target));
        self.shader.set_shader_value(self.red_loc, split.red);
        self.shader.set_shader_value(self.green_loc, split.green);
        self.shader.set_shader_value(self.blue_loc, split.blue);

        let mut t = d.begin_texture_mode(thread, target);
        t.clear_background(Color::BLANK);
        let mut s = t.begin_shader_mode(&mut self.shader);
        blit(&mut s, source, Color::WHITE);
    }
}
