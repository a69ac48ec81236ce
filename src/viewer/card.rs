use raylib::prelude::*;

use crate::item::{ImageItem, Testimonial};

pub const PINK: Color = Color::new(236, 72, 153, 255);       // Accent colour
pub const PINK_LIGHT: Color = Color::new(251, 207, 232, 255); // Inactive dots, avatar background
const STAR_YELLOW: Color = Color::new(250, 204, 21, 255);
const QUOTE_GRAY: Color = Color::new(75, 85, 99, 255);
const NAME_GRAY: Color = Color::new(31, 41, 55, 255);

const CAPTION_SIZE: i32 = 36;
const NAME_SIZE: i32 = 34;
const QUOTE_SIZE: i32 = 30;
const CARD_PADDING: f32 = 40.0;
const AVATAR_RADIUS: f32 = 48.0;
const STAR_RADIUS: f32 = 14.0;

/// Something the viewer can put on the carousel stage.
pub trait Card {
    fn draw<D: RaylibDraw>(&self, d: &mut D, bounds: Rectangle, alpha: f32);
}

/// Scales the alpha channel of `color`.
pub fn fade(color: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha) as u8)
}

pub struct ImageCard {
    pub item: ImageItem,
    texture: Texture2D,
}

impl ImageCard {
    pub fn new(item: ImageItem, texture: Texture2D) -> Self {
        Self { item, texture }
    }
}

impl Card for ImageCard {
    fn draw<D: RaylibDraw>(&self, d: &mut D, bounds: Rectangle, alpha: f32) {
        let source = cover_source_rect(
            self.texture.width() as f32,
            self.texture.height() as f32,
            bounds.width,
            bounds.height,
        );
        d.draw_texture_pro(&self.texture, source, bounds, Vector2::zero(), 0.0, fade(Color::WHITE, alpha));

        if let Some(caption) = &self.item.caption {
            let band_height = (bounds.height * 0.3).max(CAPTION_SIZE as f32 * 2.0);
            d.draw_rectangle_gradient_v(
                bounds.x as i32,
                (bounds.y + bounds.height - band_height) as i32,
                bounds.width as i32,
                band_height as i32,
                fade(Color::BLACK, 0.0),
                fade(Color::BLACK, 0.7 * alpha),
            );
            d.draw_text(
                caption,
                (bounds.x + CARD_PADDING * 0.6) as i32,
                (bounds.y + bounds.height - CARD_PADDING * 0.6) as i32 - CAPTION_SIZE,
                CAPTION_SIZE,
                fade(Color::WHITE, alpha),
            );
        }
    }
}

/// Part of the texture that covers `dest_w`×`dest_h` without distortion
/// (centre crop).
pub fn cover_source_rect(tex_w: f32, tex_h: f32, dest_w: f32, dest_h: f32) -> Rectangle {
    if tex_w <= 0.0 || tex_h <= 0.0 || dest_w <= 0.0 || dest_h <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_w.max(0.0), tex_h.max(0.0));
    }
    let scale = (dest_w / tex_w).max(dest_h / tex_h);
    let src_w = dest_w / scale;
    let src_h = dest_h / scale;
    Rectangle::new((tex_w - src_w) * 0.5, (tex_h - src_h) * 0.5, src_w, src_h)
}

pub struct TestimonialCard {
    pub testimonial: Testimonial,
    avatar: Option<Texture2D>,
}

impl TestimonialCard {
    pub fn new(testimonial: Testimonial, avatar: Option<Texture2D>) -> Self {
        Self { testimonial, avatar }
    }
}

impl Card for TestimonialCard {
    fn draw<D: RaylibDraw>(&self, d: &mut D, bounds: Rectangle, alpha: f32) {
        // Drop shadow, then the card itself
        let shadow = Rectangle::new(bounds.x + 6.0, bounds.y + 10.0, bounds.width, bounds.height);
        d.draw_rectangle_rounded(shadow, 0.08, 12, fade(Color::BLACK, 0.12 * alpha));
        d.draw_rectangle_rounded(bounds, 0.08, 12, fade(Color::WHITE, alpha));

        let avatar_center = Vector2::new(
            bounds.x + CARD_PADDING + AVATAR_RADIUS,
            bounds.y + CARD_PADDING + AVATAR_RADIUS,
        );
        match &self.avatar {
            Some(texture) => {
                let side = AVATAR_RADIUS * 2.0;
                let source = cover_source_rect(texture.width() as f32, texture.height() as f32, side, side);
                let dest = Rectangle::new(avatar_center.x - AVATAR_RADIUS, avatar_center.y - AVATAR_RADIUS, side, side);
                d.draw_texture_pro(texture, source, dest, Vector2::zero(), 0.0, fade(Color::WHITE, alpha));
            }
            None => {
                d.draw_circle_v(avatar_center, AVATAR_RADIUS, fade(PINK_LIGHT, alpha));
                let initials = self.testimonial.initials();
                let w = measure_text(&initials, NAME_SIZE);
                d.draw_text(
                    &initials,
                    avatar_center.x as i32 - w / 2,
                    avatar_center.y as i32 - NAME_SIZE / 2,
                    NAME_SIZE,
                    fade(PINK, alpha),
                );
            }
        }

        let text_x = avatar_center.x + AVATAR_RADIUS + CARD_PADDING * 0.5;
        d.draw_text(
            &self.testimonial.name,
            text_x as i32,
            (avatar_center.y - AVATAR_RADIUS * 0.6) as i32,
            NAME_SIZE,
            fade(NAME_GRAY, alpha),
        );

        let star_y = avatar_center.y + AVATAR_RADIUS * 0.45;
        for i in 0..Testimonial::MAX_RATING {
            let center = Vector2::new(text_x + STAR_RADIUS + i as f32 * STAR_RADIUS * 2.4, star_y);
            let points = star_points(center, STAR_RADIUS, STAR_RADIUS * 0.45);
            if i < self.testimonial.rating {
                d.draw_triangle_fan(&points, fade(STAR_YELLOW, alpha));
            } else {
                d.draw_line_strip(&points[1..], fade(STAR_YELLOW, alpha));
            }
        }

        let quote = format!("\"{}\"", self.testimonial.quote);
        let max_width = (bounds.width - CARD_PADDING * 2.0) as i32;
        let mut y = avatar_center.y + AVATAR_RADIUS + CARD_PADDING * 0.75;
        for line in wrap_text(&quote, max_width, |s| measure_text(s, QUOTE_SIZE)) {
            if y + QUOTE_SIZE as f32 > bounds.y + bounds.height - CARD_PADDING * 0.5 {
                break;
            }
            d.draw_text(&line, (bounds.x + CARD_PADDING) as i32, y as i32, QUOTE_SIZE, fade(QUOTE_GRAY, alpha));
            y += QUOTE_SIZE as f32 * 1.4;
        }
    }
}

/// Width of `text` in the default font; same call as `RaylibHandle::measure_text`.
fn measure_text(text: &str, font_size: i32) -> i32 {
    let c_text = std::ffi::CString::new(text).unwrap();
    unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), font_size) }
}

/// Vertices of a five-pointed star as a triangle fan: the centre first,
/// then the ten rim points counter-clockwise, then the first rim point again.
pub fn star_points(center: Vector2, outer: f32, inner: f32) -> Vec<Vector2> {
    let mut points = Vec::with_capacity(12);
    points.push(center);
    for i in 0..=10 {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
        // Screen y grows downwards
        points.push(Vector2::new(center.x + radius * angle.cos(), center.y - radius * angle.sin()));
    }
    points
}

/// Greedy word wrap. A single word wider than `max_width` gets its own line.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
