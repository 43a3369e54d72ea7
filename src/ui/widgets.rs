//! Basic UI widgets

use macroquad::prelude::*;
use super::{Rect, UiContext};

/// Accent color for active widgets
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

const FONT_SIZE: f32 = 14.0;
const TEXT_COLOR: Color = Color::new(0.86, 0.86, 0.86, 1.0);

/// Draw text centered in a rect
fn draw_text_centered(text: &str, rect: &Rect, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let x = (rect.x + (rect.w - dims.width) * 0.5).round();
    let y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(text, x, y, FONT_SIZE, color);
}

/// Width a text button needs for `label`
pub fn button_width(label: &str) -> f32 {
    measure_text(label, None, FONT_SIZE as u16, 1.0).width + 16.0
}

/// Draw a push button, returns true if clicked
pub fn text_button(ctx: &mut UiContext, rect: Rect, label: &str) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let pressed = ctx.mouse.clicking(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered {
        ctx.set_hot(id);
    }

    let bg = if pressed {
        Color::from_rgba(60, 60, 70, 255)
    } else if ctx.is_hot(id) {
        Color::from_rgba(50, 50, 60, 255)
    } else {
        Color::from_rgba(40, 40, 48, 255)
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, Color::from_rgba(80, 80, 90, 255));
    draw_text_centered(label, &rect, TEXT_COLOR);

    clicked
}

/// Draw a radio button with its label, returns true if clicked
pub fn radio_button(ctx: &mut UiContext, rect: Rect, label: &str, selected: bool) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered {
        ctx.set_hot(id);
    }

    let radius = (rect.h * 0.3).min(7.0);
    let cx = rect.x + radius + 4.0;
    let cy = rect.y + rect.h * 0.5;
    let ring = if hovered { WHITE } else { Color::from_rgba(150, 150, 160, 255) };
    draw_circle(cx, cy, radius, ring);
    draw_circle(cx, cy, radius - 1.5, Color::from_rgba(30, 30, 35, 255));
    if selected {
        draw_circle(cx, cy, radius - 3.5, ACCENT_COLOR);
    }

    let text_x = (cx + radius + 6.0).round();
    let dims = measure_text(label, None, FONT_SIZE as u16, 1.0);
    let text_y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(label, text_x, text_y, FONT_SIZE, TEXT_COLOR);

    clicked
}

/// Width a radio button needs for `label`
pub fn radio_width(label: &str) -> f32 {
    measure_text(label, None, FONT_SIZE as u16, 1.0).width + 32.0
}

/// Slider direction. Vertical sliders put the maximum at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Map a pointer position along a track to an integer value in [min, max]
pub fn slider_value_at(pos: f32, track_start: f32, track_len: f32, min: i32, max: i32, inverted: bool) -> i32 {
    if track_len <= 0.0 {
        return min;
    }
    let mut t = ((pos - track_start) / track_len).clamp(0.0, 1.0);
    if inverted {
        t = 1.0 - t;
    }
    min + (t * (max - min) as f32).round() as i32
}

/// Fraction of the track covered by `value`
fn slider_fraction(value: i32, min: i32, max: i32) -> f32 {
    if max == min {
        return 0.0;
    }
    ((value - min) as f32 / (max - min) as f32).clamp(0.0, 1.0)
}

/// Draw an integer slider, returns the new value while it is being dragged
pub fn slider(
    ctx: &mut UiContext,
    rect: Rect,
    value: i32,
    min: i32,
    max: i32,
    orientation: Orientation,
) -> Option<i32> {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);

    if hovered {
        ctx.set_hot(id);
        if ctx.mouse.left_pressed {
            ctx.start_drag(id);
        }
    }

    let knob = 10.0;
    let frac = slider_fraction(value, min, max);
    let track_color = Color::from_rgba(60, 60, 70, 255);
    let knob_color = if ctx.is_dragging(id) || hovered { ACCENT_COLOR } else { Color::from_rgba(170, 170, 180, 255) };

    let new_value = match orientation {
        Orientation::Horizontal => {
            let track_x = rect.x + knob * 0.5;
            let track_w = rect.w - knob;
            let cy = rect.y + rect.h * 0.5;
            draw_rectangle(track_x, cy - 2.0, track_w, 4.0, track_color);
            draw_rectangle(track_x, cy - 2.0, track_w * frac, 4.0, ACCENT_COLOR);
            draw_rectangle(track_x + track_w * frac - knob * 0.5, cy - knob * 0.5, knob, knob, knob_color);

            ctx.is_dragging(id)
                .then(|| slider_value_at(ctx.mouse.x, track_x, track_w, min, max, false))
        }
        Orientation::Vertical => {
            let track_y = rect.y + knob * 0.5;
            let track_h = rect.h - knob;
            let cx = rect.x + rect.w * 0.5;
            let knob_y = track_y + track_h * (1.0 - frac);
            draw_rectangle(cx - 2.0, track_y, 4.0, track_h, track_color);
            draw_rectangle(cx - 2.0, knob_y, 4.0, track_y + track_h - knob_y, ACCENT_COLOR);
            draw_rectangle(cx - knob * 0.5, knob_y - knob * 0.5, knob, knob, knob_color);

            ctx.is_dragging(id)
                .then(|| slider_value_at(ctx.mouse.y, track_y, track_h, min, max, true))
        }
    };

    new_value.filter(|v| *v != value)
}
