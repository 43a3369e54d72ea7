//! Tetra Viewer: minimal software 3D rasterizer
//!
//! Renders a four-faced solid on the CPU:
//! - Heading/pitch orthographic rotation
//! - Barycentric fill with a z-buffer
//! - Ambient, diffuse and specular face lighting
//! - 2x supersampling, PNG export

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod rasterizer;
mod scene;
mod config;
mod export;
mod ui;
mod app;

use macroquad::prelude::*;
use app::ViewerApp;
use config::{load_or_default, save_config, ViewerConfig, CONFIG_FILE};
use rasterizer::{LightingMode, HEADING_RANGE, PITCH_RANGE};
use ui::{button_width, radio_button, radio_width, slider, text_button, MouseState, Orientation, Rect, UiContext};

const TOP_BAR_HEIGHT: f32 = 30.0;
const SLIDER_SIZE: f32 = 26.0;
const BOTTOM_BAR_HEIGHT: f32 = 30.0;

fn window_conf(config: &ViewerConfig) -> Conf {
    Conf {
        window_title: format!("Tetra Viewer v{}", VERSION),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // `--write-config` dumps the defaults so they can be edited
    if std::env::args().any(|arg| arg == "--write-config") {
        match save_config(&ViewerConfig::default(), CONFIG_FILE) {
            Ok(()) => log::info!("wrote default config to {}", CONFIG_FILE),
            Err(e) => {
                log::error!("failed to write {}: {}", CONFIG_FILE, e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = load_or_default(CONFIG_FILE);
    macroquad::Window::from_config(window_conf(&config), run(config));
}

async fn run(config: ViewerConfig) {
    let mut app = ViewerApp::new(&config);
    let mut ui_ctx = UiContext::new();
    let mut last_left_down = false;
    let mut canvas_texture: Option<Texture2D> = None;

    log::info!("=== Tetra Viewer v{} ===", VERSION);

    loop {
        let mouse_pos = mouse_position();
        let left_down = is_mouse_button_down(MouseButton::Left);
        let mouse_state = MouseState {
            x: mouse_pos.0,
            y: mouse_pos.1,
            left_down,
            left_pressed: left_down && !last_left_down,
            scroll: mouse_wheel().1,
        };
        last_left_down = left_down;
        ui_ctx.begin_frame(mouse_state);
        let now = get_time();

        clear_background(Color::from_rgba(30, 30, 35, 255));

        // Layout: control bar on top, heading slider and export row at the
        // bottom, pitch slider on the right, canvas in the middle
        let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
        let (top_rect, rest) = screen.split_top(TOP_BAR_HEIGHT);
        let (rest, bottom_rect) = rest.split_bottom(SLIDER_SIZE + BOTTOM_BAR_HEIGHT);
        let (canvas_rect, pitch_rect) = rest.split_right(SLIDER_SIZE);
        let (heading_rect, export_rect) = bottom_rect.split_top(SLIDER_SIZE);

        draw_control_bar(&mut ui_ctx, &mut app, top_rect);

        if let Some(heading) = slider(
            &mut ui_ctx,
            Rect::new(heading_rect.x + 4.0, heading_rect.y, heading_rect.w - SLIDER_SIZE - 8.0, heading_rect.h),
            app.view.heading,
            HEADING_RANGE.0,
            HEADING_RANGE.1,
            Orientation::Horizontal,
        ) {
            app.view.set_heading(heading);
        }

        if let Some(pitch) = slider(
            &mut ui_ctx,
            Rect::new(pitch_rect.x, pitch_rect.y + 4.0, pitch_rect.w, pitch_rect.h - 8.0),
            app.view.pitch,
            PITCH_RANGE.0,
            PITCH_RANGE.1,
            Orientation::Vertical,
        ) {
            app.view.set_pitch(pitch);
        }

        let export_label = "Export Image";
        let export_button = Rect::new(export_rect.x + 4.0, export_rect.y + 3.0, button_width(export_label), export_rect.h - 6.0);
        if text_button(&mut ui_ctx, export_button, export_label) {
            app.export_and_report(now);
        }
        let info = format!(
            "heading {}  pitch {}  zoom {:.1}",
            app.view.heading, app.view.pitch, app.view.zoom
        );
        let status = app.status(now).map(str::to_string).unwrap_or(info);
        draw_text(&status, export_button.right() + 10.0, export_rect.y + export_rect.h * 0.5 + 5.0, 14.0, LIGHTGRAY);

        // Canvas input: wheel zooms, left drag pans (unless a widget owns the drag)
        let mouse = ui_ctx.mouse;
        if mouse.inside(&canvas_rect) && mouse.scroll != 0.0 {
            // Wheel away from the user zooms out
            app.view.apply_wheel(-mouse.scroll.signum() as f64);
        }
        let pressed_inside = mouse.clicked(&canvas_rect) && ui_ctx.dragging.is_none();
        if pressed_inside || app.is_panning() {
            app.drag_canvas(mouse.x, mouse.y, pressed_inside, mouse.left_down);
        }

        let canvas_w = canvas_rect.w.max(0.0) as usize;
        let canvas_h = canvas_rect.h.max(0.0) as usize;
        if app.update_frame(canvas_w, canvas_h) {
            if let Some(frame) = app.frame() {
                let texture = Texture2D::from_rgba8(frame.width as u16, frame.height as u16, &frame.pixels);
                texture.set_filter(FilterMode::Nearest);
                canvas_texture = Some(texture);
            }
        }

        if let Some(texture) = &canvas_texture {
            draw_texture_ex(
                texture,
                canvas_rect.x,
                canvas_rect.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(texture.width(), texture.height())),
                    ..Default::default()
                },
            );
        }

        next_frame().await;
    }
}

/// Lighting mode selector and reset button
fn draw_control_bar(ctx: &mut UiContext, app: &mut ViewerApp, rect: Rect) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::from_rgba(40, 40, 48, 255));

    let mut cursor_x = rect.x + 6.0;
    for mode in LightingMode::SELECTABLE {
        let w = radio_width(mode.label());
        let button = Rect::new(cursor_x, rect.y, w, rect.h);
        if radio_button(ctx, button, mode.label(), app.view.lighting == mode) {
            app.view.lighting = mode;
        }
        cursor_x += w + 4.0;
    }

    let reset_label = "Reset View";
    let reset = Rect::new(cursor_x + 8.0, rect.y + 3.0, button_width(reset_label), rect.h - 6.0);
    if text_button(ctx, reset, reset_label) {
        app.reset_view();
    }
}
