use anyhow::{anyhow, Result};
use glutin_window::GlutinWindow;
use graphics::{
    ellipse::circle, math::Matrix2d, rectangle, Context, DrawState, Ellipse, Polygon, Transformed,
};
use huewheel::{
    color::{hex_to_rgb, Hsv, Rgb},
    config::{CURSOR_RADIUS, RGB_SLIDERS_CFG},
    controls::{PointerMappable, Resizable},
    presets::{PRESETS, PRESETS_PER_ROW},
    ColorFormat, ColorState, ControlId, F64x2, Picker,
};
use opengl_graphics::{GlGraphics, OpenGL};
use piston::{
    event_loop::{EventSettings, Events},
    window::{AdvancedWindow, WindowSettings},
    Button, Key, MouseButton, MouseCursorEvent, PressEvent, ReleaseEvent, RenderEvent,
    ResizeEvent, Size,
};

use crate::colors::*;

const MARGIN: f64 = 20.0;
const ALPHA_WIDTH: f64 = 40.0;
const RGB_HEIGHT: f64 = 120.0;
const PREVIEW_HEIGHT: f64 = 40.0;
const PRESET_HEIGHT: f64 = 28.0;
/// side of one checkerboard square
const CHECKER: f64 = 8.0;
const RING_SEGMENTS: usize = 180;
const SQUARE_CELLS: usize = 32;
const GRADIENT_STEPS: usize = 48;

/// Window-space placement of what the picker itself does not own.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    preview: (F64x2, F64x2),
    /// origin of the grid and the size of one swatch
    presets: (F64x2, F64x2),
}

impl Layout {
    fn window_size(wheel_size: f64) -> F64x2 {
        F64x2::new(
            MARGIN * 3.0 + wheel_size + ALPHA_WIDTH,
            MARGIN * 5.0 + wheel_size + RGB_HEIGHT + PREVIEW_HEIGHT + PRESET_HEIGHT * 2.0,
        )
    }

    /// Sizes and places every control for a window of `size`.
    fn apply(picker: &mut Picker, size: F64x2) -> Self {
        let wheel_size = (size.x - MARGIN * 3.0 - ALPHA_WIDTH)
            .min(size.y - MARGIN * 5.0 - RGB_HEIGHT - PREVIEW_HEIGHT - PRESET_HEIGHT * 2.0)
            .max(0.0);
        let full_width = wheel_size + MARGIN + ALPHA_WIDTH;

        picker.resize(ControlId::HueWheel, F64x2::splat(wheel_size));
        picker.place(ControlId::HueWheel, F64x2::splat(MARGIN));

        picker.resize(ControlId::AlphaSlider, F64x2::new(ALPHA_WIDTH, wheel_size));
        picker.place(
            ControlId::AlphaSlider,
            F64x2::new(MARGIN * 2.0 + wheel_size, MARGIN),
        );

        let rgb_origin = F64x2::new(MARGIN, MARGIN * 2.0 + wheel_size);
        picker.resize(ControlId::RgbSliders, F64x2::new(full_width, RGB_HEIGHT));
        picker.place(ControlId::RgbSliders, rgb_origin);

        let preview_origin = rgb_origin + F64x2::new(0.0, RGB_HEIGHT + MARGIN);
        let presets_origin = preview_origin + F64x2::new(0.0, PREVIEW_HEIGHT + MARGIN);
        info!("laid out for {size:?}, wheel {wheel_size}px");
        Self {
            preview: (preview_origin, F64x2::new(full_width, PREVIEW_HEIGHT)),
            presets: (
                presets_origin,
                F64x2::new(full_width / PRESETS_PER_ROW as f64, PRESET_HEIGHT),
            ),
        }
    }

    fn preset_at(&self, pos: F64x2) -> Option<usize> {
        let (origin, cell) = self.presets;
        let rel = pos - origin;
        if !cell.is_drawable() || rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }
        let (col, row) = ((rel.x / cell.x) as usize, (rel.y / cell.y) as usize);
        let index = row * PRESETS_PER_ROW + col;
        (col < PRESETS_PER_ROW && index < PRESETS.len()).then_some(index)
    }
}

/// Color of the saturation/value square cell in column `i`, row `j`, for hue
/// `h` in degrees. Each cell shows the color at its center.
fn square_cell_color(h: f64, i: usize, j: usize) -> Rgb {
    let s = (i as f64 + 0.5) / SQUARE_CELLS as f64;
    let v = 1.0 - (j as f64 + 0.5) / SQUARE_CELLS as f64;
    Hsv::new(h, s, v).to_rgb()
}

/// The control whose canvas holds `pos`, and `pos` in its coordinates.
fn control_at(picker: &Picker, pos: F64x2) -> Option<(ControlId, F64x2)> {
    ControlId::ALL.into_iter().find_map(|id| {
        let canvas = picker.control(id).canvas();
        let local = canvas.to_local(pos);
        canvas.contains_local(local).then_some((id, local))
    })
}

fn on_key(picker: &mut Picker, key: Key) {
    match key {
        Key::D1 => {
            picker.set_format(ColorFormat::Rgba);
        }
        Key::D2 => {
            picker.set_format(ColorFormat::Hex);
        }
        Key::D3 => {
            picker.set_format(ColorFormat::Hsla);
        }
        Key::R => {
            let refresh = picker.randomize(&mut rand::thread_rng());
            info!("random color {}", refresh.state.rgb());
        }
        Key::C => {
            let text = picker.display_text();
            println!("{text}");
            info!("copied {text}");
        }
        _ => {}
    }
}

pub fn run(wheel_size: f64, state: ColorState) -> Result<()> {
    // Change this to OpenGL::V2_1 if not working.
    let opengl = OpenGL::V3_2;
    let size = Layout::window_size(wheel_size);

    let mut window: GlutinWindow = WindowSettings::new(state.display_text(), [200, 200])
        .graphics_api(opengl)
        .size(Size {
            width: size.x,
            height: size.y,
        })
        .vsync(true)
        .exit_on_esc(true)
        .build()
        .map_err(|err| anyhow!("failed to open window: {err}"))?;

    let mut gl = GlGraphics::new(opengl);

    let mut events = Events::new({
        let mut es = EventSettings::new();
        es.lazy = true;
        es
    });

    let mut picker = Picker::new(state);
    let mut layout = Layout::apply(&mut picker, size);
    let mut pointer = F64x2::zero();
    let mut title = picker.display_text();

    while let Some(e) = events.next(&mut window) {
        if let Some(args) = e.resize_args() {
            layout = Layout::apply(&mut picker, args.window_size.into());
        }

        if let Some(pos) = e.mouse_cursor_args() {
            pointer = pos.into();
            if let Some(id) = picker.latched() {
                let local = picker.control(id).canvas().to_local(pointer);
                picker.drag(id, local);
            }
        }

        match e.press_args() {
            Some(Button::Mouse(MouseButton::Left)) => {
                if let Some(index) = layout.preset_at(pointer) {
                    picker.preset(index);
                } else if let Some((id, local)) = control_at(&picker, pointer) {
                    picker.press(id, local);
                }
            }
            Some(Button::Keyboard(key)) => on_key(&mut picker, key),
            _ => {}
        }

        if let Some(Button::Mouse(MouseButton::Left)) = e.release_args() {
            picker.release();
        }

        let text = picker.display_text();
        if text != title {
            trace!("title -> {text}");
            window.set_title(text.clone());
            title = text;
        }

        if let Some(render_args) = e.render_args() {
            gl.draw(render_args.viewport(), |c, gl| {
                graphics::clear(BACKGROUND, gl);
                draw_wheel(&picker, &c, gl);
                draw_alpha(&picker, &c, gl);
                draw_rgb(&picker, &c, gl);
                draw_preview(&picker, &layout, &c, gl);
                draw_presets(&layout, &c, gl);
            });
        }
    }
    info!("window closed with {}", picker.display_text());
    Ok(())
}

fn translated(c: &Context, origin: F64x2) -> Matrix2d {
    c.transform.trans(origin.x, origin.y)
}

fn draw_cursor(pos: F64x2, transform: Matrix2d, gl: &mut GlGraphics) {
    let bounds = circle(pos.x, pos.y, CURSOR_RADIUS);
    Ellipse::new_border(BLACK, 2.5).draw(bounds, &DrawState::default(), transform, gl);
    Ellipse::new_border(WHITE, 1.2).draw(bounds, &DrawState::default(), transform, gl);
}

fn draw_checkerboard(corner: F64x2, size: F64x2, transform: Matrix2d, gl: &mut GlGraphics) {
    rectangle(LIGHT_GREY, [corner.x, corner.y, size.x, size.y], transform, gl);
    let cols = (size.x / CHECKER).ceil() as usize;
    let rows = (size.y / CHECKER).ceil() as usize;
    for row in 0..rows {
        for col in (0..cols).filter(|col| (row + col) % 2 == 1) {
            let (x, y) = (col as f64 * CHECKER, row as f64 * CHECKER);
            rectangle(
                DARK_GREY,
                [
                    corner.x + x,
                    corner.y + y,
                    CHECKER.min(size.x - x),
                    CHECKER.min(size.y - y),
                ],
                transform,
                gl,
            );
        }
    }
}

fn draw_wheel(picker: &Picker, c: &Context, gl: &mut GlGraphics) {
    let wheel = picker.hue_wheel();
    let geometry = match wheel.geometry() {
        Some(geometry) => geometry,
        None => return,
    };
    let transform = translated(c, wheel.canvas().origin);

    let step = 360.0 / RING_SEGMENTS as f64;
    for i in 0..RING_SEGMENTS {
        let start = i as f64 * step;
        // overlap neighbours a little so no seams show
        let end = start + step + 0.5;
        let quad: [[f64; 2]; 4] = [
            geometry.point_at(start, geometry.inner_radius).into(),
            geometry.point_at(start, geometry.outer_radius).into(),
            geometry.point_at(end, geometry.outer_radius).into(),
            geometry.point_at(end, geometry.inner_radius).into(),
        ];
        let hue = (start + step / 2.0) as f32;
        Polygon::new(hsla(hue, 1.0, 0.5, 1.0)).draw(
            &quad,
            &DrawState::default(),
            transform,
            gl,
        );
    }

    let h = picker.state().h();
    let cell = geometry.square_size / SQUARE_CELLS as f64;
    for i in 0..SQUARE_CELLS {
        for j in 0..SQUARE_CELLS {
            let corner = geometry.square_origin + F64x2::new(i as f64, j as f64) * cell;
            rectangle(
                from_rgb(square_cell_color(h, i, j), 1.0),
                [corner.x, corner.y, cell + 0.5, cell + 0.5],
                transform,
                gl,
            );
        }
    }

    for cursor in wheel.cursors(picker.state()) {
        draw_cursor(cursor, transform, gl);
    }
}

fn draw_alpha(picker: &Picker, c: &Context, gl: &mut GlGraphics) {
    let slider = picker.alpha_slider();
    let (corner, size) = match slider.bar_rect() {
        Some(rect) => rect,
        None => return,
    };
    let transform = translated(c, slider.canvas().origin);
    draw_checkerboard(corner, size, transform, gl);

    let rgb = picker.state().rgb();
    let step = size.y / GRADIENT_STEPS as f64;
    for k in 0..GRADIENT_STEPS {
        let a = 1.0 - (k as f64 + 0.5) / GRADIENT_STEPS as f64;
        rectangle(
            from_rgb(rgb, a as f32),
            [corner.x, corner.y + k as f64 * step, size.x, step],
            transform,
            gl,
        );
    }

    for cursor in slider.cursors(picker.state()) {
        draw_cursor(cursor, transform, gl);
    }
}

fn draw_rgb(picker: &Picker, c: &Context, gl: &mut GlGraphics) {
    let sliders = picker.rgb_sliders();
    let transform = translated(c, sliders.canvas().origin);
    let rgb = picker.state().rgb();
    let step = sliders.track_width() / GRADIENT_STEPS as f64;

    // each track previews the color with only its own channel varying
    for track in sliders.tracks() {
        for k in 0..GRADIENT_STEPS {
            let value = ((k as f64 + 0.5) / GRADIENT_STEPS as f64 * 255.0).round() as u8;
            rectangle(
                from_rgb(rgb.with_channel(track.channel, value), 1.0),
                [
                    RGB_SLIDERS_CFG.padding_x + k as f64 * step,
                    track.top,
                    step + 0.5,
                    RGB_SLIDERS_CFG.track_height,
                ],
                transform,
                gl,
            );
        }
    }

    for cursor in sliders.cursors(picker.state()) {
        draw_cursor(cursor, transform, gl);
    }
}

fn draw_preview(picker: &Picker, layout: &Layout, c: &Context, gl: &mut GlGraphics) {
    let (corner, size) = layout.preview;
    draw_checkerboard(corner, size, c.transform, gl);
    rectangle(
        from_state(picker.state()),
        [corner.x, corner.y, size.x, size.y],
        c.transform,
        gl,
    );
}

fn draw_presets(layout: &Layout, c: &Context, gl: &mut GlGraphics) {
    let (origin, cell) = layout.presets;
    for (index, hex) in PRESETS.iter().enumerate() {
        let rgb = match hex_to_rgb(hex) {
            Some(rgb) => rgb,
            None => continue,
        };
        let (col, row) = (index % PRESETS_PER_ROW, index / PRESETS_PER_ROW);
        let corner = origin + F64x2::new(col as f64 * cell.x, row as f64 * cell.y);
        rectangle(
            from_rgb(rgb, 1.0),
            [corner.x + 2.0, corner.y + 2.0, cell.x - 4.0, cell.y - 4.0],
            c.transform,
            gl,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_fills_the_default_window() {
        let mut picker = Picker::default();
        let size = Layout::window_size(360.0);
        let layout = Layout::apply(&mut picker, size);
        assert_eq!(picker.hue_wheel().size(), F64x2::splat(360.0));
        assert_eq!(picker.alpha_slider().canvas().origin, F64x2::new(400.0, 20.0));
        assert_eq!(picker.rgb_sliders().size(), F64x2::new(420.0, RGB_HEIGHT));
        assert_eq!(layout.preview.0, F64x2::new(20.0, 540.0));
        assert_eq!(layout.presets.1, F64x2::new(35.0, PRESET_HEIGHT));
    }

    #[test]
    fn presets_grid_hit_test() {
        let mut picker = Picker::default();
        let layout = Layout::apply(&mut picker, Layout::window_size(360.0));
        let (origin, cell) = layout.presets;
        assert_eq!(layout.preset_at(origin + F64x2::splat(1.0)), Some(0));
        assert_eq!(
            layout.preset_at(origin + F64x2::new(cell.x * 11.5, cell.y * 1.5)),
            Some(23)
        );
        assert_eq!(layout.preset_at(origin + F64x2::new(cell.x * 12.5, 1.0)), None);
        assert_eq!(layout.preset_at(origin + F64x2::new(1.0, cell.y * 2.5)), None);
        assert_eq!(layout.preset_at(origin - F64x2::splat(1.0)), None);
    }

    #[test]
    fn presses_route_to_the_control_underneath() {
        let mut picker = Picker::default();
        Layout::apply(&mut picker, Layout::window_size(360.0));
        let (id, local) = control_at(&picker, F64x2::new(420.0, 100.0)).unwrap();
        assert_eq!(id, ControlId::AlphaSlider);
        assert_eq!(local, F64x2::new(20.0, 80.0));
        assert_eq!(
            control_at(&picker, F64x2::new(30.0, 400.0)).map(|(id, _)| id),
            Some(ControlId::RgbSliders)
        );
        assert_eq!(control_at(&picker, F64x2::new(390.0, 100.0)), None);
    }

    fn near(a: Rgb, b: Rgb) -> bool {
        a.r.abs_diff(b.r) <= 10 && a.g.abs_diff(b.g) <= 10 && a.b.abs_diff(b.b) <= 10
    }

    #[test]
    fn square_cells_follow_the_picked_hue() {
        let last = SQUARE_CELLS - 1;
        for (h, pure) in [
            (0.0, Rgb::new(255, 0, 0)),
            (120.0, Rgb::new(0, 255, 0)),
            (240.0, Rgb::new(0, 0, 255)),
            (60.0, Rgb::new(255, 255, 0)),
        ] {
            let mut state = ColorState::default();
            state.set_from_hsv(h, 1.0, 1.0);
            assert_eq!(state.rgb(), pure);

            let top_right = square_cell_color(state.h(), last, 0);
            assert!(near(top_right, pure), "hue {h}: top right is {top_right:?}");
            let top_left = square_cell_color(state.h(), 0, 0);
            assert!(near(top_left, Rgb::new(255, 255, 255)), "hue {h}: {top_left:?}");
            let bottom = square_cell_color(state.h(), last, last);
            assert!(near(bottom, Rgb::new(0, 0, 0)), "hue {h}: {bottom:?}");
        }
    }

    #[test]
    fn square_cells_darken_downwards() {
        let column: Vec<u8> = (0..SQUARE_CELLS)
            .map(|j| square_cell_color(120.0, SQUARE_CELLS - 1, j).g)
            .collect();
        assert!(column.windows(2).all(|pair| pair[0] > pair[1]));
    }
}
