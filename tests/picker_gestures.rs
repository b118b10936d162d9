use huewheel::{
    actor::{Command, PickerActor},
    controls::Resizable,
    presets::PRESETS,
    ColorFormat, Consumer, ControlId, F64x2, Picker, Rgb,
};

fn laid_out() -> Picker {
    let mut picker = Picker::default();
    picker.resize(ControlId::HueWheel, F64x2::splat(360.0));
    picker.resize(ControlId::AlphaSlider, F64x2::new(40.0, 300.0));
    picker.resize(ControlId::RgbSliders, F64x2::new(300.0, 120.0));
    picker
}

#[test]
fn hsv_entry_point_feeds_the_text() {
    let mut picker = laid_out();
    let refresh = picker.set_from_hsv(120.0, 1.0, 1.0);
    assert_eq!(refresh.state.rgb(), Rgb::new(0, 255, 0));
    assert_eq!(refresh.display_text(), "rgba(0, 255, 0, 1.00)");
    assert!(Consumer::ALL.iter().all(|c| refresh.is_dirty(*c)));
}

#[test]
fn rgb_entry_point_feeds_hsv_and_hex() {
    let mut picker = laid_out();
    picker.set_from_rgb(0, 0, 255);
    let refresh = picker.set_format(ColorFormat::Hex);
    assert_eq!(refresh.dirty, vec![Consumer::Text]);
    assert_eq!(refresh.display_text(), "#0000FF");
    let state = picker.state();
    assert!((state.h() - 240.0).abs() < 1e-9);
    assert_eq!((state.s(), state.v()), (1.0, 1.0));
}

#[test]
fn square_drag_from_the_corner_is_clamped() {
    let mut picker = laid_out();
    let geometry = *picker.hue_wheel().geometry().unwrap();
    picker.set_from_hsv(200.0, 0.5, 0.5);

    let refresh = picker
        .press(ControlId::HueWheel, geometry.square_origin)
        .unwrap();
    assert_eq!((refresh.state.s(), refresh.state.v()), (0.0, 1.0));
    assert_eq!(refresh.state.rgb(), Rgb::new(255, 255, 255));

    let refresh = picker
        .drag(ControlId::HueWheel, F64x2::new(-500.0, -500.0))
        .unwrap();
    assert_eq!((refresh.state.s(), refresh.state.v()), (0.0, 1.0));
    assert_eq!(refresh.state.h(), 200.0);

    let refresh = picker
        .drag(ControlId::HueWheel, F64x2::new(1000.0, 1000.0))
        .unwrap();
    assert_eq!(refresh.state.rgb(), Rgb::new(0, 0, 0));

    picker.release();
    assert_eq!(picker.latched(), None);
    assert!(picker.drag(ControlId::HueWheel, geometry.center).is_none());
}

#[test]
fn ring_drag_turns_the_hue_only() {
    let mut picker = laid_out();
    let geometry = *picker.hue_wheel().geometry().unwrap();
    picker.set_from_hsv(200.0, 0.5, 0.8);

    let right = geometry.center + F64x2::new(geometry.track_radius(), 0.0);
    let refresh = picker.press(ControlId::HueWheel, right).unwrap();
    assert!((refresh.state.h() - 90.0).abs() < 1e-9);
    assert_eq!((refresh.state.s(), refresh.state.v()), (0.5, 0.8));

    // the ring latch holds even over the square
    let below = geometry.center + F64x2::new(0.0, 10.0);
    let refresh = picker.drag(ControlId::HueWheel, below).unwrap();
    assert!((refresh.state.h() - 180.0).abs() < 1e-9);
    assert_eq!(picker.latched(), Some(ControlId::HueWheel));
}

#[test]
fn window_coordinates_go_through_the_canvas() {
    let mut picker = laid_out();
    picker.place(ControlId::RgbSliders, F64x2::new(20.0, 400.0));
    let canvas = *picker.control(ControlId::RgbSliders).canvas();

    // green track of a 300 x 120 slider block starts at y = 50
    let local = canvas.to_local(F64x2::new(20.0 + 285.0, 400.0 + 60.0));
    let refresh = picker.press(ControlId::RgbSliders, local).unwrap();
    assert_eq!(refresh.state.rgb(), Rgb::new(255, 255, 0));
    assert_eq!(canvas.to_global(local), F64x2::new(305.0, 460.0));
}

#[test]
fn presets_show_up_in_every_format() {
    let mut picker = laid_out();
    let beige = PRESETS
        .iter()
        .position(|hex| *hex == "#F5F5DC")
        .unwrap();
    picker.preset(beige).unwrap();
    picker.set_alpha(128);
    picker.set_format(ColorFormat::Hsla);
    assert_eq!(picker.display_text(), "hsla(60, 56%, 91%, 0.50)");
    assert!(picker.preset(PRESETS.len()).is_none());
    assert!(picker.select_preset("#12345").is_none());
    assert_eq!(picker.state().rgb(), Rgb::new(245, 245, 220));
}

#[test]
fn actor_runs_a_whole_alpha_gesture() {
    let (actor, handle) = PickerActor::spawn(Picker::default());
    for (id, size) in [
        (ControlId::HueWheel, F64x2::splat(360.0)),
        (ControlId::AlphaSlider, F64x2::new(40.0, 300.0)),
        (ControlId::RgbSliders, F64x2::new(300.0, 120.0)),
    ] {
        handle.send(Command::Resize(id, size)).unwrap();
    }
    handle
        .send(Command::Press(ControlId::AlphaSlider, F64x2::new(20.0, 150.0)))
        .unwrap();
    assert_eq!(handle.snapshot().unwrap().a(), 128);

    handle
        .send(Command::Drag(ControlId::AlphaSlider, F64x2::new(20.0, 400.0)))
        .unwrap();
    handle.send(Command::Release).unwrap();
    handle
        .send(Command::Drag(ControlId::AlphaSlider, F64x2::new(20.0, 8.0)))
        .unwrap();

    let state = handle.snapshot().unwrap();
    assert_eq!(state.a(), 0);
    assert_eq!(state.rgb(), Rgb::new(255, 0, 0));

    handle.shutdown().unwrap();
    let picker = actor.join().unwrap();
    assert_eq!(picker.latched(), None);
}
