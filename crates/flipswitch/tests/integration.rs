//! End-to-end tests: manifest to widget to frames to paint.

use flipswitch::widgets::{Switch, SwitchChanged, SwitchPhase};
use flipswitch::yaml::SwitchManifest;
use flipswitch::{
    AccessibleRole, Color, Constraints, DrawCommand, Event, MouseButton, Point, Rect,
    RecordingCanvas, Size, TouchId, Widget,
};

const DT: f64 = 1.0 / 60.0;

const MANIFEST: &str = r##"
on_tint: "#34c759"
off_tint: "#e5e5ea"
on_thumb_tint: "#ffffff"
off_thumb_tint: "#ffffff"
animation_duration: 0.25
"##;

fn click(x: f32, y: f32) -> Event {
    Event::MouseDown {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }
}

/// Step the frame clock until it goes idle, collecting notifications.
fn run_to_idle(switch: &mut Switch) -> Vec<SwitchChanged> {
    let mut changes = Vec::new();
    for _ in 0..600 {
        changes.extend(switch.advance(DT));
        if !switch.is_animating() {
            break;
        }
    }
    changes
}

// =============================================================================
// Manifest to Widget
// =============================================================================

#[test]
fn test_manifest_builds_laid_out_switch() {
    let mut switch = SwitchManifest::from_yaml(MANIFEST)
        .expect("valid yaml")
        .build_switch()
        .expect("valid manifest");

    let size = switch.measure(Constraints::loose(Size::new(400.0, 400.0)));
    assert_eq!(size, Size::new(51.0, 31.0));
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));

    assert!(switch.is_on());
    assert_eq!(
        switch.background_color(),
        Color::from_hex("#34c759").expect("hex")
    );
    assert_eq!(switch.thumb().frame.origin(), Point::new(33.5, 3.5));
}

#[test]
fn test_click_animates_and_notifies_once() {
    let mut switch = SwitchManifest::from_yaml(MANIFEST)
        .expect("valid yaml")
        .build_switch()
        .expect("valid manifest");
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));

    assert!(switch.event(&click(30.0, 15.0)).is_none());
    assert_eq!(
        switch.phase(),
        SwitchPhase::Animating {
            from: true,
            to: false
        }
    );

    let changes = run_to_idle(&mut switch);
    assert_eq!(changes, vec![SwitchChanged { on: false }]);
    assert_eq!(switch.phase(), SwitchPhase::Idle { on: false });
    assert_eq!(
        switch.background_color(),
        Color::from_hex("#e5e5ea").expect("hex")
    );
    assert_eq!(switch.thumb().frame.origin(), Point::new(3.5, 3.5));
    assert_eq!(switch.label_on().opacity, 0.0);
    assert_eq!(switch.label_off().opacity, 1.0);
}

#[test]
fn test_off_manifest_starts_off() {
    let mut switch = SwitchManifest::from_yaml("on: false")
        .expect("valid yaml")
        .build_switch()
        .expect("valid manifest");
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
    assert!(!switch.is_on());
    assert_eq!(switch.thumb().frame.origin(), switch.off_point());

    switch.event(&Event::TouchStart {
        id: TouchId(0),
        position: Point::new(10.0, 10.0),
    });
    assert_eq!(run_to_idle(&mut switch), vec![SwitchChanged { on: true }]);
}

// =============================================================================
// Transition Behavior
// =============================================================================

#[test]
fn test_mid_flight_tap_redirects_smoothly() {
    let mut switch = Switch::new();
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
    switch.event(&click(30.0, 15.0));
    for _ in 0..6 {
        assert!(switch.advance(DT).is_none());
    }
    let mid = switch.thumb().frame.x;
    assert!(mid < 33.5 && mid > 3.5);

    switch.event(&click(30.0, 15.0));
    assert!(switch.is_on());
    // Redirect starts where the thumb is, not at either end.
    assert_eq!(switch.thumb().frame.x, mid);

    let changes = run_to_idle(&mut switch);
    assert_eq!(changes, vec![SwitchChanged { on: true }]);
    assert_eq!(switch.thumb().frame.origin(), Point::new(33.5, 3.5));
}

#[test]
fn test_opacity_stays_in_range_through_spring() {
    let mut switch = Switch::new();
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
    switch.begin_interaction();
    while switch.is_animating() {
        switch.advance(DT);
        let visual = switch.visual_state();
        assert!((0.0..=1.0).contains(&visual.label_on_opacity));
        assert!((0.0..=1.0).contains(&visual.label_off_opacity));
    }
}

#[test]
fn test_resize_during_transition_applies_after() {
    let mut switch = Switch::new();
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
    switch.begin_interaction();
    switch.advance(DT);
    let frozen_radius = switch.corner_radius();

    switch.layout(Rect::new(0.0, 0.0, 100.0, 40.0));
    assert_eq!(switch.corner_radius(), frozen_radius);
    assert_eq!(switch.on_point(), Point::new(33.5, 3.5));

    run_to_idle(&mut switch);
    assert_eq!(switch.corner_radius(), 20.0);
    assert_eq!(switch.thumb().frame, Rect::new(3.5, 3.5, 33.0, 33.0));
}

#[test]
fn test_zero_duration_completes_next_frame() {
    let mut switch = SwitchManifest::from_yaml("animation_duration: 0")
        .expect("valid yaml")
        .build_switch()
        .expect("valid manifest");
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
    switch.begin_interaction();
    assert_eq!(switch.advance(DT), Some(SwitchChanged { on: false }));
}

#[test]
fn test_direct_write_during_transition_is_silent() {
    let mut switch = Switch::new();
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
    switch.begin_interaction();
    switch.advance(DT);
    switch.set_on(true);
    assert!(run_to_idle(&mut switch).is_empty());
    assert!(switch.scheduler().is_empty());
}

// =============================================================================
// Paint
// =============================================================================

#[test]
fn test_boxed_widget_paints_inside_clip() {
    let mut widget: Box<dyn Widget> = Box::new(Switch::new().accessible_name("Wi-Fi"));
    widget.layout(Rect::new(20.0, 40.0, 60.0, 30.0));
    assert_eq!(widget.accessible_role(), AccessibleRole::Switch);
    assert_eq!(widget.accessible_name(), Some("Wi-Fi"));

    let mut canvas = RecordingCanvas::new();
    widget.paint(&mut canvas);
    assert_eq!(canvas.clip_depth(), 0);
    for command in canvas.commands() {
        let b = command.bounds();
        assert!(b.x >= 20.0 && b.y >= 40.0);
        assert!(b.x + b.width <= 80.0 && b.y + b.height <= 70.0);
    }
    assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["ON"]);
}

#[test]
fn test_paint_commands_serialize() {
    let mut switch = Switch::new();
    switch.layout(Rect::new(0.0, 0.0, 60.0, 30.0));
    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);

    let json = serde_json::to_string(canvas.commands()).expect("serialize");
    let back: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, canvas.commands());
}
