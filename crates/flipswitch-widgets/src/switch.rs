//! Animated ON/OFF switch widget.

use crate::config::{SwitchConfig, BORDER_WIDTH};
use crate::element::{Label, Subview, Thumb, OFF_TEXT, ON_TEXT};
use crate::layout::{self, SwitchLayout};
use crate::transition::{SwitchChanged, SwitchPhase, Transition, VisualState};
use flipswitch_core::{
    widget::{AccessibleRole, LayoutResult},
    AnimationRequest, AnimationScheduler, Canvas, Color, Constraints, CornerRadius, Easing, Event,
    Font, FrameClock, Point, Rect, Size, StrokeStyle, TextAlign, TypeId, Widget,
};
use std::any::Any;

/// Preferred size when the host imposes no constraints.
const PREFERRED_SIZE: Size = Size::new(51.0, 31.0);

/// Toggle switch with a sliding thumb and optional ON/OFF captions.
///
/// `is_on` is the only authoritative state. Everything else (points, frames,
/// colors) is derived by the rebuild and layout passes, or written by an
/// in-flight transition. While a transition runs, layout passes are
/// skipped so they never fight the animation.
///
/// Transitions are driven by an injected [`AnimationScheduler`]; the host
/// calls [`Switch::advance`] once per frame.
#[derive(Debug)]
pub struct Switch<S = FrameClock> {
    config: SwitchConfig,
    is_on: bool,
    transition: Option<Transition>,
    bounds: Rect,
    /// Derived thumb origin when on
    on_point: Point,
    /// Derived thumb origin when off
    off_point: Point,
    corner_radius: f32,
    background: Color,
    border: StrokeStyle,
    thumb: Thumb,
    label_on: Label,
    label_off: Label,
    subviews: Vec<Subview>,
    rebuilds: u64,
    scheduler: S,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl Switch {
    /// Create a switch driven by a [`FrameClock`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_scheduler(FrameClock::new())
    }
}

impl<S: AnimationScheduler> Switch<S> {
    /// Create a switch driven by the given scheduler.
    pub fn with_scheduler(scheduler: S) -> Self {
        let mut switch = Self {
            config: SwitchConfig::default(),
            is_on: true,
            transition: None,
            bounds: Rect::default(),
            on_point: Point::ORIGIN,
            off_point: Point::ORIGIN,
            corner_radius: 0.0,
            background: Color::CLEAR,
            border: StrokeStyle::default(),
            thumb: Thumb::default(),
            label_on: Label::default(),
            label_off: Label::default(),
            subviews: Vec::new(),
            rebuilds: 0,
            scheduler,
            accessible_name_value: None,
            test_id_value: None,
        };
        switch.rebuild();
        switch
    }

    /// Set the initial state.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.set_on(on);
        self
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SwitchConfig) -> Self {
        self.apply_configuration(config);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Logical value. Flips as soon as an interaction begins.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Coarse state of the switch.
    #[must_use]
    pub fn phase(&self) -> SwitchPhase {
        match self.transition {
            Some(t) => SwitchPhase::Animating {
                from: t.from_on,
                to: self.is_on,
            },
            None => SwitchPhase::Idle { on: self.is_on },
        }
    }

    /// Set the value directly.
    ///
    /// Any running transition is cancelled and no [`SwitchChanged`] is
    /// produced; the switch snaps to the new state.
    pub fn set_on(&mut self, on: bool) {
        if let Some(transition) = self.transition.take() {
            log::debug!("switch: direct write cancels transition #{}", transition.id);
            self.scheduler.cancel(transition.id);
        }
        self.is_on = on;
        self.rebuild();
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Replace the whole configuration with a single rebuild.
    pub fn apply_configuration(&mut self, config: SwitchConfig) {
        self.config = config;
        self.rebuild();
    }

    /// Number of full rebuilds so far.
    #[must_use]
    pub const fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Set the track color for the on state.
    pub fn set_on_tint_color(&mut self, color: Color) {
        self.config.on_tint_color = color;
        self.rebuild();
    }

    /// Set the track color for the off state.
    pub fn set_off_tint_color(&mut self, color: Color) {
        self.config.off_tint_color = color;
        self.rebuild();
    }

    /// Set the thumb color for the on state; also the border color.
    pub fn set_on_thumb_tint_color(&mut self, color: Color) {
        self.config.on_thumb_tint_color = color;
        self.rebuild();
    }

    /// Set the thumb color for the off state.
    pub fn set_off_thumb_tint_color(&mut self, color: Color) {
        self.config.off_thumb_tint_color = color;
        self.rebuild();
    }

    /// Set the track corner radius multiple. Out of range becomes `0.5`.
    pub fn set_corner_radius_multiple(&mut self, multiple: f32) {
        self.config.set_corner_radius_multiple(multiple);
        self.rebuild();
    }

    /// Set the thumb corner radius multiple. Out of range becomes `0.5`.
    pub fn set_thumb_corner_radius_multiple(&mut self, multiple: f32) {
        self.config.set_thumb_corner_radius_multiple(multiple);
        self.rebuild();
    }

    /// Set an explicit thumb size; [`Size::ZERO`] derives it from the height.
    pub fn set_thumb_size(&mut self, size: Size) {
        self.config.thumb_size = size;
        self.rebuild();
    }

    /// Show or hide the captions.
    pub fn set_labels_enabled(&mut self, enabled: bool) {
        self.config.labels_are_enabled = enabled;
        self.rebuild();
    }

    /// Set the caption font.
    pub fn set_font(&mut self, font: Font) {
        self.config.font = font;
        self.rebuild();
    }

    /// Set the caption color.
    pub fn set_text_color(&mut self, color: Color) {
        self.config.text_color = color;
        self.rebuild();
    }

    /// Set the transition length in seconds.
    pub fn set_animation_duration(&mut self, seconds: f64) {
        self.config.animation_duration = seconds;
        self.rebuild();
    }

    /// Get the track color for the on state.
    #[must_use]
    pub const fn get_on_tint_color(&self) -> Color {
        self.config.on_tint_color
    }

    /// Get the track color for the off state.
    #[must_use]
    pub const fn get_off_tint_color(&self) -> Color {
        self.config.off_tint_color
    }

    /// Get the thumb color for the on state.
    #[must_use]
    pub const fn get_on_thumb_tint_color(&self) -> Color {
        self.config.on_thumb_tint_color
    }

    /// Get the thumb color for the off state.
    #[must_use]
    pub const fn get_off_thumb_tint_color(&self) -> Color {
        self.config.off_thumb_tint_color
    }

    /// Get the track corner radius multiple.
    #[must_use]
    pub const fn get_corner_radius_multiple(&self) -> f32 {
        self.config.get_corner_radius_multiple()
    }

    /// Get the thumb corner radius multiple.
    #[must_use]
    pub const fn get_thumb_corner_radius_multiple(&self) -> f32 {
        self.config.get_thumb_corner_radius_multiple()
    }

    /// Get the explicit thumb size.
    #[must_use]
    pub const fn get_thumb_size(&self) -> Size {
        self.config.thumb_size
    }

    /// Check if captions are enabled.
    #[must_use]
    pub const fn labels_are_enabled(&self) -> bool {
        self.config.labels_are_enabled
    }

    /// Get the caption font.
    #[must_use]
    pub const fn get_font(&self) -> Font {
        self.config.font
    }

    /// Get the caption color.
    #[must_use]
    pub const fn get_text_color(&self) -> Color {
        self.config.text_color
    }

    /// Get the transition length in seconds.
    #[must_use]
    pub const fn get_animation_duration(&self) -> f64 {
        self.config.animation_duration
    }

    // =========================================================================
    // Elements & Geometry
    // =========================================================================

    /// The ON caption.
    #[must_use]
    pub const fn label_on(&self) -> &Label {
        &self.label_on
    }

    /// The ON caption, for styling beyond font and color.
    pub fn label_on_mut(&mut self) -> &mut Label {
        &mut self.label_on
    }

    /// The OFF caption.
    #[must_use]
    pub const fn label_off(&self) -> &Label {
        &self.label_off
    }

    /// The OFF caption, for styling beyond font and color.
    pub fn label_off_mut(&mut self) -> &mut Label {
        &mut self.label_off
    }

    /// The thumb.
    #[must_use]
    pub const fn thumb(&self) -> &Thumb {
        &self.thumb
    }

    /// Children in paint order.
    #[must_use]
    pub fn subviews(&self) -> &[Subview] {
        &self.subviews
    }

    /// Thumb origin for the on state, as of the last layout pass.
    #[must_use]
    pub const fn on_point(&self) -> Point {
        self.on_point
    }

    /// Thumb origin for the off state, as of the last layout pass.
    #[must_use]
    pub const fn off_point(&self) -> Point {
        self.off_point
    }

    /// Track corner radius.
    #[must_use]
    pub const fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Current track fill.
    #[must_use]
    pub const fn background_color(&self) -> Color {
        self.background
    }

    /// Track border.
    #[must_use]
    pub const fn border(&self) -> StrokeStyle {
        self.border
    }

    /// Snapshot of the animatable properties.
    #[must_use]
    pub const fn visual_state(&self) -> VisualState {
        VisualState {
            thumb_x: self.thumb.frame.x,
            thumb_color: self.thumb.color,
            background: self.background,
            label_on_opacity: self.label_on.opacity,
            label_off_opacity: self.label_off.opacity,
        }
    }

    /// The animation scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The animation scheduler, mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // =========================================================================
    // Transition
    // =========================================================================

    /// Start a transition to the opposite state.
    ///
    /// Always claims the interaction. A transition already in flight is
    /// redirected from wherever its visuals currently are; the superseded
    /// transition never reports completion.
    pub fn begin_interaction(&mut self) -> bool {
        let from = self.visual_state();
        let from_on = self.is_on;
        if let Some(previous) = self.transition.take() {
            log::debug!("switch: redirecting transition #{}", previous.id);
            self.scheduler.cancel(previous.id);
        }

        self.is_on = !self.is_on;
        let to = self.target_visual(self.is_on);
        let id = self.scheduler.schedule(AnimationRequest::new(
            self.config.animation_duration,
            Easing::SWITCH,
        ));
        log::debug!(
            "switch: transition #{id} {from_on} -> {} over {:.3}s",
            self.is_on,
            self.config.animation_duration
        );
        self.transition = Some(Transition {
            id,
            from_on,
            from,
            to,
        });
        true
    }

    /// Advance the scheduler by `dt` seconds and apply the frames.
    ///
    /// Returns the change message when the current transition completes.
    pub fn advance(&mut self, dt: f64) -> Option<SwitchChanged> {
        let mut changed = None;
        for frame in self.scheduler.advance(dt) {
            let Some(transition) = self.transition.filter(|t| t.id == frame.id) else {
                log::trace!("switch: ignoring frame for stale #{}", frame.id);
                continue;
            };
            log::trace!("switch: #{} at {:.3}", frame.id, frame.progress);

            if frame.finished {
                // Settle on the current configuration, which may have
                // changed since the transition began.
                self.transition = None;
                self.apply_visual(self.target_visual(self.is_on));
                self.layout_pass();
                log::debug!("switch: transition #{} complete, on = {}", frame.id, self.is_on);
                changed = Some(SwitchChanged { on: self.is_on });
            } else {
                self.apply_visual(transition.sample(frame.progress));
            }
        }
        changed
    }

    fn target_visual(&self, on: bool) -> VisualState {
        let (label_on_opacity, label_off_opacity) = self.label_opacities(on);
        VisualState {
            thumb_x: if on { self.on_point.x } else { self.off_point.x },
            thumb_color: self.config.thumb_tint_for(on),
            background: self.config.tint_for(on),
            label_on_opacity,
            label_off_opacity,
        }
    }

    fn apply_visual(&mut self, visual: VisualState) {
        self.thumb.frame.x = visual.thumb_x;
        self.thumb.color = visual.thumb_color;
        self.background = visual.background;
        self.label_on.opacity = visual.label_on_opacity;
        self.label_off.opacity = visual.label_off_opacity;
    }

    const fn label_opacities(&self, on: bool) -> (f32, f32) {
        if !self.config.labels_are_enabled {
            (0.0, 0.0)
        } else if on {
            (1.0, 0.0)
        } else {
            (0.0, 1.0)
        }
    }

    // =========================================================================
    // Rebuild & Layout
    // =========================================================================

    fn rebuild(&mut self) {
        self.setup();
        self.layout_pass();
    }

    /// Recreate the children from the configuration and state.
    ///
    /// The thumb keeps its frame so a rebuild during a transition does not
    /// make it jump.
    fn setup(&mut self) {
        self.subviews.clear();
        self.thumb = Thumb {
            frame: self.thumb.frame,
            color: self.config.thumb_tint_for(self.is_on),
            corner_radius: self.thumb.corner_radius,
            interactive: false,
        };
        self.subviews.push(Subview::Thumb);
        self.border = StrokeStyle {
            color: self.config.on_thumb_tint_color,
            width: BORDER_WIDTH,
        };
        self.setup_labels();
        self.retarget_transition();

        self.rebuilds += 1;
        log::debug!(
            "switch: rebuild #{} (on = {}, labels = {})",
            self.rebuilds,
            self.is_on,
            self.config.labels_are_enabled
        );
    }

    /// Point an in-flight transition at the visuals of the current
    /// configuration, so the remaining frames blend toward them.
    fn retarget_transition(&mut self) {
        let to = self.target_visual(self.is_on);
        if let Some(transition) = self.transition.as_mut() {
            transition.to = to;
        }
    }

    fn setup_labels(&mut self) {
        let (on_opacity, off_opacity) = self.label_opacities(self.is_on);
        self.label_on.opacity = on_opacity;
        self.label_off.opacity = off_opacity;
        if !self.config.labels_are_enabled {
            return;
        }

        let (on_frame, off_frame) = layout::label_frames(self.bounds.width, self.bounds.height);
        for (label, text, frame) in [
            (&mut self.label_on, ON_TEXT, on_frame),
            (&mut self.label_off, OFF_TEXT, off_frame),
        ] {
            label.text = text.to_string();
            label.frame = frame;
            label.font = self.config.font;
            label.text_color = self.config.text_color;
            label.align = TextAlign::Center;
        }
        // Captions sit below the thumb.
        self.subviews.insert(0, Subview::LabelOff);
        self.subviews.insert(0, Subview::LabelOn);
    }

    /// Recompute geometry from the bounds, unless a transition owns it.
    fn layout_pass(&mut self) {
        if self.is_animating() {
            log::trace!("switch: layout suppressed while animating");
            return;
        }
        let SwitchLayout {
            corner_radius,
            background,
            on_point,
            off_point,
            thumb_frame,
            thumb_corner_radius,
            label_frames,
            ..
        } = layout::compute(self.bounds.size(), &self.config, self.is_on);

        self.corner_radius = corner_radius;
        self.background = background;
        self.on_point = on_point;
        self.off_point = off_point;
        self.thumb.frame = thumb_frame;
        self.thumb.corner_radius = thumb_corner_radius;
        if let Some((on_frame, off_frame)) = label_frames {
            self.label_on.frame = on_frame;
            self.label_off.frame = off_frame;
        }
    }

    fn paint_label(label: &Label, origin: Point, canvas: &mut dyn Canvas) {
        if label.is_visible() {
            canvas.draw_text(&label.text, label.frame.offset(origin), &label.text_style());
        }
    }
}

impl<S: AnimationScheduler + Send + Sync + 'static> Widget for Switch<S> {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(PREFERRED_SIZE)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.layout_pass();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let origin = self.bounds.origin();
        let track_radius = CornerRadius::uniform(self.corner_radius);

        canvas.push_clip(self.bounds);
        canvas.fill_rounded_rect(self.bounds, track_radius, self.background);
        for subview in &self.subviews {
            match subview {
                Subview::LabelOn => Self::paint_label(&self.label_on, origin, canvas),
                Subview::LabelOff => Self::paint_label(&self.label_off, origin, canvas),
                Subview::Thumb => canvas.fill_rounded_rect(
                    self.thumb.frame.offset(origin),
                    CornerRadius::uniform(self.thumb.corner_radius),
                    self.thumb.color,
                ),
            }
        }
        canvas.stroke_rounded_rect(
            self.bounds,
            track_radius,
            self.border.color,
            self.border.width,
        );
        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        // Completion is reported by `advance`, not here.
        if let Some(position) = event.press_position() {
            if self.bounds.contains_point(&position) {
                self.begin_interaction();
            }
        }
        None
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
