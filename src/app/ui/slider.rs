//! The step time slider.

use super::*;

/// A horizontal slider bound to the step time parameter.
///
/// The grip position is a pure function of the parameter value. Dragging the
/// grip publishes new values through the [`StepTimeParam`].
#[derive(Debug, Clone)]
pub struct Slider {
    param: StepTimeParam,
    dragging: bool,
}

impl Slider {
    pub fn new(param: StepTimeParam) -> Self {
        Self { param, dragging: false }
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Distance of the grip's centre from the start of the slider body.
    pub fn grip_offset(param: &StepTimeParam) -> f32 {
        param.normalized().clamp(0.0, 1.0) as f32 * SLIDER_LEN
    }

    /// The square grip for the current value of `param`.
    pub fn grip_rect(param: &StepTimeParam) -> PixelRect {
        PixelRect::new(
            SLIDER_X - SLIDER_GRIP_SIZE + Self::grip_offset(param),
            SLIDER_Y - SLIDER_GRIP_SIZE,
            SLIDER_GRIP_SIZE * 2.0,
            SLIDER_GRIP_SIZE * 2.0,
        )
    }

    /// The slider body.
    pub fn body_rect() -> PixelRect {
        PixelRect::new(
            SLIDER_X,
            SLIDER_Y - SLIDER_THICKNESS * 0.5,
            SLIDER_LEN,
            SLIDER_THICKNESS,
        )
    }

    /// The step time for a pointer at `cursor_x`, clamped to the slider's
    /// ends.
    pub fn value_at(cursor_x: f32) -> f64 {
        let grip_min = SLIDER_X - SLIDER_GRIP_SIZE;
        let grip_max = grip_min + SLIDER_LEN;
        let x = (cursor_x - SLIDER_GRIP_SIZE).clamp(grip_min, grip_max);

        map(
            <f64 as From<_>>::from(x),
            <f64 as From<_>>::from(grip_min),
            <f64 as From<_>>::from(grip_max),
            STEP_TIME_MIN,
            STEP_TIME_MAX,
        )
    }

    /// Advances the drag state with this frame's pointer and publishes a new
    /// step time while dragging. Returns the published value, if any.
    ///
    /// A press starts a drag only when it lands on the grip; the value
    /// follows the pointer from the next frame on.
    pub fn drag(&mut self, cursor: Vec2, left_down: bool) -> Option<f64> {
        if !self.dragging {
            if left_down && Self::grip_rect(&self.param).contains(cursor) {
                self.dragging = true;
            }
            return None;
        }

        if !left_down {
            self.dragging = false;
            return None;
        }

        Some(self.param.set(Self::value_at(cursor.x)))
    }

    fn grip_color(&self) -> u32 {
        if self.dragging {
            SLIDER_GRIP_DRAGGING_COLOR
        }
        else {
            SLIDER_GRIP_COLOR
        }
    }
}

impl Drawable for Slider {
    fn draw(&self, draw: &Draw, frame: &Frame) {
        let window = frame.rect();
        let step_time = self.param.get();

        let body = Self::body_rect().to_world(window);
        draw.rect().xy(body.xy()).wh(body.wh()).color(color(SLIDER_COLOR));

        let label_left = SLIDER_X + SLIDER_LEN + SLIDER_TEXT_LEFT_PADDING;
        let label = PixelRect::new(label_left, SLIDER_Y - FONT_SIZE as f32, 200.0, FONT_SIZE as f32 * 2.0)
            .to_world(window);
        draw.text(&format!("{step_time:.6}"))
            .xy(label.xy())
            .wh(label.wh())
            .left_justify()
            .align_text_middle_y()
            .font_size(FONT_SIZE)
            .color(color(TEXT_COLOR));

        let grip = Self::grip_rect(&self.param).to_world(window);
        draw.rect().xy(grip.xy()).wh(grip.wh()).color(color(self.grip_color()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grip_centre(step_time: f64) -> Vec2 {
        let r = Slider::grip_rect(&StepTimeParam::new(step_time));
        vec2(r.x + r.w * 0.5, r.y + r.h * 0.5)
    }

    #[test]
    fn grip_tracks_step_time() {
        assert_eq!(Slider::grip_offset(&StepTimeParam::new(STEP_TIME_MIN)), 0.0);
        assert_eq!(Slider::grip_offset(&StepTimeParam::new(STEP_TIME_MAX)), SLIDER_LEN);
        assert!((grip_centre(STEP_TIME_MIN).x - SLIDER_X).abs() < 1e-4);
        assert!((grip_centre(STEP_TIME_MAX).x - (SLIDER_X + SLIDER_LEN)).abs() < 1e-4);
        assert_eq!(grip_centre(50.0).y, SLIDER_Y);
    }

    #[test]
    fn grip_follows_published_value() {
        let param = StepTimeParam::new(DEFAULT_STEP_TIME);
        let slider = Slider::new(param.clone());

        for value in [STEP_TIME_MIN, 42.0, 150.5, STEP_TIME_MAX] {
            param.set(value);
            let expected = param.normalized() as f32 * SLIDER_LEN;
            assert!((Slider::grip_offset(&slider.param) - expected).abs() < 1e-4);
        }

        // out-of-range writes are clamped before they reach the grip
        param.set(1.0e6);
        assert_eq!(Slider::grip_offset(&slider.param), SLIDER_LEN);
    }

    #[test]
    fn pointer_maps_linearly() {
        assert_eq!(Slider::value_at(SLIDER_X), STEP_TIME_MIN);
        assert_eq!(Slider::value_at(SLIDER_X + SLIDER_LEN), STEP_TIME_MAX);
        assert!(within_tolerance(
            Slider::value_at(SLIDER_X + SLIDER_LEN * 0.5),
            100.5,
            1e-4
        ));

        // pointer beyond either end is pinned
        assert_eq!(Slider::value_at(-1000.0), STEP_TIME_MIN);
        assert_eq!(Slider::value_at(5000.0), STEP_TIME_MAX);
    }

    #[test]
    fn pointer_and_grip_agree() {
        for step_time in [1.0, 3.0, 57.25, 133.0, 200.0] {
            let x = grip_centre(step_time).x;
            assert!(within_tolerance(Slider::value_at(x), step_time, 1e-3));
        }
    }

    #[test]
    fn drag_state_machine() {
        let param = StepTimeParam::new(DEFAULT_STEP_TIME);
        let mut slider = Slider::new(param.clone());
        let on_grip = grip_centre(DEFAULT_STEP_TIME);

        // hovering does nothing
        assert_eq!(slider.drag(on_grip, false), None);
        assert!(!slider.is_dragging());

        // pressing away from the grip does nothing
        assert_eq!(slider.drag(vec2(600.0, 400.0), true), None);
        assert!(!slider.is_dragging());

        // pressing on the grip grabs it without moving it
        assert_eq!(slider.drag(on_grip, true), None);
        assert!(slider.is_dragging());
        assert_eq!(param.get(), DEFAULT_STEP_TIME);

        // moving while held publishes
        let end = vec2(SLIDER_X + SLIDER_LEN, SLIDER_Y);
        assert_eq!(slider.drag(end, true), Some(STEP_TIME_MAX));
        assert_eq!(param.get(), STEP_TIME_MAX);

        // the drag survives leaving the grip vertically
        assert_eq!(slider.drag(vec2(SLIDER_X, 500.0), true), Some(STEP_TIME_MIN));

        // releasing ends the drag
        assert_eq!(slider.drag(end, false), None);
        assert!(!slider.is_dragging());
        assert_eq!(param.get(), STEP_TIME_MIN);
    }
}
