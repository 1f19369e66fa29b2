//! The update callback, for mutating state each frame. Not for drawing.

use super::*;

/// The app's update callback for updating state.
pub fn update(app: &App, model: &mut Model, _update: Update) {
    let cursor = ui::to_pixels(app.window_rect(), vec2(app.mouse.x, app.mouse.y));
    let left_down = app.mouse.buttons.left().is_down();

    if let Some(step_time) = model.slider.drag(cursor, left_down) {
        tracing::trace!(step_time, "slider moved");
    }
}
