use super::*;

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => model.toggle_playback(),
        _ => {}
    }
}
