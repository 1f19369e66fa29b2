//! All app-related state and logic.

use crate::prelude::*;
use nannou::prelude::*;
use nannou::LoopMode::RefreshSync;

pub mod args;
pub mod audio;
pub mod keys;
mod model;
pub mod params;
pub mod ui;
pub mod update;
pub mod view;

pub use model::Model;
pub use params::*;
use update::update;

/// Runs the app via Nannou.
pub fn run_app() {
    nannou::app(model::Model::build)
        .loop_mode(RefreshSync)
        .update(update)
        .run();
}

pub trait Drawable {
    fn draw(&self, draw: &Draw, frame: &Frame);
}
