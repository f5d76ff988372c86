//! Shared helpers for benchmarks

use documint_layout::messages::{Msg, ViewportMsg};
use documint_layout::model::{AppModel, Rect};
use documint_layout::update::update;

/// Desktop model with a 1920px wide layout area
#[allow(dead_code)]
pub fn make_model() -> AppModel {
    let mut model = AppModel::default();
    update(
        &mut model,
        Msg::Viewport(ViewportMsg::SetContainer(Rect::new(0.0, 0.0, 1920.0, 1080.0))),
    );
    update(&mut model, Msg::resize(1920.0));
    model
}
