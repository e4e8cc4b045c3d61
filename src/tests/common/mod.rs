pub mod mocks;

use dioxus::prelude::*;

pub fn setup() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Renders `app` to HTML after the first rebuild.
pub fn render(app: fn() -> Element) -> String {
    setup();
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
