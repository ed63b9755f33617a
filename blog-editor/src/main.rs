use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

use blog_editor::EditorView;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    info!("API base: {:?}", blog_editor::config().api_base);
    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        EditorView {}
    }
}
