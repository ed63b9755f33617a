//! Formatting toolbar

use dioxus::prelude::*;

use crate::format::ToolbarAction;

#[component]
pub fn Toolbar(on_action: Callback<ToolbarAction>) -> Element {
    let mut expanded = use_signal(|| false);
    let class = if expanded() { "toolbar expanded" } else { "toolbar" };

    rsx! {
        div {
            class: "{class}",
            role: "toolbar",
            for action in ToolbarAction::ALL {
                button {
                    key: "{action.tooltip()}",
                    class: if action.is_secondary() { "toolbar-btn secondary" } else { "toolbar-btn" },
                    title: "{action.tooltip()}",
                    // Keep focus (and selection) in the textarea
                    onmousedown: move |e| e.prevent_default(),
                    onclick: move |_| on_action.call(action),
                    "{action.label()}"
                }
            }
            button {
                class: "toolbar-btn toolbar-more",
                onclick: move |_| expanded.toggle(),
                if expanded() { "Less" } else { "More" }
            }
        }
    }
}
