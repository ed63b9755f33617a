//! Tag chips and tag input

use dioxus::prelude::*;

#[component]
pub fn TagEditor(
    tags: Vec<String>,
    removing: Vec<String>,
    on_add: Callback<String>,
    on_remove: Callback<String>,
) -> Element {
    let mut input = use_signal(String::new);

    let mut commit = move || {
        let value = input();
        if !value.trim().is_empty() {
            on_add.call(value);
        }
        input.set(String::new());
    };

    rsx! {
        div {
            class: "tags-container",
            for tag in tags {
                span {
                    key: "{tag}",
                    class: if removing.contains(&tag) { "tag removing" } else { "tag" },
                    "{tag}"
                    button {
                        class: "tag-remove",
                        title: "Remove tag",
                        onclick: {
                            let tag = tag.clone();
                            move |_| on_remove.call(tag.clone())
                        },
                        "×"
                    }
                }
            }
            input {
                class: "tag-input",
                r#type: "text",
                placeholder: "Add tag and press Enter",
                value: "{input}",
                oninput: move |e| input.set(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        commit();
                    }
                },
            }
            button {
                class: "btn btn-small",
                onclick: move |_| commit(),
                "Add"
            }
        }
    }
}
