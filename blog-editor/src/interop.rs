use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{window, BeforeUnloadEvent, HtmlTextAreaElement, KeyboardEvent};

use crate::format::{byte_to_utf16, utf16_to_byte, Selection};
use crate::shortcuts::{resolve, KeyPress, Shortcut};

pub const UNSAVED_WARNING: &str = "You have unsaved changes. Are you sure you want to leave?";

fn textarea(id: &str) -> Option<HtmlTextAreaElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlTextAreaElement>()
        .ok()
}

/// Current selection of textarea `id` as byte offsets into its value.
pub fn textarea_selection(id: &str) -> Option<Selection> {
    let el = textarea(id)?;
    let value = el.value();
    let start = el.selection_start().ok()??;
    let end = el.selection_end().ok()??;
    Some(Selection {
        start: utf16_to_byte(&value, start as usize),
        end: utf16_to_byte(&value, end as usize),
    })
}

/// Focus textarea `id` and put the caret at byte offset `caret` of `content`.
pub fn place_caret(id: &str, content: &str, caret: usize) {
    let Some(el) = textarea(id) else {
        return;
    };
    let pos = byte_to_utf16(content, caret) as u32;
    let _ = el.focus();
    if let Err(e) = el.set_selection_range(pos, pos) {
        dioxus_logger::tracing::debug!("set_selection_range failed: {:?}", e);
    }
}

pub fn focus_element(id: &str) {
    let el = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = el {
        let _ = el.focus();
    }
}

pub fn active_element_id() -> Option<String> {
    let id = window()?.document()?.active_element()?.id();
    (!id.is_empty()).then_some(id)
}

/// Intercepts `beforeunload` while armed.
///
/// Browsers show their own wording; the message is only a hint. The listener
/// is removed on drop.
pub struct UnloadGuard {
    armed: Rc<Cell<bool>>,
    listener: Option<Closure<dyn FnMut(BeforeUnloadEvent)>>,
}

impl UnloadGuard {
    pub fn install() -> Self {
        let armed = Rc::new(Cell::new(false));
        let flag = armed.clone();
        let listener = Closure::wrap(Box::new(move |e: BeforeUnloadEvent| {
            if flag.get() {
                e.prevent_default();
                e.set_return_value(UNSAVED_WARNING);
            }
        }) as Box<dyn FnMut(BeforeUnloadEvent)>);

        let attached = window()
            .map(|w| {
                w.add_event_listener_with_callback(
                    "beforeunload",
                    listener.as_ref().unchecked_ref(),
                )
                .is_ok()
            })
            .unwrap_or(false);
        if !attached {
            dioxus_logger::tracing::warn!("Could not attach beforeunload listener");
        }

        Self {
            armed,
            listener: attached.then_some(listener),
        }
    }

    pub fn set_armed(&self, armed: bool) {
        self.armed.set(armed);
    }
}

impl Drop for UnloadGuard {
    fn drop(&mut self) {
        if let (Some(listener), Some(w)) = (self.listener.take(), window()) {
            let _ = w.remove_event_listener_with_callback(
                "beforeunload",
                listener.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Shortcut for a keydown, given which element currently has focus.
pub fn shortcut_for(e: &KeyboardEvent, editor_id: &str) -> Option<Shortcut> {
    let key = e.key();
    resolve(KeyPress {
        key: &key,
        command: e.ctrl_key() || e.meta_key(),
        shift: e.shift_key(),
        in_editor: active_element_id().as_deref() == Some(editor_id),
    })
}

/// Document-level `keydown` listener, so shortcuts work even when focus is
/// on `<body>`. A matched shortcut has its browser default suppressed before
/// it is handed to `on_shortcut`. The listener is removed on drop.
pub struct ShortcutListener {
    listener: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl ShortcutListener {
    pub fn install(editor_id: &'static str, mut on_shortcut: impl FnMut(Shortcut) + 'static) -> Self {
        let listener = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if let Some(shortcut) = shortcut_for(&e, editor_id) {
                e.prevent_default();
                on_shortcut(shortcut);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let attached = window()
            .and_then(|w| w.document())
            .map(|d| {
                d.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                    .is_ok()
            })
            .unwrap_or(false);
        if !attached {
            dioxus_logger::tracing::warn!("Could not attach keydown listener");
        }

        Self {
            listener: attached.then_some(listener),
        }
    }
}

impl Drop for ShortcutListener {
    fn drop(&mut self) {
        let document = window().and_then(|w| w.document());
        if let (Some(listener), Some(d)) = (self.listener.take(), document) {
            let _ = d.remove_event_listener_with_callback(
                "keydown",
                listener.as_ref().unchecked_ref(),
            );
        }
    }
}
