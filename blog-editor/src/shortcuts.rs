//! Keyboard shortcut table

use crate::format::ToolbarAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
    TogglePreview,
    Format(ToolbarAction),
    /// Tab inside the editor inserts spaces instead of moving focus
    Indent,
}

/// What Tab inserts
pub const INDENT: &str = "    ";

/// Snapshot of a keydown event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress<'a> {
    /// `KeyboardEvent.key` ("s", "S", "`", "Tab", ...)
    pub key: &'a str,
    /// Ctrl on Linux/Windows, Cmd on macOS
    pub command: bool,
    pub shift: bool,
    /// Whether the editor textarea has focus
    pub in_editor: bool,
}

/// Resolve a keydown into a shortcut. Save and preview work anywhere; the
/// formatting keys only while the editor has focus.
pub fn resolve(press: KeyPress<'_>) -> Option<Shortcut> {
    let KeyPress {
        key,
        command,
        shift,
        in_editor,
    } = press;

    if command && !shift && key == "s" {
        return Some(Shortcut::Save);
    }
    if command && !shift && key == "p" {
        return Some(Shortcut::TogglePreview);
    }
    if !in_editor {
        return None;
    }

    if command {
        let action = match (key, shift) {
            ("b", false) => ToolbarAction::Bold,
            ("i", false) => ToolbarAction::Italic,
            ("k", false) => ToolbarAction::Link,
            ("S", true) => ToolbarAction::Strikethrough,
            ("`", false) => ToolbarAction::Code,
            // Shift+` reports "~" on most layouts
            ("`", true) | ("~", true) => ToolbarAction::CodeBlock,
            ("Q", true) => ToolbarAction::Quote,
            _ => return None,
        };
        return Some(Shortcut::Format(action));
    }

    (key == "Tab" && !shift).then_some(Shortcut::Indent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: &str, command: bool, shift: bool, in_editor: bool) -> Option<Shortcut> {
        resolve(KeyPress {
            key,
            command,
            shift,
            in_editor,
        })
    }

    #[test]
    fn save_and_preview_are_global() {
        assert_eq!(press("s", true, false, false), Some(Shortcut::Save));
        assert_eq!(press("p", true, false, false), Some(Shortcut::TogglePreview));
        assert_eq!(press("s", false, false, true), None);
    }

    #[test]
    fn shift_s_is_strikethrough_not_save() {
        assert_eq!(
            press("S", true, true, true),
            Some(Shortcut::Format(ToolbarAction::Strikethrough))
        );
        assert_eq!(press("S", true, true, false), None);
    }

    #[test]
    fn formatting_requires_editor_focus() {
        assert_eq!(
            press("b", true, false, true),
            Some(Shortcut::Format(ToolbarAction::Bold))
        );
        assert_eq!(press("b", true, false, false), None);
        assert_eq!(
            press("k", true, false, true),
            Some(Shortcut::Format(ToolbarAction::Link))
        );
    }

    #[test]
    fn backtick_variants() {
        assert_eq!(
            press("`", true, false, true),
            Some(Shortcut::Format(ToolbarAction::Code))
        );
        assert_eq!(
            press("~", true, true, true),
            Some(Shortcut::Format(ToolbarAction::CodeBlock))
        );
        assert_eq!(
            press("Q", true, true, true),
            Some(Shortcut::Format(ToolbarAction::Quote))
        );
    }

    #[test]
    fn tab_indents_only_in_editor() {
        assert_eq!(press("Tab", false, false, true), Some(Shortcut::Indent));
        assert_eq!(press("Tab", false, false, false), None);
        assert_eq!(press("Tab", false, true, true), None);
    }
}
