//! Markdown insertion helpers (no RSX, no signals)
//!
//! Offsets in this module are byte offsets into the content string. The
//! textarea reports UTF-16 offsets; convert with [`utf16_to_byte`] and
//! [`byte_to_utf16`] at the DOM boundary.

/// Toolbar formatting actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    H1,
    H2,
    H3,
    Bold,
    Italic,
    Strikethrough,
    Link,
    Image,
    Upload,
    Code,
    CodeBlock,
    Quote,
    UnorderedList,
    OrderedList,
    HorizontalRule,
}

impl ToolbarAction {
    /// Every action in toolbar order
    pub const ALL: [ToolbarAction; 15] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::Bold,
        Self::Italic,
        Self::Strikethrough,
        Self::Link,
        Self::Image,
        Self::Upload,
        Self::Code,
        Self::CodeBlock,
        Self::Quote,
        Self::UnorderedList,
        Self::OrderedList,
        Self::HorizontalRule,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Strikethrough => "S",
            Self::Link => "Link",
            Self::Image => "Img",
            Self::Upload => "Upload",
            Self::Code => "`",
            Self::CodeBlock => "```",
            Self::Quote => "\u{201c}",
            Self::UnorderedList => "\u{2022}",
            Self::OrderedList => "1.",
            Self::HorizontalRule => "\u{2014}",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Self::H1 => "Heading 1",
            Self::H2 => "Heading 2",
            Self::H3 => "Heading 3",
            Self::Bold => "Bold (Ctrl+B)",
            Self::Italic => "Italic (Ctrl+I)",
            Self::Strikethrough => "Strikethrough (Ctrl+Shift+S)",
            Self::Link => "Link (Ctrl+K)",
            Self::Image => "Image",
            Self::Upload => "Upload image",
            Self::Code => "Inline code (Ctrl+`)",
            Self::CodeBlock => "Code block (Ctrl+Shift+`)",
            Self::Quote => "Quote (Ctrl+Shift+Q)",
            Self::UnorderedList => "Bullet list",
            Self::OrderedList => "Numbered list",
            Self::HorizontalRule => "Horizontal rule",
        }
    }

    /// Actions past this point are folded away on narrow screens.
    pub fn is_secondary(self) -> bool {
        matches!(
            self,
            Self::CodeBlock
                | Self::Quote
                | Self::UnorderedList
                | Self::OrderedList
                | Self::HorizontalRule
        )
    }
}

/// Selection range, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Clamp to `text` and snap both ends back onto char boundaries.
    pub fn clamp_to(self, text: &str) -> Self {
        let snap = |mut pos: usize| {
            pos = pos.min(text.len());
            while !text.is_char_boundary(pos) {
                pos -= 1;
            }
            pos
        };
        let (a, b) = (snap(self.start), snap(self.end));
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }
}

/// Result of a text edit: new content plus where the caret goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub content: String,
    pub caret: usize,
}

/// Replace `selection` with `replacement`, caret after the inserted text.
pub fn splice(text: &str, selection: Selection, replacement: &str) -> TextEdit {
    let sel = selection.clamp_to(text);
    let mut content = String::with_capacity(text.len() + replacement.len());
    content.push_str(&text[..sel.start]);
    content.push_str(replacement);
    content.push_str(&text[sel.end..]);
    TextEdit {
        content,
        caret: sel.start + replacement.len(),
    }
}

/// Insert at the caret without consuming the selection.
pub fn insert_at(text: &str, pos: usize, insertion: &str) -> TextEdit {
    splice(text, Selection::caret(pos), insertion)
}

/// Apply a toolbar action. Returns `None` for actions that don't edit text.
pub fn apply_action(text: &str, selection: Selection, action: ToolbarAction) -> Option<TextEdit> {
    let sel = selection.clamp_to(text);
    let selected = &text[sel.start..sel.end];
    let has_sel = !selected.is_empty();

    // (replacement, bytes to step back from the end of it)
    let wrap = |prefix: &str, placeholder: &str, suffix: &str| {
        if has_sel {
            (format!("{prefix}{selected}{suffix}"), 0)
        } else {
            (
                format!("{prefix}{placeholder}{suffix}"),
                placeholder.len() + suffix.len(),
            )
        }
    };

    let (replacement, back) = match action {
        ToolbarAction::H1 => wrap("# ", "Heading 1", ""),
        ToolbarAction::H2 => wrap("## ", "Heading 2", ""),
        ToolbarAction::H3 => wrap("### ", "Heading 3", ""),
        ToolbarAction::Bold => wrap("**", "bold text", "**"),
        ToolbarAction::Italic => wrap("*", "italic text", "*"),
        ToolbarAction::Strikethrough => wrap("~~", "strikethrough", "~~"),
        ToolbarAction::Link => {
            let label = if has_sel { selected } else { "link text" };
            (format!("[{label}](url)"), 1)
        }
        ToolbarAction::Image => {
            if has_sel {
                (format!("![{selected}](image-url)"), 1)
            } else {
                ("![alt text](image-url)".to_string(), "image-url)".len())
            }
        }
        ToolbarAction::Upload => return None,
        ToolbarAction::Code => wrap("`", "code", "`"),
        ToolbarAction::CodeBlock => wrap("```\n", "code here", "\n```"),
        ToolbarAction::Quote => wrap("> ", "quote", ""),
        ToolbarAction::UnorderedList => {
            if has_sel {
                let lines: Vec<String> = selected.split('\n').map(|l| format!("- {l}")).collect();
                (lines.join("\n"), 0)
            } else {
                ("- list item".to_string(), "list item".len())
            }
        }
        ToolbarAction::OrderedList => {
            if has_sel {
                let lines: Vec<String> = selected
                    .split('\n')
                    .enumerate()
                    .map(|(i, l)| format!("{}. {l}", i + 1))
                    .collect();
                (lines.join("\n"), 0)
            } else {
                ("1. list item".to_string(), "list item".len())
            }
        }
        ToolbarAction::HorizontalRule => ("\n---\n".to_string(), 0),
    };

    let mut edit = splice(text, sel, &replacement);
    edit.caret -= back;
    Some(edit)
}

/// Byte offset of the UTF-16 offset `index` (clamped to the end).
pub fn utf16_to_byte(text: &str, index: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units >= index {
            return byte;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// UTF-16 offset of the byte offset `byte`.
pub fn byte_to_utf16(text: &str, byte: usize) -> usize {
    let end = Selection::caret(byte).clamp_to(text).start;
    text[..end].encode_utf16().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
        }
    }

    pub fn words_label(&self) -> String {
        plural(self.words, "word")
    }

    pub fn chars_label(&self) -> String {
        plural(self.chars, "character")
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
