pub mod editor;
pub mod notification;

pub use editor::{EditorHandle, EditorView};
pub use notification::{Notification, NotificationKind, Toast};
