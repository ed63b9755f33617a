//! Editor styles

pub const EDITOR_STYLES: &str = r#"
:root {
    --bg: #f7f7f5;
    --panel-bg: #ffffff;
    --text-primary: #1f2328;
    --text-secondary: #57606a;
    --text-muted: #8c959f;
    --border-color: #d0d7de;
    --hover-bg: #f0f1f3;
    --accent-bg: #2f6feb;
    --accent-text: #ffffff;
    --success-bg: #1a7f37;
    --warning-bg: #bf8700;
    --danger-bg: #cf222e;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text-primary);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
}

/* ── Layout ── */
.editor-app {
    display: flex;
    flex-direction: column;
    height: 100vh;
}

.editor-header {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1rem;
    background: var(--panel-bg);
    border-bottom: 1px solid var(--border-color);
    flex-wrap: wrap;
}

.editor-header h1 {
    font-size: 1.125rem;
    margin: 0 auto 0 0;
}

.editor-meta {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    padding: 0.75rem 1rem;
    background: var(--panel-bg);
    border-bottom: 1px solid var(--border-color);
}

.title-input {
    font-size: 1.25rem;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border-color);
    border-radius: 0.375rem;
    width: 100%;
}

.title-input.error {
    border-color: var(--danger-bg);
    box-shadow: 0 0 0 2px rgba(207, 34, 46, 0.15);
}

.status-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.875rem;
}

.unsaved-indicator { color: var(--warning-bg); }
.autosave-badge { color: var(--text-secondary); font-size: 0.75rem; }

.editor-body {
    display: flex;
    flex: 1;
    min-height: 0;
}

.editor-pane, .preview-pane {
    flex: 1;
    display: flex;
    flex-direction: column;
    min-width: 0;
}

.preview-pane {
    border-left: 1px solid var(--border-color);
    background: var(--panel-bg);
    overflow: auto;
    padding: 1rem 1.5rem;
}

.preview-pane .empty { color: var(--text-muted); font-style: italic; }

.editor-textarea {
    flex: 1;
    resize: none;
    border: none;
    padding: 1rem;
    font-family: "SF Mono", Menlo, Consolas, monospace;
    font-size: 0.9375rem;
    line-height: 1.6;
    outline: none;
}

.editor-footer {
    display: flex;
    justify-content: flex-end;
    gap: 1rem;
    padding: 0.25rem 1rem;
    font-size: 0.75rem;
    color: var(--text-secondary);
    border-top: 1px solid var(--border-color);
    background: var(--panel-bg);
}

/* ── Buttons ── */
.btn {
    border: 1px solid var(--border-color);
    background: var(--panel-bg);
    color: var(--text-primary);
    padding: 0.375rem 0.75rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
    cursor: pointer;
}

.btn:disabled { opacity: 0.6; cursor: default; }
.btn-primary { background: var(--accent-bg); border-color: var(--accent-bg); color: var(--accent-text); }
.btn-secondary { background: transparent; color: var(--text-secondary); }
.btn-small { padding: 0.25rem 0.5rem; font-size: 0.75rem; }
.btn.active { background: var(--hover-bg); font-weight: 600; }

/* ── Toolbar ── */
.toolbar {
    display: flex;
    flex-wrap: wrap;
    gap: 0.25rem;
    padding: 0.375rem 0.5rem;
    border-bottom: 1px solid var(--border-color);
    background: var(--panel-bg);
}

.toolbar-btn {
    border: none;
    background: transparent;
    padding: 0.25rem 0.5rem;
    border-radius: 0.25rem;
    cursor: pointer;
    font-size: 0.8125rem;
}

.toolbar-btn:hover { background: var(--hover-bg); }
.toolbar-more { display: none; }

/* ── Tags ── */
.tags-container {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 0.375rem;
}

.tag {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.125rem 0.5rem;
    background: var(--hover-bg);
    border-radius: 999px;
    font-size: 0.8125rem;
    transition: opacity 0.2s, transform 0.2s;
}

.tag.removing { opacity: 0; transform: scale(0.8); }

.tag-remove {
    border: none;
    background: transparent;
    cursor: pointer;
    color: var(--text-secondary);
}

.tag-input {
    border: 1px solid var(--border-color);
    border-radius: 0.375rem;
    padding: 0.25rem 0.5rem;
    font-size: 0.8125rem;
}

/* ── Dialogs ── */
.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.4);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 100;
}

.confirm-overlay { z-index: 110; }

.modal {
    background: var(--panel-bg);
    border-radius: 0.5rem;
    padding: 1.25rem;
    width: min(90vw, 32rem);
    max-height: 80vh;
    overflow: auto;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
}

.modal-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 0.75rem;
}

.modal-header h3 { margin: 0; }

.modal-close {
    border: none;
    background: transparent;
    font-size: 1.25rem;
    cursor: pointer;
}

.modal-actions {
    display: flex;
    justify-content: flex-end;
    gap: 0.5rem;
}

.post-list { list-style: none; padding: 0; margin: 0 0 1rem 0; }

.post-item {
    display: flex;
    justify-content: space-between;
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid var(--border-color);
    cursor: pointer;
}

.post-item:hover { background: var(--hover-bg); }

.status-badge { font-size: 0.75rem; padding: 0.125rem 0.375rem; border-radius: 0.25rem; }
.status-badge.draft { background: #fff8c5; color: var(--warning-bg); }
.status-badge.published { background: #dafbe1; color: var(--success-bg); }

.upload-zone {
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 8rem;
    border: 2px dashed var(--border-color);
    border-radius: 0.5rem;
    color: var(--text-secondary);
    cursor: pointer;
}

.upload-zone.drag-over { border-color: var(--accent-bg); background: var(--hover-bg); }
.upload-status.success { color: var(--success-bg); }
.upload-status.error { color: var(--danger-bg); }

/* ── Notification toast ── */
.notification {
    position: fixed;
    right: 1rem;
    bottom: 1rem;
    display: flex;
    gap: 0.5rem;
    padding: 0.75rem 1rem;
    background: var(--panel-bg);
    border-left: 4px solid var(--border-color);
    border-radius: 0.375rem;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.15);
    transform: translateY(150%);
    transition: transform 0.25s;
    z-index: 200;
}

.notification.visible { transform: translateY(0); }
.notification.success { border-left-color: var(--success-bg); }
.notification.error { border-left-color: var(--danger-bg); }
.notification.warning { border-left-color: var(--warning-bg); }
.notification-title { font-weight: 600; font-size: 0.875rem; }
.notification-message { font-size: 0.8125rem; color: var(--text-secondary); }

@media (max-width: 768px) {
    .editor-body { flex-direction: column; }
    .preview-pane { border-left: none; border-top: 1px solid var(--border-color); }
    .toolbar-btn.secondary { display: none; }
    .toolbar.expanded .toolbar-btn.secondary { display: inline-block; }
    .toolbar-more { display: inline-block; }
}
"#;
