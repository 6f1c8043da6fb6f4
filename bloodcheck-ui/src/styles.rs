#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-bloodcheck-ui]";

/// Default CSS for the component along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --blood-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --blood-bg: #10131a;
  --blood-card-bg: #161b24;
  --blood-card-border: rgba(201, 166, 70, 0.25);
  --blood-radius: 16px;
  --blood-text: #e6e6e6;
  --blood-muted: #9aa3b2;
  --blood-heading: #f3f4f6;
  --blood-accent: #c9a646;
  --blood-accent-soft: rgba(201, 166, 70, 0.14);
  --blood-input-bg: #0c0f15;
  --blood-input-border: rgba(154, 163, 178, 0.35);
  --blood-low: #1d4ed8;
  --blood-low-bg: rgba(29, 78, 216, 0.22);
  --blood-low-text: #93b4fd;
  --blood-normal: #1faa59;
  --blood-normal-bg: rgba(31, 170, 89, 0.2);
  --blood-normal-text: #7fe0a7;
  --blood-high: #b91c1c;
  --blood-high-bg: rgba(185, 28, 28, 0.24);
  --blood-high-text: #f1a2a2;
}

.panel-root {
  font-family: var(--blood-font-family);
  background: var(--blood-bg);
  color: var(--blood-text);
  border-radius: var(--blood-radius);
  display: flex;
  flex-direction: column;
  gap: 22px;
  padding: 28px;
  border: 1px solid var(--blood-card-border);
  box-shadow: 0 24px 48px rgba(0, 0, 0, 0.35);
}

.panel-header {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.panel-eyebrow {
  text-transform: uppercase;
  letter-spacing: 0.12em;
  font-size: 0.72rem;
  color: var(--blood-accent);
  font-weight: 600;
}

.panel-header h2 {
  margin: 0;
  font-size: 1.35rem;
  color: var(--blood-heading);
}

.panel-header p {
  margin: 0;
  color: var(--blood-muted);
  font-size: 0.93rem;
}

.panel-controls {
  background: var(--blood-card-bg);
  border: 1px solid var(--blood-card-border);
  border-radius: calc(var(--blood-radius) - 6px);
  padding: 16px 18px;
  display: flex;
  flex-wrap: wrap;
  gap: 16px;
  align-items: flex-end;
}

.control-group {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.control-label {
  font-size: 0.78rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--blood-muted);
  font-weight: 600;
}

.control-select {
  background: var(--blood-input-bg);
  color: var(--blood-text);
  border: 1px solid var(--blood-input-border);
  border-radius: 10px;
  padding: 8px 12px;
  font-size: 0.92rem;
  min-width: 180px;
}

.control-select:focus-visible {
  outline: 2px solid var(--blood-accent-soft);
  border-color: var(--blood-accent);
}

.report-toggle {
  margin-left: auto;
  border: 1px solid var(--blood-card-border);
  background: var(--blood-accent-soft);
  color: var(--blood-accent);
  border-radius: 999px;
  padding: 8px 18px;
  font-size: 0.85rem;
  font-weight: 600;
  cursor: pointer;
  transition: background 120ms ease, color 120ms ease, transform 120ms ease;
}

.report-toggle:hover,
.report-toggle:focus-visible {
  background: rgba(201, 166, 70, 0.28);
  outline: none;
  transform: translateY(-1px);
}

.value-list {
  display: flex;
  flex-direction: column;
  gap: 14px;
}

.value-row {
  background: var(--blood-card-bg);
  border: 1px solid rgba(154, 163, 178, 0.18);
  border-radius: calc(var(--blood-radius) - 6px);
  padding: 16px 18px;
  display: grid;
  grid-template-columns: minmax(220px, 1.4fr) minmax(150px, 1fr) minmax(130px, auto);
  gap: 12px 18px;
  align-items: center;
}

.value-info {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.label {
  font-weight: 600;
  color: var(--blood-heading);
}

.reference-hint {
  color: var(--blood-muted);
  font-size: 0.82rem;
}

.value-input {
  display: flex;
}

.input {
  width: 100%;
  background: var(--blood-input-bg);
  color: var(--blood-text);
  border: 1px solid var(--blood-input-border);
  border-radius: 10px;
  padding: 9px 12px;
  font-size: 0.95rem;
  font-variant-numeric: tabular-nums;
}

.input::placeholder {
  color: rgba(154, 163, 178, 0.6);
}

.input:focus-visible {
  outline: 2px solid var(--blood-accent-soft);
  border-color: var(--blood-accent);
}

.value-status {
  display: flex;
  justify-content: flex-end;
}

.badge {
  font-size: 0.78rem;
  font-weight: 600;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  border-radius: 999px;
  padding: 5px 12px;
  white-space: nowrap;
}

.badge.low {
  background: var(--blood-low-bg);
  color: var(--blood-low-text);
  border: 1px solid var(--blood-low);
}

.badge.normal {
  background: var(--blood-normal-bg);
  color: var(--blood-normal-text);
  border: 1px solid var(--blood-normal);
}

.badge.high {
  background: var(--blood-high-bg);
  color: var(--blood-high-text);
  border: 1px solid var(--blood-high);
}

.description {
  grid-column: 1 / -1;
  margin: 0;
  color: var(--blood-muted);
  font-size: 0.86rem;
  line-height: 1.45;
  border-top: 1px dashed rgba(154, 163, 178, 0.2);
  padding-top: 8px;
}

.summary-card,
.report-card {
  background: var(--blood-card-bg);
  border: 1px solid var(--blood-card-border);
  border-radius: calc(var(--blood-radius) - 6px);
  padding: 18px;
  display: flex;
  flex-direction: column;
  gap: 14px;
}

.summary-card header,
.report-card header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 12px;
}

.summary-card header h3,
.report-card header h3 {
  margin: 0;
  font-size: 1rem;
  color: var(--blood-heading);
}

.summary-total,
.report-timestamp {
  font-size: 0.82rem;
  color: var(--blood-muted);
  background: rgba(154, 163, 178, 0.12);
  border-radius: 999px;
  padding: 3px 10px;
  font-variant-numeric: tabular-nums;
}

.summary-bar {
  display: flex;
  height: 14px;
  border-radius: 999px;
  overflow: hidden;
  border: 1px solid rgba(154, 163, 178, 0.25);
  background: var(--blood-input-bg);
}

.summary-segment {
  flex-basis: 0;
  transition: flex-grow 180ms ease;
}

.summary-segment[data-level="low"] {
  background: var(--blood-low);
}

.summary-segment[data-level="normal"] {
  background: var(--blood-normal);
}

.summary-segment[data-level="high"] {
  background: var(--blood-high);
}

.summary-chips {
  list-style: none;
  margin: 0;
  padding: 0;
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.summary-chip {
  display: flex;
  align-items: center;
  gap: 8px;
  border-radius: 999px;
  padding: 5px 12px;
  font-size: 0.8rem;
}

.summary-chip[data-level="low"] {
  background: var(--blood-low-bg);
  color: var(--blood-low-text);
}

.summary-chip[data-level="normal"] {
  background: var(--blood-normal-bg);
  color: var(--blood-normal-text);
}

.summary-chip[data-level="high"] {
  background: var(--blood-high-bg);
  color: var(--blood-high-text);
}

.summary-chip-label {
  font-weight: 600;
  letter-spacing: 0.04em;
  text-transform: uppercase;
}

.summary-chip-count {
  font-variant-numeric: tabular-nums;
  font-weight: 600;
}

.report-text {
  margin: 0;
  background: var(--blood-input-bg);
  border: 1px dashed rgba(154, 163, 178, 0.3);
  border-radius: 12px;
  padding: 14px 16px;
  font-size: 0.85rem;
  line-height: 1.55;
  color: var(--blood-text);
  overflow-x: auto;
  white-space: pre;
}

@media (max-width: 820px) {
  .value-row {
    grid-template-columns: 1fr;
  }

  .value-status {
    justify-content: flex-start;
  }

  .report-toggle {
    margin-left: 0;
    width: 100%;
  }

  .panel-controls {
    align-items: stretch;
    flex-direction: column;
  }

  .control-select {
    min-width: 0;
    width: 100%;
  }
}

@media (max-width: 560px) {
  .panel-root {
    padding: 18px;
  }

  .summary-card header,
  .report-card header {
    flex-direction: column;
    align-items: flex-start;
    gap: 6px;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-bloodcheck-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
