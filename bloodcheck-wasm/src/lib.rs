//! Bridge WASM <-> JavaScript trung lập framework cho lõi đánh giá panel máu.

use std::collections::HashMap;

use bloodcheck_core::{PanelError, ProfileId, SexCategory, ViewState};
use bloodcheck_panel::{build_report, evaluate_view, render_report_text, ReferenceCatalog};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsPanelState {
    profile: String,
    #[serde(default)]
    sex: Option<String>,
    #[serde(default)]
    values: Option<HashMap<String, String>>,
}

impl JsPanelState {
    fn into_view(self) -> Result<ViewState, PanelError> {
        let profile = ProfileId::from_key(&self.profile)?;
        // Thiếu hoặc sai key giới tính rơi về male theo chính sách dự phòng.
        let sex = SexCategory::from_key(self.sex.as_deref().unwrap_or_default());
        let mut view = ViewState::new(profile, sex);
        if let Some(values) = self.values {
            view.values = values;
        }
        Ok(view)
    }
}

#[wasm_bindgen]
pub fn evaluate_panel(state: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let view = parse_state(state)?;
    let catalog = ReferenceCatalog::standard();

    to_value(&evaluate_view(&catalog, &view))
        .map_err(|err| JsValue::from_str(&format!("Không serialize kết quả: {err}")))
}

#[wasm_bindgen]
pub fn panel_report(state: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let view = parse_state(state)?;
    let catalog = ReferenceCatalog::standard();

    to_value(&build_report(&catalog, &view))
        .map_err(|err| JsValue::from_str(&format!("Không serialize báo cáo: {err}")))
}

#[wasm_bindgen]
pub fn panel_report_text(state: JsValue) -> Result<String, JsValue> {
    install_panic_hook();

    let view = parse_state(state)?;
    let catalog = ReferenceCatalog::standard();

    Ok(render_report_text(&build_report(&catalog, &view)))
}

#[wasm_bindgen]
pub fn reference_profiles() -> Result<JsValue, JsValue> {
    install_panic_hook();

    let catalog = ReferenceCatalog::standard();

    to_value(catalog.profiles())
        .map_err(|err| JsValue::from_str(&format!("Không serialize catalog: {err}")))
}

fn parse_state(state: JsValue) -> Result<ViewState, JsValue> {
    let state: JsPanelState = from_value(state)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được trạng thái panel: {err}")))?;

    state
        .into_view()
        .map_err(|err| JsValue::from_str(&format_panel_error(err)))
}

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn format_panel_error(err: PanelError) -> String {
    format!("Panel error: {err}")
}
