//! Thành phần giao diện BloodCheck cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::styles;
    use bloodcheck_core::{
        AggregateCounts, AnalyteDefinition, AnalyteStatus, ProfileId, SexCategory, StatusCategory,
        ViewState,
    };
    use bloodcheck_panel::{
        build_report, evaluate_view, format_reference, render_report_text, ReferenceCatalog,
    };
    use chrono::{DateTime, Utc};
    use serde::Deserialize;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, HtmlInputElement, HtmlSelectElement, Window};
    use yew::events::{Event, InputEvent};
    use yew::prelude::*;
    use yew::TargetCast;

    #[derive(Deserialize, Default)]
    struct InitialSelection {
        #[serde(default)]
        profile: Option<String>,
        #[serde(default)]
        sex: Option<String>,
    }

    #[derive(Properties, PartialEq)]
    pub struct PanelViewProps {
        pub initial: ViewState,
    }

    #[function_component(PanelView)]
    fn panel_view(props: &PanelViewProps) -> Html {
        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let view = use_state(|| props.initial.clone());
        let show_report = use_state(|| false);

        let catalog = ReferenceCatalog::standard();
        let state = (*view).clone();
        let profile = catalog.profile(state.profile);
        let evaluation = evaluate_view(&catalog, &state);

        let on_profile = {
            let view = view.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                if let Ok(profile) = ProfileId::from_key(&select.value()) {
                    let mut next = (*view).clone();
                    next.switch_profile(profile);
                    view.set(next);
                }
            })
        };

        let on_sex = {
            let view = view.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                let mut next = (*view).clone();
                next.switch_sex(SexCategory::from_key(&select.value()));
                view.set(next);
            })
        };

        let on_toggle_report = {
            let show_report = show_report.clone();
            Callback::from(move |_| show_report.set(!*show_report))
        };

        let report_panel = if *show_report {
            render_report_panel(&catalog, &state)
        } else {
            Html::default()
        };

        html! {
            <div class="panel-root">
                <header class="panel-header">
                    <span class="panel-eyebrow">{"Blood panel"}</span>
                    <h2>{"BloodCheck"}</h2>
                    <p>{"Enter measured values and compare them against the reference ranges of the selected profile."}</p>
                </header>
                <section class="panel-controls">
                    <label class="control-group">
                        <span class="control-label">{"Profile"}</span>
                        <select class="control-select" onchange={on_profile} aria-label="Chọn hồ sơ xét nghiệm">
                            { render_profile_options(&catalog, state.profile) }
                        </select>
                    </label>
                    <label class="control-group">
                        <span class="control-label">{"Sex"}</span>
                        <select class="control-select" onchange={on_sex} aria-label="Chọn giới tính tham chiếu">
                            { render_sex_options(state.sex) }
                        </select>
                    </label>
                    <button type="button" class="report-toggle" onclick={on_toggle_report}>
                        { if *show_report { "Hide report" } else { "Show report" } }
                    </button>
                </section>
                <section class="value-list" aria-live="polite">
                    {
                        for profile
                            .analytes
                            .iter()
                            .zip(evaluation.rows())
                            .map(|(analyte, status)| render_value_row(analyte, status, &state, view.clone()))
                    }
                </section>
                { render_summary(&evaluation.counts) }
                { report_panel }
            </div>
        }
    }

    fn render_profile_options(catalog: &ReferenceCatalog, selected: ProfileId) -> Html {
        html! {
            for catalog.profiles().iter().map(|profile| {
                html! {
                    <option value={profile.id.key()} selected={profile.id == selected}>
                        { profile.label.clone() }
                    </option>
                }
            })
        }
    }

    fn render_sex_options(selected: SexCategory) -> Html {
        html! {
            for [SexCategory::Male, SexCategory::Female].into_iter().map(|sex| {
                html! {
                    <option value={sex.key()} selected={sex == selected}>
                        { sex.display_label() }
                    </option>
                }
            })
        }
    }

    fn render_value_row(
        analyte: &AnalyteDefinition,
        status: &AnalyteStatus,
        current: &ViewState,
        view: UseStateHandle<ViewState>,
    ) -> Html {
        let key = analyte.key.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*view).clone();
            next.set_value(&key, &input.value());
            view.set(next);
        });

        let interval = analyte.reference.interval_for(current.sex);

        html! {
            <div class="value-row">
                <div class="value-info">
                    <span class="label">{ analyte.name.clone() }</span>
                    <small class="reference-hint">
                        { format!("Reference: {}", format_reference(interval, &analyte.unit)) }
                    </small>
                </div>
                <div class="value-input">
                    <input
                        class="input"
                        type="number"
                        step="any"
                        placeholder="Enter value"
                        value={current.value_of(&analyte.key).to_string()}
                        oninput={oninput}
                        aria-label={format!("Measured value for {}", analyte.name)}
                    />
                </div>
                <div class="value-status">
                    <span class={classes!("badge", status_level(status.result.category))}>
                        { status.result.label.clone() }
                    </span>
                </div>
                <p class="description">{ analyte.description.clone() }</p>
            </div>
        }
    }

    fn render_summary(counts: &AggregateCounts) -> Html {
        let segments = [
            (counts.low, "low", "Too low"),
            (counts.normal, "normal", "Normal"),
            (counts.high, "high", "Too high"),
        ];

        html! {
            <section class="summary-card">
                <header>
                    <h3>{"Status overview"}</h3>
                    <span class="summary-total">{ format!("{} analytes", counts.total()) }</span>
                </header>
                <div class="summary-bar" role="img" aria-label="Tỉ lệ chỉ số theo nhóm phân loại">
                    {
                        for segments.iter().map(|(count, level, _)| html! {
                            <span
                                class="summary-segment"
                                data-level={*level}
                                style={format!("flex-grow: {count}")}
                            ></span>
                        })
                    }
                </div>
                <ul class="summary-chips">
                    {
                        for segments.iter().map(|(count, level, label)| html! {
                            <li class="summary-chip" data-level={*level}>
                                <span class="summary-chip-label">{ *label }</span>
                                <span class="summary-chip-count">{ *count }</span>
                            </li>
                        })
                    }
                </ul>
            </section>
        }
    }

    fn render_report_panel(catalog: &ReferenceCatalog, view: &ViewState) -> Html {
        let report = build_report(catalog, view);
        let caption = format!("Generated {}", format_timestamp(report.generated_at));

        html! {
            <section class="report-card">
                <header>
                    <h3>{"Report preview"}</h3>
                    <span class="report-timestamp">{ caption }</span>
                </header>
                <pre class="report-text">{ render_report_text(&report) }</pre>
            </section>
        }
    }

    fn format_timestamp(timestamp: DateTime<Utc>) -> String {
        timestamp.format("%d.%m.%Y, %H:%M").to_string()
    }

    fn status_level(category: StatusCategory) -> &'static str {
        match category {
            StatusCategory::Low => "low",
            StatusCategory::Normal => "normal",
            StatusCategory::High => "high",
        }
    }

    #[wasm_bindgen]
    pub fn mount_panel_view(selector: &str, initial: JsValue) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let selection: InitialSelection = if initial.is_undefined() || initial.is_null() {
            InitialSelection::default()
        } else {
            from_value(initial)?
        };

        let profile = match selection.profile {
            Some(key) => ProfileId::from_key(&key)
                .map_err(|err| JsValue::from_str(&format!("Panel error: {err}")))?,
            None => ProfileId::Basic,
        };
        let sex = SexCategory::from_key(selection.sex.as_deref().unwrap_or_default());

        let initial = ViewState::new(profile, sex);

        yew::Renderer::<PanelView>::with_root_and_props(target, PanelViewProps { initial })
            .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_panel_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_panel_view(_: &str, _: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "bloodcheck-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
