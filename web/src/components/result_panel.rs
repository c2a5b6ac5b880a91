//! Prediction line, last notice, and the optional correction panel.

#[cfg(test)]
#[path = "result_panel_test.rs"]
mod result_panel_test;

use leptos::prelude::*;
use protocol::symbols::{self, SYMBOLS};
use protocol::{Notice, NoticeKind, PadState};

use crate::net::requests;
use crate::state::config::PadConfig;
use crate::state::drawing::DrawingState;

/// "Symbol is: X" and any notice from the last request.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let pad = expect_context::<RwSignal<PadState>>();
    let config = expect_context::<RwSignal<PadConfig>>();

    let result_line = move || pad.with(PadState::result_line);
    let notice = move || pad.with(|p| p.notice.clone());
    let show_correction = move || config.with(|c| c.corrections_enabled) && pad.with(|p| p.show_correction);

    view! {
        <div class="result-panel">
            {move || result_line().map(|line| view! { <div class="result-panel__output">{line}</div> })}
            {move || {
                notice().map(|n| {
                    let class_name = notice_class(&n);
                    view! { <div class=class_name role="status">{n.text}</div> }
                })
            }}
            <Show when=show_correction>
                <CorrectionPanel/>
            </Show>
        </div>
    }
}

/// Confirm or correct the prediction, save it, and optionally retrain.
#[component]
fn CorrectionPanel() -> impl IntoView {
    let pad = expect_context::<RwSignal<PadState>>();
    let drawing = expect_context::<RwSignal<DrawingState>>();
    let config = expect_context::<RwSignal<PadConfig>>();

    let selected = move || pad.with(|p| p.selected_symbol.clone());
    let busy = move || !pad.with(PadState::inputs_enabled);
    let cannot_save = move || !pad.with(PadState::can_save);

    let on_select = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        pad.update(|p| p.select_symbol(&code));
    };
    let on_save = move |_| requests::save(pad, drawing, config);
    let on_retrain = move |_| requests::retrain(pad, config);

    view! {
        <div class="correction-panel">
            <p>"Was it correct? If not, select the correct symbol and click save to add to training data."</p>
            <label for="symbol-select">"Select Symbol: "</label>
            <select id="symbol-select" on:change=on_select prop:value=selected prop:disabled=busy>
                <option value="">"--Select--"</option>
                {move || {
                    uncatalogued(&selected()).map(|code| view! { <option value=code.clone()>{code.clone()}</option> })
                }}
                {SYMBOLS
                    .iter()
                    .map(|symbol| view! { <option value=symbol.code>{symbol.name}</option> })
                    .collect_view()}
            </select>
            <button class="btn correction-panel__save" on:click=on_save prop:disabled=cannot_save>
                "Save"
            </button>
            <p class="correction-panel__info">
                "You can retrain the model to improve accuracy with the latest data. This is recommended after adding a significant number of new samples."
            </p>
            <button class="btn correction-panel__retrain" on:click=on_retrain prop:disabled=busy>
                "Re-Train Model"
            </button>
        </div>
    }
}

/// A selected label the catalog does not list, offered as its own option so
/// the select shows what Save would send.
fn uncatalogued(selected: &str) -> Option<String> {
    let code = selected.trim();
    (!code.is_empty() && symbols::find(selected).is_none()).then(|| selected.to_owned())
}

fn notice_class(notice: &Notice) -> &'static str {
    match notice.kind {
        NoticeKind::Info => "result-panel__notice",
        NoticeKind::Error => "result-panel__notice result-panel__notice--error",
    }
}
