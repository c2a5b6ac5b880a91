//! Bottom status bar: model version and request activity.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;
use protocol::{PadState, RequestState};

/// Status bar under the pad.
#[component]
pub fn StatusBar() -> impl IntoView {
    let pad = expect_context::<RwSignal<PadState>>();

    let version = move || format_version(pad.with(|p| p.model_version.clone()));
    let activity = move || activity_label(pad.with(|p| p.request));
    let activity_class = move || activity_class(pad.with(|p| p.request.is_pending()));

    view! {
        <div class="status-bar">
            <span class="status-bar__item">{version}</span>
            <span class="status-bar__divider"></span>
            <span class=activity_class>{activity}</span>
        </div>
    }
}

fn format_version(version: Option<String>) -> String {
    version.map_or_else(|| "Model version: ...".to_owned(), |v| format!("Model version: {v}"))
}

fn activity_class(pending: bool) -> &'static str {
    if pending { "status-bar__item status-bar__item--loading" } else { "status-bar__item" }
}

fn activity_label(request: RequestState) -> String {
    match request {
        RequestState::Idle => "Ready".to_owned(),
        RequestState::Pending(_) => "Loading...".to_owned(),
        RequestState::Succeeded(op) => format!("{op} done"),
        RequestState::Failed(op) => format!("{op} failed"),
    }
}
