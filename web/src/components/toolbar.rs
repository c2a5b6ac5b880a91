//! Proceed / Clear / Help buttons under the pad.

use leptos::prelude::*;
use protocol::PadState;

use crate::net::requests;
use crate::state::config::PadConfig;
use crate::state::drawing::DrawingState;

/// Button row. Every button is disabled while a request is pending.
#[component]
pub fn Toolbar() -> impl IntoView {
    let pad = expect_context::<RwSignal<PadState>>();
    let drawing = expect_context::<RwSignal<DrawingState>>();
    let config = expect_context::<RwSignal<PadConfig>>();

    let disabled = move || !pad.with(PadState::inputs_enabled);

    let on_proceed = move |_| requests::classify(pad, drawing, config);
    let on_clear = move |_| {
        let mut cleared = false;
        pad.update(|p| cleared = p.clear());
        if cleared {
            drawing.update(DrawingState::request_clear);
        }
    };
    let on_help = move |_| pad.update(PadState::open_help);

    view! {
        <div class="toolbar">
            <button class="btn toolbar__proceed" on:click=on_proceed prop:disabled=disabled>
                "Proceed"
            </button>
            <button class="btn toolbar__clear" on:click=on_clear prop:disabled=disabled>
                "Clear"
            </button>
            <button class="btn toolbar__help" on:click=on_help prop:disabled=disabled>
                "Help"
            </button>
        </div>
    }
}
