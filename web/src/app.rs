//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use protocol::PadState;

use crate::components::canvas_host::PadCanvas;
use crate::components::help_modal::HelpModal;
use crate::components::result_panel::ResultPanel;
use crate::components::status_bar::StatusBar;
use crate::components::toolbar::Toolbar;
use crate::net::requests;
use crate::state::config::PadConfig;
use crate::state::drawing::DrawingState;

/// Root application component.
///
/// Provides the pad, drawing, and config contexts, loads the model version
/// once, and lays out the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let pad = RwSignal::new(PadState::default());
    let drawing = RwSignal::new(DrawingState::default());
    let config = RwSignal::new(PadConfig::from_build_env());

    provide_context(pad);
    provide_context(drawing);
    provide_context(config);

    requests::load_version(pad, config);

    let show_help = move || pad.with(|p| p.show_help);
    let on_close_help = Callback::new(move |()| pad.update(PadState::close_help));

    view! {
        <Title text="Symbol Pad"/>
        <div class="container">
            <PadCanvas/>
            <Toolbar/>
            <ResultPanel/>
            <StatusBar/>
            <Show when=show_help>
                <HelpModal on_close=on_close_help/>
            </Show>
        </div>
    }
}
