//! Modal listing the symbols the model recognizes.

use leptos::prelude::*;
use protocol::symbols::help_entries;

/// Fullscreen modal with the drawable-symbol table.
#[component]
pub fn HelpModal(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="help-modal__backdrop" on:click=on_backdrop>
            <div class="help-modal" on:click=move |ev| ev.stop_propagation() on:keydown=move |ev| on_keydown.run(ev) tabindex="0">
                <button class="help-modal__close" on:click=on_close_click title="Close help">
                    "\u{d7}"
                </button>
                <table class="help-modal__table">
                    <thead>
                        <tr>
                            <th>"Symbols You can draw"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {help_entries()
                            .map(|symbol| view! { <tr><td>{symbol.name}</td></tr> })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
