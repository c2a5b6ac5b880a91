//! Bridge component between the Leptos UI and the imperative `surface::engine::Surface`.
//!
//! ARCHITECTURE
//! ============
//! The surface crate owns the bitmap, the coordinate mapping, and the pen.
//! This host forwards pointer events in client coordinates, blits after any
//! change, and publishes the encoded bitmap to `DrawingState` when a stroke
//! ends so the controls can submit it without touching the surface.

use leptos::prelude::*;
use protocol::PadState;
use surface::consts::{DISPLAY_SIZE_PX, LOGICAL_HEIGHT, LOGICAL_WIDTH};

use crate::state::drawing::DrawingState;

#[cfg(test)]
#[path = "canvas_host_test.rs"]
mod canvas_host_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use surface::engine::{Action, Surface};
#[cfg(feature = "csr")]
use surface::geometry::Point;
#[cfg(feature = "csr")]
use surface::input::Button;

/// On-screen box; the canvas scales its logical bitmap into it. No border or
/// padding, so the bounding rect is exactly the drawable area.
fn display_style() -> String {
    format!(
        "width: {DISPLAY_SIZE_PX}px; height: {DISPLAY_SIZE_PX}px; outline: 1px solid black; image-rendering: pixelated; touch-action: none;"
    )
}

#[cfg(feature = "csr")]
fn client_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "csr")]
fn render(surface: &Surface) {
    if let Err(e) = surface.render() {
        log::warn!("surface render failed: {e:?}");
    }
}

#[cfg(feature = "csr")]
fn apply(action: Action, surface: &Surface) {
    if action.needs_render() {
        render(surface);
    }
}

#[cfg(feature = "csr")]
fn publish(surface: &Surface, drawing: RwSignal<DrawingState>) {
    match surface.export_encoded() {
        Ok(image) => {
            let has_ink = !surface.core.is_blank();
            drawing.update(|d| d.publish(image, has_ink));
        }
        Err(e) => log::warn!("surface export failed: {e}"),
    }
}

fn canvas_class(inputs_enabled: bool) -> &'static str {
    if inputs_enabled { "pad-canvas" } else { "pad-canvas pad-canvas--busy" }
}

/// Canvas host component.
///
/// On mount this binds a `Surface` to the `<canvas>`, paints it blank, and
/// publishes the blank export. Input is ignored while a request is pending.
#[component]
pub fn PadCanvas() -> impl IntoView {
    let pad = expect_context::<RwSignal<PadState>>();
    let drawing = expect_context::<RwSignal<DrawingState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let surface = Rc::new(RefCell::new(None::<Surface>));

    #[cfg(feature = "csr")]
    {
        let surface = Rc::clone(&surface);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if surface.borrow().is_some() {
                return;
            }
            let instance = Surface::new(canvas);
            render(&instance);
            publish(&instance, drawing);
            *surface.borrow_mut() = Some(instance);
        });
    }

    #[cfg(feature = "csr")]
    {
        let surface = Rc::clone(&surface);
        Effect::new(move |prev: Option<u64>| {
            let seq = drawing.with(|d| d.clear_seq);
            if prev.is_some_and(|p| p != seq) {
                if let Some(instance) = surface.borrow_mut().as_mut() {
                    apply(instance.clear(), instance);
                    publish(instance, drawing);
                }
            }
            seq
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let surface = Rc::clone(&surface);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if !pad.with_untracked(PadState::inputs_enabled) {
                    return;
                }
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                pad.update(PadState::touch);
                if let Some(instance) = surface.borrow_mut().as_mut() {
                    let action = instance.on_pointer_down(client_point(&ev), Button::from_dom(ev.button()));
                    apply(action, instance);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {
                let _ = pad;
            }
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let surface = Rc::clone(&surface);
            move |ev: leptos::ev::PointerEvent| {
                if !pad.with_untracked(PadState::inputs_enabled) {
                    return;
                }
                if let Some(instance) = surface.borrow_mut().as_mut() {
                    let action = instance.on_pointer_move(client_point(&ev));
                    apply(action, instance);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let surface = Rc::clone(&surface);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(instance) = surface.borrow_mut().as_mut() {
                    let was_drawing = instance.core.is_drawing();
                    instance.on_pointer_up();
                    if was_drawing {
                        publish(instance, drawing);
                    }
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {
                let _ = drawing;
            }
        }
    };

    let class_name = move || canvas_class(pad.with(PadState::inputs_enabled));

    view! {
        <canvas
            class=class_name
            node_ref=canvas_ref
            width=LOGICAL_WIDTH.to_string()
            height=LOGICAL_HEIGHT.to_string()
            style=display_style()
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up.clone()
            on:pointercancel=on_pointer_up
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
