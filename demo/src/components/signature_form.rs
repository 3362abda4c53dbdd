//! Bridge component between the Leptos UI and the imperative
//! [`SignaturePad`] controller.
//!
//! Mounts the `<canvas>` element, forwards pointer events to the controller,
//! and processes the resulting actions into the host-owned signature signal.
//! The controller decides whether input has any effect; handlers stay wired
//! in both modes and become no-ops once the surface is finalized.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use signature_pad::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use signature_pad::pad::{Action, PadConfig, SignaturePad};
use signature_pad::stroke::StrokeStyle;
use signature_pad::surface::Point;

use crate::state::signature::SignatureState;

fn client_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Signature form: drawing surface plus save and clear/redraw actions.
///
/// `signature` is the host-owned exported value. When it is non-empty at
/// mount, the surface is initialized from it and starts out finalized; the
/// save action reappears once the value is discarded via clear.
#[component]
pub fn SignatureForm(
    /// Host-owned exported signature value.
    signature: RwSignal<SignatureState>,
    /// Surface width in device pixels.
    #[prop(default = DEFAULT_SURFACE_WIDTH)] width: u32,
    /// Surface height in device pixels.
    #[prop(default = DEFAULT_SURFACE_HEIGHT)] height: u32,
    /// Stroke style override (color, width, join).
    #[prop(optional)] stroke: Option<StrokeStyle>,
    /// Inline style override for the surface container.
    #[prop(optional)] surface_style: Option<String>,
    /// Inline style override for the save action.
    #[prop(optional)] save_style: Option<String>,
    /// Inline style override for the clear action.
    #[prop(optional)] clear_style: Option<String>,
    /// Inline style override for the redraw action.
    #[prop(optional)] redraw_style: Option<String>,
    /// Label for the save action.
    #[prop(default = String::from("Save"))] save_label: String,
    /// Label for the clear action (shown while editable).
    #[prop(default = String::from("Clear"))] clear_label: String,
    /// Label for the redraw action (shown while a signature is held).
    #[prop(default = String::from("Redraw"))] redraw_label: String,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let pad = Rc::new(RefCell::new(None::<SignaturePad>));
    let config = PadConfig { width, height, stroke: stroke.unwrap_or_default() };

    // Mount the controller once the canvas element exists. A non-empty
    // signature value at mount time paints the surface and finalizes it.
    {
        let pad = Rc::clone(&pad);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if pad.borrow().is_some() {
                return;
            }

            let mut instance = SignaturePad::new(canvas, &config);
            let existing = signature.get_untracked().value;
            if !existing.is_empty()
                && let Err(err) = instance.initialize(&existing)
            {
                log::warn!("signature surface initialization failed: {err:?}");
            }
            *pad.borrow_mut() = Some(instance);
        });
    }

    let on_pointer_down = {
        let pad = Rc::clone(&pad);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if let Some(pad) = pad.borrow_mut().as_mut() {
                pad.on_pointer_down(client_point(&ev));
            }
        }
    };

    let on_pointer_move = {
        let pad = Rc::clone(&pad);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(pad) = pad.borrow_mut().as_mut()
                && let Err(err) = pad.on_pointer_move(client_point(&ev))
            {
                log::warn!("stroke rendering failed: {err:?}");
            }
        }
    };

    let end_stroke = {
        let pad = Rc::clone(&pad);
        move || {
            if let Some(pad) = pad.borrow_mut().as_mut() {
                pad.on_pointer_up();
            }
        }
    };
    let on_pointer_up = {
        let end_stroke = end_stroke.clone();
        move |_ev: leptos::ev::PointerEvent| end_stroke()
    };
    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| end_stroke();

    let on_save = {
        let pad = Rc::clone(&pad);
        move |_ev: leptos::ev::MouseEvent| {
            if let Some(pad) = pad.borrow_mut().as_mut() {
                match pad.export() {
                    Ok(Action::Exported(value)) => signature.update(|s| s.value = value),
                    Ok(_) => {}
                    Err(err) => log::warn!("signature export failed: {err:?}"),
                }
            }
        }
    };

    let on_clear = {
        let pad = Rc::clone(&pad);
        move |_ev: leptos::ev::MouseEvent| {
            if let Some(pad) = pad.borrow_mut().as_mut() {
                match pad.clear() {
                    Ok(Action::Cleared) => signature.update(|s| s.value.clear()),
                    Ok(_) => {}
                    Err(err) => log::warn!("surface clear failed: {err:?}"),
                }
            }
        }
    };

    let held = move || signature.with(|s| s.is_held());

    let surface_style_attr = surface_style.unwrap_or_default();
    let save_style_attr = save_style.unwrap_or_default();
    let clear_style_attr = clear_style.unwrap_or_default();
    let redraw_style_attr = redraw_style.unwrap_or_default();

    view! {
        <div class="signature-form">
            <div class="signature-form__surface" style=surface_style_attr>
                <canvas
                    node_ref=canvas_ref
                    width=width.to_string()
                    height=height.to_string()
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointerleave=on_pointer_leave
                >
                    "Your browser does not support canvas."
                </canvas>
            </div>
            <div class="signature-form__actions">
                <button
                    class="signature-form__action"
                    style=move || {
                        if held() { redraw_style_attr.clone() } else { clear_style_attr.clone() }
                    }
                    on:click=on_clear
                >
                    {move || if held() { redraw_label.clone() } else { clear_label.clone() }}
                </button>
                <button
                    class="signature-form__action signature-form__action--save"
                    class:signature-form__action--hidden=held
                    style=save_style_attr
                    on:click=on_save
                >
                    {save_label}
                </button>
            </div>
        </div>
    }
}
