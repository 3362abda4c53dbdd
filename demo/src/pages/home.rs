//! Landing page hosting the signature form.

use leptos::prelude::*;

use crate::components::signature_form::SignatureForm;
use crate::state::signature::SignatureState;

/// Demo page: heading, a one-line pitch, and the widget at its default size.
#[component]
pub fn HomePage() -> impl IntoView {
    let signature = expect_context::<RwSignal<SignatureState>>();

    view! {
        <div class="container">
            <h1>"Signature pad"</h1>
            <p>
                "A lightweight and customisable widget to let your"
                <br/>
                "users set their autographs and save them as an image."
            </p>
            <SignatureForm signature=signature width=400 height=200/>
        </div>
    }
}
