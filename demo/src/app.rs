//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::signature::SignatureState;

/// Root component. Provides the host-owned signature state and renders the
/// demo page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The authoritative exported-signature value lives here, outside the
    // widget; the widget only reaches it through its action protocol.
    let signature = RwSignal::new(SignatureState::default());
    provide_context(signature);

    view! {
        <Title text="Signature pad"/>
        <HomePage/>
    }
}
