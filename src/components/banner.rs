//! Error Banner Component
//!
//! The single visible error surface of the dashboard. Whatever failed, the
//! user sees one banner with one message.

use leptos::*;

/// Dashboard error banner; renders nothing while there is no error.
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|msg| view! {
                <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg mb-6">
                    <p class="font-semibold">"Erro ao carregar dashboard"</p>
                    <p class="text-sm">{msg}</p>
                </div>
            })
        }}
    }
}
