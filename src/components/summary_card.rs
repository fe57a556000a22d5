//! Summary Card Component
//!
//! Displays one aggregated metric with a title and a period subtitle.

use leptos::*;

use crate::components::loading::CardSkeleton;

/// Summary card component
#[component]
pub fn SummaryCard(
    /// Card title, e.g. "Receita Total"
    #[prop(into)]
    title: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Period subtitle, e.g. "Últimos 7 dias"
    #[prop(into)]
    subtitle: Signal<String>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        {move || {
            if loading.get() {
                view! { <CardSkeleton /> }.into_view()
            } else {
                let title = title.clone();
                view! {
                    <div class="bg-white p-6 rounded-lg shadow-sm hover:shadow-md transition-shadow">
                        <h3 class="text-sm font-medium text-gray-500 mb-2">{title}</h3>
                        <p class="text-3xl font-bold text-gray-900">{value.get()}</p>
                        <p class="text-sm text-gray-600 mt-1">{subtitle.get()}</p>
                    </div>
                }.into_view()
            }
        }}
    }
}
