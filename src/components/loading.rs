//! Loading Component
//!
//! Skeleton placeholders shown while a fetch is in flight.

use leptos::*;

/// Skeleton for a summary card
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-lg shadow-sm animate-pulse">
            <div class="h-4 bg-gray-200 rounded w-3/4 mb-4" />
            <div class="h-8 bg-gray-200 rounded w-1/2" />
        </div>
    }
}

/// Skeleton for the trend chart
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-lg shadow-sm h-96 flex items-center justify-center">
            <div class="animate-pulse text-gray-400">"Carregando gráfico..."</div>
        </div>
    }
}

/// Skeleton rows for the products table
#[component]
pub fn TableSkeleton(
    #[prop(default = 3)]
    rows: usize,
) -> impl IntoView {
    view! {
        <div class="animate-pulse space-y-3">
            {(0..rows).map(|_| view! {
                <div class="h-12 bg-gray-200 rounded" />
            }).collect_view()}
        </div>
    }
}
