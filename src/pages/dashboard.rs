//! Dashboard Page
//!
//! Revenue and appointment metrics for a trailing window, with summary
//! cards, the dual-axis trend chart and the top-products ranking.

use leptos::*;

use crate::components::loading::ChartSkeleton;
use crate::components::{
    ErrorBanner, StatusDistribution, SummaryCard, TopProductsTable, TrendChart,
};
use crate::format::{format_brl, format_long_date};
use crate::state::global::{GlobalState, WINDOW_PRESETS};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the default window on mount; later fetches come from the
    // preset buttons.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        state_for_effect.load_dashboard();
    });

    let subtitle = {
        let days = state.days;
        Signal::derive(move || format!("Últimos {} dias", days.get()))
    };

    let revenue = {
        let payload = state.payload;
        Signal::derive(move || format_brl(payload.get().total_revenue()))
    };
    let appointments = {
        let payload = state.payload;
        Signal::derive(move || payload.get().total_appointments().to_string())
    };
    let customers = {
        let payload = state.payload;
        Signal::derive(move || payload.get().new_customers().to_string())
    };

    let state_for_period = state.clone();

    view! {
        <div>
            // Page header
            <header class="mb-6">
                <h1 class="text-3xl font-bold text-gray-900">
                    "Dashboard de Análise PetCare"
                </h1>
                <p class="mt-1 text-sm text-gray-600">
                    "Métricas de desempenho e insights de negócio"
                </p>
            </header>

            // Period line and window presets
            <div class="mb-6 flex justify-between items-center">
                <div>
                    {move || {
                        let payload = state_for_period.payload.get();
                        match (payload.period_start, payload.period_end) {
                            (Some(start), Some(end)) => view! {
                                <p class="text-sm text-gray-600">
                                    "Período: "
                                    {format_long_date(start)}
                                    " - "
                                    {format_long_date(end)}
                                </p>
                            }.into_view(),
                            _ => view! {}.into_view(),
                        }
                    }}
                </div>

                <div class="flex gap-2">
                    {WINDOW_PRESETS.into_iter().map(|days| view! {
                        <WindowButton days />
                    }).collect_view()}
                </div>
            </div>

            // Single visible error surface
            <ErrorBanner message=state.error />

            // Summary cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                <SummaryCard
                    title="Receita Total"
                    value=revenue
                    subtitle=subtitle
                    loading=state.loading
                />
                <SummaryCard
                    title="Total de Agendamentos"
                    value=appointments
                    subtitle=subtitle
                    loading=state.loading
                />
                <SummaryCard
                    title="Novos Clientes"
                    value=customers
                    subtitle=subtitle
                    loading=state.loading
                />
            </div>

            // Trend chart
            <div class="mb-8">
                {
                    let loading = state.loading;
                    move || {
                        if loading.get() {
                            view! { <ChartSkeleton /> }.into_view()
                        } else {
                            view! { <TrendChart /> }.into_view()
                        }
                    }
                }
            </div>

            // Status breakdown and product ranking
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatusDistribution />
                <div class="md:col-span-2">
                    <TopProductsTable />
                </div>
            </div>
        </div>
    }
}

/// Window preset button (7/30/90 days)
#[component]
fn WindowButton(days: u32) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let is_active = {
        let selected = state.days;
        create_memo(move |_| selected.get() == days)
    };

    let on_click = move |_| state.select_window(days);

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-md text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!(
                        "{} bg-white text-gray-700 hover:bg-gray-100 border border-gray-300",
                        base
                    )
                }
            }
        >
            {format!("{days} dias")}
        </button>
    }
}
