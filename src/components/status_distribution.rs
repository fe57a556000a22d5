//! Status Distribution Component
//!
//! Breakdown of appointment counts by lifecycle status for the window.

use leptos::*;

use crate::api::client::AppointmentStatus;
use crate::state::global::{GlobalState, StatusCount};

/// Appointment status breakdown card
#[component]
pub fn StatusDistribution() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="bg-white p-6 rounded-lg shadow-sm">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">
                "Agendamentos por Status"
            </h3>

            {move || {
                let distribution = state.payload.get().status_distribution;
                if distribution.is_empty() {
                    view! {
                        <p class="text-sm text-gray-500">"Sem agendamentos no período"</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex flex-wrap gap-4">
                            {distribution.into_iter().map(|entry| view! {
                                <StatusChip entry />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn StatusChip(entry: StatusCount) -> impl IntoView {
    // Unknown statuses fall back to the raw wire value in gray
    let (label, color) = match AppointmentStatus::parse(&entry.status) {
        Some(status) => (status.label_pt().to_string(), status.css_color()),
        None => (entry.status.clone(), "#6b7280"),
    };

    view! {
        <div class="flex items-center space-x-2 bg-gray-50 rounded-full px-3 py-1">
            <span
                class="w-2.5 h-2.5 rounded-full"
                style=format!("background-color: {}", color)
            />
            <span class="text-sm text-gray-700">{label}</span>
            <span class="text-sm font-semibold text-gray-900">{entry.count}</span>
        </div>
    }
}
