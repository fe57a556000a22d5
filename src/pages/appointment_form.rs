//! Appointment Form Page
//!
//! Hosts the available-slot picker: choosing a service and a date loads the
//! open time slots for that pair and repopulates the time selector. The
//! booking itself is completed in the backend admin.

use chrono::NaiveDate;
use leptos::*;

use crate::api;
use crate::api::client::Service;
use crate::api::ApiError;
use crate::log::console_error;

/// States of the time selector.
///
/// Only `Loading` disables the selector; every way a lookup can end lands on
/// an enabled terminal state, so overlapping triggers can never leave the
/// field stuck.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotOptions {
    Idle,
    Loading,
    Available(Vec<String>),
    NoneAvailable,
    Failed,
}

impl SlotOptions {
    pub fn from_result(result: Result<Vec<String>, ApiError>) -> Self {
        match result {
            Ok(slots) if slots.is_empty() => Self::NoneAvailable,
            Ok(slots) => Self::Available(slots),
            Err(_) => Self::Failed,
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Text of the blank default option.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Idle | Self::Available(_) => "---------",
            Self::Loading => "Buscando horários...",
            Self::NoneAvailable => "Nenhum horário disponível",
            Self::Failed => "Erro ao buscar horários",
        }
    }

    pub fn slots(&self) -> &[String] {
        match self {
            Self::Available(slots) => slots,
            _ => &[],
        }
    }
}

/// Appointment form page component
#[component]
pub fn AppointmentForm() -> impl IntoView {
    let (services, set_services) = create_signal(Vec::<Service>::new());
    let (service_id, set_service_id) = create_signal(None::<u32>);
    let (date_value, set_date_value) = create_signal(String::new());
    let (slot_options, set_slot_options) = create_signal(SlotOptions::Idle);
    let (selected_time, set_selected_time) = create_signal(String::new());

    // Load the service list once; the selector stays empty on failure.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_services().await {
                Ok(list) => set_services.set(list),
                Err(err) => console_error(&format!("falha ao buscar serviços: {err}")),
            }
        });
    });

    // Triggered on service change and on date blur. Nothing happens until
    // both fields are filled.
    let refresh_slots = move || {
        let Some(service) = service_id.get_untracked() else {
            return;
        };
        let Ok(date) = NaiveDate::parse_from_str(&date_value.get_untracked(), "%Y-%m-%d")
        else {
            return;
        };

        set_slot_options.set(SlotOptions::Loading);
        set_selected_time.set(String::new());

        spawn_local(async move {
            let result = api::fetch_available_slots(date, service).await;
            if let Err(err) = &result {
                console_error(&format!("falha ao buscar horários: {err}"));
            }
            // Terminal state on every exit path re-enables the selector.
            set_slot_options.set(SlotOptions::from_result(result));
        });
    };

    view! {
        <div class="max-w-xl mx-auto bg-white p-6 rounded-lg shadow-sm">
            <h2 class="text-2xl font-semibold text-gray-900 mb-1">"Novo Agendamento"</h2>
            <p class="text-sm text-gray-500 mb-6">
                "Escolha o serviço e a data para ver os horários livres. "
                "A confirmação do agendamento é feita no painel administrativo."
            </p>

            <form class="space-y-4" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
                // Service selector
                <div>
                    <label class="block text-sm text-gray-600 mb-2">
                        "Serviço"
                    </label>
                    <select
                        id="id_service"
                        on:change=move |ev| {
                            set_service_id.set(event_target_value(&ev).parse::<u32>().ok());
                            refresh_slots();
                        }
                        class="w-full bg-white rounded-lg px-4 py-3 text-gray-900 border border-gray-300 focus:border-blue-500 focus:outline-none"
                    >
                        <option value="">"---------"</option>
                        {move || {
                            services.get().into_iter().map(|service| view! {
                                <option value=service.id.to_string()>{service.name}</option>
                            }).collect_view()
                        }}
                    </select>
                </div>

                // Date input
                <div>
                    <label class="block text-sm text-gray-600 mb-2">
                        "Data"
                    </label>
                    <input
                        id="id_appointment_date"
                        type="date"
                        prop:value=move || date_value.get()
                        on:input=move |ev| set_date_value.set(event_target_value(&ev))
                        on:blur=move |_| refresh_slots()
                        class="w-full bg-white rounded-lg px-4 py-3 text-gray-900 border border-gray-300 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                // Time selector, repopulated from the slots endpoint
                <div>
                    <label class="block text-sm text-gray-600 mb-2">
                        "Horário"
                    </label>
                    <select
                        id="id_appointment_time"
                        disabled=move || slot_options.get().disabled()
                        prop:value=move || selected_time.get()
                        on:change=move |ev| set_selected_time.set(event_target_value(&ev))
                        class="w-full bg-white rounded-lg px-4 py-3 text-gray-900 border border-gray-300 focus:border-blue-500 focus:outline-none disabled:bg-gray-100 disabled:text-gray-400"
                    >
                        {move || {
                            let options = slot_options.get();
                            view! {
                                <option value="">{options.placeholder()}</option>
                                {options.slots().iter().map(|slot| view! {
                                    <option value=slot.clone()>{slot.clone()}</option>
                                }).collect_view()}
                            }
                        }}
                    </select>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_returned_become_options_after_the_blank_default() {
        let options =
            SlotOptions::from_result(Ok(vec!["09:00".to_string(), "10:00".to_string()]));

        assert_eq!(options.slots(), ["09:00".to_string(), "10:00".to_string()]);
        assert_eq!(options.placeholder(), "---------");
        assert!(!options.disabled());
    }

    #[test]
    fn empty_slot_list_shows_the_no_slots_placeholder() {
        let options = SlotOptions::from_result(Ok(Vec::new()));
        assert_eq!(options, SlotOptions::NoneAvailable);
        assert_eq!(options.placeholder(), "Nenhum horário disponível");
        assert!(options.slots().is_empty());
        assert!(!options.disabled());
    }

    #[test]
    fn failed_lookup_shows_the_error_placeholder_and_stays_enabled() {
        let options = SlotOptions::from_result(Err(ApiError::Timeout));
        assert_eq!(options, SlotOptions::Failed);
        assert_eq!(options.placeholder(), "Erro ao buscar horários");
        assert!(!options.disabled());
    }

    #[test]
    fn only_the_loading_state_disables_the_selector() {
        assert!(SlotOptions::Loading.disabled());
        assert!(!SlotOptions::Idle.disabled());
        assert!(!SlotOptions::NoneAvailable.disabled());
        assert!(!SlotOptions::Failed.disabled());
    }
}
