//! Calendar Page
//!
//! Read-only appointment calendar for the staff: a pt-BR month grid with
//! one colored entry per appointment. Lifecycle changes happen in the
//! backend admin; entries only link there.

use chrono::{Datelike, Duration, Local, NaiveDate};
use leptos::*;

use crate::api;
use crate::api::client::Appointment;
use crate::log::console_error;

const WEEKDAY_HEADERS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Admin calendar page component
#[component]
pub fn Calendar() -> impl IntoView {
    let (appointments, set_appointments) = create_signal(Vec::<Appointment>::new());
    let (loading, set_loading) = create_signal(true);
    let (month, set_month) = create_signal(first_of_month(Local::now().date_naive()));

    // Single fetch on mount; a failure degrades to an empty calendar.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_appointments().await {
                Ok(list) => set_appointments.set(list),
                Err(err) => console_error(&format!("falha ao buscar agendamentos: {err}")),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="bg-white p-6 rounded-lg shadow-sm">
            <h2 class="text-2xl font-semibold text-gray-900 border-l-4 border-indigo-600 pl-3 mb-6">
                "Calendário de Agendamentos"
            </h2>

            // Month navigation
            <div class="flex items-center justify-between mb-4">
                <div class="flex gap-2">
                    <MonthNavButton label="‹" on_click=move |_| {
                        set_month.update(|m| *m = add_months(*m, -1));
                    } />
                    <MonthNavButton label="Hoje" on_click=move |_| {
                        set_month.set(first_of_month(Local::now().date_naive()));
                    } />
                    <MonthNavButton label="›" on_click=move |_| {
                        set_month.update(|m| *m = add_months(*m, 1));
                    } />
                </div>

                <span class="text-lg font-medium text-gray-900">
                    {move || month_title(month.get())}
                </span>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="p-4 text-center text-gray-500">
                            "Carregando calendário..."
                        </div>
                    }.into_view()
                } else {
                    let month = month.get();
                    let appointments = appointments.get();
                    view! { <MonthGrid month appointments /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn MonthNavButton(
    label: &'static str,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class="px-3 py-1 bg-white border border-gray-300 rounded-md text-sm text-gray-700 hover:bg-gray-100 transition-colors"
        >
            {label}
        </button>
    }
}

/// The month grid itself, weeks starting on Sunday.
#[component]
fn MonthGrid(month: NaiveDate, appointments: Vec<Appointment>) -> impl IntoView {
    let today = Local::now().date_naive();
    let weeks = month_grid(month);

    let month_has_entries = appointments
        .iter()
        .any(|a| first_of_month(local_date(a)) == month);

    view! {
        <div>
            <div class="grid grid-cols-7 text-center text-xs font-medium text-gray-500 uppercase tracking-wider mb-1">
                {WEEKDAY_HEADERS.into_iter().map(|day| view! {
                    <div class="py-2">{day}</div>
                }).collect_view()}
            </div>

            <div class="grid grid-cols-7 border-t border-l border-gray-200">
                {weeks.into_iter().flatten().map(|day| {
                    let day_appointments: Vec<Appointment> = appointments
                        .iter()
                        .filter(|a| local_date(a) == day)
                        .cloned()
                        .collect();
                    let in_month = day.month() == month.month();
                    let is_today = day == today;

                    view! { <DayCell day day_appointments in_month is_today /> }
                }).collect_view()}
            </div>

            {(!month_has_entries).then(|| view! {
                <p class="text-center text-sm text-gray-500 mt-4">
                    "Não há agendamentos neste período."
                </p>
            })}
        </div>
    }
}

#[component]
fn DayCell(
    day: NaiveDate,
    day_appointments: Vec<Appointment>,
    in_month: bool,
    is_today: bool,
) -> impl IntoView {
    let cell_class = if in_month {
        "min-h-24 border-r border-b border-gray-200 p-1 bg-white"
    } else {
        "min-h-24 border-r border-b border-gray-200 p-1 bg-gray-50"
    };

    let number_class = if is_today {
        "inline-flex items-center justify-center w-6 h-6 rounded-full bg-indigo-600 text-white text-xs"
    } else if in_month {
        "text-xs text-gray-700"
    } else {
        "text-xs text-gray-400"
    };

    view! {
        <div class=cell_class>
            <div class="text-right">
                <span class=number_class>{day.day()}</span>
            </div>

            <div class="space-y-1 mt-1">
                {day_appointments.into_iter().map(|appointment| view! {
                    <CalendarEntry appointment />
                }).collect_view()}
            </div>
        </div>
    }
}

/// One appointment chip, colored by status and linking to the admin form.
#[component]
fn CalendarEntry(appointment: Appointment) -> impl IntoView {
    let start = appointment.schedule_time.with_timezone(&Local);
    let end = start + Duration::minutes(i64::from(appointment.service_duration));

    let time_range = format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"));
    let tooltip = format!(
        "{} | {} | {}",
        time_range, appointment.pet_name, appointment.service_name
    );
    let admin_url = format!("/admin/schedule/appointment/{}/change/", appointment.id);

    view! {
        <a
            href=admin_url
            title=tooltip
            class="block rounded px-1 py-0.5 text-xs text-white truncate"
            style=format!("background-color: {}", appointment.status.css_color())
        >
            <span class="font-semibold">{start.format("%H:%M").to_string()}</span>
            " "
            {appointment.pet_name.clone()}
            " — "
            {appointment.service_name.clone()}
        </a>
    }
}

/// Calendar day an appointment falls on, in the browser's timezone.
fn local_date(appointment: &Appointment) -> NaiveDate {
    appointment.schedule_time.with_timezone(&Local).date_naive()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 always exists")
}

/// Shift a first-of-month date by whole months.
fn add_months(month: NaiveDate, delta: i32) -> NaiveDate {
    let total = month.year() * 12 + month.month0() as i32 + delta;
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).expect("valid first of month")
}

/// Weeks covering the month, each week running Sunday through Saturday.
fn month_grid(month: NaiveDate) -> Vec<Vec<NaiveDate>> {
    let first = first_of_month(month);
    let offset = first.weekday().num_days_from_sunday() as i64;
    let mut cursor = first - Duration::days(offset);
    let last = last_of_month(month);

    let mut weeks = Vec::new();
    while cursor <= last {
        weeks.push((0..7).map(|d| cursor + Duration::days(d)).collect());
        cursor += Duration::days(7);
    }
    weeks
}

fn last_of_month(month: NaiveDate) -> NaiveDate {
    add_months(month, 1) - Duration::days(1)
}

fn month_title(month: NaiveDate) -> String {
    format!(
        "{} {}",
        MONTH_NAMES[month.month0() as usize],
        month.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_grid_starts_on_sunday_and_covers_the_month() {
        // May 2024: the 1st is a Wednesday
        let month = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let weeks = month_grid(month);

        let first_cell = weeks[0][0];
        assert_eq!(first_cell, NaiveDate::from_ymd_opt(2024, 4, 28).unwrap());
        assert_eq!(first_cell.weekday(), chrono::Weekday::Sun);

        let last_week = weeks.last().unwrap();
        assert!(last_week[6] >= NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());

        for week in &weeks {
            assert_eq!(week.len(), 7);
        }
    }

    #[test]
    fn add_months_wraps_across_year_boundaries() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            add_months(jan, -1),
            NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
        );
        assert_eq!(
            add_months(jan, 12),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );

        let dec = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(
            add_months(dec, 1),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn month_title_is_localized() {
        let month = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(month_title(month), "Maio 2024");
    }
}
