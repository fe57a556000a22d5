//! Global Application State
//!
//! Reactive dashboard state using Leptos signals, plus the fetch controller
//! that guards against out-of-order responses.

use chrono::NaiveDate;
use leptos::*;
use serde::Deserialize;

use crate::api;
use crate::log::console_error;

/// Window presets the dashboard offers
pub const WINDOW_PRESETS: [u32; 3] = [7, 30, 90];

/// Window used on first load
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Aggregated metrics for one calendar day of the window
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub total_revenue: f64,
    pub total_appointments: u32,
    pub new_customers: u32,
}

/// Appointment count for one lifecycle status
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u32,
}

/// One entry of the revenue-ranked product list
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TopProduct {
    pub product_id: u32,
    pub product_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    pub units_sold: u32,
    pub revenue_generated: f64,
}

/// Full dashboard response for one window.
///
/// Immutable once received; the controller replaces it wholesale. The
/// `Default` value doubles as the empty-safe rendering state after a failed
/// fetch: zeros, empty lists, no period.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardPayload {
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    #[serde(default)]
    pub metrics_history: Vec<DailyMetric>,
    #[serde(default)]
    pub status_distribution: Vec<StatusCount>,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
}

impl DashboardPayload {
    /// Total revenue over the window, summed from the daily series.
    pub fn total_revenue(&self) -> f64 {
        self.metrics_history.iter().map(|m| m.total_revenue).sum()
    }

    /// Total appointments over the window.
    pub fn total_appointments(&self) -> u64 {
        self.metrics_history
            .iter()
            .map(|m| u64::from(m.total_appointments))
            .sum()
    }

    /// New customers registered over the window.
    pub fn new_customers(&self) -> u64 {
        self.metrics_history
            .iter()
            .map(|m| u64::from(m.new_customers))
            .sum()
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Selected window size in days (one of `WINDOW_PRESETS`)
    pub days: RwSignal<u32>,
    /// Last successfully fetched payload
    pub payload: RwSignal<DashboardPayload>,
    /// A dashboard fetch is in flight
    pub loading: RwSignal<bool>,
    /// User-facing error from the last settled fetch, if it failed
    pub error: RwSignal<Option<String>>,
    /// Monotonically increasing request token; only the response carrying
    /// the newest token may touch the payload
    request_seq: RwSignal<u64>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            days: create_rw_signal(DEFAULT_WINDOW_DAYS),
            payload: create_rw_signal(DashboardPayload::default()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            request_seq: create_rw_signal(0),
        }
    }

    /// Switch the window and refetch. Values outside the presets are ignored.
    pub fn select_window(&self, days: u32) {
        if !WINDOW_PRESETS.contains(&days) {
            console_error(&format!("janela de {days} dias não suportada"));
            return;
        }
        self.days.set(days);
        self.load_dashboard();
    }

    /// Fetch the dashboard for the currently selected window.
    ///
    /// A selection made while an earlier fetch is still in flight supersedes
    /// it: the stale response is dropped when it eventually resolves.
    pub fn load_dashboard(&self) {
        let days = self.days.get_untracked();
        let token = self.begin_request();

        let state = self.clone();
        spawn_local(async move {
            let result = api::fetch_dashboard(days).await;
            state.finish_request(token, result);
        });
    }

    /// Enter the loading state and hand out the token for this request.
    fn begin_request(&self) -> u64 {
        let token = self.request_seq.get_untracked() + 1;
        self.request_seq.set(token);
        self.loading.set(true);
        self.error.set(None);
        token
    }

    /// Apply a settled fetch, unless a newer request superseded it.
    fn finish_request(&self, token: u64, result: Result<DashboardPayload, api::ApiError>) {
        if self.request_seq.get_untracked() != token {
            // A newer window selection owns the UI now.
            return;
        }

        match result {
            Ok(payload) => {
                self.payload.set(payload);
                self.error.set(None);
            }
            Err(err) => {
                console_error(&format!("dashboard fetch failed: {err}"));
                self.payload.set(DashboardPayload::default());
                self.error.set(Some(err.user_message()));
            }
        }
        self.loading.set(false);
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    fn payload_fixture() -> DashboardPayload {
        serde_json::from_str(
            r#"{
                "period_start": "2024-04-25",
                "period_end": "2024-05-01",
                "metrics_history": [
                    {"date": "2024-04-25", "total_revenue": 150.0, "total_appointments": 3, "new_customers": 1},
                    {"date": "2024-04-26", "total_revenue": 0.0, "total_appointments": 0, "new_customers": 0},
                    {"date": "2024-04-27", "total_revenue": 320.5, "total_appointments": 5, "new_customers": 2}
                ],
                "status_distribution": [
                    {"status": "confirmed", "count": 6},
                    {"status": "pending", "count": 2}
                ],
                "top_products": [
                    {"product_id": 1, "product_name": "Ração Premium", "category_name": "Alimentação", "units_sold": 12, "revenue_generated": 480.0},
                    {"product_id": 4, "product_name": "Brinquedo Corda", "category_name": null, "units_sold": 7, "revenue_generated": 105.0}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn payload_decodes_from_wire_json() {
        let payload = payload_fixture();
        assert_eq!(payload.metrics_history.len(), 3);
        assert_eq!(payload.top_products.len(), 2);
        assert_eq!(payload.top_products[1].category_name, None);
        assert_eq!(
            payload.period_start,
            NaiveDate::from_ymd_opt(2024, 4, 25)
        );
    }

    #[test]
    fn totals_are_exact_sums_of_the_daily_series() {
        let payload = payload_fixture();
        assert_eq!(payload.total_revenue(), 150.0 + 0.0 + 320.5);
        assert_eq!(payload.total_appointments(), 8);
        assert_eq!(payload.new_customers(), 3);
    }

    #[test]
    fn empty_history_yields_zero_totals() {
        let payload = DashboardPayload::default();
        assert_eq!(payload.total_revenue(), 0.0);
        assert_eq!(payload.total_appointments(), 0);
        assert_eq!(payload.new_customers(), 0);
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_request() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        let first = state.begin_request();
        let second = state.begin_request();

        // The older request resolves after the newer one was triggered.
        let mut stale = payload_fixture();
        stale.metrics_history.clear();
        state.finish_request(first, Ok(stale));

        // Nothing applied; the newer request is still in flight.
        assert_eq!(state.payload.get_untracked(), DashboardPayload::default());
        assert!(state.loading.get_untracked());

        state.finish_request(second, Ok(payload_fixture()));
        assert_eq!(state.payload.get_untracked(), payload_fixture());
        assert!(!state.loading.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn failed_fetch_resets_payload_and_sets_banner_message() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.payload.set(payload_fixture());

        let token = state.begin_request();
        assert!(state.loading.get_untracked());
        assert!(state.error.get_untracked().is_none());

        state.finish_request(
            token,
            Err(ApiError::Http {
                status: 500,
                message: "Failed to retrieve metrics".into(),
            }),
        );

        assert_eq!(state.payload.get_untracked(), DashboardPayload::default());
        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some("Falha ao carregar os dados")
        );
        assert!(!state.loading.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn out_of_range_window_is_rejected() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        // select_window would spawn a fetch for valid presets, so only the
        // rejection path is exercised here.
        state.select_window(365);
        assert_eq!(state.days.get_untracked(), DEFAULT_WINDOW_DAYS);

        runtime.dispose();
    }
}
