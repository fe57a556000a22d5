//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{AppointmentForm, Calendar, Dashboard, SaleForm};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/calendar" view=Calendar />
                        <Route path="/appointments/new" view=AppointmentForm />
                        <Route path="/sales/new" view=SaleForm />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer with a live fetch indicator
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="bg-white mt-12 border-t border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <p class="text-sm text-gray-500">
                    "Dashboard de Análise PetCare"
                </p>

                {move || {
                    if state.loading.get() {
                        view! {
                            <span class="text-sm text-gray-400">"Carregando..."</span>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🐾"</div>
            <h1 class="text-3xl font-bold mb-2 text-gray-900">"Página não encontrada"</h1>
            <p class="text-gray-500 mb-6">"O endereço acessado não existe."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Ir para o Dashboard"
            </A>
        </div>
    }
}
