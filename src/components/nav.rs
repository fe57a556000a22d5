//! Navigation Component
//!
//! Header navigation bar with brand and page links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🐾"</span>
                        <span class="text-xl font-bold text-gray-900">"PetCare Admin"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/calendar" label="Calendário" />
                        <NavLink href="/appointments/new" label="Novo Agendamento" />
                        <NavLink href="/sales/new" label="Nova Venda" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900 font-medium"
        >
            {label}
        </A>
    }
}
