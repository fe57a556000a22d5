//! Top Products Table Component
//!
//! Renders the revenue-ranked product list exactly as served; the backend
//! owns the ordering and the top-5 cut.

use leptos::*;

use crate::components::loading::TableSkeleton;
use crate::format::format_brl;
use crate::state::global::{GlobalState, TopProduct};

/// Category cell placeholder for uncategorized products
const NO_CATEGORY: &str = "N/A";

/// Category column text for a product.
fn category_label(product: &TopProduct) -> String {
    product
        .category_name
        .clone()
        .unwrap_or_else(|| NO_CATEGORY.to_string())
}

/// Ranked products table
#[component]
pub fn TopProductsTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="bg-white p-6 rounded-lg shadow-sm">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">
                "Top 5 Produtos por Receita"
            </h3>

            {move || {
                if state.loading.get() {
                    view! { <TableSkeleton /> }.into_view()
                } else {
                    let products = state.payload.get().top_products;
                    view! { <ProductRows products /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ProductRows(products: Vec<TopProduct>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <HeaderCell label="Produto" />
                        <HeaderCell label="Categoria" />
                        <HeaderCell label="Unidades Vendidas" />
                        <HeaderCell label="Receita" />
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {products.into_iter().map(|product| {
                        let category = category_label(&product);
                        view! {
                            <tr class="hover:bg-gray-50">
                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                    {product.product_name.clone()}
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                    {category}
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                    {product.units_sold}
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm font-semibold text-green-600">
                                    {format_brl(product.revenue_generated)}
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn HeaderCell(label: &'static str) -> impl IntoView {
    view! {
        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
            {label}
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category_name: Option<&str>) -> TopProduct {
        TopProduct {
            product_id: 1,
            product_name: "Ração Premium".to_string(),
            category_name: category_name.map(str::to_string),
            units_sold: 12,
            revenue_generated: 480.0,
        }
    }

    #[test]
    fn missing_category_renders_the_fixed_placeholder() {
        assert_eq!(category_label(&product(None)), "N/A");
        assert_eq!(category_label(&product(Some("Alimentação"))), "Alimentação");
    }
}
