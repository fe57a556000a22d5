//! Sale Form Page
//!
//! Dynamic sale-item formset with the two admin helpers: unit prices are
//! autofilled from the store API when a product or lot is picked, and the
//! sale total is recomputed from the non-deleted rows on every change.

use leptos::*;

use crate::api;
use crate::api::client::Product;
use crate::format::format_decimal_comma;
use crate::log::console_error;

/// Which price endpoint a row should hit. A specific lot carries the final
/// price (promotions applied), so it wins over the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceLookup {
    Product(u32),
    Lot(u32),
}

fn price_lookup(product_id: Option<u32>, lot_id: Option<u32>) -> Option<PriceLookup> {
    match (lot_id, product_id) {
        (Some(lot), _) => Some(PriceLookup::Lot(lot)),
        (None, Some(product)) => Some(PriceLookup::Product(product)),
        (None, None) => None,
    }
}

/// Sum of quantity × unit price over the rows still part of the sale.
fn line_items_total(items: impl Iterator<Item = (u32, Option<f64>, bool)>) -> f64 {
    items
        .filter(|(_, _, deleted)| !deleted)
        .map(|(quantity, unit_price, _)| f64::from(quantity) * unit_price.unwrap_or(0.0))
        .sum()
}

/// One line of the formset. Signals only, so rows are cheap to copy into
/// event handlers.
#[derive(Clone, Copy)]
struct ItemRow {
    id: usize,
    product_id: RwSignal<Option<u32>>,
    lot_id: RwSignal<Option<u32>>,
    quantity: RwSignal<u32>,
    unit_price: RwSignal<Option<f64>>,
    deleted: RwSignal<bool>,
}

impl ItemRow {
    fn new(id: usize) -> Self {
        Self {
            id,
            product_id: create_rw_signal(None),
            lot_id: create_rw_signal(None),
            quantity: create_rw_signal(1),
            unit_price: create_rw_signal(None),
            deleted: create_rw_signal(false),
        }
    }
}

/// Look up and fill the row's unit price; clear it when there is nothing to
/// look up or the lookup fails. Failures stay silent for the user.
fn refresh_price(row: ItemRow) {
    let Some(lookup) = price_lookup(
        row.product_id.get_untracked(),
        row.lot_id.get_untracked(),
    ) else {
        row.unit_price.set(None);
        return;
    };

    spawn_local(async move {
        let result = match lookup {
            PriceLookup::Product(id) => api::fetch_product_price(id).await,
            PriceLookup::Lot(id) => api::fetch_lot_price(id).await,
        };

        match result {
            Ok(price) => row.unit_price.set(Some(price)),
            Err(err) => {
                console_error(&format!("falha ao buscar preço: {err}"));
                row.unit_price.set(None);
            }
        }
    });
}

/// Sale form page component
#[component]
pub fn SaleForm() -> impl IntoView {
    let (products, set_products) = create_signal(Vec::<Product>::new());
    let rows = create_rw_signal(vec![ItemRow::new(0)]);
    let (next_id, set_next_id) = create_signal(1_usize);

    // Product list (with lots) for the row selectors.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => set_products.set(list),
                Err(err) => console_error(&format!("falha ao buscar produtos: {err}")),
            }
        });
    });

    // Recomputed whenever any quantity/price changes or a row is added,
    // removed or restored.
    let total = create_memo(move |_| {
        line_items_total(rows.get().iter().map(|row| {
            (
                row.quantity.get(),
                row.unit_price.get(),
                row.deleted.get(),
            )
        }))
    });

    let add_row = move |_| {
        let id = next_id.get_untracked();
        set_next_id.set(id + 1);
        rows.update(|r| r.push(ItemRow::new(id)));
    };

    view! {
        <div class="max-w-3xl mx-auto bg-white p-6 rounded-lg shadow-sm">
            <h2 class="text-2xl font-semibold text-gray-900 mb-1">"Nova Venda"</h2>
            <p class="text-sm text-gray-500 mb-6">
                "Itens marcados como removidos ficam fora do total."
            </p>

            <div class="space-y-3">
                <For
                    each=move || rows.get()
                    key=|row| row.id
                    children=move |row| view! { <ItemRowView row products /> }
                />
            </div>

            <div class="mt-4">
                <button
                    on:click=add_row
                    class="px-4 py-2 bg-white border border-gray-300 rounded-md text-sm text-gray-700 hover:bg-gray-100 transition-colors"
                >
                    "+ Adicionar item"
                </button>
            </div>

            // Running total, locale decimal comma
            <div class="mt-6 flex items-center justify-end space-x-3">
                <label class="text-sm font-medium text-gray-600">
                    "Total da Venda (R$)"
                </label>
                <input
                    id="id_sale_total"
                    readonly
                    prop:value=move || format_decimal_comma(total.get())
                    class="w-40 bg-gray-100 rounded-lg px-4 py-2 text-right font-semibold text-gray-900 border border-gray-300"
                />
            </div>
        </div>
    }
}

/// One formset row: product, lot, quantity, unit price, delete flag.
#[component]
fn ItemRowView(row: ItemRow, products: ReadSignal<Vec<Product>>) -> impl IntoView {
    let row_class = move || {
        if row.deleted.get() {
            "grid grid-cols-12 gap-2 items-center opacity-50"
        } else {
            "grid grid-cols-12 gap-2 items-center"
        }
    };

    // Lots of the currently selected product
    let lots = create_memo(move |_| {
        let product_id = row.product_id.get();
        products
            .get()
            .iter()
            .find(|p| Some(p.id) == product_id)
            .map(|p| p.lots.clone())
            .unwrap_or_default()
    });

    view! {
        <div class=row_class>
            // Product selector
            <select
                on:change=move |ev| {
                    row.product_id.set(event_target_value(&ev).parse::<u32>().ok());
                    row.lot_id.set(None);
                    refresh_price(row);
                }
                class="col-span-4 bg-white rounded-lg px-3 py-2 text-sm text-gray-900 border border-gray-300 focus:border-blue-500 focus:outline-none"
            >
                <option value="">"--------- produto"</option>
                {move || {
                    products.get().into_iter().map(|product| {
                        let id = product.id;
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || row.product_id.get() == Some(id)
                            >
                                {product.name}
                            </option>
                        }
                    }).collect_view()
                }}
            </select>

            // Lot selector
            <select
                on:change=move |ev| {
                    row.lot_id.set(event_target_value(&ev).parse::<u32>().ok());
                    refresh_price(row);
                }
                disabled=move || lots.get().is_empty()
                class="col-span-3 bg-white rounded-lg px-3 py-2 text-sm text-gray-900 border border-gray-300 focus:border-blue-500 focus:outline-none disabled:bg-gray-100 disabled:text-gray-400"
            >
                <option value="">"--------- lote"</option>
                {move || {
                    lots.get().into_iter().map(|lot| {
                        let id = lot.id;
                        let label = lot.display_label();
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || row.lot_id.get() == Some(id)
                            >
                                {label}
                            </option>
                        }
                    }).collect_view()
                }}
            </select>

            // Quantity
            <input
                type="number"
                min="0"
                prop:value=move || row.quantity.get().to_string()
                on:input=move |ev| {
                    row.quantity.set(event_target_value(&ev).parse().unwrap_or(0));
                }
                class="col-span-2 bg-white rounded-lg px-3 py-2 text-sm text-right text-gray-900 border border-gray-300 focus:border-blue-500 focus:outline-none"
            />

            // Unit price, autofilled but still editable
            <input
                type="text"
                inputmode="decimal"
                prop:value=move || {
                    row.unit_price.get().map(|p| format!("{p:.2}")).unwrap_or_default()
                }
                on:input=move |ev| {
                    row.unit_price.set(event_target_value(&ev).parse::<f64>().ok());
                }
                class="col-span-2 bg-white rounded-lg px-3 py-2 text-sm text-right text-gray-900 border border-gray-300 focus:border-blue-500 focus:outline-none"
            />

            // Delete flag, Django-formset style
            <label class="col-span-1 flex items-center justify-center space-x-1 text-xs text-gray-500">
                <input
                    type="checkbox"
                    prop:checked=move || row.deleted.get()
                    on:change=move |ev| row.deleted.set(event_target_checked(&ev))
                />
                <span>"remover"</span>
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_quantity_times_price_over_all_rows() {
        let rows = [(2, Some(10.0), false), (1, Some(5.5), false)];
        let total = line_items_total(rows.into_iter());
        assert_eq!(total, 25.5);
        assert_eq!(format_decimal_comma(total), "25,50");
    }

    #[test]
    fn deleted_rows_stay_out_of_the_total() {
        let rows = [
            (2, Some(10.0), false),
            (5, Some(99.9), true),
            (1, Some(5.5), false),
        ];
        assert_eq!(line_items_total(rows.into_iter()), 25.5);
    }

    #[test]
    fn rows_without_a_price_contribute_zero() {
        let rows = [(3, None, false), (1, Some(2.0), false)];
        assert_eq!(line_items_total(rows.into_iter()), 2.0);
    }

    #[test]
    fn lot_price_wins_over_product_price() {
        assert_eq!(
            price_lookup(Some(4), Some(9)),
            Some(PriceLookup::Lot(9))
        );
        assert_eq!(
            price_lookup(Some(4), None),
            Some(PriceLookup::Product(4))
        );
        assert_eq!(price_lookup(None, None), None);
    }
}
