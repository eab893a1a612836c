//! Line Item Table Component
//!
//! Renders view rows through the column descriptors.

use leptos::prelude::*;
use line_item_board_core::{CellKind, CellValue, ColumnDescriptor, RowAction, RowField, ViewRow};

use crate::format::{format_currency, format_number};

type RowKey = (String, String, u64, Option<u64>, u64, u64, String);

/// Rows are rebuilt on every load; the key covers every rendered value so a
/// changed row gets a fresh `<tr>`
fn row_key(row: &ViewRow) -> RowKey {
    (
        row.id.clone(),
        row.product_name.clone(),
        row.quantity.to_bits(),
        row.stock.map(f64::to_bits),
        row.unit_price.to_bits(),
        row.total_price.to_bits(),
        row.quantity_style.clone(),
    )
}

/// Labels are configurable and may repeat
fn column_key(column: &ColumnDescriptor) -> (Option<RowField>, Option<RowAction>) {
    (column.field, column.action)
}

fn cell_text(row: &ViewRow, column: &ColumnDescriptor) -> String {
    let Some(field) = column.field else {
        return String::new();
    };
    match (row.cell(field), &column.kind) {
        (CellValue::Decimal(value), CellKind::Currency) => value.map(format_currency).unwrap_or_default(),
        (CellValue::Decimal(value), _) => format_number(value),
        (CellValue::Text(text), _) => text,
    }
}

fn cell_class(row: &ViewRow, column: &ColumnDescriptor) -> String {
    let align = match column.kind {
        CellKind::Currency | CellKind::Number => "cell cell-numeric",
        _ => "cell",
    };
    match column.class_field.map(|field| row.class_of(field)) {
        Some(class) if !class.is_empty() => format!("{} {}", align, class),
        _ => align.to_string(),
    }
}

fn render_cell(row: &ViewRow, column: ColumnDescriptor, on_action: Callback<(RowAction, String)>) -> AnyView {
    let class = cell_class(row, &column);
    let width = column.fixed_width.map(|w| format!("width: {}px", w));

    match (column.kind.clone(), column.action) {
        (CellKind::IconButton { icon_name, variant }, Some(action)) => {
            let row_id = row.id.clone();
            view! {
                <td class=class style=width>
                    <button
                        class=format!("icon-btn icon-btn-{}", variant)
                        title=column.label.clone()
                        aria-label=column.label.clone()
                        data-icon=icon_name
                        on:click=move |_| on_action.run((action, row_id.clone()))
                    >
                        "🗑"
                    </button>
                </td>
            }
            .into_any()
        }
        (CellKind::Button { variant }, Some(action)) => {
            let row_id = row.id.clone();
            view! {
                <td class=class style=width>
                    <button
                        class=format!("btn btn-{}", variant)
                        on:click=move |_| on_action.run((action, row_id.clone()))
                    >
                        {column.label.clone()}
                    </button>
                </td>
            }
            .into_any()
        }
        _ => {
            let text = cell_text(row, &column);
            view! { <td class=class style=width>{text}</td> }.into_any()
        }
    }
}

/// Line item table
#[component]
pub fn LineItemTable(
    #[prop(into)] columns: Signal<Vec<ColumnDescriptor>>,
    #[prop(into)] rows: Signal<Vec<ViewRow>>,
    #[prop(into)] on_action: Callback<(RowAction, String)>,
) -> impl IntoView {
    view! {
        <table class="line-item-table">
            <thead>
                <tr>
                    <For
                        each=move || columns.get()
                        key=column_key
                        children=move |column| {
                            let label = match column.kind {
                                CellKind::IconButton { .. } => String::new(),
                                _ => column.label.clone(),
                            };
                            view! { <th>{label}</th> }
                        }
                    />
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=row_key
                    children=move |row| {
                        view! {
                            <tr>
                                {move || {
                                    columns
                                        .get()
                                        .into_iter()
                                        .map(|column| render_cell(&row, column, on_action))
                                        .collect_view()
                                }}
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
