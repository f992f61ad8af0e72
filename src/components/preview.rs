//! Dataset preview shown after a successful upload.
//!
//! Renders the column table, a handful of sample rows and the
//! mixed-column warning coming back from the backend preview endpoint.

use leptos::*;
use serde_json::Value;

use crate::config::MAX_SAMPLE_ROWS;
use crate::types::PreviewResponse;

/// Text for one preview table cell.
///
/// Sample rows arrive as JSON objects keyed by column name; missing values
/// and nulls render as an empty cell, strings without quotes.
pub fn cell_text(row: &Value, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[component]
pub fn PreviewSection(
    data: ReadSignal<Option<PreviewResponse>>,
    set_data: WriteSignal<Option<PreviewResponse>>,
) -> impl IntoView {
    let on_start_over = move |_| {
        log::info!("🔄 Starting over, back to the upload widget");
        set_data.set(None);
    };

    view! {
        {move || data.get().map(|preview| {
            let total_rows = preview.total_rows;
            let requires_decisions = preview.requires_decisions;
            let columns = preview.columns.clone();
            let header_columns = columns.clone();
            let mixed = preview.mixed_columns.clone();
            let rows: Vec<Value> = preview
                .sample_rows
                .iter()
                .take(MAX_SAMPLE_ROWS)
                .cloned()
                .collect();

            view! {
                <div class="card preview-card">
                    <div class="preview-header">
                        <h2>"Dataset Preview"</h2>
                        <span class="preview-stats">
                            {format!("{} rows, {} columns", total_rows, columns.len())}
                        </span>
                    </div>

                    <Show
                        when=move || requires_decisions
                        fallback=|| view! { }
                    >
                        <div class="preview-warning">
                            "⚠️ Some columns hold mixed types and need a cleaning decision"
                        </div>
                    </Show>

                    <div class="preview-table-wrapper">
                        <table class="preview-table">
                            <thead>
                                <tr>
                                    {header_columns.iter().map(|column| {
                                        let is_mixed = mixed.contains(&column.name);
                                        view! {
                                            <th class:mixed=is_mixed>
                                                <span class="column-name">{column.name.clone()}</span>
                                                <span class="column-dtype">{column.dtype.clone()}</span>
                                            </th>
                                        }
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows.iter().map(|row| {
                                    view! {
                                        <tr>
                                            {columns.iter().map(|column| {
                                                view! {
                                                    <td>{cell_text(row, &column.name)}</td>
                                                }
                                            }).collect_view()}
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <button class="preview-reset" on:click=on_start_over>
                        "Start over"
                    </button>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cell_text_renders_scalars_without_json_noise() {
        let row = json!({"city": "Lyon", "zip": 69000, "active": true, "note": null});
        assert_eq!(cell_text(&row, "city"), "Lyon");
        assert_eq!(cell_text(&row, "zip"), "69000");
        assert_eq!(cell_text(&row, "active"), "true");
        assert_eq!(cell_text(&row, "note"), "");
        assert_eq!(cell_text(&row, "missing"), "");
    }
}
