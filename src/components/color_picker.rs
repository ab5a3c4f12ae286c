//! Color Picker Component
//!
//! Fixed palette swatch row used by pipeline and status forms.

use leptos::prelude::*;

/// Palette offered for pipelines and statuses
pub const COLOR_PALETTE: &[&str] = &[
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6",
    "#EC4899", "#06B6D4", "#84CC16", "#F97316", "#6366F1",
];

#[component]
pub fn ColorPicker(
    color: ReadSignal<String>,
    set_color: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="color-picker">
            {COLOR_PALETTE.iter().map(|hex| {
                let value = hex.to_string();
                let value_clone = value.clone();
                let is_selected = move || color.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "color-swatch selected" } else { "color-swatch" }
                        style=format!("background-color: {};", hex)
                        on:click=move |_| set_color.set(value_clone.clone())
                    ></button>
                }
            }).collect_view()}
        </div>
    }
}
