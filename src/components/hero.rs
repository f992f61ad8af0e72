//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"DataPolish - Clean Your Data"</h1>
            <p class="subtitle">
                "Upload a CSV or Excel dataset, review the detected columns, "
                "and get a cleaned file with a quality report."
            </p>
        </div>
    }
}
