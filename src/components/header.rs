use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header(
    /// True while an upload or preview request is in flight.
    is_busy: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
                <span class="badge">"beta"</span>
            </div>
            <div class="header-right">
                <span class="status" class:busy=move || is_busy.get()>
                    {move || if is_busy.get() {
                        "Processing..."
                    } else {
                        "Ready"
                    }}
                </span>
            </div>
        </header>
    }
}
