//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h2>"Upload Your Image"</h2>
            <p class="subtitle">"Upload a photo to find matches."</p>
        </div>
    }
}
