use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <h1 class="logo">"Photo Matcher"</h1>
        </header>
    }
}
