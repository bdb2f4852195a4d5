use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <p class="text-sm text-gray-400 font-mono">{path}</p>
                <Link to="/" class="btn btn-success text-white">"Back to Home"</Link>
            </div>
        </div>
    }
}
