use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <span class="navbar-title">"EcoPoint"</span>
                <span class="navbar-subtitle">"Tukar sampah jadi poin"</span>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Kategori"</a>
                </li>
                <li class="nav-item">
                    <a href="/profile" class="nav-link">"Profil"</a>
                </li>
            </ul>
        </nav>
    }
}
