use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::navbar::Navbar;
use crate::config::AppConfig;
use crate::pages::category::CategoryPage;
use crate::pages::profile::ProfilePage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(ApiClient::new(config.api_base.clone()));

    view! {
        <Router>
            <div class="app-layout">
                <Navbar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Halaman tidak ditemukan"</p> }>
                        <Route path=path!("/") view=CategoryPage />
                        <Route path=path!("/profile") view=ProfilePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
