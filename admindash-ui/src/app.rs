//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, Nav};
use crate::pages::DashboardPage;
use crate::state::{provide_dashboard_state, use_dashboard_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_dashboard_state();

    // Escape closes the budgeting modal from anywhere on the page
    let state = use_dashboard_state();
    let keydown = window_event_listener(ev::keydown, move |ev| state.handle_keydown(&ev.key()));
    on_cleanup(move || keydown.remove());

    view! {
        <Router>
            <Header />
            <Nav />

            // Every section link renders the same dashboard; the nav bar
            // highlights the section matching the path
            <main class="max-w-7xl mx-auto px-4 pb-10">
                <Routes>
                    <Route path="/*any" view=DashboardPage />
                </Routes>
            </main>
        </Router>
    }
}
