use leptos::prelude::*;

use crate::domain::amazon::ui::AmazonIdList;
use crate::domain::dashboard::Dashboard;
use crate::domain::delivery::ui::DeliveryList;
use crate::domain::employee::ui::EmployeeList;
use crate::domain::location::ui::LocationList;
use crate::domain::returns::ui::ReturnList;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;

/// The screens reachable from the sidebar. No URL router: the shell swaps
/// the center content on this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Deliveries,
    Returns,
    Employees,
    Locations,
    AmazonIds,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Deliveries => "Out Deliveries",
            Screen::Returns => "Returns",
            Screen::Employees => "Employees",
            Screen::Locations => "Locations",
            Screen::AmazonIds => "Amazon IDs",
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let active_screen = RwSignal::new(Screen::Dashboard);
    provide_context(active_screen);

    view! {
        <Shell>
            {move || match active_screen.get() {
                Screen::Dashboard => view! { <Dashboard /> }.into_any(),
                Screen::Deliveries => view! { <DeliveryList /> }.into_any(),
                Screen::Returns => view! { <ReturnList /> }.into_any(),
                Screen::Employees => view! { <EmployeeList /> }.into_any(),
                Screen::Locations => view! { <LocationList /> }.into_any(),
                Screen::AmazonIds => view! { <AmazonIdList /> }.into_any(),
            }}
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().user.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
