use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod error;
pub mod components;
pub mod shop;
pub mod auth {
    pub mod context;
    pub mod login_modal;
}
pub mod pages {
    pub mod not_found;
    pub mod quote;
    pub mod shop_detail;
}
pub mod utils {
    pub mod api;
}

use auth::context::AuthProvider;
use pages::not_found::NotFound;
use pages::quote::QuotePage;
use pages::shop_detail::ShopDetailPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/shop/detail")]
    ShopDetail,
    #[at("/quote")]
    Quote,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::ShopDetail => html! { <ShopDetailPage /> },
        Route::Quote => html! { <QuotePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}
