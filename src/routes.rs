use log::info;
use yew::prelude::*;
use yew::suspense::Suspense;
use yew_router::prelude::*;

use crate::components::layout::PageLoader;
use crate::i18n::Namespace;
use crate::pages::{
    about::About,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    services::Services,
    solutions::{accelerate::Accelerate, intellify::Intellify, simplify::Simplify},
};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/solutions/simplify")]
    Simplify,
    #[at("/solutions/accelerate")]
    Accelerate,
    #[at("/solutions/intellify")]
    Intellify,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Simplify,
        Route::Accelerate,
        Route::Intellify,
        Route::Contact,
        Route::NotFound,
    ];

    /// Bundles a page reads besides `common`.
    pub fn namespaces(&self) -> &'static [Namespace] {
        match self {
            Route::Home => &[Namespace::Home],
            Route::About => &[Namespace::About],
            Route::Services => &[Namespace::Services],
            Route::Simplify => &[Namespace::Solutions],
            Route::Accelerate => &[Namespace::Accelerate, Namespace::Solutions],
            Route::Intellify => &[Namespace::Solutions],
            Route::Contact => &[Namespace::Contact],
            Route::NotFound => &[],
        }
    }

    /// The page behind an in-app link found in content, if there is one.
    /// A trailing slash is tolerated; `/404` itself is not a link target.
    pub fn from_link(link: &str) -> Option<Route> {
        let path = match link.trim() {
            "/" => "/",
            other => other.trim_end_matches('/'),
        };
        Self::ALL
            .into_iter()
            .filter(|route| *route != Route::NotFound)
            .find(|route| route.to_path() == path)
    }

    /// Solution page for a card id.
    pub fn solution(id: &str) -> Option<Route> {
        match id {
            "simplify" => Some(Route::Simplify),
            "accelerate" => Some(Route::Accelerate),
            "intellify" | "smartify" => Some(Route::Intellify),
            _ => None,
        }
    }
}

pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Simplify => {
            info!("Rendering Simplify page");
            html! { <Simplify /> }
        }
        Route::Accelerate => {
            info!("Rendering Accelerate page");
            html! { <Accelerate /> }
        }
        Route::Intellify => {
            info!("Rendering Intellify page");
            html! { <Intellify /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    };

    html! {
        <Suspense fallback={html! { <PageLoader /> }}>
            { page }
        </Suspense>
    }
}
