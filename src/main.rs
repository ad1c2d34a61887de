use log::{info, Level};
use yew::prelude::*;
use yew::suspense::Suspense;
use yew_router::prelude::*;

use simplifai_site::components::layout::{Layout, PageLoader};
use simplifai_site::i18n::I18nProvider;

#[function_component]
fn App() -> Html {
    html! {
        <I18nProvider>
            <BrowserRouter>
                <Suspense fallback={html! { <PageLoader full_screen={true} /> }}>
                    <Layout />
                </Suspense>
            </BrowserRouter>
        </I18nProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(Level::Info) {
        // The logger itself is unavailable, so report straight to the console.
        gloo_console::error!("error initializing log:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
