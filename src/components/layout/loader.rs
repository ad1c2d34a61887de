use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageLoaderProps {
    /// Cover the whole viewport instead of just the content area.
    #[prop_or_default]
    pub full_screen: bool,
}

/// Shown while a page waits for its locale bundles.
#[function_component(PageLoader)]
pub fn page_loader(props: &PageLoaderProps) -> Html {
    html! {
        <div
            class={classes!("page-loader", props.full_screen.then_some("page-loader--full"))}
            role="status"
            aria-live="polite"
        >
            <span class="page-loader__spinner" />
        </div>
    }
}

/// Resets the window to the top on every navigation.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );

    html! {}
}
