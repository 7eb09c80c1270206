use leptos::*;
use leptos_meta::*;
use ui_catalog::CatalogApp;

/// Reads the `?story=<id>` deep link from a location search string.
pub fn initial_story_from_search(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "story")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

fn location_search() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().search().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let initial_story = location_search().and_then(|search| initial_story_from_search(&search));

    view! {
        <Title text="Component Catalog" />
        <Meta name="description" content="Visual catalog of the storybook card and input components." />

        <main class="site-root">
            <CatalogApp initial_story=initial_story />
        </main>
    }
}
