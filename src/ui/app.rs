// src/ui/app.rs - Root component: services, global state and page switching

use dioxus::prelude::*;

use crate::config::StoreConfig;
use crate::navigation::Page;
use crate::ui::{
    layout::Layout,
    pages::{About, CartPage, Contact, Home, ProductPage, Shop},
    services::StoreServices,
    state::{use_store_state, StoreStateProvider},
    TAILWIND_CDN,
};

/// Main application component. Uses the [`StoreConfig`] supplied by the
/// launcher when there is one, defaults otherwise.
#[component]
pub fn App() -> Element {
    let services = use_context_provider(|| {
        let config = try_consume_context::<StoreConfig>().unwrap_or_default();
        tracing::debug!(environment = %config.app.environment, "storefront services ready");
        StoreServices::simulated(config)
    });
    let title = services.config.ui.window_title.clone();

    rsx! {
        document::Title { "{title}" }
        document::Script { src: TAILWIND_CDN.to_string() }
        StoreStateProvider {
            Layout {
                CurrentPage {}
            }
        }
    }
}

/// Renders the page selected in the navigation state. Keyed by path so a page
/// remounts with fresh local state when its parameters change.
#[component]
fn CurrentPage() -> Element {
    let state = use_store_state();
    let navigation = state.navigation;
    let path = navigation.to_path();

    match navigation.current {
        Page::Home => rsx! { Home { key: "{path}" } },
        Page::Shop => rsx! {
            Shop { key: "{path}", initial_category: navigation.selected_category.clone() }
        },
        Page::Product => rsx! {
            ProductPage { key: "{path}", product_id: navigation.selected_product_id.clone() }
        },
        Page::Cart => rsx! { CartPage { key: "{path}" } },
        Page::About => rsx! { About { key: "{path}" } },
        Page::Contact => rsx! { Contact { key: "{path}" } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_component_renders() {
        let mut vdom = VirtualDom::new(App);
        vdom.rebuild_in_place();
    }

    #[test]
    fn app_uses_the_launcher_config() {
        let mut config = StoreConfig::default();
        config.ui.featured_per_slide = 2;

        let mut vdom = VirtualDom::new(App).with_root_context(config);
        vdom.rebuild_in_place();
    }
}
