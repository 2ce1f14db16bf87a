// src/ui/state.rs - Storefront state management and context

use dioxus::prelude::*;
use uuid::Uuid;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::navigation::{NavigationState, Page};
use crate::types::ProductId;
use crate::ui::{services::use_services, Notification};
use crate::utils::Time;

/// Global state shared by every view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreStateContext {
    pub navigation: NavigationState,
    pub cart: Cart,
    pub notifications: Vec<Notification>,
    pub mobile_menu_open: bool,
}

/// Actions that can be performed on the store state
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    Navigate {
        page: Page,
        product_id: Option<ProductId>,
        category: Option<String>,
    },
    AddToCart {
        product_id: ProductId,
        quantity: u32,
    },
    UpdateQuantity {
        item_id: ProductId,
        quantity: u32,
    },
    RemoveItem(ProductId),
    Notify(Notification),
    DismissNotification(Uuid),
    ToggleMobileMenu,
    SetMobileMenuOpen(bool),
}

impl StoreAction {
    pub fn navigate(page: Page) -> Self {
        Self::Navigate {
            page,
            product_id: None,
            category: None,
        }
    }

    pub fn view_product(product_id: impl Into<ProductId>) -> Self {
        Self::Navigate {
            page: Page::Product,
            product_id: Some(product_id.into()),
            category: None,
        }
    }

    pub fn browse_category(category: impl Into<String>) -> Self {
        Self::Navigate {
            page: Page::Shop,
            product_id: None,
            category: Some(category.into()),
        }
    }

    pub fn add_to_cart(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self::AddToCart {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// State reducer function. Cart outcomes become notifications here so every
/// caller gets the same feedback.
pub fn store_state_reducer(
    state: &StoreStateContext,
    action: StoreAction,
    catalog: &Catalog,
) -> StoreStateContext {
    let mut new_state = state.clone();

    match action {
        StoreAction::Navigate {
            page,
            product_id,
            category,
        } => {
            new_state.navigation.navigate(page, product_id, category);
            new_state.mobile_menu_open = false;
        }
        StoreAction::AddToCart {
            product_id,
            quantity,
        } => match new_state.cart.add_to_cart(catalog, &product_id, quantity) {
            Ok(event) => new_state
                .notifications
                .push(Notification::success(event.message())),
            Err(err) => {
                tracing::warn!(error = %err, "add to cart refused");
                new_state
                    .notifications
                    .push(Notification::error("Produit non trouvé"));
            }
        },
        StoreAction::UpdateQuantity { item_id, quantity } => {
            if let Some(event) = new_state.cart.update_quantity(&item_id, quantity) {
                new_state
                    .notifications
                    .push(Notification::success(event.message()));
            }
        }
        StoreAction::RemoveItem(item_id) => {
            if let Some(event) = new_state.cart.remove_item(&item_id) {
                new_state
                    .notifications
                    .push(Notification::success(event.message()));
            }
        }
        StoreAction::Notify(notification) => {
            new_state.notifications.push(notification);
        }
        StoreAction::DismissNotification(id) => {
            new_state.notifications.retain(|n| n.id != id);
        }
        StoreAction::ToggleMobileMenu => {
            new_state.mobile_menu_open = !new_state.mobile_menu_open;
        }
        StoreAction::SetMobileMenuOpen(open) => {
            new_state.mobile_menu_open = open;
        }
    }

    new_state
}

/// Scrolls the window back to the top after a page change
fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
    }
}

/// Store state provider component
#[component]
pub fn StoreStateProvider(children: Element) -> Element {
    let services = use_services();
    let mut state = use_signal(StoreStateContext::default);

    let get_state = use_callback(move |_: ()| state());

    let dispatch = use_callback(move |action: StoreAction| {
        let is_navigation = matches!(action, StoreAction::Navigate { .. });
        let known: Vec<Uuid> = state.peek().notifications.iter().map(|n| n.id).collect();

        let next = store_state_reducer(&state.peek(), action, &services.catalog);

        // New toasts dismiss themselves
        let timeout = services.config.ui.notification_timeout();
        for notification in next.notifications.iter().filter(|n| !known.contains(&n.id)) {
            let id = notification.id;
            spawn(async move {
                let mut state = state;
                Time::sleep(timeout).await;
                state.with_mut(|s| s.notifications.retain(|n| n.id != id));
            });
        }

        state.set(next);

        if is_navigation {
            scroll_to_top();
        }
    });

    use_context_provider(|| get_state);
    use_context_provider(|| dispatch);

    rsx! {
        {children}
    }
}

/// Hook to access the current store state
pub fn use_store_state() -> StoreStateContext {
    let get_state = use_context::<Callback<(), StoreStateContext>>();
    get_state(())
}

/// Hook to dispatch actions to the store state
pub fn use_store_dispatch() -> Callback<StoreAction> {
    use_context::<Callback<StoreAction>>()
}

/// Hook that provides both state and dispatch
pub fn use_store_state_with_dispatch() -> (StoreStateContext, Callback<StoreAction>) {
    let state = use_store_state();
    let dispatch = use_store_dispatch();
    (state, dispatch)
}

/// Navigation callback in the `(page, product id, category)` shape views expect
pub fn use_navigate() -> Callback<(Page, Option<ProductId>, Option<String>)> {
    let dispatch = use_store_dispatch();
    use_callback(
        move |(page, product_id, category): (Page, Option<ProductId>, Option<String>)| {
            dispatch(StoreAction::Navigate {
                page,
                product_id,
                category,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;
    use crate::ui::NotificationType;

    fn reduce(state: &StoreStateContext, action: StoreAction) -> StoreStateContext {
        store_state_reducer(state, action, &Catalog::seed())
    }

    #[test]
    fn test_default_store_state() {
        let state = StoreStateContext::default();
        assert_eq!(state.navigation.current, Page::Home);
        assert!(state.cart.is_empty());
        assert!(state.notifications.is_empty());
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_add_to_cart_notifies() {
        let state = reduce(&StoreStateContext::default(), StoreAction::add_to_cart("1", 1));
        let state = reduce(&state, StoreAction::add_to_cart("1", 2));

        assert_eq!(state.cart.total_item_count(), 3);
        assert_eq!(state.cart.subtotal(), Money(6750));

        let messages: Vec<&str> = state.notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Ajouté au panier : Tomates Cerises Bio",
                "Quantité mise à jour : Tomates Cerises Bio",
            ]
        );
    }

    #[test]
    fn test_unknown_product_shows_error_without_mutation() {
        let state = reduce(&StoreStateContext::default(), StoreAction::add_to_cart("404", 1));

        assert!(state.cart.is_empty());
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].notification_type, NotificationType::Error);
        assert_eq!(state.notifications[0].message, "Produit non trouvé");
    }

    #[test]
    fn test_quantity_zero_removes_with_notification() {
        let state = reduce(&StoreStateContext::default(), StoreAction::add_to_cart("7", 2));
        let state = reduce(
            &state,
            StoreAction::UpdateQuantity {
                item_id: "7".into(),
                quantity: 0,
            },
        );

        assert!(state.cart.is_empty());
        assert_eq!(
            state.notifications.last().map(|n| n.message.as_str()),
            Some("Radis Roses retiré du panier")
        );

        // removing again is silent
        let again = reduce(&state, StoreAction::RemoveItem("7".into()));
        assert_eq!(again.notifications.len(), state.notifications.len());
    }

    #[test]
    fn test_navigation_closes_mobile_menu() {
        let state = reduce(&StoreStateContext::default(), StoreAction::ToggleMobileMenu);
        assert!(state.mobile_menu_open);

        let state = reduce(&state, StoreAction::browse_category("leafy"));
        assert!(!state.mobile_menu_open);
        assert_eq!(state.navigation.current, Page::Shop);
        assert_eq!(state.navigation.selected_category.as_deref(), Some("leafy"));
    }

    #[test]
    fn test_dismiss_notification() {
        let notification = Notification::info("Bienvenue");
        let id = notification.id;
        let state = reduce(&StoreStateContext::default(), StoreAction::Notify(notification));
        assert_eq!(state.notifications.len(), 1);

        let state = reduce(&state, StoreAction::DismissNotification(id));
        assert!(state.notifications.is_empty());
    }
}
