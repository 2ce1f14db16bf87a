// src/ui/layout/header.rs - Sticky navigation bar with logo, menu and cart badge

use dioxus::prelude::*;

use crate::navigation::Page;
use crate::ui::state::{use_store_state_with_dispatch, StoreAction};

/// Leaf logo mark used by the header and footer
#[component]
pub fn LogoMark(#[props(default = "text-gray-900".to_string())] text_class: String) -> Element {
    rsx! {
        div {
            class: "flex items-center space-x-2",
            div {
                class: "w-8 h-8 bg-green-500 rounded-lg flex items-center justify-center",
                svg {
                    class: "w-5 h-5 text-white",
                    xmlns: "http://www.w3.org/2000/svg",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z M2 21c0-3 1.85-5.36 5.08-6"
                    }
                }
            }
            span {
                class: format!("font-semibold text-xl {}", text_class),
                "FreshVeg"
            }
        }
    }
}

/// Main header component
#[component]
pub fn Header() -> Element {
    let (state, dispatch) = use_store_state_with_dispatch();

    let cart_count = state.cart.total_item_count();
    let mobile_menu_open = state.mobile_menu_open;

    let nav_class = |active: bool| {
        if active {
            "px-3 py-2 rounded-md transition-colors duration-200 text-green-600 bg-green-50"
        } else {
            "px-3 py-2 rounded-md transition-colors duration-200 text-gray-700 hover:text-green-600 hover:bg-gray-50"
        }
    };

    rsx! {
        header {
            class: "bg-white/95 backdrop-blur-sm border-b border-green-100 sticky top-0 z-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex items-center justify-between h-16",

                    button {
                        r#type: "button",
                        class: "cursor-pointer",
                        onclick: move |_| dispatch(StoreAction::navigate(Page::Home)),
                        LogoMark {}
                    }

                    nav {
                        class: "hidden md:flex space-x-8",
                        for page in Page::MENU {
                            button {
                                key: "{page.as_str()}",
                                r#type: "button",
                                class: nav_class(state.navigation.is_active(page)),
                                onclick: move |_| dispatch(StoreAction::navigate(page)),
                                "{page.label()}"
                            }
                        }
                    }

                    div {
                        class: "flex items-center space-x-2",

                        // Search opens the catalog, where the search box lives
                        button {
                            r#type: "button",
                            class: "hidden sm:inline-flex p-2 rounded-md text-gray-600 hover:text-green-600 hover:bg-gray-50",
                            aria_label: "Rechercher",
                            onclick: move |_| dispatch(StoreAction::navigate(Page::Shop)),
                            svg {
                                class: "w-5 h-5",
                                xmlns: "http://www.w3.org/2000/svg",
                                fill: "none",
                                view_box: "0 0 24 24",
                                stroke: "currentColor",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"
                                }
                            }
                        }

                        button {
                            r#type: "button",
                            class: "relative p-2 rounded-md text-gray-600 hover:text-green-600 hover:bg-gray-50",
                            aria_label: "Panier",
                            onclick: move |_| dispatch(StoreAction::navigate(Page::Cart)),
                            svg {
                                class: "w-5 h-5",
                                xmlns: "http://www.w3.org/2000/svg",
                                fill: "none",
                                view_box: "0 0 24 24",
                                stroke: "currentColor",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z"
                                }
                            }
                            if cart_count > 0 {
                                span {
                                    class: "absolute -top-1 -right-1 w-5 h-5 flex items-center justify-center rounded-full text-xs text-white bg-green-500",
                                    "{cart_count}"
                                }
                            }
                        }

                        button {
                            r#type: "button",
                            class: "md:hidden p-2 rounded-md text-gray-600 hover:text-green-600 hover:bg-gray-50",
                            aria_label: "Menu",
                            aria_expanded: "{mobile_menu_open}",
                            onclick: move |_| dispatch(StoreAction::ToggleMobileMenu),
                            svg {
                                class: "w-5 h-5",
                                xmlns: "http://www.w3.org/2000/svg",
                                fill: "none",
                                view_box: "0 0 24 24",
                                stroke: "currentColor",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: if mobile_menu_open { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" }
                                }
                            }
                        }
                    }
                }

                if mobile_menu_open {
                    nav {
                        class: "md:hidden flex flex-col pb-4 space-y-1",
                        for page in Page::MENU {
                            button {
                                key: "mobile-{page.as_str()}",
                                r#type: "button",
                                class: format!("text-left {}", nav_class(state.navigation.is_active(page))),
                                onclick: move |_| dispatch(StoreAction::navigate(page)),
                                "{page.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
