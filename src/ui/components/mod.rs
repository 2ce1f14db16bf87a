// src/ui/components/mod.rs - Reusable UI components

use dioxus::prelude::*;

mod product;

pub use product::{ImageWithFallback, PriceTag, ProductCard, QuantityStepper, RatingStars};

/// Button component with consistent styling
#[component]
pub fn Button(
    #[props(default = "button".to_string())] button_type: String,
    #[props(default = "primary".to_string())] variant: String,
    #[props(default = "md".to_string())] size: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] loading: bool,
    #[props(default = "".to_string())] class: String,
    #[props(default = None)] onclick: Option<Callback<MouseEvent>>,
    children: Element,
) -> Element {
    let base_classes = "inline-flex items-center justify-center border font-medium rounded-lg focus:outline-none focus:ring-2 focus:ring-offset-2 transition-colors";

    let variant_classes = match variant.as_str() {
        "primary" => "border-transparent text-white bg-green-600 hover:bg-green-700 focus:ring-green-500",
        "outline" => "border-green-600 text-green-600 bg-white hover:bg-green-50 focus:ring-green-500",
        "danger" => "border-transparent text-red-600 bg-transparent hover:bg-red-50 focus:ring-red-500",
        "ghost" => "border-transparent text-gray-700 hover:bg-gray-100 focus:ring-green-500",
        "light" => "border-transparent text-green-700 bg-white hover:bg-green-50 focus:ring-white",
        _ => "border-gray-300 text-gray-700 bg-white hover:bg-gray-50 focus:ring-green-500",
    };

    let size_classes = match size.as_str() {
        "sm" => "px-3 py-2 text-sm leading-4",
        "md" => "px-4 py-2 text-sm",
        "lg" => "px-6 py-3 text-base",
        "icon" => "p-2",
        _ => "px-4 py-2 text-sm",
    };

    let disabled_classes = if disabled || loading {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        button {
            r#type: "{button_type}",
            class: format!("{} {} {} {} {}", base_classes, variant_classes, size_classes, disabled_classes, class),
            disabled: disabled || loading,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },

            if loading {
                Spinner { size: "sm".to_string(), class: "-ml-1 mr-2".to_string() }
            }

            {children}
        }
    }
}

/// Input component with consistent styling
#[component]
pub fn Input(
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = "".to_string())] name: String,
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = "".to_string())] class: String,
    #[props(default = None)] oninput: Option<Callback<FormEvent>>,
) -> Element {
    let base_classes = "block w-full rounded-lg border border-gray-300 px-3 py-2 shadow-sm focus:ring-green-500 focus:border-green-500 sm:text-sm";
    let disabled_classes = if disabled { "bg-gray-50 text-gray-500" } else { "" };

    rsx! {
        input {
            r#type: "{input_type}",
            name: "{name}",
            id: "{id}",
            placeholder: "{placeholder}",
            value: "{value}",
            required: required,
            disabled: disabled,
            class: format!("{} {} {}", base_classes, disabled_classes, class),
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            }
        }
    }
}

/// Multi-line text input
#[component]
pub fn TextArea(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = 5)] rows: u32,
    #[props(default = false)] disabled: bool,
    #[props(default = None)] oninput: Option<Callback<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            rows: "{rows}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled: disabled,
            class: "block w-full rounded-lg border border-gray-300 px-3 py-2 shadow-sm focus:ring-green-500 focus:border-green-500 sm:text-sm resize-none",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            }
        }
    }
}

/// One `<option>` of a [`Select`]
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native select with the shared input styling
#[component]
pub fn Select(
    #[props(default = "".to_string())] id: String,
    value: String,
    options: Vec<SelectOption>,
    #[props(default = None)] placeholder: Option<String>,
    #[props(default = "".to_string())] class: String,
    #[props(default = None)] onchange: Option<Callback<String>>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: format!("block w-full rounded-lg border border-gray-300 bg-white px-3 py-2 shadow-sm focus:ring-green-500 focus:border-green-500 sm:text-sm {}", class),
            onchange: move |evt| {
                if let Some(handler) = &onchange {
                    handler.call(evt.value());
                }
            },
            if let Some(placeholder) = placeholder {
                option {
                    value: "",
                    disabled: true,
                    selected: value.is_empty(),
                    "{placeholder}"
                }
            }
            for option in options {
                option {
                    key: "{option.value}",
                    value: "{option.value}",
                    selected: option.value == value,
                    "{option.label}"
                }
            }
        }
    }
}

/// Label component
#[component]
pub fn Label(
    #[props(default = "".to_string())] html_for: String,
    #[props(default = false)] required: bool,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: format!("block text-sm font-medium text-gray-700 mb-2 {}", class),
            {children}
            if required {
                span {
                    class: "text-red-500 ml-1",
                    "*"
                }
            }
        }
    }
}

/// Form field wrapper component
#[component]
pub fn FormField(
    #[props(default = "".to_string())] label: String,
    #[props(default = "".to_string())] id: String,
    #[props(default = false)] required: bool,
    #[props(default = None)] error: Option<String>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("space-y-1 {}", class),

            if !label.is_empty() {
                Label {
                    html_for: id.clone(),
                    required: required,
                    "{label}"
                }
            }

            {children}

            if let Some(error_msg) = error {
                p {
                    class: "text-sm text-red-600",
                    "{error_msg}"
                }
            }
        }
    }
}

/// Alert/Banner component
#[component]
pub fn Alert(
    #[props(default = "info".to_string())] variant: String,
    #[props(default = "".to_string())] title: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let (bg_color, border_color, text_color, title_color) = match variant.as_str() {
        "success" => ("bg-green-50", "border-green-200", "text-green-700", "text-green-800"),
        "warning" => ("bg-orange-50", "border-orange-200", "text-orange-700", "text-orange-800"),
        "error" => ("bg-red-50", "border-red-200", "text-red-700", "text-red-800"),
        _ => ("bg-blue-50", "border-blue-200", "text-blue-700", "text-blue-800"),
    };

    rsx! {
        div {
            class: format!("rounded-lg {} border {} p-4 {}", bg_color, border_color, class),
            if !title.is_empty() {
                h3 {
                    class: format!("text-sm font-medium {}", title_color),
                    "{title}"
                }
            }
            div {
                class: format!("text-sm {}", text_color),
                {children}
            }
        }
    }
}

/// Badge component
#[component]
pub fn Badge(
    #[props(default = "gray".to_string())] variant: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let variant_classes = match variant.as_str() {
        "red" => "bg-red-500 text-white",
        "orange" => "bg-orange-500 text-white",
        "green" => "bg-green-600 text-white",
        "light" => "bg-green-100 text-green-800",
        _ => "bg-gray-100 text-gray-800",
    };

    rsx! {
        span {
            class: format!("inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {} {}", variant_classes, class),
            {children}
        }
    }
}

/// Badge colour for a product badge label
pub fn badge_variant(label: &str) -> &'static str {
    match label {
        "Promo" => "red",
        "Nouveau" => "green",
        _ => "orange",
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    #[props(default = "md".to_string())] size: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let size_classes = match size.as_str() {
        "sm" => "h-4 w-4",
        "md" => "h-6 w-6",
        "lg" => "h-8 w-8",
        _ => "h-6 w-6",
    };

    rsx! {
        svg {
            class: format!("animate-spin {} {}", size_classes, class),
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            circle {
                class: "opacity-25",
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4"
            }
            path {
                class: "opacity-75",
                fill: "currentColor",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            }
        }
    }
}

/// Card component
#[component]
pub fn Card(
    #[props(default = "".to_string())] title: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("bg-white overflow-hidden shadow-lg rounded-2xl {}", class),

            if !title.is_empty() {
                div {
                    class: "px-6 pt-6",
                    h3 {
                        class: "text-lg font-semibold text-gray-900",
                        "{title}"
                    }
                }
            }

            div {
                class: "p-6",
                {children}
            }
        }
    }
}

/// Centered icon, message and optional action for empty lists
#[component]
pub fn EmptyState(
    icon: String,
    title: String,
    #[props(default = "".to_string())] message: String,
    #[props(default = None)] action: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "text-center py-16",
            div {
                class: "text-6xl mb-4",
                "{icon}"
            }
            h2 {
                class: "text-2xl font-bold text-gray-900 mb-2",
                "{title}"
            }
            if !message.is_empty() {
                p {
                    class: "text-gray-600 mb-6",
                    "{message}"
                }
            }
            if let Some(action) = action {
                {action}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_component() {
        let _button = rsx! {
            Button {
                variant: "primary".to_string(),
                "Ajouter au panier"
            }
        };
    }

    #[test]
    fn test_input_component() {
        let _input = rsx! {
            Input {
                input_type: "email".to_string(),
                placeholder: "votre@email.com".to_string()
            }
        };
    }

    #[test]
    fn test_select_option() {
        let option = SelectOption::new("price-low", "Prix croissant");
        assert_eq!(option.value, "price-low");
        assert_eq!(option.label, "Prix croissant");
    }

    #[test]
    fn test_badge_variant() {
        assert_eq!(badge_variant("Promo"), "red");
        assert_eq!(badge_variant("Nouveau"), "green");
        assert_eq!(badge_variant("Bio"), "orange");
    }
}
