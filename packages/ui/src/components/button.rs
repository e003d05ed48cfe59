use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-neutral-900 text-white hover:bg-neutral-700",
            ButtonVariant::Secondary => "bg-neutral-100 text-neutral-800 hover:bg-neutral-200",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button")] r#type: &'static str,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let state_class = if disabled { "opacity-50 cursor-not-allowed" } else { "cursor-pointer" };

    rsx! {
        button {
            class: "inline-flex items-center justify-center px-4 py-2 rounded-md border-none transition-colors duration-150 {variant_class} {state_class} {class}",
            r#type: r#type,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
