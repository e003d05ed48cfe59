//! Tab strip primitives. Selection state is owned by the caller; these only
//! render it and report clicks.

use dioxus::prelude::*;

#[component]
pub fn TabList(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            role: "tablist",
            class: "grid gap-1 p-1 rounded-md bg-neutral-100 {class}",
            {children}
        }
    }
}

#[component]
pub fn TabTrigger(active: bool, onselect: EventHandler<()>, children: Element) -> Element {
    let state_class = if active {
        "bg-white text-neutral-900 shadow-sm"
    } else {
        "bg-transparent text-neutral-600 hover:text-neutral-800"
    };

    rsx! {
        button {
            r#type: "button",
            role: "tab",
            "aria-selected": if active { "true" } else { "false" },
            class: "px-3 py-1.5 rounded text-sm font-medium border-none cursor-pointer {state_class}",
            onclick: move |_| onselect.call(()),
            {children}
        }
    }
}

#[component]
pub fn TabPanel(children: Element) -> Element {
    rsx! {
        div {
            role: "tabpanel",
            {children}
        }
    }
}
