use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text")] r#type: &'static str,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id,
            class: "px-3 py-2 rounded-md border border-neutral-300 text-sm text-neutral-800 placeholder:text-neutral-400 focus:outline-none focus:border-neutral-500 {class}",
            r#type: r#type,
            placeholder,
            value,
            required,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
