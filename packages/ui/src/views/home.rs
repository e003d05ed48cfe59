use dioxus::prelude::*;

use crate::{use_auth, LogoutButton};

/// Landing page after sign-in.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let user = auth().user;
    let name = user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 gap-4",

            if let Some(user) = user {
                h1 {
                    class: "text-neutral-800 font-bold text-[1.75rem]",
                    "Hello, {name}"
                }
                p { class: "text-neutral-600 text-sm", "Signed in as {user.role}" }
                LogoutButton {
                    label: "Sign out",
                    class: "text-sm",
                }
            } else {
                h1 { class: "text-neutral-800 font-bold text-[1.75rem]", "You are not signed in" }
                Link {
                    class: "text-sm font-medium text-neutral-900 hover:underline",
                    to: "/login",
                    "Sign in"
                }
            }
        }
    }
}
