//! Sign-in screen with one tab per account role.

use api::Role;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, TabList, TabPanel, TabTrigger};
use crate::icons::FaCircleExclamation;
use crate::login_form::{submit, LoginForm, MountGuard, Submission, FORGOT_PASSWORD_ROUTE};
use crate::{use_auth, use_auth_client, Icon};

/// Role-specific text on the sign-in screen.
struct PanelCopy {
    tab: &'static str,
    email_label: &'static str,
    email_placeholder: &'static str,
    submit_label: &'static str,
}

fn panel_copy(role: Role) -> PanelCopy {
    match role {
        Role::Customer => PanelCopy {
            tab: "Customer",
            email_label: "Email",
            email_placeholder: "customer@example.com",
            submit_label: "Sign in",
        },
        Role::Restaurant => PanelCopy {
            tab: "Restaurant",
            email_label: "Restaurant Email",
            email_placeholder: "restaurant@example.com",
            submit_label: "Sign in as Restaurant",
        },
        Role::Delivery => PanelCopy {
            tab: "Delivery",
            email_label: "Delivery Email",
            email_placeholder: "delivery@example.com",
            submit_label: "Sign in as Delivery",
        },
    }
}

/// Login page component.
///
/// `query` is the raw query string of the current location; its `role`
/// parameter picks the initial tab.
#[component]
pub fn Login(#[props(default)] query: String) -> Element {
    let mut auth = use_auth();
    let client = use_auth_client();
    let nav = use_navigator();
    let mut form = use_signal(|| LoginForm::from_search(&query));

    let mount = use_hook(MountGuard::new);
    use_drop({
        let mount = mount.clone();
        move || mount.release()
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let mount = mount.clone();
        spawn(async move {
            if let Submission::SignedIn(user) = submit(&mut form, &client, &nav, &mount).await {
                tracing::info!(role = %user.role, "signed in");
                auth.write().user = Some(user);
            }
        });
    };

    let current = form();

    rsx! {
        LoginCard {
            form: current.clone(),
            onselect: move |role| form.write().select_role(role),
            onemail: move |value| form.write().email = value,
            onpassword: move |value| form.write().password = value,
            onsubmit: handle_login,
            forgot_password: rsx! {
                Link {
                    class: "text-sm text-neutral-900 underline-offset-4 hover:underline",
                    to: FORGOT_PASSWORD_ROUTE,
                    "Forgot password?"
                }
            },
            sign_up: rsx! {
                Link {
                    class: "ml-1 font-medium text-neutral-900 underline-offset-4 hover:underline",
                    to: current.register_href(),
                    "Sign up"
                }
            },
        }
    }
}

/// The card itself: header, role tabs, the active panel and the footer.
/// Router links are passed in so the card renders without a router.
#[component]
pub fn LoginCard(
    form: LoginForm,
    onselect: EventHandler<Role>,
    onemail: EventHandler<String>,
    onpassword: EventHandler<String>,
    onsubmit: EventHandler<FormEvent>,
    forgot_password: Element,
    sign_up: Element,
) -> Element {
    let role = form.role();
    let copy = panel_copy(role);
    let email_id = format!("{role}-email");
    let password_id = format!("{role}-password");
    let loading = form.is_loading();

    rsx! {
        div {
            class: "max-w-md mx-auto py-16 px-4",

            div {
                class: "rounded-lg border border-neutral-200 bg-white shadow-sm",

                div {
                    class: "p-6 text-center",
                    h1 { class: "text-2xl font-semibold text-neutral-900", "Welcome back" }
                    p { class: "mt-1.5 text-sm text-neutral-600", "Sign in to your account to continue" }
                }

                div {
                    class: "px-6 pb-6",

                    TabList {
                        class: "grid-cols-3 mb-6",
                        for (tab, tab_label) in Role::ALL.map(|tab| (tab, panel_copy(tab).tab)) {
                            TabTrigger {
                                key: "{tab}",
                                active: tab == role,
                                onselect: move |_| onselect.call(tab),
                                "{tab_label}"
                            }
                        }
                    }

                    TabPanel {
                        form {
                            onsubmit: move |evt| onsubmit.call(evt),
                            class: "flex flex-col gap-4",

                            if let Some(err) = form.error() {
                                div {
                                    class: "flex items-center gap-2 p-3 rounded-md bg-red-50 text-red-600 text-sm",
                                    Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                                    "{err}"
                                }
                            }

                            div {
                                class: "flex flex-col gap-2",
                                label { r#for: "{email_id}", class: "text-sm font-medium", "{copy.email_label}" }
                                Input {
                                    id: email_id.clone(),
                                    r#type: "email",
                                    placeholder: "{copy.email_placeholder}",
                                    value: form.email.clone(),
                                    required: true,
                                    oninput: move |evt: FormEvent| onemail.call(evt.value()),
                                }
                            }

                            div {
                                class: "flex flex-col gap-2",
                                div {
                                    class: "flex items-center justify-between",
                                    label { r#for: "{password_id}", class: "text-sm font-medium", "Password" }
                                    {forgot_password}
                                }
                                Input {
                                    id: password_id.clone(),
                                    r#type: "password",
                                    placeholder: "********",
                                    value: form.password.clone(),
                                    required: true,
                                    oninput: move |evt: FormEvent| onpassword.call(evt.value()),
                                }
                            }

                            Button {
                                variant: ButtonVariant::Primary,
                                class: "w-full text-sm font-medium",
                                r#type: "submit",
                                disabled: loading,
                                if loading { "Signing in..." } else { "{copy.submit_label}" }
                            }
                        }
                    }
                }

                div {
                    class: "flex justify-center px-6 pb-6 text-sm text-neutral-600",
                    "Don't have an account? "
                    {sign_up}
                }
            }
        }
    }
}
