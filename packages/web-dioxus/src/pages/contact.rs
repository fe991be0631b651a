//! Contact page component

use dioxus::prelude::*;

const CONTACT_EMAIL: &str = "info@mwangiwekesa.co.ke";

/// Contact page - validated form handed off to the visitor's email client
#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    let is_valid_email = use_memo(move || {
        let e = email();
        e.contains('@') && e.contains('.') && !e.starts_with('@')
    });
    let is_valid = use_memo(move || {
        !name().trim().is_empty() && is_valid_email() && !message().trim().is_empty()
    });

    let handle_submit = move |_| {
        if !is_valid() {
            return;
        }

        let body = format!(
            "{}\n\n--\n{}\n{}",
            message().trim(),
            name().trim(),
            email().trim(),
        );
        let topic = if subject().trim().is_empty() {
            "Enquiry from the website".to_string()
        } else {
            subject().trim().to_string()
        };
        open_mailto(CONTACT_EMAIL, &topic, &body);
        submitted.set(true);
    };

    rsx! {
        div {
            class: "max-w-2xl mx-auto px-6 py-12",

            div {
                class: "mb-8",
                h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Contact Us" }
                p {
                    class: "text-gray-600",
                    "Tell us briefly about your matter and an advocate will come back to \
                     you within one business day."
                }
            }

            if submitted() {
                div {
                    class: "bg-emerald-50 border border-emerald-200 text-emerald-800 p-6 rounded-lg text-center",
                    h3 { class: "text-lg font-semibold mb-2", "Almost there" }
                    p { class: "mb-4", "Your email client should have opened with the message ready to send." }
                    button {
                        class: "px-4 py-2 bg-emerald-800 text-white rounded-lg hover:bg-emerald-900 transition-colors",
                        onclick: move |_| submitted.set(false),
                        "Write Another"
                    }
                }
            } else {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-6",
                    onsubmit: handle_submit,

                    // Name field
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Your Name "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                            placeholder: "Jane Wanjiku",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-600",
                            required: true
                        }
                    }

                    // Email field
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Email Address "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "jane@example.com",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-600",
                            required: true
                        }
                    }

                    // Subject field
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Subject"
                        }
                        input {
                            r#type: "text",
                            value: "{subject}",
                            oninput: move |e| subject.set(e.value()),
                            placeholder: "e.g. Conveyancing for a Kiambu property",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-600"
                        }
                    }

                    // Message field
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Message "
                            span { class: "text-red-500", "*" }
                        }
                        textarea {
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                            placeholder: "How can we help?",
                            rows: "5",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-600 resize-none"
                        }
                        p {
                            class: "mt-1 text-xs text-gray-500",
                            "Please do not include confidential details; nothing sent here \
                             creates an advocate-client relationship."
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full py-3 bg-emerald-800 text-white rounded-lg hover:bg-emerald-900 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !is_valid(),
                        "Send Message"
                    }
                }
            }
        }
    }
}

/// Hand the drafted message to the visitor's email client.
fn open_mailto(to: &str, subject: &str, body: &str) {
    let href = format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(subject),
        urlencoding::encode(body),
    );

    #[cfg(feature = "web")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&href);
    }

    #[cfg(not(feature = "web"))]
    tracing::debug!(%href, "mailto submission");
}
