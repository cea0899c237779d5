use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::behavior::feedback::{FeedbackBoard, FeedbackKind, FormFeedback, REMOVE_AFTER_MS};
use crate::behavior::{scroll, validation};

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let board = use_mut_ref(FeedbackBoard::default);
    let feedback = use_state(|| None::<FormFeedback>);

    use_effect_with_deps(
        move |_| {
            scroll::observe_fade_ins();
            || ()
        },
        (),
    );

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let board = board.clone();
        let feedback = feedback.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (kind, text) =
                match validation::validate_submission(name.as_str(), email.as_str(), message.as_str()) {
                    Ok(()) => (FeedbackKind::Success, validation::SUCCESS_MESSAGE),
                    Err(error) => (FeedbackKind::Error, error.message()),
                };

            if kind == FeedbackKind::Success {
                // Simulated submission: no request leaves the page.
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }

            let seq = board.borrow_mut().show(kind, text);
            feedback.set(board.borrow().current().cloned());

            let board = board.clone();
            let feedback = feedback.clone();
            Timeout::new(REMOVE_AFTER_MS, move || {
                board.borrow_mut().expire(seq);
                feedback.set(board.borrow().current().cloned());
            })
            .forget();
        })
    };

    html! {
        <div class="page contact-page">
            <style>
                {r#"
                    .contact-page .content-section {
                        max-width: 640px;
                        margin: 0 auto;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-form label {
                        font-weight: bold;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.75rem;
                        border: 1px solid #ccc;
                        border-radius: 4px;
                        font: inherit;
                    }
                    .contact-form textarea {
                        min-height: 140px;
                        resize: vertical;
                    }
                    .contact-form button {
                        align-self: flex-start;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 4px;
                        background-color: #1e90ff;
                        color: #fff;
                        cursor: pointer;
                    }
                "#}
            </style>

            <section class="content-section">
                <h1>{"Talk to us"}</h1>
                <p>{"Tell us what your team is wrestling with and we'll get \
                     back to you within a couple of days."}</p>

                <form id="contactForm" class="contact-form" onsubmit={onsubmit}>
                    <label for="name">{"Name"}</label>
                    <input
                        id="name"
                        type="text"
                        value={(*name).clone()}
                        onchange={let name = name.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }}
                    />

                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="text"
                        value={(*email).clone()}
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />

                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        value={(*message).clone()}
                        onchange={let message = message.clone(); move |e: Event| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(input.value());
                        }}
                    />

                    <button type="submit">{"Send message"}</button>
                </form>
                {
                    if let Some(current) = (*feedback).as_ref() {
                        html! {
                            <div class={current.kind.class()}>
                                {current.text}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </section>
        </div>
    }
}
