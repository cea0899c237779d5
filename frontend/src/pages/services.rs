use yew::prelude::*;

use crate::behavior::scroll;

#[function_component(Services)]
pub fn services() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll::observe_fade_ins();
            || ()
        },
        (),
    );

    html! {
        <div class="page services-page">
            <section class="content-section">
                <h1>{"What we offer"}</h1>
                <p>{"Every plan includes the full product. The difference is \
                     how much help you want settling in."}</p>
            </section>

            <section class="features-grid">
                <div class="feature-card">
                    <h3>{"Starter"}</h3>
                    <p>{"Self-serve onboarding with guides and templates for \
                         crews of up to five."}</p>
                </div>
                <div class="feature-card">
                    <h3>{"Guided setup"}</h3>
                    <p>{"We migrate your existing checklists and run a \
                         working session with your team."}</p>
                </div>
                <div class="feature-card">
                    <h3>{"Ongoing support"}</h3>
                    <p>{"A named contact who knows your setup and answers \
                         within one business day."}</p>
                </div>
            </section>

            <section class="content-section">
                <h2>{"Not sure which fits?"}</h2>
                <p>{"Write to us from the contact page and describe your \
                     team. We'll tell you honestly if Waypost isn't the \
                     right fit."}</p>
            </section>
        </div>
    }
}
