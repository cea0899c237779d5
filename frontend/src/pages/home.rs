use yew::prelude::*;

use crate::behavior::scroll;

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll::observe_fade_ins();
            || ()
        },
        (),
    );

    html! {
        <div class="page home-page">
            <style>
                {r#"
                    .hero {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        padding: 4rem 2rem;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .hero p {
                        font-size: 1.25rem;
                        color: #555;
                        max-width: 600px;
                        margin-bottom: 2rem;
                    }
                    .hero-actions a {
                        display: inline-block;
                        margin: 0 0.5rem;
                        padding: 0.75rem 1.75rem;
                        border-radius: 4px;
                        text-decoration: none;
                    }
                    .cta-primary {
                        background-color: #1e90ff;
                        color: #fff;
                    }
                    .cta-secondary {
                        border: 1px solid #1e90ff;
                        color: #1e90ff;
                    }
                "#}
            </style>

            <section class="hero">
                <h1>{"Find your way with Waypost"}</h1>
                <p>{"Waypost keeps small teams pointed in the same direction: \
                     shared checklists, simple handoffs, and a clear view of \
                     what happens next."}</p>
                <div class="hero-actions">
                    <a class="cta-primary" href="/contact">{"Get in touch"}</a>
                    <a class="cta-secondary" href="#features">
                        {"See what's inside"}
                    </a>
                </div>
            </section>

            <section id="features" class="features-grid">
                <div class="feature-card">
                    <h3>{"Checklists that travel"}</h3>
                    <p>{"Hand a runbook to the next person on shift without \
                         losing a single step."}</p>
                </div>
                <div class="feature-card">
                    <h3>{"One shared horizon"}</h3>
                    <p>{"Everyone sees the same week ahead, so nothing lands \
                         on two desks at once."}</p>
                </div>
                <div class="feature-card">
                    <h3>{"Quiet by default"}</h3>
                    <p>{"Waypost only speaks up when something actually needs \
                         a decision from you."}</p>
                </div>
                <div class="feature-card">
                    <h3>{"Works where you are"}</h3>
                    <p>{"A fast site and nothing to install. Open it on any \
                         device and keep moving."}</p>
                </div>
            </section>

            <section class="content-section">
                <h2>{"Built for small crews"}</h2>
                <p>{"Waypost started as a whiteboard in a four-person shop. \
                     It still behaves like one: glanceable, forgiving, and \
                     never in your way."}</p>
            </section>
        </div>
    }
}
