use yew::prelude::*;

use crate::behavior::scroll;

#[function_component(About)]
pub fn about() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll::observe_fade_ins();
            || ()
        },
        (),
    );

    html! {
        <div class="page about-page">
            <section class="content-section">
                <h1>{"About Waypost"}</h1>
                <p>{"We are a small team that spent a decade coordinating \
                     field crews with spreadsheets and group chats. Waypost \
                     is the tool we wished we'd had: one place to see who is \
                     doing what, and what is waiting on whom."}</p>
            </section>

            <section class="content-section">
                <h2>{"How we work"}</h2>
                <p>{"We ship small and often, talk to every customer who \
                     writes in, and say no to features that would make the \
                     product need a manual."}</p>
            </section>

            <section class="content-section">
                <h2>{"Where we're headed"}</h2>
                <p>{"The roadmap is short on purpose: better handoffs, \
                     calmer notifications, and printing that actually \
                     works."}</p>
            </section>
        </div>
    }
}
