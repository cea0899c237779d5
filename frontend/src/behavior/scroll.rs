use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub const FADE_IN_SELECTOR: &str = ".content-section, .feature-card";
pub const VISIBLE_CLASS: &str = "visible";
const FADE_IN_THRESHOLD: f64 = 0.1;

/// Watches the page's content sections and feature cards and marks each
/// one visible once at least 10% of it enters the viewport. The class
/// is never removed again; the observer keeps watching the remaining
/// elements for the page's lifetime.
pub fn observe_fade_ins() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(targets) = document.query_selector_all(FADE_IN_SELECTOR) else {
        return;
    };
    if targets.length() == 0 {
        return;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };

    for index in 0..targets.length() {
        if let Some(target) = targets
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            observer.observe(&target);
        }
    }

    // The callback has to outlive this call.
    on_intersect.forget();
}

/// Scrolls the element with the given id to the top of the viewport.
/// Missing targets are a no-op.
pub fn scroll_to_fragment(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Intercepts clicks on any in-page anchor link via one delegate on
/// the document, so links added later are covered too: suppress the
/// default jump and scroll smoothly instead.
pub fn intercept_anchor_clicks() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
        let Some(anchor) = e
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a[href]").ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if let Some(fragment) = in_page_fragment(&href) {
            e.prevent_default();
            scroll_to_fragment(fragment);
        }
    });

    let _ = document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

fn in_page_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

#[cfg(test)]
mod tests {
    use super::in_page_fragment;

    #[test]
    fn fragment_hrefs_are_intercepted() {
        assert_eq!(in_page_fragment("#features"), Some("features"));
        assert_eq!(in_page_fragment("#"), Some(""));
    }

    #[test]
    fn ordinary_links_are_left_alone() {
        assert_eq!(in_page_fragment("/about"), None);
        assert_eq!(in_page_fragment("https://example.com#features"), None);
        assert_eq!(in_page_fragment(""), None);
    }
}
