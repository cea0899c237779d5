use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub const LOADED_CLASS: &str = "loaded";

/// Adds the `loaded` class to `<body>` once the window load event has
/// fired, enabling the CSS entrance transitions. The WASM bundle can
/// start after that event, so an already-complete document counts too.
pub fn mark_loaded_on_window_load() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "complete" {
        mark_loaded(&document);
        return;
    }

    let on_load = Closure::<dyn FnMut()>::new(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            mark_loaded(&document);
        }
    });
    let _ = window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    on_load.forget();
}

fn mark_loaded(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(LOADED_CLASS);
    }
}
