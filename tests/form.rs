//! Browser tests that mount the form component and drive it through
//! real `input` and `submit` events.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, EventInit, HtmlButtonElement, HtmlTextAreaElement, SubmitEventInit};

use pptx_gen_ui::app::App;
use pptx_gen_ui::draft::{DraftStore, LocalStorageDraft};
use pptx_gen_ui::timer::sleep;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().and_then(|w| w.document()).unwrap()
}

/// Renders `App` into a fresh host element and waits for the first paint.
async fn mount() -> (Element, yew::AppHandle<App>) {
    let document = document();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    let handle = yew::Renderer::<App>::with_root(host.clone()).render();
    sleep(50).await;
    (host, handle)
}

fn unmount(host: Element, handle: yew::AppHandle<App>) {
    handle.destroy();
    host.remove();
}

fn button(host: &Element) -> HtmlButtonElement {
    host.query_selector(".btn-primary")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn button_label(host: &Element) -> String {
    host.query_selector(".btn-text")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn status_text(host: &Element) -> String {
    host.query_selector("#status-message")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

/// Sets the textarea value and fires a bubbling `input` event, the same
/// shape the component's `oninput` listener sees for real keystrokes.
fn type_into(host: &Element, text: &str) {
    let textarea: HtmlTextAreaElement = host
        .query_selector("#content")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    textarea.set_value(text);

    let init = EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    textarea.dispatch_event(&event).unwrap();
}

fn submit(host: &Element) {
    let form = host
        .query_selector("form.generator-form")
        .unwrap()
        .unwrap();

    let init = SubmitEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::SubmitEvent::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn rejected_submit_announces_the_error_and_still_clears_the_draft() {
    let store = LocalStorageDraft;
    // A draft left over by other tests must not be restored into the
    // textarea at mount; this test wants an empty form.
    store.clear();
    let (host, handle) = mount().await;
    store.save("Hello world");

    // Empty textarea: trimmed length 0, well below the default minimum.
    submit(&host);
    sleep(50).await;

    let expected = "Please enter at least 100 characters. Current: 0";
    assert_eq!(status_text(&host), expected);

    let toast = document()
        .query_selector(".toast.toast-error")
        .unwrap()
        .expect("rejection should raise an error toast");
    assert_eq!(toast.text_content().as_deref(), Some(expected));

    // No loading state is entered on rejection.
    assert_eq!(button_label(&host), "Generate PPTX");
    assert!(!button(&host).disabled());

    // The draft survives until the 3000ms window elapses, then is
    // removed even though nothing was generated.
    sleep(2500).await;
    assert_eq!(store.load(), Some("Hello world".to_string()));
    sleep(700).await;
    assert_eq!(store.load(), None);

    unmount(host, handle);
}

#[wasm_bindgen_test]
async fn valid_submit_walks_the_button_label_through_loading_and_back() {
    let (host, handle) = mount().await;
    type_into(&host, &"a".repeat(200));
    sleep(50).await;

    assert_eq!(button_label(&host), "Generate PPTX");

    submit(&host);
    sleep(50).await;

    assert_eq!(button_label(&host), "Generating…");
    assert!(button(&host).disabled());
    assert_eq!(status_text(&host), "Generating presentation, please wait...");

    // A programmatic submit while loading is ignored by the handler, so
    // only one generation run completes below.
    submit(&host);

    sleep(2700).await;
    assert_eq!(button_label(&host), "Generate PPTX");
    assert!(!button(&host).disabled());
    assert_eq!(status_text(&host), "Presentation generated successfully!");

    let toasts = document().query_selector_all(".toast.toast-success").unwrap();
    assert_eq!(toasts.length(), 1);

    unmount(host, handle);
}
