//! Browser tests for the `start()` entry point
//!
//! `start()` installs an interval that is never cleared, so these live in
//! their own test binary and page.
//!
//! Run with: wasm-pack test --headless --chrome --features wasm

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

use titlewave::host::{ANIMATE_CLASS, ANIMATION_PROPERTY};
use titlewave::wasm::start;

fn animation(element: &HtmlElement) -> String {
    element.style().get_property_value(ANIMATION_PROPERTY).unwrap()
}

/// Resolve after `ms` milliseconds of wall-clock time
async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn test_start_animates_and_cycles_first_heading() {
    let document = web_sys::window().unwrap().document().unwrap();
    let h1 = document.create_element("h1").unwrap();
    h1.set_text_content(Some("Hi"));
    document.body().unwrap().append_child(&h1).unwrap();
    let h1 = h1.dyn_into::<HtmlElement>().unwrap();

    // The test page has finished loading, so start() begins right away
    start().unwrap();
    assert_eq!(h1.children().length(), 2);
    assert_eq!(animation(&h1), "jump");
    assert!(h1.class_list().contains(ANIMATE_CLASS));

    sleep(2100).await;
    assert_eq!(animation(&h1), "pop");
    assert!(h1.class_list().contains(ANIMATE_CLASS));
}
