//! WASM API module for browser/JS interop
//!
//! Implements the host traits over the DOM and exports `start()`, which
//! mounts the animator on the page's first `h1`, waits for
//! `DOMContentLoaded`, and then cycles effects on a `setInterval` timer for
//! the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::animator::{Animator, TICK_PERIOD};
use crate::cycle;
use crate::error::Error;
use crate::host::{HeadingElement, Page};
use crate::split::{self, Segment};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

fn host_error(value: JsValue) -> Error {
    Error::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// A browser document
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Page for DomPage {
    type Heading = DomHeading;

    fn query(&self, selector: &str) -> Result<Option<DomHeading>, Error> {
        let element = self.document.query_selector(selector).map_err(host_error)?;
        Ok(element
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .map(|element| DomHeading { element }))
    }
}

/// A heading element in the live DOM
#[derive(Debug, Clone)]
pub struct DomHeading {
    element: HtmlElement,
}

impl DomHeading {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn attached(&self) -> Result<&HtmlElement, Error> {
        if self.element.is_connected() {
            Ok(&self.element)
        } else {
            Err(Error::Detached)
        }
    }
}

impl HeadingElement for DomHeading {
    fn text(&self) -> Result<String, Error> {
        Ok(self.attached()?.text_content().unwrap_or_default())
    }

    fn replace_content(&mut self, segments: &[Segment]) -> Result<(), Error> {
        self.attached()?.set_inner_html(&split::to_markup(segments));
        Ok(())
    }

    fn set_property(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.attached()?.style().set_property(name, value).map_err(host_error)
    }

    fn set_class(&mut self, class: &str, enabled: bool) -> Result<(), Error> {
        let classes = self.attached()?.class_list();
        if enabled {
            classes.add_1(class).map_err(host_error)
        } else {
            classes.remove_1(class).map_err(host_error)
        }
    }

    fn restart(&mut self, class: &str) -> Result<(), Error> {
        let element = self.attached()?;
        let classes = element.class_list();
        classes.remove_1(class).map_err(host_error)?;
        // Reading layout makes the browser treat the re-added class as a new animation
        let _ = element.offset_width();
        classes.add_1(class).map_err(host_error)
    }
}

type SharedAnimator = Rc<RefCell<Animator<DomHeading>>>;

/// Mount on the first `h1` and animate it once the document is ready.
///
/// Fails if the page has no heading.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let animator: SharedAnimator =
        Rc::new(RefCell::new(Animator::mount(&DomPage::new(document.clone()))?));

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || begin(&animator, &window));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        begin(&animator, &window)
    }
}

fn begin(animator: &SharedAnimator, window: &Window) -> Result<(), JsValue> {
    animator.borrow_mut().ready()?;

    let ticker = Rc::clone(animator);
    let on_tick = Closure::<dyn FnMut() -> Result<(), JsValue>>::new(move || {
        ticker.borrow_mut().tick()?;
        Ok(())
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        on_tick.as_ref().unchecked_ref(),
        TICK_PERIOD.as_millis() as i32,
    )?;
    // The interval runs for the lifetime of the page
    on_tick.forget();
    Ok(())
}

/// Split heading text into per-character markup
#[wasm_bindgen(js_name = splitMarkup)]
pub fn split_markup(text: &str) -> String {
    split::split_markup(text)
}

/// Effect identifier shown after `ticks` interval ticks
#[wasm_bindgen(js_name = effectAfter)]
pub fn effect_after(ticks: u32) -> String {
    cycle::effect_after(u64::from(ticks)).name().to_string()
}
