use core_rtx::{DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE, compose};
use data_model_rtx::{GenerationInput, Platform, Strategy};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlSelectElement, Url,
    console,
};

pub mod html;

use html::{COPY_BUTTON_ID, DOWNLOAD_BUTTON_ID, OUTPUT_ID, PLATFORM_SELECT_ID, SITEMAP_INPUT_ID, STRATEGY_INPUT_NAME};

/// How long the copy button says "Copied!" after a successful copy.
const COPIED_FEEDBACK_MS: i32 = 2000;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console::log_1(&"WASM module initialized!".into());

    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    create_ui(&document)?;
    render_output(&document)?;

    Ok(())
}

fn create_ui(document: &Document) -> Result<(), JsValue> {
    let body = document.body().ok_or("document should have a body")?;

    let container = document.create_element("div")?;
    container.set_id("wasm-container");

    let heading = document.create_element("h1")?;
    heading.set_text_content(Some("robots.txt Generator"));

    let form = document.create_element("div")?;
    form.set_id("robots-form");
    form.set_inner_html(&html::form_html(&GenerationInput::default()));

    container.append_child(&heading)?;
    container.append_child(&form)?;
    body.append_child(&container)?;

    // Any edit anywhere in the form recomputes the output.
    let on_change = Closure::wrap(Box::new(move || {
        if let Err(e) = with_document(|doc| render_output(doc)) {
            console::error_1(&e);
        }
    }) as Box<dyn Fn()>);
    form.add_event_listener_with_callback("input", on_change.as_ref().unchecked_ref())?;
    form.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    let on_copy = Closure::wrap(Box::new(move || {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = copy_to_clipboard().await {
                console::error_1(&format!("Failed to copy: {:?}", e).into());
            }
        });
    }) as Box<dyn Fn()>);
    element::<HtmlElement>(document, COPY_BUTTON_ID)?.set_onclick(Some(on_copy.as_ref().unchecked_ref()));
    on_copy.forget();

    let on_download = Closure::wrap(Box::new(move || {
        if let Err(e) = with_document(|doc| download_file(doc)) {
            console::error_1(&format!("Failed to download: {:?}", e).into());
        }
    }) as Box<dyn Fn()>);
    element::<HtmlElement>(document, DOWNLOAD_BUTTON_ID)?.set_onclick(Some(on_download.as_ref().unchecked_ref()));
    on_download.forget();

    Ok(())
}

fn with_document<T>(f: impl FnOnce(&Document) -> Result<T, JsValue>) -> Result<T, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document available")?;
    f(&document)
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}

/// Reads the current form selections.
fn read_input(document: &Document) -> Result<GenerationInput, JsValue> {
    let strategy = match document.query_selector(&format!("input[name='{STRATEGY_INPUT_NAME}']:checked"))? {
        Some(radio) => radio
            .dyn_into::<HtmlInputElement>()?
            .value()
            .parse::<Strategy>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => Strategy::default(),
    };

    let platform = element::<HtmlSelectElement>(document, PLATFORM_SELECT_ID)?
        .value()
        .parse::<Platform>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let sitemap_url = element::<HtmlInputElement>(document, SITEMAP_INPUT_ID)?.value();

    Ok(GenerationInput::new(strategy, platform, sitemap_url))
}

fn current_output(document: &Document) -> Result<String, JsValue> {
    Ok(compose(&read_input(document)?))
}

fn render_output(document: &Document) -> Result<(), JsValue> {
    let output = current_output(document)?;
    element::<HtmlElement>(document, OUTPUT_ID)?.set_text_content(Some(&output));
    Ok(())
}

/// Writes the document to the clipboard and briefly confirms on the button.
/// A rejected write (e.g. permission denied) propagates to the caller, which only logs it.
async fn copy_to_clipboard() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let output = current_output(&document)?;

    JsFuture::from(window.navigator().clipboard().write_text(&output)).await?;

    let button = element::<HtmlElement>(&document, COPY_BUTTON_ID)?;
    button.set_text_content(Some(html::copy_button_label(true)));

    let reset = Closure::once_into_js(move || {
        button.set_text_content(Some(html::copy_button_label(false)));
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(reset.unchecked_ref(), COPIED_FEEDBACK_MS)?;

    Ok(())
}

/// Hands the document to the browser as a `robots.txt` download.
fn download_file(document: &Document) -> Result<(), JsValue> {
    let output = current_output(document)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&output));
    let options = BlobPropertyBag::new();
    options.set_type(DOWNLOAD_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor = document.create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(DOWNLOAD_FILE_NAME);

    let body = document.body().ok_or("document should have a body")?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;

    Ok(())
}
