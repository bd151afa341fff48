//! Mounting the storefront into the page and wiring its controls.
//!
//! One click listener and one submit listener sit on the root element, so
//! they survive every re-render. Buttons are decoded into [`Action`]s from
//! their `data-*` attributes.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement};

use super::{BrowserNotifier, CONFIG_ELEMENT_ID, InjectedProvider, ROOT_ELEMENT_ID};
use crate::config::StorefrontConfig;
use crate::router::{Action, ActionError};
use crate::session::LoginForm;
use crate::storefront::Storefront;
use crate::wallet::WalletProvider;

/// A storefront rendered into a page element.
struct App {
    root: Element,
    store: RefCell<Storefront<BrowserNotifier>>,
}

/// Mount a storefront configured by `config_json` into the page.
///
/// Renders into `#farmconnect`, or into `<body>` when there is no such
/// element.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the page has no
/// document.
#[wasm_bindgen]
pub fn mount(config_json: &str) -> Result<(), JsValue> {
    let config = StorefrontConfig::from_json(config_json).map_err(to_js)?;
    let store = Storefront::new(config, BrowserNotifier).map_err(to_js)?;

    let app = Rc::new(App {
        root: root_element(&document()?)?,
        store: RefCell::new(store),
    });
    app.render();
    bind_events(&app)?;

    tracing::info!("storefront mounted");
    Ok(())
}

/// Text of the embedded configuration element, if the page has one.
pub(super) fn embedded_config() -> Result<Option<String>, JsValue> {
    Ok(document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content()))
}

impl App {
    fn render(&self) {
        let Ok(store) = self.store.try_borrow() else {
            return;
        };
        match store.render_fragment() {
            Ok(html) => self.root.set_inner_html(&html),
            Err(err) => tracing::error!(error = %err, "render failed"),
        }
    }

    /// Run a button action and re-render.
    ///
    /// The store stays borrowed while a wallet call is pending, so clicks
    /// arriving in the meantime are dropped.
    #[allow(clippy::await_holding_refcell_ref)]
    async fn perform(&self, action: Action) {
        let Ok(mut store) = self.store.try_borrow_mut() else {
            tracing::debug!(?action, "wallet request pending; click ignored");
            return;
        };
        if action.is_wallet_call() {
            store.set_provider(detect_provider());
        }
        // Failures are logged and alerted by the store.
        let _ = store.dispatch(action).await;
        drop(store);
        self.render();
    }

    fn login(&self, form: &LoginForm) {
        let Ok(mut store) = self.store.try_borrow_mut() else {
            tracing::debug!("wallet request pending; login ignored");
            return;
        };
        let _ = store.login(form);
        drop(store);
        self.render();
    }
}

fn bind_events(app: &Rc<App>) -> Result<(), JsValue> {
    let on_click = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |event: Event| match clicked_action(&event) {
            Ok(Some(action)) => {
                let app = Rc::clone(&app);
                wasm_bindgen_futures::spawn_local(async move {
                    app.perform(action).await;
                });
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "unrecognised button"),
        }) as Box<dyn FnMut(_)>)
    };
    app.root
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_submit = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |event: Event| {
            if let Some(form) = submitted_login(&event) {
                event.prevent_default();
                app.login(&form);
            }
        }) as Box<dyn FnMut(_)>)
    };
    app.root
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}

/// Decode the action of the button a click landed in, if any.
fn clicked_action(event: &Event) -> Result<Option<Action>, ActionError> {
    let Some(button) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("button[data-action]").ok().flatten())
    else {
        return Ok(None);
    };
    let Some(action) = button.get_attribute("data-action") else {
        return Ok(None);
    };

    Action::from_attributes(
        &action,
        button.get_attribute("data-page").as_deref(),
        button.get_attribute("data-item-id").as_deref(),
    )
    .map(Some)
}

/// Read the login form a submit event came from.
fn submitted_login(event: &Event) -> Option<LoginForm> {
    let form = event.target()?.dyn_into::<Element>().ok()?;
    if form.get_attribute("data-action").as_deref() != Some("login") {
        return None;
    }

    let field = |name: &str| {
        form.query_selector(&format!("input[name=\"{name}\"]"))
            .ok()
            .flatten()
            .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    };
    Some(LoginForm::new(field("email"), field("password")))
}

/// The provider currently injected as `window.ethereum`.
fn detect_provider() -> Option<Rc<dyn WalletProvider>> {
    InjectedProvider::detect().map(|provider| Rc::new(provider) as Rc<dyn WalletProvider>)
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn root_element(document: &Document) -> Result<Element, JsValue> {
    if let Some(root) = document.get_element_by_id(ROOT_ELEMENT_ID) {
        return Ok(root);
    }
    document
        .body()
        .map(Element::from)
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

fn to_js(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
