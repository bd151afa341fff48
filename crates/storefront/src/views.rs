//! HTML views.
//!
//! The page is a pure function of [`AppState`] and the catalog. Buttons carry
//! `data-action` attributes naming the controller operation they trigger;
//! wiring those to events is left to the host.

use askama::Template;

use crate::catalog::{Catalog, CatalogItem};
use crate::router::Page;
use crate::state::AppState;

/// Navigation bar display data.
#[derive(Debug, Clone)]
pub struct NavView {
    pub links: Vec<NavLink>,
    pub logged_in: bool,
    /// Shortened wallet address once connected.
    pub wallet_badge: Option<String>,
}

/// One navigation button.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Product card or cart line display data.
#[derive(Debug, Clone)]
pub struct ItemView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image_ref: String,
}

impl From<&CatalogItem> for ItemView {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            price: item.unit_price.display(),
            image_ref: item.image_ref.clone(),
        }
    }
}

impl NavView {
    fn from_state(state: &AppState) -> Self {
        Self {
            links: Page::NAV
                .iter()
                .map(|&page| NavLink {
                    slug: page.slug(),
                    label: page.label(),
                    active: page == state.page(),
                })
                .collect(),
            logged_in: state.session().is_logged_in(),
            wallet_badge: state.wallet().map(|wallet| wallet.address.short()),
        }
    }
}

/// Login page template.
#[derive(Template)]
#[template(path = "pages/login.html")]
pub struct LoginTemplate {
    pub nav: NavView,
    /// Wrap the page in the full HTML document.
    pub document: bool,
    pub error: Option<String>,
    pub email: String,
}

/// Catalog and cart template.
#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub nav: NavView,
    pub document: bool,
    pub catalog: Vec<ItemView>,
    pub cart: Vec<ItemView>,
    pub total: String,
}

/// About page template.
#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub nav: NavView,
    pub document: bool,
}

/// Render the page currently selected in `state` as a full HTML document.
///
/// The home page shows nothing below the navigation bar until the user has
/// logged in.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn render(state: &AppState, catalog: &Catalog) -> askama::Result<String> {
    render_page(state, catalog, true)
}

/// Render only the navigation bar and page content, for mounting into an
/// existing document.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn render_fragment(state: &AppState, catalog: &Catalog) -> askama::Result<String> {
    render_page(state, catalog, false)
}

fn render_page(state: &AppState, catalog: &Catalog, document: bool) -> askama::Result<String> {
    let nav = NavView::from_state(state);

    match state.page() {
        Page::Login => LoginTemplate {
            nav,
            document,
            error: state.login_error().map(str::to_owned),
            email: state
                .session()
                .email()
                .map(|email| email.as_str().to_owned())
                .unwrap_or_default(),
        }
        .render(),
        Page::Home => HomeTemplate {
            nav,
            document,
            catalog: catalog.iter().map(ItemView::from).collect(),
            cart: state.cart().entries().iter().map(ItemView::from).collect(),
            total: state.cart().formatted_total(),
        }
        .render(),
        Page::About => AboutTemplate { nav, document }.render(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use farmconnect_core::ItemId;

    use super::*;
    use crate::session::LoginForm;

    fn logged_in_state() -> AppState {
        let mut state = AppState::default();
        state
            .session
            .login(&LoginForm::new("grower@farm.test", "pw"))
            .unwrap();
        state.page = Page::Home;
        state
    }

    #[test]
    fn test_login_page_by_default() {
        let html = render(&AppState::default(), &Catalog::default()).unwrap();
        assert!(html.contains("<h2>Login / Register</h2>"));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"data-page="login""#));
        assert!(!html.contains("Connect Wallet"));
    }

    #[test]
    fn test_login_error_is_shown_escaped() {
        let state = AppState {
            login_error: Some("email is <required>".to_owned()),
            ..AppState::default()
        };
        let html = render(&state, &Catalog::default()).unwrap();
        assert!(html.contains("email is &#60;required&#62;") || html.contains("email is &lt;required&gt;"));
    }

    #[test]
    fn test_home_hidden_until_login() {
        let state = AppState {
            page: Page::Home,
            ..AppState::default()
        };
        let html = render(&state, &Catalog::default()).unwrap();
        assert!(!html.contains("Welcome to FarmConnect"));
        assert!(!html.contains("Add to Cart"));
    }

    #[test]
    fn test_home_lists_catalog_and_empty_cart() {
        let html = render(&logged_in_state(), &Catalog::default()).unwrap();
        assert!(html.contains("Welcome to FarmConnect"));
        assert!(html.contains("<h2>Capsicum</h2>"));
        assert!(html.contains("<p>ETH 0.002</p>"));
        assert!(html.contains("Your cart is empty."));
        assert!(html.contains("Connect Wallet"));
        assert!(!html.contains("Checkout"));
    }

    #[test]
    fn test_home_shows_cart_total() {
        let catalog = Catalog::default();
        let mut state = logged_in_state();
        state.cart.add(catalog.get(ItemId::new(1)).unwrap().clone());
        state.cart.add(catalog.get(ItemId::new(3)).unwrap().clone());

        let html = render(&state, &catalog).unwrap();
        assert!(html.contains("Tomato - ETH 0.01"));
        assert!(html.contains("Onion - ETH 0.004"));
        assert!(html.contains("Total: 0.0140 ETH"));
        assert!(html.contains(r#"data-action="checkout""#));
    }

    #[test]
    fn test_fragment_has_no_document_shell() {
        let state = logged_in_state();
        let html = render_fragment(&state, &Catalog::default()).unwrap();
        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(!html.contains("<body"));
        assert!(!html.contains(r#"id="farmconnect""#));
        assert!(html.contains(r#"<nav class="navbar">"#));
        assert!(html.contains("Welcome to FarmConnect"));

        let document = render(&state, &Catalog::default()).unwrap();
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains(r#"<div id="farmconnect">"#));
    }

    #[test]
    fn test_about_page() {
        let state = AppState {
            page: Page::About,
            ..AppState::default()
        };
        let html = render(&state, &Catalog::default()).unwrap();
        assert!(html.contains("About FarmConnect"));
        assert!(html.contains(r#"data-page="about" aria-current="page""#));
    }
}
