//! Single-value page selector and the button actions that drive it.
//! No nesting, no history.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use farmconnect_core::ItemId;

/// Which screen is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Login,
    Home,
    About,
}

/// Returned when a page name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl Page {
    /// Pages linked from the navigation bar, in display order.
    pub const NAV: [Self; 2] = [Self::Home, Self::About];

    /// Lowercase name, used as the navigation target.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "home",
            Self::About => "about",
        }
    }

    /// Label on the navigation button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login / Register",
            Self::Home => "Home",
            Self::About => "About",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Self::Login),
            "home" => Ok(Self::Home),
            "about" => Ok(Self::About),
            _ => Err(UnknownPage(s.to_owned())),
        }
    }
}

/// A user action named by a button's `data-action` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Page),
    AddToCart(ItemId),
    RemoveFromCart(ItemId),
    ConnectWallet,
    Checkout,
}

/// Returned when button attributes do not name a valid action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("unknown action: {0}")]
    Unknown(String),

    #[error("{action} needs a data-{attribute} attribute")]
    MissingAttribute {
        action: &'static str,
        attribute: &'static str,
    },

    #[error(transparent)]
    Page(#[from] UnknownPage),

    #[error("invalid item id: {0}")]
    InvalidItemId(String),
}

impl Action {
    /// Decode the `data-action`, `data-page` and `data-item-id` attributes of
    /// a rendered button.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` for an unknown action name or a missing or
    /// malformed attribute.
    pub fn from_attributes(
        action: &str,
        page: Option<&str>,
        item_id: Option<&str>,
    ) -> Result<Self, ActionError> {
        match action {
            "navigate" => {
                let page = page.ok_or(ActionError::MissingAttribute {
                    action: "navigate",
                    attribute: "page",
                })?;
                Ok(Self::Navigate(page.parse()?))
            }
            "add-to-cart" => parse_item_id("add-to-cart", item_id).map(Self::AddToCart),
            "remove-from-cart" => {
                parse_item_id("remove-from-cart", item_id).map(Self::RemoveFromCart)
            }
            "connect-wallet" => Ok(Self::ConnectWallet),
            "checkout" => Ok(Self::Checkout),
            other => Err(ActionError::Unknown(other.to_owned())),
        }
    }

    /// Whether the action waits on the wallet provider.
    #[must_use]
    pub const fn is_wallet_call(self) -> bool {
        matches!(self, Self::ConnectWallet | Self::Checkout)
    }
}

fn parse_item_id(action: &'static str, raw: Option<&str>) -> Result<ItemId, ActionError> {
    let raw = raw.ok_or(ActionError::MissingAttribute {
        action,
        attribute: "item-id",
    })?;
    raw.trim()
        .parse::<i32>()
        .map(ItemId::new)
        .map_err(|_| ActionError::InvalidItemId(raw.to_owned()))
}
