//! Navigation shell types.
//!
//! Presentation scaffolding for the storefront navigation: the static menu,
//! brand shortcut links, the brand header, and the assembled shell carrying
//! the cart badge count. Route highlighting is owned by the external
//! navigation component; these types only publish titles, URLs, and icons.

use serde::{Deserialize, Serialize};

use crate::cart::CartCount;
use crate::session::SessionId;

use std::fmt;

/// Icon associated with a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Home,
    Package,
    ShoppingCart,
    User,
    Gamepad,
    Menu,
}

impl fmt::Display for NavIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavIcon::Home => write!(f, "home"),
            NavIcon::Package => write!(f, "package"),
            NavIcon::ShoppingCart => write!(f, "shopping_cart"),
            NavIcon::User => write!(f, "user"),
            NavIcon::Gamepad => write!(f, "gamepad"),
            NavIcon::Menu => write!(f, "menu"),
        }
    }
}

/// One entry in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub url: String,
    pub icon: NavIcon,
    /// Badge count attached to this entry. Only the Cart entry carries one,
    /// and only when the count is positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<CartCount>,
}

/// Shortcut link to a brand-filtered product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandLink {
    pub name: String,
    pub url: String,
}

/// Storefront branding shown in the shell header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandHeader {
    pub name: String,
    pub tagline: String,
}

/// The assembled navigation shell, published once per mount.
///
/// `cart_count` is computed at assembly time and is not refreshed on cart
/// mutation; re-assembling the shell is the explicit refresh signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavShell {
    pub header: BrandHeader,
    pub items: Vec<NavItem>,
    pub brands: Vec<BrandLink>,
    /// Session the badge count was computed for.
    pub session: SessionId,
    pub cart_count: CartCount,
}
