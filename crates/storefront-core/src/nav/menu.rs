//! Static navigation menu and branding.
//!
//! The menu, brand shortcuts, and header are fixed presentation scaffolding
//! with no state of their own; only the Cart entry's badge varies.

use storefront_types::nav::{BrandHeader, BrandLink, NavIcon, NavItem};

/// Title of the menu entry that carries the cart badge.
pub const CART_ITEM_TITLE: &str = "Cart";

/// The static navigation menu: Home, product listing, and Cart.
///
/// Badges start empty; [`crate::nav::ShellService`] attaches the cart count
/// at mount time.
pub fn navigation_items() -> Vec<NavItem> {
    vec![
        NavItem {
            title: "Home".to_string(),
            url: "/home".to_string(),
            icon: NavIcon::Home,
            badge: None,
        },
        NavItem {
            title: "All Controllers".to_string(),
            url: "/products".to_string(),
            icon: NavIcon::Package,
            badge: None,
        },
        NavItem {
            title: CART_ITEM_TITLE.to_string(),
            url: "/cart".to_string(),
            icon: NavIcon::ShoppingCart,
            badge: None,
        },
    ]
}

/// Shortcut links to brand-filtered product listings.
pub fn brand_links() -> Vec<BrandLink> {
    ["Xbox", "PlayStation", "Nintendo", "Razer"]
        .into_iter()
        .map(|brand| BrandLink {
            name: brand.to_string(),
            url: format!("/products?brand={brand}"),
        })
        .collect()
}

/// Storefront branding for the shell header.
pub fn brand_header() -> BrandHeader {
    BrandHeader {
        name: "GameCtrl".to_string(),
        tagline: "Premium Controllers".to_string(),
    }
}
