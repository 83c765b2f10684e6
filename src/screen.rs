//! Screen identifiers — the closed set of full-page views.
//!
//! DESIGN
//! ======
//! Exactly one screen is active at a time. Every per-screen fact the rest of
//! the crate needs (wire slug, hardcoded back/forward targets, assistant
//! description) is an exhaustive `match` here, so adding a screen fails to
//! compile until each mapping covers it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "screen_test.rs"]
mod tests;

/// One named full-page view of the prototype.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    #[default]
    Login,
    VendorHome,
    AddProduct1,
    AddProduct2,
    ConsumerHome,
    ProductDetail,
    Checkout,
    Payment,
    Success,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown screen: {0}")]
pub struct ScreenParseError(pub String);

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::Login,
        Screen::VendorHome,
        Screen::AddProduct1,
        Screen::AddProduct2,
        Screen::ConsumerHome,
        Screen::ProductDetail,
        Screen::Checkout,
        Screen::Payment,
        Screen::Success,
    ];

    /// Wire / markup identifier, e.g. `"productDetail"`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::VendorHome => "vendorHome",
            Self::AddProduct1 => "addProduct1",
            Self::AddProduct2 => "addProduct2",
            Self::ConsumerHome => "consumerHome",
            Self::ProductDetail => "productDetail",
            Self::Checkout => "checkout",
            Self::Payment => "payment",
            Self::Success => "success",
        }
    }

    /// Screens that read the selected product and cannot render without one.
    #[must_use]
    pub fn requires_product(self) -> bool {
        matches!(self, Self::ProductDetail | Self::Checkout | Self::Payment)
    }

    /// Screens across which a product selection survives.
    #[must_use]
    pub fn keeps_selection(self) -> bool {
        self.requires_product() || self == Self::Success
    }

    /// Literal target of the screen's back control.
    #[must_use]
    pub fn back_target(self) -> Screen {
        match self {
            Self::Login | Self::ProductDetail | Self::Success => Self::ConsumerHome,
            Self::VendorHome | Self::ConsumerHome => Self::Login,
            Self::AddProduct1 => Self::VendorHome,
            Self::AddProduct2 => Self::AddProduct1,
            Self::Checkout => Self::ProductDetail,
            Self::Payment => Self::Checkout,
        }
    }

    /// Target of the screen's primary action button, if it has one that does
    /// not depend on a catalog tap.
    #[must_use]
    pub fn forward_target(self) -> Option<Screen> {
        match self {
            Self::Login | Self::AddProduct2 => Some(Self::VendorHome),
            Self::VendorHome => Some(Self::AddProduct1),
            Self::AddProduct1 => Some(Self::AddProduct2),
            Self::ConsumerHome => None,
            Self::ProductDetail => Some(Self::Checkout),
            Self::Checkout => Some(Self::Payment),
            Self::Payment => Some(Self::Success),
            Self::Success => Some(Self::ConsumerHome),
        }
    }

    /// One-sentence description handed to the assistant. `ProductDetail` is
    /// described by [`crate::assistant::build_context`] since it embeds the
    /// selected product.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Login => "Vendor login screen. Inputs for email and password.",
            Self::VendorHome => {
                "Vendor dashboard showing products expiring soon and expired items. Actions: Edit, Refresh, Add New."
            }
            Self::AddProduct1 => "Add Product Step 1: Image upload, Name, Category.",
            Self::AddProduct2 => "Add Product Step 2: Stock quantity, Expiry date, Price setting.",
            Self::ConsumerHome => "Consumer home feed showing nearby discounted food items expiring soon.",
            Self::ProductDetail => "Product detail. Shows image, price, original price, expiry. Action: Reserve.",
            Self::Checkout => "Checkout screen. User inputs personal details (Name, Email, Phone).",
            Self::Payment => "Payment method selection (Card, PayPal, GPay) and card details.",
            Self::Success => "Reservation confirmed screen with pickup details. Action: Back to home.",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Screen {
    type Err = ScreenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.slug() == s)
            .ok_or_else(|| ScreenParseError(s.to_string()))
    }
}
