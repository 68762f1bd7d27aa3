use serde::Deserialize;

use crate::models::Key;

pub mod assets;
pub mod home;
pub mod html;
pub mod item_item;
pub mod layout;
pub mod market_basket;
pub mod user_item;

/// Navigation destinations, in sidebar order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    MarketBasket,
    ItemItem,
    UserItem,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::MarketBasket, View::ItemItem, View::UserItem];

    /// Value of the `view` query parameter
    pub const fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::MarketBasket => "market-basket",
            View::ItemItem => "item-item",
            View::UserItem => "user-item",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::MarketBasket => "Market Basket Recommender",
            View::ItemItem => "Item-Item Recommender",
            View::UserItem => "User-Item Recommender",
        }
    }
}

/// Current value of every control, as carried in the query string
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub view: View,
    pub antecedent: Option<Key>,
    pub product_id: Option<Key>,
    pub k: Option<usize>,
    pub profile_id: Option<Key>,
}

/// Image shown above the market-basket rules
pub const MARKET_BASKET_BANNER: &str = "3.gif";
