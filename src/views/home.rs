use super::{
    html::{escape, Markup},
    View,
};

const HERO_URL: &str =
    "https://images.unsplash.com/photo-1523381294911-8d3cead13475?auto=format&fit=crop&w=1350&q=80";

struct Card {
    view: View,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const CARDS: [Card; 3] = [
    Card {
        view: View::MarketBasket,
        icon: "https://img.icons8.com/ios-filled/100/4e79a7/shopping-basket.png",
        title: "Market Basket",
        blurb: "If you buy X, you might buy Y — view transactional rules.",
    },
    Card {
        view: View::ItemItem,
        icon: "https://img.icons8.com/ios-filled/100/4e79a7/link.png",
        title: "Item-Item",
        blurb: "For new users: find your top 10 similar products.",
    },
    Card {
        view: View::UserItem,
        icon: "https://img.icons8.com/ios-filled/100/4e79a7/user.png",
        title: "User-Item",
        blurb: "Personalized picks from your journey.",
    },
];

/// Landing page describing the three strategies
pub fn render() -> Markup {
    let cards: String = CARDS
        .iter()
        .map(|card| {
            format!(
                r#"<a class="card" href="/?view={slug}"><img src="{icon}" alt=""><h3>{title}</h3><p>{blurb}</p></a>"#,
                slug = card.view.slug(),
                icon = card.icon,
                title = card.title,
                blurb = card.blurb,
            )
        })
        .collect();

    Markup::raw(format!(
        r#"<img class="hero" src="{hero}" alt="">
<h1 class="centered">🛒 E-commerce Recommender System</h1>
<p>Explore three recommendation strategies below, and click the sidebar to navigate!</p>
<div class="cards">{cards}</div>
<h1>Recommender System for E-commerce</h1>
<p>Welcome to the E-commerce Recommender System! This application provides personalized recommendations based on different approaches:</p>
<ul>
    <li><strong>Market Basket Recommender</strong>: Suggests items based on transactional rules (e.g., if you buy X, you might buy Y). Select a product to see consequent items with lift values.</li>
    <li><strong>Item-Item Recommender</strong>: Recommends top 10 items for new users based on a given product ID.</li>
    <li><strong>User-Item Recommender</strong>: Suggests top 10 items for users based on their journey (previous purchases).</li>
</ul>"#,
        hero = escape(HERO_URL),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_url_is_escaped() {
        let html = render();
        assert!(html.as_str().contains("auto=format&amp;fit=crop&amp;w=1350&amp;q=80"));
    }

    #[test]
    fn test_cards_link_to_each_recommender() {
        let html = render();
        assert!(html.as_str().contains(r#"href="/?view=market-basket""#));
        assert!(html.as_str().contains(r#"href="/?view=item-item""#));
        assert!(html.as_str().contains(r#"href="/?view=user-item""#));
    }
}
