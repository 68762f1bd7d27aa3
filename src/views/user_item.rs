use std::sync::Arc;

use crate::{
    data::Table,
    models::{distinct_sorted, Key, PersonalizationTable, PurchaseRecord},
};

use super::{
    html::{title_case, HtmlTable, Markup, Notice, SelectionForm},
    View,
};

/// State of the optional purchase-history file
#[derive(Debug, Clone)]
pub enum PurchaseHistory {
    /// File absent; carries the file name for the notice
    Missing(String),
    Available(Arc<Table<PurchaseRecord>>),
}

fn render_history(history: &PurchaseHistory, profile: &Key) -> Markup {
    let records = match history {
        PurchaseHistory::Missing(file) => {
            return Notice::info(format!("'{}' not found; skipping previous purchases view.", file)).render();
        }
        PurchaseHistory::Available(records) => records,
    };

    let table = records
        .rows()
        .iter()
        .filter(|record| &record.profile_id == profile)
        .fold(
            HtmlTable::grid([
                "Purchased Product Ids",
                "Purchased Product Categories",
                "Purchased Product Title",
            ]),
            |table, record| {
                table.row([
                    record.purchased_product_ids.clone(),
                    record.purchased_product_categories.clone(),
                    record.purchased_product_title.clone(),
                ])
            },
        );

    if table.is_empty() {
        return Markup::default();
    }

    let mut out = Markup::raw("<h3>Previous Purchases</h3>");
    out.push(table.render());
    out
}

fn render_picks(picks: &PersonalizationTable, profile: &Key) -> Markup {
    let table = picks.picks_for(profile).fold(
        HtmlTable::grid(picks.columns.iter().map(|c| title_case(c))),
        |table, pick| table.row(pick.values.iter().cloned()),
    );

    if table.is_empty() {
        return Notice::info("No recommendations found for this user ID.").render();
    }

    let mut out = Markup::raw("<h3>Top Recommendations</h3>");
    out.push(table.render());
    out
}

/// User-item page: past purchases and personalized picks for one profile
pub fn render(picks: &PersonalizationTable, profile_id: Option<&Key>, history: &PurchaseHistory) -> Markup {
    let mut out = Markup::raw(
        "<h2>User-Item Recommender</h2><p>Select a user from the list below to get personalized recommendations:</p>",
    );

    if picks.is_empty() {
        out.push(Notice::error("No user data available. Place 'final_user_item.csv' in project root.").render());
        return out;
    }

    let options = distinct_sorted(picks.rows.iter().map(|pick| &pick.profile_id));
    let Some(selected) = profile_id.or(options.first()).cloned() else {
        return out;
    };

    out.push(
        SelectionForm::new(View::UserItem.slug())
            .select("profile_id", "User ID", &options, &selected)
            .render(),
    );
    out.push(render_history(history, &selected));
    out.push(render_picks(picks, &selected));
    out
}
