use crate::{
    data::Table,
    models::{distinct_sorted, AssociationRule, Key},
};

use super::{
    assets::ImageAsset,
    html::{decimal, optional, HtmlTable, Markup, Notice, SelectionForm},
    View,
};

/// Rules whose antecedent is exactly `antecedent`, in file order
pub fn consequents_for<'a>(rules: &'a Table<AssociationRule>, antecedent: &Key) -> Vec<&'a AssociationRule> {
    rules
        .rows()
        .iter()
        .filter(|rule| &rule.antecedents == antecedent)
        .collect()
}

/// Market-basket page: pick an antecedent, list its consequents with lift
pub fn render(rules: &Table<AssociationRule>, antecedent: Option<&Key>, banner: &ImageAsset) -> Markup {
    let mut out = banner.render();
    out.push(Markup::raw(
        "<h2>🔗 Market Basket Recommender</h2><p><strong>If you buy X, see what Y buys next!</strong></p>",
    ));

    if rules.is_empty() {
        out.push(Notice::error("No rules CSV loaded.").render());
        return out;
    }

    let options = distinct_sorted(rules.rows().iter().map(|rule| &rule.antecedents));
    let Some(selected) = antecedent.or(options.first()).cloned() else {
        return out;
    };

    out.push(
        SelectionForm::new(View::MarketBasket.slug())
            .select("antecedent", "Antecedent", &options, &selected)
            .render(),
    );
    out.push(Markup::raw(format!(
        "<h4>Consequents for {}</h4>",
        Markup::text(selected.as_str())
    )));

    let matches = consequents_for(rules, &selected);
    if matches.is_empty() {
        out.push(Notice::info(format!("No rules found for antecedent {}.", selected)).render());
        return out;
    }

    let table = matches.iter().fold(HtmlTable::styled(["Consequent", "Lift"]), |table, rule| {
        table.row([rule.consequents.clone(), optional(rule.lift, decimal)])
    });
    out.push(table.render());
    out
}
