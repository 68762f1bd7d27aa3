use crate::{
    data::Table,
    models::{distinct_sorted, Key, SimilarItem},
};

use super::{
    html::{dollars, dollars_grouped, optional, title_case, HtmlTable, Markup, Notice, SelectionForm},
    View,
};

pub const MIN_K: usize = 1;
pub const MAX_K: usize = 10;

const COLUMNS: [&str; 3] = [
    "recommended_product_name",
    "recommended_category",
    "recommended_price",
];

/// Requested result count, defaulting to and bounded by the slider range
pub fn clamp_k(k: Option<usize>) -> usize {
    k.unwrap_or(MAX_K).clamp(MIN_K, MAX_K)
}

/// First `k` rows for `product`; file order is relevance order
pub fn top_k<'a>(items: &'a Table<SimilarItem>, product: &Key, k: usize) -> Vec<&'a SimilarItem> {
    items
        .rows()
        .iter()
        .filter(|item| &item.product_id == product)
        .take(k)
        .collect()
}

/// Item-item page: pick a product, list its top-K similar items
pub fn render(items: &Table<SimilarItem>, product_id: Option<&Key>, k: Option<usize>) -> Markup {
    let mut out = Markup::raw(
        r#"<div class="highlight"><h2>🤝 Item-Item Recommender</h2><p><strong>Find products similar to your chosen item.</strong></p></div>"#,
    );

    if items.is_empty() {
        out.push(Notice::error("No item-item CSV loaded.").render());
        return out;
    }

    let options = distinct_sorted(items.rows().iter().map(|item| &item.product_id));
    let Some(selected) = product_id.or(options.first()).cloned() else {
        return out;
    };
    let k = clamp_k(k);

    let form = SelectionForm::new(View::ItemItem.slug())
        .select("product_id", "Select Product ID", &options, &selected)
        .range("k", "Number of recommendations", MIN_K, MAX_K, k);

    let recs = top_k(items, &selected, k);
    let Some(product) = recs.first() else {
        out.push(form.render());
        out.push(Notice::info(format!("No similar products found for product {}.", selected)).render());
        return out;
    };

    out.push(Markup::raw(format!(
        r#"<h3>Selected: <span class="accent">{name}</span> (ID: {id})</h3><p><strong>Original Price:</strong> {price}</p>"#,
        name = Markup::text(&product.product_name),
        id = Markup::text(selected.as_str()),
        price = optional(product.price, dollars_grouped),
    )));
    out.push(form.render());

    let table = recs.iter().fold(HtmlTable::styled(COLUMNS.map(title_case)), |table, item| {
        table.row([
            item.recommended_product_name.clone(),
            item.recommended_category.clone(),
            optional(item.recommended_price, dollars),
        ])
    });
    out.push(table.render());
    out
}
