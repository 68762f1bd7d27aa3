use std::sync::Arc;

use crate::{
    config::Config,
    data::{loader::file_label, Table, TableLoader},
    error::AppResult,
    models::{AssociationRule, PersonalizationTable, PurchaseRecord, SimilarItem},
    views::user_item::PurchaseHistory,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<AppStateInner>,
}

/// Tables loaded at startup; read-only afterwards
pub struct AppStateInner {
    pub config: Config,
    pub loader: TableLoader,
    pub rules: Arc<Table<AssociationRule>>,
    pub similar_items: Arc<Table<SimilarItem>>,
    pub picks: Arc<PersonalizationTable>,
    /// One entry per required dataset that was missing
    pub warnings: Vec<String>,
}

impl AppState {
    /// Loads the three recommendation tables from disk
    pub async fn load(config: Config) -> AppResult<Self> {
        Self::load_with(config, TableLoader::from_fs()).await
    }

    /// Loads through the given loader
    ///
    /// A missing file leaves that table empty and records a warning; a
    /// malformed file fails startup.
    pub async fn load_with(config: Config, loader: TableLoader) -> AppResult<Self> {
        let rules = loader
            .load_or_empty::<Table<AssociationRule>>(&config.rules_path())
            .await?;
        let similar_items = loader
            .load_or_empty::<Table<SimilarItem>>(&config.similarity_path())
            .await?;
        let picks = loader
            .load_or_empty::<PersonalizationTable>(&config.personalization_path())
            .await?;

        let warnings: Vec<String> = [rules.warning, similar_items.warning, picks.warning]
            .into_iter()
            .flatten()
            .collect();

        tracing::info!(
            rules = rules.table.len(),
            similar_items = similar_items.table.len(),
            picks = picks.table.len(),
            missing = warnings.len(),
            "Datasets ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                loader,
                rules: rules.table,
                similar_items: similar_items.table,
                picks: picks.table,
                warnings,
            }),
        })
    }

    /// Purchase history for the user-item view, loaded on first use
    pub async fn purchase_history(&self) -> AppResult<PurchaseHistory> {
        let path = self.inner.config.purchase_history_path();
        let history = self
            .inner
            .loader
            .load_optional::<Table<PurchaseRecord>>(&path)
            .await?;

        Ok(match history {
            Some(records) => PurchaseHistory::Available(records),
            None => PurchaseHistory::Missing(file_label(&path)),
        })
    }
}
