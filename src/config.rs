use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory the dataset file names are resolved against
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Market-basket association rules
    #[serde(default = "default_rules_file")]
    pub rules_file: String,

    /// Item-to-item similarity table
    #[serde(default = "default_similarity_file")]
    pub similarity_file: String,

    /// User-to-item personalized picks
    #[serde(default = "default_personalization_file")]
    pub personalization_file: String,

    /// Optional purchase history, tolerated missing
    #[serde(default = "default_purchase_history_file")]
    pub purchase_history_file: String,

    /// Local image assets, relative to `data_dir`
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_rules_file() -> String {
    "rules_jj_with_cat.csv".to_string()
}

fn default_similarity_file() -> String {
    "item_item_final.csv".to_string()
}

fn default_personalization_file() -> String {
    "final_user_item.csv".to_string()
}

fn default_purchase_history_file() -> String {
    "cleaned_data.csv".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_data_dir(default_data_dir())
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Default file names resolved against `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: data_dir.into(),
            rules_file: default_rules_file(),
            similarity_file: default_similarity_file(),
            personalization_file: default_personalization_file(),
            purchase_history_file: default_purchase_history_file(),
            images_dir: default_images_dir(),
        }
    }

    pub fn rules_path(&self) -> PathBuf {
        self.data_dir.join(&self.rules_file)
    }

    pub fn similarity_path(&self) -> PathBuf {
        self.data_dir.join(&self.similarity_file)
    }

    pub fn personalization_path(&self) -> PathBuf {
        self.data_dir.join(&self.personalization_file)
    }

    pub fn purchase_history_path(&self) -> PathBuf {
        self.data_dir.join(&self.purchase_history_file)
    }

    pub fn images_path(&self) -> PathBuf {
        self.data_dir.join(&self.images_dir)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
