//! Query-string parameters shared by listing endpoints

use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

/// `?page=N`, 1-based. Missing or non-numeric values mean page 1.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-based). Defaults to 1
    #[serde(default, deserialize_with = "lenient_page")]
    #[param(value_type = Option<i64>, example = 1)]
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}
