use serde::Deserialize;

/// One page of a paginated collection.
#[must_use]
#[derive(Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,

    #[serde(rename = "next")]
    pub next_cursor: Option<String>,

    #[serde(rename = "previous")]
    pub previous_cursor: Option<String>,

    pub results: Vec<T>,
}
