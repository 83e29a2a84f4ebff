use serde::Deserialize;

/// Query-string state of the home view: active tag filter, title
/// search, and the transient subscribe notice.
#[derive(Deserialize, Default)]
pub struct FeedParams {
    pub tag: Option<String>,
    pub q: Option<String>,
    pub subscribed: Option<String>,
}
