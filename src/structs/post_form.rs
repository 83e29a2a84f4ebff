use serde::Deserialize;

/// Editor payload for both create and update: the tag field arrives as
/// the raw comma-separated string the operator typed.
#[derive(Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: String,
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub content: String,
}
