use serde::Deserialize;

#[derive(Deserialize)]
pub struct SubscribeForm {
    pub email: String,
}
