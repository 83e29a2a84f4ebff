use std::sync::Arc;

use axum::{extract::State, response::Redirect, Form};
use email_address::EmailAddress;
use tracing::warn;

use crate::{models::subscriber::Subscriber, structs::subscribe_form::SubscribeForm, AppState};

/// Public subscribe form. Write-only: the address is stored with a
/// server-assigned join time and never read back by this application.
pub async fn subscribe_route(
    State(app_state): State<Arc<AppState>>,
    Form(form): Form<SubscribeForm>,
) -> Redirect {
    let email = form.email.trim().to_lowercase();

    if !EmailAddress::is_valid(&email) {
        warn!("Rejected subscription with invalid email address");
        return Redirect::to("/?subscribed=err");
    }

    match Subscriber::create(&app_state.pool, &email).await {
        Ok(()) => Redirect::to("/?subscribed=ok"),
        Err(e) => {
            warn!("Error inserting subscriber : {e}");
            Redirect::to("/?subscribed=err")
        }
    }
}
