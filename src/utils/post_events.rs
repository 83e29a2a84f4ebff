//! Live post-list snapshots for the admin editor. Each listener gets
//! the full current collection on every change; consumers replace
//! their whole list per snapshot rather than diffing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use axum::response::sse::Event;
use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use serde_json::json;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::models::post::Post;

pub const POSTS_EVENT_NAME: &str = "posts";

static NEXT_LISTENER_ID: AtomicUsize = AtomicUsize::new(1);

/// Serialize the full post collection for one snapshot event.
pub fn snapshot_data(posts: &[Post]) -> String {
    json!(posts).to_string()
}

pub fn snapshot_event(data: &str) -> Event {
    Event::default().event(POSTS_EVENT_NAME).data(data)
}

/// All the currently connected snapshot listeners.
#[derive(Default, Clone)]
pub struct PostEvents {
    listeners: Arc<RwLock<HashMap<usize, UnboundedSender<Event>>>>,
}

impl PostEvents {
    /// Register a new listener. The returned sender is a clone of the
    /// stored one so the caller can push the initial snapshot itself.
    pub fn subscribe(&self) -> (UnboundedSender<Event>, UnboundedReceiver<Event>) {
        let id = NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::unbounded();
        match self.listeners.write() {
            Ok(mut listeners) => {
                listeners.insert(id, sender.clone());
            }
            Err(e) => warn!("Listener map poisoned : {e}"),
        }
        info!("Snapshot listener {id} connected");
        (sender, receiver)
    }

    /// Push one snapshot to every listener. Listeners whose connection
    /// has gone away fail to send and are removed here, so results for
    /// defunct views are discarded, never delivered.
    pub fn broadcast(&self, data: &str) {
        let mut listeners = match self.listeners.write() {
            Ok(listeners) => listeners,
            Err(e) => {
                warn!("Listener map poisoned : {e}");
                return;
            }
        };
        listeners.retain(|id, sender| {
            if sender.unbounded_send(snapshot_event(data)).is_err() {
                info!("Snapshot listener {id} disconnected");
                false
            } else {
                true
            }
        });
    }
}

/// Re-query the collection and push the result to every listener.
/// Called after each successful mutation; a failed re-query is logged
/// and skipped, the next mutation will deliver a fresh snapshot.
pub async fn broadcast_snapshot(pool: &PgPool, events: &PostEvents) {
    match Post::list(pool).await {
        Ok(posts) => events.broadcast(&snapshot_data(&posts)),
        Err(e) => warn!("Error fetching posts for snapshot broadcast : {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_broadcast_reaches_every_listener() {
        let events = PostEvents::default();
        let (_s1, mut r1) = events.subscribe();
        let (_s2, mut r2) = events.subscribe();

        events.broadcast("[]");

        assert!(r1.next().await.is_some());
        assert!(r2.next().await.is_some());
    }

    #[test]
    fn test_broadcast_prunes_dropped_listeners() {
        let events = PostEvents::default();
        let (sender, receiver) = events.subscribe();
        drop(receiver);
        drop(sender);

        events.broadcast("[]");
        assert!(events.listeners.read().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_data_is_a_json_array() {
        assert_eq!(snapshot_data(&[]), "[]");
    }
}
