//! Test Helpers

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::{
    notifications::{MockNotifier, NotificationPayload},
    test::TestContext,
};

/// Password every fixture account is created with.
pub(crate) const TEST_PASSWORD: &str = "rahasia-123";

/// Row count of `table`, for asserting that failed operations left nothing behind.
pub(crate) async fn count_rows(ctx: &TestContext, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(ctx.db.pool())
        .await
        .expect("count query should succeed")
}

/// A push captured by [`recording_notifier`]: device token and payload.
pub(crate) type SentPush = (String, NotificationPayload);

/// Notifier accepting every push and forwarding it to the returned receiver.
pub(crate) fn recording_notifier() -> (MockNotifier, UnboundedReceiver<SentPush>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let mut notifier = MockNotifier::new();

    notifier.expect_send().returning(move |token, payload| {
        // Pushes arriving after a test stopped listening are dropped.
        sender.send((token.to_string(), payload.clone())).ok();

        Ok(())
    });

    (notifier, receiver)
}

/// Next push sent in the background, or `None` once `wait` passes.
pub(crate) async fn next_push(
    receiver: &mut UnboundedReceiver<SentPush>,
    wait: Duration,
) -> Option<SentPush> {
    tokio::time::timeout(wait, receiver.recv()).await.ok().flatten()
}
