//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        accounts::models::CustomerId,
        orders::{
            errors::OrdersServiceError,
            journey::OrderStatus,
            models::{
                CancelOrder, JourneyEventId, NewJourneyEvent, NewOrder, Order, OrderDetail,
                OrderId, OrderSummary, Party, StatusFilter, Tracking, TrackingUpdate,
            },
            repositories::{
                PgCancellationsRepository, PgJourneyRepository, PgOrderItemsRepository,
                PgOrdersRepository, PgTrackingRepository,
            },
        },
    },
    notifications::{NotificationDispatcher, OrderEvent},
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    notifications: NotificationDispatcher,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    journey_repository: PgJourneyRepository,
    tracking_repository: PgTrackingRepository,
    cancellations_repository: PgCancellationsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, notifications: NotificationDispatcher) -> Self {
        Self {
            db,
            notifications,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            journey_repository: PgJourneyRepository::new(),
            tracking_repository: PgTrackingRepository::new(),
            cancellations_repository: PgCancellationsRepository::new(),
        }
    }

    /// Load the order if `party` is one of its sides.
    async fn owned_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        party: Party,
        order: OrderId,
    ) -> Result<Option<Order>, OrdersServiceError> {
        let order = self.orders_repository.find_order(tx, order).await?;

        Ok(order.filter(|order| party.owns(order)))
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(
        &self,
        customer: CustomerId,
        order: NewOrder,
    ) -> Result<OrderId, OrdersServiceError> {
        if order.items.is_empty() {
            return Err(OrdersServiceError::EmptyOrder);
        }

        let mut tx = self.db.begin().await?;

        let provider_active = self
            .orders_repository
            .lock_provider(&mut tx, order.provider_id)
            .await?;

        if provider_active != Some(true) {
            return Err(OrdersServiceError::ProviderUnavailable);
        }

        if !self
            .orders_repository
            .customer_exists(&mut tx, customer)
            .await?
        {
            return Err(OrdersServiceError::UnknownCustomer);
        }

        let created = self
            .orders_repository
            .create_order(&mut tx, customer, &order)
            .await?;

        for item in &order.items {
            self.items_repository
                .create_item(&mut tx, created.id, item)
                .await?;
        }

        self.journey_repository
            .append_event(&mut tx, created.id, OrderStatus::WaitingConfirmation, None)
            .await?;

        self.tracking_repository
            .create_tracking(&mut tx, created.id)
            .await?;

        let parties = self
            .orders_repository
            .get_parties(&mut tx, created.id)
            .await?;

        tx.commit().await?;

        info!(
            order_id = %created.id,
            customer_id = %customer,
            provider_id = %order.provider_id,
            items = order.items.len(),
            "order created"
        );

        self.notifications
            .dispatch(OrderEvent::Created, created.id, parties);

        Ok(created.id)
    }

    async fn append_journey_event(
        &self,
        party: Party,
        event: NewJourneyEvent,
    ) -> Result<JourneyEventId, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .owned_order(&mut tx, party, event.order_id)
            .await?
            .ok_or(OrdersServiceError::InvalidOrder)?;

        let appended = self
            .journey_repository
            .append_event(&mut tx, order.id, event.status, event.message.as_deref())
            .await?;

        if event.status == OrderStatus::Canceled {
            let cancellation = self
                .cancellations_repository
                .create_cancellation(
                    &mut tx,
                    order.id,
                    Some(appended.id),
                    party.actor(),
                    event.message.as_deref().unwrap_or_default(),
                )
                .await?;

            if cancellation.is_none() {
                debug!(order_id = %order.id, "order already had a cancellation record");
            }
        }

        let parties = self.orders_repository.get_parties(&mut tx, order.id).await?;

        tx.commit().await?;

        info!(
            order_id = %order.id,
            status = event.status.code(),
            actor = ?party.actor(),
            "journey event appended"
        );

        self.notifications.dispatch(
            OrderEvent::StatusChanged {
                actor: party.actor(),
                status: event.status,
            },
            order.id,
            parties,
        );

        Ok(appended.id)
    }

    async fn update_tracking(
        &self,
        party: Party,
        update: TrackingUpdate,
    ) -> Result<Tracking, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        if self
            .owned_order(&mut tx, party, update.order_id)
            .await?
            .is_none()
        {
            return Err(OrdersServiceError::NotFound);
        }

        let tracking = self
            .tracking_repository
            .update_tracking(&mut tx, &update)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(tracking)
    }

    async fn cancel_order(
        &self,
        party: Party,
        cancel: CancelOrder,
    ) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .owned_order(&mut tx, party, cancel.order_id)
            .await?
            .ok_or(OrdersServiceError::InvalidOrder)?;

        self.cancellations_repository
            .create_cancellation(
                &mut tx,
                order.id,
                cancel.journey_event_id,
                party.actor(),
                &cancel.message,
            )
            .await?
            .ok_or(OrdersServiceError::AlreadyCanceled)?;

        tx.commit().await?;

        info!(order_id = %order.id, actor = ?party.actor(), "order canceled");

        Ok(())
    }

    async fn get_order(
        &self,
        party: Party,
        order: OrderId,
    ) -> Result<OrderDetail, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .owned_order(&mut tx, party, order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let items = self.items_repository.get_items(&mut tx, order.id).await?;
        let journey = self.journey_repository.get_events(&mut tx, order.id).await?;
        let tracking = self
            .tracking_repository
            .get_tracking(&mut tx, order.id)
            .await?;
        let cancellation = self
            .cancellations_repository
            .get_cancellation(&mut tx, order.id)
            .await?;
        let parties = self.orders_repository.get_parties(&mut tx, order.id).await?;

        tx.commit().await?;

        Ok(OrderDetail {
            order,
            items,
            journey,
            tracking,
            cancellation,
            parties,
        })
    }

    async fn list_orders(
        &self,
        party: Party,
        filter: StatusFilter,
    ) -> Result<Vec<OrderSummary>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = match party {
            Party::Customer(customer) => {
                self.orders_repository
                    .list_customer_orders(&mut tx, customer, filter)
                    .await?
            }
            Party::Provider(provider) => {
                self.orders_repository
                    .list_provider_orders(&mut tx, provider, filter)
                    .await?
            }
        };

        tx.commit().await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Place an order with an active provider.
    ///
    /// The header, items, first journey event and tracking row are written
    /// together or not at all. The provider is notified after commit.
    async fn create_order(
        &self,
        customer: CustomerId,
        order: NewOrder,
    ) -> Result<OrderId, OrdersServiceError>;

    /// Append a status to the order's journey.
    ///
    /// Any status may follow any other. Status 7 also records the
    /// cancellation unless the order already has one.
    async fn append_journey_event(
        &self,
        party: Party,
        event: NewJourneyEvent,
    ) -> Result<JourneyEventId, OrdersServiceError>;

    /// Overwrite the provider's position for an order.
    async fn update_tracking(
        &self,
        party: Party,
        update: TrackingUpdate,
    ) -> Result<Tracking, OrdersServiceError>;

    /// Record a cancellation without touching the journey.
    async fn cancel_order(
        &self,
        party: Party,
        cancel: CancelOrder,
    ) -> Result<(), OrdersServiceError>;

    async fn get_order(
        &self,
        party: Party,
        order: OrderId,
    ) -> Result<OrderDetail, OrdersServiceError>;

    /// The party's orders with derived totals and statuses.
    async fn list_orders(
        &self,
        party: Party,
        filter: StatusFilter,
    ) -> Result<Vec<OrderSummary>, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::{
        domain::{
            accounts::{
                AccountsService,
                models::{CustomerAccount, ProviderAccount, ProviderId},
            },
            orders::{
                journey::Actor,
                models::{Destination, NewOrderItem, TrackingId},
            },
        },
        messages::Messages,
        notifications::NotificationPayload,
        test::{SentPush, TestContext, count_rows, next_push, recording_notifier},
    };

    use super::*;

    fn new_order(provider: ProviderId, items: Vec<NewOrderItem>) -> NewOrder {
        NewOrder {
            provider_id: provider,
            destination: Destination {
                address: "Jl. Sudirman 5, Jakarta".to_string(),
                latitude: -6.2088,
                longitude: 106.8456,
                description: "Pagar hijau".to_string(),
            },
            notes: "Bawa tangga".to_string(),
            payment_method: 1,
            items,
        }
    }

    fn items() -> Vec<NewOrderItem> {
        vec![
            NewOrderItem {
                service_name: "Cuci AC".to_string(),
                unit_price: 10_000,
                quantity: 2,
            },
            NewOrderItem {
                service_name: "Isi freon".to_string(),
                unit_price: 5_000,
                quantity: 1,
            },
        ]
    }

    async fn placed_order(ctx: &TestContext) -> (CustomerAccount, ProviderAccount, OrderId) {
        let customer = ctx.create_customer("siti@example.com").await;
        let provider = ctx.create_provider("bengkel@example.com", true).await;

        let order = ctx
            .orders
            .create_order(customer.id, new_order(provider.id, items()))
            .await
            .expect("create_order should succeed");

        (customer, provider, order)
    }

    #[tokio::test]
    async fn created_order_starts_waiting_with_tracking_at_origin() -> TestResult {
        let ctx = TestContext::new().await;
        let (customer, provider, order) = placed_order(&ctx).await;

        let detail = ctx.orders.get_order(Party::Customer(customer.id), order).await?;

        assert_eq!(detail.order.provider_id, provider.id);
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.journey.len(), 1);
        assert_eq!(
            detail.current_status(),
            Some(OrderStatus::WaitingConfirmation)
        );
        assert_eq!(detail.completion_date(), None);
        assert!(!detail.is_canceled());

        let tracking = detail.tracking.ok_or("tracking row should exist")?;

        assert_eq!((tracking.latitude, tracking.longitude), (0.0, 0.0));

        Ok(())
    }

    #[tokio::test]
    async fn order_total_is_derived_from_items() -> TestResult {
        let ctx = TestContext::new().await;
        let (customer, _, order) = placed_order(&ctx).await;

        let orders = ctx
            .orders
            .list_orders(Party::Customer(customer.id), StatusFilter::default())
            .await?;

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, order);
        assert_eq!(orders[0].total_price, 25_000);
        assert_eq!(orders[0].status, OrderStatus::WaitingConfirmation);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_provider_persists_nothing() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("siti@example.com").await;

        let result = ctx
            .orders
            .create_order(
                customer.id,
                new_order(ProviderId::from_i64(999_999), items()),
            )
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::ProviderUnavailable)),
            "expected ProviderUnavailable, got {result:?}"
        );

        for table in [
            "orders",
            "order_items",
            "order_journey_events",
            "order_tracking",
        ] {
            assert_eq!(count_rows(&ctx, table).await, 0, "{table} should be empty");
        }

        Ok(())
    }

    #[tokio::test]
    async fn inactive_provider_cannot_take_orders() {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("siti@example.com").await;
        let provider = ctx.create_provider("bengkel@example.com", false).await;

        let result = ctx
            .orders
            .create_order(customer.id, new_order(provider.id, items()))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::ProviderUnavailable)),
            "expected ProviderUnavailable, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_customer_is_rejected() {
        let ctx = TestContext::new().await;
        let provider = ctx.create_provider("bengkel@example.com", true).await;

        let result = ctx
            .orders
            .create_order(CustomerId::from_i64(424_242), new_order(provider.id, items()))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::UnknownCustomer)),
            "expected UnknownCustomer, got {result:?}"
        );
    }

    #[tokio::test]
    async fn empty_order_is_rejected() {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("siti@example.com").await;
        let provider = ctx.create_provider("bengkel@example.com", true).await;

        let result = ctx
            .orders
            .create_order(customer.id, new_order(provider.id, Vec::new()))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyOrder)),
            "expected EmptyOrder, got {result:?}"
        );
    }

    #[tokio::test]
    async fn current_status_is_the_highest_appended() -> TestResult {
        let ctx = TestContext::new().await;
        let (_, provider, order) = placed_order(&ctx).await;
        let party = Party::Provider(provider.id);

        for status in [OrderStatus::OnTheWay, OrderStatus::Confirmed] {
            ctx.orders
                .append_journey_event(
                    party,
                    NewJourneyEvent {
                        order_id: order,
                        status,
                        message: None,
                    },
                )
                .await?;
        }

        let detail = ctx.orders.get_order(party, order).await?;

        assert_eq!(detail.journey.len(), 3);
        assert_eq!(detail.current_status(), Some(OrderStatus::OnTheWay));

        let listed = ctx
            .orders
            .list_orders(party, StatusFilter::default())
            .await?;

        assert_eq!(listed[0].status, OrderStatus::OnTheWay);

        Ok(())
    }

    #[tokio::test]
    async fn canceling_twice_leaves_one_cancellation() -> TestResult {
        let ctx = TestContext::new().await;
        let (customer, _, order) = placed_order(&ctx).await;
        let party = Party::Customer(customer.id);

        for _ in 0..2 {
            ctx.orders
                .append_journey_event(
                    party,
                    NewJourneyEvent {
                        order_id: order,
                        status: OrderStatus::Canceled,
                        message: Some("Berubah pikiran".to_string()),
                    },
                )
                .await?;
        }

        assert_eq!(count_rows(&ctx, "order_cancellations").await, 1);

        let detail = ctx.orders.get_order(party, order).await?;
        let cancellation = detail.cancellation.clone().ok_or("order should be canceled")?;

        assert_eq!(cancellation.canceled_by, Actor::Customer);
        assert_eq!(cancellation.message, "Berubah pikiran");
        assert_eq!(detail.current_status(), Some(OrderStatus::Canceled));
        assert!(detail.completion_date().is_some());

        let canceled_events: Vec<_> = detail
            .journey
            .iter()
            .filter(|event| event.status == OrderStatus::Canceled)
            .collect();

        assert_eq!(canceled_events.len(), 2);
        assert!(
            canceled_events
                .iter()
                .all(|event| event.cancellation.as_ref().map(|c| c.canceled_by)
                    == Some(Actor::Customer))
        );

        Ok(())
    }

    #[tokio::test]
    async fn cancel_order_rejects_second_cancellation() -> TestResult {
        let ctx = TestContext::new().await;
        let (_, provider, order) = placed_order(&ctx).await;
        let party = Party::Provider(provider.id);

        let cancel = CancelOrder {
            order_id: order,
            message: "Sedang penuh".to_string(),
            journey_event_id: None,
        };

        ctx.orders.cancel_order(party, cancel.clone()).await?;

        let result = ctx.orders.cancel_order(party, cancel).await;

        assert!(
            matches!(result, Err(OrdersServiceError::AlreadyCanceled)),
            "expected AlreadyCanceled, got {result:?}"
        );

        let detail = ctx.orders.get_order(party, order).await?;

        assert_eq!(detail.journey.len(), 1, "cancel_order appends no event");
        assert!(detail.is_canceled());

        Ok(())
    }

    #[tokio::test]
    async fn cancel_unknown_order_is_invalid() {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("siti@example.com").await;

        let result = ctx
            .orders
            .cancel_order(
                Party::Customer(customer.id),
                CancelOrder {
                    order_id: OrderId::from_i64(31_337),
                    message: String::new(),
                    journey_event_id: None,
                },
            )
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidOrder)),
            "expected InvalidOrder, got {result:?}"
        );
    }

    #[tokio::test]
    async fn tracking_update_requires_matching_ids() -> TestResult {
        let ctx = TestContext::new().await;
        let (customer, provider, order) = placed_order(&ctx).await;
        let party = Party::Provider(provider.id);

        let tracking_id = ctx
            .orders
            .get_order(party, order)
            .await?
            .tracking
            .ok_or("tracking row should exist")?
            .id;

        let moved = ctx
            .orders
            .update_tracking(
                party,
                TrackingUpdate {
                    order_id: order,
                    tracking_id,
                    latitude: -6.21,
                    longitude: 106.85,
                },
            )
            .await?;

        assert_eq!((moved.latitude, moved.longitude), (-6.21, 106.85));

        let wrong_row = ctx
            .orders
            .update_tracking(
                party,
                TrackingUpdate {
                    order_id: order,
                    tracking_id: TrackingId::from_i64(tracking_id.into_i64() + 1),
                    latitude: 0.0,
                    longitude: 0.0,
                },
            )
            .await;

        assert!(
            matches!(wrong_row, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {wrong_row:?}"
        );

        let not_the_provider = ctx
            .orders
            .update_tracking(
                Party::Customer(customer.id),
                TrackingUpdate {
                    order_id: order,
                    tracking_id,
                    latitude: 0.0,
                    longitude: 0.0,
                },
            )
            .await;

        assert!(
            matches!(not_the_provider, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {not_the_provider:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn orders_are_scoped_to_their_parties() -> TestResult {
        let ctx = TestContext::new().await;
        let (_, _, order) = placed_order(&ctx).await;
        let stranger = ctx.create_customer("orang@example.com").await;

        let detail = ctx
            .orders
            .get_order(Party::Customer(stranger.id), order)
            .await;

        assert!(
            matches!(detail, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {detail:?}"
        );

        let append = ctx
            .orders
            .append_journey_event(
                Party::Customer(stranger.id),
                NewJourneyEvent {
                    order_id: order,
                    status: OrderStatus::Canceled,
                    message: None,
                },
            )
            .await;

        assert!(
            matches!(append, Err(OrdersServiceError::InvalidOrder)),
            "expected InvalidOrder, got {append:?}"
        );

        let listed = ctx
            .orders
            .list_orders(Party::Customer(stranger.id), StatusFilter::default())
            .await?;

        assert!(listed.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_status_bounds() -> TestResult {
        let ctx = TestContext::new().await;
        let (customer, provider, first) = placed_order(&ctx).await;

        let second = ctx
            .orders
            .create_order(customer.id, new_order(provider.id, items()))
            .await?;

        ctx.orders
            .append_journey_event(
                Party::Provider(provider.id),
                NewJourneyEvent {
                    order_id: second,
                    status: OrderStatus::Paid,
                    message: None,
                },
            )
            .await?;

        let party = Party::Customer(customer.id);

        let open = ctx
            .orders
            .list_orders(
                party,
                StatusFilter {
                    below: Some(5),
                    above: None,
                },
            )
            .await?;

        let closed = ctx
            .orders
            .list_orders(
                party,
                StatusFilter {
                    below: None,
                    above: Some(5),
                },
            )
            .await?;

        assert_eq!(open.iter().map(|o| o.id).collect::<Vec<_>>(), vec![first]);
        assert_eq!(closed.iter().map(|o| o.id).collect::<Vec<_>>(), vec![second]);
        assert!(closed[0].completed_at.is_some());
        assert!(!closed[0].is_canceled);

        Ok(())
    }

    const PUSH_WAIT: Duration = Duration::from_secs(5);
    const QUIET_WAIT: Duration = Duration::from_millis(300);

    struct Pushes {
        ctx: TestContext,
        customer_app: UnboundedReceiver<SentPush>,
        provider_app: UnboundedReceiver<SentPush>,
        customer: CustomerId,
        provider: ProviderId,
    }

    /// Both parties have device tokens, so every event that should push does.
    async fn with_recorded_pushes() -> Pushes {
        let (customer_notifier, customer_app) = recording_notifier();
        let (provider_notifier, provider_app) = recording_notifier();

        let ctx = TestContext::with_notifiers(customer_notifier, provider_notifier).await;
        let customer = ctx.create_customer("siti@example.com").await;
        let provider = ctx.create_provider("bengkel@example.com", true).await;

        ctx.accounts
            .update_provider_device_token(provider.id, "provider-device".to_string())
            .await
            .expect("provider device token should be stored");

        Pushes {
            ctx,
            customer_app,
            provider_app,
            customer: customer.id,
            provider: provider.id,
        }
    }

    impl Pushes {
        /// Place an order and swallow the provider's new-order push.
        async fn place_order(&mut self) -> OrderId {
            let order = self
                .ctx
                .orders
                .create_order(self.customer, new_order(self.provider, items()))
                .await
                .expect("create_order should succeed");

            next_push(&mut self.provider_app, PUSH_WAIT)
                .await
                .expect("provider should hear about the new order");

            order
        }

        async fn append(&self, party: Party, order: OrderId, status: OrderStatus) {
            self.ctx
                .orders
                .append_journey_event(
                    party,
                    NewJourneyEvent {
                        order_id: order,
                        status,
                        message: None,
                    },
                )
                .await
                .expect("append_journey_event should succeed");
        }
    }

    #[tokio::test]
    async fn new_order_is_pushed_to_the_provider_only() -> TestResult {
        let mut pushes = with_recorded_pushes().await;

        let order = pushes
            .ctx
            .orders
            .create_order(pushes.customer, new_order(pushes.provider, items()))
            .await?;

        let sent = next_push(&mut pushes.provider_app, PUSH_WAIT).await;

        assert_eq!(
            sent,
            Some((
                "provider-device".to_string(),
                NotificationPayload::new(
                    Messages::default().notifications.new_order,
                    order.into_i64()
                ),
            ))
        );
        assert_eq!(next_push(&mut pushes.customer_app, QUIET_WAIT).await, None);

        Ok(())
    }

    #[tokio::test]
    async fn provider_status_change_is_pushed_to_the_customer() {
        let mut pushes = with_recorded_pushes().await;
        let order = pushes.place_order().await;

        pushes
            .append(Party::Provider(pushes.provider), order, OrderStatus::Working)
            .await;

        let sent = next_push(&mut pushes.customer_app, PUSH_WAIT).await;
        let messages = Messages::default();

        assert_eq!(
            sent,
            Some((
                "device-siti@example.com".to_string(),
                NotificationPayload::new(
                    messages
                        .notifications
                        .customer_status
                        .for_status(OrderStatus::Working),
                    order.into_i64()
                ),
            ))
        );
        assert_eq!(next_push(&mut pushes.provider_app, QUIET_WAIT).await, None);
    }

    #[tokio::test]
    async fn customer_cancel_is_pushed_to_the_provider() {
        let mut pushes = with_recorded_pushes().await;
        let order = pushes.place_order().await;

        pushes
            .append(Party::Customer(pushes.customer), order, OrderStatus::Canceled)
            .await;

        let sent = next_push(&mut pushes.provider_app, PUSH_WAIT).await;

        assert_eq!(
            sent,
            Some((
                "provider-device".to_string(),
                NotificationPayload::new(
                    Messages::default().notifications.order_canceled,
                    order.into_i64()
                ),
            ))
        );
        assert_eq!(next_push(&mut pushes.customer_app, QUIET_WAIT).await, None);
    }

    #[tokio::test]
    async fn customer_status_change_other_than_cancel_pushes_nothing() {
        let mut pushes = with_recorded_pushes().await;
        let order = pushes.place_order().await;

        pushes
            .append(Party::Customer(pushes.customer), order, OrderStatus::Complete)
            .await;

        assert_eq!(next_push(&mut pushes.provider_app, QUIET_WAIT).await, None);
        assert_eq!(next_push(&mut pushes.customer_app, QUIET_WAIT).await, None);
    }
}
