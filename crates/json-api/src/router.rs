//! App Router

use salvo::Router;

use crate::{accounts, auth, healthcheck, observability, orders, ratings};

/// Every route the server answers, with the API mounted under `base_path`.
pub(crate) fn app_router(base_path: &str) -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path(base_path.trim_matches('/'))
                .push(public_routes())
                .push(customer_routes())
                .push(provider_routes()),
        )
}

fn public_routes() -> Router {
    Router::new()
        .push(Router::with_path("user/signin/email").post(accounts::customer_signin::handler))
        .push(Router::with_path("user/signup/email").post(accounts::customer_signup::handler))
        .push(Router::with_path("user/auth/social").post(accounts::social_auth::handler))
        .push(Router::with_path("provider/signin").post(accounts::provider_signin::handler))
}

fn customer_routes() -> Router {
    Router::new()
        .hoop(auth::middleware::customer)
        .push(Router::with_path("user/me").get(accounts::me::handler))
        .push(Router::with_path("user/profile/update").put(accounts::profile::handler))
        .push(Router::with_path("user/devicetoken/update").put(accounts::device_token::customer))
        .push(Router::with_path("order/new").post(orders::create::handler))
        .push(Router::with_path("order/me").get(orders::list::customer))
        .push(Router::with_path("order/detail/{order_id}").get(orders::detail::customer))
        .push(Router::with_path("user/order/status").post(orders::status::customer))
        .push(Router::with_path("user/order/cancel").post(orders::cancel::customer))
        .push(Router::with_path("provider/rating/add").post(ratings::add::handler))
        .push(Router::with_path("provider/rating/edit").put(ratings::edit::handler))
        .push(Router::with_path("rating/get/{provider_id}").get(ratings::list::for_provider))
        .push(Router::with_path("jobque/get/{provider_id}").get(orders::job_queue::handler))
}

fn provider_routes() -> Router {
    Router::new()
        .hoop(auth::middleware::provider)
        .push(Router::with_path("order/status").post(orders::status::provider))
        .push(Router::with_path("order/tracking").put(orders::tracking::handler))
        .push(Router::with_path("provider/order/cancel").post(orders::cancel::provider))
        .push(Router::with_path("provider/order/me").get(orders::list::provider))
        .push(Router::with_path("provider/order/detail/{order_id}").get(orders::detail::provider))
        .push(Router::with_path("provider/quickinfo").get(orders::quick_info::handler))
        .push(Router::with_path("rating/me").get(ratings::list::mine))
        .push(Router::with_path("provider/devicetoken/update").put(accounts::device_token::provider))
        .push(Router::with_path("provider/active").put(accounts::availability::activate))
        .push(Router::with_path("provider/inactive").put(accounts::availability::deactivate))
        .push(Router::with_path("provider/maxdistance").put(accounts::max_distance::handler))
}
