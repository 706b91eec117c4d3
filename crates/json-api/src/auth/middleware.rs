//! Auth middleware.
//!
//! Customer and provider routes each sit behind their own guard. A request
//! without a live token of the right kind never reaches its handler.

use std::sync::Arc;

use panggilin_app::{
    auth::{Customer, Principal, PrincipalId, Provider},
    context::AppContext,
};
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::debug;

use crate::{
    auth::{SessionsFor, into_api_error},
    errors::ApiError,
    extensions::*,
    observability::observe_auth_rejection,
    state::State,
};

#[salvo::handler]
pub(crate) async fn customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    guard::<Customer>(req, depot, res, ctrl).await;
}

#[salvo::handler]
pub(crate) async fn provider(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    guard::<Provider>(req, depot, res, ctrl).await;
}

async fn guard<P: Principal>(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) where
    AppContext: SessionsFor<P>,
{
    match authenticate::<P>(req, depot).await {
        Ok(principal) => {
            depot.insert_principal(principal);

            ctrl.call_next(req, depot, res).await;
        }
        Err(error) => {
            debug!(
                kind = P::KIND.as_str(),
                path = req.uri().path(),
                "rejected request: {}",
                error.message
            );

            observe_auth_rejection(P::KIND.as_str(), error.status.as_u16());

            res.render(error);
            ctrl.skip_rest();
        }
    }
}

async fn authenticate<P: Principal>(
    req: &Request,
    depot: &Depot,
) -> Result<PrincipalId<P>, ApiError>
where
    AppContext: SessionsFor<P>,
{
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let token = extract_bearer_token(req)
        .ok_or_else(|| ApiError::unauthorized(&state.errors().missing_token))?;

    SessionsFor::<P>::sessions(&state.app)
        .validate_token(token)
        .await
        .map_err(|error| into_api_error(error, state.errors()))
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
