//! Order Errors

use panggilin_app::{domain::orders::OrdersServiceError, messages::ErrorMessages};
use tracing::error;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError, messages: &ErrorMessages) -> ApiError {
    let message = match error {
        OrdersServiceError::ProviderUnavailable => &messages.provider_unavailable,
        OrdersServiceError::UnknownCustomer => &messages.customer_unknown,
        OrdersServiceError::EmptyOrder => &messages.empty_order,
        OrdersServiceError::InvalidOrder => &messages.invalid_order,
        OrdersServiceError::AlreadyCanceled => &messages.order_already_canceled,
        OrdersServiceError::NotFound => &messages.tracking_not_found,
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => &messages.invalid_request,
        OrdersServiceError::Sql(source) => {
            error!("order storage failed: {source}");

            &messages.request_failed
        }
    };

    ApiError::bad_request(message)
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn order_errors_are_bad_requests_with_catalog_messages() {
        let messages = ErrorMessages::default();

        let cases = [
            (
                OrdersServiceError::ProviderUnavailable,
                &messages.provider_unavailable,
            ),
            (OrdersServiceError::EmptyOrder, &messages.empty_order),
            (
                OrdersServiceError::AlreadyCanceled,
                &messages.order_already_canceled,
            ),
            (OrdersServiceError::NotFound, &messages.tracking_not_found),
            (OrdersServiceError::InvalidData, &messages.invalid_request),
        ];

        for (error, expected) in cases {
            let api_error = into_api_error(error, &messages);

            assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
            assert_eq!(&api_error.message, expected);
        }
    }
}
