//! Extractors for payloads accepted by [`crate::middleware::validate_request`].
//!
//! Each extractor reads the normalized value for its request part from
//! [`ValidatedPayloads`] and deserializes it. A route that uses one of these
//! without the matching validation step gets the 500 `VALIDATION_ERROR` body.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use roster_schema::ValidationTarget;

use crate::error::ApiError;
use crate::middleware::ValidatedPayloads;

fn validated_payload<T: DeserializeOwned>(
    parts: &Parts,
    target: ValidationTarget,
) -> Result<T, ApiError> {
    let value = parts
        .extensions
        .get::<ValidatedPayloads>()
        .and_then(|payloads| payloads.get(target))
        .ok_or_else(|| {
            tracing::error!(%target, uri = %parts.uri, "no validated payload on request");
            ApiError::ValidationUnavailable(format!("no validated {target} payload"))
        })?;

    T::deserialize(value).map_err(|e| {
        tracing::error!(%target, error = %e, "validated payload does not fit handler type");
        ApiError::ValidationUnavailable(e.to_string())
    })
}

macro_rules! validated_extractor {
    ($(#[$meta:meta])* $name:ident, $target:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<T>(pub T);

        impl<S, T> FromRequestParts<S> for $name<T>
        where
            S: Send + Sync,
            T: DeserializeOwned,
        {
            type Rejection = ApiError;

            async fn from_request_parts(
                parts: &mut Parts,
                _state: &S,
            ) -> Result<Self, Self::Rejection> {
                validated_payload(parts, $target).map(Self)
            }
        }
    };
}

validated_extractor!(
    /// The normalized JSON body.
    ValidatedBody,
    ValidationTarget::Body
);
validated_extractor!(
    /// The normalized path parameters.
    ValidatedParams,
    ValidationTarget::Params
);
validated_extractor!(
    /// The normalized query parameters, defaults applied.
    ValidatedQuery,
    ValidationTarget::Query
);
