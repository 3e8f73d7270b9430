use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The fallback handler for requests that match no route.
pub async fn get_404_not_found(uri: Uri) -> Response {
    tracing::debug!("No route for {uri}");

    Error::NotFound.into_response()
}
