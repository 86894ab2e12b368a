//! Full page responses for requests that cannot be served.
//!
//! Both pages share [error_view] so they look like the rest of the catalog
//! and link back to the home page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The route fallback for paths that match no handler.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// The response for a missing category, item or route.
pub fn get_404_not_found_response() -> Response {
    let page = error_view(
        "Not Found",
        "404",
        "Something's missing.",
        "Sorry, we can't find that page. Try the category or item lists instead.",
    );

    (StatusCode::NOT_FOUND, Html(page.into_string())).into_response()
}

/// The response for a store failure.
pub fn get_500_internal_server_error_response() -> Response {
    let page = error_view(
        "Internal Server Error",
        "500",
        "Sorry, something went wrong.",
        "Try again later or check the server logs",
    );

    (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
}
