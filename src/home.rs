//! The catalog home page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::CategoryStore,
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base},
    item::ItemStore,
    navigation::NavBar,
};

const CARD_STYLE: &str = "block p-6 bg-white border border-gray-200 rounded-lg shadow-sm \
    hover:bg-gray-100 dark:bg-gray-800 dark:border-gray-700 dark:hover:bg-gray-700";

/// Render the home page with the number of categories and items.
pub async fn get_home_page<C, I>(State(state): State<AppState<C, I>>) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let category_count = state
        .category_store
        .count()
        .inspect_err(|error| tracing::error!("Could not count categories: {error}"))?;
    let item_count = state
        .item_store
        .count()
        .inspect_err(|error| tracing::error!("Could not count items: {error}"))?;

    Ok(home_view(category_count, item_count).into_response())
}

fn home_view(category_count: u32, item_count: u32) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let card = |url: &str, title: &str, count: u32| {
        html!(
            a href=(url) class=(CARD_STYLE)
            {
                h2 class="mb-2 text-lg font-semibold text-gray-900 dark:text-white" { (title) }
                p class="text-3xl font-bold text-gray-900 dark:text-white" data-count=(title)
                {
                    (count)
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Catalog" }

            div class="grid gap-6 sm:grid-cols-2 w-full max-w-2xl"
            {
                (card(endpoints::CATEGORIES_VIEW, "Categories", category_count))
                (card(endpoints::ITEMS_VIEW, "Items", item_count))
            }
        }
    );

    base("Home", &content)
}

#[cfg(test)]
mod home_page_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};

    use crate::test_utils::{
        assert_status_ok, assert_valid_html, create_test_category, create_test_item,
        get_failing_state, get_test_state, parse_html_document, select_text,
    };

    use super::get_home_page;

    #[tokio::test]
    async fn shows_record_counts() {
        let state = get_test_state();
        let books = create_test_category(&state, "Books");
        create_test_category(&state, "Games");
        create_test_item(&state, "Dune", books.id);

        let response = get_home_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(select_text(&html, "p[data-count='Categories']"), vec!["2"]);
        assert_eq!(select_text(&html, "p[data-count='Items']"), vec!["1"]);
    }

    #[tokio::test]
    async fn store_failure_is_internal_server_error() {
        let response = get_home_page(State(get_failing_state()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
