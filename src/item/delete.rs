//! Item deletion confirmation page and endpoint.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::CategoryStore,
    endpoints,
    html::{BUTTON_DANGER_STYLE, FORM_CONTAINER_STYLE, base, link},
    item::{DeleteItemFormData, Item, ItemId, ItemStore},
    navigation::NavBar,
};

/// Render the page asking the user to confirm deleting an item.
///
/// Redirects to the items page if the item does not exist.
pub async fn get_delete_item_page<C, I>(
    Path(item_id): Path<ItemId>,
    State(state): State<AppState<C, I>>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    match state.item_store.get(item_id) {
        Ok(item) => Ok(delete_item_view(&item).into_response()),
        Err(Error::NotFound) => Ok(Redirect::to(endpoints::ITEMS_VIEW).into_response()),
        Err(error) => {
            tracing::error!("Could not get item {item_id}: {error}");
            Err(error)
        }
    }
}

/// Handle item deletion.
///
/// The item is identified by the `id` form field. Deleting an item that does
/// not exist, or submitting no ID at all, is treated as success.
pub async fn delete_item_endpoint<C, I>(
    State(state): State<AppState<C, I>>,
    Form(form_data): Form<DeleteItemFormData>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let Some(item_id) = form_data.id else {
        tracing::debug!("Delete item request did not include an ID");
        return Ok(Redirect::to(endpoints::ITEMS_VIEW).into_response());
    };

    match state.item_store.delete(item_id) {
        Ok(()) => tracing::info!("Deleted item {item_id}"),
        Err(Error::NotFound) => tracing::debug!("Item {item_id} was already deleted"),
        Err(error) => {
            tracing::error!("An unexpected error occurred while deleting item {item_id}: {error}");
            return Err(error);
        }
    }

    Ok(Redirect::to(endpoints::ITEMS_VIEW).into_response())
}

fn delete_item_view(item: &Item) -> Markup {
    let nav_bar = NavBar::new(endpoints::ITEMS_VIEW).into_html();
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_ITEM_VIEW, item.id);
    let item_url = endpoints::format_endpoint(endpoints::ITEM_VIEW, item.id);

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Delete Item" }

            p class="mb-4"
            {
                "Are you sure you want to delete the item "
                strong { (item.name) }
                "?"
            }

            form
                action=(delete_url)
                method="post"
                class="w-full space-y-4"
            {
                input type="hidden" name="id" value=(item.id);

                button type="submit" class=(BUTTON_DANGER_STYLE) { "Delete Item" }
            }

            p class="mt-4" { (link(&item_url, "Cancel")) }
        }
    };

    base("Delete Item", &content)
}

#[cfg(test)]
mod delete_item_page_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };

    use crate::{
        endpoints,
        test_utils::{
            assert_form_action, assert_form_submit_button_with_text,
            assert_hidden_input_with_value, assert_redirect, assert_status_ok, assert_valid_html,
            create_test_category, create_test_item, get_failing_state, get_test_state,
            must_get_form, parse_html_document, select_text,
        },
    };

    use super::get_delete_item_page;

    #[tokio::test]
    async fn render_confirmation() {
        let state = get_test_state();
        let books = create_test_category(&state, "Books");
        let item = create_test_item(&state, "Dune", books.id);

        let response = get_delete_item_page(Path(item.id), State(state))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(select_text(&html, "strong"), vec!["Dune"]);

        let form = must_get_form(&html);
        assert_form_action(
            &form,
            &endpoints::format_endpoint(endpoints::DELETE_ITEM_VIEW, item.id),
        );
        assert_hidden_input_with_value(&form, "id", &item.id.to_string());
        assert_form_submit_button_with_text(&form, "Delete Item");
    }

    #[tokio::test]
    async fn missing_item_redirects_to_list() {
        let response = get_delete_item_page(Path(999999), State(get_test_state()))
            .await
            .unwrap();

        assert_redirect(&response, endpoints::ITEMS_VIEW);
    }

    #[tokio::test]
    async fn store_failure_is_internal_server_error() {
        let response = get_delete_item_page(Path(1), State(get_failing_state()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
