//! Category deletion confirmation page and endpoint.
//!
//! Deleting a category does not delete its items. They keep referring to the
//! old category ID and are shown with an unknown category from then on.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::{Category, CategoryId, CategoryStore, DeleteCategoryFormData},
    endpoints,
    html::{BUTTON_DANGER_STYLE, FORM_CONTAINER_STYLE, base, link},
    item::{Item, ItemStore},
    navigation::NavBar,
};

/// Render the page asking the user to confirm deleting a category.
///
/// Redirects to the categories page if the category does not exist.
pub async fn get_delete_category_page<C, I>(
    Path(category_id): Path<CategoryId>,
    State(state): State<AppState<C, I>>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let category = match state.category_store.get(category_id) {
        Ok(category) => category,
        Err(Error::NotFound) => {
            return Ok(Redirect::to(endpoints::CATEGORIES_VIEW).into_response());
        }
        Err(error) => {
            tracing::error!("Could not get category {category_id}: {error}");
            return Err(error);
        }
    };

    let items = state
        .item_store
        .get_by_category(category_id)
        .inspect_err(|error| {
            tracing::error!("Could not get items for category {category_id}: {error}")
        })?;

    Ok(delete_category_view(&category, &items).into_response())
}

/// Handle category deletion.
///
/// The category is identified by the `id` form field. Deleting a category
/// that does not exist, or submitting no ID at all, is treated as success.
pub async fn delete_category_endpoint<C, I>(
    State(state): State<AppState<C, I>>,
    Form(form_data): Form<DeleteCategoryFormData>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let Some(category_id) = form_data.id else {
        tracing::debug!("Delete category request did not include an ID");
        return Ok(Redirect::to(endpoints::CATEGORIES_VIEW).into_response());
    };

    match state.category_store.delete(category_id) {
        Ok(()) => tracing::info!("Deleted category {category_id}"),
        Err(Error::NotFound) => tracing::debug!("Category {category_id} was already deleted"),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting category {category_id}: {error}"
            );
            return Err(error);
        }
    }

    Ok(Redirect::to(endpoints::CATEGORIES_VIEW).into_response())
}

fn delete_category_view(category: &Category, items: &[Item]) -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_CATEGORY_VIEW, category.id);
    let category_url = endpoints::format_endpoint(endpoints::CATEGORY_VIEW, category.id);

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Delete Category" }

            p class="mb-4"
            {
                "Are you sure you want to delete the category "
                strong { (category.name) }
                "?"
            }

            @if items.is_empty() {
                p class="mb-4" { "No items are filed under this category." }
            } @else {
                p class="mb-2"
                {
                    "The following items will be left without a category:"
                }

                ul class="mb-4 list-disc list-inside"
                {
                    @for item in items {
                        li data-dependent-item
                        {
                            (link(&endpoints::format_endpoint(endpoints::ITEM_VIEW, item.id), item.name.as_ref()))
                        }
                    }
                }
            }

            form
                action=(delete_url)
                method="post"
                class="w-full space-y-4"
            {
                input type="hidden" name="id" value=(category.id);

                button type="submit" class=(BUTTON_DANGER_STYLE) { "Delete Category" }
            }

            p class="mt-4" { (link(&category_url, "Cancel")) }
        }
    };

    base("Delete Category", &content)
}
