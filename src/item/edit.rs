//! Item update page and endpoint.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::{Category, CategoryStore},
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    item::{
        ItemFormData, ItemId, ItemStore,
        detail::{category_badge, find_category},
        form::item_form_view,
    },
    navigation::NavBar,
    validation::ValidationErrors,
};

/// Render the item update page pre-filled with the item's current fields.
pub async fn get_update_item_page<C, I>(
    Path(item_id): Path<ItemId>,
    State(state): State<AppState<C, I>>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let item = state.item_store.get(item_id)?;
    let current_category = find_category(&state.category_store, item.category_id)?;

    let categories = state
        .category_store
        .get_all()
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    Ok(update_item_view(
        item_id,
        &ItemFormData::from_item(&item),
        current_category.as_ref(),
        &categories,
        &ValidationErrors::default(),
    )
    .into_response())
}

/// Handle item update form submission.
pub async fn update_item_endpoint<C, I>(
    Path(item_id): Path<ItemId>,
    State(state): State<AppState<C, I>>,
    Form(form_data): Form<ItemFormData>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let updated_item = match form_data.validate() {
        Ok(updated_item) => updated_item,
        Err(errors) => {
            let categories = state
                .category_store
                .get_all()
                .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;
            let current_category = form_data
                .selected_category()
                .and_then(|category_id| categories.iter().find(|c| c.id == category_id))
                .cloned();

            return Ok(update_item_view(
                item_id,
                &form_data,
                current_category.as_ref(),
                &categories,
                &errors,
            )
            .into_response());
        }
    };

    let item = state
        .item_store
        .update(item_id, updated_item)
        .inspect_err(|error| match error {
            Error::NotFound => tracing::debug!("Tried to update missing item {item_id}"),
            error => tracing::error!(
                "An unexpected error occurred while updating item {item_id}: {error}"
            ),
        })?;

    let item_url = endpoints::format_endpoint(endpoints::ITEM_VIEW, item.id);

    Ok(Redirect::to(&item_url).into_response())
}

fn update_item_view(
    item_id: ItemId,
    form_data: &ItemFormData,
    current_category: Option<&Category>,
    categories: &[Category],
    errors: &ValidationErrors,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::ITEMS_VIEW).into_html();
    let update_url = endpoints::format_endpoint(endpoints::UPDATE_ITEM_VIEW, item_id);
    let form = item_form_view(&update_url, form_data, categories, errors, "Update Item");

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE) {
            h1 class="text-xl font-bold mb-4" { "Update Item" }

            p class="mb-4"
            {
                "Current category: "
                (category_badge(current_category))
            }

            (form)
        }
    };

    base("Update Item", &content)
}
