//! Item creation page and endpoint.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::{Category, CategoryStore},
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    item::{ItemFormData, ItemStore, form::item_form_view},
    navigation::NavBar,
    validation::ValidationErrors,
};

/// Render the item creation page with every category to choose from.
pub async fn get_new_item_page<C, I>(State(state): State<AppState<C, I>>) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let categories = state
        .category_store
        .get_all()
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    Ok(new_item_view(
        &ItemFormData::default(),
        &categories,
        &ValidationErrors::default(),
    )
    .into_response())
}

/// Handle item creation form submission.
///
/// The submitted category ID is saved as is, whether or not the category
/// exists.
pub async fn create_item_endpoint<C, I>(
    State(state): State<AppState<C, I>>,
    Form(form_data): Form<ItemFormData>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let new_item = match form_data.validate() {
        Ok(new_item) => new_item,
        Err(errors) => {
            let categories = state
                .category_store
                .get_all()
                .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

            return Ok(new_item_view(&form_data, &categories, &errors).into_response());
        }
    };

    let item = state.item_store.create(new_item).inspect_err(|error| {
        tracing::error!("An unexpected error occurred while creating an item: {error}")
    })?;

    let item_url = endpoints::format_endpoint(endpoints::ITEM_VIEW, item.id);

    Ok(Redirect::to(&item_url).into_response())
}

fn new_item_view(
    form_data: &ItemFormData,
    categories: &[Category],
    errors: &ValidationErrors,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_ITEM_VIEW).into_html();
    let form = item_form_view(
        endpoints::NEW_ITEM_VIEW,
        form_data,
        categories,
        errors,
        "Create Item",
    );

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE) {
            h1 class="text-xl font-bold mb-4" { "Create Item" }
            (form)
        }
    };

    base("Create Item", &content)
}
