//! Category update page and endpoint.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::{CategoryFormData, CategoryId, CategoryStore, create::category_form_view},
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    item::ItemStore,
    navigation::NavBar,
    validation::ValidationErrors,
};

/// Render the category update page pre-filled with the current name.
pub async fn get_update_category_page<C, I>(
    Path(category_id): Path<CategoryId>,
    State(state): State<AppState<C, I>>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let category = state.category_store.get(category_id)?;

    Ok(update_category_view(category_id, category.name.as_ref(), &ValidationErrors::default())
        .into_response())
}

/// Handle category update form submission.
///
/// Renaming a category is allowed to produce a name that another category
/// already has.
pub async fn update_category_endpoint<C, I>(
    Path(category_id): Path<CategoryId>,
    State(state): State<AppState<C, I>>,
    Form(form_data): Form<CategoryFormData>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let name = match form_data.validate() {
        Ok(name) => name,
        Err(errors) => {
            return Ok(update_category_view(category_id, &form_data.name, &errors).into_response());
        }
    };

    let category = state
        .category_store
        .update(category_id, name)
        .inspect_err(|error| match error {
            Error::NotFound => tracing::debug!("Tried to update missing category {category_id}"),
            error => tracing::error!(
                "An unexpected error occurred while updating category {category_id}: {error}"
            ),
        })?;

    let category_url = endpoints::format_endpoint(endpoints::CATEGORY_VIEW, category.id);

    Ok(Redirect::to(&category_url).into_response())
}

fn update_category_view(category_id: CategoryId, name: &str, errors: &ValidationErrors) -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();
    let update_url = endpoints::format_endpoint(endpoints::UPDATE_CATEGORY_VIEW, category_id);
    let form = category_form_view(&update_url, name, errors, "Update Category");

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE) {
            h1 class="text-xl font-bold mb-4" { "Update Category" }
            (form)
        }
    };

    base("Update Category", &content)
}
