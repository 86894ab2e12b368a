//! Category creation page and endpoint.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::{CategoryFormData, CategoryStore},
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, text_input},
    item::ItemStore,
    navigation::NavBar,
    validation::ValidationErrors,
};

/// Render the category creation page.
pub async fn get_new_category_page() -> Response {
    new_category_view("", &ValidationErrors::default()).into_response()
}

/// Handle category creation form submission.
///
/// A category whose name matches an existing one (ignoring case) is not
/// created again, the client is sent to the existing category instead.
pub async fn create_category_endpoint<C, I>(
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
            return Ok(new_category_view(&form_data.name, &errors).into_response());
        }
    };

    let existing_category = state
        .category_store
        .find_by_name(&name)
        .inspect_err(|error| tracing::error!("Could not look up category '{name}': {error}"))?;

    let category = match existing_category {
        Some(category) => {
            tracing::debug!(
                "Category '{name}' already exists as '{}' (ID {})",
                category.name,
                category.id
            );
            category
        }
        None => state.category_store.create(name).inspect_err(|error| {
            tracing::error!("An unexpected error occurred while creating a category: {error}")
        })?,
    };

    let category_url = endpoints::format_endpoint(endpoints::CATEGORY_VIEW, category.id);

    Ok(Redirect::to(&category_url).into_response())
}

fn new_category_view(name: &str, errors: &ValidationErrors) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_CATEGORY_VIEW).into_html();
    let form = category_form_view(endpoints::NEW_CATEGORY_VIEW, name, errors, "Create Category");

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE) {
            h1 class="text-xl font-bold mb-4" { "Create Category" }
            (form)
        }
    };

    base("Create Category", &content)
}

/// The form shared by the create and update pages.
pub(super) fn category_form_view(
    action: &str,
    name: &str,
    errors: &ValidationErrors,
    submit_text: &str,
) -> Markup {
    html! {
        form
            action=(action)
            method="post"
            class="w-full space-y-4 md:space-y-6"
        {
            (text_input("name", "Category Name", name, errors))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_text) }
        }
    }
}
