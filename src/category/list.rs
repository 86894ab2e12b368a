//! Categories listing page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::{Category, CategoryStore},
    endpoints,
    html::{
        CATEGORY_BADGE_STYLE, DELETE_LINK_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    item::ItemStore,
    navigation::NavBar,
};

/// Render the categories listing page, ordered by name.
pub async fn get_categories_page<C, I>(
    State(state): State<AppState<C, I>>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let categories = state
        .category_store
        .get_all()
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    Ok(categories_view(&categories).into_response())
}

fn categories_view(categories: &[Category]) -> Markup {
    let new_category_route = endpoints::NEW_CATEGORY_VIEW;
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();

    let table_row = |category: &Category| {
        let view_url = endpoints::format_endpoint(endpoints::CATEGORY_VIEW, category.id);
        let update_url = endpoints::format_endpoint(endpoints::UPDATE_CATEGORY_VIEW, category.id);
        let delete_url = endpoints::format_endpoint(endpoints::DELETE_CATEGORY_VIEW, category.id);

        html!(
            tr class=(TABLE_ROW_STYLE) data-category-row
            {
                td class=(TABLE_CELL_STYLE)
                {
                    a href=(view_url) class=(CATEGORY_BADGE_STYLE)
                    {
                        (category.name)
                    }
                }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        a href=(update_url) class=(LINK_STYLE) { "Update" }
                        a href=(delete_url) class=(DELETE_LINK_STYLE) { "Delete" }
                    }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Categories" }

                    a href=(new_category_route) class=(LINK_STYLE)
                    {
                        "Create Category"
                    }
                }

                table class="w-full text-sm text-left rtl:text-right
                    text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for category in categories {
                            (table_row(category))
                        }

                        @if categories.is_empty() {
                            tr
                            {
                                td
                                    colspan="2"
                                    class="px-6 py-4 text-center
                                        text-gray-500 dark:text-gray-400"
                                {
                                    "No categories created yet. "
                                    a href=(new_category_route) class=(LINK_STYLE)
                                    {
                                        "Create your first category"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Categories", &content)
}
