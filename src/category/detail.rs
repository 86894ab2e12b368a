//! Category detail page.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::{Category, CategoryId, CategoryStore},
    endpoints,
    html::{
        DELETE_LINK_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_currency, link,
    },
    item::{Item, ItemStore},
    navigation::NavBar,
};

/// Render a category and the items filed under it.
pub async fn get_category_page<C, I>(
    Path(category_id): Path<CategoryId>,
    State(state): State<AppState<C, I>>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let category = state.category_store.get(category_id)?;

    let items = state
        .item_store
        .get_by_category(category_id)
        .inspect_err(|error| {
            tracing::error!("Could not get items for category {category_id}: {error}")
        })?;

    Ok(category_view(&category, &items).into_response())
}

fn category_view(category: &Category, items: &[Item]) -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();
    let update_url = endpoints::format_endpoint(endpoints::UPDATE_CATEGORY_VIEW, category.id);
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_CATEGORY_VIEW, category.id);

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { (category.name) }

                    div class="flex gap-4"
                    {
                        a href=(update_url) class=(LINK_STYLE) { "Update" }
                        a href=(delete_url) class=(DELETE_LINK_STYLE) { "Delete" }
                    }
                }

                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Item" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                        }
                    }

                    tbody
                    {
                        @for item in items {
                            tr class=(TABLE_ROW_STYLE) data-item-row
                            {
                                td class=(TABLE_CELL_STYLE)
                                {
                                    (link(&endpoints::format_endpoint(endpoints::ITEM_VIEW, item.id), item.name.as_ref()))
                                }
                                td class=(TABLE_CELL_STYLE) { (format_currency(item.price)) }
                            }
                        }

                        @if items.is_empty() {
                            tr
                            {
                                td colspan="2" class="px-6 py-4 text-center"
                                {
                                    "No items in this category. "
                                    (link(endpoints::NEW_ITEM_VIEW, "Add an item"))
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base(category.name.as_ref(), &content)
}
