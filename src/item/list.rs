//! Items listing page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::CategoryStore,
    endpoints,
    html::{
        DELETE_LINK_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_currency, link,
    },
    item::{ItemStore, ItemWithCategory, detail::category_badge, resolve_categories},
    navigation::NavBar,
};

/// Render every item along with its category.
pub async fn get_items_page<C, I>(State(state): State<AppState<C, I>>) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let items = state
        .item_store
        .get_all()
        .inspect_err(|error| tracing::error!("Failed to retrieve items: {error}"))?;

    let categories = state
        .category_store
        .get_all()
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    Ok(items_view(&resolve_categories(items, categories)).into_response())
}

fn items_view(items: &[ItemWithCategory]) -> Markup {
    let new_item_route = endpoints::NEW_ITEM_VIEW;
    let nav_bar = NavBar::new(endpoints::ITEMS_VIEW).into_html();

    let table_row = |item_with_category: &ItemWithCategory| {
        let item = &item_with_category.item;
        let view_url = endpoints::format_endpoint(endpoints::ITEM_VIEW, item.id);
        let update_url = endpoints::format_endpoint(endpoints::UPDATE_ITEM_VIEW, item.id);
        let delete_url = endpoints::format_endpoint(endpoints::DELETE_ITEM_VIEW, item.id);

        html!(
            tr class=(TABLE_ROW_STYLE) data-item-row
            {
                td class=(TABLE_CELL_STYLE) { (link(&view_url, item.name.as_ref())) }
                td class=(TABLE_CELL_STYLE) { (category_badge(item_with_category.category.as_ref())) }
                td class=(TABLE_CELL_STYLE) { (format_currency(item.price)) }
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
                    h1 class="text-xl font-bold" { "Items" }

                    a href=(new_item_route) class=(LINK_STYLE) { "Create Item" }
                }

                table class="w-full text-sm text-left rtl:text-right
                    text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for item in items {
                            (table_row(item))
                        }

                        @if items.is_empty() {
                            tr
                            {
                                td
                                    colspan="4"
                                    class="px-6 py-4 text-center
                                        text-gray-500 dark:text-gray-400"
                                {
                                    "No items created yet. "
                                    a href=(new_item_route) class=(LINK_STYLE)
                                    {
                                        "Create your first item"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Items", &content)
}
