//! Item detail page.

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
        CATEGORY_BADGE_STYLE, DELETE_LINK_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base,
        format_currency,
    },
    item::{ItemId, ItemStore, ItemWithCategory},
    navigation::NavBar,
};

/// Render an item with its category.
pub async fn get_item_page<C, I>(
    Path(item_id): Path<ItemId>,
    State(state): State<AppState<C, I>>,
) -> Result<Response, Error>
where
    C: CategoryStore,
    I: ItemStore,
{
    let item = state.item_store.get(item_id)?;
    let category = find_category(&state.category_store, item.category_id)?;

    Ok(item_view(&ItemWithCategory { item, category }).into_response())
}

/// Get the category with `category_id`, or `None` if it has been deleted.
pub(super) fn find_category<C>(
    category_store: &C,
    category_id: CategoryId,
) -> Result<Option<Category>, Error>
where
    C: CategoryStore,
{
    match category_store.get(category_id) {
        Ok(category) => Ok(Some(category)),
        Err(Error::NotFound) => Ok(None),
        Err(error) => {
            tracing::error!("Could not get category {category_id}: {error}");
            Err(error)
        }
    }
}

/// The category badge for an item, or a placeholder if the category is gone.
pub(super) fn category_badge(category: Option<&Category>) -> Markup {
    match category {
        Some(category) => html! {
            a
                href=(endpoints::format_endpoint(endpoints::CATEGORY_VIEW, category.id))
                class=(CATEGORY_BADGE_STYLE)
                data-category
            {
                (category.name)
            }
        },
        None => html! {
            span class="text-gray-500 dark:text-gray-400 italic" data-category
            {
                "Unknown category"
            }
        },
    }
}

fn item_view(item_with_category: &ItemWithCategory) -> Markup {
    let item = &item_with_category.item;
    let nav_bar = NavBar::new(endpoints::ITEMS_VIEW).into_html();
    let update_url = endpoints::format_endpoint(endpoints::UPDATE_ITEM_VIEW, item.id);
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_ITEM_VIEW, item.id);

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            article class="space-y-4 w-full lg:max-w-3xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { (item.name) }

                    div class="flex gap-4"
                    {
                        a href=(update_url) class=(LINK_STYLE) { "Update" }
                        a href=(delete_url) class=(DELETE_LINK_STYLE) { "Delete" }
                    }
                }

                dl class="space-y-2"
                {
                    dt class="font-semibold" { "Category" }
                    dd { (category_badge(item_with_category.category.as_ref())) }

                    dt class="font-semibold" { "Price" }
                    dd data-price { (format_currency(item.price)) }

                    dt class="font-semibold" { "Description" }
                    dd data-description class="whitespace-pre-line" { (item.description) }
                }
            }
        }
    );

    base(item.name.as_ref(), &content)
}
