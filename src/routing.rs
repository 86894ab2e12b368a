//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    category::{
        CategoryStore, create_category_endpoint, delete_category_endpoint, get_categories_page,
        get_category_page, get_delete_category_page, get_new_category_page,
        get_update_category_page, update_category_endpoint,
    },
    endpoints,
    error_pages::get_404_not_found,
    home::get_home_page,
    item::{
        ItemStore, create_item_endpoint, delete_item_endpoint, get_delete_item_page,
        get_item_page, get_items_page, get_new_item_page, get_update_item_page,
        update_item_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every form page is served with GET and submitted to the same path with POST.
pub fn build_router<C, I>(state: AppState<C, I>) -> Router
where
    C: CategoryStore,
    I: ItemStore,
{
    let category_routes = Router::new()
        .route(endpoints::CATEGORIES_VIEW, get(get_categories_page::<C, I>))
        .route(
            endpoints::NEW_CATEGORY_VIEW,
            get(get_new_category_page).post(create_category_endpoint::<C, I>),
        )
        .route(endpoints::CATEGORY_VIEW, get(get_category_page::<C, I>))
        .route(
            endpoints::UPDATE_CATEGORY_VIEW,
            get(get_update_category_page::<C, I>).post(update_category_endpoint::<C, I>),
        )
        .route(
            endpoints::DELETE_CATEGORY_VIEW,
            get(get_delete_category_page::<C, I>).post(delete_category_endpoint::<C, I>),
        );

    let item_routes = Router::new()
        .route(endpoints::ITEMS_VIEW, get(get_items_page::<C, I>))
        .route(
            endpoints::NEW_ITEM_VIEW,
            get(get_new_item_page::<C, I>).post(create_item_endpoint::<C, I>),
        )
        .route(endpoints::ITEM_VIEW, get(get_item_page::<C, I>))
        .route(
            endpoints::UPDATE_ITEM_VIEW,
            get(get_update_item_page::<C, I>).post(update_item_endpoint::<C, I>),
        )
        .route(
            endpoints::DELETE_ITEM_VIEW,
            get(get_delete_item_page::<C, I>).post(delete_item_endpoint::<C, I>),
        );

    Router::new()
        .route(endpoints::ROOT, get(get_home_page::<C, I>))
        .merge(category_routes)
        .merge(item_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
