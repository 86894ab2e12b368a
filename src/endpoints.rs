//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/category/{category_id}', use [format_endpoint].

/// The catalog home page.
pub const ROOT: &str = "/";
/// The page for listing all categories.
pub const CATEGORIES_VIEW: &str = "/categories";
/// The canonical location of a single category.
pub const CATEGORY_VIEW: &str = "/category/{category_id}";
/// The page and form target for creating a category.
pub const NEW_CATEGORY_VIEW: &str = "/category/create";
/// The page and form target for updating a category.
pub const UPDATE_CATEGORY_VIEW: &str = "/category/{category_id}/update";
/// The confirmation page and form target for deleting a category.
pub const DELETE_CATEGORY_VIEW: &str = "/category/{category_id}/delete";
/// The page for listing all items.
pub const ITEMS_VIEW: &str = "/items";
/// The canonical location of a single item.
pub const ITEM_VIEW: &str = "/item/{item_id}";
/// The page and form target for creating an item.
pub const NEW_ITEM_VIEW: &str = "/item/create";
/// The page and form target for updating an item.
pub const UPDATE_ITEM_VIEW: &str = "/item/{item_id}/update";
/// The confirmation page and form target for deleting an item.
pub const DELETE_ITEM_VIEW: &str = "/item/{item_id}/delete";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/item/{item_id}', '{item_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
