//! The form shared by the item create and update pages.

use maud::{Markup, html};

use crate::{
    category::Category,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, field_errors, text_input,
    },
    item::ItemFormData,
    validation::ValidationErrors,
};

/// Render the item form posting to `action`.
///
/// Every category in `categories` is offered in the category selector, with
/// the form's current category selected.
pub(super) fn item_form_view(
    action: &str,
    form_data: &ItemFormData,
    categories: &[Category],
    errors: &ValidationErrors,
    submit_text: &str,
) -> Markup {
    let selected_category = form_data.selected_category();

    html! {
        form
            action=(action)
            method="post"
            class="w-full space-y-4 md:space-y-6"
        {
            (text_input("name", "Item Name", &form_data.name, errors))

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                textarea
                    id="description"
                    name="description"
                    rows="4"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (form_data.description)
                }

                (field_errors(errors, "description"))
            }

            (text_input("price", "Price", &form_data.price, errors))

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    id="category"
                    name="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[selected_category.is_none()] { "Select a category" }

                    @for category in categories {
                        option
                            value=(category.id)
                            selected[selected_category == Some(category.id)]
                        {
                            (category.name)
                        }
                    }
                }

                (field_errors(errors, "category"))
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_text) }
        }
    }
}
