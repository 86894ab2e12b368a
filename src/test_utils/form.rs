use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_form_action(form: &ElementRef<'_>, endpoint: &str) {
    let action = form.value().attr("action").expect("action attribute missing");
    let method = form.value().attr("method").expect("method attribute missing");

    assert_eq!(
        action, endpoint,
        "want form with action=\"{endpoint}\", got {action:?}"
    );
    assert_eq!(method, "post", "want form with method=\"post\", got {method:?}");
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = must_get_input(form, name);
    let input_type = input.value().attr("type").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    assert_form_input(form, name, type_);

    let input = must_get_input(form, name);
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_value, value,
        "want input with value \"{value}\", got {input_value:?}"
    );
}

#[track_caller]
pub(crate) fn assert_hidden_input_with_value(form: &ElementRef<'_>, name: &str, value: &str) {
    let input = must_get_input(form, name);

    assert_eq!(input.value().attr("type"), Some("hidden"));
    assert_eq!(input.value().attr("value"), Some(value));
}

#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str) -> ElementRef<'a> {
    form.select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""))
}

#[track_caller]
pub(crate) fn assert_textarea_with_value(form: &ElementRef<'_>, name: &str, value: &str) {
    let textarea = form
        .select(&Selector::parse("textarea").unwrap())
        .find(|textarea| textarea.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No textarea found with name \"{name}\""));

    assert_eq!(textarea.text().collect::<String>(), value);
}

/// An `<option>` of a `<select>` element as (value, text, is selected).
pub(crate) type SelectOption = (String, String, bool);

#[track_caller]
pub(crate) fn get_select_options(form: &ElementRef<'_>, name: &str) -> Vec<SelectOption> {
    let select = form
        .select(&Selector::parse("select").unwrap())
        .find(|select| select.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No select found with name \"{name}\""));

    select
        .select(&Selector::parse("option").unwrap())
        .map(|option| {
            (
                option.value().attr("value").unwrap_or_default().to_owned(),
                option.text().collect::<String>().trim().to_owned(),
                option.value().attr("selected").is_some(),
            )
        })
        .collect()
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}

/// The error messages rendered for `field`.
pub(crate) fn get_field_errors(html: &Html, field: &str) -> Vec<String> {
    let selector = Selector::parse(&format!("p[data-field-error='{field}']")).unwrap();

    html.select(&selector)
        .map(|p| p.text().collect::<String>().trim().to_owned())
        .collect()
}

#[track_caller]
pub(crate) fn assert_field_error(html: &Html, field: &str, want_error_message: &str) {
    let got = get_field_errors(html, field);

    assert_eq!(
        got,
        vec![want_error_message.to_owned()],
        "unexpected error messages for field {field}"
    );
}
