#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod state;

pub(crate) use form::{
    assert_field_error, assert_form_action, assert_form_input, assert_form_input_with_value,
    assert_form_submit_button_with_text, assert_hidden_input_with_value,
    assert_textarea_with_value, get_field_errors, get_select_options, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, select_text};
pub(crate) use http::{assert_content_type, assert_redirect, assert_status_ok, get_header};
pub(crate) use state::{
    TestState, create_test_category, create_test_item, get_failing_state, get_test_state,
};
