//! Integration tests for form submission handling
//!
//! Exercises the whole path: build a form, supply request data, check the
//! submission decision, and reconcile values back onto the widgets.

use markup_form::{
    CheckboxFormat, Form, FormError, FormField, Input, Method, RequestData, Submission,
    SubmittedValue, UploadedFile,
};

#[test]
fn city_and_submit_scenario() {
    let mut form = Form::new("/search").with_method(Method::Get);
    let _ = form.add_field(Input::text("City", ""));
    let _ = form.add_field(Input::submit("go", "Search"));

    let request = RequestData::new()
        .with_get_param("City", "Boston")
        .with_get_param("go", "1");

    assert_eq!(form.submitted(&request), Submission::Submitted("1".to_string()));

    let values = form
        .submitted_values(&request, CheckboxFormat::Presence)
        .unwrap();
    assert_eq!(
        values.get("City"),
        Some(&SubmittedValue::Text("Boston".to_string()))
    );
    // Submit widgets are excluded from the output.
    assert!(!values.contains("go"));
    assert_eq!(values.len(), 1);
}

#[test]
fn no_submit_control_is_a_negative_signal_not_a_panic() {
    let mut form = Form::new("/search");
    let _ = form.add_field(Input::text("City", ""));

    let request = RequestData::new().with_post_param("City", "Boston");

    assert_eq!(form.submitted(&request), Submission::NoSubmitControl);
    assert_eq!(
        form.submitted_values(&request, CheckboxFormat::Presence),
        Err(FormError::NoSubmitControl)
    );
    assert_eq!(
        form.load_submitted_values(&request),
        Err(FormError::NoSubmitControl)
    );
}

#[test]
fn unsubmitted_form_reports_not_submitted() {
    let mut form = Form::new("/search");
    let _ = form.add_field(Input::submit("go", "Go"));

    let request = RequestData::new();
    assert_eq!(form.submitted(&request), Submission::NotSubmitted);
    assert_eq!(
        form.submitted_values(&request, CheckboxFormat::Presence),
        Err(FormError::NotSubmitted)
    );
}

#[test]
fn submission_result_is_cached_until_invalidated() {
    let mut form = Form::new("/search");
    let _ = form.add_field(Input::submit("go", "Go"));

    let request = RequestData::new().with_post_param("go", "1");
    assert!(form.submitted(&request).is_submitted());

    // Cached: an empty request no longer flips the answer.
    let empty = RequestData::new();
    assert!(form.submitted(&empty).is_submitted());

    form.invalidate_submission();
    assert_eq!(form.submitted(&empty), Submission::NotSubmitted);
}

#[test]
fn first_matching_submit_wins() {
    let mut form = Form::new("/search");
    let _ = form.add_field(Input::submit("preview", "Preview"));
    let _ = form.add_field(Input::submit("save", "Save"));

    let request = RequestData::new()
        .with_post_param("preview", "Preview")
        .with_post_param("save", "Save");
    assert_eq!(
        form.submitted(&request),
        Submission::Submitted("Preview".to_string())
    );
}

#[test]
fn radio_group_yields_exactly_one_entry() {
    let mut form = Form::new("/apply");
    for program in ["MPA", "MSW", "CDS", "IEP"] {
        let _ = form.add_field(Input::radio("program", program, false, program));
    }
    let _ = form.add_field(Input::submit("go", "Apply"));

    let request = RequestData::new()
        .with_post_param("program", "MSW")
        .with_post_param("go", "1");
    let values = form
        .submitted_values(&request, CheckboxFormat::Presence)
        .unwrap();
    assert_eq!(
        values.get("program"),
        Some(&SubmittedValue::Text("MSW".to_string()))
    );
    assert_eq!(values.len(), 1);
}

#[test]
fn radio_group_with_no_matching_member_is_absent() {
    let mut form = Form::new("/apply");
    let _ = form.add_field(Input::radio("program", "MPA", false, "MPA"));
    let _ = form.add_field(Input::submit("go", "Apply"));

    let request = RequestData::new()
        .with_post_param("program", "forged")
        .with_post_param("go", "1");
    let values = form
        .submitted_values(&request, CheckboxFormat::Presence)
        .unwrap();
    assert_eq!(values.get("program"), Some(&SubmittedValue::Absent));
}

#[test]
fn checkbox_presence_vs_raw_value() {
    let mut form = Form::new("/prefs");
    let _ = form.add_field(Input::checkbox("Online Only", "yes", false));
    let _ = form.add_field(Input::submit("go", "Save"));

    // Checked: browser submits the value under the underscored name.
    let request = RequestData::new()
        .with_post_param("Online_Only", "yes")
        .with_post_param("go", "1");
    let values = form
        .submitted_values(&request, CheckboxFormat::Presence)
        .unwrap();
    assert_eq!(
        values.get("Online Only"),
        Some(&SubmittedValue::Checked(true))
    );
    let raw = form
        .submitted_values(&request, CheckboxFormat::RawValue)
        .unwrap();
    assert_eq!(
        raw.get("Online Only"),
        Some(&SubmittedValue::Text("yes".to_string()))
    );

    // Unchecked: present as a false boolean, omitted entirely in raw mode.
    form.invalidate_submission();
    let unchecked = RequestData::new().with_post_param("go", "1");
    let values = form
        .submitted_values(&unchecked, CheckboxFormat::Presence)
        .unwrap();
    assert_eq!(
        values.get("Online Only"),
        Some(&SubmittedValue::Checked(false))
    );
    let raw = form
        .submitted_values(&unchecked, CheckboxFormat::RawValue)
        .unwrap();
    assert!(!raw.contains("Online Only"));
}

#[test]
fn file_field_yields_descriptor_or_absent() {
    let mut form = Form::new("/upload");
    let _ = form.add_field(Input::file("Your file"));
    let _ = form.add_field(Input::submit("go", "Upload"));

    let with_file = RequestData::new()
        .with_post_param("go", "1")
        .with_file(
            "Your_file",
            UploadedFile::new("report.pdf", "/tmp/upl42")
                .with_mime_type("application/pdf")
                .with_size(2048),
        );
    let values = form
        .submitted_values(&with_file, CheckboxFormat::Presence)
        .unwrap();
    match values.get("Your file") {
        Some(SubmittedValue::File(file)) => {
            assert_eq!(file.file_name, "report.pdf");
            assert_eq!(file.size, 2048);
        }
        other => panic!("expected file descriptor, got {other:?}"),
    }

    form.invalidate_submission();
    let without_file = RequestData::new().with_post_param("go", "1");
    let values = form
        .submitted_values(&without_file, CheckboxFormat::Presence)
        .unwrap();
    assert_eq!(values.get("Your file"), Some(&SubmittedValue::Absent));
}

#[test]
fn load_submitted_values_mutates_widgets_in_place() {
    let mut form = Form::new("/apply").with_method(Method::Get);
    let _ = form.add_field(Input::text("City", ""));
    let _ = form.add_field(Input::checkbox("Online Only", "yes", false));
    let _ = form.add_field(Input::radio("program", "MPA", false, "MPA"));
    let _ = form.add_field(Input::radio("program", "MSW", false, "MSW"));
    let _ = form.add_field(Input::select("Color", ["", "Red", "Green", "Blue"]));
    let _ = form.add_field(Input::submit("go", "Apply"));

    let request = RequestData::new()
        .with_get_param("City", "Boston")
        .with_get_param("Online_Only", "yes")
        .with_get_param("program", "MSW")
        .with_get_param("Color", "Green")
        .with_get_param("go", "1");

    form.load_submitted_values(&request).unwrap();

    let city = form.field("City").and_then(FormField::as_single).unwrap();
    assert_eq!(city.value(), "Boston");

    let checkbox = form
        .field("Online Only")
        .and_then(FormField::as_single)
        .unwrap();
    assert_eq!(checkbox.is_checked(), Some(true));

    let group = form.field("program").and_then(FormField::as_group).unwrap();
    let states: Vec<_> = group.iter().map(|r| r.is_checked().unwrap()).collect();
    assert_eq!(states, [false, true]);

    let select = form.field("Color").and_then(FormField::as_single).unwrap();
    assert_eq!(select.selected(), ["Green".to_string()]);

    // Submit widgets keep their own value.
    let go = form.field("go").and_then(FormField::as_single).unwrap();
    assert_eq!(go.value(), "Apply");
}

#[test]
fn field_names_with_spaces_are_normalized_for_lookup() {
    let mut form = Form::new("/go");
    let _ = form.add_field(Input::text("Your text here", ""));
    let _ = form.add_field(Input::submit("go", "Go"));

    let request = RequestData::new()
        .with_post_param("Your_text_here", "hello")
        .with_post_param("go", "1");
    let values = form
        .submitted_values(&request, CheckboxFormat::Presence)
        .unwrap();
    assert_eq!(
        values.get("Your text here"),
        Some(&SubmittedValue::Text("hello".to_string()))
    );
}

#[test]
fn submitted_values_preserve_field_order() {
    let mut form = Form::new("/go");
    let _ = form.add_field(Input::text("B", ""));
    let _ = form.add_field(Input::text("A", ""));
    let _ = form.add_field(Input::submit("go", "Go"));

    let request = RequestData::new()
        .with_post_param("B", "2")
        .with_post_param("A", "1")
        .with_post_param("go", "1");
    let values = form
        .submitted_values(&request, CheckboxFormat::Presence)
        .unwrap();
    let keys: Vec<_> = values.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["B", "A"]);
}

#[test]
fn full_demo_form_renders_every_widget() {
    let mut form = Form::new("/demo");
    let _ = form.add_field(Input::checkbox("Online Only", "Online Only", false));
    let _ = form.add_field(Input::file("Your file"));
    let _ = form.add_field(Input::hidden("token", "abc123"));
    let _ = form.add_field(Input::radio("program", "MPA", false, "MPA"));
    let _ = form.add_field(Input::radio("program", "MSW", false, "MSW"));
    let _ = form.add_field(Input::text("Your text here", ""));
    let _ = form.add_field(Input::textarea("Comments", ""));
    let _ = form.add_field(Input::select("Pick a color", ["", "Red", "Green", "Blue"]));
    let _ = form.add_field(Input::reset("clear", "Reset"));
    let _ = form.add_field(Input::submit("submit", "Submit"));

    let markup = form.render();
    for fragment in [
        "type=\"checkbox\"",
        "type=\"file\"",
        "type=\"hidden\"",
        "type=\"radio\"",
        "type=\"text\"",
        "<textarea",
        "<select",
        "type=\"reset\"",
        "type=\"submit\"",
        "enctype=\"multipart/form-data\"",
    ] {
        assert!(markup.contains(fragment), "missing {fragment} in {markup}");
    }
    // Both radios render, one per group member.
    assert_eq!(markup.matches("type=\"radio\"").count(), 2);
}
