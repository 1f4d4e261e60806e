mod common;

use common::{TestResult, compile_error_message, compile_to_value, compile_with_options, default_style, in_content};
use serde_json::json;
use treedoc::builders::*;
use treedoc::{CompileOptions, Element, Props, Scope, create};

#[test]
fn test_simple_content() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = document().child(content().child("hello"));
    assert_eq!(
        compile_to_value(tree)?,
        json!({
            "content": { "stack": ["hello"] },
            "defaultStyle": default_style()
        })
    );
    Ok(())
}

#[test]
fn test_text_nodes_in_content() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![text("first").into(), text("second").into()]);
    assert_eq!(
        compile_to_value(tree)?,
        json!({
            "content": { "stack": [{ "text": "first" }, { "text": "second" }] },
            "defaultStyle": default_style()
        })
    );
    Ok(())
}

#[test]
fn test_numbers_in_content() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![Element::number(123)]);
    assert_eq!(compile_to_value(tree)?["content"], json!({ "stack": [123] }));
    Ok(())
}

#[test]
fn test_adjacent_numbers_concatenate() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![text(123).child(456).into()]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({ "stack": [{ "text": "123456" }] })
    );
    Ok(())
}

#[test]
fn test_mixed_text_and_numbers_concatenate() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![text("Total: ").child(12.5).child(" EUR").into()]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({ "stack": [{ "text": "Total: 12.5 EUR" }] })
    );
    Ok(())
}

#[test]
fn test_composite_component() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let greeting = Element::component(|_: &Props, _: &mut Scope<'_>| text("hello").into());
    let tree = in_content(vec![greeting.into()]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({ "stack": [{ "text": "hello" }] })
    );
    Ok(())
}

#[test]
fn test_nested_composite_components() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let child = Element::component(|_: &Props, _: &mut Scope<'_>| text("hello").into());
    let parent = Element::component(move |_: &Props, _: &mut Scope<'_>| {
        group().child(child.clone()).into()
    });
    let tree = in_content(vec![parent.into()]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({ "stack": [{ "stack": [{ "text": "hello" }] }] })
    );
    Ok(())
}

#[test]
fn test_prebuilt_element_value() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let fragment: Element = text("test").into();
    let tree = in_content(vec![fragment]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({ "stack": [{ "text": "test" }] })
    );
    Ok(())
}

#[test]
fn test_higher_order_component_receives_children() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let wrapper = Element::component(|props: &Props, _: &mut Scope<'_>| {
        text(props.children_fragment()).into()
    });
    let tree = in_content(vec![wrapper.child("hello").into()]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({ "stack": [{ "text": "hello" }] })
    );
    Ok(())
}

#[test]
fn test_component_via_create() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let badge = treedoc::ElementType::component(|props: &Props, _: &mut Scope<'_>| {
        let label = props.attr_str("label").unwrap_or("?").to_string();
        text(label).attr("bold", true).into()
    });
    let mut attributes = treedoc::Attributes::new();
    attributes.insert("label".into(), json!("NEW"));
    let tree = in_content(vec![create(badge, attributes, Vec::<Element>::new())]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({ "stack": [{ "text": "NEW", "bold": true }] })
    );
    Ok(())
}

#[test]
fn test_page_margin_only() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = document().attr("margin", 10);
    assert_eq!(
        compile_to_value(tree)?,
        json!({ "pageMargins": 10, "defaultStyle": default_style() })
    );
    Ok(())
}

#[test]
fn test_document_metadata_and_sections() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = document()
        .attr("size", "A5")
        .attr("margin", json!([40, 60, 40, 60]))
        .attr("title", "Invoice 42")
        .attr("author", "Billing")
        .child(header().child("Page header"))
        .child(content().child(text("Body")))
        .child(footer().child("Page footer"));
    assert_eq!(
        compile_to_value(tree)?,
        json!({
            "header": { "stack": ["Page header"] },
            "content": { "stack": [{ "text": "Body" }] },
            "footer": { "stack": ["Page footer"] },
            "pageSize": "A5",
            "pageMargins": [40, 60, 40, 60],
            "info": { "title": "Invoice 42", "author": "Billing" },
            "defaultStyle": default_style()
        })
    );
    Ok(())
}

#[test]
fn test_list_attributes_pass_through() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![ul()
        .attr("type", "square")
        .attr("start", 50)
        .child(text("a"))
        .child(text("b"))
        .into()]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({
            "stack": [{ "ul": [{ "text": "a" }, { "text": "b" }], "type": "square", "start": 50 }]
        })
    );
    Ok(())
}

#[test]
fn test_table_rows_and_cells() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![table()
        .attr("headerRows", 1)
        .attr("widths", json!(["*", "auto"]))
        .attr("layout", "lightHorizontalLines")
        .child(row().child(cell().child("Item")).child(cell().child("Qty")))
        .child(row().child(cell().child("Apples")).child(cell().child(3)))
        .into()]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({
            "stack": [{
                "table": {
                    "body": [
                        [{ "stack": ["Item"] }, { "stack": ["Qty"] }],
                        [{ "stack": ["Apples"] }, { "stack": [3] }]
                    ],
                    "headerRows": 1,
                    "widths": ["*", "auto"]
                },
                "layout": "lightHorizontalLines"
            }]
        })
    );
    Ok(())
}

#[test]
fn test_columns_and_images() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![columns()
        .attr("columnGap", 10)
        .child(column().attr("width", 100).child(image("logo.png").attr("fit", json!([80, 80]))))
        .child(column().child(text("Acme Ltd.")))
        .into()]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({
            "stack": [{
                "columns": [
                    { "stack": [{ "image": "logo.png", "fit": [80, 80] }], "width": 100 },
                    { "stack": [{ "text": "Acme Ltd." }] }
                ],
                "columnGap": 10
            }]
        })
    );
    Ok(())
}

#[test]
fn test_blank_values_are_dropped() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let nothing = Element::component(|_: &Props, _: &mut Scope<'_>| Element::Empty);
    let tree = in_content(vec![
        nothing.into(),
        Element::text(""),
        Element::number(0),
        Element::from(true),
        Element::from(Some(text("kept"))),
        Element::from(None::<Element>),
    ]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({ "stack": [{ "text": "kept" }] })
    );
    Ok(())
}

#[test]
fn test_keep_zero_option() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let options = CompileOptions {
        drop_zero: false,
        default_style: None,
        ..Default::default()
    };
    let tree = in_content(vec![text(0).into()]);
    assert_eq!(
        compile_with_options(tree, options)?,
        json!({ "content": { "stack": [{ "text": 0 }] } })
    );
    Ok(())
}

#[test]
fn test_top_level_element_below_top_level_errors() {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![group().child(header()).into()]);
    assert!(compile_error_message(tree).contains("immediate descendents"));
}

#[test]
fn test_document_must_be_root() {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = group().child(text("foobar"));
    assert!(compile_error_message(tree).contains("root"));
}

#[test]
fn test_nested_document_errors() {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![document().into()]);
    assert!(compile_error_message(tree).contains("root"));
}

#[test]
fn test_section_from_component_is_top_level() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let nested = Element::component(|_: &Props, _: &mut Scope<'_>| content().into());
    let tree = document().child(nested);
    assert_eq!(compile_to_value(tree)?["content"], json!({ "stack": [] }));
    Ok(())
}

#[test]
fn test_non_section_at_top_level_errors() {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = document().child(text("stray"));
    let message = compile_error_message(tree);
    assert!(message.contains("<text>"), "unexpected message: {message}");
}

#[test]
fn test_unknown_tag_dropped_or_rejected() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![Element::tag("marquee").child("hi").into(), text("ok").into()]);
    assert_eq!(
        compile_to_value(tree.clone())?["content"],
        json!({ "stack": [{ "text": "ok" }] })
    );

    let strict = CompileOptions {
        strict_tags: true,
        ..Default::default()
    };
    let err = compile_with_options(tree, strict).unwrap_err();
    assert!(err.to_string().contains("marquee"));
    Ok(())
}

#[test]
fn test_section_from_component_below_top_level_errors() {
    let _ = env_logger::builder().is_test(true).try_init();

    let nested = Element::component(|_: &Props, _: &mut Scope<'_>| content().into());
    let tree = in_content(vec![stack().child(nested).into()]);
    assert!(compile_error_message(tree).contains("<content> can only appear"));
}

#[test]
fn test_extreme_floats_concatenate_in_exponent_form() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = in_content(vec![text(1e-7).child(1e21).into()]);
    assert_eq!(
        compile_to_value(tree)?["content"],
        json!({ "stack": [{ "text": "1e-71e+21" }] })
    );
    Ok(())
}

#[test]
fn test_unset_document_attributes_are_omitted() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = document()
        .attr("margin", serde_json::Value::Null)
        .attr("size", false)
        .attr("title", serde_json::Value::Null)
        .attr("author", "Billing");
    assert_eq!(
        compile_to_value(tree)?,
        json!({ "info": { "author": "Billing" }, "defaultStyle": default_style() })
    );
    Ok(())
}
