use insta::assert_snapshot;
use rstest::rstest;

use jui::{Catalog, Parameters, Passthrough, RouteTable, Ui, WidgetOptions};

fn ui() -> Ui {
    Ui::new(RouteTable::new(""), Passthrough)
}

#[test]
fn test_button_with_primary_icon() {
    let ui = ui();
    assert_eq!(
        ui.button("Save", &WidgetOptions::new().primary_icon("disk")),
        r#"<button class="ui-button ui-widget ui-state-default ui-corner-all  ui-button-text-icon-primary" ><span class="ui-button-icon-primary ui-icon ui-icon-disk"></span><span class="ui-button-text">Save</span></button>"#
    );
}

#[test]
fn test_button_text_only() {
    assert_snapshot!(ui().button("Hello", &WidgetOptions::new()), @r#"<button class="ui-button ui-widget ui-state-default ui-corner-all  ui-button-text-only" ><span class="ui-button-text">Hello</span></button>"#);
}

#[test]
fn test_button_both_icons() {
    let options = WidgetOptions::new()
        .primary_icon("wrench")
        .secondary_icon("triangle-1-s");
    assert_snapshot!(ui().button("Configuration", &options), @r#"<button class="ui-button ui-widget ui-state-default ui-corner-all  ui-button-text-icons" ><span class="ui-button-icon-primary ui-icon ui-icon-wrench"></span><span class="ui-button-text">Configuration</span><span class="ui-button-icon-secondary ui-icon ui-icon-triangle-1-s"></span></button>"#);
}

#[test]
fn test_button_icons_only() {
    let options = WidgetOptions::new()
        .primary_icon("wrench")
        .secondary_icon("triangle-1-s")
        .icon_only(true);
    let button = ui().button("Configuration", &options);
    assert!(button.contains(" ui-button-icons-only\""));
    assert!(!button.contains("ui-button-text-icons"));
}

#[test]
fn test_button_tag_classes_and_attributes() {
    let options = WidgetOptions::new()
        .tag("a")
        .class("big")
        .class("wide")
        .attribute("href", "/go")
        .attribute("id", "go");
    assert_snapshot!(ui().button("Go", &options), @r#"<a class="ui-button ui-widget ui-state-default ui-corner-all big wide ui-button-text-only" href="/go" id="go"><span class="ui-button-text">Go</span></a>"#);
}

#[test]
fn test_button_default_tag_from_parameters() {
    let ui = Ui::builder()
        .routes(RouteTable::new(""))
        .texts(Passthrough)
        .parameters(Parameters {
            default_tag: "span".to_string(),
            ..Default::default()
        })
        .build()
        .unwrap();
    let button = ui.button("Hi", &WidgetOptions::new());
    assert!(button.starts_with("<span class="));
    assert!(button.ends_with("</span></span>"));
}

#[test]
fn test_button_text_is_translated() {
    let mut catalog = Catalog::new();
    catalog
        .add("Save", "Enregistrer")
        .add_to_domain("AdminBundle", "btn_batch", "Appliquer");
    let ui = Ui::new(RouteTable::new(""), catalog);
    assert!(ui
        .button("Save", &WidgetOptions::new())
        .contains(r#"<span class="ui-button-text">Enregistrer</span>"#));
    assert!(ui
        .button(("AdminBundle", "btn_batch"), &WidgetOptions::new())
        .contains(r#"<span class="ui-button-text">Appliquer</span>"#));
}

#[rstest]
#[case(WidgetOptions::new())]
#[case(WidgetOptions::new().attribute("type", "button"))]
#[case(WidgetOptions::new().attribute("name", "go").attribute("type", "reset"))]
fn test_submit_forces_type(#[case] options: WidgetOptions) {
    let submit = ui().submit("Send", &options);
    assert!(submit.contains(r#"type="submit""#));
    assert!(!submit.contains(r#"type="button""#));
    assert!(!submit.contains(r#"type="reset""#));
}

#[test]
fn test_submit_keeps_attribute_position() {
    let options = WidgetOptions::new()
        .attribute("type", "button")
        .attribute("name", "go");
    assert_snapshot!(ui().submit("Send", &options), @r#"<button class="ui-button ui-widget ui-state-default ui-corner-all  ui-button-text-only" type="submit" name="go"><span class="ui-button-text">Send</span></button>"#);
}

#[test]
fn test_submit_does_not_change_options() {
    let options = WidgetOptions::new().attribute("type", "button");
    ui().submit("Send", &options);
    assert_eq!(options.attributes.get("type"), Some("button"));
}

#[test]
fn test_icon() {
    assert_eq!(ui().icon("tag"), r#"<span class="ui-icon ui-icon-tag"></span>"#);
    assert_eq!(
        ui().icon("silk-world"),
        r#"<span class="ui-silk ui-icon-silk-world"></span>"#
    );
}

#[test]
fn test_button_is_idempotent() {
    let ui = ui();
    let options = WidgetOptions::new()
        .primary_icon("disk")
        .class("x")
        .attribute("id", "y");
    assert_eq!(ui.button("Save", &options), ui.button("Save", &options));
}
