//! Integration tests for stylesheet indexing and rule lookup.

use wren_css::{ElementContext, StyleIndex};
use wren_dom::ElementData;

fn resolve<'a>(index: &'a StyleIndex, element: &ElementData) -> Option<&'a str> {
    let html = ElementData::new("html");
    let body = ElementData::new("body");
    let context = ElementContext::new(vec![&html, &body, element]);
    index.resolve(element.local_name(), &context)
}

#[test]
fn test_tag_rule() {
    let index = StyleIndex::from_css("p { color: red }");
    assert_eq!(resolve(&index, &ElementData::new("p")), Some("color: red"));
    assert_eq!(resolve(&index, &ElementData::new("div")), None);
}

#[test]
fn test_tag_and_class_must_both_hold() {
    let index = StyleIndex::from_css("p.note { color: red }");
    let note_p = ElementData::new("p").with_attr("class", "note");
    let note_div = ElementData::new("div").with_attr("class", "note");

    assert_eq!(resolve(&index, &note_p), Some("color: red"));
    assert_eq!(resolve(&index, &note_div), None);
}

#[test]
fn test_tag_and_id() {
    let index = StyleIndex::from_css("div#nav { color: red }");
    let nav = ElementData::new("div").with_attr("id", "nav");
    assert_eq!(resolve(&index, &nav), Some("color: red"));
    assert_eq!(resolve(&index, &ElementData::new("div")), None);
}

#[test]
fn test_newest_matching_rule_wins() {
    let index = StyleIndex::from_css(".a { color: red } p { color: blue } .b { color: green }");
    let p = ElementData::new("p").with_attr("class", "a");
    assert_eq!(resolve(&index, &p), Some("color: blue"));
}

#[test]
fn test_comma_list_fragment_matches() {
    let index = StyleIndex::from_css("h1, h2 { margin: 0 }");
    assert_eq!(resolve(&index, &ElementData::new("h2")), Some("margin: 0"));
}

#[test]
fn test_selector_text_is_lowercased() {
    let index = StyleIndex::from_css("P.NOTE { color: red }");
    let p = ElementData::new("p").with_attr("class", "note");
    assert_eq!(resolve(&index, &p), Some("color: red"));
}

#[test]
fn test_child_combinator_only_last_token() {
    let index = StyleIndex::from_css("ul > li { color: red }");
    assert_eq!(resolve(&index, &ElementData::new("li")), Some("color: red"));
}

#[test]
fn test_pseudo_class_token_never_matches() {
    let index = StyleIndex::from_css("a:hover { color: red }");
    assert_eq!(resolve(&index, &ElementData::new("a")), None);
}

#[test]
fn test_rules_serialize() {
    let index = StyleIndex::from_css("p { color: red }");
    let json = serde_json::to_value(&index).unwrap();
    assert_eq!(json["rules"][0]["selector"], "p");
    assert_eq!(json["rules"][0]["declaration"], "color: red");
}
