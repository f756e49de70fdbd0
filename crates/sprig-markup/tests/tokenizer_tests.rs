//! Integration tests for the markup tokenizer.

use sprig_markup::{Token, VoidElement, tokenize};

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello, world!");
    assert_eq!(tokens, vec![Token::Text("Hello, world!".to_string())]);
}

#[test]
fn test_open_and_close_tag() {
    let tokens = tokenize("<div></div>");
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("div".to_string()),
            Token::TagClose("div".to_string()),
        ]
    );
}

#[test]
fn test_tag_name_case_preserved() {
    let tokens = tokenize("<DIV></DIV>");
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("DIV".to_string()),
            Token::TagClose("DIV".to_string()),
        ]
    );
}

#[test]
fn test_close_tag_internal_whitespace_trimmed() {
    let tokens = tokenize("</div  >");
    assert_eq!(tokens, vec![Token::TagClose("div".to_string())]);
}

#[test]
fn test_text_runs_split_around_tags() {
    let tokens = tokenize("before<div>inside</div>after");
    assert_eq!(
        tokens,
        vec![
            Token::Text("before".to_string()),
            Token::TagOpen("div".to_string()),
            Token::Text("inside".to_string()),
            Token::TagClose("div".to_string()),
            Token::Text("after".to_string()),
        ]
    );
}

#[test]
fn test_double_quoted_attribute() {
    let tokens = tokenize(r#"<div class="container"></div>"#);
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("div".to_string()),
            Token::AttributeName("class".to_string()),
            Token::AttributeValue("container".to_string()),
            Token::TagClose("div".to_string()),
        ]
    );
}

#[test]
fn test_single_quoted_attribute() {
    let tokens = tokenize("<div id='main'></div>");
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("div".to_string()),
            Token::AttributeName("id".to_string()),
            Token::AttributeValue("main".to_string()),
            Token::TagClose("div".to_string()),
        ]
    );
}

#[test]
fn test_attribute_name_lowercased_value_raw() {
    let tokens = tokenize(r#"<div DATA-X="MixedCase"></div>"#);
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("div".to_string()),
            Token::AttributeName("data-x".to_string()),
            Token::AttributeValue("MixedCase".to_string()),
            Token::TagClose("div".to_string()),
        ]
    );
}

#[test]
fn test_boolean_attribute_emits_no_value() {
    let tokens = tokenize(r#"<input type="checkbox" checked />"#);
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("input".to_string()),
            Token::AttributeName("type".to_string()),
            Token::AttributeValue("checkbox".to_string()),
            Token::AttributeName("checked".to_string()),
            Token::SelfClosingTag("input".to_string()),
        ]
    );
}

#[test]
fn test_void_element_without_slash() {
    let tokens = tokenize("<br>");
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("br".to_string()),
            Token::SelfClosingTag("br".to_string()),
        ]
    );
}

#[test]
fn test_void_element_case_insensitive() {
    // Membership is case-insensitive but the token keeps the scanned case.
    let tokens = tokenize("<BR>");
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("BR".to_string()),
            Token::SelfClosingTag("BR".to_string()),
        ]
    );
}

#[test]
fn test_non_void_with_trailing_slash_is_not_self_closing() {
    // The void set alone decides; `/>` syntax on other tags is ignored.
    let tokens = tokenize("<div/>");
    assert_eq!(tokens, vec![Token::TagOpen("div".to_string())]);
}

#[test]
fn test_void_element_attributes_come_before_the_marker() {
    let tokens = tokenize(r#"<img src="image.jpg" />"#);
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("img".to_string()),
            Token::AttributeName("src".to_string()),
            Token::AttributeValue("image.jpg".to_string()),
            Token::SelfClosingTag("img".to_string()),
        ]
    );
}

#[test]
fn test_entities_pass_through_undecoded() {
    let tokens = tokenize("<p>a &amp; b</p>");
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("p".to_string()),
            Token::Text("a &amp; b".to_string()),
            Token::TagClose("p".to_string()),
        ]
    );
}

#[test]
fn test_unterminated_value_consumes_to_end_of_input() {
    let tokens = tokenize(r#"<img src="image.jpg"#);
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("img".to_string()),
            Token::AttributeName("src".to_string()),
            Token::AttributeValue("image.jpg".to_string()),
        ]
    );
}

#[test]
fn test_delimiter_is_whatever_follows_the_equals() {
    // No quote after `=`: the next character itself becomes the delimiter.
    let tokens = tokenize("<div a=1x1></div>");
    assert_eq!(
        tokens,
        vec![
            Token::TagOpen("div".to_string()),
            Token::AttributeName("a".to_string()),
            Token::AttributeValue("x".to_string()),
            Token::TagClose("div".to_string()),
        ]
    );
}

#[test]
fn test_truncated_open_tag_still_emits_what_it_saw() {
    assert_eq!(tokenize("<div"), vec![Token::TagOpen("div".to_string())]);
    assert_eq!(tokenize("</div"), vec![Token::TagClose("div".to_string())]);
}

#[test]
fn test_void_element_lookup() {
    assert!(VoidElement::matches("br"));
    assert!(VoidElement::matches("IMG"));
    assert!(!VoidElement::matches("div"));
    assert_eq!(VoidElement::Br.to_string(), "br");
}

#[test]
fn test_token_display_for_debug_dumps() {
    assert_eq!(Token::TagOpen("div".to_string()).to_string(), "<div>");
    assert_eq!(Token::TagClose("div".to_string()).to_string(), "</div>");
    assert_eq!(
        Token::SelfClosingTag("br".to_string()).to_string(),
        "<br />"
    );
}
