// tests/parser_tests.rs

use scl_lang::error::SclError;
use scl_lang::lexer::Lexer;
use scl_lang::parser::Parser;
use scl_lang::value::{Map, Value};
use scl_lang::loads;

fn parse(text: &str) -> Result<Map, SclError> {
    let tokens = Lexer::tokenize(text)?;
    Parser::new(tokens).parse()
}

fn parse_err(text: &str) -> SclError {
    parse(text).unwrap_err()
}

// ============================================================================
// Scalar typed blocks
// ============================================================================

#[test]
fn test_bool_value() {
    let config = parse("flag :: bool { true }\n").unwrap();
    assert_eq!(config["flag"], Value::Boolean(true));
}

#[test]
fn test_bool_aliases() {
    let config = parse("a :: bool { yes }\nb :: bool { no }\n").unwrap();
    assert_eq!(config["a"], Value::Boolean(true));
    assert_eq!(config["b"], Value::Boolean(false));
}

#[test]
fn test_str_value() {
    let config = parse("name :: str { \"deep thought\" }\n").unwrap();
    assert_eq!(config["name"], Value::String("deep thought".to_string()));
}

#[test]
fn test_num_value() {
    let config = parse("answer :: num { 42 }\nbelow :: num { -1 }\n").unwrap();
    assert_eq!(config["answer"], Value::Integer(42));
    assert_eq!(config["below"], Value::Integer(-1));
}

#[test]
fn test_fl_value() {
    let config = parse("ratio :: fl { 2.5 }\n").unwrap();
    assert_eq!(config["ratio"], Value::Float(2.5));
}

#[test]
fn test_fl_widens_integer_literal() {
    let config = parse("ratio :: fl { 3 }\n").unwrap();
    assert_eq!(config["ratio"], Value::Float(3.0));
}

#[test]
fn test_ml_value() {
    let config = parse("text :: ml { 'first\nsecond' }\n").unwrap();
    assert_eq!(config["text"], Value::String("first\nsecond".to_string()));
}

#[test]
fn test_num_rejects_float() {
    let err = parse_err("n :: num { 1.5 }\n");
    assert!(err.to_string().contains("Expected number, got float"));
}

#[test]
fn test_str_rejects_multiline() {
    let err = parse_err("s :: str { 'raw' }\n");
    assert!(err.to_string().contains("Expected string, got multiline string"));
}

// ============================================================================
// Parameter names
// ============================================================================

#[test]
fn test_keyword_as_name() {
    let config = parse("list :: num { 1 }\nclass :: bool { no }\n").unwrap();
    assert_eq!(config["list"], Value::Integer(1));
    assert_eq!(config["class"], Value::Boolean(false));
}

#[test]
fn test_number_as_name_is_stringified() {
    let config = parse("42 :: str { \"answer\" }\n").unwrap();
    assert_eq!(config["42"], Value::String("answer".to_string()));
}

#[test]
fn test_string_as_name() {
    let config = parse("\"spaced out\" :: num { 9 }\n").unwrap();
    assert_eq!(config["spaced out"], Value::Integer(9));
}

#[test]
fn test_name_starting_with_digits() {
    let config = parse("123abc :: num { 7 }\n").unwrap();
    assert_eq!(config["123abc"], Value::Integer(7));
}

// ============================================================================
// Layout: newlines and comments are insignificant
// ============================================================================

#[test]
fn test_comments_are_ignored() {
    let text = "[top note]\na :: num { 1 }\n[between]\nb :: num { 2 }\n";
    let config = parse(text).unwrap();
    assert_eq!(config.len(), 2);
}

#[test]
fn test_everything_on_one_line() {
    let config = parse("a :: num { 1 } b :: num { 2 }").unwrap();
    assert_eq!(config["a"], Value::Integer(1));
    assert_eq!(config["b"], Value::Integer(2));
}

// ============================================================================
// Duplicate keys: overwrite-merge
// ============================================================================

#[test]
fn test_last_write_wins_first_position_kept() {
    let text = "a :: num { 1 }\nb :: num { 2 }\na :: num { 3 }\n";
    let config = parse(text).unwrap();
    assert_eq!(config["a"], Value::Integer(3));
    assert_eq!(config["b"], Value::Integer(2));
    let keys: Vec<&String> = config.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_duplicate_keys_inside_class() {
    let text = "outer :: class {\n  x :: num { 1 }\n  x :: str { \"two\" }\n}\n";
    let config = parse(text).unwrap();
    assert_eq!(
        config["outer"].get("x"),
        Some(&Value::String("two".to_string()))
    );
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_nested_classes() {
    let text = "\
server :: class {
    port :: num { 8080 }
    limits :: class {
        max_conns :: num { 64 }
    }
}
";
    let config = parse(text).unwrap();
    let server = config["server"].as_object().unwrap();
    assert_eq!(server["port"], Value::Integer(8080));
    assert_eq!(server["limits"].get("max_conns"), Some(&Value::Integer(64)));
}

#[test]
fn test_empty_class() {
    let config = parse("empty :: class { }\n").unwrap();
    assert_eq!(config["empty"], Value::Object(Map::new()));
}

#[test]
fn test_unterminated_class_fails_at_eof() {
    let err = parse_err("outer :: class {\n    inner :: class {\n        a :: num { 1 }\n");
    let (line, _) = err.position().unwrap();
    assert_eq!(line, 4); // the synthetic EOF sits on the line after the input
    assert!(err.to_string().contains("end of input"));
}

#[test]
fn test_class_nesting_depth_is_bounded() {
    let mut text = "a :: ".to_string();
    for _ in 0..6 {
        text.push_str("class { a :: ");
    }
    text.push_str("num { 1 }");
    for _ in 0..6 {
        text.push_str(" }");
    }
    text.push('\n');

    // Plenty of headroom at the default bound
    assert!(loads(&text).is_ok());

    let tokens = Lexer::tokenize(&text).unwrap();
    let err = Parser::new(tokens).with_max_depth(3).parse().unwrap_err();
    assert!(matches!(err, SclError::MaxDepth { limit: 3, .. }));
    assert!(err.to_string().contains("maximum nesting depth"));
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn test_list_of_each_kind() {
    let text = "\
nums :: list(num) { 1, 2, 3 }
fls :: list(fl) { 0.5, 2 }
bools :: list(bool) { true, no }
strs :: list(str) { \"a\", \"b\" }
";
    let config = parse(text).unwrap();
    assert_eq!(
        config["nums"],
        Value::List(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
        ])
    );
    // Integer literals widen in fl lists
    assert_eq!(
        config["fls"],
        Value::List(vec![Value::Float(0.5), Value::Float(2.0)])
    );
    assert_eq!(
        config["bools"],
        Value::List(vec![Value::Boolean(true), Value::Boolean(false)])
    );
    assert_eq!(
        config["strs"],
        Value::List(vec![
            Value::String("a".to_string()),
            Value::String("b".to_string()),
        ])
    );
}

#[test]
fn test_empty_list_is_legal_for_any_kind() {
    for kind in ["num", "fl", "bool", "str"] {
        let config = parse(&format!("xs :: list({kind}) {{ }}\n")).unwrap();
        assert_eq!(config["xs"], Value::List(vec![]));
    }
}

#[test]
fn test_list_element_kind_is_enforced() {
    let err = parse_err("xs :: list(num) { 1, \"two\" }\n");
    assert!(err.to_string().contains("Expected number, got string"));
}

#[test]
fn test_trailing_comma_is_rejected() {
    let err = parse_err("xs :: list(num) { 1, 2, }\n");
    assert!(err.to_string().contains("Expected number"));
}

#[test]
fn test_missing_comma_is_rejected() {
    let err = parse_err("xs :: list(num) { 1 2 }\n");
    assert!(err.to_string().contains("Expected comma or closing brace"));
}

#[test]
fn test_unsupported_list_element_kind() {
    let err = parse_err("xs :: list(class) { }\n");
    assert!(err.to_string().contains("Unsupported list element type: class"));
}

// ============================================================================
// Dynamic values
// ============================================================================

#[test]
fn test_dynamic_literals() {
    let text = "\
n :: dynamic { 42 }
f :: dynamic { 2.5 }
b :: dynamic { yes }
s :: dynamic { \"text\" }
m :: dynamic { 'a\nb' }
";
    let config = parse(text).unwrap();
    assert_eq!(config["n"], Value::Integer(42));
    assert_eq!(config["f"], Value::Float(2.5));
    assert_eq!(config["b"], Value::Boolean(true));
    assert_eq!(config["s"], Value::String("text".to_string()));
    assert_eq!(config["m"], Value::String("a\nb".to_string()));
}

#[test]
fn test_dynamic_rejects_non_literals() {
    let err = parse_err("d :: dynamic { class }\n");
    assert!(err.to_string().contains("dynamic supports only base types"));
}

// ============================================================================
// Errors and positions
// ============================================================================

#[test]
fn test_error_names_expected_and_actual_kind() {
    let err = parse_err("foo :: num { bar }\n");
    let message = err.to_string();
    assert!(message.contains("Expected number, got identifier"), "{message}");
    // Position of the offending `bar` token
    assert_eq!(err.position(), Some((1, 14)));
}

#[test]
fn test_unknown_type_after_double_colon() {
    let err = parse_err("a :: widget { 1 }\n");
    assert!(err.to_string().contains("Unknown type: widget"));
}

#[test]
fn test_missing_double_colon() {
    let err = parse_err("a num { 1 }\n");
    assert!(err.to_string().contains("Expected '::'"));
}

#[test]
fn test_value_in_name_position() {
    let err = parse_err("true :: num { 1 }\n");
    assert!(
        err.to_string()
            .contains("Expected identifier or keyword, got boolean")
    );
}

#[test]
fn test_error_position_on_later_line() {
    let err = parse_err("a :: num { 1 }\nb :: num { oops }\n");
    assert_eq!(err.position(), Some((2, 12)));
}

#[test]
fn test_empty_input_is_empty_config() {
    assert_eq!(parse("").unwrap(), Map::new());
    assert_eq!(parse("\n\n[only a comment]\n").unwrap(), Map::new());
}
