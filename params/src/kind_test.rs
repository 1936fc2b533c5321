use super::*;

#[test]
fn registry_has_three_entries_in_order() {
    let names: Vec<_> = ParamType::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(names, ["string", "number", "select"]);
}

#[test]
fn display_name_matches_identifier() {
    for kind in ParamType::ALL {
        assert_eq!(kind.display_name(), kind.as_str());
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn default_is_string() {
    assert_eq!(ParamType::default(), ParamType::String);
}

#[test]
fn only_string_has_a_text_editor() {
    assert_eq!(ParamType::String.editor(), EditorKind::Text);
    assert_eq!(ParamType::Number.editor(), EditorKind::Unsupported);
    assert_eq!(ParamType::Select.editor(), EditorKind::Unsupported);
}

#[test]
fn parses_known_identifiers() {
    for kind in ParamType::ALL {
        assert_eq!(kind.as_str().parse::<ParamType>(), Ok(kind));
    }
}

#[test]
fn rejects_unknown_identifiers() {
    let err = "String".parse::<ParamType>().unwrap_err();
    assert_eq!(err, UnknownParamType("String".to_owned()));
    assert_eq!(err.to_string(), "unknown parameter type: \"String\"");

    assert!("".parse::<ParamType>().is_err());
    assert!("bool".parse::<ParamType>().is_err());
}

#[test]
fn serializes_as_lowercase_identifier() {
    let json = serde_json::to_string(&ParamType::Select).unwrap();
    assert_eq!(json, "\"select\"");
    let back: ParamType = serde_json::from_str("\"number\"").unwrap();
    assert_eq!(back, ParamType::Number);
}
