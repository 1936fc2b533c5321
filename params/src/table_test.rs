use super::*;
use crate::store::ParameterStore;

#[test]
fn empty_collection_renders_titles_only() {
    let text = render(&[]).unwrap();
    for title in ["id", "name", "type", "value"] {
        assert!(text.contains(title), "missing column {title}:\n{text}");
    }
}

#[test]
fn renders_one_line_per_parameter_with_all_fields() {
    let store = ParameterStore::with_initial_parameters();
    let text = render(store.items()).unwrap();

    let first = text.lines().find(|l| l.contains("Назначение")).unwrap();
    assert!(first.contains('1'));
    assert!(first.contains("string"));
    assert!(first.contains("повседневное"));

    let second = text.lines().find(|l| l.contains("Длина")).unwrap();
    assert!(second.contains('2'));
    assert!(second.contains("макси"));
}

#[test]
fn columns_line_up_for_cyrillic_cells() {
    let store = ParameterStore::with_initial_parameters();
    let text = render(store.items()).unwrap();

    let widths: Vec<_> = text.lines().map(|l| l.chars().count()).collect();
    assert!(!widths.is_empty());
    assert!(widths.iter().all(|w| *w == widths[0]), "ragged table:\n{text}");
}

#[test]
fn output_has_no_terminal_escape_codes() {
    let store = ParameterStore::with_initial_parameters();
    let text = render(store.items()).unwrap();
    assert!(!text.contains('\u{1b}'));
}
