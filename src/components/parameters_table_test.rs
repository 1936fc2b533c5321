use super::*;

#[test]
fn column_titles_end_with_empty_delete_column() {
    assert_eq!(column_titles(), ["ID", "Название", "Тип", "Значение", ""]);
}

#[test]
fn add_row_appends_blank_parameter_through_the_signal() {
    let store = RwSignal::new(ParameterStore::with_initial_parameters());

    let id = add_row(store);

    assert_eq!(id, Some(3));
    store.with_untracked(|s| {
        assert_eq!(s.len(), 3);
        let added = s.items().last().unwrap();
        assert_eq!(added.id, 3);
        assert!(added.name.is_empty());
        assert!(added.value.is_empty());
    });
}

#[test]
fn add_row_after_delete_gets_a_fresh_id() {
    let store = RwSignal::new(ParameterStore::with_initial_parameters());
    store.maybe_update(|s| s.delete(2));

    assert_eq!(add_row(store), Some(3));
    assert_eq!(add_row(store), Some(4));
}
