use super::*;

#[test]
fn default_form_is_adding_with_empty_input() {
    let form = FormState::default();
    assert_eq!(form.mode, SubmitMode::Adding);
    assert!(form.input.is_empty());
    assert_eq!(form.editing(), None);
    assert_eq!(form.button_label(), "Add");
    assert_eq!(form.button_class(), "btn btn-primary");
}

#[test]
fn begin_edit_switches_to_update_mode() {
    let mut form = FormState::default();
    let id = TodoId::new();
    form.begin_edit(id, "Walk dog");
    assert_eq!(form.input, "Walk dog");
    assert_eq!(form.editing(), Some(id));
    assert_eq!(form.button_label(), "Update");
    assert_eq!(form.button_class(), "btn btn-warning");
}

#[test]
fn reset_returns_to_adding() {
    let mut form = FormState::default();
    form.begin_edit(TodoId::new(), "x");
    form.reset();
    assert_eq!(form, FormState::default());
}

#[test]
fn validated_text_trims_whitespace() {
    let form = FormState { input: "  Buy milk \n".to_owned(), mode: SubmitMode::Adding };
    assert_eq!(form.validated_text().unwrap(), "Buy milk");
}

#[test]
fn validated_text_rejects_blank_input() {
    for input in ["", "   ", "\t\n"] {
        let form = FormState { input: input.to_owned(), mode: SubmitMode::Adding };
        assert!(matches!(form.validated_text(), Err(TodoError::EmptyText)), "input {input:?}");
    }
}
