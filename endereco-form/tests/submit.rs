//! End-to-end tests for the submission controller, against an in-memory
//! surface that records every side effect.

use std::collections::HashMap;

use endereco_form::{Field, FormSurface, Notice, SUCCESS_MESSAGE, submit};

#[derive(Default)]
struct TestSurface {
    values: HashMap<Field, String>,
    notices: Vec<Notice>,
    focused: Vec<Field>,
}

impl TestSurface {
    fn filled(cep: &str, logradouro: &str, numero: &str, uf: &str) -> Self {
        let mut surface = Self::default();
        surface.values.insert(Field::Cep, cep.to_string());
        surface.values.insert(Field::Logradouro, logradouro.to_string());
        surface.values.insert(Field::Numero, numero.to_string());
        surface.values.insert(Field::Uf, uf.to_string());
        surface
    }
}

impl FormSurface for TestSurface {
    fn value(&self, field: Field) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn focus(&mut self, field: Field) {
        self.focused.push(field);
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn clear_all(&mut self) {
        self.values.clear();
    }
}

#[test]
fn test_submit_all_valid_succeeds_and_clears() {
    let mut surface = TestSurface::filled("01310-930", "Avenida Paulista", "1000", "SP");

    let outcome = submit(&mut surface);

    assert!(outcome.is_accepted());
    assert_eq!(
        surface.notices,
        vec![Notice::Success(SUCCESS_MESSAGE.to_string())]
    );
    assert!(surface.focused.is_empty());
    for field in Field::ALL {
        assert_eq!(surface.value(field), "");
    }
}

#[test]
fn test_submit_blank_cep_takes_required_path() {
    let mut surface = TestSurface::filled("", "Avenida Paulista", "1000", "SP");

    let outcome = submit(&mut surface);

    assert!(!outcome.is_accepted());
    assert_eq!(
        surface.notices,
        vec![Notice::Error(
            "CEP: Campo obrigatório não pode estar em branco.".to_string()
        )]
    );
    assert_eq!(surface.focused, vec![Field::Cep]);
    // Values are untouched on failure
    assert_eq!(surface.value(Field::Logradouro), "Avenida Paulista");
}

#[test]
fn test_submit_blank_uf_takes_required_over_pattern() {
    let mut surface = TestSurface::filled("01310-930", "Avenida Paulista", "1000", "  ");

    submit(&mut surface);

    assert_eq!(
        surface.notices,
        vec![Notice::Error(
            "UF: Campo obrigatório não pode estar em branco.".to_string()
        )]
    );
    assert_eq!(surface.focused, vec![Field::Uf]);
}

#[test]
fn test_submit_reports_first_failure_only() {
    // Both Número and UF are invalid; only Número (earlier in order) reports.
    let mut surface = TestSurface::filled("01310-930", "Avenida Paulista", "12a3", "sp");

    let outcome = submit(&mut surface);

    let failure = outcome.failure().expect("attempt should be rejected");
    assert_eq!(failure.field, Field::Numero);
    assert_eq!(
        surface.notices,
        vec![Notice::Error(
            "Número: Deve conter apenas dígitos numéricos e ser preenchido.".to_string()
        )]
    );
    assert_eq!(surface.focused, vec![Field::Numero]);
}

#[test]
fn test_submit_unmasked_cep_fails_format_check() {
    let mut surface = TestSurface::filled("01310930", "Avenida Paulista", "1000", "SP");

    submit(&mut surface);

    assert_eq!(
        surface.notices,
        vec![Notice::Error("CEP: Formato inválido. Use 00000-000.".to_string())]
    );
    assert_eq!(surface.focused, vec![Field::Cep]);
}

#[test]
fn test_submit_emits_exactly_one_notice_per_attempt() {
    let cases = [
        ("", "", "", ""),
        ("01310-930", "Rua", "12a", "sp"),
        ("01310-930", "Avenida Paulista", "1000", "SP"),
        ("1310-930", "Avenida Paulista", "1000", "SP"),
    ];
    for (cep, logradouro, numero, uf) in cases {
        let mut surface = TestSurface::filled(cep, logradouro, numero, uf);
        submit(&mut surface);
        assert_eq!(surface.notices.len(), 1, "case ({cep:?}, {logradouro:?}, {numero:?}, {uf:?})");
        assert!(!surface.notices[0].message().is_empty());
        assert!(surface.focused.len() <= 1);
    }
}

#[test]
fn test_submit_short_street_reports_length_error() {
    let mut surface = TestSurface::filled("01310-930", "Rua", "1000", "SP");

    submit(&mut surface);

    assert_eq!(
        surface.notices,
        vec![Notice::Error(
            "Logradouro: Deve conter no mínimo 5 caracteres.".to_string()
        )]
    );
}

#[test]
fn test_failed_submit_leaves_form_retryable() {
    let mut surface = TestSurface::filled("01310-930", "Avenida Paulista", "12a", "SP");

    assert!(!submit(&mut surface).is_accepted());

    // Fix the offending field and retry on the same surface.
    surface.values.insert(Field::Numero, "1000".to_string());
    assert!(submit(&mut surface).is_accepted());
    assert_eq!(surface.notices.len(), 2);
}
