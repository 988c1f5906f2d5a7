//! # Graduation Requirements
//!
//! The standard undergraduate titling requirements: credits, social
//! service, professional practices, humanist formation, second language,
//! exit exam, outstanding debts and the title fee.
//!
//! User-facing strings stay in Spanish; they are shown verbatim to students.

use crate::error::FactError;
use crate::facts::FactSet;
use crate::rule::{Question, QuestionType, Rule};

// Fact keys.

/// Percentage of approved credits (numeric).
pub const CREDITS_PERCENTAGE: &str = "credits_percentage";
/// Social service released.
pub const SOCIAL_SERVICE_COMPLETED: &str = "social_service_completed";
/// Professional practices released.
pub const PROFESSIONAL_PRACTICES_COMPLETED: &str = "professional_practices_completed";
/// Humanist formation credits covered.
pub const HUMANIST_FORMATION_COMPLETED: &str = "humanist_formation_completed";
/// Second language accredited.
pub const LANGUAGE_REQUIREMENT_MET: &str = "language_requirement_met";
/// Exit exam (EGEL/EXANI) presented.
pub const EXIT_EXAM_PRESENTED: &str = "exit_exam_presented";
/// Outstanding tuition debt.
pub const DEBT_TUITION: &str = "debt_tuition";
/// Outstanding library debt.
pub const DEBT_LIBRARY: &str = "debt_library";
/// Outstanding laboratory debt.
pub const DEBT_LAB: &str = "debt_lab";
/// Title fee paid.
pub const TITLE_FEE_PAID: &str = "title_fee_paid";

/// Minimum approved credit percentage.
pub const REQUIRED_CREDITS_PERCENTAGE: f64 = 100.0;

/// Rule names, exported for diagnostics and assertions.
pub mod names {
    #![allow(missing_docs)]

    pub const CREDITS: &str = "Créditos Académicos";
    pub const SOCIAL_SERVICE: &str = "Servicio Social";
    pub const PROFESSIONAL_PRACTICES: &str = "Prácticas Profesionales";
    pub const HUMANIST_FORMATION: &str = "Formación Humanista";
    pub const SECOND_LANGUAGE: &str = "Segundo Idioma";
    pub const EXIT_EXAM: &str = "Examen de Egreso (EGEL/EXANI)";
    pub const NO_DEBTS: &str = "No Adeudos";
    pub const TITLE_FEE: &str = "Pago de Título";
}

fn credits_complete(facts: &FactSet) -> Result<bool, FactError> {
    Ok(facts.number(CREDITS_PERCENTAGE)? >= REQUIRED_CREDITS_PERCENTAGE)
}

fn social_service(facts: &FactSet) -> Result<bool, FactError> {
    facts.flag(SOCIAL_SERVICE_COMPLETED)
}

fn professional_practices(facts: &FactSet) -> Result<bool, FactError> {
    facts.flag(PROFESSIONAL_PRACTICES_COMPLETED)
}

fn humanist_formation(facts: &FactSet) -> Result<bool, FactError> {
    facts.flag(HUMANIST_FORMATION_COMPLETED)
}

fn second_language(facts: &FactSet) -> Result<bool, FactError> {
    facts.flag(LANGUAGE_REQUIREMENT_MET)
}

fn exit_exam(facts: &FactSet) -> Result<bool, FactError> {
    facts.flag(EXIT_EXAM_PRESENTED)
}

// Composite: one failure entry no matter how many flags are set.
// Debt flags may be numeric (0 = no debt).
fn no_debts(facts: &FactSet) -> Result<bool, FactError> {
    for key in [DEBT_TUITION, DEBT_LIBRARY, DEBT_LAB] {
        if facts.truthy(key)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn title_fee(facts: &FactSet) -> Result<bool, FactError> {
    facts.flag(TITLE_FEE_PAID)
}

/// The requirement rules, in reporting order.
pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            names::CREDITS,
            "Verifica que el alumno haya aprobado el 100% de las materias.",
            &[CREDITS_PERCENTAGE],
            credits_complete,
            "No has cubierto el 100% de los créditos de tu plan de estudios.",
        ),
        Rule::new(
            names::SOCIAL_SERVICE,
            "Verifica la liberación del Servicio Social (500 horas, min 6 meses).",
            &[SOCIAL_SERVICE_COMPLETED],
            social_service,
            "Debes concluir y liberar tu Servicio Social (500 horas).",
        ),
        Rule::new(
            names::PROFESSIONAL_PRACTICES,
            "Verifica la liberación de Prácticas Profesionales (min 240 horas).",
            &[PROFESSIONAL_PRACTICES_COMPLETED],
            professional_practices,
            "Debes concluir y liberar tus Prácticas Profesionales (mínimo 240 horas).",
        ),
        Rule::new(
            names::HUMANIST_FORMATION,
            "Verifica la cobertura de créditos de Formación Humanista.",
            &[HUMANIST_FORMATION_COMPLETED],
            humanist_formation,
            "No has liberado los créditos de Formación Humanista.",
        ),
        Rule::new(
            names::SECOND_LANGUAGE,
            "Verifica la acreditación del idioma extranjero según el plan de estudios.",
            &[LANGUAGE_REQUIREMENT_MET],
            second_language,
            "No has acreditado el requisito de Segundo Idioma (Inglés u otro).",
        ),
        Rule::new(
            names::EXIT_EXAM,
            "Verifica la presentación del examen de egreso (requisito obligatorio).",
            &[EXIT_EXAM_PRESENTED],
            exit_exam,
            "Es obligatorio presentar el Examen General de Egreso (EGEL/EXANI), aunque el resultado no condicione el título.",
        ),
        Rule::new(
            names::NO_DEBTS,
            "Verifica que no existan deudas en las 3 áreas críticas: Colegiatura, Biblioteca, Laboratorio.",
            &[DEBT_TUITION, DEBT_LIBRARY, DEBT_LAB],
            no_debts,
            "Tienes adeudos pendientes (Colegiatura, Biblioteca o Laboratorio).",
        ),
        Rule::new(
            names::TITLE_FEE,
            "Verifica el pago administrativo de derechos de titulación.",
            &[TITLE_FEE_PAID],
            title_fee,
            "Debes cubrir el pago de derechos de Expedición de Título (~$2,300 - $2,500).",
        ),
    ]
}

/// The questionnaire, in prompt order.
pub fn questions() -> Vec<Question> {
    use QuestionType::{Boolean, Numeric};
    vec![
        Question::new(
            CREDITS_PERCENTAGE,
            "1. ¿Qué porcentaje de créditos de tu plan de estudios has aprobado?",
            Numeric,
        ),
        Question::new(
            SOCIAL_SERVICE_COMPLETED,
            "2. ¿Ya liberaste tu Servicio Social (500 horas)?",
            Boolean,
        ),
        Question::new(
            PROFESSIONAL_PRACTICES_COMPLETED,
            "3. ¿Ya liberaste tus Prácticas Profesionales (mín. 240 horas)?",
            Boolean,
        ),
        Question::new(
            HUMANIST_FORMATION_COMPLETED,
            "4. ¿Has cubierto los créditos de Formación Humanista?",
            Boolean,
        ),
        Question::new(
            LANGUAGE_REQUIREMENT_MET,
            "5. ¿Acreditaste el requisito de Segundo Idioma?",
            Boolean,
        ),
        Question::new(
            EXIT_EXAM_PRESENTED,
            "6. ¿Ya presentaste tu Examen de Egreso (EGEL/EXANI)?",
            Boolean,
        ),
        Question::new(DEBT_TUITION, "7. ¿Tienes adeudos de colegiatura?", Boolean),
        Question::new(DEBT_LIBRARY, "8. ¿Tienes adeudos en biblioteca?", Boolean),
        Question::new(DEBT_LAB, "9. ¿Tienes adeudos en laboratorios?", Boolean),
        Question::new(
            TITLE_FEE_PAID,
            "10. ¿Ya realizaste el pago de derechos de titulación?",
            Boolean,
        ),
    ]
}

/// A fact set that satisfies every rule.
pub fn passing_facts() -> FactSet {
    FactSet::new()
        .with(CREDITS_PERCENTAGE, 100)
        .with(SOCIAL_SERVICE_COMPLETED, true)
        .with(PROFESSIONAL_PRACTICES_COMPLETED, true)
        .with(HUMANIST_FORMATION_COMPLETED, true)
        .with(LANGUAGE_REQUIREMENT_MET, true)
        .with(EXIT_EXAM_PRESENTED, true)
        .with(DEBT_TUITION, false)
        .with(DEBT_LIBRARY, false)
        .with(DEBT_LAB, false)
        .with(TITLE_FEE_PAID, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleCatalog;

    #[test]
    fn standard_catalog_is_valid() {
        let catalog = RuleCatalog::graduation().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.questions().len(), 10);
    }

    #[test]
    fn every_read_key_has_a_question() {
        let catalog = RuleCatalog::graduation().unwrap();
        let asked: Vec<_> = catalog.questions().iter().map(|q| q.key).collect();
        for key in catalog.fact_keys() {
            assert!(asked.contains(&key), "no question for {key}");
        }
    }

    #[test]
    fn only_credits_is_numeric() {
        let numeric: Vec<_> = questions()
            .into_iter()
            .filter(|q| q.kind == QuestionType::Numeric)
            .map(|q| q.key)
            .collect();
        assert_eq!(numeric, vec![CREDITS_PERCENTAGE]);
    }

    #[test]
    fn passing_facts_satisfy_every_rule() {
        let facts = passing_facts();
        for rule in rules() {
            assert_eq!(rule.check(&facts), Ok(true), "{} failed", rule.name);
        }
    }

    #[test]
    fn credits_threshold_is_inclusive() {
        let rule = &rules()[0];
        assert_eq!(rule.check(&FactSet::new().with(CREDITS_PERCENTAGE, 100)), Ok(true));
        assert_eq!(rule.check(&FactSet::new().with(CREDITS_PERCENTAGE, 99.9)), Ok(false));
        assert_eq!(rule.check(&FactSet::new().with(CREDITS_PERCENTAGE, 120)), Ok(true));
    }

    #[test]
    fn empty_facts_only_pass_debt_rule() {
        let facts = FactSet::new();
        let passing: Vec<_> = rules()
            .into_iter()
            .filter(|r| r.check(&facts) == Ok(true))
            .map(|r| r.name)
            .collect();
        assert_eq!(passing, vec![names::NO_DEBTS]);
    }

    #[test]
    fn debt_rule_fails_on_any_flag() {
        let rule = rules()
            .into_iter()
            .find(|r| r.name == names::NO_DEBTS)
            .unwrap();
        for key in [DEBT_TUITION, DEBT_LIBRARY, DEBT_LAB] {
            assert_eq!(rule.check(&FactSet::new().with(key, true)), Ok(false));
        }
    }

    #[test]
    fn numeric_debt_flags_follow_zero_and_nonzero() {
        let rule = rules()
            .into_iter()
            .find(|r| r.name == names::NO_DEBTS)
            .unwrap();
        for key in [DEBT_TUITION, DEBT_LIBRARY, DEBT_LAB] {
            assert_eq!(rule.check(&passing_facts().with(key, 0)), Ok(true), "{key} = 0");
            assert_eq!(rule.check(&passing_facts().with(key, 1)), Ok(false), "{key} = 1");
        }
    }

    #[test]
    fn mistyped_debt_flag_is_a_fault() {
        let rule = rules()
            .into_iter()
            .find(|r| r.name == names::NO_DEBTS)
            .unwrap();
        assert!(rule.check(&FactSet::new().with(DEBT_LAB, "si")).is_err());
    }
}
