//! Declarative quiz table
//!
//! Every quiz is an ordered list of [`StepDef`]s ending with the phone step.
//! The engine in [`super::conversation`] knows nothing about individual
//! quizzes; adding a question means adding a row here.

use strum::{EnumIter, IntoStaticStr};

/// Identifies a quiz (or the short contact form, which runs on the same engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum QuizId {
    /// 🏗 Расчёт стоимости дома
    CostEstimate,
    /// ✏️ Архитектурное проектирование
    Design,
    /// 📝 Оставить заявку: name + phone
    LeadForm,
}

/// Closed set of question identifiers across all quizzes.
///
/// The snake_case name doubles as the answer key in a lead record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum StepId {
    Floors,
    Material,
    Area,
    Project,
    Timeline,
    Object,
    Style,
    Name,
    Phone,
}

impl StepId {
    /// Answer key used in lead records.
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn is_phone(self) -> bool {
        matches!(self, StepId::Phone)
    }
}

/// One question of a quiz.
#[derive(Debug, PartialEq, Eq)]
pub struct StepDef {
    pub id: StepId,
    /// Field caption in the operator summary
    pub label: &'static str,
    /// Question shown to the user
    pub prompt: &'static str,
    /// Fixed choices; empty means free text (or contact for the phone step)
    pub options: &'static [&'static str],
}

impl StepDef {
    /// Option text by its position in the keyboard.
    pub fn option(&self, index: usize) -> Option<&'static str> {
        self.options.get(index).copied()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct QuizDef {
    pub id: QuizId,
    /// Title used in the notification header
    pub title: &'static str,
    /// Line sent before the first question
    pub intro: &'static str,
    pub steps: &'static [StepDef],
}

impl QuizDef {
    pub fn first_step(&self) -> &'static StepDef {
        // Every table below is non-empty and ends with PHONE.
        &self.steps[0]
    }

    pub fn position(&self, step: StepId) -> Option<usize> {
        self.steps.iter().position(|s| s.id == step)
    }

    pub fn step(&self, step: StepId) -> Option<&'static StepDef> {
        self.steps.iter().find(|s| s.id == step)
    }

    /// Number of questions the user sees, including the phone request.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

const PHONE: StepDef = StepDef {
    id: StepId::Phone,
    label: "Телефон",
    prompt: "📱 Оставьте номер телефона, и мы свяжемся с вами:",
    options: &[],
};

static COST_ESTIMATE_STEPS: [StepDef; 6] = [
    StepDef {
        id: StepId::Floors,
        label: "Этажность",
        prompt: "Этажность?",
        options: &["1 этаж", "С мансардой", "2 этажа"],
    },
    StepDef {
        id: StepId::Material,
        label: "Материал",
        prompt: "Материал?",
        options: &["Кирпич", "Монолит", "Газобетон", "Пока не определился"],
    },
    StepDef {
        id: StepId::Area,
        label: "Площадь",
        prompt: "Площадь дома?",
        options: &["До 100 м²", "100–150 м²", "150–200 м²", "Более 200 м²"],
    },
    StepDef {
        id: StepId::Project,
        label: "Проект",
        prompt: "Есть ли у вас проект?",
        options: &["Есть свой проект", "Выберу из каталога", "Нужен индивидуальный"],
    },
    StepDef {
        id: StepId::Timeline,
        label: "Сроки",
        prompt: "Когда планируете начать строительство?",
        options: &["В ближайшее время", "Через 3–6 месяцев", "В течение года", "Пока присматриваюсь"],
    },
    PHONE,
];

static DESIGN_STEPS: [StepDef; 6] = [
    StepDef {
        id: StepId::Object,
        label: "Объект",
        prompt: "Что проектируем?",
        options: &["Жилой дом", "Баня / гостевой дом", "Коммерческий объект", "Другое"],
    },
    StepDef {
        id: StepId::Area,
        label: "Площадь",
        prompt: "Планируемая площадь?",
        options: &["До 100 м²", "100–150 м²", "150–200 м²", "Более 200 м²"],
    },
    StepDef {
        id: StepId::Floors,
        label: "Этажность",
        prompt: "Этажность?",
        options: &["1 этаж", "С мансардой", "2 этажа", "3 и более"],
    },
    StepDef {
        id: StepId::Style,
        label: "Стиль",
        prompt: "Архитектурный стиль?",
        options: &["Современный", "Классический", "Скандинавский", "Пока не определился"],
    },
    StepDef {
        id: StepId::Timeline,
        label: "Сроки",
        prompt: "Когда нужен проект?",
        options: &["Как можно скорее", "В течение 1–2 месяцев", "Не срочно"],
    },
    PHONE,
];

static LEAD_FORM_STEPS: [StepDef; 2] = [
    StepDef {
        id: StepId::Name,
        label: "Имя",
        prompt: "Введите имя:",
        options: &[],
    },
    PHONE,
];

static COST_ESTIMATE: QuizDef = QuizDef {
    id: QuizId::CostEstimate,
    title: "Расчёт стоимости дома",
    intro: "🏗 Ответьте на несколько вопросов, и мы подготовим расчёт стоимости.",
    steps: &COST_ESTIMATE_STEPS,
};

static DESIGN: QuizDef = QuizDef {
    id: QuizId::Design,
    title: "Архитектурное проектирование",
    intro: "✏️ Расскажите о будущем объекте, и архитектор свяжется с вами.",
    steps: &DESIGN_STEPS,
};

static LEAD_FORM: QuizDef = QuizDef {
    id: QuizId::LeadForm,
    title: "Заявка",
    intro: "📝 Оставьте контакты, и мы перезвоним.",
    steps: &LEAD_FORM_STEPS,
};

impl QuizId {
    pub fn definition(self) -> &'static QuizDef {
        match self {
            QuizId::CostEstimate => &COST_ESTIMATE,
            QuizId::Design => &DESIGN,
            QuizId::LeadForm => &LEAD_FORM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_quiz_ends_with_single_phone_step() {
        for quiz in QuizId::iter() {
            let def = quiz.definition();
            assert_eq!(def.id, quiz);
            assert!(!def.is_empty(), "{:?} has no steps", quiz);
            assert_eq!(def.steps.last().map(|s| s.id), Some(StepId::Phone), "{:?}", quiz);
            assert_eq!(def.steps.iter().filter(|s| s.id.is_phone()).count(), 1, "{:?}", quiz);
        }
    }

    #[test]
    fn test_step_ids_unique_within_quiz() {
        for quiz in QuizId::iter() {
            let def = quiz.definition();
            let ids: HashSet<StepId> = def.steps.iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), def.len(), "duplicate step in {:?}", quiz);
        }
    }

    #[test]
    fn test_cost_estimate_order() {
        let keys: Vec<&str> = QuizId::CostEstimate
            .definition()
            .steps
            .iter()
            .map(|s| s.id.key())
            .collect();
        assert_eq!(keys, ["floors", "material", "area", "project", "timeline", "phone"]);
    }

    #[test]
    fn test_option_callback_payload_fits_telegram_limit() {
        // Options travel as `ans:<step>:<index>`, but the text itself is shown on a button.
        for quiz in QuizId::iter() {
            for step in quiz.definition().steps {
                for option in step.options {
                    assert!(!option.is_empty());
                    assert!(option.len() <= 64, "{} is too long for a button", option);
                }
            }
        }
    }

    #[test]
    fn test_option_lookup() {
        let floors = QuizId::CostEstimate.definition().first_step();
        assert_eq!(floors.option(2), Some("2 этажа"));
        assert_eq!(floors.option(3), None);
    }
}
