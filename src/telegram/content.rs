//! Static texts, menu labels and links

use strum::EnumIter;

/// Static pages reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ContentId {
    Welcome,
    About,
    Catalog,
    Sites,
    Contacts,
}

/// Main menu labels (reply keyboard).
pub mod labels {
    pub const ABOUT: &str = "📋 О компании";
    pub const CATALOG: &str = "📁 Каталог проектов";
    pub const COST_ESTIMATE: &str = "🏗 Расчёт стоимости дома";
    pub const DESIGN: &str = "✏️ Архитектурное проектирование";
    pub const SITES: &str = "🌐 Сайты компании";
    pub const CONTACTS: &str = "📞 Контакты";

    pub const LEAD_FORM: &str = "📝 Оставить заявку";
    pub const CANCEL: &str = "❌ Отмена";
    pub const WRITE_TO_US: &str = "💬 Написать нам";
    pub const WRITE_IN_TELEGRAM: &str = "💬 Написать в Telegram";
    pub const SHARE_PHONE: &str = "📱 Отправить телефон";
    pub const PHONE_LATER: &str = "Отправлю позже";
}

/// Callback identifiers for inline buttons.
pub mod callbacks {
    pub const LEAD_OPEN: &str = "lead_open";
    pub const CANCEL: &str = "cancel";
    /// Prefix of quiz answers: `ans:<step key>:<option index>`
    pub const ANSWER_PREFIX: &str = "ans:";

    /// Payload of option `index` on the question `step_key`.
    pub fn answer(step_key: &str, index: usize) -> String {
        format!("{}{}:{}", ANSWER_PREFIX, step_key, index)
    }

    /// Splits an answer payload into step key and option index text.
    pub fn parse_answer(data: &str) -> Option<(&str, &str)> {
        data.strip_prefix(ANSWER_PREFIX)?.split_once(':')
    }
}

pub mod links {
    pub const TELEGRAM: &str = "https://t.me/skVmeste";
    pub const CATALOG: &str = "https://disk.yandex.ru/i/UBQkSxjZVyUKPw";
}

pub const WELCOME: &str = "👋 Привет! Я бот СК «Вместе». Выберите действие:";

pub const MENU_PROMPT: &str = "Выберите действие в меню ниже 👇";

pub const ABOUT: &str = "🏗 Строительная компания СК «Вместе» — это команда архитекторов, инженеров и \
строителей. Проектируем и строим частные дома под ключ: от эскиза и сметы до сдачи объекта.\n\n\
Работаем по договору, фиксируем смету и сроки, показываем объекты в работе.";

pub const CONTACTS: &str = "📱 +7 (928) 621-11-05\n📱 +7 (919) 892-94-02\n📱 +7 (918) 538-14-55";

pub const THANK_YOU: &str = "Спасибо! Мы свяжемся с вами.";

pub const CANCELLED: &str = "Заявка отменена.";

pub fn catalog() -> String {
    format!("📂 Каталог проектов: {}", links::CATALOG)
}

pub fn sites() -> String {
    format!(
        "🌐 Мы в сети:\n• Telegram: {}\n• Каталог проектов: {}",
        links::TELEGRAM,
        links::CATALOG
    )
}

/// Text of a static page.
pub fn text(id: ContentId) -> String {
    match id {
        ContentId::Welcome => WELCOME.to_string(),
        ContentId::About => ABOUT.to_string(),
        ContentId::Catalog => catalog(),
        ContentId::Sites => sites(),
        ContentId::Contacts => CONTACTS.to_string(),
    }
}
