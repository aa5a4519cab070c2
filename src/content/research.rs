use super::Language;

#[derive(Clone, PartialEq, Debug)]
pub struct ResearchPlaceholder {
    pub title: &'static str,
    pub message: &'static str,
    pub status_badge: &'static str,
}

pub fn placeholder(language: Language) -> ResearchPlaceholder {
    match language {
        Language::Ua => ResearchPlaceholder {
            title: "Дослідження та звіти",
            message: "Цей розділ у розробці. Незабаром тут з'являться стратегічні кейси, аналітичні матеріали та policy-звіти про розвиток України й концепції міст з ШІ.",
            status_badge: "В розробці",
        },
        Language::En => ResearchPlaceholder {
            title: "Research & Reports",
            message: "This section is currently under development. Check back soon for strategic cases, analytical materials, and policy reports on Ukrainian development and AI-powered city concepts.",
            status_badge: "In development",
        },
    }
}
