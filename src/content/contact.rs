use serde::Serialize;

use super::Language;

#[derive(Clone, PartialEq, Debug)]
pub struct ContactPageContent {
    pub headline: &'static str,
    pub intro: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactIcon {
    Users,
    Handshake,
    TrendingUp,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ContactType {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ContactIcon,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ContactInfo {
    pub email: &'static str,
    pub email_subject: &'static str,
}

/// The record handed to the submission boundary. Serialized as the
/// would-be request body of the future backend endpoint.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
}

/// Localized labels for the contact page chrome and form.
#[derive(Clone, PartialEq, Debug)]
pub struct ContactCopy {
    pub type_prompt: &'static str,
    pub form_title: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit_label: &'static str,
    pub submitting_label: &'static str,
    pub success_message: &'static str,
    pub selected_type_label: &'static str,
    pub direct_email_lead: &'static str,
}

pub fn page_content(language: Language) -> ContactPageContent {
    match language {
        Language::Ua => ContactPageContent {
            headline: "Зв'яжіться з нами",
            intro: "Чи ви експерт, готовий долучитися, чи партнер у пошуку співпраці, чи інвестор, зацікавлений у майбутньому України — ми будемо раді вас почути.",
        },
        Language::En => ContactPageContent {
            headline: "Get in Touch",
            intro: "Whether you're an expert looking to contribute, a partner seeking collaboration, or an investor interested in Ukraine's future — we'd love to hear from you.",
        },
    }
}

pub fn contact_types(language: Language) -> Vec<ContactType> {
    match language {
        Language::Ua => vec![
            ContactType {
                id: "experts",
                title: "Долучитися як експерт",
                description: "Поділіться своєю експертизою в ШІ, міському плануванні, енергетиці, медицині чи інших доменах, щоб формувати українські міста з ШІ.",
                icon: ContactIcon::Users,
            },
            ContactType {
                id: "partners",
                title: "Стати партнером",
                description: "Дослідіть можливості співпраці у трансфері технологій, дослідницьких ініціативах чи стратегічних партнерствах у міських інноваціях.",
                icon: ContactIcon::Handshake,
            },
            ContactType {
                id: "investors",
                title: "Інвестувати в майбутнє",
                description: "Дізнайтеся про шляхи фінансування та інвестиційні можливості у створенні трансформаційних міст з ШІ по всій Україні.",
                icon: ContactIcon::TrendingUp,
            },
        ],
        Language::En => vec![
            ContactType {
                id: "experts",
                title: "Join as an Expert",
                description: "Contribute your expertise in AI, urban planning, energy, healthcare, or other domains to help shape Ukraine's AI-powered cities.",
                icon: ContactIcon::Users,
            },
            ContactType {
                id: "partners",
                title: "Partner With Us",
                description: "Explore collaboration opportunities for technology transfer, research initiatives, or strategic partnerships in urban innovation.",
                icon: ContactIcon::Handshake,
            },
            ContactType {
                id: "investors",
                title: "Invest in the Future",
                description: "Learn about funding pathways and investment opportunities in building transformative AI-powered cities across Ukraine.",
                icon: ContactIcon::TrendingUp,
            },
        ],
    }
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        email: "contact@rozum.org.ua",
        email_subject: "Inquiry from Website",
    }
}

pub fn copy(language: Language) -> ContactCopy {
    match language {
        Language::Ua => ContactCopy {
            type_prompt: "Як би ви хотіли взаємодіяти?",
            form_title: "Надішліть нам повідомлення",
            name_label: "Ваше ім'я",
            name_placeholder: "Введіть ваше ім'я",
            email_label: "Електронна адреса",
            email_placeholder: "ваша@адреса.укр",
            message_label: "Повідомлення",
            message_placeholder: "Розкажіть нам про ваш інтерес до проєкту...",
            submit_label: "Надіслати повідомлення",
            submitting_label: "Відправка...",
            success_message: "Дякуємо! Ваше повідомлення надіслано. Ми зв'яжемося з вами найближчим часом.",
            selected_type_label: "Тип запиту:",
            direct_email_lead: "Або зв'яжіться з нами безпосередньо за адресою",
        },
        Language::En => ContactCopy {
            type_prompt: "How would you like to engage?",
            form_title: "Send us a message",
            name_label: "Your name",
            name_placeholder: "Enter your name",
            email_label: "Email address",
            email_placeholder: "you@example.com",
            message_label: "Message",
            message_placeholder: "Tell us about your interest in the project...",
            submit_label: "Send message",
            submitting_label: "Sending...",
            success_message: "Thank you! Your message has been sent. We will get back to you shortly.",
            selected_type_label: "Inquiry type:",
            direct_email_lead: "Or reach us directly at",
        },
    }
}

/// `mailto:` reference with the subject line pre-filled.
pub fn mailto_href(info: &ContactInfo) -> String {
    format!(
        "mailto:{}?subject={}",
        info.email,
        urlencoding::encode(info.email_subject)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::assert_unique_ids;

    #[test]
    fn type_ids_are_unique_and_stable_across_languages() {
        for language in [Language::Ua, Language::En] {
            let ids: Vec<_> = contact_types(language).iter().map(|t| t.id).collect();
            assert_unique_ids(&ids);
            assert_eq!(ids, vec!["experts", "partners", "investors"]);
        }
    }

    #[test]
    fn mailto_encodes_the_subject() {
        let href = mailto_href(&contact_info());
        assert_eq!(
            href,
            "mailto:contact@rozum.org.ua?subject=Inquiry%20from%20Website"
        );
    }

    #[test]
    fn inquiry_serializes_without_unset_type() {
        let inquiry = ContactInquiry {
            name: "Olena".into(),
            email: "olena@example.com".into(),
            message: "Hello".into(),
            contact_type: None,
        };
        let json = serde_json::to_string(&inquiry).unwrap();
        assert!(!json.contains("contact_type"));

        let inquiry = ContactInquiry {
            contact_type: Some("experts".into()),
            ..inquiry
        };
        let json = serde_json::to_string(&inquiry).unwrap();
        assert!(json.contains("\"contact_type\":\"experts\""));
    }
}
