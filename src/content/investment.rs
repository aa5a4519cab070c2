use super::Language;

#[derive(Clone, PartialEq, Debug)]
pub struct InvestmentHero {
    pub headline: &'static str,
    pub subheadline: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct InvestmentKeyPoint {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct InvestmentCta {
    pub text: &'static str,
    pub description: &'static str,
    pub link_to: &'static str,
}

pub fn hero(language: Language) -> InvestmentHero {
    match language {
        Language::Ua => InvestmentHero {
            headline: "Інвестуйте в майбутнє України",
            subheadline: "Долучайтеся до створення міст з ШІ, які трансформують управління, повернуть таланти додому та зроблять Україну світовим лідером міських інновацій.",
        },
        Language::En => InvestmentHero {
            headline: "Invest in Ukraine's Future",
            subheadline: "Join us in building AI-powered cities that will transform governance, attract talent back home, and position Ukraine as a global leader in urban innovation.",
        },
    }
}

pub fn key_points(language: Language) -> Vec<InvestmentKeyPoint> {
    match language {
        Language::Ua => vec![
            InvestmentKeyPoint {
                id: "kp-001",
                title: "Прозоре управління на основі ШІ",
                description: "Ваша інвестиція підтримує розробку вільних від корупції, керованих даними систем міського управління, що встановлюють нові світові стандарти публічного урядування.",
            },
            InvestmentKeyPoint {
                id: "kp-002",
                title: "Перевірена команда експертів",
                description: "ГО \"Розум\" об'єднує провідних фахівців із ШІ, міського планування, енергетики та медицини з десятиліттями сукупного досвіду масштабних проєктів.",
            },
            InvestmentKeyPoint {
                id: "kp-003",
                title: "Регіональний економічний вплив",
                description: "Кожне місто з ШІ створює екосистему, що підтримує сотні місцевих підприємств, генеруючи стале економічне зростання в регіонах України.",
            },
            InvestmentKeyPoint {
                id: "kp-004",
                title: "Повернення талантів додому",
                description: "Сучасні високотехнологічні міста пропонують якість життя, що повертає мільйони талановитих українців з-за кордону, відбудовуючи людський капітал нації.",
            },
            InvestmentKeyPoint {
                id: "kp-005",
                title: "Кілька шляхів партнерства",
                description: "Інвестор, технологічний партнер чи стратегічний співучасник — є гнучкі варіанти участі в цій трансформаційній ініціативі.",
            },
        ],
        Language::En => vec![
            InvestmentKeyPoint {
                id: "kp-001",
                title: "Transparent AI Governance",
                description: "Your investment supports the development of corruption-free, data-driven city management systems that set new standards for public governance worldwide.",
            },
            InvestmentKeyPoint {
                id: "kp-002",
                title: "Proven Expert Team",
                description: "ГО \"Розум\" brings together leading specialists in AI, urban planning, energy, and healthcare with decades of combined experience in large-scale projects.",
            },
            InvestmentKeyPoint {
                id: "kp-003",
                title: "Regional Economic Impact",
                description: "Each AI-powered city creates an ecosystem supporting hundreds of local SMEs, generating sustainable economic growth across Ukrainian regions.",
            },
            InvestmentKeyPoint {
                id: "kp-004",
                title: "Bringing Talent Home",
                description: "Modern, high-tech cities offer the quality of life that attracts millions of talented Ukrainians back from abroad, rebuilding the nation's human capital.",
            },
            InvestmentKeyPoint {
                id: "kp-005",
                title: "Multiple Partnership Pathways",
                description: "Whether as an investor, technology partner, or strategic collaborator, there are flexible options to participate in this transformative initiative.",
            },
        ],
    }
}

pub fn cta(language: Language) -> InvestmentCta {
    match language {
        Language::Ua => InvestmentCta {
            text: "Зв'яжіться з нами",
            description: "Напишіть нашій команді, щоб обговорити інвестиційні можливості, варіанти партнерства або отримати детальну проєктну документацію.",
            link_to: "/contact",
        },
        Language::En => InvestmentCta {
            text: "Contact Us to Learn More",
            description: "Get in touch with our team to discuss investment opportunities, partnership options, or to request detailed project documentation.",
            link_to: "/contact",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::assert_unique_ids;

    #[test]
    fn key_point_ids_are_unique() {
        for language in [Language::Ua, Language::En] {
            let ids: Vec<_> = key_points(language).iter().map(|p| p.id).collect();
            assert_unique_ids(&ids);
            assert_eq!(ids.len(), 5);
        }
    }

    #[test]
    fn cta_links_to_the_contact_route() {
        assert_eq!(cta(Language::Ua).link_to, "/contact");
        assert_eq!(cta(Language::En).link_to, "/contact");
    }
}
