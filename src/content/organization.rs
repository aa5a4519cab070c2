use super::{vision, Language};

#[derive(Clone, PartialEq, Debug)]
pub struct Organization {
    pub name: &'static str,
    pub mission: &'static str,
    pub description: &'static str,
}

/// Team-roster projection of the vision experts for the About page.
#[derive(Clone, PartialEq, Debug)]
pub struct Expert {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub expertise: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct OrganizationCopy {
    pub team_heading: &'static str,
}

pub fn organization(language: Language) -> Organization {
    match language {
        Language::Ua => Organization {
            name: "ГО \"Розум\"",
            mission: "Будуємо майбутнє України через міста з ШІ",
            description: "ГО \"Розум\" — українська громадська організація, що об'єднує експертів зі штучного інтелекту, міського планування, енергетичних систем, медицини та публічного управління. Ми проєктуємо та просуваємо створення міст з ШІ — прозорих, ефективних і орієнтованих на людину міських середовищ, здатних трансформувати майбутнє України.",
        },
        Language::En => Organization {
            name: "ГО \"Розум\"",
            mission: "Building Ukraine's future through AI-powered cities",
            description: "ГО \"Розум\" is a Ukrainian civil organization bringing together experts in artificial intelligence, urban planning, energy systems, healthcare, and public governance. We design and advocate for the creation of AI-powered cities — transparent, efficient, and human-centric urban environments that can transform Ukraine's future.",
        },
    }
}

/// The single expert roster, re-projected (domain becomes expertise,
/// title becomes role) so About and Vision never drift apart.
pub fn experts(language: Language) -> Vec<Expert> {
    vision::experts(language)
        .into_iter()
        .map(|expert| Expert {
            id: expert.id,
            name: expert.name,
            role: expert.title,
            expertise: expert.domain,
            bio: expert.bio,
        })
        .collect()
}

pub fn copy(language: Language) -> OrganizationCopy {
    match language {
        Language::Ua => OrganizationCopy {
            team_heading: "Наша команда",
        },
        Language::En => OrganizationCopy {
            team_heading: "Our Team",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_matches_the_vision_experts() {
        for language in [Language::Ua, Language::En] {
            let roster = experts(language);
            let source = vision::experts(language);
            assert_eq!(roster.len(), source.len());
            for (member, expert) in roster.iter().zip(source.iter()) {
                assert_eq!(member.id, expert.id);
                assert_eq!(member.role, expert.title);
                assert_eq!(member.expertise, expert.domain);
            }
        }
    }
}
