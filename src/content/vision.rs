use super::Language;

#[derive(Clone, PartialEq, Debug)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Goal {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Problem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Solution {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeatureIcon {
    Brain,
    ShieldCheck,
    Zap,
    Activity,
    Database,
    Wifi,
    Home,
    Users,
}

#[derive(Clone, PartialEq, Debug)]
pub struct CityFeature {
    pub id: &'static str,
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct VisualConcept {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct VisionExpert {
    pub id: &'static str,
    pub name: &'static str,
    pub domain: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub avatar_url: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CtaVariant {
    Primary,
    Secondary,
}

#[derive(Clone, PartialEq, Debug)]
pub struct CallToAction {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub variant: CtaVariant,
    pub target_section: &'static str,
}

/// Localized headings and leads for the vision page sections.
#[derive(Clone, PartialEq, Debug)]
pub struct VisionCopy {
    pub scroll_hint: &'static str,
    pub goals_title: &'static str,
    pub goals_lead: &'static str,
    pub problems_title: &'static str,
    pub problems_lead: &'static str,
    pub solutions_title: &'static str,
    pub solutions_lead: &'static str,
    pub concepts_title: &'static str,
    pub concepts_lead: &'static str,
    pub features_title: &'static str,
    pub features_lead: &'static str,
    pub team_title: &'static str,
    pub team_lead: &'static str,
    pub cta_title_plain: &'static str,
    pub cta_title_accent: &'static str,
    pub cta_lead: &'static str,
}

pub fn copy(language: Language) -> VisionCopy {
    match language {
        Language::Ua => VisionCopy {
            scroll_hint: "Почати подорож",
            goals_title: "Наша візія",
            goals_lead: "П'ять трансформаційних цілей, що керують міським майбутнім України",
            problems_title: "Виклик",
            problems_lead: "Критичні питання, що вимагають системної трансформації",
            solutions_title: "Рішення",
            solutions_lead: "Як міста зі ШІ трансформують управління та суспільство",
            concepts_title: "Втілена візія",
            concepts_lead: "Концептуальні проєкти українських міст, керованих ШІ",
            features_title: "Розумна інфраструктура",
            features_lead: "Інтегровані системи, що живлять міста майбутнього",
            team_title: "Наша команда",
            team_lead: "Експертні лідери, що керують міською трансформацією України",
            cta_title_plain: "Готові будувати",
            cta_title_accent: "майбутнє України?",
            cta_lead: "Приєднуйтеся до нас у створенні прозорих міст з ШІ, які трансформують управління та повернуть мільйони українців додому.",
        },
        Language::En => VisionCopy {
            scroll_hint: "Begin the journey",
            goals_title: "Our Vision",
            goals_lead: "Five transformational goals driving Ukraine's urban future",
            problems_title: "The Challenge",
            problems_lead: "Critical issues demanding systemic transformation",
            solutions_title: "The Solution",
            solutions_lead: "How AI-powered cities transform governance and society",
            concepts_title: "Vision Made Real",
            concepts_lead: "Conceptual designs of Ukraine's AI-powered cities",
            features_title: "Smart Infrastructure",
            features_lead: "Integrated systems powering the cities of the future",
            team_title: "Our Team",
            team_lead: "Expert leaders driving Ukraine's urban transformation",
            cta_title_plain: "Ready to build",
            cta_title_accent: "Ukraine's future?",
            cta_lead: "Join us in creating transparent AI-powered cities that transform governance and bring millions of Ukrainians back home.",
        },
    }
}

pub fn hero(language: Language) -> Hero {
    match language {
        Language::Ua => Hero {
            title: "Центр науки інновацій та технологій",
            subtitle: "Міста з ШІ для майбутнього України",
            image_url: "https://images.unsplash.com/photo-1480714378408-67cf0d13bc1b?w=1920&q=80",
            image_alt: "Футуристична візуалізація українського міста, керованого ШІ",
        },
        Language::En => Hero {
            title: "Center for Science, Innovation and Technology",
            subtitle: "AI-Powered Cities for Ukraine's Future",
            image_url: "https://images.unsplash.com/photo-1480714378408-67cf0d13bc1b?w=1920&q=80",
            image_alt: "Futuristic visualization of an AI-powered city in Ukraine",
        },
    }
}

pub fn goals(language: Language) -> Vec<Goal> {
    match language {
        Language::Ua => vec![
            Goal {
                id: "goal-1",
                title: "Трансформувати міське управління",
                description: "Замінити корумповані, неефективні муніципальні системи прозорим, керованим ШІ ухваленням рішень на основі колективного інтелекту та аналітики даних.",
            },
            Goal {
                id: "goal-2",
                title: "Утримати та повернути таланти",
                description: "Створити привабливі високотехнологічні міста, які повернуть мільйони талановитих українців з еміграції, пропонуючи якість життя на рівні розвинених країн.",
            },
            Goal {
                id: "goal-3",
                title: "Побудувати інноваційні екосистеми",
                description: "Сформувати інтегровані мережі, в яких міста з ШІ підтримують навколишній малий і середній бізнес та територіальні громади через трансфер технологій і партнерства.",
            },
            Goal {
                id: "goal-4",
                title: "Випробовувати технології майбутнього",
                description: "Створити полігони для передових систем енергоефективності, поводження з відходами, охорони здоров'я та публічних сервісів на основі ШІ.",
            },
            Goal {
                id: "goal-5",
                title: "Продемонструвати національну трансформацію",
                description: "Довести, що Україна може бути лідером міських інновацій, залучаючи міжнародні інвестиції та встановлюючи нові стандарти публічного управління.",
            },
        ],
        Language::En => vec![
            Goal {
                id: "goal-1",
                title: "Transform Urban Governance",
                description: "Replace corrupt, inefficient municipal systems with transparent, AI-driven decision-making based on collective intelligence and data analytics.",
            },
            Goal {
                id: "goal-2",
                title: "Retain and Attract Talent",
                description: "Create attractive, high-tech cities that bring back millions of talented Ukrainians who emigrated, offering quality of life comparable to developed nations.",
            },
            Goal {
                id: "goal-3",
                title: "Build Innovation Ecosystems",
                description: "Establish integrated networks where AI-powered cities support surrounding SMEs and territorial communities through technology transfer and partnerships.",
            },
            Goal {
                id: "goal-4",
                title: "Pilot Future Technologies",
                description: "Create testing grounds for advanced systems in energy efficiency, waste management, healthcare, and AI-driven public services.",
            },
            Goal {
                id: "goal-5",
                title: "Demonstrate National Transformation",
                description: "Prove that Ukraine can lead in urban innovation, attracting international investment and setting new standards for public governance.",
            },
        ],
    }
}

pub fn problems(language: Language) -> Vec<Problem> {
    match language {
        Language::Ua => vec![
            Problem {
                id: "problem-1",
                title: "Системна корупція",
                description: "Міста старого типу мають структурно корумповані системи, де непрозорі процедури та вертикальні ієрархії уможливлюють зловживання владою і ресурсами.",
            },
            Problem {
                id: "problem-2",
                title: "Масова еміграція",
                description: "За 25 років мільйони талановитих українців виїхали за кращими можливостями, позбавивши країну людського капіталу та майбутніх лідерів.",
            },
            Problem {
                id: "problem-3",
                title: "Застаріла інфраструктура",
                description: "Сучасним містам бракує розумних систем енергетики, транспорту, медицини та муніципальних послуг, що робить їх неефективними і некомфортними.",
            },
            Problem {
                id: "problem-4",
                title: "Ізольовані інноваційні зусилля",
                description: "Малі та середні підприємства не мають доступу до передових технологічних екосистем, що обмежує їхнє зростання та конкурентоспроможність.",
            },
            Problem {
                id: "problem-5",
                title: "Брак міжнародної видимості",
                description: "Українські інноваційні ініціативи залишаються невідомими глобальним інвесторам, партнерам і політикам, обмежуючи доступ до ресурсів та експертизи.",
            },
        ],
        Language::En => vec![
            Problem {
                id: "problem-1",
                title: "Systemic Corruption",
                description: "Old-type cities have structurally corrupt systems where opaque procedures and vertical hierarchies enable abuse of power and resources.",
            },
            Problem {
                id: "problem-2",
                title: "Mass Emigration",
                description: "Over 25 years, millions of talented Ukrainians left for better opportunities abroad, draining the country of its human capital and future leaders.",
            },
            Problem {
                id: "problem-3",
                title: "Outdated Infrastructure",
                description: "Current cities lack modern smart systems for energy, transportation, healthcare, and municipal services, making them inefficient and uncomfortable.",
            },
            Problem {
                id: "problem-4",
                title: "Isolated Innovation Efforts",
                description: "Small and medium enterprises have no access to advanced technology ecosystems, limiting their growth and competitiveness.",
            },
            Problem {
                id: "problem-5",
                title: "Lack of International Visibility",
                description: "Ukrainian innovation initiatives remain unknown to global investors, partners, and policy makers, limiting access to resources and expertise.",
            },
        ],
    }
}

pub fn solutions(language: Language) -> Vec<Solution> {
    match language {
        Language::Ua => vec![
            Solution {
                id: "solution-1",
                title: "Прозоре управління на основі ШІ",
                description: "Автоматизовані процедури та колективний інтелект замінюють традиційні ієрархії. Рішення керуються даними, простежувані та спираються на консенсус експертів у багатьох доменах.",
            },
            Solution {
                id: "solution-2",
                title: "Місто, орієнтоване на людину",
                description: "Чисте довкілля, збережена природа, комфортне житло та баланс роботи і життя. Рутинні завдання автоматизовані, тож мешканці зосереджуються на творчості та самореалізації.",
            },
            Solution {
                id: "solution-3",
                title: "Інтегрована розумна інфраструктура",
                description: "Єдині ІТ-платформи керують фінансами, медициною, безпекою, енергетикою та муніципальними послугами. Big Data і ШІ оптимізують розподіл ресурсів у реальному часі.",
            },
            Solution {
                id: "solution-4",
                title: "Модель економічної екосистеми",
                description: "Міста з ШІ оточені поясами наявних малих і середніх підприємств, які постачають і підтримують інноваційні центри, а центри допомагають розвивати місцевий бізнес.",
            },
            Solution {
                id: "solution-5",
                title: "Платформа досліджень і впровадження",
                description: "Центр працює водночас як дослідницький хаб і практична платформа впровадження: проєктує концепції та будує реальні міста в регіонах України.",
            },
        ],
        Language::En => vec![
            Solution {
                id: "solution-1",
                title: "Transparent AI Governance",
                description: "Automated procedures and collective intelligence replace traditional hierarchies. Decisions are data-driven, traceable, and based on expert consensus across multiple domains.",
            },
            Solution {
                id: "solution-2",
                title: "Human-Centric City Design",
                description: "Clean environment, preserved nature, comfortable housing, and work-life balance. Routine tasks are automated so residents focus on creativity and self-realization.",
            },
            Solution {
                id: "solution-3",
                title: "Integrated Smart Infrastructure",
                description: "Unified IT platforms manage finance, healthcare, security, energy, and municipal services. Big Data and AI optimize resource allocation in real-time.",
            },
            Solution {
                id: "solution-4",
                title: "Economic Ecosystem Model",
                description: "AI-powered cities are surrounded by belts of existing SMEs that supply and support the innovation centers, while the centers help develop local businesses.",
            },
            Solution {
                id: "solution-5",
                title: "R&D and Implementation Platform",
                description: "The Center functions as both research hub and practical implementation platform, designing concepts and building actual cities across Ukrainian regions.",
            },
        ],
    }
}

pub fn city_features(language: Language) -> Vec<CityFeature> {
    match language {
        Language::Ua => vec![
            CityFeature {
                id: "feature-1",
                icon: FeatureIcon::Brain,
                title: "Платформа рішень на ШІ",
                description: "Система колективного інтелекту, в якій визнані експерти аналізують Big Data та ухвалюють прозорі рішення в усіх сферах міста.",
            },
            CityFeature {
                id: "feature-2",
                icon: FeatureIcon::ShieldCheck,
                title: "Антикорупційна архітектура",
                description: "Чіткі фінансові процедури, автоматизовані закупівлі та прозорі бюджети запобігають структурній корупції від самого початку.",
            },
            CityFeature {
                id: "feature-3",
                icon: FeatureIcon::Zap,
                title: "Розумна енергомережа",
                description: "Оптимізовані ШІ відновлювані енергосистеми з балансуванням навантаження, керуванням накопиченням та моніторингом ефективності в реальному часі.",
            },
            CityFeature {
                id: "feature-4",
                icon: FeatureIcon::Activity,
                title: "Інтегрована медицина",
                description: "Пов'язані медичні заклади з ШІ-діагностикою, аналітикою даних пацієнтів та системами превентивної допомоги на основі машинного навчання.",
            },
            CityFeature {
                id: "feature-5",
                icon: FeatureIcon::Database,
                title: "Аналітика Big Data",
                description: "Єдина платформа даних обробляє інформацію з усіх міських систем, щоб виявляти закономірності, передбачати потреби та оптимізувати роботу.",
            },
            CityFeature {
                id: "feature-6",
                icon: FeatureIcon::Wifi,
                title: "Передові комунікації",
                description: "Високошвидкісна інфраструктура зв'язку для IoT-пристроїв, розумних сенсорів та безшовних цифрових сервісів у всьому місті.",
            },
            CityFeature {
                id: "feature-7",
                icon: FeatureIcon::Home,
                title: "Якісне міське планування",
                description: "Дружній до природи дизайн зі збереженням дерев і річок, комфортні публічні простори та житло, оптимізоване під сучасні стандарти життя.",
            },
            CityFeature {
                id: "feature-8",
                icon: FeatureIcon::Users,
                title: "Інтеграція громади",
                description: "Цифрові платформи, що з'єднують мешканців, бізнес і адміністраторів для участі в управлінні та розбудови спільноти.",
            },
        ],
        Language::En => vec![
            CityFeature {
                id: "feature-1",
                icon: FeatureIcon::Brain,
                title: "AI Decision Platform",
                description: "Collective intelligence system where recognized experts analyze Big Data and make transparent decisions across all city domains.",
            },
            CityFeature {
                id: "feature-2",
                icon: FeatureIcon::ShieldCheck,
                title: "Anti-Corruption Architecture",
                description: "Clear financial procedures, automated procurement, and transparent budgets prevent structural corruption from the ground up.",
            },
            CityFeature {
                id: "feature-3",
                icon: FeatureIcon::Zap,
                title: "Smart Energy Grid",
                description: "AI-optimized renewable energy systems with real-time load balancing, storage management, and efficiency monitoring.",
            },
            CityFeature {
                id: "feature-4",
                icon: FeatureIcon::Activity,
                title: "Integrated Healthcare",
                description: "Connected medical facilities with AI diagnostics, patient data analytics, and preventive care systems powered by machine learning.",
            },
            CityFeature {
                id: "feature-5",
                icon: FeatureIcon::Database,
                title: "Big Data Analytics",
                description: "Unified data platform processing information from all city systems to identify patterns, predict needs, and optimize operations.",
            },
            CityFeature {
                id: "feature-6",
                icon: FeatureIcon::Wifi,
                title: "Advanced Communications",
                description: "High-speed connectivity infrastructure supporting IoT devices, smart sensors, and seamless digital services throughout the city.",
            },
            CityFeature {
                id: "feature-7",
                icon: FeatureIcon::Home,
                title: "Quality Urban Planning",
                description: "Nature-friendly design preserving trees and rivers, comfortable public spaces, and housing optimized for modern life-dream standards.",
            },
            CityFeature {
                id: "feature-8",
                icon: FeatureIcon::Users,
                title: "Community Integration",
                description: "Digital platforms connecting residents, businesses, and administrators for participatory governance and community building.",
            },
        ],
    }
}

pub fn visual_concepts(language: Language) -> Vec<VisualConcept> {
    match language {
        Language::Ua => vec![
            VisualConcept {
                id: "concept-1",
                title: "Центр міста з розумною інфраструктурою",
                description: "Вид з висоти на інтегровані зелені зони, сучасну архітектуру та прозорі сонячні панелі на громадських будівлях.",
                image_url: "https://images.unsplash.com/photo-1486325212027-8081e485255e?w=800&q=80",
                image_alt: "3D-візуалізація центру міста з ШІ, парками та розумними будівлями",
            },
            VisualConcept {
                id: "concept-2",
                title: "Інноваційний район і пояс МСБ",
                description: "Інноваційне ядро в оточенні багатофункціональних зон, де співпрацюють місцеві підприємства та дослідницькі установи.",
                image_url: "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?w=800&q=80",
                image_alt: "Схема інноваційного центру в оточенні підтримувальної бізнес-екосистеми",
            },
            VisualConcept {
                id: "concept-3",
                title: "Житлові квартали та якість життя",
                description: "Орієнтовані на людину квартали з пішохідними вулицями, громадськими центрами та інтеграцією природи для комфортного життя.",
                image_url: "https://images.unsplash.com/photo-1518005020951-eccb494ad742?w=800&q=80",
                image_alt: "Сучасний житловий район із зеленими зонами та громадськими просторами",
            },
        ],
        Language::En => vec![
            VisualConcept {
                id: "concept-1",
                title: "City Center with Smart Infrastructure",
                description: "Aerial view showing integrated green spaces, modern architecture, and transparent solar panels on public buildings.",
                image_url: "https://images.unsplash.com/photo-1486325212027-8081e485255e?w=800&q=80",
                image_alt: "3D visualization of AI-powered city center with parks and smart buildings",
            },
            VisualConcept {
                id: "concept-2",
                title: "Innovation District & SME Belt",
                description: "The innovation core surrounded by mixed-use zones where local enterprises and research facilities collaborate.",
                image_url: "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?w=800&q=80",
                image_alt: "Layout showing innovation center surrounded by supporting business ecosystem",
            },
            VisualConcept {
                id: "concept-3",
                title: "Residential Areas & Quality of Life",
                description: "Human-centric neighborhoods with walkable streets, community centers, and nature integration for comfortable living.",
                image_url: "https://images.unsplash.com/photo-1518005020951-eccb494ad742?w=800&q=80",
                image_alt: "Modern residential area with green spaces and community amenities",
            },
        ],
    }
}

pub fn experts(language: Language) -> Vec<VisionExpert> {
    match language {
        Language::Ua => vec![
            VisionExpert {
                id: "expert-1",
                name: "Д-р Олена Коваленко",
                domain: "ШІ та машинне навчання",
                title: "Головна архітекторка ШІ",
                bio: "Провідна дослідниця систем колективного інтелекту та керованого даними управління з понад 15 роками досвіду масштабних впроваджень ШІ.",
                avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&q=80",
            },
            VisionExpert {
                id: "expert-2",
                name: "Микола Шевченко",
                domain: "Міське планування",
                title: "Директор з міського дизайну",
                bio: "Відзначений нагородами урбаніст, що спеціалізується на сталому, орієнтованому на людину розвитку міст та інтеграції розумної інфраструктури.",
                avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&q=80",
            },
            VisionExpert {
                id: "expert-3",
                name: "Д-р Ірина Бондаренко",
                domain: "Енергетичні системи",
                title: "Керівниця енергетичних інновацій",
                bio: "Експертка з відновлюваних енергомереж та оптимізованого ШІ розподілу енергії, авторка патентів у сфері розумного енергоменеджменту.",
                avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&q=80",
            },
            VisionExpert {
                id: "expert-4",
                name: "Андрій Лисенко",
                domain: "Медичні технології",
                title: "Директор медичних систем",
                bio: "Піонер ШІ-діагностики та інтегрованих медичних платформ, раніше працював у провідних європейських інститутах медичних технологій.",
                avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80",
            },
            VisionExpert {
                id: "expert-5",
                name: "Проф. Катерина Марченко",
                domain: "Публічне управління",
                title: "Керівниця з урядування та політики",
                bio: "Фахівчиня з конституційного права та дослідниця антикорупції, зосереджена на прозорих моделях урядування і системах демократичної підзвітності.",
                avatar_url: "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?w=200&q=80",
            },
            VisionExpert {
                id: "expert-6",
                name: "Віктор Ткаченко",
                domain: "ІТ та комунікації",
                title: "Технічний директор",
                bio: "Технологічний стратег з експертизою у масштабних ІТ-платформах, безпеці даних та інтегрованих системах муніципальних сервісів.",
                avatar_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&q=80",
            },
            VisionExpert {
                id: "expert-7",
                name: "Д-р Наталія Петренко",
                domain: "Економіка та розвиток",
                title: "Радниця з економічного розвитку",
                bio: "Економістка розвитку, що спеціалізується на інноваційних екосистемах, інтеграції МСБ та стратегіях регіональної економічної трансформації.",
                avatar_url: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=200&q=80",
            },
        ],
        Language::En => vec![
            VisionExpert {
                id: "expert-1",
                name: "Dr. Olena Kovalenko",
                domain: "AI & Machine Learning",
                title: "Chief AI Architect",
                bio: "Leading researcher in collective intelligence systems and data-driven governance with 15+ years of experience in large-scale AI implementations.",
                avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&q=80",
            },
            VisionExpert {
                id: "expert-2",
                name: "Mykola Shevchenko",
                domain: "Urban Planning",
                title: "Director of Urban Design",
                bio: "Award-winning urban planner specializing in sustainable, human-centric city development and smart infrastructure integration.",
                avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&q=80",
            },
            VisionExpert {
                id: "expert-3",
                name: "Dr. Iryna Bondarenko",
                domain: "Energy Systems",
                title: "Energy Innovation Lead",
                bio: "Expert in renewable energy grids and AI-optimized power distribution with patents in smart energy management systems.",
                avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&q=80",
            },
            VisionExpert {
                id: "expert-4",
                name: "Andriy Lysenko",
                domain: "Healthcare Technology",
                title: "Healthcare Systems Director",
                bio: "Pioneer in AI-driven diagnostics and integrated healthcare platforms, formerly with leading European medical technology institutes.",
                avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80",
            },
            VisionExpert {
                id: "expert-5",
                name: "Prof. Kateryna Marchenko",
                domain: "Public Governance",
                title: "Governance & Policy Lead",
                bio: "Constitutional law expert and anti-corruption researcher focused on transparent governance models and democratic accountability systems.",
                avatar_url: "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?w=200&q=80",
            },
            VisionExpert {
                id: "expert-6",
                name: "Viktor Tkachenko",
                domain: "IT & Communications",
                title: "Chief Technology Officer",
                bio: "Technology strategist with expertise in large-scale IT platforms, data security, and integrated municipal service systems.",
                avatar_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&q=80",
            },
            VisionExpert {
                id: "expert-7",
                name: "Dr. Natalia Petrenko",
                domain: "Economics & Development",
                title: "Economic Development Advisor",
                bio: "Development economist specializing in innovation ecosystems, SME integration, and regional economic transformation strategies.",
                avatar_url: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=200&q=80",
            },
        ],
    }
}

pub fn calls_to_action(language: Language) -> Vec<CallToAction> {
    match language {
        Language::Ua => vec![
            CallToAction {
                id: "cta-investment",
                label: "Інвестиційні можливості",
                description: "Дізнайтеся про шляхи партнерства та фінансування перших українських міст з ШІ",
                variant: CtaVariant::Primary,
                target_section: "investment-opportunity",
            },
            CallToAction {
                id: "cta-contact",
                label: "Зв'язатися з нами",
                description: "Напишіть команді, щоб дізнатися більше, долучитися як експерт або обговорити співпрацю",
                variant: CtaVariant::Secondary,
                target_section: "contact-engagement",
            },
        ],
        Language::En => vec![
            CallToAction {
                id: "cta-investment",
                label: "View Investment Opportunities",
                description: "Explore partnership pathways and funding options for building Ukraine's first AI-powered cities",
                variant: CtaVariant::Primary,
                target_section: "investment-opportunity",
            },
            CallToAction {
                id: "cta-contact",
                label: "Contact Us",
                description: "Connect with our team to learn more, join as an expert, or discuss collaboration",
                variant: CtaVariant::Secondary,
                target_section: "contact-engagement",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::assert_unique_ids;

    #[test]
    fn record_ids_are_unique_in_both_languages() {
        for language in [Language::Ua, Language::En] {
            assert_unique_ids(&goals(language).iter().map(|g| g.id).collect::<Vec<_>>());
            assert_unique_ids(&problems(language).iter().map(|p| p.id).collect::<Vec<_>>());
            assert_unique_ids(&solutions(language).iter().map(|s| s.id).collect::<Vec<_>>());
            assert_unique_ids(
                &city_features(language)
                    .iter()
                    .map(|f| f.id)
                    .collect::<Vec<_>>(),
            );
            assert_unique_ids(
                &visual_concepts(language)
                    .iter()
                    .map(|c| c.id)
                    .collect::<Vec<_>>(),
            );
            assert_unique_ids(&experts(language).iter().map(|e| e.id).collect::<Vec<_>>());
            assert_unique_ids(
                &calls_to_action(language)
                    .iter()
                    .map(|c| c.id)
                    .collect::<Vec<_>>(),
            );
        }
    }

    #[test]
    fn language_variants_keep_table_shapes_aligned() {
        assert_eq!(goals(Language::Ua).len(), goals(Language::En).len());
        assert_eq!(problems(Language::Ua).len(), 5);
        assert_eq!(solutions(Language::Ua).len(), 5);
        assert_eq!(city_features(Language::Ua).len(), 8);
        assert_eq!(visual_concepts(Language::Ua).len(), 3);
        assert_eq!(experts(Language::Ua).len(), 7);
        assert_eq!(calls_to_action(Language::Ua).len(), 2);
    }

    #[test]
    fn cta_targets_are_language_independent() {
        let ua = calls_to_action(Language::Ua);
        let en = calls_to_action(Language::En);
        for (a, b) in ua.iter().zip(en.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.target_section, b.target_section);
            assert_eq!(a.variant, b.variant);
        }
    }
}
