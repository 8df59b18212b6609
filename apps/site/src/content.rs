//! Static profile content, one record per locale. Read-only for the life of
//! the process.

use crate::locale::Locale;

/// Base URL used for alternate-locale links.
pub const SITE_URL: &str = "https://roman.stolyarch.uk";

pub const PHOTO_PATH: &str = "/assets/photo.png";

#[derive(Debug)]
pub struct ContentRecord {
    pub html_lang: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub photo_alt: &'static str,
    pub specializations: &'static [&'static str],
    pub headings: Headings,
    pub education: &'static [EducationItem],
    pub languages: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub footer: Footer,
    pub messages: Messages,
    pub meta: MetaContent,
}

#[derive(Debug)]
pub struct Headings {
    pub work: &'static str,
    pub education: &'static str,
    pub languages: &'static str,
    pub skills: &'static str,
}

#[derive(Debug)]
pub struct EducationItem {
    pub year: &'static str,
    pub school: &'static str,
    pub field: &'static str,
}

#[derive(Debug)]
pub struct Footer {
    pub text: &'static str,
    pub link_label: &'static str,
    pub link_href: &'static str,
}

/// Status strings for sections backed by fetched data.
#[derive(Debug)]
pub struct Messages {
    pub work_loading: &'static str,
    pub work_load_failed: &'static str,
    pub lang_switcher_label: &'static str,
}

#[derive(Debug)]
pub struct MetaContent {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub og_url: &'static str,
    pub canonical: &'static str,
    pub twitter_description: &'static str,
    pub og_image: &'static str,
}

pub fn content(locale: Locale) -> &'static ContentRecord {
    match locale {
        Locale::En => &EN,
        Locale::Ru => &RU,
    }
}

static EN: ContentRecord = ContentRecord {
    html_lang: "en",
    name: "Roman Stolyarchuk",
    role: "IT Engineer",
    photo_alt: "Roman Stolyarchuk photo",
    specializations: &[
        "C/C++ Software Developer",
        "LLM R&D Engineer",
        "IT R&D Engineer",
    ],
    headings: Headings {
        work: "Work Experience",
        education: "Education",
        languages: "Languages",
        skills: "Skills",
    },
    education: &[
        EducationItem {
            year: "2009",
            school: "Moscow Technical University of Communications and Informatics",
            field: "Information Systems and Technologies",
        },
        EducationItem {
            year: "2005",
            school: "Moscow Power Engineering Institute",
            field: "Nuclear Power Plants and Installations",
        },
    ],
    languages: &["Russian - Native", "English - C1 - Advanced"],
    skills: &[
        "C/C++",
        "Linux",
        "TCP/IP",
        "VoIP",
        "STL",
        "Linux Server Administration",
        "Network Equipment Administration",
        "Python",
        "PostgreSQL",
        "ROS",
        "Boost",
        "Qt",
        "gRPC",
        "OOP",
        "SQL",
        "Git",
        "OpenCV",
        "CI/CD",
        "Gitlab",
        "CMake",
        "Information Security",
    ],
    footer: Footer {
        text: "© 2004-2026 Roman Stolyarchuk. All rights reserved.",
        link_label: "roman.stolyarch.uk",
        link_href: SITE_URL,
    },
    messages: Messages {
        work_loading: "Loading work experience…",
        work_load_failed: "Failed to load work experience.",
        lang_switcher_label: "Language switcher",
    },
    meta: MetaContent {
        title: "Roman Stolyarchuk — C++/Python Software Engineer | CV",
        description: "C++/Python Software Engineer focused on systems, AI, and backend development.",
        keywords: "C++, C++ developer, Python, software engineer, IT engineer, backend, systems, AI",
        og_url: "https://roman.stolyarch.uk/en/",
        canonical: "https://roman.stolyarch.uk/en/",
        twitter_description: "C++/Python Software Engineer",
        og_image: "https://roman.stolyarch.uk/assets/photo.png",
    },
};

static RU: ContentRecord = ContentRecord {
    html_lang: "ru",
    name: "Роман Столярчук",
    role: "IT-инженер",
    photo_alt: "Фото Романа Столярчука",
    specializations: &[
        "C/C++ Разработчик",
        "Инженер R&D по LLM",
        "Инженер R&D (IT)",
    ],
    headings: Headings {
        work: "Опыт работы",
        education: "Образование",
        languages: "Языки",
        skills: "Навыки",
    },
    education: &[
        EducationItem {
            year: "2009",
            school: "Московский технический университет связи и информатики",
            field: "Информационные системы и технологии",
        },
        EducationItem {
            year: "2005",
            school: "Московский энергетический институт",
            field: "Атомные станции и установки",
        },
    ],
    languages: &["Русский — родной", "Английский — C1 (высокий)"],
    skills: &[
        "C/C++",
        "Linux",
        "TCP/IP",
        "VoIP",
        "STL",
        "Администрирование Linux-серверов",
        "Администрирование сетевого оборудования",
        "Python",
        "PostgreSQL",
        "ROS",
        "Boost",
        "Qt",
        "gRPC",
        "ООП",
        "SQL",
        "Git",
        "OpenCV",
        "CI/CD",
        "Gitlab",
        "CMake",
        "Информационная безопасность",
    ],
    footer: Footer {
        text: "© 2004–2026 Роман Столярчук. Все права защищены.",
        link_label: "roman.stolyarch.uk",
        link_href: SITE_URL,
    },
    messages: Messages {
        work_loading: "Загрузка опыта работы…",
        work_load_failed: "Не удалось загрузить опыт работы.",
        lang_switcher_label: "Переключатель языка",
    },
    meta: MetaContent {
        title: "Роман Столярчук — C++/Python разработчик | Резюме",
        description: "C++/Python разработчик: системы, backend и ИИ-решения.",
        keywords: "C++, C++ разработчик, Python, инженер, IT, backend, системы, ИИ",
        og_url: "https://roman.stolyarch.uk/ru/",
        canonical: "https://roman.stolyarch.uk/ru/",
        twitter_description: "C++/Python разработчик",
        og_image: "https://roman.stolyarch.uk/assets/photo.png",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_a_record() {
        for locale in Locale::ALL {
            let record = content(locale);
            assert_eq!(record.html_lang, locale.as_str());
            assert!(record.meta.canonical.ends_with(locale.root_path()));
            assert!(!record.name.is_empty());
        }
    }

    #[test]
    fn test_parallel_lists_have_same_shape() {
        let (en, ru) = (content(Locale::En), content(Locale::Ru));
        assert_eq!(en.education.len(), ru.education.len());
        assert_eq!(en.skills.len(), ru.skills.len());
        assert_eq!(en.specializations.len(), ru.specializations.len());
        for (a, b) in en.education.iter().zip(ru.education) {
            assert_eq!(a.year, b.year);
        }
    }
}
