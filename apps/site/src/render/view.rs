//! The application view: a pure function of locale, job entries and social
//! links to the markup inside `<div id="root">`.
//!
//! The tree is split into [`SECTIONS`] so the server can stream it chunk by
//! chunk; concatenating the chunks gives exactly [`render_app`].

use maud::{html, Markup, PreEscaped};

use crate::content::{content, ContentRecord, PHOTO_PATH};
use crate::locale::Locale;
use crate::models::hydration::InitialData;
use crate::models::job::{JobBullet, JobEntry};
use crate::models::social::SocialLink;

/// Load state of the work-history section.
#[derive(Debug, Clone, PartialEq)]
pub enum JobsState {
    Loading,
    Ready(Vec<JobEntry>),
    Failed,
}

#[derive(Debug, Clone)]
pub struct ViewModel {
    pub locale: Locale,
    pub content: &'static ContentRecord,
    pub jobs: JobsState,
    pub social: Vec<SocialLink>,
}

impl ViewModel {
    pub fn new(locale: Locale, jobs: JobsState, social: Vec<SocialLink>) -> Self {
        Self {
            locale,
            content: content(locale),
            jobs,
            social,
        }
    }

    /// Server-side view. Missing job data at this point means the fetch
    /// already failed, so the section shows the failure message.
    pub fn from_initial(data: &InitialData) -> Self {
        let jobs = match &data.jobs {
            Some(jobs) => JobsState::Ready(jobs.clone()),
            None => JobsState::Failed,
        };
        Self::new(data.locale, jobs, data.social.clone().unwrap_or_default())
    }
}

pub type Section = fn(&ViewModel) -> Markup;

/// Streaming order of the view. The first chunk doubles as the shell.
pub const SECTIONS: [Section; 4] = [profile_chunk, work_chunk, details_chunk, footer_chunk];

pub fn render_app(view: &ViewModel) -> Markup {
    html! {
        @for section in SECTIONS {
            (section(view))
        }
    }
}

fn profile_chunk(view: &ViewModel) -> Markup {
    let c = view.content;
    html! {
        (PreEscaped(r#"<div class="container">"#))
        div.profile-banner {
            img.profile-photo-banner src=(PHOTO_PATH) alt=(c.photo_alt);
            div.profile-banner-info {
                div.profile-name { (c.name) }
                div.profile-desc { (c.role) }
                (social_links(view))
                (lang_switcher(view))
            }
        }
        header.desktop-header {
            div.profile-block {
                div.profile-top {
                    div.profile-name { (c.name) }
                    (lang_switcher(view))
                }
                div.profile-desc { (c.role) }
                (social_links(view))
            }
            img.profile-photo src=(PHOTO_PATH) alt=(c.photo_alt);
        }
    }
}

fn work_chunk(view: &ViewModel) -> Markup {
    let c = view.content;
    html! {
        (PreEscaped("<main>"))
        section.section.intro {
            div.specializations {
                @for item in c.specializations {
                    span.specialization { (item) }
                }
            }
        }
        section.section.work-section {
            h2 { (c.headings.work) }
            @match &view.jobs {
                JobsState::Failed => {
                    div.work-detail { (c.messages.work_load_failed) }
                }
                JobsState::Loading => {
                    div.work-detail.loading { (c.messages.work_loading) }
                }
                JobsState::Ready(jobs) => {
                    @for job in jobs {
                        (job_item(job))
                    }
                }
            }
        }
    }
}

fn details_chunk(view: &ViewModel) -> Markup {
    let c = view.content;
    html! {
        section.section {
            h2 { (c.headings.education) }
            ul.edu-list {
                @for item in c.education {
                    li.edu-item {
                        (item.year) ": " strong { (item.school) }
                        br;
                        span.job-meta-dates { (item.field) }
                    }
                }
            }
        }
        section.section {
            h2 { (c.headings.languages) }
            div.personal-info {
                @for language in c.languages {
                    div { (language) }
                }
            }
        }
        section.section {
            h2 { (c.headings.skills) }
            div.skills-list {
                @for skill in c.skills {
                    span.skill { (skill) }
                }
            }
        }
        (PreEscaped("</main>"))
    }
}

fn footer_chunk(view: &ViewModel) -> Markup {
    let footer = &view.content.footer;
    html! {
        div.footer {
            span { (footer.text) }
            a href=(footer.link_href) target="_blank" rel="noopener" { (footer.link_label) }
        }
        (PreEscaped("</div>"))
    }
}

fn social_links(view: &ViewModel) -> Markup {
    html! {
        div.icon-list {
            @for link in &view.social {
                a.icon-link href=(link.href) title=(link.title(view.locale)) target="_blank" rel="noopener" {
                    i class=(link.icon) {}
                }
            }
        }
    }
}

fn lang_switcher(view: &ViewModel) -> Markup {
    html! {
        div.lang-switcher aria-label=(view.content.messages.lang_switcher_label) {
            @for locale in Locale::ALL {
                @let active = locale == view.locale;
                a.lang.active[active]
                    href=(locale.root_path())
                    data-lang=(locale.as_str())
                    aria-current=[active.then_some("page")] {
                    (locale.as_str().to_uppercase())
                }
            }
        }
    }
}

fn job_item(job: &JobEntry) -> Markup {
    html! {
        div.work-item {
            div.job-title { (job.title) }
            div.job-meta {
                span { (job.sector) }
                span.location-tag { (job.location) }
            }
            div.job-meta.job-meta-dates {
                span { (job.dates) }
            }
            div.work-detail {
                @for section in &job.sections {
                    div {
                        @if let Some(heading) = &section.heading {
                            div { (heading) }
                        }
                        ul {
                            @for bullet in &section.bullets {
                                (bullet_item(bullet))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn bullet_item(bullet: &JobBullet) -> Markup {
    html! {
        li {
            (bullet.text())
            @for (i, link) in bullet.links().iter().enumerate() {
                span {
                    (if i == 0 { " " } else { ", " })
                    a href=(link.href) target="_blank" rel="noopener" { (link.label) }
                }
            }
        }
    }
}
