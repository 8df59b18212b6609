#![allow(dead_code)]

//! Client half of the view layer.
//!
//! [`ClientApp`] is the hydrated application's state: it reuses the data the
//! server embedded in the page, asks for whatever is still missing, and
//! switches locale in place (history push + head update) instead of
//! reloading the page. Navigation and head mutation go through the
//! [`Navigator`] and [`HeadUpdater`] seams.

pub mod head;

pub use head::{apply_head, HeadUpdater, MemoryHead};

use crate::data::{jobs_document, SOCIAL_DOCUMENT};
use crate::locale::Locale;
use crate::models::hydration::InitialData;
use crate::models::job::JobEntry;
use crate::models::social::SocialLink;
use crate::render::head::HeadMetadata;
use crate::render::view::{JobsState, ViewModel};

/// Browser history access.
pub trait Navigator {
    fn push(&mut self, url: &str);
    fn replace(&mut self, url: &str);
}

/// The parts of `window.location` the app routes on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub path: String,
    /// Including the leading `?`, or empty.
    pub search: String,
    /// Including the leading `#`, or empty.
    pub hash: String,
}

impl Location {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Self::default()
        }
    }

    fn with_path(&self, path: &str) -> String {
        format!("{}{}{}", path, self.search, self.hash)
    }
}

/// A data document the client still has to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataRequest {
    Jobs(Locale),
    Social,
}

impl DataRequest {
    pub fn url(&self) -> String {
        match self {
            DataRequest::Jobs(locale) => jobs_document(*locale),
            DataRequest::Social => SOCIAL_DOCUMENT.to_string(),
        }
    }
}

pub struct ClientApp {
    locale: Locale,
    location: Location,
    embedded: Option<InitialData>,
    jobs: JobsState,
    social: Option<Vec<SocialLink>>,
}

impl ClientApp {
    /// Hydrates the app at `location`.
    ///
    /// A path without a known locale redirects (replace) to the browser's
    /// preferred locale; `/{locale}` is normalized to `/{locale}/`.
    pub fn mount(
        mut location: Location,
        embedded: Option<InitialData>,
        browser_languages: &[String],
        nav: &mut dyn Navigator,
        head: &mut dyn HeadUpdater,
    ) -> Self {
        let locale = match Locale::from_path(&location.path) {
            Some(locale) => {
                if location.path == format!("/{locale}") {
                    location.path = locale.root_path().to_string();
                    nav.replace(&location.with_path(locale.root_path()));
                }
                locale
            }
            None => {
                let locale = Locale::from_language_tags(browser_languages);
                location.path = locale.root_path().to_string();
                nav.replace(locale.root_path());
                locale
            }
        };

        let social = embedded.as_ref().and_then(|d| d.social.clone());
        let mut app = Self {
            locale,
            location,
            jobs: JobsState::Loading,
            social,
            embedded,
        };
        app.jobs = app.embedded_jobs().map_or(JobsState::Loading, JobsState::Ready);
        app.refresh_head(head);
        app
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Fetches still outstanding: jobs unless ready for the current locale,
    /// social links unless already known.
    pub fn pending_fetches(&self) -> Vec<DataRequest> {
        let mut pending = Vec::new();
        if self.jobs == JobsState::Loading {
            pending.push(DataRequest::Jobs(self.locale));
        }
        if self.social.is_none() {
            pending.push(DataRequest::Social);
        }
        pending
    }

    /// Records a jobs fetch result; `None` means the fetch failed. Results
    /// for a locale the user has already left are dropped.
    pub fn jobs_loaded(&mut self, locale: Locale, jobs: Option<Vec<JobEntry>>) {
        if locale != self.locale {
            return;
        }
        self.jobs = match jobs {
            Some(jobs) => JobsState::Ready(jobs),
            None => JobsState::Failed,
        };
    }

    /// Records a social fetch result; a failure leaves an empty list.
    /// Structured data is refreshed since `sameAs` comes from these links.
    pub fn social_loaded(&mut self, links: Option<Vec<SocialLink>>, head: &mut dyn HeadUpdater) {
        self.social = Some(links.unwrap_or_default());
        self.refresh_head(head);
    }

    /// Locale-switcher click: history push to the other root, metadata
    /// rewritten in place, job data reused only if the server embedded it
    /// for that locale.
    pub fn switch_locale(
        &mut self,
        next: Locale,
        nav: &mut dyn Navigator,
        head: &mut dyn HeadUpdater,
    ) {
        nav.push(&self.location.with_path(next.root_path()));
        self.location.path = next.root_path().to_string();
        self.locale = next;
        self.jobs = self.embedded_jobs().map_or(JobsState::Loading, JobsState::Ready);
        self.refresh_head(head);
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::new(
            self.locale,
            self.jobs.clone(),
            self.social.clone().unwrap_or_default(),
        )
    }

    fn embedded_jobs(&self) -> Option<Vec<JobEntry>> {
        self.embedded
            .as_ref()
            .filter(|d| d.locale == self.locale)
            .and_then(|d| d.jobs.clone())
    }

    fn refresh_head(&self, head: &mut dyn HeadUpdater) {
        let social = self.social.as_deref().unwrap_or_default();
        apply_head(&HeadMetadata::build(self.locale, social), head);
    }
}
