//! Tabbed showcase of Darklang backend building blocks.
//!
//! DESIGN
//! ======
//! Feature metadata and code samples live on `BackendFeature` so the tab strip
//! and the code panel stay in lockstep; the component only tracks which tab
//! is selected.

#[cfg(test)]
#[path = "backend_features_test.rs"]
mod backend_features_test;

use leptos::prelude::*;

use crate::components::section_title::SectionTitle;

/// One selectable backend feature tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendFeature {
    #[default]
    HttpHandler,
    DataStores,
    ScheduledJobs,
    BackgroundWorkers,
}

impl BackendFeature {
    pub const ALL: [Self; 4] = [Self::HttpHandler, Self::DataStores, Self::ScheduledJobs, Self::BackgroundWorkers];

    pub fn label(self) -> &'static str {
        match self {
            Self::HttpHandler => "Http Handler",
            Self::DataStores => "Data stores",
            Self::ScheduledJobs => "Scheduled jobs",
            Self::BackgroundWorkers => "Background workers",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::HttpHandler => "://",
            Self::DataStores => "🗄",
            Self::ScheduledJobs => "⏱",
            Self::BackgroundWorkers => "↻",
        }
    }

    /// The `://` glyph reads as code, so it is set in the monospace face.
    pub fn mono_icon(self) -> bool {
        matches!(self, Self::HttpHandler)
    }

    /// Http handlers come in several verbs; the tab shows a caret for that.
    pub fn has_dropdown(self) -> bool {
        matches!(self, Self::HttpHandler)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::HttpHandler => HTTP_HANDLER_SAMPLE,
            Self::DataStores => DATA_STORES_SAMPLE,
            Self::ScheduledJobs => SCHEDULED_JOBS_SAMPLE,
            Self::BackgroundWorkers => BACKGROUND_WORKERS_SAMPLE,
        }
    }
}

const HTTP_HANDLER_SAMPLE: &str = r#"[<HttpHandler("GET", "/hello")>]
let _handler _req =
  let message = "Hello, World!"
  let body =
    message
  |> Stdlib.String.toBytes

  Stdlib.Http.response body 200L"#;

const DATA_STORES_SAMPLE: &str = r#"[<Model>]
type User = {
  id: UUID
  username: String
  email: String
  createdAt: Date
}

let getUser (id: UUID) : Option<User> =
  DB.findOne<User>("users", { id })

let createUser (username: String) (email: String) : User =
  let user = {
    id = UUID.generate()
    username = username
    email = email
    createdAt = Date.now()
  }
  DB.insert "users" user
  user"#;

const SCHEDULED_JOBS_SAMPLE: &str = r#"[<ScheduledJob(interval = "1 day")>]
let dailyReport () =
  let users = DB.query "SELECT COUNT(*) FROM users"
  let active = DB.query "SELECT COUNT(*) FROM sessions WHERE active = true"

  Email.send {
    to = "admin@example.com"
    subject = "Daily Report"
    body = $"Users: {users}\nActive: {active}"
  }"#;

const BACKGROUND_WORKERS_SAMPLE: &str = r#"[<QueueWorker("image-processing")>]
let processImage (data: { imageId: UUID }) =
  let image = Storage.get data.imageId

  let resized = Image.resize image {
    width = 800
    height = 600
  }

  Storage.put ($"{data.imageId}_thumbnail") resized
  DB.update "images" { id = data.imageId } { status = "processed" }"#;

#[component]
fn FeatureButton(feature: BackendFeature, selected: RwSignal<BackendFeature>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="feature-button"
            class:feature-button--active=move || selected.get() == feature
            on:click=move |_| selected.set(feature)
        >
            <span class="feature-button__icon" class:feature-button__icon--mono=feature.mono_icon()>
                {feature.icon()}
            </span>
            <span class="feature-button__label">{feature.label()}</span>
            <Show when=move || feature.has_dropdown()>
                <span class="feature-button__caret">"▾"</span>
            </Show>
        </button>
    }
}

#[component]
pub fn BackendFeatures() -> impl IntoView {
    let selected = RwSignal::new(BackendFeature::default());

    view! {
        <section class="backend-features">
            <div class="backend-features__inner">
                <SectionTitle subtitle="Darklang Cloud">"Build a complete backend with Darklang"</SectionTitle>
                <p class="backend-features__lead">
                    "Darklang lets you easily develop backend cloud applications. You can build tiny "
                    "applications to connect two services, or large scale applications with tens of "
                    "thousands of users. Code is written in collaboration with AI and is instantly and "
                    "safely deployed on our hosted platform or yours, so you can focus on writing code "
                    "while we handle the rest."
                </p>
                <p class="backend-features__prompt">"You can build any backend that needs:"</p>
                <div class="backend-features__tabs">
                    {BackendFeature::ALL
                        .into_iter()
                        .map(|feature| view! { <FeatureButton feature=feature selected=selected/> })
                        .collect_view()}
                </div>
                <div class="code-window">
                    <div class="code-window__dots">
                        <span class="code-window__dot code-window__dot--purple"></span>
                        <span class="code-window__dot code-window__dot--sand"></span>
                        <span class="code-window__dot code-window__dot--olive"></span>
                    </div>
                    <pre class="code-window__body">
                        <code class="language-fsharp">{move || selected.get().code()}</code>
                    </pre>
                </div>
            </div>
        </section>
    }
}
