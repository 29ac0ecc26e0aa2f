//! Root application state: the single owner of the active branding.

use iced::Task;
use iced::widget::image;

use whitelabel_model::BrandingConfig;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::message::Message;
use crate::views::chat::ChatState;
use crate::views::documents::DocumentsState;
use crate::views::wizard::WizardState;

/// Which page is currently shown.
///
/// Four logical paths resolve to these three pages; see
/// [`Route::from_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Chat,
    Documents,
    Wizard,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Chat, Route::Documents, Route::Wizard];

    /// Resolve a routing path. `/` and `/chat` both land on the chat
    /// page; unknown paths are not routed.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "/chat" => Some(Route::Chat),
            "/documents" => Some(Route::Documents),
            "/wizard" => Some(Route::Wizard),
            _ => None,
        }
    }

    /// The canonical path for this page.
    pub fn path(self) -> &'static str {
        match self {
            Route::Chat => "/chat",
            Route::Documents => "/documents",
            Route::Wizard => "/wizard",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Chat => "Chat",
            Route::Documents => "Documents",
            Route::Wizard => "Branding",
        }
    }
}

/// Lifecycle of the tenant logo in the header slot.
#[derive(Debug, Clone, Default)]
pub enum LogoState {
    /// No logo URL configured.
    #[default]
    Absent,
    /// Fetch in flight; the placeholder glyph is shown meanwhile.
    Loading,
    Loaded(image::Handle),
    /// Fetch failed; the placeholder glyph stays.
    Failed,
}

/// Root application state.
///
/// Owns the one active [`BrandingConfig`] for the session. Pages receive
/// it as an immutable read; the only write path is
/// [`State::replace_branding`], reachable solely from the wizard arm of
/// [`crate::update::update`].
#[derive(Debug)]
pub struct State {
    pub config: AppConfig,
    pub branding: BrandingConfig,
    pub route: Route,
    pub logo: LogoState,
    pub api: ApiClient,
    pub chat: ChatState,
    pub documents: DocumentsState,
    pub wizard: WizardState,
}

impl State {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let branding = BrandingConfig::default();
        let route = Route::from_path(&config.start_path).unwrap_or_default();
        let api = ApiClient::new(config.server_url.clone());
        let wizard = WizardState::from_branding(&branding);

        let mut state = Self {
            route,
            logo: LogoState::Absent,
            api,
            chat: ChatState::default(),
            documents: DocumentsState::default(),
            wizard,
            branding,
            config,
        };

        let logo = state.refresh_logo();
        let route_entry = crate::update::on_route_entered(&mut state);

        (state, Task::batch([logo, route_entry]))
    }

    /// Replace the active branding configuration wholesale.
    ///
    /// Callers must hand over a complete, validated configuration; there
    /// is no partial-field update. Consumers re-render from the new
    /// instance on the next frame.
    pub(crate) fn replace_branding(&mut self, next: BrandingConfig) -> Task<Message> {
        let logo_changed = next.logo_url() != self.branding.logo_url();
        log::info!(
            "branding replaced: company={:?} primary={}",
            next.company_name,
            next.primary_color
        );
        self.branding = next;

        if logo_changed {
            self.refresh_logo()
        } else {
            Task::none()
        }
    }

    /// Re-resolve the header logo from the active configuration.
    pub(crate) fn refresh_logo(&mut self) -> Task<Message> {
        match self.branding.logo_url() {
            None => {
                self.logo = LogoState::Absent;
                Task::none()
            }
            Some(url) => {
                self.logo = LogoState::Loading;
                let api = self.api.clone();
                let url = url.to_string();
                Task::perform(
                    async move { api.fetch_logo(url).await.map_err(|err| err.to_string()) },
                    Message::LogoFetched,
                )
            }
        }
    }
}
