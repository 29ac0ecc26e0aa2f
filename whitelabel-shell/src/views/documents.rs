//! Documents page: processed-document listing and uploads.

use std::path::PathBuf;

use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Task};

use whitelabel_model::{BrandingConfig, DocumentProcessingResult, DocumentSummary};

use crate::api::ApiClient;
use crate::theme::{self, BrandPalette};

/// Documents page state.
#[derive(Debug, Clone, Default)]
pub struct DocumentsState {
    pub listing: Listing,
    pub upload_path: String,
    pub upload_in_flight: bool,
    pub upload_error: Option<String>,
}

impl DocumentsState {
    /// Whether entering the page should trigger a listing fetch.
    pub fn needs_load(&self) -> bool {
        matches!(self.listing, Listing::NotLoaded | Listing::Unavailable(_))
    }
}

/// Listing lifecycle for the documents page.
#[derive(Debug, Clone, Default)]
pub enum Listing {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<DocumentSummary>),
    /// Backend unreachable; the page shows a placeholder instead.
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Listed(Result<Vec<DocumentSummary>, String>),
    UploadPathChanged(String),
    Upload,
    Uploaded {
        name: String,
        result: Result<DocumentProcessingResult, String>,
    },
}

/// Start a listing fetch.
pub fn refresh(
    documents: &mut DocumentsState,
    api: &ApiClient,
) -> Task<crate::message::Message> {
    documents.listing = Listing::Loading;
    let api = api.clone();
    Task::perform(
        async move { api.list_documents().await.map_err(|err| err.to_string()) },
        |result| crate::message::Message::Documents(Message::Listed(result)),
    )
}

pub fn update(
    documents: &mut DocumentsState,
    api: &ApiClient,
    message: Message,
) -> Task<crate::message::Message> {
    match message {
        Message::Refresh => refresh(documents, api),
        Message::Listed(Ok(entries)) => {
            documents.listing = Listing::Loaded(entries);
            Task::none()
        }
        Message::Listed(Err(error)) => {
            log::warn!("document listing unavailable: {error}");
            documents.listing = Listing::Unavailable(error);
            Task::none()
        }
        Message::UploadPathChanged(value) => {
            documents.upload_path = value;
            Task::none()
        }
        Message::Upload => {
            let path = PathBuf::from(documents.upload_path.trim());
            if documents.upload_in_flight || path.as_os_str().is_empty() {
                return Task::none();
            }
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("document")
                .to_string();
            documents.upload_in_flight = true;
            documents.upload_error = None;

            let api = api.clone();
            Task::perform(
                async move { api.upload_document(path).await.map_err(|err| err.to_string()) },
                move |result| {
                    crate::message::Message::Documents(Message::Uploaded {
                        name: name.clone(),
                        result,
                    })
                },
            )
        }
        Message::Uploaded { name, result } => {
            documents.upload_in_flight = false;
            match result {
                Ok(result) if result.success => {
                    documents.upload_path.clear();
                    let summary = DocumentSummary::from_result(name, &result);
                    match &mut documents.listing {
                        Listing::Loaded(entries) => entries.insert(0, summary),
                        listing => *listing = Listing::Loaded(vec![summary]),
                    }
                    Task::none()
                }
                Ok(result) => {
                    let reason = result
                        .error
                        .unwrap_or_else(|| "processing failed".to_string());
                    log::warn!("document processing failed for {name}: {reason}");
                    documents.upload_error = Some(reason);
                    Task::none()
                }
                Err(error) => {
                    log::warn!("document upload failed for {name}: {error}");
                    documents.upload_error = Some(error);
                    Task::none()
                }
            }
        }
    }
}

pub fn view<'a>(
    documents: &'a DocumentsState,
    branding: &'a BrandingConfig,
    palette: &BrandPalette,
) -> Element<'a, Message> {
    let heading = row![
        text("Documents").size(18.0),
        Space::with_width(Length::Fill),
        button(text("Refresh").size(13.0))
            .on_press(Message::Refresh)
            .padding([6.0, 12.0])
            .style(theme::Button::Secondary.style(palette)),
    ]
    .align_y(Alignment::Center);

    let listing: Element<'a, Message> = match &documents.listing {
        Listing::NotLoaded | Listing::Loading => placeholder("Loading documents…"),
        Listing::Unavailable(error) => container(
            column![
                text("The document service is unavailable.").size(14.0),
                text(error).size(12.0),
                button(text("Try again").size(13.0))
                    .on_press(Message::Refresh)
                    .padding([6.0, 12.0])
                    .style(theme::Button::Secondary.style(palette)),
            ]
            .spacing(8.0),
        )
        .width(Length::Fill)
        .padding(16.0)
        .style(theme::Container::Notice.style(palette))
        .into(),
        Listing::Loaded(entries) if entries.is_empty() => {
            placeholder("No documents yet. Upload one to get started.")
        }
        Listing::Loaded(entries) => scrollable(
            column(entries.iter().map(|entry| entry_row(entry, palette)))
                .spacing(8.0)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into(),
    };

    let upload: Element<'a, Message> = if branding.features.file_upload_enabled {
        let ready = !documents.upload_in_flight && !documents.upload_path.trim().is_empty();
        let mut section = column![
            row![
                text_input("Path to a local file", &documents.upload_path)
                    .on_input(Message::UploadPathChanged)
                    .padding(10.0)
                    .size(14.0)
                    .style(theme::input_style(palette)),
                button(
                    text(if documents.upload_in_flight {
                        "Uploading…"
                    } else {
                        "Upload"
                    })
                    .size(14.0)
                )
                .on_press_maybe(ready.then_some(Message::Upload))
                .padding([10.0, 18.0])
                .style(theme::Button::Primary.style(palette)),
            ]
            .spacing(8.0)
            .align_y(Alignment::Center),
        ]
        .spacing(6.0);

        if let Some(error) = &documents.upload_error {
            section = section.push(text(error).size(12.0).style(theme::text_danger));
        }
        section.into()
    } else {
        text("File uploads are disabled for this workspace.")
            .size(13.0)
            .style(theme::text_muted)
            .into()
    };

    column![heading, listing, upload]
        .spacing(16.0)
        .height(Length::Fill)
        .into()
}

fn placeholder<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(14.0).style(theme::text_muted))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(24.0)
        .into()
}

fn entry_row<'a>(entry: &'a DocumentSummary, palette: &BrandPalette) -> Element<'a, Message> {
    let mut meta = Vec::new();
    if let Some(pages) = entry.pages {
        meta.push(format!("{pages} pages"));
    }
    if let Some(chars) = entry.total_chars {
        meta.push(format!("{chars} chars"));
    }
    meta.push(entry.uploaded_at.format("%Y-%m-%d %H:%M").to_string());

    container(
        column![
            text(&entry.name).size(14.0),
            text(meta.join(" · ")).size(12.0).style(theme::text_muted),
        ]
        .spacing(2.0),
    )
    .width(Length::Fill)
    .padding(12.0)
    .style(theme::Container::Card.style(palette))
    .into()
}
