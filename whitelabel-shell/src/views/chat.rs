//! Chat page: transcript, composer, and delivery tracking.

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Task, alignment};

use uuid::Uuid;
use whitelabel_model::{BrandingConfig, ChatMessage, DeliveryStatus, Role};

use crate::api::ApiClient;
use crate::theme::{self, BrandPalette};

/// Chat page state.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub input: String,
    pub transcript: Vec<ChatMessage>,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    Delivered(Uuid),
    DeliveryFailed(Uuid, String),
    Resend(Uuid),
}

pub fn update(
    chat: &mut ChatState,
    api: &ApiClient,
    message: Message,
) -> Task<crate::message::Message> {
    match message {
        Message::InputChanged(value) => {
            chat.input = value;
            Task::none()
        }
        Message::Submit => {
            let content = chat.input.trim().to_string();
            if content.is_empty() {
                return Task::none();
            }
            let entry = ChatMessage::user(content.clone());
            let id = entry.id;
            chat.transcript.push(entry);
            chat.input.clear();
            deliver(api, id, content)
        }
        Message::Delivered(id) => {
            set_status(chat, id, DeliveryStatus::Sent);
            Task::none()
        }
        Message::DeliveryFailed(id, error) => {
            log::warn!("chat delivery failed: {error}");
            set_status(chat, id, DeliveryStatus::Error);
            Task::none()
        }
        Message::Resend(id) => {
            let content = chat
                .transcript
                .iter()
                .find(|entry| entry.id == id && entry.status == DeliveryStatus::Error)
                .map(|entry| entry.content.clone());
            match content {
                Some(content) => {
                    set_status(chat, id, DeliveryStatus::Sending);
                    deliver(api, id, content)
                }
                None => Task::none(),
            }
        }
    }
}

fn set_status(chat: &mut ChatState, id: Uuid, status: DeliveryStatus) {
    if let Some(entry) = chat.transcript.iter_mut().find(|entry| entry.id == id) {
        entry.status = status;
    }
}

fn deliver(api: &ApiClient, id: Uuid, content: String) -> Task<crate::message::Message> {
    let api = api.clone();
    Task::perform(
        async move { api.send_chat_message(content).await.map_err(|err| err.to_string()) },
        move |result| {
            crate::message::Message::Chat(match result {
                Ok(()) => Message::Delivered(id),
                Err(error) => Message::DeliveryFailed(id, error),
            })
        },
    )
}

pub fn view<'a>(
    chat: &'a ChatState,
    branding: &'a BrandingConfig,
    palette: &BrandPalette,
) -> Element<'a, Message> {
    let welcome = container(text(&branding.welcome_message).size(16.0))
        .width(Length::Fill)
        .padding(16.0)
        .style(theme::Container::Banner.style(palette));

    let transcript: Element<'a, Message> = if chat.transcript.is_empty() {
        container(
            text("No messages yet. Say hello.")
                .size(14.0)
                .style(theme::text_muted),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(24.0)
        .into()
    } else {
        scrollable(
            column(
                chat.transcript
                    .iter()
                    .map(|entry| bubble(entry, palette)),
            )
            .spacing(8.0)
            .width(Length::Fill)
            .padding([0.0, 4.0]),
        )
        .height(Length::Fill)
        .into()
    };

    let composer = row![
        text_input(&branding.chat_placeholder, &chat.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .padding(10.0)
            .size(14.0)
            .style(theme::input_style(palette)),
        button(text("Send").size(14.0))
            .on_press_maybe((!chat.input.trim().is_empty()).then_some(Message::Submit))
            .padding([10.0, 18.0])
            .style(theme::Button::Primary.style(palette)),
    ]
    .spacing(8.0)
    .align_y(Alignment::Center);

    let mut page = column![welcome].spacing(16.0).height(Length::Fill);

    if !branding.features.real_time_chat {
        page = page.push(
            container(
                text("Live delivery is turned off for this workspace; messages are queued by the server.")
                    .size(13.0),
            )
            .width(Length::Fill)
            .padding(12.0)
            .style(theme::Container::Notice.style(palette)),
        );
    }

    page.push(transcript).push(composer).into()
}

fn bubble<'a>(entry: &'a ChatMessage, palette: &BrandPalette) -> Element<'a, Message> {
    let is_user = entry.role == Role::User;

    let body = container(text(&entry.content).size(14.0))
        .padding([8.0, 12.0])
        .max_width(560.0)
        .style(
            if is_user {
                theme::Container::UserBubble
            } else {
                theme::Container::AssistantBubble
            }
            .style(palette),
        );

    let sent_at = entry
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M");

    let status: Option<Element<'a, Message>> = match entry.status {
        DeliveryStatus::Sending => Some(
            text("sending…")
                .size(11.0)
                .style(theme::text_muted)
                .into(),
        ),
        DeliveryStatus::Sent => Some(
            text(format!("sent · {sent_at}"))
                .size(11.0)
                .style(theme::text_muted)
                .into(),
        ),
        DeliveryStatus::Delivered => Some(
            text(sent_at.to_string())
                .size(11.0)
                .style(theme::text_muted)
                .into(),
        ),
        DeliveryStatus::Error => Some(
            row![
                text("failed").size(11.0).style(theme::text_danger),
                button(text("Retry").size(11.0))
                    .on_press(Message::Resend(entry.id))
                    .padding(0.0)
                    .style(theme::Button::Link.style(palette)),
            ]
            .spacing(6.0)
            .align_y(Alignment::Center)
            .into(),
        ),
    };

    let mut stack = column![body].spacing(2.0).align_x(if is_user {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    });
    if let Some(status) = status {
        stack = stack.push(status);
    }

    container(stack)
        .width(Length::Fill)
        .align_x(if is_user {
            alignment::Horizontal::Right
        } else {
            alignment::Horizontal::Left
        })
        .into()
}
