/// A single feed entry
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Alignment, ContentFit, Element, Length};

use super::theme;
use crate::state::data::Post;

const PHOTO_HEIGHT: f32 = 240.0;

/// Render a post. `on_delete` builds the message that asks the page to
/// remove it; the page shows the loading spinner while that runs.
pub fn view<'a, Message: Clone + 'a>(
    post: &'a Post,
    on_delete: impl Fn(i64) -> Message,
) -> Element<'a, Message> {
    let mut body: Column<'a, Message> = column![].spacing(16);

    if let Some(photo) = &post.photo {
        body = body.push(
            iced::widget::image(Handle::from_path(photo))
                .width(Length::Fill)
                .height(Length::Fixed(PHOTO_HEIGHT))
                .content_fit(ContentFit::Cover),
        );
    }

    let footer = row![
        column![
            text("Enviado por").size(12).color(theme::PRIMARY_40),
            text(post.name.as_str()).size(14).color(theme::PRIMARY_30),
        ]
        .spacing(2),
        horizontal_space(),
        text(post.created_at.format("%d/%m/%Y %H:%M").to_string())
            .size(12)
            .color(theme::PRIMARY_40),
        button(text("Excluir").size(12))
            .on_press(on_delete(post.id))
            .style(theme::link),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    body = body
        .push(text(post.message.as_str()).size(16).color(theme::PRIMARY_30))
        .push(footer);

    container(body)
        .padding(24)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}
