/// Picked photo preview with a remove affordance
use iced::widget::image::Handle;
use iced::widget::{button, column, mouse_area, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::theme;
use crate::state::data::PhotoFile;

/// Edge of the square preview
pub const PHOTO_SIZE: f32 = 88.0;

/// Clicking the photo picks another one; `trash` adds a remove button.
pub fn view<'a, Message: Clone + 'a>(
    photo: &'a PhotoFile,
    trash: bool,
    on_pick: Message,
    on_remove: Message,
) -> Element<'a, Message> {
    let preview = mouse_area(
        iced::widget::image(Handle::from_path(photo.path()))
            .width(Length::Fixed(PHOTO_SIZE))
            .height(Length::Fixed(PHOTO_SIZE))
            .content_fit(ContentFit::Cover),
    )
    .on_press(on_pick);

    let mut content = column![
        preview,
        text(photo.file_name()).size(12).color(theme::PRIMARY_30),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    if trash {
        content = content.push(
            button(text("Remover").size(12))
                .on_press(on_remove)
                .style(button::danger)
                .padding([4, 10]),
        );
    }

    content.into()
}
