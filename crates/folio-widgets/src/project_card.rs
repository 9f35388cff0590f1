use cosmic::{
    Element,
    iced::Length,
    theme,
    widget::{column, container, image::Handle, mouse_area, text},
};
use shared::grid_config::{AspectRatio, ThumbnailFit};

use crate::image_source::{content_fit, image_or_placeholder};

const CARD_ASPECT: AspectRatio = AspectRatio::new(4, 3);

/// Clickable card: a 4:3 cover image over a title and a subtitle line.
pub fn project_card<'a, M: Clone + 'a>(
    cover: Option<Handle>,
    fit: ThumbnailFit,
    title: impl Into<String>,
    subtitle: impl Into<String>,
    width: u32,
    on_press: M,
) -> Element<'a, M> {
    let spacing = theme::active().cosmic().spacing;
    let width = width as f32;
    let image_height = CARD_ASPECT.height_for(width);

    let body = column()
        .push(image_or_placeholder(
            cover,
            content_fit(fit),
            Length::Fixed(width),
            Length::Fixed(image_height),
        ))
        .push(
            column()
                .push(text::heading(title.into()))
                .push(text::caption(subtitle.into()))
                .spacing(spacing.space_xxxs)
                .padding(spacing.space_s),
        )
        .width(Length::Fixed(width));

    mouse_area(container(body).class(theme::Container::Card))
        .on_press(on_press)
        .into()
}
