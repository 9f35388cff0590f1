use super::{PageContext, card_grid, footer, page_frame, paragraphs};
use crate::{
    fl,
    message::{Message, Page},
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    iced_widget::stack,
    theme,
    widget::{button, column, container, icon, row, text},
};
use folio_content::Catalog;
use folio_widgets::image_or_placeholder;

const HERO_HEIGHT: f32 = 480.0;
const PORTRAIT_SIZE: f32 = 360.0;

pub fn view<'a>(ctx: PageContext<'_>) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let profile = &ctx.content.profile;
    let catalog = Catalog::new(ctx.content);

    let hero_image = image_or_placeholder(
        ctx.images.handle_opt(profile.hero_image.as_ref()),
        ContentFit::Cover,
        Length::Fill,
        Length::Fixed(HERO_HEIGHT),
    );

    let hero_text = container(
        column()
            .push(text::title1(profile.hero_title.clone()))
            .push(text::body(profile.hero_subtitle.clone()))
            .push(
                button::suggested(fl!("home-view-portfolio"))
                    .trailing_icon(icon::from_name("go-next-symbolic"))
                    .on_press(Message::Navigate(Page::Projects)),
            )
            .spacing(spacing.space_m)
            .align_x(Alignment::Center)
            .max_width(720.0),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(HERO_HEIGHT));

    let hero = stack![hero_image, hero_text];

    let featured = column()
        .push(text::title2(fl!("home-featured")))
        .push(card_grid(ctx, &catalog.featured()))
        .push(
            container(
                button::standard(fl!("home-all-projects"))
                    .on_press(Message::Navigate(Page::Projects)),
            )
            .center_x(Length::Fill),
        )
        .spacing(spacing.space_l);

    let mut about_text = column()
        .push(text::title2(fl!("home-about")))
        .push(paragraphs(&profile.about))
        .spacing(spacing.space_m);

    if let Some(years) = profile.experience_years {
        about_text = about_text.push(text::caption(fl!("home-experience", years = years)));
    }

    about_text = about_text.push(
        row()
            .push(icon::from_name("mark-location-symbolic").size(16))
            .push(text::caption(ctx.content.contact.availability.clone()))
            .spacing(spacing.space_xxs)
            .align_y(Alignment::Center),
    );

    let about = row()
        .push(image_or_placeholder(
            ctx.images.handle_opt(profile.portrait.as_ref()),
            ContentFit::Cover,
            Length::Fixed(PORTRAIT_SIZE),
            Length::Fixed(PORTRAIT_SIZE),
        ))
        .push(about_text.width(Length::Fill))
        .spacing(spacing.space_xl)
        .align_y(Alignment::Center);

    let call_to_action = column()
        .push(text::title2(fl!("home-work-together")))
        .push(text::body(fl!("home-work-together-body")))
        .push(
            row()
                .push(
                    button::standard(ctx.content.contact.email.clone())
                        .leading_icon(icon::from_name("mail-send-symbolic"))
                        .on_press(Message::Navigate(Page::Contact)),
                )
                .push(
                    button::standard(fl!("home-contact-form"))
                        .on_press(Message::Navigate(Page::Contact)),
                )
                .spacing(spacing.space_s),
        )
        .spacing(spacing.space_m)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    column()
        .push(hero)
        .push(page_frame(
            column()
                .push(featured)
                .push(about)
                .push(call_to_action)
                .push(footer(ctx))
                .spacing(spacing.space_xxl),
        ))
        .width(Length::Fill)
        .into()
}
