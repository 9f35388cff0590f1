use super::{PageContext, back_button, category_name, footer, page_frame, paragraphs};
use crate::{
    fl,
    gallery::ProjectGallery,
    message::{Message, Page},
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    theme,
    widget::{button, column, container, icon, mouse_area, row, text},
};
use folio_content::Catalog;
use folio_types::Project;
use folio_widgets::{content_fit, image_or_placeholder};

const HERO_HEIGHT: f32 = 520.0;
const SIDEBAR_WIDTH: f32 = 320.0;
const RELATED_LIMIT: usize = 3;
const RELATED_THUMB: f32 = 72.0;

pub fn view<'a>(
    ctx: PageContext<'a>,
    project: &'a Project,
    gallery: &'a ProjectGallery,
) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let meta = row()
        .push(icon::from_name("mark-location-symbolic").size(16))
        .push(text::caption(project.location.as_str()))
        .push(text::caption(project.year.to_string()))
        .push(text::caption(category_name(project.category)))
        .spacing(spacing.space_s)
        .align_y(Alignment::Center);

    let mut main = column();

    // The hero is the primary image; clicking it opens the lightbox there.
    if let Some(open) = gallery.open_primary_message() {
        let hero_image = image_or_placeholder(
            ctx.images.handle_opt(project.main_image.as_ref()),
            content_fit(project.thumbnail_fit),
            Length::Fill,
            Length::Fixed(HERO_HEIGHT),
        );
        main = main.push(mouse_area(hero_image).on_press(open));
    }

    main = main
        .push(text::title3(fl!("project-about")))
        .push(paragraphs(&project.description))
        .spacing(spacing.space_m)
        .width(Length::Fill);

    if gallery.has_thumbnails() {
        main = main
            .push(text::title3(fl!("project-gallery")))
            .push(gallery.view(ctx.images, ctx.config.thumbnail_size.pixels()));
    }

    let body = row()
        .push(main)
        .push(sidebar(ctx, project))
        .spacing(spacing.space_xl);

    page_frame(
        column()
            .push(back_button(fl!("back-projects"), Page::Projects))
            .push(text::title1(project.title.as_str()))
            .push(meta)
            .push(body)
            .push(footer(ctx))
            .spacing(spacing.space_l)
            .width(Length::Fill),
    )
}

fn detail<'a>(label: String, value: String) -> Element<'a, Message> {
    column()
        .push(text::caption_heading(label))
        .push(text::body(value))
        .spacing(2)
        .into()
}

fn sidebar<'a>(ctx: PageContext<'a>, project: &'a Project) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut details = column()
        .push(text::heading(fl!("project-details")))
        .spacing(spacing.space_s);
    if let Some(client) = &project.client {
        details = details.push(detail(fl!("project-client"), client.clone()));
    }
    if let Some(architect) = &project.architect {
        details = details.push(detail(fl!("project-architect"), architect.clone()));
    }
    details = details
        .push(detail(fl!("project-year"), project.year.to_string()))
        .push(detail(fl!("project-location"), project.location.clone()))
        .push(detail(fl!("project-category"), category_name(project.category)));

    let mut sidebar = column()
        .push(container(details).padding(spacing.space_m).class(theme::Container::Card))
        .spacing(spacing.space_m)
        .width(Length::Fixed(SIDEBAR_WIDTH));

    if !project.services.is_empty() {
        let services = project.services.iter().fold(
            column()
                .push(text::heading(fl!("project-services")))
                .spacing(spacing.space_xxs),
            |col, service| col.push(text::body(format!("• {service}"))),
        );
        sidebar = sidebar.push(
            container(services)
                .padding(spacing.space_m)
                .class(theme::Container::Card),
        );
    }

    let related = Catalog::new(ctx.content).related(&project.id, RELATED_LIMIT);
    if !related.is_empty() {
        let list = related.into_iter().fold(
            column()
                .push(text::heading(fl!("project-related")))
                .spacing(spacing.space_xs),
            |col, other| {
                col.push(
                    button::custom(
                        row()
                            .push(image_or_placeholder(
                                ctx.images.handle_opt(other.cover()),
                                ContentFit::Cover,
                                Length::Fixed(RELATED_THUMB),
                                Length::Fixed(RELATED_THUMB),
                            ))
                            .push(
                                column()
                                    .push(text::body(other.title.as_str()))
                                    .push(text::caption(other.location.as_str())),
                            )
                            .spacing(spacing.space_s)
                            .align_y(Alignment::Center),
                    )
                    .class(theme::Button::Text)
                    .width(Length::Fill)
                    .on_press(Message::Navigate(Page::Project(other.id.clone()))),
                )
            },
        );
        sidebar = sidebar.push(list);
    }

    sidebar.into()
}
