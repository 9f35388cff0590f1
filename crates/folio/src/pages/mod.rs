//! The four portfolio pages. Each `view` returns the page body; the app
//! decides whether it scrolls.

pub mod contact;
pub mod home;
pub mod project;
pub mod projects;

use crate::{
    fl,
    images::ImageStore,
    message::{Message, Page},
};
use chrono::Datelike;
use cosmic::{
    Element,
    iced::{Alignment, Length},
    theme,
    widget::{button, column, container, divider, horizontal_space, icon, row, text},
};
use folio_config::FolioConfig;
use folio_types::{Category, Project, ProjectSort, SiteContent};
use folio_widgets::{project_card, thumbnail_grid::row_ranges};

pub const CARD_WIDTH: u32 = 300;
const CARD_COLUMNS: usize = 3;

/// What every page reads from the app.
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub content: &'a SiteContent,
    pub images: &'a ImageStore,
    pub config: &'a FolioConfig,
}

pub fn category_name(category: Category) -> String {
    match category {
        Category::Residential => fl!("category-residential"),
        Category::Commercial => fl!("category-commercial"),
        Category::Cultural => fl!("category-cultural"),
        Category::Public => fl!("category-public"),
        Category::Urban => fl!("category-urban"),
        Category::Other => fl!("category-other"),
    }
}

pub fn sort_name(sort: ProjectSort) -> String {
    match sort {
        ProjectSort::Newest => fl!("sort-newest"),
        ProjectSort::Oldest => fl!("sort-oldest"),
        ProjectSort::TitleAsc => fl!("sort-title-asc"),
        ProjectSort::TitleDesc => fl!("sort-title-desc"),
    }
}

fn back_button<'a>(label: String, page: Page) -> Element<'a, Message> {
    button::text(label)
        .leading_icon(icon::from_name("go-previous-symbolic"))
        .on_press(Message::Navigate(page))
        .into()
}

fn card<'a>(ctx: PageContext<'_>, project: &Project) -> Element<'a, Message> {
    project_card(
        ctx.images.handle_opt(project.cover()),
        project.thumbnail_fit,
        project.title.clone(),
        project.location.clone(),
        CARD_WIDTH,
        Message::Navigate(Page::Project(project.id.clone())),
    )
}

/// Project cards, three to a row.
fn card_grid<'a>(ctx: PageContext<'_>, projects: &[&Project]) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let mut grid = column().spacing(spacing.space_l);

    for range in row_ranges(projects.len(), CARD_COLUMNS) {
        let cards = projects[range]
            .iter()
            .fold(row().spacing(spacing.space_l), |r, project| {
                r.push(card(ctx, project))
            });
        grid = grid.push(cards);
    }

    grid.into()
}

fn paragraphs<'a>(lines: &[String]) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    lines
        .iter()
        .fold(column().spacing(spacing.space_s), |col, line| {
            col.push(text::body(line.clone()))
        })
        .into()
}

fn footer<'a>(ctx: PageContext<'_>) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let year = chrono::Local::now().year();
    let name = ctx.content.profile.name.clone();

    column()
        .push(divider::horizontal::default())
        .push(
            row()
                .push(icon::from_name("camera-photo-symbolic").size(20))
                .push(text::heading(ctx.content.profile.tagline.clone()))
                .push(horizontal_space())
                .push(text::caption(fl!("footer-rights", year = year, name = name)))
                .spacing(spacing.space_xs)
                .align_y(Alignment::Center)
                .padding([spacing.space_m, 0]),
        )
        .width(Length::Fill)
        .into()
}

/// Centers page content at a readable width.
fn page_frame<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    container(
        container(content)
            .max_width(1200.0)
            .padding([spacing.space_l, spacing.space_xl]),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}
