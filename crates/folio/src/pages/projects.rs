use super::{PageContext, back_button, card_grid, category_name, footer, page_frame, sort_name};
use crate::{
    fl,
    message::{Message, Page, SettingsMessage},
};
use cosmic::{
    Element,
    iced::{Alignment, Length},
    theme,
    widget::{column, dropdown, horizontal_space, row, text},
};
use folio_content::{Catalog, CategoryFilter};
use folio_types::ProjectSort;

/// Position of `filter` in the category dropdown, where 0 is "All".
fn filter_position(filter: CategoryFilter, categories: &[folio_types::Category]) -> Option<usize> {
    match filter {
        CategoryFilter::All => Some(0),
        CategoryFilter::Only(category) => categories
            .iter()
            .position(|c| *c == category)
            .map(|idx| idx + 1),
    }
}

pub fn view<'a>(ctx: PageContext<'_>, filter: CategoryFilter) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let catalog = Catalog::new(ctx.content);
    let sort = ctx.config.project_sort;
    let categories = catalog.categories();

    let category_labels: Vec<String> = std::iter::once(fl!("category-all"))
        .chain(categories.iter().copied().map(category_name))
        .collect();
    let selected_category = filter_position(filter, &categories);

    let category_picker = dropdown(category_labels, selected_category, move |idx| {
        let filter = idx
            .checked_sub(1)
            .and_then(|idx| categories.get(idx).copied())
            .map_or(CategoryFilter::All, CategoryFilter::Only);
        Message::FilterCategory(filter)
    });

    let sort_picker = dropdown(
        ProjectSort::ALL
            .iter()
            .copied()
            .map(sort_name)
            .collect::<Vec<_>>(),
        ProjectSort::ALL.iter().position(|s| *s == sort),
        |idx| Message::Settings(SettingsMessage::ProjectSort(ProjectSort::ALL[idx])),
    );

    let toolbar = row()
        .push(text::title1(fl!("projects-title")))
        .push(horizontal_space())
        .push(text::caption(fl!("projects-category")))
        .push(category_picker)
        .push(text::caption(fl!("projects-sort")))
        .push(sort_picker)
        .spacing(spacing.space_s)
        .align_y(Alignment::Center);

    let listing = catalog.listing(filter, sort);
    let body: Element<'a, Message> = if listing.is_empty() {
        text::body(fl!("projects-empty")).into()
    } else {
        card_grid(ctx, &listing)
    };

    page_frame(
        column()
            .push(back_button(fl!("back-home"), Page::Home))
            .push(toolbar)
            .push(text::caption(fl!("projects-count", count = listing.len())))
            .push(body)
            .push(footer(ctx))
            .spacing(spacing.space_l)
            .width(Length::Fill),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Category;

    #[test]
    fn test_filter_position_offsets_past_all() {
        let categories = [Category::Residential, Category::Urban];

        assert_eq!(filter_position(CategoryFilter::All, &categories), Some(0));
        assert_eq!(
            filter_position(CategoryFilter::Only(Category::Urban), &categories),
            Some(2)
        );
        assert_eq!(
            filter_position(CategoryFilter::Only(Category::Cultural), &categories),
            None
        );
    }
}
