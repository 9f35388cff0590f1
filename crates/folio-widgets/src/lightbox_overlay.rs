use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    iced_widget::stack,
    theme,
    widget::{
        Space, button, column, container, horizontal_space, icon, image::Handle, mouse_area, row,
        text, tooltip,
    },
};

use crate::image_source::image_or_placeholder;

/// Full-window viewer for one image of a gallery.
///
/// Renders on top of `base` with a backdrop that closes it when clicked.
pub struct LightboxOverlay<'a, M> {
    base: Element<'a, M>,
    handle: Option<Handle>,
    /// Accessible description of the shown image
    description: Option<String>,
    index: usize,
    total: usize,
    on_close: M,
    on_previous: M,
    on_next: M,
    on_absorb: Option<M>,
    close_label: String,
    previous_label: String,
    next_label: String,
}

impl<'a, M: Clone + 'a> LightboxOverlay<'a, M> {
    /// `index` is the 0-based position in the display sequence.
    pub fn new(
        base: impl Into<Element<'a, M>>,
        handle: Option<Handle>,
        index: usize,
        total: usize,
        on_close: M,
        on_previous: M,
        on_next: M,
    ) -> Self {
        Self {
            base: base.into(),
            handle,
            description: None,
            index,
            total,
            on_close,
            on_previous,
            on_next,
            on_absorb: None,
            close_label: "Close".to_string(),
            previous_label: "Previous image".to_string(),
            next_label: "Next image".to_string(),
        }
    }

    pub fn labels(
        mut self,
        close: impl Into<String>,
        previous: impl Into<String>,
        next: impl Into<String>,
    ) -> Self {
        self.close_label = close.into();
        self.previous_label = previous.into();
        self.next_label = next.into();
        self
    }

    /// Describes the shown image, as a tooltip over it.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Message for clicks on the dialog itself, so they do not reach the
    /// backdrop.
    pub fn on_absorb(mut self, message: M) -> Self {
        self.on_absorb = Some(message);
        self
    }

    pub fn into_element(self) -> Element<'a, M> {
        let spacing = theme::active().cosmic().spacing;

        let nav_button = |name: &'static str, message: M, label: String| {
            container(tooltip(
                button::icon(icon::from_name(name)).on_press(message),
                text::caption(label),
                tooltip::Position::Bottom,
            ))
            .width(Length::Shrink)
            .height(Length::Fill)
            .center_y(Length::Fill)
        };

        let prev_btn = nav_button("go-previous-symbolic", self.on_previous, self.previous_label);
        let next_btn = nav_button("go-next-symbolic", self.on_next, self.next_label);

        let close_btn = tooltip(
            button::icon(icon::from_name("window-close-symbolic"))
                .on_press(self.on_close.clone())
                .padding(spacing.space_xs)
                .class(theme::Button::Destructive),
            text::caption(self.close_label),
            tooltip::Position::Bottom,
        );

        let header = row()
            .push(horizontal_space())
            .push(close_btn)
            .width(Length::Fill)
            .padding(spacing.space_xs);

        let image = image_or_placeholder(self.handle, ContentFit::Contain, Length::Fill, Length::Fill);
        let image: Element<'a, M> = match self.description {
            Some(description) => {
                tooltip(image, text::caption(description), tooltip::Position::Bottom).into()
            }
            None => image,
        };

        let image_area = container(image)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing.space_xs)
            .center(Length::Fill);

        let counter = row()
            .push(horizontal_space())
            .push(text::body(counter_text(self.index, self.total)))
            .push(horizontal_space())
            .width(Length::Fill)
            .padding(spacing.space_xs)
            .align_y(Alignment::Center);

        let content_row = row()
            .push(prev_btn)
            .push(image_area)
            .push(next_btn)
            .width(Length::Fill)
            .height(Length::Fill);

        let dialog = container(
            column()
                .push(header)
                .push(content_row)
                .push(counter)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .class(theme::Container::Dialog);

        let dialog: Element<'a, M> = match self.on_absorb {
            Some(absorb) => mouse_area(dialog).on_press(absorb).into(),
            None => dialog.into(),
        };

        // Outer padding lets the page peek through
        let modal = container(dialog)
            .padding([60, 80])
            .width(Length::Fill)
            .height(Length::Fill);

        let backdrop = mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .class(theme::Container::Transparent),
        )
        .on_press(self.on_close);

        stack![self.base, backdrop, modal].into()
    }
}

impl<'a, M: Clone + 'a> From<LightboxOverlay<'a, M>> for Element<'a, M> {
    fn from(overlay: LightboxOverlay<'a, M>) -> Self {
        overlay.into_element()
    }
}

/// Constructor function
pub fn lightbox_overlay<'a, M: Clone + 'a>(
    base: impl Into<Element<'a, M>>,
    handle: Option<Handle>,
    (index, total): (usize, usize),
    on_close: M,
    on_previous: M,
    on_next: M,
) -> LightboxOverlay<'a, M> {
    LightboxOverlay::new(base, handle, index, total, on_close, on_previous, on_next)
}

fn counter_text(index: usize, total: usize) -> String {
    shared::screen_reader_labels::counter_label(index, total)
}
