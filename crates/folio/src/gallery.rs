//! Project gallery: the thumbnail grid of one project plus its lightbox.
//!
//! The gallery exists only while a project page is shown. Dropping it drops
//! the lightbox and with it any scroll lock it holds.

use crate::{
    fl,
    images::ImageStore,
    key_binds,
    message::Message,
};
use cosmic::{Element, iced::Subscription};
use folio_lightbox::{Lightbox, LightboxControl, LightboxKey, ScrollLock};
use folio_types::{ImageRef, Project};
use folio_widgets::{GridItem, lightbox_overlay, thumbnail_grid};
use shared::{grid_config::GridConfiguration, screen_reader_labels::image_label};

#[derive(Debug, Clone)]
pub enum GalleryMessage {
    /// Thumbnail index
    OpenAt(usize),
    OpenPrimary,
    Close,
    Navigate(isize),
    Key(LightboxKey),
    /// Click inside the open dialog
    Absorb,
}

#[derive(Debug)]
pub struct ProjectGallery {
    project_id: String,
    title: String,
    grid: GridConfiguration,
    lightbox: Lightbox,
}

impl ProjectGallery {
    pub fn new(project: &Project, grid: GridConfiguration, scroll_lock: ScrollLock) -> Self {
        Self {
            project_id: project.id.clone(),
            title: project.title.clone(),
            grid: grid.with_fit(project.thumbnail_fit),
            lightbox: Lightbox::new(project.image_set(), scroll_lock),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_open()
    }

    pub fn has_thumbnails(&self) -> bool {
        self.lightbox.images().thumbnail_count() > 0
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.grid.columns = columns;
    }

    /// Handle for parents that open or steer the lightbox.
    pub fn control(&mut self) -> &mut dyn LightboxControl {
        &mut self.lightbox
    }

    /// Message that opens the lightbox at the primary image, for the page
    /// hero. `None` when there is no primary image.
    pub fn open_primary_message(&self) -> Option<Message> {
        self.lightbox
            .images()
            .has_primary()
            .then_some(Message::Gallery(GalleryMessage::OpenPrimary))
    }

    pub fn update(&mut self, message: GalleryMessage) {
        match message {
            GalleryMessage::OpenAt(idx) => {
                self.lightbox.open_at(idx);
            }
            GalleryMessage::OpenPrimary => {
                self.control().open_primary();
            }
            GalleryMessage::Close => self.control().close(),
            GalleryMessage::Navigate(delta) => self.control().navigate(delta),
            GalleryMessage::Key(key) => {
                self.lightbox.handle_key(key);
            }
            GalleryMessage::Absorb => {}
        }
    }

    /// Arrow and Escape keys, only while the lightbox is open.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_open() {
            cosmic::iced::keyboard::on_key_press(key_binds::lightbox_key_press_handler)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self, images: &ImageStore, cell_width: u32) -> Element<'_, Message> {
        let items = self
            .lightbox
            .images()
            .thumbnails()
            .iter()
            .enumerate()
            .map(|(idx, image)| GridItem::new(images.handle(image), image_label(&self.title, idx)))
            .collect();

        thumbnail_grid(items)
            .config(self.grid)
            .cell_width(cell_width)
            .on_activate(|idx| Message::Gallery(GalleryMessage::OpenAt(idx)))
            .into_element()
    }

    /// `page` with the lightbox on top while open; `page` unchanged otherwise.
    pub fn overlay<'a>(&self, page: Element<'a, Message>, images: &ImageStore) -> Element<'a, Message> {
        let (Some(index), Some(image), Some(description)) = (
            self.lightbox.selected_index(),
            self.current(),
            self.current_label(),
        ) else {
            return page;
        };

        lightbox_overlay(
            page,
            images.handle(image),
            (index, self.lightbox.total()),
            Message::Gallery(GalleryMessage::Close),
            Message::Gallery(GalleryMessage::Navigate(-1)),
            Message::Gallery(GalleryMessage::Navigate(1)),
        )
        .labels(
            fl!("lightbox-close"),
            fl!("lightbox-previous"),
            fl!("lightbox-next"),
        )
        .description(description)
        .on_absorb(Message::Gallery(GalleryMessage::Absorb))
        .into_element()
    }

    pub fn current(&self) -> Option<&ImageRef> {
        self.lightbox.current()
    }

    /// Description of the image shown in the lightbox.
    pub fn current_label(&self) -> Option<String> {
        self.lightbox
            .selected_index()
            .map(|index| image_label(&self.title, index))
    }
}
