//! Main app state

use crate::{
    fl,
    gallery::ProjectGallery,
    images::ImageStore,
    key_binds::{self, MenuAction},
    menu::menu_bar,
    message::{ContextPage, Message, Page, SettingsMessage},
    pages::{self, PageContext, contact::ContactForm},
    watcher::{self, WatcherEvent},
};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    app::context_drawer,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::{Length, Subscription},
    iced_widget::{scrollable, toggler},
    task::future,
    theme,
    widget::{
        Id, button, column, container, dropdown, menu::key_bind::KeyBind, radio, row,
        settings, spin_button, text,
    },
};
use folio_config::{
    AppTheme, FolioConfig, MAX_GRID_COLUMNS, MIN_GRID_COLUMNS, ThumbnailSize,
};
use folio_content::{Catalog, CategoryFilter, ContentRoot, Feed};
use folio_lightbox::ScrollLock;
use folio_types::{ProjectSort, SiteContent};
use rfd::AsyncFileDialog;
use shared::{LoadingEvent, LoadingState};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

const PAGE_SCROLL_ID: &str = "page-scroll";

pub struct Folio {
    core: Core,
    config: FolioConfig,
    config_handler: Option<Config>,
    key_binds: HashMap<KeyBind, MenuAction>,
    feed: Feed,
    images: ImageStore,
    loading: LoadingState,
    page: Page,
    /// Mounted only while a project page is shown
    gallery: Option<ProjectGallery>,
    scroll_lock: ScrollLock,
    /// Last offset reported by the page scrollable
    scroll_offset: scrollable::AbsoluteOffset,
    category_filter: CategoryFilter,
    contact_form: ContactForm,
    context_page: Option<ContextPage>,
}

/// Maps a requested page onto the content. Project ids that do not exist
/// resolve to the first project; with no projects at all the listing is
/// shown instead.
fn resolve_page(content: &SiteContent, page: Page) -> Page {
    match page {
        Page::Project(id) => match Catalog::new(content).project_or_first(&id) {
            Some(project) => Page::Project(project.id.clone()),
            None => Page::Projects,
        },
        page => page,
    }
}

fn builtin_feed() -> (Feed, LoadingState) {
    match Feed::builtin() {
        Ok(feed) => (feed, LoadingState::Ready),
        Err(err) => {
            tracing::error!("bundled content is invalid: {err}");
            let feed = Feed {
                content: SiteContent::default(),
                root: ContentRoot::builtin(),
                path: None,
            };
            (feed, LoadingState::Error(err.to_string()))
        }
    }
}

/// Applies a retry request from the status banner. Returns the new state and
/// the file to fetch again; only a failed file-backed feed is retried.
fn retry_load(loading: LoadingState, path: Option<&Path>) -> (LoadingState, Option<PathBuf>) {
    match path {
        Some(path) if loading.can_retry() => (
            LoadingEvent::RetryRequested.apply_to_state(loading),
            Some(path.to_path_buf()),
        ),
        _ => (loading, None),
    }
}

fn fetch_feed(path: PathBuf) -> Task<Action<Message>> {
    future(async move {
        let result = folio_content::load_feed(path)
            .await
            .map_err(|err| Arc::new(err.to_string()));
        Message::ContentLoaded(result)
    })
}

impl Folio {
    fn page_scroll_id() -> Id {
        Id::new(PAGE_SCROLL_ID)
    }

    fn save_config(&self) {
        if let Some(ref handler) = self.config_handler
            && let Err(err) = self.config.write_entry(handler)
        {
            tracing::warn!("failed to save config: {err}");
        }
    }

    fn page_context(&self) -> PageContext<'_> {
        PageContext {
            content: &self.feed.content,
            images: &self.images,
            config: &self.config,
        }
    }

    fn load_content(&mut self, path: PathBuf) -> Task<Action<Message>> {
        self.loading =
            LoadingEvent::StartLoading.apply_to_state(std::mem::take(&mut self.loading));
        fetch_feed(path)
    }

    fn retry(&mut self) -> Task<Action<Message>> {
        let (loading, path) = retry_load(std::mem::take(&mut self.loading), self.feed.path.as_deref());
        self.loading = loading;

        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "retrying content load");
                fetch_feed(path)
            }
            None => Task::none(),
        }
    }

    fn reload(&mut self) -> Task<Action<Message>> {
        match self.feed.path.clone() {
            Some(path) => self.load_content(path),
            None => {
                self.use_builtin();
                self.update_title()
            }
        }
    }

    fn use_builtin(&mut self) {
        let (feed, loading) = builtin_feed();
        self.set_feed(feed);
        self.loading = loading;
        self.config.content_path = None;
        self.save_config();
    }

    fn set_feed(&mut self, feed: Feed) {
        self.images = ImageStore::for_feed(&feed);
        self.feed = feed;
        // Project ids may be gone or point at different images.
        self.show_page(self.page.clone());
    }

    /// Switches page, mounting the project gallery when the page has one.
    /// Leaving a project page drops its gallery and with it any open
    /// lightbox.
    fn show_page(&mut self, page: Page) {
        let page = resolve_page(&self.feed.content, page);
        self.gallery = None;

        if let Page::Project(id) = &page
            && let Some(project) = Catalog::new(&self.feed.content).project(id)
        {
            self.gallery = Some(ProjectGallery::new(
                project,
                self.config.grid(),
                self.scroll_lock.clone(),
            ));
        }

        tracing::debug!(?page, "showing page");
        self.page = page;
    }

    fn scroll_to(&self, offset: scrollable::AbsoluteOffset) -> Task<Action<Message>> {
        scrollable::scroll_to(Self::page_scroll_id(), offset)
    }

    fn update_title(&mut self) -> Task<Action<Message>> {
        let page_title = match &self.page {
            Page::Home => None,
            Page::Projects => Some(fl!("projects-title")),
            Page::Project(id) => Catalog::new(&self.feed.content)
                .project(id)
                .map(|project| project.title.clone()),
            Page::Contact => Some(fl!("contact-title")),
        };

        let title = match page_title {
            Some(page_title) => format!("{page_title} - {}", fl!("app-title")),
            None => fl!("app-title"),
        };

        let Some(id) = self.core.main_window_id() else {
            return Task::none();
        };
        self.set_window_title(title, id)
    }

    fn status_banner(&self) -> Option<Element<'_, Message>> {
        let spacing = theme::active().cosmic().spacing;

        if self.loading.is_ready() {
            return None;
        }

        let banner: Element<'_, Message> = match self.loading.error_message() {
            None => text::caption(fl!("content-loading")).into(),
            Some(err) => {
                let mut banner = row()
                    .push(text::body(fl!("content-error", error = err)))
                    .spacing(spacing.space_s);
                if self.loading.can_retry() && self.feed.path.is_some() {
                    banner = banner
                        .push(button::text(fl!("content-retry")).on_press(Message::RetryContent));
                }
                banner.into()
            }
        };

        Some(
            container(banner)
                .padding([spacing.space_xs, spacing.space_m])
                .width(Length::Fill)
                .class(theme::Container::Card)
                .into(),
        )
    }

    fn page_view(&self) -> Element<'_, Message> {
        let ctx = self.page_context();

        match &self.page {
            Page::Home => pages::home::view(ctx),
            Page::Projects => pages::projects::view(ctx, self.category_filter),
            Page::Project(id) => {
                let project = Catalog::new(&self.feed.content).project(id);
                match (project, &self.gallery) {
                    (Some(project), Some(gallery)) => pages::project::view(ctx, project, gallery),
                    _ => pages::projects::view(ctx, self.category_filter),
                }
            }
            Page::Contact => pages::contact::view(ctx, &self.contact_form),
        }
    }
}

impl Application for Folio {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = folio_config::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let mut tasks = vec![];

        let (config, config_handler) = match folio_config::config() {
            Ok(handler) => {
                let config = match FolioConfig::get_entry(&handler) {
                    Ok(c) => c,
                    Err((errs, c)) => {
                        tracing::warn!(?errs, "config has invalid entries, using defaults for them");
                        c
                    }
                };
                (config, Some(handler))
            }
            Err(err) => {
                tracing::warn!("config unavailable: {err}");
                (FolioConfig::default(), None)
            }
        };

        let (feed, loading) = builtin_feed();

        let mut app = Self {
            core,
            config,
            config_handler,
            key_binds: key_binds::init_key_binds(),
            images: ImageStore::for_feed(&feed),
            feed,
            loading,
            page: Page::Home,
            gallery: None,
            scroll_lock: ScrollLock::new(),
            scroll_offset: scrollable::AbsoluteOffset::default(),
            category_filter: CategoryFilter::All,
            contact_form: ContactForm::default(),
            context_page: None,
        };

        let startup_path = flags.or_else(|| app.config.startup_content().map(PathBuf::from));

        tasks.push(cosmic::command::set_theme(
            app.config.app_theme.to_cosmic_theme(),
        ));
        tasks.push(app.update_title());

        if let Some(path) = startup_path {
            tasks.push(app.load_content(path));
        }

        (app, Task::batch(tasks))
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![menu_bar(
            &self.core,
            &self.key_binds,
            &self.config.recent_content,
        )]
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let mut body = column();
        if let Some(banner) = self.status_banner() {
            body = body.push(banner);
        }
        let body = body.push(self.page_view()).width(Length::Fill);

        let page: Element<'_, Message> = cosmic::widget::scrollable(body)
            .id(Self::page_scroll_id())
            .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset()))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match &self.gallery {
            Some(gallery) => gallery.overlay(page, &self.images),
            None => page,
        }
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        let mut tasks = Vec::new();

        match message {
            Message::Navigate(page) => {
                self.show_page(page);
                self.scroll_offset = scrollable::AbsoluteOffset::default();
                tasks.push(self.scroll_to(self.scroll_offset));
                tasks.push(self.update_title());
            }
            Message::Gallery(gallery_msg) => {
                if let Some(gallery) = self.gallery.as_mut() {
                    let was_locked = self.scroll_lock.is_locked();
                    gallery.update(gallery_msg);

                    // Restore the offset saved when the lock was taken.
                    if was_locked && !self.scroll_lock.is_locked() {
                        tasks.push(self.scroll_to(self.scroll_offset));
                    }
                }
            }
            Message::PageScrolled(offset) => {
                if !self.scroll_lock.is_locked() {
                    self.scroll_offset = offset;
                } else if offset != self.scroll_offset {
                    // Locked: undo whatever moved the page.
                    tasks.push(self.scroll_to(self.scroll_offset));
                }
            }
            Message::FilterCategory(filter) => {
                self.category_filter = filter;
            }
            Message::Contact(contact_msg) => self.contact_form.update(contact_msg),
            Message::Settings(msg) => {
                match msg {
                    SettingsMessage::AppTheme(theme) => {
                        self.config.app_theme = theme;
                        self.save_config();
                        return cosmic::command::set_theme(theme.to_cosmic_theme());
                    }
                    SettingsMessage::ThumbnailSize(size) => self.config.thumbnail_size = size,
                    SettingsMessage::GridColumns(columns) => {
                        self.config.set_grid_columns(columns);
                        let columns = self.config.grid().columns;
                        if let Some(gallery) = self.gallery.as_mut() {
                            gallery.set_columns(columns);
                        }
                    }
                    SettingsMessage::ProjectSort(sort) => self.config.project_sort = sort,
                    SettingsMessage::RememberContent(remember) => {
                        self.config.remember_content = remember
                    }
                }

                self.save_config();
            }
            Message::KeyBind(action) => tasks.push(self.update(action.message())),
            Message::Surface(action) => {
                return cosmic::task::message(Action::Cosmic(cosmic::app::Action::Surface(action)));
            }
            Message::ToggleContextPage(page) => {
                if self.context_page == Some(page) {
                    self.context_page = None;
                } else {
                    self.context_page = Some(page);
                }
            }
            Message::OpenFileDialog => {
                return future(async {
                    let dialog = AsyncFileDialog::new()
                        .set_title(fl!("menu-open"))
                        .add_filter("JSON", &["json"]);

                    match dialog.pick_file().await {
                        Some(handle) => Message::OpenContent(handle.path().to_path_buf()),
                        None => Message::Cancelled,
                    }
                });
            }
            Message::OpenContent(path) => tasks.push(self.load_content(path)),
            Message::OpenRecentContent(idx) => {
                if let Some(file) = self.config.recent_content.get(idx).cloned() {
                    let path = PathBuf::from(file);
                    if path.exists() {
                        tasks.push(self.load_content(path));
                    } else {
                        tracing::warn!(path = %path.display(), "recent content file is gone");
                    }
                }
            }
            Message::ClearRecentContent => {
                self.config.recent_content.clear();
                self.save_config();
            }
            Message::UseBuiltinContent => {
                self.use_builtin();
                tasks.push(self.update_title());
            }
            Message::Reload => tasks.push(self.reload()),
            Message::RetryContent => tasks.push(self.retry()),
            Message::ContentLoaded(Ok(feed)) => {
                if let Some(path) = &feed.path {
                    let path = path.to_string_lossy().into_owned();
                    self.config.content_path = Some(path.clone());
                    self.config.add_recent_content(path);
                    self.save_config();
                }

                self.set_feed(feed);
                self.loading = LoadingEvent::LoadComplete.apply_to_state(std::mem::take(&mut self.loading));
                tasks.push(self.update_title());
            }
            Message::ContentLoaded(Err(err)) => {
                // The previous content stays on screen.
                tracing::error!("failed to load content: {err}");
                self.loading = LoadingEvent::LoadError(err.to_string())
                    .apply_to_state(std::mem::take(&mut self.loading));
            }
            Message::WatcherEvent(event) => match event {
                WatcherEvent::Changed(path) => {
                    tracing::info!(path = %path.display(), "content file changed, reloading");
                    tasks.push(self.load_content(path));
                }
                WatcherEvent::Removed(path) => {
                    tracing::warn!(path = %path.display(), "content file removed, keeping what is shown");
                }
                WatcherEvent::Error(err) => tracing::warn!("watcher error: {err}"),
            },
            Message::Cancelled => {}
            Message::Quit => {
                self.save_config();
                std::process::exit(0);
            }
        }

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        let page = self.context_page?;
        let content = match page {
            ContextPage::About => self.about_page(),
            ContextPage::Settings => self.settings_page(),
        };

        Some(context_drawer::context_drawer(
            content,
            Message::ToggleContextPage(page),
        ))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        let gallery_sub = self
            .gallery
            .as_ref()
            .map_or_else(Subscription::none, ProjectGallery::subscription);

        Subscription::batch([
            cosmic::iced::keyboard::on_key_press(key_binds::key_press_handler),
            gallery_sub,
            watcher::watch_file(self.feed.path.clone()).map(Message::WatcherEvent),
        ])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        self.save_config();
        None
    }
}

impl Folio {
    fn about_page(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let source = match &self.feed.path {
            Some(path) => path.display().to_string(),
            None => fl!("about-builtin-content"),
        };

        column()
            .push(text::title3(fl!("app-title")))
            .push(text::body(fl!("app-description")))
            .push(text::caption(fl!(
                "about-content-source",
                source = source
            )))
            .push(text::caption(fl!(
                "about-project-count",
                count = self.feed.content.projects.len()
            )))
            .push(text::caption(format!("Version {}", env!("CARGO_PKG_VERSION"))))
            .spacing(spacing.space_s)
            .into()
    }

    fn settings_page(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let thumbnail_sizes = ThumbnailSize::ALL.iter().fold(
            column().spacing(spacing.space_xxs),
            |col, size| {
                let label = match size {
                    ThumbnailSize::Small => fl!("settings-thumbnail-small"),
                    ThumbnailSize::Medium => fl!("settings-thumbnail-medium"),
                    ThumbnailSize::Large => fl!("settings-thumbnail-large"),
                };
                col.push(radio(
                    text::body(label),
                    *size,
                    Some(self.config.thumbnail_size),
                    |size| Message::Settings(SettingsMessage::ThumbnailSize(size)),
                ))
            },
        );

        let sections = vec![
            settings::section()
                .title(fl!("settings-appearance"))
                .add(settings::item(
                    fl!("settings-theme"),
                    dropdown(
                        AppTheme::ALL
                            .iter()
                            .map(|theme| match theme {
                                AppTheme::System => fl!("settings-theme-system"),
                                AppTheme::Dark => fl!("settings-theme-dark"),
                                AppTheme::Light => fl!("settings-theme-light"),
                            })
                            .collect::<Vec<_>>(),
                        AppTheme::ALL
                            .iter()
                            .position(|t| *t == self.config.app_theme),
                        |idx| Message::Settings(SettingsMessage::AppTheme(AppTheme::ALL[idx])),
                    ),
                ))
                .into(),
            settings::section()
                .title(fl!("settings-gallery"))
                .add(settings::item(fl!("settings-thumbnail-size"), thumbnail_sizes))
                .add(settings::item(
                    fl!("settings-grid-columns"),
                    spin_button(
                        format!("{}", self.config.grid_columns),
                        fl!("settings-grid-columns"),
                        self.config.grid_columns,
                        1,
                        MIN_GRID_COLUMNS,
                        MAX_GRID_COLUMNS,
                        |columns| Message::Settings(SettingsMessage::GridColumns(columns)),
                    ),
                ))
                .into(),
            settings::section()
                .title(fl!("settings-projects"))
                .add(settings::item(
                    fl!("settings-sort"),
                    dropdown(
                        ProjectSort::ALL
                            .iter()
                            .copied()
                            .map(pages::sort_name)
                            .collect::<Vec<_>>(),
                        ProjectSort::ALL
                            .iter()
                            .position(|s| *s == self.config.project_sort),
                        |idx| Message::Settings(SettingsMessage::ProjectSort(ProjectSort::ALL[idx])),
                    ),
                ))
                .into(),
            settings::section()
                .title(fl!("settings-content"))
                .add(settings::item(
                    fl!("settings-remember-content"),
                    toggler(self.config.remember_content).on_toggle(|remember| {
                        Message::Settings(SettingsMessage::RememberContent(remember))
                    }),
                ))
                .into(),
        ];

        settings::view_column(sections).into()
    }
}
