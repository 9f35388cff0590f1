use crate::{fl, key_binds::MenuAction, message::Message};
use cosmic::{
    Core, Element,
    widget::{
        menu::{self, ItemHeight, ItemWidth, KeyBind},
        responsive_menu_bar,
    },
};
use std::{collections::HashMap, path::Path, sync::LazyLock};

static MENU_ID: LazyLock<cosmic::widget::Id> =
    LazyLock::new(|| cosmic::widget::Id::new("responsive-menu"));

fn build_file_menu(recent_content: &[String]) -> Vec<menu::Item<MenuAction, String>> {
    let mut items = vec![
        menu::Item::button(fl!("menu-open"), None, MenuAction::Open),
        menu::Item::button(fl!("menu-reload"), None, MenuAction::Reload),
        menu::Item::button(fl!("menu-use-builtin"), None, MenuAction::UseBuiltin),
    ];

    if !recent_content.is_empty() {
        items.push(menu::Item::divider());
        let mut recent_items: Vec<menu::Item<MenuAction, String>> = recent_content
            .iter()
            .enumerate()
            .map(|(idx, file)| {
                let display_name = Path::new(file)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(file)
                    .to_string();
                menu::Item::button(display_name, None, MenuAction::OpenRecentContent(idx))
            })
            .collect();

        recent_items.push(menu::Item::divider());
        recent_items.push(menu::Item::button(
            fl!("menu-clear-recent"),
            None,
            MenuAction::ClearRecentContent,
        ));

        items.push(menu::Item::folder(fl!("menu-recent-content"), recent_items).width(280));
    }

    items.push(menu::Item::divider());
    items.push(menu::Item::button(
        fl!("menu-settings"),
        None,
        MenuAction::Settings,
    ));
    items.push(menu::Item::divider());
    items.push(menu::Item::button(fl!("menu-quit"), None, MenuAction::Quit));

    items
}

pub fn menu_bar<'a>(
    core: &Core,
    key_binds: &HashMap<KeyBind, MenuAction>,
    recent_content: &[String],
) -> Element<'a, Message> {
    let file_menu = build_file_menu(recent_content);

    responsive_menu_bar()
        .item_height(ItemHeight::Dynamic(40))
        .item_width(ItemWidth::Uniform(250))
        .spacing(4.)
        .into_element(
            core,
            key_binds,
            MENU_ID.clone(),
            Message::Surface,
            vec![
                (fl!("menu-file"), file_menu),
                (
                    fl!("menu-view"),
                    vec![
                        menu::Item::button(fl!("menu-home"), None, MenuAction::Home),
                        menu::Item::button(fl!("menu-projects"), None, MenuAction::Projects),
                        menu::Item::button(fl!("menu-contact"), None, MenuAction::Contact),
                    ],
                ),
                (
                    fl!("menu-help"),
                    vec![menu::Item::button(
                        fl!("menu-about"),
                        None,
                        MenuAction::About,
                    )],
                ),
            ],
        )
}
