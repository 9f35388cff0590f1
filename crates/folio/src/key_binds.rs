use crate::message::{ContextPage, GalleryMessage, Message, Page};
use cosmic::{
    iced::keyboard::{Key, Modifiers, key::Named},
    widget::menu::{
        Action,
        key_bind::{KeyBind, Modifier},
    },
};
use folio_lightbox::LightboxKey;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Open,
    Reload,
    UseBuiltin,
    Quit,
    Home,
    Projects,
    Contact,
    About,
    Settings,
    OpenRecentContent(usize),
    ClearRecentContent,
}

impl MenuAction {
    pub fn message(self) -> Message {
        match self {
            MenuAction::Open => Message::OpenFileDialog,
            MenuAction::Reload => Message::Reload,
            MenuAction::UseBuiltin => Message::UseBuiltinContent,
            MenuAction::Quit => Message::Quit,
            MenuAction::Home => Message::Navigate(Page::Home),
            MenuAction::Projects => Message::Navigate(Page::Projects),
            MenuAction::Contact => Message::Navigate(Page::Contact),
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
            MenuAction::Settings => Message::ToggleContextPage(ContextPage::Settings),
            MenuAction::OpenRecentContent(idx) => Message::OpenRecentContent(idx),
            MenuAction::ClearRecentContent => Message::ClearRecentContent,
        }
    }
}

impl Action for MenuAction {
    type Message = Message;

    fn message(&self) -> Message {
        (*self).message()
    }
}

pub fn init_key_binds() -> HashMap<KeyBind, MenuAction> {
    let mut binds = HashMap::new();

    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Ctrl],
            key: Key::Character("o".into()),
        },
        MenuAction::Open,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Ctrl],
            key: Key::Character("r".into()),
        },
        MenuAction::Reload,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::F5),
        },
        MenuAction::Reload,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Ctrl],
            key: Key::Character("q".into()),
        },
        MenuAction::Quit,
    );

    // Pages
    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Alt],
            key: Key::Character("1".into()),
        },
        MenuAction::Home,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Alt],
            key: Key::Character("2".into()),
        },
        MenuAction::Projects,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Alt],
            key: Key::Character("3".into()),
        },
        MenuAction::Contact,
    );

    binds.insert(
        KeyBind {
            modifiers: vec![Modifier::Ctrl],
            key: Key::Character(",".into()),
        },
        MenuAction::Settings,
    );

    binds
}

fn key_bind(key: Key, modifiers: Modifiers) -> KeyBind {
    let mut mods = Vec::new();

    if modifiers.control() {
        mods.push(Modifier::Ctrl);
    }

    if modifiers.shift() {
        mods.push(Modifier::Shift);
    }

    if modifiers.alt() {
        mods.push(Modifier::Alt);
    }

    if modifiers.logo() {
        mods.push(Modifier::Super);
    }

    KeyBind {
        modifiers: mods,
        key,
    }
}

pub fn key_press_handler(key: Key, modifiers: Modifiers) -> Option<Message> {
    let key_bind = key_bind(key, modifiers);

    let bindings = init_key_binds();
    bindings
        .get(&key_bind)
        .map(|action| Message::KeyBind(*action))
}

/// Lightbox keys. Only plain presses count; a modified arrow is left to
/// whatever else listens for it.
pub fn lightbox_key(key: &Key, modifiers: Modifiers) -> Option<LightboxKey> {
    if !modifiers.is_empty() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(LightboxKey::Previous),
        Key::Named(Named::ArrowRight) => Some(LightboxKey::Next),
        Key::Named(Named::Escape) => Some(LightboxKey::Close),
        _ => None,
    }
}

pub fn lightbox_key_press_handler(key: Key, modifiers: Modifiers) -> Option<Message> {
    lightbox_key(&key, modifiers).map(|key| Message::Gallery(GalleryMessage::Key(key)))
}
