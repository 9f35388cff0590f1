use super::{PageContext, back_button, footer, page_frame};
use crate::{
    fl,
    message::{ContactMessage, Message, Page},
};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    theme,
    widget::{button, column, dropdown, icon, row, text, text_input},
};
use folio_widgets::image_or_placeholder;

const IMAGE_HEIGHT: f32 = 280.0;

/// Contact form contents. Nothing is ever sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Index into [`project_types`]
    pub project_type: Option<usize>,
    pub body: String,
}

impl ContactForm {
    pub fn update(&mut self, message: ContactMessage) {
        match message {
            ContactMessage::Name(name) => self.name = name,
            ContactMessage::Email(email) => self.email = email,
            ContactMessage::ProjectType(idx) => self.project_type = Some(idx),
            ContactMessage::Body(body) => self.body = body,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub fn project_types() -> Vec<String> {
    vec![
        fl!("contact-type-residential"),
        fl!("contact-type-commercial"),
        fl!("contact-type-interior"),
        fl!("contact-type-other"),
    ]
}

fn info_row<'a>(icon_name: &'static str, value: String) -> Element<'a, Message> {
    row()
        .push(icon::from_name(icon_name).size(16))
        .push(text::body(value))
        .spacing(theme::active().cosmic().spacing.space_xs)
        .align_y(Alignment::Center)
        .into()
}

pub fn view<'a>(ctx: PageContext<'a>, form: &'a ContactForm) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let contact = &ctx.content.contact;

    let info = column()
        .push(text::title3(fl!("contact-info")))
        .push(info_row("mail-send-symbolic", contact.email.clone()))
        .push(info_row("call-start-symbolic", contact.phone.clone()))
        .push(info_row("mark-location-symbolic", contact.location.clone()))
        .push(info_row("x-office-calendar-symbolic", contact.availability.clone()))
        .push(image_or_placeholder(
            ctx.images.handle_opt(contact.image.as_ref()),
            ContentFit::Cover,
            Length::Fill,
            Length::Fixed(IMAGE_HEIGHT),
        ))
        .spacing(spacing.space_s)
        .width(Length::FillPortion(2));

    let fields = column()
        .push(text::title3(fl!("contact-form-title")))
        .push(
            text_input(fl!("contact-name"), form.name.as_str())
                .label(fl!("contact-name"))
                .on_input(|name| Message::Contact(ContactMessage::Name(name))),
        )
        .push(
            text_input(fl!("contact-email"), form.email.as_str())
                .label(fl!("contact-email"))
                .on_input(|email| Message::Contact(ContactMessage::Email(email))),
        )
        .push(text::caption(fl!("contact-project-type")))
        .push(dropdown(project_types(), form.project_type, |idx| {
            Message::Contact(ContactMessage::ProjectType(idx))
        }))
        .push(
            text_input(fl!("contact-message"), form.body.as_str())
                .label(fl!("contact-message"))
                .on_input(|body| Message::Contact(ContactMessage::Body(body))),
        )
        // No on_press: the form is never sent.
        .push(button::suggested(fl!("contact-send")))
        .push(text::caption(fl!("contact-reply-note")))
        .spacing(spacing.space_s)
        .width(Length::FillPortion(3));

    page_frame(
        column()
            .push(back_button(fl!("back-home"), Page::Home))
            .push(text::title1(fl!("contact-title")))
            .push(text::body(fl!("contact-intro")))
            .push(row().push(info).push(fields).spacing(spacing.space_xl))
            .push(footer(ctx))
            .spacing(spacing.space_l)
            .width(Length::Fill),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_edits_fields() {
        let mut form = ContactForm::default();
        assert!(form.is_empty());

        form.update(ContactMessage::Name("Ana".to_string()));
        form.update(ContactMessage::Email("ana@example.com".to_string()));
        form.update(ContactMessage::ProjectType(2));
        form.update(ContactMessage::Body("Hola".to_string()));

        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@example.com");
        assert_eq!(form.project_type, Some(2));
        assert_eq!(form.body, "Hola");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_project_type_replaces_previous_choice() {
        let mut form = ContactForm::default();
        form.update(ContactMessage::ProjectType(0));
        form.update(ContactMessage::ProjectType(3));
        assert_eq!(form.project_type, Some(3));
    }
}
