use iced::widget::{button, column, container, opaque, row, stack, text, text_editor};
use iced::{Alignment, Background, Element, Fill, Length, Padding};

use autosave::draft::CLEAR_QUESTION;

use super::state::{editor_id, key_binding, Message, State};
use super::style::{
    backdrop, btn_danger, btn_ghost, editor_style, glass_container, saved_indicator, COL_BG,
    COL_MUTED, COL_TEXT,
};

pub(super) fn view(state: &State) -> Element<'_, Message> {
    let header = row![
        text("Auto-save")
            .size(24)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .style(|_t| iced::widget::text::Style {
                color: Some(COL_TEXT),
            }),
        iced::widget::Space::new().width(Fill),
        button(text("Clear draft").size(13))
            .on_press(Message::RequestClear)
            .padding(Padding::from([8.0, 14.0]))
            .style(btn_ghost),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(20.0));

    let root = column![header, editor(state), status_bar(state)]
        .width(Fill)
        .height(Fill)
        .spacing(0);

    let base = container(root)
        .width(Fill)
        .height(Fill)
        .style(|_theme| iced::widget::container::Style {
            background: Some(Background::Color(COL_BG)),
            text_color: Some(COL_TEXT),
            ..Default::default()
        });

    if state.confirming_clear {
        stack![base, confirm_clear_modal()].into()
    } else {
        base.into()
    }
}

fn editor(state: &State) -> Element<'_, Message> {
    let editor = text_editor(&state.pane().content)
        .id(editor_id())
        .placeholder("Start typing, your draft is saved as you go...")
        .on_action(Message::EditorAction)
        .key_binding(key_binding)
        .height(Fill)
        .padding(16)
        .size(16)
        .style(editor_style);

    container(editor)
        .width(Fill)
        .height(Fill)
        .padding(Padding::from([0.0, 20.0]))
        .into()
}

fn status_bar(state: &State) -> Element<'_, Message> {
    let pane = state.pane();
    let muted = |_t: &iced::Theme| iced::widget::text::Style {
        color: Some(COL_MUTED),
    };

    let indicator = container(iced::widget::Space::new())
        .width(10)
        .height(10)
        .style(saved_indicator(pane.saved));

    row![
        indicator,
        text(&pane.status).size(12).style(muted),
        iced::widget::Space::new().width(Fill),
        text(format!("{} characters", pane.count))
            .size(12)
            .style(muted),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .padding(Padding::from([12.0, 20.0]))
    .into()
}

fn confirm_clear_modal<'a>() -> Element<'a, Message> {
    let actions = row![
        iced::widget::Space::new().width(Fill),
        button(text("Cancel").size(13))
            .on_press(Message::ConfirmClear(false))
            .padding(Padding::from([8.0, 16.0]))
            .style(btn_ghost),
        button(text("Clear").size(13))
            .on_press(Message::ConfirmClear(true))
            .padding(Padding::from([8.0, 16.0]))
            .style(btn_danger),
    ]
    .spacing(12);

    let content = column![
        text(CLEAR_QUESTION)
            .size(15)
            .style(|_t| iced::widget::text::Style {
                color: Some(COL_TEXT),
            }),
        actions,
    ]
    .spacing(20);

    let dialog = container(
        container(content)
            .padding(Padding::new(24.0))
            .style(glass_container)
            .width(420)
            .height(Length::Shrink),
    )
    .width(Fill)
    .height(Fill)
    .center_x(Fill)
    .center_y(Fill)
    .style(backdrop);

    opaque(dialog)
}
