//! 表单更新逻辑

use crate::message::FormMessage;
use crate::model::{App, Focus};

/// 按当前焦点分发表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    let form = &mut app.form;
    match (app.focus, msg) {
        (Focus::Resolver, FormMessage::PrevOption) => form.prev_resolver(),
        (Focus::Resolver, FormMessage::NextOption) => form.next_resolver(),

        (Focus::Domain, FormMessage::Input(c)) => form.push_char(c),
        (Focus::Domain, FormMessage::Backspace) => form.pop_char(),
        (Focus::Domain, FormMessage::ClearInput) => form.clear_domain(),

        (Focus::Types, FormMessage::PrevOption) => form.cursor_prev(),
        (Focus::Types, FormMessage::NextOption) => form.cursor_next(),
        (Focus::Types, FormMessage::FirstOption) => form.cursor_first(),
        (Focus::Types, FormMessage::LastOption) => form.cursor_last(),
        (Focus::Types, FormMessage::ToggleType) => form.toggle_type(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doh_playground_core::RecordType;

    #[test]
    fn test_messages_follow_focus() {
        let mut app = App::default();

        app.focus = Focus::Results;
        update(&mut app, FormMessage::Input('x'));
        assert!(app.form.domain.is_empty());

        app.focus = Focus::Domain;
        update(&mut app, FormMessage::Input('x'));
        assert_eq!(app.form.domain, "x");

        app.focus = Focus::Types;
        update(&mut app, FormMessage::NextOption);
        update(&mut app, FormMessage::ToggleType);
        assert_eq!(app.form.types.last(), Some(&RecordType::Ns));
        assert_eq!(app.form.cursor_type(), Some(RecordType::Ns));
    }
}
