//! 输入事件处理
//!
//! 把 crossterm 的原始事件翻译为 `AppMessage`，本身不修改任何状态。

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ResultsMessage};
use crate::model::{App, Focus};

/// 轮询事件，超时返回 None
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 把事件翻译为消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助页打开时，任意关闭键都回到主界面
    if app.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('?' | 'q') => {
                AppMessage::CloseHelp
            }
            _ => AppMessage::Noop,
        };
    }

    if let Some(msg) = handle_global_keys(&key, app) {
        return msg;
    }

    match app.focus {
        Focus::Resolver => handle_resolver_keys(key),
        Focus::Domain => handle_domain_keys(key),
        Focus::Types => handle_types_keys(key),
        Focus::Results => handle_results_keys(key),
    }
}

fn handle_global_keys(key: &KeyEvent, app: &App) -> Option<AppMessage> {
    let msg = if DefaultKeymap::HELP.matches(key) || DefaultKeymap::HELP_F1.matches(key) {
        AppMessage::ShowHelp
    } else if DefaultKeymap::ESCAPE.matches(key) {
        AppMessage::ClearStatus
    } else if DefaultKeymap::FOCUS_NEXT.matches(key) {
        AppMessage::FocusNext
    } else if DefaultKeymap::FOCUS_PREV.matches(key) || key.code == KeyCode::BackTab {
        // 部分终端不带 SHIFT 修饰
        AppMessage::FocusPrev
    } else if DefaultKeymap::SUBMIT.matches(key) {
        AppMessage::Submit
    } else if DefaultKeymap::RESET.matches(key) {
        AppMessage::Reset
    } else if DefaultKeymap::COPY_ZONE.matches(key) {
        AppMessage::CopyZone
    } else if DefaultKeymap::TOGGLE_THEME.matches(key) {
        AppMessage::ToggleTheme
    } else if DefaultKeymap::HISTORY_BACK.matches(key) {
        AppMessage::HistoryBack
    } else if DefaultKeymap::HISTORY_FORWARD.matches(key) {
        AppMessage::HistoryForward
    } else if app.focus != Focus::Domain
        && key.modifiers.is_empty()
        && key.code == KeyCode::Char('?')
    {
        // 在域名框中 ? 是普通字符
        AppMessage::ShowHelp
    } else {
        return None;
    };
    Some(msg)
}

fn handle_resolver_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Up => AppMessage::Form(FormMessage::PrevOption),
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
            AppMessage::Form(FormMessage::NextOption)
        }
        _ => AppMessage::Noop,
    }
}

fn handle_domain_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Form(FormMessage::ClearInput);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_types_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => {
            AppMessage::Form(FormMessage::PrevOption)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') => {
            AppMessage::Form(FormMessage::NextOption)
        }
        KeyCode::Home => AppMessage::Form(FormMessage::FirstOption),
        KeyCode::End => AppMessage::Form(FormMessage::LastOption),
        KeyCode::Char(' ' | 'x') => AppMessage::Form(FormMessage::ToggleType),
        _ => AppMessage::Noop,
    }
}

fn handle_results_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一行
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Results(ResultsMessage::SelectPrevious),
        // ↓ 或 j: 下一行
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Results(ResultsMessage::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Results(ResultsMessage::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Results(ResultsMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_domain_typing() {
        let app = App::default();
        assert!(matches!(
            handle_event(press(KeyModifiers::NONE, KeyCode::Char('?')), &app),
            AppMessage::Form(FormMessage::Input('?'))
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::SHIFT, KeyCode::Char('E')), &app),
            AppMessage::Form(FormMessage::Input('E'))
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::CONTROL, KeyCode::Char('u')), &app),
            AppMessage::Form(FormMessage::ClearInput)
        ));
    }

    #[test]
    fn test_global_keys() {
        let app = App::default();
        assert!(matches!(
            handle_event(press(KeyModifiers::NONE, KeyCode::Enter), &app),
            AppMessage::Submit
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Char('r')), &app),
            AppMessage::Reset
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Left), &app),
            AppMessage::HistoryBack
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::CONTROL, KeyCode::Char('c')), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = App::default();
        app.show_help = true;
        assert!(matches!(
            handle_event(press(KeyModifiers::NONE, KeyCode::Char('a')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::NONE, KeyCode::Esc), &app),
            AppMessage::CloseHelp
        ));
    }

    #[test]
    fn test_results_keys() {
        let mut app = App::default();
        app.focus = Focus::Results;
        assert!(matches!(
            handle_event(press(KeyModifiers::NONE, KeyCode::Char('j')), &app),
            AppMessage::Results(ResultsMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::NONE, KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
    }
}
