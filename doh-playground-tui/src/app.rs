//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         dispatch(msg)                                   // update + 执行副作用
//!     }
//!     for msg in backend.poll_outcomes() {            // 收取已完成的查询
//!         dispatch(msg)
//!     }
//! }
//!
//! 其中 dispatch 为：
//!     update::update(&mut app, msg) 返回 Some(Command) 时交给 backend.execute()，
//!     backend 若返回消息（例如复制失败），再次进入 update。

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    // 启动查询
    if let Some(command) = update::on_launch(app) {
        execute(app, backend, command);
    }

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(app, backend, msg);
        }

        // 4. 收取已完成的查询
        for msg in backend.poll_outcomes() {
            dispatch(app, backend, msg);
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, backend: &mut Backend, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        execute(app, backend, command);
    }
}

fn execute(app: &mut App, backend: &mut Backend, command: update::Command) {
    if let Some(follow_up) = backend.execute(command) {
        // 后续消息只会是状态提示，不再产生命令
        update::update(app, follow_up);
    }
}
