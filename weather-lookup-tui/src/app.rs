//! 应用主循环
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))   // 渲染 UI
//!     if app.should_quit { break }
//!     应用已完成的后台查询                         // mpsc 通道，非阻塞
//!     poll_event(100ms) -> AppMessage              // 超时则为 Tick
//!     update(&mut app, msg) -> Command             // Lookup 命令在运行时上执行
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};
use weather_lookup_core::CompletedLookup;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Command};
use crate::util::Term;
use crate::view;

/// 事件轮询间隔，同时也是加载动画的帧间隔
const TICK_RATE: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, runtime: &Handle) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<CompletedLookup>();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用已完成的查询
        while let Ok(completed) = rx.try_recv() {
            let cmd = update::update(app, AppMessage::LookupFinished(completed));
            execute(cmd, runtime, &tx);
        }

        // 4. 轮询事件，获取消息
        let msg = match event::poll_event(TICK_RATE)? {
            Some(event) => event::handle_event(event, app),
            None => AppMessage::Tick,
        };

        // 5. 更新状态
        let cmd = update::update(app, msg);
        execute(cmd, runtime, &tx);
    }

    Ok(())
}

/// 执行 Update 返回的命令
fn execute(cmd: Command, runtime: &Handle, tx: &UnboundedSender<CompletedLookup>) {
    match cmd {
        Command::None => {}
        Command::Lookup(pending) => {
            let tx = tx.clone();
            runtime.spawn(async move {
                let completed = pending.run().await;
                if tx.send(completed).is_err() {
                    log::debug!("Lookup finished after the UI loop exited");
                }
            });
        }
    }
}
