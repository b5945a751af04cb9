//! 剪贴板服务
//!
//! 通过 OSC 52 转义序列写入终端剪贴板，远程 SSH 会话中同样可用。

use std::io::{self, Write};

use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// 剪贴板 trait
pub trait Clipboard: Send {
    /// 写入文本
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// 生成 OSC 52 序列
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// OSC 52 剪贴板
pub struct Osc52Clipboard<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
