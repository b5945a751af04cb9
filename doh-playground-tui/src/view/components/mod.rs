//! 可复用的界面组件

pub mod banner;
pub mod form;
pub mod help;
pub mod results;
pub mod statusbar;
