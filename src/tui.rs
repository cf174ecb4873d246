//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用した対話式プリファレンスフォームを提供する。

mod dialog;
mod preference_form;

pub use preference_form::run_preference_form;
