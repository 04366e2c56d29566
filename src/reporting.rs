//! # Reporting Module / 报告模块
//!
//! This module handles the generation and display of run reports.
//! It writes the detailed log and the summary as plain-text artifacts and
//! prints colorful, formatted summaries to the console with i18n support.
//!
//! 此模块处理运行报告的生成和显示。
//! 它将详细日志和摘要写入纯文本文件，并在控制台打印彩色格式化摘要，支持国际化。

pub mod console;
pub mod text;

// Re-export common reporting functions
pub use console::{print_summary, print_verification};
pub use text::{write_detailed_log, write_summary};
