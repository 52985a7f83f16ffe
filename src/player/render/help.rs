//! Help overlay for the terminal player.
//!
//! The box is built from the keyboard handler's key map, so the overlay
//! lists exactly the bindings the player reacts to.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::player::input::KEY_BINDINGS;

const TITLE: &str = "Shavit Replay Player Help";
const FOOTER: &str = "Press any key to close";

/// Columns between the two vertical borders.
const INNER_WIDTH: usize = 43;
const KEY_COLUMN: usize = 11;

/// Printed width of every box line, margin included.
pub const HELP_BOX_WIDTH: usize = INNER_WIDTH + 4;

fn boxed(content: &str) -> String {
    format!("  ║{:<width$}║", content, width = INNER_WIDTH)
}

fn rule(left: char, right: char) -> String {
    format!("  {}{}{}", left, "═".repeat(INNER_WIDTH), right)
}

/// Lines of the help box, top border to bottom border.
pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        rule('╔', '╗'),
        boxed(&format!("{:^width$}", TITLE, width = INNER_WIDTH)),
        rule('╠', '╣'),
    ];
    for (section, bindings) in KEY_BINDINGS {
        lines.push(boxed(""));
        lines.push(boxed(&format!("  {}", section)));
        for (keys, action) in bindings.iter() {
            lines.push(boxed(&format!(
                "    {:<key$}{}",
                keys,
                action,
                key = KEY_COLUMN
            )));
        }
    }
    lines.push(boxed(""));
    lines.push(boxed(&format!("{:^width$}", FOOTER, width = INNER_WIDTH)));
    lines.push(rule('╚', '╝'));
    lines
}

/// Top-left corner that centers a box of `lines` rows in the terminal.
fn origin(width: u16, height: u16, lines: usize) -> (u16, u16) {
    let col = (width as usize).saturating_sub(HELP_BOX_WIDTH) / 2;
    let row = (height as usize).saturating_sub(lines) / 2;
    (col as u16, row as u16)
}

/// Queue the centered help box. The caller clears the screen and flushes.
pub fn render_help(stdout: &mut io::Stdout, width: u16, height: u16) -> Result<()> {
    let lines = help_lines();
    let (col, row) = origin(width, height, lines.len());

    for (offset, line) in lines.iter().enumerate() {
        queue!(
            stdout,
            MoveTo(col, row + offset as u16),
            SetForegroundColor(Color::Green),
            Print(line),
            ResetColor,
        )?;
    }

    Ok(())
}
