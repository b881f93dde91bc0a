use cube_core::{Color, Cube};
use owo_colors::OwoColorize;

use crate::config::CliConfig;

/// Draws the unfolded cube for a terminal.
pub struct Renderer {
    color: bool,
    sticker: String,
}

impl Renderer {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            color: config.color,
            sticker: config.sticker.clone(),
        }
    }

    pub fn render(&self, cube: &Cube) -> String {
        if !self.color {
            return cube.to_string();
        }

        let blank = " ".repeat(self.sticker.chars().count());
        let mut out = String::new();

        for row in cube.net() {
            let mut line = String::new();
            for cell in row {
                match cell {
                    Some(color) => {
                        let (r, g, b) = rgb(color);
                        line.push_str(&self.sticker.on_truecolor(r, g, b).to_string());
                    }
                    None => line.push_str(&blank),
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

pub fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::White => (255, 255, 255),
        Color::Green => (0, 255, 0),
        Color::Red => (255, 0, 0),
        Color::Blue => (0, 0, 255),
        Color::Orange => (255, 128, 0),
        Color::Yellow => (255, 255, 0),
    }
}
