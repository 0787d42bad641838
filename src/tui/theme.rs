use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(15, 17, 21);
pub const SURFACE: Color = Color::Rgb(22, 25, 31);
pub const BORDER: Color = Color::Rgb(45, 52, 64);
pub const TEXT: Color = Color::Rgb(205, 214, 224);
pub const TEXT_DIM: Color = Color::Rgb(108, 118, 132);
pub const TEAL: Color = Color::Rgb(94, 196, 176);
pub const GREEN: Color = Color::Rgb(120, 190, 120);
pub const AMBER: Color = Color::Rgb(214, 160, 80);
pub const RED: Color = Color::Rgb(200, 95, 75);
pub const VIOLET: Color = Color::Rgb(150, 130, 220);

/// Activity ramp, level 0 (empty) through 4 (hottest).
pub const HEAT: [Color; 5] = [
    Color::Rgb(30, 34, 42),
    Color::Rgb(24, 68, 58),
    Color::Rgb(28, 110, 88),
    Color::Rgb(48, 160, 122),
    Color::Rgb(94, 220, 166),
];

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn accent() -> Style {
    Style::default().fg(TEAL)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn violet() -> Style {
    Style::default().fg(VIOLET)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn heat(level: u8) -> Style {
    let idx = (level as usize).min(HEAT.len() - 1);
    Style::default().fg(HEAT[idx])
}

/// Tag-cloud styling tiers by normalized weight.
pub fn topic(weight: f64) -> Style {
    if weight >= 0.75 {
        Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
    } else if weight >= 0.5 {
        Style::default().fg(TEAL)
    } else if weight >= 0.25 {
        Style::default().fg(TEXT)
    } else {
        dim()
    }
}
