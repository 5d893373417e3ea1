use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface_bright: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_bright: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(150, 158, 166),
            dim: Color::Rgb(120, 126, 132),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(90, 150, 150),
            accent: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(110, 180, 110),
            negative: Color::Rgb(210, 130, 90),
            error: Color::Rgb(200, 80, 80),
        }
    }
}
