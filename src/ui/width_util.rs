use terminal_size::{Width, terminal_size};

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    pub fn visible_width(&self, s: &str) -> usize {
        s.chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            format!("{s}{}", " ".repeat(width - w))
        }
    }

    /// Best-effort terminal width (defaults to 80 when not attached to one).
    pub fn terminal_width(&self) -> usize {
        if let Some((Width(w), _)) = terminal_size() {
            w as usize
        } else {
            80
        }
    }

    /// Separator rules never run past the terminal edge.
    pub fn rule_width(&self, content_width: usize) -> usize {
        content_width.min(self.terminal_width()).max(1)
    }
}
