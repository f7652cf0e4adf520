use super::font_metrics::text_width_mm;

/// A4 portrait page geometry, in millimetres unless noted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub font_size_pt: f32,
    pub line_height_mm: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 20.0,
            font_size_pt: 12.0,
            line_height_mm: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Baseline distance from the top edge.
    pub y_mm: f32,
}

impl PageLayout {
    pub fn max_line_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_mm * 2.0
    }

    fn first_baseline_mm(&self) -> f32 {
        self.margin_mm * 2.0
    }

    fn max_baseline_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm * 2.0
    }

    /// Greedy word wrap against Helvetica widths. Explicit newlines are kept,
    /// blank lines survive as empty lines, and words wider than a line are
    /// broken by character.
    pub fn wrap(&self, content: &str) -> Vec<String> {
        let max_width = self.max_line_width_mm();
        let mut lines = Vec::new();

        for paragraph in content.split('\n') {
            let paragraph = paragraph.trim_end_matches('\r');
            let mut current = String::new();

            for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };

                if text_width_mm(&candidate, self.font_size_pt) <= max_width {
                    current = candidate;
                    continue;
                }

                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }

                for c in word.chars() {
                    current.push(c);
                    let overflows = text_width_mm(&current, self.font_size_pt) > max_width;
                    if overflows && current.chars().count() > 1 {
                        current.pop();
                        lines.push(std::mem::replace(&mut current, c.to_string()));
                    }
                }
            }

            lines.push(current);
        }

        lines
    }

    /// Places wrapped lines on pages, starting a new page whenever the next
    /// line would cross the bottom limit.
    pub fn paginate(&self, lines: Vec<String>) -> Vec<Vec<PlacedLine>> {
        let mut pages = vec![Vec::new()];
        let mut y = self.first_baseline_mm();

        for text in lines {
            if y + self.line_height_mm > self.max_baseline_mm() {
                pages.push(Vec::new());
                y = self.first_baseline_mm();
            }

            if let Some(page) = pages.last_mut() {
                page.push(PlacedLine { text, y_mm: y });
            }
            y += self.line_height_mm;
        }

        pages
    }
}
