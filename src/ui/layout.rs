use tracing::warn;

/// Columns reserved on the right for the status and days-left fields
pub const DEFAULT_INFO_WIDTH: usize = 26;

/// Width used when the terminal size cannot be read
pub const FALLBACK_WIDTH: usize = 80;

/// Column layout of the task listing
///
/// The task-name box takes `total_width - info_width - 1` columns and the
/// info region holds the status label and the days-left figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub total_width: usize,
    pub info_width: usize,
}

impl LayoutConfig {
    pub fn new(total_width: usize, info_width: usize) -> Self {
        Self {
            total_width,
            info_width,
        }
    }

    /// Read the terminal width once (falls back to 80 columns off a terminal)
    pub fn detect(info_width: usize) -> Self {
        let total_width = match crossterm::terminal::size() {
            Ok((columns, _)) if columns > 0 => columns as usize,
            Ok(_) => FALLBACK_WIDTH,
            Err(e) => {
                warn!("Could not read terminal size, using {} columns: {}", FALLBACK_WIDTH, e);
                FALLBACK_WIDTH
            }
        };
        Self::new(total_width, info_width)
    }

    /// Width of the task-name box
    pub fn box_width(&self) -> usize {
        self.total_width.saturating_sub(self.info_width + 1)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(FALLBACK_WIDTH, DEFAULT_INFO_WIDTH)
    }
}

/// Center `text` in `width` columns, extra padding going to the right
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Center a block of rows as one unit
///
/// Every row gets the same left padding, taken from the widest row, so rows
/// of block lettering stay in register. Trailing spaces are trimmed.
pub fn center_block(rows: &[String], width: usize) -> Vec<String> {
    let widest = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    let pad = " ".repeat(width.saturating_sub(widest) / 2);
    rows.iter()
        .map(|row| format!("{}{}", pad, row).trim_end().to_string())
        .collect()
}
