use super::layout::{center, center_block, LayoutConfig};
use super::styles::{AnsiStyler, Styler};
use super::task_box::render_task_rows;
use crate::domain::Task;
use chrono::{Datelike, Duration, NaiveDate};
use figlet_rs::FIGfont;
use tracing::warn;

/// Title shown above the listing
const TITLE: &str = "Weekly tasks";

/// Column titles of the info region, placed after the centered "Tasks"
const COLUMN_TITLES: &str = " |  Status  | Day(s) left";

/// How the title banner is lettered
pub enum TitleStyle {
    /// Large block lettering
    Figlet(FIGfont),
    /// The title text as is
    Plain,
}

impl TitleStyle {
    /// Block lettering with the bundled standard font, plain text if it fails to load
    pub fn figlet() -> Self {
        match FIGfont::standard() {
            Ok(font) => TitleStyle::Figlet(font),
            Err(e) => {
                warn!("Could not load banner font, using plain title: {}", e);
                TitleStyle::Plain
            }
        }
    }

    /// Rows of `text` in this lettering, untrimmed so they stay in register
    fn letter(&self, text: &str) -> Vec<String> {
        if let TitleStyle::Figlet(font) = self {
            if let Some(figure) = font.convert(text) {
                return figure
                    .to_string()
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .collect();
            }
        }
        vec![text.to_string()]
    }
}

/// Renders tasks and task listings for the terminal
pub struct Renderer {
    layout: LayoutConfig,
    styler: Box<dyn Styler>,
    title: TitleStyle,
}

impl Renderer {
    pub fn new(layout: LayoutConfig, styler: Box<dyn Styler>, title: TitleStyle) -> Self {
        Self {
            layout,
            styler,
            title,
        }
    }

    /// Colored output with a block-lettered title
    pub fn terminal(layout: LayoutConfig) -> Self {
        Self::new(layout, Box::new(AnsiStyler), TitleStyle::figlet())
    }

    /// Unstyled output with a plain title
    #[cfg(test)]
    pub fn plain(layout: LayoutConfig) -> Self {
        Self::new(layout, Box::new(super::styles::PlainStyler), TitleStyle::Plain)
    }

    /// Render the rows of a single task box
    pub fn render_task(&self, task: &Task) -> Vec<String> {
        render_task_rows(task, &self.layout, self.styler.as_ref())
    }

    /// Render the full listing: title, week banner, column header, then each
    /// urgency group followed by a separator when it is not empty
    pub fn render_listing(&self, groups: &[Vec<&Task>], today: NaiveDate) -> String {
        let width = self.layout.total_width;
        let mut lines = Vec::new();

        for text in [TITLE.to_string(), today.format("%d-%m-%y").to_string()] {
            for line in center_block(&self.title.letter(&text), width) {
                lines.push(self.styler.bold(&line));
            }
        }

        lines.push(self.styler.bold(center(&week_banner(today), width).trim_end()));
        lines.push(String::new());

        lines.push(self.styler.bold(&format!(
            "{}{}",
            center("Tasks", self.layout.box_width()),
            COLUMN_TITLES
        )));
        lines.push(self.styler.bold(&"*-".repeat(width / 2)));

        for group in groups {
            for task in group {
                lines.extend(self.render_task(task));
            }
            if !group.is_empty() {
                lines.push(self.styler.bold(&"-".repeat(width)));
            }
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

/// First (Monday) and last (Sunday) day of the week containing `date`
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

/// "Week N Mon DD-MM-YY to Sun DD-MM-YY" for the week containing `date`
pub fn week_banner(date: NaiveDate) -> String {
    let (start, end) = week_bounds(date);
    format!(
        "Week {} {} to {}",
        date.format("%W"),
        start.format("%a %d-%m-%y"),
        end.format("%a %d-%m-%y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{group_and_order, parse_date, TaskMap, Urgency};
    use crate::ui::styles::PlainStyler;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        parse_date("04-06-25").unwrap()
    }

    fn task(name: &str, end: &str, urgency: Urgency) -> Task {
        Task::new(name, today(), parse_date(end).unwrap(), urgency, today()).unwrap()
    }

    #[test]
    fn test_week_bounds() {
        let (start, end) = week_bounds(today());
        assert_eq!(start, parse_date("02-06-25").unwrap());
        assert_eq!(end, parse_date("08-06-25").unwrap());

        let (start, end) = week_bounds(parse_date("02-06-25").unwrap());
        assert_eq!(start, parse_date("02-06-25").unwrap());
        assert_eq!(end, parse_date("08-06-25").unwrap());

        let (start, _) = week_bounds(parse_date("08-06-25").unwrap());
        assert_eq!(start, parse_date("02-06-25").unwrap());
    }

    #[test]
    fn test_week_banner() {
        assert_eq!(week_banner(today()), "Week 22 Mon 02-06-25 to Sun 08-06-25");
    }

    #[test]
    fn test_render_listing() {
        let renderer = Renderer::plain(LayoutConfig::new(50, 26));
        let tasks: TaskMap = vec![
            (1, task("Water plants", "20-06-25", Urgency::Normal)),
            (2, task("Renew passport", "01-06-25", Urgency::Normal)),
            (3, task("Book flights", "10-06-25", Urgency::Normal)),
        ]
        .into_iter()
        .collect();

        let groups = group_and_order(&tasks);
        let output = renderer.render_listing(&groups, today());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "                   Weekly tasks",
                "                     04-06-25",
                "       Week 22 Mon 02-06-25 to Sun 08-06-25",
                "",
                "         Tasks          |  Status  | Day(s) left",
                "*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-",
                " Renew passport         |   late   |    -2",
                "--------------------------------------------------",
                " Book flights           |  normal  |     7",
                " Water plants           |  normal  |    17",
                "--------------------------------------------------",
            ]
        );
    }

    #[test]
    fn test_empty_listing_has_no_separators() {
        let renderer = Renderer::plain(LayoutConfig::new(50, 26));
        let tasks = TaskMap::new();
        let groups = group_and_order(&tasks);
        let output = renderer.render_listing(&groups, today());

        assert!(output.ends_with("*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-\n"));
        assert!(!output.contains("-----"));
    }

    #[test]
    fn test_figlet_title_rows_share_one_offset() {
        let width = 120;
        let renderer = Renderer::new(
            LayoutConfig::new(width, 26),
            Box::new(PlainStyler),
            TitleStyle::figlet(),
        );
        let tasks = TaskMap::new();
        let output = renderer.render_listing(&group_and_order(&tasks), today());
        let rendered: Vec<&str> = output.lines().collect();

        let figure = FIGfont::standard()
            .unwrap()
            .convert(TITLE)
            .unwrap()
            .to_string();
        let raw: Vec<&str> = figure.lines().filter(|line| !line.trim().is_empty()).collect();
        assert!(raw.len() > 1);

        let widest = raw.iter().map(|row| row.chars().count()).max().unwrap();
        let offset = (width - widest) / 2;
        for (row, line) in raw.iter().zip(&rendered) {
            assert_eq!(*line, format!("{}{}", " ".repeat(offset), row).trim_end());
        }
        assert!(rendered[raw.len()..].iter().any(|line| line.contains("Week 22")));
    }
}
