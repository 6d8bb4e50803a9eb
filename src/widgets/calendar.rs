//! Month calendar used for picking event dates
//!
//! Weeks start on Sunday. The grid begins with blank cells up to the first
//! weekday of the month. Selecting a day yields the `YYYY-MM-DD` string that
//! event forms expect.

use chrono::{Datelike, Months, NaiveDate};

use crate::utils::helpers::parse_event_date;

pub const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    /// First day of the month on display
    month: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
}

impl Calendar {
    /// Open on the selected value's month, or on today's month
    pub fn new(today: NaiveDate, value: Option<&str>) -> Self {
        let selected = value.and_then(parse_event_date);
        let anchor = selected.unwrap_or(today);
        Self {
            month: first_of_month(anchor),
            selected,
            today,
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Jump the view to the month containing `date`
    pub fn show_month_of(&mut self, date: NaiveDate) {
        self.month = first_of_month(date);
    }

    /// Header text, e.g. "March 2024"
    pub fn title(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    /// Grid cells for the month on display, `None` for leading blanks
    pub fn days(&self) -> Vec<Option<NaiveDate>> {
        let leading = self.month.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
        cells.extend(
            self.month
                .iter_days()
                .take_while(|day| day.month() == self.month.month())
                .map(Some),
        );
        cells
    }

    pub fn previous_month(&mut self) {
        if let Some(prev) = self.month.checked_sub_months(Months::new(1)) {
            self.month = prev;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.month.checked_add_months(Months::new(1)) {
            self.month = next;
        }
    }

    /// Select a day and return its form value
    pub fn select(&mut self, date: NaiveDate) -> String {
        self.selected = Some(date);
        date.format("%Y-%m-%d").to_string()
    }

    /// Show today's month and select today
    pub fn go_to_today(&mut self) -> String {
        self.month = first_of_month(self.today);
        self.select(self.today)
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == self.today
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == Some(date)
    }

    /// Plain-text month grid; `[dd]` marks the selection, `*dd` marks today
    pub fn render(&self) -> String {
        let mut out = format!("{:^28}\n", self.title());
        out.push_str(
            &DAYS_OF_WEEK
                .iter()
                .map(|d| format!("{:>4}", d))
                .collect::<String>(),
        );
        out.push('\n');

        for week in self.days().chunks(7) {
            for cell in week {
                let text = match cell {
                    None => "    ".to_string(),
                    Some(day) if self.is_selected(*day) => format!("[{:>2}]", day.day()),
                    Some(day) if self.is_today(*day) => format!(" *{:>2}", day.day()),
                    Some(day) => format!("  {:>2}", day.day()),
                };
                out.push_str(&text);
            }
            out.push('\n');
        }
        out
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
