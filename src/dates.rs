use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

/// A date worth counting from, shown as "time since".
#[derive(Debug, Clone)]
pub struct LabeledDate {
    pub label: String,
    pub date: DateTime<Tz>,
}

impl LabeledDate {
    /// Midnight of `year-month-day` in `tz`.
    pub fn midnight(label: &str, year: i32, month: u32, day: u32, tz: Tz) -> Result<Self> {
        let date = tz
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .earliest()
            .ok_or_else(|| anyhow!("{year:04}-{month:02}-{day:02} has no midnight in {tz}"))?;

        Ok(Self {
            label: label.to_string(),
            date,
        })
    }
}

const HOME_TZ: &str = "America/Toronto";

/// The compiled-in dates, in display order.
pub fn meaningful_dates() -> Result<Vec<LabeledDate>> {
    let toronto: Tz = HOME_TZ
        .parse()
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("error loading timezone info for {HOME_TZ}"))?;

    Ok(vec![
        LabeledDate::midnight("Beto's TIC", 2016, 4, 7, toronto)?,
        LabeledDate::midnight("Girls' TIC", 2016, 4, 27, toronto)?,
        LabeledDate::midnight("In job", 2016, 4, 25, toronto)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc};

    #[test]
    fn three_dates_in_toronto() {
        let dates = meaningful_dates().unwrap();
        let labels: Vec<_> = dates.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Beto's TIC", "Girls' TIC", "In job"]);

        for d in &dates {
            assert_eq!(d.date.timezone(), chrono_tz::America::Toronto);
            assert_eq!((d.date.year(), d.date.month()), (2016, 4));
            assert_eq!(d.date.hour(), 0);
        }
        // EDT in April
        assert_eq!(
            dates[0].date.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2016, 4, 7, 4, 0, 0).unwrap()
        );
    }

    #[test]
    fn invalid_calendar_date_is_an_error() {
        assert!(LabeledDate::midnight("nope", 2015, 2, 29, Tz::UTC).is_err());
    }
}
