//! Effective authority priority. Lower is more authoritative.

use chrono::NaiveDate;
use garage_core::models::EvidenceItem;

const DAYS_PER_YEAR: f64 = 365.0;
const MAX_AGE_PENALTY: f64 = 1.0;

/// Age penalty in `[0, 1]`: one point per year, capped. Undated and
/// future-dated items get none.
pub fn age_penalty(effective_date: Option<NaiveDate>, today: NaiveDate) -> f64 {
    match effective_date {
        Some(date) => {
            let days = (today - date).num_days().max(0) as f64;
            (days / DAYS_PER_YEAR).min(MAX_AGE_PENALTY)
        }
        None => 0.0,
    }
}

pub fn effective_priority(item: &EvidenceItem, today: NaiveDate) -> f64 {
    f64::from(item.source_type.base_priority()) + age_penalty(item.effective_date, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_core::models::SourceType;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn penalty_caps_at_one_year() {
        let today = day(2025, 1, 1);
        assert_eq!(age_penalty(Some(day(2020, 1, 1)), today), 1.0);
        assert_eq!(age_penalty(None, today), 0.0);
        assert_eq!(age_penalty(Some(day(2026, 1, 1)), today), 0.0);
    }

    #[test]
    fn fully_aged_bulletin_lands_on_campaign_base() {
        let today = day(2025, 6, 1);
        let bulletin = EvidenceItem::new("tsb", SourceType::Bulletin).with_date(day(2010, 1, 1));
        let campaign = EvidenceItem::new("campaign", SourceType::Campaign).with_date(today);
        assert_eq!(effective_priority(&bulletin, today), 3.0);
        assert_eq!(effective_priority(&campaign, today), 3.0);
    }
}
