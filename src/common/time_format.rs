// src/common/time_format.rs

// Horários trafegam como "HH:MM" (o formato da agenda), não "HH:MM:SS".

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::middleware::i18n::Locale;

pub const HHMM: &str = "%H:%M";

pub fn format_hhmm(time: NaiveTime) -> String {
    time.format(HHMM).to_string()
}

pub fn weekday_short(date: NaiveDate, locale: &Locale) -> &'static str {
    let en = locale.is_english();
    match date.weekday() {
        Weekday::Mon => if en { "Mon" } else { "Lun" },
        Weekday::Tue => if en { "Tue" } else { "Mar" },
        Weekday::Wed => if en { "Wed" } else { "Mié" },
        Weekday::Thu => if en { "Thu" } else { "Jue" },
        Weekday::Fri => if en { "Fri" } else { "Vie" },
        Weekday::Sat => if en { "Sat" } else { "Sáb" },
        Weekday::Sun => if en { "Sun" } else { "Dom" },
    }
}

const MONTHS_ES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `month` vai de 1 a 12; fora disso devolve "?".
pub fn month_short(month: u32, locale: &Locale) -> &'static str {
    let table = if locale.is_english() { &MONTHS_EN } else { &MONTHS_ES };
    month
        .checked_sub(1)
        .and_then(|idx| table.get(idx as usize))
        .copied()
        .unwrap_or("?")
}

pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_hhmm(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, super::HHMM)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|_| de::Error::custom(format!("horário inválido: '{raw}' (esperado HH:MM)")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Slot {
        #[serde(with = "hhmm")]
        at: NaiveTime,
    }

    #[test]
    fn serializes_without_seconds() {
        let slot = Slot { at: NaiveTime::from_hms_opt(9, 30, 0).unwrap() };
        assert_eq!(serde_json::to_string(&slot).unwrap(), r#"{"at":"09:30"}"#);
    }

    #[test]
    fn accepts_both_short_and_long_forms() {
        let short: Slot = serde_json::from_str(r#"{"at":"16:30"}"#).unwrap();
        let long: Slot = serde_json::from_str(r#"{"at":"16:30:00"}"#).unwrap();
        assert_eq!(short.at, long.at);
    }

    #[test]
    fn weekday_and_month_labels_follow_locale() {
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 27).unwrap();
        assert_eq!(weekday_short(saturday, &Locale::default()), "Sáb");
        assert_eq!(weekday_short(saturday, &Locale("en".into())), "Sat");
        assert_eq!(month_short(1, &Locale::default()), "Ene");
        assert_eq!(month_short(12, &Locale("en".into())), "Dec");
        assert_eq!(month_short(0, &Locale::default()), "?");
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Slot>(r#"{"at":"half past nine"}"#).is_err());
    }
}
