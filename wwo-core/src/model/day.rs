use chrono::NaiveDate;
use serde::Serialize;
use sxd_document::dom::Element;

use crate::clock::EventTime;
use crate::decode::{DecodeError, Node, nested, push, push_each, scalar};
use crate::model::condition::{Condition, ForecastCondition, MarineCondition, SkiCondition};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TempRange {
    pub max_temp_c: i32,
    pub max_temp_f: i32,
    pub min_temp_c: i32,
    pub min_temp_f: i32,
}

impl Node for TempRange {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "maxtempC" => scalar(&mut self.max_temp_c, child),
            "maxtempF" => scalar(&mut self.max_temp_f, child),
            "mintempC" => scalar(&mut self.min_temp_c, child),
            "mintempF" => scalar(&mut self.min_temp_f, child),
            _ => Ok(false),
        }
    }
}

/// Local clock times of the day's astronomical events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Astronomy {
    pub sunrise: EventTime,
    pub sunset: EventTime,
    pub moonrise: EventTime,
    pub moonset: EventTime,
}

impl Node for Astronomy {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "sunrise" => scalar(&mut self.sunrise, child),
            "sunset" => scalar(&mut self.sunset, child),
            "moonrise" => scalar(&mut self.moonrise, child),
            "moonset" => scalar(&mut self.moonset, child),
            _ => Ok(false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tide {
    pub time: EventTime,
    pub height_m: f64,
    /// "HIGH", "LOW" or "NORMAL".
    pub kind: String,
}

impl Node for Tide {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "tideTime" => scalar(&mut self.time, child),
            "tideHeight_mt" => scalar(&mut self.height_m, child),
            "tide_type" => scalar(&mut self.kind, child),
            _ => Ok(false),
        }
    }
}

/// One `weather` entry: a day's summary plus its intra-day samples of type `S`.
///
/// Samples are kept in payload order, which the provider sends by
/// non-decreasing time of day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Day<S> {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub temp: TempRange,
    /// Hours of sunshine.
    pub sun_hour: f64,
    pub total_snow_cm: f64,
    pub uv_index: u32,
    pub astronomy: Astronomy,
    pub hourly: Vec<S>,
}

impl<S: Node + Default> Node for Day<S> {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "date" => scalar(&mut self.date, child),
            "sunHour" => scalar(&mut self.sun_hour, child),
            "totalSnow_cm" => scalar(&mut self.total_snow_cm, child),
            "uvIndex" => scalar(&mut self.uv_index, child),
            "astronomy" => nested(&mut self.astronomy, child),
            "hourly" => push(&mut self.hourly, child),
            _ => self.temp.visit(name, child),
        }
    }
}

/// A day of a local forecast.
pub type ForecastDay = Day<ForecastCondition>;

/// A day of past local weather.
pub type PastDay = Day<Condition>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarineDay {
    #[serde(flatten)]
    pub day: Day<MarineCondition>,
    pub tides: Vec<Tide>,
}

impl Node for MarineDay {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "tides" => push_each(&mut self.tides, child, "tide_data"),
            _ => self.day.visit(name, child),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkiDay {
    #[serde(flatten)]
    pub day: Day<SkiCondition>,
    pub chance_of_snow: u32,
    pub total_snowfall_cm: f64,
    pub top: TempRange,
    pub mid: TempRange,
    pub bottom: TempRange,
    pub tides: Vec<Tide>,
}

impl Node for SkiDay {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "chanceofsnow" => scalar(&mut self.chance_of_snow, child),
            "totalSnowfall_cm" => scalar(&mut self.total_snowfall_cm, child),
            "top" => nested(&mut self.top, child),
            "mid" => nested(&mut self.mid, child),
            "bottom" => nested(&mut self.bottom, child),
            "tides" => push_each(&mut self.tides, child, "tide_data"),
            _ => self.day.visit(name, child),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn day_keeps_sample_order_and_astronomy_sentinels() {
        let xml = br#"<weather>
            <date>2014-01-10</date>
            <astronomy>
                <sunrise>07:59 AM</sunrise>
                <sunset>04:20 PM</sunset>
                <moonrise>No moonrise</moonrise>
                <moonset>12:00 AM</moonset>
            </astronomy>
            <maxtempC>9</maxtempC>
            <maxtempF>48</maxtempF>
            <mintempC>3</mintempC>
            <mintempF>37</mintempF>
            <totalSnow_cm>0.0</totalSnow_cm>
            <sunHour>4.5</sunHour>
            <uvIndex>2</uvIndex>
            <hourly><time>0</time><tempC>4</tempC></hourly>
            <hourly><time>300</time><tempC>3</tempC></hourly>
            <hourly><time>600</time><tempC>5</tempC></hourly>
        </weather>"#;

        let (day, err) = decode::<PastDay>(xml);
        assert!(err.is_none());
        assert_eq!(day.date.format("%Y-%m-%d").to_string(), "2014-01-10");
        assert_eq!(day.temp, TempRange { max_temp_c: 9, max_temp_f: 48, min_temp_c: 3, min_temp_f: 37 });
        assert_eq!(day.sun_hour, 4.5);
        assert_eq!(day.uv_index, 2);
        assert_eq!(day.astronomy.sunset.to_string(), "16:20");
        assert_eq!(day.astronomy.moonrise, EventTime::DoesNotOccur);
        assert_eq!(day.astronomy.moonset, EventTime::default());
        assert_ne!(day.astronomy.moonrise, day.astronomy.moonset);

        let times: Vec<String> = day.hourly.iter().map(|c| c.time.to_string()).collect();
        assert_eq!(times, ["00:00", "03:00", "06:00"]);
        assert!(day.hourly.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn marine_day_collects_tides_from_wrapper() {
        let xml = br#"<weather>
            <date>2014-01-10</date>
            <tides>
                <tide_data><tideTime>5:41 AM</tideTime><tideHeight_mt>4.3</tideHeight_mt><tide_type>HIGH</tide_type></tide_data>
                <tide_data><tideTime>11:52 AM</tideTime><tideHeight_mt>1.1</tideHeight_mt><tide_type>LOW</tide_type></tide_data>
            </tides>
            <hourly><time>0</time><swellHeight_m>0.9</swellHeight_m></hourly>
        </weather>"#;

        let (day, err) = decode::<MarineDay>(xml);
        assert!(err.is_none());
        assert_eq!(day.tides.len(), 2);
        assert_eq!(day.tides[0].time.to_string(), "05:41");
        assert_eq!(day.tides[0].height_m, 4.3);
        assert_eq!(day.tides[1].kind, "LOW");
        assert_eq!(day.day.hourly.len(), 1);
        assert_eq!(day.day.hourly[0].swell_height_m, 0.9);
    }

    #[test]
    fn ski_day_keeps_both_snow_totals() {
        let xml = br#"<weather>
            <date>2014-01-11</date>
            <chanceofsnow>87</chanceofsnow>
            <totalSnowfall_cm>6.2</totalSnowfall_cm>
            <totalSnow_cm>5.9</totalSnow_cm>
            <top><maxtempC>-5</maxtempC><mintempC>-11</mintempC></top>
            <mid><maxtempC>-2</maxtempC></mid>
            <bottom><maxtempC>3</maxtempC><maxtempF>37</maxtempF></bottom>
            <hourly><time>0</time><top><tempC>-9</tempC></top></hourly>
        </weather>"#;

        let (day, err) = decode::<SkiDay>(xml);
        assert!(err.is_none());
        assert_eq!(day.chance_of_snow, 87);
        assert_eq!(day.total_snowfall_cm, 6.2);
        assert_eq!(day.day.total_snow_cm, 5.9);
        assert_eq!(day.top.max_temp_c, -5);
        assert_eq!(day.top.min_temp_c, -11);
        assert_eq!(day.mid.max_temp_c, -2);
        assert_eq!((day.bottom.max_temp_c, day.bottom.max_temp_f), (3, 37));
        assert_eq!(day.day.hourly[0].top.temp_c, -9);
    }

    #[test]
    fn bad_date_stops_the_day() {
        let xml = b"<weather><uvIndex>3</uvIndex><date>10/01/2014</date><sunHour>6</sunHour></weather>";
        let (day, err) = decode::<PastDay>(xml);
        assert!(matches!(err, Some(DecodeError::Field { .. })));
        assert_eq!(day.uv_index, 3);
        assert_eq!(day.sun_hour, 0.0);
    }
}
