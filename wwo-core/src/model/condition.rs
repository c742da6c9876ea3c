use serde::Serialize;
use sxd_document::dom::Element;

use crate::clock::{EventTime, HmmTime};
use crate::decode::{DecodeError, Node, nested, scalar};

/// One timestamped set of measurements.
///
/// Metric and imperial values are separate payload fields and are kept as
/// sent; neither is derived from the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Condition {
    /// Local time of the sample.
    pub time: HmmTime,
    /// %
    pub cloud_cover: u32,
    pub dew_point_c: i32,
    pub dew_point_f: i32,
    pub feels_like_c: i32,
    pub feels_like_f: i32,
    pub heat_index_c: i32,
    pub heat_index_f: i32,
    /// %
    pub humidity: u32,
    pub precip_mm: f64,
    pub precip_inches: f64,
    /// mbar
    pub pressure: u32,
    pub pressure_inches: u32,
    pub temp_c: i32,
    pub temp_f: i32,
    /// km
    pub visibility: u32,
    pub visibility_miles: u32,
    /// <https://developer.worldweatheronline.com/api/docs/weather-icons.aspx>
    pub weather_code: u32,
    pub weather_desc: String,
    pub weather_icon_url: String,
    pub wind_chill_c: i32,
    pub wind_chill_f: i32,
    /// Degrees east of north.
    pub wind_dir_degree: u32,
    /// 16-point compass, e.g. "NNE".
    pub wind_dir_compass: String,
    pub wind_gust_kmph: u32,
    pub wind_gust_miles: u32,
    pub wind_speed_kmph: u32,
    pub wind_speed_knots: u32,
    pub wind_speed_meter_sec: u32,
    pub wind_speed_miles: u32,
}

impl Node for Condition {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "time" => scalar(&mut self.time, child),
            "cloudcover" => scalar(&mut self.cloud_cover, child),
            "DewPointC" => scalar(&mut self.dew_point_c, child),
            "DewPointF" => scalar(&mut self.dew_point_f, child),
            "FeelsLikeC" => scalar(&mut self.feels_like_c, child),
            "FeelsLikeF" => scalar(&mut self.feels_like_f, child),
            "HeatIndexC" => scalar(&mut self.heat_index_c, child),
            "HeatIndexF" => scalar(&mut self.heat_index_f, child),
            "humidity" => scalar(&mut self.humidity, child),
            "precipMM" => scalar(&mut self.precip_mm, child),
            "precipInches" => scalar(&mut self.precip_inches, child),
            "pressure" => scalar(&mut self.pressure, child),
            "pressureInches" => scalar(&mut self.pressure_inches, child),
            "tempC" => scalar(&mut self.temp_c, child),
            "tempF" => scalar(&mut self.temp_f, child),
            "visibility" => scalar(&mut self.visibility, child),
            "visibilityMiles" => scalar(&mut self.visibility_miles, child),
            "weatherCode" => scalar(&mut self.weather_code, child),
            "weatherDesc" => scalar(&mut self.weather_desc, child),
            "weatherIconUrl" => scalar(&mut self.weather_icon_url, child),
            "WindChillC" => scalar(&mut self.wind_chill_c, child),
            "WindChillF" => scalar(&mut self.wind_chill_f, child),
            "winddirDegree" => scalar(&mut self.wind_dir_degree, child),
            "winddir16Point" => scalar(&mut self.wind_dir_compass, child),
            "WindGustKmph" => scalar(&mut self.wind_gust_kmph, child),
            "WindGustMiles" => scalar(&mut self.wind_gust_miles, child),
            "windspeedKmph" => scalar(&mut self.wind_speed_kmph, child),
            "windspeedKnots" => scalar(&mut self.wind_speed_knots, child),
            "windspeedMeterSec" => scalar(&mut self.wind_speed_meter_sec, child),
            "windspeedMiles" => scalar(&mut self.wind_speed_miles, child),
            _ => Ok(false),
        }
    }
}

/// The observation in a local forecast's `current_condition`.
///
/// The provider reports the observation time as a 12-hour clock string and
/// the temperature as `temp_C`/`temp_F`; these are kept apart from the
/// embedded sample's `time`/`tempC`/`tempF`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CurrentCondition {
    pub observation_time: EventTime,
    pub temp_c: i32,
    pub temp_f: i32,
    pub uv_index: u32,
    pub condition: Condition,
}

impl Node for CurrentCondition {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "observation_time" => scalar(&mut self.observation_time, child),
            "temp_C" => scalar(&mut self.temp_c, child),
            "temp_F" => scalar(&mut self.temp_f, child),
            "uvIndex" => scalar(&mut self.uv_index, child),
            _ => self.condition.visit(name, child),
        }
    }
}

/// Percent chances attached to forecast samples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForecastChances {
    pub fog: u32,
    pub frost: u32,
    pub overcast: u32,
    pub rain: u32,
    pub snow: u32,
    /// Not in the provider documentation.
    pub high_temp: u32,
    /// Chance of remaining dry. Not in the provider documentation.
    pub dry: u32,
    pub sunshine: u32,
    pub thunder: u32,
    pub windy: u32,
}

impl Node for ForecastChances {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "chanceoffog" => scalar(&mut self.fog, child),
            "chanceoffrost" => scalar(&mut self.frost, child),
            "chanceofovercast" => scalar(&mut self.overcast, child),
            "chanceofrain" => scalar(&mut self.rain, child),
            "chanceofsnow" => scalar(&mut self.snow, child),
            "chanceofhightemp" => scalar(&mut self.high_temp, child),
            "chanceofremdry" => scalar(&mut self.dry, child),
            "chanceofsunshine" => scalar(&mut self.sunshine, child),
            "chanceofthunder" => scalar(&mut self.thunder, child),
            "chanceofwindy" => scalar(&mut self.windy, child),
            _ => Ok(false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastCondition {
    #[serde(flatten)]
    pub condition: Condition,
    pub chance_of: ForecastChances,
}

impl Node for ForecastCondition {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        if self.condition.visit(name, child)? {
            return Ok(true);
        }
        self.chance_of.visit(name, child)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarineCondition {
    #[serde(flatten)]
    pub condition: Condition,
    /// Significant wave height, m.
    pub sig_height_m: f64,
    pub swell_height_m: f64,
    pub swell_height_ft: f64,
    /// Degrees east of north.
    pub swell_dir: u32,
    pub swell_dir_compass: String,
    pub swell_period_secs: f64,
    pub water_temp_c: i32,
    pub water_temp_f: i32,
}

impl Node for MarineCondition {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "sigHeight_m" => scalar(&mut self.sig_height_m, child),
            "swellHeight_m" => scalar(&mut self.swell_height_m, child),
            // documented as swell_Height_ft, sent as swellHeight_ft
            "swellHeight_ft" => scalar(&mut self.swell_height_ft, child),
            "swellDir" => scalar(&mut self.swell_dir, child),
            "swellDir16Point" => scalar(&mut self.swell_dir_compass, child),
            "swellPeriod_secs" => scalar(&mut self.swell_period_secs, child),
            "waterTemp_C" => scalar(&mut self.water_temp_c, child),
            "waterTemp_F" => scalar(&mut self.water_temp_f, child),
            _ => self.condition.visit(name, child),
        }
    }
}

/// Conditions at one elevation band of a ski resort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelCondition {
    pub temp_c: i32,
    pub temp_f: i32,
    pub wind_speed_kmph: u32,
    pub wind_speed_knots: u32,
    pub wind_speed_meter_sec: u32,
    pub wind_speed_miles: u32,
    pub wind_dir_degree: u32,
    pub wind_dir_compass: String,
    pub weather_code: u32,
    pub weather_desc: String,
    pub weather_icon_url: String,
}

impl Node for LevelCondition {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "tempC" => scalar(&mut self.temp_c, child),
            "tempF" => scalar(&mut self.temp_f, child),
            "windspeedKmph" => scalar(&mut self.wind_speed_kmph, child),
            "windspeedKnots" => scalar(&mut self.wind_speed_knots, child),
            "windspeedMeterSec" => scalar(&mut self.wind_speed_meter_sec, child),
            "windspeedMiles" => scalar(&mut self.wind_speed_miles, child),
            "winddirDegree" => scalar(&mut self.wind_dir_degree, child),
            "winddir16Point" => scalar(&mut self.wind_dir_compass, child),
            "weatherCode" => scalar(&mut self.weather_code, child),
            "weatherDesc" => scalar(&mut self.weather_desc, child),
            "weatherIconUrl" => scalar(&mut self.weather_icon_url, child),
            _ => Ok(false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkiCondition {
    /// Local time of the sample.
    pub time: HmmTime,
    pub chance_of: ForecastChances,
    pub top: LevelCondition,
    pub mid: LevelCondition,
    pub bottom: LevelCondition,
    pub cloud_cover: u32,
    pub visibility: u32,
    pub visibility_miles: u32,
    pub pressure: u32,
    pub pressure_inches: u32,
    pub snowfall_cm: f64,
    /// Freezing level elevation, m.
    pub freeze_level: u32,
    pub humidity: u32,
    pub precip_mm: f64,
    pub precip_inches: f64,
}

impl Node for SkiCondition {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "time" => scalar(&mut self.time, child),
            "top" => nested(&mut self.top, child),
            "mid" => nested(&mut self.mid, child),
            "bottom" => nested(&mut self.bottom, child),
            "cloudcover" => scalar(&mut self.cloud_cover, child),
            "visibility" => scalar(&mut self.visibility, child),
            "visibilityMiles" => scalar(&mut self.visibility_miles, child),
            "pressure" => scalar(&mut self.pressure, child),
            "pressureInches" => scalar(&mut self.pressure_inches, child),
            "snowfall_cm" => scalar(&mut self.snowfall_cm, child),
            "freezeLevel" => scalar(&mut self.freeze_level, child),
            "humidity" => scalar(&mut self.humidity, child),
            "precipMM" => scalar(&mut self.precip_mm, child),
            "precipInches" => scalar(&mut self.precip_inches, child),
            _ => self.chance_of.visit(name, child),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn current_condition_keeps_observation_fields_apart() {
        let xml = br#"<current_condition>
            <observation_time>01:15 PM</observation_time>
            <temp_C>12</temp_C>
            <temp_F>54</temp_F>
            <tempC>99</tempC>
            <weatherDesc><![CDATA[Partly cloudy]]></weatherDesc>
            <windspeedKmph>15</windspeedKmph>
            <winddir16Point>E</winddir16Point>
        </current_condition>"#;

        let (cc, err) = decode::<CurrentCondition>(xml);
        assert!(err.is_none());
        assert_eq!(cc.observation_time.to_string(), "13:15");
        assert_eq!(cc.temp_c, 12);
        assert_eq!(cc.temp_f, 54);
        assert_eq!(cc.condition.temp_c, 99);
        assert_eq!(cc.condition.weather_desc, "Partly cloudy");
        assert_eq!(cc.condition.wind_speed_kmph, 15);
        assert_eq!(cc.condition.wind_dir_compass, "E");
    }

    #[test]
    fn forecast_condition_routes_chances_and_measurements() {
        let xml = br#"<hourly>
            <time>300</time>
            <tempC>4</tempC>
            <tempF>39</tempF>
            <chanceofrain>81</chanceofrain>
            <chanceofremdry>0</chanceofremdry>
            <chanceofsnow>3</chanceofsnow>
        </hourly>"#;

        let (fc, err) = decode::<ForecastCondition>(xml);
        assert!(err.is_none());
        assert_eq!(fc.condition.time.to_string(), "03:00");
        assert_eq!(fc.condition.temp_c, 4);
        assert_eq!(fc.condition.temp_f, 39);
        assert_eq!(fc.chance_of.rain, 81);
        assert_eq!(fc.chance_of.snow, 3);
    }

    #[test]
    fn marine_condition_decodes_swell_fields() {
        let xml = br#"<hourly>
            <time>1200</time>
            <sigHeight_m>1.9</sigHeight_m>
            <swellHeight_m>1.2</swellHeight_m>
            <swellHeight_ft>3.9</swellHeight_ft>
            <swellDir>251</swellDir>
            <swellDir16Point>WSW</swellDir16Point>
            <swellPeriod_secs>7.4</swellPeriod_secs>
            <waterTemp_C>13</waterTemp_C>
            <waterTemp_F>55</waterTemp_F>
            <humidity>77</humidity>
        </hourly>"#;

        let (mc, err) = decode::<MarineCondition>(xml);
        assert!(err.is_none());
        assert_eq!(mc.condition.time.to_string(), "12:00");
        assert_eq!(mc.sig_height_m, 1.9);
        assert_eq!(mc.swell_height_ft, 3.9);
        assert_eq!(mc.swell_dir, 251);
        assert_eq!(mc.swell_dir_compass, "WSW");
        assert_eq!(mc.swell_period_secs, 7.4);
        assert_eq!((mc.water_temp_c, mc.water_temp_f), (13, 55));
        assert_eq!(mc.condition.humidity, 77);
    }

    #[test]
    fn ski_condition_decodes_elevation_bands() {
        let xml = br#"<hourly>
            <time>900</time>
            <top><tempC>-8</tempC><tempF>18</tempF><winddir16Point>N</winddir16Point></top>
            <mid><tempC>-4</tempC></mid>
            <bottom><tempC>1</tempC><weatherDesc><![CDATA[Light snow]]></weatherDesc></bottom>
            <chanceofsnow>64</chanceofsnow>
            <snowfall_cm>0.7</snowfall_cm>
            <freezeLevel>850</freezeLevel>
        </hourly>"#;

        let (sc, err) = decode::<SkiCondition>(xml);
        assert!(err.is_none());
        assert_eq!(sc.time.to_string(), "09:00");
        assert_eq!(sc.top.temp_c, -8);
        assert_eq!(sc.top.temp_f, 18);
        assert_eq!(sc.top.wind_dir_compass, "N");
        assert_eq!(sc.mid.temp_c, -4);
        assert_eq!(sc.bottom.weather_desc, "Light snow");
        assert_eq!(sc.chance_of.snow, 64);
        assert_eq!(sc.snowfall_cm, 0.7);
        assert_eq!(sc.freeze_level, 850);
    }

    #[test]
    fn negative_unsigned_field_is_a_decode_error() {
        let xml = b"<hourly><humidity>50</humidity><cloudcover>-1</cloudcover><pressure>1000</pressure></hourly>";
        let (c, err) = decode::<Condition>(xml);
        assert!(matches!(err, Some(DecodeError::Field { ref element, .. }) if element == "cloudcover"));
        assert_eq!(c.humidity, 50);
        assert_eq!(c.pressure, 0);
    }
}
