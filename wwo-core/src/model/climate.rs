use serde::Serialize;
use sxd_document::dom::Element;

use crate::decode::{DecodeError, Node, scalar};

/// Long-run statistics for one calendar month (`ClimateAverages/month`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClimateAverage {
    /// Month number, 1-12.
    pub index: u32,
    pub name: String,
    pub min_temp_c: f64,
    pub min_temp_f: f64,
    pub max_temp_c: f64,
    pub max_temp_f: f64,
    pub abs_min_temp_c: f64,
    pub abs_min_temp_f: f64,
    pub abs_max_temp_c: f64,
    pub abs_max_temp_f: f64,
    pub temp_c: f64,
    pub temp_f: f64,
    /// Whether this is an absolute or an averaged maximum is not documented.
    pub max_wind_speed_kmph: f64,
    pub max_wind_speed_mph: f64,
    pub max_wind_speed_knots: f64,
    pub max_wind_speed_ms: f64,
    pub wind_speed_kmph: f64,
    pub wind_speed_miles: f64,
    pub wind_speed_knots: f64,
    pub wind_speed_ms: f64,
    pub wind_gust_kmph: f64,
    pub wind_gust_miles: f64,
    pub wind_gust_knots: f64,
    pub wind_gust_ms: f64,
    pub daily_rainfall_mm: f64,
    pub daily_rainfall_inch: f64,
    pub monthly_rainfall_mm: f64,
    pub monthly_rainfall_inch: f64,
    /// %
    pub humidity: f64,
    /// %
    pub cloud: f64,
    pub visibility_km: f64,
    pub visibility_miles: f64,
    pub pressure_mb: f64,
    pub pressure_inch: f64,
    pub dry_days: u32,
    pub rain_days: u32,
    pub snow_days: u32,
    pub fog_days: u32,
    pub thunder_days: u32,
    pub uv_index: u32,
    /// Hours of sun per day.
    pub sun_hour: f64,
}

impl Node for ClimateAverage {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "index" => scalar(&mut self.index, child),
            "name" => scalar(&mut self.name, child),
            "avgMinTemp" => scalar(&mut self.min_temp_c, child),
            "avgMinTemp_F" => scalar(&mut self.min_temp_f, child),
            "avgMaxTemp" => scalar(&mut self.max_temp_c, child),
            "avgMaxTemp_F" => scalar(&mut self.max_temp_f, child),
            "absMinTemp" => scalar(&mut self.abs_min_temp_c, child),
            "absMinTemp_F" => scalar(&mut self.abs_min_temp_f, child),
            "absMaxTemp" => scalar(&mut self.abs_max_temp_c, child),
            "absMaxTemp_F" => scalar(&mut self.abs_max_temp_f, child),
            "avgTemp" => scalar(&mut self.temp_c, child),
            "avgTemp_F" => scalar(&mut self.temp_f, child),
            "maxWindSpeed_kmph" => scalar(&mut self.max_wind_speed_kmph, child),
            "maxWindSpeed_mph" => scalar(&mut self.max_wind_speed_mph, child),
            "maxWindSpeed_knots" => scalar(&mut self.max_wind_speed_knots, child),
            "maxWindSpeed_ms" => scalar(&mut self.max_wind_speed_ms, child),
            "avgWindSpeed_kmph" => scalar(&mut self.wind_speed_kmph, child),
            "avgWindSpeed_miles" => scalar(&mut self.wind_speed_miles, child),
            "avgWindSpeed_knots" => scalar(&mut self.wind_speed_knots, child),
            "avgWindSpeed_ms" => scalar(&mut self.wind_speed_ms, child),
            "avgWindGust_kmph" => scalar(&mut self.wind_gust_kmph, child),
            "avgWindGust_miles" => scalar(&mut self.wind_gust_miles, child),
            "avgWindGust_knots" => scalar(&mut self.wind_gust_knots, child),
            "avgWindGust_ms" => scalar(&mut self.wind_gust_ms, child),
            "avgDailyRainfall" => scalar(&mut self.daily_rainfall_mm, child),
            "avgDailyRainfall_inch" => scalar(&mut self.daily_rainfall_inch, child),
            "avgMonthlyRainfall" => scalar(&mut self.monthly_rainfall_mm, child),
            "avgMonthlyRainfall_inch" => scalar(&mut self.monthly_rainfall_inch, child),
            "avgHumidity" => scalar(&mut self.humidity, child),
            "avgCloud" => scalar(&mut self.cloud, child),
            "avgVis_km" => scalar(&mut self.visibility_km, child),
            "avgVis_miles" => scalar(&mut self.visibility_miles, child),
            "avgPressure_mb" => scalar(&mut self.pressure_mb, child),
            "avgPressure_inch" => scalar(&mut self.pressure_inch, child),
            "avgDryDays" => scalar(&mut self.dry_days, child),
            "avgRainDays" => scalar(&mut self.rain_days, child),
            "avgSnowDays" => scalar(&mut self.snow_days, child),
            "avgFogDays" => scalar(&mut self.fog_days, child),
            "avgThunderDays" => scalar(&mut self.thunder_days, child),
            "avgUVIndex" => scalar(&mut self.uv_index, child),
            "avgSunHour" => scalar(&mut self.sun_hour, child),
            _ => Ok(false),
        }
    }
}
