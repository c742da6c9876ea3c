//! Human-readable rendering of reports.

use wwo_core::model::{Area, Astronomy, CurrentCondition, Day};
use wwo_core::{EventTime, Local, Marine, PastLocal, Search, Ski, TimeZone};

pub fn local(report: &Local) {
    print_area(&report.nearest_area);
    current(&report.current);

    for day in &report.weather {
        print_day_summary(day);
    }
}

/// Prints only the fields the provider filled in.
pub fn current(cc: &CurrentCondition) {
    let c = &cc.condition;
    println!("Current Conditions:");

    if cc.observation_time != EventTime::default() {
        println!("  at\t\t{}", cc.observation_time);
    }
    if cc.temp_c != 0 {
        println!("  Temperature\t{}°C", cc.temp_c);
    }
    if c.feels_like_c != 0 {
        println!("  Feels Like\t{}°C", c.feels_like_c);
    }
    if !c.weather_desc.is_empty() {
        println!("  Weather\t{}", c.weather_desc.trim());
    }
    if c.humidity != 0 {
        println!("  Humidity\t{}%", c.humidity);
    }
    if c.dew_point_c != 0 {
        println!("  Dew Point\t{}°C", c.dew_point_c);
    }
    if c.pressure != 0 {
        println!("  Pressure\t{} mbar", c.pressure);
    }
    if c.visibility != 0 {
        println!("  Visibility\t{} km", c.visibility);
    }
    if c.cloud_cover != 0 {
        println!("  Cloud cover\t{}%", c.cloud_cover);
    }
    if c.precip_mm != 0.0 {
        println!("  Precipitation\t{} mm", c.precip_mm);
    }
    if c.wind_speed_kmph != 0 {
        println!("  Wind Speed\t{} km/h", c.wind_speed_kmph);
    }
    if c.wind_dir_degree != 0 {
        println!("  Wind Direction\t{}° E of N ({})", c.wind_dir_degree, c.wind_dir_compass);
    }
}

pub fn marine(report: &Marine) {
    print_area(&report.nearest_area);

    for day in &report.weather {
        print_day_summary(&day.day);

        let max_swell = day.day.hourly.iter().map(|h| h.swell_height_m).fold(0.0, f64::max);
        if max_swell > 0.0 {
            println!("    swell up to {max_swell:.1} m");
        }
        for tide in &day.tides {
            println!("    {:<6} {}  {:.1} m", tide.kind, tide.time, tide.height_m);
        }
    }
}

pub fn ski(report: &Ski) {
    print_area(&report.nearest_area);

    for day in &report.weather {
        print_day_summary(&day.day);
        println!(
            "    snow {}% / {:.1} cm   top {}..{}°C   mid {}..{}°C   bottom {}..{}°C",
            day.chance_of_snow,
            day.total_snowfall_cm,
            day.top.min_temp_c,
            day.top.max_temp_c,
            day.mid.min_temp_c,
            day.mid.max_temp_c,
            day.bottom.min_temp_c,
            day.bottom.max_temp_c,
        );
    }
}

pub fn past(report: &PastLocal) {
    print_area(&report.nearest_area);

    for day in &report.weather {
        print_day_summary(day);
    }
}

pub fn search(report: &Search) {
    if report.results.is_empty() {
        println!("No matching locations.");
    }

    for area in &report.results {
        let mut line = format!("{}, {}, {} ({:.3}, {:.3})", area.name, area.region, area.country, area.latitude, area.longitude);
        if let Some(zone) = &area.zone {
            line.push_str(&format!("  UTC{:+}", zone.utc_offset));
        }
        println!("{line}");
    }
}

pub fn time_zone(report: &TimeZone) {
    println!("{}: UTC{:+}", report.request.query, report.zone.utc_offset);
}

fn print_area(area: &Area) {
    if !area.name.is_empty() {
        println!("{}, {}, {}", area.name, area.region, area.country);
    }
}

fn print_day_summary<S>(day: &Day<S>) {
    println!(
        "{}  {}..{}°C  sun {:.1} h  uv {}  {}",
        day.date,
        day.temp.min_temp_c,
        day.temp.max_temp_c,
        day.sun_hour,
        day.uv_index,
        astronomy(&day.astronomy),
    );
}

fn astronomy(a: &Astronomy) -> String {
    format!(
        "sunrise {} sunset {} moonrise {} moonset {}",
        a.sunrise, a.sunset, a.moonrise, a.moonset
    )
}
