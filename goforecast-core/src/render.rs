use std::io::{self, Write};

use crate::model::Forecast;

/// Write the current-conditions report for `address` to `out`.
pub fn render_forecast<W: Write>(out: &mut W, forecast: &Forecast, address: &str) -> io::Result<()> {
    let now = &forecast.currently;

    writeln!(out, "Displaying current forecast for {address}\n")?;
    writeln!(out, "---Currently---")?;
    writeln!(out, "Summary: {}\n", now.summary)?;
    writeln!(out, "Temperature: {:.2} F", now.temperature)?;
    writeln!(out, "Pressure: {:.2} kPa", now.pressure)?;
    writeln!(out, "Wind Speed: {:.2} mph", now.wind_speed)?;
    writeln!(out, "Precipitation Chance: {:.2}%", now.precip_probability)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataPoint;

    #[test]
    fn renders_fixed_report() {
        let forecast = Forecast {
            currently: DataPoint {
                summary: "Partly Cloudy".into(),
                temperature: 61.234,
                pressure: 1016.5,
                wind_speed: 4.1,
                precip_probability: 0.05,
                ..DataPoint::default()
            },
            ..Forecast::default()
        };

        let mut out = Vec::new();
        render_forecast(&mut out, &forecast, "94109").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Displaying current forecast for 94109\n\
             \n\
             ---Currently---\n\
             Summary: Partly Cloudy\n\
             \n\
             Temperature: 61.23 F\n\
             Pressure: 1016.50 kPa\n\
             Wind Speed: 4.10 mph\n\
             Precipitation Chance: 0.05%\n"
        );
    }
}
