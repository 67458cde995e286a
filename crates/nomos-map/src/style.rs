//! Colour ramp and widget constants for rendering snapshots.

use serde::Serialize;

use nomos_cases::Observation;

/// The visual scheme of the choropleth.
///
/// Carries the colour ramp, its numeric domain, the fill for regions
/// without data, colour bar tick labels, and hover fields. The default
/// scheme is the published dashboard's four-step YlGnBu ramp over
/// 0..=200 cumulative cases.
#[derive(Debug, Clone, PartialEq)]
pub struct MapStyle {
    palette: Vec<String>,
    low: f64,
    high: f64,
    no_data_color: String,
    ticks: Vec<(u32, String)>,
    tooltips: Vec<(String, String)>,
}

impl MapStyle {
    /// The four-step YlGnBu scheme used by the published dashboard.
    #[must_use]
    pub fn ylgnbu() -> Self {
        Self {
            palette: vec![
                "#ffffcc".to_string(),
                "#a1dab4".to_string(),
                "#41b6c4".to_string(),
                "#225ea8".to_string(),
            ],
            low: 0.0,
            high: 200.0,
            no_data_color: "#d9d9d9".to_string(),
            ticks: vec![
                (0, "0".to_string()),
                (50, "50".to_string()),
                (100, "100".to_string()),
                (150, "150".to_string()),
                (200, ">200".to_string()),
            ],
            tooltips: vec![
                ("prefecture".to_string(), "@prefecture".to_string()),
                ("# of cases".to_string(), "@cases".to_string()),
            ],
        }
    }

    /// Fill colours from the lowest to the highest band.
    #[must_use]
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// The case count range covered by the ramp, as `(low, high)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Fill for regions whose figures are missing.
    #[must_use]
    pub fn no_data_color(&self) -> &str {
        &self.no_data_color
    }

    /// Colour bar tick positions and labels.
    #[must_use]
    pub fn ticks(&self) -> &[(u32, String)] {
        &self.ticks
    }

    /// Hover fields: display label paired with the property it reads.
    #[must_use]
    pub fn tooltips(&self) -> &[(String, String)] {
        &self.tooltips
    }

    /// Pick the fill colour for a case count.
    ///
    /// Maps the count linearly over the domain into the palette bands,
    /// clamping counts outside the domain into the end bands. A missing
    /// figure gets the no-data fill.
    #[must_use]
    pub fn color_for(&self, cases: Observation<u64>) -> &str {
        let Observation::Reported(count) = cases else {
            return &self.no_data_color;
        };
        let position = (count as f64 - self.low) / (self.high - self.low);
        let band = (position * self.palette.len() as f64).floor() as isize;
        let band = band.clamp(0, self.palette.len() as isize - 1) as usize;
        &self.palette[band]
    }

    /// Serialize the scheme for an external renderer.
    #[must_use]
    pub fn to_json(&self) -> String {
        let doc = StyleDoc {
            palette: &self.palette,
            low: self.low,
            high: self.high,
            no_data_color: &self.no_data_color,
            ticks: self
                .ticks
                .iter()
                .map(|(at, label)| TickDoc { at: *at, label })
                .collect(),
            tooltips: self
                .tooltips
                .iter()
                .map(|(label, field)| TooltipDoc { label, field })
                .collect(),
        };
        serde_json::to_string_pretty(&doc).expect("serialization cannot fail")
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        Self::ylgnbu()
    }
}

// --- Shadow structs for JSON serialization ---

#[derive(Serialize)]
struct StyleDoc<'a> {
    palette: &'a [String],
    low: f64,
    high: f64,
    no_data_color: &'a str,
    ticks: Vec<TickDoc<'a>>,
    tooltips: Vec<TooltipDoc<'a>>,
}

#[derive(Serialize)]
struct TickDoc<'a> {
    at: u32,
    label: &'a str,
}

#[derive(Serialize)]
struct TooltipDoc<'a> {
    label: &'a str,
    field: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        let style = MapStyle::ylgnbu();
        assert_eq!(style.color_for(Observation::Reported(0)), "#ffffcc");
        assert_eq!(style.color_for(Observation::Reported(49)), "#ffffcc");
        assert_eq!(style.color_for(Observation::Reported(50)), "#a1dab4");
        assert_eq!(style.color_for(Observation::Reported(100)), "#41b6c4");
        assert_eq!(style.color_for(Observation::Reported(149)), "#41b6c4");
        assert_eq!(style.color_for(Observation::Reported(150)), "#225ea8");
    }

    #[test]
    fn counts_above_the_domain_clamp_to_the_top_band() {
        let style = MapStyle::ylgnbu();
        assert_eq!(style.color_for(Observation::Reported(200)), "#225ea8");
        assert_eq!(style.color_for(Observation::Reported(1500)), "#225ea8");
    }

    #[test]
    fn missing_figures_get_the_no_data_fill() {
        let style = MapStyle::ylgnbu();
        assert_eq!(style.color_for(Observation::NoData), "#d9d9d9");
    }

    #[test]
    fn scheme_constants() {
        let style = MapStyle::default();
        assert_eq!(style.palette().len(), 4);
        assert_eq!(style.domain(), (0.0, 200.0));
        assert_eq!(style.ticks().last().unwrap().1, ">200");
        assert_eq!(style.tooltips()[0].1, "@prefecture");
    }

    #[test]
    fn json_structure() {
        let style = MapStyle::ylgnbu();
        let body: serde_json::Value = serde_json::from_str(&style.to_json()).unwrap();

        assert_eq!(body["palette"].as_array().unwrap().len(), 4);
        assert_eq!(body["palette"][0], "#ffffcc");
        assert_eq!(body["low"], 0.0);
        assert_eq!(body["high"], 200.0);
        assert_eq!(body["no_data_color"], "#d9d9d9");
        assert_eq!(body["ticks"][4]["at"], 200);
        assert_eq!(body["ticks"][4]["label"], ">200");
        assert_eq!(body["tooltips"][1]["label"], "# of cases");
        assert_eq!(body["tooltips"][1]["field"], "@cases");
    }
}
