use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance units found in furniture source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "cm", alias = "centimeter", alias = "centimeters")]
    Centimeter,
    #[serde(rename = "m", alias = "meter", alias = "meters")]
    Meter,
    #[default]
    #[serde(rename = "in", alias = "inch", alias = "inches")]
    Inch,
    #[serde(rename = "ft", alias = "foot", alias = "feet")]
    Foot,
    #[serde(rename = "yd", alias = "yard", alias = "yards")]
    Yard,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 5] = [
        DistanceUnit::Centimeter,
        DistanceUnit::Meter,
        DistanceUnit::Inch,
        DistanceUnit::Foot,
        DistanceUnit::Yard,
    ];

    /// Number of inches in one of this unit.
    pub fn inches_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Centimeter => 0.3937,
            DistanceUnit::Meter => 39.37,
            DistanceUnit::Inch => 1.0,
            DistanceUnit::Foot => 12.0,
            DistanceUnit::Yard => 36.0,
        }
    }

    /// Short symbol used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Centimeter => "cm",
            DistanceUnit::Meter => "m",
            DistanceUnit::Inch => "in",
            DistanceUnit::Foot => "ft",
            DistanceUnit::Yard => "yd",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(DistanceUnit::Centimeter),
            "m" | "meter" | "meters" => Ok(DistanceUnit::Meter),
            "in" | "inch" | "inches" => Ok(DistanceUnit::Inch),
            "ft" | "foot" | "feet" => Ok(DistanceUnit::Foot),
            "yd" | "yard" | "yards" => Ok(DistanceUnit::Yard),
            other => Err(format!("unknown distance unit: {other}")),
        }
    }
}

/// Weight units found in furniture source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Metric tonne.
    #[serde(rename = "t", alias = "tonne", alias = "tonnes")]
    Tonne,
    #[serde(rename = "kg", alias = "kilogram", alias = "kilograms")]
    Kilogram,
    #[serde(rename = "g", alias = "gram", alias = "grams")]
    Gram,
    #[serde(rename = "oz", alias = "ounce", alias = "ounces")]
    Ounce,
    #[default]
    #[serde(rename = "lb", alias = "pound", alias = "pounds")]
    Pound,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 5] = [
        WeightUnit::Tonne,
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Ounce,
        WeightUnit::Pound,
    ];

    /// Number of pounds in one of this unit.
    pub fn pounds_per_unit(self) -> f64 {
        match self {
            WeightUnit::Tonne => 2204.623,
            WeightUnit::Kilogram => 2.204623,
            WeightUnit::Gram => 0.002204623,
            WeightUnit::Ounce => 0.0625,
            WeightUnit::Pound => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Tonne => "t",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Gram => "g",
            WeightUnit::Ounce => "oz",
            WeightUnit::Pound => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "t" | "tonne" | "tonnes" => Ok(WeightUnit::Tonne),
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilogram),
            "g" | "gram" | "grams" => Ok(WeightUnit::Gram),
            "oz" | "ounce" | "ounces" => Ok(WeightUnit::Ounce),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pound),
            other => Err(format!("unknown weight unit: {other}")),
        }
    }
}
