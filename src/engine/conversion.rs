use thiserror::Error;

use crate::models::Ingredient;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Cannot convert {from} to {to}")]
    IncompatibleUnits { from: String, to: String },

    #[error("Converter unavailable: {0}")]
    Unavailable(String),
}

/// Prices a recipe quantity in the ingredient's priced unit.
///
/// `unit` is the recipe unit; the priced unit is `ingredient.unit`.
/// Failures are recovered by the loader, never by callers of the engine.
pub trait UnitConverter {
    fn standardized_cost(
        &self,
        quantity: f64,
        unit: &str,
        unit_price: f64,
        ingredient: &Ingredient,
    ) -> Result<f64, ConversionError>;
}

/// `quantity * unit_price`, ignoring units.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveConverter;

impl UnitConverter for NaiveConverter {
    fn standardized_cost(
        &self,
        quantity: f64,
        _unit: &str,
        unit_price: f64,
        _ingredient: &Ingredient,
    ) -> Result<f64, ConversionError> {
        Ok(quantity * unit_price)
    }
}

/// Physical dimension of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    Mass,
    Volume,
    Count,
}

// Mass in grams, volume in milliliters, count in pieces.
const GRAMS_PER_MG: f64 = 0.001;
const GRAMS_PER_KG: f64 = 1000.0;
const GRAMS_PER_OZ: f64 = 28.349_523_125;
const GRAMS_PER_LB: f64 = 453.592_37;

const ML_PER_CL: f64 = 10.0;
const ML_PER_DL: f64 = 100.0;
const ML_PER_L: f64 = 1000.0;
const ML_PER_TSP: f64 = 4.928_921_593_75;
const ML_PER_TBSP: f64 = 14.786_764_781_25;
const ML_PER_FL_OZ: f64 = 29.573_529_562_5;
const ML_PER_CUP: f64 = 236.588_236_5;
const ML_PER_PINT: f64 = 473.176_473;
const ML_PER_QUART: f64 = 946.352_946;
const ML_PER_GALLON: f64 = 3785.411_784;

const PIECES_PER_DOZEN: f64 = 12.0;

/// Lowercase, trim, drop trailing dots and collapse inner whitespace.
pub fn normalize_unit(unit: &str) -> String {
    unit.trim()
        .trim_end_matches('.')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Look up a unit's family and its size in the family's base unit.
pub fn lookup_unit(unit: &str) -> Option<(UnitFamily, f64)> {
    use UnitFamily::*;

    let unit = normalize_unit(unit);
    let entry = match unit.as_str() {
        "mg" | "milligram" | "milligrams" => (Mass, GRAMS_PER_MG),
        "g" | "gr" | "gram" | "grams" => (Mass, 1.0),
        "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => (Mass, GRAMS_PER_KG),
        "oz" | "ounce" | "ounces" => (Mass, GRAMS_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => (Mass, GRAMS_PER_LB),

        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => (Volume, 1.0),
        "cl" | "centiliter" | "centiliters" => (Volume, ML_PER_CL),
        "dl" | "deciliter" | "deciliters" => (Volume, ML_PER_DL),
        "l" | "liter" | "liters" | "litre" | "litres" => (Volume, ML_PER_L),
        "tsp" | "tsps" | "teaspoon" | "teaspoons" => (Volume, ML_PER_TSP),
        "tbsp" | "tbsps" | "tbs" | "tablespoon" | "tablespoons" => (Volume, ML_PER_TBSP),
        "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => (Volume, ML_PER_FL_OZ),
        "cup" | "cups" | "c" => (Volume, ML_PER_CUP),
        "pt" | "pint" | "pints" => (Volume, ML_PER_PINT),
        "qt" | "quart" | "quarts" => (Volume, ML_PER_QUART),
        "gal" | "gallon" | "gallons" => (Volume, ML_PER_GALLON),

        "each" | "ea" | "pc" | "pcs" | "piece" | "pieces" | "unit" | "units" | "whole"
        | "ct" | "count" => (Count, 1.0),
        "dozen" | "dz" | "doz" => (Count, PIECES_PER_DOZEN),

        _ => return None,
    };
    Some(entry)
}

/// Converts within mass, volume and count families.
///
/// Identical unit spellings always succeed, even for units outside the
/// tables ("bunch" to "bunch"). Anything else unknown, or a conversion across
/// families, is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUnitConverter;

impl StandardUnitConverter {
    /// Express `quantity` of `from` in `to`.
    pub fn convert_quantity(&self, quantity: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        if normalize_unit(from) == normalize_unit(to) {
            return Ok(quantity);
        }

        let (from_family, from_size) =
            lookup_unit(from).ok_or_else(|| ConversionError::UnknownUnit(from.to_string()))?;
        let (to_family, to_size) =
            lookup_unit(to).ok_or_else(|| ConversionError::UnknownUnit(to.to_string()))?;

        if from_family != to_family {
            return Err(ConversionError::IncompatibleUnits {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        Ok(quantity * from_size / to_size)
    }
}

impl UnitConverter for StandardUnitConverter {
    fn standardized_cost(
        &self,
        quantity: f64,
        unit: &str,
        unit_price: f64,
        ingredient: &Ingredient,
    ) -> Result<f64, ConversionError> {
        let priced_quantity = self.convert_quantity(quantity, unit, &ingredient.unit)?;
        Ok(priced_quantity * unit_price)
    }
}
