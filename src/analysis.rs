use crate::data::model::ExperimentParameters;

// ---------------------------------------------------------------------------
// Analytes
// ---------------------------------------------------------------------------

/// Molar mass of HCl, g/mol.
pub const M_HCL: f64 = 36.5;
/// Molar mass of CH₃COOH, g/mol.
pub const M_CH3COOH: f64 = 60.0;

/// The whole solution is 100 ml; normality is per 1000 ml.
const WHOLE_SOLUTION_ML: f64 = 100.0;
const ML_PER_LITRE: f64 = 1000.0;

/// The two acids in the titrated mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analyte {
    /// Strong acid, neutralised first (up to Vₐ).
    HydrochloricAcid,
    /// Weak acid, neutralised between Vₐ and Vb.
    AceticAcid,
}

impl Analyte {
    pub fn molar_mass(self) -> f64 {
        match self {
            Analyte::HydrochloricAcid => M_HCL,
            Analyte::AceticAcid => M_CH3COOH,
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Analyte::HydrochloricAcid => "HCl",
            Analyte::AceticAcid => "CH₃COOH",
        }
    }

    /// Symbol used for the normality in the lab manual.
    pub fn normality_symbol(self) -> &'static str {
        match self {
            Analyte::HydrochloricAcid => "N₂",
            Analyte::AceticAcid => "N₃",
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Normality and mass of one analyte. Values are kept at full precision and
/// may be negative or non-finite for degenerate inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyteResult {
    pub normality_n: f64,
    pub mass_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyteResults {
    pub strong_acid: AnalyteResult,
    pub weak_acid: AnalyteResult,
}

impl AnalyteResults {
    pub fn get(&self, analyte: Analyte) -> &AnalyteResult {
        match analyte {
            Analyte::HydrochloricAcid => &self.strong_acid,
            Analyte::AceticAcid => &self.weak_acid,
        }
    }
}

/// Compute both analytes from the breakpoint volumes.
///
/// A zero sample volume divides by zero and gives infinite or NaN values; a
/// total volume below the HCl volume gives negative acetic acid figures.
/// Neither case is rejected.
pub fn compute(params: &ExperimentParameters) -> AnalyteResults {
    let vol_weak_ml = params.vol_total_ml - params.vol_strong_acid_ml;

    AnalyteResults {
        strong_acid: analyte_result(params, params.vol_strong_acid_ml, Analyte::HydrochloricAcid),
        weak_acid: analyte_result(params, vol_weak_ml, Analyte::AceticAcid),
    }
}

fn analyte_result(params: &ExperimentParameters, naoh_ml: f64, analyte: Analyte) -> AnalyteResult {
    let normality_n = (params.naoh_normality_n * naoh_ml) / params.sample_volume_ml;
    let mass_g = (normality_n * analyte.molar_mass() * WHOLE_SOLUTION_ML) / ML_PER_LITRE;
    AnalyteResult {
        normality_n,
        mass_g,
    }
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Three-decimal display; non-finite values read "undefined".
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.3}")
    } else {
        "undefined".to_string()
    }
}

/// The labelled result lines, normality then mass, for each analyte.
pub fn result_lines(results: &AnalyteResults) -> Vec<(String, String)> {
    [Analyte::HydrochloricAcid, Analyte::AceticAcid]
        .into_iter()
        .flat_map(|analyte| {
            let r = results.get(analyte);
            [
                (
                    format!("Normality of {} ({}):", analyte.formula(), analyte.normality_symbol()),
                    format!("{} N", format_quantity(r.normality_n)),
                ),
                (
                    format!("Amount of {} in whole solution:", analyte.formula()),
                    format!("{} g", format_quantity(r.mass_g)),
                ),
            ]
        })
        .collect()
}

/// The two closing statements restating both masses.
pub fn summary_statements(results: &AnalyteResults) -> [String; 2] {
    [Analyte::HydrochloricAcid, Analyte::AceticAcid].map(|analyte| {
        format!(
            "The amount of {} in the mixture is {} g",
            analyte.formula(),
            format_quantity(results.get(analyte).mass_g)
        )
    })
}
