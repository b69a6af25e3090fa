//! Global adaptive Gauss-Kronrod-Quadratur (7/15 Punkte) für skalare Integranden.
//!
//! Genutzt für die genaue Bogenlänge: integriert wird der Betrag der
//! Ableitung. Das Verfahren halbiert stets das Teilintervall mit der größten
//! Fehlerschätzung, bis die Summe der Fehler unter der Toleranz liegt oder das
//! Intervall-Budget erschöpft ist.

use serde::{Deserialize, Serialize};

use crate::error::IntegrationError;

/// Standard-Absoluttoleranz
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-8;
/// Standard-Relativtoleranz
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-2;
/// Standard-Obergrenze für gleichzeitig gehaltene Teilintervalle
pub const DEFAULT_MAX_INTERVALS: usize = 10;

/// Kronrod-Knoten (positiv, absteigend; der letzte ist die Mitte).
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

/// Kronrod-Gewichte passend zu `XGK`.
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// Gauss-Gewichte für die Knoten `XGK[1]`, `XGK[3]`, `XGK[5]` und die Mitte.
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Toleranzen und Budget der adaptiven Integration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureOptions {
    pub absolute_tolerance: f64,
    pub relative_tolerance: f64,
    /// Maximal gleichzeitig gehaltene Teilintervalle
    pub max_intervals: usize,
}

impl Default for QuadratureOptions {
    fn default() -> Self {
        Self {
            absolute_tolerance: DEFAULT_ABSOLUTE_TOLERANCE,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            max_intervals: DEFAULT_MAX_INTERVALS,
        }
    }
}

impl QuadratureOptions {
    /// Zulässiger Gesamtfehler für einen Integralwert.
    pub fn tolerance(&self, integral: f64) -> f64 {
        self.absolute_tolerance
            .max(self.relative_tolerance * integral.abs())
    }
}

/// Ergebnis einer konvergierten Integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult {
    pub integral: f64,
    /// Geschätzter Absolutfehler
    pub error: f64,
    /// Anzahl Auswertungen des Integranden
    pub evaluations: usize,
    /// Anzahl Teilintervalle bei Abbruch
    pub intervals: usize,
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    a: f64,
    b: f64,
    integral: f64,
    error: f64,
}

/// Eine 15-Punkt-Kronrod-Auswertung inkl. eingebetteter 7-Punkt-Gauss-Regel.
fn gauss_kronrod_15(f: &impl Fn(f64) -> f64, a: f64, b: f64) -> Result<Interval, IntegrationError> {
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let eval = |x: f64| {
        let y = f(x);
        if y.is_finite() {
            Ok(y)
        } else {
            Err(IntegrationError::NonFiniteIntegrand { x })
        }
    };

    let fc = eval(center)?;
    let mut kronrod = WGK[7] * fc;
    let mut gauss = WG[3] * fc;

    for (j, (&node, &weight)) in XGK.iter().zip(WGK.iter()).take(7).enumerate() {
        let dx = half * node;
        let sum = eval(center - dx)? + eval(center + dx)?;
        kronrod += weight * sum;
        if j % 2 == 1 {
            gauss += WG[j / 2] * sum;
        }
    }

    Ok(Interval {
        a,
        b,
        integral: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}

/// Integriert `f` über `[a, b]`.
///
/// Liefert [`IntegrationError::NotConverged`], wenn die Toleranz mit
/// `max_intervals` Teilintervallen nicht erreicht wird. Das Ergebnis ist dann
/// "unbekannt" und darf nicht als 0 weiterverwendet werden.
pub fn integrate(
    f: impl Fn(f64) -> f64,
    a: f64,
    b: f64,
    options: &QuadratureOptions,
) -> Result<QuadResult, IntegrationError> {
    if a == b {
        return Ok(QuadResult {
            integral: 0.0,
            error: 0.0,
            evaluations: 0,
            intervals: 0,
        });
    }

    let mut intervals = vec![gauss_kronrod_15(&f, a, b)?];
    let mut evaluations = 15;

    loop {
        let integral: f64 = intervals.iter().map(|i| i.integral).sum();
        let error: f64 = intervals.iter().map(|i| i.error).sum();
        let tolerance = options.tolerance(integral);

        if error <= tolerance {
            return Ok(QuadResult {
                integral,
                error,
                evaluations,
                intervals: intervals.len(),
            });
        }

        if intervals.len() >= options.max_intervals.max(1) {
            log::warn!(
                "Integration über [{a}, {b}] nicht konvergiert: Fehler {error:e} > {tolerance:e} nach {} Teilintervallen",
                intervals.len()
            );
            return Err(IntegrationError::NotConverged {
                intervals: intervals.len(),
                estimate: integral,
                estimated_error: error,
                tolerance,
            });
        }

        // Teilintervall mit größtem Fehler halbieren
        let worst = intervals
            .iter()
            .enumerate()
            .max_by(|(_, l), (_, r)| l.error.total_cmp(&r.error))
            .map(|(index, _)| index)
            .unwrap_or(0);
        let Interval { a: lo, b: hi, .. } = intervals.swap_remove(worst);
        let mid = 0.5 * (lo + hi);

        intervals.push(gauss_kronrod_15(&f, lo, mid)?);
        intervals.push(gauss_kronrod_15(&f, mid, hi)?);
        evaluations += 30;

        log::debug!(
            "Quadratur: [{lo}, {hi}] halbiert, {} Teilintervalle",
            intervals.len()
        );
    }
}
