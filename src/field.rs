//! Electric field of a point charge or an oscillating dipole, sampled on a cubic grid.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Half-width of the sampled cube.
pub const EXTENT: f64 = 1.0;
/// Lower bound on r³ to keep the field finite at a charge.
pub const R3_FLOOR: f64 = 1e-6;
/// Samples closer than this to the origin are dropped.
pub const ORIGIN_CUTOFF: f64 = 0.07;
pub const DIPOLE_SEPARATION: f64 = 0.4;
pub const GRID_RESOLUTIONS: [usize; 4] = [8, 10, 12, 15];
pub const CHARGE_RANGE: (f64, f64) = (-5.0, 5.0);
pub const SCALE_RANGE: (f64, f64) = (0.1, 5.0);
const NORMALIZATION_PERCENTILE: f64 = 95.0;
const NORMALIZATION_FLOOR: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMode {
    PointCharge,
    /// Charges `q·sin(t)` and `-q·sin(t)` on the x-axis.
    Dipole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldParams {
    pub mode: FieldMode,
    pub charge: f64,
    pub scale: f64,
    pub grid: usize,
    pub time: f64,
    pub show_charges: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            mode: FieldMode::PointCharge,
            charge: 1.0,
            scale: 1.0,
            grid: 10,
            time: 0.0,
            show_charges: true,
        }
    }
}

impl FieldParams {
    /// Pulls every parameter into the range the controls allow.
    pub fn clamped(&self) -> Self {
        let grid = if GRID_RESOLUTIONS.contains(&self.grid) {
            self.grid
        } else {
            log::warn!("Unsupported grid resolution {}, using 10", self.grid);
            10
        };

        Self {
            mode: self.mode,
            charge: self.charge.clamp(CHARGE_RANGE.0, CHARGE_RANGE.1),
            scale: self.scale.clamp(SCALE_RANGE.0, SCALE_RANGE.1),
            grid,
            time: self.time.clamp(0.0, 2.0 * PI),
            show_charges: self.show_charges,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointCharge {
    pub q: f64,
    pub position: [f64; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeMarker {
    pub position: [f64; 3],
    pub polarity: Polarity,
}

/// One arrow: tail at `position`, direction and length `vector`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    pub position: [f64; 3],
    pub vector: [f64; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldPlot {
    pub params: FieldParams,
    pub normalization: f64,
    pub samples: Vec<FieldSample>,
    pub charges: Vec<ChargeMarker>,
}

impl FieldPlot {
    pub fn max_arrow_length(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| norm(s.vector))
            .fold(0.0, f64::max)
    }
}

/// `n` evenly spaced values from `-EXTENT` to `EXTENT` inclusive.
pub fn linspace(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![-EXTENT],
        _ => {
            let step = 2.0 * EXTENT / (n - 1) as f64;
            (0..n).map(|i| -EXTENT + step * i as f64).collect()
        }
    }
}

/// Coulomb field with k = 1 at `point`.
pub fn coulomb_field(charge: &PointCharge, point: [f64; 3]) -> [f64; 3] {
    let d = [
        point[0] - charge.position[0],
        point[1] - charge.position[1],
        point[2] - charge.position[2],
    ];
    let r3 = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2])
        .powf(1.5)
        .max(R3_FLOOR);
    [
        charge.q * d[0] / r3,
        charge.q * d[1] / r3,
        charge.q * d[2] / r3,
    ]
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Linear-interpolated percentile, `p` in [0, 100].
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

pub fn charges_for(params: &FieldParams) -> Vec<PointCharge> {
    match params.mode {
        FieldMode::PointCharge => vec![PointCharge {
            q: params.charge,
            position: [0.0, 0.0, 0.0],
        }],
        FieldMode::Dipole => {
            let q1 = params.charge * params.time.sin();
            let half = DIPOLE_SEPARATION / 2.0;
            vec![
                PointCharge {
                    q: q1,
                    position: [-half, 0.0, 0.0],
                },
                PointCharge {
                    q: -q1,
                    position: [half, 0.0, 0.0],
                },
            ]
        }
    }
}

fn markers_for(params: &FieldParams, charges: &[PointCharge]) -> Vec<ChargeMarker> {
    match params.mode {
        FieldMode::PointCharge => charges
            .iter()
            .map(|c| ChargeMarker {
                position: c.position,
                polarity: if c.q > 0.0 {
                    Polarity::Positive
                } else {
                    Polarity::Negative
                },
            })
            .collect(),
        // Dipole ends keep fixed colours while the charges oscillate
        FieldMode::Dipole => charges
            .iter()
            .zip([Polarity::Positive, Polarity::Negative])
            .map(|(c, polarity)| ChargeMarker {
                position: c.position,
                polarity,
            })
            .collect(),
    }
}

/// Samples the field over the grid and scales the arrows for display.
pub fn compute_field(params: &FieldParams) -> FieldPlot {
    let params = params.clamped();
    let charges = charges_for(&params);
    let axis = linspace(params.grid);

    // y outermost, then x, then z
    let mut points = Vec::with_capacity(axis.len().pow(3));
    for &y in &axis {
        for &x in &axis {
            for &z in &axis {
                points.push([x, y, z]);
            }
        }
    }

    let fields: Vec<[f64; 3]> = points
        .iter()
        .map(|&p| {
            charges.iter().fold([0.0; 3], |acc, c| {
                let e = coulomb_field(c, p);
                [acc[0] + e[0], acc[1] + e[1], acc[2] + e[2]]
            })
        })
        .collect();

    let magnitudes: Vec<f64> = fields.iter().map(|&e| norm(e)).collect();
    let normalization =
        percentile(&magnitudes, NORMALIZATION_PERCENTILE).max(NORMALIZATION_FLOOR);
    let factor = params.scale / normalization;

    let samples: Vec<FieldSample> = points
        .iter()
        .zip(&fields)
        .filter(|(p, _)| norm(**p) > ORIGIN_CUTOFF)
        .map(|(&position, e)| FieldSample {
            position,
            vector: [e[0] * factor, e[1] * factor, e[2] * factor],
        })
        .collect();

    let charges = if params.show_charges {
        markers_for(&params, &charges)
    } else {
        Vec::new()
    };

    log::debug!(
        "Field sampled: mode={:?} grid={} samples={} normalization={:.4}",
        params.mode,
        params.grid,
        samples.len(),
        normalization
    );

    FieldPlot {
        params,
        normalization,
        samples,
        charges,
    }
}
