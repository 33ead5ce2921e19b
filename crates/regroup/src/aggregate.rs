//! Per-facet angle statistics over all frames.

use std::collections::BTreeMap;

use crate::facet::Facet;

/// one measured angle: a facet on a particular frame
#[derive(Clone, Debug, PartialEq)]
pub struct AngleObservation {
    pub facet: Facet,
    /// label of the frame the angle was measured on
    pub source: String,
    /// degrees
    pub angle: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FacetStats {
    pub facet: Facet,
    pub mean: f64,
    /// sample standard deviation; NaN for a single observation
    pub std: f64,
    pub count: usize,
}

/// Collapse observations to one row per facet, sorted by ascending mean
/// angle with the facet ordering as tie-break.
pub fn aggregate(obs: &[AngleObservation]) -> Vec<FacetStats> {
    let mut groups: BTreeMap<Facet, Vec<f64>> = BTreeMap::new();
    for o in obs {
        groups.entry(o.facet).or_default().push(o.angle);
    }
    let mut rows: Vec<FacetStats> = groups
        .into_iter()
        .map(|(facet, angles)| {
            let n = angles.len();
            let mean = angles.iter().sum::<f64>() / n as f64;
            let std = if n < 2 {
                f64::NAN
            } else {
                let ss: f64 =
                    angles.iter().map(|a| (a - mean) * (a - mean)).sum();
                (ss / (n - 1) as f64).sqrt()
            };
            FacetStats {
                facet,
                mean,
                std,
                count: n,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.mean.total_cmp(&b.mean).then(a.facet.cmp(&b.facet)));
    rows
}
