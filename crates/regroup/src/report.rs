//! Fixed-width results table.

use std::fmt::Write as _;

use crate::resolve::FacetSummary;

pub fn render(rows: &[FacetSummary]) -> String {
    let fw = rows
        .iter()
        .map(|r| r.stats.facet.to_string().len())
        .chain(["Facet".len()])
        .max()
        .unwrap_or(5);
    let sw = rows
        .iter()
        .map(|r| r.spacegroup.len())
        .chain(["Spacegroup".len()])
        .max()
        .unwrap_or(10);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>fw$}  {:>12}  {:>12}  {:>5}  {:<sw$}  {:>6}",
        "Facet", "Mean", "Std", "Count", "Spacegroup", "SymOps"
    );
    for r in rows {
        let _ = writeln!(
            out,
            "{:>fw$}  {:>12.6}  {:>12.6}  {:>5}  {:<sw$}  {:>6}",
            r.stats.facet.to_string(),
            r.stats.mean,
            r.stats.std,
            r.stats.count,
            r.spacegroup,
            r.n_symops
        );
    }
    out
}
