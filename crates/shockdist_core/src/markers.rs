//! Reference marker assembly

use crate::model::{DensityCurve, MarkerCatalog, ReferenceLine, ReferenceMarker};

/// Build markers for the selected lines using the default catalogue
pub fn assemble_markers(selected: &[ReferenceLine], original: &DensityCurve) -> Vec<ReferenceMarker> {
    assemble_markers_with(&MarkerCatalog::default(), selected, original)
}

/// Build one marker per selected line.
///
/// Output order is always MinimumWage, PovertyLine, VulnerabilityLine no
/// matter how the selection is ordered; duplicates collapse. Labels sit at
/// the peak of the original curve so they stay above it at any scale.
pub fn assemble_markers_with(
    catalog: &MarkerCatalog,
    selected: &[ReferenceLine],
    original: &DensityCurve,
) -> Vec<ReferenceMarker> {
    let label_y = original.max_density();

    ReferenceLine::ALL
        .into_iter()
        .filter(|line| selected.contains(line))
        .map(|line| {
            let def = catalog.definition(line);
            ReferenceMarker {
                line,
                label: def.label.clone(),
                x: def.x,
                label_x: def.x + def.label_offset,
                label_y,
                color: def.color.clone(),
                style: catalog.style,
            }
        })
        .collect()
}
