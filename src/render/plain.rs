//! One-shot text rendering for `--plain` mode and scripting.

use std::fmt::Write as _;

use crate::core::{Projection, Selection};
use crate::domain::{MatrixData, INVESTMENT_NOTE, MATRIX_ATTRIBUTION, MATRIX_SUBTITLE, MATRIX_TITLE};
use crate::utils::error::Result;

/// Marker in front of the currently selected picker entry.
pub const SELECTED_MARKER: &str = "▶";

/// Render the full matrix view as plain text: both pickers with the current
/// keys marked, the sector panels, and the package summary.
pub fn render_plain(data: &MatrixData, selection: &Selection) -> Result<String> {
    let projection = selection.project(data)?;

    let mut out = String::new();
    let _ = writeln!(out, "{}", MATRIX_TITLE);
    let _ = writeln!(out, "{}", MATRIX_SUBTITLE);
    let _ = writeln!(out, "{}", MATRIX_ATTRIBUTION);
    let _ = writeln!(out);

    let _ = writeln!(out, "Sectors:");
    for (key, profile) in data.sectors().iter() {
        let marker = if key == selection.sector() {
            SELECTED_MARKER
        } else {
            " "
        };
        let _ = writeln!(out, "  {} {} {} ({})", marker, profile.icon, profile.name, key);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Growth stages:");
    for (key, package) in data.tiers().iter() {
        let marker = if key == selection.tier() {
            SELECTED_MARKER
        } else {
            " "
        };
        let _ = writeln!(
            out,
            "  {} {} — {} ({})",
            marker, package.name, package.price, key
        );
    }
    let _ = writeln!(out);

    write_sector_panels(&mut out, &projection);
    write_package_summary(&mut out, &projection);

    let _ = writeln!(out, "⚠ {}", INVESTMENT_NOTE);
    Ok(out)
}

fn write_sector_panels(out: &mut String, projection: &Projection<'_>) {
    let sector = projection.sector;

    let _ = writeln!(out, "🛡 {} Compliance Requirements", sector.name);
    let _ = writeln!(out, "  Key Regulators: {}", sector.regulators.join(", "));
    let _ = writeln!(out, "  Critical Compliance Items:");
    for item in &sector.critical_compliance {
        let _ = writeln!(out, "    ✔ {}", item);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "⚡ IP & Risk Profile");
    let _ = writeln!(out, "  IP Protection Focus:");
    for item in &sector.ip_focus {
        let _ = writeln!(out, "    • {}", item);
    }
    let _ = writeln!(out, "  Common Legal Risks:");
    for item in &sector.common_risks {
        let _ = writeln!(out, "    ! {}", item);
    }
    let _ = writeln!(out);
}

fn write_package_summary(out: &mut String, projection: &Projection<'_>) {
    let _ = writeln!(
        out,
        "{} - {} Package",
        projection.tier.name, projection.sector.name
    );
    let _ = writeln!(out, "  {}", projection.tier.price);
    let _ = writeln!(out, "  {}", projection.tier.focus);
    let _ = writeln!(out, "  Deliverables:");
    for item in &projection.tier.deliverables {
        let _ = writeln!(out, "    ✔ {}", item);
    }
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render_contains_projected_literals() {
        let data = MatrixData::builtin();
        let mut selection = Selection::default_for(&data).unwrap();
        selection.select_sector(&data, "healthtech").unwrap();
        selection.select_tier(&data, "lead").unwrap();

        let text = render_plain(&data, &selection).unwrap();
        assert!(text.contains("HealthTech Compliance Requirements"));
        assert!(text.contains("PPB, KMPDC, NCK, ODPC"));
        assert!(text.contains("AIKYA LEAD - HealthTech Package"));
        assert!(text.contains("KSh 150,000/mo"));
        assert!(text.contains("Multi-jurisdictional compliance (EMEA)"));
    }

    #[test]
    fn test_plain_render_marks_current_selection() {
        let data = MatrixData::builtin();
        let selection = Selection::default_for(&data).unwrap();
        let text = render_plain(&data, &selection).unwrap();

        let fintech_line = text
            .lines()
            .find(|line| line.contains("(fintech)"))
            .unwrap();
        assert!(fintech_line.contains(SELECTED_MARKER));

        let edtech_line = text.lines().find(|line| line.contains("(edtech)")).unwrap();
        assert!(!edtech_line.contains(SELECTED_MARKER));
    }

    #[test]
    fn test_plain_render_lists_every_key() {
        let data = MatrixData::builtin();
        let selection = Selection::default_for(&data).unwrap();
        let text = render_plain(&data, &selection).unwrap();
        for key in data.sectors().keys() {
            assert!(text.contains(&format!("({})", key)));
        }
        for key in data.tiers().keys() {
            assert!(text.contains(&format!("({})", key)));
        }
    }
}
