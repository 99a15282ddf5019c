//! Body diagram data.
//!
//! Groups findings per body part for the anatomical diagram and attaches
//! the fixed anchor each region is drawn at. Coordinates are on a 300x400
//! front-facing canvas. Laterality/position tokens (left, right, upper,
//! lower) and the sentinel "General" region have no anchor; clients list
//! them without shading the figure.

use serde::Serialize;

use crate::extraction::Finding;
use crate::severity::Severity;

/// Diagram canvas width.
pub const CANVAS_WIDTH: u32 = 300;
/// Diagram canvas height.
pub const CANVAS_HEIGHT: u32 = 400;

/// Circle drawn for a body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub cx: u32,
    pub cy: u32,
    pub r: u32,
}

const fn anchor(cx: u32, cy: u32, r: u32) -> Anchor {
    Anchor { cx, cy, r }
}

/// Anchors keyed by lowercase canonical body part.
const ANCHORS: &[(&str, Anchor)] = &[
    ("head", anchor(150, 50, 30)),
    ("neck", anchor(150, 85, 15)),
    ("shoulder", anchor(120, 110, 20)),
    ("arm", anchor(100, 140, 15)),
    ("elbow", anchor(95, 170, 12)),
    ("wrist", anchor(90, 200, 10)),
    ("hand", anchor(85, 230, 12)),
    ("chest", anchor(150, 130, 35)),
    ("heart", anchor(150, 120, 15)),
    ("lung", anchor(140, 130, 20)),
    ("abdomen", anchor(150, 180, 40)),
    ("stomach", anchor(150, 170, 25)),
    ("liver", anchor(165, 160, 20)),
    ("kidney", anchor(140, 165, 15)),
    ("spine", anchor(150, 150, 10)),
    ("back", anchor(150, 160, 30)),
    ("hip", anchor(130, 220, 25)),
    ("leg", anchor(130, 280, 20)),
    ("knee", anchor(130, 320, 18)),
    ("ankle", anchor(130, 360, 12)),
    ("foot", anchor(130, 390, 15)),
];

/// Look up the diagram anchor for a body part (case-insensitive).
pub fn anchor_for(body_part: &str) -> Option<Anchor> {
    let key = body_part.to_lowercase();
    ANCHORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, a)| *a)
}

/// All findings for one body part.
#[derive(Debug, Clone, Serialize)]
pub struct BodyRegion {
    /// Lowercase grouping key, e.g. `"shoulder"`.
    pub key: String,
    /// Display name as it appears on the findings.
    pub body_part: String,
    /// Worst severity among `findings`.
    pub severity: Severity,
    /// Shading colour for `severity`.
    pub color: &'static str,
    pub anchor: Option<Anchor>,
    pub findings: Vec<Finding>,
}

/// Diagram payload: regions in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct BodyMap {
    pub width: u32,
    pub height: u32,
    pub regions: Vec<BodyRegion>,
}

/// Group findings by lowercase body part, keeping first-seen order.
pub fn build_body_map(findings: &[Finding]) -> BodyMap {
    let mut regions: Vec<BodyRegion> = Vec::new();

    for finding in findings {
        let key = finding.body_part.to_lowercase();
        match regions.iter_mut().find(|r| r.key == key) {
            Some(region) => {
                if finding.severity.rank() > region.severity.rank() {
                    region.severity = finding.severity;
                    region.color = finding.severity.color();
                }
                region.findings.push(finding.clone());
            }
            None => regions.push(BodyRegion {
                anchor: anchor_for(&key),
                key,
                body_part: finding.body_part.clone(),
                severity: finding.severity,
                color: finding.severity.color(),
                findings: vec![finding.clone()],
            }),
        }
    }

    BodyMap {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        regions,
    }
}
