use crate::artifacts::branch::branch_name::BranchName;
use derive_new::new;
use std::cmp::Ordering;
use std::str::FromStr;

/// Default lane palette, one color per branch, cycled by the renderer.
pub const DEFAULT_COLORS: [&str; 8] = [
    "#929292", "#255db7", "#f3a138", "#bd461d", "#419bb2", "#ef754a", "#f6bb3f", "#53c1dd",
];

/// Display density of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Compact,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "normal" => Ok(Mode::Normal),
            "compact" => Ok(Mode::Compact),
            _ => anyhow::bail!("unknown mode: {} (expected normal or compact)", s),
        }
    }
}

/// Direction the graph grows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    VerticalReverse,
    Horizontal,
    HorizontalReverse,
}

impl FromStr for Orientation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "vertical" => Ok(Orientation::Vertical),
            "vertical-reverse" => Ok(Orientation::VerticalReverse),
            "horizontal" => Ok(Orientation::Horizontal),
            "horizontal-reverse" => Ok(Orientation::HorizontalReverse),
            _ => anyhow::bail!("unknown orientation: {}", s),
        }
    }
}

/// Container overflow policy, forwarded untouched to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Auto,
    Hidden,
    Scroll,
    Visible,
}

impl FromStr for Overflow {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "auto" => Ok(Overflow::Auto),
            "hidden" => Ok(Overflow::Hidden),
            "scroll" => Ok(Overflow::Scroll),
            "visible" => Ok(Overflow::Visible),
            _ => anyhow::bail!("unknown overflow policy: {}", s),
        }
    }
}

/// Cosmetic template values the renderer applies to every commit dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphTemplate {
    pub colors: Vec<String>,
    pub dot_font: String,
    pub display_author: bool,
    pub tooltip_in_compact_mode: bool,
}

impl Default for GraphTemplate {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            dot_font: "12px".to_string(),
            display_author: false,
            tooltip_in_compact_mode: false,
        }
    }
}

/// Explicit lane order for the rendered graph.
///
/// Comparison follows `indexOf` semantics: a name that is not listed compares
/// as position -1 and therefore sorts before every listed name. Two unlisted
/// names compare equal, their relative order is whatever the renderer had.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BranchOrdering {
    order: Vec<BranchName>,
}

impl BranchOrdering {
    pub fn compare(&self, a: &BranchName, b: &BranchName) -> Ordering {
        self.position(a).cmp(&self.position(b))
    }

    fn position(&self, name: &BranchName) -> isize {
        self.order
            .iter()
            .position(|candidate| candidate == name)
            .map(|index| index as isize)
            .unwrap_or(-1)
    }
}

/// Pass-through display configuration for one render pass.
#[derive(Debug, Clone, Default)]
pub struct GraphOptions {
    pub mode: Mode,
    pub orientation: Orientation,
    /// Maximum container height in pixels, unbounded when `None`.
    pub max_height: Option<u32>,
    pub overflow: Overflow,
    /// When set, every commit dot carries a `C<n>` label.
    pub show_commit_number: bool,
    /// First value of the commit counter.
    pub commit_number_base: i64,
    pub branches_order: Option<BranchOrdering>,
    pub template: GraphTemplate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("normal", Mode::Normal)]
    #[case("compact", Mode::Compact)]
    fn mode_parses_from_str(#[case] input: &str, #[case] expected: Mode) {
        assert_eq!(input.parse::<Mode>().unwrap(), expected);
    }

    #[rstest]
    #[case("vertical", Orientation::Vertical)]
    #[case("vertical-reverse", Orientation::VerticalReverse)]
    #[case("horizontal", Orientation::Horizontal)]
    #[case("horizontal-reverse", Orientation::HorizontalReverse)]
    fn orientation_parses_from_str(#[case] input: &str, #[case] expected: Orientation) {
        assert_eq!(input.parse::<Orientation>().unwrap(), expected);
    }

    #[rstest]
    #[case::mode("dense")]
    #[case::empty("")]
    fn unknown_mode_is_rejected(#[case] input: &str) {
        assert!(input.parse::<Mode>().is_err());
    }

    #[test]
    fn listed_branches_sort_by_list_position() {
        let ordering = BranchOrdering::new(vec![
            BranchName::from("main"),
            BranchName::from("develop"),
            BranchName::from("feature"),
        ]);

        assert_eq!(
            ordering.compare(&BranchName::from("main"), &BranchName::from("feature")),
            Ordering::Less
        );
        assert_eq!(
            ordering.compare(&BranchName::from("feature"), &BranchName::from("develop")),
            Ordering::Greater
        );
        assert_eq!(
            ordering.compare(&BranchName::from("main"), &BranchName::from("main")),
            Ordering::Equal
        );
    }

    #[test]
    fn unlisted_branches_sort_before_all_listed_ones() {
        let ordering = BranchOrdering::new(vec![BranchName::from("main")]);

        assert_eq!(
            ordering.compare(&BranchName::from("stray"), &BranchName::from("main")),
            Ordering::Less
        );
        assert_eq!(
            ordering.compare(&BranchName::from("stray"), &BranchName::from("other-stray")),
            Ordering::Equal
        );
    }

    #[test]
    fn template_defaults_match_the_metro_extension() {
        let template = GraphTemplate::default();

        assert_eq!(template.colors.len(), 8);
        assert_eq!(template.colors[0], "#929292");
        assert_eq!(template.dot_font, "12px");
        assert!(!template.display_author);
        assert!(!template.tooltip_in_compact_mode);
    }
}
