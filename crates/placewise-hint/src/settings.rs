//! Hint engine configuration.

use serde::{Deserialize, Serialize};

/// Independent boolean toggles, one per detector.
///
/// Supplied by host-side user preferences. Every detector defaults to
/// enabled.
///
/// # Examples
///
/// ```
/// use placewise_hint::HintSettings;
///
/// let settings = HintSettings {
///     locked_candidates: false,
///     ..HintSettings::default()
/// };
/// assert!(settings.hidden_single);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[expect(clippy::struct_excessive_bools)]
pub struct HintSettings {
    /// Report a filled cell that disagrees with the solution.
    pub check_wrong_value: bool,
    /// Detect groups with a single empty cell.
    pub full_house: bool,
    /// Detect values with a single possible cell within a group.
    pub hidden_single: bool,
    /// Detect cells with a single surviving candidate.
    pub naked_single: bool,
    /// Retry single detection after locked-candidate elimination.
    pub locked_candidates: bool,
}

impl Default for HintSettings {
    fn default() -> Self {
        Self {
            check_wrong_value: true,
            full_house: true,
            hidden_single: true,
            naked_single: true,
            locked_candidates: true,
        }
    }
}
