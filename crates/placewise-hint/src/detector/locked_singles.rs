use super::{BoxedDetector, Detector, HiddenSingle, HintContext, NakedSingle};
use crate::{HintResult, locked};

const NAME: &str = "locked candidate singles";

/// Re-runs single detection after type-1 locked-candidate elimination.
///
/// Placed after the raw single detectors in the chain: it only fires for
/// singles that become detectable once locked candidates are filtered out of
/// the note set, and marks its results with the locked-candidate
/// classification context. Which single detectors participate mirrors the
/// hint settings.
#[derive(Debug, Clone, Copy)]
pub struct LockedSingles {
    hidden_single: bool,
    naked_single: bool,
}

impl LockedSingles {
    /// Creates a new `LockedSingles` detector delegating to the enabled
    /// single detectors.
    #[must_use]
    pub const fn new(hidden_single: bool, naked_single: bool) -> Self {
        Self {
            hidden_single,
            naked_single,
        }
    }
}

impl Detector for LockedSingles {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedDetector {
        Box::new(*self)
    }

    fn detect(&self, ctx: &HintContext<'_>) -> Option<HintResult> {
        if ctx.notes.is_empty() {
            return None;
        }

        let filtered = locked::apply_type1(ctx.notes, ctx.game_type);
        let filtered_ctx = ctx.with_notes(&filtered);

        if self.hidden_single
            && let Some(hint) = HiddenSingle::new().detect(&filtered_ctx)
        {
            return Some(hint.via_locked_candidates());
        }
        if self.naked_single
            && let Some(hint) = NakedSingle::new().detect(&filtered_ctx)
        {
            return Some(hint.via_locked_candidates());
        }
        None
    }
}
