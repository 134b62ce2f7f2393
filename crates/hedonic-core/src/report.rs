//! Compact text rendering of action sequences.

use std::fmt::Write as _;

use hedonic_types::ActionId;

/// Separator between runs.
const SEPARATOR: &str = " -> ";

/// Consecutive repeats of one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRun {
    /// The repeated action.
    pub action: ActionId,
    /// How many times in a row.
    pub count: usize,
}

/// Collapse consecutive repeats into runs.
pub fn runs(sequence: &[ActionId]) -> Vec<ActionRun> {
    let mut out: Vec<ActionRun> = Vec::new();
    for &action in sequence {
        match out.last_mut() {
            Some(run) if run.action == action => run.count += 1,
            _ => out.push(ActionRun { action, count: 1 }),
        }
    }
    out
}

/// Render a sequence as `name xN -> name -> ...`, with `xN` only on
/// repeated actions.
///
/// ```
/// use hedonic_core::report::compress_sequence;
/// use hedonic_types::ActionId;
///
/// let seq = [ActionId::Rest, ActionId::Rest, ActionId::Snack];
/// assert_eq!(compress_sequence(&seq), "rest x2 -> snack");
/// ```
pub fn compress_sequence(sequence: &[ActionId]) -> String {
    summarize_sequence(sequence, usize::MAX)
}

/// Like [`compress_sequence`] but shows at most `max_runs` runs, followed by
/// `... and N more` when some are cut.
pub fn summarize_sequence(sequence: &[ActionId], max_runs: usize) -> String {
    let runs = runs(sequence);
    let mut out = String::new();
    for (i, run) in runs.iter().take(max_runs).enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(run.action.name());
        if run.count > 1 {
            let _ = write!(out, " x{}", run.count);
        }
    }
    let hidden = runs.len().saturating_sub(max_runs);
    if hidden > 0 {
        let _ = write!(out, " ... and {hidden} more");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_renders_empty() {
        assert_eq!(compress_sequence(&[]), "");
        assert!(runs(&[]).is_empty());
    }

    #[test]
    fn repeats_collapse() {
        let seq = [
            ActionId::Cuddling,
            ActionId::Cuddling,
            ActionId::Cuddling,
            ActionId::Massage,
            ActionId::Sleep,
            ActionId::Sleep,
        ];
        assert_eq!(
            compress_sequence(&seq),
            "cuddling x3 -> massage -> sleep x2"
        );
    }

    #[test]
    fn separated_repeats_stay_separate() {
        let seq = [ActionId::Snack, ActionId::Rest, ActionId::Snack];
        assert_eq!(runs(&seq).len(), 3);
        assert_eq!(compress_sequence(&seq), "snack -> rest -> snack");
    }

    #[test]
    fn summary_truncates() {
        let seq = [
            ActionId::Snack,
            ActionId::Rest,
            ActionId::Wait,
            ActionId::Wait,
            ActionId::Eat,
        ];
        assert_eq!(
            summarize_sequence(&seq, 2),
            "snack -> rest ... and 2 more"
        );
        assert_eq!(summarize_sequence(&seq, 4), compress_sequence(&seq));
    }
}
