//! Run-length display of simulator steps
//!
//! Consecutive steps that render to the same text are merged into one display token:
//! a single step displays as its text (`sc-1`), a run of `n` as `(sc-1)n`.
//!
//! The formatter holds the run it is still accumulating. Callers must invoke
//! [`RunLengthFormatter::flush`] exactly once after the last step of a line, otherwise the final
//! run is silently lost.

use crate::crochet::step::Step;

#[derive(Debug, Clone, Default)]
pub struct RunLengthFormatter {
    last: Option<(String, usize)>,
}

impl RunLengthFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one step; returns the previous run once a different step arrives
    pub fn format(&mut self, step: &Step) -> Option<String> {
        let text = step.to_string();
        if let Some((last, count)) = &mut self.last {
            if *last == text {
                *count += 1;
                return None;
            }
        }
        self.last
            .replace((text, 1))
            .map(|(last, count)| format_run(&last, count))
    }

    /// Emit the run still being accumulated, if any
    #[must_use = "the final run of a line is lost unless the flushed text is used"]
    pub fn flush(&mut self) -> Option<String> {
        self.last
            .take()
            .map(|(last, count)| format_run(&last, count))
    }
}

/// Display text of a run of identical steps
pub fn format_run(text: &str, count: usize) -> String {
    if count == 1 {
        text.to_string()
    } else {
        format!("({}){}", text, count)
    }
}

/// Run-length encode a whole step sequence
pub fn format_all<'s, I>(steps: I) -> Vec<String>
where
    I: IntoIterator<Item = &'s Step>,
{
    let mut formatter = RunLengthFormatter::new();
    let mut out: Vec<String> = steps
        .into_iter()
        .filter_map(|step| formatter.format(step))
        .collect();
    out.extend(formatter.flush());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_identical_steps() {
        let steps = [Step::sc(1), Step::sc(1), Step::sc(1), Step::Chain];
        assert_eq!(format_all(&steps), vec!["(sc-1)3", "c"]);
    }

    #[test]
    fn nothing_is_emitted_until_the_run_ends() {
        let mut formatter = RunLengthFormatter::new();
        assert_eq!(formatter.format(&Step::Chain), None);
        assert_eq!(formatter.format(&Step::Chain), None);
        assert_eq!(formatter.format(&Step::sc(0)), Some("(c)2".to_string()));
        assert_eq!(formatter.flush(), Some("sc-0".to_string()));
    }

    #[test]
    fn flush_empties_the_buffer() {
        let mut formatter = RunLengthFormatter::new();
        assert_eq!(formatter.flush(), None);
        assert_eq!(formatter.format(&Step::sc2(1, 0)), None);
        assert_eq!(formatter.flush(), Some("sc-1-0".to_string()));
        assert_eq!(formatter.flush(), None);
    }

    #[test]
    fn distinct_steps_each_get_a_token() {
        let steps = [Step::Chain, Step::sc(1), Step::sc(2)];
        assert_eq!(format_all(&steps), vec!["c", "sc-1", "sc-2"]);
    }

    #[test]
    fn empty_input_formats_to_nothing() {
        assert!(format_all(&[]).is_empty());
    }
}
