//! Expansion: from commands to a flat stitch sequence
//!
//! [`Stitches`] is a pull-based iterator over the stitches a command (or a list of commands)
//! expands to. It keeps an explicit stack of frames instead of recursing:
//!
//! - a group frame walks its commands `repeat` times, pushing a frame for each command
//! - a pattern frame walks the pattern's [motif layout](motifs)
//! - a single-stitch frame yields its stitch once
//!
//! Groups are borrowed from the tokenized commands, never copied, so repeating a large group
//! costs nothing beyond the stack frame. The iterator is finite and fuses after an error.

pub mod motifs;

use crate::crochet::error::Result;
use crate::crochet::stitch::{Command, Stitch};
use motifs::{layout, MotifIter};

pub use motifs::{BendLayout, Motif};

enum Frame<'a> {
    Single(Stitch),
    Group {
        commands: &'a [Command],
        next: usize,
        remaining: u32,
    },
    Pattern(MotifIter),
}

/// Lazy stitch sequence of one or more commands
pub struct Stitches<'a> {
    stack: Vec<Frame<'a>>,
    failed: bool,
}

impl<'a> Stitches<'a> {
    /// Expand a list of commands in order
    pub fn new(commands: &'a [Command]) -> Self {
        let mut stack = Vec::new();
        if !commands.is_empty() {
            stack.push(Frame::Group {
                commands,
                next: 0,
                remaining: 1,
            });
        }
        Stitches {
            stack,
            failed: false,
        }
    }

    fn push(&mut self, command: &'a Command) -> Result<()> {
        match command {
            Command::Stitch(stitch) => self.stack.push(Frame::Single(*stitch)),
            Command::Pattern(pattern) => {
                let motifs = layout(pattern)?;
                self.stack.push(Frame::Pattern(MotifIter::new(motifs)));
            }
            Command::Group(group) => {
                if !group.commands.is_empty() && group.repeat > 0 {
                    self.stack.push(Frame::Group {
                        commands: &group.commands,
                        next: 0,
                        remaining: group.repeat,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'a> Iterator for Stitches<'a> {
    type Item = Result<Stitch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let command: &'a Command = match self.stack.last_mut()? {
                Frame::Single(stitch) => {
                    let stitch = *stitch;
                    self.stack.pop();
                    return Some(Ok(stitch));
                }
                Frame::Pattern(iter) => match iter.next() {
                    Some(stitch) => return Some(Ok(stitch)),
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                Frame::Group {
                    commands,
                    next,
                    remaining,
                } => {
                    if *next == commands.len() {
                        *next = 0;
                        *remaining -= 1;
                    }
                    if *remaining == 0 {
                        self.stack.pop();
                        continue;
                    }
                    let commands: &'a [Command] = *commands;
                    let command = &commands[*next];
                    *next += 1;
                    command
                }
            };

            if let Err(err) = self.push(command) {
                self.failed = true;
                self.stack.clear();
                return Some(Err(err));
            }
        }
    }
}

/// Expand a single command
pub fn expand(command: &Command) -> Stitches<'_> {
    Stitches::new(std::slice::from_ref(command))
}

/// Expand a list of commands in order
pub fn expand_all(commands: &[Command]) -> Stitches<'_> {
    Stitches::new(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crochet::error::CrochetError;
    use crate::crochet::stitch::{Pattern, StitchGroup};
    use Stitch::*;

    fn group(commands: Vec<Command>, repeat: u32) -> Command {
        Command::Group(StitchGroup { commands, repeat })
    }

    fn collect(command: &Command) -> Vec<Stitch> {
        expand(command).collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn single_stitch_yields_itself() {
        for stitch in Stitch::ALL {
            assert_eq!(collect(&stitch.into()), vec![stitch]);
        }
    }

    #[test]
    fn group_repeats_in_order() {
        let command = group(vec![SingleCrochet.into(), Increase.into()], 2);
        assert_eq!(
            collect(&command),
            vec![SingleCrochet, Increase, SingleCrochet, Increase]
        );
    }

    #[test]
    fn nested_groups_flatten() {
        let command = group(
            vec![Chain.into(), group(vec![Back.into(), Skip.into()], 2)],
            2,
        );
        assert_eq!(
            collect(&command),
            vec![Chain, Back, Skip, Back, Skip, Chain, Back, Skip, Back, Skip]
        );
    }

    #[test]
    fn empty_group_yields_nothing() {
        assert!(collect(&group(vec![], 1_000_000)).is_empty());
    }

    #[test]
    fn patterns_inside_groups() {
        let command = group(
            vec![Pattern::MagicCircle {
                initial_stitch_count: 2,
            }
            .into()],
            2,
        );
        assert_eq!(
            collect(&command),
            vec![Chain, Chain, Back, SingleCrochet, Chain, Chain, Back, SingleCrochet]
        );
    }

    #[test]
    fn expand_all_concatenates() {
        let commands = vec![Chain.into(), group(vec![SingleCrochet.into()], 3), Skip.into()];
        let stitches = expand_all(&commands).collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(
            stitches,
            vec![Chain, SingleCrochet, SingleCrochet, SingleCrochet, Skip]
        );
    }

    #[test]
    fn error_is_yielded_after_earlier_stitches_and_fuses() {
        let commands = vec![
            Chain.into(),
            Pattern::Bend {
                round_stitch_count: 12,
                depth: 3,
            }
            .into(),
            Chain.into(),
        ];
        let mut stitches = expand_all(&commands);
        assert_eq!(stitches.next(), Some(Ok(Chain)));
        assert_eq!(
            stitches.next(),
            Some(Err(CrochetError::UnsupportedBend {
                round_stitch_count: 12,
                depth: 3
            }))
        );
        assert_eq!(stitches.next(), None);
    }

    #[test]
    fn large_repeats_are_lazy() {
        let command = group(vec![SingleCrochet.into()], u32::MAX);
        let first: Vec<_> = expand(&command).take(3).collect::<Result<_>>().unwrap();
        assert_eq!(first, vec![SingleCrochet; 3]);
    }
}
