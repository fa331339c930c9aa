//! Notation data model
//!
//! The tokenizer turns each piece of a line into a [`Command`]. A command is either a single
//! [`Stitch`], a parameterized starting [`Pattern`], or a [`StitchGroup`] that repeats a nested
//! list of commands. All of these render back to notation through `Display`, so a tokenized
//! line can be printed in the form the user would have typed it.

use serde::Serialize;
use std::fmt;

/// One primitive crochet instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stitch {
    Chain,
    SingleCrochet,
    Increase,
    IncreaseDecrease,
    Decrease,
    Skip,
    Back,
}

impl Stitch {
    pub const ALL: [Stitch; 7] = [
        Stitch::Chain,
        Stitch::SingleCrochet,
        Stitch::Increase,
        Stitch::IncreaseDecrease,
        Stitch::Decrease,
        Stitch::Skip,
        Stitch::Back,
    ];

    /// The keyword that spells this stitch in a line
    pub fn keyword(self) -> &'static str {
        match self {
            Stitch::Chain => "c",
            Stitch::SingleCrochet => "sc",
            Stitch::Increase => "inc",
            Stitch::IncreaseDecrease => "incdec",
            Stitch::Decrease => "dec",
            Stitch::Skip => "sk",
            Stitch::Back => "bk",
        }
    }

    /// Short code of the stitch kind. Differs from the keyword only for `incd`.
    pub fn code(self) -> &'static str {
        match self {
            Stitch::IncreaseDecrease => "incd",
            other => other.keyword(),
        }
    }
}

impl fmt::Display for Stitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parameterized starting construct that expands into a fixed stitch sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    MagicCircle { initial_stitch_count: u32 },
    MagicEllipse { extended_stitch_count: u32 },
    Bend { round_stitch_count: u32, depth: u32 },
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::MagicCircle {
                initial_stitch_count,
            } => write!(f, "mc({})", initial_stitch_count),
            Pattern::MagicEllipse {
                extended_stitch_count,
            } => write!(f, "me({})", extended_stitch_count),
            Pattern::Bend {
                round_stitch_count,
                depth,
            } => write!(f, "bend({},{})", round_stitch_count, depth),
        }
    }
}

/// A bracketed list of commands worked `repeat` times
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StitchGroup {
    pub commands: Vec<Command>,
    pub repeat: u32,
}

impl fmt::Display for StitchGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        write!(f, "]{}", self.repeat)
    }
}

/// One tokenized piece of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Stitch(Stitch),
    Pattern(Pattern),
    Group(StitchGroup),
}

impl From<Stitch> for Command {
    fn from(stitch: Stitch) -> Self {
        Command::Stitch(stitch)
    }
}

impl From<Pattern> for Command {
    fn from(pattern: Pattern) -> Self {
        Command::Pattern(pattern)
    }
}

impl From<StitchGroup> for Command {
    fn from(group: StitchGroup) -> Self {
        Command::Group(group)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Stitch(stitch) => write!(f, "{}", stitch),
            Command::Pattern(pattern) => write!(f, "{}", pattern),
            Command::Group(group) => write!(f, "{}", group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_distinct() {
        let mut keywords: Vec<_> = Stitch::ALL.iter().map(|s| s.keyword()).collect();
        keywords.sort();
        keywords.dedup();
        assert_eq!(keywords.len(), Stitch::ALL.len());
    }

    #[test]
    fn increase_decrease_code_differs_from_keyword() {
        assert_eq!(Stitch::IncreaseDecrease.keyword(), "incdec");
        assert_eq!(Stitch::IncreaseDecrease.code(), "incd");
        assert_eq!(Stitch::Skip.code(), "sk");
    }

    #[test]
    fn nested_group_renders_as_notation() {
        let group = StitchGroup {
            commands: vec![
                Stitch::SingleCrochet.into(),
                StitchGroup {
                    commands: vec![Stitch::Increase.into()],
                    repeat: 2,
                }
                .into(),
                Pattern::Bend {
                    round_stitch_count: 12,
                    depth: 2,
                }
                .into(),
            ],
            repeat: 3,
        };
        assert_eq!(group.to_string(), "[sc [inc]2 bend(12,2)]3");
    }

    #[test]
    fn patterns_serialize_with_field_names() {
        let json = serde_json::to_string(&Command::Pattern(Pattern::MagicCircle {
            initial_stitch_count: 6,
        }))
        .unwrap();
        assert_eq!(json, r#"{"pattern":{"magic_circle":{"initial_stitch_count":6}}}"#);
    }
}
