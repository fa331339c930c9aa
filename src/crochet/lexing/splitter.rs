//! Bracket-aware line splitting
//!
//! Splits a line on whitespace, except inside `[...]`: a bracketed group is always returned as
//! one piece, spaces and all. Bracket depth is tracked across the whole line, so a stray `]`
//! pushes the depth negative and the brackets that follow it no longer protect their contents.
//! Unbalanced brackets are not an error here; the tokenizer rejects the resulting pieces.

/// Iterator over the pieces of a line
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    line: &'a str,
    pos: usize,
    depth: i32,
}

impl<'a> Pieces<'a> {
    pub fn new(line: &'a str) -> Self {
        Pieces {
            line,
            pos: 0,
            depth: 0,
        }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.line[self.pos..];
        let start = self.pos + rest.find(|c: char| !c.is_whitespace())?;

        let mut end = self.line.len();
        for (i, ch) in self.line[start..].char_indices() {
            match ch {
                '[' => self.depth += 1,
                ']' => self.depth -= 1,
                c if c.is_whitespace() && self.depth <= 0 => {
                    end = start + i;
                    break;
                }
                _ => {}
            }
        }

        self.pos = end;
        Some(&self.line[start..end])
    }
}

/// Split a line into pieces
pub fn split_line(line: &str) -> Pieces<'_> {
    Pieces::new(line)
}
