//! Ancestor-path scan over document lines.
//!
//! Both the tree parser and the note inserter walk headings through this
//! iterator, so heading levels are tracked in exactly one place.

use crate::outline::types::HeadingLine;

/// A heading line together with the titles of every enclosing heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedHeading {
    /// Zero-based index of the heading line
    pub line: usize,
    /// Marker-run length of the heading
    pub level: usize,
    /// Ancestor titles followed by this heading's own title
    pub path: Vec<String>,
}

impl ScannedHeading {
    pub fn title(&self) -> &str {
        self.path.last().map_or("", String::as_str)
    }

    /// Depth in the heading tree; top-level headings have depth 1.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// Iterator yielding one [`ScannedHeading`] per heading line.
pub struct HeadingScan<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    lines: std::iter::Enumerate<I>,
    /// Open headings as (level, title), outermost first
    stack: Vec<(usize, String)>,
}

pub fn scan_headings<'a, I>(lines: I) -> HeadingScan<'a, I::IntoIter>
where
    I: IntoIterator<Item = &'a str>,
{
    HeadingScan { lines: lines.into_iter().enumerate(), stack: Vec::new() }
}

impl<'a, I> Iterator for HeadingScan<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = ScannedHeading;

    fn next(&mut self) -> Option<Self::Item> {
        for (line, text) in self.lines.by_ref() {
            let Some(heading) = HeadingLine::parse(text) else {
                continue;
            };

            while self.stack.last().is_some_and(|(level, _)| *level >= heading.level) {
                self.stack.pop();
            }
            self.stack.push((heading.level, heading.title));

            let path = self.stack.iter().map(|(_, title)| title.clone()).collect();
            return Some(ScannedHeading { line, level: heading.level, path });
        }
        None
    }
}
