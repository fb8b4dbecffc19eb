//! Page range selection, e.g. `"1, 3-5, 7"`.

use std::fmt;

use crate::error::PrintError;

/// Zero-based page indices to print, in the order they were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    indices: Vec<usize>,
    total: usize,
}

impl PageSelection {
    /// Every page, in order.
    pub fn all(total: usize) -> Self {
        Self {
            indices: (0..total).collect(),
            total,
        }
    }

    /// Parse a comma- or whitespace-separated list of 1-based pages and
    /// inclusive ranges. Spaces around a range dash are allowed, so
    /// `"1 - 3"` reads as `"1-3"`. Blank text selects every page.
    pub fn parse(text: &str, total: usize) -> Result<Self, PrintError> {
        let text = join_range_dashes(text);
        let tokens: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Ok(Self::all(total));
        }

        let mut indices = Vec::new();
        for token in tokens {
            let (first, last) = match token.split_once('-') {
                Some((a, b)) => (parse_page(a, token, total)?, parse_page(b, token, total)?),
                None => {
                    let page = parse_page(token, token, total)?;
                    (page, page)
                }
            };
            if first > last {
                return Err(PrintError::InvalidPageSelection(format!(
                    "range {token} runs backwards"
                )));
            }
            indices.extend((first..=last).map(|page| page - 1));
        }

        Ok(Self { indices, total })
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

impl fmt::Display for PageSelection {
    /// Writes the selection back as compact 1-based ranges.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut runs: Vec<(usize, usize)> = Vec::new();
        for &i in &self.indices {
            match runs.last_mut() {
                Some((_, end)) if *end + 1 == i => *end = i,
                _ => runs.push((i, i)),
            }
        }

        let parts: Vec<String> = runs
            .iter()
            .map(|&(start, end)| {
                if start == end {
                    format!("{}", start + 1)
                } else {
                    format!("{}-{}", start + 1, end + 1)
                }
            })
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Drop whitespace next to `-` so a spaced range stays one token.
fn join_range_dashes(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            joined.push(c);
            continue;
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if !joined.ends_with('-') && chars.peek() != Some(&'-') {
            joined.push(' ');
        }
    }
    joined
}

fn parse_page(text: &str, token: &str, total: usize) -> Result<usize, PrintError> {
    let page: usize = text
        .trim()
        .parse()
        .map_err(|_| PrintError::InvalidPageSelection(format!("{token} is not a page number or range")))?;
    if page == 0 || page > total {
        return Err(PrintError::InvalidPageSelection(format!(
            "page {page} is outside 1-{total}"
        )));
    }
    Ok(page)
}
