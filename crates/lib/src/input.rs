//! Line-oriented input reader.

const NL: u8 = b'\n';

/// A whole input file held in memory.
#[derive(Debug)]
pub struct Input {
    /// The path reported in diagnostics.
    path: &'static str,
    /// File contents.
    data: String,
}

impl Input {
    /// Construct a new input over the given contents.
    #[inline]
    pub fn new(path: &'static str, data: String) -> Self {
        Self { path, data }
    }

    /// The path reported in diagnostics.
    #[inline]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Iterate over non-blank lines and their 1-based line numbers.
    #[inline]
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            data: self.data.as_str(),
            line: 0,
        }
    }
}

/// Iterator over non-blank input lines.
pub struct Lines<'a> {
    data: &'a str,
    line: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<(usize, &'a str)> {
        while !self.data.is_empty() {
            let line = match memchr::memchr(NL, self.data.as_bytes()) {
                Some(at) => {
                    let line = &self.data[..at];
                    self.data = &self.data[at + 1..];
                    line
                }
                None => std::mem::take(&mut self.data),
            };

            self.line += 1;

            let line = line.strip_suffix('\r').unwrap_or(line);

            if !line.trim().is_empty() {
                return Some((self.line, line));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests;
