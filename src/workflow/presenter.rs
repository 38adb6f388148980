use std::fmt;
use std::path::PathBuf;

// @module: Rendering a segment for translation

/// Translation progress against the expected total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Items done so far
    pub done: usize,
    /// Expected number of items
    pub total: usize,
}

impl Progress {
    pub fn new(done: usize, total: usize) -> Self {
        Self { done, total }
    }

    /// Items still to translate
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.done)
    }

    /// Share of items done, in percent
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.done as f64 / self.total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{} ({:.1}%)", self.done, self.total, self.percent())
    }
}

/// Everything needed to translate one segment
#[derive(Debug, Clone)]
pub struct Presentation {
    /// Segment number
    pub number: usize,
    /// Expected total
    pub total: usize,
    /// Segment file being presented
    pub source: PathBuf,
    /// Where the accepted translation will be stored
    pub destination: PathBuf,
    /// Instructional prompt
    pub prompt: String,
    /// Worked example of the expected JSON
    pub example: String,
    /// Segment text
    pub content: String,
}

const RULE_WIDTH: usize = 80;

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{}", heavy)?;
        writeln!(f, "FILE TO TRANSLATE: {}/{}", self.number, self.total)?;
        writeln!(f, "{}", heavy)?;
        writeln!(f)?;
        writeln!(f, "Source file: {}", self.source.display())?;
        writeln!(f, "Destination file: {}", self.destination.display())?;

        for (title, body) in [
            ("TRANSLATION PROMPT:", &self.prompt),
            ("EXPECTED JSON FORMAT EXAMPLE:", &self.example),
            ("CONTENT TO TRANSLATE:", &self.content),
        ] {
            writeln!(f)?;
            writeln!(f, "{}", light)?;
            writeln!(f, "{}", title)?;
            writeln!(f, "{}", light)?;
            writeln!(f, "{}", body.trim_end())?;
        }

        writeln!(f)?;
        writeln!(f, "{}", heavy)?;
        writeln!(f, "INSTRUCTIONS:")?;
        writeln!(f, "{}", heavy)?;
        writeln!(f, "1. Read the TRANSLATION PROMPT carefully")?;
        writeln!(f, "2. Check the JSON EXAMPLE for the expected structure")?;
        writeln!(f, "3. Translate the CONTENT TO TRANSLATE following every guideline")?;
        writeln!(f, "4. Return ONLY valid JSON, without extra explanations")?;
        writeln!(
            f,
            "5. Save it with `versesplit save {} '<json>'`; the next file is shown afterwards",
            self.number
        )?;
        write!(f, "{}", heavy)
    }
}
