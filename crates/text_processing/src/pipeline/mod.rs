//! Pipeline executor
//!
//! Stage order is fixed per language (see `english` and `persian`); the
//! task profile only switches stages on and off. Non-text cells become ""
//! before any stage runs, and every stage is total, so a record can only
//! degrade to an empty string, never fail.

mod english;
mod persian;

use corpus_prep_core::{Cell, Language, Text, WordTokenizer};
use serde::{Deserialize, Serialize};

use crate::profile::TaskProfile;
use crate::resources::LanguageResources;

/// Result of a traced run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedText {
    /// Original input text
    pub original: String,
    /// Processed output text
    pub processed: String,
    pub language: Language,
    /// Stages that changed the text, in execution order
    pub steps: Vec<ProcessingStep>,
}

/// A single processing step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStep {
    /// Stage name
    pub name: String,
    /// Input to this step
    pub input: String,
    /// Output from this step
    pub output: String,
    /// Optional metadata
    pub metadata: Option<String>,
}

/// One record moving through the stages
struct Run {
    text: Text,
    trace: bool,
    steps: Vec<ProcessingStep>,
}

impl Run {
    fn new(text: &str, trace: bool) -> Self {
        Self {
            text: Text::Raw(text.to_string()),
            trace,
            steps: Vec::new(),
        }
    }

    fn record(&mut self, name: &str, input: String, metadata: Option<String>) {
        if !self.trace {
            return;
        }
        let output = self.text.to_joined();
        if output != input {
            self.steps.push(ProcessingStep {
                name: name.to_string(),
                input,
                output,
                metadata,
            });
        }
    }

    /// String stage; a token sequence is joined first
    fn raw(&mut self, enabled: bool, name: &str, stage: impl FnOnce(&str) -> String) {
        if !enabled {
            return;
        }
        let input = std::mem::take(&mut self.text).join();
        let output = stage(&input);
        self.text = Text::Raw(output);
        self.record(name, input, None);
    }

    /// Token stage; raw text is split on whitespace first
    fn tokens(&mut self, enabled: bool, name: &str, stage: impl FnOnce(Vec<String>) -> Vec<String>) {
        if !enabled {
            return;
        }
        let tokens = match std::mem::take(&mut self.text) {
            Text::Tokens(tokens) => tokens,
            Text::Raw(s) => s.split_whitespace().map(str::to_string).collect(),
        };
        let input = if self.trace { tokens.join(" ") } else { String::new() };
        let before = tokens.len();
        self.text = Text::Tokens(stage(tokens));
        let metadata = match &self.text {
            Text::Tokens(after) if after.len() != before => {
                Some(format!("{} -> {} tokens", before, after.len()))
            }
            _ => None,
        };
        self.record(name, input, metadata);
    }

    fn tokenize(&mut self, enabled: bool, tokenizer: &dyn WordTokenizer) {
        if !enabled {
            return;
        }
        if let Text::Raw(raw) = &self.text {
            let tokens = tokenizer.tokenize(raw);
            let metadata = Some(format!("{} tokens", tokens.len()));
            let input = std::mem::replace(&mut self.text, Text::Tokens(tokens)).join();
            self.record("tokenize", input, metadata);
        }
    }

    fn finish(self) -> (String, Vec<ProcessingStep>) {
        (self.text.join(), self.steps)
    }
}

fn execute(text: &str, profile: &TaskProfile, resources: &LanguageResources, trace: bool) -> Run {
    let mut run = Run::new(text, trace);
    match resources.language {
        Language::English => english::apply(&mut run, profile, resources),
        Language::Persian => persian::apply(&mut run, profile, resources),
    }
    run
}

/// Normalize one text through the enabled stages
pub fn process_text(text: &str, profile: &TaskProfile, resources: &LanguageResources) -> String {
    execute(text, profile, resources, false).finish().0
}

/// Normalize one cell; non-text cells yield ""
pub fn process(cell: &Cell, profile: &TaskProfile, resources: &LanguageResources) -> String {
    match cell.as_text() {
        Some(text) => process_text(text, profile, resources),
        None => String::new(),
    }
}

/// Like [`process_text`], also returning every stage that changed the text
pub fn process_traced(
    text: &str,
    profile: &TaskProfile,
    resources: &LanguageResources,
) -> ProcessedText {
    let (processed, steps) = execute(text, profile, resources, true).finish();
    ProcessedText {
        original: text.to_string(),
        processed,
        language: resources.language,
        steps,
    }
}
