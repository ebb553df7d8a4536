//! Stemming entry points: single words, batches and step-by-step traces.

use serde::Serialize;
use tracing::trace as trace_event;

use crate::steps::{step1, step1a, step1b, step1c, step2, step3, step4, step5, step5a, step5b};
use crate::word::Word;

/// Words this short are returned untouched.
pub const MAX_UNSTEMMED_LEN: usize = 2;

/// Stem a lowercase English word.
///
/// ```
/// assert_eq!(porter_stem::stem("caresses"), "caress");
/// assert_eq!(porter_stem::stem("relational"), "relat");
/// ```
pub fn stem(word: &str) -> String {
    stem_word(&Word::new(word)).to_string()
}

pub fn stem_word(word: &Word) -> Word {
    if word.len() <= MAX_UNSTEMMED_LEN {
        return word.clone();
    }

    step5(&step4(&step3(&step2(&step1(word)))))
}

/// Stem every word, preserving input order.
pub fn stem_all<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|word| stem(word.as_ref())).collect()
}

/// One substep of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Step1a,
    Step1b,
    Step1c,
    Step2,
    Step3,
    Step4,
    Step5a,
    Step5b,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::Step1a,
        Stage::Step1b,
        Stage::Step1c,
        Stage::Step2,
        Stage::Step3,
        Stage::Step4,
        Stage::Step5a,
        Stage::Step5b,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Step1a => "1a",
            Stage::Step1b => "1b",
            Stage::Step1c => "1c",
            Stage::Step2 => "2",
            Stage::Step3 => "3",
            Stage::Step4 => "4",
            Stage::Step5a => "5a",
            Stage::Step5b => "5b",
        }
    }

    pub fn apply(&self, word: &Word) -> Word {
        match self {
            Stage::Step1a => step1a(word),
            Stage::Step1b => step1b(word),
            Stage::Step1c => step1c(word),
            Stage::Step2 => step2(word),
            Stage::Step3 => step3(word),
            Stage::Step4 => step4(word),
            Stage::Step5a => step5a(word),
            Stage::Step5b => step5b(word),
        }
    }
}

/// A word's form after each substep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemTrace {
    pub word: String,
    /// Empty for words that are too short to stem.
    pub stages: Vec<(Stage, String)>,
    pub stem: String,
}

impl StemTrace {
    /// The word as it stood after `stage`, if that stage ran.
    pub fn after(&self, stage: Stage) -> Option<&str> {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, form)| form.as_str())
    }
}

/// Stem `word`, recording the intermediate form after every substep.
pub fn trace(word: &str) -> StemTrace {
    let mut current = Word::new(word);
    let mut stages = Vec::new();

    if current.len() > MAX_UNSTEMMED_LEN {
        for stage in Stage::ALL {
            let next = stage.apply(&current);
            if next != current {
                trace_event!(word, stage = stage.label(), from = %current, to = %next, "rule fired");
            }
            stages.push((stage, next.to_string()));
            current = next;
        }
    }

    StemTrace {
        word: word.to_string(),
        stages,
        stem: current.to_string(),
    }
}
