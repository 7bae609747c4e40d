// CV / job description matching core.
// Skill extraction, text normalization, bag-of-words similarity and report assembly.
// Everything here is synchronous; handlers run it on the blocking pool.

pub mod handlers;
pub mod matcher;
pub mod normalizer;
pub mod report;
pub mod similarity;
pub mod skills;
pub mod stopwords;
