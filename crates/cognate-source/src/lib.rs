mod frequency;

pub use frequency::{FrequencyWords, parse_frequency_list};
