// Text preparation: sentence segmentation, word frequencies, stop words.

pub mod frequency;
pub mod segmenter;
pub mod stopwords;
