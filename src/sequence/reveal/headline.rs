use std::ops::Range;

/// Word and character indexing for the two-language hero headline.
///
/// English words are addressed by a global word index across all lines.
/// Korean words likewise, and Korean characters by a global character
/// index so exit delays can be assigned per glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineLayout {
    english_lines: Vec<Vec<String>>,
    english_line_starts: Vec<usize>,
    korean_lines: Vec<Vec<String>>,
    korean_line_starts: Vec<usize>,
    korean_chars: Vec<Vec<char>>,
    korean_char_starts: Vec<usize>,
    english_to_korean: Vec<usize>,
}

fn split_lines(lines: &[&str]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| line.split(' ').map(str::to_string).collect())
        .collect()
}

fn start_indices(counts: impl Iterator<Item = usize>) -> Vec<usize> {
    counts
        .scan(0, |next, count| {
            let start = *next;
            *next += count;
            Some(start)
        })
        .collect()
}

/// Map each index in `0..from` onto `0..to` by relative position.
pub fn proportional_map(from: usize, to: usize) -> Vec<usize> {
    (0..from)
        .map(|i| {
            if from <= 1 || to <= 1 {
                0
            } else {
                (i as f64 / (from - 1) as f64 * (to - 1) as f64).round() as usize
            }
        })
        .collect()
}

impl HeadlineLayout {
    pub fn new(english: &[&str], korean: &[&str]) -> Self {
        let english_lines = split_lines(english);
        let korean_lines = split_lines(korean);
        let english_line_starts = start_indices(english_lines.iter().map(Vec::len));
        let korean_line_starts = start_indices(korean_lines.iter().map(Vec::len));
        let korean_chars: Vec<Vec<char>> = korean_lines
            .iter()
            .flatten()
            .map(|word| word.chars().collect())
            .collect();
        let korean_char_starts = start_indices(korean_chars.iter().map(Vec::len));
        let english_to_korean = proportional_map(
            english_lines.iter().map(Vec::len).sum(),
            korean_chars.len(),
        );

        Self {
            english_lines,
            english_line_starts,
            korean_lines,
            korean_line_starts,
            korean_chars,
            korean_char_starts,
            english_to_korean,
        }
    }

    pub fn english_lines(&self) -> &[Vec<String>] {
        &self.english_lines
    }

    pub fn korean_lines(&self) -> &[Vec<String>] {
        &self.korean_lines
    }

    pub fn english_word_count(&self) -> usize {
        self.english_to_korean.len()
    }

    pub fn korean_word_count(&self) -> usize {
        self.korean_chars.len()
    }

    pub fn korean_line_count(&self) -> usize {
        self.korean_lines.len()
    }

    pub fn english_line_range(&self, line: usize) -> Range<usize> {
        match (self.english_line_starts.get(line), self.english_lines.get(line)) {
            (Some(&start), Some(words)) => start..start + words.len(),
            _ => 0..0,
        }
    }

    pub fn korean_line_range(&self, line: usize) -> Range<usize> {
        match (self.korean_line_starts.get(line), self.korean_lines.get(line)) {
            (Some(&start), Some(words)) => start..start + words.len(),
            _ => 0..0,
        }
    }

    /// Global index of the `word`-th English word on `line`.
    pub fn english_word_index(&self, line: usize, word: usize) -> usize {
        self.english_line_starts.get(line).copied().unwrap_or(0) + word
    }

    pub fn korean_word_index(&self, line: usize, word: usize) -> usize {
        self.korean_line_starts.get(line).copied().unwrap_or(0) + word
    }

    pub fn korean_chars(&self, word: usize) -> &[char] {
        self.korean_chars.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn korean_char_range(&self, word: usize) -> Range<usize> {
        let start = self.korean_char_starts.get(word).copied().unwrap_or(0);
        start..start + self.korean_chars(word).len()
    }

    pub fn korean_for(&self, english: usize) -> usize {
        self.english_to_korean.get(english).copied().unwrap_or(0)
    }

    pub fn max_english_line_len(&self) -> usize {
        self.english_lines.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{ENGLISH_HEADLINE_LINES, KOREAN_HEADLINE_LINES};

    fn layout() -> HeadlineLayout {
        HeadlineLayout::new(&ENGLISH_HEADLINE_LINES, &KOREAN_HEADLINE_LINES)
    }

    #[test]
    fn test_line_ranges() {
        let layout = layout();
        assert_eq!(layout.english_word_count(), 11);
        assert_eq!(layout.english_line_range(0), 0..6);
        assert_eq!(layout.english_line_range(1), 6..11);
        assert_eq!(layout.english_line_range(2), 0..0);
        assert_eq!(layout.korean_word_count(), 5);
        assert_eq!(layout.korean_line_range(0), 0..1);
        assert_eq!(layout.korean_line_range(1), 1..5);
        assert_eq!(layout.max_english_line_len(), 6);
    }

    #[test]
    fn test_korean_chars_are_indexed_globally() {
        let layout = layout();
        // 안녕하세요! has six scalar values
        assert_eq!(layout.korean_char_range(0), 0..6);
        // 제
        assert_eq!(layout.korean_char_range(1), 6..7);
        assert_eq!(layout.korean_chars(1), &['제']);
        assert_eq!(layout.korean_char_range(4), 16..22);
        assert!(layout.korean_chars(9).is_empty());
    }

    #[test]
    fn test_proportional_mapping() {
        let layout = layout();
        let mapped: Vec<usize> = (0..11).map(|i| layout.korean_for(i)).collect();
        assert_eq!(mapped, vec![0, 0, 1, 1, 2, 2, 2, 3, 3, 4, 4]);
        assert_eq!(proportional_map(3, 1), vec![0, 0, 0]);
        assert_eq!(proportional_map(1, 5), vec![0]);
        assert!(proportional_map(0, 5).is_empty());
    }

    #[test]
    fn test_global_word_index() {
        let layout = layout();
        assert_eq!(layout.english_word_index(1, 2), 8);
        assert_eq!(layout.english_lines()[1][2], "Brooklyn,");
        assert_eq!(layout.korean_word_index(1, 0), 1);
    }
}
