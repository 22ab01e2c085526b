use super::headline::HeadlineLayout;

/// Client-space bounding box of a measured element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyWord {
    pub index: usize,
    pub distance_squared: f64,
}

/// Words whose center lies within `radius` of the pointer. Unmeasured
/// words (`None`) are skipped. Results keep word order.
pub fn nearby_words(words: &[Option<Rect>], x: f64, y: f64, radius: f64) -> Vec<NearbyWord> {
    let radius_squared = radius * radius;
    words
        .iter()
        .enumerate()
        .filter_map(|(index, rect)| {
            let (cx, cy) = rect.as_ref()?.center();
            let distance_squared = (x - cx).powi(2) + (y - cy).powi(2);
            (distance_squared <= radius_squared).then_some(NearbyWord {
                index,
                distance_squared,
            })
        })
        .collect()
}

/// The line whose vertical center is nearest to `y`. Ties go to the
/// earlier line.
pub fn closest_line(lines: &[Option<Rect>], y: f64) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, rect)| rect.map(|r| (index, (y - r.center().1).abs())))
        .fold(None, |best: Option<(usize, f64)>, (index, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((index, distance)),
        })
        .map(|(index, _)| index)
}

/// What the pointer is over, resolved against measured geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerHit {
    /// Nearest line by vertical distance, if any line was measured.
    pub line: Option<usize>,
    /// Words within the reveal radius, restricted to `line` when known.
    pub nearby: Vec<NearbyWord>,
}

impl PointerHit {
    pub fn resolve(
        layout: &HeadlineLayout,
        lines: &[Option<Rect>],
        words: &[Option<Rect>],
        x: f64,
        y: f64,
        radius: f64,
    ) -> Self {
        let line = closest_line(lines, y);
        let mut nearby = nearby_words(words, x, y, radius);
        if let Some(line) = line {
            let range = layout.english_line_range(line);
            nearby.retain(|word| range.contains(&word.index));
        }
        Self { line, nearby }
    }

    /// The line that counts as touched: the nearest line, provided the
    /// pointer is within reach of at least one of its words.
    pub fn touched_line(&self) -> Option<usize> {
        self.line.filter(|_| !self.nearby.is_empty())
    }

    /// Nearby word indices in ascending order.
    pub fn nearby_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.nearby.iter().map(|w| w.index).collect();
        indices.sort_unstable();
        indices
    }

    /// Nearby words ordered closest first; equal distances keep word order.
    pub fn by_distance(&self) -> Vec<NearbyWord> {
        let mut sorted = self.nearby.clone();
        sorted.sort_by(|a, b| a.distance_squared.total_cmp(&b.distance_squared));
        sorted
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Rect;
    use crate::sequence::reveal::headline::HeadlineLayout;

    pub const WORD_WIDTH: f64 = 100.0;
    pub const LINE_HEIGHT: f64 = 80.0;

    /// Lay every word out on a grid: each word 100px wide, each line 80px
    /// tall, lines stacked from the top.
    pub fn grid(layout: &HeadlineLayout) -> (Vec<Option<Rect>>, Vec<Option<Rect>>) {
        let mut lines = Vec::new();
        let mut words = Vec::new();
        for (line, line_words) in layout.english_lines().iter().enumerate() {
            let top = line as f64 * LINE_HEIGHT;
            lines.push(Some(Rect::new(
                0.0,
                top,
                line_words.len() as f64 * WORD_WIDTH,
                LINE_HEIGHT,
            )));
            for column in 0..line_words.len() {
                words.push(Some(Rect::new(
                    column as f64 * WORD_WIDTH,
                    top,
                    WORD_WIDTH,
                    LINE_HEIGHT,
                )));
            }
        }
        (lines, words)
    }

    /// Pointer position at the center of `word` on `line`.
    pub fn word_center(line: usize, word: usize) -> (f64, f64) {
        (
            word as f64 * WORD_WIDTH + WORD_WIDTH / 2.0,
            line as f64 * LINE_HEIGHT + LINE_HEIGHT / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{grid, word_center};
    use super::*;
    use crate::site::{ENGLISH_HEADLINE_LINES, KOREAN_HEADLINE_LINES};

    fn layout() -> HeadlineLayout {
        HeadlineLayout::new(&ENGLISH_HEADLINE_LINES, &KOREAN_HEADLINE_LINES)
    }

    #[test]
    fn test_nearby_words_inside_radius() {
        let words = vec![
            Some(Rect::new(0.0, 0.0, 20.0, 20.0)),
            None,
            Some(Rect::new(100.0, 0.0, 20.0, 20.0)),
        ];
        let near = nearby_words(&words, 10.0, 10.0, 70.0);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].index, 0);
        assert_eq!(near[0].distance_squared, 0.0);

        // exactly on the radius counts
        let edge = nearby_words(&words, 40.0, 10.0, 70.0);
        assert_eq!(
            edge.iter().map(|w| w.index).collect::<Vec<_>>(),
            vec![0, 2]
        );
    }

    #[test]
    fn test_closest_line() {
        let lines = vec![
            Some(Rect::new(0.0, 0.0, 10.0, 80.0)),
            Some(Rect::new(0.0, 80.0, 10.0, 80.0)),
        ];
        assert_eq!(closest_line(&lines, 10.0), Some(0));
        assert_eq!(closest_line(&lines, 150.0), Some(1));
        // midway between centers goes to the first line
        assert_eq!(closest_line(&lines, 80.0), Some(0));
        assert_eq!(closest_line(&[None, None], 10.0), None);
        assert_eq!(closest_line(&[None, lines[1]], 0.0), Some(1));
    }

    #[test]
    fn test_resolve_restricts_to_line() {
        let layout = layout();
        let (lines, words) = grid(&layout);
        // between the two lines, above "based" and below "Namu"
        let hit = PointerHit::resolve(&layout, &lines, &words, 50.0, 75.0, 70.0);
        assert_eq!(hit.line, Some(0));
        assert_eq!(hit.nearby_indices(), vec![0]);
        assert_eq!(hit.touched_line(), Some(0));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let layout = layout();
        let (lines, words) = grid(&layout);
        let (x, y) = word_center(1, 2);
        let first = PointerHit::resolve(&layout, &lines, &words, x, y, 70.0);
        let second = PointerHit::resolve(&layout, &lines, &words, x, y, 70.0);
        assert_eq!(first, second);
        assert_eq!(first.touched_line(), Some(1));
        assert_eq!(first.nearby_indices(), vec![8]);
    }

    #[test]
    fn test_far_pointer_touches_nothing() {
        let layout = layout();
        let (lines, words) = grid(&layout);
        let hit = PointerHit::resolve(&layout, &lines, &words, 2_000.0, 40.0, 70.0);
        assert_eq!(hit.line, Some(0));
        assert!(hit.nearby.is_empty());
        assert_eq!(hit.touched_line(), None);
    }

    #[test]
    fn test_unmeasured_lines_fall_back_to_all_words() {
        let layout = layout();
        let (_, words) = grid(&layout);
        let (x, y) = word_center(1, 0);
        let hit = PointerHit::resolve(&layout, &[], &words, x, y, 70.0);
        assert_eq!(hit.line, None);
        assert_eq!(hit.touched_line(), None);
        assert_eq!(hit.nearby_indices(), vec![6]);
    }

    #[test]
    fn test_by_distance_orders_closest_first() {
        let hit = PointerHit {
            line: None,
            nearby: vec![
                NearbyWord {
                    index: 3,
                    distance_squared: 400.0,
                },
                NearbyWord {
                    index: 4,
                    distance_squared: 25.0,
                },
            ],
        };
        let order: Vec<usize> = hit.by_distance().iter().map(|w| w.index).collect();
        assert_eq!(order, vec![4, 3]);
    }
}
