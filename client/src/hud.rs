//! Score digits drawn as seven-segment glyphs made of rectangles.

use game_core::Rect;
use glam::Vec2;

/// Segments a-g, clockwise from the top, `g` in the middle
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0: a b c d e f
    0b000_0110, // 1: b c
    0b101_1011, // 2: a b d e g
    0b100_1111, // 3: a b c d g
    0b110_0110, // 4: b c f g
    0b110_1101, // 5: a c d f g
    0b111_1101, // 6: a c d e f g
    0b000_0111, // 7: a b c
    0b111_1111, // 8: all
    0b110_1111, // 9: a b c d f g
];

/// Segment rectangles for one digit whose glyph box starts at `origin`
pub fn digit_rects(digit: u8, origin: Vec2, height: f32) -> Vec<Rect> {
    let mask = DIGIT_SEGMENTS[(digit % 10) as usize];
    let width = height / 2.0;
    let thick = height / 10.0;
    let half = height / 2.0;
    let (x, y) = (origin.x, origin.y);

    let segments = [
        Rect::new(x, y, width, thick),                         // a
        Rect::new(x + width - thick, y, thick, half),          // b
        Rect::new(x + width - thick, y + half, thick, half),   // c
        Rect::new(x, y + height - thick, width, thick),        // d
        Rect::new(x, y + half, thick, half),                   // e
        Rect::new(x, y, thick, half),                          // f
        Rect::new(x, y + half - thick / 2.0, width, thick),    // g
    ];

    segments
        .into_iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, rect)| rect)
        .collect()
}

/// Horizontal distance between consecutive digit boxes
pub fn digit_advance(height: f32) -> f32 {
    height / 2.0 + height / 4.0
}

/// Rectangles spelling `value` in decimal, left-aligned at `origin`
pub fn number_rects(value: u32, origin: Vec2, height: f32) -> Vec<Rect> {
    let advance = digit_advance(height);
    value
        .to_string()
        .bytes()
        .enumerate()
        .flat_map(|(i, b)| {
            let origin = origin + Vec2::new(i as f32 * advance, 0.0);
            digit_rects(b - b'0', origin, height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_counts() {
        let counts: Vec<usize> = (0..10)
            .map(|d| digit_rects(d, Vec2::ZERO, 40.0).len())
            .collect();
        assert_eq!(counts, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn test_one_is_right_hand_verticals() {
        let rects = digit_rects(1, Vec2::new(200.0, 20.0), 40.0);
        assert_eq!(
            rects,
            vec![
                Rect::new(216.0, 20.0, 4.0, 20.0),
                Rect::new(216.0, 40.0, 4.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_glyph_stays_inside_box() {
        for d in 0..10 {
            for rect in digit_rects(d, Vec2::new(10.0, 20.0), 40.0) {
                assert!(rect.x >= 10.0 && rect.x + rect.width <= 30.0 + 1e-4);
                assert!(rect.y >= 20.0 && rect.y + rect.height <= 60.0 + 1e-4);
            }
        }
    }

    #[test]
    fn test_multi_digit_numbers_advance() {
        let rects = number_rects(10, Vec2::new(600.0, 20.0), 40.0);
        assert_eq!(rects.len(), 2 + 6);
        let second_digit_min_x = rects[2..]
            .iter()
            .map(|r| r.x)
            .fold(f32::INFINITY, f32::min);
        assert_eq!(second_digit_min_x, 600.0 + digit_advance(40.0));
    }

    #[test]
    fn test_zero_score_is_drawn() {
        assert_eq!(number_rects(0, Vec2::ZERO, 40.0).len(), 6);
    }
}
