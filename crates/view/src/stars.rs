//! Star-row display computation for a product card.

use devportal_catalog::Rating;

/// Stars rendered per product card.
pub const STAR_COUNT: usize = 5;

/// Which of the five stars render filled.
///
/// A hover of `Some(n)` with `n > 0` previews an n-star selection; `Some(0)`
/// and `None` fall back to the product rating. Star `i` (0-based) is filled
/// iff `i < effective`.
pub fn star_fill(rating: Rating, hover: Option<u8>) -> [bool; STAR_COUNT] {
    let effective = match hover {
        Some(h) if h > 0 => f32::from(h),
        _ => rating.value(),
    };
    core::array::from_fn(|i| (i as f32) < effective)
}

/// Caption shown next to the stars, e.g. `"4.0 (7 votes)"`.
pub fn rating_caption(rating: Rating, votes: u32) -> String {
    format!("{:.1} ({votes} votes)", rating.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(value: f32) -> Rating {
        Rating::new(value).expect("rating on scale")
    }

    #[test]
    fn fill_follows_the_rating_without_hover() {
        assert_eq!(star_fill(rating(3.0), None), [true, true, true, false, false]);
        assert_eq!(star_fill(rating(0.0), None), [false; 5]);
        assert_eq!(star_fill(rating(5.0), None), [true; 5]);
    }

    #[test]
    fn fractional_ratings_round_up_the_partial_star() {
        // 3 < 3.5, so the fourth star fills.
        assert_eq!(star_fill(rating(3.5), None), [true, true, true, true, false]);
    }

    #[test]
    fn hover_previews_override_the_rating() {
        assert_eq!(star_fill(rating(1.0), Some(4)), [true, true, true, true, false]);
        assert_eq!(star_fill(rating(5.0), Some(1)), [true, false, false, false, false]);
    }

    #[test]
    fn zero_hover_falls_back_to_the_rating() {
        assert_eq!(star_fill(rating(2.0), Some(0)), star_fill(rating(2.0), None));
    }

    #[test]
    fn caption_formats_to_one_decimal() {
        assert_eq!(rating_caption(rating(4.0), 7), "4.0 (7 votes)");
        assert_eq!(rating_caption(rating(3.5), 14), "3.5 (14 votes)");
        assert_eq!(rating_caption(rating(1.0), 2), "1.0 (2 votes)");
    }
}
