//! Content literals for the site. Everything a copy edit would touch lives
//! here so the components and sequencers stay free of prose.

use rand::Rng;

pub const OWNER_NAME: &str = "Namu Park";
pub const SITE_TITLE: &str = "Namu Park Portfolio";
pub const SITE_DESCRIPTION: &str = "Making beautiful things that work";
pub const LOCATION_LABEL: &str = "Brooklyn, New York";

pub const EMAIL: &str = "namu.d.park@gmail.com";
pub const PORTFOLIO_URL: &str = "https://contra.com/namupark/work";

pub const NOTE_TEXT: &str = "Website update is in progress. In the meantime, check out my work at";

pub const HEADLINE_TEXT: &str = "Namu Park is a product designer based in Brooklyn, New York.";
pub const ENGLISH_HEADLINE_LINES: [&str; 2] =
    ["Namu Park is a product designer", "based in Brooklyn, New York."];
pub const KOREAN_HEADLINE_LINES: [&str; 2] = ["안녕하세요!", "제 웹사이트에 오신것을 환영합니다."];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMedia {
    Image(&'static str),
    Video(&'static str),
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpec {
    pub title: &'static str,
    pub href: Option<&'static str>,
    pub media: CardMedia,
    pub subtitle: Option<&'static str>,
    pub hover_label: Option<&'static str>,
    pub coming_soon: bool,
    pub disable_hover_dim: bool,
}

pub const CASE_GRID: [CardSpec; 4] = [
    CardSpec {
        title: "ClaimClam",
        href: Some("/claimclam"),
        media: CardMedia::Image("/images/namupark_claimclam.png"),
        subtitle: None,
        hover_label: Some("Read case study"),
        coming_soon: false,
        disable_hover_dim: false,
    },
    CardSpec {
        title: "The Sloth",
        href: None,
        media: CardMedia::Video("/video/slothvideo2.mp4"),
        subtitle: None,
        hover_label: Some("Case study coming soon"),
        coming_soon: false,
        disable_hover_dim: false,
    },
    CardSpec {
        title: "Heart in the Cloud",
        href: None,
        media: CardMedia::Image("/images/HITC_namupark_cover1.png"),
        subtitle: Some("Logo Design"),
        hover_label: None,
        coming_soon: false,
        disable_hover_dim: true,
    },
    CardSpec {
        title: "AI Deal Home",
        href: None,
        media: CardMedia::Image("/images/A.NamuPark_AIDealHome.png"),
        subtitle: None,
        hover_label: None,
        coming_soon: false,
        disable_hover_dim: true,
    },
];

impl CardSpec {
    pub fn has_media(&self) -> bool {
        self.media != CardMedia::None
    }

    pub fn class_list(&self) -> String {
        let mut classes = vec!["card"];
        if self.has_media() {
            classes.push("card-with-media");
        }
        match self.media {
            CardMedia::Image(_) => classes.push("card-with-image"),
            CardMedia::Video(_) => classes.push("card-with-video"),
            CardMedia::None => {}
        }
        if self.disable_hover_dim {
            classes.push("card-no-dim");
        }
        classes.join(" ")
    }
}

/// Per-element start offsets for the staggered page entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceDelays {
    pub nav: u32,
    pub hero: u32,
    pub note: u32,
    pub cards: [u32; 4],
}

pub const NAV_ENTRANCE_DURATION_MS: u32 = 1200;
pub const HERO_ENTRANCE_DURATION_MS: u32 = 650;

impl EntranceDelays {
    /// Server render values, before any jitter.
    pub fn baseline() -> Self {
        Self {
            nav: 20,
            hero: 0,
            note: 40,
            cards: std::array::from_fn(|i| 90 + 70 * i as u32),
        }
    }

    pub fn jittered<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let base = Self::baseline();
        Self {
            note: base.note + rng.gen_range(0..60),
            cards: base.cards.map(|delay| delay + rng.gen_range(0..50)),
            ..base
        }
    }
}

/// Inline style carrying the entrance custom properties.
pub fn entrance_style(delay_ms: u32, duration_ms: Option<u32>) -> String {
    match duration_ms {
        Some(duration) => format!("--entrance-delay: {delay_ms}ms; --entrance-duration: {duration}ms"),
        None => format!("--entrance-delay: {delay_ms}ms"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_card_classes() {
        assert_eq!(CASE_GRID[0].class_list(), "card card-with-media card-with-image");
        assert_eq!(CASE_GRID[1].class_list(), "card card-with-media card-with-video");
        assert_eq!(
            CASE_GRID[2].class_list(),
            "card card-with-media card-with-image card-no-dim"
        );
        let bare = CardSpec {
            media: CardMedia::None,
            disable_hover_dim: false,
            ..CASE_GRID[0]
        };
        assert_eq!(bare.class_list(), "card");
    }

    #[test]
    fn test_only_claimclam_links() {
        let linked: Vec<&str> = CASE_GRID.iter().filter_map(|card| card.href).collect();
        assert_eq!(linked, vec!["/claimclam"]);
    }

    #[test]
    fn test_headline_lines_match_text() {
        assert_eq!(ENGLISH_HEADLINE_LINES.join(" "), HEADLINE_TEXT);
    }

    #[test]
    fn test_entrance_jitter_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let delays = EntranceDelays::jittered(&mut rng);
            assert_eq!(delays.hero, 0);
            assert!((40..100).contains(&delays.note));
            for (i, delay) in delays.cards.iter().enumerate() {
                let base = 90 + 70 * i as u32;
                assert!((base..base + 50).contains(delay));
            }
        }
        assert_eq!(EntranceDelays::baseline().cards, [90, 160, 230, 300]);
    }

    #[test]
    fn test_entrance_style() {
        assert_eq!(entrance_style(20, Some(1200)), "--entrance-delay: 20ms; --entrance-duration: 1200ms");
        assert_eq!(entrance_style(90, None), "--entrance-delay: 90ms");
    }
}
