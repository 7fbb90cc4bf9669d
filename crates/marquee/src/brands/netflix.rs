//! Baseline document for the `netflix` brand

use crate::document::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn link(label: &str, active: bool) -> NavLink {
    NavLink {
        label: label.to_string(),
        active,
    }
}

fn nav_item(label: &str, icon: Option<&str>, active: bool, avatar: bool) -> BottomNavItem {
    BottomNavItem {
        label: label.to_string(),
        icon_name: icon.map(str::to_string),
        active,
        avatar,
    }
}

fn row(title: &str, ids: &[u32]) -> ContentRow {
    ContentRow {
        title: title.to_string(),
        items: ids.iter().copied().map(ContentRowItem::new).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn show(
    id: u32,
    title: &str,
    image: &str,
    tag: Option<&str>,
    match_percent: u32,
    year: u32,
    rating: &str,
    episodes: &str,
    headline: &str,
    synopsis: &str,
    cast: &[&str],
    genres: &[&str],
    mood: &str,
) -> Show {
    Show {
        id,
        title: title.to_string(),
        image: image.to_string(),
        tag: tag.map(str::to_string),
        match_percent,
        year,
        rating: rating.to_string(),
        episodes: episodes.to_string(),
        headline: headline.to_string(),
        synopsis: synopsis.to_string(),
        cast: strings(cast),
        genres: strings(genres),
        mood: mood.to_string(),
    }
}

pub(crate) fn config() -> SiteConfig {
    SiteConfig {
        navbar: Navbar {
            logo: "NETFLIX".to_string(),
            profile_color: "#E50914".to_string(),
            nav_links: vec![
                link("Home", true),
                link("Shows", false),
                link("Movies", false),
                link("New & Popular", false),
                link("My List", false),
            ],
        },
        hero: Hero {
            image: "/images/hero.jpg".to_string(),
            mobile_image: "/images/hero-mobile.jpg".to_string(),
            image_alt: "The two of us".to_string(),
            title: "Us: The Series".to_string(),
            description: "Two people, one couch, and an endless queue. A love story \
                          told one episode at a time."
                .to_string(),
            genre_tags: strings(&["Romantic", "Heartfelt", "Comedy"]),
            maturity_rating: "TV-14".to_string(),
            play_button_label: "Play".to_string(),
            my_list_button_label: "My List".to_string(),
            more_info_button_label: "More Info".to_string(),
        },
        bottom_nav: BottomNav {
            items: vec![
                nav_item("Home", Some("home"), true, false),
                nav_item("New & Hot", Some("play"), false, false),
                nav_item("My Netflix", None, false, true),
            ],
        },
        content_rows: vec![
            row("Continue Watching", &[1, 2, 3]),
            row("Because You Said Yes", &[4, 5, 6]),
            row("Top Picks for Tonight", &[2, 6, 1]),
        ],
        modal: ModalLabels {
            series_badge_label: "SERIES".to_string(),
            play_button_label: "Play".to_string(),
            add_to_list_label: "Add to My List".to_string(),
            like_label: "I like this".to_string(),
            volume_label: "Toggle volume".to_string(),
            close_label: "Close".to_string(),
            cast_label: "Cast:".to_string(),
            genres_label: "Genres:".to_string(),
            mood_label: "This show is:".to_string(),
            more_label: "more".to_string(),
            hd_badge: "HD".to_string(),
            ad_badge: "AD".to_string(),
        },
        shows: vec![
            show(
                1,
                "First Date",
                "/images/card-first-date.jpg",
                Some("New Episode"),
                98,
                2023,
                "TV-PG",
                "1 Season",
                "Where it all began",
                "Nervous laughter, a shared dessert and a walk that lasted three hours.",
                &["You", "Me"],
                &["Romance", "Comedy"],
                "Sweet, Nostalgic",
            ),
            show(
                2,
                "Road Trip",
                "/images/card-road-trip.jpg",
                Some("Top 10"),
                95,
                2024,
                "TV-14",
                "2 Seasons",
                "Wrong turns, right company",
                "A playlist argument, a flat tire and the best sunset either of them has seen.",
                &["You", "Me", "The GPS"],
                &["Adventure", "Comedy"],
                "Exciting, Feel-Good",
            ),
            show(
                3,
                "Sunday Mornings",
                "/images/card-sunday.jpg",
                None,
                92,
                2024,
                "TV-G",
                "1 Season",
                "Pancakes are a love language",
                "Slow mornings, burnt pancakes and crosswords finished together.",
                &["You", "Me"],
                &["Slice of Life"],
                "Cozy, Warm",
            ),
            show(
                4,
                "The Question",
                "/images/card-question.jpg",
                Some("Coming Soon"),
                99,
                2025,
                "TV-14",
                "Limited Series",
                "Will they say yes?",
                "One question, a lot of nerves and an answer worth waiting for.",
                &["You", "Me"],
                &["Romance", "Drama"],
                "Suspenseful, Romantic",
            ),
            show(
                5,
                "Movie Night",
                "/images/card-movie-night.jpg",
                None,
                90,
                2023,
                "TV-PG",
                "3 Seasons",
                "Nobody can pick a film",
                "Forty minutes of scrolling, ten minutes of watching, asleep by the credits.",
                &["You", "Me", "The Popcorn"],
                &["Comedy"],
                "Relatable, Funny",
            ),
            show(
                6,
                "Forever",
                "/images/card-forever.jpg",
                Some("Renewed"),
                100,
                2026,
                "TV-14",
                "Ongoing",
                "Still the best thing on",
                "Every season better than the last.",
                &["You", "Me"],
                &["Romance"],
                "Heartfelt, Hopeful",
            ),
        ],
    }
}
