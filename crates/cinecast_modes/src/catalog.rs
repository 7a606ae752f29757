//! The shipped mode catalog.

use crate::{BestOf, Mode, RandomPage, RandomPoster, Relaxed, Template};
use chrono::NaiveDate;
use cinecast_core::ReleaseWindow;
use cinecast_error::{ModeError, ModeErrorKind};
use cinecast_tmdb::{Endpoint, MovieQuery, SortBy};

const TR: &str = "tr-TR";
const EN: &str = "en-US";

/// Watch provider id of Netflix.
const NETFLIX: u32 = 8;

fn discover(language: &str) -> MovieQuery {
    MovieQuery::new(Endpoint::Discover)
        .language(language)
        .sort_by(SortBy::PopularityDesc)
}

fn classic_cutoff() -> Result<NaiveDate, ModeError> {
    NaiveDate::from_ymd_opt(2005, 12, 31).ok_or_else(|| {
        ModeError::new(ModeErrorKind::InvalidDefinition(
            "classic cutoff is not a calendar date".to_string(),
        ))
    })
}

/// Every built-in mode, in key order.
pub(crate) fn builtin_modes() -> Result<Vec<Mode>, ModeError> {
    Ok(vec![
        Mode::new(
            "1",
            "Most popular movie in Turkey today",
            BestOf::new(MovieQuery::new(Endpoint::Popular).language(TR).with_region()),
            Template::new(
                "🎬 Bugün Türkiye'de en popüler film:",
                "Daha fazla",
                "#film #sinema #tmdb",
            ),
            "No popular movie found for the region",
        ),
        Mode::new(
            "2",
            "Most popular movie worldwide today",
            BestOf::new(MovieQuery::new(Endpoint::Popular).language(TR)),
            Template::new(
                "🌍 Bugün dünyada en popüler film:",
                "Detaylar",
                "#film #sinema #tmdb",
            ),
            "No popular movie found",
        ),
        Mode::new(
            "3",
            "A movie released in the last 7 days, trending fallback",
            Relaxed::new(
                BestOf::new(discover(TR).with_region().window(ReleaseWindow::recent(7)))
                    .min_votes(1),
            )
            .or_else(
                "No release in the last 7 days, falling back to trending",
                BestOf::new(MovieQuery::new(Endpoint::TrendingDay).language(TR)).min_votes(1),
            ),
            Template::new(
                "🎟 Son günlerde vizyona gelen bir film:",
                "Detaylar",
                "#yenifilm #filmönerisi #tmdb",
            )
            .full_date(),
            "No recent release and nothing trending, skipping post",
        ),
        Mode::new(
            "4",
            "Top rated new movie of the week",
            BestOf::new(
                MovieQuery::new(Endpoint::Discover)
                    .language(EN)
                    .sort_by(SortBy::VoteAverageDesc)
                    .min_vote_count(100)
                    .window(ReleaseWindow::recent(7)),
            )
            .min_votes(100),
            Template::new(
                "📈 Haftanın en yüksek puanlı yeni filmi:",
                "Detay",
                "#filmönerisi #tmdb",
            ),
            "No well rated release this week",
        ),
        Mode::new(
            "5",
            "Random well rated movie",
            RandomPage::new(
                discover(TR).min_vote_average(7.5).min_vote_count(300),
                50,
            ),
            Template::new(
                "🎲 Bugünün rastgele kaliteli filmi:",
                "Listeye ekle",
                "#filmönerisi #random #tmdb",
            )
            .summary(160),
            "No well rated movie found",
        ),
        Mode::new(
            "8",
            "Most popular movie on Netflix Turkey",
            BestOf::new(discover(TR).watch_provider(NETFLIX).with_watch_region()).min_votes(20),
            Template::new(
                "📺 Türkiye'de Netflix'te en popüler film:",
                "TMDB sayfası",
                "#netflix #film #tmdb",
            ),
            "No Netflix movie found for the region",
        ),
        Mode::new(
            "10",
            "Box office style hit of the last two weeks",
            BestOf::new(
                discover(EN)
                    .window(ReleaseWindow::recent(14))
                    .min_vote_count(100),
            )
            .min_votes(100),
            Template::new(
                "💰 Son haftaların gişe şampiyonu kıvamında film:",
                "Daha fazla",
                "#boxoffice #film #tmdb",
            ),
            "No popular release in the last two weeks",
        ),
        Mode::new(
            "13",
            "Trending movie of the last 24 hours",
            BestOf::new(MovieQuery::new(Endpoint::TrendingDay).language(EN)),
            Template::new(
                "🚀 Son 24 saatte trend olan film:",
                "TMDB",
                "#trending #film #tmdb",
            ),
            "No trending movie found",
        ),
        Mode::new(
            "14",
            "Poster pick among popular movies",
            RandomPoster::new(MovieQuery::new(Endpoint::Popular).language(EN)),
            Template::new("🖼 Bugünün poster seçimi:", "Detay", "#poster #film #tmdb").poster(),
            "No popular movie with a poster found",
        ),
        Mode::new(
            "15",
            "Most popular Turkish movie",
            BestOf::new(discover(TR).original_language("tr")).min_votes(20),
            Template::new(
                "🇹🇷 Bugün en popüler Türk filmi:",
                "Detay",
                "#yerlifilm #turkiye #tmdb",
            ),
            "No Turkish movie found",
        ),
        Mode::new(
            "16",
            "Random classic released before 2006",
            RandomPage::new(
                discover(EN)
                    .window(ReleaseWindow::Until(classic_cutoff()?))
                    .min_vote_count(500),
                50,
            ),
            Template::new("🎞 Bugünün klasik filmi:", "Koleksiyona ekle", "#klasik #film #tmdb")
                .summary(160),
            "No classic movie found",
        ),
        Mode::new(
            "17",
            "Hidden gem: well rated but little known",
            RandomPage::new(
                discover(TR)
                    .min_vote_average(7.0)
                    .min_vote_count(100)
                    .max_vote_count(2000),
                30,
            )
            .or_else(
                "No hidden gem in the narrow vote range, relaxing the filter",
                discover(TR).min_vote_average(7.0).min_vote_count(50),
            ),
            Template::new(
                "💎 Bugünün gizli mücevher filmi:",
                "Keşfet",
                "#gizlifilm #filmönerisi #tmdb",
            )
            .summary(160),
            "Still no hidden gem after relaxing, skipping post",
        ),
    ])
}
