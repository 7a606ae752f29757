//! Post templates: render a chosen movie into message text.

use cinecast_core::Movie;
use std::borrow::Cow;

/// Canonical movie page base; the identifier is appended.
pub const DETAIL_BASE_URL: &str = "https://www.themoviedb.org/movie/";

/// Poster image base; the poster path is appended.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Marker appended to shortened summaries.
pub const SUMMARY_ELLIPSIS: &str = "…";

/// Canonical detail link for a movie identifier.
pub fn detail_url(id: u64) -> String {
    format!("{DETAIL_BASE_URL}{id}")
}

/// Full poster URL, `None` when the movie has no poster.
pub fn poster_url(movie: &Movie) -> Option<String> {
    movie
        .poster_path
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(|path| format!("{POSTER_BASE_URL}{path}"))
}

/// Shorten `text` to fit `budget` characters.
///
/// Text within budget comes back unchanged. Longer text keeps its first
/// `budget - 1` characters, cut back to the last whitespace among them, and
/// gains a trailing [`SUMMARY_ELLIPSIS`].
///
/// # Examples
///
/// ```
/// use cinecast_modes::shorten;
///
/// assert_eq!(shorten("short plot", 150), "short plot");
/// assert_eq!(shorten("one two three four", 10), "one two…");
/// ```
pub fn shorten(text: &str, budget: usize) -> Cow<'_, str> {
    if text.chars().count() <= budget {
        return Cow::Borrowed(text);
    }

    let head_end = text
        .char_indices()
        .nth(budget.saturating_sub(1))
        .map_or(text.len(), |(idx, _)| idx);
    let head = &text[..head_end];
    let kept = head
        .rfind(char::is_whitespace)
        .map_or(head, |idx| &head[..idx]);

    let mut shortened = String::with_capacity(kept.len() + SUMMARY_ELLIPSIS.len());
    shortened.push_str(kept);
    shortened.push_str(SUMMARY_ELLIPSIS);
    Cow::Owned(shortened)
}

/// How the release date appears after the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// First four characters of the release date.
    #[default]
    Year,
    /// The release date as given.
    FullDate,
}

/// Message body under the title line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// Rating on the title line, then the summary shortened to `budget` characters.
    Summary {
        /// Character budget for the summary
        budget: usize,
    },
    /// Poster link instead of rating and summary.
    Poster,
}

/// Fixed text around a movie's fields.
///
/// # Examples
///
/// ```
/// use cinecast_core::Movie;
/// use cinecast_modes::Template;
///
/// let template = Template::new("🎬 Film:", "Detay", "#film").summary(150);
/// let movie = Movie {
///     id: 7,
///     title: "Test Movie".into(),
///     release_date: Some("2024-03-15".into()),
///     vote_average: 8.2,
///     ..Default::default()
/// };
///
/// let text = template.render(&movie);
/// assert!(text.starts_with("🎬 Film:\nTest Movie (2024) – ⭐ 8.2"));
/// assert!(text.ends_with("Detay: https://www.themoviedb.org/movie/7\n#film"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    header: String,
    link_label: String,
    hashtags: String,
    date_style: DateStyle,
    body: Body,
}

impl Template {
    /// Default summary budget.
    pub const DEFAULT_SUMMARY_BUDGET: usize = 150;

    /// Template with a year, rating and summary of the default budget.
    pub fn new(
        header: impl Into<String>,
        link_label: impl Into<String>,
        hashtags: impl Into<String>,
    ) -> Self {
        Self {
            header: header.into(),
            link_label: link_label.into(),
            hashtags: hashtags.into(),
            date_style: DateStyle::Year,
            body: Body::Summary {
                budget: Self::DEFAULT_SUMMARY_BUDGET,
            },
        }
    }

    /// Show the full release date instead of the year.
    pub fn full_date(mut self) -> Self {
        self.date_style = DateStyle::FullDate;
        self
    }

    /// Summary body with the given character budget.
    pub fn summary(mut self, budget: usize) -> Self {
        self.body = Body::Summary { budget };
        self
    }

    /// Poster body.
    pub fn poster(mut self) -> Self {
        self.body = Body::Poster;
        self
    }

    /// Header line.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Body kind.
    pub fn body(&self) -> Body {
        self.body
    }

    /// Date style.
    pub fn date_style(&self) -> DateStyle {
        self.date_style
    }

    /// Render a movie into post text.
    pub fn render(&self, movie: &Movie) -> String {
        let date = match self.date_style {
            DateStyle::Year => movie.year(),
            DateStyle::FullDate => movie.release_date_str(),
        };
        let url = detail_url(movie.id);

        match self.body {
            Body::Summary { budget } => format!(
                "{header}\n{title} ({date}) – ⭐ {vote:.1}\n\n{summary}\n\n{label}: {url}\n{tags}",
                header = self.header,
                title = movie.title,
                vote = movie.vote_average,
                summary = shorten(movie.overview_str(), budget),
                label = self.link_label,
                tags = self.hashtags,
            ),
            Body::Poster => format!(
                "{header}\n{title} ({date})\n\nPoster: {poster}\n{label}: {url}\n{tags}",
                header = self.header,
                title = movie.title,
                poster = poster_url(movie).unwrap_or_default(),
                label = self.link_label,
                tags = self.hashtags,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_keeps_text_within_budget() {
        let text = "x".repeat(150);
        assert!(matches!(shorten(&text, 150), Cow::Borrowed(_)));
        assert_eq!(shorten("", 150), "");
    }

    #[test]
    fn shorten_cuts_at_last_space_before_budget() {
        // Budget 12 keeps 11 chars "alpha beta " then cuts at the space.
        assert_eq!(shorten("alpha beta gamma", 12), "alpha beta…");
    }

    #[test]
    fn shorten_without_whitespace_keeps_whole_head() {
        assert_eq!(shorten("abcdefghijkl", 6), "abcde…");
    }

    #[test]
    fn shorten_counts_characters() {
        let text = "çğış öüÇĞ İŞÖÜ çğış";
        let out = shorten(text, 10);
        assert_eq!(out, "çğış…");
    }

    #[test]
    fn poster_url_requires_path() {
        let mut movie = Movie::default();
        assert_eq!(poster_url(&movie), None);
        movie.poster_path = Some(String::new());
        assert_eq!(poster_url(&movie), None);
        movie.poster_path = Some("/x.jpg".into());
        assert_eq!(
            poster_url(&movie).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/x.jpg")
        );
    }

    #[test]
    fn full_date_style_uses_release_date() {
        let template = Template::new("H", "L", "#t").full_date();
        let movie = Movie {
            id: 1,
            title: "T".into(),
            release_date: Some("2024-03-15".into()),
            ..Default::default()
        };
        assert!(template.render(&movie).contains("T (2024-03-15)"));
    }

    #[test]
    fn missing_fields_render_empty() {
        let template = Template::new("H", "L", "#t");
        let movie = Movie {
            id: 2,
            title: "T".into(),
            ..Default::default()
        };
        assert_eq!(
            template.render(&movie),
            "H\nT () – ⭐ 0.0\n\n\n\nL: https://www.themoviedb.org/movie/2\n#t"
        );
    }
}
