//! Catalog list models.

use serde::{Deserialize, Serialize};

/// Resource kind: distinguishes movies from shows throughout the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Movie,
    Show,
}

impl ResourceKind {
    /// Interpret the first route segment. Only "movies" selects Movie.
    pub fn from_route_segment(segment: &str) -> Self {
        if segment == "movies" {
            ResourceKind::Movie
        } else {
            ResourceKind::Show
        }
    }

    /// Route segment used when building links.
    pub fn route_segment(&self) -> &'static str {
        match self {
            ResourceKind::Movie => "movies",
            ResourceKind::Show => "shows",
        }
    }

    /// TMDB path segment.
    pub fn api_segment(&self) -> &'static str {
        match self {
            ResourceKind::Movie => "movie",
            ResourceKind::Show => "tv",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Movie => write!(f, "movie"),
            ResourceKind::Show => write!(f, "show"),
        }
    }
}

/// One of the eight fixed home screen categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MovieTopRated,
    MovieNowPlaying,
    MovieUpcoming,
    MoviePopular,
    ShowTopRated,
    ShowAiringToday,
    ShowOnTheAir,
    ShowPopular,
}

impl Category {
    /// All categories in display priority.
    pub const ALL: [Category; 8] = [
        Category::MovieTopRated,
        Category::MovieNowPlaying,
        Category::MovieUpcoming,
        Category::MoviePopular,
        Category::ShowTopRated,
        Category::ShowAiringToday,
        Category::ShowOnTheAir,
        Category::ShowPopular,
    ];

    pub fn kind(&self) -> ResourceKind {
        match self {
            Category::MovieTopRated
            | Category::MovieNowPlaying
            | Category::MovieUpcoming
            | Category::MoviePopular => ResourceKind::Movie,
            Category::ShowTopRated
            | Category::ShowAiringToday
            | Category::ShowOnTheAir
            | Category::ShowPopular => ResourceKind::Show,
        }
    }

    /// Section heading.
    ///
    /// The airing-today heading reads "TV: Airing Today". Older copies of
    /// the catalog page spelled it "TV: Airing To Day"; that typo is not
    /// kept.
    pub fn title(&self) -> &'static str {
        match self {
            Category::MovieTopRated => "Movie: Top Rated",
            Category::MovieNowPlaying => "Movie: Now Playing",
            Category::MovieUpcoming => "Movie: Upcoming",
            Category::MoviePopular => "Movie: Popular",
            Category::ShowTopRated => "TV: Top Rated",
            Category::ShowAiringToday => "TV: Airing Today",
            Category::ShowOnTheAir => "TV: On The Air",
            Category::ShowPopular => "TV: Popular",
        }
    }

    /// TMDB list endpoint, relative to the API root.
    pub fn api_path(&self) -> &'static str {
        match self {
            Category::MovieTopRated => "movie/top_rated",
            Category::MovieNowPlaying => "movie/now_playing",
            Category::MovieUpcoming => "movie/upcoming",
            Category::MoviePopular => "movie/popular",
            Category::ShowTopRated => "tv/top_rated",
            Category::ShowAiringToday => "tv/airing_today",
            Category::ShowOnTheAir => "tv/on_the_air",
            Category::ShowPopular => "tv/popular",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Summary of one movie or show in a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// TMDB ID.
    pub id: u64,
    pub kind: ResourceKind,
    /// Localized title (movie) or name (show).
    pub title: String,
    /// Original title (movie) or original name (show).
    pub original_title: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// User rating (0-10).
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    /// Release date (movie) or first air date (show), YYYY-MM-DD.
    pub date: Option<String>,
}

impl CatalogItem {
    /// Link to this item's detail route.
    pub fn link(&self) -> String {
        format!("/{}/{}", self.kind.route_segment(), self.id)
    }

    /// Release year, if the date is known.
    pub fn year(&self) -> Option<u16> {
        self.date
            .as_deref()
            .and_then(|d| d.get(..4))
            .and_then(|y| y.parse().ok())
    }
}

/// Ordered items fetched for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    pub category: Category,
    pub items: Vec<CatalogItem>,
}

impl CategoryList {
    pub fn new(category: Category, items: Vec<CatalogItem>) -> Self {
        Self { category, items }
    }

    pub fn empty(category: Category) -> Self {
        Self::new(category, Vec::new())
    }

    pub fn kind(&self) -> ResourceKind {
        self.category.kind()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
