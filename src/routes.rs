use std::fmt;
use std::str::FromStr;

/// Screens the host can show. `Movie` is the tap target of every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Movie { id: u64 },
}

impl Route {
    pub fn movie(id: u64) -> Self {
        Route::Movie { id }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Movie { id } => format!("/movies/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "/" || s.is_empty() {
            return Ok(Route::Home);
        }
        s.strip_prefix("/movies/")
            .and_then(|rest| rest.trim_end_matches('/').parse::<u64>().ok())
            .map(Route::movie)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_route_path() {
        assert_eq!(Route::movie(42).path(), "/movies/42");
        assert_eq!(Route::Home.path(), "/");
    }

    #[test]
    fn parses_known_paths() {
        assert_eq!("/movies/550".parse::<Route>(), Ok(Route::movie(550)));
        assert_eq!("/movies/550/".parse::<Route>(), Ok(Route::movie(550)));
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!("/movies/abc".parse::<Route>().is_err());
        assert!("/tv/1".parse::<Route>().is_err());
        assert!("/movies/".parse::<Route>().is_err());
    }

    #[test]
    fn display_matches_path() {
        let r = Route::movie(7);
        assert_eq!(r.to_string(), r.path());
    }
}
