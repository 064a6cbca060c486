// src/router.rs
const LEVEL_PREFIX: &str = "/level/";
const MAP_SUFFIX: &str = "/map";
const BOUNDS_SUFFIX: &str = "/bounds";

/// What a request path asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Stats,
    Map(String),
    Bounds(String),
    Unknown(String),
}

impl Route {
    /// Anything outside `/level/` is the stats page. Under it the level name
    /// runs up to the first `/map` or `/bounds`, checked in that order.
    pub fn classify(path: &str) -> Self {
        let rem = match path.strip_prefix(LEVEL_PREFIX) {
            Some(rem) => rem,
            None => return Self::Stats,
        };

        if let Some(idx) = rem.find(MAP_SUFFIX) {
            Self::Map(rem[..idx].to_string())
        } else if let Some(idx) = rem.find(BOUNDS_SUFFIX) {
            Self::Bounds(rem[..idx].to_string())
        } else {
            Self::Unknown(path.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_unmatched_paths_are_stats() {
        assert_eq!(Route::classify("/"), Route::Stats);
        assert_eq!(Route::classify(""), Route::Stats);
        assert_eq!(Route::classify("/players"), Route::Stats);
        assert_eq!(Route::classify("/level"), Route::Stats);
        assert_eq!(Route::classify("/levels/main/map"), Route::Stats);
    }

    #[test]
    fn level_sub_routes() {
        assert_eq!(Route::classify("/level/main/map"), Route::Map("main".to_string()));
        assert_eq!(
            Route::classify("/level/main/bounds"),
            Route::Bounds("main".to_string())
        );
        assert_eq!(Route::classify("/level/main/map.dat"), Route::Map("main".to_string()));
        assert_eq!(Route::classify("/level//bounds"), Route::Bounds(String::new()));
    }

    #[test]
    fn map_wins_over_bounds() {
        assert_eq!(
            Route::classify("/level/main/bounds/map"),
            Route::Map("main/bounds".to_string())
        );
    }

    #[test]
    fn other_level_pages_are_unknown() {
        assert_eq!(
            Route::classify("/level/main/players"),
            Route::Unknown("/level/main/players".to_string())
        );
        assert_eq!(Route::classify("/level/"), Route::Unknown("/level/".to_string()));
    }
}
