use std::fmt;

use crate::FeedlyError;

/// Number of results requested when `--count` is not given.
pub const DEFAULT_COUNT: u32 = 15;

/// Which of the three API calls an operation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Search,
    Stream,
    Entry,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            OperationKind::Search => "search results",
            OperationKind::Stream => "feed stream",
            OperationKind::Entry => "entry",
        };
        f.write_str(what)
    }
}

/// A validated request against the API. Construct with `search`, `stream` or `entry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Search {
        query: String,
        count: u32,
        locale: Option<String>,
    },
    Stream {
        feed_id: String,
        count: u32,
    },
    Entry {
        entry_id: String,
    },
}

impl Operation {
    pub fn search(query: &str, count: u32, locale: Option<&str>) -> Result<Operation, FeedlyError> {
        require_nonempty(query, "The search query must not be empty.")?;
        require_positive(count)?;
        if let Some(locale) = locale {
            require_nonempty(locale, "The locale must not be empty when given.")?;
        }

        Ok(Operation::Search {
            query: query.into(),
            count,
            locale: locale.map(Into::into),
        })
    }

    pub fn stream(feed_id: &str, count: u32) -> Result<Operation, FeedlyError> {
        require_nonempty(feed_id, "The feed id must not be empty.")?;
        require_positive(count)?;

        Ok(Operation::Stream {
            feed_id: feed_id.into(),
            count,
        })
    }

    pub fn entry(entry_id: &str) -> Result<Operation, FeedlyError> {
        require_nonempty(entry_id, "The entry id must not be empty.")?;

        Ok(Operation::Entry {
            entry_id: entry_id.into(),
        })
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Search { .. } => OperationKind::Search,
            Operation::Stream { .. } => OperationKind::Stream,
            Operation::Entry { .. } => OperationKind::Entry,
        }
    }

    /// Builds the full request URL under `base`. User-supplied text is percent-encoded before
    /// it is substituted; a trailing slash on `base` is ignored.
    pub fn request_url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Operation::Search { query, count, locale } => {
                let mut url = format!("{}/v3/search/feeds?query={}&count={}", base, encode(query), count);
                if let Some(locale) = locale {
                    url.push_str("&locale=");
                    url.push_str(&encode(locale));
                }
                url
            }
            Operation::Stream { feed_id, count } => {
                format!("{}/v3/streams/contents?streamId={}&count={}", base, encode(feed_id), count)
            }
            Operation::Entry { entry_id } => {
                format!("{}/v3/entries/{}", base, encode(entry_id))
            }
        }
    }
}

/// Escapes everything except ASCII alphanumerics and `-._~`, so `/` and `&` never survive into
/// the query or path.
pub fn encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

fn require_nonempty(value: &str, msg: &str) -> Result<(), FeedlyError> {
    if value.is_empty() {
        return Err(FeedlyError::usage(msg));
    }
    Ok(())
}

fn require_positive(count: u32) -> Result<(), FeedlyError> {
    if count == 0 {
        return Err(FeedlyError::usage("The count must be a positive integer."));
    }
    Ok(())
}
