// File: src/query.rs
// Query-string access for page parameters (?feed=nyt&date=2017-03-01)
use std::borrow::Cow;

/// A parsed query string borrowing from its source. Values are kept raw
/// (still URL-encoded).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryString<'a> {
    pairs: Vec<(&'a str, Option<&'a str>)>,
}

impl<'a> QueryString<'a> {
    /// Parses the `location.search` part of a URL, with or without the
    /// leading `?`.
    pub fn parse(search: &'a str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);

        let pairs = query
            .split('&')
            .map(|pair| {
                // "a=1=2" keeps only "1", the text between the first two '='
                let mut halves = pair.split('=');
                let key = halves.next().unwrap_or_default();
                (key, halves.next())
            })
            .collect();

        Self { pairs }
    }

    /// Parses the query of a full URL: after the first `?`, before any `#`.
    pub fn from_url(url: &'a str) -> Self {
        match url.split_once('?') {
            Some((_, rest)) => {
                let search = rest.split_once('#').map_or(rest, |(q, _)| q);
                Self::parse(search)
            }
            None => Self::default(),
        }
    }

    /// Raw value of the first pair named `name`. A bare `name` without `=`
    /// still ends the search, with no value.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| *value)
    }

    pub fn get_or<'b>(&self, name: &str, default: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.get(name).unwrap_or(default)
    }

    /// Percent-decoded value, `+` read as a space. Falls back to the raw
    /// value when the decoded bytes are not UTF-8.
    pub fn get_decoded(&self, name: &str) -> Option<String> {
        let raw = self.get(name)?;
        let spaced = raw.replace('+', " ");
        let decoded = match urlencoding::decode(&spaced) {
            Ok(v) => v.into_owned(),
            Err(_) => raw.to_string(),
        };
        Some(decoded)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| *key == name)
    }

    /// All pairs in order, duplicates included.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + '_ {
        self.pairs.iter().copied()
    }
}

/// One-shot lookup: first value of `name` in `search`, or `default`.
pub fn get_query_param(search: &str, name: &str, default: Option<&str>) -> Option<String> {
    QueryString::parse(search)
        .get(name)
        .or(default)
        .map(str::to_string)
}

/// Decodes a single component without touching `+`.
pub fn decode_component(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let qs = QueryString::parse("a=1&b=2");
        assert_eq!(qs.get("a"), Some("1"));
        assert_eq!(qs.get("b"), Some("2"));
        assert_eq!(qs.get("c"), None);
        assert_eq!(qs.get_or("c", "x"), "x");
        assert_eq!(qs.get_or("b", "x"), "2");
    }

    #[test]
    fn test_leading_question_mark() {
        let qs = QueryString::parse("?feed=nyt");
        assert_eq!(qs.get("feed"), Some("nyt"));
    }

    #[test]
    fn test_first_match_wins() {
        let qs = QueryString::parse("id=1&id=2");
        assert_eq!(qs.get("id"), Some("1"));
        assert_eq!(qs.pairs().count(), 2);
    }

    #[test]
    fn test_values_stay_encoded() {
        let qs = QueryString::parse("title=hello%20world&q=a+b");
        assert_eq!(qs.get("title"), Some("hello%20world"));
        assert_eq!(qs.get_decoded("title").as_deref(), Some("hello world"));
        assert_eq!(qs.get_decoded("q").as_deref(), Some("a b"));
    }

    #[test]
    fn test_invalid_utf8_decodes_to_raw() {
        let qs = QueryString::parse("x=%FF");
        assert_eq!(qs.get_decoded("x").as_deref(), Some("%FF"));
    }

    #[test]
    fn test_second_equals_truncates_value() {
        let qs = QueryString::parse("expr=a=b&z=9");
        assert_eq!(qs.get("expr"), Some("a"));
    }

    #[test]
    fn test_bare_key_has_no_value() {
        let qs = QueryString::parse("debug&debug=1&mode=");
        assert!(qs.contains_key("debug"));
        assert_eq!(qs.get("debug"), None);
        assert_eq!(qs.get_or("debug", "off"), "off");
        assert_eq!(qs.get("mode"), Some(""));
    }

    #[test]
    fn test_empty_query() {
        let qs = QueryString::parse("");
        assert_eq!(qs.get("a"), None);
        assert_eq!(qs.get_or("a", "d"), "d");
    }

    #[test]
    fn test_from_url() {
        let qs = QueryString::from_url("http://host/viz/network.html?base=nyt|12&t=0.6#top");
        assert_eq!(qs.get("base"), Some("nyt|12"));
        assert_eq!(qs.get("t"), Some("0.6"));

        let none = QueryString::from_url("http://host/viz/network.html#a=1");
        assert_eq!(none.get("a"), None);
    }

    #[test]
    fn test_get_query_param() {
        assert_eq!(get_query_param("a=1&b=2", "b", None).as_deref(), Some("2"));
        assert_eq!(get_query_param("a=1&b=2", "c", Some("x")).as_deref(), Some("x"));
        assert_eq!(get_query_param("a=1&b=2", "c", None), None);
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("a%2Fb"), "a/b");
        assert_eq!(decode_component("a+b"), "a+b");
    }
}
