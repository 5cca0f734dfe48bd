//! Post content segmentation
//!
//! Splits raw post text into plain-text runs and hashtag references so the
//! UI can style hashtags and wire them to their navigation route.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::SITE_URL;

/// `#` followed by one or more ASCII letters, digits, or underscores,
/// matched greedily and non-overlapping, left to right.
static HASHTAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[A-Za-z0-9_]+").expect("hashtag pattern is a valid regex")
});

/// A maximal run of either plain text or a single hashtag reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text run
    Text(String),
    /// Hashtag reference; `name` excludes the leading `#`
    Hashtag {
        /// Hashtag name, used as the navigation target
        name: String,
    },
}

impl Segment {
    /// The underlying text of the segment, exactly as it appeared in the
    /// input (hashtags include the leading `#`).
    pub fn raw(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Hashtag { name } => format!("#{name}"),
        }
    }
}

/// Split post content into an ordered sequence of segments.
///
/// Segmentation is total and order-preserving: every character of the input
/// is covered by exactly one segment, and concatenating the segments' raw
/// text reproduces the input exactly. Empty input yields an empty sequence.
pub fn segment(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for m in HASHTAG.find_iter(content) {
        if m.start() > cursor {
            segments.push(Segment::Text(content[cursor..m.start()].to_string()));
        }
        segments.push(Segment::Hashtag {
            name: m.as_str()[1..].to_string(),
        });
        cursor = m.end();
    }

    if cursor < content.len() {
        segments.push(Segment::Text(content[cursor..].to_string()));
    }

    segments
}

/// Navigation route for a hashtag segment
pub fn hashtag_route(name: &str) -> String {
    format!("{SITE_URL}/hashtag/{}", urlencoding::encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_text_and_hashtags() {
        let segments = segment("hello #world and #foo_2 bar");

        assert_eq!(
            segments,
            vec![
                Segment::Text("hello ".to_string()),
                Segment::Hashtag {
                    name: "world".to_string()
                },
                Segment::Text(" and ".to_string()),
                Segment::Hashtag {
                    name: "foo_2".to_string()
                },
                Segment::Text(" bar".to_string()),
            ]
        );
    }

    #[test]
    fn concatenation_reproduces_input() {
        for input in [
            "hello #world and #foo_2 bar",
            "#leading middle #trailing",
            "##double #a#b",
            "no tags at all",
            "a lone # is not a tag",
            "unicode ☂ before #tag",
        ] {
            let joined: String = segment(input).iter().map(Segment::raw).collect();
            assert_eq!(joined, input);
        }
    }

    #[test]
    fn plain_text_is_single_segment() {
        let segments = segment("just some words");
        assert_eq!(segments, vec![Segment::Text("just some words".to_string())]);
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn hashtag_stops_at_punctuation() {
        let segments = segment("#rust! yes");
        assert_eq!(
            segments,
            vec![
                Segment::Hashtag {
                    name: "rust".to_string()
                },
                Segment::Text("! yes".to_string()),
            ]
        );
    }

    #[test]
    fn route_encodes_name() {
        assert_eq!(hashtag_route("foo_2"), "https://mention.earth/hashtag/foo_2");
    }
}
