//! Sample data for demo mode and the offline feed

use crate::models::{Post, SearchResult, Trend};

/// Sample timeline posts
pub fn demo_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            author_name: "Maya Chen".to_string(),
            author_handle: "maya".to_string(),
            author_avatar: "https://mention.earth/avatars/maya.png".to_string(),
            content: "Golden hour over the harbor tonight. #Photography #NightSky".to_string(),
            time: "2h ago".to_string(),
            reply_count: 12,
            repost_count: 4,
            like_count: 87,
            liked: false,
        },
        Post {
            id: "2".to_string(),
            author_name: "Jonas Berg".to_string(),
            author_handle: "jonasberg".to_string(),
            author_avatar: "https://mention.earth/avatars/jonas.png".to_string(),
            content: "The community garden plots are finally thawed. Who wants seedlings? #Gardening".to_string(),
            time: "4h ago".to_string(),
            reply_count: 31,
            repost_count: 9,
            like_count: 203,
            liked: false,
        },
        Post {
            id: "3".to_string(),
            author_name: "Priya Nair".to_string(),
            author_handle: "priya_n".to_string(),
            author_avatar: "https://mention.earth/avatars/priya.png".to_string(),
            content: "New mural going up on 5th street this weekend #StreetArt".to_string(),
            time: "6h ago".to_string(),
            reply_count: 5,
            repost_count: 18,
            like_count: 142,
            liked: false,
        },
        Post {
            id: "4".to_string(),
            author_name: "Sam Okafor".to_string(),
            author_handle: "samo".to_string(),
            author_avatar: "https://mention.earth/avatars/sam.png".to_string(),
            content: "Caught the comet through the scope last night. Thread with shots below.".to_string(),
            time: "9h ago".to_string(),
            reply_count: 44,
            repost_count: 61,
            like_count: 530,
            liked: false,
        },
        Post {
            id: "5".to_string(),
            author_name: "Lena Fischer".to_string(),
            author_handle: "lenaf".to_string(),
            author_avatar: "https://mention.earth/avatars/lena.png".to_string(),
            content: "Six hour #SlowCooking stew, worth every minute.".to_string(),
            time: "1d ago".to_string(),
            reply_count: 8,
            repost_count: 2,
            like_count: 64,
            liked: false,
        },
    ]
}

/// Sample search results
pub fn demo_search_results() -> Vec<SearchResult> {
    vec![
        SearchResult::new(
            "1",
            "Jane Smith",
            "https://via.placeholder.com/50",
            "This is a sample post",
            "2h ago",
        ),
        SearchResult::new(
            "2",
            "Bob Johnson",
            "https://via.placeholder.com/50",
            "Another example post",
            "4h ago",
        ),
        SearchResult::new(
            "3",
            "Ana Morales",
            "https://via.placeholder.com/50",
            "Posted an image from the coast",
            "5h ago",
        ),
        SearchResult::new(
            "4",
            "Chris Dole",
            "https://via.placeholder.com/50",
            "Short video of the storm rolling in",
            "7h ago",
        ),
    ]
}

/// Sample trends with pre-formatted display counts.
///
/// The "120K"-style strings are literals from sample data, not something the
/// normalizer computes.
pub fn demo_trends() -> Vec<Trend> {
    vec![
        Trend::new("1", "#Photography", "120K"),
        Trend::new("2", "#ClimateAction", "80K"),
        Trend::new("3", "#IndieMusic", "50K"),
        Trend::new("4", "#Gardening", "30K"),
        Trend::new("5", "#StreetArt", "20K"),
        Trend::new("6", "#Astronomy", "10K"),
        Trend::new("7", "#SlowCooking", "5K"),
        Trend::new("8", "#Birdwatching", "2K"),
        Trend::new("9", "#UrbanSketching", "1K"),
        Trend::new("10", "#NightSky", "500"),
    ]
}
