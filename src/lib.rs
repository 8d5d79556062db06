pub mod config;
pub mod pipeline;
pub mod server;
pub mod summarize;
pub mod youtube;

use std::sync::LazyLock;

use regex::Regex;

/// One timed fragment of a video's caption track
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Caption track for a single video
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub video_id: String,
    pub language: String,
    pub captions: Vec<Caption>,
}

impl Transcript {
    /// Concatenate the caption text spans in order, dropping all timing data
    pub fn plain_text(&self) -> String {
        self.captions.iter().map(|c| c.text.as_str()).collect()
    }
}

// Recognized URL shapes: watch?v= (param anywhere in the query), embed/, v/,
// e/, shorts/, youtu.be short links, and older multi-segment paths.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:[^/\s]+/\S+/|(?:v|e(?:mbed)?|shorts)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})").unwrap()
});

/// Extract the 11-character video ID from a YouTube URL, or `None` if the
/// input matches no known URL shape. Bare IDs are not URLs and don't match.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE.captures(url).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=r2u4Z9jCC04"),
            Some("r2u4Z9jCC04".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_v_not_first_param() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?feature=shared&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/r2u4Z9jCC04"),
            Some("r2u4Z9jCC04".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_legacy_v_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/v/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_path_style_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/user/someone/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(extract_video_id("not a url"), None);
    }

    #[test]
    fn test_bare_id_is_not_a_url() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_id_shorter_than_eleven_chars() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=abc123"), None);
    }

    #[test]
    fn test_first_of_several_urls_wins() {
        let input = "https://youtu.be/aaaaaaaaaaa and https://youtu.be/bbbbbbbbbbb";
        assert_eq!(extract_video_id(input), Some("aaaaaaaaaaa".to_string()));
    }

    #[test]
    fn test_plain_text_concatenates_in_order() {
        let transcript = Transcript {
            video_id: "dQw4w9WgXcQ".to_string(),
            language: "en".to_string(),
            captions: vec![
                Caption {
                    text: "a".to_string(),
                    start: 0.08,
                    duration: 3.48,
                },
                Caption {
                    text: "b".to_string(),
                    start: 3.56,
                    duration: 2.1,
                },
            ],
        };
        assert_eq!(transcript.plain_text(), "ab");
    }

    #[test]
    fn test_plain_text_empty_track() {
        let transcript = Transcript {
            video_id: "dQw4w9WgXcQ".to_string(),
            language: "en".to_string(),
            captions: vec![],
        };
        assert_eq!(transcript.plain_text(), "");
    }
}
