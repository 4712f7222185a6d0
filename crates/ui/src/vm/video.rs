use url::Url;

/// Derives the embeddable player URL for a lesson's video.
///
/// Handles the two YouTube link shapes the catalog uses
/// (`youtube.com/watch?v=ID` and `youtu.be/ID`); anything else gets no
/// embed and falls back to the external link.
#[must_use]
pub fn youtube_embed_url(video_url: &Url) -> Option<String> {
    let host = video_url.host_str()?;

    let video_id = match host {
        "youtu.be" => video_url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned),
        "youtube.com" | "www.youtube.com" | "m.youtube.com" => video_url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned()),
        _ => None,
    }?;

    Some(format!("https://www.youtube.com/embed/{video_id}"))
}
