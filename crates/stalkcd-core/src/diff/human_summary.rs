//! Plain-text rendering of an annotated word diff.

use crate::diff::model::DiffSegment;

/// Render segments as one annotated line of text.
///
/// Unchanged text is copied verbatim, added text is wrapped as `{+text+}`
/// and removed text as `[-text-]`. A removed segment with a banner is
/// additionally framed as ` >>>BANNER>>> [-text-] <<< `.
///
/// `banner_for` receives the index of each removed segment.
pub fn render_annotated_summary<'a, F>(segments: &[DiffSegment], mut banner_for: F) -> String
where
    F: FnMut(usize) -> Option<&'a str>,
{
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            DiffSegment::Unchanged(text) => out.push_str(text),
            DiffSegment::Added(text) => {
                out.push_str("{+");
                out.push_str(text);
                out.push_str("+}");
            }
            DiffSegment::Removed(text) => match banner_for(i) {
                Some(banner) => {
                    out.push_str(&format!(" >>>{banner}>>> [-{text}-] <<< "));
                }
                None => {
                    out.push_str(&format!("[-{text}-]"));
                }
            },
        }
    }
    out
}
