//! Structured feed-document parsing (RSS and Atom).
//!
//! This protocol is deliberately permissive: real-world feeds disagree on
//! field names, so each entry field is taken from the first of several
//! known aliases, and an entry that cannot yield a title is still emitted
//! with a placeholder rather than dropped. At most [`MAX_ENTRIES`] entries
//! are extracted per payload.
//!
//! Field aliases, in precedence order:
//! - body: `description`, `summary`, `content:encoded`
//! - timestamp: `pubDate`, `published` (else the current time)
//! - source label: `source`, `author` (else a generic label)

use chrono::Utc;
use quick_xml::Reader;
use quick_xml::events::Event;
use url::Url;

use crate::error::SourceError;
use crate::models::Article;
use crate::normalize::{DEFAULT_SUMMARY_LEN, normalize};

/// Per-payload entry cap.
pub const MAX_ENTRIES: usize = 20;

/// Placeholder for entries whose title is missing or empty.
pub const PLACEHOLDER_TITLE: &str = "No title";

/// Source label for entries that carry neither a `source` nor an `author`.
const GENERIC_SOURCE_LABEL: &str = "RSS Feed";

/// Link used when an entry has none.
const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, Default)]
struct EntryFields {
    title: Option<String>,
    description: Option<String>,
    summary: Option<String>,
    content_encoded: Option<String>,
    link: Option<String>,
    pub_date: Option<String>,
    published: Option<String>,
    source: Option<String>,
    author: Option<String>,
}

/// Which entry child element text is currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    Summary,
    ContentEncoded,
    Link,
    PubDate,
    Published,
    Source,
    Author,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Field> {
        match name {
            b"title" => Some(Field::Title),
            b"description" => Some(Field::Description),
            b"summary" => Some(Field::Summary),
            b"content:encoded" => Some(Field::ContentEncoded),
            b"link" => Some(Field::Link),
            b"pubDate" => Some(Field::PubDate),
            b"published" => Some(Field::Published),
            b"source" => Some(Field::Source),
            b"author" => Some(Field::Author),
            _ => None,
        }
    }
}

impl EntryFields {
    fn append(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Summary => &mut self.summary,
            Field::ContentEncoded => &mut self.content_encoded,
            Field::Link => &mut self.link,
            Field::PubDate => &mut self.pub_date,
            Field::Published => &mut self.published,
            Field::Source => &mut self.source,
            Field::Author => &mut self.author,
        };
        match slot {
            Some(existing) => existing.push_str(text),
            None => *slot = Some(text.to_string()),
        }
    }

    fn into_article(self) -> Article {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

        let raw_body = self
            .description
            .or(self.summary)
            .or(self.content_encoded)
            .unwrap_or_default();

        let url = self
            .link
            .map(|l| l.trim().to_string())
            .filter(|l| Url::parse(l).is_ok())
            .unwrap_or_else(|| PLACEHOLDER_LINK.to_string());

        let published_at = self
            .pub_date
            .or(self.published)
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        let source = self
            .source
            .or(self.author)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| GENERIC_SOURCE_LABEL.to_string());

        Article {
            title,
            summary: normalize(&raw_body, DEFAULT_SUMMARY_LEN),
            source,
            published_at,
            url,
            url_to_image: None,
        }
    }
}

/// Parse a feed payload into articles.
///
/// Fails with [`SourceError::Malformed`] on broken XML or on a document
/// that yields zero entries; both advance the cascade identically.
pub fn parse_feed(xml: &str) -> Result<Vec<Article>, SourceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut articles: Vec<Article> = Vec::new();
    let mut entry: Option<EntryFields> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event() {
            Err(e) => {
                return Err(SourceError::Malformed(format!(
                    "XML error at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            Ok(Event::Eof) => break,
            Ok(Event::Start(start)) => match start.name().as_ref() {
                b"item" | b"entry" => {
                    entry = Some(EntryFields::default());
                    field = None;
                }
                name => {
                    field = if entry.is_some() {
                        Field::from_name(name)
                    } else {
                        None
                    };
                }
            },
            Ok(Event::Empty(empty)) => {
                // Atom-style <link href="..."/>.
                if empty.name().as_ref() == b"link" {
                    if let Some(fields) = entry.as_mut() {
                        if let Ok(Some(href)) = empty.try_get_attribute("href") {
                            if let Ok(value) = href.unescape_value() {
                                fields.append(Field::Link, &value);
                            }
                        }
                    }
                }
            }
            Ok(Event::Text(text)) => {
                if let (Some(fields), Some(field)) = (entry.as_mut(), field) {
                    if let Ok(decoded) = text.decode() {
                        if let Ok(value) = quick_xml::escape::unescape(&decoded) {
                            fields.append(field, &value);
                        }
                    }
                }
            }
            Ok(Event::CData(cdata)) => {
                if let (Some(fields), Some(field)) = (entry.as_mut(), field) {
                    let value = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                    fields.append(field, &value);
                }
            }
            Ok(Event::End(end)) => match end.name().as_ref() {
                b"item" | b"entry" => {
                    if let Some(fields) = entry.take() {
                        articles.push(fields.into_article());
                        if articles.len() >= MAX_ENTRIES {
                            break;
                        }
                    }
                    field = None;
                }
                _ => field = None,
            },
            Ok(_) => {}
        }
    }

    if articles.is_empty() {
        return Err(SourceError::Malformed(
            "feed document contains no entries".to_string(),
        ));
    }
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::PLACEHOLDER_SUMMARY;

    fn rss(items: &str) -> String {
        format!(
            "<?xml version=\"1.0\"?><rss version=\"2.0\"><channel><title>Wire</title>{items}</channel></rss>"
        )
    }

    #[test]
    fn test_parses_plain_rss_items() {
        let xml = rss(
            "<item>\
               <title>Markets rally</title>\
               <description>Stocks rose sharply today.</description>\
               <link>https://example.com/rally</link>\
               <pubDate>Tue, 06 May 2025 08:00:00 GMT</pubDate>\
               <source url=\"https://example.com\">Example Wire</source>\
             </item>\
             <item>\
               <title>Second story</title>\
               <description>More news.</description>\
               <link>https://example.com/second</link>\
               <pubDate>Tue, 06 May 2025 09:00:00 GMT</pubDate>\
               <author>Desk</author>\
             </item>",
        );

        let articles = parse_feed(&xml).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Markets rally");
        assert_eq!(articles[0].summary, "Stocks rose sharply today.");
        assert_eq!(articles[0].url, "https://example.com/rally");
        assert_eq!(articles[0].source, "Example Wire");
        assert_eq!(articles[1].source, "Desk");
    }

    #[test]
    fn test_cdata_description_is_normalized() {
        let xml = rss(
            "<item>\
               <title>With markup</title>\
               <description><![CDATA[<p>Bold <b>move</b>&nbsp;today.</p>]]></description>\
               <link>https://example.com/a</link>\
             </item>",
        );

        let articles = parse_feed(&xml).unwrap();
        assert_eq!(articles[0].summary, "Bold move today.");
    }

    #[test]
    fn test_missing_title_gets_placeholder_not_dropped() {
        let xml = rss(
            "<item>\
               <description>An untitled story.</description>\
               <link>https://example.com/untitled</link>\
             </item>",
        );

        let articles = parse_feed(&xml).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_body_alias_precedence() {
        let xml = rss(
            "<item><title>A</title><summary>From summary.</summary></item>\
             <item><title>B</title><content:encoded>From content.</content:encoded></item>\
             <item><title>C</title>\
               <description>From description.</description>\
               <summary>Ignored.</summary>\
             </item>",
        );

        let articles = parse_feed(&xml).unwrap();
        assert_eq!(articles[0].summary, "From summary.");
        assert_eq!(articles[1].summary, "From content.");
        assert_eq!(articles[2].summary, "From description.");
    }

    #[test]
    fn test_missing_body_yields_placeholder_summary() {
        let xml = rss("<item><title>Bare</title></item>");
        let articles = parse_feed(&xml).unwrap();
        assert_eq!(articles[0].summary, PLACEHOLDER_SUMMARY);
    }

    #[test]
    fn test_defaults_for_link_date_and_source() {
        let xml = rss("<item><title>Bare</title><description>x</description></item>");
        let articles = parse_feed(&xml).unwrap();
        assert_eq!(articles[0].url, "#");
        assert_eq!(articles[0].source, "RSS Feed");
        assert!(!articles[0].published_at.is_empty());
    }

    #[test]
    fn test_invalid_link_falls_back() {
        let xml = rss(
            "<item><title>Relative</title><description>x</description>\
             <link>/2025/05/story</link></item>",
        );
        let articles = parse_feed(&xml).unwrap();
        assert_eq!(articles[0].url, "#");
    }

    #[test]
    fn test_entry_cap_applies() {
        let items: String = (0..30)
            .map(|i| {
                format!(
                    "<item><title>Story {i}</title><description>Body {i}</description></item>"
                )
            })
            .collect();
        let articles = parse_feed(&rss(&items)).unwrap();
        assert_eq!(articles.len(), MAX_ENTRIES);
        assert_eq!(articles[0].title, "Story 0");
        assert_eq!(articles[19].title, "Story 19");
    }

    #[test]
    fn test_atom_entries_supported() {
        let xml = "<?xml version=\"1.0\"?>\
            <feed xmlns=\"http://www.w3.org/2005/Atom\">\
              <title>Wire</title>\
              <entry>\
                <title>Atom story</title>\
                <summary>Atom summary.</summary>\
                <link href=\"https://example.com/atom\"/>\
                <published>2025-05-06T08:00:00Z</published>\
                <author>Atom Desk</author>\
              </entry>\
            </feed>";

        let articles = parse_feed(xml).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Atom story");
        assert_eq!(articles[0].summary, "Atom summary.");
        assert_eq!(articles[0].url, "https://example.com/atom");
        assert_eq!(articles[0].published_at, "2025-05-06T08:00:00Z");
        assert_eq!(articles[0].source, "Atom Desk");
    }

    #[test]
    fn test_broken_xml_is_malformed() {
        let err = parse_feed("<rss><channel><item><title>Unclosed").unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn test_zero_entries_is_malformed() {
        let err = parse_feed(&rss("")).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
        let err = parse_feed("{\"not\": \"xml\"}").unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn test_long_body_is_summarized() {
        let body = format!("Lead sentence of the story. Second one. {}", "pad ".repeat(100));
        let xml = rss(&format!(
            "<item><title>Long</title><description>{body}</description></item>"
        ));
        let articles = parse_feed(&xml).unwrap();
        assert_eq!(articles[0].summary, "Lead sentence of the story. Second one.");
        assert!(articles[0].summary.chars().count() <= DEFAULT_SUMMARY_LEN);
    }
}
