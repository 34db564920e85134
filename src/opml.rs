use crate::error::{Error, Result};
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// OpmlService provides methods for importing and exporting subscriptions
/// as OPML documents.
pub struct OpmlService {
    transport: Transport,
}

/// An OPML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "opml")]
pub struct Opml {
    #[serde(rename = "@version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Head>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

/// The head element of an OPML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Head {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expansion_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vert_scroll_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_right: Option<String>,
}

/// The body element of an OPML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(rename = "outline", default)]
    pub outlines: Vec<Outline>,
}

/// An outline element. Collections are outlines whose children are feed
/// outlines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    #[serde(rename = "@text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub outline_type: Option<String>,
    #[serde(rename = "@isComment", skip_serializing_if = "Option::is_none")]
    pub is_comment: Option<String>,
    #[serde(rename = "@isBreakpoint", skip_serializing_if = "Option::is_none")]
    pub is_breakpoint: Option<String>,
    #[serde(rename = "@created", skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(rename = "@category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "@xmlUrl", skip_serializing_if = "Option::is_none")]
    pub xml_url: Option<String>,
    #[serde(rename = "@htmlUrl", skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(rename = "@url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "@language", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "@title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "@version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "@description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    // Attribute fields must precede element children for serialization
    #[serde(rename = "outline", default, skip_serializing_if = "Vec::is_empty")]
    pub outlines: Vec<Outline>,
}

/// Response from [`OpmlService::export`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpmlExportResponse {
    pub opml: Opml,
}

impl OpmlService {
    pub(crate) fn new(transport: Transport) -> Self {
        OpmlService { transport }
    }

    /// Exports the user's subscriptions as an OPML document.
    pub fn export(&self) -> Result<(OpmlExportResponse, HttpResponse)> {
        let request = self.transport.get(&["opml"])?;
        let response = self.transport.execute(request)?;
        let opml: Opml =
            quick_xml::de::from_str(&response.text()).map_err(|source| Error::Xml {
                source,
                response: Some(response.clone()),
            })?;

        Ok((OpmlExportResponse { opml }, response))
    }

    /// Imports an OPML document into the user's subscriptions.
    pub fn import<R: Read>(&self, mut opml: R) -> Result<HttpResponse> {
        let mut body = Vec::new();
        opml.read_to_end(&mut body)?;

        let request = self
            .transport
            .post(&["opml"])?
            .header("Content-Type", "text/xml")
            .body(body);

        self.transport.execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<opml version="1.0">
    <head>
        <title>Alice subscriptions in feedly Cloud</title>
    </head>
    <body>
        <outline text="Tech" title="Tech">
            <outline type="rss" text="Ars Technica" title="Ars Technica" xmlUrl="http://feeds.arstechnica.com/arstechnica/index" htmlUrl="https://arstechnica.com"/>
            <outline type="rss" text="Hacker News" title="Hacker News" xmlUrl="https://news.ycombinator.com/rss" htmlUrl="https://news.ycombinator.com/"/>
        </outline>
    </body>
</opml>"#;

    #[test]
    fn test_opml_parse() {
        let opml: Opml = quick_xml::de::from_str(SAMPLE).unwrap();
        assert_eq!(opml.version.as_deref(), Some("1.0"));
        assert_eq!(
            opml.head.unwrap().title.as_deref(),
            Some("Alice subscriptions in feedly Cloud")
        );

        let outlines = opml.body.unwrap().outlines;
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].title.as_deref(), Some("Tech"));
        assert_eq!(outlines[0].outlines.len(), 2);
        assert_eq!(
            outlines[0].outlines[1].xml_url.as_deref(),
            Some("https://news.ycombinator.com/rss")
        );
    }

    #[test]
    fn test_opml_serialize_round_trip() {
        let opml: Opml = quick_xml::de::from_str(SAMPLE).unwrap();
        let xml = quick_xml::se::to_string(&opml).unwrap();
        let reparsed: Opml = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(opml, reparsed);
    }

    #[test]
    fn test_invalid_opml_is_an_error() {
        let result: std::result::Result<Opml, _> = quick_xml::de::from_str("<opml><body>");
        assert!(result.is_err());
    }
}
