//! Multipart body construction for the cover image upload endpoints.

use std::io::{self, Read, Write};
use uuid::Uuid;

/// Wrap a byte stream into a single-part multipart/form-data body under the
/// field name the cover upload endpoints expect. Returns the encoded body and
/// the Content-Type header value carrying the generated boundary.
pub(crate) fn multipart_attachment<R: Read>(mut attachment: R) -> io::Result<(Vec<u8>, String)> {
    let boundary = Uuid::new_v4().simple().to_string();

    let mut body = Vec::new();
    write!(body, "--{}\r\n", boundary)?;
    write!(
        body,
        "Content-Disposition: form-data; name=\"cover\"; filename=\"coverImage\"\r\n"
    )?;
    write!(body, "Content-Type: application/octet-stream\r\n\r\n")?;
    io::copy(&mut attachment, &mut body)?;
    write!(body, "\r\n--{}--\r\n", boundary)?;

    Ok((body, format!("multipart/form-data; boundary={}", boundary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_content_type_carries_the_boundary() {
        let (body, content_type) = multipart_attachment(Cursor::new(b"img".to_vec())).unwrap();

        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .expect("unexpected content type prefix");
        assert!(!boundary.is_empty());

        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with(&format!("--{}\r\n", boundary)));
        assert!(text.ends_with(&format!("\r\n--{}--\r\n", boundary)));
    }

    #[test]
    fn test_body_contains_the_cover_part() {
        let payload = b"\x89PNG fake image bytes";
        let (body, _) = multipart_attachment(Cursor::new(payload.to_vec())).unwrap();

        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("Content-Disposition: form-data; name=\"cover\"; filename=\"coverImage\""));
        assert!(text.contains("Content-Type: application/octet-stream"));

        // Payload sits between the part headers and the closing boundary
        let payload_pos = body
            .windows(payload.len())
            .position(|w| w == payload)
            .expect("payload missing from body");
        assert!(payload_pos > 0);
    }

    #[test]
    fn test_empty_stream_still_finalizes() {
        let (body, content_type) = multipart_attachment(Cursor::new(Vec::new())).unwrap();
        assert!(!body.is_empty());
        assert!(content_type.starts_with("multipart/form-data; boundary="));
    }
}
