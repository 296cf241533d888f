//! Per-request console transcript.
//!
//! A [`RequestReport`] collects the lines for one request and writes them to
//! the console in a single emit when the request finishes, fails, or is
//! dropped part way through.

use std::fmt::{Display, Write as _};

use axum::http::HeaderMap;

use crate::console::sink::Console;
use crate::http::request::RequestSummary;

pub const START_MARKER: &str = "=== Incoming POST Request ===";
pub const END_MARKER: &str = "=== End of Request ===";

/// Transcript of a single POST request.
#[derive(Debug)]
pub struct RequestReport {
    console: Console,
    lines: String,
    flushed: bool,
}

impl RequestReport {
    /// Open a report with the start marker and the request metadata.
    pub fn begin(console: Console, summary: &RequestSummary) -> Self {
        let mut report = Self {
            console,
            lines: String::new(),
            flushed: false,
        };
        report.line(START_MARKER);
        report.line(format_args!("URL: {}", summary.url));
        report.line(format_args!("Method: {}", summary.method));
        report.line(format_args!("Remote Address: {}", summary.remote_display()));
        report.line(format_args!("Content-Length: {}", summary.content_length));
        report
    }

    /// One line per header value; repeated names produce one line each.
    pub fn headers(&mut self, headers: &HeaderMap) {
        self.line("");
        self.line("--- Headers ---");
        for name in headers.keys() {
            let display = canonical_header_name(name.as_str());
            for value in headers.get_all(name) {
                self.line(format_args!(
                    "{display}: {}",
                    String::from_utf8_lossy(value.as_bytes())
                ));
            }
        }
    }

    /// Record the buffered body as text.
    pub fn body(&mut self, body: &[u8]) {
        self.body_section();
        if body.is_empty() {
            self.line("Body is empty");
            return;
        }

        let text = String::from_utf8_lossy(body);
        self.line("Body content:");
        self.lines.push_str(&text);
        if !text.ends_with('\n') {
            self.lines.push('\n');
        }
    }

    /// Close the block normally and write it out.
    pub fn finish(mut self) {
        self.line(END_MARKER);
        self.line("");
        self.flush();
    }

    /// Close the block with the reason the body could not be logged.
    pub fn fail(mut self, reason: &dyn Display) {
        self.body_section();
        self.line(reason);
        self.line("");
        self.flush();
    }

    fn body_section(&mut self) {
        self.line("");
        self.line("--- Body ---");
    }

    fn line(&mut self, text: impl Display) {
        // Writing into a String cannot fail.
        let _ = writeln!(self.lines, "{text}");
    }

    fn flush(&mut self) {
        self.flushed = true;
        self.console.emit(&std::mem::take(&mut self.lines));
    }
}

impl Drop for RequestReport {
    fn drop(&mut self) {
        if !self.flushed {
            self.line("*** Request abandoned before completion ***");
            self.line("");
            self.flush();
        }
    }
}

/// Header name in `Word-Word` form, e.g. `x-custom` → `X-Custom`.
pub fn canonical_header_name(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Method};
    use std::net::SocketAddr;

    fn summary() -> RequestSummary {
        RequestSummary {
            url: "/hook?source=ci".to_string(),
            method: Method::POST,
            remote_addr: Some(SocketAddr::from(([127, 0, 0, 1], 50000))),
            content_length: 11,
        }
    }

    #[test]
    fn canonical_names() {
        assert_eq!(canonical_header_name("content-type"), "Content-Type");
        assert_eq!(canonical_header_name("x-custom"), "X-Custom");
        assert_eq!(canonical_header_name("www-AUTHENTICATE"), "Www-Authenticate");
        assert_eq!(canonical_header_name("dnt"), "Dnt");
    }

    #[test]
    fn full_block_layout() {
        let (console, sink) = Console::memory();
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/plain"));

        let mut report = RequestReport::begin(console, &summary());
        report.headers(&headers);
        report.body(b"hello world");
        report.finish();

        assert_eq!(
            sink.contents(),
            "=== Incoming POST Request ===\n\
             URL: /hook?source=ci\n\
             Method: POST\n\
             Remote Address: 127.0.0.1:50000\n\
             Content-Length: 11\n\
             \n\
             --- Headers ---\n\
             Content-Type: text/plain\n\
             \n\
             --- Body ---\n\
             Body content:\n\
             hello world\n\
             === End of Request ===\n\
             \n"
        );
    }

    #[test]
    fn repeated_header_gets_a_line_per_value() {
        let (console, sink) = Console::memory();
        let mut headers = HeaderMap::new();
        headers.append("x-custom", HeaderValue::from_static("a"));
        headers.append("x-custom", HeaderValue::from_static("b"));

        let mut report = RequestReport::begin(console, &summary());
        report.headers(&headers);
        report.body(b"");
        report.finish();

        let out = sink.contents();
        assert!(out.contains("X-Custom: a\n"));
        assert!(out.contains("X-Custom: b\n"));
        assert!(out.contains("Body is empty\n"));
    }

    #[test]
    fn nothing_is_written_until_the_block_closes() {
        let (console, sink) = Console::memory();
        let mut report = RequestReport::begin(console, &summary());
        report.headers(&HeaderMap::new());
        assert!(sink.contents().is_empty());

        report.fail(&"Error reading body: connection reset");
        let out = sink.contents();
        assert!(out.contains("Error reading body: connection reset\n"));
        assert!(!out.contains(END_MARKER));
    }

    #[test]
    fn dropped_report_still_flushes() {
        let (console, sink) = Console::memory();
        drop(RequestReport::begin(console, &summary()));

        let out = sink.contents();
        assert!(out.starts_with(START_MARKER));
        assert!(out.contains("abandoned before completion"));
    }

    #[test]
    fn non_utf8_body_is_shown_lossily() {
        let (console, sink) = Console::memory();
        let mut report = RequestReport::begin(console, &summary());
        report.body(&[b'o', b'k', 0xff]);
        report.finish();

        assert!(sink.contents().contains("ok\u{fffd}\n"));
    }
}
